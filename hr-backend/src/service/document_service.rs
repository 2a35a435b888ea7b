// src/service/document_service.rs
use crate::api::dto::document_dto::{
    CreateDocumentRequest, DocumentResponse, UpdateDocumentRequest,
};
use crate::domain::document_model::{self, ActiveModel as DocumentActiveModel};
use crate::domain::document_status::DocumentStatus;
use crate::domain::user_model::UserClaims;
use crate::error::AppResult;
use crate::repository::document_repository::DocumentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::utils::error_helper::{not_found_error, validation_error};
use crate::utils::permission::{AccessPolicy, Action, Resource};
use chrono::{NaiveDate, Utc};
use sea_orm::Set;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// 書類メタデータの管理（ファイル本体は外部ストレージ）
pub struct DocumentService {
    repo: Arc<DocumentRepository>,
    employee_repo: Arc<EmployeeRepository>,
}

impl DocumentService {
    pub fn new(repo: Arc<DocumentRepository>, employee_repo: Arc<EmployeeRepository>) -> Self {
        Self {
            repo,
            employee_repo,
        }
    }

    pub async fn create_document(
        &self,
        actor: &UserClaims,
        payload: CreateDocumentRequest,
    ) -> AppResult<DocumentResponse> {
        AccessPolicy::ensure(actor, Resource::Document, Action::Create)?;

        if !self.employee_repo.exists(payload.employee_id).await? {
            return Err(validation_error(
                "employee_id",
                &format!("Employee {} does not exist", payload.employee_id),
            ));
        }

        let mut active = DocumentActiveModel {
            employee_id: Set(payload.employee_id),
            title: Set(payload.title),
            description: Set(payload.description),
            document_type: Set(payload.document_type),
            file_path: Set(payload.file_path),
            file_name: Set(payload.file_name),
            file_size: Set(payload.file_size),
            mime_type: Set(payload.mime_type),
            expiry_date: Set(payload.expiry_date),
            archived_date: Set(None),
            tags: Set(payload.tags),
            ..Default::default()
        };
        if let Some(version) = payload.version {
            active.version = Set(version);
        }

        let document = self.repo.create(active).await?;
        info!(
            document_id = %document.id,
            employee_id = %document.employee_id,
            file_name = %document.file_name,
            "Document registered"
        );
        Ok(DocumentResponse::from_model(document, today()))
    }

    pub async fn get_document(&self, id: Uuid) -> AppResult<DocumentResponse> {
        Ok(DocumentResponse::from_model(self.find(id).await?, today()))
    }

    pub async fn list_documents(
        &self,
        employee_id: Option<Uuid>,
    ) -> AppResult<Vec<DocumentResponse>> {
        let today = today();
        let documents = self.repo.find_all(employee_id).await?;
        Ok(documents
            .into_iter()
            .map(|document| DocumentResponse::from_model(document, today))
            .collect())
    }

    pub async fn update_document(
        &self,
        actor: &UserClaims,
        id: Uuid,
        payload: UpdateDocumentRequest,
    ) -> AppResult<DocumentResponse> {
        AccessPolicy::ensure(actor, Resource::Document, Action::Update)?;

        let document = self.find(id).await?;
        let today = today();
        let expiry_date = payload.expiry_date.or(document.expiry_date);
        let current = document.status.effective(expiry_date, today);

        let mut active: DocumentActiveModel = document.into();
        if let Some(next) = payload.status.filter(|next| *next != current) {
            ensure_transition(current, next)?;
            active.status = Set(next);
            if next == DocumentStatus::Archived {
                active.archived_date = Set(Some(Utc::now()));
            }
        }

        if let Some(title) = payload.title {
            active.title = Set(title);
        }
        if let Some(description) = payload.description {
            active.description = Set(Some(description));
        }
        if let Some(document_type) = payload.document_type {
            active.document_type = Set(document_type);
        }
        if let Some(file_path) = payload.file_path {
            active.file_path = Set(file_path);
        }
        if let Some(file_name) = payload.file_name {
            active.file_name = Set(file_name);
        }
        if let Some(file_size) = payload.file_size {
            active.file_size = Set(Some(file_size));
        }
        if let Some(mime_type) = payload.mime_type {
            active.mime_type = Set(Some(mime_type));
        }
        active.expiry_date = Set(expiry_date);
        if let Some(tags) = payload.tags {
            active.tags = Set(Some(tags));
        }
        if let Some(version) = payload.version {
            active.version = Set(version);
        }

        let updated = self.repo.update(active).await?;
        info!(
            document_id = %updated.id,
            status = %updated.status,
            updated_by = %actor.user_id,
            "Document updated"
        );
        Ok(DocumentResponse::from_model(updated, today))
    }

    /// アーカイブ済みの書類は再度アーカイブできない
    pub async fn archive_document(
        &self,
        actor: &UserClaims,
        id: Uuid,
    ) -> AppResult<DocumentResponse> {
        AccessPolicy::ensure(actor, Resource::Document, Action::Update)?;

        let document = self.find(id).await?;
        let today = today();
        ensure_transition(document.effective_status(today), DocumentStatus::Archived)?;

        let mut active: DocumentActiveModel = document.into();
        active.status = Set(DocumentStatus::Archived);
        active.archived_date = Set(Some(Utc::now()));

        let updated = self.repo.update(active).await?;
        info!(document_id = %updated.id, user_id = %actor.user_id, "Document archived");
        Ok(DocumentResponse::from_model(updated, today))
    }

    async fn find(&self, id: Uuid) -> AppResult<document_model::Model> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Document", id))
    }
}

fn ensure_transition(current: DocumentStatus, next: DocumentStatus) -> AppResult<()> {
    if !current.can_transition_to(next) {
        return Err(validation_error(
            "status",
            &format!("Cannot change document from {} to {}", current, next),
        ));
    }
    Ok(())
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
