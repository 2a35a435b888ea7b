// src/repository/user_repository.rs

use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use crate::domain::user_role::UserRole;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryFilter, Set};
use uuid::Uuid;

/// ユーザー作成時の入力値
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: UserRole,
}

#[derive(Debug)]
pub struct UserRepository {
    db: DbConn,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// ユーザーをIDで検索
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find_by_id(id).one(&self.db).await
    }

    /// ユーザーをメールアドレスで検索
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find()
            .filter(user_model::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// 一意性は users のユニークインデックスで担保する
    pub async fn create(&self, new_user: NewUser) -> Result<user_model::Model, DbErr> {
        let active = UserActiveModel {
            email: Set(new_user.email),
            username: Set(new_user.username),
            password_hash: Set(new_user.password_hash),
            full_name: Set(new_user.full_name),
            role: Set(new_user.role),
            is_active: Set(true),
            ..Default::default()
        };
        active.insert(&self.db).await
    }

    /// 既存ユーザーを有効な管理者に昇格させる
    pub async fn promote_to_admin(
        &self,
        user: user_model::Model,
    ) -> Result<user_model::Model, DbErr> {
        let mut active: UserActiveModel = user.into();
        active.role = Set(UserRole::Admin);
        active.is_active = Set(true);
        active.update(&self.db).await
    }
}
