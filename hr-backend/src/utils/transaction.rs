// src/utils/transaction.rs

//! トランザクション管理
//!
//! 複数の書き込みを一つの単位で実行し、どの経路で抜けても確定か巻き戻しを行います。

use crate::error::AppError;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, error, instrument, warn};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// トランザクション実行を抽象化するトレイト
pub trait TransactionManager {
    fn execute_in_transaction<F, R>(
        &self,
        operation: F,
    ) -> impl Future<Output = Result<R, AppError>> + Send
    where
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<R, AppError>>
            + Send
            + 'static,
        R: Send + 'static;
}

impl TransactionManager for DatabaseConnection {
    #[instrument(skip(self, operation), name = "database_transaction")]
    #[allow(clippy::manual_async_fn)]
    fn execute_in_transaction<F, R>(
        &self,
        operation: F,
    ) -> impl Future<Output = Result<R, AppError>> + Send
    where
        F: for<'c> FnOnce(&'c DatabaseTransaction) -> BoxFuture<'c, Result<R, AppError>>
            + Send
            + 'static,
        R: Send + 'static,
    {
        async move {
            let txn = self.begin().await.map_err(|e| {
                error!(error = %e, "Failed to begin transaction");
                AppError::InternalServerError("Failed to begin transaction".to_string())
            })?;

            match operation(&txn).await {
                Ok(value) => {
                    txn.commit().await.map_err(|e| {
                        error!(error = %e, "Failed to commit transaction");
                        AppError::InternalServerError("Failed to commit transaction".to_string())
                    })?;
                    debug!("Transaction committed");
                    Ok(value)
                }
                Err(app_error) => {
                    warn!(error = %app_error, "Transaction operation failed, rolling back");

                    if let Err(rollback_error) = txn.rollback().await {
                        error!(
                            original_error = %app_error,
                            rollback_error = %rollback_error,
                            "Failed to rollback transaction"
                        );
                        return Err(AppError::InternalServerError(
                            "Transaction failed and rollback also failed".to_string(),
                        ));
                    }

                    Err(app_error)
                }
            }
        }
    }
}
