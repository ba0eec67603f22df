use super::{Error, Transaction};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionManager: Send + Sync {
    ///
    /// Starts new transaction.
    ///
    /// Every write that should be committed atomically together
    /// with after-commit hooks must use returned transaction.
    ///
    async fn begin(&self) -> Result<Transaction, Error>;
}
