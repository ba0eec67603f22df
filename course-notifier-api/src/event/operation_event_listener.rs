use super::OperationEvent;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OperationEventListener: Send + Sync {
    ///
    /// Called once for every committed event.
    ///
    /// Returned error is logged, it never reaches
    /// the code that committed the transaction.
    ///
    async fn on_operation_event(&self, event: &OperationEvent) -> anyhow::Result<()>;
}
