use super::{OperationEvent, OperationEventListener};
use crate::repository::Transaction;
use std::sync::Arc;

///
/// Process-local bus delivering [OperationEvent]s
/// to listeners once the transaction commits.
///
pub struct DomainEventPublisher {
    listeners: Arc<Vec<Arc<dyn OperationEventListener>>>,
}

impl DomainEventPublisher {
    pub fn new(listeners: Vec<Arc<dyn OperationEventListener>>) -> Self {
        Self {
            listeners: Arc::new(listeners),
        }
    }

    ///
    /// Schedules delivery of the event after successful commit
    /// of the transaction. Nothing is delivered when the transaction
    /// is rolled back or dropped.
    ///
    pub fn publish(&self, transaction: &mut Transaction, event: OperationEvent) {
        tracing::debug!(?event, "publishing operation event");

        let listeners = Arc::clone(&self.listeners);
        transaction.after_commit(move || async move {
            Self::deliver(&listeners, &event).await;
        });
    }

    async fn deliver(listeners: &[Arc<dyn OperationEventListener>], event: &OperationEvent) {
        for (idx, listener) in listeners.iter().enumerate() {
            if let Err(err) = listener.on_operation_event(event).await {
                tracing::error!(listener = idx, %err, "operation event listener failed");
            }
        }
    }
}
