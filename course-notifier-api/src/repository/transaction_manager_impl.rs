use super::{Error, Transaction, TransactionManager};
use axum::async_trait;
use mongodb::Client;

pub struct TransactionManagerImpl {
    client: Client,
    transactions_enabled: bool,
}

impl TransactionManagerImpl {
    pub fn new(client: Client, transactions_enabled: bool) -> Self {
        if !transactions_enabled {
            tracing::warn!("database transactions disabled, writes commit one by one");
        }

        Self {
            client,
            transactions_enabled,
        }
    }
}

#[async_trait]
impl TransactionManager for TransactionManagerImpl {
    async fn begin(&self) -> Result<Transaction, Error> {
        if !self.transactions_enabled {
            return Ok(Transaction::new(None));
        }

        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;

        Ok(Transaction::new(Some(session)))
    }
}
