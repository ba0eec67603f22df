use super::connection_callback::ConnectionCallback;
use crate::retry::retry;
use amqprs::connection::{Connection, OpenConnectionArguments};
use std::{sync::Arc, time::Duration};
use tokio::sync::{watch, Notify};

pub struct StateMachine {
    pub retry_interval: Duration,

    pub connection: Connection,
    pub connection_tx: watch::Sender<Option<Connection>>,

    pub open_connection_args: OpenConnectionArguments,
    pub callback: ConnectionCallback,

    pub blocked_tx: watch::Sender<bool>,
}

enum State {
    Open,
    Reopening,
    RegisteringCallback,
}

impl StateMachine {
    ///
    /// Keeps connection alive until `stop` is notified
    ///
    #[tracing::instrument(name = "RabbitMQ Connection", target = "rabbitmq_pubsub::connection", skip_all)]
    pub async fn run(mut self, stop: Arc<Notify>) {
        tracing::info!("keep alive started");

        tokio::select! {
            biased;

            _ = stop.notified() => {
                self.connection_tx.send_replace(None);
                match self.connection.clone().close().await {
                    Ok(()) => tracing::info!("connection closed"),
                    Err(err) => tracing::warn!(%err, "closing connection failed"),
                }
            }

            _ = self.keep_alive() => {}
        }

        tracing::info!("keep alive finished");
    }

    async fn keep_alive(&mut self) {
        let mut state = State::Open;

        loop {
            state = match state {
                State::Open => {
                    tracing::debug!("state: Open");
                    self.open().await
                }
                State::Reopening => {
                    tracing::debug!("state: Reopening");
                    self.reopening().await
                }
                State::RegisteringCallback => {
                    tracing::debug!("state: RegisteringCallback");
                    self.registering_callback().await
                }
            };
        }
    }

    async fn open(&mut self) -> State {
        self.connection.listen_network_io_failure().await;
        tracing::warn!("network io failure");

        // Users must stop using the connection before it's recreated
        self.connection_tx.send_replace(None);
        if let Err(err) = self.connection.clone().close().await {
            tracing::debug!(%err, "closing failed connection failed");
        }

        State::Reopening
    }

    async fn reopening(&mut self) -> State {
        let args = &self.open_connection_args;
        self.connection = retry(self.retry_interval, "reopening connection", || async move {
            Connection::open(args).await
        })
        .await;

        // A new connection starts unblocked
        self.blocked_tx.send_replace(false);

        State::RegisteringCallback
    }

    async fn registering_callback(&mut self) -> State {
        let connection = self.connection.clone();
        let callback = self.callback.clone();

        tokio::select! {
            _ = connection.listen_network_io_failure() => {
                tracing::warn!("network io failure while registering callback");
                State::Reopening
            }

            _ = retry(self.retry_interval, "registering connection callback", || {
                connection.register_callback(callback.clone())
            }) => {
                // Only now the connection is announced as usable
                self.connection_tx.send_replace(Some(self.connection.clone()));
                tracing::info!("connection restored");
                State::Open
            }
        }
    }
}
