use super::{
    connection_callback::ConnectionCallback, state_machine::StateMachine,
    RabbitmqConnectionConfig,
};
use amqprs::connection::{Connection, OpenConnectionArguments};
use std::sync::Arc;
use tokio::{
    sync::{watch, Notify},
    task::JoinHandle,
};

///
/// Cheaply cloneable handle to the connection kept alive by a background task.
///
/// Publishers and subscribers observe [Self::connection] to learn
/// when the connection is lost (`None`) and when it's usable again.
///
#[derive(Clone)]
pub struct RabbitmqConnection {
    inner: Arc<Inner>,
}

struct Inner {
    config: RabbitmqConnectionConfig,

    connection_rx: watch::Receiver<Option<Connection>>,
    blocked_rx: watch::Receiver<bool>,

    keep_alive_handle: JoinHandle<()>,
    close_notify: Arc<Notify>,
}

impl RabbitmqConnection {
    #[tracing::instrument(name = "RabbitMQ Connection", target = "rabbitmq_pubsub::connection", skip_all)]
    pub async fn new(
        config: RabbitmqConnectionConfig,
        open_connection_args: OpenConnectionArguments,
    ) -> Result<Self, amqprs::error::Error> {
        tracing::info!("opening connection");
        let connection = Connection::open(&open_connection_args).await?;

        let (blocked_tx, blocked_rx) = watch::channel(false);
        let callback = ConnectionCallback::new(blocked_tx.clone());
        connection.register_callback(callback.clone()).await?;

        let (connection_tx, connection_rx) = watch::channel(Some(connection.clone()));
        let state_machine = StateMachine {
            retry_interval: config.retry_interval,
            connection,
            connection_tx,
            open_connection_args,
            callback,
            blocked_tx,
        };

        let close_notify = Arc::new(Notify::new());
        let keep_alive_handle = tokio::spawn(state_machine.run(Arc::clone(&close_notify)));

        tracing::info!("connection opened");

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                connection_rx,
                blocked_rx,
                keep_alive_handle,
                close_notify,
            }),
        })
    }

    ///
    /// Stops keep alive task and closes the connection.
    ///
    /// Publishers and subscribers must be closed first,
    /// otherwise the connection is left running and an error is logged.
    ///
    #[tracing::instrument(name = "RabbitMQ Connection", target = "rabbitmq_pubsub::connection", skip_all)]
    pub async fn close(self) {
        let Ok(inner) = Arc::try_unwrap(self.inner) else {
            tracing::error!("connection still in use, refusing to close");
            return;
        };

        inner.close_notify.notify_one();
        if let Err(err) = inner.keep_alive_handle.await {
            tracing::error!(%err, "keep alive task failed");
        }
    }

    pub fn config(&self) -> &RabbitmqConnectionConfig {
        &self.inner.config
    }

    pub fn connection(&self) -> watch::Receiver<Option<Connection>> {
        self.inner.connection_rx.clone()
    }

    pub fn blocked(&self) -> watch::Receiver<bool> {
        self.inner.blocked_rx.clone()
    }
}
