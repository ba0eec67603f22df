use super::{
    channel_callback::PublisherChannelCallback, state_machine::StateMachine, PublishError,
    RabbitmqPublisherConfig,
};
use crate::{exchange::fanout_exchange_args, RabbitmqConnection};
use amqprs::BasicProperties;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use tokio::{
    sync::{mpsc, watch, Notify},
    task::JoinHandle,
};

///
/// Fire-and-forget publisher.
///
/// [Self::publish] only puts the message into a bounded queue.
/// A background task drains the queue and publishes to the exchange,
/// so callers never wait for the broker. A message is lost when
///  - the queue is full at the moment of [Self::publish]
///  - `basic.publish` fails
///  - it leaves the queue while the connection is down, the channel is
///    being restored or the broker blocks publishing
///  - the publisher is closed before the message leaves the queue
///
pub struct RabbitmqPublisher {
    messages_tx: mpsc::Sender<Vec<u8>>,
    dropped: Arc<AtomicU64>,

    task_handle: JoinHandle<()>,
    close_notify: Arc<Notify>,
}

impl RabbitmqPublisher {
    #[tracing::instrument(name = "RabbitMQ Publisher", target = "rabbitmq_pubsub::publisher", skip_all)]
    pub async fn new(
        rabbitmq_connection: RabbitmqConnection,
        config: RabbitmqPublisherConfig,
    ) -> anyhow::Result<Self> {
        tracing::info!(exchange = config.exchange, "starting publisher");
        anyhow::ensure!(config.queue_capacity > 0, "queue capacity must be positive");

        let mut connection_rx = rabbitmq_connection.connection();
        let Some(connection) = connection_rx.borrow_and_update().clone() else {
            anyhow::bail!("connection failed before creating publisher");
        };

        let channel = connection.open_channel(None).await?;

        let (flow_tx, flow_rx) = watch::channel(true);
        let callback = PublisherChannelCallback::new(flow_tx);
        channel.register_callback(callback.clone()).await?;

        let exchange_declare_args = fanout_exchange_args(&config.exchange);
        channel.exchange_declare(exchange_declare_args.clone()).await?;

        let mut basic_properties = BasicProperties::default();
        if let Some(content_type) = &config.content_type {
            basic_properties.with_content_type(content_type);
        }

        let (messages_tx, messages_rx) = mpsc::channel(config.queue_capacity);
        let dropped = Arc::new(AtomicU64::new(0));

        let state_machine = StateMachine {
            retry_interval: rabbitmq_connection.config().retry_interval,
            connection,
            connection_rx,
            blocked_rx: rabbitmq_connection.blocked(),
            channel,
            callback,
            exchange_declare_args,
            basic_properties,
            messages_rx,
            flow_rx,
            dropped: Arc::clone(&dropped),
        };

        let close_notify = Arc::new(Notify::new());
        let task_handle = tokio::spawn(state_machine.run(Arc::clone(&close_notify)));

        tracing::info!("publisher started");

        Ok(Self {
            messages_tx,
            dropped,
            task_handle,
            close_notify,
        })
    }

    ///
    /// Queues message for publication without waiting.
    ///
    /// ### Errors
    /// - [PublishError::QueueFull] when too many messages wait for publication
    /// - [PublishError::Closed] when background task is gone
    ///
    pub fn publish(&self, content: Vec<u8>) -> Result<(), PublishError> {
        self.messages_tx.try_send(content).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => PublishError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => PublishError::Closed,
        })
    }

    /// Number of queued messages that failed to be published
    pub fn dropped_messages(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[tracing::instrument(name = "RabbitMQ Publisher", target = "rabbitmq_pubsub::publisher", skip_all)]
    pub async fn close(self) {
        tracing::info!("closing publisher");

        self.close_notify.notify_one();
        if let Err(err) = self.task_handle.await {
            tracing::error!(%err, "publisher task failed");
        }

        tracing::info!("publisher closed");
    }
}
