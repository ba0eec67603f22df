use super::{
    async_consumer::AsyncConsumer,
    state_machine::{subscribe, StateMachine, Subscription},
    RabbitmqSubscriberConfig, RabbitmqSubscriberDeliveryCallback,
};
use crate::{exchange::fanout_exchange_args, RabbitmqConnection};
use amqprs::channel::{BasicConsumeArguments, QueueBindArguments, QueueDeclareArguments};
use std::sync::Arc;
use tokio::{sync::Notify, task::JoinHandle};

///
/// Standing subscription to a fanout exchange.
///
/// Queue, binding and consumer are recreated whenever connection
/// is restored. Messages published in the meantime are lost.
///
pub struct RabbitmqSubscriber {
    task_handle: JoinHandle<()>,
    close_notify: Arc<Notify>,
}

impl RabbitmqSubscriber {
    #[tracing::instrument(name = "RabbitMQ Subscriber", target = "rabbitmq_pubsub::subscriber", skip_all)]
    pub async fn new<Callback>(
        rabbitmq_connection: RabbitmqConnection,
        config: RabbitmqSubscriberConfig,
        callback: Callback,
    ) -> anyhow::Result<Self>
    where
        Callback: RabbitmqSubscriberDeliveryCallback + Send + Sync + 'static,
    {
        tracing::info!(
            exchange = config.exchange,
            queue = config.queue,
            "starting subscriber"
        );

        let mut connection_rx = rabbitmq_connection.connection();
        let Some(connection) = connection_rx.borrow_and_update().clone() else {
            anyhow::bail!("connection failed before creating subscriber");
        };

        let mut queue_declare_args = QueueDeclareArguments::new(&config.queue)
            .durable(false)
            .exclusive(true)
            .auto_delete(true)
            .finish();
        queue_declare_args.no_wait(false);

        let mut queue_bind_args = QueueBindArguments::new(&config.queue, &config.exchange, "");
        queue_bind_args.no_wait = false;

        let mut basic_consume_args = BasicConsumeArguments::new(&config.queue, "")
            .auto_ack(true)
            .exclusive(true)
            .finish();
        basic_consume_args.no_wait = false;

        let subscription = Subscription {
            exchange_declare_args: fanout_exchange_args(&config.exchange),
            queue_declare_args,
            queue_bind_args,
            basic_consume_args,
            consumer: AsyncConsumer::new(Arc::new(callback)),
        };

        let channel = connection.open_channel(None).await?;
        let cancelled = Arc::new(Notify::new());
        let consumer_tag = subscribe(&channel, &subscription, Arc::clone(&cancelled)).await?;

        let state_machine = StateMachine {
            retry_interval: rabbitmq_connection.config().retry_interval,
            connection,
            connection_rx,
            channel,
            consumer_tag,
            cancelled,
            subscription,
        };

        let close_notify = Arc::new(Notify::new());
        let task_handle = tokio::spawn(state_machine.run(Arc::clone(&close_notify)));

        tracing::info!("subscriber started");

        Ok(Self {
            task_handle,
            close_notify,
        })
    }

    #[tracing::instrument(name = "RabbitMQ Subscriber", target = "rabbitmq_pubsub::subscriber", skip_all)]
    pub async fn close(self) {
        tracing::info!("closing subscriber");

        self.close_notify.notify_one();
        if let Err(err) = self.task_handle.await {
            tracing::error!(%err, "subscriber task failed");
        }

        tracing::info!("subscriber closed");
    }
}
