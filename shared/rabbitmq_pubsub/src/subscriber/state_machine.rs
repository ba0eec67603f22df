use super::{
    async_consumer::AsyncConsumer, channel_callback::SubscriberChannelCallback,
    RabbitmqSubscriberDeliveryCallback,
};
use crate::retry::retry;
use amqprs::{
    channel::{
        BasicCancelArguments, BasicConsumeArguments, Channel, ExchangeDeclareArguments,
        QueueBindArguments, QueueDeclareArguments,
    },
    connection::Connection,
};
use std::{sync::Arc, time::Duration};
use tokio::sync::{watch, Notify};

///
/// Everything needed to (re)create the subscription on a fresh channel
///
pub struct Subscription<Callback> {
    pub exchange_declare_args: ExchangeDeclareArguments,
    pub queue_declare_args: QueueDeclareArguments,
    pub queue_bind_args: QueueBindArguments,
    pub basic_consume_args: BasicConsumeArguments,
    pub consumer: AsyncConsumer<Callback>,
}

///
/// Declares exchange and queue, binds them and starts consuming.
///
/// ### Returns
/// consumer tag assigned by the server
///
pub async fn subscribe<Callback>(
    channel: &Channel,
    subscription: &Subscription<Callback>,
    cancelled: Arc<Notify>,
) -> Result<String, amqprs::error::Error>
where
    Callback: RabbitmqSubscriberDeliveryCallback + Send + Sync + 'static,
{
    channel
        .register_callback(SubscriberChannelCallback::new(cancelled))
        .await?;
    channel
        .exchange_declare(subscription.exchange_declare_args.clone())
        .await?;
    channel
        .queue_declare(subscription.queue_declare_args.clone())
        .await?;
    channel
        .queue_bind(subscription.queue_bind_args.clone())
        .await?;
    channel
        .basic_consume(
            subscription.consumer.clone(),
            subscription.basic_consume_args.clone(),
        )
        .await
}

pub struct StateMachine<Callback> {
    pub retry_interval: Duration,

    pub connection: Connection,
    pub connection_rx: watch::Receiver<Option<Connection>>,

    pub channel: Channel,
    pub consumer_tag: String,
    pub cancelled: Arc<Notify>,

    pub subscription: Subscription<Callback>,
}

enum State {
    Consuming,
    WaitingForConnection,
    Resubscribing,
    Finished,
}

impl<Callback> StateMachine<Callback>
where
    Callback: RabbitmqSubscriberDeliveryCallback + Send + Sync + 'static,
{
    #[tracing::instrument(name = "RabbitMQ Subscriber", target = "rabbitmq_pubsub::subscriber", skip_all)]
    pub async fn run(mut self, stop: Arc<Notify>) {
        tracing::info!("subscriber task started");

        tokio::select! {
            biased;

            _ = stop.notified() => {
                let args = BasicCancelArguments::new(&self.consumer_tag);
                match self.channel.basic_cancel(args).await {
                    Ok(_) => tracing::info!("consumer cancelled"),
                    Err(err) => tracing::warn!(%err, "cancelling consumer failed"),
                }
            }
            _ = self.keep_alive() => {}
        }

        match self.channel.clone().close().await {
            Ok(()) => tracing::info!("channel closed"),
            Err(err) => tracing::warn!(%err, "closing channel failed"),
        }

        tracing::info!("subscriber task finished");
    }

    async fn keep_alive(&mut self) {
        let mut state = State::Consuming;

        loop {
            state = match state {
                State::Consuming => {
                    tracing::info!("state: Consuming");
                    self.consuming().await
                }
                State::WaitingForConnection => {
                    tracing::info!("state: WaitingForConnection");
                    self.waiting_for_connection().await
                }
                State::Resubscribing => {
                    tracing::info!("state: Resubscribing");
                    self.resubscribing().await
                }
                State::Finished => return,
            };
        }
    }

    async fn consuming(&mut self) -> State {
        tokio::select! {
            biased;

            result = self.connection_rx.changed() => match result {
                Ok(()) => State::WaitingForConnection,
                Err(_) => {
                    tracing::error!("connection closed while subscriber is running");
                    State::Finished
                }
            },

            _ = self.cancelled.notified() => State::Resubscribing,
        }
    }

    async fn waiting_for_connection(&mut self) -> State {
        loop {
            if let Some(connection) = self.connection_rx.borrow_and_update().clone() {
                self.connection = connection;
                return State::Resubscribing;
            }

            if self.connection_rx.changed().await.is_err() {
                tracing::error!("connection closed while subscriber is waiting for it");
                return State::Finished;
            }
        }
    }

    async fn resubscribing(&mut self) -> State {
        if let Err(err) = self.channel.clone().close().await {
            tracing::debug!(%err, "closing old channel failed");
        }

        let connection = &self.connection;
        let subscription = &self.subscription;
        let cancelled = Arc::new(Notify::new());

        tokio::select! {
            biased;

            result = self.connection_rx.changed() => match result {
                Ok(()) => State::WaitingForConnection,
                Err(_) => State::Finished,
            },

            (channel, consumer_tag) = retry(self.retry_interval, "resubscribing", || {
                resubscribe(connection, subscription, Arc::clone(&cancelled))
            }) => {
                self.channel = channel;
                self.consumer_tag = consumer_tag;
                self.cancelled = cancelled;
                tracing::info!("subscription restored");
                State::Consuming
            }
        }
    }
}

async fn resubscribe<Callback>(
    connection: &Connection,
    subscription: &Subscription<Callback>,
    cancelled: Arc<Notify>,
) -> Result<(Channel, String), amqprs::error::Error>
where
    Callback: RabbitmqSubscriberDeliveryCallback + Send + Sync + 'static,
{
    let channel = connection.open_channel(None).await?;

    match subscribe(&channel, subscription, cancelled).await {
        Ok(consumer_tag) => Ok((channel, consumer_tag)),
        Err(err) => {
            let _ = channel.close().await;
            Err(err)
        }
    }
}
