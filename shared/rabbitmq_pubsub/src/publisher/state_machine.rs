use super::channel_callback::PublisherChannelCallback;
use crate::retry::retry;
use amqprs::{
    channel::{BasicPublishArguments, Channel, ExchangeDeclareArguments},
    connection::Connection,
    BasicProperties,
};
use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::sync::{mpsc, watch, Notify};

pub struct StateMachine {
    pub retry_interval: Duration,

    pub connection: Connection,
    pub connection_rx: watch::Receiver<Option<Connection>>,
    pub blocked_rx: watch::Receiver<bool>,

    pub channel: Channel,
    pub callback: PublisherChannelCallback,
    pub exchange_declare_args: ExchangeDeclareArguments,
    pub basic_properties: BasicProperties,

    pub messages_rx: mpsc::Receiver<Vec<u8>>,
    pub flow_rx: watch::Receiver<bool>,

    pub dropped: Arc<AtomicU64>,
}

enum State {
    Publishing,
    WaitingForConnection,
    RestoringChannel,
    Finished,
}

impl StateMachine {
    #[tracing::instrument(name = "RabbitMQ Publisher", target = "rabbitmq_pubsub::publisher", skip_all)]
    pub async fn run(mut self, stop: Arc<Notify>) {
        tracing::info!("publisher task started");

        tokio::select! {
            biased;

            _ = stop.notified() => {}
            _ = self.keep_alive() => {}
        }

        let unpublished = self.messages_rx.len();
        if unpublished > 0 {
            tracing::warn!(unpublished, "discarding messages waiting for publication");
            self.dropped.fetch_add(unpublished as u64, Ordering::Relaxed);
        }

        match self.channel.clone().close().await {
            Ok(()) => tracing::info!("channel closed"),
            Err(err) => tracing::warn!(%err, "closing channel failed"),
        }

        tracing::info!("publisher task finished");
    }

    async fn keep_alive(&mut self) {
        let mut state = State::Publishing;

        loop {
            state = match state {
                State::Publishing => {
                    tracing::debug!("state: Publishing");
                    self.publishing().await
                }
                State::WaitingForConnection => {
                    tracing::debug!("state: WaitingForConnection");
                    self.waiting_for_connection().await
                }
                State::RestoringChannel => {
                    tracing::debug!("state: RestoringChannel");
                    self.restoring_channel().await
                }
                State::Finished => return,
            };
        }
    }

    async fn publishing(&mut self) -> State {
        let mut flow = *self.flow_rx.borrow_and_update();
        let mut blocked = *self.blocked_rx.borrow_and_update();

        loop {
            tokio::select! {
                biased;

                result = self.connection_rx.changed() => {
                    return match result {
                        Ok(()) => State::WaitingForConnection,
                        Err(_) => {
                            tracing::error!("connection closed while publisher is running");
                            State::Finished
                        }
                    };
                }

                Ok(()) = self.flow_rx.changed() => {
                    flow = *self.flow_rx.borrow_and_update();
                }

                Ok(()) = self.blocked_rx.changed() => {
                    blocked = *self.blocked_rx.borrow_and_update();
                }

                message = self.messages_rx.recv() => {
                    let Some(content) = message else {
                        return State::Finished;
                    };

                    if !(flow && !blocked) {
                        self.drop_message("broker stopped accepting messages");
                        continue;
                    }

                    if !self.publish(content).await {
                        return State::RestoringChannel;
                    }
                }
            }
        }
    }

    async fn publish(&mut self, content: Vec<u8>) -> bool {
        let args = BasicPublishArguments::new(&self.exchange_declare_args.exchange, "");
        let result = self
            .channel
            .basic_publish(self.basic_properties.clone(), content, args)
            .await;

        match result {
            Ok(()) => {
                tracing::debug!("message published");
                true
            }
            Err(err) => {
                let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::warn!(%err, dropped, "basic publish failed, message dropped");
                false
            }
        }
    }

    async fn waiting_for_connection(&mut self) -> State {
        loop {
            if let Some(connection) = self.connection_rx.borrow_and_update().clone() {
                self.connection = connection;
                return State::RestoringChannel;
            }

            tokio::select! {
                biased;

                result = self.connection_rx.changed() => {
                    if result.is_err() {
                        tracing::error!("connection closed while publisher is waiting for it");
                        return State::Finished;
                    }
                }

                message = self.messages_rx.recv() => {
                    if message.is_none() {
                        return State::Finished;
                    }
                    self.drop_message("connection is down");
                }
            }
        }
    }

    async fn restoring_channel(&mut self) -> State {
        if let Err(err) = self.channel.clone().close().await {
            tracing::debug!(%err, "closing old channel failed");
        }

        let connection = &self.connection;
        let callback = &self.callback;
        let exchange_declare_args = &self.exchange_declare_args;

        let restore = retry(self.retry_interval, "restoring publisher channel", || {
            open_channel(connection, callback.clone(), exchange_declare_args.clone())
        });
        tokio::pin!(restore);

        let channel = loop {
            tokio::select! {
                biased;

                result = self.connection_rx.changed() => {
                    return match result {
                        Ok(()) => State::WaitingForConnection,
                        Err(_) => State::Finished,
                    };
                }

                channel = &mut restore => break channel,

                message = self.messages_rx.recv() => {
                    let Some(_) = message else {
                        return State::Finished;
                    };
                    let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                    tracing::warn!(dropped, reason = "channel is being restored", "message dropped");
                }
            }
        };

        self.callback.reset_flow();
        self.channel = channel;
        tracing::info!("publisher channel restored");

        State::Publishing
    }

    fn drop_message(&self, reason: &str) {
        let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::warn!(dropped, reason, "message dropped");
    }
}

async fn open_channel(
    connection: &Connection,
    callback: PublisherChannelCallback,
    exchange_declare_args: ExchangeDeclareArguments,
) -> Result<Channel, amqprs::error::Error> {
    let channel = connection.open_channel(None).await?;

    let prepared = async {
        channel.register_callback(callback).await?;
        channel.exchange_declare(exchange_declare_args).await
    }
    .await;

    match prepared {
        Ok(()) => Ok(channel),
        Err(err) => {
            let _ = channel.close().await;
            Err(err)
        }
    }
}
