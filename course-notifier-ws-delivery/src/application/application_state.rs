use super::ApplicationEnv;
use crate::{
    repository::TicketsRepositoryImpl,
    service::{
        broadcast_service::{BroadcastService, BroadcastServiceConfig, BroadcastServiceImpl},
        notifications_subscriber_service::{
            NotificationsSubscriberService, NotificationsSubscriberServiceConfig,
        },
        tickets_service::{TicketsService, TicketsServiceConfig, TicketsServiceImpl},
    },
};
use amqprs::connection::OpenConnectionArguments;
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use rabbitmq_pubsub::{RabbitmqConnection, RabbitmqConnectionConfig};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub broadcast_service: Arc<dyn BroadcastService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub rabbitmq_connection: RabbitmqConnection,
    pub notifications_subscriber_service: NotificationsSubscriberService,
    pub broadcast_service: Arc<dyn BroadcastService>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db).await?;
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("creating services");
    let config = TicketsServiceConfig {
        ticket_lifespan: env.websocket_ticket_lifespan,
    };
    let tickets_service = TicketsServiceImpl::new(config, tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    let config = BroadcastServiceConfig {
        ping_interval: env.websocket_ping_interval,
        topic: env.websocket_broadcast_topic.clone(),
        buffer_size: env.websocket_broadcast_buffer_size,
    };
    let broadcast_service = BroadcastServiceImpl::new(config);
    let broadcast_service: Arc<dyn BroadcastService> = Arc::new(broadcast_service);

    tracing::info!("connecting to rabbitmq");
    let config = RabbitmqConnectionConfig {
        retry_interval: env.rabbitmq_retry_interval,
    };
    let open_connection_args =
        OpenConnectionArguments::try_from(env.rabbitmq_connection_string.as_str())?;
    let rabbitmq_connection = RabbitmqConnection::new(config, open_connection_args).await?;

    let config = NotificationsSubscriberServiceConfig {
        exchange: env.rabbitmq_notifications_exchange_name.clone(),
        queue: env.rabbitmq_notifications_queue_name.clone(),
    };
    let notifications_subscriber_service = NotificationsSubscriberService::new(
        config,
        rabbitmq_connection.clone(),
        broadcast_service.clone(),
    )
    .await?;

    Ok((
        ApplicationState {
            tickets_service,
            broadcast_service: broadcast_service.clone(),
        },
        ApplicationStateToClose {
            db_client,
            rabbitmq_connection,
            notifications_subscriber_service,
            broadcast_service,
        },
    ))
}
