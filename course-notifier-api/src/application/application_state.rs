use super::ApplicationEnv;
use crate::{
    event::{DomainEventPublisher, OperationEventListener},
    repository::{
        AuthorsRepositoryImpl, CoursesRepositoryImpl, RolesRepositoryImpl,
        TransactionManagerImpl, UsersRepositoryImpl,
    },
    service::{
        authors_service::{AuthorsService, AuthorsServiceImpl},
        courses_service::{CoursesService, CoursesServiceImpl},
        notification_relay::{
            NotificationRelay, NotificationRelayConfig, RabbitmqNotificationPublisher,
        },
        roles_service::{RolesService, RolesServiceImpl},
        users_service::{UsersService, UsersServiceImpl},
    },
};
use amqprs::connection::OpenConnectionArguments;
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use rabbitmq_pubsub::{RabbitmqConnection, RabbitmqConnectionConfig};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub courses_service: Arc<dyn CoursesService>,
    pub authors_service: Arc<dyn AuthorsService>,
    pub users_service: Arc<dyn UsersService>,
    pub roles_service: Arc<dyn RolesService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
    pub rabbitmq_connection: RabbitmqConnection,
    pub notification_publisher: Arc<RabbitmqNotificationPublisher>,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let courses_repository = Arc::new(CoursesRepositoryImpl::new(db.clone()).await?);
    let authors_repository = Arc::new(AuthorsRepositoryImpl::new(db.clone()).await?);
    let users_repository = Arc::new(UsersRepositoryImpl::new(db.clone()).await?);
    let roles_repository = Arc::new(RolesRepositoryImpl::new(db).await?);
    let transaction_manager = Arc::new(TransactionManagerImpl::new(
        db_client.clone(),
        env.db_transactions_enabled,
    ));

    tracing::info!("connecting to rabbitmq");
    let config = RabbitmqConnectionConfig {
        retry_interval: env.rabbitmq_retry_interval,
    };
    let open_connection_args =
        OpenConnectionArguments::try_from(env.rabbitmq_connection_string.as_str())?;
    let rabbitmq_connection = RabbitmqConnection::new(config, open_connection_args).await?;

    tracing::info!("creating notification relay");
    let config = NotificationRelayConfig {
        exchange: env.rabbitmq_notifications_exchange_name.clone(),
        queue_capacity: env.notifications_queue_capacity,
    };
    let notification_publisher =
        RabbitmqNotificationPublisher::new(&config, rabbitmq_connection.clone()).await?;
    let notification_publisher = Arc::new(notification_publisher);

    let notification_relay: Arc<dyn OperationEventListener> =
        Arc::new(NotificationRelay::new(notification_publisher.clone()));
    let event_publisher = Arc::new(DomainEventPublisher::new(vec![notification_relay]));

    tracing::info!("creating services");
    let courses_service = CoursesServiceImpl::new(
        transaction_manager.clone(),
        courses_repository,
        authors_repository.clone(),
        event_publisher.clone(),
    );
    let authors_service = AuthorsServiceImpl::new(
        transaction_manager.clone(),
        authors_repository,
        event_publisher.clone(),
    );
    let users_service = UsersServiceImpl::new(
        transaction_manager,
        users_repository,
        roles_repository.clone(),
        event_publisher,
    );
    let roles_service = RolesServiceImpl::new(roles_repository);

    Ok((
        ApplicationState {
            courses_service: Arc::new(courses_service),
            authors_service: Arc::new(authors_service),
            users_service: Arc::new(users_service),
            roles_service: Arc::new(roles_service),
        },
        ApplicationStateToClose {
            db_client,
            rabbitmq_connection,
            notification_publisher,
        },
    ))
}
