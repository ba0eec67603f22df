use super::ApplicationStateToClose;
use std::sync::Arc;

///
/// Must be called after the server stopped,
/// otherwise the publisher is still shared by services.
///
pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("closing notification publisher");
    match Arc::try_unwrap(state.notification_publisher) {
        Ok(notification_publisher) => notification_publisher.close().await,
        Err(_) => tracing::error!("cannot close notification publisher, it is still in use"),
    }

    tracing::info!("closing rabbitmq connection");
    state.rabbitmq_connection.close().await;

    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("starting shutdown");
}
