use super::ApplicationStateToClose;
use crate::service::broadcast_service::BroadcastService;
use std::sync::Arc;

pub async fn close(state: ApplicationStateToClose) {
    tracing::info!("closing notifications subscriber");
    state.notifications_subscriber_service.close().await;

    tracing::info!("closing rabbitmq connection");
    state.rabbitmq_connection.close().await;

    tracing::info!("closing connection with database");
    state.db_client.shutdown().await;
}

///
/// Resolves on Ctrl+C or SIGTERM.
///
/// Open WebSocket sessions are upgraded connections the server
/// does not wait for, so they are closed here before the server drains.
///
pub async fn shutdown_signal(broadcast_service: Arc<dyn BroadcastService>) {
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
    broadcast_service.close_sessions();
}
