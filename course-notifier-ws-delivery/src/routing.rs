use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    service::{broadcast_service::BroadcastService, tickets_service::TicketsService},
};
use axum::{
    extract::{ConnectInfo, Query, State, WebSocketUpgrade},
    response::Response,
    routing::get,
    Extension, Json, Router,
};
use jwt_auth::User;
use std::{net::SocketAddr, sync::Arc};

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/ticket", get(get_ticket))
        .route_layer(application_middleware.auth.clone())
        .route("/ws/v1", get(websocket_upgrade))
}

async fn get_ticket(
    Extension(user): Extension<User>,
    State(tickets_service): State<Arc<dyn TicketsService>>,
) -> Result<Json<output::WebSocketTicket>, Error> {
    let ticket = tickets_service.create_ticket(&user).await?;

    Ok(Json(ticket))
}

async fn websocket_upgrade(
    Query(ticket): Query<input::WebSocketTicket>,
    ConnectInfo(address): ConnectInfo<SocketAddr>,
    State(tickets_service): State<Arc<dyn TicketsService>>,
    State(broadcast_service): State<Arc<dyn BroadcastService>>,
    ws: WebSocketUpgrade,
) -> Result<Response, Error> {
    let ticket = tickets_service.consume_ticket(ticket).await?;
    let user_id = ticket.user_id;

    Ok(ws.on_upgrade(move |websocket| async move {
        broadcast_service
            .handle_client(user_id, address, websocket)
            .await
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::{
        broadcast_service::MockBroadcastService, tickets_service::MockTicketsService,
    };
    use axum::{
        body::Body,
        extract::connect_info::MockConnectInfo,
        http::{header::AUTHORIZATION, Request, StatusCode},
    };
    use jsonwebtoken::{Algorithm, DecodingKey};
    use jwt_auth::{test::create_jwt, JwtAuthLayer};
    use tower::ServiceExt;
    use tower_http::trace::TraceLayer;
    use uuid::Uuid;

    const SECRET: &str = "routing secret";

    fn create_router(tickets_service: MockTicketsService) -> Router {
        let middleware = ApplicationMiddleware {
            auth: JwtAuthLayer::new(
                DecodingKey::from_secret(SECRET.as_bytes()),
                vec![Algorithm::HS256],
            ),
            trace: TraceLayer::new_for_http(),
        };
        let state = ApplicationState {
            tickets_service: Arc::new(tickets_service),
            broadcast_service: Arc::new(MockBroadcastService::new()),
        };

        routing(&middleware)
            .with_state(state)
            .layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 1234))))
    }

    #[tokio::test]
    async fn get_ticket_issued_for_token_subject() {
        let user_id = Uuid::new_v4();
        let mut tickets_service = MockTicketsService::new();
        tickets_service
            .expect_create_ticket()
            .withf(move |user| user.id == user_id)
            .times(1)
            .returning(|_| {
                Ok(output::WebSocketTicket {
                    ticket: "issued ticket".to_string(),
                })
            });
        let jwt = create_jwt(user_id, Some("alice"), &[], "HS256", SECRET);

        let response = create_router(tickets_service)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/ticket")
                    .header(AUTHORIZATION, format!("Bearer {jwt}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(body.as_ref(), br#"{"ticket":"issued ticket"}"#);
    }

    #[tokio::test]
    async fn get_ticket_without_token() {
        let mut tickets_service = MockTicketsService::new();
        tickets_service.expect_create_ticket().never();

        let response = create_router(tickets_service)
            .oneshot(
                Request::builder()
                    .uri("/api/v1/ticket")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn websocket_upgrade_without_upgrade_headers() {
        let mut tickets_service = MockTicketsService::new();
        tickets_service.expect_consume_ticket().never();

        let response = create_router(tickets_service)
            .oneshot(
                Request::builder()
                    .uri("/ws/v1?ticket=ticket")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
