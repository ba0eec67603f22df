#![allow(dead_code)]

use amqprs::{
    channel::{BasicPublishArguments, Channel},
    connection::{Connection, OpenConnectionArguments},
    BasicProperties,
};
use futures::{SinkExt, StreamExt};
use jwt_auth::test::create_jwt;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::{sync::Once, time::Duration};
use tokio::{net::TcpStream, time::sleep};
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use uuid::Uuid;

pub type TestWebSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("COURSE_NOTIFIER_WS_DELIVERY_BIND_ADDRESS").unwrap()
}

pub fn topic() -> String {
    std::env::var("COURSE_NOTIFIER_WS_DELIVERY_WEBSOCKET_BROADCAST_TOPIC").unwrap()
}

pub fn ws_url(ticket: &str) -> String {
    format!("ws://{}/ws/v1?ticket={}", address(), ticket)
}

pub async fn fetch_ticket(client: &Client) -> anyhow::Result<String> {
    let ticket_response = client
        .get(format!("http://{}/api/v1/ticket", address()))
        .bearer_auth(encode_jwt(Uuid::new_v4()))
        .send()
        .await?;
    assert_eq!(ticket_response.status(), StatusCode::OK);

    let bytes = ticket_response.bytes().await?;
    let json_body = serde_json::from_slice::<Value>(&bytes)?;
    let ticket = json_body
        .get("ticket")
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();

    Ok(ticket)
}

///
/// Opens a session and subscribes it to `topic`
///
pub async fn connect_subscribed(topic: &str) -> anyhow::Result<TestWebSocket> {
    let ticket = fetch_ticket(&Client::new()).await?;
    let (mut ws, _) = connect_async(ws_url(&ticket)).await?;

    let frame = serde_json::json!({ "type": "SUBSCRIBE", "topic": topic }).to_string();
    ws.send(Message::Text(frame)).await?;

    // server does not acknowledge subscriptions
    sleep(Duration::from_millis(200)).await;

    Ok(ws)
}

///
/// Waits for the first text or binary frame satisfying `predicate`,
/// frames left by other tests are skipped
///
pub async fn next_matching(
    ws: &mut TestWebSocket,
    predicate: impl Fn(&Message) -> bool,
) -> anyhow::Result<Message> {
    loop {
        let message = ws
            .next()
            .await
            .ok_or(anyhow::anyhow!("websocket closed"))??;
        match message {
            Message::Text(_) | Message::Binary(_) if predicate(&message) => return Ok(message),
            _ => continue,
        }
    }
}

pub async fn init_rabbitmq() -> (Connection, Channel) {
    let connection_string =
        std::env::var("COURSE_NOTIFIER_WS_DELIVERY_RABBITMQ_CONNECTION_STRING").unwrap();

    let args = OpenConnectionArguments::try_from(connection_string.as_str()).unwrap();
    let connection = Connection::open(&args).await.unwrap();
    let channel = connection.open_channel(None).await.unwrap();

    (connection, channel)
}

pub async fn publish(channel: &Channel, content: Vec<u8>) -> anyhow::Result<()> {
    let exchange =
        std::env::var("COURSE_NOTIFIER_WS_DELIVERY_RABBITMQ_NOTIFICATIONS_EXCHANGE_NAME")?;

    let args = BasicPublishArguments::new(&exchange, "");
    channel
        .basic_publish(BasicProperties::default(), content, args)
        .await?;

    Ok(())
}

///
/// Publishes over a short-lived connection, fails while broker is down
///
pub async fn publish_once(content: Vec<u8>) -> anyhow::Result<()> {
    let connection_string =
        std::env::var("COURSE_NOTIFIER_WS_DELIVERY_RABBITMQ_CONNECTION_STRING")?;

    let args = OpenConnectionArguments::try_from(connection_string.as_str())?;
    let connection = Connection::open(&args).await?;
    let channel = connection.open_channel(None).await?;

    publish(&channel, content).await?;

    channel.close().await?;
    connection.close().await?;

    Ok(())
}

fn encode_jwt(user_id: Uuid) -> String {
    let jwt_algorithms = std::env::var("COURSE_NOTIFIER_WS_DELIVERY_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("COURSE_NOTIFIER_WS_DELIVERY_JWT_TEST_ENCODE_KEY").unwrap();

    create_jwt(user_id, Some("alice"), &[], &jwt_algorithms, &jwt_key)
}
