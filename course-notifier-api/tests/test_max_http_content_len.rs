mod common;
use common::*;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};

#[tokio::test]
async fn max_content_length_http() {
    init_env();

    let max_content_len: usize = std::env::var("COURSE_NOTIFIER_API_MAX_HTTP_CONTENT_LEN")
        .unwrap()
        .parse()
        .unwrap();

    // rejected because of its size before it's parsed
    let content = "0".repeat(max_content_len + 1);

    let response = Client::new()
        .post(format!("http://{}/api/v1/courses", address()))
        .bearer_auth(create_editor_jwt())
        .header(CONTENT_TYPE, "application/json")
        .body(content)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
