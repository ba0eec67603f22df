mod common;
use common::*;

use bson::oid::ObjectId;
use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

async fn post(client: &Client, path: &str, jwt: &str, body: Value) -> reqwest::Response {
    client
        .post(format!("http://{}{}", address(), path))
        .bearer_auth(jwt)
        .header(CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}

async fn put(client: &Client, path: &str, jwt: &str, body: Value) -> reqwest::Response {
    client
        .put(format!("http://{}{}", address(), path))
        .bearer_auth(jwt)
        .header(CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap()
}

async fn get(client: &Client, path: &str, jwt: &str) -> reqwest::Response {
    client
        .get(format!("http://{}{}", address(), path))
        .bearer_auth(jwt)
        .send()
        .await
        .unwrap()
}

async fn delete(client: &Client, path: &str, jwt: &str) -> reqwest::Response {
    client
        .delete(format!("http://{}{}", address(), path))
        .bearer_auth(jwt)
        .send()
        .await
        .unwrap()
}

async fn body(response: reqwest::Response) -> Value {
    let bytes = response.bytes().await.unwrap();
    serde_json::from_slice::<Value>(&bytes).unwrap()
}

fn id_of(value: &Value) -> String {
    value.get("id").unwrap().as_str().unwrap().to_string()
}

#[tokio::test]
async fn course_with_author_lifecycle() {
    init_env();

    let client = Client::new();
    let editor = create_editor_jwt();

    let response = post(&client, "/api/v1/authors", &editor, json!({ "name": "Ada" })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let author_id = id_of(&body(response).await);

    let course = json!({
        "title": "Intro",
        "description": "First steps",
        "creation_date": "2024-05-01",
        "duration": 90,
        "author_ids": [author_id],
    });
    let response = post(&client, "/api/v1/courses", &editor, course).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let course = body(response).await;
    let course_id = id_of(&course);
    assert_eq!(course.get("title").unwrap(), "Intro");

    let response = get(&client, &format!("/api/v1/courses/{course_id}"), &editor).await;
    assert_eq!(response.status(), StatusCode::OK);
    let found = body(response).await;
    assert_eq!(found, course);

    let updated = json!({
        "title": "Intro to Rust",
        "creation_date": "2024-05-01",
        "duration": 120,
        "author_ids": [author_id],
    });
    let response = put(&client, &format!("/api/v1/courses/{course_id}"), &editor, updated).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body(response).await.get("duration").unwrap(), 120);

    // deleting author removes it from courses
    let response = delete(&client, &format!("/api/v1/authors/{author_id}"), &editor).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(&client, &format!("/api/v1/courses/{course_id}"), &editor).await;
    let found = body(response).await;
    assert!(found.get("author_ids").unwrap().as_array().unwrap().is_empty());

    let response = delete(&client, &format!("/api/v1/courses/{course_id}"), &editor).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = get(&client, &format!("/api/v1/courses/{course_id}"), &editor).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn course_with_not_existing_author() {
    init_env();

    let client = Client::new();
    let course = json!({
        "title": "Intro",
        "creation_date": "2024-05-01",
        "duration": 90,
        "author_ids": [ObjectId::new().to_hex()],
    });

    let response = post(&client, "/api/v1/courses", &create_editor_jwt(), course).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn course_with_blank_title() {
    init_env();

    let client = Client::new();
    let course = json!({
        "title": " ",
        "creation_date": "2024-05-01",
        "duration": 90,
    });

    let response = post(&client, "/api/v1/courses", &create_editor_jwt(), course).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn course_not_exist() {
    init_env();

    let client = Client::new();
    let editor = create_editor_jwt();

    let response = get(
        &client,
        &format!("/api/v1/courses/{}", ObjectId::new().to_hex()),
        &editor,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&client, "/api/v1/courses/not-an-id", &editor).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn viewer_cannot_edit_courses() {
    init_env();

    let client = Client::new();
    let viewer = create_viewer_jwt();

    let response = get(&client, "/api/v1/courses", &viewer).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post(&client, "/api/v1/authors", &viewer, json!({ "name": "Ada" })).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn editor_cannot_manage_users() {
    init_env();

    let client = Client::new();

    let response = get(&client, "/api/v1/users", &create_editor_jwt()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn user_with_role_lifecycle() {
    init_env();

    let client = Client::new();
    let admin = create_admin_jwt();
    let role_name = format!("EDITOR_{}", Uuid::new_v4().simple());
    let username = format!("user_{}", Uuid::new_v4().simple());

    let role = json!({ "name": role_name, "permissions": ["COURSE_VIEW", "COURSE_EDIT"] });
    let response = post(&client, "/api/v1/roles", &admin, role).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let role_id = id_of(&body(response).await);

    let user = json!({ "username": username, "password": "secret", "roles": [role_name] });
    let response = post(&client, "/api/v1/users", &admin, user.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created_user = body(response).await;
    let user_id = id_of(&created_user);
    assert!(created_user.get("password_hash").is_none());
    assert!(created_user.get("password").is_none());

    let response = post(&client, "/api/v1/users", &admin, user).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let renamed = json!({ "username": format!("{username}_renamed"), "roles": [] });
    let response = put(&client, &format!("/api/v1/users/{user_id}"), &admin, renamed).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(&client, &format!("/api/v1/users/{user_id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete(&client, &format!("/api/v1/users/{user_id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(&client, &format!("/api/v1/roles/{role_id}"), &admin).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn user_with_not_existing_role() {
    init_env();

    let client = Client::new();
    let user = json!({
        "username": format!("user_{}", Uuid::new_v4().simple()),
        "password": "secret",
        "roles": ["ROLE_THAT_DOES_NOT_EXIST"],
    });

    let response = post(&client, "/api/v1/users", &create_admin_jwt(), user).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn role_name_taken() {
    init_env();

    let client = Client::new();
    let admin = create_admin_jwt();
    let role = json!({ "name": format!("VIEWER_{}", Uuid::new_v4().simple()) });

    let response = post(&client, "/api/v1/roles", &admin, role.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let role_id = id_of(&body(response).await);

    let response = post(&client, "/api/v1/roles", &admin, role).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    delete(&client, &format!("/api/v1/roles/{role_id}"), &admin).await;
}

#[tokio::test]
async fn permissions_listed() {
    init_env();

    let client = Client::new();

    let response = get(&client, "/api/v1/permissions", &create_admin_jwt()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let permissions = body(response).await;
    assert_eq!(
        permissions,
        json!(["COURSE_VIEW", "COURSE_EDIT", "USER_MANAGE", "ROLE_MANAGE"])
    );
}
