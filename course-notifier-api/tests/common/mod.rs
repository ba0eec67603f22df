#![allow(dead_code)]

use jwt_auth::test::create_jwt;
use std::sync::Once;
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("COURSE_NOTIFIER_API_BIND_ADDRESS").unwrap()
}

pub fn create_editor_jwt() -> String {
    encode_jwt(Some("alice"), &["COURSE_VIEW", "COURSE_EDIT"])
}

pub fn create_viewer_jwt() -> String {
    encode_jwt(Some("bob"), &["COURSE_VIEW"])
}

pub fn create_admin_jwt() -> String {
    encode_jwt(Some("admin"), &["USER_MANAGE", "ROLE_MANAGE"])
}

pub fn encode_jwt(username: Option<&str>, permissions: &[&str]) -> String {
    let jwt_algorithms = std::env::var("COURSE_NOTIFIER_API_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("COURSE_NOTIFIER_API_JWT_TEST_ENCODE_KEY").unwrap();

    create_jwt(
        Uuid::new_v4(),
        username,
        permissions,
        &jwt_algorithms,
        &jwt_key,
    )
}
