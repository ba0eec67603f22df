#![cfg(feature = "test_utils")]
//!
//! Helpers issuing JWTs in tests of services using [crate::JwtAuthLayer]
//!

use crate::util::parse_jwt_algorithms;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;
use uuid::Uuid;

pub fn create_jwt(
    user_id: Uuid,
    username: Option<&str>,
    permissions: &[&str],
    jwt_algorithms: &str,
    jwt_key: &str,
) -> String {
    let claims = json!({
        "sub": user_id,
        "exp": 253402210800_i64,
        "preferred_username": username,
        "realm_access": {
            "roles": permissions,
        }
    });

    let jwt_algorithms = parse_jwt_algorithms(jwt_algorithms).unwrap();
    let jwt_algorithm = jwt_algorithms[0];
    let jwt_key = encoding_key(&jwt_algorithm, jwt_key);

    jsonwebtoken::encode(&Header::new(jwt_algorithm), &claims, &jwt_key).unwrap()
}

fn encoding_key(jwt_algorithm: &Algorithm, key: &str) -> EncodingKey {
    let bytes = key.as_bytes();

    match jwt_algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => EncodingKey::from_secret(bytes),
        Algorithm::ES256 | Algorithm::ES384 => EncodingKey::from_ec_pem(bytes).unwrap(),
        Algorithm::EdDSA => EncodingKey::from_ed_pem(bytes).unwrap(),
        _ => EncodingKey::from_rsa_pem(bytes).unwrap(),
    }
}
