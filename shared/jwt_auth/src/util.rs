//!
//! Parsing of JWT settings read from the environment.
//!

use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use std::str::FromStr;

///
/// Parses comma separated list of algorithms, e.g. `RS256,RS384`
///
pub fn parse_jwt_algorithms(jwt_algorithms: &str) -> anyhow::Result<Vec<Algorithm>> {
    let algorithms = jwt_algorithms
        .split(',')
        .map(str::trim)
        .map(|algorithm| {
            Algorithm::from_str(algorithm)
                .map_err(|err| anyhow!("invalid algorithm '{algorithm}': {err}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    if algorithms.is_empty() {
        anyhow::bail!("at least one algorithm is required");
    }

    Ok(algorithms)
}

///
/// Builds decoding key for the algorithm family.
/// HMAC keys are taken as raw secrets, other keys must be PEM encoded.
///
pub fn parse_jwt_key(jwt_algorithm: &Algorithm, jwt_key: &str) -> anyhow::Result<DecodingKey> {
    let bytes = jwt_key.as_bytes();

    let key = match jwt_algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => DecodingKey::from_secret(bytes),
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(bytes)
            .map_err(|err| anyhow!("invalid ec pem key: {err}"))?,
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => DecodingKey::from_rsa_pem(bytes)
            .map_err(|err| anyhow!("invalid rsa pem key: {err}"))?,
        Algorithm::EdDSA => DecodingKey::from_ed_pem(bytes)
            .map_err(|err| anyhow!("invalid ed pem key: {err}"))?,
    };

    Ok(key)
}
