use super::jwt_auth_future::JwtAuthFuture;
use crate::{dto::Claims, User};
use anyhow::anyhow;
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderValue},
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

const BEARER: &str = "Bearer ";

#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
}

impl<S> JwtAuthService<S> {
    pub fn new(inner: S, validation: Arc<Validation>, key: Arc<DecodingKey>) -> Self {
        Self {
            inner,
            validation,
            key,
        }
    }

    fn authenticate(&self, authorization_header: Option<&HeaderValue>) -> anyhow::Result<User> {
        let authorization_header =
            authorization_header.ok_or(anyhow!("missing Authorization header"))?;
        let authorization_value = authorization_header
            .to_str()
            .map_err(|_| anyhow!("illegal character in Authorization header"))?;
        let token = authorization_value
            .strip_prefix(BEARER)
            .ok_or(anyhow!("unsupported authorization type"))?;

        let token_data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|err| anyhow!("invalid jwt: {err}"))?;
        let claims = token_data.claims;

        Ok(User::new(
            claims.sub,
            claims.preferred_username,
            claims.realm_access.roles,
        ))
    }
}

impl<S> Service<Request> for JwtAuthService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = JwtAuthFuture<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        match self.authenticate(req.headers().get(AUTHORIZATION)) {
            Ok(user) => {
                let span = tracing::info_span!("user", id = %user.id);

                req.extensions_mut().insert(user);

                JwtAuthFuture::Authenticated {
                    inner: self.inner.call(req),
                    span,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "authentication failed");
                JwtAuthFuture::Unauthenticated
            }
        }
    }
}
