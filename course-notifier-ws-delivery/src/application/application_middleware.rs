use super::ApplicationEnv;
use jwt_auth::JwtAuthLayer;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};

pub struct ApplicationMiddleware {
    pub auth: JwtAuthLayer,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(env: &ApplicationEnv) -> ApplicationMiddleware {
    let auth = JwtAuthLayer::new(env.jwt_key.clone(), env.jwt_algorithms.clone());

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware { auth, trace }
}
