pub mod config;
pub mod error;
pub mod models;

use std::sync::Arc;
use std::time::Instant;

use axum::body::{Body, Bytes};
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, HeaderMap, Request};
use axum::middleware::{from_fn, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use common_auth::{classify, BearerStatus};
use config::RctfIdentity;
use error::ApiError;
use models::{AuthData, RctfResponse, UserInfoData, KIND_GOOD_LOGIN, KIND_GOOD_USER_DATA};
use tracing::{info_span, Instrument};

pub const SERVICE_NAME: &str = "mock-rctf";
pub const LOGIN_PATH: &str = "/api/v1/auth/login";
pub const USER_INFO_PATH: &str = "/api/v1/users/me";

#[derive(Clone, Debug)]
pub struct AppState {
    pub identity: Arc<RctfIdentity>,
}

impl AppState {
    pub fn new(identity: RctfIdentity) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(LOGIN_PATH, post(login).layer(DefaultBodyLimit::disable()))
        .route(USER_INFO_PATH, get(user_info))
        .layer(from_fn(request_context))
        .with_state(state)
}

async fn login(State(state): State<AppState>, body: Bytes) -> Json<RctfResponse<AuthData>> {
    tracing::info!(
        event = "login",
        body = %String::from_utf8_lossy(&body),
        "handling rCTF login"
    );

    Json(RctfResponse::good(
        KIND_GOOD_LOGIN,
        AuthData {
            auth_token: state.identity.bearer_token.clone(),
        },
    ))
}

async fn user_info(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RctfResponse<UserInfoData>>, ApiError> {
    let status = bearer_status(&headers, &state.identity.bearer_token);
    tracing::info!(event = "user_info", bearer = %status, "handling rCTF /users/me");

    if !status.is_valid() {
        return Err(ApiError::InvalidAuth { status });
    }

    Ok(Json(RctfResponse::good(
        KIND_GOOD_USER_DATA,
        UserInfoData {
            name: state.identity.team_name.clone(),
            id: state.identity.team_id.clone(),
        },
    )))
}

/// Classify the request's `Authorization` header.
///
/// Non-UTF-8 bytes are decoded lossily, so an opaque header still splits
/// into fields and is classified rather than dropped.
pub fn bearer_status(headers: &HeaderMap, expected: &str) -> BearerStatus {
    let value = headers
        .get(header::AUTHORIZATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()));
    classify(value.as_deref(), expected)
}

async fn request_context(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = info_span!("http.request", method = %method, path = %path);
    let start = Instant::now();
    span.in_scope(|| tracing::info!(event = "request_start", method = %method, path = %path));
    let response = next.run(req).instrument(span.clone()).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    span.in_scope(|| {
        tracing::info!(
            event = "request_end",
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms
        )
    });

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    const TOKEN: &str = config::DEFAULT_BEARER_TOKEN;

    #[test]
    fn bearer_status_reads_authorization_header() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_status(&headers, TOKEN), BearerStatus::Unset);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {TOKEN}")).unwrap(),
        );
        assert_eq!(bearer_status(&headers, TOKEN), BearerStatus::Valid);
    }

    #[test]
    fn opaque_header_bytes_are_classified() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Bearer t\xe9").unwrap(),
        );
        assert_eq!(bearer_status(&headers, TOKEN), BearerStatus::Invalid);

        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"\xffonlyonefield").unwrap(),
        );
        assert_eq!(bearer_status(&headers, TOKEN), BearerStatus::Unset);
    }
}
