//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::HeaderMap;
use actix_web::{App, test, web};
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::Trace;
use crate::inbound::http::routes;
use crate::inbound::http::state::HttpState;
use crate::test_support::{InMemoryStore, in_memory_http_state};

/// Build an initialised service backed by `store`.
pub async fn store_app(
    store: &Arc<InMemoryStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    state_app(in_memory_http_state(store)).await
}

/// Build an initialised service over an explicit port bundle, typically the
/// in-memory state with some ports swapped for mocks.
pub async fn state_app(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(
        App::new()
            .wrap(Trace)
            .app_data(web::Data::new(state))
            .configure(routes),
    )
    .await
}

/// Status, headers and JSON body of one exchange. An empty body reads as
/// `Value::Null`.
pub struct Exchange {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl Exchange {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

pub async fn send<S, B>(app: &S, request: test::TestRequest) -> Exchange
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    Exchange {
        status,
        headers,
        body,
    }
}

/// Parse the RFC 3339 timestamp stored under `field` in a response body.
pub fn timestamp(body: &Value, field: &str) -> DateTime<Utc> {
    let raw = body[field].as_str().expect("timestamp string");
    DateTime::parse_from_rfc3339(raw)
        .expect("rfc3339 timestamp")
        .with_timezone(&Utc)
}
