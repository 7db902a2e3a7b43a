//! Route handlers
//!
//! Each handler turns the request into a `Command`, runs it on the
//! engine, and maps the result back. Request-shape errors (missing id,
//! wrong method, unparseable body) are answered before the engine is
//! touched, so no lock is taken for them.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::Router;
use bytes::Bytes;

use crate::engine::Engine;
use crate::protocol::{Command, Response};

use super::pages::{serve_page, BAD_UPDATE_PAGE, UPDATE_PAGE};

/// Build the service router around a shared engine
pub fn create_router(engine: Arc<Engine>) -> Router {
    let body_limit = engine.config().max_body_bytes;

    Router::new()
        .route("/info", get(handle_info))
        .route("/stop", get(handle_stop))
        .route("/update", any(handle_update))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(engine)
}

async fn handle_info(State(engine): State<Arc<Engine>>) -> Response {
    execute(&engine, Command::GetSystem)
}

async fn handle_stop(
    State(engine): State<Arc<Engine>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let ids = params
        .into_iter()
        .filter(|(key, _)| key == "id")
        .map(|(_, value)| value)
        .collect();

    match Command::get_stop(ids) {
        Ok(command) => execute(&engine, command),
        Err(e) => Response::from_error(&e),
    }
}

async fn handle_update(State(engine): State<Arc<Engine>>, method: Method, body: Bytes) -> Response {
    let static_dir = &engine.config().static_dir;

    if method != Method::POST {
        return serve_page(static_dir, UPDATE_PAGE, StatusCode::BAD_REQUEST).await;
    }

    let command = match Command::update(&body) {
        Ok(command) => command,
        Err(e) => {
            tracing::debug!("Unparseable update body: {}", e);
            return serve_page(static_dir, BAD_UPDATE_PAGE, StatusCode::BAD_REQUEST).await;
        }
    };

    execute(&engine, command)
}

fn execute(engine: &Engine, command: Command) -> Response {
    tracing::trace!("Executing {:?}", command.command_type());

    match engine.execute(command) {
        Ok(reply) => Response::from_reply(&reply),
        Err(e) => Response::from_error(&e),
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type.as_str())],
            self.body,
        )
            .into_response()
    }
}
