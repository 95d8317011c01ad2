use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_user::create_user;
use super::handlers::delete_user::delete_user;
use super::handlers::get_user::get_user;
use super::handlers::issue_token::issue_token;
use super::handlers::list_users::list_users;
use super::handlers::root::root;
use super::handlers::todos;
use super::handlers::update_user::update_user;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
    pub todo_service: Arc<dyn TodoServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
    todo_service: Arc<dyn TodoServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        auth_service,
        todo_service,
    };

    let api_routes = Router::new()
        .route("/auth/token", post(issue_token))
        .route("/users", post(create_user).get(list_users))
        .route("/users/", post(create_user).get(list_users))
        .route(
            "/users/:user_id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/todos", post(todos::create_todo).get(todos::list_todos))
        .route("/todos/", post(todos::create_todo).get(todos::list_todos))
        .route(
            "/todos/:todo_id",
            patch(todos::update_todo).delete(todos::delete_todo),
        );

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
