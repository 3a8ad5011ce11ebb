/// HTTP router
use crate::{
    api,
    config::GraphqlSettings,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// `POST /` executes GraphQL, `GET /` serves GraphiQL when the playground
/// is enabled, `GET /health` reports liveness.
pub fn create_router(app_state: AppState, settings: &GraphqlSettings) -> Router {
    let graphql_route = post(api::graphql::graphql_handler);
    let graphql_route = if settings.playground {
        graphql_route.get(api::graphql::graphiql)
    } else {
        graphql_route
    };

    Router::new()
        .route("/", graphql_route)
        .route("/health", get(api::health::health))
        .fallback(api::not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Bind the HTTP listener
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}
