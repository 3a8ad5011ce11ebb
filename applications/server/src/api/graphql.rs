/// GraphQL endpoint and GraphiQL page
use crate::state::AppState;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

/// POST / - Execute a GraphQL request
pub async fn graphql_handler(
    State(app_state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let request = req.into_inner();
    tracing::debug!(operation = ?request.operation_name, "GraphQL request");

    let response = app_state.schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = ?response.errors, "GraphQL request failed");
    }

    response.into()
}

/// GET / - GraphiQL explorer
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}
