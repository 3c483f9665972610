use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, rejection::GraphQLRejection};
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerSettings;
use crate::error::{PostsError, Result};

use super::schema::PostsSchema;

#[derive(Clone)]
struct AppState {
    schema: PostsSchema,
    endpoint: String,
    graphiql: bool,
}

/// Routes the schema at the configured endpoint with permissive CORS.
pub fn router(schema: PostsSchema, settings: &ServerSettings) -> Router {
    let state = AppState {
        schema,
        endpoint: settings.endpoint.clone(),
        graphiql: settings.graphiql,
    };

    Router::new()
        .route(&settings.endpoint, get(graphql_get).post(graphql_post))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn graphiql_page(endpoint: &str) -> String {
    GraphiQLSource::build().endpoint(endpoint).finish()
}

/// Browsers asking for HTML get the console; everything else is a GET query.
async fn graphql_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: std::result::Result<GraphQLRequest, GraphQLRejection>,
) -> Response {
    if state.graphiql && accepts_html(&headers) {
        return Html(graphiql_page(&state.endpoint)).into_response();
    }
    match request {
        Ok(request) => execute(&state, request).await.into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

async fn graphql_post(State(state): State<AppState>, request: GraphQLRequest) -> GraphQLResponse {
    execute(&state, request).await
}

async fn execute(state: &AppState, request: GraphQLRequest) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::debug!(
        operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
        "Executing GraphQL request"
    );
    let response = state.schema.execute(request).await;
    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "GraphQL request returned errors");
    }
    response.into()
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Binds the listener. Failure here is fatal for the process.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| PostsError::Bind {
            addr: addr.to_string(),
            source,
        })
}

/// Serves `app` on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Unable to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_html() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(header::ACCEPT, "application/json".parse().unwrap());
        assert!(!accepts_html(&headers));

        headers.insert(
            header::ACCEPT,
            "text/html,application/xhtml+xml;q=0.9".parse().unwrap(),
        );
        assert!(accepts_html(&headers));
    }

    #[test]
    fn test_graphiql_page_points_at_endpoint() {
        let page = graphiql_page("/api/graphql");
        assert!(page.contains("/api/graphql"));
    }
}
