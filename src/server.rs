use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::countries::normalize_geo;
use crate::error::Result;
use crate::fetcher::TrendsClient;
use crate::render::RenderContext;

const RENDER_FAILURE_PAGE: &str =
    "<!DOCTYPE html><html><body><p>Trends page could not be rendered.</p></body></html>";

#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub client: TrendsClient,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self> {
        config.validate()?;
        let client = TrendsClient::new(&config)?;
        Ok(Self { config, client })
    }
}

#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    pub geo: Option<String>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new().route("/", get(trends_page)).with_state(state)
}

/// Builds the page context for one region. Upstream failures degrade to
/// an error context; they never escape.
pub async fn load_context(state: &AppState, raw_geo: Option<&str>) -> RenderContext {
    let geo = normalize_geo(raw_geo, &state.config.default_geo);
    match state.client.fetch_trends(&geo).await {
        Ok(trends) => RenderContext::success(geo, trends),
        Err(err) => {
            log::error!("Error fetching trends for {geo}: {err}");
            RenderContext::failure(geo)
        }
    }
}

async fn trends_page(
    State(state): State<Arc<AppState>>,
    query: Option<Query<TrendsQuery>>,
) -> Html<String> {
    let raw_geo = query.as_ref().and_then(|Query(params)| params.geo.as_deref());
    let context = load_context(&state, raw_geo).await;
    match context.to_html() {
        Ok(body) => Html(body),
        Err(err) => {
            log::error!("failed to render trends page for {}: {err}", context.current_geo);
            Html(RENDER_FAILURE_PAGE.to_string())
        }
    }
}

pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let state = Arc::new(AppState::new(config)?);
    let listener = TcpListener::bind(addr).await?;
    log::info!("Server running at http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    log::info!("shutting down");
}
