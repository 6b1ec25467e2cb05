use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use bolao::config::AppConfig;
use bolao::render::{self, COMPARISON_ROUTE, INDEX_ROUTE, PageContext};
use bolao::{
    InsecureFetcher, SourceSpec, Standings, compare, default_sources, predictions, ranking,
    resolve_standings, score,
};

#[derive(Clone)]
struct AppState {
    config: Arc<AppConfig>,
    sources: Arc<Vec<SourceSpec>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let addr = config.bind;
    log::info!(
        "predictions from {}, fetch timeout {}s",
        config.predictions_path.display(),
        config.fetch_timeout.as_secs()
    );

    let state = AppState {
        config: Arc::new(config),
        sources: Arc::new(default_sources()),
    };

    let app = Router::new()
        .route(INDEX_ROUTE, get(index))
        .route(COMPARISON_ROUTE, get(comparison))
        .route("/comparison", get(comparison))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("serving on http://{addr}");
    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}

/// GET / - participant ranking and current table
async fn index(State(state): State<AppState>) -> Response {
    render_blocking(state, index_html).await
}

/// GET /comparativo - per-participant breakdown
async fn comparison(State(state): State<AppState>) -> Response {
    render_blocking(state, comparison_html).await
}

/// Fetching and parsing block, so each page is built on the blocking pool.
async fn render_blocking(state: AppState, build: fn(&AppState) -> Result<String>) -> Response {
    match tokio::task::spawn_blocking(move || build(&state)).await {
        Ok(Ok(html)) => Html(html).into_response(),
        Ok(Err(err)) => {
            log::error!("request failed: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Erro ao gerar página: {err:#}"),
            )
                .into_response()
        }
        Err(err) => {
            log::error!("render task panicked: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn current_standings(state: &AppState) -> Result<Standings> {
    let fetcher = InsecureFetcher::new(state.config.fetch_timeout)?;
    Ok(resolve_standings(&fetcher, &state.sources)?)
}

fn index_html(state: &AppState) -> Result<String> {
    let standings = current_standings(state)?;
    let predictions = predictions::load(&state.config.predictions_path)?;
    let ranked = ranking(&score(&predictions, &standings));
    let ctx = PageContext::now(&state.config.season);
    Ok(render::index_page(&ctx, &ranked, standings.teams()))
}

fn comparison_html(state: &AppState) -> Result<String> {
    let standings = current_standings(state)?;
    let predictions = predictions::load(&state.config.predictions_path)?;
    let comparisons = compare(&predictions, &standings);
    let ctx = PageContext::now(&state.config.season);
    Ok(render::comparison_page(&ctx, &comparisons))
}
