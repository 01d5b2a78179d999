//! Page handlers.
//!
//! Every handler reloads its document, so edits to the data directory show
//! up on the next request without a restart.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{Html, Response};
use brawldex_catalog::{CatalogError, DataDir};
use brawldex_core::{ALL_SENTINEL, Filter, Slugged, distinct_values, resolve};
use tera::Context;

use crate::error::{WebError, respond};
use crate::state::AppState;

/// Query string as ordered key/value pairs. Repeated keys are kept.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

pub(crate) async fn index(State(state): State<Arc<AppState>>) -> Response {
    let result = state
        .pages
        .render("index.html", &Context::new())
        .map(Html)
        .map_err(WebError::from);
    respond(&state.pages, result)
}

pub(crate) async fn maps(State(state): State<Arc<AppState>>, query: QueryPairs) -> Response {
    let result = match first_param(query, "mode") {
        Ok(mode) => maps_page(&state, mode.as_deref()).await,
        Err(e) => Err(e),
    };
    respond(&state.pages, result)
}

pub(crate) async fn map_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    respond(&state.pages, map_detail_page(&state, &slug).await)
}

pub(crate) async fn brawlers(State(state): State<Arc<AppState>>, query: QueryPairs) -> Response {
    let result = match first_param(query, "rarity") {
        Ok(rarity) => brawlers_page(&state, rarity.as_deref()).await,
        Err(e) => Err(e),
    };
    respond(&state.pages, result)
}

pub(crate) async fn brawler_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    respond(&state.pages, brawler_detail_page(&state, &slug).await)
}

pub(crate) async fn not_found(State(state): State<Arc<AppState>>) -> Response {
    respond(
        &state.pages,
        Err(WebError::NotFound("no route".to_string())),
    )
}

async fn maps_page(state: &AppState, mode: Option<&str>) -> Result<Html<String>, WebError> {
    let maps = load(state, DataDir::load_maps).await?;
    let filter = Filter::from_query(mode);
    let shown = filter.apply(&maps, "mode");
    log::info!("GET /maps ({:?}): {} of {} maps", filter, shown.len(), maps.len());

    let mut ctx = Context::new();
    ctx.insert("maps", &Slugged::all(shown));
    ctx.insert("modes", &distinct_values(&maps, "mode"));
    ctx.insert("selected_mode", &filter.selected());
    ctx.insert("all_sentinel", ALL_SENTINEL);
    Ok(Html(state.pages.render("maps.html", &ctx)?))
}

async fn map_detail_page(state: &AppState, slug: &str) -> Result<Html<String>, WebError> {
    let maps = load(state, DataDir::load_maps).await?;
    let map = resolve(slug, &maps).ok_or_else(|| WebError::NotFound(format!("map '{slug}'")))?;
    log::info!("GET /maps/{slug}: {}", map.name);

    let mut ctx = Context::new();
    ctx.insert("map", &Slugged::new(map));
    Ok(Html(state.pages.render("map_detail.html", &ctx)?))
}

async fn brawlers_page(state: &AppState, rarity: Option<&str>) -> Result<Html<String>, WebError> {
    let brawlers = load(state, DataDir::load_brawlers).await?;
    let filter = Filter::from_query(rarity);
    let shown = filter.apply(&brawlers, "rarity");
    log::info!(
        "GET /brawlers ({:?}): {} of {} brawlers",
        filter,
        shown.len(),
        brawlers.len()
    );

    let mut ctx = Context::new();
    ctx.insert("brawlers", &Slugged::all(shown));
    ctx.insert("rarities", &distinct_values(&brawlers, "rarity"));
    ctx.insert("selected_rarity", &filter.selected());
    ctx.insert("all_sentinel", ALL_SENTINEL);
    Ok(Html(state.pages.render("brawlers.html", &ctx)?))
}

async fn brawler_detail_page(state: &AppState, slug: &str) -> Result<Html<String>, WebError> {
    let brawlers = load(state, DataDir::load_brawlers).await?;
    let brawler = resolve(slug, &brawlers)
        .ok_or_else(|| WebError::NotFound(format!("brawler '{slug}'")))?;
    log::info!("GET /brawlers/{slug}: {}", brawler.name);

    let mut ctx = Context::new();
    ctx.insert("brawler", &Slugged::new(brawler));
    Ok(Html(state.pages.render("brawler_detail.html", &ctx)?))
}

/// First value of `key` in the query string; later repeats are ignored.
fn first_param(query: QueryPairs, key: &str) -> Result<Option<String>, WebError> {
    let Query(pairs) = query.map_err(|e| WebError::BadRequest(e.body_text()))?;
    Ok(pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v))
}

/// Read a document on the blocking pool.
async fn load<T, F>(state: &AppState, loader: F) -> Result<Vec<T>, WebError>
where
    T: Send + 'static,
    F: FnOnce(&DataDir) -> Result<Vec<T>, CatalogError> + Send + 'static,
{
    let data = state.data.clone();
    let records = tokio::task::spawn_blocking(move || loader(&data)).await??;
    Ok(records)
}
