//! HTTP front end for the brawldex site.
//!
//! ## Routes
//! - `GET /` - landing page
//! - `GET /maps?mode=<mode>` - map list, `ALL` or absent for every map
//! - `GET /maps/{slug}` - map detail
//! - `GET /brawlers?rarity=<rarity>` - brawler list
//! - `GET /brawlers/{slug}` - brawler detail
//! - `GET /static/*` - static assets, when a static directory is configured
//!
//! Unknown slugs and paths render a 404 page; unreadable data renders 503.

pub mod error;
pub mod pages;
mod routes;
pub mod state;

pub use error::WebError;
pub use pages::Pages;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

/// Build the site router.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(routes::index))
        .route("/maps", get(routes::maps))
        .route("/maps/{slug}", get(routes::map_detail))
        .route("/brawlers", get(routes::brawlers))
        .route("/brawlers/{slug}", get(routes::brawler_detail))
        .fallback(routes::not_found);

    if let Some(dir) = &state.static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router.with_state(Arc::new(state))
}

/// Serve `app` on `addr` until Ctrl-C.
pub async fn serve(addr: SocketAddr, app: Router) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("brawldex listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            log::info!("Shutting down");
        })
        .await
}
