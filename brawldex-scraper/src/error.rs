use brawldex_catalog::CatalogError;

/// Errors that can occur while refreshing brawler data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("BrawlAPI returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("BrawlAPI returned an empty brawler list")]
    Empty,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
