use serde::Deserialize;

/// Top-level response from the `/v1/brawlers` endpoint.
///
/// Only the fields the refresh uses are modelled; the API sends many more.
#[derive(Debug, Deserialize)]
pub struct BrawlerListResponse {
    pub list: Vec<ApiBrawler>,
}

/// One character entry from BrawlAPI.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiBrawler {
    pub name: String,
    pub rarity: NamedRef,
    pub class: NamedRef,
    #[serde(default)]
    pub description: Option<String>,
}

/// A nested `{ "id": ..., "name": ... }` object such as `rarity` or `class`.
#[derive(Debug, Deserialize, Clone)]
pub struct NamedRef {
    pub name: String,
}
