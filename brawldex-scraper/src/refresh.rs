use std::path::PathBuf;

use brawldex_catalog::DataDir;
use brawldex_core::{BrawlerRecord, slugify};

use crate::client::BrawlApiClient;
use crate::error::FetchError;
use crate::types::ApiBrawler;

/// Outcome of a successful refresh.
#[derive(Debug, Clone)]
pub struct RefreshSummary {
    pub count: usize,
    pub path: PathBuf,
}

/// Convert one API entry into a brawler record.
///
/// `role` starts out equal to the API class; the build and mode fields are
/// left empty for hand curation. The image filename uses the same slug as
/// the detail page URL.
pub fn to_record(api: &ApiBrawler) -> BrawlerRecord {
    let slug = slugify(&api.name);
    if slug.is_empty() {
        log::warn!("Brawler {:?} has no usable slug; image name will be empty", api.name);
    }

    let description = api
        .description
        .as_deref()
        .map(|d| d.replace('\n', " "))
        .unwrap_or_default();

    BrawlerRecord {
        name: api.name.clone(),
        rarity: api.rarity.name.clone(),
        role: api.class.name.clone(),
        class: api.class.name.clone(),
        best_build: String::new(),
        best_modes: Vec::new(),
        description,
        image: format!("{slug}.png"),
        extra: Default::default(),
    }
}

pub fn to_records(list: &[ApiBrawler]) -> Vec<BrawlerRecord> {
    list.iter().map(to_record).collect()
}

/// Fetch the brawler list and replace the brawlers document in `data`.
///
/// Nothing is written unless the fetch succeeds and returns at least one
/// brawler.
pub async fn refresh_brawlers(
    client: &BrawlApiClient,
    data: &DataDir,
) -> Result<RefreshSummary, FetchError> {
    let list = client.fetch_brawlers().await?;
    if list.is_empty() {
        return Err(FetchError::Empty);
    }

    let records = to_records(&list);
    let path = data.write_brawlers(&records)?;
    log::info!("Saved {} brawlers to {}", records.len(), path.display());

    Ok(RefreshSummary {
        count: records.len(),
        path,
    })
}
