use std::path::Path;

use brawldex_catalog::{CatalogError, DataDir};
use brawldex_core::{Record, SlugIndex};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::Settings;

/// Validate both documents: each must parse, and every record must have a
/// unique, non-empty slug.
pub(crate) fn run_check(settings: &Settings) -> Result<(), CliError> {
    let data = DataDir::new(&settings.data_dir.value);

    let mut problems = 0;
    problems += check_document("maps", &data.maps_path(), data.load_maps());
    problems += check_document("brawlers", &data.brawlers_path(), data.load_brawlers());

    if problems > 0 {
        return Err(CliError::Check(problems));
    }
    log::info!(
        "{} All documents are valid",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}

/// Report on one document and return the number of problems found.
fn check_document<R: Record>(
    label: &str,
    path: &Path,
    loaded: Result<Vec<R>, CatalogError>,
) -> usize {
    let records = match loaded {
        Ok(records) => records,
        Err(e) => {
            log::error!(
                "{} {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                label.if_supports_color(Stdout, |t| t.bold()),
                e,
            );
            return 1;
        }
    };

    let index = SlugIndex::build(&records);
    if index.is_consistent() {
        log::info!(
            "{} {}: {} records ({})",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            label.if_supports_color(Stdout, |t| t.bold()),
            records.len(),
            path.display().if_supports_color(Stdout, |t| t.dimmed()),
        );
        return 0;
    }

    log::warn!(
        "{} {}: {} records, {} slug problem(s) ({})",
        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        label.if_supports_color(Stdout, |t| t.bold()),
        records.len(),
        index.issues().len(),
        path.display().if_supports_color(Stdout, |t| t.dimmed()),
    );
    for issue in index.issues() {
        log::warn!("    {issue}");
    }
    index.issues().len()
}
