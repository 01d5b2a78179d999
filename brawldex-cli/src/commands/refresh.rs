use brawldex_catalog::DataDir;
use brawldex_scraper::BrawlApiClient;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::Settings;

/// Fetch brawlers from the API and rewrite brawlers.json.
///
/// Any failure leaves the existing document untouched.
pub(crate) fn run_refresh(settings: &Settings, quiet: bool) -> Result<(), CliError> {
    let data = DataDir::new(&settings.data_dir.value);
    let client = BrawlApiClient::new(settings.api_url.value.as_str())?;

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .map_err(|e| CliError::runtime(e.to_string()))?
                .tick_chars("/-\\|"),
        );
        pb.set_message(format!("Downloading brawler data from {}...", client.url()));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    };

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))?;
    let result = rt.block_on(brawldex_scraper::refresh_brawlers(&client, &data));
    pb.finish_and_clear();

    let summary = result?;
    log::info!(
        "{} {} brawlers saved to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.count,
        summary.path.display(),
    );
    Ok(())
}
