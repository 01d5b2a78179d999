//! Logger setup.
//!
//! Command output goes through `log::info!`, so the default format prints the
//! bare message. `--verbose` switches to timestamped, levelled lines and
//! enables debug output from the brawldex crates; `RUST_LOG` overrides both.

use std::io::Write;

use log::LevelFilter;

pub(crate) fn init(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    for krate in [
        "brawldex",
        "brawldex_core",
        "brawldex_catalog",
        "brawldex_scraper",
        "brawldex_web",
    ] {
        builder.filter_module(krate, level);
    }

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder.parse_env("RUST_LOG");
    builder.init();
}
