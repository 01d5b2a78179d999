use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{Setting, Settings, config_path};

/// Show effective settings and where each came from.
pub(crate) fn run_config_show(settings: &Settings, config: Option<&Path>) {
    log::info!(
        "{}",
        "brawldex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match config.map(Path::to_path_buf).or_else(config_path) {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    show_field("Data directory", &settings.data_dir, |v| v.display().to_string());
    show_field("Bind address", &settings.bind, |v| v.to_string());
    show_field("Static directory", &settings.static_dir, |v| v.display().to_string());
    show_field("API URL", &settings.api_url, |v| v.clone());
}

fn show_field<T>(label: &str, setting: &Setting<T>, render: impl Fn(&T) -> String) {
    log::info!(
        "  {:<18} {} {}",
        format!("{label}:"),
        render(&setting.value),
        format!("({})", setting.source).if_supports_color(Stdout, |t| t.dimmed()),
    );
}

/// Print the config file path.
pub(crate) fn run_config_path(config: Option<&Path>) {
    match config.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => log::info!("{}", p.display()),
        None => log::error!("Could not determine config directory"),
    }
}
