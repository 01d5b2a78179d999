use brawldex_catalog::DataDir;
use brawldex_web::AppState;

use crate::error::CliError;
use crate::settings::{SettingSource, Settings};

/// Run the web site until Ctrl-C.
pub(crate) fn run_serve(settings: &Settings) -> Result<(), CliError> {
    let data = DataDir::new(&settings.data_dir.value);
    for path in [data.maps_path(), data.brawlers_path()] {
        if !path.exists() {
            log::warn!(
                "{} does not exist; its pages will report the data as unavailable",
                path.display()
            );
        }
    }

    let mut state = AppState::new(data)?;
    let static_dir = &settings.static_dir;
    if static_dir.value.is_dir() {
        state = state.with_static_dir(&static_dir.value);
    } else if static_dir.source == SettingSource::Default {
        log::debug!("No {} directory; /static is disabled", static_dir.value.display());
    } else {
        log::warn!(
            "Static directory {} ({}) not found; /static is disabled",
            static_dir.value.display(),
            static_dir.source
        );
    }

    let app = brawldex_web::router(state);
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))?;
    rt.block_on(brawldex_web::serve(settings.bind.value, app))?;
    Ok(())
}
