use std::path::PathBuf;

use brawldex_catalog::DataDir;

use crate::error::WebError;
use crate::pages::Pages;

/// Read-only dependencies shared by every handler.
pub struct AppState {
    pub data: DataDir,
    pub pages: Pages,
    /// Directory served under `/static`, if any.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(data: DataDir) -> Result<Self, WebError> {
        Ok(Self {
            data,
            pages: Pages::new()?,
            static_dir: None,
        })
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}
