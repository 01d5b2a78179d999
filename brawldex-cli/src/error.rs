use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Brawler refresh failed
    #[error("Refresh failed: {0}")]
    Refresh(#[from] brawldex_scraper::FetchError),

    /// Web front end failed to start
    #[error(transparent)]
    Web(#[from] brawldex_web::WebError),

    /// `check` found problems in the data
    #[error("{0} problem(s) found in the data documents")]
    Check(usize),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
