use thiserror::Error;

/// Error type shared by every `bar-kit` library crate.
#[derive(Debug, Error)]
pub enum BarError {
    #[error("control file error: {0}")]
    Ctl(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("theme error: {0}")]
    Theme(String),

    /// A required file, directory, or lookup target does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BarError> = std::result::Result<T, E>;
