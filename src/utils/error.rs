//! # Application Error
//!
//! A single error type shared by every module. It carries a human readable
//! message and, when the failure came from another library, the original error
//! as its source so the full chain is shown when `main` returns it.

use std::sync::PoisonError;

/// Boxed error used as the source of an [`Error`].
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{msg}")]
pub struct Error {
    msg: String,
    #[source]
    source: Option<BoxedSource>,
}

impl Error {
    pub fn new(msg: &str) -> Error {
        Error {
            msg: msg.to_string(),
            source: None,
        }
    }

    /// Wraps `source` with a message describing what was being attempted.
    pub fn with_source(msg: &str, source: BoxedSource) -> Error {
        Error {
            msg: msg.to_string(),
            source: Some(source),
        }
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::with_source("I/O error", Box::new(err))
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Error {
        Error::with_source("Configuration error", Box::new(err))
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Error {
        Error::with_source("Invalid arguments", Box::new(err))
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Error {
        Error::with_source("Failed to install logger", Box::new(err))
    }
}

impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Error {
        Error::new(&format!("Lock poisoned: {}", err))
    }
}
