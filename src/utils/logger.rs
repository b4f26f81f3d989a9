//! # Logging
//!
//! Builds the slog root logger and routes the `log` facade into it, so the rest
//! of the crate only uses `log::{debug, info, warn}`. Output drains are picked
//! at compile time through the `termlog`, `syslog` and `journald` features.
//! Without any of them every record is discarded.

use slog::{Drain, o};

use super::error::Result;

/// Installs the global logger. Logging stops when the returned guard is dropped.
pub fn setup_logging() -> Result<slog_scope::GlobalLoggerGuard> {
    let guard = slog_scope::set_global_logger(default_root_logger()?);
    slog_stdlog::init()?;

    Ok(guard)
}

fn default_root_logger() -> Result<slog::Logger> {
    let drain = default_discard()?.fuse();

    #[cfg(feature = "termlog")]
    let drain = slog::Duplicate(default_term_drain()?, drain).fuse();

    #[cfg(feature = "syslog")]
    let drain = slog::Duplicate(default_syslog_drain()?, drain).fuse();

    #[cfg(all(target_os = "linux", feature = "journald"))]
    let drain = slog::Duplicate(default_journald_drain()?, drain).fuse();

    Ok(slog::Logger::root(drain, o!("who" => "stbuild")))
}

fn default_discard() -> Result<slog_async::Async> {
    Ok(slog_async::Async::default(slog::Discard))
}

// Log records go to stderr; stdout carries command output.
#[cfg(feature = "termlog")]
fn default_term_drain() -> Result<slog_async::Async> {
    let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let term = slog_term::FullFormat::new(decorator).build().fuse();

    Ok(slog_async::Async::default(term))
}

#[cfg(feature = "syslog")]
fn default_syslog_drain() -> Result<slog_async::Async> {
    let syslog = slog_syslog::unix_3164(slog_syslog::Facility::LOG_USER)?;

    Ok(slog_async::Async::default(syslog.ignore_res()))
}

#[cfg(all(target_os = "linux", feature = "journald"))]
fn default_journald_drain() -> Result<slog_async::Async> {
    let journald = slog_journald::JournaldDrain.ignore_res();

    Ok(slog_async::Async::default(journald))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_root_logger_builds() -> Result<()> {
        let logger = default_root_logger()?;
        slog::info!(logger, "logger ready");

        Ok(())
    }
}
