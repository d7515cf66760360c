use std::io;
use std::path::PathBuf;
use log::LevelFilter;
use thiserror::Error;
use crate::destination::Destination;
use crate::level::Level;
use crate::logger::StampedLogger;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("a logger is already installed for this process")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// How the process wants its logs: verbosity switches plus an optional log file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub debug: bool,
    pub quiet: bool,
    /// `None` or an empty path logs to stderr.
    pub logfile: Option<PathBuf>,
}

impl LoggingConfig {
    /// Threshold these switches select, starting from `default`.
    ///
    /// `quiet` is applied after `debug`, so asking for both ends up at error only.
    pub fn threshold(&self, default: Level) -> Level {
        let mut threshold = default;
        if self.debug {
            threshold = Level::Debug;
        }
        if self.quiet {
            threshold = Level::Error;
        }
        threshold
    }

    /// Builds the sink without installing it. Destination failures are reported
    /// on stderr and fall back to it.
    pub fn build_logger(&self) -> StampedLogger {
        let destination = Destination::resolve(self.logfile.as_deref(), &mut io::stderr());
        StampedLogger::new(destination, self.threshold(Level::Info))
    }
}

/// Installs the configured sink as the process-wide `log` logger.
///
/// Filtering is done by the sink on each line's marker, so the facade lets every
/// record through.
pub fn setup_logging(config: &LoggingConfig) -> Result<(), SetupError> {
    log::set_boxed_logger(Box::new(config.build_logger()))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}
