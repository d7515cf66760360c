//! Timestamping log output for the `log` facade.
//!
//! Every line gets an RFC3339 UTC timestamp and a `D!`/`I!`/`W!`/`E!` severity
//! marker, is filtered against a threshold picked once at startup, and goes to
//! stderr or an appended log file.

pub mod destination;
pub mod level;
pub mod level_writer;
pub mod log_writer;
pub mod logger;
pub mod setup;

pub use destination::Destination;
pub use level::Level;
pub use level_writer::LevelWriter;
pub use log_writer::LogWriter;
pub use logger::StampedLogger;
pub use setup::{setup_logging, LoggingConfig, SetupError};
