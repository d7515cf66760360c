use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};
use crate::destination::Destination;
use crate::level::{has_marker, Level};
use crate::level_writer::LevelWriter;
use crate::log_writer::LogWriter;

/// Shared logging sink: stamps lines, filters them by marker and writes them out.
///
/// All callers go through one mutex, so lines from different threads never interleave.
pub struct StampedLogger<W = Destination> {
    writer: Mutex<LogWriter<LevelWriter<W>>>,
}

impl<W: Write> StampedLogger<W> {
    pub fn new(destination: W, threshold: Level) -> Self {
        Self {
            writer: Mutex::new(LogWriter::new(LevelWriter::with_threshold(destination, threshold))),
        }
    }

    pub fn threshold(&self) -> Level {
        self.lock().get_ref().threshold()
    }

    /// Writes one raw line, with or without a marker, straight to the sink.
    pub fn emit(&self, line: &[u8]) -> io::Result<usize> {
        self.lock().write_line(line)
    }

    fn lock(&self) -> MutexGuard<'_, LogWriter<LevelWriter<W>>> {
        self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl StampedLogger<Destination> {
    pub fn destination_is_stderr(&self) -> bool {
        self.lock().get_ref().get_ref().is_stderr()
    }
}

/// Renders a record as a raw line, taking the marker from its level unless the
/// message already carries one.
pub(crate) fn record_line(record: &log::Record) -> String {
    let mut line = record.args().to_string();
    if !has_marker(line.as_bytes()) {
        line.insert_str(0, Level::from(record.level()).marker());
    }
    let _ = writeln!(line);
    line
}

impl<W: Write + Send> log::Log for StampedLogger<W> {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let _ = self.emit(record_line(record).as_bytes());
        }
    }

    fn flush(&self) {
        let _ = self.lock().flush();
    }
}
