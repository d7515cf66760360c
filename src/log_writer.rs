use std::io::{self, Write};
use chrono::{DateTime, SecondsFormat, Utc};
use crate::level::has_marker;

const DEFAULT_SEPARATOR: &str = " I! ";

/// Puts an RFC3339 UTC timestamp in front of every line before handing it on.
///
/// Lines that already start with a marker get `<timestamp> `, everything else
/// is treated as info and gets `<timestamp> I! `.
pub struct LogWriter<W> {
    inner: W,
}

impl<W: Write> LogWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Stamps `line` with the current time and writes all of it.
    ///
    /// Returns the length of the stamped buffer.
    pub fn write_line(&mut self, line: &[u8]) -> io::Result<usize> {
        self.write_line_at(Utc::now(), line)
    }

    pub fn write_line_at(&mut self, now: DateTime<Utc>, line: &[u8]) -> io::Result<usize> {
        let stamped = prepend_timestamp(now, line);
        self.inner.write_all(&stamped)?;
        Ok(stamped.len())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub(crate) fn prepend_timestamp(now: DateTime<Utc>, line: &[u8]) -> Vec<u8> {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let separator = match has_marker(line) {
        true => " ",
        false => DEFAULT_SEPARATOR,
    };

    let mut stamped = Vec::with_capacity(timestamp.len() + separator.len() + line.len());
    stamped.extend_from_slice(timestamp.as_bytes());
    stamped.extend_from_slice(separator.as_bytes());
    stamped.extend_from_slice(line);
    stamped
}
