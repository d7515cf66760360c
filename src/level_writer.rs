use std::io::{self, Write};
use crate::level::Level;

/// Forwards lines to `inner` only when their marker meets the threshold.
///
/// The marker is looked up at the first `!` of the buffer, so it is still found
/// after a timestamp has been put in front of it. Lines with no recognised marker
/// always pass.
pub struct LevelWriter<W> {
    inner: W,
    threshold: Level,
}

impl<W: Write> LevelWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_threshold(inner, Level::Info)
    }

    pub fn with_threshold(inner: W, threshold: Level) -> Self {
        Self { inner, threshold }
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn passes(&self, buf: &[u8]) -> bool {
        match line_level(buf) {
            Some(level) => level >= self.threshold,
            None => true,
        }
    }
}

fn line_level(buf: &[u8]) -> Option<Level> {
    let bang = buf.iter().position(|&b| b == b'!')?;
    match bang {
        0 => None,
        _ => Level::from_letter(buf[bang - 1]),
    }
}

impl<W: Write> Write for LevelWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.passes(buf) {
            // Dropped lines count as consumed so `write_all` callers don't see a short write.
            false => Ok(buf.len()),
            true => self.inner.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_info() {
        let mut writer = LevelWriter::new(Vec::new());
        assert_eq!(writer.threshold(), Level::Info);

        writer.write_all(b"D! hidden\n").unwrap();
        writer.write_all(b"I! shown\n").unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"I! shown\n");
    }

    #[test]
    fn marker_after_timestamp_is_found() {
        let mut writer = LevelWriter::with_threshold(Vec::new(), Level::Error);
        let dropped = b"2023-01-01T00:00:00Z W! disk almost full\n";

        assert_eq!(writer.write(dropped).unwrap(), dropped.len());
        writer.write_all(b"2023-01-01T00:00:00Z E! disk full\n").unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"2023-01-01T00:00:00Z E! disk full\n");
    }

    #[test]
    fn unmarked_lines_always_pass() {
        let mut writer = LevelWriter::with_threshold(Vec::new(), Level::Error);
        writer.write_all(b"no marker here\n").unwrap();
        writer.write_all(b"! leading bang\n").unwrap();
        writer.write_all(b"hello X! world\n").unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"no marker here\n! leading bang\nhello X! world\n");
    }

    #[test]
    fn only_the_first_bang_is_inspected() {
        let writer = LevelWriter::with_threshold(Vec::new(), Level::Error);
        assert!(!writer.passes(b"D! then E! later"));
        assert!(writer.passes(b"wow! then D! later"));
    }

    #[test]
    fn debug_threshold_passes_everything() {
        let writer = LevelWriter::with_threshold(Vec::new(), Level::Debug);
        for level in Level::ALL {
            assert!(writer.passes(level.marker().as_bytes()));
        }
    }
}
