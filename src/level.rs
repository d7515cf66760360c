use std::fmt;

/// Severity carried by a `X!` marker at the start of a raw log line.
///
/// Ordered from most to least verbose, so `Level::Debug < Level::Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    pub const fn from_letter(letter: u8) -> Option<Level> {
        match letter {
            b'D' => Some(Level::Debug),
            b'I' => Some(Level::Info),
            b'W' => Some(Level::Warn),
            b'E' => Some(Level::Error),
            _ => None,
        }
    }

    /// The marker as it appears in a line, e.g. `W! `.
    pub const fn marker(self) -> &'static str {
        match self {
            Level::Debug => "D! ",
            Level::Info => "I! ",
            Level::Warn => "W! ",
            Level::Error => "E! ",
        }
    }

    /// Level of the marker the line starts with, if any.
    pub fn of_line(line: &[u8]) -> Option<Level> {
        match line {
            [letter, b'!', ..] => Level::from_letter(*letter),
            _ => None,
        }
    }
}

pub fn has_marker(line: &[u8]) -> bool {
    Level::of_line(line).is_some()
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}
