use std::fs::{self, File};
use std::io::{self, Write};
use std::io::ErrorKind::NotFound;
use std::path::Path;

/// Where stamped lines end up: the process' stderr or one opened log file.
#[derive(Debug)]
pub enum Destination {
    Stderr,
    File(File),
}

impl Destination {
    /// Opens `logfile` for logging, falling back to stderr.
    ///
    /// A missing file is created, an existing one is opened for append. When either
    /// fails a single `E!` line describing the failure is written to `diagnostics`.
    pub fn resolve<D: Write>(logfile: Option<&Path>, diagnostics: &mut D) -> Destination {
        let path = match logfile {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Destination::Stderr,
        };

        match fs::metadata(path) {
            Err(err) if err.kind() == NotFound => match File::create(path) {
                Ok(file) => Destination::File(file),
                Err(err) => {
                    report(diagnostics, format_args!("E! Unable to create {} ({}), using stderr", path.display(), err));
                    Destination::Stderr
                }
            },
            _ => match File::options().append(true).open(path) {
                Ok(file) => Destination::File(file),
                Err(err) => {
                    report(diagnostics, format_args!("E! Unable to append to {} ({}), using stderr", path.display(), err));
                    Destination::Stderr
                }
            },
        }
    }

    pub fn is_stderr(&self) -> bool {
        matches!(self, Destination::Stderr)
    }
}

fn report<D: Write>(diagnostics: &mut D, message: std::fmt::Arguments<'_>) {
    let _ = writeln!(diagnostics, "{}", message);
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Destination::Stderr => io::stderr().write(buf),
            Destination::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::Stderr => io::stderr().flush(),
            Destination::File(file) => file.flush(),
        }
    }
}
