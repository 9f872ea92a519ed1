//! Log output shared by the console and the log file.
//!
//! Every record renders as `<timestamp> - <LEVEL> - [Line: <n>] - <message>`.
//! [`builder`] produces an un-installed logger over any sink so the format can
//! be exercised in isolation; [`init`] wires it to the real file and stdout and
//! installs it for the process.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Writes each formatted record to the log file, then to stdout.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        io::stdout().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        io::stdout().flush()
    }
}

pub fn builder(sink: Box<dyn Write + Send>) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Info)
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(sink))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - [Line: {}] - {}",
                Local::now().format(TIMESTAMP_FORMAT),
                record.level(),
                record.line().unwrap_or(0),
                record.args()
            )
        });
    builder
}

/// Installs the process logger. Falls back to stdout alone when the log file
/// cannot be opened.
pub fn init(log_path: &Path) -> Result<()> {
    let opened = OpenOptions::new().create(true).append(true).open(log_path);
    let (sink, file_err): (Box<dyn Write + Send>, Option<io::Error>) = match opened {
        Ok(file) => (Box::new(Tee { file }), None),
        Err(e) => (Box::new(io::stdout()), Some(e)),
    };

    builder(sink)
        .parse_default_env()
        .try_init()
        .context("install logger")?;

    if let Some(e) = file_err {
        log::warn!("logging.file_unavailable path={} err={}", log_path.display(), e);
    }
    Ok(())
}

/// In-memory sink for building loggers in tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(test)]
impl Capture {
    pub(crate) fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[cfg(test)]
impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
