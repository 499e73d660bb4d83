//! Append-only file logger.
//!
//! Every call opens the file, does its work and drops the handle again; no
//! handle is held between calls. Nothing here locks: concurrent writers to the
//! same file interleave at the granularity of the underlying append, and a
//! `FileLogger` shared across threads needs external synchronization (e.g. a
//! `Mutex`) around the setters.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use filelog_config::{DEFAULT_DIR, LoggerConfig};
use filelog_traits::{SystemClock, WallClock};

use crate::error::{LogError, Result};
use crate::format::{LineFormat, dated_filename};
use crate::level::Level;

#[derive(Debug, Clone)]
pub struct FileLogger<C: WallClock = SystemClock> {
    path: PathBuf,
    filename: String,
    level: String,
    log_type: Option<String>,
    clock: C,
}

impl FileLogger {
    /// Create a logger writing to `path/filename`, creating `path` if needed.
    pub fn new(
        path: impl Into<PathBuf>,
        filename: impl Into<String>,
        level: impl Into<String>,
        log_type: Option<String>,
    ) -> Result<Self> {
        FileLogger::with_parts(SystemClock, path.into(), filename.into(), level.into(), log_type)
    }

    /// Logger for today's `dd-mm-YYYY.log`, under `path` or `logs`, at `level` or DEBUG.
    pub fn get_instance(path: Option<PathBuf>, level: Option<String>) -> Result<Self> {
        FileLogger::get_instance_with_clock(SystemClock, path, level)
    }

    /// Build from a `[logger]` config table.
    pub fn from_config(cfg: &LoggerConfig) -> Result<Self> {
        FileLogger::from_config_with_clock(SystemClock, cfg)
    }
}

impl<C: WallClock> FileLogger<C> {
    fn with_parts(
        clock: C,
        path: PathBuf,
        filename: String,
        level: String,
        log_type: Option<String>,
    ) -> Result<Self> {
        ensure_dir(&path)?;
        Ok(Self {
            path,
            filename,
            level,
            log_type,
            clock,
        })
    }

    pub fn get_instance_with_clock(
        clock: C,
        path: Option<PathBuf>,
        level: Option<String>,
    ) -> Result<Self> {
        let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));
        let level = level.unwrap_or_else(|| Level::Debug.into());
        let filename = dated_filename(clock.today());
        Self::with_parts(clock, path, filename, level, None)
    }

    pub fn from_config_with_clock(clock: C, cfg: &LoggerConfig) -> Result<Self> {
        cfg.validate()
            .map_err(|e| LogError::Config(e.to_string()))?;
        let filename = match &cfg.filename {
            Some(name) => name.clone(),
            None => dated_filename(clock.today()),
        };
        Self::with_parts(
            clock,
            cfg.path.clone(),
            filename,
            cfg.level.clone(),
            cfg.log_type.clone(),
        )
    }

    /// Replace the clock used for timestamps.
    pub fn with_clock<D: WallClock>(self, clock: D) -> FileLogger<D> {
        FileLogger {
            path: self.path,
            filename: self.filename,
            level: self.level,
            log_type: self.log_type,
            clock,
        }
    }

    /// Append one formatted line.
    pub fn write(&self, message: &str) -> Result<()> {
        let file_path = self.file_path();
        let line = self.format().render(
            self.clock.now(),
            &self.level,
            self.log_type.as_deref(),
            message,
        );
        append(&file_path, line.as_bytes()).map_err(|e| {
            tracing::warn!(path = %file_path.display(), error = %e, "log write failed");
            LogError::Write {
                path: file_path.clone(),
                source: e,
            }
        })?;
        tracing::debug!(path = %file_path.display(), bytes = line.len(), "log line appended");
        Ok(())
    }

    /// Every line currently in the file, in file order, terminators kept.
    ///
    /// A missing file is an error, not an empty result.
    pub fn get_all(&self) -> Result<Vec<String>> {
        let file_path = self.file_path();
        read_lines(&file_path).map_err(|e| {
            tracing::warn!(path = %file_path.display(), error = %e, "log read failed");
            LogError::Read {
                path: file_path.clone(),
                source: e,
            }
        })
    }

    /// `path/filename`, joined literally so an absolute or nested filename
    /// still resolves under `path`.
    pub fn file_path(&self) -> PathBuf {
        let mut loc = self.path.clone().into_os_string();
        loc.push("/");
        loc.push(&self.filename);
        PathBuf::from(loc)
    }

    pub fn format(&self) -> LineFormat {
        LineFormat::for_filename(&self.filename)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point at a new directory, creating it first. On failure the old path is kept.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        ensure_dir(&path)?;
        self.path = path;
        Ok(())
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = filename.into();
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// The stored level, if it is one of the named constants.
    pub fn known_level(&self) -> Option<Level> {
        self.level.parse().ok()
    }

    pub fn set_level(&mut self, level: impl Into<String>) {
        self.level = level.into();
    }

    pub fn log_type(&self) -> Option<&str> {
        self.log_type.as_deref()
    }

    pub fn set_log_type(&mut self, log_type: Option<String>) {
        self.log_type = log_type;
    }
}

/// Single-level create; an existing directory is fine, missing parents are not.
fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    match fs::create_dir(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "created log directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot create log directory");
            Err(LogError::CreateDir {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}

fn append(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(bytes)
}

fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(fs::File::open(path)?);
    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use filelog_traits::FixedClock;
    use tempfile::tempdir;

    fn clock() -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(2024, 6, 1)
                .and_then(|d| d.and_hms_opt(12, 0, 5))
                .unwrap(),
        )
    }

    #[test]
    fn read_keeps_missing_final_terminator() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("x.log"), "one\ntwo").unwrap();
        let logger = FileLogger::new(dir.path(), "x.log", "INFO", None).unwrap();
        assert_eq!(logger.get_all().unwrap(), vec!["one\n", "two"]);
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bin.log"), [b'o', b'k', b'\n', 0xff, 0xfe, b'\n']).unwrap();
        let logger = FileLogger::new(dir.path(), "bin.log", "INFO", None).unwrap();
        let err = logger.get_all().unwrap_err();
        assert!(err.is_read(), "{err:?}");
    }

    #[test]
    fn set_path_failure_keeps_previous_path() {
        let dir = tempdir().unwrap();
        let mut logger = FileLogger::new(dir.path(), "x.log", "INFO", None).unwrap();
        let err = logger
            .set_path(dir.path().join("missing").join("nested"))
            .unwrap_err();
        assert!(matches!(err, LogError::CreateDir { .. }));
        assert_eq!(logger.path(), dir.path());
    }

    #[test]
    fn with_clock_keeps_fields() {
        let dir = tempdir().unwrap();
        let logger = FileLogger::new(dir.path(), "x.csv", "ALERT", Some("t".into()))
            .unwrap()
            .with_clock(clock());
        logger.write("m").unwrap();
        assert_eq!(logger.get_all().unwrap(), vec!["01/06/2024 12:00:05, ALERT, t, m\n"]);
    }

    #[test]
    fn known_level_only_for_named_constants() {
        let dir = tempdir().unwrap();
        let mut logger = FileLogger::new(dir.path(), "x.log", "error", None).unwrap();
        assert_eq!(logger.known_level(), Some(Level::Error));
        logger.set_level("verbose");
        assert_eq!(logger.level(), "verbose");
        assert_eq!(logger.known_level(), None);
    }
}
