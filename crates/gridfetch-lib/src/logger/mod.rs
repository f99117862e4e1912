//! Audit log for download runs.
//!
//! Every run appends human-readable, timestamped lines to a single sink,
//! one line per entry: `YYYY-MM-DD HH:MM:SS ==>[LEVEL] message`. The sink is
//! opened once at startup and treated as available for the rest of the
//! process; entries are additionally mirrored to `tracing`.

use crate::error::GridFetchError;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
    Debug,
    /// Generic decorator for levels the log format does not recognize.
    Log,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
            Level::Log => "LOG",
        }
    }

    /// Case-insensitive lookup; anything unrecognized falls back to the
    /// generic `LOG` decorator rather than failing.
    pub fn from_tag(tag: &str) -> Level {
        match tag.to_ascii_uppercase().as_str() {
            "INFO" => Level::Info,
            "WARNING" => Level::Warning,
            "ERROR" => Level::Error,
            "DEBUG" => Level::Debug,
            _ => Level::Log,
        }
    }
}

pub trait LogSink: Send {
    fn append(&mut self, line: &str) -> io::Result<()>;
}

/// Append-mode file sink. The file and any missing parent directories are
/// created at construction; failure there is fatal to the run.
pub struct FileSink {
    file: File,
}

impl FileSink {
    pub fn open(path: &Path) -> Result<FileSink, GridFetchError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| GridFetchError::LogSinkCreation {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| GridFetchError::LogSinkCreation {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(FileSink { file })
    }
}

impl LogSink for FileSink {
    fn append(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.file, "{line}")
    }
}

/// In-memory sink. Cloning yields another handle onto the same entries,
/// which is what tests use to inspect what a component logged.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> MemorySink {
        MemorySink::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.lines.lock().expect("log sink mutex poisoned").clone()
    }
}

impl LogSink for MemorySink {
    fn append(&mut self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .expect("log sink mutex poisoned")
            .push(line.to_string());
        Ok(())
    }
}

/// Shared, append-only run log. Writes are serialized behind a mutex so a
/// future concurrent orchestrator can share one `RunLog` without changes.
pub struct RunLog {
    sink: Mutex<Box<dyn LogSink>>,
}

impl RunLog {
    pub fn new(sink: Box<dyn LogSink>) -> RunLog {
        RunLog {
            sink: Mutex::new(sink),
        }
    }

    pub fn to_file(path: &Path) -> Result<RunLog, GridFetchError> {
        Ok(RunLog::new(Box::new(FileSink::open(path)?)))
    }

    pub fn log(&self, level: Level, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{timestamp} ==>[{}] {message}", level.tag());

        match level {
            Level::Info => tracing::info!("{message}"),
            Level::Warning => tracing::warn!("{message}"),
            Level::Error => tracing::error!("{message}"),
            Level::Debug | Level::Log => tracing::debug!("{message}"),
        }

        let mut sink = self.sink.lock().expect("log sink mutex poisoned");
        if let Err(e) = sink.append(&line) {
            // The sink was writable at startup; losing it mid-run is worth a
            // diagnostic but must not take the batch down with it.
            tracing::error!("Failed to append to run log: {e}");
        }
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_matches(entry: &str, tag: &str, message: &str) -> bool {
        // `YYYY-MM-DD HH:MM:SS ==>[TAG] message`
        let Some((timestamp, rest)) = entry.split_once(" ==>[") else {
            return false;
        };
        timestamp.len() == 19
            && timestamp.as_bytes()[4] == b'-'
            && timestamp.as_bytes()[10] == b' '
            && timestamp.as_bytes()[13] == b':'
            && rest == format!("{tag}] {message}")
    }

    #[test]
    fn test_entry_format_per_level() {
        let sink = MemorySink::new();
        let log = RunLog::new(Box::new(sink.clone()));

        log.info("starting");
        log.warning("slow");
        log.error("broken");
        log.debug("detail");
        log.log(Level::Log, "generic");

        let entries = sink.entries();
        assert_eq!(entries.len(), 5);
        assert!(entry_matches(&entries[0], "INFO", "starting"), "{entries:?}");
        assert!(entry_matches(&entries[1], "WARNING", "slow"));
        assert!(entry_matches(&entries[2], "ERROR", "broken"));
        assert!(entry_matches(&entries[3], "DEBUG", "detail"));
        assert!(entry_matches(&entries[4], "LOG", "generic"));
    }

    #[test]
    fn test_unrecognized_tag_falls_back_to_generic() {
        assert_eq!(Level::from_tag("warning"), Level::Warning);
        assert_eq!(Level::from_tag("NOTICE"), Level::Log);
        assert_eq!(Level::from_tag(""), Level::Log);
        assert_eq!(Level::from_tag("NOTICE").tag(), "LOG");
    }

    #[test]
    fn test_entries_are_append_ordered() {
        let sink = MemorySink::new();
        let log = RunLog::new(Box::new(sink.clone()));

        for i in 0..10 {
            log.info(&format!("entry {i}"));
        }

        let entries = sink.entries();
        assert_eq!(entries.len(), 10);
        for window in entries.windows(2) {
            let a = &window[0][..19];
            let b = &window[1][..19];
            assert!(a <= b, "timestamps out of order: {a} > {b}");
        }
    }

    #[test]
    fn test_file_sink_appends_across_reopens() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logs").join("download.log");

        {
            let log = RunLog::to_file(&path).expect("parent dirs should be created");
            log.info("first run");
        }
        {
            let log = RunLog::to_file(&path).expect("reopen");
            log.info("second run");
        }

        let content = std::fs::read_to_string(&path).expect("read log");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("==>[INFO] first run"));
        assert!(lines[1].ends_with("==>[INFO] second run"));
    }

    #[test]
    fn test_file_sink_unwritable_path_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").expect("write blocker");

        let result = RunLog::to_file(&blocker.join("download.log"));
        assert!(matches!(
            result,
            Err(GridFetchError::LogSinkCreation { .. })
        ));
    }
}
