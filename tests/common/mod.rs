//! Shared test utilities: config fixtures, log capture, recording middleware.

#![allow(dead_code, unused_imports)]

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use counter_store::app::{AppAction, AppState};
use counter_store::store::Middleware;
use parking_lot::Mutex;
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// In-memory sink for `tracing-subscriber` fmt output.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

pub struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}

impl LogCapture {
    /// Run `f` with a debug-level subscriber writing into this capture.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Byte offset of the first occurrence of `needle`, panicking if absent.
    pub fn position(&self, needle: &str) -> usize {
        let contents = self.contents();
        contents
            .find(needle)
            .unwrap_or_else(|| panic!("'{}' not found in log:\n{}", needle, contents))
    }
}

/// What a [`RecordingMiddleware`] saw for one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub label: &'static str,
    pub action: AppAction,
    /// Counter value of the state the action was about to be applied to.
    pub counter_before: Option<i64>,
}

pub type SeenLog = Arc<Mutex<Vec<Seen>>>;

/// Middleware that records every action together with the prior state.
pub struct RecordingMiddleware {
    pub label: &'static str,
    pub log: SeenLog,
}

impl RecordingMiddleware {
    pub fn boxed(label: &'static str, log: &SeenLog) -> Box<Self> {
        Box::new(Self {
            label,
            log: Arc::clone(log),
        })
    }
}

impl Middleware<AppState, AppAction> for RecordingMiddleware {
    fn before_reduce(&self, action: &AppAction, state: Option<&AppState>) {
        self.log.lock().push(Seen {
            label: self.label,
            action: action.clone(),
            counter_before: state.map(AppState::counter),
        });
    }
}

/// Subscriber callback that records each counter value it is handed.
pub fn counter_recorder() -> (Arc<Mutex<Vec<i64>>>, impl FnMut(&AppState) + Send + 'static) {
    let values = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&values);
    (values, move |state: &AppState| sink.lock().push(state.counter()))
}
