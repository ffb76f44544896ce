//! Log capture for tests that assert on emitted notices.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

/// Formatted `tracing` output collected while a closure runs.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    /// Run `f` with a thread-scoped subscriber recording every level.
    pub fn capture<T>(f: impl FnOnce() -> T) -> (T, CapturedLogs) {
        let logs = CapturedLogs::default();
        let buf = Arc::clone(&logs.buf);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || CaptureWriter(Arc::clone(&buf)))
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs)
    }

    /// Captured lines, e.g. `" WARN calcorder_core::notice: ..."`.
    pub fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Lines logged at `level` (`"INFO"`, `"WARN"`, ...) containing `needle`.
    pub fn matching(&self, level: &str, needle: &str) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.trim_start().starts_with(level) && line.contains(needle))
            .collect()
    }
}
