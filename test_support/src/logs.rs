//! Capture `tracing` output emitted by library code under test.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::Level;
use tracing_subscriber::fmt;

#[derive(Clone, Default)]
struct BufferWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write(data)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-scoped subscriber and return its output and the log
/// text it produced at `level` or above.
///
/// # Examples
///
/// ```
/// use tracing::Level;
/// use test_support::capture_logs;
///
/// let (value, logs) = capture_logs(Level::WARN, || {
///     tracing::warn!("watch out");
///     7
/// });
/// assert_eq!(value, 7);
/// assert!(logs.contains("watch out"));
/// ```
pub fn capture_logs<T, F>(level: Level, f: F) -> (T, String)
where
    F: FnOnce() -> T,
{
    let writer = BufferWriter::default();
    let buf = Arc::clone(&writer.buf);
    let subscriber = fmt()
        .with_max_level(level)
        .without_time()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    let bytes = buf.lock().unwrap_or_else(PoisonError::into_inner).clone();
    (value, String::from_utf8_lossy(&bytes).into_owned())
}
