//! Provider logging sink
//!
//! Every provider owns a [`Logger`]. Queries, outcomes and authentication
//! messages pass through it on their way to a user-installed sink. Without a
//! sink, entries are discarded.

use crate::error::{ProviderError, Result};
use std::fmt::{self, Write as _};
use std::sync::{Arc, RwLock};

/// A single-argument, side-effecting logging function
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Rebindable logging sink shared by a provider and its endpoints
pub struct Logger {
    sink: RwLock<Option<LogSink>>,
}

impl Logger {
    /// A logger that discards everything
    pub fn new() -> Self {
        Self {
            sink: RwLock::new(None),
        }
    }

    /// A logger that starts with `sink` installed
    pub fn with_sink(sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            sink: RwLock::new(Some(Arc::new(sink))),
        }
    }

    /// Install a sink, replacing the current one
    pub fn set_sink(&self, sink: impl Fn(&str) + Send + Sync + 'static) {
        *self.sink.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::new(sink));
    }

    /// Go back to discarding entries
    pub fn clear_sink(&self) {
        *self.sink.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    pub fn has_sink(&self) -> bool {
        self.sink
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Render `what` and hand it to the sink
    ///
    /// Returns the logged string. If `what` fails to render, nothing reaches
    /// the sink and [`ProviderError::Logging`] is returned.
    pub fn log(&self, what: &dyn fmt::Display) -> Result<String> {
        let mut rendered = String::new();
        write!(rendered, "{}", what).map_err(|_| {
            ProviderError::Logging("value could not be converted to a string".to_string())
        })?;

        // Clone the Arc so the sink runs without holding the lock
        let sink = self
            .sink
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        if let Some(sink) = sink {
            sink(&rendered);
        }
        Ok(rendered)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("has_sink", &self.has_sink())
            .finish()
    }
}

/// A sink that forwards every entry to `tracing` at info level
pub fn tracing_sink() -> impl Fn(&str) + Send + Sync + 'static {
    |entry: &str| tracing::info!(target: "data_provider::sink", "{}", entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Unprintable;

    impl fmt::Display for Unprintable {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn recording_logger() -> (Logger, Arc<Mutex<Vec<String>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        let captured = entries.clone();
        let logger = Logger::with_sink(move |s| captured.lock().unwrap().push(s.to_string()));
        (logger, entries)
    }

    #[test]
    fn test_default_logger_discards() {
        let logger = Logger::new();
        assert!(!logger.has_sink());
        assert_eq!(logger.log(&"dropped").unwrap(), "dropped");
    }

    #[test]
    fn test_log_reaches_sink() {
        let (logger, entries) = recording_logger();
        let logged = logger.log(&42).unwrap();
        assert_eq!(logged, "42");
        assert_eq!(*entries.lock().unwrap(), vec!["42".to_string()]);
    }

    #[test]
    fn test_unprintable_value_is_rejected_without_side_effect() {
        let (logger, entries) = recording_logger();
        let err = logger.log(&Unprintable).unwrap_err();
        assert!(matches!(err, ProviderError::Logging(_)));
        assert!(entries.lock().unwrap().is_empty());
    }

    #[test]
    fn test_sink_can_be_rebound() {
        let (logger, first) = recording_logger();
        logger.log(&"one").unwrap();

        let second = Arc::new(Mutex::new(Vec::new()));
        let captured = second.clone();
        logger.set_sink(move |s| captured.lock().unwrap().push(s.to_string()));
        logger.log(&"two").unwrap();

        logger.clear_sink();
        logger.log(&"three").unwrap();

        assert_eq!(*first.lock().unwrap(), vec!["one".to_string()]);
        assert_eq!(*second.lock().unwrap(), vec!["two".to_string()]);
    }

    #[test]
    fn test_logger_is_shareable_across_threads() {
        let (logger, entries) = recording_logger();
        let logger = Arc::new(logger);

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let logger = logger.clone();
                std::thread::spawn(move || logger.log(&i).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(entries.lock().unwrap().len(), 4);
    }
}
