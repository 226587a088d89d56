use chrono::Utc;
use std::sync::{Arc, Mutex};

/// Upper bound on retained entries; the logs dialog never needs more and the
/// buffer must not grow unbounded over a long session.
const MAX_ENTRIES: usize = 500;

/// Shared in-memory logger, rendered in the logs dialog (`G` key).
///
/// Cloning is cheap; all clones append to the same buffer.
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry with a millisecond timestamp.
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted = format!("[{}] {}", timestamp, message);

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(formatted);
            if entries.len() > MAX_ENTRIES {
                let excess = entries.len() - MAX_ENTRIES;
                entries.drain(..excess);
            }
        }
    }

    /// All entries, newest first.
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            let mut out = entries.clone();
            out.reverse();
            out
        } else {
            Vec::new()
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
