use log::{debug, warn};

/// Thin wrapper over the `log` facade that tags messages with a channel name.
pub struct LogManager {
    scope: String,
}

impl LogManager {
    pub fn new() -> Self {
        Self::scoped("channel")
    }

    pub fn scoped(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    pub fn record(&self, message: &str) {
        debug!("[{}] {}", self.scope, message);
    }

    pub fn warn(&self, message: &str) {
        warn!("[{}] {}", self.scope, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
