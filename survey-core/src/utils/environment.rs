#[cfg(test)]
#[path = "../../tests/unit/utils/environment_test.rs"]
mod environment_test;

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the grouping engine.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences the engine behavior.
/// The engine holds no process-wide state: everything it needs besides configuration comes from here.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment` with the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates a new instance of `Environment` which discards all log messages.
    pub fn new_silent() -> Self {
        Self { logger: Arc::new(|_| {}) }
    }

    /// Sends a message to the logger.
    pub fn log(&self, message: &str) {
        (self.logger)(message)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")))
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
