//! Configuration options for the search.
//!
//! This module defines the parameters that control how long a decision is
//! allowed to take.

use std::time::Duration;

/// Configuration for an MCTS decision maker
///
/// The engine is purely time-boxed: there is no iteration cap, the search
/// simply runs playouts until the budget elapses.
///
/// # Example
///
/// ```
/// use transposition_mcts::MctsConfig;
/// use std::time::Duration;
///
/// let config = MctsConfig::default().with_max_time(Duration::from_millis(250));
/// let same = MctsConfig::from_seconds(0.25);
/// assert_eq!(config.max_time, same.max_time);
/// ```
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Wall-clock budget for one decision
    ///
    /// The budget is advisory: elapsed time is checked between playouts, so
    /// a single slow playout may overrun it.
    pub max_time: Duration,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            max_time: Duration::from_secs(1),
        }
    }
}

impl MctsConfig {
    /// Creates a configuration with a budget given in seconds
    ///
    /// Fractional values are supported.
    pub fn from_seconds(seconds: f64) -> Self {
        MctsConfig {
            max_time: Duration::from_secs_f64(seconds),
        }
    }

    /// Sets the wall-clock budget for one decision
    pub fn with_max_time(mut self, duration: Duration) -> Self {
        self.max_time = duration;
        self
    }
}
