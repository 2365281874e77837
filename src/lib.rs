//! # transposition-mcts
//!
//! A transposition-aware Monte Carlo Tree Search (MCTS) decision engine for
//! turn-based, perfect-information games.
//!
//! Unlike tree-shaped MCTS implementations, this engine keeps its win/visit
//! statistics in a flat table keyed by *position*: positions reached through
//! different move sequences but identical in content share a single record.
//! Playouts walk forward through the game, descending into a random
//! unexplored successor where one exists and otherwise into the UCB1-best
//! successor, add exactly one new position to the table per playout, and
//! back-propagate the outcome to every distinct position they visited.
//!
//! ## Features
//!
//! - Generic over any game that can expose positions with a stable
//!   equality/hash identity
//! - UCB1 exploration/exploitation balance with transposition sharing
//! - Pure wall-clock time budgeting: the search runs playouts until the
//!   configured budget elapses
//! - Injectable random number generator for reproducible searches
//!
//! ## Basic Usage
//!
//! ```
//! use std::time::Duration;
//! use transposition_mcts::{GameContext, MctsConfig, MctsPlayer};
//!
//! // A one-move game: taking coin 1 wins for player 0, anything else loses.
//! #[derive(Clone)]
//! struct CoinGame {
//!     taken: Option<usize>,
//! }
//!
//! impl GameContext for CoinGame {
//!     type Action = usize;
//!     type Player = usize;
//!     type Position = Option<usize>;
//!
//!     fn valid_actions(&self) -> Vec<usize> {
//!         if self.taken.is_some() {
//!             return vec![];
//!         }
//!         vec![0, 1]
//!     }
//!
//!     fn apply(&self, action: Option<&usize>) -> Self {
//!         CoinGame {
//!             taken: action.copied(),
//!         }
//!     }
//!
//!     fn position(&self) -> Option<usize> {
//!         self.taken
//!     }
//!
//!     fn is_active(&self) -> bool {
//!         self.taken.is_none()
//!     }
//!
//!     fn winner(&self) -> Option<usize> {
//!         match self.taken {
//!             Some(1) => Some(0),
//!             _ => Some(1),
//!         }
//!     }
//! }
//!
//! fn main() -> transposition_mcts::Result<()> {
//!     let root = CoinGame { taken: None };
//!
//!     let config = MctsConfig::default().with_max_time(Duration::from_millis(50));
//!     let mut player = MctsPlayer::new(0usize, config);
//!
//!     let action = player.decide(&root)?;
//!     assert_eq!(action, Some(1));
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Each call to [`MctsPlayer::decide`] creates a fresh [`StatsTable`] and
//! runs playouts against it until the time budget elapses:
//!
//! 1. **Selection**: at every step of a playout, resolve the positions
//!    reachable by each valid action. If any are absent from the table,
//!    descend into one of them uniformly at random; otherwise descend into
//!    the UCB1-best candidate. The same policy governs the entire playout
//!    depth; there is no separate random-rollout phase.
//!
//! 2. **Expansion**: the first position encountered that the table has not
//!    seen is added with zeroed counters. Exactly one position is added per
//!    playout.
//!
//! 3. **Backpropagation**: once the game reports a terminal context, every
//!    distinct position visited during the playout receives one play
//!    increment, and a win increment if the deciding player won.
//!
//! The final action is chosen by reconciling the most-visited successor with
//! the best-win-ratio successor; visit counts are authoritative whenever
//! they differ.
//!
//! Games that reach the same position through different move orders benefit
//! automatically: both orders feed the same statistics record.

pub mod config;
pub mod decision;
pub mod game_context;
pub mod mcts;
pub mod stats;

pub use config::MctsConfig;
pub use decision::DecisionMaker;
pub use game_context::{Action, GameContext, NoPlayer, Player, Position};
pub use mcts::MctsPlayer;
pub use stats::{ActionStats, PositionStats, StatsTable};

/// Error types for the MCTS engine
#[derive(thiserror::Error, Debug)]
pub enum MctsError {
    /// UCB1 scoring requires every candidate to have at least one recorded
    /// play; selection over a set with an unplayed position (or no plays at
    /// all) has no defined score.
    #[error("UCB1 selection undefined: candidate set contains an unplayed position")]
    UndefinedSelection,
}

/// Result type for MCTS operations
pub type Result<T> = std::result::Result<T, MctsError>;
