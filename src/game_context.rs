//! Traits defining the game interface consumed by the search.
//!
//! The GameContext trait is the primary interface that must be implemented
//! for any game or decision process that will be driven by this engine.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for actions that can be taken in a game
///
/// Actions represent the moves or decisions that can be made in a game.
pub trait Action: Clone + Debug {}

/// Trait for players in a game
///
/// Players represent the entities making decisions in a game. The engine
/// compares the terminal winner against the deciding player's identity, so
/// equality must be meaningful.
pub trait Player: Clone + Debug + PartialEq {}

/// Trait for position identities used as statistics keys
///
/// A position is an opaque, immutable snapshot of the game with a
/// deterministic identity. Positions reached by different move sequences but
/// identical in content must compare equal and hash identically, so that
/// they share a single statistics record.
pub trait Position: Clone + Debug + Eq + Hash {}

/// Any type with a well-defined equality/hash contract can key the table.
impl<T: Clone + Debug + Eq + Hash> Position for T {}

/// Trait defining the game context interface required by the search
///
/// A context is a position holder: it exposes the valid actions from the
/// current position, can apply an action to produce a successor context, and
/// reports liveness and the winner once the game is over. The engine only
/// ever reads through this interface; applying an action must not modify
/// the original context, since the search explores many branches from one
/// context.
pub trait GameContext: Clone {
    /// The type of actions that can be taken in this game
    type Action: Action;

    /// The type of players in this game
    type Player: Player;

    /// The position identity used to key the statistics table
    type Position: Position;

    /// Returns the list of valid actions from the current position
    ///
    /// Terminal positions must return an empty list. A non-terminal position
    /// may also return an empty list when the player to move is forced to
    /// pass; the search then advances with `apply(None)`.
    fn valid_actions(&self) -> Vec<Self::Action>;

    /// Applies an action, returning the successor context
    ///
    /// `None` is the distinguished pass action: it hands the turn to the
    /// opponent without otherwise changing the position.
    fn apply(&self, action: Option<&Self::Action>) -> Self;

    /// Returns the current position's identity
    fn position(&self) -> Self::Position;

    /// Returns true while the game is still in progress
    fn is_active(&self) -> bool;

    /// Returns the winning player, if any
    ///
    /// Only meaningful once `is_active()` is false. `None` means the game
    /// ended without a winner (a draw).
    fn winner(&self) -> Option<Self::Player>;
}

/// Simplified implementation of the marker traits for common types
impl Action for usize {}
impl Action for i32 {}
impl Action for char {}
impl Action for String {}

impl Player for usize {}
impl Player for i32 {}
impl Player for char {}
impl Player for String {}

/// Unit marker for games with no explicit player representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoPlayer;

impl Player for NoPlayer {}
