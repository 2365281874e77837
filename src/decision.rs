//! The pluggable decision-maker interface.
//!
//! A larger game framework drives arbitrary decision makers (search
//! engines, scripted players, humans) through this trait without knowing
//! how they arrive at their choice.

use crate::game_context::GameContext;
use crate::Result;

/// Capability exposed by anything that can pick an action for a context
pub trait DecisionMaker<C: GameContext> {
    /// Chooses an action for the given context
    ///
    /// `Ok(None)` means there is no legal move to make. Errors from a
    /// broken search are propagated; the interface has no recovery for
    /// them.
    fn decide(&mut self, context: &C) -> Result<Option<C::Action>>;
}
