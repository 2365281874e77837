//! The search orchestrator.
//!
//! This module contains the decision maker that drives the playout loop:
//! repeated guided playouts against a fresh statistics table until the time
//! budget elapses, then final action selection over the root's actions.

use std::collections::HashSet;
use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::MctsConfig;
use crate::decision::DecisionMaker;
use crate::game_context::GameContext;
use crate::stats::StatsTable;
use crate::Result;

/// A Monte Carlo Tree Search decision maker
///
/// Each call to [`decide`](Self::decide) creates its own [`StatsTable`],
/// runs playouts for the configured wall-clock budget and picks the action
/// whose resulting position accumulated the best statistics. Nothing is
/// kept between calls.
///
/// The search is single-threaded by design; its only nondeterminism is the
/// random choice among unexplored successors, so a seeded generator passed
/// through [`with_rng`](Self::with_rng) makes a search reproducible.
pub struct MctsPlayer<C: GameContext, R: Rng = StdRng> {
    /// Identity the terminal winner is compared against
    player: C::Player,

    /// Search configuration
    config: MctsConfig,

    /// Source of randomness for exploration
    rng: R,
}

impl<C: GameContext> MctsPlayer<C> {
    /// Creates a decision maker for `player` with an entropy-seeded generator
    pub fn new(player: C::Player, config: MctsConfig) -> Self {
        MctsPlayer {
            player,
            config,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<C: GameContext, R: Rng> MctsPlayer<C, R> {
    /// Replaces the random number generator
    ///
    /// Useful for reproducible searches in tests.
    pub fn with_rng<R2: Rng>(self, rng: R2) -> MctsPlayer<C, R2> {
        MctsPlayer {
            player: self.player,
            config: self.config,
            rng,
        }
    }

    /// Chooses an action for the given context
    ///
    /// Returns `Ok(None)` when the context has no valid actions. A single
    /// valid action is returned immediately without running any playouts.
    /// Otherwise playouts run until the configured budget elapses and the
    /// best-scoring root action is returned; its statistics are reported
    /// through one `log` line of the shape `Win Ratio: {:.2}% (wins/plays)`.
    pub fn decide(&mut self, context: &C) -> Result<Option<C::Action>> {
        let mut actions = context.valid_actions();
        if actions.is_empty() {
            return Ok(None);
        }
        if actions.len() == 1 {
            return Ok(actions.pop());
        }

        let mut table = StatsTable::new();
        let start = Instant::now();
        while start.elapsed() < self.config.max_time {
            self.simulate(context, &mut table)?;
        }

        Ok(table
            .best_action(&actions, |action| context.apply(Some(action)).position())
            .map(|chosen| {
                info!(
                    "Win Ratio: {:.2}% ({}/{})",
                    chosen.win_ratio * 100.0,
                    chosen.wins,
                    chosen.plays
                );
                chosen.action
            }))
    }

    /// Runs one playout from `context` to a terminal position
    ///
    /// Selection descends into a random unexplored successor when one
    /// exists and into the UCB1-best successor otherwise; the same policy
    /// governs the whole playout depth. The first position not yet in the
    /// table is added to it, exactly one per playout. Once terminal, every
    /// distinct position visited receives one play, and a win if the
    /// deciding player won.
    fn simulate(&mut self, context: &C, table: &mut StatsTable<C::Position>) -> Result<()> {
        let mut current = context.clone();
        let mut visited: HashSet<C::Position> = HashSet::new();
        let mut expand = true;

        while current.is_active() {
            let actions = current.valid_actions();
            if !actions.is_empty() {
                let mut successors: Vec<C> = actions
                    .iter()
                    .map(|action| current.apply(Some(action)))
                    .collect();
                let positions: Vec<C::Position> = successors
                    .iter()
                    .map(|successor| successor.position())
                    .collect();

                let fresh: Vec<usize> = (0..positions.len())
                    .filter(|&i| !table.contains(&positions[i]))
                    .collect();

                let next = match fresh.choose(&mut self.rng) {
                    // exploration: a successor the table has never seen
                    Some(&i) => i,
                    // exploitation: all successors known, rank them by UCB1
                    None => table.best_index(&positions)?,
                };

                current = successors.swap_remove(next);
            } else {
                // forced pass, advance to the opponent without branching
                current = current.apply(None);
            }

            let position = current.position();
            if expand && !table.contains(&position) {
                table.add(position.clone());
                expand = false;
            }
            visited.insert(position);
        }

        let won = current
            .winner()
            .map_or(false, |winner| winner == self.player);
        table.update_all(visited, won);

        Ok(())
    }
}

impl<C: GameContext, R: Rng> DecisionMaker<C> for MctsPlayer<C, R> {
    fn decide(&mut self, context: &C) -> Result<Option<C::Action>> {
        MctsPlayer::decide(self, context)
    }
}
