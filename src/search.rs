//! Depth-limited minimax search
//!
//! Positions are scored with the exact terminal value only: a win for the
//! searching player is [`WIN_SCORE`](crate::WIN_SCORE), a loss
//! [`LOSS_SCORE`](crate::LOSS_SCORE), and anything
//! else, including a position still undecided at the depth limit, is 0.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::{error::GameError, grid::*, terminal::evaluate, MAX_DEPTH};

/// Tunable parameters of a search
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchConfig {
    /// Number of plies looked ahead below the root
    pub max_depth: usize,
    /// Score the root moves on the rayon thread pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            parallel: false,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_depth == 0 {
            return Err(GameError::InvalidDepth(self.max_depth));
        }
        Ok(())
    }
}

/// The fixed facts of one decision, shared by every node of its tree
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchContext {
    pub player: Player,
    pub opponent: Player,
    pub max_depth: usize,
}

impl SearchContext {
    pub fn new(player: Player, max_depth: usize) -> Self {
        Self {
            player,
            opponent: player.opponent(),
            max_depth,
        }
    }
}

/// An agent choosing a column for one player in one position
///
/// # Notes
/// The search alternates between the searching player, who maximises the
/// score, and the opponent, who minimises it. Every node works on its own
/// copy of the grid.
///
/// # Depth
/// The children of the root are searched at depth 0, and every node
/// increments the depth before checking the cutoff, so with a `max_depth` of 1
/// only the immediate result of each root move is looked at.
#[derive(Clone, Debug)]
pub struct Searcher {
    grid: Grid,
    context: SearchContext,
    parallel: bool,

    /// The number of nodes evaluated by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` for `player` with the default configuration
    pub fn new(grid: Grid, player: Player) -> Self {
        Self::with_config(grid, player, SearchConfig::default())
    }

    pub fn with_config(grid: Grid, player: Player, config: SearchConfig) -> Self {
        Self {
            grid,
            context: SearchContext::new(player, config.max_depth),
            parallel: config.parallel,
            node_count: 0,
        }
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    /// Searches the subtree below one root move, where the opponent replies next
    ///
    /// Returns the column, its score and the number of nodes visited.
    fn score_subtree(&self, (column, next): (usize, Grid)) -> (usize, i32, usize) {
        let mut subtree = Subtree::new(self.context);
        let score = subtree.min_node(&next, 0);
        (column, score, subtree.node_count)
    }

    /// Scores every legal move of the root position
    ///
    /// Returns `(column, score)` pairs in ascending column order.
    pub fn score_moves(&mut self) -> Result<Vec<(usize, i32)>, GameError> {
        let successors: Vec<(usize, Grid)> = self.grid.successors(self.context.player).collect();
        if successors.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        let scores: Vec<(usize, i32, usize)> = if self.parallel {
            // subtrees share nothing, so they can be searched independently;
            // collect keeps the column order
            successors
                .into_par_iter()
                .map(|m| self.score_subtree(m))
                .collect()
        } else {
            successors
                .into_iter()
                .map(|m| self.score_subtree(m))
                .collect()
        };

        Ok(scores
            .into_iter()
            .map(|(column, score, nodes)| {
                self.node_count += nodes;
                debug!(column, score, nodes, "scored root move");
                (column, score)
            })
            .collect())
    }

    /// Chooses the best column for the searching player
    ///
    /// Returns the score of the chosen move and its column. When several
    /// moves share the best score, the lowest column wins.
    pub fn choose_move(&mut self) -> Result<(i32, usize), GameError> {
        let scores = self.score_moves()?;

        let mut best: Option<(i32, usize)> = None;
        for (column, score) in scores {
            // only a strict improvement replaces the current best
            match best {
                Some((best_score, _)) if score <= best_score => {}
                _ => best = Some((score, column)),
            }
        }
        let (score, column) = best.ok_or(GameError::NoLegalMoves)?;

        info!(
            player = self.context.player.number(),
            column,
            score,
            nodes = self.node_count,
            "chose move"
        );
        Ok((score, column))
    }
}

/// The recursive half of a search, below one root move
///
/// Each node receives its grid by reference and owns the successors it
/// builds, so sibling branches never share a grid.
struct Subtree {
    context: SearchContext,
    node_count: usize,
}

impl Subtree {
    fn new(context: SearchContext) -> Self {
        Self {
            context,
            node_count: 0,
        }
    }

    /// Checks the cutoff rule at the entry of a node
    ///
    /// Returns the value of the node if it is terminal or at the depth limit
    fn cutoff(&mut self, grid: &Grid, depth: usize) -> Option<i32> {
        self.node_count += 1;
        let value = evaluate(grid, self.context.opponent);
        if value != 0 || depth >= self.context.max_depth {
            Some(value)
        } else {
            None
        }
    }

    /// Node where the searching player moves
    fn max_node(&mut self, grid: &Grid, depth: usize) -> i32 {
        let depth = depth + 1;
        if let Some(value) = self.cutoff(grid, depth) {
            return value;
        }
        let mut best = None;
        for (_column, next) in grid.successors(self.context.player) {
            let score = self.min_node(&next, depth);
            best = Some(best.map_or(score, |b: i32| b.max(score)));
        }
        // a full grid without a winner is a draw
        best.unwrap_or(0)
    }

    /// Node where the opponent moves
    fn min_node(&mut self, grid: &Grid, depth: usize) -> i32 {
        let depth = depth + 1;
        if let Some(value) = self.cutoff(grid, depth) {
            return value;
        }
        let mut best = None;
        for (_column, next) in grid.successors(self.context.opponent) {
            let score = self.max_node(&next, depth);
            best = Some(best.map_or(score, |b: i32| b.min(score)));
        }
        best.unwrap_or(0)
    }
}

impl std::ops::Deref for Searcher {
    type Target = Grid;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}
