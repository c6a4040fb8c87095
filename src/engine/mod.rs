//! High-level engine facade wrapping the searcher and its transposition
//! table.

use crate::board::{attack_tables, Position, Search, SearchLimits, SearchResult};
use crate::sync::CancelToken;

/// Top-level engine API for a host application.
///
/// ```
/// use lanternfish::board::{Position, SearchLimits};
/// use lanternfish::engine::Engine;
///
/// let mut engine = Engine::new(16);
/// let mut pos = Position::startpos();
/// let limits = SearchLimits { max_depth: 3, ..Default::default() };
/// let result = engine.search(&mut pos, &limits);
/// assert!(!result.best_move_uci().is_empty());
/// ```
pub struct Engine {
    search: Search,
}

impl Engine {
    /// Create an engine with a `tt_mb`-megabyte transposition table.
    ///
    /// Builds the attack tables up front so the first search does not pay the
    /// magic-number search cost.
    #[must_use]
    pub fn new(tt_mb: usize) -> Self {
        attack_tables::init();
        #[cfg(feature = "logging")]
        log::debug!("engine ready, tt {tt_mb} MB");
        Engine {
            search: Search::new(tt_mb),
        }
    }

    /// Run a search and return the best move found.
    pub fn search(&mut self, pos: &mut Position, limits: &SearchLimits) -> SearchResult {
        self.search.search(pos, limits)
    }

    /// Stop a running search. The search returns its last completed
    /// iteration's result.
    pub fn cancel(&self) {
        self.search.cancel();
    }

    /// A handle for cancelling from another thread.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.search.cancel_token()
    }

    /// Resize the transposition table; all entries are dropped.
    pub fn set_tt_size(&mut self, mb: usize) {
        self.search.tt_mut().resize(mb);
    }

    /// Drop all transposition table entries.
    pub fn clear_tt(&mut self) {
        self.search.tt_mut().clear();
    }

    /// Per-mille fill rate of the transposition table.
    #[must_use]
    pub fn hashfull(&self) -> u32 {
        self.search.tt().hashfull()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_hashfull_lifecycle() {
        let mut engine = Engine::new(1);
        assert_eq!(engine.hashfull(), 0);

        let mut pos = Position::startpos();
        let limits = SearchLimits {
            max_depth: 4,
            ..Default::default()
        };
        engine.search(&mut pos, &limits);
        let fill = engine.hashfull();
        assert!(fill > 0 && fill < 1000, "hashfull {fill}");

        engine.clear_tt();
        assert_eq!(engine.hashfull(), 0);
    }

    #[test]
    fn test_set_tt_size_keeps_engine_usable() {
        let mut engine = Engine::new(1);
        engine.set_tt_size(2);
        engine.clear_tt();

        let mut pos = Position::startpos();
        let limits = SearchLimits {
            max_depth: 2,
            ..Default::default()
        };
        let result = engine.search(&mut pos, &limits);
        assert!(result.best_move.is_some());
        assert_eq!(result.depth, 2);
    }
}
