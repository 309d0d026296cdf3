use crate::score::engine::ScoringEngine;
use crate::score::models::{MatchState, Player};
use crate::score::ring_buffer::BoundedRingBuffer;
use tracing::debug;

/// Undo depth. Older snapshots are silently discarded.
pub const HISTORY_LEN: usize = 32;
/// Redo depth. Kept shallow; only memory hangs on the 32/4 split.
pub const FUTURE_LEN: usize = 4;

/// Owns the authoritative match state plus its undo and redo snapshots.
#[derive(Debug, Default)]
pub struct MatchHistory {
    current: MatchState,
    past: BoundedRingBuffer<MatchState, HISTORY_LEN>,
    future: BoundedRingBuffer<MatchState, FUTURE_LEN>,
}

impl MatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &MatchState {
        &self.current
    }

    /// Records a point. Any pending redo is discarded.
    pub fn apply_forward(&mut self, player: Player) -> &MatchState {
        self.past.push(self.current);
        self.future.clear();
        ScoringEngine::register_point(&mut self.current, player);
        &self.current
    }

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                self.future.push(self.current);
                self.current = previous;
                debug!(undo_left = self.past.len(), "undo");
                true
            }
            None => false,
        }
    }

    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                self.past.push(self.current);
                self.current = next;
                debug!(redo_left = self.future.len(), "redo");
                true
            }
            None => false,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}
