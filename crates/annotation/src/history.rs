//! Bounded undo/redo history of surface snapshots
//!
//! The top of the undo stack is always the snapshot of what the surface
//! currently shows. Undo therefore needs at least two entries: it moves the
//! top onto the redo stack and hands back the entry below it for restoring.
//! The surface is never restored to an empty or undefined state.

use std::collections::VecDeque;

use tracing::debug;

use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::snapshot::Snapshot;

/// Lifecycle of a history instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// Nothing committed yet
    Empty,
    /// At least one snapshot committed
    HasHistory,
}

/// Undo/redo stacks of full-surface snapshots
#[derive(Debug, Clone)]
pub struct History {
    /// Undo stack (most recent at back)
    undo_stack: VecDeque<Snapshot>,
    /// Redo stack (most recent at end)
    redo_stack: Vec<Snapshot>,
    /// Maximum undo levels
    limit: usize,
    /// Set on first commit
    state: HistoryState,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create an empty history keeping at most `limit` undo entries
    ///
    /// A limit of zero is raised to one: the current state is always kept.
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            undo_stack: VecDeque::with_capacity(limit + 1),
            redo_stack: Vec::new(),
            limit,
            state: HistoryState::Empty,
        }
    }

    /// Record a new surface state
    ///
    /// Evicts the oldest entries past the limit and invalidates redo.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.undo_stack.push_back(snapshot);
        self.evict_overflow();
        self.redo_stack.clear();
        self.state = HistoryState::HasHistory;
    }

    /// Step back one state
    ///
    /// Returns the snapshot the surface must be restored to, or None if
    /// fewer than two entries are available.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.undo_stack.len() < 2 {
            debug!("Undo: {} entries, nothing to undo", self.undo_stack.len());
            return None;
        }

        let undone = self.undo_stack.pop_back()?;
        self.redo_stack.push(undone);

        let restore = self.undo_stack.back().cloned();
        debug!(
            "Undo: {} undo / {} redo entries remain",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        restore
    }

    /// Step forward one state
    ///
    /// Returns the snapshot the surface must be restored to, or None if
    /// nothing has been undone since the last commit.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let Some(snapshot) = self.redo_stack.pop() else {
            debug!("Redo: no entries available");
            return None;
        };

        self.undo_stack.push_back(snapshot.clone());
        self.evict_overflow();
        debug!(
            "Redo: {} undo / {} redo entries remain",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Some(snapshot)
    }

    /// Snapshot [`undo`](Self::undo) would hand back, without moving anything
    pub fn peek_undo(&self) -> Option<&Snapshot> {
        let len = self.undo_stack.len();
        if len < 2 {
            return None;
        }
        self.undo_stack.get(len - 2)
    }

    /// Snapshot [`redo`](Self::redo) would hand back, without moving anything
    pub fn peek_redo(&self) -> Option<&Snapshot> {
        self.redo_stack.last()
    }

    fn evict_overflow(&mut self) {
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() >= 2
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack (including the current state)
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Snapshot of the current state, if any
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo_stack.back()
    }

    /// Undo entries from oldest to most recent
    pub fn undo_entries(&self) -> impl Iterator<Item = &Snapshot> {
        self.undo_stack.iter()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn state(&self) -> HistoryState {
        self.state
    }
}
