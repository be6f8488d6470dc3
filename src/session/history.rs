//! Undo history: full snapshots taken before each step

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    gridworld::Position,
    q_learning::{QTable, StepTrace, UserQTable},
};

/// State captured immediately before a step.
///
/// Every entry owns its copies of both tables and the log, so later edits to
/// the live session never reach back into history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub agent: Position,
    pub reference: QTable,
    pub user: UserQTable,
    pub log: VecDeque<String>,
    pub last_step: Option<StepTrace>,
}

/// Stack of snapshots, newest on top
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(x: usize) -> HistoryEntry {
        HistoryEntry {
            agent: Position::new(x, 0),
            reference: QTable::new(2, 2),
            user: UserQTable::new(2, 2),
            log: VecDeque::new(),
            last_step: None,
        }
    }

    #[test]
    fn test_pop_is_last_in_first_out() {
        let mut history = History::new();
        history.push(entry(0));
        history.push(entry(1));
        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().unwrap().agent, Position::new(1, 0));
        assert_eq!(history.pop().unwrap().agent, Position::new(0, 0));
        assert!(history.pop().is_none());
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.push(entry(0));
        history.clear();
        assert!(history.is_empty());
        assert!(history.pop().is_none());
    }
}
