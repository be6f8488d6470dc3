//! Learner-editable Q-table and its comparison against the reference table

use serde::{Deserialize, Serialize};

use super::q_table::QTable;
use crate::{
    Error, Result,
    gridworld::{Action, Position},
};

/// Absolute tolerance under which a learner's value counts as correct
pub const TOLERANCE: f64 = 0.01;

/// Parse a learner's raw entry.
///
/// Blank input reads as zero, matching an untouched numeric field. Anything
/// that is not a number becomes NaN, which never compares as correct.
pub fn parse_user_value(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Whether `raw` is within [`TOLERANCE`] of `reference`.
pub fn is_correct(raw: &str, reference: f64) -> bool {
    (parse_user_value(raw) - reference).abs() < TOLERANCE
}

/// Q-table filled in by the learner. Values are kept exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserQTable {
    rows: usize,
    cols: usize,
    entries: Vec<[String; 4]>,
}

impl UserQTable {
    /// Create a table with every entry set to `"0"`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: vec![std::array::from_fn(|_| "0".to_string()); rows * cols],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.x < self.cols && pos.y < self.rows).then(|| pos.y * self.cols + pos.x)
    }

    /// Raw entry at `(pos, action)`, if `pos` is covered
    pub fn raw(&self, pos: Position, action: Action) -> Option<&str> {
        self.index(pos)
            .map(|idx| self.entries[idx][action.index()].as_str())
    }

    /// Store the learner's input without validating it.
    pub fn set(&mut self, pos: Position, action: Action, raw: impl Into<String>) -> Result<()> {
        let idx = self.index(pos).ok_or(Error::PositionOutOfBounds {
            x: pos.x,
            y: pos.y,
            cols: self.cols,
            rows: self.rows,
        })?;
        self.entries[idx][action.index()] = raw.into();
        Ok(())
    }

    /// Compare every entry against `reference`, row-major and in [`Action::ALL`] order.
    pub fn validate(&self, reference: &QTable) -> ValidationReport {
        let cols = self.cols.max(1);
        let entries = self
            .entries
            .iter()
            .enumerate()
            .flat_map(|(idx, row)| {
                let pos = Position::new(idx % cols, idx / cols);
                Action::ALL.into_iter().map(move |action| {
                    let raw = row[action.index()].clone();
                    let expected = reference.get(pos, action);
                    EntryVerdict {
                        position: pos,
                        action,
                        correct: is_correct(&raw, expected),
                        raw,
                        expected,
                    }
                })
            })
            .collect();
        ValidationReport { entries }
    }
}

/// Verdict for one `(cell, action)` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryVerdict {
    pub position: Position,
    pub action: Action,
    pub raw: String,
    pub expected: f64,
    pub correct: bool,
}

/// Comparison of the learner's table against the reference table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub entries: Vec<EntryVerdict>,
}

impl ValidationReport {
    pub fn correct(&self) -> usize {
        self.entries.iter().filter(|e| e.correct).count()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn all_correct(&self) -> bool {
        self.entries.iter().all(|e| e.correct)
    }

    /// Entries the learner got wrong
    pub fn mistakes(&self) -> impl Iterator<Item = &EntryVerdict> {
        self.entries.iter().filter(|e| !e.correct)
    }
}
