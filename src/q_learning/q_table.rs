//! Q-table storage: one four-action value vector per grid cell

use serde::{Deserialize, Serialize};

use crate::gridworld::{Action, Position};

/// Values of the four actions in one state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ActionValues {
    pub up: f64,
    pub down: f64,
    pub left: f64,
    pub right: f64,
}

impl ActionValues {
    pub const ZERO: ActionValues = ActionValues {
        up: 0.0,
        down: 0.0,
        left: 0.0,
        right: 0.0,
    };

    pub fn get(&self, action: Action) -> f64 {
        match action {
            Action::Up => self.up,
            Action::Down => self.down,
            Action::Left => self.left,
            Action::Right => self.right,
        }
    }

    pub fn set(&mut self, action: Action, value: f64) {
        match action {
            Action::Up => self.up = value,
            Action::Down => self.down = value,
            Action::Left => self.left = value,
            Action::Right => self.right = value,
        }
    }

    /// Largest of the four values
    pub fn max(&self) -> f64 {
        self.up.max(self.down).max(self.left).max(self.right)
    }
}

/// Q-table mapping each cell of a `rows x cols` grid to its action values.
///
/// Entries are stored row-major, so iteration order matches the table display
/// (sorted by y, then x).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    rows: usize,
    cols: usize,
    values: Vec<ActionValues>,
}

impl QTable {
    /// Create a table with every action of every cell at zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![ActionValues::ZERO; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of states stored (`rows * cols`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.x < self.cols && pos.y < self.rows).then(|| pos.y * self.cols + pos.x)
    }

    /// Action values at `pos`; zero for positions the table does not cover.
    pub fn values(&self, pos: Position) -> ActionValues {
        self.index(pos)
            .map(|idx| self.values[idx])
            .unwrap_or(ActionValues::ZERO)
    }

    /// Q(pos, action), zero when `pos` is not covered
    pub fn get(&self, pos: Position, action: Action) -> f64 {
        self.values(pos).get(action)
    }

    /// max over actions of Q(pos, ·), zero when `pos` is not covered
    pub fn max_value(&self, pos: Position) -> f64 {
        self.index(pos)
            .map(|idx| self.values[idx].max())
            .unwrap_or(0.0)
    }

    /// Write Q(pos, action) in place. Returns `false` if `pos` is not covered.
    pub fn set(&mut self, pos: Position, action: Action, value: f64) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.values[idx].set(action, value);
                true
            }
            None => false,
        }
    }

    /// Copy of this table with the single `(pos, action)` entry replaced.
    pub fn updated(&self, pos: Position, action: Action, value: f64) -> QTable {
        let mut table = self.clone();
        table.set(pos, action, value);
        table
    }

    /// `(position, values)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &ActionValues)> + '_ {
        let cols = self.cols.max(1);
        self.values
            .iter()
            .enumerate()
            .map(move |(idx, values)| (Position::new(idx % cols, idx / cols), values))
    }
}
