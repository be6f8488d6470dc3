//! Tabular Q-learning for the grid world
//!
//! Two tables live side by side:
//!
//! - the **reference table** ([`QTable`]), written only by [`apply_step`];
//! - the **user table** ([`UserQTable`]), filled in by the learner and checked
//!   against the reference with [`is_correct`].
//!
//! ## Usage Example
//!
//! ```
//! use qlab::gridworld::{Action, CellType, Grid, Position};
//! use qlab::q_learning::{QTable, Settings, apply_step};
//!
//! let mut grid = Grid::new(2, 2);
//! grid.set_cell(Position::new(1, 0), CellType::Goal, 100.0)?;
//! let mut table = QTable::new(grid.rows(), grid.cols());
//!
//! let outcome = apply_step(&grid, &Settings::default(), &mut table, Position::new(0, 0), Action::Right);
//! assert!(outcome.terminal);
//! assert_eq!(table.get(Position::new(0, 0), Action::Right), 50.0);
//! # Ok::<(), qlab::Error>(())
//! ```

pub mod engine;
pub mod q_table;
pub mod user_table;

// Public re-exports
pub use engine::{
    DISPLAY_DECIMALS, Settings, StepOutcome, StepTrace, apply_step, q_update, round_display,
};
pub use q_table::{ActionValues, QTable};
pub use user_table::{
    EntryVerdict, TOLERANCE, UserQTable, ValidationReport, is_correct, parse_user_value,
};
