//! Single-step Q-learning update engine
//!
//! One step moves the agent, reads the destination reward and applies
//!
//! ```text
//! target = r                          (destination is a goal)
//! target = r + γ · max_a' Q(s', a')   (otherwise)
//! Q(s,a) ← (1 - α) · Q(s,a) + α · target
//! ```
//!
//! The stored value is rounded to two decimals on every step so that a hand
//! calculation of the same sequence reproduces the reference table exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::q_table::QTable;
use crate::gridworld::{Action, CellType, Grid, Position, next_position};

/// Number of decimals kept for stored Q-values and displayed targets
pub const DISPLAY_DECIMALS: usize = 2;

/// Round to [`DISPLAY_DECIMALS`] places from the exact binary value.
///
/// `0.105` is stored as `0.10499999…` and rounds down to `0.1`. Only values
/// that sit exactly halfway (such as `0.125`) round away from zero.
pub fn round_display(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // A double is exactly halfway at d decimals iff |v| * 2^(d+1) is an odd integer.
    let halves = value.abs() * 2f64.powi(DISPLAY_DECIMALS as i32 + 1);
    if halves.fract() == 0.0 && halves % 2.0 == 1.0 {
        let scale = 10f64.powi(DISPLAY_DECIMALS as i32);
        return (value * scale).round() / scale;
    }
    format!("{value:.prec$}", prec = DISPLAY_DECIMALS)
        .parse()
        .unwrap_or(value)
}

/// Learning hyperparameters read on every step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// α
    pub learning_rate: f64,
    /// γ
    pub discount_factor: f64,
}

impl Settings {
    pub const DEFAULT_LEARNING_RATE: f64 = 0.5;
    pub const DEFAULT_DISCOUNT_FACTOR: f64 = 0.9;

    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            learning_rate,
            discount_factor,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEARNING_RATE, Self::DEFAULT_DISCOUNT_FACTOR)
    }
}

/// Record of the most recent update, kept for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepTrace {
    pub state: Position,
    pub action: Action,
    pub reward: f64,
    pub next_state: Position,
    pub old_q: f64,
    pub max_next_q: f64,
    /// Rounded target
    pub target: f64,
    /// Rounded value written to the reference table
    pub result: f64,
    pub terminal: bool,
}

impl StepTrace {
    /// Event log line for this transition
    pub fn log_line(&self) -> String {
        format!(
            "S{} + A({}) -> R({}) -> S'{}",
            self.state, self.action, self.reward, self.next_state
        )
    }
}

impl fmt::Display for StepTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Q{}[{}] = (1-α)·{} + α·{} = {}",
            self.state, self.action, self.old_q, self.target, self.result
        )
    }
}

/// Result of applying one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Cell the action led to (equal to the origin on a wall bounce)
    pub next_pos: Position,
    pub reward: f64,
    pub terminal: bool,
    pub trace: StepTrace,
}

/// Unrounded update value: `(target, new_q)`.
pub fn q_update(
    current_q: f64,
    reward: f64,
    max_next_q: f64,
    terminal: bool,
    settings: &Settings,
) -> (f64, f64) {
    let target = if terminal {
        reward
    } else {
        reward + settings.discount_factor * max_next_q
    };
    let alpha = settings.learning_rate;
    let new_q = (1.0 - alpha) * current_q + alpha * target;
    (target, new_q)
}

/// Apply one Q-learning step from `current` to the reference `table`.
///
/// Only goal cells are terminal; traps keep the episode running.
pub fn apply_step(
    grid: &Grid,
    settings: &Settings,
    table: &mut QTable,
    current: Position,
    action: Action,
) -> StepOutcome {
    let next_pos = next_position(current, action, grid);
    let destination = grid.cell_at(next_pos);
    let reward = destination.reward;

    let current_q = table.get(current, action);
    let max_next_q = table.max_value(next_pos);
    let terminal = destination.kind == CellType::Goal;

    let (target, new_q) = q_update(current_q, reward, max_next_q, terminal, settings);
    let result = round_display(new_q);
    table.set(current, action, result);

    StepOutcome {
        next_pos,
        reward,
        terminal,
        trace: StepTrace {
            state: current,
            action,
            reward,
            next_state: next_pos,
            old_q: current_q,
            max_next_q,
            target: round_display(target),
            result,
            terminal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::new(0.5, 0.9)
    }

    #[test]
    fn test_terminal_update() {
        let (target, new_q) = q_update(0.0, 100.0, 0.0, true, &settings());
        assert_eq!(target, 100.0);
        assert_eq!(round_display(new_q), 50.0);
    }

    #[test]
    fn test_non_terminal_update() {
        let (target, new_q) = q_update(2.0, 0.0, 10.0, false, &settings());
        assert!((target - 9.0).abs() < 1e-12);
        assert_eq!(round_display(new_q), 5.5);
    }

    #[test]
    fn test_terminal_ignores_next_value() {
        let (target, _) = q_update(0.0, 100.0, 40.0, true, &settings());
        assert_eq!(target, 100.0);
    }

    #[test]
    fn test_weighted_form_matches_incremental_form() {
        let s = Settings::new(0.3, 0.7);
        for &(q, r, next) in &[(1.25, -10.0, 3.5), (0.0, 0.0, 0.0), (-4.0, 100.0, 12.0)] {
            let (target, weighted) = q_update(q, r, next, false, &s);
            let incremental = q + s.learning_rate * (target - q);
            assert!((weighted - incremental).abs() < 1e-9);
        }
    }

    #[test]
    fn test_round_display() {
        assert_eq!(round_display(1.234), 1.23);
        assert_eq!(round_display(-0.456), -0.46);
        assert_eq!(round_display(5.5), 5.5);
    }

    #[test]
    fn test_round_display_uses_exact_binary_value() {
        // Decimal literals that look like ties but are stored just below or above.
        assert_eq!(round_display(0.105), 0.1);
        assert_eq!(round_display(-11.485), -11.48);
        assert_eq!(round_display(1.005), 1.0);
        assert_eq!(round_display(2.675), 2.67);
        assert_eq!(round_display(1.115), 1.11);
        assert_eq!(round_display(8.345), 8.35);
    }

    #[test]
    fn test_round_display_exact_ties_go_away_from_zero() {
        assert_eq!(round_display(0.125), 0.13);
        assert_eq!(round_display(-0.125), -0.13);
        assert_eq!(round_display(0.375), 0.38);
        assert_eq!(round_display(-2.625), -2.63);
    }

    #[test]
    fn test_stored_value_rounds_from_exact_product() {
        let goal_grid = |reward: f64| {
            let mut grid = Grid::new(2, 2);
            grid.set_cell(Position::new(1, 0), CellType::Goal, reward)
                .unwrap();
            grid
        };

        let mut table = QTable::new(2, 2);
        let outcome = apply_step(
            &goal_grid(0.21),
            &settings(),
            &mut table,
            Position::ORIGIN,
            Action::Right,
        );
        assert_eq!(outcome.trace.result, 0.1);
        assert_eq!(table.get(Position::ORIGIN, Action::Right), 0.1);

        let mut table = QTable::new(2, 2);
        table.set(Position::ORIGIN, Action::Right, -20.0);
        let outcome = apply_step(
            &goal_grid(-2.97),
            &settings(),
            &mut table,
            Position::ORIGIN,
            Action::Right,
        );
        assert_eq!(outcome.trace.target, -2.97);
        assert_eq!(outcome.trace.result, -11.48);
        assert!(crate::q_learning::is_correct("-11.48", outcome.trace.result));
    }

    #[test]
    fn test_apply_step_into_goal() {
        let mut grid = Grid::new(2, 2);
        grid.set_cell(Position::new(1, 0), CellType::Goal, 100.0)
            .unwrap();
        let mut table = QTable::new(2, 2);

        let outcome = apply_step(
            &grid,
            &settings(),
            &mut table,
            Position::new(0, 0),
            Action::Right,
        );

        assert!(outcome.terminal);
        assert_eq!(outcome.next_pos, Position::new(1, 0));
        assert_eq!(outcome.trace.target, 100.0);
        assert_eq!(outcome.trace.result, 50.0);
        assert_eq!(table.get(Position::new(0, 0), Action::Right), 50.0);
    }

    #[test]
    fn test_apply_step_wall_bounce_uses_origin_reward() {
        let mut grid = Grid::new(2, 2);
        grid.set_cell(Position::new(0, 0), CellType::Trap, -10.0)
            .unwrap();
        grid.set_cell(Position::new(1, 0), CellType::Wall, 0.0).unwrap();
        let mut table = QTable::new(2, 2);

        let outcome = apply_step(
            &grid,
            &settings(),
            &mut table,
            Position::new(0, 0),
            Action::Right,
        );

        assert_eq!(outcome.next_pos, Position::new(0, 0));
        assert_eq!(outcome.reward, -10.0);
        assert!(!outcome.terminal);
        assert_eq!(outcome.trace.result, -5.0);
    }

    #[test]
    fn test_log_line_format() {
        let trace = StepTrace {
            state: Position::new(0, 1),
            action: Action::Down,
            reward: -10.0,
            next_state: Position::new(0, 2),
            old_q: 0.0,
            max_next_q: 0.0,
            target: -10.0,
            result: -5.0,
            terminal: false,
        };
        assert_eq!(trace.log_line(), "S(0,1) + A(DOWN) -> R(-10) -> S'(0,2)");
    }
}
