//! Grid coordinates and agent actions

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell coordinate: `x` is the column, `y` the row, both 0-indexed from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// One of the four moves available to the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Display order of the table columns, also the pool for random steps.
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Up, Action::Down];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Up => "UP",
            Action::Down => "DOWN",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
        }
    }

    /// Slot of this action in a per-state `[_; 4]` array.
    pub(crate) fn index(self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Action::Up),
            "down" | "d" => Ok(Action::Down),
            "left" | "l" => Ok(Action::Left),
            "right" | "r" => Ok(Action::Right),
            _ => Err(crate::Error::UnknownAction {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing_is_case_insensitive() {
        assert_eq!("UP".parse::<Action>().unwrap(), Action::Up);
        assert_eq!(" left ".parse::<Action>().unwrap(), Action::Left);
        assert_eq!("r".parse::<Action>().unwrap(), Action::Right);
        assert!("north".parse::<Action>().is_err());
    }

    #[test]
    fn test_action_indices_are_distinct() {
        let mut seen = [false; 4];
        for action in Action::ALL {
            assert!(!seen[action.index()]);
            seen[action.index()] = true;
        }
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 3).to_string(), "(2,3)");
    }
}
