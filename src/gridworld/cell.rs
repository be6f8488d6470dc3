//! Cell types and per-cell rewards

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Kind of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellType {
    #[default]
    Empty,
    Wall,
    Trap,
    Goal,
    Start,
}

impl CellType {
    /// Next type in the editing cycle Empty → Wall → Trap → Goal → Start → Empty.
    pub fn rotated(self) -> CellType {
        match self {
            CellType::Empty => CellType::Wall,
            CellType::Wall => CellType::Trap,
            CellType::Trap => CellType::Goal,
            CellType::Goal => CellType::Start,
            CellType::Start => CellType::Empty,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CellType::Empty => "EMPTY",
            CellType::Wall => "WALL",
            CellType::Trap => "TRAP",
            CellType::Goal => "GOAL",
            CellType::Start => "START",
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CellType::Empty => '.',
            CellType::Wall => '#',
            CellType::Trap => 'T',
            CellType::Goal => 'G',
            CellType::Start => 'S',
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CellType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" | "." => Ok(CellType::Empty),
            "wall" | "#" => Ok(CellType::Wall),
            "trap" | "t" => Ok(CellType::Trap),
            "goal" | "g" => Ok(CellType::Goal),
            "start" | "s" => Ok(CellType::Start),
            _ => Err(crate::Error::UnknownCellType {
                input: s.to_string(),
            }),
        }
    }
}

/// A cell of the grid. The engine only ever reads `reward`; the sign convention
/// (negative traps, positive goals) comes from the reward configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "type")]
    pub kind: CellType,
    pub reward: f64,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind: CellType::Empty,
        reward: 0.0,
    };

    pub const fn new(kind: CellType, reward: f64) -> Self {
        Self { kind, reward }
    }

    pub fn is_wall(&self) -> bool {
        self.kind == CellType::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_cycle_returns_to_empty() {
        let mut kind = CellType::Empty;
        let mut visited = Vec::new();
        for _ in 0..5 {
            kind = kind.rotated();
            visited.push(kind);
        }
        assert_eq!(
            visited,
            vec![
                CellType::Wall,
                CellType::Trap,
                CellType::Goal,
                CellType::Start,
                CellType::Empty
            ]
        );
    }

    #[test]
    fn test_cell_type_from_str() {
        assert_eq!("Goal".parse::<CellType>().unwrap(), CellType::Goal);
        assert_eq!("#".parse::<CellType>().unwrap(), CellType::Wall);
        assert!("lava".parse::<CellType>().is_err());
    }
}
