//! Deterministic grid transition model

use super::{grid::Grid, position::Position};
use crate::gridworld::Action;

/// Position reached by taking `action` from `pos`.
///
/// Moves are clamped at the grid border. Stepping into a wall leaves the
/// agent where it was.
pub fn next_position(pos: Position, action: Action, grid: &Grid) -> Position {
    let max_x = grid.cols().saturating_sub(1);
    let max_y = grid.rows().saturating_sub(1);

    let candidate = match action {
        Action::Up => Position::new(pos.x, pos.y.saturating_sub(1)),
        Action::Down => Position::new(pos.x, (pos.y + 1).min(max_y)),
        Action::Left => Position::new(pos.x.saturating_sub(1), pos.y),
        Action::Right => Position::new((pos.x + 1).min(max_x), pos.y),
    };

    if grid.cell_at(candidate).is_wall() {
        return pos;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gridworld::CellType;

    fn walled_grid() -> Grid {
        // . . .
        // . # .
        // . . .
        let mut grid = Grid::new(3, 3);
        grid.set_cell(Position::new(1, 1), CellType::Wall, 0.0).unwrap();
        grid
    }

    #[test]
    fn test_moves_one_step() {
        let grid = walled_grid();
        let origin = Position::new(0, 0);
        assert_eq!(
            next_position(origin, Action::Right, &grid),
            Position::new(1, 0)
        );
        assert_eq!(
            next_position(origin, Action::Down, &grid),
            Position::new(0, 1)
        );
    }

    #[test]
    fn test_border_clamps() {
        let grid = walled_grid();
        assert_eq!(
            next_position(Position::new(0, 0), Action::Up, &grid),
            Position::new(0, 0)
        );
        assert_eq!(
            next_position(Position::new(0, 2), Action::Left, &grid),
            Position::new(0, 2)
        );
        assert_eq!(
            next_position(Position::new(2, 2), Action::Down, &grid),
            Position::new(2, 2)
        );
        assert_eq!(
            next_position(Position::new(2, 0), Action::Right, &grid),
            Position::new(2, 0)
        );
    }

    #[test]
    fn test_wall_bounces_back() {
        let grid = walled_grid();
        let cases = [
            (Position::new(1, 0), Action::Down),
            (Position::new(1, 2), Action::Up),
            (Position::new(0, 1), Action::Right),
            (Position::new(2, 1), Action::Left),
        ];
        for (pos, action) in cases {
            assert_eq!(next_position(pos, action, &grid), pos, "{pos} {action}");
        }
    }

    #[test]
    fn test_is_deterministic() {
        let grid = walled_grid();
        for pos in grid.positions() {
            for action in Action::ALL {
                assert_eq!(
                    next_position(pos, action, &grid),
                    next_position(pos, action, &grid)
                );
            }
        }
    }
}
