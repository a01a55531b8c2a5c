use std::fmt;

/// A cell on the playing grid, addressed by column and row.  `(0, 0)` is the
/// top-left corner.
///
/// Coordinates are signed so that a snake can be moved past the edge of the
/// grid without any bounds checking; the board reports anything off the grid
/// as a wall.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const fn new(col: i32, row: i32) -> Coord {
        Coord { col, row }
    }

    /// Manhattan distance between two coordinates
    pub fn distance(self, other: Coord) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Return the coordinate one cell away from `pos` in this direction
    pub fn advance(self, pos: Coord) -> Coord {
        let Coord { col, row } = pos;
        match self {
            Direction::Left => Coord::new(col - 1, row),
            Direction::Right => Coord::new(col + 1, row),
            Direction::Up => Coord::new(col, row - 1),
            Direction::Down => Coord::new(col, row + 1),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Direction::Left, Coord::new(2, 7), Coord::new(1, 7))]
    #[case(Direction::Right, Coord::new(2, 7), Coord::new(3, 7))]
    #[case(Direction::Up, Coord::new(2, 7), Coord::new(2, 6))]
    #[case(Direction::Down, Coord::new(2, 7), Coord::new(2, 8))]
    #[case(Direction::Left, Coord::new(0, 0), Coord::new(-1, 0))]
    #[case(Direction::Up, Coord::new(0, 0), Coord::new(0, -1))]
    fn test_direction_advance(#[case] d: Direction, #[case] pos: Coord, #[case] r: Coord) {
        assert_eq!(d.advance(pos), r);
    }

    #[test]
    fn reverse_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
        }
    }

    #[test]
    fn advance_then_reverse_returns() {
        let pos = Coord::new(10, 12);
        for d in Direction::ALL {
            assert_eq!(d.reverse().advance(d.advance(pos)), pos);
        }
    }

    #[rstest]
    #[case(Coord::new(1, 1), Coord::new(1, 1), 0)]
    #[case(Coord::new(1, 1), Coord::new(4, 5), 7)]
    #[case(Coord::new(4, 5), Coord::new(1, 1), 7)]
    fn test_distance(#[case] a: Coord, #[case] b: Coord, #[case] dist: u32) {
        assert_eq!(a.distance(b), dist);
    }
}
