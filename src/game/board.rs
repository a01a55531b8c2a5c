use super::direction::Coord;
use super::pickup::PickupKind;
use super::snake::Snake;

/// What occupies a single cell of the board
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    SnakeBody,
    SnakeHead,
    Pickup(PickupKind),
}

impl Cell {
    pub fn is_pickup(self) -> bool {
        matches!(self, Cell::Pickup(_))
    }

    /// Is moving the snake's head onto this cell the end of the game?
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            Cell::Wall | Cell::SnakeBody | Cell::SnakeHead | Cell::Pickup(PickupKind::Lethal)
        )
    }
}

/// A square grid of cells surrounded by a ring of walls
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    side: u16,
    /// Row-major cell contents
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with `side` cells on each side, reset to a blank state
    pub fn new(side: u16) -> Board {
        let mut board = Board {
            side,
            cells: vec![Cell::Empty; usize::from(side) * usize::from(side)],
        };
        board.reset();
        board
    }

    pub fn side(&self) -> u16 {
        self.side
    }

    /// Wall off the border and empty the interior, discarding all pickups
    pub fn reset(&mut self) {
        for pos in self.positions() {
            let cell = if self.is_border(pos) {
                Cell::Wall
            } else {
                Cell::Empty
            };
            self.put(pos, cell);
        }
    }

    /// Redraw the snake onto the board.  Snake cells from the previous tick
    /// are cleared first.  Pickups that the snake now covers are gone for
    /// good.
    pub fn refresh(&mut self, snake: &Snake) {
        for pos in self.positions() {
            if self.is_border(pos) {
                self.put(pos, Cell::Wall);
            } else if !self.cell_at(pos).is_pickup() {
                self.put(pos, Cell::Empty);
            }
        }
        for &pos in snake.segments().iter().skip(1) {
            self.put(pos, Cell::SnakeBody);
        }
        self.put(snake.head(), Cell::SnakeHead);
    }

    /// Return the contents of the cell at `pos`.  Everything off the grid is
    /// a wall.
    pub fn cell_at(&self, pos: Coord) -> Cell {
        self.index(pos).map_or(Cell::Wall, |i| self.cells[i])
    }

    /// Place `cell` at `pos`.  Positions off the grid or on the border are
    /// left alone; returns whether the cell was written.
    pub fn set(&mut self, pos: Coord, cell: Cell) -> bool {
        if self.is_border(pos) {
            false
        } else {
            self.put(pos, cell)
        }
    }

    pub fn is_border(&self, pos: Coord) -> bool {
        let max = i32::from(self.side) - 1;
        pos.col <= 0 || pos.row <= 0 || pos.col >= max || pos.row >= max
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.index(pos).is_some()
    }

    /// Iterate over every coordinate on the board in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Coord> {
        let side = i32::from(self.side);
        (0..side).flat_map(move |row| (0..side).map(move |col| Coord::new(col, row)))
    }

    /// Iterate over every coordinate on the board along with its contents
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Iterate over the pickups currently on the board
    pub fn pickups(&self) -> impl Iterator<Item = (Coord, PickupKind)> + '_ {
        self.cells().filter_map(|(pos, cell)| match cell {
            Cell::Pickup(kind) => Some((pos, kind)),
            _ => None,
        })
    }

    /// Count the cells holding the given contents
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    fn put(&mut self, pos: Coord, cell: Cell) -> bool {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
            true
        } else {
            false
        }
    }

    fn index(&self, pos: Coord) -> Option<usize> {
        let col = u16::try_from(pos.col).ok().filter(|&c| c < self.side)?;
        let row = u16::try_from(pos.row).ok().filter(|&r| r < self.side)?;
        Some(usize::from(row) * usize::from(self.side) + usize::from(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;

    fn border_is_wall(board: &Board) -> bool {
        board
            .cells()
            .filter(|&(pos, _)| board.is_border(pos))
            .all(|(_, cell)| cell == Cell::Wall)
    }

    #[test]
    fn reset_board() {
        let board = Board::new(30);
        assert!(border_is_wall(&board));
        assert_eq!(board.count(Cell::Wall), 30 * 4 - 4);
        assert_eq!(board.count(Cell::Empty), 28 * 28);
    }

    #[test]
    fn reset_discards_pickups() {
        let mut board = Board::new(10);
        assert!(board.set(Coord::new(3, 3), Cell::Pickup(PickupKind::Boost)));
        board.reset();
        assert_eq!(board.pickups().count(), 0);
        assert_eq!(board.cell_at(Coord::new(3, 3)), Cell::Empty);
    }

    #[test]
    fn off_grid_is_wall() {
        let board = Board::new(10);
        assert_eq!(board.cell_at(Coord::new(-1, 4)), Cell::Wall);
        assert_eq!(board.cell_at(Coord::new(4, 10)), Cell::Wall);
        assert!(!board.contains(Coord::new(10, 0)));
        assert!(board.contains(Coord::new(9, 9)));
    }

    #[test]
    fn border_cannot_be_overwritten() {
        let mut board = Board::new(10);
        assert!(!board.set(Coord::new(0, 4), Cell::Pickup(PickupKind::Food)));
        assert!(!board.set(Coord::new(9, 9), Cell::Empty));
        assert!(border_is_wall(&board));
    }

    #[test]
    fn refresh_stamps_snake() {
        let mut board = Board::new(30);
        let snake = Snake::initial();
        board.refresh(&snake);
        assert_eq!(board.count(Cell::SnakeHead), 1);
        assert_eq!(board.count(Cell::SnakeBody), 2);
        assert_eq!(board.cell_at(Coord::new(4, 4)), Cell::SnakeHead);
        assert_eq!(board.cell_at(Coord::new(3, 4)), Cell::SnakeBody);
        assert_eq!(board.cell_at(Coord::new(2, 4)), Cell::SnakeBody);
        assert!(border_is_wall(&board));
    }

    #[test]
    fn refresh_clears_old_snake_cells() {
        let mut board = Board::new(30);
        let mut snake = Snake::initial();
        board.refresh(&snake);
        snake.advance();
        board.refresh(&snake);
        assert_eq!(board.cell_at(Coord::new(2, 4)), Cell::Empty);
        assert_eq!(board.cell_at(Coord::new(5, 4)), Cell::SnakeHead);
        assert_eq!(board.count(Cell::SnakeHead), 1);
        assert_eq!(board.count(Cell::SnakeBody), 2);
    }

    #[test]
    fn refresh_keeps_uncovered_pickups() {
        let mut board = Board::new(30);
        assert!(board.set(Coord::new(10, 10), Cell::Pickup(PickupKind::Points)));
        board.refresh(&Snake::initial());
        assert_eq!(
            board.pickups().collect::<Vec<_>>(),
            [(Coord::new(10, 10), PickupKind::Points)]
        );
    }

    #[test]
    fn covered_pickup_is_destroyed() {
        let mut board = Board::new(30);
        let mut snake = Snake::initial();
        assert!(board.set(Coord::new(5, 4), Cell::Pickup(PickupKind::Food)));
        board.refresh(&snake);
        snake.advance();
        board.refresh(&snake);
        assert_eq!(board.cell_at(Coord::new(5, 4)), Cell::SnakeHead);
        snake.turn(Direction::Down);
        for _ in 0..4 {
            snake.advance();
        }
        board.refresh(&snake);
        assert_eq!(board.cell_at(Coord::new(5, 4)), Cell::Empty);
        assert_eq!(board.pickups().count(), 0);
    }

    #[test]
    fn growth_slots_share_a_cell() {
        let mut board = Board::new(30);
        let mut snake = Snake::initial();
        snake.extend(3);
        board.refresh(&snake);
        assert_eq!(board.count(Cell::SnakeHead), 1);
        assert_eq!(board.count(Cell::SnakeBody), 2);
    }

    #[test]
    fn fatal_cells() {
        assert!(Cell::Wall.is_fatal());
        assert!(Cell::SnakeBody.is_fatal());
        assert!(Cell::Pickup(PickupKind::Lethal).is_fatal());
        assert!(!Cell::Empty.is_fatal());
        assert!(!Cell::Pickup(PickupKind::Penalty).is_fatal());
    }
}
