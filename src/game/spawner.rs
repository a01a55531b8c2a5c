use super::board::{Board, Cell};
use super::direction::Coord;
use super::pickup::PickupKind;
use crate::consts;
use crate::options::Options;
use rand::Rng;

/// Places pickups on empty cells and, in chaos mode, takes them away again.
/// Keeps count of how many pickups are on the board.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PickupSpawner {
    on_board: usize,
}

impl PickupSpawner {
    pub fn new(on_board: usize) -> PickupSpawner {
        PickupSpawner { on_board }
    }

    /// Number of pickups currently on the board
    pub fn on_board(&self) -> usize {
        self.on_board
    }

    /// Record that the snake has consumed a pickup
    pub fn consumed(&mut self) {
        self.on_board = self.on_board.saturating_sub(1);
    }

    /// Try to place a pickup on a random empty cell.
    ///
    /// The kind is drawn from the weighted band table for the current mode;
    /// a kind that has been disabled in `options` becomes food instead.  If
    /// `may_fail` is true, the draw is taken from a much wider range, and
    /// draws outside the table place nothing.
    ///
    /// Returns the position & kind of the new pickup, if any.
    ///
    /// # Panics
    ///
    /// Panics if no empty cell is found after
    /// [`MAX_SAMPLING_ATTEMPTS`][consts::MAX_SAMPLING_ATTEMPTS] draws.
    pub fn try_spawn<R: Rng>(
        &mut self,
        board: &mut Board,
        options: &Options,
        rng: &mut R,
        may_fail: bool,
    ) -> Option<(Coord, PickupKind)> {
        let pos = sample_cell(board, rng, |cell| cell == Cell::Empty);
        let range = if may_fail {
            consts::CHAOS_DRAW_RANGE
        } else {
            consts::DRAW_RANGE
        };
        let draw = rng.random_range(1..=range);
        let kind = PickupKind::from_draw(draw, options.chaos)?;
        let kind = if options.pickup_enabled(kind) {
            kind
        } else {
            PickupKind::Food
        };
        if board.set(pos, Cell::Pickup(kind)) {
            self.on_board += 1;
            tracing::debug!(%pos, %kind, on_board = self.on_board, "Placed pickup");
            Some((pos, kind))
        } else {
            None
        }
    }

    /// In chaos mode, occasionally remove a random pickup from the board.
    /// Nothing happens if fewer than two pickups are present.
    ///
    /// Returns the position & kind of the removed pickup, if any.
    ///
    /// # Panics
    ///
    /// Panics if the counter says there are pickups on the board but none is
    /// found after [`MAX_SAMPLING_ATTEMPTS`][consts::MAX_SAMPLING_ATTEMPTS]
    /// draws.
    pub fn try_remove<R: Rng>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
    ) -> Option<(Coord, PickupKind)> {
        if self.on_board < consts::MIN_PICKUPS_FOR_REMOVAL
            || !rng.random_ratio(1, consts::REMOVAL_ODDS)
        {
            return None;
        }
        let pos = sample_cell(board, rng, Cell::is_pickup);
        let Cell::Pickup(kind) = board.cell_at(pos) else {
            unreachable!("sample_cell() should only return pickup cells here");
        };
        if board.set(pos, Cell::Empty) {
            self.on_board -= 1;
            tracing::debug!(%pos, %kind, on_board = self.on_board, "Removed pickup");
            Some((pos, kind))
        } else {
            None
        }
    }
}

/// Draw uniformly random coordinates across the whole board until one whose
/// cell satisfies `pred` turns up.
///
/// # Panics
///
/// Panics after [`MAX_SAMPLING_ATTEMPTS`][consts::MAX_SAMPLING_ATTEMPTS]
/// failed draws; the board is never supposed to be crowded enough for that to
/// happen.
fn sample_cell<R: Rng, F: Fn(Cell) -> bool>(board: &Board, rng: &mut R, pred: F) -> Coord {
    let side = i32::from(board.side());
    for _ in 0..consts::MAX_SAMPLING_ATTEMPTS {
        let pos = Coord::new(rng.random_range(0..side), rng.random_range(0..side));
        if pred(board.cell_at(pos)) {
            return pos;
        }
    }
    panic!(
        "no suitable cell found after {} random draws",
        consts::MAX_SAMPLING_ATTEMPTS
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn rng() -> ChaCha12Rng {
        ChaCha12Rng::seed_from_u64(RNG_SEED)
    }

    #[test]
    fn spawn_places_on_empty_cell() {
        let mut board = Board::new(30);
        let mut spawner = PickupSpawner::default();
        let mut rng = rng();
        let (pos, kind) = spawner
            .try_spawn(&mut board, &Options::default(), &mut rng, false)
            .unwrap();
        assert!(!board.is_border(pos));
        assert_eq!(board.cell_at(pos), Cell::Pickup(kind));
        assert_eq!(spawner.on_board(), 1);
        assert_eq!(board.pickups().count(), 1);
    }

    #[test]
    fn spawn_never_fails_in_normal_mode() {
        let mut board = Board::new(30);
        let mut spawner = PickupSpawner::default();
        let mut rng = rng();
        let options = Options::default();
        for _ in 0..100 {
            let r = spawner.try_spawn(&mut board, &options, &mut rng, false);
            assert!(r.is_some());
        }
        assert_eq!(spawner.on_board(), 100);
        assert_eq!(board.pickups().count(), 100);
        assert!(board
            .pickups()
            .all(|(_, kind)| kind != PickupKind::Lethal));
    }

    #[test]
    fn spawn_avoids_occupied_cells() {
        let mut board = Board::new(6);
        for pos in [Coord::new(1, 1), Coord::new(2, 1), Coord::new(3, 1)] {
            assert!(board.set(pos, Cell::SnakeBody));
        }
        let mut spawner = PickupSpawner::default();
        let mut rng = rng();
        for _ in 0..13 {
            let r = spawner.try_spawn(&mut board, &Options::default(), &mut rng, false);
            assert!(r.is_some());
        }
        assert_eq!(board.count(Cell::SnakeBody), 3);
        assert_eq!(board.count(Cell::Empty), 0);
        assert_eq!(spawner.on_board(), 13);
    }

    #[test]
    fn disabled_kinds_fall_back_to_food() {
        let mut options = Options::default();
        options.set_chaos(true);
        for kind in [
            PickupKind::SpeedUp,
            PickupKind::SlowDown,
            PickupKind::Points,
            PickupKind::Growth,
            PickupKind::Penalty,
            PickupKind::Boost,
            PickupKind::Lethal,
        ] {
            options.set_pickup_enabled(kind, false);
        }
        let mut board = Board::new(30);
        let mut spawner = PickupSpawner::default();
        let mut rng = rng();
        for _ in 0..200 {
            let _ = spawner.try_spawn(&mut board, &options, &mut rng, false);
        }
        assert_eq!(spawner.on_board(), 200);
        assert!(board.pickups().all(|(_, kind)| kind == PickupKind::Food));
    }

    #[test]
    fn disabled_kinds_fall_back_to_food_in_ambient_spawns() {
        let mut options = Options::default();
        options.set_chaos(true);
        for kind in [PickupKind::SpeedUp, PickupKind::Boost, PickupKind::Lethal] {
            options.set_pickup_enabled(kind, false);
        }
        let mut board = Board::new(30);
        let mut spawner = PickupSpawner::default();
        let mut rng = rng();
        let placed = (0..3000)
            .filter_map(|_| spawner.try_spawn(&mut board, &options, &mut rng, true))
            .collect::<Vec<_>>();
        assert!(!placed.is_empty());
        assert_eq!(spawner.on_board(), placed.len());
        assert_eq!(board.pickups().count(), placed.len());
        for kind in [PickupKind::SpeedUp, PickupKind::Boost, PickupKind::Lethal] {
            assert!(
                placed.iter().all(|&(_, k)| k != kind),
                "{kind} was placed while disabled"
            );
        }
        assert!(placed.iter().any(|&(_, k)| k == PickupKind::Food));
    }

    #[test]
    fn may_fail_mostly_fails() {
        let mut options = Options::default();
        options.set_chaos(true);
        let mut board = Board::new(30);
        let mut spawner = PickupSpawner::default();
        let mut rng = rng();
        let placed = (0..400)
            .filter_map(|_| spawner.try_spawn(&mut board, &options, &mut rng, true))
            .count();
        assert_eq!(spawner.on_board(), placed);
        assert!(placed < 100, "placed = {placed}");
    }

    #[test]
    fn remove_needs_two_pickups() {
        let mut board = Board::new(30);
        let mut spawner = PickupSpawner::default();
        let mut rng = rng();
        let _ = spawner.try_spawn(&mut board, &Options::default(), &mut rng, false);
        for _ in 0..500 {
            assert_eq!(spawner.try_remove(&mut board, &mut rng), None);
        }
        assert_eq!(spawner.on_board(), 1);
        assert_eq!(board.pickups().count(), 1);
    }

    #[test]
    fn remove_eventually_succeeds() {
        let mut board = Board::new(30);
        let mut spawner = PickupSpawner::default();
        let mut rng = rng();
        for _ in 0..5 {
            let _ = spawner.try_spawn(&mut board, &Options::default(), &mut rng, false);
        }
        let removed = (0..500)
            .filter_map(|_| spawner.try_remove(&mut board, &mut rng))
            .collect::<Vec<_>>();
        assert_eq!(removed.len(), 4);
        assert_eq!(spawner.on_board(), 1);
        assert_eq!(board.pickups().count(), 1);
        for (pos, _) in removed {
            assert_eq!(board.cell_at(pos), Cell::Empty);
        }
    }

    #[test]
    fn consumed_decrements() {
        let mut spawner = PickupSpawner::new(2);
        spawner.consumed();
        assert_eq!(spawner.on_board(), 1);
        spawner.consumed();
        spawner.consumed();
        assert_eq!(spawner.on_board(), 0);
    }

    #[test]
    #[should_panic(expected = "no suitable cell found")]
    fn full_board_panics() {
        let mut board = Board::new(3);
        assert!(board.set(Coord::new(1, 1), Cell::SnakeHead));
        let mut spawner = PickupSpawner::default();
        let _ = spawner.try_spawn(&mut board, &Options::default(), &mut rng(), false);
    }
}
