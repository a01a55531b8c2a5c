use crate::game::{Cell, Coord, Direction, Game};

/// A greedy bot that steers the snake towards the nearest harmless pickup
/// while avoiding anything that would kill it on the next move.
///
/// It only looks one cell ahead, so it will eventually trap itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Autopilot {
        Autopilot
    }

    /// Pick the direction to turn the snake in before the next tick.
    /// Returns `None` when every option is fatal, in which case the snake may
    /// as well keep going.
    pub fn choose<R>(&self, game: &Game<R>) -> Option<Direction> {
        let snake = game.snake();
        let head = snake.head();
        let current = snake.direction();
        let target = nearest_pickup(game, head);
        Direction::ALL
            .into_iter()
            .filter(|&d| d != current.reverse())
            .filter(|&d| !game.cell_at(d.advance(head)).is_fatal())
            .min_by_key(|&d| {
                let next = d.advance(head);
                let eats = matches!(game.cell_at(next), Cell::Pickup(_));
                let distance = target.map_or(0, |t| next.distance(t));
                (!eats, distance, d != current)
            })
    }
}

/// Find the closest pickup to `pos` that is safe to eat
fn nearest_pickup<R>(game: &Game<R>, pos: Coord) -> Option<Coord> {
    game.board()
        .pickups()
        .filter(|(_, kind)| !kind.is_lethal())
        .map(|(p, _)| p)
        .min_by_key(|&p| pos.distance(p))
}
