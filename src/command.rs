use crate::game::{Direction, PickupKind};

/// Instructions that a front end sends to a [`Game`][crate::game::Game]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// Point the snake in a new direction.  Reversals are ignored.
    Turn(Direction),
    /// Begin play from the not-started state
    Start,
    /// Abandon the current game and set up a fresh one
    Reset,
    Pause,
    Resume,
    SetChaos(bool),
    SetWorm(bool),
    SetPickupEnabled(PickupKind, bool),
}

impl From<Direction> for Command {
    fn from(value: Direction) -> Command {
        Command::Turn(value)
    }
}
