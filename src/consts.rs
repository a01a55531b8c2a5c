//! Assorted constants & hard-coded configuration
use crate::game::{Coord, Direction};

/// Side length of the square playing grid, border walls included
pub const GRID_SIZE: u16 = 30;

/// Tick interval, in milliseconds, at the start of a game
pub const INITIAL_SPEED: u32 = 200;

/// Fastest allowed tick interval, in milliseconds
pub const MIN_SPEED: u32 = 50;

/// Slowest allowed tick interval, in milliseconds
pub const MAX_SPEED: u32 = 499;

/// The "movement speed" statistic shown to players and stored with high
/// scores is this value minus the tick interval.
pub const MOVEMENT_SPEED_BASE: u32 = 500;

/// Maximum number of pickups that may be on the board at once in chaos mode
pub const MAX_PICKUPS: usize = 25;

/// Positions of the snake's segments at the start of a game, head first
pub const INITIAL_SNAKE: [Coord; 3] = [Coord::new(4, 4), Coord::new(3, 4), Coord::new(2, 4)];

/// Heading of the snake at the start of a game
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Where the first Food pickup of every game is placed
pub const FIRST_PICKUP: Coord = Coord::new(5, 5);

/// Upper bound of the pickup draw when placement must succeed
pub const DRAW_RANGE: u32 = 100;

/// Upper bound of the pickup draw for ambient chaos-mode spawns; any draw
/// above [`DRAW_RANGE`] places nothing.
pub const CHAOS_DRAW_RANGE: u32 = 2000;

/// A chaos-mode removal attempt succeeds with probability 1 in this many
pub const REMOVAL_ODDS: u32 = 20;

/// Chaos-mode removal is skipped while fewer than this many pickups are on
/// the board.
pub const MIN_PICKUPS_FOR_REMOVAL: usize = 2;

/// Give up on rejection sampling after this many draws
pub const MAX_SAMPLING_ATTEMPTS: usize = 1_000_000;

/// Number of entries in the high score table
pub const HIGH_SCORE_CAPACITY: usize = 3;

/// Player names are truncated to this many characters
pub const MAX_NAME_LEN: usize = 10;

/// Name recorded when the player declines to give one
pub const DEFAULT_PLAYER_NAME: &str = "Nobody";
