//! The game simulation: snake, board, pickups, and the rules tying them
//! together
mod board;
mod direction;
mod pickup;
mod snake;
mod spawner;
pub use self::board::{Board, Cell};
pub use self::direction::{Coord, Direction};
pub use self::pickup::{Effect, PickupKind};
pub use self::snake::Snake;
pub use self::spawner::PickupSpawner;
use crate::command::Command;
use crate::consts;
use crate::highscores::{HighScoreEntry, HighScoreTable};
use crate::options::Options;
use rand::Rng;
use std::time::Duration;

/// Where a game is in its lifecycle
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    /// Set up and waiting for [`Command::Start`]
    #[default]
    NotStarted,
    Running,
    Paused,
    /// The snake has crashed.  Only [`Command::Reset`] leaves this phase.
    Dead,
}

/// What happened during a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickEvent {
    /// The snake moved onto an empty cell
    Moved,
    /// The snake ate a pickup
    Consumed(PickupKind),
    /// The snake ran into `cause`.  `rank` is the result's place in the high
    /// score table, if it earned one.
    Died { cause: Cell, rank: Option<usize> },
}

/// A result waiting on the player's name before it goes into the high score
/// table
#[derive(Clone, Debug, Eq, PartialEq)]
struct PendingEntry {
    entry: HighScoreEntry,
    rank: usize,
}

/// A single-player game of snake, advanced one tick at a time.
///
/// The caller feeds in elapsed time with [`Game::update()`]; once enough time
/// has built up to cover the current speed interval, the snake takes a step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    options: Options,
    board: Board,
    snake: Snake,
    spawner: PickupSpawner,
    score: i32,
    /// Milliseconds between ticks
    speed: u32,
    phase: Phase,
    /// Time accumulated towards the next tick
    elapsed: Duration,
    high_scores: HighScoreTable,
    pending: Option<PendingEntry>,
}

impl Game<rand::rngs::ThreadRng> {
    pub fn new(options: Options, high_scores: HighScoreTable) -> Self {
        Game::new_with_rng(options, high_scores, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new_with_rng(options: Options, high_scores: HighScoreTable, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            options,
            board: Board::new(consts::GRID_SIZE),
            snake: Snake::initial(),
            spawner: PickupSpawner::default(),
            score: 0,
            speed: consts::INITIAL_SPEED,
            phase: Phase::NotStarted,
            elapsed: Duration::ZERO,
            high_scores,
            pending: None,
        };
        game.setup();
        game
    }

    /// Apply a command from the front end
    pub fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Turn(dir) => {
                if self.phase != Phase::Dead && !self.snake.turn(dir) {
                    tracing::trace!(?dir, "Ignoring reversal");
                }
            }
            Command::Start => {
                if self.phase == Phase::NotStarted {
                    tracing::info!(chaos = self.options.chaos, "Game started");
                    self.phase = Phase::Running;
                    self.elapsed = Duration::ZERO;
                }
            }
            Command::Reset => self.reset(),
            Command::Pause => {
                if self.phase == Phase::Running {
                    self.phase = Phase::Paused;
                    self.elapsed = Duration::ZERO;
                }
            }
            Command::Resume => {
                if self.phase == Phase::Paused {
                    self.phase = Phase::Running;
                    self.elapsed = Duration::ZERO;
                }
            }
            Command::SetChaos(chaos) => self.options.set_chaos(chaos),
            Command::SetWorm(worm) => self.options.set_worm(worm),
            Command::SetPickupEnabled(kind, enabled) => {
                self.options.set_pickup_enabled(kind, enabled);
            }
        }
    }

    /// Account for `dt` of elapsed time.  If the game is running and the
    /// time built up since the last tick has reached the speed interval, the
    /// game advances by one tick and reports what happened.
    pub fn update(&mut self, dt: Duration) -> Option<TickEvent> {
        if self.phase != Phase::Running {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.tick_interval() {
            return None;
        }
        self.elapsed = Duration::ZERO;
        Some(self.tick())
    }

    /// Abandon the current game and set up a fresh one.  A result still
    /// waiting for a name is recorded under the default name.
    pub fn reset(&mut self) {
        if let Some(PendingEntry { entry, rank }) = self.pending.take() {
            self.high_scores
                .insert(entry.with_name(consts::DEFAULT_PLAYER_NAME), rank);
        }
        self.setup();
        tracing::info!("Game reset");
    }

    /// Record the player's name for a result that made it into the high
    /// score table.  Does nothing if no name is needed.
    pub fn submit_name(&mut self, name: &str) {
        if let Some(PendingEntry { entry, rank }) = self.pending.take() {
            let entry = entry.with_name(name);
            tracing::info!(name = entry.name.as_deref(), rank, "Recorded high score");
            self.high_scores.insert(entry, rank);
        }
    }

    /// Lay out a fresh board with the starting snake and the first food,
    /// which counts towards the pickups on the board.
    fn setup(&mut self) {
        self.board.reset();
        self.snake = Snake::initial();
        self.board.refresh(&self.snake);
        self.spawner = PickupSpawner::default();
        if self
            .board
            .set(consts::FIRST_PICKUP, Cell::Pickup(PickupKind::Food))
        {
            self.spawner = PickupSpawner::new(1);
        }
        self.score = 0;
        self.speed = consts::INITIAL_SPEED;
        self.phase = Phase::NotStarted;
        self.elapsed = Duration::ZERO;
    }

    fn tick(&mut self) -> TickEvent {
        self.snake.advance();
        let head = self.snake.head();
        let entered = self.board.cell_at(head);
        if entered.is_fatal() {
            // Leave the board as it was when the snake crashed so that the
            // border stays intact.
            return self.die(entered);
        }
        // Claim the head's new cell so that nothing spawns underneath it.
        let _ = self.board.set(head, Cell::SnakeHead);
        let event = if let Cell::Pickup(kind) = entered {
            self.consume(kind);
            TickEvent::Consumed(kind)
        } else {
            if self.options.chaos && self.spawner.on_board() < consts::MAX_PICKUPS {
                let _ = self.spawner.try_spawn(
                    &mut self.board,
                    &self.options,
                    &mut self.rng,
                    true,
                );
                let _ = self.spawner.try_remove(&mut self.board, &mut self.rng);
            }
            TickEvent::Moved
        };
        self.board.refresh(&self.snake);
        event
    }

    fn consume(&mut self, kind: PickupKind) {
        self.spawner.consumed();
        if let Some(effect) = kind.effect() {
            self.score += effect.score;
            self.speed = self
                .speed
                .saturating_add_signed(effect.speed)
                .clamp(consts::MIN_SPEED, consts::MAX_SPEED);
            self.snake.extend(effect.growth);
            tracing::debug!(
                %kind,
                score = self.score,
                speed = self.speed,
                size = self.snake.size(),
                "Consumed pickup"
            );
        }
        if !(self.options.chaos && self.spawner.on_board() >= consts::MAX_PICKUPS) {
            let _ = self
                .spawner
                .try_spawn(&mut self.board, &self.options, &mut self.rng, false);
        }
    }

    fn die(&mut self, cause: Cell) -> TickEvent {
        self.phase = Phase::Dead;
        let entry = HighScoreEntry {
            name: None,
            score: self.score,
            speed: self.movement_speed(),
            size: self.snake.size(),
            chaos: self.options.chaos,
        };
        let rank = self.high_scores.compute_rank(entry.score);
        tracing::info!(
            ?cause,
            score = entry.score,
            size = entry.size,
            ?rank,
            "Snake died"
        );
        if let Some(rank) = rank {
            self.pending = Some(PendingEntry { entry, rank });
        }
        TickEvent::Died { cause, rank }
    }
}

impl<R> Game<R> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the contents of the cell at `pos`
    pub fn cell_at(&self, pos: Coord) -> Cell {
        self.board.cell_at(pos)
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Milliseconds between ticks
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// The player-facing speed statistic; higher is faster
    pub fn movement_speed(&self) -> u32 {
        consts::MOVEMENT_SPEED_BASE.saturating_sub(self.speed)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.speed))
    }

    pub fn size(&self) -> usize {
        self.snake.size()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn chaos(&self) -> bool {
        self.options.chaos
    }

    /// Number of pickups on the board
    pub fn pickups_on_board(&self) -> usize {
        self.spawner.on_board()
    }

    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    /// Consume the game and return the high score table for saving
    pub fn into_high_scores(self) -> HighScoreTable {
        self.high_scores
    }

    /// If the last game's result earned a place in the high score table and
    /// is waiting for the player's name, return that place
    pub fn name_needed(&self) -> Option<usize> {
        self.pending.as_ref().map(|p| p.rank)
    }
}
