use anyhow::Context;
use chaosnake::autopilot::Autopilot;
use chaosnake::command::Command;
use chaosnake::config::Config;
use chaosnake::game::{Game, Phase, TickEvent};
use chaosnake::highscores::{HighScoreEntry, HighScoreTable, SaveError};
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;
use std::path::PathBuf;

/// Ticks to simulate before calling it a day, if not given on the command line
const DEFAULT_MAX_TICKS: u64 = 100_000;

/// Settings taken from the command line
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Arguments {
    pub(crate) config: Option<PathBuf>,
    pub(crate) chaos: bool,
    pub(crate) seed: Option<u64>,
    pub(crate) name: Option<String>,
    pub(crate) max_ticks: Option<u64>,
    pub(crate) scores_only: bool,
}

/// A headless run of the engine: load the high scores, let the autopilot
/// play one game, record the result, and save the high scores again.
#[derive(Debug)]
pub(crate) struct App {
    args: Arguments,
    config: Config,
}

impl App {
    pub(crate) fn new(args: Arguments) -> anyhow::Result<App> {
        let config = match args.config {
            Some(ref path) => Config::load(path, false),
            None => Config::default_path().and_then(|p| Config::load(&p, true)),
        }
        .context("Failed to load configuration")?;
        Ok(App { args, config })
    }

    pub(crate) fn run(self) -> anyhow::Result<()> {
        let table = self.config.load_high_scores();
        if self.args.scores_only {
            print_scores(&table);
            return Ok(());
        }
        let mut options = self.config.options.clone();
        if self.args.chaos {
            options.set_chaos(true);
        }
        let rng = match self.args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut game = Game::new_with_rng(options, table, rng);
        let died = self.play(&mut game);
        println!(
            "Score: {}  Size: {}  Movement speed: {}{}",
            game.score(),
            game.size(),
            game.movement_speed(),
            if game.chaos() { "  [chaos]" } else { "" },
        );
        if !died {
            println!("The snake was still alive when time ran out.");
        }
        if let Some(rank) = game.name_needed() {
            println!("New high score! Place #{}", rank + 1);
            game.submit_name(self.args.name.as_deref().unwrap_or_default());
        }
        print_scores(game.high_scores());
        if let Err(e) = self.config.save_high_scores(&game.into_high_scores()) {
            report_save_error(&e);
        }
        Ok(())
    }

    /// Let the autopilot steer until the snake dies or the tick limit is
    /// reached.  Returns `true` if the snake died.
    fn play(&self, game: &mut Game<StdRng>) -> bool {
        let bot = Autopilot::new();
        let max_ticks = self.args.max_ticks.unwrap_or(DEFAULT_MAX_TICKS);
        game.handle_command(Command::Start);
        for _ in 0..max_ticks {
            if let Some(dir) = bot.choose(game) {
                game.handle_command(Command::Turn(dir));
            }
            // Feed in exactly one interval's worth of time so that every call
            // produces a tick.
            match game.update(game.tick_interval()) {
                Some(TickEvent::Died { .. }) => return true,
                Some(_) => (),
                None => break,
            }
        }
        game.phase() == Phase::Dead
    }
}

fn print_scores(table: &HighScoreTable) {
    println!("High scores:");
    for (i, entry) in table.entries().iter().enumerate() {
        println!("{:>2}: {}", i + 1, EntryDisplay(entry));
    }
}

struct EntryDisplay<'a>(&'a HighScoreEntry);

impl std::fmt::Display for EntryDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let e = self.0;
        match e.name {
            Some(ref name) => write!(
                f,
                "{name:<10} [{} points]  speed {}  size {}{}",
                e.score,
                e.speed,
                e.size,
                if e.chaos { "  (chaos)" } else { "" }
            ),
            None => write!(f, "----------"),
        }
    }
}

/// Saving is the last thing the program does, so a failure is reported but
/// does not change the exit status.
fn report_save_error(e: &SaveError) {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(src) = source {
        msg.push_str(": ");
        msg.push_str(&src.to_string());
        source = src.source();
    }
    tracing::error!("{msg}");
}
