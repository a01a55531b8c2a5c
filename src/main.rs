mod app;
use crate::app::{App, Arguments};
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: chaosnake [<options>]

Let the autopilot play a game of snake and record the result in the high
score table.

Options:
  -c, --config <path>   Read configuration from the given file
      --chaos           Play in chaos mode
      --seed <n>        Seed the random number generator
  -n, --name <name>     Name to record if the result earns a high score
      --max-ticks <n>   Stop the game after this many moves
      --scores          Print the high score table and exit
  -h, --help            Display this help message and exit
  -V, --version         Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Arguments),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("chaos") => args.chaos = true,
                Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Short('n') | Arg::Long("name") => {
                    args.name = Some(parser.value()?.string()?);
                }
                Arg::Long("max-ticks") => args.max_ticks = Some(parser.value()?.parse()?),
                Arg::Long("scores") => args.scores_only = true,
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }

    fn run(self) -> ExitCode {
        match self {
            Command::Run(args) => {
                tracing_subscriber::fmt()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new("chaosnake=info")),
                    )
                    .with_writer(std::io::stderr)
                    .init();
                match App::new(args).and_then(App::run) {
                    Ok(()) => ExitCode::SUCCESS,
                    Err(e) => {
                        eprintln!("chaosnake: {e:?}");
                        ExitCode::FAILURE
                    }
                }
            }
            Command::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Command::Version => {
                println!("chaosnake {}", env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

fn main() -> ExitCode {
    match Command::from_parser(Parser::from_env()) {
        Ok(cmd) => cmd.run(),
        Err(e) => {
            eprintln!("chaosnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}
