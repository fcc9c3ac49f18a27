mod app;
mod command;
mod config;
mod consts;
mod game;
mod highscores;
mod menu;
mod mode;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = concat!(
    "Usage: gridsnake [OPTIONS]\n",
    "\n",
    "Play snake in the terminal, with solid or wraparound walls\n",
    "\n",
    "Options:\n",
    "  -c, --config <FILE>  Read configuration from the given file\n",
    "  -h, --help           Display this help message and exit\n",
    "  -V, --version        Show the program version and exit\n",
);

/// What the command line asked for
#[derive(Clone, Debug, Eq, PartialEq)]
enum Invocation {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Invocation {
    fn from_parser(mut parser: Parser) -> Result<Invocation, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Invocation::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Invocation::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Invocation::Run { config })
    }

    fn run(self) -> ExitCode {
        match self {
            Invocation::Run { config } => match play(config.as_deref()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
                Err(e) => {
                    log::error!("{e:#}");
                    eprintln!("gridsnake: {e:?}");
                    ExitCode::FAILURE
                }
            },
            Invocation::Help => {
                print!("{USAGE}");
                ExitCode::SUCCESS
            }
            Invocation::Version => {
                println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
                ExitCode::SUCCESS
            }
        }
    }
}

fn main() -> ExitCode {
    match Invocation::from_parser(Parser::from_env()) {
        Ok(invocation) => invocation.run(),
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn play(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(p) => Config::load(p, false),
        None => Config::default_path().and_then(|p| Config::load(&p, true)),
    }
    .context("failed to load configuration")?;
    if let Some(p) = config.log_file() {
        init_logging(p)?;
    }
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
    let terminal = ratatui::init();
    let r = App::new(&config).run(terminal);
    ratatui::restore();
    r.context("terminal I/O failed")
}

/// Send log messages to the file at `path`.  The filter defaults to `info`
/// and can be overridden with `RUST_LOG`.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logging")
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|ioe| ioe.kind() == ErrorKind::BrokenPipe)
}
