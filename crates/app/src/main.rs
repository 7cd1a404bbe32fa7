use std::fmt;
use std::io;

use log::{error, info};
use services::{BankLoader, Clock, ConfigError, QuizRunner, QuizSettings};

mod terminal;

use terminal::TerminalPresenter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Invalid(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Invalid(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--bank <path|url>] [--count <n>] [--seed <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --bank {}", services::settings::DEFAULT_BANK_SOURCE);
    eprintln!("  --count {}", services::settings::DEFAULT_SAMPLE_SIZE);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BANK_SOURCE, QUIZ_SAMPLE_SIZE, QUIZ_SEED, RUST_LOG");
}

enum Parsed {
    Run(QuizSettings),
    Help,
}

/// Flags override whatever `base` was built from.
fn parse_args(
    base: QuizSettings,
    args: &mut impl Iterator<Item = String>,
) -> Result<Parsed, ArgsError> {
    let mut settings = base;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bank" => {
                let value = require_value(args, "--bank")?;
                settings = settings.with_bank_source(&value)?;
            }
            "--count" => {
                let value = require_value(args, "--count")?;
                settings = settings.with_sample_size(&value)?;
            }
            "--seed" => {
                let value = require_value(args, "--seed")?;
                settings = settings.with_seed(&value)?;
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Parsed::Run(settings))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let base = QuizSettings::from_env()?;
    let mut argv = std::env::args().skip(1);
    let settings = match parse_args(base, &mut argv).inspect_err(|_| print_usage())? {
        Parsed::Run(settings) => settings,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };
    info!(
        "starting quiz: {} questions from {}",
        settings.sample_size(),
        settings.bank_source()
    );

    let runner = QuizRunner::new(BankLoader::new(), Clock::default());
    let mut session = runner.start(&settings).await.inspect_err(|err| {
        error!("quiz could not start: {err}");
    })?;

    let stdin = io::stdin();
    let mut presenter = TerminalPresenter::new(stdin.lock(), io::stdout());
    let outcome = QuizRunner::run(&mut session, &mut presenter);
    if let Some(err) = presenter.take_failure() {
        return Err(err.into());
    }
    outcome?;
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run().await {
        // Binary glue: report once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
