mod config;
mod console;
mod logging;

use std::io::{self, Write};

use kanji_core::Dataset;
use services::{Clock, QuizLoopService};

use config::{Config, print_usage};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env(|key| std::env::var(key).ok())
        .and_then(|config| config.apply_args(std::env::args().skip(1)))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    if config.help {
        print_usage();
        return Ok(());
    }

    logging::init_tracing();

    let dataset = Dataset::builtin()?;
    let mut quiz = QuizLoopService::new(Clock::system(), dataset).with_policy(config.policy());
    if let Some(seed) = config.seed {
        quiz = quiz.with_seed(seed);
    }
    tracing::debug!(?config, "configuration resolved");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    console::print_banner(&mut output)?;

    console::play_rounds(&mut quiz, config.rounds, config.json, &mut input, &mut output)?;
    output.flush()?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
