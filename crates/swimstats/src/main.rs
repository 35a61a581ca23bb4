//! The swimstats command-line tool.
//!
//! It exposes the [`swim_times`] crate from the terminal: formatting and parsing times,
//! comparing them, rendering meet dates, and checking import files before they are stored.

use clap::Parser;
use mkenv::prelude::*;
use swim_times::LibEnv;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use self::{
    dates::DatesCmd,
    import::{BestsCmd, ImportCmd},
    standard::{CompareCmd, StandardCmd},
};

mod dates;
mod import;
mod standard;
mod time;

#[derive(clap::Parser)]
#[command(version, about = "Swim times toolbox")]
enum Command {
    /// Formats a time given in milliseconds.
    Format {
        #[arg(allow_negative_numbers = true)]
        ms: i64,
    },
    /// Parses a time text, like 28.45 or 1:05.32, into milliseconds.
    Parse { text: String },
    /// Checks that a time text is valid.
    Validate { text: String },
    /// Shows the difference between a time and a reference time.
    Diff { time: String, reference: String },
    /// Formats the span between two dates.
    Dates(DatesCmd),
    /// Compares a time with a qualifying standard.
    Compare(CompareCmd),
    /// Validates a time standard file, and optionally compares a time with it.
    Standard(StandardCmd),
    /// Validates a swimmer import file.
    Import(ImportCmd),
    /// Lists the personal bests found in a swimmer import file.
    Bests(BestsCmd),
}

mkenv::make_config! {
    struct Env {
        lib_env: { LibEnv },
    }
}

fn setup_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("unable to init tracing_subscriber: {e}"))
}

fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(e) if !e.not_found() => return Err(e.into()),
        _ => (),
    }
    setup_tracing()?;
    let env = Env::define();
    env.init();
    swim_times::init_env(env.lib_env);

    let cmd = Command::parse();

    match cmd {
        Command::Format { ms } => {
            time::format(ms);
            Ok(())
        }
        Command::Parse { text } => time::parse(&text),
        Command::Validate { text } => time::validate(&text),
        Command::Diff {
            time: swum,
            reference,
        } => time::diff(&swum, &reference),
        Command::Dates(cmd) => dates::dates(cmd),
        Command::Compare(cmd) => standard::compare(cmd),
        Command::Standard(cmd) => standard::standard(cmd),
        Command::Import(cmd) => import::import(cmd),
        Command::Bests(cmd) => import::bests(cmd),
    }
}
