use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use sentence_calc::SentenceKind;

/// Custodial sentence date calculator.
#[derive(Parser)]
#[command(
    name = "sentence-calc",
    version,
    about = "Calculates sentence end, early release and tariff expiry dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the result as JSON regardless of the configured format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Calculate a sentence from command-line fields.
    Calc(CalcArgs),
    /// Calculate a sentence from a JSON input payload.
    Json(JsonArgs),
    /// Calculate one of the built-in worked examples.
    Example(ExampleArgs),
}

/// Arguments for the `calc` subcommand.
///
/// Values are taken as text and validated together, so every problem is
/// reported in one go.
#[derive(clap::Args)]
pub struct CalcArgs {
    /// Sentence type: life, determinate, aggregate or suspended.
    #[arg(long = "type", value_name = "KIND")]
    pub sentence_type: String,

    /// Date of sentence (YYYY-MM-DD).
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date_of_sentence: String,

    #[arg(long, default_value = "0")]
    pub years: String,

    #[arg(long, default_value = "0")]
    pub months: String,

    #[arg(long, default_value = "0")]
    pub weeks: String,

    #[arg(long, default_value = "0")]
    pub days: String,

    /// Fraction of the term served before early release; defaults to the configured value.
    #[arg(long)]
    pub release_fraction: Option<String>,

    /// Days spent on remand.
    #[arg(long = "remand", default_value = "0")]
    pub remand_days: String,

    /// Days spent on qualifying tagged bail.
    #[arg(long = "tagged-bail", default_value = "0")]
    pub tagged_bail_days: String,

    /// Aggregate component as <relation>[@group]:[Ny][Nm][Nw][Nd]; repeat for each term.
    #[arg(long = "component", value_name = "SPEC")]
    pub components: Vec<String>,

    /// Mark a suspended sentence as activated.
    #[arg(long)]
    pub activated: bool,

    /// Activation date of a suspended sentence (YYYY-MM-DD).
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub activation_date: Option<String>,
}

/// Arguments for the `json` subcommand.
#[derive(clap::Args)]
pub struct JsonArgs {
    /// Path to the JSON payload, or `-` for stdin.
    pub input: PathBuf,
}

/// Arguments for the `example` subcommand.
#[derive(clap::Args)]
pub struct ExampleArgs {
    /// Which worked example to run.
    #[arg(value_enum)]
    pub kind: ExampleKind,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExampleKind {
    Life,
    Determinate,
    Aggregate,
    Suspended,
}

impl From<ExampleKind> for SentenceKind {
    fn from(kind: ExampleKind) -> Self {
        match kind {
            ExampleKind::Life => SentenceKind::Life,
            ExampleKind::Determinate => SentenceKind::Determinate,
            ExampleKind::Aggregate => SentenceKind::Aggregate,
            ExampleKind::Suspended => SentenceKind::Suspended,
        }
    }
}
