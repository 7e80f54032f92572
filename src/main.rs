mod calc_cmd;
mod cli;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use sentence_calc::OutputFormat;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = calc_cmd::load_config(cli.config.as_deref())?;
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    match cli.command {
        Command::Calc(args) => calc_cmd::run_calc(args, &config, format),
        Command::Json(args) => calc_cmd::run_json(args, format),
        Command::Example(args) => calc_cmd::run_example(args, &config, format),
    }
}
