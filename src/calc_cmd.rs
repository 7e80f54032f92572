use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use sentence_calc::form::check_input;
use sentence_calc::presets::example_form;
use sentence_calc::{
    calculate_sentence, render_json, render_summary, CalcConfig, CalculationInput, ComponentRow,
    OutputFormat, SentenceForm, SentenceKind,
};
use tracing::info;

use crate::cli::{CalcArgs, ExampleArgs, JsonArgs};

/// Reads the configuration file, or returns defaults when none is given.
pub fn load_config(path: Option<&Path>) -> Result<CalcConfig> {
    let Some(path) = path else {
        return Ok(CalcConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = CalcConfig::from_toml_str(&text)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn run_calc(args: CalcArgs, config: &CalcConfig, format: OutputFormat) -> Result<()> {
    let components = args
        .components
        .iter()
        .map(|spec| spec.parse::<ComponentRow>())
        .collect::<Result<Vec<_>, _>>()
        .context("failed to parse --component")?;

    let form = SentenceForm {
        sentence_type: args.sentence_type,
        date_of_sentence: args.date_of_sentence,
        years: args.years,
        months: args.months,
        weeks: args.weeks,
        days: args.days,
        release_fraction: args.release_fraction,
        remand_days: args.remand_days,
        tagged_bail_days: args.tagged_bail_days,
        components,
        is_activated: args.activated,
        activation_date: args.activation_date,
    };
    run_form(form, config, format)
}

pub fn run_json(args: JsonArgs, format: OutputFormat) -> Result<()> {
    let text = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read payload from stdin")?;
        buf
    } else {
        fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read payload {}", args.input.display()))?
    };
    let input: CalculationInput =
        serde_json::from_str(&text).context("failed to parse JSON payload")?;
    check_input(&input).context("invalid JSON payload")?;
    run_input(&input, format)
}

pub fn run_example(args: ExampleArgs, config: &CalcConfig, format: OutputFormat) -> Result<()> {
    let kind = SentenceKind::from(args.kind);
    info!(%kind, "running worked example");
    run_form(example_form(kind), config, format)
}

fn run_form(form: SentenceForm, config: &CalcConfig, format: OutputFormat) -> Result<()> {
    let input = form.into_input(config.defaults.release_fraction)?;
    run_input(&input, format)
}

fn run_input(input: &CalculationInput, format: OutputFormat) -> Result<()> {
    info!(
        sentence_type = %input.sentence_type,
        date_of_sentence = %input.date_of_sentence,
        "calculating"
    );
    let result = calculate_sentence(input).context("calculation failed")?;
    match format {
        OutputFormat::Text => print!("{}", render_summary(&result)),
        OutputFormat::Json => println!("{}", render_json(&result)?),
    }
    Ok(())
}
