use crate::cli::args::DestroyArgs;
use crate::exit_codes::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use anyhow::{Context, Result};
use byebyte_core::{plan, DestroyOptions, Report, RngSource};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Everything needed to replay a run, written by `--report`.
#[derive(Debug, Serialize)]
struct RunRecord<'a> {
    input: &'a Path,
    output: &'a Path,
    seed: u64,
    options: &'a DestroyOptions,
    report: &'a Report,
}

pub fn run(args: DestroyArgs) -> Result<i32> {
    let options = args.options();
    let mut data = fs::read(&args.input)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;
    let len = data.len();
    println!("File length: {}", len);

    let plan = match plan(&options, len) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return Ok(EXIT_CONFIG_ERROR);
        }
    };
    println!(
        "Randomly assigning hex values within bytes {} and {}",
        plan.range.start, plan.range.stop
    );

    if args.dry_run {
        println!("Mode:  {}", plan.traversal.name());
        println!("Times: {}", plan.times);
        return Ok(EXIT_SUCCESS);
    }

    let output = args
        .output
        .as_deref()
        .context("--output is required unless --dry-run is set")?;

    // Always run from an explicit seed so the report can reproduce it.
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, "seeding random source");
    let mut rng = RngSource::seeded(Some(seed));
    let report = plan.apply(&mut data, &mut rng);

    fs::write(output, &data)
        .with_context(|| format!("failed to write output: {}", output.display()))?;

    if let Some(path) = &args.report {
        let record = RunRecord {
            input: &args.input,
            output,
            seed,
            options: &options,
            report: &report,
        };
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
    }

    println!(
        "Replaced {} byte(s) with trash and exported to {}.",
        report.times,
        output.display()
    );
    Ok(EXIT_SUCCESS)
}
