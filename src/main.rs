//! One-shot driver: convert the fixed MARC input file into `subjects.csv`.

use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use marc_subjects::write_subjects;

/// MARC21 binary export consumed by the run.
const INPUT_PATH: &str = "core-forum-records.mrc";

/// Subject table produced by the run (truncated if it already exists).
const OUTPUT_PATH: &str = "subjects.csv";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = File::open(INPUT_PATH)
        .with_context(|| format!("failed to open input file '{INPUT_PATH}'"))?;
    let output = File::create(OUTPUT_PATH)
        .with_context(|| format!("failed to create output file '{OUTPUT_PATH}'"))?;

    let rows = write_subjects(BufReader::new(input), output)
        .with_context(|| format!("conversion of '{INPUT_PATH}' failed"))?;

    tracing::info!(rows, output = OUTPUT_PATH, "conversion complete");
    Ok(())
}
