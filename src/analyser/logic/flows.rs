use super::analysis::run_full_analysis;
use super::cleaning::clean_records;
use super::io::{load_records, save_cleaned, save_records};
use super::types::{Analysis, CleaningReport};
use crate::config::AnalysisSettings;
use crate::sample::generate_sample;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Loads a record file and runs the full analysis over it.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded.
pub fn analyse_file_flow(path: &Path, settings: &AnalysisSettings) -> Result<Analysis> {
    let records = load_records(path)
        .with_context(|| format!("Failed to load records from {}", path.display()))?;
    Ok(run_full_analysis(&records, settings))
}

/// Cleans a record file and writes the cleaned records to `output`.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the output cannot be written.
pub fn clean_file_flow(input: &Path, output: &Path) -> Result<CleaningReport> {
    let records = load_records(input)
        .with_context(|| format!("Failed to load records from {}", input.display()))?;
    let (cleaned, report) = clean_records(&records);
    save_cleaned(&cleaned, output)
        .with_context(|| format!("Failed to write cleaned records to {}", output.display()))?;
    Ok(report)
}

/// Generates `count` synthetic records and writes them to `output`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn sample_file_flow(count: usize, seed: Option<u64>, output: &Path) -> Result<usize> {
    let records = generate_sample(count, seed);
    save_records(&records, output)
        .with_context(|| format!("Failed to write sample to {}", output.display()))?;
    Ok(records.len())
}
