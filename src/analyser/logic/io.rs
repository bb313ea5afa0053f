use super::types::{Analysis, CleanedRecord, ContentRecord};
use crate::error::{AnalyserError, Result, ResultExt as _};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::Path;

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Reads raw records from a `.json` array or a `.csv` file with a header row.
///
/// Empty CSV cells are read as missing values.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the extension is not
/// supported, or a record cannot be decoded.
pub fn load_records(path: &Path) -> Result<Vec<ContentRecord>> {
    if !path.exists() {
        return Err(AnalyserError::InvalidPath(path.display().to_string()));
    }

    let records: Vec<ContentRecord> = match extension(path).as_str() {
        "json" => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))?
        }
        "csv" => {
            let mut reader = csv::Reader::from_path(path)?;
            reader
                .deserialize()
                .collect::<std::result::Result<Vec<ContentRecord>, csv::Error>>()?
        }
        ext => return Err(AnalyserError::UnsupportedFormat(ext.to_owned())),
    };

    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

fn write_rows<T: Serialize>(rows: &[T], path: &Path) -> Result<()> {
    match extension(path).as_str() {
        "json" => write_json(rows, path)?,
        "csv" => {
            let mut writer = csv::Writer::from_path(path)?;
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        ext => return Err(AnalyserError::UnsupportedFormat(ext.to_owned())),
    }
    log::info!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Writes cleaned records as JSON or CSV, chosen by the file extension.
///
/// # Errors
///
/// Returns an error if the extension is not supported or the file cannot be written.
pub fn save_cleaned(records: &[CleanedRecord], path: &Path) -> Result<()> {
    write_rows(records, path)
}

/// Writes raw records (for example a generated sample) as JSON or CSV.
///
/// # Errors
///
/// Returns an error if the extension is not supported or the file cannot be written.
pub fn save_records(records: &[ContentRecord], path: &Path) -> Result<()> {
    write_rows(records, path)
}

/// Writes a full analysis as pretty JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_analysis(analysis: &Analysis, path: &Path) -> Result<()> {
    write_json(analysis, path)
}
