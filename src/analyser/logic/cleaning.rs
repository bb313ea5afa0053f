use super::types::{CleanedRecord, CleaningReport, ContentRecord, MissingValues, OptionalField};
use std::collections::HashSet;

/// Deduplicates `raw` and fills missing optional fields with sentinels.
///
/// The first record for each `title-release_year` key wins; later ones are
/// dropped without merging. Missing-value counts describe the raw input.
pub fn clean_records(raw: &[ContentRecord]) -> (Vec<CleanedRecord>, CleaningReport) {
    let missing_values = count_missing(raw);

    let mut seen = HashSet::with_capacity(raw.len());
    let cleaned: Vec<CleanedRecord> = raw
        .iter()
        .filter(|record| seen.insert(dedup_key(record)))
        .map(fill_missing)
        .collect();

    let report = CleaningReport {
        original_count: raw.len(),
        duplicates_removed: raw.len() - cleaned.len(),
        missing_values,
        final_count: cleaned.len(),
    };

    log::debug!(
        "Cleaned {} records: {} duplicates removed, {} missing values filled",
        report.original_count,
        report.duplicates_removed,
        missing_values.total()
    );

    (cleaned, report)
}

pub fn count_missing(raw: &[ContentRecord]) -> MissingValues {
    let mut missing = MissingValues::default();
    for record in raw {
        for field in OptionalField::ALL {
            if record.is_missing(field) {
                missing.increment(field);
            }
        }
    }
    missing
}

pub fn dedup_key(record: &ContentRecord) -> String {
    format!("{}-{}", record.title, record.release_year)
}

pub fn fill_missing(record: &ContentRecord) -> CleanedRecord {
    let filled = |field: OptionalField| {
        record
            .field(field)
            .unwrap_or_else(|| field.sentinel())
            .to_owned()
    };

    CleanedRecord {
        id: record.id.clone(),
        kind: record.kind,
        title: record.title.clone(),
        director: filled(OptionalField::Director),
        cast: filled(OptionalField::Cast),
        country: filled(OptionalField::Country),
        date_added: filled(OptionalField::DateAdded),
        release_year: record.release_year,
        rating: filled(OptionalField::Rating),
        duration: record.duration.clone(),
        genres: record.genres.clone(),
        description: record.description.clone(),
    }
}
