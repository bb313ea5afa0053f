use super::{cleaned, record};
use crate::analyser::logic::*;

#[test]
fn test_duplicates_keep_first_occurrence() {
    let mut first = record("A", 2020);
    first.director = Some("First".to_owned());
    let mut second = record("A", 2020);
    second.director = Some("Second".to_owned());

    let (records, report) = clean_records(&[first, second, record("B", 2021)]);

    assert_eq!(report.original_count, 3);
    assert_eq!(report.duplicates_removed, 1);
    assert_eq!(report.final_count, 2);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].director, "First");
    assert_eq!(records[1].title, "B");
}

#[test]
fn test_dedup_key_is_case_sensitive_and_year_aware() {
    let raw = [record("A", 2020), record("a", 2020), record("A", 2021)];
    let (_, report) = clean_records(&raw);
    assert_eq!(report.duplicates_removed, 0);
    assert_eq!(cleaning::dedup_key(&raw[0]), "A-2020");
}

#[test]
fn test_missing_fields_get_sentinels() {
    let mut r = record("A", 2020);
    r.director = None;
    r.cast = Some(String::new());
    r.country = None;
    r.rating = None;
    r.date_added = Some(String::new());

    let records = cleaned(&[r]);
    let c = &records[0];
    assert_eq!(c.director, "Unknown Director");
    assert_eq!(c.cast, "Unknown Cast");
    assert_eq!(c.country, "Unknown Country");
    assert_eq!(c.rating, "Not Rated");
    assert_eq!(c.date_added, "Unknown Date");
    for field in OptionalField::ALL {
        assert!(!c.is_known(field), "{} should hold its sentinel", field.as_str());
    }
}

#[test]
fn test_present_fields_are_kept() {
    let records = cleaned(&[record("A", 2020)]);
    let c = &records[0];
    assert_eq!(c.country, "United States");
    assert_eq!(c.rating, "PG-13");
    assert_eq!(c.date_added, "2020-06-01");
    assert!(c.is_known(OptionalField::Country));
}

#[test]
fn test_missing_counts_cover_raw_input_including_duplicates() {
    let mut a = record("A", 2020);
    a.country = None;
    let mut dup = record("A", 2020);
    dup.country = Some(String::new());
    dup.rating = None;

    let (_, report) = clean_records(&[a, dup]);
    assert_eq!(report.missing_values.country, 2);
    assert_eq!(report.missing_values.rating, 1);
    assert_eq!(report.missing_values.director, 0);
    assert_eq!(report.missing_values.total(), 3);
    assert_eq!(report.final_count, 1);
}

#[test]
fn test_counts_always_balance() {
    let raw = [
        record("A", 2020),
        record("A", 2020),
        record("A", 2020),
        record("B", 2020),
        record("C", 1999),
        record("B", 2020),
    ];
    let (_, report) = clean_records(&raw);
    assert_eq!(report.final_count + report.duplicates_removed, report.original_count);
    assert_eq!(report.final_count, 3);
}

#[test]
fn test_cleaning_is_idempotent() {
    let raw = [record("A", 2020), record("A", 2020), record("B", 2021)];
    let first = cleaned(&raw);

    let again: Vec<ContentRecord> = first.iter().cloned().map(ContentRecord::from).collect();
    let (second, report) = clean_records(&again);

    assert_eq!(report.duplicates_removed, 0);
    assert_eq!(report.missing_values.total(), 0);
    assert_eq!(second, first);
}

#[test]
fn test_empty_input() {
    let (records, report) = clean_records(&[]);
    assert!(records.is_empty());
    assert_eq!(report, CleaningReport::default());
    assert_eq!(report.missing_pct(OptionalField::Country), 0.0);
}

#[test]
fn test_sentinel_table_covers_every_field() {
    for field in OptionalField::ALL {
        assert!(!field.sentinel().is_empty(), "{} has no sentinel", field.as_str());
    }
    assert_eq!(OptionalField::Rating.sentinel(), types::NOT_RATED);
}
