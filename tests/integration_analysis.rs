//! Integration tests for the full analysis workflow
//!
//! These tests load the fixture catalogues in `testdata/` and verify the
//! end-to-end results.

use content_analyser::analyser::logic::{
    OptionalField, analyse_file_flow, clean_file_flow, load_records, run_full_analysis,
};
use content_analyser::config::AnalysisSettings;
use std::path::PathBuf;

fn settings() -> AnalysisSettings {
    AnalysisSettings {
        reference_year: Some(2025),
        ..Default::default()
    }
}

#[test]
fn test_analyse_csv_catalogue() {
    let result = analyse_file_flow(&PathBuf::from("testdata/catalog.csv"), &settings());
    assert!(result.is_ok(), "Analysis should succeed for the CSV fixture");
    let analysis = result.unwrap();

    let report = analysis.report;
    assert_eq!(report.original_count, 16);
    assert_eq!(report.duplicates_removed, 1, "The Starling appears twice");
    assert_eq!(report.final_count, 15);
    assert_eq!(report.missing_values.director, 4);
    assert_eq!(report.missing_values.cast, 4);
    assert_eq!(report.missing_values.country, 4);
    assert_eq!(report.missing_values.rating, 1);
    assert_eq!(report.missing_values.date_added, 1);

    let top = &analysis.genre_distribution[0];
    assert_eq!(top.genre, "Dramas");
    assert_eq!(top.count, 5);
    assert!((top.percentage - 100.0 / 3.0).abs() < 1e-9);

    let countries = &analysis.country_distribution;
    assert_eq!(countries.len(), 11);
    assert_eq!(countries[0].country, "United States");
    assert_eq!(countries[0].count, 6);
    let country_sum: f64 = countries.iter().map(|c| c.percentage).sum();
    assert!((country_sum - 100.0).abs() < 1e-9);

    let years: Vec<(i32, usize, usize, usize)> = analysis
        .yearly_growth
        .iter()
        .map(|y| (y.year, y.movies_added, y.tv_shows_added, y.cumulative))
        .collect();
    assert_eq!(years, vec![(2016, 1, 0, 1), (2019, 1, 0, 2), (2021, 5, 5, 12)]);

    let ratings = &analysis.rating_distribution;
    assert_eq!(ratings[0].rating, "TV-MA");
    assert_eq!(ratings[0].total, 7);
    assert!(ratings.iter().all(|r| r.rating != "Not Rated"));

    let decades: Vec<(&str, usize)> = analysis
        .content_age
        .iter()
        .map(|d| (d.decade.as_str(), d.count))
        .collect();
    assert_eq!(
        decades,
        vec![("1980s", 1), ("1990s", 1), ("2000s", 1), ("2010s", 3), ("2020s", 9)]
    );

    let evolution = &analysis.genre_evolution;
    assert_eq!(evolution.genres.len(), 8);
    assert_eq!(evolution.genres[0], "Dramas");
    let years: Vec<i32> = evolution.rows.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2016, 2019, 2021]);
    assert_eq!(evolution.rows[2].get("Dramas"), Some(3));
    assert_eq!(evolution.rows[0].get("Comedies"), Some(1));
    assert_eq!(evolution.rows[0].get("Reality TV"), None);
}

#[test]
fn test_json_and_csv_fixtures_agree() {
    let from_csv = load_records(&PathBuf::from("testdata/catalog.csv")).unwrap();
    let from_json = load_records(&PathBuf::from("testdata/catalog.json")).unwrap();
    assert_eq!(from_csv, from_json);

    let a = run_full_analysis(&from_csv, &settings());
    let b = run_full_analysis(&from_json, &settings());
    assert_eq!(a.report, b.report);
    assert_eq!(a.genre_distribution, b.genre_distribution);
    assert_eq!(a.yearly_growth, b.yearly_growth);
}

#[test]
fn test_unknown_country_is_filled_but_not_counted() {
    let analysis = analyse_file_flow(&PathBuf::from("testdata/catalog.json"), &settings()).unwrap();

    let ganglands = analysis
        .cleaned
        .iter()
        .find(|r| r.title == "Ganglands")
        .expect("Ganglands is in the fixture");
    assert_eq!(ganglands.country, "Unknown Country");
    assert!(!ganglands.is_known(OptionalField::Country));
    assert!(
        analysis
            .country_distribution
            .iter()
            .all(|c| c.country != "Unknown Country")
    );
}

#[test]
fn test_clean_flow_writes_cleaned_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("cleaned.json");

    let report = clean_file_flow(&PathBuf::from("testdata/catalog.csv"), &output).unwrap();
    assert_eq!(report.final_count, 15);

    let cleaned = load_records(&output).unwrap();
    assert_eq!(cleaned.len(), 15);
    for field in OptionalField::ALL {
        assert!(
            cleaned.iter().all(|r| !r.is_missing(field)),
            "{} should be filled",
            field.as_str()
        );
    }
}

#[test]
fn test_missing_file_fails() {
    let result = analyse_file_flow(&PathBuf::from("testdata/nope.json"), &settings());
    assert!(result.is_err());
}
