use super::{cleaned, record};
use crate::analyser::logic::*;

fn with_genres(title: &str, genres: &str) -> ContentRecord {
    let mut r = record(title, 2020);
    r.genres = genres.to_owned();
    r
}

fn with_country(title: &str, country: Option<&str>) -> ContentRecord {
    let mut r = record(title, 2020);
    r.country = country.map(str::to_owned);
    r
}

fn with_rating(title: &str, kind: ContentKind, rating: Option<&str>) -> ContentRecord {
    let mut r = record(title, 2020);
    r.kind = kind;
    r.rating = rating.map(str::to_owned);
    r
}

#[test]
fn test_split_tags_trims_and_skips_blanks() {
    let tags: Vec<&str> = split_tags(" Dramas ,Comedies,, Thrillers,").collect();
    assert_eq!(tags, vec!["Dramas", "Comedies", "Thrillers"]);
}

#[test]
fn test_genre_percentages_use_record_count() {
    let records = cleaned(&[with_genres("A", "Dramas, Comedies"), with_genres("B", "Thrillers")]);
    let genres = genre_distribution(&records);

    let dramas = genres.iter().find(|g| g.genre == "Dramas").expect("Dramas counted");
    assert_eq!(dramas.count, 1);
    assert_eq!(dramas.percentage, 50.0);
    let comedies = genres.iter().find(|g| g.genre == "Comedies").expect("Comedies counted");
    assert_eq!(comedies.percentage, 50.0);

    let sum: f64 = genres.iter().map(|g| g.percentage).sum();
    assert!(sum > 100.0, "Multi-genre titles push the total past 100%");
    assert!(genres.iter().all(|g| (0.0..=100.0).contains(&g.percentage)));
}

#[test]
fn test_genres_sorted_by_count_with_first_seen_ties() {
    let records = cleaned(&[
        with_genres("A", "Comedies, Horror Movies"),
        with_genres("B", "Dramas, Horror Movies"),
        with_genres("C", "Dramas"),
    ]);
    let names: Vec<String> = genre_distribution(&records)
        .into_iter()
        .map(|g| g.genre)
        .collect();
    // Horror and Dramas tie on 2; Horror was seen first.
    assert_eq!(names, vec!["Horror Movies", "Dramas", "Comedies"]);
}

#[test]
fn test_genre_distribution_empty() {
    assert!(genre_distribution(&[]).is_empty());
}

#[test]
fn test_unknown_country_is_excluded() {
    let records = cleaned(&[
        with_country("A", Some("India")),
        with_country("B", None),
        with_country("C", Some("India, France")),
    ]);
    assert_eq!(records[1].country, "Unknown Country");

    let countries = country_distribution(&records, 15);
    assert_eq!(countries.len(), 2);
    assert!(countries.iter().all(|c| c.country != "Unknown Country"));
    assert_eq!(countries[0].country, "India");
    assert_eq!(countries[0].count, 2);

    // Denominator is the 3 counted tags, not the 3 records.
    let india = countries[0].percentage;
    assert!((india - 200.0 / 3.0).abs() < 1e-9);
    let sum: f64 = countries.iter().map(|c| c.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_country_distribution_truncates_to_limit() {
    let raw: Vec<ContentRecord> = (0..20)
        .map(|i| with_country(&format!("T{i}"), Some(&format!("Country {i}"))))
        .collect();
    let countries = country_distribution(&cleaned(&raw), 15);
    assert_eq!(countries.len(), 15);
    assert_eq!(countries[0].country, "Country 0");
}

#[test]
fn test_country_distribution_without_known_countries_is_empty() {
    let records = cleaned(&[with_country("A", None), with_country("B", Some(""))]);
    assert!(country_distribution(&records, 15).is_empty());
}

#[test]
fn test_rating_distribution_splits_by_kind() {
    let records = cleaned(&[
        with_rating("A", ContentKind::Movie, Some("TV-MA")),
        with_rating("B", ContentKind::Series, Some("TV-MA")),
        with_rating("C", ContentKind::Series, Some("TV-MA")),
        with_rating("D", ContentKind::Movie, Some("PG")),
        with_rating("E", ContentKind::Movie, None),
    ]);
    let ratings = rating_distribution(&records);

    assert_eq!(ratings.len(), 2, "Not Rated is excluded");
    assert_eq!(
        ratings[0],
        RatingDistribution {
            rating: "TV-MA".to_owned(),
            movies: 1,
            tv_shows: 2,
            total: 3,
        }
    );
    assert_eq!(ratings[1].rating, "PG");
    assert_eq!(ratings[1].total, 1);
}

#[test]
fn test_rating_is_matched_exactly() {
    let records = cleaned(&[
        with_rating("A", ContentKind::Movie, Some("PG")),
        with_rating("B", ContentKind::Movie, Some("pg")),
    ]);
    assert_eq!(rating_distribution(&records).len(), 2);
}
