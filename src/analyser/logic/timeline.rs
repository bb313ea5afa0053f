use super::distribution::{KindCounts, split_tags};
use super::types::{
    CleanedRecord, ContentAgeBucket, GenreEvolution, GenreEvolutionRow, GenreStats,
    OptionalField, YearlyGrowth,
};
use chrono::{DateTime, Datelike as _, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

const DATE_FORMATS: [&str; 9] = [
    "%Y-%m-%d",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
];
/// Month-precision forms (`2019-05`, `September 2021`), completed to the
/// first of the month as `(prefix, suffix, format)`.
const MONTH_FORMATS: [(&str, &str, &str); 2] =
    [("", "-01", "%Y-%m-%d"), ("1 ", "", "%d %B %Y")];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Extracts the calendar year from a `date_added` value.
///
/// Returns `None` for anything that is not a recognisable date; callers treat
/// that as "no date" rather than as an error.
pub fn parse_added_year(raw: &str) -> Option<i32> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.year());
    }
    if let Some(date) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(date.year());
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
    {
        return Some(date.year());
    }

    if let Some(date) = MONTH_FORMATS.iter().find_map(|(prefix, suffix, format)| {
        NaiveDate::parse_from_str(&format!("{prefix}{value}{suffix}"), format).ok()
    }) {
        return Some(date.year());
    }

    // A bare year is still a usable date.
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse().ok();
    }
    None
}

fn added_year(record: &CleanedRecord) -> Option<i32> {
    if record.is_known(OptionalField::DateAdded) {
        parse_added_year(&record.date_added)
    } else {
        None
    }
}

/// Titles added per year from `start_year` on, with a running total.
pub fn yearly_growth(records: &[CleanedRecord], start_year: i32) -> Vec<YearlyGrowth> {
    let mut by_year: BTreeMap<i32, KindCounts> = BTreeMap::new();
    let mut unparseable = 0;
    for record in records {
        match added_year(record) {
            Some(year) if year >= start_year => by_year.entry(year).or_default().add(record.kind),
            Some(_) => {}
            None if record.is_known(OptionalField::DateAdded) => unparseable += 1,
            None => {}
        }
    }
    if unparseable > 0 {
        log::warn!("Skipped {unparseable} records with an unreadable date_added");
    }

    let mut cumulative = 0;
    by_year
        .into_iter()
        .map(|(year, counts)| {
            cumulative += counts.total();
            YearlyGrowth {
                year,
                movies_added: counts.movies,
                tv_shows_added: counts.tv_shows,
                total: counts.total(),
                cumulative,
            }
        })
        .collect()
}

pub fn decade_label(release_year: i32) -> String {
    format!("{}s", release_year.div_euclid(10) * 10)
}

/// Record count and mean age (relative to `reference_year`) per release decade.
pub fn content_age(records: &[CleanedRecord], reference_year: i32) -> Vec<ContentAgeBucket> {
    let mut by_decade: BTreeMap<String, (usize, i64)> = BTreeMap::new();
    for record in records {
        let bucket = by_decade
            .entry(decade_label(record.release_year))
            .or_default();
        bucket.0 += 1;
        bucket.1 += i64::from(reference_year) - i64::from(record.release_year);
    }

    by_decade
        .into_iter()
        .map(|(decade, (count, total_age))| ContentAgeBucket {
            decade,
            count,
            average_age: round_half_up(total_age as f64 / count as f64),
        })
        .collect()
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Yearly additions of the `top_n` most common genres from `start_year` on.
///
/// `genres` must be the genre distribution of the same records. Every year
/// with a dated record gets a row, even when none of its genres made the cut;
/// genres outside the top set never appear.
pub fn genre_evolution(
    records: &[CleanedRecord],
    genres: &[GenreStats],
    top_n: usize,
    start_year: i32,
) -> GenreEvolution {
    let top: Vec<String> = genres.iter().take(top_n).map(|g| g.genre.clone()).collect();

    let mut by_year: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for record in records {
        let Some(year) = added_year(record).filter(|year| *year >= start_year) else {
            continue;
        };
        let counts = by_year.entry(year).or_insert_with(|| vec![0; top.len()]);
        for genre in split_tags(&record.genres) {
            if let Some(pos) = top.iter().position(|g| g == genre)
                && let Some(slot) = counts.get_mut(pos)
            {
                *slot += 1;
            }
        }
    }

    let rows = by_year
        .into_iter()
        .map(|(year, counts)| GenreEvolutionRow {
            year,
            counts: top.iter().cloned().zip(counts).collect(),
        })
        .collect();

    GenreEvolution { genres: top, rows }
}
