//! Synthetic catalogue generator for demos and tests.
//!
//! The shape follows a typical streaming catalogue export: about 40% series,
//! release years 1990–2024, one to three countries and genres per title, and a
//! fixed share of missing values per optional field.

use crate::analyser::logic::types::{ContentKind, ContentRecord};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom as _;
use rand::{Rng as _, SeedableRng as _};

const COUNTRIES: [&str; 24] = [
    "United States",
    "India",
    "United Kingdom",
    "Canada",
    "South Korea",
    "Japan",
    "Spain",
    "France",
    "Germany",
    "Australia",
    "Mexico",
    "Brazil",
    "Italy",
    "Netherlands",
    "Turkey",
    "Argentina",
    "Thailand",
    "Nigeria",
    "Egypt",
    "South Africa",
    "Philippines",
    "Indonesia",
    "Taiwan",
    "Hong Kong",
];

const GENRES: [&str; 20] = [
    "Dramas",
    "Comedies",
    "Action & Adventure",
    "Thrillers",
    "Horror Movies",
    "Documentaries",
    "Romantic Movies",
    "Sci-Fi & Fantasy",
    "Crime TV Shows",
    "Reality TV",
    "Kids & Family Movies",
    "International Movies",
    "Stand-Up Comedy",
    "Music & Musicals",
    "Anime Features",
    "LGBTQ Movies",
    "Independent Movies",
    "Classic Movies",
    "Sports Movies",
    "Faith & Spirituality",
];

const RATINGS: [&str; 13] = [
    "G", "PG", "PG-13", "R", "NC-17", "TV-Y", "TV-Y7", "TV-G", "TV-PG", "TV-14", "TV-MA", "NR",
    "UR",
];

const DIRECTORS: [&str; 16] = [
    "Christopher Nolan",
    "Martin Scorsese",
    "Quentin Tarantino",
    "Steven Spielberg",
    "Denis Villeneuve",
    "Jordan Peele",
    "Greta Gerwig",
    "Bong Joon-ho",
    "Rian Johnson",
    "Chloe Zhao",
    "Ryan Coogler",
    "Taika Waititi",
    "Ari Aster",
    "Robert Eggers",
    "Lulu Wang",
    "Barry Jenkins",
];

const ACTORS: [&str; 16] = [
    "Leonardo DiCaprio",
    "Meryl Streep",
    "Denzel Washington",
    "Scarlett Johansson",
    "Tom Hanks",
    "Sandra Bullock",
    "Robert Downey Jr.",
    "Jennifer Lawrence",
    "Brad Pitt",
    "Angelina Jolie",
    "Will Smith",
    "Emma Stone",
    "Ryan Gosling",
    "Natalie Portman",
    "Christian Bale",
    "Amy Adams",
];

/// Chance that each optional field is left empty.
const SERIES_SHARE: f64 = 0.6;
const MISSING_DIRECTOR: f64 = 0.15;
const MISSING_CAST: f64 = 0.08;
const MISSING_COUNTRY: f64 = 0.12;
const MISSING_RATING: f64 = 0.10;
const MISSING_DATE: f64 = 0.05;

const LAST_ADDED_YEAR: i32 = 2024;

/// Generates `count` records. The same `seed` always yields the same records.
pub fn generate_sample(count: usize, seed: Option<u64>) -> Vec<ContentRecord> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    (1..=count).map(|n| sample_record(&mut rng, n)).collect()
}

fn pick(rng: &mut StdRng, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_owned()
}

fn pick_many(rng: &mut StdRng, pool: &[&str], amount: usize) -> String {
    pool.choose_multiple(rng, amount)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

fn random_date_from(rng: &mut StdRng, year: i32) -> Option<String> {
    let start = NaiveDate::from_ymd_opt(year.min(LAST_ADDED_YEAR), 1, 1)?;
    let end = NaiveDate::from_ymd_opt(LAST_ADDED_YEAR, 12, 31)?;
    let span = (end - start).num_days();
    let date = start + chrono::Duration::days(rng.random_range(0..=span));
    Some(date.format("%Y-%m-%d").to_string())
}

fn sample_record(rng: &mut StdRng, n: usize) -> ContentRecord {
    let kind = if rng.random_bool(SERIES_SHARE) {
        ContentKind::Series
    } else {
        ContentKind::Movie
    };
    let release_year = 1990 + rng.random_range(0..35);
    let added_year = (release_year + 1).max(2008 + rng.random_range(0..17));

    let director = (!rng.random_bool(MISSING_DIRECTOR)).then(|| pick(rng, &DIRECTORS));
    let cast = (!rng.random_bool(MISSING_CAST)).then(|| {
        let amount = rng.random_range(2..=5);
        pick_many(rng, &ACTORS, amount)
    });
    let country = (!rng.random_bool(MISSING_COUNTRY)).then(|| {
        let amount = rng.random_range(1..=3);
        pick_many(rng, &COUNTRIES, amount)
    });
    let date_added = if rng.random_bool(MISSING_DATE) {
        None
    } else {
        random_date_from(rng, added_year)
    };
    let rating = (!rng.random_bool(MISSING_RATING)).then(|| pick(rng, &RATINGS));

    let duration = match kind {
        ContentKind::Movie => format!("{} min", rng.random_range(80..180)),
        ContentKind::Series => match rng.random_range(1..=8) {
            1 => "1 Season".to_owned(),
            seasons => format!("{seasons} Seasons"),
        },
    };
    let genre_count = rng.random_range(1..=3);
    let genres = pick_many(rng, &GENRES, genre_count);

    let label = match kind {
        ContentKind::Movie => "Movie",
        ContentKind::Series => "Series",
    };

    ContentRecord {
        id: format!("s{n}"),
        kind,
        title: format!("{label} Title {n}"),
        director,
        cast,
        country,
        date_added,
        release_year,
        rating,
        duration,
        genres,
        description: format!(
            "This is a sample description for {} content item {n}.",
            kind.as_str().to_lowercase()
        ),
    }
}
