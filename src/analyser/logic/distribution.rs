use super::types::{
    CleanedRecord, ContentKind, CountryStats, GenreStats, OptionalField, RatingDistribution,
};
use std::collections::HashMap;

/// Counter keyed by string that remembers first-seen order.
///
/// Sorting its entries with a stable sort keeps ties in the order they first
/// appeared in the input.
pub(crate) struct Tally<V> {
    slots: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> Tally<V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            entries: Vec::new(),
        }
    }

    #[expect(clippy::indexing_slicing)] // slots only ever hold valid positions
    pub(crate) fn entry(&mut self, key: &str) -> &mut V {
        let slot = match self.slots.get(key) {
            Some(&slot) => slot,
            None => {
                self.entries.push((key.to_owned(), V::default()));
                let slot = self.entries.len() - 1;
                self.slots.insert(key.to_owned(), slot);
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub(crate) fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

/// Splits a comma-separated tag list, trimming each tag and skipping blanks.
pub fn split_tags(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}

pub(crate) fn share_pct(count: usize, total: usize) -> f64 {
    (count as f64 / total as f64) * 100.0
}

/// Movie / series split used by the rating and growth projections.
#[derive(Clone, Copy, Default)]
pub(crate) struct KindCounts {
    pub movies: usize,
    pub tv_shows: usize,
}

impl KindCounts {
    pub(crate) fn add(&mut self, kind: ContentKind) {
        match kind {
            ContentKind::Movie => self.movies += 1,
            ContentKind::Series => self.tv_shows += 1,
        }
    }

    pub(crate) fn total(&self) -> usize {
        self.movies + self.tv_shows
    }
}

/// Counts genre tags across all records.
///
/// Percentages are relative to the number of records, not tags, so a record
/// listing three genres adds to three rows and the column need not sum to 100.
pub fn genre_distribution(records: &[CleanedRecord]) -> Vec<GenreStats> {
    let total = records.len();
    if total == 0 {
        return Vec::new();
    }

    let mut tally = Tally::<usize>::new();
    for record in records {
        for genre in split_tags(&record.genres) {
            *tally.entry(genre) += 1;
        }
    }

    let mut stats: Vec<GenreStats> = tally
        .into_entries()
        .into_iter()
        .map(|(genre, count)| GenreStats {
            genre,
            count,
            percentage: share_pct(count, total),
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Counts country tags on records with a known country, keeping the top `limit`.
///
/// Percentages are relative to the total number of counted tags.
pub fn country_distribution(records: &[CleanedRecord], limit: usize) -> Vec<CountryStats> {
    let mut tally = Tally::<usize>::new();
    for record in records
        .iter()
        .filter(|r| r.is_known(OptionalField::Country))
    {
        for country in split_tags(&record.country) {
            *tally.entry(country) += 1;
        }
    }

    let entries = tally.into_entries();
    let total: usize = entries.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut stats: Vec<CountryStats> = entries
        .into_iter()
        .map(|(country, count)| CountryStats {
            country,
            count,
            percentage: share_pct(count, total),
        })
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats.truncate(limit);
    stats
}

/// Movie and series counts per exact rating string, unrated records excluded.
pub fn rating_distribution(records: &[CleanedRecord]) -> Vec<RatingDistribution> {
    let mut tally = Tally::<KindCounts>::new();
    for record in records.iter().filter(|r| r.is_known(OptionalField::Rating)) {
        tally.entry(&record.rating).add(record.kind);
    }

    let mut ratings: Vec<RatingDistribution> = tally
        .into_entries()
        .into_iter()
        .map(|(rating, counts)| RatingDistribution {
            rating,
            movies: counts.movies,
            tv_shows: counts.tv_shows,
            total: counts.total(),
        })
        .collect();
    ratings.sort_by(|a, b| b.total.cmp(&a.total));
    ratings
}
