use serde::ser::SerializeMap as _;
use serde::{Deserialize, Serialize, Serializer};

pub const UNKNOWN_DIRECTOR: &str = "Unknown Director";
pub const UNKNOWN_CAST: &str = "Unknown Cast";
pub const UNKNOWN_COUNTRY: &str = "Unknown Country";
pub const NOT_RATED: &str = "Not Rated";
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// Placeholder written into a cleaned record for every missing optional field.
pub const SENTINELS: [(OptionalField, &str); 5] = [
    (OptionalField::Director, UNKNOWN_DIRECTOR),
    (OptionalField::Cast, UNKNOWN_CAST),
    (OptionalField::Country, UNKNOWN_COUNTRY),
    (OptionalField::Rating, NOT_RATED),
    (OptionalField::DateAdded, UNKNOWN_DATE),
];

// INPUT RECORDS

#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub enum ContentKind {
    #[default]
    Movie,
    #[serde(rename = "TV Show", alias = "Series")]
    Series,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "Movie",
            Self::Series => "TV Show",
        }
    }
}

/// Optional attributes of a record that the cleaner fills with a sentinel.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Debug)]
pub enum OptionalField {
    Director,
    Cast,
    Country,
    Rating,
    DateAdded,
}

impl OptionalField {
    pub const ALL: [Self; 5] = [
        Self::Director,
        Self::Cast,
        Self::Country,
        Self::Rating,
        Self::DateAdded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Director => "director",
            Self::Cast => "cast",
            Self::Country => "country",
            Self::Rating => "rating",
            Self::DateAdded => "date_added",
        }
    }

    pub fn sentinel(self) -> &'static str {
        SENTINELS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, sentinel)| *sentinel)
            .unwrap_or_default()
    }
}

/// A raw catalogue entry as it arrives from the host.
///
/// Serialized field names follow the common catalogue export layout
/// (`show_id`, `type`, `listed_in`), with aliases for the plain names.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ContentRecord {
    #[serde(rename = "show_id", alias = "id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub date_added: Option<String>,
    pub release_year: i32,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub duration: String,
    #[serde(rename = "listed_in", alias = "genres")]
    pub genres: String,
    #[serde(default)]
    pub description: String,
}

impl ContentRecord {
    /// Returns the value of an optional field, treating an empty string as absent.
    pub fn field(&self, field: OptionalField) -> Option<&str> {
        let value = match field {
            OptionalField::Director => self.director.as_deref(),
            OptionalField::Cast => self.cast.as_deref(),
            OptionalField::Country => self.country.as_deref(),
            OptionalField::Rating => self.rating.as_deref(),
            OptionalField::DateAdded => self.date_added.as_deref(),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn is_missing(&self, field: OptionalField) -> bool {
        self.field(field).is_none()
    }
}

// CLEANED RECORDS

/// A deduplicated record with every optional field sentinel-filled.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct CleanedRecord {
    #[serde(rename = "show_id", alias = "id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    pub date_added: String,
    pub release_year: i32,
    pub rating: String,
    #[serde(default)]
    pub duration: String,
    #[serde(rename = "listed_in", alias = "genres")]
    pub genres: String,
    #[serde(default)]
    pub description: String,
}

impl CleanedRecord {
    pub fn value(&self, field: OptionalField) -> &str {
        match field {
            OptionalField::Director => &self.director,
            OptionalField::Cast => &self.cast,
            OptionalField::Country => &self.country,
            OptionalField::Rating => &self.rating,
            OptionalField::DateAdded => &self.date_added,
        }
    }

    /// False when the field holds its sentinel.
    pub fn is_known(&self, field: OptionalField) -> bool {
        self.value(field) != field.sentinel()
    }
}

impl From<CleanedRecord> for ContentRecord {
    fn from(record: CleanedRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind,
            title: record.title,
            director: Some(record.director),
            cast: Some(record.cast),
            country: Some(record.country),
            date_added: Some(record.date_added),
            release_year: record.release_year,
            rating: Some(record.rating),
            duration: record.duration,
            genres: record.genres,
            description: record.description,
        }
    }
}

// CLEANING REPORT

#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct MissingValues {
    pub director: usize,
    pub cast: usize,
    pub country: usize,
    pub rating: usize,
    pub date_added: usize,
}

impl MissingValues {
    pub fn get(&self, field: OptionalField) -> usize {
        match field {
            OptionalField::Director => self.director,
            OptionalField::Cast => self.cast,
            OptionalField::Country => self.country,
            OptionalField::Rating => self.rating,
            OptionalField::DateAdded => self.date_added,
        }
    }

    pub fn increment(&mut self, field: OptionalField) {
        let slot = match field {
            OptionalField::Director => &mut self.director,
            OptionalField::Cast => &mut self.cast,
            OptionalField::Country => &mut self.country,
            OptionalField::Rating => &mut self.rating,
            OptionalField::DateAdded => &mut self.date_added,
        };
        *slot += 1;
    }

    pub fn total(&self) -> usize {
        OptionalField::ALL.iter().map(|f| self.get(*f)).sum()
    }
}

#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct CleaningReport {
    pub original_count: usize,
    pub duplicates_removed: usize,
    pub missing_values: MissingValues,
    pub final_count: usize,
}

impl CleaningReport {
    /// Share of raw records missing `field`, in percent.
    pub fn missing_pct(&self, field: OptionalField) -> f64 {
        if self.original_count == 0 {
            0.0
        } else {
            (self.missing_values.get(field) as f64 / self.original_count as f64) * 100.0
        }
    }

    pub fn duplicate_pct(&self) -> f64 {
        if self.original_count == 0 {
            0.0
        } else {
            (self.duplicates_removed as f64 / self.original_count as f64) * 100.0
        }
    }
}

// PROJECTIONS

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct GenreStats {
    pub genre: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct CountryStats {
    pub country: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct YearlyGrowth {
    pub year: i32,
    pub movies_added: usize,
    pub tv_shows_added: usize,
    pub total: usize,
    pub cumulative: usize,
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct RatingDistribution {
    pub rating: String,
    pub movies: usize,
    pub tv_shows: usize,
    pub total: usize,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct ContentAgeBucket {
    pub decade: String,
    pub count: usize,
    pub average_age: i64,
}

/// One year of genre additions, restricted to the top genres.
///
/// Serializes flat, e.g. `{"year": 2019, "Dramas": 4, "Comedies": 0}`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GenreEvolutionRow {
    pub year: i32,
    pub counts: Vec<(String, usize)>,
}

impl GenreEvolutionRow {
    pub fn get(&self, genre: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(name, _)| name == genre)
            .map(|(_, count)| *count)
    }
}

impl Serialize for GenreEvolutionRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.counts.len() + 1))?;
        map.serialize_entry("year", &self.year)?;
        for (genre, count) in &self.counts {
            map.serialize_entry(genre, count)?;
        }
        map.end()
    }
}

#[derive(Clone, Default, Serialize, PartialEq, Eq, Debug)]
pub struct GenreEvolution {
    /// Top genres, in descending popularity; every row carries exactly these.
    pub genres: Vec<String>,
    pub rows: Vec<GenreEvolutionRow>,
}

// HIGHLIGHTS

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct DatasetHealth {
    pub score: f32,
    pub risks: Vec<String>,
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug)]
pub struct AudienceMix {
    pub family_pct: f64,
    pub teen_pct: f64,
    pub mature_pct: f64,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct Highlights {
    pub health: DatasetHealth,
    pub top_genre_share: f64,
    pub top_country_share: f64,
    pub peak_year: Option<YearlyGrowth>,
    pub average_yearly_growth: f64,
    pub audience: Option<AudienceMix>,
}

/// Everything one analysis run produces, frozen after construction.
#[derive(Clone, Serialize, Debug)]
pub struct Analysis {
    pub report: CleaningReport,
    pub cleaned: Vec<CleanedRecord>,
    pub genre_distribution: Vec<GenreStats>,
    pub country_distribution: Vec<CountryStats>,
    pub yearly_growth: Vec<YearlyGrowth>,
    pub rating_distribution: Vec<RatingDistribution>,
    pub content_age: Vec<ContentAgeBucket>,
    pub genre_evolution: GenreEvolution,
    pub highlights: Highlights,
}
