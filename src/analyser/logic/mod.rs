pub mod analysis;
pub mod cleaning;
pub mod distribution;
pub mod flows;
pub mod health;
pub mod highlights;
pub mod io;
pub mod timeline;
pub mod types;

pub use analysis::{analyse_records, run_full_analysis};
pub use cleaning::clean_records;
pub use distribution::{country_distribution, genre_distribution, rating_distribution, split_tags};
pub use flows::{analyse_file_flow, clean_file_flow, sample_file_flow};
pub use health::calculate_dataset_health;
pub use highlights::calculate_highlights;
pub use io::{load_records, save_analysis, save_cleaned, save_records};
pub use timeline::{content_age, genre_evolution, parse_added_year, yearly_growth};
pub use types::{
    Analysis, AudienceMix, CleanedRecord, CleaningReport, ContentAgeBucket, ContentKind,
    ContentRecord, CountryStats, DatasetHealth, GenreEvolution, GenreEvolutionRow, GenreStats,
    Highlights, MissingValues, OptionalField, RatingDistribution, YearlyGrowth,
};
