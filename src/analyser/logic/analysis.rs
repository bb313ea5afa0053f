use super::cleaning::clean_records;
use super::distribution::{country_distribution, genre_distribution, rating_distribution};
use super::highlights::{HighlightSources, calculate_highlights};
use super::timeline::{content_age, genre_evolution, yearly_growth};
use super::types::{Analysis, ContentRecord};
use crate::config::AnalysisSettings;

/// Cleans `raw` and computes every projection with default settings.
pub fn analyse_records(raw: &[ContentRecord]) -> Analysis {
    run_full_analysis(raw, &AnalysisSettings::default())
}

/// Cleans `raw`, then computes all projections and highlights over the cleaned set.
///
/// The result is a self-contained snapshot; nothing in it borrows from `raw`.
pub fn run_full_analysis(raw: &[ContentRecord], settings: &AnalysisSettings) -> Analysis {
    let start_time = std::time::Instant::now();
    let (cleaned, report) = clean_records(raw);

    let genres = genre_distribution(&cleaned);
    let countries = country_distribution(&cleaned, settings.country_limit);
    let growth = yearly_growth(&cleaned, settings.growth_start_year);
    let ratings = rating_distribution(&cleaned);
    let ages = content_age(&cleaned, settings.effective_reference_year());
    let evolution = genre_evolution(
        &cleaned,
        &genres,
        settings.evolution_top_genres,
        settings.evolution_start_year,
    );

    let highlights = calculate_highlights(
        &HighlightSources {
            report: &report,
            genres: &genres,
            countries: &countries,
            growth: &growth,
            ratings: &ratings,
        },
        settings.duplicate_warning_pct,
    );

    log::debug!(
        "Analysed {} records ({} genres, {} countries, {} growth years) in {:?}",
        report.final_count,
        genres.len(),
        countries.len(),
        growth.len(),
        start_time.elapsed()
    );

    Analysis {
        report,
        cleaned,
        genre_distribution: genres,
        country_distribution: countries,
        yearly_growth: growth,
        rating_distribution: ratings,
        content_age: ages,
        genre_evolution: evolution,
        highlights,
    }
}
