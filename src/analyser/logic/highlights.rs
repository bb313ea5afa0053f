use super::health::calculate_dataset_health;
use super::types::{
    AudienceMix, CleaningReport, CountryStats, GenreStats, Highlights, RatingDistribution,
    YearlyGrowth,
};

const FAMILY_RATINGS: &[&str] = &["G", "PG", "TV-G", "TV-Y", "TV-Y7"];
const TEEN_RATINGS: &[&str] = &["PG-13", "TV-14"];
const MATURE_RATINGS: &[&str] = &["R", "NC-17", "TV-MA"];

/// Inputs for [`calculate_highlights`], borrowed from a finished analysis.
pub struct HighlightSources<'a> {
    pub report: &'a CleaningReport,
    pub genres: &'a [GenreStats],
    pub countries: &'a [CountryStats],
    pub growth: &'a [YearlyGrowth],
    pub ratings: &'a [RatingDistribution],
}

pub fn calculate_highlights(
    sources: &HighlightSources<'_>,
    duplicate_warning_pct: f64,
) -> Highlights {
    Highlights {
        health: calculate_dataset_health(sources.report, duplicate_warning_pct),
        top_genre_share: sources.genres.iter().take(5).map(|g| g.percentage).sum(),
        top_country_share: sources.countries.iter().take(3).map(|c| c.percentage).sum(),
        peak_year: peak_year(sources.growth),
        average_yearly_growth: average_yearly_growth(sources.growth),
        audience: audience_mix(sources.ratings),
    }
}

/// The year with the most additions; the earliest wins a tie.
pub fn peak_year(growth: &[YearlyGrowth]) -> Option<YearlyGrowth> {
    growth
        .iter()
        .copied()
        .reduce(|best, row| if row.total > best.total { row } else { best })
}

/// Average change in yearly additions between the first and last year.
pub fn average_yearly_growth(growth: &[YearlyGrowth]) -> f64 {
    match (growth.first(), growth.last()) {
        (Some(first), Some(last)) if growth.len() > 1 => {
            (last.total as f64 - first.total as f64) / (growth.len() - 1) as f64
        }
        _ => 0.0,
    }
}

pub fn audience_mix(ratings: &[RatingDistribution]) -> Option<AudienceMix> {
    let rated: usize = ratings.iter().map(|r| r.total).sum();
    if rated == 0 {
        return None;
    }

    let segment_pct = |segment: &[&str]| {
        let count: usize = ratings
            .iter()
            .filter(|r| segment.contains(&r.rating.as_str()))
            .map(|r| r.total)
            .sum();
        (count as f64 / rated as f64) * 100.0
    };

    Some(AudienceMix {
        family_pct: segment_pct(FAMILY_RATINGS),
        teen_pct: segment_pct(TEEN_RATINGS),
        mature_pct: segment_pct(MATURE_RATINGS),
    })
}
