use super::types::{CleaningReport, DatasetHealth, OptionalField};

pub fn calculate_dataset_health(
    report: &CleaningReport,
    duplicate_warning_pct: f64,
) -> DatasetHealth {
    let mut risks = Vec::new();
    let mut score: f64 = 100.0;

    for field in OptionalField::ALL {
        let missing_pct = report.missing_pct(field);

        if missing_pct > 15.0 {
            risks.push(format!(
                "⚠️ Field '{}' is missing in {:.1}% of records; breakdowns by it may be biased.",
                field.as_str(),
                missing_pct
            ));
            score -= 10.0;
        } else if missing_pct > 5.0 {
            risks.push(format!(
                "Field '{}' is missing in {:.1}% of records.",
                field.as_str(),
                missing_pct
            ));
            score -= 5.0;
        }
    }

    let duplicate_pct = report.duplicate_pct();
    if duplicate_pct > duplicate_warning_pct {
        risks.push(format!(
            "🔁 {} duplicate titles removed ({duplicate_pct:.1}% of the input).",
            report.duplicates_removed
        ));
        score -= 5.0;
    }

    DatasetHealth {
        score: (score.max(0.0) / 100.0) as f32,
        risks,
    }
}
