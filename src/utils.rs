/// Formats an optional f64 to 1 decimal place, or returns "—" if None or non-finite.
pub fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{x:.1}"),
        _ => "—".to_owned(),
    }
}

/// Formats a percentage with one decimal place and a `%` suffix.
pub fn fmt_pct(v: f64) -> String {
    format!("{}%", fmt_opt(Some(v)))
}

/// Pads or truncates `s` to exactly `width` characters.
pub fn fit(s: &str, width: usize) -> String {
    let truncated: String = s.chars().take(width).collect();
    format!("{truncated:<width$}")
}
