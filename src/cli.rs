use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use content_analyser::analyser::logic::{
    Analysis, OptionalField, analyse_file_flow, clean_file_flow, sample_file_flow, save_analysis,
};
use content_analyser::config::load_settings;
use content_analyser::utils::{fit, fmt_opt, fmt_pct};
use std::path::{Path, PathBuf};

/// Rows shown per table in the text report.
const TEXT_ROWS: usize = 10;

#[derive(Parser)]
#[command(
    name = "content-analyser",
    about = "Clean a content catalogue and report genre, country, rating and growth statistics"
)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a catalogue file and report every statistic
    Analyse {
        /// Path to the records file (JSON or CSV)
        file: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the full analysis as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a JSON settings file. Defaults to the user config directory.
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Clean a catalogue file and save the cleaned records
    Clean {
        /// Path to the records file (JSON or CSV)
        file: PathBuf,

        /// Output file path (JSON or CSV)
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Generate a synthetic catalogue
    Sample {
        /// Number of records to generate
        #[arg(short, long, default_value_t = 1200)]
        count: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file path (JSON or CSV)
        #[arg(short, long)]
        output: PathBuf,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Analyse {
            file,
            format,
            output,
            settings,
        } => handle_analyse(&file, format, output.as_deref(), settings.as_deref()),
        Commands::Clean { file, output } => handle_clean(&file, &output),
        Commands::Sample {
            count,
            seed,
            output,
        } => handle_sample(count, seed, &output),
    }
}

fn handle_analyse(
    file: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    settings_path: Option<&Path>,
) -> Result<()> {
    let settings = load_settings(settings_path).context("Failed to load settings")?;
    let analysis = analyse_file_flow(file, &settings)?;

    if let Some(output) = output {
        save_analysis(&analysis, output)
            .with_context(|| format!("Failed to write analysis to {}", output.display()))?;
        log::info!("Analysis written to {}", output.display());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => print_report(&analysis),
    }
    Ok(())
}

fn handle_clean(file: &Path, output: &Path) -> Result<()> {
    let report = clean_file_flow(file, output)?;
    println!(
        "Cleaned {} records: {} duplicates removed, {} kept. Saved to {}",
        report.original_count,
        report.duplicates_removed,
        report.final_count,
        output.display()
    );
    Ok(())
}

fn handle_sample(count: usize, seed: Option<u64>, output: &Path) -> Result<()> {
    let written = sample_file_flow(count, seed, output)?;
    println!("Generated {written} records into {}", output.display());
    Ok(())
}

fn print_report(analysis: &Analysis) {
    let report = &analysis.report;
    println!("== Data cleaning");
    println!("  original records   {}", report.original_count);
    println!("  duplicates removed {}", report.duplicates_removed);
    println!("  final records      {}", report.final_count);
    for field in OptionalField::ALL {
        println!(
            "  missing {}   {} ({})",
            fit(field.as_str(), 10),
            report.missing_values.get(field),
            fmt_pct(report.missing_pct(field))
        );
    }

    println!("\n== Top genres");
    for g in analysis.genre_distribution.iter().take(TEXT_ROWS) {
        println!("  {} {:>6} {:>7}", fit(&g.genre, 24), g.count, fmt_pct(g.percentage));
    }

    println!("\n== Top countries");
    for c in analysis.country_distribution.iter().take(TEXT_ROWS) {
        println!("  {} {:>6} {:>7}", fit(&c.country, 24), c.count, fmt_pct(c.percentage));
    }

    println!("\n== Yearly growth");
    for y in &analysis.yearly_growth {
        println!(
            "  {}  movies {:>5}  tv {:>5}  total {:>5}  cumulative {:>6}",
            y.year, y.movies_added, y.tv_shows_added, y.total, y.cumulative
        );
    }

    println!("\n== Ratings");
    for r in analysis.rating_distribution.iter().take(TEXT_ROWS) {
        println!(
            "  {}  movies {:>5}  tv {:>5}  total {:>5}",
            fit(&r.rating, 6),
            r.movies,
            r.tv_shows,
            r.total
        );
    }

    println!("\n== Content age");
    for d in &analysis.content_age {
        println!("  {}  {:>6} titles  avg age {}", d.decade, d.count, d.average_age);
    }

    let evolution = &analysis.genre_evolution;
    if !evolution.rows.is_empty() {
        println!("\n== Genre evolution ({})", evolution.genres.join(", "));
        for row in &evolution.rows {
            let counts: Vec<String> = row.counts.iter().map(|(_, n)| n.to_string()).collect();
            println!("  {}  {}", row.year, counts.join(" / "));
        }
    }

    let highlights = &analysis.highlights;
    println!("\n== Highlights");
    println!("  health score        {:.2}", highlights.health.score);
    println!("  top 5 genre share   {}", fmt_pct(highlights.top_genre_share));
    println!("  top 3 country share {}", fmt_pct(highlights.top_country_share));
    if let Some(peak) = highlights.peak_year {
        println!("  peak year           {} ({} titles)", peak.year, peak.total);
    }
    println!(
        "  avg yearly growth   {}",
        fmt_opt(Some(highlights.average_yearly_growth))
    );
    if let Some(mix) = highlights.audience {
        println!(
            "  audience            family {} / teen {} / mature {}",
            fmt_pct(mix.family_pct),
            fmt_pct(mix.teen_pct),
            fmt_pct(mix.mature_pct)
        );
    }
    for risk in &highlights.health.risks {
        println!("  {risk}");
    }
}
