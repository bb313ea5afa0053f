//! # content-analyser - descriptive statistics for content catalogues
//!
//! Takes a flat list of catalogue records (title, type, country, genre tags,
//! rating, dates), cleans it and derives the views a catalogue dashboard needs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use content_analyser::analyser::logic;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let records = logic::load_records(Path::new("catalog.json"))?;
//! let analysis = logic::analyse_records(&records);
//! println!("{} titles after cleaning", analysis.report.final_count);
//!
//! for genre in analysis.genre_distribution.iter().take(5) {
//!     println!("{}: {} ({:.1}%)", genre.genre, genre.count, genre.percentage);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`analyser`]: Cleaning and projections
//!   - [`analyser::logic::cleaning`]: Deduplication and sentinel filling
//!   - [`analyser::logic::distribution`]: Genre, country and rating breakdowns
//!   - [`analyser::logic::timeline`]: Yearly growth, content age, genre evolution
//! - [`config`]: Analysis settings
//! - [`error`]: Error types for loading and saving
//! - [`sample`]: Synthetic catalogue generator
//! - [`utils`]: Formatting helpers
//!
//! ## Key Concepts
//!
//! ### Cleaning
//!
//! Records sharing a `title-release_year` key are duplicates; the first one
//! wins. Missing optional fields are replaced with fixed sentinels such as
//! `"Unknown Country"`, and the projections skip sentinel values where a
//! missing value would distort the result.
//!
//! ### Pure projections
//!
//! Every projection is a plain function over `&[CleanedRecord]`, so each can be
//! called on its own. [`analyser::logic::run_full_analysis`] runs them all and
//! returns one immutable [`analyser::logic::Analysis`].

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod sample;
pub mod utils;
