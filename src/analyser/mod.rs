//! Catalogue cleaning and the projections computed over the cleaned set.

pub mod logic;
