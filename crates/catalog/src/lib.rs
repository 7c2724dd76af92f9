//! # quickaction-catalog
//!
//! The built-in preset catalogue.
//!
//! ## Responsibilities
//! - Hold the canonical, ordered preset tables for each category
//! - Expose pure read accessors: all presets, per-category lookup,
//!   first-run defaults, lookup by id
//! - Audit the shipped data for maintainers (shape, duplicate ids,
//!   category/table mismatches)
//!
//! ## Dependency rule
//! Depends on `quickaction-domain` only. The data is built once on first
//! access and never mutated, so every accessor is safe to call from any
//! thread without synchronisation.

pub mod catalogue;
pub mod error;
mod presets;

pub use catalogue::{
    all_presets, audit, communication_presets, default_presets, enabled_presets, find_preset,
    navigation_presets, payment_presets, presets_by_category, presets_by_category_name,
};
pub use error::CatalogueIssue;
