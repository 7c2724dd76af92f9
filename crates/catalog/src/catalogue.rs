//! Catalogue accessors — pure reads over the preset tables.
//!
//! The per-category tables are authoritative: [`presets_by_category`]
//! returns the table an action is listed in, never a scan of the
//! `category` fields.

use std::collections::HashSet;

use quickaction_domain::category::Category;
use quickaction_domain::quick_action::QuickAction;

use crate::error::CatalogueIssue;
use crate::presets::{COMMUNICATION, NAVIGATION, PAYMENT};

/// How many leading presets of each category make up the first-run set.
const DEFAULT_SELECTION: [(Category, usize); 3] = [
    (Category::Payment, 3),
    (Category::Navigation, 3),
    (Category::Communication, 2),
];

type Table<'a> = (Category, &'a [QuickAction]);

/// The tables in catalogue order.
fn tables() -> [Table<'static>; 3] {
    [
        (Category::Payment, payment_presets()),
        (Category::Navigation, navigation_presets()),
        (Category::Communication, communication_presets()),
    ]
}

/// The payment table, in display order.
#[must_use]
pub fn payment_presets() -> &'static [QuickAction] {
    &PAYMENT
}

/// The navigation table, in display order.
#[must_use]
pub fn navigation_presets() -> &'static [QuickAction] {
    &NAVIGATION
}

/// The communication table, in display order.
#[must_use]
pub fn communication_presets() -> &'static [QuickAction] {
    &COMMUNICATION
}

/// Every preset: payment, then navigation, then communication, each in
/// table order.
#[must_use]
pub fn all_presets() -> Vec<&'static QuickAction> {
    concat(&tables())
}

/// The presets listed under `category`.
///
/// Categories without a table yield an empty slice.
#[must_use]
pub fn presets_by_category(category: Category) -> &'static [QuickAction] {
    lookup(&tables(), category)
}

/// Like [`presets_by_category`], for a raw category name.
///
/// An unknown name is treated as "nothing configured" and yields an empty
/// slice.
#[must_use]
pub fn presets_by_category_name(name: &str) -> &'static [QuickAction] {
    match name.parse::<Category>() {
        Ok(category) => presets_by_category(category),
        Err(err) => {
            tracing::debug!(%err, "no presets for category");
            &[]
        }
    }
}

/// The recommended set for first-run users: the leading 3 payment,
/// 3 navigation and 2 communication presets, in that order.
///
/// A category shorter than its share contributes all it has.
#[must_use]
pub fn default_presets() -> Vec<&'static QuickAction> {
    select_defaults(&tables())
}

/// All presets that are currently offerable, in catalogue order.
#[must_use]
pub fn enabled_presets() -> Vec<&'static QuickAction> {
    all_presets()
        .into_iter()
        .filter(|preset| preset.enabled)
        .collect()
}

/// Look up a preset by id across every table.
#[must_use]
pub fn find_preset(id: &str) -> Option<&'static QuickAction> {
    tables()
        .into_iter()
        .flat_map(|(_, presets)| presets)
        .find(|preset| preset.id == id)
}

/// Check the shipped data: shape of every preset, unique ids, and that
/// each preset's `category` matches the table it is listed in.
#[must_use]
#[tracing::instrument]
pub fn audit() -> Vec<CatalogueIssue> {
    let issues = audit_tables(&tables());
    tracing::debug!(issues = issues.len(), "catalogue audited");
    issues
}

fn lookup<'a>(tables: &[Table<'a>], category: Category) -> &'a [QuickAction] {
    tables
        .iter()
        .find(|(listed_under, _)| *listed_under == category)
        .map(|(_, presets)| *presets)
        .unwrap_or_default()
}

fn concat<'a>(tables: &[Table<'a>]) -> Vec<&'a QuickAction> {
    tables
        .iter()
        .flat_map(|(_, presets)| presets.iter())
        .collect()
}

fn select_defaults<'a>(tables: &[Table<'a>]) -> Vec<&'a QuickAction> {
    DEFAULT_SELECTION
        .iter()
        .flat_map(|&(category, count)| lookup(tables, category).iter().take(count))
        .collect()
}

fn audit_tables(tables: &[Table<'_>]) -> Vec<CatalogueIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for &(listed_under, presets) in tables {
        for preset in presets {
            if let Err(source) = preset.validate() {
                issues.push(CatalogueIssue::InvalidPreset {
                    id: preset.id.clone(),
                    source,
                });
            }
            if !seen.insert(&preset.id) {
                issues.push(CatalogueIssue::DuplicateId(preset.id.clone()));
            }
            if preset.category != listed_under {
                issues.push(CatalogueIssue::MisplacedCategory {
                    id: preset.id.clone(),
                    declared: preset.category,
                    listed_under,
                });
            }
        }
    }

    issues
}
