//! Problems reported by the catalogue audit.

use quickaction_domain::category::Category;
use quickaction_domain::error::QuickActionError;
use quickaction_domain::id::QuickActionId;

/// A defect in the shipped preset data.
///
/// Accessors never fail on these; they are surfaced for maintainers.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueIssue {
    /// A preset fails shape validation.
    #[error("preset {id} is invalid")]
    InvalidPreset {
        id: QuickActionId,
        #[source]
        source: QuickActionError,
    },

    /// The same id is used by more than one preset.
    #[error("preset id {0} appears more than once")]
    DuplicateId(QuickActionId),

    /// A preset's `category` field disagrees with the table it is listed in.
    /// The table wins for lookups.
    #[error("preset {id} declares category {declared} but is listed under {listed_under}")]
    MisplacedCategory {
        id: QuickActionId,
        declared: Category,
        listed_under: Category,
    },
}
