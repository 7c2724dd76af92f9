//! Which slice of the catalogue to print.

use std::convert::Infallible;
use std::str::FromStr;

use quickaction_domain::quick_action::QuickAction;

/// A named view over the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Defaults,
    Enabled,
    /// A category name. Unknown names select nothing.
    Category(String),
}

impl Selection {
    /// Resolve the selection against the built-in catalogue.
    #[must_use]
    pub fn resolve(&self) -> Vec<&'static QuickAction> {
        match self {
            Self::All => quickaction_catalog::all_presets(),
            Self::Defaults => quickaction_catalog::default_presets(),
            Self::Enabled => quickaction_catalog::enabled_presets(),
            Self::Category(name) => quickaction_catalog::presets_by_category_name(name)
                .iter()
                .collect(),
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "all" => Self::All,
            "defaults" => Self::Defaults,
            "enabled" => Self::Enabled,
            other => Self::Category(other.to_string()),
        })
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Defaults => f.write_str("defaults"),
            Self::Enabled => f.write_str("enabled"),
            Self::Category(name) => write!(f, "category({name})"),
        }
    }
}

/// Serialize presets as a JSON array.
///
/// # Errors
///
/// Returns the serializer error, which cannot happen for well-formed presets.
pub fn render_json(presets: &[&QuickAction], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(presets)
    } else {
        serde_json::to_string(presets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_keywords_and_fall_back_to_category() {
        assert_eq!("all".parse::<Selection>(), Ok(Selection::All));
        assert_eq!(" defaults ".parse::<Selection>(), Ok(Selection::Defaults));
        assert_eq!("enabled".parse::<Selection>(), Ok(Selection::Enabled));
        assert_eq!(
            "payment".parse::<Selection>(),
            Ok(Selection::Category("payment".to_string()))
        );
    }

    #[test]
    fn should_display_selection() {
        assert_eq!(Selection::Defaults.to_string(), "defaults");
        assert_eq!(
            Selection::Category("navigation".to_string()).to_string(),
            "category(navigation)"
        );
    }

    #[test]
    fn should_render_compact_json_on_one_line() {
        let presets = Selection::Defaults.resolve();
        let json = render_json(&presets, false).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with('['));
    }

    #[test]
    fn should_render_empty_array_for_empty_selection() {
        assert_eq!(render_json(&[], false).unwrap(), "[]");
    }
}
