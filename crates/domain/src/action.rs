//! Action — how a quick action is invoked by the executor.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The invocation mechanism, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    AppLaunch,
    DeepLink,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AppLaunch => f.write_str("app_launch"),
            Self::DeepLink => f.write_str("deep_link"),
        }
    }
}

/// What the executor should do when the quick action is chosen.
///
/// The variant carries exactly the parameters its [`ActionType`] needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Launch an installed application.
    AppLaunch {
        /// Platform package identifier, e.g. `"com.tencent.mm"`.
        package_name: String,
    },
    /// Open a URI that resolves to a screen inside an application.
    DeepLink {
        uri: String,
        /// Named shortcut the executor may expand into a richer invocation,
        /// e.g. a pre-filled route.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        shortcut_id: Option<String>,
    },
}

impl Action {
    #[must_use]
    pub fn app_launch(package_name: impl Into<String>) -> Self {
        Self::AppLaunch {
            package_name: package_name.into(),
        }
    }

    #[must_use]
    pub fn deep_link(uri: impl Into<String>) -> Self {
        Self::DeepLink {
            uri: uri.into(),
            shortcut_id: None,
        }
    }

    #[must_use]
    pub fn deep_link_with_shortcut(uri: impl Into<String>, shortcut_id: impl Into<String>) -> Self {
        Self::DeepLink {
            uri: uri.into(),
            shortcut_id: Some(shortcut_id.into()),
        }
    }

    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::AppLaunch { .. } => ActionType::AppLaunch,
            Self::DeepLink { .. } => ActionType::DeepLink,
        }
    }

    /// Check that the parameters required by the action type are present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPackageName`], [`ValidationError::MissingUri`]
    /// or [`ValidationError::EmptyShortcut`] for blank parameters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::AppLaunch { package_name } if package_name.trim().is_empty() => {
                Err(ValidationError::MissingPackageName)
            }
            Self::DeepLink { uri, .. } if uri.trim().is_empty() => Err(ValidationError::MissingUri),
            Self::DeepLink {
                shortcut_id: Some(shortcut),
                ..
            } if shortcut.trim().is_empty() => Err(ValidationError::EmptyShortcut),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AppLaunch { package_name } => write!(f, "app_launch({package_name})"),
            Self::DeepLink {
                uri,
                shortcut_id: Some(shortcut),
            } => write!(f, "deep_link({uri}, {shortcut})"),
            Self::DeepLink { uri, .. } => write!(f, "deep_link({uri})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_action_type_of_each_variant() {
        assert_eq!(
            Action::app_launch("com.tencent.mm").action_type(),
            ActionType::AppLaunch
        );
        assert_eq!(
            Action::deep_link("tel:").action_type(),
            ActionType::DeepLink
        );
    }

    #[test]
    fn should_accept_deep_link_without_shortcut() {
        assert!(Action::deep_link("weixin://scanqrcode").validate().is_ok());
    }

    #[test]
    fn should_reject_app_launch_with_blank_package() {
        assert_eq!(
            Action::app_launch("  ").validate(),
            Err(ValidationError::MissingPackageName)
        );
    }

    #[test]
    fn should_reject_deep_link_with_empty_uri() {
        assert_eq!(
            Action::deep_link_with_shortcut("", "navigate_home").validate(),
            Err(ValidationError::MissingUri)
        );
    }

    #[test]
    fn should_reject_empty_shortcut_id() {
        assert_eq!(
            Action::deep_link_with_shortcut("amapuri://route/plan", "").validate(),
            Err(ValidationError::EmptyShortcut)
        );
    }

    #[test]
    fn should_display_action_type_in_snake_case() {
        assert_eq!(ActionType::AppLaunch.to_string(), "app_launch");
        assert_eq!(ActionType::DeepLink.to_string(), "deep_link");
    }

    #[test]
    fn should_display_actions() {
        assert_eq!(
            Action::app_launch("com.whatsapp").to_string(),
            "app_launch(com.whatsapp)"
        );
        assert_eq!(
            Action::deep_link_with_shortcut("amapuri://route/plan", "navigate_home").to_string(),
            "deep_link(amapuri://route/plan, navigate_home)"
        );
    }

    #[test]
    fn should_deserialize_app_launch_from_tagged_json() {
        let json = serde_json::json!({
            "type": "app_launch",
            "package_name": "org.telegram.messenger"
        });
        let a: Action = serde_json::from_value(json).unwrap();
        assert_eq!(a, Action::app_launch("org.telegram.messenger"));
    }

    #[test]
    fn should_deserialize_deep_link_with_default_shortcut() {
        let json = serde_json::json!({
            "type": "deep_link",
            "uri": "sms:"
        });
        let a: Action = serde_json::from_value(json).unwrap();
        assert!(matches!(a, Action::DeepLink { shortcut_id: None, .. }));
    }

    #[test]
    fn should_omit_absent_shortcut_when_serializing() {
        let json = serde_json::to_value(Action::deep_link("mailto:")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "deep_link", "uri": "mailto:"}));
    }
}
