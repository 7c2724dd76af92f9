//! Quick action — a one-tap shortcut to an app or deep link.
//!
//! A quick action says *what* to trigger ([`Action`]), *where* it is shown
//! ([`Category`]), and *when* it is relevant ([`ContextTriggers`]).

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionType};
use crate::category::Category;
use crate::error::{QuickActionError, ValidationError};
use crate::id::QuickActionId;
use crate::trigger::ContextTriggers;

/// A single offerable action with display metadata and context hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub id: QuickActionId,
    pub name: String,
    pub description: String,
    /// Symbolic icon reference resolved by the UI.
    pub icon: String,
    pub category: Category,
    pub action: Action,
    #[serde(default)]
    pub context_triggers: ContextTriggers,
    pub enabled: bool,
    /// Relative ranking weight; higher is more prominent.
    pub priority: u32,
}

impl QuickAction {
    /// Create a builder for constructing a [`QuickAction`].
    #[must_use]
    pub fn builder() -> QuickActionBuilder {
        QuickActionBuilder::default()
    }

    #[must_use]
    pub fn action_type(&self) -> ActionType {
        self.action.action_type()
    }

    /// Check shape invariants.
    ///
    /// # Errors
    ///
    /// Returns [`QuickActionError::Validation`] when:
    /// - `id` is empty ([`ValidationError::EmptyId`])
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - the action lacks its required parameter
    /// - a context trigger is malformed
    pub fn validate(&self) -> Result<(), QuickActionError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.action.validate()?;
        self.context_triggers.validate()?;
        Ok(())
    }
}

/// Step-by-step builder for [`QuickAction`].
#[derive(Debug, Default)]
pub struct QuickActionBuilder {
    id: Option<QuickActionId>,
    name: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    category: Option<Category>,
    action: Option<Action>,
    context_triggers: ContextTriggers,
    enabled: Option<bool>,
    priority: Option<u32>,
}

impl QuickActionBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<QuickActionId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn context_triggers(mut self, context_triggers: ContextTriggers) -> Self {
        self.context_triggers = context_triggers;
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Consume the builder, validate, and return a [`QuickAction`].
    ///
    /// # Errors
    ///
    /// Returns [`QuickActionError::Validation`] if the category or action is
    /// missing, or if any shape invariant fails.
    pub fn build(self) -> Result<QuickAction, QuickActionError> {
        let category = self.category.ok_or(ValidationError::MissingCategory)?;
        let action = self.action.ok_or(ValidationError::MissingAction)?;
        let quick_action = QuickAction {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            icon: self.icon.unwrap_or_default(),
            category,
            action,
            context_triggers: self.context_triggers,
            enabled: self.enabled.unwrap_or(true),
            priority: self.priority.unwrap_or_default(),
        };
        quick_action.validate()?;
        Ok(quick_action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::{Scene, TimeRange};

    fn valid_quick_action() -> QuickAction {
        QuickAction::builder()
            .id("pay_wechat_scan")
            .name("WeChat Scan")
            .description("Open the WeChat QR scanner")
            .icon("qr_code_scanner")
            .category(Category::Payment)
            .action(Action::deep_link("weixin://scanqrcode"))
            .context_triggers(ContextTriggers::new(
                vec![Scene::Commute, Scene::Travel],
                vec![TimeRange::new("07:00", "09:00")],
            ))
            .priority(90)
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_quick_action_when_required_fields_provided() {
        let qa = valid_quick_action();
        assert_eq!(qa.id, "pay_wechat_scan");
        assert_eq!(qa.category, Category::Payment);
        assert_eq!(qa.action_type(), ActionType::DeepLink);
        assert_eq!(qa.priority, 90);
        assert_eq!(qa.context_triggers.scenes.len(), 2);
    }

    #[test]
    fn should_default_to_enabled_when_not_specified() {
        assert!(valid_quick_action().enabled);
    }

    #[test]
    fn should_default_to_zero_priority_and_no_triggers() {
        let qa = QuickAction::builder()
            .id("comm_phone")
            .name("Phone")
            .category(Category::Communication)
            .action(Action::deep_link("tel:"))
            .build()
            .unwrap();
        assert_eq!(qa.priority, 0);
        assert!(qa.context_triggers.scenes.is_empty());
        assert!(!qa.context_triggers.is_time_restricted());
    }

    #[test]
    fn should_build_disabled_quick_action_when_enabled_is_false() {
        let qa = QuickAction::builder()
            .id("nav_waze")
            .name("Waze")
            .category(Category::Navigation)
            .action(Action::app_launch("com.waze"))
            .enabled(false)
            .build()
            .unwrap();
        assert!(!qa.enabled);
    }

    #[test]
    fn should_return_validation_error_when_id_is_empty() {
        let result = QuickAction::builder()
            .name("No id")
            .category(Category::Payment)
            .action(Action::app_launch("com.eg.android.AlipayGphone"))
            .build();
        assert!(matches!(
            result,
            Err(QuickActionError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = QuickAction::builder()
            .id("unnamed")
            .category(Category::Payment)
            .action(Action::app_launch("com.eg.android.AlipayGphone"))
            .build();
        assert!(matches!(
            result,
            Err(QuickActionError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_category_is_missing() {
        let result = QuickAction::builder()
            .id("x")
            .name("X")
            .action(Action::deep_link("tel:"))
            .build();
        assert!(matches!(
            result,
            Err(QuickActionError::Validation(ValidationError::MissingCategory))
        ));
    }

    #[test]
    fn should_return_validation_error_when_action_is_missing() {
        let result = QuickAction::builder()
            .id("x")
            .name("X")
            .category(Category::Communication)
            .build();
        assert!(matches!(
            result,
            Err(QuickActionError::Validation(ValidationError::MissingAction))
        ));
    }

    #[test]
    fn should_propagate_action_parameter_errors() {
        let result = QuickAction::builder()
            .id("pay_blank")
            .name("Blank")
            .category(Category::Payment)
            .action(Action::app_launch(""))
            .build();
        assert!(matches!(
            result,
            Err(QuickActionError::Validation(
                ValidationError::MissingPackageName
            ))
        ));
    }

    #[test]
    fn should_propagate_trigger_errors() {
        let result = QuickAction::builder()
            .id("nav_late")
            .name("Late")
            .category(Category::Navigation)
            .action(Action::deep_link("geo:0,0?q=home"))
            .context_triggers(ContextTriggers::new(
                vec![],
                vec![TimeRange::new("23:00", "01:00")],
            ))
            .build();
        assert!(matches!(
            result,
            Err(QuickActionError::Validation(
                ValidationError::InvertedTimeRange { .. }
            ))
        ));
    }

    #[test]
    fn should_roundtrip_quick_action_through_serde_json() {
        let qa = valid_quick_action();
        let json = serde_json::to_string(&qa).unwrap();
        let parsed: QuickAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, qa);
    }

    #[test]
    fn should_serialize_nested_action_with_type_tag() {
        let json = serde_json::to_value(valid_quick_action()).unwrap();
        assert_eq!(json["category"], "payment");
        assert_eq!(json["action"]["type"], "deep_link");
        assert_eq!(json["action"]["uri"], "weixin://scanqrcode");
        assert_eq!(json["context_triggers"]["scenes"][0], "COMMUTE");
        assert_eq!(json["context_triggers"]["time_ranges"][0]["start"], "07:00");
    }
}
