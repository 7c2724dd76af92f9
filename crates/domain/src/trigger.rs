//! Context triggers — declarative hints for when a quick action is relevant.
//!
//! The catalogue only carries this data. Deciding whether the current
//! context matches is the job of an external scene evaluator.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const CLOCK_FORMAT: &str = "%H:%M";

/// The user's inferred current context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Scene {
    Home,
    Office,
    Commute,
    Travel,
    Unknown,
}

impl std::fmt::Display for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => f.write_str("HOME"),
            Self::Office => f.write_str("OFFICE"),
            Self::Commute => f.write_str("COMMUTE"),
            Self::Travel => f.write_str("TRAVEL"),
            Self::Unknown => f.write_str("UNKNOWN"),
        }
    }
}

/// A daily window, `HH:MM` in 24-hour format. Overnight windows are not
/// supported: `start` must come before `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parsed start of the window.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidClockTime`] if `start` is not `HH:MM`.
    pub fn start_time(&self) -> Result<NaiveTime, ValidationError> {
        parse_clock(&self.start)
    }

    /// Parsed end of the window.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidClockTime`] if `end` is not `HH:MM`.
    pub fn end_time(&self) -> Result<NaiveTime, ValidationError> {
        parse_clock(&self.end)
    }

    /// Check that both bounds are `HH:MM` and the window is not inverted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidClockTime`] or
    /// [`ValidationError::InvertedTimeRange`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_time()? >= self.end_time()? {
            return Err(ValidationError::InvertedTimeRange {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// Strict `DD:DD` digits only, so lexical and chronological order agree.
fn parse_clock(value: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || ValidationError::InvalidClockTime {
        value: value.to_string(),
    };
    let well_formed = value.len() == 5
        && value.bytes().enumerate().all(|(index, byte)| {
            if index == 2 {
                byte == b':'
            } else {
                byte.is_ascii_digit()
            }
        });
    if !well_formed {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(value, CLOCK_FORMAT).map_err(|_| invalid())
}

/// When a quick action should be surfaced.
///
/// An empty `scenes` list means "any scene"; an empty `time_ranges` list
/// means "no time restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextTriggers {
    #[serde(default)]
    pub scenes: Vec<Scene>,
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
}

impl ContextTriggers {
    #[must_use]
    pub fn new(scenes: Vec<Scene>, time_ranges: Vec<TimeRange>) -> Self {
        Self {
            scenes,
            time_ranges,
        }
    }

    #[must_use]
    pub fn has_scene(&self, scene: Scene) -> bool {
        self.scenes.contains(&scene)
    }

    #[must_use]
    pub fn is_time_restricted(&self) -> bool {
        !self.time_ranges.is_empty()
    }

    /// Check every time range and reject repeated scene tags.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (index, scene) in self.scenes.iter().enumerate() {
            if self.scenes[..index].contains(scene) {
                return Err(ValidationError::DuplicateScene(*scene));
            }
        }
        self.time_ranges.iter().try_for_each(TimeRange::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_morning_window() {
        assert!(TimeRange::new("07:00", "09:30").validate().is_ok());
    }

    #[test]
    fn should_reject_overnight_window() {
        let result = TimeRange::new("22:00", "06:00").validate();
        assert_eq!(
            result,
            Err(ValidationError::InvertedTimeRange {
                start: "22:00".to_string(),
                end: "06:00".to_string(),
            })
        );
    }

    #[test]
    fn should_reject_empty_window() {
        assert!(TimeRange::new("12:00", "12:00").validate().is_err());
    }

    #[test]
    fn should_reject_space_padded_clock_time() {
        let result = TimeRange::new("08:00", " 9:00").validate();
        assert!(matches!(
            result,
            Err(ValidationError::InvalidClockTime { value }) if value == " 9:00"
        ));
        assert!(TimeRange::new("09: 5", "10:00").validate().is_err());
    }

    #[test]
    fn should_reject_unpadded_hour() {
        let result = TimeRange::new("7:00", "09:00").validate();
        assert!(matches!(
            result,
            Err(ValidationError::InvalidClockTime { value }) if value == "7:00"
        ));
    }

    #[test]
    fn should_reject_out_of_range_clock_time() {
        assert!(TimeRange::new("08:00", "24:00").validate().is_err());
        assert!(TimeRange::new("08:60", "09:00").validate().is_err());
    }

    #[test]
    fn should_parse_bounds_into_naive_time() {
        let range = TimeRange::new("17:30", "19:45");
        assert_eq!(
            range.start_time().unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
        assert_eq!(
            range.end_time().unwrap(),
            NaiveTime::from_hms_opt(19, 45, 0).unwrap()
        );
    }

    #[test]
    fn should_treat_empty_time_ranges_as_unrestricted() {
        let triggers = ContextTriggers::new(vec![Scene::Home], vec![]);
        assert!(!triggers.is_time_restricted());
        assert!(triggers.has_scene(Scene::Home));
        assert!(!triggers.has_scene(Scene::Office));
    }

    #[test]
    fn should_reject_duplicate_scene() {
        let triggers = ContextTriggers::new(
            vec![Scene::Commute, Scene::Travel, Scene::Commute],
            vec![],
        );
        assert_eq!(
            triggers.validate(),
            Err(ValidationError::DuplicateScene(Scene::Commute))
        );
    }

    #[test]
    fn should_serialize_scene_tags_in_upper_case() {
        let json = serde_json::to_string(&Scene::Office).unwrap();
        assert_eq!(json, "\"OFFICE\"");
        let parsed: Scene = serde_json::from_str("\"UNKNOWN\"").unwrap();
        assert_eq!(parsed, Scene::Unknown);
    }

    #[test]
    fn should_default_missing_trigger_lists_when_deserializing() {
        let triggers: ContextTriggers = serde_json::from_str("{}").unwrap();
        assert_eq!(triggers, ContextTriggers::default());
    }

    #[test]
    fn should_display_time_range() {
        assert_eq!(TimeRange::new("08:00", "10:00").to_string(), "08:00..10:00");
    }
}
