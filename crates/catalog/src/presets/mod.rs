//! Preset tables, one per category. Order within a table is the default
//! display order and the tie-break for equal priorities.

mod communication;
mod navigation;
mod payment;

use std::sync::LazyLock;

use quickaction_domain::quick_action::QuickAction;
use quickaction_domain::trigger::{ContextTriggers, Scene, TimeRange};

pub(crate) static PAYMENT: LazyLock<Vec<QuickAction>> = LazyLock::new(payment::presets);
pub(crate) static NAVIGATION: LazyLock<Vec<QuickAction>> = LazyLock::new(navigation::presets);
pub(crate) static COMMUNICATION: LazyLock<Vec<QuickAction>> =
    LazyLock::new(communication::presets);

fn triggers(scenes: &[Scene], time_ranges: &[(&str, &str)]) -> ContextTriggers {
    ContextTriggers::new(
        scenes.to_vec(),
        time_ranges
            .iter()
            .map(|&(start, end)| TimeRange::new(start, end))
            .collect(),
    )
}
