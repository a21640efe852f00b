use chrono::Local;
use tracing::debug;

use crate::domain::session::ControlState;
use super::{DisplaySurface, Notice, NoticeKind};

/// Prints element updates and notices to stdout
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl ConsoleSurface {
    pub fn new() -> Self {
        Self
    }
}

impl DisplaySurface for ConsoleSurface {
    fn set_text(&self, element: &str, text: &str) {
        println!("{}: {}", element, text);
    }

    fn set_control(&self, control: &str, state: &ControlState) {
        debug!(
            "control {} -> {} ({})",
            control,
            if state.enabled { "enabled" } else { "disabled" },
            state.label
        );
    }

    fn append_notice(&self, notice: &Notice) {
        let icon = match notice.kind {
            NoticeKind::Success => "✅",
            NoticeKind::Error => "❌",
        };
        println!(
            "[{}] {} {}",
            notice.created_at.with_timezone(&Local).format("%H:%M:%S"),
            icon,
            notice.message
        );
    }

    fn remove_notice(&self, id: &str) {
        debug!("notice {} expired", id);
    }
}
