//! In-memory surface, the document model for headless runs and tests

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::session::ControlState;
use super::{DisplaySurface, Notice};

#[derive(Debug, Default)]
struct SurfaceState {
    texts: HashMap<String, String>,
    controls: HashMap<String, ControlState>,
    notices: Vec<Notice>,
}

#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn text(&self, element: &str) -> Option<String> {
        self.lock().texts.get(element).cloned()
    }

    pub fn control(&self, control: &str) -> Option<ControlState> {
        self.lock().controls.get(control).cloned()
    }

    /// Notices currently on screen, oldest first
    pub fn notices(&self) -> Vec<Notice> {
        self.lock().notices.clone()
    }
}

impl DisplaySurface for MemorySurface {
    fn set_text(&self, element: &str, text: &str) {
        self.lock().texts.insert(element.to_string(), text.to_string());
    }

    fn set_control(&self, control: &str, state: &ControlState) {
        self.lock().controls.insert(control.to_string(), state.clone());
    }

    fn append_notice(&self, notice: &Notice) {
        self.lock().notices.push(notice.clone());
    }

    fn remove_notice(&self, id: &str) {
        self.lock().notices.retain(|n| n.id != id);
    }
}
