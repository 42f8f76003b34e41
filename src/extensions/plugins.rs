use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub update_cycle: u64,
    pub points_len: usize,
    pub selected_len: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VisualEvent {
    ViewModelRebuilt { points_len: usize, data_max: f64 },
    SelectionRequested { multi_select: bool, clear: bool },
    SelectionSynchronized { full: usize, dimmed: usize, neutral: usize },
    SelectionRejected,
    HelpLinkOpened,
    Rendered,
}

/// Observer hook for host-side instrumentation.
///
/// Plugins see events and context but cannot mutate visual state.
pub trait VisualPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: VisualEvent, context: PluginContext);
}
