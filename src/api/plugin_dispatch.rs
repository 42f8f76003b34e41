use crate::extensions::{PluginContext, VisualEvent};
use crate::interaction::SelectionAuthority;

use super::VisualController;

impl<A: SelectionAuthority> VisualController<A> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.config.viewport,
            update_cycle: self.state.update_cycle,
            points_len: self.state.view_model.data_points.len(),
            selected_len: self.state.confirmed_selection.len(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: VisualEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
