use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ColorPalette, SelectionSet, Viewport, ViewModel};
use crate::error::{VisualError, VisualResult};
use crate::extensions::{VisualEvent, VisualPlugin};
use crate::interaction::{EmphasisMap, SelectionAuthority, SubscriptionId, compute_emphasis};
use crate::render::{RenderFrame, Renderer, build_render_frame};

use super::{
    PropertyPaneObject, QueryResult, TooltipItem, VisualConfig, build_view_model,
    enumerate_property_pane, tooltip_items,
};

/// Host service that opens external URLs.
pub trait LinkLauncher {
    fn launch_url(&mut self, url: &str);
}

/// Mutable per-instance state, replaced wholesale by each operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisualState {
    pub view_model: ViewModel,
    pub emphasis: EmphasisMap,
    /// Last selection confirmed by the authority.
    pub confirmed_selection: SelectionSet,
    /// Incremented on every view-model rebuild.
    pub update_cycle: u64,
    /// Sequence number of the last selection request issued.
    pub last_issued_request: u64,
    /// Sequence number of the newest request whose outcome was applied.
    pub last_settled_request: u64,
}

/// Orchestrates view-model rebuilds and selection sync for one visual.
///
/// The controller subscribes to the authority on construction; call
/// `destroy` to unsubscribe.
pub struct VisualController<A: SelectionAuthority> {
    pub(super) config: VisualConfig,
    pub(super) authority: A,
    pub(super) subscription: SubscriptionId,
    pub(super) state: VisualState,
    pub(super) plugins: Vec<Box<dyn VisualPlugin>>,
}

impl<A: SelectionAuthority> VisualController<A> {
    pub fn new(config: VisualConfig, mut authority: A) -> VisualResult<Self> {
        config.validate()?;
        let subscription = authority.subscribe();
        debug!(?subscription, "visual controller subscribed to selection authority");
        Ok(Self {
            config,
            authority,
            subscription,
            state: VisualState::default(),
            plugins: Vec::new(),
        })
    }

    /// Rebuilds the view model, then syncs emphasis with the authority's
    /// current selection.
    pub fn update(&mut self, query: &QueryResult, palette: &mut dyn ColorPalette) -> &VisualState {
        let view_model = build_view_model(query, palette);
        self.state.update_cycle += 1;
        debug!(
            cycle = self.state.update_cycle,
            points = view_model.data_points.len(),
            "update cycle"
        );
        self.state.view_model = view_model;
        self.emit_plugin_event(VisualEvent::ViewModelRebuilt {
            points_len: self.state.view_model.data_points.len(),
            data_max: self.state.view_model.data_max,
        });

        let current = self.authority.current();
        self.apply_confirmed_selection(current);
        &self.state
    }

    pub fn resize(&mut self, viewport: Viewport) -> VisualResult<()> {
        if !viewport.is_valid() {
            return Err(VisualError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.config.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &VisualConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &VisualState {
        &self.state
    }

    #[must_use]
    pub fn view_model(&self) -> &ViewModel {
        &self.state.view_model
    }

    #[must_use]
    pub fn emphasis(&self) -> &EmphasisMap {
        &self.state.emphasis
    }

    #[must_use]
    pub fn authority(&self) -> &A {
        &self.authority
    }

    pub fn authority_mut(&mut self) -> &mut A {
        &mut self.authority
    }

    #[must_use]
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    pub fn render_frame(&self) -> VisualResult<RenderFrame> {
        build_render_frame(&self.state.view_model, &self.state.emphasis, &self.config)
    }

    pub fn render<R: Renderer>(&mut self, renderer: &mut R) -> VisualResult<()> {
        let frame = self.render_frame()?;
        renderer.render(&frame)?;
        self.emit_plugin_event(VisualEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn tooltip_items(&self, index: usize) -> Option<Vec<TooltipItem>> {
        self.state.view_model.data_points.get(index).map(tooltip_items)
    }

    #[must_use]
    pub fn property_pane(&self) -> Vec<PropertyPaneObject> {
        enumerate_property_pane(&self.state.view_model)
    }

    /// Opens the documentation link when the help link is shown.
    ///
    /// Returns `true` when the launcher was invoked.
    pub fn open_help_link(&mut self, launcher: &mut dyn LinkLauncher) -> bool {
        if !self.state.view_model.settings.general_view.show_help_link {
            return false;
        }
        launcher.launch_url(&self.config.help_link_url);
        self.emit_plugin_event(VisualEvent::HelpLinkOpened);
        true
    }

    /// Unsubscribes from the authority and hands it back.
    pub fn destroy(mut self) -> A {
        self.authority.unsubscribe(self.subscription);
        debug!(subscription = ?self.subscription, "visual controller unsubscribed");
        self.plugins.clear();
        self.authority
    }

    pub(super) fn sync_with(&mut self, selection: SelectionSet) -> &EmphasisMap {
        self.state.emphasis = compute_emphasis(&self.state.view_model.data_points, &selection);
        self.state.confirmed_selection = selection;
        &self.state.emphasis
    }
}
