use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::SelectionSet;
use crate::error::{VisualError, VisualResult};
use crate::extensions::VisualEvent;
use crate::interaction::{
    ClickModifiers, Emphasis, EmphasisMap, SelectionAuthority, SelectionFuture, SelectionRequest,
};

use super::VisualController;

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTarget {
    /// The bar of the data point at this index.
    Point(usize),
    /// Empty plot area: clears the selection.
    Background,
}

/// A selection request awaiting the authority's confirmation.
///
/// Holds no borrow of the controller, so other events may be processed
/// while it is outstanding. Requests are numbered in the order they were
/// issued.
pub struct PendingSelection {
    request: SelectionRequest,
    sequence: u64,
    future: SelectionFuture,
}

impl PendingSelection {
    #[must_use]
    pub fn request(&self) -> &SelectionRequest {
        &self.request
    }

    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Debug for PendingSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSelection")
            .field("request", &self.request)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl Future for PendingSelection {
    type Output = SettledSelection;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let sequence = self.sequence;
        self.future
            .poll_unpin(cx)
            .map(|outcome| SettledSelection { sequence, outcome })
    }
}

/// Authority response to one `PendingSelection`.
#[derive(Debug)]
pub struct SettledSelection {
    pub sequence: u64,
    pub outcome: VisualResult<SelectionSet>,
}

impl<A: SelectionAuthority> VisualController<A> {
    /// Forwards a click to the authority without touching emphasis.
    ///
    /// Await the returned request and pass its outcome to `settle_selection`.
    pub fn click(
        &mut self,
        target: ClickTarget,
        modifiers: ClickModifiers,
    ) -> VisualResult<PendingSelection> {
        let request = match target {
            ClickTarget::Point(index) => {
                let point = self.state.view_model.data_points.get(index).ok_or_else(|| {
                    VisualError::InvalidData(format!(
                        "click target index {index} out of range for {} points",
                        self.state.view_model.data_points.len()
                    ))
                })?;
                SelectionRequest::Select {
                    identity: point.identity.clone(),
                    multi_select: modifiers.multi_select,
                }
            }
            ClickTarget::Background => SelectionRequest::Clear,
        };

        let future = match &request {
            SelectionRequest::Select {
                identity,
                multi_select,
            } => self.authority.select(identity, *multi_select),
            SelectionRequest::Clear => self.authority.clear(),
        };
        self.state.last_issued_request += 1;
        let sequence = self.state.last_issued_request;
        debug!(?request, sequence, cycle = self.state.update_cycle, "selection requested");
        self.emit_plugin_event(VisualEvent::SelectionRequested {
            multi_select: modifiers.multi_select,
            clear: matches!(request, SelectionRequest::Clear),
        });

        Ok(PendingSelection {
            request,
            sequence,
            future,
        })
    }

    /// Hit-tests `(x, y)` against the current frame and clicks what it finds.
    pub fn click_at(
        &mut self,
        x: f64,
        y: f64,
        modifiers: ClickModifiers,
    ) -> VisualResult<PendingSelection> {
        let target = self
            .render_frame()?
            .hit_test(x, y)
            .map_or(ClickTarget::Background, ClickTarget::Point);
        self.click(target, modifiers)
    }

    /// Reconciles emphasis against a set confirmed by the authority.
    ///
    /// Matching is by identity against the current points, which may have
    /// been rebuilt since the request was issued.
    pub fn apply_confirmed_selection(&mut self, selection: SelectionSet) -> &EmphasisMap {
        self.sync_with(selection);
        let emphasis = &self.state.emphasis;
        let event = VisualEvent::SelectionSynchronized {
            full: emphasis.count(Emphasis::Full),
            dimmed: emphasis.count(Emphasis::Dimmed),
            neutral: emphasis.count(Emphasis::Neutral),
        };
        self.emit_plugin_event(event);
        &self.state.emphasis
    }

    /// Handles a change made by another visual. `None` leaves emphasis as is.
    pub fn on_external_selection_change(&mut self, selection: Option<SelectionSet>) -> &EmphasisMap {
        match selection {
            Some(selection) => self.apply_confirmed_selection(selection),
            None => &self.state.emphasis,
        }
    }

    /// Applies the outcome of a `PendingSelection`.
    ///
    /// A rejected request keeps the last confirmed emphasis. An outcome for a
    /// request older than one already applied is ignored.
    pub fn settle_selection(&mut self, settled: SettledSelection) -> VisualResult<&EmphasisMap> {
        let SettledSelection { sequence, outcome } = settled;
        match outcome {
            Ok(_) if sequence < self.state.last_settled_request => {
                debug!(
                    sequence,
                    last_settled = self.state.last_settled_request,
                    "ignoring superseded selection confirmation"
                );
                Ok(&self.state.emphasis)
            }
            Ok(selection) => {
                self.state.last_settled_request = sequence;
                Ok(self.apply_confirmed_selection(selection))
            }
            Err(err) => {
                warn!(
                    error = %err,
                    sequence,
                    "selection request failed; keeping last confirmed state"
                );
                self.emit_plugin_event(VisualEvent::SelectionRejected);
                Err(err)
            }
        }
    }
}

/// Click, await confirmation, then reconcile.
///
/// The controller is only borrowed before and after the await point.
pub async fn click_and_sync<A: SelectionAuthority>(
    controller: &RefCell<VisualController<A>>,
    target: ClickTarget,
    modifiers: ClickModifiers,
) -> VisualResult<EmphasisMap> {
    let pending = controller.borrow_mut().click(target, modifiers)?;
    let settled = pending.await;
    controller
        .borrow_mut()
        .settle_selection(settled)
        .cloned()
}
