use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::{self, LocalBoxFuture};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{SelectionId, SelectionSet};
use crate::error::{VisualError, VisualResult};

/// Eventually resolves to the selection set confirmed by the authority.
pub type SelectionFuture = LocalBoxFuture<'static, VisualResult<SelectionSet>>;

/// Handle returned when subscribing to external selection changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

/// Keyboard state of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClickModifiers {
    /// Secondary key (ctrl/cmd) held: toggle instead of replace.
    pub multi_select: bool,
}

impl ClickModifiers {
    pub const NONE: Self = Self {
        multi_select: false,
    };
    pub const MULTI_SELECT: Self = Self { multi_select: true };
}

/// A change asked of the selection authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionRequest {
    Select {
        identity: SelectionId,
        multi_select: bool,
    },
    Clear,
}

impl SelectionRequest {
    /// Selection that results from applying this request to `current`.
    #[must_use]
    pub fn apply_to(&self, current: &SelectionSet) -> SelectionSet {
        match self {
            Self::Select {
                identity,
                multi_select: true,
            } => current.toggled(identity),
            Self::Select {
                identity,
                multi_select: false,
            } => SelectionSet::single(identity.clone()),
            Self::Clear => SelectionSet::new(),
        }
    }
}

/// The host service that owns the shared cross-visual selection.
///
/// Requests never mutate the visual directly; the returned future resolves
/// with the set the authority actually confirmed.
pub trait SelectionAuthority {
    /// Plain click replaces the selection; `multi_select` toggles `identity`.
    fn select(&mut self, identity: &SelectionId, multi_select: bool) -> SelectionFuture;

    fn clear(&mut self) -> SelectionFuture;

    /// Last confirmed selection.
    fn current(&self) -> SelectionSet;

    fn subscribe(&mut self) -> SubscriptionId;

    fn unsubscribe(&mut self, subscription: SubscriptionId);
}

/// In-process selection authority.
///
/// Confirms immediately by default. With `deferred` confirmation, requests
/// queue until `confirm_pending` or `reject_pending` is called, which lets a
/// host interleave other events between request and confirmation.
#[derive(Debug, Default)]
pub struct LocalSelectionManager {
    selection: SelectionSet,
    subscribers: IndexSet<SubscriptionId>,
    next_subscription: u64,
    deferred: bool,
    pending: Vec<(SelectionRequest, oneshot::Sender<VisualResult<SelectionSet>>)>,
}

impl LocalSelectionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn subscribers(&self) -> impl Iterator<Item = SubscriptionId> + '_ {
        self.subscribers.iter().copied()
    }

    #[must_use]
    pub fn is_subscribed(&self, subscription: SubscriptionId) -> bool {
        self.subscribers.contains(&subscription)
    }

    /// Confirms queued requests in issue order; returns how many were confirmed.
    pub fn confirm_pending(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();
        for (request, sender) in pending {
            self.selection = request.apply_to(&self.selection);
            trace!(selected = self.selection.len(), "confirmed selection request");
            // A dropped receiver just means nobody awaits this confirmation.
            let _ = sender.send(Ok(self.selection.clone()));
        }
        count
    }

    /// Fails queued requests without changing the selection.
    pub fn reject_pending(&mut self, reason: &str) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let count = pending.len();
        for (_, sender) in pending {
            let _ = sender.send(Err(VisualError::SelectionRejected(reason.to_owned())));
        }
        count
    }

    /// Replaces the selection on behalf of another visual.
    ///
    /// Returns the subscriptions that must be notified.
    pub fn apply_external(&mut self, selection: SelectionSet) -> Vec<SubscriptionId> {
        debug!(
            selected = selection.len(),
            subscribers = self.subscribers.len(),
            "external selection change"
        );
        self.selection = selection;
        self.subscribers.iter().copied().collect()
    }

    fn submit(&mut self, request: SelectionRequest) -> SelectionFuture {
        if !self.deferred {
            self.selection = request.apply_to(&self.selection);
            return future::ready(Ok(self.selection.clone())).boxed_local();
        }

        let (sender, receiver) = oneshot::channel();
        self.pending.push((request, sender));
        async move {
            receiver.await.map_err(|_| {
                VisualError::SelectionRejected("selection authority dropped request".to_owned())
            })?
        }
        .boxed_local()
    }
}

impl SelectionAuthority for LocalSelectionManager {
    fn select(&mut self, identity: &SelectionId, multi_select: bool) -> SelectionFuture {
        self.submit(SelectionRequest::Select {
            identity: identity.clone(),
            multi_select,
        })
    }

    fn clear(&mut self) -> SelectionFuture {
        self.submit(SelectionRequest::Clear)
    }

    fn current(&self) -> SelectionSet {
        self.selection.clone()
    }

    fn subscribe(&mut self) -> SubscriptionId {
        let subscription = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.insert(subscription);
        subscription
    }

    fn unsubscribe(&mut self, subscription: SubscriptionId) {
        self.subscribers.shift_remove(&subscription);
    }
}
