//! Selection state: emphasis synchronization and the selection-authority port.

mod authority;
mod selection;

pub use authority::{
    ClickModifiers, LocalSelectionManager, SelectionAuthority, SelectionFuture, SelectionRequest,
    SubscriptionId,
};
pub use selection::{Emphasis, EmphasisMap, compute_emphasis, sync_emphasis};
