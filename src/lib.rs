//! bar-visual-rs: core of a categorical bar chart visual.
//!
//! Turns a host query result into a render-ready view model, resolves
//! appearance settings against user overrides and contrast mode, and keeps
//! per-bar emphasis in sync with a selection owned by the host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{VisualConfig, VisualController};
pub use error::{VisualError, VisualResult};
