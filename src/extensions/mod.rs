//! Observer plugins notified of controller events.

pub mod plugins;

pub use plugins::{PluginContext, VisualEvent, VisualPlugin};
