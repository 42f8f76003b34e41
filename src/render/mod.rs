mod frame;
mod frame_builder;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use frame_builder::{bar_opacity, build_render_frame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::VisualResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from view-model and selection logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> VisualResult<()>;
}
