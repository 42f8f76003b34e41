pub mod identity;
pub mod palette;
pub mod scale;
pub mod types;

pub use identity::{SelectionId, SelectionSet};
pub use palette::{CategoricalPalette, ColorPalette, ContrastMode};
pub use scale::{BandScale, LinearScale};
pub use types::{CategoryValue, DataPoint, Viewport, ViewModel};
