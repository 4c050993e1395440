mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod measure;
pub use measure::*;

mod options;
pub use options::*;

/// Splitting, measuring, fitting and placing text inside a box
pub mod layout;
pub use layout::{layout_text, LayoutResult, Margins, PlacedLine, TextRun};

mod rect;
pub use rect::*;

mod render;
pub use render::*;

mod text_box;
pub use text_box::*;

mod units;
pub use units::*;

/// Re-export image functionality, mostly for working with [GuideCanvas] surfaces
pub use image;
