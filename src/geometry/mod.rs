//! Wheel geometry
//!
//! Static, immutable description of the wheel for one reward list:
//! - Equal angular partition, fixed unsorted order
//! - Palette cycled modulo its length
//! - Centroids and label layout for the renderer
//!
//! Angles are degrees, 0 at 12 o'clock, growing clockwise. Nothing here
//! depends on the live rotation.

pub mod builder;
pub mod label;
pub mod palette;
pub mod segment;

pub use builder::{WheelGeometry, WheelGeometryBuilder};
pub use label::{Glyph, LabelLayout, layout_label};
pub use palette::{DEFAULT_PALETTE, color_for_index};
pub use segment::Segment;
