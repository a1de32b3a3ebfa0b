//! Label placement inside a segment
//!
//! Horizontal labels sit on the centroid as one run of text. Vertical labels
//! put one character per line along the segment's radius: the first
//! character sits on the centroid and each following one is a font size
//! further from the wheel center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::segment::Segment;
use crate::options::TextAngle;
use crate::polar_to_screen;

/// One positioned run of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    pub text: String,
    /// Wheel-local position (unrotated wheel)
    pub position: Vec2,
}

/// Label layout for a single segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub segment: usize,
    /// Rotation applied to every glyph, about its own position (degrees)
    pub rotation: f64,
    pub glyphs: Vec<Glyph>,
}

/// Lay out a segment's label
pub fn layout_label(segment: &Segment, text_angle: TextAngle, font_size: f32) -> LabelLayout {
    let glyphs = match text_angle {
        TextAngle::Horizontal => vec![Glyph {
            text: segment.value.clone(),
            position: segment.centroid,
        }],
        TextAngle::Vertical => {
            let base_radius = segment.centroid.length();
            let angle = segment.mid_angle();
            segment
                .value
                .chars()
                .enumerate()
                .map(|(j, c)| Glyph {
                    text: c.to_string(),
                    position: polar_to_screen(base_radius + j as f32 * font_size, angle),
                })
                .collect()
        }
    };

    LabelLayout {
        segment: segment.index,
        rotation: segment.mid_angle(),
        glyphs,
    }
}
