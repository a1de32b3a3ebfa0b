//! Segment geometry for one reward wedge
//!
//! In wheel polar coordinates, a segment is defined by:
//! - inner_radius, outer_radius: radial extent (inner > 0 makes a ring)
//! - start_angle, end_angle: angular extent in degrees, before the global
//!   offset rotation the renderer applies

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::options::Color;
use crate::{normalize_degrees, polar_to_screen, screen_to_polar};

/// One wedge of the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Position in the reward list
    pub index: usize,
    /// Reward label
    pub value: String,
    pub color: Color,
    /// Start angle (degrees, in [0, 360))
    pub start_angle: f64,
    /// End angle (degrees, in (0, 360])
    pub end_angle: f64,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Label anchor (mid-angle, mid-radius)
    pub centroid: Vec2,
}

impl Segment {
    pub fn new(
        index: usize,
        value: String,
        color: Color,
        start_angle: f64,
        end_angle: f64,
        inner_radius: f32,
        outer_radius: f32,
    ) -> Self {
        let mid_angle = start_angle + (end_angle - start_angle) / 2.0;
        let mid_radius = (inner_radius + outer_radius) / 2.0;
        Self {
            index,
            value,
            color,
            start_angle,
            end_angle,
            inner_radius,
            outer_radius,
            centroid: polar_to_screen(mid_radius, mid_angle),
        }
    }

    /// Angular span of the segment (degrees)
    #[inline]
    pub fn angular_span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Angle through the middle of the segment. Labels are rotated by this.
    #[inline]
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.angular_span() / 2.0
    }

    /// Check if an angle falls within [start, end)
    pub fn contains_angle(&self, degrees: f64) -> bool {
        let degrees = normalize_degrees(degrees);
        degrees >= self.start_angle && degrees < self.end_angle
    }

    /// Check if a point (wheel-local, unrotated) is inside the segment
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (r, degrees) = screen_to_polar(point);
        r >= self.inner_radius && r <= self.outer_radius && self.contains_angle(degrees)
    }

    /// Angular extent after shrinking both edges by half of `pad_degrees`.
    ///
    /// Used for drawing only; winner resolution always uses the full extent.
    pub fn padded_range(&self, pad_degrees: f64) -> (f64, f64) {
        let half = (pad_degrees / 2.0).min(self.angular_span() / 2.0);
        (self.start_angle + half, self.end_angle - half)
    }
}
