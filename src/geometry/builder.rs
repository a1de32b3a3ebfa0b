//! Wheel geometry builder
//!
//! Partitions the circle into one equal wedge per reward.

use serde::{Deserialize, Serialize};

use super::label::{LabelLayout, layout_label};
use super::palette::{DEFAULT_PALETTE, color_for_index};
use super::segment::Segment;
use crate::consts::*;
use crate::error::ConfigError;
use crate::options::{TextAngle, WheelOptions};
use crate::spin::resolve_winner;

/// Immutable geometry for one reward list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    segments: Vec<Segment>,
    angle_by_segment: f64,
    inner_radius: f32,
    outer_radius: f32,
    /// Rendering gap between wedges (degrees, 0 when disabled)
    pad_angle: f64,
    /// Validated forced winner, used on every spin
    forced_winner: Option<usize>,
}

impl WheelGeometry {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Width of one segment: 360 / N
    pub fn angle_by_segment(&self) -> f64 {
        self.angle_by_segment
    }

    /// Half a segment. The wheel is drawn rotated back by this much so that
    /// segment 0 is centered under the pointer instead of edge-aligned.
    pub fn angle_offset(&self) -> f64 {
        self.angle_by_segment / 2.0
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    pub fn pad_angle(&self) -> f64 {
        self.pad_angle
    }

    pub fn forced_winner(&self) -> Option<usize> {
        self.forced_winner
    }

    /// Label of segment `index`
    pub fn label(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(|s| s.value.as_str())
    }

    /// Segment that sits under the pointer after rotating by `angle`
    pub fn segment_at_angle(&self, angle: f64) -> &Segment {
        let index = resolve_winner(angle, self.segment_count(), self.angle_by_segment);
        &self.segments[index]
    }

    /// Label layouts for every segment
    pub fn labels(&self, text_angle: TextAngle, font_size: f32) -> Vec<LabelLayout> {
        self.segments
            .iter()
            .map(|s| layout_label(s, text_angle, font_size))
            .collect()
    }
}

/// Builds `WheelGeometry` from a reward list and options
pub struct WheelGeometryBuilder;

impl WheelGeometryBuilder {
    /// Partition the wheel. Fails fast on an empty or oversized reward list,
    /// an out-of-range forced winner, or invalid radii/palette.
    pub fn build<T: ToString>(
        rewards: &[T],
        options: &WheelOptions,
    ) -> Result<WheelGeometry, ConfigError> {
        let count = rewards.len();
        options.validate_for(count)?;

        let palette = options.colors.as_deref().unwrap_or(&DEFAULT_PALETTE);
        let angle_by_segment = ONE_TURN / count as f64;

        let segments = rewards
            .iter()
            .enumerate()
            .map(|(i, reward)| {
                // Multiply before dividing so the last edge lands on exactly 360
                let start = ONE_TURN * i as f64 / count as f64;
                let end = ONE_TURN * (i + 1) as f64 / count as f64;
                Segment::new(
                    i,
                    reward.to_string(),
                    color_for_index(palette, i),
                    start,
                    end,
                    options.inner_radius,
                    options.outer_radius,
                )
            })
            .collect();

        let pad_angle = if options.use_pad_angle {
            PAD_ANGLE_RAD.to_degrees()
        } else {
            0.0
        };

        log::info!(
            "Built wheel geometry: {} segments, {:.3} deg each",
            count,
            angle_by_segment
        );

        Ok(WheelGeometry {
            segments,
            angle_by_segment,
            inner_radius: options.inner_radius,
            outer_radius: options.outer_radius,
            pad_angle,
            forced_winner: options.winner,
        })
    }
}
