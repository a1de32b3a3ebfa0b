//! Renderer-facing data
//!
//! The crate draws no pixels. A backend reads the static `WheelGeometry`
//! once per rebuild and a `WheelFrame` once per tick; `shapes` turns the
//! geometry into triangle lists for backends that want them.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use serde::{Deserialize, Serialize};

use crate::geometry::WheelGeometry;
use crate::options::{Color, TextAngle, WheelOptions};
use crate::spin::{SpinPhase, SpinState, knob_deflection, knob_phase};

/// Static styling copied from the options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelStyle {
    pub text_color: Color,
    pub text_angle: TextAngle,
    pub font_size: f32,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f32,
}

impl From<&WheelOptions> for WheelStyle {
    fn from(options: &WheelOptions) -> Self {
        Self {
            text_color: options.text_color,
            text_angle: options.text_angle,
            font_size: options.font_size,
            background_color: options.background_color,
            border_color: options.border_color,
            border_width: options.border_width,
        }
    }
}

/// Knob pose for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnobFrame {
    pub size: f32,
    /// Position within the current segment, in (-1, 1)
    pub phase: f64,
    /// Knob rotation (degrees)
    pub deflection: f64,
}

/// Everything that moves, sampled once per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelFrame {
    pub phase: SpinPhase,
    /// Live wheel rotation (degrees)
    pub angle: f64,
    /// Fixed rotation applied under the live one so segment 0 is centered
    pub base_rotation: f64,
    /// `None` when the knob is disabled
    pub knob: Option<KnobFrame>,
    pub style: WheelStyle,
}

impl WheelFrame {
    pub fn new(geometry: &WheelGeometry, state: &SpinState, options: &WheelOptions) -> Self {
        let knob = options.knob_enabled().then(|| {
            let phase = knob_phase(state.angle, geometry.angle_by_segment());
            KnobFrame {
                size: options.knob_size,
                phase,
                deflection: knob_deflection(phase),
            }
        });

        Self {
            phase: state.phase,
            angle: state.angle,
            base_rotation: -geometry.angle_offset(),
            knob,
            style: WheelStyle::from(options),
        }
    }

    /// Total rotation to apply to the wheel-local geometry
    pub fn total_rotation(&self) -> f64 {
        self.angle + self.base_rotation
    }
}
