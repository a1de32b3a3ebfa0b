//! Fortune Wheel - geometry and spin state for a wheel-of-fortune spinner
//!
//! Core modules:
//! - `geometry`: Segment partitioning, palette cycling, label layout
//! - `spin`: Spin state machine, target/resolve math, animation engine
//! - `renderer`: Per-frame snapshot and wedge tessellation for any backend
//! - `options`: Data-driven wheel configuration
//! - `wheel`: Caller-facing facade tying it all together

pub mod error;
pub mod geometry;
pub mod options;
pub mod renderer;
pub mod spin;
pub mod wheel;

pub use error::{ConfigError, SpinCancelled, StateError};
pub use geometry::{Segment, WheelGeometry, WheelGeometryBuilder};
pub use options::{Color, TextAngle, WheelOptions};
pub use spin::{Easing, SpinController, SpinPhase, SpinResult, SpinTask};
pub use wheel::{Wheel, WheelEvent};

use glam::Vec2;

/// Wheel configuration constants
pub mod consts {
    /// Degrees in one full turn
    pub const ONE_TURN: f64 = 360.0;

    /// Default spin duration (ms)
    pub const DEFAULT_DURATION_MS: f64 = 10_000.0;

    /// Wheel dimensions (widget units)
    pub const DEFAULT_OUTER_RADIUS: f32 = 200.0;
    pub const DEFAULT_INNER_RADIUS: f32 = 100.0;
    pub const DEFAULT_BORDER_WIDTH: f32 = 2.0;
    pub const DEFAULT_FONT_SIZE: f32 = 20.0;

    /// Knob defaults (0 disables the knob)
    pub const DEFAULT_KNOB_SIZE: f32 = 20.0;
    /// Peak knob deflection when a segment boundary passes (degrees)
    pub const KNOB_DEFLECTION_DEG: f64 = 35.0;

    /// Gap between adjacent wedges when pad angle is enabled (radians)
    pub const PAD_ANGLE_RAD: f64 = 0.01;

    /// Extra rotation past the winner's edge so the pointer lands inside it.
    /// Target angles start from `ONE_TURN + LANDING_NUDGE_DEG` (= 365).
    pub const LANDING_NUDGE_DEG: f64 = 5.0;

    /// Largest segment count whose width exceeds the landing nudge plus the
    /// half-degree rounding slack of winner resolution (360 / 65 > 5.5).
    /// Longer reward lists are rejected with `ConfigError::TooManySegments`
    /// rather than built, since their spins could settle on a neighbour of
    /// the requested winner. Spins likewise add whole extra turns only
    /// (`floor(duration / 1000)`), so fractional seconds never shift the
    /// landing angle.
    pub const MAX_SEGMENTS: usize = 65;

    /// Fixed update step (120 Hz)
    pub const SIM_DT_MS: f64 = 1000.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted by `Wheel::update` (ms)
    pub const MAX_FRAME_DT_MS: f64 = 100.0;
}

/// Normalize angle to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(consts::ONE_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= consts::ONE_TURN { 0.0 } else { wrapped }
}

/// Convert wheel polar coordinates to screen space.
///
/// Angle 0 points up (12 o'clock) and grows clockwise; y grows downward.
#[inline]
pub fn polar_to_screen(r: f32, degrees: f64) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.sin() as f32, -r * theta.cos() as f32)
}

/// Convert a screen-space point back to (radius, degrees in [0, 360))
#[inline]
pub fn screen_to_polar(pos: Vec2) -> (f32, f64) {
    let degrees = (pos.x as f64).atan2(-pos.y as f64).to_degrees();
    (pos.length(), normalize_degrees(degrees))
}
