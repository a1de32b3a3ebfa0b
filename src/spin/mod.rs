//! Spin module
//!
//! Everything that changes while the wheel turns lives here. This module
//! must stay deterministic for a given seed:
//! - Winner drawn once per spin, at request time
//! - Time only advances through `tick`
//! - Final winner derived from the final angle alone

pub mod animation;
pub mod controller;
pub mod resolve;
pub mod state;
pub mod stream;

pub use animation::{AnimationEngine, AnimationSample, Easing, TimingEngine};
pub use controller::{SpinController, SpinResult, SpinTask};
pub use resolve::{extra_turns, knob_deflection, knob_phase, resolve_winner, target_angle};
pub use state::{SpinPhase, SpinState};
pub use stream::{AngleBroadcast, AngleStream, DEFAULT_STREAM_CAPACITY};
