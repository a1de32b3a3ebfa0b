//! Animation engine
//!
//! The controller only needs "interpolate from A to B over D ms and tell me
//! when you are done". `TimingEngine` is the default: time-based progress
//! shaped by a pluggable easing curve. Other engines (a native animation
//! driver, a physics sim) plug in through `AnimationEngine`.

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Easing curve applied to linear time progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    /// 1 - (1 - t)^3: fast start, long deceleration
    #[default]
    EaseOutCubic,
    /// 1 - (1 - t)^4: heavier deceleration
    EaseOutQuart,
    /// Cubic ease-in-out
    EaseInOutCubic,
}

impl Easing {
    /// Map linear progress in [0, 1] to eased progress in [0, 1]
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOutCubic => "ease-out-cubic",
            Easing::EaseOutQuart => "ease-out-quart",
            Easing::EaseInOutCubic => "ease-in-out-cubic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "ease-out-cubic" | "ease-out" => Some(Easing::EaseOutCubic),
            "ease-out-quart" => Some(Easing::EaseOutQuart),
            "ease-in-out-cubic" | "ease-in-out" => Some(Easing::EaseInOutCubic),
            _ => None,
        }
    }
}

/// One animation step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSample {
    pub value: f64,
    /// Last sample of the animation; `value` is exactly the target
    pub finished: bool,
}

/// Single-flight animation driver
pub trait AnimationEngine {
    /// Begin animating `from -> to` over `duration_ms`. Fails if an
    /// animation is already running.
    fn start(&mut self, from: f64, to: f64, duration_ms: f64) -> Result<(), StateError>;

    /// Advance by `dt_ms`. `None` when idle.
    fn advance(&mut self, dt_ms: f64) -> Option<AnimationSample>;

    /// Abort the running animation without emitting a final sample
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Time-based interpolation with an easing curve
#[derive(Debug, Clone)]
pub struct TimingEngine {
    easing: Easing,
    from: f64,
    to: f64,
    duration_ms: f64,
    elapsed_ms: f64,
    running: bool,
}

impl TimingEngine {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            from: 0.0,
            to: 0.0,
            duration_ms: 0.0,
            elapsed_ms: 0.0,
            running: false,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Takes effect from the next `start`
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Linear time progress of the running animation in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }
}

impl Default for TimingEngine {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}

impl AnimationEngine for TimingEngine {
    fn start(&mut self, from: f64, to: f64, duration_ms: f64) -> Result<(), StateError> {
        if self.running {
            return Err(StateError::EngineBusy);
        }
        self.from = from;
        self.to = to;
        self.duration_ms = duration_ms;
        self.elapsed_ms = 0.0;
        self.running = true;
        Ok(())
    }

    fn advance(&mut self, dt_ms: f64) -> Option<AnimationSample> {
        if !self.running {
            return None;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.running = false;
            return Some(AnimationSample {
                value: self.to,
                finished: true,
            });
        }

        let eased = self.easing.apply(self.progress());
        Some(AnimationSample {
            value: self.from + (self.to - self.from) * eased,
            finished: false,
        })
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
