//! Error types for wheel configuration and spin requests

/// Configuration rejected at build/configure time. Never clamped silently.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reward list is empty")]
    EmptyRewards,
    #[error("forced winner {winner} is out of range for {len} rewards")]
    WinnerOutOfRange { winner: usize, len: usize },
    #[error("{len} rewards exceed the maximum of {max} segments")]
    TooManySegments { len: usize, max: usize },
    #[error("color palette is empty")]
    EmptyPalette,
    #[error("invalid color: {0}")]
    InvalidColor(String),
    #[error("invalid radii: inner {inner} must be >= 0 and below outer {outer}")]
    InvalidRadius { inner: f32, outer: f32 },
    #[error("invalid spin duration: {0} ms")]
    InvalidDuration(f64),
    #[error("knob size must be finite and >= 0")]
    InvalidKnobSize,
    #[error("options parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Spin request rejected because of the current state. Treated as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("a spin is already in flight")]
    AlreadySpinning,
    #[error("wheel has no geometry configured")]
    NotConfigured,
    #[error("animation engine is already running")]
    EngineBusy,
}

/// Output of a spin that was superseded before it settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("spin was cancelled")]
pub struct SpinCancelled;
