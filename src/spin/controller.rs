//! Spin controller
//!
//! Owns the rotation state machine and runs exactly one spin at a time:
//!
//! 1. Resolve the winner (forced, else uniform random) at request time
//! 2. Compute the target angle and start the engine from 0
//! 3. Feed engine samples into the state and the angle stream each tick
//! 4. On completion, resolve the winner from the final angle and report it
//!
//! Geometry is passed in by reference on every call; the controller never
//! caches segment data, so a rebuild cannot leave it stale.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animation::{AnimationEngine, Easing, TimingEngine};
use super::resolve::{knob_phase, resolve_winner, target_angle};
use super::state::{SpinPhase, SpinState};
use super::stream::{AngleBroadcast, AngleStream, DEFAULT_STREAM_CAPACITY};
use crate::error::{SpinCancelled, StateError};
use crate::geometry::WheelGeometry;

/// Outcome of a settled spin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinResult {
    /// Winning segment, derived from the final angle
    pub index: usize,
    pub label: String,
    /// Final rotation (degrees)
    pub angle: f64,
    /// Spin that produced this result
    pub generation: u64,
}

/// Completion handle for one spin.
///
/// Resolves to the result once the spin settles, or to `SpinCancelled` if
/// the spin was superseded by a rebuild or reset.
#[derive(Debug)]
pub struct SpinTask {
    receiver: oneshot::Receiver<SpinResult>,
    generation: u64,
}

impl SpinTask {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Future for SpinTask {
    type Output = Result<SpinResult, SpinCancelled>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.map_err(|_| SpinCancelled))
    }
}

/// Drives spins against a `WheelGeometry`
pub struct SpinController<E: AnimationEngine = TimingEngine> {
    state: SpinState,
    engine: E,
    rng: Pcg32,
    completion: Option<oneshot::Sender<SpinResult>>,
    angles: AngleBroadcast,
}

impl SpinController<TimingEngine> {
    /// Controller with the default timing engine
    pub fn new(easing: Easing, seed: Option<u64>) -> Self {
        Self::with_engine(TimingEngine::new(easing), seed)
    }
}

impl<E: AnimationEngine> SpinController<E> {
    /// Controller driving a custom engine. `seed` makes random winners
    /// reproducible; without it the RNG is seeded from entropy.
    pub fn with_engine(engine: E, seed: Option<u64>) -> Self {
        Self {
            state: SpinState::new(),
            engine,
            rng: seeded_rng(seed),
            completion: None,
            angles: AngleBroadcast::default(),
        }
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn phase(&self) -> SpinPhase {
        self.state.phase
    }

    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Reseed the winner RNG
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng = seeded_rng(seed);
    }

    /// Subscribe to the angle samples of the current or next spin
    pub fn subscribe(&mut self) -> AngleStream {
        self.angles.subscribe(DEFAULT_STREAM_CAPACITY)
    }

    /// Pointer phase within the current segment, for the knob
    pub fn knob_phase(&self, geometry: &WheelGeometry) -> f64 {
        knob_phase(self.state.angle, geometry.angle_by_segment())
    }

    /// Start a spin. Rejected (state untouched) while another is in flight.
    pub fn spin(
        &mut self,
        geometry: &WheelGeometry,
        duration_ms: f64,
    ) -> Result<SpinTask, StateError> {
        if self.state.is_spinning() {
            log::warn!("Spin rejected: spin {} still in flight", self.state.generation);
            return Err(StateError::AlreadySpinning);
        }

        let count = geometry.segment_count();
        let winner = match geometry.forced_winner() {
            Some(forced) => forced,
            None => self.rng.random_range(0..count),
        };
        let target = target_angle(winner, count, duration_ms);

        if let Err(e) = self.engine.start(0.0, target, duration_ms) {
            log::warn!("Spin rejected: {}", e);
            return Err(e);
        }

        let generation = self.state.begin(winner, target);
        let (sender, receiver) = oneshot::channel();
        self.completion = Some(sender);

        log::info!(
            "Spin {} started: winner {} -> target {:.1} deg over {} ms",
            generation,
            winner,
            target,
            duration_ms
        );

        Ok(SpinTask {
            receiver,
            generation,
        })
    }

    /// Advance the in-flight spin by `dt_ms`. Returns the result on the tick
    /// the spin settles.
    pub fn tick(&mut self, geometry: &WheelGeometry, dt_ms: f64) -> Option<SpinResult> {
        let sample = self.engine.advance(dt_ms)?;
        if !self.state.is_spinning() {
            log::debug!("Dropping stale animation sample {:.2}", sample.value);
            return None;
        }

        self.state.angle = sample.value;
        self.angles.publish(sample.value);
        if !sample.finished {
            return None;
        }

        let angle = self.state.angle;
        let index = resolve_winner(angle, geometry.segment_count(), geometry.angle_by_segment());
        if self.state.requested != Some(index) {
            log::warn!(
                "Spin {} resolved to {} but {:?} was requested",
                self.state.generation,
                index,
                self.state.requested
            );
        }
        self.state.settle(index);

        let result = SpinResult {
            index,
            label: geometry.segments()[index].value.clone(),
            angle,
            generation: self.state.generation,
        };
        if let Some(sender) = self.completion.take() {
            // Receiver may have been dropped; the result is still returned
            let _ = sender.send(result.clone());
        }
        self.angles.close();

        log::info!(
            "Spin {} settled on {} ({:?}) at {:.1} deg",
            result.generation,
            result.index,
            result.label,
            result.angle
        );
        Some(result)
    }

    /// Invalidate the in-flight spin without resolving a winner and re-arm.
    ///
    /// Returns the cancelled generation, if a spin was in flight.
    pub fn cancel(&mut self) -> Option<u64> {
        let cancelled = self.state.is_spinning().then_some(self.state.generation);
        if let Some(generation) = cancelled {
            self.engine.stop();
            self.state.abort();
            // Dropping the sender resolves the task to SpinCancelled
            self.completion = None;
            self.angles.close();
            log::debug!("Spin {} cancelled", generation);
        }
        self.state.rearm();
        cancelled
    }
}

fn seeded_rng(seed: Option<u64>) -> Pcg32 {
    match seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::seed_from_u64(rand::random()),
    }
}
