//! Caller-facing wheel
//!
//! Ties geometry, the spin controller and the renderer snapshot together
//! behind the widget API: configure, spin, callbacks, reset, and a tick
//! the host calls once per frame.

use crate::consts::*;
use crate::error::{ConfigError, StateError};
use crate::geometry::{LabelLayout, WheelGeometry, WheelGeometryBuilder};
use crate::options::WheelOptions;
use crate::renderer::{Vertex, WheelFrame, shapes};
use crate::spin::{
    AnimationEngine, AngleStream, SpinController, SpinPhase, SpinResult, SpinTask, TimingEngine,
};

/// Something the host may want to react to, returned from `tick`
#[derive(Debug, Clone, PartialEq)]
pub enum WheelEvent {
    /// A spin began
    Started { generation: u64 },
    /// A spin settled on a winner
    Settled(SpinResult),
    /// A spin was superseded (rebuild or reset) and will never settle
    Cancelled { generation: u64 },
}

type WinnerCallback = Box<dyn FnMut(&str, usize)>;
type StartCallback = Box<dyn FnMut()>;

/// The wheel widget state
pub struct Wheel<E: AnimationEngine = TimingEngine> {
    rewards: Vec<String>,
    options: WheelOptions,
    geometry: Option<WheelGeometry>,
    controller: SpinController<E>,
    on_winner: Option<WinnerCallback>,
    on_start: Option<StartCallback>,
    /// Events produced outside `tick` (spin start, cancellation)
    pending: Vec<WheelEvent>,
    /// Leftover frame time for fixed-step `update`
    accumulator: f64,
}

impl Wheel<TimingEngine> {
    /// Unconfigured wheel; `spin` and `reset` are rejected until `reconfigure`
    pub fn new() -> Self {
        let options = WheelOptions::default();
        Self::with_engine(TimingEngine::new(options.easing), options)
    }

    /// Build a wheel for `rewards`, failing fast on invalid configuration
    pub fn configure<T: ToString>(rewards: &[T], options: WheelOptions) -> Result<Self, ConfigError> {
        let engine = TimingEngine::new(options.easing);
        let mut wheel = Self::with_engine(engine, options.clone());
        wheel.reconfigure(rewards, options)?;
        Ok(wheel)
    }

    /// Replace rewards and options, rebuilding geometry
    pub fn reconfigure<T: ToString>(
        &mut self,
        rewards: &[T],
        options: WheelOptions,
    ) -> Result<(), ConfigError> {
        self.controller.engine_mut().set_easing(options.easing);
        self.rebuild(rewards, options)
    }
}

impl Default for Wheel<TimingEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AnimationEngine> Wheel<E> {
    /// Unconfigured wheel driven by a custom animation engine
    pub fn with_engine(engine: E, options: WheelOptions) -> Self {
        let seed = options.seed;
        Self {
            rewards: Vec::new(),
            options,
            geometry: None,
            controller: SpinController::with_engine(engine, seed),
            on_winner: None,
            on_start: None,
            pending: Vec::new(),
            accumulator: 0.0,
        }
    }

    pub fn geometry(&self) -> Option<&WheelGeometry> {
        self.geometry.as_ref()
    }

    pub fn options(&self) -> &WheelOptions {
        &self.options
    }

    pub fn rewards(&self) -> &[String] {
        &self.rewards
    }

    pub fn phase(&self) -> SpinPhase {
        self.controller.phase()
    }

    pub fn angle(&self) -> f64 {
        self.controller.angle()
    }

    pub fn controller(&self) -> &SpinController<E> {
        &self.controller
    }

    /// Fired exactly once per settled spin with (label, index)
    pub fn on_winner(&mut self, callback: impl FnMut(&str, usize) + 'static) {
        self.on_winner = Some(Box::new(callback));
    }

    /// Fired once when a spin begins
    pub fn on_start(&mut self, callback: impl FnMut() + 'static) {
        self.on_start = Some(Box::new(callback));
    }

    /// Rebuild geometry for new rewards and options. On error the current
    /// geometry and any in-flight spin are left untouched.
    pub fn rebuild<T: ToString>(
        &mut self,
        rewards: &[T],
        options: WheelOptions,
    ) -> Result<(), ConfigError> {
        let geometry = WheelGeometryBuilder::build(rewards, &options)?;

        self.cancel_in_flight();
        if options.seed != self.options.seed {
            self.controller.reseed(options.seed);
        }
        self.rewards = rewards.iter().map(ToString::to_string).collect();
        self.geometry = Some(geometry);
        self.options = options;
        Ok(())
    }

    /// Swap the reward list. Unchanged rewards keep the current state.
    pub fn set_rewards<T: ToString>(&mut self, rewards: &[T]) -> Result<(), ConfigError> {
        let rewards: Vec<String> = rewards.iter().map(ToString::to_string).collect();
        if self.geometry.is_some() && rewards == self.rewards {
            return Ok(());
        }
        self.rebuild(&rewards, self.options.clone())
    }

    /// Change the forced winner. Unchanged winners keep the current state.
    pub fn set_winner(&mut self, winner: Option<usize>) -> Result<(), ConfigError> {
        if winner == self.options.winner {
            return Ok(());
        }
        let options = WheelOptions {
            winner,
            ..self.options.clone()
        };
        let rewards = self.rewards.clone();
        self.rebuild(&rewards, options)
    }

    /// Start a spin. Rejected with a warning while spinning or unconfigured.
    pub fn spin(&mut self) -> Result<SpinTask, StateError> {
        let Some(geometry) = self.geometry.as_ref() else {
            log::warn!("Spin rejected: wheel not configured");
            return Err(StateError::NotConfigured);
        };

        let task = self.controller.spin(geometry, self.options.duration_ms)?;
        self.pending.push(WheelEvent::Started {
            generation: task.generation(),
        });
        if let Some(on_start) = self.on_start.as_mut() {
            on_start();
        }
        Ok(task)
    }

    /// Re-arm for another spin, cancelling any spin in flight
    pub fn reset(&mut self) -> Result<(), StateError> {
        if self.geometry.is_none() {
            log::warn!("Reset rejected: wheel not configured");
            return Err(StateError::NotConfigured);
        }
        self.cancel_in_flight();
        self.accumulator = 0.0;
        Ok(())
    }

    /// Reset, then spin again (a random winner is drawn afresh)
    pub fn try_again(&mut self) -> Result<SpinTask, StateError> {
        self.reset()?;
        self.spin()
    }

    /// Subscribe to live angles of the current or next spin
    pub fn subscribe_angles(&mut self) -> AngleStream {
        self.controller.subscribe()
    }

    /// Advance time by `dt_ms` and collect what happened
    pub fn tick(&mut self, dt_ms: f64) -> Vec<WheelEvent> {
        let mut events = std::mem::take(&mut self.pending);

        let Some(geometry) = self.geometry.as_ref() else {
            return events;
        };

        if let Some(result) = self.controller.tick(geometry, dt_ms) {
            if let Some(on_winner) = self.on_winner.as_mut() {
                on_winner(&result.label, result.index);
            }
            events.push(WheelEvent::Settled(result));
        }
        events
    }

    /// Fixed-step update for a variable frame delta
    pub fn update(&mut self, frame_dt_ms: f64) -> Vec<WheelEvent> {
        self.accumulator += frame_dt_ms.clamp(0.0, MAX_FRAME_DT_MS);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT_MS && substeps < MAX_SUBSTEPS {
            events.extend(self.tick(SIM_DT_MS));
            self.accumulator -= SIM_DT_MS;
            substeps += 1;
        }
        events.extend(std::mem::take(&mut self.pending));
        events
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Option<WheelFrame> {
        self.geometry
            .as_ref()
            .map(|geometry| WheelFrame::new(geometry, self.controller.state(), &self.options))
    }

    /// Wheel-local triangle list, rebuilt by the caller after each rebuild
    pub fn mesh(&self) -> Vec<Vertex> {
        self.geometry.as_ref().map_or_else(Vec::new, |geometry| {
            shapes::wheel_mesh(
                geometry,
                self.options.background_color,
                self.options.border_color,
                self.options.border_width,
            )
        })
    }

    pub fn labels(&self) -> Vec<LabelLayout> {
        self.geometry.as_ref().map_or_else(Vec::new, |geometry| {
            geometry.labels(self.options.text_angle, self.options.font_size)
        })
    }

    fn cancel_in_flight(&mut self) {
        if let Some(generation) = self.controller.cancel() {
            self.pending.push(WheelEvent::Cancelled { generation });
        }
    }
}
