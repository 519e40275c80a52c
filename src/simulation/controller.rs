use glam::Vec2;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use super::params::{GravityMode, SimulationParams};
use super::snapshot::ChainSnapshot;
use crate::config::{DEFAULT_GLOBAL_DAMPING, MAX_STEPS_PER_ADVANCE, TIME_EPSILON};
use crate::core::{chain::Chain, types::ChainConfig};
use crate::dynamics::integrator::Integrator;
use crate::error::Result;
use crate::utils::logging::warn_if_steps_dropped;

/// One-shot anchor lift status. `Applied` is terminal until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpulseState {
    Pending,
    Applied,
}

/// Owns a [`Chain`] and its [`Integrator`], drives fixed steps from external
/// ticks, and exposes the live parameter knobs.
#[derive(Debug, Clone)]
pub struct SimulationController {
    chain: Chain,
    chain_config: ChainConfig,
    /// Construction layout; `None` means the default layout of `chain_config`.
    initial_positions: Option<Vec<Vec2>>,
    integrator: Integrator,
    params: SimulationParams,
    gravity_mode: GravityMode,
    impulse: ImpulseState,
    elapsed: f32,
    time_accumulated: f32,
}

impl SimulationController {
    pub fn new(chain_config: ChainConfig, params: SimulationParams) -> Result<Self> {
        let chain = Chain::new(chain_config)?;
        let mut controller = Self::from_chain(chain, params)?;
        controller.initial_positions = None;
        Ok(controller)
    }

    /// Default chain and parameters.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ChainConfig::default(), SimulationParams::default())
    }

    /// Starts from a prebuilt chain. A later [`reset`](Self::reset) rebuilds
    /// the chain with the body positions it has now, all at rest.
    pub fn from_chain(chain: Chain, params: SimulationParams) -> Result<Self> {
        let params = params.validated()?;
        let gravity_mode = if params.gravity == Vec2::ZERO {
            GravityMode::Off
        } else if Some(params.gravity) == GravityMode::Earth.preset() {
            GravityMode::Earth
        } else {
            GravityMode::Custom
        };

        Ok(Self {
            chain_config: *chain.config(),
            initial_positions: Some(chain.body_positions()),
            chain,
            integrator: Integrator::new(params.spring_damping),
            params,
            gravity_mode,
            impulse: ImpulseState::Pending,
            elapsed: 0.0,
            time_accumulated: 0.0,
        })
    }

    /// Consumes wall time and runs as many fixed steps as fit into it.
    ///
    /// The remainder carries over to the next call. At most
    /// [`MAX_STEPS_PER_ADVANCE`] steps run per call; the surplus is dropped.
    /// The lift trigger is checked after each fixed step.
    pub fn advance(&mut self, wall_dt: f32) {
        if !wall_dt.is_finite() || wall_dt <= 0.0 {
            return;
        }
        self.time_accumulated += wall_dt;

        let dt = self.params.time_step;
        let mut steps = 0;
        while self.time_accumulated + TIME_EPSILON >= dt {
            if steps == MAX_STEPS_PER_ADVANCE {
                warn_if_steps_dropped(self.time_accumulated, dt);
                self.time_accumulated = 0.0;
                break;
            }
            self.time_accumulated -= dt;
            self.step_once();
            steps += 1;
        }
    }

    /// Runs exactly `steps_per_tick` fixed steps, independent of wall time.
    pub fn tick(&mut self) {
        for _ in 0..self.params.steps_per_tick {
            self.step_once();
        }
    }

    fn step_once(&mut self) {
        let dt = self.params.time_step;
        self.integrator.step(&mut self.chain, &self.params, dt);
        self.elapsed += dt;

        if self.impulse == ImpulseState::Pending && self.elapsed >= self.params.trigger_time {
            self.fire_impulse();
        }
    }

    /// Lifts the left anchor now if the lift is still pending; no-op afterwards.
    pub fn trigger_impulse_now(&mut self) {
        if self.impulse == ImpulseState::Pending {
            self.fire_impulse();
        }
    }

    fn fire_impulse(&mut self) {
        let from = self.chain.left_anchor().position();
        let to = from + self.params.lift_offset();
        self.chain.set_left_anchor_position(to);
        self.impulse = ImpulseState::Applied;
        info!(
            "anchor lift fired at t = {:.4} s: {} -> {}",
            self.elapsed, from, to
        );
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        if !gravity.is_finite() {
            warn!("ignoring non-finite gravity {gravity}");
            return;
        }
        self.params.gravity = gravity;
        self.gravity_mode = GravityMode::Custom;
        debug!("gravity set to {gravity}");
    }

    pub fn set_gravity_mode(&mut self, mode: GravityMode) {
        if let Some(gravity) = mode.preset() {
            self.params.gravity = gravity;
        }
        self.gravity_mode = mode;
        debug!("gravity mode {:?} ({})", mode, self.params.gravity);
    }

    /// Switches between no gravity and earth gravity.
    pub fn toggle_gravity(&mut self) {
        self.set_gravity_mode(self.gravity_mode.toggled());
    }

    /// Sets the global damping factor, clamped to [0, 0.999].
    pub fn set_damping(&mut self, factor: f32) {
        match SimulationParams::clamp_damping(factor) {
            Some(clamped) => {
                if clamped != factor {
                    warn!("damping {factor} clamped to {clamped}");
                }
                self.params.damping = clamped;
                debug!("damping set to {clamped}");
            }
            None => warn!("ignoring non-finite damping {factor}"),
        }
    }

    /// Restores a damping factor of exactly 1.0.
    pub fn disable_damping(&mut self) {
        self.params.damping = DEFAULT_GLOBAL_DAMPING;
        debug!("global damping disabled");
    }

    /// Sets the lift distance, clamped to [0, 2] m.
    pub fn set_lift_amount(&mut self, amount: f32) {
        match SimulationParams::clamp_lift_amount(amount) {
            Some(clamped) => {
                if clamped != amount {
                    warn!("lift amount {amount} clamped to {clamped}");
                }
                self.params.lift_amount = clamped;
                debug!("lift amount set to {clamped}");
            }
            None => warn!("ignoring non-finite lift amount {amount}"),
        }
    }

    /// Sets the lift direction; zero or non-finite vectors are ignored.
    pub fn set_lift_direction(&mut self, direction: Vec2) {
        match direction.try_normalize() {
            Some(unit) => self.params.lift_direction = unit,
            None => warn!("ignoring degenerate lift direction {direction}"),
        }
    }

    /// Sets the trigger time, clamped to [0, 5] s.
    pub fn set_trigger_time(&mut self, time: f32) {
        match SimulationParams::clamp_trigger_time(time) {
            Some(clamped) => {
                if clamped != time {
                    warn!("trigger time {time} clamped to {clamped}");
                }
                self.params.trigger_time = clamped;
                debug!("trigger time set to {clamped}");
            }
            None => warn!("ignoring non-finite trigger time {time}"),
        }
    }

    /// Replaces the chain with a fresh build and re-arms the lift.
    ///
    /// Live parameters survive; positions, velocities, and elapsed time do not.
    pub fn reset(&mut self) {
        let rebuilt = match &self.initial_positions {
            Some(positions) => Chain::with_positions(self.chain_config, positions),
            None => Chain::new(self.chain_config),
        };
        match rebuilt {
            Ok(chain) => {
                self.chain = chain;
                self.impulse = ImpulseState::Pending;
                self.elapsed = 0.0;
                self.time_accumulated = 0.0;
                info!("simulation reset ({} bodies)", self.chain.body_count());
            }
            Err(err) => error!("reset failed, keeping current chain: {err}"),
        }
    }

    /// Validates `config` and resets onto it. On error the running chain is kept.
    pub fn reconfigure(&mut self, config: ChainConfig) -> Result<()> {
        config.validate()?;
        self.chain_config = config;
        self.initial_positions = None;
        self.reset();
        Ok(())
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn chain_config(&self) -> &ChainConfig {
        &self.chain_config
    }

    pub fn integrator(&self) -> &Integrator {
        &self.integrator
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn body_positions(&self) -> Vec<Vec2> {
        self.chain.body_positions()
    }

    pub fn left_anchor_position(&self) -> Vec2 {
        self.chain.left_anchor().position()
    }

    pub fn right_anchor_position(&self) -> Vec2 {
        self.chain.right_anchor().position()
    }

    pub fn gravity(&self) -> Vec2 {
        self.params.gravity
    }

    pub fn gravity_mode(&self) -> GravityMode {
        self.gravity_mode
    }

    pub fn damping(&self) -> f32 {
        self.params.damping
    }

    pub fn lift_amount(&self) -> f32 {
        self.params.lift_amount
    }

    pub fn lift_direction(&self) -> Vec2 {
        self.params.lift_direction
    }

    pub fn trigger_time(&self) -> f32 {
        self.params.trigger_time
    }

    /// Simulated time since construction or the last reset.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn impulse_state(&self) -> ImpulseState {
        self.impulse
    }

    pub fn impulse_applied(&self) -> bool {
        self.impulse == ImpulseState::Applied
    }

    pub fn snapshot(&self) -> ChainSnapshot {
        ChainSnapshot::capture(self)
    }
}
