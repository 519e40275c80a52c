use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_GLOBAL_DAMPING, DEFAULT_LIFT_AMOUNT, DEFAULT_STEPS_PER_TICK, DEFAULT_TIME_STEP,
    DEFAULT_TRIGGER_TIME, EARTH_GRAVITY, MAX_LIFT_AMOUNT, MAX_LIVE_DAMPING, MAX_TRIGGER_TIME,
};
use crate::dynamics::integrator::SpringDamping;
use crate::error::{Result, SpringChainError};

/// Gravity presets toggled by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityMode {
    #[default]
    Off,
    /// (0, -9.81) m/s², Y-up.
    Earth,
    /// Set through an explicit vector.
    Custom,
}

impl GravityMode {
    /// Preset vector, or `None` for [`GravityMode::Custom`].
    pub fn preset(self) -> Option<Vec2> {
        match self {
            GravityMode::Off => Some(Vec2::ZERO),
            GravityMode::Earth => Some(Vec2::new(0.0, -EARTH_GRAVITY)),
            GravityMode::Custom => None,
        }
    }

    /// Off and Earth alternate; a custom vector toggles back to Off.
    pub fn toggled(self) -> Self {
        match self {
            GravityMode::Off => GravityMode::Earth,
            GravityMode::Earth | GravityMode::Custom => GravityMode::Off,
        }
    }
}

/// Live simulation parameters owned by the controller and read by the integrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    pub gravity: Vec2,
    /// Fraction of velocity retained per step; 1.0 disables global damping.
    pub damping: f32,
    /// Distance the left anchor jumps when the lift fires (m).
    pub lift_amount: f32,
    /// Unit direction of the lift.
    pub lift_direction: Vec2,
    /// Elapsed simulated time at which the lift fires (s).
    pub trigger_time: f32,
    pub time_step: f32,
    pub steps_per_tick: u32,
    pub spring_damping: SpringDamping,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: Vec2::ZERO,
            damping: DEFAULT_GLOBAL_DAMPING,
            lift_amount: DEFAULT_LIFT_AMOUNT,
            lift_direction: Vec2::Y,
            trigger_time: DEFAULT_TRIGGER_TIME,
            time_step: DEFAULT_TIME_STEP,
            steps_per_tick: DEFAULT_STEPS_PER_TICK,
            spring_damping: SpringDamping::default(),
        }
    }
}

impl SimulationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_lift_amount(mut self, lift_amount: f32) -> Self {
        self.lift_amount = lift_amount;
        self
    }

    pub fn with_lift_direction(mut self, direction: Vec2) -> Self {
        self.lift_direction = direction;
        self
    }

    pub fn with_trigger_time(mut self, trigger_time: f32) -> Self {
        self.trigger_time = trigger_time;
        self
    }

    pub fn with_time_step(mut self, time_step: f32) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_steps_per_tick(mut self, steps: u32) -> Self {
        self.steps_per_tick = steps;
        self
    }

    pub fn with_spring_damping(mut self, mode: SpringDamping) -> Self {
        self.spring_damping = mode;
        self
    }

    /// Rejects values that would break the integrator and normalizes the rest.
    ///
    /// Global damping may be exactly 1.0 here; the live knob stops below it.
    pub fn validated(mut self) -> Result<Self> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SpringChainError::InvalidTimeStep(self.time_step));
        }
        if !self.damping.is_finite() || !(0.0..=1.0).contains(&self.damping) {
            return Err(SpringChainError::InvalidDamping(self.damping));
        }
        if !self.gravity.is_finite() {
            self.gravity = Vec2::ZERO;
        }
        self.lift_amount = Self::clamp_lift_amount(self.lift_amount).unwrap_or(DEFAULT_LIFT_AMOUNT);
        self.trigger_time =
            Self::clamp_trigger_time(self.trigger_time).unwrap_or(DEFAULT_TRIGGER_TIME);
        self.lift_direction = self.lift_direction.normalize_or(Vec2::Y);
        self.steps_per_tick = self.steps_per_tick.max(1);
        Ok(self)
    }

    /// Live damping range [0, 0.999]; `None` for non-finite input.
    pub fn clamp_damping(value: f32) -> Option<f32> {
        value.is_finite().then(|| value.clamp(0.0, MAX_LIVE_DAMPING))
    }

    pub fn clamp_lift_amount(value: f32) -> Option<f32> {
        value.is_finite().then(|| value.clamp(0.0, MAX_LIFT_AMOUNT))
    }

    pub fn clamp_trigger_time(value: f32) -> Option<f32> {
        value.is_finite().then(|| value.clamp(0.0, MAX_TRIGGER_TIME))
    }

    /// Displacement applied to the left anchor when the lift fires.
    pub fn lift_offset(&self) -> Vec2 {
        self.lift_direction * self.lift_amount
    }
}
