use glam::Vec2;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpringChainError};

/// Free point mass integrated by the [`crate::Integrator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    index: usize,
    position: Vec2,
    velocity: Vec2,
    mass: f32,
    inverse_mass: f32,
    #[serde(skip)]
    force: Vec2,
}

impl Body {
    pub fn new(index: usize, position: Vec2, mass: f32) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SpringChainError::InvalidMass(mass));
        }
        Ok(Self {
            index,
            position,
            velocity: Vec2::ZERO,
            mass,
            inverse_mass: 1.0 / mass,
            force: Vec2::ZERO,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    /// Force accumulated during the current step.
    pub fn accumulated_force(&self) -> Vec2 {
        self.force
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub(crate) fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub(crate) fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Velocity half of the semi-implicit Euler step.
    pub(crate) fn integrate_velocity(&mut self, dt: f32) {
        self.velocity += self.force * self.inverse_mass * dt;
    }

    /// Position half of the step, using the already updated velocity.
    pub(crate) fn integrate_position(&mut self, damping: f32, dt: f32) {
        self.velocity *= damping;
        self.position += self.velocity * dt;
    }
}

/// How an [`AnchorPoint`] reacts to explicit position commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorKind {
    /// Moved only by explicit commands.
    Kinematic,
    /// Fixed for the lifetime of the chain.
    Static,
}

/// Position holder that never reacts to forces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    kind: AnchorKind,
    position: Vec2,
}

impl AnchorPoint {
    pub fn kinematic(position: Vec2) -> Self {
        Self {
            kind: AnchorKind::Kinematic,
            position,
        }
    }

    pub fn fixed(position: Vec2) -> Self {
        Self {
            kind: AnchorKind::Static,
            position,
        }
    }

    pub fn kind(&self) -> AnchorKind {
        self.kind
    }

    pub fn is_kinematic(&self) -> bool {
        self.kind == AnchorKind::Kinematic
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Moves a kinematic anchor. Static anchors ignore the command.
    pub fn set_position(&mut self, position: Vec2) {
        match self.kind {
            AnchorKind::Kinematic => self.position = position,
            AnchorKind::Static => {
                warn!("ignoring position command for static anchor at {}", self.position);
            }
        }
    }
}
