use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_BODY_COUNT, DEFAULT_BODY_MASS, DEFAULT_REST_LENGTH, DEFAULT_SPACING,
    DEFAULT_SPRING_DAMPING, DEFAULT_STIFFNESS,
};
use crate::error::{Result, SpringChainError};

/// Material coefficients shared by every spring of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringProperties {
    /// Unstretched length l0 (m).
    pub rest_length: f32,
    /// Stiffness k (N/m).
    pub stiffness: f32,
    /// Relative-velocity damping coefficient c (N·s/m).
    pub damping: f32,
}

impl Default for SpringProperties {
    fn default() -> Self {
        Self {
            rest_length: DEFAULT_REST_LENGTH,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_SPRING_DAMPING,
        }
    }
}

impl SpringProperties {
    pub fn validate(&self) -> Result<()> {
        if !self.rest_length.is_finite() || self.rest_length < 0.0 {
            return Err(SpringChainError::InvalidRestLength(self.rest_length));
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(SpringChainError::InvalidStiffness(self.stiffness));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(SpringChainError::InvalidDamping(self.damping));
        }
        Ok(())
    }
}

/// Topology and material description used to build a [`crate::Chain`].
///
/// The left anchor sits at `origin`, body `i` at `origin + (i + 1) * spacing`
/// along +X, and the wall at `origin + (body_count + 1) * spacing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub body_count: usize,
    pub body_mass: f32,
    /// Initial distance between neighbours; differs from the rest length to pre-tension the chain.
    pub spacing: f32,
    pub spring: SpringProperties,
    pub origin: Vec2,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            body_count: DEFAULT_BODY_COUNT,
            body_mass: DEFAULT_BODY_MASS,
            spacing: DEFAULT_SPACING,
            spring: SpringProperties::default(),
            origin: Vec2::ZERO,
        }
    }
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body_count(mut self, body_count: usize) -> Self {
        self.body_count = body_count;
        self
    }

    pub fn with_body_mass(mut self, body_mass: f32) -> Self {
        self.body_mass = body_mass;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_rest_length(mut self, rest_length: f32) -> Self {
        self.spring.rest_length = rest_length;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.spring.stiffness = stiffness;
        self
    }

    pub fn with_spring_damping(mut self, damping: f32) -> Self {
        self.spring.damping = damping;
        self
    }

    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Checks every construction-time invariant.
    pub fn validate(&self) -> Result<()> {
        if self.body_count == 0 {
            return Err(SpringChainError::InvalidBodyCount(self.body_count));
        }
        if !self.body_mass.is_finite() || self.body_mass <= 0.0 {
            return Err(SpringChainError::InvalidMass(self.body_mass));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(SpringChainError::InvalidSpacing(self.spacing));
        }
        self.spring.validate()
    }

    /// Position of body `index` in the initial layout.
    pub fn body_position(&self, index: usize) -> Vec2 {
        self.origin + Vec2::new((index + 1) as f32 * self.spacing, 0.0)
    }

    /// Position of the static wall anchor.
    pub fn wall_position(&self) -> Vec2 {
        self.origin + Vec2::new((self.body_count + 1) as f32 * self.spacing, 0.0)
    }
}
