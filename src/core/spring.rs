use serde::{Deserialize, Serialize};

use super::types::SpringProperties;

/// Which end of the chain an anchor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorSide {
    /// Kinematic anchor driven by the lift command.
    Left,
    /// Static wall.
    Right,
}

/// One end of a spring: either a free body (by chain index) or an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Body(usize),
    Anchor(AnchorSide),
}

impl Endpoint {
    pub fn body_index(&self) -> Option<usize> {
        match self {
            Endpoint::Body(index) => Some(*index),
            Endpoint::Anchor(_) => None,
        }
    }
}

/// Damped linear spring between two endpoints fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    a: Endpoint,
    b: Endpoint,
    pub properties: SpringProperties,
}

impl Spring {
    pub fn new(a: Endpoint, b: Endpoint, properties: SpringProperties) -> Self {
        Self { a, b, properties }
    }

    pub fn endpoints(&self) -> (Endpoint, Endpoint) {
        (self.a, self.b)
    }

    pub fn rest_length(&self) -> f32 {
        self.properties.rest_length
    }

    pub fn stiffness(&self) -> f32 {
        self.properties.stiffness
    }

    pub fn damping(&self) -> f32 {
        self.properties.damping
    }

    /// Elastic energy stored at the given length.
    pub fn potential_energy(&self, length: f32) -> f32 {
        let stretch = length - self.properties.rest_length;
        0.5 * self.properties.stiffness * stretch * stretch
    }
}
