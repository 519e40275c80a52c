use glam::Vec2;
use log::debug;

use super::body::{AnchorPoint, Body};
use super::spring::{AnchorSide, Endpoint, Spring};
use super::types::ChainConfig;
use crate::config::FALLBACK_AXIS;
use crate::error::{Result, SpringChainError};

/// Ordered bodies between a kinematic left anchor and a static wall.
///
/// `springs[0]` joins the left anchor to body 0, `springs[i]` joins body
/// `i - 1` to body `i`, and `springs[N]` joins body `N - 1` to the wall.
/// The topology never changes; a reset builds a new chain.
#[derive(Debug, Clone)]
pub struct Chain {
    bodies: Vec<Body>,
    springs: Vec<Spring>,
    left_anchor: AnchorPoint,
    right_anchor: AnchorPoint,
    config: ChainConfig,
}

impl Chain {
    /// Builds the initial layout described by `config`.
    pub fn new(config: ChainConfig) -> Result<Self> {
        config.validate()?;
        let positions: Vec<Vec2> = (0..config.body_count)
            .map(|i| config.body_position(i))
            .collect();
        Self::assemble(config, &positions)
    }

    /// Builds the topology of `config` with bodies at rest at custom positions.
    pub fn with_positions(config: ChainConfig, positions: &[Vec2]) -> Result<Self> {
        config.validate()?;
        if positions.len() != config.body_count {
            return Err(SpringChainError::InvalidBodyCount(positions.len()));
        }
        Self::assemble(config, positions)
    }

    fn assemble(config: ChainConfig, positions: &[Vec2]) -> Result<Self> {
        let count = positions.len();
        let bodies = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| Body::new(i, p, config.body_mass))
            .collect::<Result<Vec<_>>>()?;

        let mut springs = Vec::with_capacity(count + 1);
        springs.push(Spring::new(
            Endpoint::Anchor(AnchorSide::Left),
            Endpoint::Body(0),
            config.spring,
        ));
        for i in 1..count {
            springs.push(Spring::new(
                Endpoint::Body(i - 1),
                Endpoint::Body(i),
                config.spring,
            ));
        }
        springs.push(Spring::new(
            Endpoint::Body(count - 1),
            Endpoint::Anchor(AnchorSide::Right),
            config.spring,
        ));

        debug!("built chain with {} bodies and {} springs", count, springs.len());

        Ok(Self {
            bodies,
            springs,
            left_anchor: AnchorPoint::kinematic(config.origin),
            right_anchor: AnchorPoint::fixed(config.wall_position()),
            config,
        })
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn body(&self, index: usize) -> Result<&Body> {
        self.bodies
            .get(index)
            .ok_or(SpringChainError::BodyOutOfBounds {
                index,
                count: self.bodies.len(),
            })
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn spring(&self, index: usize) -> Result<&Spring> {
        self.springs
            .get(index)
            .ok_or(SpringChainError::SpringOutOfBounds {
                index,
                count: self.springs.len(),
            })
    }

    pub fn left_anchor(&self) -> &AnchorPoint {
        &self.left_anchor
    }

    pub fn right_anchor(&self) -> &AnchorPoint {
        &self.right_anchor
    }

    /// Explicit command moving the kinematic anchor.
    pub fn set_left_anchor_position(&mut self, position: Vec2) {
        self.left_anchor.set_position(position);
    }

    pub fn body_positions(&self) -> Vec<Vec2> {
        self.bodies.iter().map(Body::position).collect()
    }

    pub fn body_velocities(&self) -> Vec<Vec2> {
        self.bodies.iter().map(Body::velocity).collect()
    }

    /// Position of `endpoint`, or a bounds error for a body index past the chain.
    pub fn endpoint_position(&self, endpoint: Endpoint) -> Result<Vec2> {
        if let Endpoint::Body(index) = endpoint {
            return self.body(index).map(Body::position);
        }
        Ok(self.position_of(endpoint))
    }

    /// Velocity of `endpoint`. Anchors carry no velocity; their jumps are instantaneous.
    pub fn endpoint_velocity(&self, endpoint: Endpoint) -> Result<Vec2> {
        if let Endpoint::Body(index) = endpoint {
            return self.body(index).map(Body::velocity);
        }
        Ok(Vec2::ZERO)
    }

    /// Unit axis and current length of spring `index`.
    pub fn spring_direction(&self, index: usize) -> Result<(Vec2, f32)> {
        let spring = self.spring(index)?;
        Ok(self.spring_axis(spring))
    }

    /// Endpoints here come from the chain's own topology and are always in range.
    pub(crate) fn position_of(&self, endpoint: Endpoint) -> Vec2 {
        match endpoint {
            Endpoint::Body(i) => self.bodies[i].position(),
            Endpoint::Anchor(AnchorSide::Left) => self.left_anchor.position(),
            Endpoint::Anchor(AnchorSide::Right) => self.right_anchor.position(),
        }
    }

    pub(crate) fn velocity_of(&self, endpoint: Endpoint) -> Vec2 {
        match endpoint {
            Endpoint::Body(i) => self.bodies[i].velocity(),
            Endpoint::Anchor(_) => Vec2::ZERO,
        }
    }

    /// Unit axis from the first to the second endpoint, and the current length.
    ///
    /// Coincident endpoints fall back to [`FALLBACK_AXIS`] with length zero.
    pub(crate) fn spring_axis(&self, spring: &Spring) -> (Vec2, f32) {
        let (a, b) = spring.endpoints();
        let delta = self.position_of(b) - self.position_of(a);
        let length = delta.length();
        if length > 0.0 {
            (delta / length, length)
        } else {
            (Vec2::from_array(FALLBACK_AXIS), 0.0)
        }
    }

    /// Signed stretch of spring `index`; positive when longer than rest.
    pub fn spring_stretch(&self, index: usize) -> Result<f32> {
        let spring = self.spring(index)?;
        let (_, length) = self.spring_axis(spring);
        Ok(length - spring.rest_length())
    }

    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn potential_energy(&self) -> f32 {
        self.springs
            .iter()
            .map(|spring| {
                let (_, length) = self.spring_axis(spring);
                spring.potential_energy(length)
            })
            .sum()
    }

    pub fn total_energy(&self) -> f32 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Adds `force` to a body endpoint; anchors discard it.
    pub(crate) fn apply_force_to(&mut self, endpoint: Endpoint, force: Vec2) {
        if let Endpoint::Body(i) = endpoint {
            self.bodies[i].apply_force(force);
        }
    }
}
