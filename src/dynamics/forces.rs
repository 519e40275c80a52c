use glam::Vec2;

use crate::core::{chain::Chain, spring::Spring};

/// Source of force accumulated on the bodies of a chain once per step.
pub trait ForceGenerator: Send + Sync {
    fn accumulate(&self, chain: &mut Chain);
}

/// Constant gravity scaled by body mass.
pub struct GravityForce {
    pub gravity: Vec2,
}

impl GravityForce {
    pub fn new(gravity: Vec2) -> Self {
        Self { gravity }
    }
}

impl ForceGenerator for GravityForce {
    fn accumulate(&self, chain: &mut Chain) {
        if self.gravity == Vec2::ZERO {
            return;
        }
        for body in chain.bodies_mut() {
            let force = self.gravity * body.mass();
            body.apply_force(force);
        }
    }
}

/// Hookean springs with relative-velocity damping, F = k·x + c·vrel.
///
/// With `include_damping` unset only the elastic term is accumulated; the
/// integrator then resolves the damping term implicitly.
pub struct SpringForce {
    pub include_damping: bool,
}

impl SpringForce {
    pub fn new(include_damping: bool) -> Self {
        Self { include_damping }
    }

    /// Force on the spring's first endpoint. The second endpoint receives the negation.
    pub(crate) fn evaluate(&self, chain: &Chain, spring: &Spring) -> Vec2 {
        let (a, b) = spring.endpoints();
        let (axis, length) = chain.spring_axis(spring);
        let extension = length - spring.rest_length();

        let mut magnitude = spring.stiffness() * extension;
        if self.include_damping {
            let relative_velocity =
                (chain.velocity_of(b) - chain.velocity_of(a)).dot(axis);
            magnitude += spring.damping() * relative_velocity;
        }

        axis * magnitude
    }
}

impl ForceGenerator for SpringForce {
    fn accumulate(&self, chain: &mut Chain) {
        for index in 0..chain.spring_count() {
            let spring = chain.springs()[index];
            let force = self.evaluate(chain, &spring);
            let (a, b) = spring.endpoints();
            chain.apply_force_to(a, force);
            chain.apply_force_to(b, -force);
        }
    }
}
