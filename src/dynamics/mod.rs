//! Simulation dynamics: spring and gravity forces, implicit damping, and the fixed-step integrator.

pub mod damping;
pub mod forces;
pub mod integrator;

pub use damping::solve_implicit_damping;
pub use forces::{ForceGenerator, GravityForce, SpringForce};
pub use integrator::{Integrator, SpringDamping};
