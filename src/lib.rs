//! Spring Chain – damped mass-spring chain simulation core.
//!
//! A row of point masses joined by damped linear springs, held between a
//! kinematic left anchor and a static wall. Lifting the left anchor sends a
//! disturbance down the chain. Rendering and input live outside this crate;
//! they read positions from [`SimulationController`] or a [`ChainSnapshot`]
//! and write the live parameter knobs.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod simulation;
pub mod utils;

pub use glam::Vec2;

pub use crate::core::{
    body::{AnchorKind, AnchorPoint, Body},
    chain::Chain,
    spring::{AnchorSide, Endpoint, Spring},
    types::{ChainConfig, SpringProperties},
};
pub use crate::dynamics::{
    forces::{ForceGenerator, GravityForce, SpringForce},
    integrator::{Integrator, SpringDamping},
};
pub use error::{Result, SpringChainError};
pub use simulation::{
    ChainSnapshot, GravityMode, ImpulseState, SharedSimulation, SimulationController,
    SimulationParams,
};
