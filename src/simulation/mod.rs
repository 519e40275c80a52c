//! Controller layer: live parameters, the one-shot anchor lift, and tick handling.

pub mod controller;
pub mod params;
pub mod shared;
pub mod snapshot;

pub use controller::{ImpulseState, SimulationController};
pub use params::{GravityMode, SimulationParams};
pub use shared::SharedSimulation;
pub use snapshot::ChainSnapshot;
