//! Default parameters and clamp ranges for the spring chain simulation.

/// Number of free bodies in a default chain.
pub const DEFAULT_BODY_COUNT: usize = 150;

/// Mass of every body (kg).
pub const DEFAULT_BODY_MASS: f32 = 0.05;

/// Unstretched spring length (m).
pub const DEFAULT_REST_LENGTH: f32 = 0.1;

/// Initial distance between neighbouring bodies (m). Larger than the rest
/// length, so the chain starts under tension.
pub const DEFAULT_SPACING: f32 = 0.12;

/// Spring stiffness k (N/m).
pub const DEFAULT_STIFFNESS: f32 = 1200.0;

/// Spring damping coefficient c (N·s/m).
pub const DEFAULT_SPRING_DAMPING: f32 = 8.0;

/// Gravity magnitude used by [`crate::simulation::GravityMode::Earth`] (m/s²).
pub const EARTH_GRAVITY: f32 = 9.81;

/// Global damping factor; 1.0 keeps all velocity.
pub const DEFAULT_GLOBAL_DAMPING: f32 = 1.0;

/// Upper bound accepted by the live damping knob.
pub const MAX_LIVE_DAMPING: f32 = 0.999;

/// Simulated time after which the anchor lift fires (s).
pub const DEFAULT_TRIGGER_TIME: f32 = 0.25;

/// Upper bound for the trigger time knob (s).
pub const MAX_TRIGGER_TIME: f32 = 5.0;

/// Distance the left anchor jumps when the lift fires (m).
pub const DEFAULT_LIFT_AMOUNT: f32 = 0.5;

/// Upper bound for the lift amount knob (m).
pub const MAX_LIFT_AMOUNT: f32 = 2.0;

/// Fixed integration timestep (s).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 120.0;

/// Fixed steps executed per external tick.
pub const DEFAULT_STEPS_PER_TICK: u32 = 2;

/// Cap on fixed steps a single `advance` may run; the surplus is dropped.
pub const MAX_STEPS_PER_ADVANCE: u32 = 240;

/// Slack used when comparing accumulated wall time against the timestep.
pub const TIME_EPSILON: f32 = 1e-6;

/// Spring axis used when both endpoints coincide.
pub const FALLBACK_AXIS: [f32; 2] = [1.0, 0.0];
