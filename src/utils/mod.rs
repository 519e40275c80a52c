//! Utility helpers: logging and tracing.

pub mod logging;

pub use logging::{ScopedTimer, warn_if_steps_dropped};
