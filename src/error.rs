//! Error types for the spring chain core.
//!
//! This module provides a unified error type [`SpringChainError`] and a convenient [`Result`] alias.

use std::fmt;

/// Errors raised when constructing a chain or addressing its parts.
///
/// Live parameter knobs never produce these; they clamp instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SpringChainError {
    /// A chain needs at least one free body.
    InvalidBodyCount(usize),
    /// Mass must be positive and finite.
    InvalidMass(f32),
    /// Rest length must be non-negative and finite.
    InvalidRestLength(f32),
    /// Stiffness must be positive and finite.
    InvalidStiffness(f32),
    /// Damping coefficient must be non-negative and finite.
    InvalidDamping(f32),
    /// Initial spacing must be positive and finite.
    InvalidSpacing(f32),
    /// Timestep must be positive and finite.
    InvalidTimeStep(f32),
    /// Body index is out of bounds.
    BodyOutOfBounds { index: usize, count: usize },
    /// Spring index is out of bounds.
    SpringOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for SpringChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBodyCount(n) => write!(f, "chain needs at least one body, got {n}"),
            Self::InvalidMass(m) => write!(f, "mass must be positive and finite, got {m}"),
            Self::InvalidRestLength(l) => {
                write!(f, "rest length must be non-negative and finite, got {l}")
            }
            Self::InvalidStiffness(k) => {
                write!(f, "stiffness must be positive and finite, got {k}")
            }
            Self::InvalidDamping(c) => {
                write!(f, "damping coefficient must be non-negative and finite, got {c}")
            }
            Self::InvalidSpacing(s) => write!(f, "spacing must be positive and finite, got {s}"),
            Self::InvalidTimeStep(dt) => {
                write!(f, "timestep must be positive and finite, got {dt}")
            }
            Self::BodyOutOfBounds { index, count } => {
                write!(f, "body index {index} out of bounds (count: {count})")
            }
            Self::SpringOutOfBounds { index, count } => {
                write!(f, "spring index {index} out of bounds (count: {count})")
            }
        }
    }
}

impl std::error::Error for SpringChainError {}

/// Convenient result alias for chain operations.
pub type Result<T> = std::result::Result<T, SpringChainError>;
