//! Core types describing bodies, anchors, springs, and the chain that owns them.

pub mod body;
pub mod chain;
pub mod spring;
pub mod types;

pub use body::{AnchorKind, AnchorPoint, Body};
pub use chain::Chain;
pub use spring::{AnchorSide, Endpoint, Spring};
pub use types::{ChainConfig, SpringProperties};
