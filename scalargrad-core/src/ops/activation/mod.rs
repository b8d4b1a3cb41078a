// src/ops/activation/mod.rs

//! # Activation Functions
//!
//! Non-linear functions applied to a single [`Value`](crate::Value).
//!
//! ## Currently Implemented:
//! - [`relu_op`]: Rectified Linear Unit, `max(0, x)`.
//! - [`tanh_op`]: hyperbolic tangent.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;
