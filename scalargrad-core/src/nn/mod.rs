// src/nn/mod.rs
//! Neural-network building blocks composed purely from [`Value`](crate::Value) operations.
//!
//! Nothing in here has its own gradient rule: a neuron is a sum of products
//! followed by an activation, and the engine differentiates it like any
//! other expression.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module; // Trait Module

// Re-export common items
pub use activation::Activation;
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{l2_penalty, HingeLoss, MSELoss, Reduction};
pub use module::Module;
