//! # scalargrad-core
//!
//! Reverse-mode automatic differentiation over `f64` scalars.
//!
//! A [`Value`] is a cheap, cloneable handle to one node of a dynamically built
//! computation graph. Every operator (`+`, `-`, `*`, `/`, [`Value::pow`],
//! [`Value::tanh`], [`Value::relu`]) creates a new node that remembers its
//! operands and how to push gradient back to them. Calling
//! [`Value::backward`] on the final node seeds its gradient with `1.0` and
//! walks the graph in reverse topological order, accumulating
//! `∂root/∂node` into every reachable node.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(-4.0);
//! let b = Value::new(2.0);
//! let c = &a * &b + b.pow(3);
//! c.backward();
//!
//! assert_eq!(c.data(), 0.0);
//! assert_eq!(a.grad(), 2.0);
//! assert_eq!(b.grad(), -4.0 + 12.0);
//! ```
//!
//! The [`nn`] module composes neurons, layers and multilayer perceptrons out of
//! `Value` operations only, and [`optim`] updates their parameters.

pub mod autograd;
pub mod ops;
pub mod value;

pub mod nn;
pub mod optim;

pub mod error;

// Ré-exporte les types principaux
pub use error::ScalarGradError;
pub use value::Value;
// Re-export traits required by public functions (`Mlp::predict`)
pub use num_traits;
