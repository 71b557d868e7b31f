//! # zengrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Expressions are built eagerly from [`Value`] nodes; calling
//! [`Value::backward`] on the result fills in the gradient of that result with
//! respect to every node it was computed from.
//!
//! ```
//! use zengrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = &a * &b + 10.0;
//! c.backward().unwrap();
//! assert_eq!(c.data(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod utils;
pub mod value;

pub use error::ZenGradError;
pub use value::{NodeId, OpKind, Value};
// Re-export traits required by public functions
pub use num_traits;
