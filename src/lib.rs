//! Sign-gated scaled sum of integer triples.
//!
//! One synchronous, pure operation: [`compute`] maps three signed
//! integers to a score by selecting the positive participants of the
//! triple and applying a fixed truncating transform to their sum.
//! [`classify`] exposes the selection step on its own.

// Export modules for library usage
pub mod score;

// Re-export the public surface
pub use crate::score::{classify, compute, OperandSelection};
