//! Immutable geometric and measured-quantity value types.
//!
//! # Motivation
//!
//! Geometry processing code needs to expose vectors, matrices, rotations, and
//! one-dimensional quantities (angles, lengths, durations, …) in its public
//! APIs. This library was created to accomodate that use case.
//!
//! Existing Rust libraries have problems and limitations that make them
//! unsuitable for this use case:
//!
//! - Some of them aim for maximum flexibility, and pay the complexity cost
//!   associated with that.
//! - Many libraries still see many breaking changes. Exposing types from such
//!   a library in public APIs would cause unnecessary churn for dependants.
//! - Most treat an angle, a length, or a probability as a bare float, which
//!   silently permits operations that make no sense for the quantity (what is
//!   an angle times an angle?).
//!
//! # Goals & Non-Goals
//!
//! - Every type is an immutable value: "updates" construct new values, and
//!   equality and hashing are fully structural.
//! - Don't support dynamically-sized vectors and matrices. The API can be
//!   significantly simplified by relying on const generics to specify vector
//!   and matrix dimensions.
//! - Support only a single, column-major, unpadded data layout for matrices
//!   and vectors, further simplifying their API.
//! - Be generic over the element type, so that the 32-bit and 64-bit
//!   universes of otherwise-identical types share one implementation, with
//!   explicit (lossy) [`cast`][CastFrom] hooks at the boundary instead of
//!   implicit conversions.
//! - Don't have any unstable public dependencies. "Unstable" includes
//!   everything pre-1.0, as well as libraries that violate semver, as well as
//!   libraries that regularly do breaking post-1.0 releases.
//! - Put at least some effort into designing an ergonomic API that adheres to
//!   the [Rust API Guidelines].
//!
//! [Rust API Guidelines]: https://rust-lang.github.io/api-guidelines/

pub mod approx;
mod matrix;
mod measure;
mod quat;
mod rotation;
mod sequence;
mod traits;
mod vector;

pub use matrix::*;
pub use measure::*;
pub use quat::*;
pub use rotation::*;
pub use sequence::*;
pub use traits::*;
pub use vector::*;
