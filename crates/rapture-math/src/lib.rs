//! Fixed-size matrix and vector value types for the Rapture engine.
//!
//! # Overview
//!
//! [`Matrix`] and [`Vector`] are small, stack-allocated, [`Copy`] values whose dimensions are
//! const generic parameters. Storage and the numeric kernels (products, dot and cross products)
//! are provided by [`nalgebra`]; this crate layers a narrow value-type API on top of it so that
//! engine code never has to name `nalgebra` types.
//!
//! # Shape checking
//!
//! Every shape rule is enforced by the type system:
//!
//! - `Matrix<R, C> * Matrix<C, P>` is the only matrix product that type checks.
//! - `+`, `-`, `+=` and `-=` require operands of identical shape.
//! - [`Matrix::identity`] only exists for square matrices, [`cross_prod`] only for 3-element
//!   vectors.
//!
//! Data whose length is only known at runtime (slices) goes through checked constructors such as
//! [`Matrix::from_row_slice`], which return [`Error::DimensionMismatch`] instead of panicking.
//!
//! # Randomness
//!
//! [`Matrix::random`] and [`Vector::random`] take the random number generator as an argument.
//! There is no global generator, so seeded tests are fully reproducible.

mod error;
mod general;
mod matrix;
mod random;
mod vector;

pub use error::*;
pub use matrix::*;
pub use vector::*;

/// The element type of every [`Matrix`] and [`Vector`].
pub type Float = f32;
