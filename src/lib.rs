//! densemat: a small dense real-valued matrix library.
//!
//! This crate provides [`Matrix`], a row-major rectangular container with
//! elementary arithmetic (addition, subtraction, multiplication),
//! transposition, and identity construction. `Matrix<f64>` additionally
//! carries tolerance-based equality to absorb the floating-point rounding
//! accumulated by arithmetic.
//!
//! The design favors a small, testable surface: construction and arithmetic
//! validate their preconditions up front and return [`MatrixError`], while
//! element access stays raw for performance.
pub mod error;
pub mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;
