//! Matrix types module.
//!
//! This module provides the square matrix types:
//! - Mat2F32: 2x2 matrix
//! - Mat3F32: 3x3 matrix

#[macro_use]
mod mat;

mod mat2;
mod mat3;

pub use mat2::Mat2F32;
pub use mat3::Mat3F32;
