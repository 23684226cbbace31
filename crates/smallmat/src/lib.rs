#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # smallmat
//!
//! Fixed-size 2D and 3D vectors and their square matrices in single precision.
//!
//! Every operation evaluates its formula in a fixed order, so results are
//! reproducible bit for bit. Degenerate inputs never panic:
//!
//! - the unit of a zero vector is the zero vector,
//! - the inverse of a singular matrix is the zero matrix,
//! - `from_*` constructors fall back to zero on malformed input, while their
//!   `try_from_*` twins report an [`AlgebraError`],
//! - checked accessors (`get`, `at`, `row`, `col`, ...) return
//!   [`AlgebraError::IndexOutOfRange`]; the `Index` operators panic like arrays.
//!
//! ## Example
//!
//! ```rust
//! use smallmat::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows_array(&[1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
//! assert_eq!(m.determinant(), 1.0);
//!
//! let v = m.inverse() * (m * Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
//!
//! assert_eq!(Vec3::UNIT_X.cross(Vec3::UNIT_Y), Vec3::UNIT_Z);
//! ```

mod error;
mod matrix;
mod vector;

pub use error::AlgebraError;
pub use matrix::{Mat2F32, Mat3F32};
pub use vector::{Vec2F32, Vec3F32};

// Short aliases (single precision is the only precision).
/// 2D vector.
pub type Vec2 = Vec2F32;
/// 3D vector.
pub type Vec3 = Vec3F32;
/// 2x2 matrix.
pub type Mat2 = Mat2F32;
/// 3x3 matrix.
pub type Mat3 = Mat3F32;
