//! Macro to define a matrix type.
//!
//! We provide a small `macro_rules!` helper so the 2x2 and 3x3 matrices share a
//! single implementation of everything that does not depend on the dimension.
//! Determinant and inverse are written out by hand next to each type.
//!
//! The generated types store their entries row-major. Products are computed as
//! dot products of rows and columns through the vector type, so every entry is
//! accumulated in the same order as [`dot`](crate::Vec3F32::dot).
//!
//! # Arguments
//!
//! * `name`      - The name of the matrix type.
//! * `glam_type` - The column-major `glam` matrix used for interop conversions.
//! * `scalar`    - The scalar type.
//! * `vec_type`  - The vector type used for rows, columns and mat-vec mul.
//! * `dim`       - The number of rows (and columns).
//! * `axes`      - Parameter names for the row and column vectors.
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $glam_type:ty,
        $scalar:ty,
        $vec_type:ty,
        $dim:literal,
        [$($axis:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        #[repr(transparent)]
        pub struct $name([[$scalar; $dim]; $dim]);

        impl $name {
            /// Number of rows and columns.
            pub const DIM: usize = $dim;

            /// Zero matrix.
            pub const ZERO: Self = Self([[0.0 as $scalar; $dim]; $dim]);

            /// Identity matrix.
            pub const IDENTITY: Self = {
                let mut data = [[0.0 as $scalar; $dim]; $dim];
                let mut i = 0;
                while i < $dim {
                    data[i][i] = 1.0 as $scalar;
                    i += 1;
                }
                Self(data)
            };

            /// Create a new matrix from row vectors.
            #[inline]
            pub fn from_rows($($axis: $vec_type),+) -> Self {
                Self([$($axis.to_array()),+])
            }

            /// Create a new matrix from column vectors.
            #[inline]
            pub fn from_cols($($axis: $vec_type),+) -> Self {
                Self::from_rows($($axis),+).transpose()
            }

            /// Create a new matrix from a nested `[row][column]` array.
            #[inline]
            pub fn from_rows_array_2d(arr: &[[$scalar; $dim]; $dim]) -> Self {
                Self(*arr)
            }

            /// Convert the matrix to a nested `[row][column]` array.
            #[inline]
            pub fn to_rows_array_2d(&self) -> [[$scalar; $dim]; $dim] {
                self.0
            }

            /// Create a new matrix from a flat row-major array.
            #[inline]
            pub fn from_rows_array(arr: &[$scalar; $dim * $dim]) -> Self {
                let mut data = [[0.0 as $scalar; $dim]; $dim];
                for (row, chunk) in data.iter_mut().zip(arr.chunks_exact($dim)) {
                    row.copy_from_slice(chunk);
                }
                Self(data)
            }

            /// Convert the matrix to a flat row-major array.
            #[inline]
            pub fn to_rows_array(&self) -> [$scalar; $dim * $dim] {
                let mut arr = [0.0 as $scalar; $dim * $dim];
                for (chunk, row) in arr.chunks_exact_mut($dim).zip(self.0.iter()) {
                    chunk.copy_from_slice(row);
                }
                arr
            }

            /// Create a new matrix from the leading elements of a flat row-major slice.
            ///
            /// Elements past the matrix size are ignored.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::InsufficientElements`](crate::AlgebraError) if the
            /// slice holds fewer entries than the matrix.
            pub fn try_from_rows_slice(data: &[$scalar]) -> Result<Self, $crate::AlgebraError> {
                if data.len() < $dim * $dim {
                    return Err($crate::AlgebraError::InsufficientElements {
                        expected: $dim * $dim,
                        actual: data.len(),
                    });
                }
                let mut arr = [0.0 as $scalar; $dim * $dim];
                arr.copy_from_slice(&data[..$dim * $dim]);
                Ok(Self::from_rows_array(&arr))
            }

            /// Create a new matrix from a flat row-major slice, or the zero matrix if
            /// the slice is too short.
            pub fn from_rows_slice(data: &[$scalar]) -> Self {
                Self::try_from_rows_slice(data).unwrap_or_else(|err| {
                    log::debug!("{}::from_rows_slice: {err}; using the zero matrix", stringify!($name));
                    Self::ZERO
                })
            }

            /// Create a new matrix from a sequence of rows in `[row][column]` order.
            ///
            /// Extra rows, and extra elements within a row, are ignored.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::InsufficientRows`](crate::AlgebraError) if there
            /// are fewer rows than the dimension, or
            /// [`AlgebraError::ShortRow`](crate::AlgebraError) for the first row that is
            /// too short.
            pub fn try_from_nested<R: AsRef<[$scalar]>>(
                rows: &[R],
            ) -> Result<Self, $crate::AlgebraError> {
                if rows.len() < $dim {
                    return Err($crate::AlgebraError::InsufficientRows {
                        expected: $dim,
                        actual: rows.len(),
                    });
                }
                let mut data = [[0.0 as $scalar; $dim]; $dim];
                for (i, (dst, src)) in data.iter_mut().zip(rows.iter()).enumerate() {
                    let src = src.as_ref();
                    if src.len() < $dim {
                        return Err($crate::AlgebraError::ShortRow {
                            row: i,
                            expected: $dim,
                            actual: src.len(),
                        });
                    }
                    dst.copy_from_slice(&src[..$dim]);
                }
                Ok(Self(data))
            }

            /// Create a new matrix from a sequence of rows, or the zero matrix if the
            /// rows are malformed.
            pub fn from_nested<R: AsRef<[$scalar]>>(rows: &[R]) -> Self {
                Self::try_from_nested(rows).unwrap_or_else(|err| {
                    log::debug!("{}::from_nested: {err}; using the zero matrix", stringify!($name));
                    Self::ZERO
                })
            }

            /// Create a diagonal matrix from a vector.
            #[inline]
            pub fn from_diagonal(diagonal: $vec_type) -> Self {
                let d = diagonal.to_array();
                let mut m = Self::ZERO;
                for (i, value) in d.into_iter().enumerate() {
                    m.0[i][i] = value;
                }
                m
            }

            /// Get the entry at `row` and `col`.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::IndexOutOfRange`](crate::AlgebraError) if either
            /// index is out of range.
            #[inline]
            pub fn at(&self, row: usize, col: usize) -> Result<$scalar, $crate::AlgebraError> {
                $crate::AlgebraError::check_index(row, $dim)?;
                $crate::AlgebraError::check_index(col, $dim)?;
                Ok(self.0[row][col])
            }

            /// Set the entry at `row` and `col`.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::IndexOutOfRange`](crate::AlgebraError) if either
            /// index is out of range; the matrix is left unchanged.
            #[inline]
            pub fn set_at(
                &mut self,
                row: usize,
                col: usize,
                value: $scalar,
            ) -> Result<(), $crate::AlgebraError> {
                $crate::AlgebraError::check_index(row, $dim)?;
                $crate::AlgebraError::check_index(col, $dim)?;
                self.0[row][col] = value;
                Ok(())
            }

            /// Get the row vector at `index`.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::IndexOutOfRange`](crate::AlgebraError) if `index`
            /// is out of range.
            #[inline]
            pub fn row(&self, index: usize) -> Result<$vec_type, $crate::AlgebraError> {
                $crate::AlgebraError::check_index(index, $dim)?;
                Ok(self.row_vec(index))
            }

            /// Get the column vector at `index`.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::IndexOutOfRange`](crate::AlgebraError) if `index`
            /// is out of range.
            #[inline]
            pub fn col(&self, index: usize) -> Result<$vec_type, $crate::AlgebraError> {
                $crate::AlgebraError::check_index(index, $dim)?;
                Ok(self.col_vec(index))
            }

            /// Replace the row at `index`.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::IndexOutOfRange`](crate::AlgebraError) if `index`
            /// is out of range; the matrix is left unchanged.
            #[inline]
            pub fn set_row(
                &mut self,
                index: usize,
                value: $vec_type,
            ) -> Result<(), $crate::AlgebraError> {
                $crate::AlgebraError::check_index(index, $dim)?;
                self.0[index] = value.to_array();
                Ok(())
            }

            /// Replace the column at `index`.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::IndexOutOfRange`](crate::AlgebraError) if `index`
            /// is out of range; the matrix is left unchanged.
            #[inline]
            pub fn set_col(
                &mut self,
                index: usize,
                value: $vec_type,
            ) -> Result<(), $crate::AlgebraError> {
                $crate::AlgebraError::check_index(index, $dim)?;
                for (row, v) in self.0.iter_mut().zip(value.to_array()) {
                    row[index] = v;
                }
                Ok(())
            }

            /// Transpose the matrix.
            #[inline]
            pub fn transpose(self) -> Self {
                Self(std::array::from_fn(|i| std::array::from_fn(|j| self.0[j][i])))
            }

            /// Sum of the diagonal entries.
            #[inline]
            pub fn trace(self) -> $scalar {
                (1..$dim).fold(self.0[0][0], |acc, i| acc + self.0[i][i])
            }

            /// Check if all elements are finite.
            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.iter().flatten().all(|v| v.is_finite())
            }

            /// Set every entry to zero.
            #[inline]
            pub fn load_zero(&mut self) {
                *self = Self::ZERO;
            }

            /// Set the matrix to the identity.
            #[inline]
            pub fn load_identity(&mut self) {
                *self = Self::IDENTITY;
            }

            #[inline]
            fn row_vec(&self, index: usize) -> $vec_type {
                <$vec_type>::from_array(self.0[index])
            }

            #[inline]
            fn col_vec(&self, index: usize) -> $vec_type {
                <$vec_type>::from_array(std::array::from_fn(|i| self.0[i][index]))
            }
        }

        impl std::ops::Index<(usize, usize)> for $name {
            type Output = $scalar;

            #[inline]
            fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
                &self.0[row][col]
            }
        }

        impl std::ops::IndexMut<(usize, usize)> for $name {
            #[inline]
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
                &mut self.0[row][col]
            }
        }

        // Conversions to and from glam (column-major storage).
        impl From<$glam_type> for $name {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self(m.to_cols_array_2d()).transpose()
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(m: $name) -> Self {
                <$glam_type>::from_cols_array_2d(&m.transpose().0)
            }
        }

        // Conversions to and from nested row-major arrays.
        impl From<[[$scalar; $dim]; $dim]> for $name {
            #[inline]
            fn from(arr: [[$scalar; $dim]; $dim]) -> Self {
                Self(arr)
            }
        }

        impl From<$name> for [[$scalar; $dim]; $dim] {
            #[inline]
            fn from(m: $name) -> Self {
                m.0
            }
        }

        #[cfg(feature = "approx")]
        impl approx::AbsDiffEq for $name {
            type Epsilon = <$scalar as approx::AbsDiffEq>::Epsilon;

            #[inline]
            fn default_epsilon() -> Self::Epsilon {
                <$scalar as approx::AbsDiffEq>::default_epsilon()
            }

            #[inline]
            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let a = self.to_rows_array();
                let b = other.to_rows_array();
                a.iter()
                    .zip(b.iter())
                    .all(|(ai, bi)| <$scalar as approx::AbsDiffEq>::abs_diff_eq(ai, bi, epsilon))
            }
        }

        #[cfg(feature = "approx")]
        impl approx::RelativeEq for $name {
            #[inline]
            fn default_max_relative() -> Self::Epsilon {
                <$scalar as approx::RelativeEq>::default_max_relative()
            }

            #[inline]
            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let a = self.to_rows_array();
                let b = other.to_rows_array();
                a.iter().zip(b.iter()).all(|(ai, bi)| {
                    <$scalar as approx::RelativeEq>::relative_eq(ai, bi, epsilon, max_relative)
                })
            }
        }

        #[cfg(feature = "approx")]
        impl approx::UlpsEq for $name {
            #[inline]
            fn default_max_ulps() -> u32 {
                <$scalar as approx::UlpsEq>::default_max_ulps()
            }

            #[inline]
            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                let a = self.to_rows_array();
                let b = other.to_rows_array();
                a.iter().zip(b.iter()).all(|(ai, bi)| {
                    <$scalar as approx::UlpsEq>::ulps_eq(ai, bi, epsilon, max_ulps)
                })
            }
        }

        // Matrix-matrix multiplication: entry (i, j) is row(i) . col(j).
        impl std::ops::Mul<$name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                Self(std::array::from_fn(|i| {
                    let row = self.row_vec(i);
                    std::array::from_fn(|j| row.dot(rhs.col_vec(j)))
                }))
            }
        }

        // Matrix-vector multiplication.
        impl std::ops::Mul<$vec_type> for $name {
            type Output = $vec_type;

            #[inline]
            fn mul(self, rhs: $vec_type) -> Self::Output {
                <$vec_type>::from_array(std::array::from_fn(|i| self.row_vec(i).dot(rhs)))
            }
        }

        // Matrix addition
        impl std::ops::Add<$name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: $name) -> Self::Output {
                Self(std::array::from_fn(|i| {
                    std::array::from_fn(|j| self.0[i][j] + rhs.0[i][j])
                }))
            }
        }

        // Matrix subtraction
        impl std::ops::Sub<$name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: $name) -> Self::Output {
                Self(std::array::from_fn(|i| {
                    std::array::from_fn(|j| self.0[i][j] - rhs.0[i][j])
                }))
            }
        }

        impl std::ops::Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> Self::Output {
                Self(self.0.map(|row| row.map(|v| -v)))
            }
        }

        // Scalar multiplication
        impl std::ops::Mul<$scalar> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $scalar) -> Self::Output {
                Self(self.0.map(|row| row.map(|v| v * rhs)))
            }
        }

        // Scalar multiplication (reverse)
        impl std::ops::Mul<$name> for $scalar {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }

        // Matrix addition assignment
        impl std::ops::AddAssign<$name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: $name) {
                *self = *self + rhs;
            }
        }

        // Matrix subtraction assignment
        impl std::ops::SubAssign<$name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: $name) {
                *self = *self - rhs;
            }
        }

        // Matrix multiplication assignment
        impl std::ops::MulAssign<$name> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $name) {
                *self = *self * rhs;
            }
        }

        // Scalar multiplication assignment
        impl std::ops::MulAssign<$scalar> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = *self * rhs;
            }
        }
    };
}
