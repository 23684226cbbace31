//! Macro to define a vector type.
//!
//! The generated types are plain `Copy` structs with public components. All
//! arithmetic is evaluated component by component in single precision, in the
//! order the components are listed, so results are reproducible bit for bit.
//!
//! # Arguments
//!
//! * `name` - The name of the vector type.
//! * `glam_type` - The `glam` type used for interop conversions.
//! * `scalar` - The scalar type.
//! * `dim` - The number of components.
//! * `fields` - The fields of the vector.
//!
macro_rules! define_vector_type {
    ($(#[$meta:meta])* $name:ident, $glam_type:ty, $scalar:ty, $dim:literal, [$($field:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default)]
        pub struct $name {
            $(
            #[doc = concat!("The `", stringify!($field), "` component.")]
            pub $field: $scalar
            ),+
        }

        impl $name {
            /// Number of components.
            pub const DIM: usize = $dim;

            /// Zero vector.
            pub const ZERO: Self = Self {
                $($field: 0.0 as $scalar),+
            };

            /// Create a new vector from its components.
            #[inline]
            pub fn new($($field: $scalar),+) -> Self {
                Self { $($field),+ }
            }

            /// Create a vector from an array.
            #[inline]
            pub fn from_array(arr: [$scalar; $dim]) -> Self {
                let [$($field),+] = arr;
                Self { $($field),+ }
            }

            /// Convert the vector to an array.
            #[inline]
            pub fn to_array(self) -> [$scalar; $dim] {
                [$(self.$field),+]
            }

            /// Create a vector from the leading elements of a slice.
            ///
            /// Elements past the vector dimension are ignored.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::InsufficientElements`](crate::AlgebraError) if the
            /// slice is shorter than the vector dimension.
            pub fn try_from_slice(data: &[$scalar]) -> Result<Self, $crate::AlgebraError> {
                if data.len() < $dim {
                    return Err($crate::AlgebraError::InsufficientElements {
                        expected: $dim,
                        actual: data.len(),
                    });
                }
                let mut arr = [0.0 as $scalar; $dim];
                arr.copy_from_slice(&data[..$dim]);
                Ok(Self::from_array(arr))
            }

            /// Create a vector from the leading elements of a slice, or the zero
            /// vector if the slice is too short.
            pub fn from_slice(data: &[$scalar]) -> Self {
                Self::try_from_slice(data).unwrap_or_else(|err| {
                    log::debug!("{}::from_slice: {err}; using the zero vector", stringify!($name));
                    Self::ZERO
                })
            }

            /// Get the component at `index`.
            ///
            /// # Errors
            ///
            /// Returns [`AlgebraError::IndexOutOfRange`](crate::AlgebraError) if `index`
            /// is not a valid component index.
            #[inline]
            pub fn get(&self, index: usize) -> Result<$scalar, $crate::AlgebraError> {
                $crate::AlgebraError::check_index(index, $dim)?;
                Ok(self.to_array()[index])
            }

            /// Dot product between two vectors.
            ///
            /// The products are accumulated left to right starting from the first
            /// component.
            #[inline]
            pub fn dot(self, rhs: Self) -> $scalar {
                let a = self.to_array();
                let b = rhs.to_array();
                (1..$dim).fold(a[0] * b[0], |acc, i| acc + a[i] * b[i])
            }

            /// Euclidean length (magnitude) of the vector.
            #[inline]
            pub fn magnitude(self) -> $scalar {
                self.dot(self).sqrt()
            }

            /// Unit vector in the direction of `self`.
            ///
            /// Returns the zero vector when the magnitude is zero.
            #[inline]
            pub fn unit(self) -> Self {
                let magnitude = self.magnitude();
                if magnitude == 0.0 {
                    return Self::ZERO;
                }
                self * (1.0 / magnitude)
            }

            /// Set every component to zero.
            #[inline]
            pub fn load_zero(&mut self) {
                *self = Self::ZERO;
            }
        }

        // Conversions to and from glam.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(v: $glam_type) -> Self {
                Self {
                    $($field: v.$field),+
                }
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(v: $name) -> Self {
                <$glam_type>::new($(v.$field),+)
            }
        }

        // Conversions to and from arrays.
        impl From<[$scalar; $dim]> for $name {
            #[inline]
            fn from(arr: [$scalar; $dim]) -> Self {
                Self::from_array(arr)
            }
        }

        impl From<$name> for [$scalar; $dim] {
            #[inline]
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }

        impl TryFrom<&[$scalar]> for $name {
            type Error = $crate::AlgebraError;

            #[inline]
            fn try_from(data: &[$scalar]) -> Result<Self, Self::Error> {
                Self::try_from_slice(data)
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
                let a = self.to_array();
                let b = other.to_array();
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
                let a = self.to_array();
                let b = other.to_array();
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
                let a = self.to_array();
                let b = other.to_array();
                a.iter().zip(b.iter()).all(|(ai, bi)| {
                    <$scalar as approx::UlpsEq>::ulps_eq(ai, bi, epsilon, max_ulps)
                })
            }
        }

        // Componentwise arithmetic.
        impl std::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl std::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl std::ops::Mul<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $scalar) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl std::ops::Mul<$name> for $scalar {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }

        // Division scales by the reciprocal, so `v / 0.0` yields infinities or NaNs.
        impl std::ops::Div<$scalar> for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $scalar) -> Self::Output {
                self * (1.0 / rhs)
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<$scalar> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: $scalar) {
                *self = *self * rhs;
            }
        }

        impl std::ops::DivAssign<$scalar> for $name {
            #[inline]
            fn div_assign(&mut self, rhs: $scalar) {
                *self = *self / rhs;
            }
        }
    };
}
