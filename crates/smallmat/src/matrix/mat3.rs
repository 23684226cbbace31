//! 3x3 matrix (single precision).

use crate::Vec3F32;

define_matrix_type!(
    /// 3x3 matrix (single precision), stored row-major.
    Mat3F32,
    glam::Mat3,
    f32,
    Vec3F32,
    3,
    [first, second, third]
);

impl Mat3F32 {
    /// Get the determinant of the matrix.
    ///
    /// Computed by cofactor expansion along the first row:
    ///
    /// `m00 * (m11 * m22 - m12 * m21) + m01 * (m12 * m20 - m10 * m22) + m02 * (m10 * m21 - m11 * m20)`
    #[inline]
    pub fn determinant(self) -> f32 {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.0;
        m00 * (m11 * m22 - m12 * m21)
            + m01 * (m12 * m20 - m10 * m22)
            + m02 * (m10 * m21 - m11 * m20)
    }

    /// Get the inverse of the matrix as the adjugate scaled by `1 / det`.
    ///
    /// A singular matrix (zero determinant) yields [`Mat3F32::ZERO`].
    pub fn inverse(self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            log::trace!("Mat3F32::inverse: singular matrix, returning zero");
            return Self::ZERO;
        }
        let inv_det = 1.0 / det;
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.0;

        // transpose of the cofactor matrix
        Self([
            [
                inv_det * (m11 * m22 - m12 * m21),
                inv_det * (m02 * m21 - m01 * m22),
                inv_det * (m01 * m12 - m02 * m11),
            ],
            [
                inv_det * (m12 * m20 - m10 * m22),
                inv_det * (m00 * m22 - m02 * m20),
                inv_det * (m02 * m10 - m00 * m12),
            ],
            [
                inv_det * (m10 * m21 - m11 * m20),
                inv_det * (m01 * m20 - m00 * m21),
                inv_det * (m00 * m11 - m01 * m10),
            ],
        ])
    }
}
