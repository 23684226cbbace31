//! 2x2 matrix (single precision).

use crate::Vec2F32;

define_matrix_type!(
    /// 2x2 matrix (single precision), stored row-major.
    Mat2F32,
    glam::Mat2,
    f32,
    Vec2F32,
    2,
    [first, second]
);

impl Mat2F32 {
    /// Get the determinant of the matrix, `m00 * m11 - m01 * m10`.
    #[inline]
    pub fn determinant(self) -> f32 {
        let [[m00, m01], [m10, m11]] = self.0;
        m00 * m11 - m01 * m10
    }

    /// Get the inverse of the matrix.
    ///
    /// A singular matrix (zero determinant) yields [`Mat2F32::ZERO`].
    pub fn inverse(self) -> Self {
        let det = self.determinant();
        if det == 0.0 {
            log::trace!("Mat2F32::inverse: singular matrix, returning zero");
            return Self::ZERO;
        }
        let inv_det = 1.0 / det;
        let [[m00, m01], [m10, m11]] = self.0;
        Self([
            [inv_det * m11, -inv_det * m01],
            [-inv_det * m10, inv_det * m00],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlgebraError;
    #[cfg(feature = "approx")]
    use approx::assert_relative_eq;

    #[test]
    fn test_mat2f32_default() {
        assert_eq!(Mat2F32::default(), Mat2F32::ZERO);
        assert_eq!(Mat2F32::ZERO.to_rows_array(), [0.0; 4]);
        assert_eq!(Mat2F32::IDENTITY.to_rows_array(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_mat2f32_from_rows_array() {
        let m = Mat2F32::from_rows_array(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row(0), Ok(Vec2F32::new(1.0, 2.0)));
        assert_eq!(m.row(1), Ok(Vec2F32::new(3.0, 4.0)));
        assert_eq!(m.to_rows_array_2d(), [[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(Mat2F32::from_rows_array_2d(&[[1.0, 2.0], [3.0, 4.0]]), m);
    }

    #[test]
    fn test_mat2f32_from_rows_cols() {
        let a = Vec2F32::new(1.0, 2.0);
        let b = Vec2F32::new(3.0, 4.0);
        let rows = Mat2F32::from_rows(a, b);
        let cols = Mat2F32::from_cols(a, b);
        assert_eq!(rows.col(0), Ok(Vec2F32::new(1.0, 3.0)));
        assert_eq!(cols.col(0), Ok(a));
        assert_eq!(cols.col(1), Ok(b));
        assert_eq!(cols, rows.transpose());
    }

    #[test]
    fn test_mat2f32_from_rows_slice() {
        let m = Mat2F32::from_rows_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(m.to_rows_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Mat2F32::from_rows_slice(&[1.0, 2.0, 3.0]), Mat2F32::ZERO);
        assert_eq!(
            Mat2F32::try_from_rows_slice(&[1.0, 2.0, 3.0]),
            Err(AlgebraError::InsufficientElements {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_mat2f32_from_nested() {
        let rows: Vec<Vec<f32>> = vec![vec![1.0, 2.0, 9.0], vec![3.0, 4.0]];
        let m = Mat2F32::from_nested(&rows);
        assert_eq!(m.to_rows_array_2d(), [[1.0, 2.0], [3.0, 4.0]]);

        let short_row: Vec<Vec<f32>> = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(Mat2F32::from_nested(&short_row), Mat2F32::ZERO);
        assert_eq!(
            Mat2F32::try_from_nested(&short_row),
            Err(AlgebraError::ShortRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );

        let one_row: [[f32; 2]; 1] = [[1.0, 2.0]];
        assert_eq!(
            Mat2F32::try_from_nested(&one_row),
            Err(AlgebraError::InsufficientRows {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_mat2f32_accessors() {
        let mut m = Mat2F32::ZERO;
        m.set_at(0, 1, 5.0).unwrap();
        assert_eq!(m.at(0, 1), Ok(5.0));
        assert_eq!(m[(0, 1)], 5.0);

        assert_eq!(
            m.at(2, 0),
            Err(AlgebraError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            m.set_at(0, 2, 1.0),
            Err(AlgebraError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(m.to_rows_array(), [0.0, 5.0, 0.0, 0.0]);

        m.set_row(1, Vec2F32::new(7.0, 8.0)).unwrap();
        assert_eq!(m.to_rows_array(), [0.0, 5.0, 7.0, 8.0]);
        m.set_col(0, Vec2F32::new(-1.0, -2.0)).unwrap();
        assert_eq!(m.to_rows_array(), [-1.0, 5.0, -2.0, 8.0]);

        assert!(m.set_row(2, Vec2F32::ZERO).is_err());
        assert!(m.set_col(2, Vec2F32::ZERO).is_err());
        assert!(m.row(2).is_err());
        assert!(m.col(2).is_err());
        assert_eq!(m.to_rows_array(), [-1.0, 5.0, -2.0, 8.0]);

        m[(1, 1)] = 0.5;
        assert_eq!(m.at(1, 1), Ok(0.5));
    }

    #[test]
    #[should_panic]
    fn test_mat2f32_index_out_of_bounds() {
        let m = Mat2F32::IDENTITY;
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_mat2f32_mul_vec2() {
        let m = Mat2F32::from_rows_array(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m * Vec2F32::new(1.0, 1.0), Vec2F32::new(3.0, 7.0));
        assert_eq!(Mat2F32::IDENTITY * Vec2F32::new(1.0, 2.0), Vec2F32::new(1.0, 2.0));
    }

    #[test]
    fn test_mat2f32_mul_mat2() {
        let a = Mat2F32::from_rows_array(&[1.0, 2.0, 3.0, 4.0]);
        let b = Mat2F32::from_rows_array(&[5.0, 6.0, 7.0, 8.0]);
        assert_eq!((a * b).to_rows_array(), [19.0, 22.0, 43.0, 50.0]);
        assert_eq!((b * a).to_rows_array(), [23.0, 34.0, 31.0, 46.0]);
        assert_eq!(a * Mat2F32::IDENTITY, a);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn test_mat2f32_componentwise() {
        let a = Mat2F32::from_rows_array(&[1.0, 2.0, 3.0, 4.0]);
        let b = Mat2F32::from_rows_array(&[4.0, 3.0, 2.0, 1.0]);
        assert_eq!((a + b).to_rows_array(), [5.0; 4]);
        assert_eq!((a - b).to_rows_array(), [-3.0, -1.0, 1.0, 3.0]);
        assert_eq!((-a).to_rows_array(), [-1.0, -2.0, -3.0, -4.0]);
        assert_eq!((a * 2.0).to_rows_array(), [2.0, 4.0, 6.0, 8.0]);
        assert_eq!(2.0 * a, a * 2.0);

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= 0.5;
        assert_eq!(c.to_rows_array(), [0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn test_mat2f32_transpose() {
        let m = Mat2F32::from_rows_array(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.transpose().to_rows_array(), [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_mat2f32_determinant_trace() {
        let m = Mat2F32::from_rows_array(&[1.0, 2.0, 3.0, 4.0]);
        // det = 1*4 - 2*3 = -2
        assert_eq!(m.determinant(), -2.0);
        assert_eq!(m.trace(), 5.0);
        assert_eq!(Mat2F32::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2F32::ZERO.determinant(), 0.0);
    }

    #[test]
    fn test_mat2f32_inverse() {
        let m = Mat2F32::from_rows_array(&[1.0, 0.0, 0.0, 2.0]); // diagonal matrix
        assert_eq!(m.inverse().to_rows_array(), [1.0, 0.0, 0.0, 0.5]);

        // determinant 4, so every entry of the inverse is exact
        let m = Mat2F32::from_rows_array(&[2.0, 2.0, -1.0, 1.0]);
        assert_eq!(m.inverse().to_rows_array(), [0.25, -0.5, 0.25, 0.5]);
        assert_eq!(m * m.inverse(), Mat2F32::IDENTITY);
    }

    #[cfg(feature = "approx")]
    #[test]
    fn test_mat2f32_inverse_approx() {
        let m = Mat2F32::from_rows_array(&[4.0, 7.0, 2.0, 6.0]);
        assert_relative_eq!(m * m.inverse(), Mat2F32::IDENTITY, epsilon = 1e-6);
        assert_relative_eq!(m.inverse() * m, Mat2F32::IDENTITY, epsilon = 1e-6);
    }

    #[test]
    fn test_mat2f32_inverse_singular() {
        let m = Mat2F32::from_rows_array(&[1.0, 2.0, 2.0, 4.0]);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.inverse(), Mat2F32::ZERO);
        assert_eq!(Mat2F32::ZERO.inverse(), Mat2F32::ZERO);
    }

    #[test]
    fn test_mat2f32_load() {
        let mut m = Mat2F32::from_rows_array(&[1.0, 2.0, 3.0, 4.0]);
        m.load_identity();
        assert_eq!(m, Mat2F32::IDENTITY);
        m.load_zero();
        assert_eq!(m, Mat2F32::ZERO);
    }

    #[test]
    fn test_mat2f32_diagonal_finite() {
        let m = Mat2F32::from_diagonal(Vec2F32::new(2.0, 3.0));
        assert_eq!(m.to_rows_array(), [2.0, 0.0, 0.0, 3.0]);
        assert!(m.is_finite());
        assert!(!(m * f32::INFINITY).is_finite());
    }

    #[test]
    fn test_mat2f32_conversions() {
        let m = Mat2F32::from_rows_array(&[1.0, 2.0, 3.0, 4.0]);

        let m_glam: glam::Mat2 = m.into();
        // glam stores columns
        assert_eq!(m_glam.x_axis, glam::Vec2::new(1.0, 3.0));
        assert_eq!(m_glam.y_axis, glam::Vec2::new(2.0, 4.0));
        assert_eq!(
            m_glam * glam::Vec2::new(1.0, 1.0),
            glam::Vec2::from(m * Vec2F32::new(1.0, 1.0))
        );

        let m_back: Mat2F32 = m_glam.into();
        assert_eq!(m_back, m);

        let arr: [[f32; 2]; 2] = m.into();
        assert_eq!(Mat2F32::from(arr), m);
    }
}
