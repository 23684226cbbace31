//! 2D vector type (single precision).

define_vector_type!(
    /// 2D vector (single precision).
    Vec2F32,
    glam::Vec2,
    f32,
    2,
    [x, y]
);

impl Vec2F32 {
    /// Unit vector along the x axis.
    pub const UNIT_X: Self = Self { x: 1.0, y: 0.0 };

    /// Unit vector along the y axis.
    pub const UNIT_Y: Self = Self { x: 0.0, y: 1.0 };

    /// Scalar cross product, the z component of `(self, 0) x (rhs, 0)`.
    #[inline]
    pub fn cross(self, rhs: Self) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Load the unit vector along the x axis.
    #[inline]
    pub fn load_unit_x(&mut self) {
        *self = Self::UNIT_X;
    }

    /// Load the unit vector along the y axis.
    #[inline]
    pub fn load_unit_y(&mut self) {
        *self = Self::UNIT_Y;
    }
}

impl std::ops::Index<usize> for Vec2F32 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds: Vec2F32 has 2 components but the index is {index}"),
        }
    }
}

impl std::ops::IndexMut<usize> for Vec2F32 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds: Vec2F32 has 2 components but the index is {index}"),
        }
    }
}
