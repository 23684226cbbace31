//! 3D vector type (single precision).

define_vector_type!(
    /// 3D vector (single precision).
    Vec3F32,
    glam::Vec3,
    f32,
    3,
    [x, y, z]
);

impl Vec3F32 {
    /// Unit vector along the x axis.
    pub const UNIT_X: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector along the y axis.
    pub const UNIT_Y: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Unit vector along the z axis.
    pub const UNIT_Z: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Cross product following the right-hand rule.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
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

    /// Load the unit vector along the z axis.
    #[inline]
    pub fn load_unit_z(&mut self) {
        *self = Self::UNIT_Z;
    }
}

impl std::ops::Index<usize> for Vec3F32 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: Vec3F32 has 3 components but the index is {index}"),
        }
    }
}

impl std::ops::IndexMut<usize> for Vec3F32 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds: Vec3F32 has 3 components but the index is {index}"),
        }
    }
}
