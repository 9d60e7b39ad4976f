mod ops;
mod view;

use std::fmt;

use crate::{vec3, vec4, CastFrom, Components, Mat3, Matrix, Number, One, Real, Sqrt, Trig, Vec3, Vector, Zero};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component. Multiplication is the Hamilton product: `a * b` is the combined rotation that
/// applies `b` first and then `a`.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts,
    /// while the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: [x, y, z, w].into(),
        }
    }

    /// Returns the components of this quaternion as a 4-dimensional [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    fn one_half() -> T
    where
        T: Number,
    {
        T::ONE / (T::ONE + T::ONE)
    }

    /// Creates a quaternion representing a rotation around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion representing a rotation around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion representing a rotation around the X, Y, and Z axis, in sequence
    /// (the X rotation is applied first).
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_z(z) * Self::from_rotation_y(y) * Self::from_rotation_x(x)
    }

    /// Creates a quaternion representing a rotation of `radians` around `axis`.
    ///
    /// `axis` does not need to be normalized, but it must be non-zero for the result to be
    /// meaningful.
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self
    where
        T: Real,
    {
        let axis = axis.normalize();
        let (sin, cos) = (radians * Self::one_half()).sin_cos();
        Self::from_components(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    /// Returns the rotation axis and angle (in radians) this quaternion represents.
    ///
    /// The angle is in the range `[0, TAU]`. For a rotation by (close to) zero the axis is
    /// arbitrary, and the X axis is returned.
    pub fn to_axis_angle(self) -> (Vec3<T>, T)
    where
        T: Real,
    {
        let q = self.normalize();
        let two = T::ONE + T::ONE;
        let angle = q.w.clamp(-T::ONE, T::ONE).acos() * two;
        let sin = (T::ONE - q.w * q.w).sqrt();
        if sin <= T::EPSILON {
            (Vec3::X, angle)
        } else {
            (vec3(q.x, q.y, q.z) / sin, angle)
        }
    }

    /// Computes the dot product of the components of `self` and `other`.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the conjugate of this quaternion (all imaginary parts negated).
    ///
    /// For unit quaternions, the conjugate represents the inverse rotation.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// The zero quaternion has no meaningful direction; it is returned unchanged.
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt + PartialOrd,
    {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Converts each component to a different precision, returning a new quaternion.
    pub fn cast<U: CastFrom<T>>(self) -> Quat<U> {
        Quat {
            vec: self.vec.cast(),
        }
    }

    /// Converts this quaternion to the equivalent 3x3 rotation matrix.
    ///
    /// The quaternion is normalized first, so non-unit quaternions are accepted and yield the
    /// same rotation as their normalized form. The result is undefined for the zero quaternion.
    pub fn to_mat3(self) -> Mat3<T>
    where
        T: Real,
    {
        let q = self.normalize();
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let two = T::ONE + T::ONE;

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix::from_rows([
            [T::ONE - two * (yy + zz), two * (xy + wz), two * (xz - wy)],
            [two * (xy - wz), T::ONE - two * (xx + zz), two * (yz + wx)],
            [two * (xz + wy), two * (yz - wx), T::ONE - two * (xx + yy)],
        ])
    }
}

impl<T: Copy> Components<4> for Quat<T> {
    type Elem = T;

    fn components(self) -> [T; 4] {
        self.vec.into_array()
    }

    fn from_components(components: [T; 4]) -> Self {
        Self {
            vec: components.into(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quat{:?}", self.vec)
    }
}
