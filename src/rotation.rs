//! Alternate rotation representations.
//!
//! [`Quat`] is the canonical rotation type; everything here either wraps it nominally or
//! converts to it. [`Rotation3`] and [`Orientation3`] are type-level distinctions only: a
//! *rotation* is a relative change, an *orientation* is an absolute pose, and keeping them apart
//! in signatures prevents accidentally mixing the two. [`AxisAngle`] and [`EulerAngles`] are
//! alternate parameterizations that convert to a [`Quat`] (and through it to a matrix).

use crate::{Angle, CastFrom, Mat4, Quat, Real, Vec3};

/// A 3D rotation with [`f32`] precision.
pub type Rotation3f = Rotation3<f32>;
/// A 3D rotation with [`f64`] precision.
pub type Rotation3d = Rotation3<f64>;
/// A 3D orientation with [`f32`] precision.
pub type Orientation3f = Orientation3<f32>;
/// A 3D orientation with [`f64`] precision.
pub type Orientation3d = Orientation3<f64>;

macro_rules! quat_wrapper {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, PartialEq, Hash, Debug)]
        #[repr(transparent)]
        pub struct $name<T>(Quat<T>);

        impl<T> $name<T> {
            #[inline]
            pub fn new(quat: Quat<T>) -> Self {
                Self(quat)
            }

            /// Returns the underlying quaternion.
            #[inline]
            pub fn quat(self) -> Quat<T> {
                self.0
            }

            /// Converts the underlying quaternion to a different precision.
            pub fn cast<U: CastFrom<T>>(self) -> $name<U> {
                $name(self.0.cast())
            }

            /// Converts to the equivalent homogeneous transform matrix (zero translation).
            pub fn to_mat4(self) -> Mat4<T>
            where
                T: Real,
            {
                Mat4::from_rotation(self.0)
            }
        }

        impl<T: crate::Zero + crate::One> $name<T> {
            pub const IDENTITY: Self = Self(Quat::IDENTITY);
        }

        impl<T> From<Quat<T>> for $name<T> {
            fn from(quat: Quat<T>) -> Self {
                Self(quat)
            }
        }

        impl<T> From<$name<T>> for Quat<T> {
            fn from(value: $name<T>) -> Self {
                value.0
            }
        }
    };
}

quat_wrapper! {
    /// A rotation in 3D space: a *relative* change of orientation.
    Rotation3
}

quat_wrapper! {
    /// An orientation in 3D space: an *absolute* pose, reached by rotating from the reference
    /// orientation.
    Orientation3
}

/// A rotation expressed as a (unit) axis and an angle around it.
#[derive(Clone, Copy, PartialEq, Hash, Debug)]
pub struct AxisAngle<T> {
    pub axis: Vec3<T>,
    pub angle: Angle<T>,
}

impl<T> AxisAngle<T> {
    pub fn new(axis: Vec3<T>, angle: Angle<T>) -> Self {
        Self { axis, angle }
    }

    /// Converts to the equivalent quaternion. The axis is normalized on the way.
    pub fn to_quat(self) -> Quat<T>
    where
        T: Real,
    {
        Quat::from_axis_angle(self.axis, self.angle.value())
    }

    /// Converts to the equivalent homogeneous transform matrix (zero translation).
    pub fn to_mat4(self) -> Mat4<T>
    where
        T: Real,
    {
        Mat4::from_rotation(self.to_quat())
    }

    /// Extracts axis and angle from a quaternion.
    ///
    /// The returned angle is in `[0, TAU]`; a (near) zero rotation has an arbitrary axis.
    pub fn from_quat(quat: Quat<T>) -> Self
    where
        T: Real,
    {
        let (axis, radians) = quat.to_axis_angle();
        Self {
            axis,
            angle: Angle::new(radians),
        }
    }

    pub fn cast<U: CastFrom<T>>(self) -> AxisAngle<U> {
        AxisAngle {
            axis: self.axis.cast(),
            angle: self.angle.cast(),
        }
    }
}

/// A rotation expressed as successive rotations around the X, Y, and Z axes (applied in that
/// order).
#[derive(Clone, Copy, PartialEq, Hash, Debug)]
pub struct EulerAngles<T> {
    pub x: Angle<T>,
    pub y: Angle<T>,
    pub z: Angle<T>,
}

impl<T> EulerAngles<T> {
    pub fn new(x: Angle<T>, y: Angle<T>, z: Angle<T>) -> Self {
        Self { x, y, z }
    }

    /// Converts to the equivalent quaternion.
    pub fn to_quat(self) -> Quat<T>
    where
        T: Real,
    {
        Quat::from_rotation_xyz(self.x.value(), self.y.value(), self.z.value())
    }

    /// Converts to the equivalent homogeneous transform matrix (zero translation).
    pub fn to_mat4(self) -> Mat4<T>
    where
        T: Real,
    {
        Mat4::from_rotation(self.to_quat())
    }

    pub fn cast<U: CastFrom<T>>(self) -> EulerAngles<U> {
        EulerAngles {
            x: self.x.cast(),
            y: self.y.cast(),
            z: self.z.cast(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use crate::{assert_approx_eq, vec3, Mat4d, Quatd, Vec3d};

    use super::*;

    #[test]
    fn nominal_wrappers_share_representation() {
        let q = Quat::from_rotation_z(1.0);
        let rotation = Rotation3::new(q);
        let orientation = Orientation3::new(q);
        assert_eq!(rotation.quat(), orientation.quat());
        assert_eq!(rotation.to_mat4(), orientation.to_mat4());

        assert_eq!(Rotation3d::IDENTITY.to_mat4(), Mat4d::IDENTITY);
        assert_eq!(Quatd::from(Rotation3d::IDENTITY), Quatd::IDENTITY);
    }

    #[test]
    fn axis_angle_round_trip() {
        let original = AxisAngle::new(vec3(0.0, 0.0, 1.0), Angle::new(TAU / 4.0));
        let back = AxisAngle::from_quat(original.to_quat());
        assert_approx_eq!(back.axis, original.axis).abs(1e-12);
        assert_approx_eq!(back.angle, original.angle).abs(1e-12);

        // Axis-angle and quaternion yield the same matrix.
        assert_approx_eq!(
            original.to_mat4(),
            Mat4d::from_rotation(Quat::from_rotation_z(TAU / 4.0))
        )
        .abs(1e-12);
    }

    #[test]
    fn euler_angles_match_quaternion_sequence() {
        let euler = EulerAngles::new(Angle::new(0.3), Angle::new(-0.8), Angle::new(1.6));
        let expected = Quat::from_rotation_xyz(0.3, -0.8, 1.6);
        assert_approx_eq!(euler.to_quat().into_vec(), expected.into_vec());

        // A single-axis Euler rotation behaves like the plain axis rotation.
        let euler = EulerAngles::new(Angle::new(TAU / 4.0), Angle::ZERO, Angle::ZERO);
        assert_approx_eq!(euler.to_mat4().transform_vector(Vec3d::Y), Vec3d::Z).abs(1e-12);
    }

    #[test]
    fn precision_cast() {
        let rotation = Rotation3::new(Quat::from_rotation_y(0.5f64));
        let narrow: Rotation3f = rotation.cast();
        assert_approx_eq!(narrow.quat().into_vec()[3], (0.25f64).cos() as f32).abs(1e-6);

        let axis_angle = AxisAngle::new(vec3(1.0f64, 0.0, 0.0), Angle::new(1.0));
        assert_eq!(axis_angle.cast::<f32>().angle.value(), 1.0f32);
    }
}
