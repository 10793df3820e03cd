//! Axis-angle rotations.
//!
//! A [`Quaternion`] encodes a rotation about an arbitrary axis. Rotations
//! compose through multiplication (the Hamilton product), which is
//! associative but not commutative, and convert explicitly into a 4×4
//! rotation [`Matrix`]. The conversion uses the axis as stored; callers
//! who need exact results normalize first.

use num_traits::Float;

use super::angle::{Degrees, Radians};
use super::matrix::Matrix;
use super::scalar::Scalar;
use super::vector::Vector;

#[derive(Clone, Copy, Debug)]
pub struct Quaternion<T> {
    /// The axis about which to rotate.
    axis: Vector<T, 3>,
    /// The angle by which to rotate.
    angle: Radians<T>,
}

impl<T: Scalar + Float> Quaternion<T> {
    /// Constructs a Quaternion from the provided axis and angle.
    pub fn new(axis: Vector<T, 3>, angle: Radians<T>) -> Self {
        Self { axis, angle }
    }

    /// Constructs a Quaternion from the provided axis and an angle in
    /// degrees.
    pub fn from_degrees(axis: Vector<T, 3>, angle: Degrees<T>) -> Self {
        Self::new(axis, angle.to_radians())
    }

    /// The identity rotation: a zero angle about the unit X axis.
    pub fn identity() -> Self {
        Self::new(
            Vector::new([T::one(), T::zero(), T::zero()]),
            Radians::new(T::zero()),
        )
    }

    pub fn axis(&self) -> &Vector<T, 3> {
        &self.axis
    }

    pub fn angle(&self) -> Radians<T> {
        self.angle
    }

    /// The equivalent `(w, x, y, z)` representation: `w` is the cosine of
    /// the half-angle and `(x, y, z)` the axis scaled by its sine.
    fn components(&self) -> [T; 4] {
        let two = T::one() + T::one();
        let (sin, cos) = (self.angle.value() / two).sin_cos();
        [cos, self.axis[0] * sin, self.axis[1] * sin, self.axis[2] * sin]
    }

    fn from_components([w, x, y, z]: [T; 4]) -> Self {
        let mut w = w;
        if w > T::one() {
            w = T::one();
        }
        if w < -T::one() {
            w = -T::one();
        }
        let two = T::one() + T::one();
        let half = w.acos();
        let sin = half.sin();
        if sin.approx_eq(T::zero()) {
            // No resolvable axis at a zero (or full-turn) rotation.
            return Self::new(
                Vector::new([T::one(), T::zero(), T::zero()]),
                Radians::new(two * half),
            );
        }
        Self::new(
            Vector::new([x / sin, y / sin, z / sin]),
            Radians::new(two * half),
        )
    }

    /// Rescales the equivalent four-component representation to unit
    /// length, in place. The input must not be degenerate (all-zero).
    pub fn normalize(&mut self) -> &mut Self {
        let [w, x, y, z] = self.components();
        let norm = (w * w + x * x + y * y + z * z).sqrt();
        debug_assert!(!norm.is_zero(), "cannot normalize a zero quaternion");
        *self = Self::from_components([w / norm, x / norm, y / norm, z / norm]);
        self
    }
}

impl<T: Scalar + Float> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar + Float> PartialEq for Quaternion<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.axis == rhs.axis && self.angle == rhs.angle
    }
}

/// Hamilton product. Composes `rhs`'s rotation with this one.
impl<T: Scalar + Float> std::ops::MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        let [lw, lx, ly, lz] = self.components();
        let [rw, rx, ry, rz] = rhs.components();
        *self = Self::from_components([
            lw * rw - lx * rx - ly * ry - lz * rz,
            lw * rx + lx * rw + ly * rz - lz * ry,
            lw * ry - lx * rz + ly * rw + lz * rx,
            lw * rz + lx * ry - ly * rx + lz * rw,
        ]);
    }
}

impl<T: Scalar + Float> std::ops::Mul for Quaternion<T> {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

/// The rotation matrix equivalent to the provided Quaternion.
///
/// Built from the stored axis as-is; a non-unit axis yields a skewed
/// matrix.
impl<T: Scalar + Float> From<Quaternion<T>> for Matrix<T, 4, 4> {
    fn from(quaternion: Quaternion<T>) -> Self {
        let [w, x, y, z] = quaternion.components();
        let one = T::one();
        let two = one + one;
        let zero = T::zero();
        Matrix::new([
            [
                one - two * (y * y + z * z),
                two * (x * y - w * z),
                two * (x * z + w * y),
                zero,
            ],
            [
                two * (x * y + w * z),
                one - two * (x * x + z * z),
                two * (y * z - w * x),
                zero,
            ],
            [
                two * (x * z - w * y),
                two * (y * z + w * x),
                one - two * (x * x + y * y),
                zero,
            ],
            [zero, zero, zero, one],
        ])
    }
}

pub type QuaternionF = Quaternion<f32>;
pub type QuaternionD = Quaternion<f64>;
