//! Tuples with directional semantics: length, normalization, dot and
//! cross products.

use num_traits::Float;

use super::scalar::Scalar;
use super::tuple::{tuple_wrapper, Tuple};

/// A direction and magnitude in `N`-dimensional space.
///
/// `Vector` owns a [`Tuple`] and dereferences to it, so the whole
/// element-wise operator set is available on vectors as well.
#[derive(Clone, Copy, Debug)]
pub struct Vector<T, const N: usize>(Tuple<T, N>);

tuple_wrapper!(Vector);

impl<T: Scalar + Float, const N: usize> Vector<T, N> {
    /// The Euclidean length of this vector.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    /// The squared length. Cheaper than [`length`](Self::length) when only
    /// comparing magnitudes.
    pub fn length_squared(&self) -> T {
        self.0.dot(&self.0)
    }

    /// Scales this vector to unit length in place.
    ///
    /// A zero-length vector has no direction to keep; normalizing one is a
    /// precondition violation.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        debug_assert!(!length.is_zero(), "cannot normalize a zero-length vector");
        self.0 *= T::one() / length;
        self
    }

    /// A unit-length copy of this vector.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// The angle between this vector and `rhs`, in radians.
    pub fn angle_between(&self, rhs: &Self) -> T {
        let mut cos = self.normalized().dot(rhs.normalized().as_tuple());
        // acos is only defined on [-1, 1]; rounding can push the dot
        // product of two unit vectors just outside it.
        if cos > T::one() {
            cos = T::one();
        }
        if cos < -T::one() {
            cos = -T::one();
        }
        cos.acos()
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Replaces this vector with the cross product of itself and `rhs`.
    pub fn cross(&mut self, rhs: &Self) -> &mut Self {
        let [ax, ay, az] = *self.0.as_array();
        let [bx, by, bz] = *rhs.0.as_array();
        self.0.set([
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        ]);
        self
    }
}

/// The dot product of the two provided vectors.
pub fn dot<T: Scalar, const N: usize>(lhs: &Vector<T, N>, rhs: &Vector<T, N>) -> T {
    lhs.as_tuple().dot(rhs.as_tuple())
}

/// The cross product of the two provided vectors.
pub fn cross<T: Scalar>(lhs: &Vector<T, 3>, rhs: &Vector<T, 3>) -> Vector<T, 3> {
    let mut out = *lhs;
    out.cross(rhs);
    out
}

/// The angle between the two provided vectors, in radians.
pub fn angle_between<T: Scalar + Float, const N: usize>(
    lhs: &Vector<T, N>,
    rhs: &Vector<T, N>,
) -> T {
    lhs.angle_between(rhs)
}

pub type Vector2F = Vector<f32, 2>;
pub type Vector3F = Vector<f32, 3>;
pub type Vector4F = Vector<f32, 4>;

pub type Vector2D = Vector<f64, 2>;
pub type Vector3D = Vector<f64, 3>;
pub type Vector4D = Vector<f64, 4>;

pub type Vector2I = Vector<i32, 2>;
pub type Vector3I = Vector<i32, 3>;
pub type Vector4I = Vector<i32, 4>;
