//! Tuples with positional semantics: distances and point-to-point vectors.

use num_traits::Float;

use super::scalar::Scalar;
use super::tuple::{tuple_wrapper, Tuple};
use super::vector::Vector;

/// A position in `N`-dimensional space.
#[derive(Clone, Copy, Debug)]
pub struct Point<T, const N: usize>(Tuple<T, N>);

tuple_wrapper!(Point);

impl<T: Scalar + Float, const N: usize> Point<T, N> {
    /// The linear distance between this point and `rhs`.
    pub fn distance_from(&self, rhs: &Self) -> T {
        self.vector_to(rhs).length()
    }

    /// The vector that carries this point onto `target`.
    pub fn vector_to(&self, target: &Self) -> Vector<T, N> {
        Vector::from(target.0 - self.0)
    }
}

/// The linear distance between the two provided points.
///
/// Agrees exactly with [`Point::distance_from`].
pub fn distance_between<T: Scalar + Float, const N: usize>(
    lhs: &Point<T, N>,
    rhs: &Point<T, N>,
) -> T {
    lhs.distance_from(rhs)
}

pub type Point2F = Point<f32, 2>;
pub type Point3F = Point<f32, 3>;
pub type Point4F = Point<f32, 4>;

pub type Point2D = Point<f64, 2>;
pub type Point3D = Point<f64, 3>;
pub type Point4D = Point<f64, 4>;

pub type Point2I = Point<i32, 2>;
pub type Point3I = Point<i32, 3>;
pub type Point4I = Point<i32, 4>;
