//! Line segments between two points.

use num_traits::Float;

use super::point::Point;
use super::scalar::Scalar;
use super::vector::Vector;

/// A segment from `start` to `end`.
///
/// The two endpoints must be distinct; a line with coincident endpoints
/// has no direction and its construction is a precondition violation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line<T: Scalar, const N: usize> {
    start: Point<T, N>,
    end: Point<T, N>,
}

impl<T: Scalar + Float, const N: usize> Line<T, N> {
    pub fn new(start: Point<T, N>, end: Point<T, N>) -> Self {
        debug_assert!(start != end, "a line requires two distinct points");
        Self { start, end }
    }

    pub fn start(&self) -> &Point<T, N> {
        &self.start
    }

    pub fn end(&self) -> &Point<T, N> {
        &self.end
    }

    /// The unit direction from `start` towards `end`.
    pub fn direction(&self) -> Vector<T, N> {
        self.start.vector_to(&self.end).normalized()
    }

    pub fn length(&self) -> T {
        self.start.distance_from(&self.end)
    }
}

pub type Line2F = Line<f32, 2>;
pub type Line3F = Line<f32, 3>;
pub type Line2D = Line<f64, 2>;
pub type Line3D = Line<f64, 3>;
