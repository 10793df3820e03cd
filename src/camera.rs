//! The camera value threaded through scene-graph rendering.
//!
//! A [`Camera`] is a plain value: transform nodes clone it, mutate the
//! clone and hand the clone to their children, so a transform applied in
//! one subtree can never leak into a sibling or back to the parent.

use num_traits::Float;

use crate::math::{Matrix, Point, Quaternion, Scalar, Vector};

/// Accumulated view state: a position plus orientation and projection
/// matrices.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera<T: Scalar> {
    position: Point<T, 3>,
    orientation: Matrix<T, 4, 4>,
    projection: Matrix<T, 4, 4>,
}

impl<T: Scalar + Float> Camera<T> {
    /// A camera at the origin, looking down the untransformed axes,
    /// projecting through `projection`.
    pub fn new(projection: Matrix<T, 4, 4>) -> Self {
        Self {
            position: Point::default(),
            orientation: Matrix::identity(),
            projection,
        }
    }

    pub fn position(&self) -> &Point<T, 3> {
        &self.position
    }

    pub fn orientation(&self) -> &Matrix<T, 4, 4> {
        &self.orientation
    }

    pub fn projection(&self) -> &Matrix<T, 4, 4> {
        &self.projection
    }

    /// Moves this camera along `direction`.
    pub fn translate(&mut self, direction: &Vector<T, 3>) -> &mut Self {
        *self.position += *direction.as_tuple();
        self
    }

    /// Composes `rotation` with this camera's orientation.
    pub fn rotate(&mut self, rotation: &Quaternion<T>) -> &mut Self {
        self.orientation = Matrix::from(*rotation) * self.orientation;
        self
    }
}

/// An identity projection; useful as a neutral starting state.
impl<T: Scalar + Float> Default for Camera<T> {
    fn default() -> Self {
        Self::new(Matrix::identity())
    }
}

pub type CameraF = Camera<f32>;
pub type CameraD = Camera<f64>;
