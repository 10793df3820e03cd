//! Light source values consumed by lit renderables.

use num_traits::Float;

use crate::math::{Color, Point, Scalar, Vector};

/// Uniform illumination applied to every fragment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight<T: Scalar> {
    pub color: Color<T, 4>,
    pub intensity: T,
}

impl<T: Scalar> AmbientLight<T> {
    pub fn new(color: Color<T, 4>, intensity: T) -> Self {
        Self { color, intensity }
    }
}

/// Full-strength white ambience.
impl<T: Scalar> Default for AmbientLight<T> {
    fn default() -> Self {
        Self::new(Color::new([T::one(); 4]), T::one())
    }
}

/// Illumination arriving from one direction, as from a distant sun.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight<T: Scalar> {
    pub color: Color<T, 4>,
    pub direction: Vector<T, 3>,
}

impl<T: Scalar> DirectionalLight<T> {
    pub fn new(color: Color<T, 4>, direction: Vector<T, 3>) -> Self {
        Self { color, direction }
    }
}

/// White light falling straight down.
impl<T: Scalar + Float> Default for DirectionalLight<T> {
    fn default() -> Self {
        Self::new(
            Color::new([T::one(); 4]),
            Vector::new([T::zero(), -T::one(), T::zero()]),
        )
    }
}

/// Illumination radiating from a point in the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedLight<T: Scalar> {
    pub color: Color<T, 4>,
    pub position: Point<T, 3>,
}

impl<T: Scalar> PositionedLight<T> {
    pub fn new(color: Color<T, 4>, position: Point<T, 3>) -> Self {
        Self { color, position }
    }
}
