//! Unit-tagged angles.
//!
//! [`Degrees`] and [`Radians`] wrap a raw scalar together with its unit.
//! A raw scalar only enters an angle at construction and only leaves it
//! through [`Degrees::value`]/[`Radians::value`], which report the scalar
//! in the angle's own unit. Converting between units is always the
//! explicit, named operation. Nothing here converts silently, so a
//! degree value can never be mistaken for a radian value.
//!
//! Angles of different units still compare equal when they describe the
//! same rotation: equality converts the degree operand to radians first
//! and then compares within the kernel tolerance.

use num_traits::Float;

use super::scalar::Scalar;

/// An angle in degree units.
#[derive(Clone, Copy, Debug)]
pub struct Degrees<T>(T);

/// An angle in radian units.
#[derive(Clone, Copy, Debug)]
pub struct Radians<T>(T);

impl<T: Scalar> Degrees<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// The raw scalar, in degrees.
    pub fn value(self) -> T {
        self.0
    }

    pub fn set(&mut self, value: T) {
        self.0 = value;
    }
}

impl<T: Scalar + Float> Degrees<T> {
    /// The same angle expressed in radians (degrees × π / 180).
    pub fn to_radians(self) -> Radians<T> {
        Radians(self.0.to_radians())
    }
}

impl<T: Scalar> Radians<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// The raw scalar, in radians.
    pub fn value(self) -> T {
        self.0
    }

    pub fn set(&mut self, value: T) {
        self.0 = value;
    }
}

impl<T: Scalar + Float> Radians<T> {
    /// The same angle expressed in degrees (radians × 180 / π).
    pub fn to_degrees(self) -> Degrees<T> {
        Degrees(self.0.to_degrees())
    }
}

impl<T: Scalar> PartialEq for Degrees<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.0.approx_eq(rhs.0)
    }
}

impl<T: Scalar> PartialEq for Radians<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.0.approx_eq(rhs.0)
    }
}

impl<T: Scalar + Float> PartialEq<Radians<T>> for Degrees<T> {
    fn eq(&self, rhs: &Radians<T>) -> bool {
        self.to_radians().value().approx_eq(rhs.0)
    }
}

impl<T: Scalar + Float> PartialEq<Degrees<T>> for Radians<T> {
    fn eq(&self, rhs: &Degrees<T>) -> bool {
        self.0.approx_eq(rhs.to_radians().value())
    }
}
