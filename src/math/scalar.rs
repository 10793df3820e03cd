use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use num_traits::{One, Zero};

/// Tolerance used for floating-point equality throughout the kernel.
pub const EPSILON: f64 = 1.0e-4;

/// The element types the kernel is generic over.
///
/// `approx_eq` carries the kernel's equality semantics: exact comparison
/// for integer types, absolute-difference comparison within [`EPSILON`]
/// for floating-point types. Every component-wise equality in the kernel
/// goes through this method, so the asymmetry is applied consistently.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
{
    fn approx_eq(self, rhs: Self) -> bool;
}

macro_rules! integer_scalar {
    ($($t:ty),+) => {
        $(impl Scalar for $t {
            fn approx_eq(self, rhs: Self) -> bool {
                self == rhs
            }
        })+
    };
}

macro_rules! float_scalar {
    ($($t:ty),+) => {
        $(impl Scalar for $t {
            fn approx_eq(self, rhs: Self) -> bool {
                (self - rhs).abs() < EPSILON as $t
            }
        })+
    };
}

integer_scalar!(i8, i16, i32, i64, u8, u16, u32, u64);
float_scalar!(f32, f64);
