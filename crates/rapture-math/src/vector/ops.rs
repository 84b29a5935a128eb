//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Float;

use super::Vector;

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = Float;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> PartialEq<[Float; N]> for Vector<N> {
    fn eq(&self, other: &[Float; N]) -> bool {
        self.as_array() == other
    }
}

impl<const N: usize> PartialEq<Vector<N>> for [Float; N] {
    fn eq(&self, other: &Vector<N>) -> bool {
        self == other.as_array()
    }
}

impl<const N: usize> AbsDiffEq for Vector<N> {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        Float::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<const N: usize> RelativeEq for Vector<N> {
    fn default_max_relative() -> Self::Epsilon {
        Float::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl<const N: usize> UlpsEq for Vector<N> {
    fn default_max_ulps() -> u32 {
        Float::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

/// Element-wise negation.
impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Element-wise addition.
impl<const N: usize> AddAssign for Vector<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Element-wise subtraction.
impl<const N: usize> SubAssign for Vector<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Vector-Scalar multiplication (scaling).
impl<const N: usize> MulAssign<Float> for Vector<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Float) {
        self.0 *= rhs;
    }
}

/// Vector-Scalar division (scaling).
impl<const N: usize> DivAssign<Float> for Vector<N> {
    #[inline]
    fn div_assign(&mut self, rhs: Float) {
        self.0 /= rhs;
    }
}

/// Element-wise addition.
impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

/// Element-wise subtraction.
impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

/// Vector-Scalar multiplication (scaling).
impl<const N: usize> Mul<Float> for Vector<N> {
    type Output = Self;

    fn mul(mut self, rhs: Float) -> Self::Output {
        self *= rhs;
        self
    }
}

/// Scalar-Vector multiplication (scaling).
impl<const N: usize> Mul<Vector<N>> for Float {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, rhs: Vector<N>) -> Self::Output {
        rhs * self
    }
}

/// Vector-Scalar division (scaling).
impl<const N: usize> Div<Float> for Vector<N> {
    type Output = Self;

    fn div(mut self, rhs: Float) -> Self::Output {
        self /= rhs;
        self
    }
}

// NB: element-wise vector-vector multiplication is deliberately missing. `*` between vectors would
// be ambiguous with the dot product; use `Vector::dot` or `Vector::map` instead.
