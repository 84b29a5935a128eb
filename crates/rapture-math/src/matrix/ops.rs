use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Float, Matrix, Vector};

impl<const R: usize, const C: usize> Index<(usize, usize)> for Matrix<R, C> {
    type Output = Float;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[(row, col)]
    }
}

impl<const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[(row, col)]
    }
}

impl<const R: usize, const C: usize> AbsDiffEq for Matrix<R, C> {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        Float::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<const R: usize, const C: usize> RelativeEq for Matrix<R, C> {
    fn default_max_relative() -> Self::Epsilon {
        Float::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl<const R: usize, const C: usize> UlpsEq for Matrix<R, C> {
    fn default_max_ulps() -> u32 {
        Float::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

// The compound operators are the primitives; `+`, `-` and scalar `*` copy the left operand and
// apply them.

/// Element-wise addition.
impl<const R: usize, const C: usize> AddAssign for Matrix<R, C> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Element-wise subtraction.
impl<const R: usize, const C: usize> SubAssign for Matrix<R, C> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Matrix-Scalar multiplication (scaling).
impl<const R: usize, const C: usize> MulAssign<Float> for Matrix<R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: Float) {
        self.0 *= rhs;
    }
}

/// Matrix * Square Matrix, in place.
///
/// Only square right-hand sides are accepted, since anything else would change the shape of the
/// receiver.
impl<const R: usize, const C: usize> MulAssign<Matrix<C, C>> for Matrix<R, C> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<C, C>) {
        *self = *self * rhs;
    }
}

/// Element-wise negation.
impl<const R: usize, const C: usize> Neg for Matrix<R, C> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Element-wise addition.
impl<const R: usize, const C: usize> Add for Matrix<R, C> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

/// Element-wise subtraction.
impl<const R: usize, const C: usize> Sub for Matrix<R, C> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

/// Matrix * Scalar.
impl<const R: usize, const C: usize> Mul<Float> for Matrix<R, C> {
    type Output = Self;

    fn mul(mut self, rhs: Float) -> Self::Output {
        self *= rhs;
        self
    }
}

/// Scalar * Matrix.
impl<const R: usize, const C: usize> Mul<Matrix<R, C>> for Float {
    type Output = Matrix<R, C>;

    #[inline]
    fn mul(self, rhs: Matrix<R, C>) -> Self::Output {
        rhs * self
    }
}

/// Matrix * Matrix.
impl<const M: usize, const N: usize, const P: usize> Mul<Matrix<N, P>> for Matrix<M, N> {
    type Output = Matrix<M, P>;

    fn mul(self, rhs: Matrix<N, P>) -> Self::Output {
        Matrix(self.0 * rhs.0)
    }
}

/// Matrix * Column Vector.
impl<const R: usize, const C: usize> Mul<Vector<C>> for Matrix<R, C> {
    type Output = Vector<R>;

    fn mul(self, rhs: Vector<C>) -> Self::Output {
        Vector(self.0 * rhs.0)
    }
}
