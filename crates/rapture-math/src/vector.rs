use std::{array, fmt};

use fastrand::Rng;
use nalgebra::{ArrayStorage, SVector};

use crate::{error::check_len, general::General, random, Float, Result};

mod ops;

/// A 2-dimensional vector.
pub type Vec2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vec3 = Vector<3>;
/// A 4-dimensional vector.
pub type Vec4 = Vector<4>;

/// An `N`-element column vector of [`Float`] elements.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - Vectors can be created from arrays using their [`From`] implementation, or from slices with
///   [`Vector::from_slice`] (checked at runtime).
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - [`Vector::ZERO`] (also the [`Default`]) is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`
///   are unit vectors pointing in the given direction.
/// - [`Vector::random`] fills the vector from a caller-supplied random number generator.
///
/// # Formatting
///
/// The [`Display`][fmt::Display] impl prints one element per line, without a trailing newline.
/// Elements use the same general notation as [`Matrix`][crate::Matrix]:
///
/// ```
/// # use rapture_math::*;
/// assert_eq!(vec3(1.0, 2.0, 3.0).to_string(), "1\n2\n3");
/// ```
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize>(pub(crate) SVector<Float, N>);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self::from_array([0.0; N]);

    /// Creates a vector from an array of its elements.
    #[inline]
    pub const fn from_array(elems: [Float; N]) -> Self {
        Self(SVector::<Float, N>::from_array_storage(ArrayStorage([elems])))
    }

    /// Creates a vector with each element initialized to `elem`.
    #[inline]
    pub fn splat(elem: Float) -> Self {
        Self::from_array([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use rapture_math::*;
    /// let v = Vec3::from_fn(|i| i as f32 + 100.0);
    /// assert_eq!(v, vec3(100.0, 101.0, 102.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> Float,
    {
        Self::from_array(array::from_fn(cb))
    }

    /// Creates a vector from a slice of exactly `N` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `elems` does not
    /// contain exactly `N` elements.
    pub fn from_slice(elems: &[Float]) -> Result<Self> {
        check_len(N, elems.len())?;
        Ok(Self::from_fn(|i| elems[i]))
    }

    /// Creates a vector whose elements are drawn uniformly from `[-1, 1)`.
    pub fn random(rng: &mut Rng) -> Self {
        Self::from_fn(|_| random::signed_unit(rng))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Float) -> Float,
    {
        Self::from_array(self.into_array().map(f))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_array(&self) -> &[Float; N] {
        let [elems] = &self.0.data.0;
        elems
    }

    /// Returns the underlying elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Float] {
        self.0.as_slice()
    }

    /// Converts this vector into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [Float; N] {
        let [elems] = self.0.data.0;
        elems
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    pub fn get(&self, index: usize) -> Option<&Float> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Float> {
        self.0.as_mut_slice().get_mut(index)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rapture_math::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> Float {
        self.0.dot(&other.0)
    }

    /// Returns the squared length of this vector.
    pub fn length2(&self) -> Float {
        self.dot(*self)
    }

    /// Returns the length of this vector.
    pub fn length(&self) -> Float {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The result of normalizing a zero-length vector has `NaN` elements.
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Returns a vector with every element negated. Equivalent to unary `-`.
    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    /// Multiplies every element by `factor`. Equivalent to `self * factor`.
    #[inline]
    pub fn scale(self, factor: Float) -> Self {
        self * factor
    }
}

impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec2(1.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec2(0.0, 1.0);
}

impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vec3(0.0, 0.0, 1.0);

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts the
    /// direction of the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rapture_math::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        Self(self.0.cross(&other.0))
    }
}

impl Vector<4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = vec4(1.0, 0.0, 0.0, 0.0);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = vec4(0.0, 1.0, 0.0, 0.0);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = vec4(0.0, 0.0, 1.0, 0.0);
    /// A unit vector pointing in the W direction.
    pub const W: Self = vec4(0.0, 0.0, 0.0, 1.0);
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[Float; N]> for Vector<N> {
    #[inline]
    fn from(value: [Float; N]) -> Self {
        Self::from_array(value)
    }
}

impl<const N: usize> From<Vector<N>> for [Float; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.into_array()
    }
}

impl<const N: usize> TryFrom<&[Float]> for Vector<N> {
    type Error = crate::Error;

    fn try_from(elems: &[Float]) -> Result<Self> {
        Self::from_slice(elems)
    }
}

impl<const N: usize> AsRef<[Float]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[Float] {
        self.as_slice()
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in self.as_slice() {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, elem) in self.as_slice().iter().enumerate() {
            if i != 0 {
                writeln!(f)?;
            }
            fmt::Display::fmt(&General(*elem), f)?;
        }
        Ok(())
    }
}

/// Computes the dot product of `a` and `b`. See [`Vector::dot`].
#[inline]
pub fn dot<const N: usize>(a: Vector<N>, b: Vector<N>) -> Float {
    a.dot(b)
}

/// Computes the cross product of two 3-dimensional vectors. See [`Vector::cross`].
///
/// Only 3-element vectors have a cross product; other dimensions do not compile:
///
/// ```compile_fail
/// # use rapture_math::*;
/// let _ = cross_prod(Vec2::X, Vec2::Y);
/// ```
#[inline]
pub fn cross_prod(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2(x: Float, y: Float) -> Vec2 {
    Vector::from_array([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3(x: Float, y: Float, z: Float) -> Vec3 {
    Vector::from_array([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4(x: Float, y: Float, z: Float, w: Float) -> Vec4 {
    Vector::from_array([x, y, z, w])
}
