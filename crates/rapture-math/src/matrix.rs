use std::fmt;

use fastrand::Rng;
use nalgebra::{ArrayStorage, SMatrix};

use crate::{error::check_len, general::General, random, Float, Result, Vector};

mod ops;

/// A 2x2 matrix.
pub type Mat2 = Matrix<2, 2>;
/// A 3x3 matrix.
pub type Mat3 = Matrix<3, 3>;
/// A 4x4 matrix.
pub type Mat4 = Matrix<4, 4>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3 = Matrix<2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4 = Matrix<2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2 = Matrix<3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4 = Matrix<3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2 = Matrix<4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3 = Matrix<4, 3>;

/// A matrix with `R` rows and `C` columns of [`Float`] elements.
///
/// Matrices are plain values: they are [`Copy`], assignment replaces the whole value, and no two
/// matrices ever share storage.
///
/// # Construction
///
/// - [`Matrix::ZERO`] (also the [`Default`]) has every element set to 0.
/// - [`Matrix::IDENTITY`] and [`Matrix::identity`] exist for square matrices only.
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] take arrays of rows or columns (either raw
///   arrays or [`Vector`]s).
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::from_row_slice`] and [`Matrix::from_column_slice`] take a slice whose length is
///   checked at runtime.
/// - [`Matrix::random`] fills the matrix from a caller-supplied random number generator.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples. Indices are 0-based.
///
/// ```
/// # use rapture_math::*;
/// let mut mat = Mat2x3::from_rows([
///     [0.0, 1.0, 2.0],
///     [3.0, 4.0, 5.0],
/// ]);
/// mat[(1, 2)] = 9.0;
/// assert_eq!(mat[(0, 1)], 1.0);
/// assert_eq!(mat[(1, 2)], 9.0);
/// ```
///
/// Indexing out of bounds panics, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead:
///
/// ```
/// # use rapture_math::*;
/// let mat = Mat2::IDENTITY;
/// assert_eq!(mat.get(1, 1), Some(&1.0));
/// assert_eq!(mat.get(2, 0), None);
/// ```
///
/// # Formatting
///
/// The [`Display`][fmt::Display] impl prints one row per line, elements separated by `", "`. Every
/// row, including the last one, is terminated by a newline. Elements are printed with 6
/// significant digits, switching to scientific notation for very large or small magnitudes (like
/// C's `%g`); a precision flag such as `{:.3}` changes the number of digits:
///
/// ```
/// # use rapture_math::*;
/// assert_eq!(Mat2::IDENTITY.to_string(), "1, 0\n0, 1\n");
/// assert_eq!(Mat2::from_diagonal([0.125, 2.0e9]).to_string(), "0.125, 0\n0, 2e+09\n");
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix<const R: usize, const C: usize>(pub(crate) SMatrix<Float, R, C>);

unsafe impl<const R: usize, const C: usize> bytemuck::Zeroable for Matrix<R, C> {}
unsafe impl<const R: usize, const C: usize> bytemuck::Pod for Matrix<R, C> {}

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self(SMatrix::from_array_storage(ArrayStorage([[0.0; R]; C])));

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rapture_math::*;
    /// let rows = Mat2::from_rows([
    ///     [0.0, 1.0],
    ///     [2.0, 3.0],
    /// ]);
    /// let columns = Mat2::from_columns([
    ///     [0.0, 2.0],
    ///     [1.0, 3.0],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<C>>>(rows: [U; R]) -> Self {
        let rows: [Vector<C>; R] = rows.map(Into::into);
        Self::from_fn(|row, col| rows[row][col])
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub fn from_columns<U: Into<Vector<R>>>(columns: [U; C]) -> Self {
        let columns = columns.map(|col| col.into().into_array());
        Self(SMatrix::from_array_storage(ArrayStorage(columns)))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rapture_math::*;
    /// let mat = Mat2x3::from_fn(|row, col| (row * 10 + col) as f32);
    /// assert_eq!(mat, Mat2x3::from_rows([
    ///     [ 0.0,  1.0,  2.0],
    ///     [10.0, 11.0, 12.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize, usize) -> Float,
    {
        Self(SMatrix::from_fn(cb))
    }

    /// Creates a [`Matrix`] from `R * C` elements given in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `elems` does not
    /// contain exactly `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rapture_math::*;
    /// let mat = Mat2::from_row_slice(&[1.0, 2.0, 3.0, 4.0])?;
    /// assert_eq!(mat[(0, 1)], 2.0);
    ///
    /// let err = Mat2::from_row_slice(&[1.0, 2.0, 3.0]).unwrap_err();
    /// assert_eq!(err, Error::DimensionMismatch { expected: 4, actual: 3 });
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_row_slice(elems: &[Float]) -> Result<Self> {
        check_len(R * C, elems.len())?;
        Ok(Self(SMatrix::from_row_slice(elems)))
    }

    /// Creates a [`Matrix`] from `R * C` elements given in column-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`][crate::Error::DimensionMismatch] if `elems` does not
    /// contain exactly `R * C` elements.
    pub fn from_column_slice(elems: &[Float]) -> Result<Self> {
        check_len(R * C, elems.len())?;
        Ok(Self(SMatrix::from_column_slice(elems)))
    }

    /// Creates a [`Matrix`] whose elements are drawn uniformly from `[-1, 1)`.
    ///
    /// The same generator state always produces the same matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rapture_math::*;
    /// let a = Mat3::random(&mut fastrand::Rng::with_seed(1));
    /// let b = Mat3::random(&mut fastrand::Rng::with_seed(1));
    /// assert_eq!(a, b);
    /// ```
    pub fn random(rng: &mut Rng) -> Self {
        Self::from_fn(|_, _| random::signed_unit(rng))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Float) -> Float,
    {
        Self(self.0.map(f))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rapture_math::*;
    /// let mat = Mat2x3::from_rows([
    ///     [0.0, 1.0, 2.0],
    ///     [3.0, 4.0, 5.0],
    /// ]).transpose();
    /// assert_eq!(mat, Mat3x2::from_rows([
    ///     [0.0, 3.0],
    ///     [1.0, 4.0],
    ///     [2.0, 5.0],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<C, R> {
        Matrix(self.0.transpose())
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Float> {
        self.0.get((row, col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Float> {
        self.0.get_mut((row, col))
    }

    /// Returns row `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than `R`.
    pub fn row(&self, row: usize) -> Vector<C> {
        assert!(row < R, "row {row} out of range for a {R}x{C} matrix");
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns column `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than `C`.
    pub fn column(&self, col: usize) -> Vector<R> {
        assert!(col < C, "column {col} out of range for a {R}x{C} matrix");
        Vector::from_fn(|row| self[(row, col)])
    }

    /// Returns the elements of this matrix in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[Float] {
        self.0.as_slice()
    }

    /// Returns a matrix with every element negated. Equivalent to unary `-`.
    #[inline]
    pub fn negate(self) -> Self {
        -self
    }

    /// Multiplies every element by `factor`. Equivalent to `self * factor`.
    #[inline]
    pub fn scale(self, factor: Float) -> Self {
        self * factor
    }

    /// Computes the matrix product `self * rhs`.
    #[inline]
    pub fn multiply<const P: usize>(self, rhs: Matrix<C, P>) -> Matrix<R, P> {
        self * rhs
    }

    /// Computes the matrix-vector product `self * vec`.
    #[inline]
    pub fn transform(self, vec: Vector<C>) -> Vector<R> {
        self * vec
    }
}

impl<const N: usize> Matrix<N, N> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any matrix
    /// or vector with it returns that matrix or vector unchanged.
    pub const IDENTITY: Self = {
        let mut elems = [[0.0; N]; N];
        let mut i = 0;
        while i < N {
            elems[i][i] = 1.0;
            i += 1;
        }
        Self(SMatrix::from_array_storage(ArrayStorage(elems)))
    };

    /// Returns the identity matrix ([`Matrix::IDENTITY`]).
    ///
    /// *Note*: only square matrices have an identity; calling this on a non-square matrix type
    /// does not compile.
    ///
    /// ```compile_fail
    /// # use rapture_math::*;
    /// let _ = Mat2x3::identity();
    /// ```
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a square matrix from its diagonal. Elements off the diagonal are 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rapture_math::*;
    /// let diag = Mat3::from_diagonal([1.0, 2.0, 3.0]);
    /// assert_eq!(diag, Mat3::from_rows([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 2.0, 0.0],
    ///     [0.0, 0.0, 3.0],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { 0.0 })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> Float {
        self.0.trace()
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const R: usize, const C: usize> fmt::Debug for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, const R: usize, const C: usize>(&'a Matrix<R, C>, usize);
        impl<'a, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..R {
            for col in 0..C {
                fmt::Display::fmt(&General(self[(row, col)]), f)?;
                f.write_str(if col == C - 1 { "\n" } else { ", " })?;
            }
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize> AsRef<[Float]> for Matrix<R, C> {
    #[inline]
    fn as_ref(&self) -> &[Float] {
        self.as_slice()
    }
}

impl<const R: usize, const C: usize> TryFrom<&[Float]> for Matrix<R, C> {
    type Error = crate::Error;

    /// Row-major, like [`Matrix::from_row_slice`].
    fn try_from(elems: &[Float]) -> Result<Self> {
        Self::from_row_slice(elems)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3, Error};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]),
            Mat2x3::from_columns([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]),
        );
        assert_eq!(
            Mat2::from_rows([vec2(1.0, 2.0), vec2(3.0, 4.0)]),
            Mat2::from_row_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap(),
        );
    }

    #[test]
    fn slices() {
        let mat = Mat2x3::from_column_slice(&[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
        assert_eq!(mat.row(0), [1.0, 2.0, 3.0]);
        assert_eq!(mat.column(2), [3.0, 6.0]);
        assert_eq!(mat.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);

        assert_eq!(
            Mat3::from_row_slice(&[0.0; 8]),
            Err(Error::DimensionMismatch {
                expected: 9,
                actual: 8
            }),
        );
        assert_eq!(
            Mat2x3::from_column_slice(&[0.0; 7]),
            Err(Error::DimensionMismatch {
                expected: 6,
                actual: 7
            }),
        );
        assert!(Mat2::try_from(&[1.0, 2.0, 3.0][..]).is_err());
    }

    #[test]
    fn fmt() {
        let mat = Mat2::from_rows([[0.0, 1.0], [2.0, 3.5]]);

        assert_eq!(format!("{}", mat), "0, 1\n2, 3.5\n");
        assert_eq!(format!("{}", Mat2::IDENTITY), "1, 0\n0, 1\n");
        assert_eq!(format!("{}", Mat2x3::ZERO), "0, 0, 0\n0, 0, 0\n");

        // Six significant digits, like C's `%g`.
        let mat = Mat2::from_rows([[1.0 / 3.0, 1.0e7], [0.680375, -0.5]]);
        assert_eq!(mat.to_string(), "0.333333, 1e+07\n0.680375, -0.5\n");
        assert_eq!(format!("{:.2}", mat), "0.33, 1e+07\n0.68, -0.5\n");
        let mat = Mat2::from_rows([[0.0, 1.0], [2.0, 3.5]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0.0, 1.0], [2.0, 3.5]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0.0, 1.0],
    [2.0, 3.5],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat3::identity(), Mat3::from_diagonal([1.0, 1.0, 1.0]));
        assert_eq!(Mat4::default(), Mat4::ZERO);
        assert_eq!(Mat4::IDENTITY.trace(), 4.0);
    }

    #[test]
    fn access() {
        let mut mat = Mat2::ZERO;
        mat[(0, 1)] = 5.0;
        *mat.get_mut(1, 0).unwrap() = 7.0;
        assert!(mat.get_mut(0, 2).is_none());
        assert_eq!(mat, Mat2::from_rows([[0.0, 5.0], [7.0, 0.0]]));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let mat = Mat2::IDENTITY;
        let _ = mat[(2, 0)];
    }

    #[test]
    fn mat_vec_mul() {
        let mat = Mat2::from_rows([[0.0, 1.0], [2.0, 3.0]]);
        let out = mat * vec2(4.0, 5.0);
        assert_eq!(out, [4.0 * 0.0 + 5.0 * 1.0, 4.0 * 2.0 + 5.0 * 3.0]);
        assert_eq!(mat.transform(vec2(4.0, 5.0)), out);

        let proj = Mat2x3::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
        assert_eq!(proj * vec3(7.0, 8.0, 9.0), vec2(7.0, 8.0));
    }

    #[test]
    fn mat_mat_mul() {
        #[rustfmt::skip]
        let a = Mat4x2::from_rows([
            [1.0, 2.0],
            [3.0, 4.0],
            [5.0, 6.0],
            [7.0, 8.0],
        ]);
        #[rustfmt::skip]
        let b = Mat2x3::from_rows([
            [9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0],
        ]);
        let c: Mat4x3 = a * b;
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);
        assert_eq!(a.multiply(b), c);
    }

    #[test]
    fn compound() {
        let mut m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        m += Mat2::IDENTITY;
        assert_eq!(m, Mat2::from_rows([[2.0, 2.0], [3.0, 5.0]]));
        m -= Mat2::from_rows([[1.0, 1.0], [1.0, 1.0]]);
        assert_eq!(m, Mat2::from_rows([[1.0, 1.0], [2.0, 4.0]]));
        m *= 2.0;
        assert_eq!(m, Mat2::from_rows([[2.0, 2.0], [4.0, 8.0]]));
        m *= Mat2::from_rows([[0.0, 1.0], [1.0, 0.0]]);
        assert_eq!(m, Mat2::from_rows([[2.0, 2.0], [8.0, 4.0]]));

        // `*=` with a square right-hand side keeps the receiver's shape.
        let mut wide = Mat2x3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        wide *= Mat3::IDENTITY * 2.0;
        assert_eq!(wide, Mat2x3::from_rows([[2.0, 4.0, 6.0], [8.0, 10.0, 12.0]]));
    }

    #[test]
    fn arithmetic() {
        let a = Mat2::from_rows([[1.0, -2.0], [3.0, 0.5]]);
        let b = Mat2::from_rows([[4.0, 1.0], [-1.0, 2.0]]);
        assert_eq!(a + b, Mat2::from_rows([[5.0, -1.0], [2.0, 2.5]]));
        assert_eq!(a - b, Mat2::from_rows([[-3.0, -3.0], [4.0, -1.5]]));
        assert_eq!(-a, Mat2::from_rows([[-1.0, 2.0], [-3.0, -0.5]]));
        assert_eq!(a.negate(), -a);
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a.scale(2.0), Mat2::from_rows([[2.0, -4.0], [6.0, 1.0]]));
        assert_eq!(a.map(|x| x * 2.0), a.scale(2.0));
    }

    #[test]
    fn value_semantics() {
        let a = Mat3::from_fn(|row, col| (row * 3 + col) as Float);
        let mut b = a;
        b[(0, 0)] = 100.0;
        assert_eq!(a[(0, 0)], 0.0);
        assert_ne!(a, b);

        b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn random() {
        let mut rng = Rng::with_seed(0x3024b6663d843ca2);
        let a = Mat4::random(&mut rng);
        let b = Mat4::random(&mut rng);
        assert_ne!(a, b);
        assert!(a.as_slice().iter().all(|v| (-1.0..1.0).contains(v)));

        let m = Mat3::random(&mut rng);
        let square = m * -m;
        assert_relative_eq!(square, -(m * m));
    }

    #[test]
    fn bytes() {
        let mat = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let raw: [Float; 4] = bytemuck::cast(mat);
        assert_eq!(raw, [1.0, 3.0, 2.0, 4.0]);
        assert_eq!(bytemuck::bytes_of(&mat).len(), 16);
    }
}
