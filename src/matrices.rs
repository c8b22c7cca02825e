//! `matrices` submodule implements square NxN matrices (2x2, 3x3 and 4x4 are the ones that are used)
//! which are applied to vectors to perform linear and affine transformations.
//!
//! # Storage
//! Matrices are stored in column-major order. There is only one backing store -
//! `N` columns of `N` rows each, which in memory is the same as a flat sequence of `N * N` scalars
//! where element `c * N + r` is row `r` of column `c`.
//! It can be accessed in two ways:
//! * two-dimensional: `matrix[c][r]` (indexing yields a column) or `matrix.at(r, c)`;
//! * flat: `matrix.flat(c * N + r)` or `matrix.flat_iter()`.
//!
//! Both ways always observe the same values.
//!
//! # Conventions
//! Vectors are columns that are multiplied on the right (`matrix * vector`), so
//! `a * b` applied to a vector applies `b` first and `a` second.
//!

use crate::{
    floats::{almost_equal, FloatOperations},
    vectors::{Vector2, Vector3, Vector4},
    Sign,
};
use seq_macro::seq;
use serde::{Deserialize, Serialize};
use serde_big_array::Array;
use std::{
    error::Error,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// [`MatrixError`] enum lists failures of matrix operations that have an explicit error path.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatrixError {
    /// Matrix determinant is exactly zero, so the matrix has no inverse.
    ///
    Singular,
}
impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::Singular => write!(f, "matrix is singular (determinant is equal to zero)"),
        }
    }
}
impl Error for MatrixError {}

/// [`Matrix`] struct implements linear algebra functions with square matrices.
///
/// It also implements various matrix operations with second operand being either matrix,
/// vector or number.
///
/// # Example
/// ```rust
/// # use ggmath::matrices::Matrix;
/// let mut matrix: Matrix<2> = Matrix::from_rows([
///     [1.0, 2.0],
///     [3.0, 4.0]
/// ]);
/// assert_eq!(matrix[1][0], 2.0);
/// assert_eq!(matrix.at(0, 1), 2.0);
/// assert_eq!(matrix.flat(2), 2.0);
///
/// *matrix.flat_mut(2) = 5.0;
/// assert_eq!(matrix.at(0, 1), 5.0);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Matrix<const N: usize> {
    /// Underlying array (`data[c][r]`).
    ///
    data: Array<Array<f64, N>, N>,
}
impl<const N: usize> Matrix<N> {
    /// Returns count of matrix rows (which is equal to count of columns).
    ///
    pub fn size(&self) -> usize {
        N
    }

    /// Initializes matrix with zeroes.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// let matrix: Matrix<3> = Matrix::zero();
    /// assert_eq!(matrix.as_rows(), [[0.0; 3]; 3]);
    /// ```
    ///
    pub fn zero() -> Self {
        Self::filled(0.0)
    }
    /// Initializes matrix where every element is equal to given value.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// let matrix: Matrix<2> = Matrix::filled(1.0);
    /// assert_eq!(matrix.as_rows(), [[1.0; 2]; 2]);
    /// ```
    ///
    pub fn filled(value: f64) -> Self {
        Self {
            data: Array([Array([value; N]); N]),
        }
    }
    /// Makes n-sized identity matrix.
    ///
    /// Constructs identity matrix (square matrix with 1.0 on main diagonal
    /// and 0.0 elsewhere).
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// let matrix: Matrix<3> = Matrix::identity();
    /// assert_eq!(
    ///     matrix.as_rows(),
    ///     [
    ///         [1.0, 0.0, 0.0],
    ///         [0.0, 1.0, 0.0],
    ///         [0.0, 0.0, 1.0]
    ///     ],
    /// );
    /// ```
    ///
    pub fn identity() -> Self {
        let mut matrix: Matrix<N> = Matrix::zero();
        for i in 0..N {
            matrix.data[i][i] = 1.0;
        }
        matrix
    }
    /// Initializes matrix from scalar the way older `ggmath` constructors did.
    ///
    /// Every element is set to `scalar`, except that `scalar == 1.0` produces
    /// the identity matrix instead of a matrix of ones.
    ///
    /// # Example
    /// ```rust
    /// # #![allow(deprecated)]
    /// # use ggmath::matrices::Matrix;
    /// assert_eq!(Matrix::<2>::from_scalar(1.0), Matrix::identity());
    /// assert_eq!(Matrix::<2>::from_scalar(2.0), Matrix::filled(2.0));
    /// ```
    ///
    #[deprecated(
        since = "0.1.0",
        note = "`1.0` is treated as identity; use `Matrix::identity` or `Matrix::filled` instead"
    )]
    pub fn from_scalar(scalar: f64) -> Self {
        if scalar == 1.0 {
            Self::identity()
        } else {
            Self::filled(scalar)
        }
    }
    /// Initializes matrix from rows (row-major argument order).
    ///
    pub fn from_rows(rows: [[f64; N]; N]) -> Self {
        let mut matrix: Matrix<N> = Matrix::zero();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                matrix.data[c][r] = *value;
            }
        }
        matrix
    }
    /// Initializes matrix from columns.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// let matrix: Matrix<2> = Matrix::from_columns([[1.0, 3.0], [2.0, 4.0]]);
    /// assert_eq!(matrix, Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    /// ```
    ///
    pub fn from_columns(columns: [[f64; N]; N]) -> Self {
        Self {
            data: Array(columns.map(Array)),
        }
    }

    /// Overwrites every element from rows (row-major argument order).
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// let mut matrix: Matrix<2> = Matrix::identity();
    /// matrix.set_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(matrix.at(0, 1), 2.0);
    /// matrix.set_columns([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(matrix.at(0, 1), 3.0);
    /// ```
    ///
    pub fn set_rows(&mut self, rows: [[f64; N]; N]) {
        *self = Matrix::from_rows(rows);
    }
    /// Overwrites every element from columns.
    ///
    pub fn set_columns(&mut self, columns: [[f64; N]; N]) {
        *self = Matrix::from_columns(columns);
    }

    /// Returns matrix as an array of rows.
    ///
    pub fn as_rows(&self) -> [[f64; N]; N] {
        let mut rows: [[f64; N]; N] = [[0.0; N]; N];
        for (r, row) in rows.iter_mut().enumerate() {
            *row = self.row(r);
        }
        rows
    }
    /// Returns matrix as an array of columns.
    ///
    pub fn as_columns(&self) -> [[f64; N]; N] {
        let mut columns: [[f64; N]; N] = [[0.0; N]; N];
        for (c, column) in columns.iter_mut().enumerate() {
            *column = self.data[c].0;
        }
        columns
    }
    /// Returns row with given index.
    ///
    pub fn row(&self, row: usize) -> [f64; N] {
        let mut elements: [f64; N] = [0.0; N];
        for (c, element) in elements.iter_mut().enumerate() {
            *element = self.data[c][row];
        }
        elements
    }
    /// Returns column with given index.
    ///
    pub fn column(&self, column: usize) -> [f64; N] {
        self.data[column].0
    }

    /// Returns element at given row and column.
    ///
    pub fn at(&self, row: usize, column: usize) -> f64 {
        self.data[column][row]
    }
    /// Returns mutable reference to element at given row and column.
    ///
    pub fn at_mut(&mut self, row: usize, column: usize) -> &mut f64 {
        &mut self.data[column][row]
    }
    /// Returns element by its index in column-major flat sequence.
    ///
    /// # Panics
    /// Panics if `index >= N * N`.
    ///
    pub fn flat(&self, index: usize) -> f64 {
        self.data[index / N][index % N]
    }
    /// Returns mutable reference to element by its index in column-major flat sequence.
    ///
    /// # Panics
    /// Panics if `index >= N * N`.
    ///
    pub fn flat_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index / N][index % N]
    }
    /// Returns iterator over all elements in column-major order.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// let matrix: Matrix<2> = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(matrix.flat_iter().collect::<Vec<f64>>(), vec![1.0, 3.0, 2.0, 4.0]);
    /// ```
    ///
    pub fn flat_iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().flat_map(|column| column.iter().copied())
    }

    /// Applies function to every matrix element and returns changed matrix.
    ///
    pub fn map(self, f: impl Fn(f64) -> f64) -> Matrix<N> {
        let mut matrix: Matrix<N> = self;
        for column in matrix.data.iter_mut() {
            for element in column.iter_mut() {
                *element = f(*element);
            }
        }
        matrix
    }
    /// Combines matrices by applying function on their elements.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// let m1: Matrix<2> = Matrix::from_rows([[1.0, 2.0], [2.0, 1.0]]);
    /// let m2: Matrix<2> = Matrix::from_rows([[2.0, 1.0], [1.0, 2.0]]);
    /// assert_eq!(m1.combine(m2, |a, b| a + b), Matrix::filled(3.0));
    /// ```
    ///
    pub fn combine(self, other: Matrix<N>, f: impl Fn(f64, f64) -> f64) -> Matrix<N> {
        let mut matrix: Matrix<N> = self;
        for c in 0..N {
            for r in 0..N {
                matrix.data[c][r] = f(self.data[c][r], other.data[c][r]);
            }
        }
        matrix
    }

    /// Transposes matrix in place (flips matrix over its diagonal).
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// let mut matrix: Matrix<3> = Matrix::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [1.0, 2.0, 3.0],
    ///     [1.0, 2.0, 3.0]
    /// ]);
    /// matrix.transpose();
    /// assert_eq!(
    ///     matrix.as_rows(),
    ///     [
    ///         [1.0; 3],
    ///         [2.0; 3],
    ///         [3.0; 3]
    ///     ]
    /// );
    /// ```
    ///
    pub fn transpose(&mut self) {
        for i in 0..N {
            for j in (i + 1)..N {
                let temp: f64 = self.data[j][i];
                self.data[j][i] = self.data[i][j];
                self.data[i][j] = temp;
            }
        }
    }
    /// Returns transposed copy of matrix.
    ///
    pub fn transposed(&self) -> Matrix<N> {
        let mut matrix: Matrix<N> = *self;
        matrix.transpose();
        matrix
    }

    /// Performs dot product operation on two matrices.
    ///
    /// `result.at(r, c)` is the sum of `self.at(r, k) * other.at(k, c)` over all `k`.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// let m1: Matrix<2> = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// let m2: Matrix<2> = Matrix::from_rows([[0.0, 1.0], [2.0, 5.0]]);
    /// assert_eq!(m1.dot_product(&m2).as_rows(), [[4.0, 11.0], [8.0, 23.0]]);
    /// ```
    ///
    pub fn dot_product(&self, other: &Matrix<N>) -> Matrix<N> {
        let mut matrix: Matrix<N> = Matrix::zero();
        for r in 0..N {
            for c in 0..N {
                let mut res: f64 = 0.0;
                for k in 0..N {
                    res += self.at(r, k) * other.at(k, c);
                }
                matrix.data[c][r] = res;
            }
        }
        matrix
    }

    /// Checks whether matrices are equal up to [`EPSILON`](crate::floats::EPSILON).
    ///
    pub fn almost_equal(&self, other: &Matrix<N>) -> bool {
        self.flat_iter()
            .zip(other.flat_iter())
            .all(|(a, b)| almost_equal(a, b))
    }
}
impl<const N: usize> Default for Matrix<N> {
    /// Default matrix is the identity matrix.
    ///
    fn default() -> Self {
        Matrix::identity()
    }
}
impl<const N: usize> FloatOperations for Matrix<N> {
    /// Constructs new matrix by correcting every matrix element that may be wronged by float operations.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix;
    /// # use ggmath::floats::FloatOperations;
    /// let matrix: Matrix<2> = Matrix::from_rows([[-0.0, 0.00000001], [0.99999999, 2.0]]).correct_to(0);
    /// assert_eq!(matrix.as_rows(), [[0.0, 0.0], [1.0, 2.0]]);
    /// ```
    ///
    fn correct_to(self, digits: i32) -> Self {
        self.map(|elem| elem.correct_to(digits))
    }
    /// Constructs new matrix by rounding every matrix element up to specified number of digits after floating
    /// point.
    ///
    fn round_up_to(self, digits: i32) -> Self {
        self.map(|elem| elem.round_up_to(digits))
    }
}
impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = [f64; N];

    /// Returns column with given index.
    ///
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}
impl<const N: usize> IndexMut<usize> for Matrix<N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
impl<const N: usize> PartialEq for Matrix<N> {
    /// Checks if matrices are exactly equal.
    ///
    /// Use [`Matrix::almost_equal`] to compare results of float operations.
    ///
    fn eq(&self, other: &Self) -> bool {
        self.flat_iter().zip(other.flat_iter()).all(|(a, b)| a == b)
    }
}
impl<const N: usize> From<[[f64; N]; N]> for Matrix<N> {
    /// Shorthand for writing `Matrix::from_rows(...)`.
    ///
    fn from(rows: [[f64; N]; N]) -> Self {
        Matrix::from_rows(rows)
    }
}
impl<const N: usize> Neg for Matrix<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}
impl<const N: usize> Add<Self> for Matrix<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a + b)
    }
}
impl<const N: usize> Sub<Self> for Matrix<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine(rhs, |a, b| a - b)
    }
}
impl<const N: usize> Mul<Self> for Matrix<N> {
    type Output = Self;

    /// Is equal to `self.dot_product(&rhs)`.
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        self.dot_product(&rhs)
    }
}
impl<const N: usize> Mul<f64> for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
impl<const N: usize> Mul<Matrix<N>> for f64 {
    type Output = Matrix<N>;

    fn mul(self, rhs: Matrix<N>) -> Self::Output {
        rhs * self
    }
}
impl<const N: usize> Div<f64> for Matrix<N> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.map(|x| x / rhs)
    }
}
impl<const N: usize> AddAssign<Self> for Matrix<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<const N: usize> SubAssign<Self> for Matrix<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<const N: usize> MulAssign<Self> for Matrix<N> {
    /// Product is accumulated in a separate matrix and only then written to `self`,
    /// so `m *= m` is equal to `m = m * m`.
    ///
    fn mul_assign(&mut self, rhs: Self) {
        let product: Matrix<N> = self.dot_product(&rhs);
        *self = product;
    }
}
impl<const N: usize> MulAssign<f64> for Matrix<N> {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}
impl<const N: usize> DivAssign<f64> for Matrix<N> {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
seq!(N in 2..=4 {
    impl Mul<Vector~N> for Matrix<N> {
        type Output = Vector~N;

        /// Transforms column vector (`v'[r]` is the sum of `at(r, c) * v[c]` over all `c`).
        ///
        fn mul(self, rhs: Vector~N) -> Self::Output {
            let elements: [f64; N] = rhs.elements();
            let mut result: [f64; N] = [0.0; N];
            for (r, element) in result.iter_mut().enumerate() {
                for (c, value) in elements.iter().enumerate() {
                    *element += self.at(r, c) * value;
                }
            }
            Vector~N::from(result)
        }
    }
});

/// Type alias for 2x2 [`Matrix`].
///
pub type Matrix2 = Matrix<2>;
impl Matrix2 {
    /// Returns determinant of matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix2;
    /// assert_eq!(Matrix2::from_rows([[1.0, 0.0], [0.0, 1.0]]).determinant(), 1.0);
    /// assert_eq!(Matrix2::from_rows([[1.0, 2.0], [3.0, 4.0]]).determinant(), -2.0);
    /// ```
    ///
    pub fn determinant(&self) -> f64 {
        self.at(0, 0) * self.at(1, 1) - self.at(1, 0) * self.at(0, 1)
    }
}

/// Type alias for 3x3 [`Matrix`].
///
pub type Matrix3 = Matrix<3>;
impl Matrix3 {
    /// Returns determinant of matrix.
    ///
    /// Uses Laplace expansion along the first row.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix3;
    /// let matrix: Matrix3 = Matrix3::from_rows([
    ///     [-3.0, 2.0, 2.0],
    ///     [43.0, 1.0, -12.0],
    ///     [5.0, 0.0, 5.0]
    /// ]);
    /// assert_eq!(matrix.determinant(), -575.0);
    /// ```
    ///
    pub fn determinant(&self) -> f64 {
        let a = |r: usize, c: usize| -> f64 { self.at(r, c) };
        a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
            - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
            + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
    }
}

/// Type alias for 4x4 [`Matrix`] (three-dimensional transform matrix).
///
pub type Matrix4 = Matrix<4>;
impl Matrix4 {
    /// Returns minor of matrix - 3x3 matrix that is left after deleting given row and column.
    ///
    /// Remaining elements keep their relative order.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::{Matrix3, Matrix4};
    /// let matrix: Matrix4 = Matrix4::from_rows([
    ///     [1.0, 2.0, 3.0, 4.0],
    ///     [5.0, 6.0, 7.0, 8.0],
    ///     [9.0, 10.0, 11.0, 12.0],
    ///     [13.0, 14.0, 15.0, 16.0]
    /// ]);
    /// assert_eq!(
    ///     matrix.minor(0, 1),
    ///     Matrix3::from_rows([
    ///         [5.0, 7.0, 8.0],
    ///         [9.0, 11.0, 12.0],
    ///         [13.0, 15.0, 16.0]
    ///     ])
    /// );
    /// ```
    ///
    pub fn minor(&self, row: usize, column: usize) -> Matrix3 {
        let mut elements: [[f64; 3]; 3] = [[0.0; 3]; 3];
        let mut count: usize = 0;
        for k in 0..4 {
            for l in 0..4 {
                if k != row && l != column {
                    elements[count / 3][count % 3] = self.at(k, l);
                    count += 1;
                }
            }
        }
        Matrix3::from_rows(elements)
    }

    /// Returns determinant of matrix.
    ///
    /// Uses cofactor expansion along the first row.
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix4;
    /// let matrix: Matrix4 = Matrix4::from_rows([
    ///     [2.0, 3.0, 3.0, 1.0],
    ///     [0.0, 4.0, 3.0, -3.0],
    ///     [2.0, -1.0, -1.0, -3.0],
    ///     [0.0, -4.0, -3.0, 2.0]
    /// ]);
    /// assert_eq!(matrix.determinant(), 8.0);
    /// ```
    ///
    pub fn determinant(&self) -> f64 {
        let mut det: f64 = 0.0;
        let mut sign: Sign = Sign::Positive;
        for c in 0..4 {
            det += sign.apply(self.at(0, c) * self.minor(0, c).determinant());
            sign = -sign;
        }
        det
    }

    /// Returns inverse of matrix or [`MatrixError::Singular`] if determinant is exactly zero.
    ///
    /// Inverse is computed as adjugate matrix scaled by reciprocal of determinant.
    /// The reciprocal of determinant is computed in single precision (`f32`) and then applied in `f64`.
    ///
    /// # Examples
    /// ```rust
    /// # use ggmath::matrices::Matrix4;
    /// let matrix: Matrix4 = Matrix4::from_rows([
    ///     [2.0, 3.0, 3.0, 1.0],
    ///     [0.0, 4.0, 3.0, -3.0],
    ///     [2.0, -1.0, -1.0, -3.0],
    ///     [0.0, -4.0, -3.0, 2.0]
    /// ]);
    /// let inverse: Matrix4 = matrix
    ///     .checked_inverse()
    ///     .expect("Should not fail: determinant is not equal to zero.");
    /// assert_eq!(
    ///     inverse.as_rows(),
    ///     [
    ///         [0.125, -1.0, 0.375, -1.0],
    ///         [-0.75, -5.0, 0.75, -6.0],
    ///         [1.0, 6.0, -1.0, 7.0],
    ///         [0.0, -1.0, 0.0, -1.0]
    ///     ]
    /// );
    /// ```
    ///
    /// ```rust
    /// # use ggmath::matrices::{Matrix4, MatrixError};
    /// let matrix: Matrix4 = Matrix4::filled(2.0);
    /// assert_eq!(matrix.checked_inverse(), Err(MatrixError::Singular));
    /// ```
    ///
    pub fn checked_inverse(&self) -> Result<Matrix4, MatrixError> {
        let determinant: f64 = self.determinant();
        if determinant == 0.0 {
            return Err(MatrixError::Singular);
        }
        let inverse_determinant: f64 = f64::from((1.0 / determinant) as f32);

        // Cofactors of the transposed matrix form the adjugate directly.
        let transposed: Matrix4 = self.transposed();
        let mut adjugate: Matrix4 = Matrix4::zero();
        for i in 0..4 {
            for j in 0..4 {
                let sign: Sign = Sign::alternating(i) * Sign::alternating(j);
                *adjugate.at_mut(i, j) = sign.apply(transposed.minor(i, j).determinant());
            }
        }

        Ok(adjugate * inverse_determinant)
    }
    /// Returns inverse of matrix or zero matrix if determinant is exactly zero.
    ///
    /// There is no tolerance: nearly singular matrices are still inverted.
    /// If you need to tell singular matrices apart, use [`Matrix4::checked_inverse`].
    ///
    /// # Example
    /// ```rust
    /// # use ggmath::matrices::Matrix4;
    /// let matrix: Matrix4 = Matrix4::from_rows([
    ///     [1.0, 2.0, 3.0, 4.0],
    ///     [1.0, 2.0, 3.0, 4.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0]
    /// ]);
    /// assert_eq!(matrix.inverse(), Matrix4::zero());
    /// ```
    ///
    pub fn inverse(&self) -> Matrix4 {
        self.checked_inverse().unwrap_or_else(|_| Matrix4::zero())
    }

    /// Transforms given point (shorthand for writing `(self * point.extend(1.0)).truncate()`).
    ///
    pub fn apply_to(&self, point: Vector3) -> Vector3 {
        (*self * point.extend(1.0)).truncate()
    }
    /// Transforms given point and performs perspective division.
    ///
    /// Resulting point is in normalized device coordinates if this matrix is a projection matrix.
    ///
    pub fn project(&self, point: Vector3) -> Vector3 {
        let clip: Vector4 = *self * point.extend(1.0);
        clip.truncate() / clip.w
    }
}

#[cfg(test)]
mod tests {
    #![allow(deprecated)]

    use super::{Matrix, Matrix2, Matrix3, Matrix4, MatrixError};
    use crate::{
        floats::almost_equal,
        vectors::{Vector2, Vector3, Vector4},
    };

    /// Returns invertible 4x4 matrices that are used across tests.
    ///
    fn samples() -> [Matrix4; 3] {
        [
            Matrix4::from_rows([
                [2.0, 3.0, 3.0, 1.0],
                [0.0, 4.0, 3.0, -3.0],
                [2.0, -1.0, -1.0, -3.0],
                [0.0, -4.0, -3.0, 2.0],
            ]),
            Matrix4::from_rows([
                [1.0, 2.0, 0.0, 1.0],
                [0.0, 1.0, 3.0, 0.0],
                [2.0, 0.0, 1.0, 1.0],
                [1.0, 1.0, 0.0, 2.0],
            ]),
            Matrix4::from_rows([
                [4.0, 7.0, 2.0, 3.0],
                [0.0, 5.0, 0.0, 1.0],
                [1.0, 0.0, 3.0, 2.0],
                [6.0, 1.0, 1.0, 9.0],
            ]),
        ]
    }

    #[test]
    fn matrix() {
        let m1: Matrix2 = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let m2: Matrix2 = Matrix::from([[4.0, 3.0], [2.0, 1.0]]);
        let mut m3: Matrix2 = m1;

        assert_eq!((m1 + m2).as_rows(), [[5.0; 2]; 2]);
        assert_eq!((m1 - m2).as_rows(), [[-3.0, -1.0], [1.0, 3.0]]);
        assert_eq!((m1 * 2.0).as_rows(), [[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!(2.0 * m1, m1 * 2.0);
        assert_eq!((m1 / 2.0).as_rows(), [[0.5, 1.0], [1.5, 2.0]]);
        assert_eq!((-m1).as_rows(), [[-1.0, -2.0], [-3.0, -4.0]]);
        assert_eq!((m1 * m2).as_rows(), [[8.0, 5.0], [20.0, 13.0]]);
        assert_eq!((m2 * m1).as_rows(), [[13.0, 20.0], [5.0, 8.0]]);

        m3 += m2;
        assert_eq!(m3.as_rows(), [[5.0; 2]; 2]);
        m3 -= m2;
        assert_eq!(m3, m1);
        m3 *= 2.0;
        assert_eq!(m3.as_rows(), [[2.0, 4.0], [6.0, 8.0]]);
        m3 /= 2.0;
        assert_eq!(m3, m1);
        m3 *= m2;
        assert_eq!(m3, m1 * m2);
    }

    #[test]
    fn construction() {
        assert_eq!(Matrix3::default(), Matrix3::identity());
        assert_eq!(Matrix4::from_scalar(1.0), Matrix4::identity());
        assert_eq!(Matrix4::from_scalar(0.0), Matrix4::zero());
        assert_eq!(Matrix4::from_scalar(3.0).as_rows(), [[3.0; 4]; 4]);

        let rows: [[f64; 3]; 3] = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let matrix: Matrix3 = Matrix3::from_rows(rows);
        assert_eq!(matrix.as_rows(), rows);
        assert_eq!(matrix.row(1), [4.0, 5.0, 6.0]);
        assert_eq!(matrix.column(1), [2.0, 5.0, 8.0]);
        assert_eq!(matrix.as_columns(), matrix.transposed().as_rows());
        assert_eq!(Matrix3::from_columns(matrix.as_columns()), matrix);
        assert_eq!(matrix.size(), 3);

        let mut target: Matrix3 = Matrix3::zero();
        target.set_rows(rows);
        assert_eq!(target, matrix);
        target.set_columns(rows);
        assert_eq!(target, matrix.transposed());
        assert_eq!(target.column(0), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn storage_views() {
        let mut matrix: Matrix4 = samples()[2];
        let check = |matrix: &Matrix4| {
            for c in 0..4 {
                for r in 0..4 {
                    assert_eq!(matrix.flat(c * 4 + r), matrix[c][r]);
                    assert_eq!(matrix.flat(c * 4 + r), matrix.at(r, c));
                }
            }
            let flat: Vec<f64> = matrix.flat_iter().collect();
            assert_eq!(flat.len(), 16);
            for (i, value) in flat.iter().enumerate() {
                assert_eq!(*value, matrix.flat(i));
            }
        };
        check(&matrix);

        matrix[1][2] = 42.0;
        assert_eq!(matrix.at(2, 1), 42.0);
        assert_eq!(matrix.flat(6), 42.0);
        *matrix.flat_mut(13) = -7.0;
        assert_eq!(matrix[3][1], -7.0);
        *matrix.at_mut(3, 0) = 0.5;
        assert_eq!(matrix.flat(3), 0.5);
        check(&matrix);

        matrix.transpose();
        check(&matrix);
        matrix *= samples()[0];
        check(&matrix);
    }

    #[test]
    fn identity_law() {
        let m2: Matrix2 = Matrix2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m2 * Matrix2::identity(), m2);
        assert_eq!(Matrix2::identity() * m2, m2);

        let m3: Matrix3 = Matrix3::from_rows([[-3.0, 2.0, 2.0], [43.0, 1.0, -12.0], [5.0, 0.0, 5.0]]);
        assert_eq!(m3 * Matrix3::identity(), m3);
        assert_eq!(Matrix3::identity() * m3, m3);

        for m4 in samples() {
            assert_eq!(m4 * Matrix4::identity(), m4);
            assert_eq!(Matrix4::identity() * m4, m4);
        }
    }

    #[test]
    fn transpose() {
        for matrix in samples() {
            let mut transposed: Matrix4 = matrix;
            transposed.transpose();
            for r in 0..4 {
                for c in 0..4 {
                    assert_eq!(transposed.at(r, c), matrix.at(c, r));
                }
            }
            transposed.transpose();
            assert_eq!(transposed, matrix);
            assert_eq!(matrix.transposed().transposed(), matrix);
        }
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix2::from_rows([[1.0, 0.0], [0.0, 1.0]]).determinant(), 1.0);

        let identity: Matrix3 = Matrix3::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(identity.determinant(), 1.0);
        let swapped: Matrix3 = Matrix3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        assert_eq!(swapped.determinant(), -1.0);

        let m3: Matrix3 = Matrix3::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]);
        assert_eq!(m3.determinant(), 6.0);
        let m3_swapped: Matrix3 =
            Matrix3::from_rows([[1.0, 3.0, 2.0], [2.0, 0.0, 1.0], [1.0, 1.0, 2.0]]);
        assert_eq!(m3_swapped.determinant(), -6.0);

        let [a, b, c]: [Matrix4; 3] = samples();
        assert_eq!(a.determinant(), 8.0);
        assert_eq!(b.determinant(), 16.0);
        assert_eq!(c.determinant(), 384.0);
        assert_eq!(Matrix4::identity().determinant(), 1.0);
        assert_eq!(a.transposed().determinant(), a.determinant());
    }

    #[test]
    fn determinant_multiplicativity() {
        let (a2, b2): (Matrix2, Matrix2) = (
            Matrix2::from_rows([[1.0, 2.0], [3.0, 4.0]]),
            Matrix2::from_rows([[0.0, 1.0], [2.0, 5.0]]),
        );
        assert!(almost_equal(
            (a2 * b2).determinant(),
            a2.determinant() * b2.determinant()
        ));

        let (a3, b3): (Matrix3, Matrix3) = (
            Matrix3::from_rows([[-3.0, 2.0, 2.0], [43.0, 1.0, -12.0], [5.0, 0.0, 5.0]]),
            Matrix3::from_rows([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]),
        );
        assert!(almost_equal(
            (a3 * b3).determinant(),
            a3.determinant() * b3.determinant()
        ));

        let [a4, b4, c4]: [Matrix4; 3] = samples();
        for (x, y) in [(a4, b4), (b4, c4), (c4, a4)] {
            assert!(almost_equal(
                (x * y).determinant(),
                x.determinant() * y.determinant()
            ));
        }
    }

    #[test]
    fn inverse() {
        for matrix in samples() {
            let inverse: Matrix4 = matrix.inverse();
            assert!((matrix * inverse).almost_equal(&Matrix4::identity()));
            assert!((inverse * matrix).almost_equal(&Matrix4::identity()));
            assert_eq!(matrix.checked_inverse(), Ok(inverse));
        }

        let diagonal: Matrix4 = Matrix4::from_rows([
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 8.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(
            diagonal.inverse().as_rows(),
            [
                [0.5, 0.0, 0.0, -0.5],
                [0.0, 0.25, 0.0, 0.0],
                [0.0, 0.0, 0.125, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ]
        );

        let matrix: Matrix4 = samples()[2];
        let original: Matrix4 = matrix;
        let _ = matrix.inverse();
        assert_eq!(matrix, original);
    }

    #[test]
    fn nearly_singular() {
        let matrix: Matrix4 = Matrix4::from_rows([
            [1e-12, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(matrix.determinant(), 1e-12);

        let inverse: Matrix4 = matrix.inverse();
        assert_ne!(inverse, Matrix4::zero());
        assert_eq!(inverse.at(0, 0), f64::from((1.0 / 1e-12_f64) as f32));
        assert!(almost_equal(inverse.at(0, 0), 1e12));
        assert!(matrix.checked_inverse().is_ok());
    }

    #[test]
    fn single_precision_reciprocal() {
        let matrix: Matrix4 = Matrix4::from_rows([
            [3.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(matrix.determinant(), 3.0);

        let reciprocal: f64 = f64::from((1.0 / 3.0_f64) as f32);
        assert_ne!(reciprocal, 1.0 / 3.0);

        let inverse: Matrix4 = matrix.inverse();
        // cofactors are 1.0 for the first diagonal entry and 3.0 for the rest
        assert_eq!(inverse.at(0, 0), reciprocal);
        assert_ne!(inverse.at(0, 0), 1.0 / 3.0);
        for i in 1..4 {
            assert_eq!(inverse.at(i, i), 3.0 * reciprocal);
            assert_ne!(inverse.at(i, i), 1.0);
        }
        assert_eq!(inverse.at(0, 1), 0.0);
    }

    #[test]
    fn singular() {
        let matrix: Matrix4 = Matrix4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 1.0, 1.0, 2.0],
        ]);
        assert_eq!(matrix.determinant(), 0.0);
        assert_eq!(matrix.inverse(), Matrix4::zero());
        assert_eq!(matrix.checked_inverse(), Err(MatrixError::Singular));
        assert_eq!(
            MatrixError::Singular.to_string(),
            "matrix is singular (determinant is equal to zero)"
        );

        assert_eq!(Matrix4::zero().inverse(), Matrix4::zero());
    }

    #[test]
    fn vector_multiplication() {
        let m2: Matrix2 = Matrix2::from_rows([[0.0, -1.0], [1.0, 0.0]]);
        assert_eq!(m2 * Vector2::from([1.0, 0.0]), Vector2::from([0.0, 1.0]));

        let m3: Matrix3 = Matrix3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_eq!(m3 * Vector3::from([1.0, 1.0, 1.0]), Vector3::from([6.0, 1.0, 2.0]));

        let m4: Matrix4 = samples()[0];
        assert_eq!(
            m4 * Vector4::from([1.0, 0.0, 0.0, 0.0]),
            Vector4::from(m4.column(0))
        );
        assert_eq!(
            m4.apply_to(Vector3::from([0.0, 0.0, 0.0])),
            Vector3::from([1.0, -3.0, -3.0])
        );

        let (a, b): (Matrix4, Matrix4) = (samples()[1], samples()[2]);
        let vector: Vector4 = Vector4::from([1.0, -2.0, 0.5, 1.0]);
        assert!(((a * b) * vector).almost_equal(&(a * (b * vector))));
    }

    #[test]
    fn serialization() {
        let matrix: Matrix4 = samples()[2];
        let bytes: Vec<u8> =
            serde_cbor::to_vec(&matrix).expect("Matrix should be serializable by CBOR");
        let restored: Matrix4 =
            serde_cbor::from_slice(&bytes).expect("Serialized matrix should be deserializable");
        assert_eq!(restored, matrix);
    }
}
