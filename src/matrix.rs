//! Dense row-major matrix storage and its operations.
//!
//! `Matrix<T>` is a rectangular container addressed by zero-based
//! `(row, col)` pairs. Construction and arithmetic validate shapes up front
//! and return `MatrixError`; element access through `Index`/`IndexMut` stays
//! raw, with only the backing slice's own bounds checks.
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

use num_traits::{One, Zero};

use crate::error::MatrixError;

#[derive(Clone, Debug)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Builds a matrix from a row-major flat buffer.
    ///
    /// # Arguments
    ///
    /// * `shape` - The `(rows, cols)` pair; both must be at least 1.
    /// * `data` - Row-major element buffer of length `rows * cols`.
    ///
    /// # Returns
    ///
    /// The matrix taking ownership of `data`, or `InvalidDimensions` /
    /// `ShapeMismatch` when the shape is degenerate or disagrees with the
    /// buffer length.
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Matrix<T>
where
    T: Clone,
{
    /// Deep-copies a rectangular 2D source into fresh storage.
    ///
    /// Dimensions are derived from the source's own shape. The rows may be
    /// anything slice-like (`Vec`, arrays, slices), so literal nested arrays
    /// work directly.
    ///
    /// # Returns
    ///
    /// The copied matrix, `EmptySource` when the source holds no elements,
    /// or `RaggedSource` when the rows disagree in length.
    pub fn from_rows<R>(source: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[T]>,
    {
        if source.is_empty() {
            return Err(MatrixError::EmptySource);
        }
        let cols = source[0].as_ref().len();
        if cols == 0 {
            return Err(MatrixError::EmptySource);
        }

        let rows = source.len();
        let mut data = Vec::with_capacity(rows * cols);
        for (i, row) in source.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::RaggedSource {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns a new matrix with rows and columns swapped.
    ///
    /// Applying this twice reproduces the original exactly, since only the
    /// element order is permuted.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self[(r, c)].clone());
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero,
{
    /// Allocates a zero-filled matrix of the given dimensions.
    ///
    /// # Returns
    ///
    /// The matrix, or `InvalidDimensions` when either count is zero.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        })
    }
}

impl<T> Matrix<T>
where
    T: Clone + Zero + One,
{
    /// Builds the `n`-by-`n` multiplicative identity: ones on the main
    /// diagonal, zeros elsewhere.
    ///
    /// # Returns
    ///
    /// The identity matrix, or `InvalidSize` when `n` is zero.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::InvalidSize);
        }
        let mut m = Self {
            data: vec![T::zero(); n * n],
            rows: n,
            cols: n,
        };
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        Ok(m)
    }
}

impl<T> Matrix<T>
where
    T: Copy + Add<Output = T>,
{
    /// Element-wise sum into fresh storage; neither operand is mutated.
    ///
    /// # Returns
    ///
    /// The sum, or `DimensionMismatch` when the shapes differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| *a + *b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T> Matrix<T>
where
    T: Copy + Sub<Output = T>,
{
    /// Element-wise difference into fresh storage; neither operand is mutated.
    ///
    /// # Returns
    ///
    /// The difference, or `DimensionMismatch` when the shapes differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(a, b)| *a - *b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

impl<T> Matrix<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    /// Row-by-column matrix product.
    ///
    /// Each output element accumulates `self[i, k] * rhs[k, j]` in ascending
    /// `k` order with native arithmetic; no compensated summation.
    ///
    /// # Returns
    ///
    /// A `self.nrows()` by `rhs.ncols()` matrix, or `IncompatibleDimensions`
    /// when the inner dimensions disagree.
    pub fn matmul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::IncompatibleDimensions {
                left: self.shape(),
                right: rhs.shape(),
            });
        }
        log::trace!(
            "matmul: {}x{} * {}x{}",
            self.rows,
            self.cols,
            rhs.rows,
            rhs.cols
        );

        let mut data = Vec::with_capacity(self.rows * rhs.cols);
        for i in 0..self.rows {
            let row = self.row_slice(i);
            for j in 0..rhs.cols {
                let mut acc = T::zero();
                for (k, &a) in row.iter().enumerate() {
                    acc = acc + a * rhs[(k, j)];
                }
                data.push(acc);
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: rhs.cols,
        })
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl<'a, 'b, T> Add<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Matrix<T>;

    fn add(self, rhs: &'b Matrix<T>) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b, T> Sub<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Matrix<T>;

    fn sub(self, rhs: &'b Matrix<T>) -> Self::Output {
        match self.checked_sub(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b, T> Mul<&'b Matrix<T>> for &'a Matrix<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    type Output = Matrix<T>;

    fn mul(self, rhs: &'b Matrix<T>) -> Self::Output {
        match self.matmul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Matrix<f64> {
    /// Absolute per-element tolerance used by the equality relation.
    pub const TOLERANCE: f64 = 1e-9;

    /// Compares two matrices within an explicit absolute tolerance.
    ///
    /// Matrices of differing shape are never equal; no error is raised.
    pub fn approx_eq_with(&self, other: &Self, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    /// Compares two matrices within [`Matrix::TOLERANCE`].
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Self::TOLERANCE)
    }
}

impl PartialEq for Matrix<f64> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

// NaN elements compare unequal to themselves, as with `f64`; matrices
// holding NaN fall outside the key contract below.
impl Eq for Matrix<f64> {}

impl Hash for Matrix<f64> {
    // Only the shape feeds the hasher: tolerance-equal matrices may differ
    // in raw bits, so element values must stay out of the hash.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
    }
}

impl fmt::Display for Matrix<f64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "[")?;
            for value in self.row_slice(row) {
                write!(f, "{:8.2}", value)?;
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
