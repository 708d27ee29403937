//! Matrices whose shape is part of their type.
//!
//! `Matrix<R, C, T>` stores `R` rows of `C` cells inline, row-major. Every
//! operation that depends on the shape (a product, a minor, a determinant)
//! states its requirement on `R` and `C` in its signature,
//! so a mismatched shape is rejected by the compiler rather than at runtime.

use num_traits::{AsPrimitive, Zero};
use std::ops::{Index, IndexMut};

use crate::matrix::element::Widen;

/// A `R x C` matrix of `T`, stored row-major.
///
/// Zero-sized dimensions are rejected at compile time.
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<const R: usize, const C: usize, T = i32> {
    pub(crate) cells: [[T; C]; R],
}

pub type RowVector<const N: usize, T = i32> = Matrix<1, N, T>;

pub type ColumnVector<const N: usize, T = i32> = Matrix<N, 1, T>;

impl<const R: usize, const C: usize, T> Matrix<R, C, T> {
    pub const ROWS: usize = R;
    pub const COLS: usize = C;

    #[inline(always)]
    fn assert_shape() {
        const { assert!(R > 0 && C > 0, "matrix dimensions must be non-zero") };
    }

    pub fn new(cells: [[T; C]; R]) -> Self {
        Self::assert_shape();
        Matrix { cells }
    }

    /// `f(row, col)` is called in row-major order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::new(std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))))
    }

    /// Construct a matrix from up to `R * C` values in row-major order.
    ///
    /// Cells past the end of `values` are zero. Passing more values than the
    /// matrix holds does not compile.
    pub fn from_flat<const K: usize>(values: [T; K]) -> Self
    where
        T: Zero,
    {
        const { assert!(K <= R * C, "too many values for the matrix shape") };
        values.into_iter().collect()
    }

    pub fn zero() -> Self
    where
        T: Zero,
    {
        Matrix::from_fn(|_, _| T::zero())
    }

    #[inline(always)]
    pub const fn rows(&self) -> usize {
        R
    }

    #[inline(always)]
    pub const fn cols(&self) -> usize {
        C
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get(row)?.get(col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    pub fn row(&self, row: usize) -> &[T; C] {
        &self.cells[row]
    }

    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.cells
    }

    pub fn into_rows(self) -> [[T; C]; R] {
        self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut().flatten()
    }

    pub fn map<U, F>(self, mut f: F) -> Matrix<R, C, U>
    where
        F: FnMut(T) -> U,
    {
        Matrix::new(self.cells.map(|row| row.map(&mut f)))
    }

    pub fn map_ref<U, F>(&self, mut f: F) -> Matrix<R, C, U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix::from_fn(|i, j| f(&self.cells[i][j]))
    }

    pub fn transpose(&self) -> Matrix<C, R, T>
    where
        T: Clone,
    {
        Matrix::from_fn(|i, j| self.cells[j][i].clone())
    }

    /// The submatrix left after deleting one row and one column.
    ///
    /// The output shape must be `(R - 1) x (C - 1)`; anything else does not
    /// compile. Out-of-range indices are clamped to the last row/column.
    ///
    /// ```
    /// use fixmat::Matrix;
    ///
    /// let m: Matrix<3, 2> = Matrix::from_flat([0, 1, 2, 3, 4, 5]);
    /// let minor: Matrix<2, 1> = m.minor(1, 2);
    /// assert_eq!(minor, Matrix::<2, 1>::from_flat([0, 4]));
    /// ```
    pub fn minor<const R2: usize, const C2: usize>(&self, row: usize, col: usize) -> Matrix<R2, C2, T>
    where
        T: Clone,
    {
        const {
            assert!(
                R > 1 && C > 1 && R2 + 1 == R && C2 + 1 == C,
                "a minor has exactly one row and one column less than its matrix"
            )
        };
        let (row, col) = Self::clamp_index(row, col);

        Matrix::from_fn(|i, j| {
            let i = if i < row { i } else { i + 1 };
            let j = if j < col { j } else { j + 1 };
            self.cells[i][j].clone()
        })
    }

    pub(crate) fn clamp_index(row: usize, col: usize) -> (usize, usize) {
        let clamped = (row.min(R - 1), col.min(C - 1));
        if clamped != (row, col) {
            log::trace!(
                "index ({}, {}) clamped to {:?} on a {}x{} matrix",
                row,
                col,
                clamped,
                R,
                C
            );
        }
        clamped
    }

    pub fn convert<U: From<T>>(self) -> Matrix<R, C, U> {
        self.map(U::from)
    }

    /// `as` cast, cell by cell.
    pub fn cast<U>(&self) -> Matrix<R, C, U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        self.map_ref(|&cell| cell.as_())
    }

    /// Convert each cell to the element's field type (see [`Widen`]).
    pub fn widen(&self) -> Matrix<R, C, T::Field>
    where
        T: Widen,
    {
        self.map_ref(|cell| cell.clone().widen())
    }
}

impl<const N: usize, T> Matrix<1, N, T> {
    pub fn row_vector(values: [T; N]) -> Self {
        Matrix::new([values])
    }
}

impl<const N: usize, T> Matrix<N, 1, T> {
    pub fn column_vector(values: [T; N]) -> Self {
        Matrix::new(values.map(|value| [value]))
    }
}

pub fn row_vector<const N: usize, T>(values: [T; N]) -> RowVector<N, T> {
    Matrix::row_vector(values)
}

pub fn column_vector<const N: usize, T>(values: [T; N]) -> ColumnVector<N, T> {
    Matrix::column_vector(values)
}

impl<const R: usize, const C: usize, T: Zero> Default for Matrix<R, C, T> {
    fn default() -> Self {
        Matrix::zero()
    }
}

/// Fills row-major; missing cells are zero and surplus items are ignored.
impl<const R: usize, const C: usize, T: Zero> FromIterator<T> for Matrix<R, C, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut iter = iter.into_iter();
        Matrix::from_fn(|_, _| iter.next().unwrap_or_else(T::zero))
    }
}

impl<const R: usize, const C: usize, T> From<[[T; C]; R]> for Matrix<R, C, T> {
    fn from(cells: [[T; C]; R]) -> Self {
        Matrix::new(cells)
    }
}

impl<const R: usize, const C: usize, T> Index<usize> for Matrix<R, C, T> {
    type Output = [T; C];

    #[inline(always)]
    fn index(&self, row: usize) -> &[T; C] {
        &self.cells[row]
    }
}

impl<const R: usize, const C: usize, T> IndexMut<usize> for Matrix<R, C, T> {
    #[inline(always)]
    fn index_mut(&mut self, row: usize) -> &mut [T; C] {
        &mut self.cells[row]
    }
}

impl<const R: usize, const C: usize, T> Index<(usize, usize)> for Matrix<R, C, T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row][col]
    }
}

impl<const R: usize, const C: usize, T> IndexMut<(usize, usize)> for Matrix<R, C, T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row][col]
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
