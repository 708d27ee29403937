use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::matrix::element::{Element, Widen};
use crate::matrix::matrix::Matrix;

impl<const N: usize, T: Element> Matrix<N, N, T> {
    pub fn identity() -> Self {
        Matrix::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn trace(&self) -> T {
        (0..N).map(|i| self.cells[i][i].clone()).sum()
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Sizes up to 3x3 use the closed forms. Larger sizes recurse, which is
    /// exponential in `N` but exact for integer and rational elements.
    /// Unsigned elements overflow as soon as an intermediate goes negative;
    /// call [`Matrix::widen`] first.
    pub fn determinant(&self) -> T {
        determinant_of(&self.cells, N)
    }

    /// The signed determinant of `minor(row, col)`.
    ///
    /// Indices are clamped like [`Matrix::minor`]. Only defined for `N > 1`.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        const { assert!(N > 1, "cofactor of a 1x1 matrix") };
        let (row, col) = Self::clamp_index(row, col);
        cofactor_of(&self.cells, N, row, col)
    }

    /// The matrix of all cofactors. A 1x1 matrix has the cofactor matrix `[1]`.
    pub fn cofactor_matrix(&self) -> Self {
        Matrix::from_fn(|i, j| cofactor_of(&self.cells, N, i, j))
    }

    /// Whether [`Matrix::inverse`] succeeds: the determinant, taken in the
    /// widened type, is exactly non-zero. There is no tolerance for floats.
    pub fn invertible(&self) -> bool
    where
        T: Widen,
    {
        !self.widen().determinant().is_zero()
    }

    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// `adjugate() * (1 / determinant())`, computed in the element's field type.
    ///
    /// Integer matrices are widened first (see [`Widen`]), so
    /// `Matrix<3, 3, i32>` inverts to `Matrix<3, 3, f32>`.
    ///
    /// # Errors
    ///
    /// [`Error::Singular`] when the determinant is exactly zero.
    pub fn inverse(&self) -> Result<Matrix<N, N, T::Field>>
    where
        T: Widen,
    {
        let widened = self.widen();
        let det = widened.determinant();
        if det.is_zero() {
            log::debug!("refusing to invert singular {}", Self::label());
            return Err(Error::Singular);
        }

        let scale = <T::Field as One>::one() / det;
        Ok(widened.adjugate().map(|cell| cell * scale.clone()))
    }
}

// The helpers below work on the leading `n x n` block of an `N x N` array,
// so the recursion never needs a type for a smaller matrix.

fn determinant_of<T: Element, const N: usize>(cells: &[[T; N]; N], n: usize) -> T {
    let a = |i: usize, j: usize| cells[i][j].clone();
    match n {
        0 => T::one(),
        1 => a(0, 0),
        2 => a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
        3 => {
            a(0, 0) * a(1, 1) * a(2, 2) // + a e i
                + a(0, 1) * a(1, 2) * a(2, 0) // + b f g
                + a(0, 2) * a(1, 0) * a(2, 1) // + c d h
                - a(0, 2) * a(1, 1) * a(2, 0) // - c e g
                - a(0, 0) * a(1, 2) * a(2, 1) // - a f h
                - a(0, 1) * a(1, 0) * a(2, 2) // - b d i
        }
        _ => {
            log::trace!("expanding a {}x{} determinant along row 0", n, n);
            (0..n).map(|j| a(0, j) * cofactor_of(cells, n, 0, j)).sum()
        }
    }
}

fn cofactor_of<T: Element, const N: usize>(cells: &[[T; N]; N], n: usize, row: usize, col: usize) -> T {
    let det = determinant_of(&shifted_minor(cells, n, row, col), n - 1);
    if (row + col) % 2 == 0 {
        det
    } else {
        T::zero() - det
    }
}

/// Removes `row` and `col` from the leading `n x n` block, shifting the rest
/// up and left. Cells outside the new `(n - 1) x (n - 1)` block are zero.
fn shifted_minor<T: Element, const N: usize>(
    cells: &[[T; N]; N],
    n: usize,
    row: usize,
    col: usize,
) -> [[T; N]; N] {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            if i + 1 < n && j + 1 < n {
                let i = if i < row { i } else { i + 1 };
                let j = if j < col { j } else { j + 1 };
                cells[i][j].clone()
            } else {
                T::zero()
            }
        })
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::fraction::Fraction;
    use approx::assert_relative_eq;
    use num_bigint::BigInt;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix<const N: usize>(rng: &mut StdRng) -> Matrix<N, N, i64> {
        Matrix::from_fn(|_, _| rng.gen_range(-9..=9))
    }

    fn invertible() -> Matrix<3, 3> {
        Matrix::from_flat([1, 2, 3, 0, 1, 4, 5, 6, 0])
    }

    #[test]
    fn test_matrix_identity_and_trace() {
        let eye = Matrix::<5, 5, i32>::identity();
        assert_eq!(eye.trace(), 5);
        assert_eq!(eye.determinant(), 1);
        assert_eq!(eye[3], [0, 0, 0, 1, 0]);

        let m: Matrix<3, 3> = Matrix::from_flat([1, 2, 3, 4, 5, 6, 7, 80, 9]);
        assert_eq!(m.trace(), 15);
    }

    #[test]
    fn test_matrix_determinant_small() {
        let square1: Matrix<1, 1> = Matrix::from_flat([1]);
        let square2: Matrix<2, 2> = Matrix::from_flat([1, 2, 3, 4]);
        let square3: Matrix<3, 3> = Matrix::from_flat([1, 2, 3, 4, 5, 6, 7, 80, 9]);
        assert_eq!(square1.determinant(), 1);
        assert_eq!(square2.determinant(), -2);
        assert_eq!(square3.determinant(), 432);
        assert_eq!(invertible().determinant(), 1);
    }

    #[test]
    fn test_matrix_determinant_large() {
        let m: Matrix<4, 4> = Matrix::from_flat([1, 0, 2, -1, 3, 0, 0, 5, 2, 1, 4, -3, 1, 0, 5, 0]);
        assert_eq!(m.determinant(), 30);

        let triangular: Matrix<5, 5> = Matrix::from_flat([
            2, 7, -1, 3, 9, //
            0, 3, 4, 1, -8, //
            0, 0, 1, 6, 2, //
            0, 0, 0, 4, 5, //
            0, 0, 0, 0, 5,
        ]);
        assert_eq!(triangular.determinant(), 120);
        assert_eq!(triangular.transpose().determinant(), 120);

        // swapping two rows flips the sign
        let mut swapped = triangular;
        swapped.cells.swap(0, 4);
        assert_eq!(swapped.determinant(), -120);
    }

    #[test]
    fn test_matrix_determinant_of_transpose() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let m = random_matrix::<3>(&mut rng);
            assert_eq!(m.determinant(), m.transpose().determinant());
            let m = random_matrix::<4>(&mut rng);
            assert_eq!(m.determinant(), m.transpose().determinant());
            let m = random_matrix::<5>(&mut rng);
            assert_eq!(m.determinant(), m.transpose().determinant());
        }
    }

    #[test]
    fn test_matrix_determinant_is_multiplicative() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            let a = random_matrix::<4>(&mut rng);
            let b = random_matrix::<4>(&mut rng);
            assert_eq!((&a * &b).determinant(), a.determinant() * b.determinant());
        }
    }

    #[test]
    fn test_matrix_cofactor() {
        let m = invertible();
        let expected: Matrix<3, 3> = Matrix::from_flat([-24, 20, -5, 18, -15, 4, 5, -4, 1]);
        assert_eq!(m.cofactor_matrix(), expected);
        assert_eq!(m.cofactor(0, 1), 20);
        assert_eq!(m.cofactor(2, 1), -4);
        // clamped to (2, 2)
        assert_eq!(m.cofactor(5, 5), 1);

        let square3: Matrix<3, 3> = Matrix::from_flat([1, 2, 3, 4, 5, 6, 7, 80, 9]);
        let expanded: i32 = (0..3).map(|j| square3[0][j] * square3.cofactor(0, j)).sum();
        assert_eq!(expanded, square3.determinant());

        let one: Matrix<1, 1> = Matrix::from_flat([7]);
        assert_eq!(one.cofactor_matrix().into_rows(), [[1]]);
    }

    #[test]
    fn test_matrix_adjugate() {
        let m = invertible();
        let expected: Matrix<3, 3> = Matrix::from_flat([-24, 18, 5, 20, -15, -4, -5, 4, 1]);
        assert_eq!(m.adjugate(), expected);
        assert_eq!(m.adjugate(), m.cofactor_matrix().transpose());

        // A * adj(A) == det(A) * I
        let m: Matrix<4, 4> = Matrix::from_flat([1, 0, 2, -1, 3, 0, 0, 5, 2, 1, 4, -3, 1, 0, 5, 0]);
        assert_eq!(&m * &m.adjugate(), Matrix::<4, 4, i32>::identity() * 30i32);
    }

    #[test]
    fn test_matrix_invertible() {
        assert!(invertible().invertible());
        let singular: Matrix<3, 3> = Matrix::from_flat([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(!singular.invertible());
        assert!(Matrix::<4, 4, f64>::identity().invertible());
    }

    #[test]
    fn test_matrix_inverse() {
        let m = invertible();
        let inverse: Matrix<3, 3, f32> = m.inverse().unwrap();
        let expected = Matrix::<3, 3, f32>::from_flat([-24., 18., 5., 20., -15., -4., -5., 4., 1.]);
        assert_eq!(inverse, expected);
        assert_relative_eq!(inverse.determinant(), 1.0);

        let twice: Matrix<3, 3, f32> = inverse.inverse().unwrap();
        assert_relative_eq!(twice, m.cast::<f32>(), epsilon = 1e-3);
        assert_relative_eq!(&m * &inverse, Matrix::identity(), epsilon = 1e-4);

        let one = Matrix::<1, 1, f64>::from_flat([4.0]);
        assert_eq!(one.inverse().unwrap().into_rows(), [[0.25]]);
    }

    #[test]
    fn test_matrix_inverse_random() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut checked = 0;
        while checked < 10 {
            let m = random_matrix::<4>(&mut rng);
            if !m.invertible() {
                continue;
            }
            let inverse: Matrix<4, 4, f64> = m.inverse().unwrap();
            assert_relative_eq!(&m * &inverse, Matrix::identity(), epsilon = 1e-9);
            assert_relative_eq!(&inverse * &m, Matrix::identity(), epsilon = 1e-9);
            assert!(inverse.invertible());
            let twice = inverse.inverse().unwrap();
            assert_relative_eq!(twice, m.cast::<f64>(), epsilon = 1e-6);
            checked += 1;
        }
    }

    #[test]
    fn test_matrix_inverse_exact() {
        let m = Matrix::<2, 2, Fraction>::from_fn(|i, j| Fraction::from((2 * i + j + 1) as i64));
        let inverse = m.inverse().unwrap();
        let expected = Matrix::new([["-2", "1"], ["3/2", "-1/2"]]).map(|s| s.parse::<Fraction>().unwrap());
        assert_eq!(inverse, expected);
        assert_eq!(&m * &inverse, Matrix::<2, 2, i64>::identity());

        let big = invertible().convert::<BigInt>();
        let inverse: Matrix<3, 3, Fraction> = big.inverse().unwrap();
        assert_eq!(inverse, invertible().adjugate().convert::<i64>());
    }

    #[test]
    fn test_matrix_inverse_unsigned() {
        let m = Matrix::<2, 2, u32>::from_flat([1, 2, 3, 4]);
        assert!(m.invertible());
        let inverse: Matrix<2, 2, f64> = m.inverse().unwrap();
        assert_relative_eq!(inverse, Matrix::from_flat([-2.0, 1.0, 1.5, -0.5]), epsilon = 1e-12);

        let bytes = Matrix::<2, 2, u8>::from_flat([16, 16, 16, 17]);
        assert!(bytes.invertible());
        assert_eq!(bytes.widen().determinant(), 16.0);

        let singular = Matrix::<2, 2, u64>::from_flat([2, 4, 1, 2]);
        assert!(!singular.invertible());
        assert!(singular.inverse().is_err());
    }

    #[test]
    fn test_matrix_inverse_singular() {
        let singular: Matrix<2, 2> = Matrix::from_flat([1, 2, 2, 4]);
        assert_eq!(singular.inverse().unwrap_err(), Error::Singular);

        let singular = Matrix::<3, 3, Fraction>::zero();
        assert_eq!(singular.inverse().unwrap_err(), Error::Singular);
    }
}
