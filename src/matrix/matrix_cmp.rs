use crate::matrix::matrix::Matrix;

/// Matrices of different shapes are never equal; the check is decided by the
/// const parameters and never reads a cell.
impl<const R: usize, const C: usize, T, const R2: usize, const C2: usize, T2>
    PartialEq<Matrix<R2, C2, T2>> for Matrix<R, C, T>
where
    T: PartialEq<T2>,
{
    fn eq(&self, other: &Matrix<R2, C2, T2>) -> bool {
        if R != R2 || C != C2 {
            return false;
        }
        if std::ptr::eq(self as *const Self as *const (), other as *const _ as *const ()) {
            return true;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<const R: usize, const C: usize, T: Eq> Eq for Matrix<R, C, T> {}

impl<const R: usize, const C: usize, T> approx::AbsDiffEq for Matrix<R, C, T>
where
    T: approx::AbsDiffEq,
    T::Epsilon: Clone,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon.clone()))
    }
}

impl<const R: usize, const C: usize, T> approx::RelativeEq for Matrix<R, C, T>
where
    T: approx::RelativeEq,
    T::Epsilon: Clone,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon.clone(), max_relative.clone()))
    }
}

impl<const R: usize, const C: usize, T> approx::UlpsEq for Matrix<R, C, T>
where
    T: approx::UlpsEq,
    T::Epsilon: Clone,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon.clone(), max_ulps))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
