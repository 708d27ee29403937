use itertools::iproduct;
use num_traits::Zero;
use std::mem;
use std::ops;

use crate::matrix::element::{Element, Promote, Scalar};
use crate::matrix::matrix::Matrix;

// ---------------------------------- add ----------------------------------

impl<const R: usize, const C: usize, T: Element> ops::AddAssign<&Matrix<R, C, T>>
    for Matrix<R, C, T>
{
    fn add_assign(&mut self, rhs: &Matrix<R, C, T>) {
        for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
            let acc = mem::replace(lhs, T::zero());
            *lhs = acc + rhs.clone();
        }
    }
}

impl<const R: usize, const C: usize, T: Element> ops::AddAssign<Matrix<R, C, T>>
    for Matrix<R, C, T>
{
    fn add_assign(&mut self, rhs: Matrix<R, C, T>) {
        *self += &rhs;
    }
}

impl<const R: usize, const C: usize, T: Element> ops::Add<&Matrix<R, C, T>> for &Matrix<R, C, T> {
    type Output = Matrix<R, C, T>;

    fn add(self, rhs: &Matrix<R, C, T>) -> Matrix<R, C, T> {
        let mut ret = self.clone();
        ret += rhs;
        ret
    }
}

impl<const R: usize, const C: usize, T: Element> ops::Add<Matrix<R, C, T>> for Matrix<R, C, T> {
    type Output = Matrix<R, C, T>;

    fn add(mut self, rhs: Matrix<R, C, T>) -> Matrix<R, C, T> {
        self += &rhs;
        self
    }
}

// ------------------------------ scalar mul -------------------------------

impl<const R: usize, const C: usize, T, S> ops::Mul<S> for &Matrix<R, C, T>
where
    T: Promote<S> + Clone,
    S: Scalar,
{
    type Output = Matrix<R, C, T::Output>;

    fn mul(self, scalar: S) -> Self::Output {
        let scalar = T::lift_rhs(scalar);
        self.map_ref(|cell| cell.clone().lift_lhs() * scalar.clone())
    }
}

impl<const R: usize, const C: usize, T, S> ops::Mul<S> for Matrix<R, C, T>
where
    T: Promote<S>,
    S: Scalar,
{
    type Output = Matrix<R, C, T::Output>;

    fn mul(self, scalar: S) -> Self::Output {
        let scalar = T::lift_rhs(scalar);
        self.map(|cell| cell.lift_lhs() * scalar.clone())
    }
}

impl<const R: usize, const C: usize, T: Scalar> ops::MulAssign<T> for Matrix<R, C, T> {
    fn mul_assign(&mut self, scalar: T) {
        for cell in self.iter_mut() {
            let value = mem::replace(cell, T::zero());
            *cell = value * scalar.clone();
        }
    }
}

// ------------------------------ matrix mul -------------------------------

impl<const M: usize, const N: usize, const O: usize, T, T2> ops::Mul<&Matrix<N, O, T2>>
    for &Matrix<M, N, T>
where
    T: Promote<T2> + Clone,
    T2: Clone,
{
    type Output = Matrix<M, O, T::Output>;

    fn mul(self, rhs: &Matrix<N, O, T2>) -> Self::Output {
        let mut ret = Matrix::<M, O, T::Output>::zero();
        for (i, j, k) in iproduct!(0..M, 0..N, 0..O) {
            let term = self.cells[i][j].clone().lift_lhs() * T::lift_rhs(rhs.cells[j][k].clone());
            let acc = mem::replace(&mut ret.cells[i][k], Zero::zero());
            ret.cells[i][k] = acc + term;
        }
        ret
    }
}

impl<const M: usize, const N: usize, const O: usize, T, T2> ops::Mul<Matrix<N, O, T2>>
    for Matrix<M, N, T>
where
    T: Promote<T2> + Clone,
    T2: Clone,
{
    type Output = Matrix<M, O, T::Output>;

    fn mul(self, rhs: Matrix<N, O, T2>) -> Self::Output {
        &self * &rhs
    }
}

/// `self = self * rhs`; `rhs` must be square so the shape is unchanged.
impl<const R: usize, const C: usize, T, T2> ops::MulAssign<&Matrix<C, C, T2>> for Matrix<R, C, T>
where
    T: Promote<T2, Output = T> + Clone,
    T2: Clone,
{
    fn mul_assign(&mut self, rhs: &Matrix<C, C, T2>) {
        // can't avoid the temp copy regardless
        *self = &*self * rhs;
    }
}

impl<const R: usize, const C: usize, T, T2> ops::MulAssign<Matrix<C, C, T2>> for Matrix<R, C, T>
where
    T: Promote<T2, Output = T> + Clone,
    T2: Clone,
{
    fn mul_assign(&mut self, rhs: Matrix<C, C, T2>) {
        *self *= &rhs;
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
