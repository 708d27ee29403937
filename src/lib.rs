//! Fixed-dimension matrix algebra.
//!
//! Rows and columns are const generic parameters, so shape errors such as
//! multiplying a `2x3` by a `2x3` are caught by the compiler. Element types
//! may differ between operands; the result type follows [`Promote`].
//!
//! ```
//! use fixmat::Matrix;
//!
//! let m: Matrix<3, 3> = Matrix::from_flat([1, 2, 3, 0, 1, 4, 5, 6, 0]);
//! assert_eq!(m.determinant(), 1);
//!
//! let inverse = m.inverse().unwrap();
//! assert_eq!(&m * &inverse, Matrix::<3, 3, f32>::identity());
//! ```

pub mod error;

pub mod matrix {
    pub mod element;
    pub mod matrix;
    pub mod matrix_cmp;
    pub mod matrix_fmt;
    pub mod matrix_ops;
    pub mod matrix_square;
}
pub mod rings {
    pub mod fraction;
}

pub use error::{Error, Result};
pub use matrix::element::{Element, Field, Promote, Scalar, Widen};
pub use matrix::matrix::{column_vector, row_vector, ColumnVector, Matrix, RowVector};
pub use rings::fraction::Fraction;
