use itertools::Itertools;
use std::fmt;

use crate::matrix::matrix::Matrix;

impl<const R: usize, const C: usize, T> Matrix<R, C, T> {
    /// Human readable shape and element type, e.g. `Matrix<3, 3, i32>`.
    ///
    /// Single-row and single-column shapes are labelled `RowVector<N, T>` and
    /// `ColumnVector<N, T>`.
    pub fn label() -> String {
        let elem = short_type_name::<T>();
        match (R, C) {
            (1, c) if c > 1 => format!("RowVector<{}, {}>", C, elem),
            (r, 1) if r > 1 => format!("ColumnVector<{}, {}>", R, elem),
            _ => format!("Matrix<{}, {}, {}>", R, C, elem),
        }
    }
}

// `alloc::string::String` -> `String`, keeping any generic arguments as is.
fn short_type_name<T: ?Sized>() -> String {
    let name = std::any::type_name::<T>();
    let (path, args) = name.split_at(name.find('<').unwrap_or(name.len()));
    let base = path.rsplit("::").next().unwrap_or(path);
    format!("{}{}", base, args)
}

/// Single-row matrices print as `[ 1 2 3 ]`. Anything taller prints as a
/// boxed table with every column right-aligned to its widest cell:
///
/// ```text
/// ┌ 0 10 200 ┐
/// │ 3  4   5 │
/// └ 6  7   8 ┘
/// ```
///
/// The alternate form (`{:#}`) puts the [`Matrix::label`] on a line above.
impl<const R: usize, const C: usize, T: fmt::Display> fmt::Display for Matrix<R, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "{}", Self::label())?;
        }

        if R == 1 {
            return write!(f, "[ {} ]", self.cells[0].iter().join(" "));
        }

        let rendered: Vec<Vec<String>> = self
            .cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        let widths: Vec<usize> = (0..C)
            .map(|j| rendered.iter().map(|row| row[j].chars().count()).max().unwrap_or(0))
            .collect();

        for (i, row) in rendered.iter().enumerate() {
            let (open, close) = match i {
                0 => ('┌', '┐'),
                i if i + 1 == R => ('└', '┘'),
                _ => ('│', '│'),
            };
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", open)?;
            for (cell, &width) in row.iter().zip(&widths) {
                write!(f, " {:>width$}", cell, width = width)?;
            }
            write!(f, " {}", close)?;
        }
        Ok(())
    }
}

impl<const R: usize, const C: usize, T: fmt::Debug> fmt::Debug for Matrix<R, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix<{}, {}, {}>", R, C, short_type_name::<T>())?;
        f.debug_list().entries(self.cells.iter()).finish()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
