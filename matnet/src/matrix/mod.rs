mod algebra;
#[cfg(feature = "approx")]
mod approx;
mod reduction;

use crate::dtype::Element;
use rand::Rng;
use rand::distributions::Distribution;
use std::fmt::{Debug, Display, Formatter, Write};

/// Dense row-major matrix with a fixed shape.
///
/// The row and column counts are set at construction and never change;
/// only cell contents mutate. Operations that produce a new matrix hand
/// ownership to the caller, and intermediates are released when they go
/// out of scope.
#[derive(Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols);
        Matrix { data, rows, cols }
    }

    /// Column vector with one row per entry.
    pub fn column(data: Vec<T>) -> Self {
        let rows = data.len();
        Matrix { data, rows, cols: 1 }
    }

    pub fn from_rows<const N: usize>(rows: Vec<[T; N]>) -> Self {
        let row_count = rows.len();
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Matrix {
            data,
            rows: row_count,
            cols: N,
        }
    }

    pub fn from_distribution<R, S>(rng: &mut R, dist: S, rows: usize, cols: usize) -> Self
    where
        R: Rng,
        S: Distribution<T>,
    {
        let data: Vec<T> = dist.sample_iter(rng).take(rows * cols).collect();
        Matrix { data, rows, cols }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> Matrix<T> {
    pub fn filled(value: T, rows: usize, cols: usize) -> Self {
        Matrix {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> T {
        assert!(r < self.rows && c < self.cols, "cell ({r}, {c}) out of bounds");
        self.data[r * self.cols + c]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        assert!(r < self.rows && c < self.cols, "cell ({r}, {c}) out of bounds");
        self.data[r * self.cols + c] = value;
    }

    /// Materialized copy of row `r` as a 1 x cols matrix, not a view.
    pub fn row_vector(&self, r: usize) -> Self {
        assert!(r < self.rows, "row {r} out of bounds");
        let start = r * self.cols;
        Matrix {
            data: self.data[start..start + self.cols].to_vec(),
            rows: 1,
            cols: self.cols,
        }
    }

    /// Materialized copy of column `c` as a rows x 1 matrix.
    pub fn col_vector(&self, c: usize) -> Self {
        assert!(c < self.cols, "column {c} out of bounds");
        let data: Vec<T> = (0..self.rows).map(|r| self.data[r * self.cols + c]).collect();
        Matrix {
            data,
            rows: self.rows,
            cols: 1,
        }
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(i < self.rows && j < self.rows, "row out of bounds");
        if i == j {
            return;
        }
        for x in 0..self.cols {
            self.data.swap(i * self.cols + x, j * self.cols + x);
        }
    }
}

impl<T: Element> Matrix<T> {
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self::filled(T::ZERO, rows, cols)
    }

    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeroed(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::ONE;
        }
        m
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn scale_row(&mut self, r: usize, factor: T) {
        assert!(r < self.rows, "row {r} out of bounds");
        let start = r * self.cols;
        for v in &mut self.data[start..start + self.cols] {
            *v *= factor;
        }
    }

    /// Adds `factor` times row `src` into row `dst`.
    pub fn add_scaled_row(&mut self, dst: usize, src: usize, factor: T) {
        assert!(dst < self.rows && src < self.rows, "row out of bounds");
        for x in 0..self.cols {
            let v = self.data[src * self.cols + x];
            self.data[dst * self.cols + x] += factor * v;
        }
    }
}

impl<T> AsRef<[T]> for Matrix<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for Matrix<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Element> Display for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} by {} matrix:", self.rows, self.cols)?;
        for r in 0..self.rows {
            f.write_char('|')?;
            for c in 0..self.cols {
                if c > 0 {
                    f.write_char(' ')?;
                }
                let v = self.data[r * self.cols + c];
                if v >= T::ZERO {
                    f.write_char(' ')?;
                }
                write!(f, "{v:.6}")?;
            }
            f.write_str("|\n")?;
        }
        Ok(())
    }
}

fn fmt_elements<T: Debug>(f: &mut Formatter<'_>, slice: &[T]) -> std::fmt::Result {
    let mut first = true;
    for x in slice {
        if first {
            first = false;
        } else {
            f.write_str(", ")?;
        }
        write!(f, "{x:?}")?;
    }
    Ok(())
}

impl<T: Debug> Debug for Matrix<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Matrix({} x {}) [", self.rows, self.cols)?;
        if self.data.len() > 10 {
            fmt_elements(f, &self.data[..5])?;
            f.write_str(" ... ")?;
            fmt_elements(f, &self.data[self.data.len() - 5..])?;
        } else {
            fmt_elements(f, &self.data)?;
        }
        f.write_char(']')
    }
}

/// Matrix literal. Nested brackets build a matrix row by row; a flat
/// list builds a column vector.
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::matrix::Matrix::from_rows(vec![$([$($x,)*],)*])
    };
    ($($x:expr),* $(,)?) => {
        $crate::matrix::Matrix::column(vec![$($x,)*])
    };
}

#[cfg(test)]
mod test {
    use super::Matrix;

    #[test]
    fn construction_and_access() {
        let mut m: Matrix<f64> = Matrix::zeroed(2, 3);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.len(), 6);
        m.set(1, 2, 4.5);
        assert_eq!(m.get(1, 2), 4.5);
        assert_eq!(m.get(0, 0), 0.0);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get_panics() {
        let m: Matrix<f64> = Matrix::zeroed(2, 2);
        m.get(2, 0);
    }

    #[test]
    fn literal_macro_shapes() {
        let m = matrix![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.get(2, 1), 6.0);

        let v = matrix![1.0, 2.0, 3.0];
        assert_eq!(v.shape(), (3, 1));
        assert_eq!(v.get(1, 0), 2.0);
    }

    #[test]
    fn row_and_col_vectors_are_copies() {
        let mut m = matrix![[1.0, 2.0], [3.0, 4.0]];
        let row = m.row_vector(1);
        let col = m.col_vector(0);
        m.set(1, 0, 99.0);
        assert_eq!(row.as_ref(), &[3.0, 4.0]);
        assert_eq!(col.as_ref(), &[1.0, 3.0]);
    }

    #[test]
    fn row_mutation() {
        let mut m = matrix![[1.0, 2.0], [3.0, 4.0]];
        m.swap_rows(0, 1);
        assert_eq!(m.as_ref(), &[3.0, 4.0, 1.0, 2.0]);
        m.scale_row(0, 2.0);
        assert_eq!(m.as_ref(), &[6.0, 8.0, 1.0, 2.0]);
        m.add_scaled_row(1, 0, 0.5);
        assert_eq!(m.as_ref(), &[6.0, 8.0, 4.0, 6.0]);
    }

    #[test]
    fn identity_diagonal() {
        let i: Matrix<f64> = Matrix::identity(3);
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(i.get(r, c), if r == c { 1.0 } else { 0.0 });
            }
        }
    }
}
