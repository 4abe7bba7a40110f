use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use std::iter::zip;

impl<T: Element> Matrix<T> {
    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::ShapeMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "add")?;
        let data = zip(self.as_ref(), other.as_ref()).map(|(&a, &b)| a + b).collect();
        Ok(Matrix::from_vec(data, self.rows(), self.cols()))
    }

    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "sub")?;
        let data = zip(self.as_ref(), other.as_ref()).map(|(&a, &b)| a - b).collect();
        Ok(Matrix::from_vec(data, self.rows(), self.cols()))
    }

    /// Elementwise product.
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other, "hadamard")?;
        let data = zip(self.as_ref(), other.as_ref()).map(|(&a, &b)| a * b).collect();
        Ok(Matrix::from_vec(data, self.rows(), self.cols()))
    }

    pub fn scale(&self, factor: T) -> Self {
        let data = self.as_ref().iter().map(|&a| a * factor).collect();
        Matrix::from_vec(data, self.rows(), self.cols())
    }

    /// A(m x k) * B(k x n) -> (m x n).
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(Error::ShapeMismatch {
                op: "matmul",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let (m, k, n) = (self.rows(), self.cols(), other.cols());
        let mut out = Matrix::zeroed(m, n);
        unsafe {
            T::gemm(
                m,
                k,
                n,
                T::ONE,
                self.as_ref().as_ptr(),
                k as isize,
                1,
                other.as_ref().as_ptr(),
                n as isize,
                1,
                T::ZERO,
                out.as_mut().as_mut_ptr(),
                n as isize,
                1,
            );
        }
        Ok(out)
    }

    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let src = self.as_ref();
        let mut data = Vec::with_capacity(src.len());
        for c in 0..cols {
            for r in 0..rows {
                data.push(src[r * cols + c]);
            }
        }
        Matrix::from_vec(data, cols, rows)
    }

    /// Euclidean norm of all cells treated as one flattened vector.
    pub fn vec_norm(&self) -> T {
        let sum = self
            .as_ref()
            .iter()
            .fold(T::ZERO, |acc, &v| acc + v * v);
        sum.sqrt()
    }

    /// Sum of elementwise products over the raw flattened buffers.
    ///
    /// Layout-dependent: for equal-length operands of different shapes
    /// this is not a proper inner product. Both operands must have the
    /// same number of cells.
    pub fn dot(&self, other: &Self) -> Result<T> {
        if self.len() != other.len() {
            return Err(Error::ShapeMismatch {
                op: "dot",
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(zip(self.as_ref(), other.as_ref()).fold(T::ZERO, |acc, (&a, &b)| acc + a * b))
    }
}
