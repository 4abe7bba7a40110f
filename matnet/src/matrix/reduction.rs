use crate::dtype::Element;
use crate::matrix::Matrix;

impl<T: Element> Matrix<T> {
    /// In-place forward Gaussian elimination.
    ///
    /// Pivot search takes the first nonzero entry in each column, not
    /// the largest magnitude, and pivot rows are normalized to a
    /// leading 1. Returns the pivot count, an upper bound on rank.
    pub fn row_echelon(&mut self) -> usize {
        let mut pivots = 0;
        let mut j = 0;
        while j < self.cols() && pivots < self.rows() {
            if self.get(pivots, j) != T::ZERO {
                let inv = T::ONE / self.get(pivots, j);
                self.scale_row(pivots, inv);
                for k in (pivots + 1)..self.rows() {
                    let factor = -self.get(k, j);
                    if factor != T::ZERO {
                        self.add_scaled_row(k, pivots, factor);
                    }
                }
                pivots += 1;
                j += 1;
            } else {
                // swap the first row with a nonzero entry up into
                // pivot position, or give up on this column
                match (pivots..self.rows()).find(|&i| self.get(i, j) != T::ZERO) {
                    Some(i) => self.swap_rows(i, pivots),
                    None => j += 1,
                }
            }
        }
        pivots
    }

    /// In-place reduction to reduced row-echelon form. Returns the rank.
    pub fn reduced_row_echelon(&mut self) -> usize {
        let rank = self.row_echelon();
        for i in (1..rank).rev() {
            let Some(j) = (0..self.cols()).find(|&j| self.get(i, j) != T::ZERO) else {
                continue;
            };
            for k in 0..i {
                let factor = -self.get(k, j);
                if factor != T::ZERO {
                    self.add_scaled_row(k, i, factor);
                }
            }
        }
        rank
    }
}

#[cfg(test)]
mod test {
    use crate::matrix;
    use crate::matrix::Matrix;

    #[test]
    fn full_rank_pivot_count() {
        let mut m = matrix![[2.0, 1.0, 0.0], [0.0, 3.0, 1.0], [1.0, 0.0, 2.0]];
        assert_eq!(m.row_echelon(), 3);
    }

    #[test]
    fn zero_matrix_has_no_pivots() {
        let mut m: Matrix<f64> = Matrix::zeroed(3, 3);
        assert_eq!(m.row_echelon(), 0);
        let mut z: Matrix<f64> = Matrix::zeroed(2, 4);
        assert_eq!(z.reduced_row_echelon(), 0);
    }

    #[test]
    fn dependent_rows_lose_rank() {
        let mut m = matrix![[1.0, 2.0], [2.0, 4.0]];
        assert_eq!(m.row_echelon(), 1);
    }

    #[test]
    fn zero_leading_column_swaps() {
        let mut m = matrix![[0.0, 1.0], [1.0, 0.0]];
        assert_eq!(m.row_echelon(), 2);
        assert_eq!(m.as_ref(), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn rref_solves_a_system() {
        // x + y = 3, x - y = 1  =>  x = 2, y = 1
        let mut m: Matrix<f64> = matrix![[1.0, 1.0, 3.0], [1.0, -1.0, 1.0]];
        let rank = m.reduced_row_echelon();
        assert_eq!(rank, 2);
        assert!((m.get(0, 2) - 2.0).abs() < 1e-12);
        assert!((m.get(1, 2) - 1.0).abs() < 1e-12);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn rref_identity_for_full_rank() {
        let mut m = matrix![[2.0, 1.0], [1.0, 3.0]];
        assert_eq!(m.reduced_row_echelon(), 2);
        let i: Matrix<f64> = Matrix::identity(2);
        assert_eq!(m, i);
    }
}
