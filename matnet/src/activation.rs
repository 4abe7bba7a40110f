use crate::dtype::Element;
use crate::matrix::Matrix;

fn sigmoid<T: Element>(x: T) -> T {
    T::ONE / (T::ONE + (-x).exp())
}

/// Index of the winning cell under the competitive trailing scan.
///
/// Scans the flattened buffer from the last cell to the first; a
/// candidate replaces the current leader whenever it is greater than or
/// equal to it, so ties resolve to the lowest index. `None` only for an
/// empty matrix.
pub fn competitive_winner<T: Element>(values: &Matrix<T>) -> Option<usize> {
    let data = values.as_ref();
    let mut max = data.len().checked_sub(1)?;
    let mut max_val = data[max];
    for i in (0..max).rev() {
        if data[i] >= max_val {
            max = i;
            max_val = data[i];
        }
    }
    Some(max)
}

/// The closed set of layer activation functions.
///
/// Each variant carries its forward map and its gradient together, so a
/// gradient can never be paired with the wrong activation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ActivationFn {
    #[default]
    Linear,
    Sigmoid,
    /// 1 where the pre-activation is >= 0, else 0. Not differentiable.
    UnitStep,
    /// Winner-take-all: 1 at the maximal cell, 0 elsewhere. Ties go to
    /// the lowest index. Not differentiable.
    Competitive,
}

impl ActivationFn {
    /// Forward map. Total over any shape; output shape equals input
    /// shape.
    pub fn apply<T: Element>(&self, input: &Matrix<T>) -> Matrix<T> {
        match self {
            ActivationFn::Linear => input.clone(),
            ActivationFn::Sigmoid => {
                let data = input.as_ref().iter().map(|&x| sigmoid(x)).collect();
                Matrix::from_vec(data, input.rows(), input.cols())
            }
            ActivationFn::UnitStep => {
                let data = input
                    .as_ref()
                    .iter()
                    .map(|&x| if x >= T::ZERO { T::ONE } else { T::ZERO })
                    .collect();
                Matrix::from_vec(data, input.rows(), input.cols())
            }
            ActivationFn::Competitive => {
                let mut out = Matrix::zeroed(input.rows(), input.cols());
                if let Some(winner) = competitive_winner(input) {
                    out.as_mut()[winner] = T::ONE;
                }
                out
            }
        }
    }

    /// Gradient evaluated at the pre-activation sums, as a square
    /// Jacobian over the flattened input (diagonal for the elementwise
    /// activations). The non-differentiable variants use the zero
    /// matrix convention.
    pub fn gradient<T: Element>(&self, sums: &Matrix<T>) -> Matrix<T> {
        let n = sums.len();
        match self {
            ActivationFn::Linear => Matrix::identity(n),
            ActivationFn::Sigmoid => {
                let mut g = Matrix::zeroed(n, n);
                for (i, &s) in sums.as_ref().iter().enumerate() {
                    let f = sigmoid(s);
                    g.set(i, i, f * (T::ONE - f));
                }
                g
            }
            ActivationFn::UnitStep | ActivationFn::Competitive => Matrix::zeroed(n, n),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ActivationFn, competitive_winner};
    use crate::matrix;
    use crate::matrix::Matrix;

    #[test]
    fn linear_is_identity() {
        let x = matrix![1.0, -2.0, 3.0];
        assert_eq!(ActivationFn::Linear.apply(&x), x);
        let g = ActivationFn::Linear.gradient(&x);
        assert_eq!(g, Matrix::identity(3));
    }

    #[test]
    fn sigmoid_values() {
        let x: Matrix<f64> = matrix![0.0];
        let y = ActivationFn::Sigmoid.apply(&x);
        assert!((y.get(0, 0) - 0.5).abs() < 1e-12);

        let big = matrix![40.0, -40.0];
        let z = ActivationFn::Sigmoid.apply(&big);
        assert!(z.get(0, 0) > 0.999999);
        assert!(z.get(1, 0) < 0.000001);
    }

    #[test]
    fn sigmoid_gradient_at_zero() {
        let s: Matrix<f64> = matrix![0.0, 0.0, 0.0];
        let g = ActivationFn::Sigmoid.gradient(&s);
        assert_eq!(g.shape(), (3, 3));
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 0.25 } else { 0.0 };
                assert!((g.get(r, c) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn unit_step_threshold() {
        let x = matrix![-0.5, 0.0, 2.0];
        let y = ActivationFn::UnitStep.apply(&x);
        assert_eq!(y.as_ref(), &[0.0, 1.0, 1.0]);
        let g = ActivationFn::UnitStep.gradient(&x);
        assert_eq!(g, Matrix::zeroed(3, 3));
    }

    #[test]
    fn competitive_picks_the_max() {
        let x = matrix![0.1, 0.9, 0.5];
        let y = ActivationFn::Competitive.apply(&x);
        assert_eq!(y.as_ref(), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn competitive_tie_breaks_low() {
        let x = matrix![0.5, 0.5];
        assert_eq!(competitive_winner(&x), Some(0));
        let y = ActivationFn::Competitive.apply(&x);
        assert_eq!(y.as_ref(), &[1.0, 0.0]);

        let x3 = matrix![0.2, 0.7, 0.7];
        assert_eq!(competitive_winner(&x3), Some(1));
    }
}
