use crate::matrix::Matrix;
use approx::AbsDiffEq;
use std::iter::zip;

impl<T: AbsDiffEq + Copy> AbsDiffEq for Matrix<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.shape() == other.shape()
            && zip(self.as_ref(), other.as_ref()).all(|(a, b)| T::abs_diff_eq(a, b, epsilon))
    }
}
