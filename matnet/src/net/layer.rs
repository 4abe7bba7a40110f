use crate::activation::ActivationFn;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use std::fmt::{Debug, Formatter};

/// One affine transform plus its activation function.
///
/// Holds the weight matrix W (output x input), an optional recurrent
/// weight matrix R (output x output, present exactly when the
/// recurrence depth is nonzero), and the activation. Weight shapes are
/// fixed for the life of the layer; training mutates cell contents or
/// swaps in same-shaped matrices.
pub struct Layer<T> {
    weights: Matrix<T>,
    recurrent: Option<Matrix<T>>,
    recurrence: usize,
    activation: ActivationFn,
}

impl<T: Element> Layer<T> {
    /// Blank layer with zeroed weights.
    pub fn new(input: usize, output: usize, activation: ActivationFn) -> Self {
        Layer {
            weights: Matrix::zeroed(output, input),
            recurrent: None,
            recurrence: 0,
            activation,
        }
    }

    /// Blank recurrent layer with zeroed weights; `depth` must be
    /// nonzero.
    pub fn recurrent(input: usize, output: usize, depth: usize, activation: ActivationFn) -> Result<Self> {
        if depth == 0 {
            return Err(Error::InvalidConfiguration(
                "recurrent layer needs a nonzero recurrence depth".into(),
            ));
        }
        Ok(Layer {
            weights: Matrix::zeroed(output, input),
            recurrent: Some(Matrix::zeroed(output, output)),
            recurrence: depth,
            activation,
        })
    }

    /// Layer from preset matrices. The recurrent matrix must be square
    /// with side equal to W's row count, and present exactly when
    /// `depth` is nonzero.
    pub fn from_parts(
        weights: Matrix<T>,
        recurrent: Option<Matrix<T>>,
        depth: usize,
        activation: ActivationFn,
    ) -> Result<Self> {
        match (&recurrent, depth) {
            (None, 0) => {}
            (None, _) => {
                return Err(Error::InvalidConfiguration(
                    "nonzero recurrence depth without recurrent weights".into(),
                ));
            }
            (Some(_), 0) => {
                return Err(Error::InvalidConfiguration(
                    "recurrent weights without a recurrence depth".into(),
                ));
            }
            (Some(r), _) => {
                let side = weights.rows();
                if r.shape() != (side, side) {
                    return Err(Error::ShapeMismatch {
                        op: "recurrent weights",
                        left: (side, side),
                        right: r.shape(),
                    });
                }
            }
        }
        Ok(Layer {
            weights,
            recurrent,
            recurrence: depth,
            activation,
        })
    }

    #[inline]
    pub fn input_width(&self) -> usize {
        self.weights.cols()
    }

    #[inline]
    pub fn output_width(&self) -> usize {
        self.weights.rows()
    }

    #[inline]
    pub fn weights(&self) -> &Matrix<T> {
        &self.weights
    }

    #[inline]
    pub fn recurrent_weights(&self) -> Option<&Matrix<T>> {
        self.recurrent.as_ref()
    }

    #[inline]
    pub fn recurrence(&self) -> usize {
        self.recurrence
    }

    #[inline]
    pub fn activation(&self) -> ActivationFn {
        self.activation
    }

    pub fn set_activation(&mut self, activation: ActivationFn) {
        self.activation = activation;
    }

    /// Replaces the weight matrix; the replacement must keep the
    /// layer's shape.
    pub fn set_weights(&mut self, weights: Matrix<T>) -> Result<()> {
        if weights.shape() != self.weights.shape() {
            return Err(Error::ShapeMismatch {
                op: "set_weights",
                left: self.weights.shape(),
                right: weights.shape(),
            });
        }
        self.weights = weights;
        Ok(())
    }

    /// Installs recurrent weights and depth together, keeping the
    /// R-iff-recurrent invariant. `depth` must be nonzero.
    pub fn set_recurrence(&mut self, weights: Matrix<T>, depth: usize) -> Result<()> {
        if depth == 0 {
            return Err(Error::InvalidConfiguration(
                "use clear_recurrence to make a layer non-recurrent".into(),
            ));
        }
        let side = self.output_width();
        if weights.shape() != (side, side) {
            return Err(Error::ShapeMismatch {
                op: "set_recurrence",
                left: (side, side),
                right: weights.shape(),
            });
        }
        self.recurrent = Some(weights);
        self.recurrence = depth;
        Ok(())
    }

    pub fn clear_recurrence(&mut self) {
        self.recurrent = None;
        self.recurrence = 0;
    }

    pub(crate) fn weights_mut(&mut self) -> &mut Matrix<T> {
        &mut self.weights
    }

    pub(crate) fn recurrent_weights_mut(&mut self) -> Option<&mut Matrix<T>> {
        self.recurrent.as_mut()
    }

    /// Pre-activation sum W * x.
    pub fn raw(&self, x: &Matrix<T>) -> Result<Matrix<T>> {
        self.weights.matmul(x)
    }

    /// Activated output f(W * x).
    pub fn forward(&self, x: &Matrix<T>) -> Result<Matrix<T>> {
        Ok(self.activation.apply(&self.raw(x)?))
    }

    /// Time-unrolled evaluation over an input sequence.
    ///
    /// A non-recurrent layer maps `forward` over every input. A layer
    /// with recurrence depth r consumes the first r inputs and produces
    /// r hidden states `z_0 = f(W x_0)`, `z_i = f(W x_i + R z_{i-1})`,
    /// plus one terminal element `z_r = f(z_{r-1})` that re-applies the
    /// activation to the last hidden state. The terminal step has no
    /// derivation; it reproduces a quirk of the system this kernel
    /// replaces.
    pub fn forward_sequence(&self, xs: &[Matrix<T>]) -> Result<Vec<Matrix<T>>> {
        if self.recurrence == 0 {
            return xs.iter().map(|x| self.forward(x)).collect();
        }
        let recur = self.recurrent.as_ref().ok_or_else(|| {
            Error::InvalidConfiguration("recurrence depth set without recurrent weights".into())
        })?;
        if xs.len() < self.recurrence {
            return Err(Error::InvalidConfiguration(format!(
                "recurrent layer needs {} inputs, got {}",
                self.recurrence,
                xs.len()
            )));
        }
        let mut zs: Vec<Matrix<T>> = Vec::with_capacity(self.recurrence + 1);
        for (i, x) in xs.iter().take(self.recurrence).enumerate() {
            let mut s = self.raw(x)?;
            if i > 0 {
                s = s.add(&recur.matmul(&zs[i - 1])?)?;
            }
            zs.push(self.activation.apply(&s));
        }
        let terminal = self.activation.apply(&zs[self.recurrence - 1]);
        zs.push(terminal);
        Ok(zs)
    }
}

impl<T: Element> Debug for Layer<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layer")
            .field("input", &self.input_width())
            .field("output", &self.output_width())
            .field("recurrence", &self.recurrence)
            .field("activation", &self.activation)
            .field("weights", &self.weights)
            .finish_non_exhaustive()
    }
}
