mod rules;

pub use rules::TrainRule;

use crate::activation::ActivationFn;
use crate::dtype::Element;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::net::Network;

/// One labeled training pair.
pub struct Example<T> {
    pub input: Matrix<T>,
    pub target: Matrix<T>,
}

impl<T> Example<T> {
    pub fn new(input: Matrix<T>, target: Matrix<T>) -> Self {
        Example { input, target }
    }
}

/// Configuration bundle handed to a training rule.
///
/// Carries per-layer activation functions (their gradients come with
/// them), the labeled examples, and the four scalar hyperparameters.
/// The kit never owns the network it trains; one kit can drive many
/// networks. A training cycle is one full pass over every example.
pub struct TrainKit<T> {
    /// Activation functions indexed by layer; consulted by the
    /// backpropagation rule, which must see one per network layer.
    pub functions: Vec<ActivationFn>,
    pub examples: Vec<Example<T>>,
    pub learn_rate: T,
    pub momentum: T,
    pub decay: T,
    pub max_cycles: usize,
}

impl<T: Element> Default for TrainKit<T> {
    fn default() -> Self {
        TrainKit {
            functions: Vec::new(),
            examples: Vec::new(),
            learn_rate: T::ZERO,
            momentum: T::ZERO,
            decay: T::ZERO,
            max_cycles: 1,
        }
    }
}

impl<T: Element> TrainKit<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_function(mut self, f: ActivationFn) -> Self {
        self.functions.push(f);
        self
    }

    pub fn with_example(mut self, input: Matrix<T>, target: Matrix<T>) -> Self {
        self.examples.push(Example::new(input, target));
        self
    }

    pub fn with_learn_rate(mut self, learn_rate: T) -> Self {
        self.learn_rate = learn_rate;
        self
    }

    pub fn with_momentum(mut self, momentum: T) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_decay(mut self, decay: T) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: usize) -> Self {
        self.max_cycles = max_cycles;
        self
    }
}

/// Per-entry halved squared error of the network on one example.
///
/// Diagnostic only: the 1/2 scaling is a reporting convention and plays
/// no part in any weight update.
pub fn compute_error<T: Element>(net: &Network<T>, example: &Example<T>) -> Result<Matrix<T>> {
    let z = net.forward(&example.input)?;
    let err = example.target.sub(&z)?;
    Ok(err.hadamard(&err)?.scale(T::from_f64(0.5)))
}

#[cfg(test)]
mod test {
    use super::{TrainKit, compute_error};
    use crate::activation::ActivationFn;
    use crate::matrix;
    use crate::net::{Layer, Network};

    #[test]
    fn kit_builder_chains() {
        let kit: TrainKit<f64> = TrainKit::new()
            .with_function(ActivationFn::Sigmoid)
            .with_function(ActivationFn::Linear)
            .with_example(matrix![1.0, 0.0], matrix![1.0])
            .with_learn_rate(0.01)
            .with_momentum(0.05)
            .with_decay(0.0)
            .with_max_cycles(128);
        assert_eq!(kit.functions.len(), 2);
        assert_eq!(kit.examples.len(), 1);
        assert_eq!(kit.learn_rate, 0.01);
        assert_eq!(kit.max_cycles, 128);
    }

    #[test]
    fn half_squared_error() {
        let layer = Layer::from_parts(matrix![[1.0, 0.0]], None, 0, ActivationFn::Linear).unwrap();
        let net = Network::from_layers(vec![layer]).unwrap();
        let example = super::Example::new(matrix![1.0, 1.0], matrix![3.0]);
        let err = compute_error(&net, &example).unwrap();
        assert_eq!(err.as_ref(), &[2.0]);
    }
}
