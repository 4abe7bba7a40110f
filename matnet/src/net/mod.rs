pub mod initializer;
pub mod layer;

use crate::activation::ActivationFn;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use initializer::WeightInitializer;
pub use layer::Layer;
use std::fmt::{Debug, Formatter};

/// An ordered, non-empty sequence of layers.
///
/// Layer i's output width equals layer i+1's input width; layer 0's
/// input width is the network's declared input width. The network owns
/// its layers exclusively.
pub struct Network<T> {
    layers: Vec<Layer<T>>,
}

impl<T: Element> Network<T> {
    /// Builds a blank network from an explicit list of layer widths.
    ///
    /// `widths[0]` is the input width; each following entry is one
    /// layer's output width, so `n + 1` widths make an `n`-layer
    /// network. All widths must be positive. Layers start zeroed with
    /// linear activation; callers install activations and weights
    /// afterwards.
    pub fn new(widths: &[usize]) -> Result<Self> {
        if widths.len() < 2 {
            return Err(Error::InvalidConfiguration(format!(
                "a network needs an input width and at least one layer width, got {} widths",
                widths.len()
            )));
        }
        if widths.iter().any(|&w| w == 0) {
            return Err(Error::InvalidConfiguration("layer widths must be positive".into()));
        }
        let layers = widths
            .windows(2)
            .map(|pair| Layer::new(pair[0], pair[1], ActivationFn::default()))
            .collect();
        Ok(Network { layers })
    }

    /// Builds a network from preset layers, validating the width chain.
    pub fn from_layers(layers: Vec<Layer<T>>) -> Result<Self> {
        if layers.is_empty() {
            return Err(Error::EmptyNetwork);
        }
        for pair in layers.windows(2) {
            if pair[0].output_width() != pair[1].input_width() {
                return Err(Error::InvalidConfiguration(format!(
                    "layer output width {} does not feed layer input width {}",
                    pair[0].output_width(),
                    pair[1].input_width()
                )));
            }
        }
        Ok(Network { layers })
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn input_width(&self) -> usize {
        self.layers[0].input_width()
    }

    #[inline]
    pub fn output_width(&self) -> usize {
        self.layers[self.layers.len() - 1].output_width()
    }

    #[inline]
    pub fn layers(&self) -> &[Layer<T>] {
        &self.layers
    }

    #[inline]
    pub fn layer(&self, i: usize) -> &Layer<T> {
        &self.layers[i]
    }

    #[inline]
    pub fn layer_mut(&mut self, i: usize) -> &mut Layer<T> {
        &mut self.layers[i]
    }

    #[inline]
    pub fn weights(&self, i: usize) -> &Matrix<T> {
        self.layers[i].weights()
    }

    /// End-to-end inference: feeds `x` through every layer in order.
    /// The input is only read; each intermediate drops when the next
    /// layer has consumed it.
    pub fn forward(&self, x: &Matrix<T>) -> Result<Matrix<T>> {
        let mut z = self.layers[0].forward(x)?;
        for layer in &self.layers[1..] {
            z = layer.forward(&z)?;
        }
        Ok(z)
    }

    /// Time-unrolled inference over a sequence of inputs. Each layer
    /// transforms the whole sequence before the next layer sees it;
    /// recurrent layers thread hidden state across time steps,
    /// non-recurrent layers map over the steps independently.
    pub fn forward_sequence(&self, xs: &[Matrix<T>]) -> Result<Vec<Matrix<T>>> {
        let mut zs: Vec<Matrix<T>> = xs.to_vec();
        for layer in &self.layers {
            zs = layer.forward_sequence(&zs)?;
        }
        Ok(zs)
    }

    /// Replaces every weight matrix (recurrent ones included) with
    /// values drawn from the initializer.
    pub fn initialize_with<I: WeightInitializer<T>>(&mut self, init: &mut I) {
        for (idx, layer) in self.layers.iter_mut().enumerate() {
            let (out, input) = layer.weights().shape();
            *layer.weights_mut() = init.weights(idx, out, input);
            if let Some(recur) = layer.recurrent_weights_mut() {
                *recur = init.weights(idx, out, out);
            }
        }
    }
}

impl<T: Element> Debug for Network<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Network").field("layers", &self.layers).finish()
    }
}

#[cfg(test)]
mod test {
    use super::Network;
    use crate::activation::ActivationFn;
    use crate::error::Error;
    use crate::matrix;
    use crate::net::layer::Layer;

    #[test]
    fn width_list_construction() {
        let net: Network<f64> = Network::new(&[3, 7, 1]).unwrap();
        assert_eq!(net.depth(), 2);
        assert_eq!(net.input_width(), 3);
        assert_eq!(net.output_width(), 1);
        assert_eq!(net.weights(0).shape(), (7, 3));
        assert_eq!(net.weights(1).shape(), (1, 7));
    }

    #[test]
    fn rejects_bad_width_lists() {
        assert!(matches!(
            Network::<f64>::new(&[3]),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Network::<f64>::new(&[3, 0, 1]),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_mismatched_layer_chain() {
        let layers = vec![
            Layer::<f64>::new(2, 3, ActivationFn::Linear),
            Layer::<f64>::new(4, 1, ActivationFn::Linear),
        ];
        assert!(Network::from_layers(layers).is_err());
        assert!(matches!(Network::<f64>::from_layers(vec![]), Err(Error::EmptyNetwork)));
    }

    #[test]
    fn forward_composes_layers() {
        let layers = vec![
            Layer::from_parts(matrix![[1.0, 0.0], [0.0, 2.0]], None, 0, ActivationFn::Linear).unwrap(),
            Layer::from_parts(matrix![[1.0, 1.0]], None, 0, ActivationFn::Linear).unwrap(),
        ];
        let net = Network::from_layers(layers).unwrap();
        let x = matrix![3.0, 4.0];
        let y = net.forward(&x).unwrap();
        assert_eq!(y.as_ref(), &[11.0]);
        // the input is untouched
        assert_eq!(x.as_ref(), &[3.0, 4.0]);
    }

    #[test]
    fn forward_is_deterministic() {
        let layers = vec![
            Layer::from_parts(matrix![[0.3, -0.7], [1.5, 0.25]], None, 0, ActivationFn::Sigmoid).unwrap(),
            Layer::from_parts(matrix![[0.9, -1.1]], None, 0, ActivationFn::Linear).unwrap(),
        ];
        let net = Network::from_layers(layers).unwrap();
        let x = matrix![0.5, -0.125];
        let a = net.forward(&x).unwrap();
        let b = net.forward(&x).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sequence_threads_recurrent_layers() {
        let mut first = Layer::from_parts(matrix![[1.0]], None, 0, ActivationFn::Linear).unwrap();
        first.set_recurrence(matrix![[0.5]], 2).unwrap();
        let second = Layer::from_parts(matrix![[2.0]], None, 0, ActivationFn::Linear).unwrap();
        let net = Network::from_layers(vec![first, second]).unwrap();

        let xs = vec![matrix![1.0], matrix![2.0]];
        let zs = net.forward_sequence(&xs).unwrap();
        // recurrent layer yields [1, 2.5, 2.5]; the second layer doubles each
        assert_eq!(zs.len(), 3);
        assert_eq!(zs[0].as_ref(), &[2.0]);
        assert_eq!(zs[1].as_ref(), &[5.0]);
        assert_eq!(zs[2].as_ref(), &[5.0]);
    }
}
