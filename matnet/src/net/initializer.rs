use crate::dtype::Element;
use crate::matrix::Matrix;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Normal;

/// Source of fresh weight matrices for [`Network::initialize_with`].
///
/// [`Network::initialize_with`]: crate::net::Network::initialize_with
pub trait WeightInitializer<T: Element> {
    fn weights(&mut self, layer_idx: usize, rows: usize, cols: usize) -> Matrix<T>;
}

/// Xavier-style normal initialization, std = sqrt(2 / (fan_in + fan_out)).
pub struct RandomInitializer {
    rng: StdRng,
}

impl RandomInitializer {
    pub fn seed_from_u64(seed: u64) -> Self {
        RandomInitializer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomInitializer {
    fn default() -> Self {
        RandomInitializer {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<T: Element> WeightInitializer<T> for RandomInitializer {
    fn weights(&mut self, _layer_idx: usize, rows: usize, cols: usize) -> Matrix<T> {
        let std = (2.0 / (rows + cols) as f64).sqrt();
        let dist = Normal::new(0.0, std).unwrap();
        let data: Vec<T> = dist
            .sample_iter(&mut self.rng)
            .take(rows * cols)
            .map(T::from_f64)
            .collect();
        Matrix::from_vec(data, rows, cols)
    }
}

#[cfg(test)]
mod test {
    use super::{RandomInitializer, WeightInitializer};
    use crate::matrix::Matrix;
    use crate::net::Network;

    #[test]
    fn seeded_initialization_is_reproducible() {
        let mut a = RandomInitializer::seed_from_u64(0xf1234567);
        let mut b = RandomInitializer::seed_from_u64(0xf1234567);
        let wa: Matrix<f64> = a.weights(0, 4, 3);
        let wb: Matrix<f64> = b.weights(0, 4, 3);
        assert_eq!(wa, wb);
        assert!(wa.as_ref().iter().any(|&v| v != 0.0));
    }

    #[test]
    fn initialize_fills_every_layer() {
        let mut net: Network<f64> = Network::new(&[2, 3, 1]).unwrap();
        let mut init = RandomInitializer::seed_from_u64(7);
        net.initialize_with(&mut init);
        assert!(net.weights(0).as_ref().iter().any(|&v| v != 0.0));
        assert!(net.weights(1).as_ref().iter().any(|&v| v != 0.0));
    }
}
