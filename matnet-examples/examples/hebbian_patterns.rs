//! Supervised-Hebbian classifier for 5x5 pixel patterns. An X pattern
//! trains toward +1, an O pattern toward -1; the 26th input is a bias
//! cell.

use matnet::activation::ActivationFn;
use matnet::matrix::Matrix;
use matnet::net::Network;
use matnet::train::{TrainKit, TrainRule};
use matnet_examples::util::pattern_with_bias;

const X_PATTERN: [&str; 5] = ["#...#", ".#.#.", "..#..", ".#.#.", "#...#"];
const O_PATTERN: [&str; 5] = [".###.", "#...#", "#...#", "#...#", ".###."];

fn main() {
    env_logger::init();

    let mut net: Network<f64> = Network::new(&[26, 1]).unwrap();
    net.layer_mut(0).set_activation(ActivationFn::Linear);

    let kit = TrainKit::new()
        .with_example(
            Matrix::column(pattern_with_bias(&X_PATTERN)),
            Matrix::column(vec![1.0]),
        )
        .with_example(
            Matrix::column(pattern_with_bias(&O_PATTERN)),
            Matrix::column(vec![-1.0]),
        )
        .with_max_cycles(1);
    TrainRule::SupervisedHebbian.train(&mut net, &kit).unwrap();

    for (name, pattern) in [("X", &X_PATTERN), ("O", &O_PATTERN)] {
        let x = Matrix::column(pattern_with_bias(pattern));
        println!("{name} scores {:+.2}", net.forward(&x).unwrap().get(0, 0));
    }

    // a corrupted X should still land on the X side
    let noisy = ["#...#", ".#.#.", "..#..", ".#.#.", "#..##"];
    let x = Matrix::column(pattern_with_bias(&noisy));
    println!("noisy X scores {:+.2}", net.forward(&x).unwrap().get(0, 0));
}
