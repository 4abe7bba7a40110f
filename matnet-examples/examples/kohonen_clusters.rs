//! Unsupervised clustering with the Kohonen competitive rule: two
//! output units learn to claim points near (1, 0) and (0, 1).

use matnet::activation::ActivationFn;
use matnet::matrix::Matrix;
use matnet::net::Network;
use matnet::net::initializer::RandomInitializer;
use matnet::train::{TrainKit, TrainRule};

fn main() {
    env_logger::init();

    let mut net: Network<f64> = Network::new(&[2, 2]).unwrap();
    net.layer_mut(0).set_activation(ActivationFn::Competitive);
    let mut init = RandomInitializer::seed_from_u64(17);
    net.initialize_with(&mut init);

    let points = [[1.0, 0.1], [0.9, 0.0], [0.1, 1.0], [0.0, 0.8]];
    let mut kit = TrainKit::new()
        .with_learn_rate(0.3)
        .with_decay(0.99)
        .with_max_cycles(32);
    for p in points {
        // the competitive rule never reads the target
        kit = kit.with_example(Matrix::column(p.to_vec()), Matrix::column(vec![0.0, 0.0]));
    }
    TrainRule::Kohonen.train(&mut net, &kit).unwrap();

    for p in points {
        let x = Matrix::column(p.to_vec());
        let y = net.forward(&x).unwrap();
        let unit = y.as_ref().iter().position(|&v| v == 1.0).unwrap();
        println!("({:.1}, {:.1}) -> unit {unit}", p[0], p[1]);
    }
    println!("final weights:\n{}", net.weights(0));
}
