//! Trains a 3-7-1 network on XOR with momentum backpropagation. The
//! third input is a constant bias cell.

use matnet::activation::ActivationFn;
use matnet::matrix::Matrix;
use matnet::net::Network;
use matnet::net::initializer::RandomInitializer;
use matnet::train::{TrainKit, TrainRule};

fn main() {
    env_logger::init();

    let mut net: Network<f64> = Network::new(&[3, 7, 1]).unwrap();
    net.layer_mut(0).set_activation(ActivationFn::Sigmoid);
    net.layer_mut(1).set_activation(ActivationFn::Linear);
    let mut init = RandomInitializer::seed_from_u64(0x0f2d);
    net.initialize_with(&mut init);

    let mut kit = TrainKit::new()
        .with_function(ActivationFn::Sigmoid)
        .with_function(ActivationFn::Linear)
        .with_learn_rate(0.01)
        .with_momentum(0.05)
        .with_max_cycles(65536);
    for p in 0..2u8 {
        for q in 0..2u8 {
            let x = Matrix::column(vec![p as f64, q as f64, 1.0]);
            let y = Matrix::column(vec![(p ^ q) as f64]);
            kit = kit.with_example(x, y);
        }
    }

    println!("training 3-7-1 network on XOR...");
    TrainRule::Backpropagation.train(&mut net, &kit).unwrap();

    for p in 0..2u8 {
        for q in 0..2u8 {
            let x = Matrix::column(vec![p as f64, q as f64, 1.0]);
            let out = net.forward(&x).unwrap();
            println!("{p} XOR {q} = {:.4}", out.get(0, 0));
        }
    }
}
