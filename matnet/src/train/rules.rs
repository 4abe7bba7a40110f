use crate::activation::competitive_winner;
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::net::Network;
use crate::train::TrainKit;
use log::{debug, trace};

/// The weight-update algorithms. Exactly one is applied per training
/// run; every rule sweeps the kit's examples in order for
/// `max_cycles` full cycles with no convergence check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrainRule {
    /// `dW = target * x^T`, then `W <- (1 - decay) * W + dW`.
    /// Single-layer networks only.
    SupervisedHebbian,
    /// The Hebbian update with the network's own output in place of
    /// the target; degenerates to Instar when `learn_rate == decay`.
    /// Single-layer networks only.
    UnsupervisedHebbian,
    /// `W <- W + learn_rate * (target - output) * x^T`.
    /// Single-layer networks only.
    Delta,
    /// Gradient descent with momentum and weight decay over any depth.
    /// Uses the kit's activation functions, one per layer.
    Backpropagation,
    /// Competitive clustering: the winning output row moves toward 1,
    /// every other row decays. Single-layer networks only.
    Kohonen,
}

impl TrainRule {
    /// Runs the rule to its full cycle count, mutating the network's
    /// weights in place.
    pub fn train<T: Element>(&self, net: &mut Network<T>, kit: &TrainKit<T>) -> Result<()> {
        if kit.examples.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }
        debug!(
            "{self:?}: training depth-{} network on {} examples for {} cycles",
            net.depth(),
            kit.examples.len(),
            kit.max_cycles
        );
        match self {
            TrainRule::SupervisedHebbian => hebbian(net, kit, false),
            TrainRule::UnsupervisedHebbian => hebbian(net, kit, true),
            TrainRule::Delta => delta(net, kit),
            TrainRule::Backpropagation => backpropagation(net, kit),
            TrainRule::Kohonen => kohonen(net, kit),
        }
    }
}

fn require_single_layer<T: Element>(net: &Network<T>, rule: &str) -> Result<()> {
    if net.depth() != 1 {
        return Err(Error::InvalidConfiguration(format!(
            "the {rule} rule requires a single-layer network, got depth {}",
            net.depth()
        )));
    }
    Ok(())
}

/// Both Hebbian flavors; `unsupervised` substitutes the network's own
/// output for the example target.
fn hebbian<T: Element>(net: &mut Network<T>, kit: &TrainKit<T>, unsupervised: bool) -> Result<()> {
    require_single_layer(net, "Hebbian")?;
    let keep = T::ONE - kit.decay;
    for cycle in 0..kit.max_cycles {
        for example in &kit.examples {
            let y = if unsupervised {
                net.forward(&example.input)?
            } else {
                example.target.clone()
            };
            let delta = y.matmul(&example.input.transpose())?;
            let next = delta.add(&net.weights(0).scale(keep))?;
            net.layer_mut(0).set_weights(next)?;
        }
        trace!("hebbian cycle {cycle} done");
    }
    Ok(())
}

fn delta<T: Element>(net: &mut Network<T>, kit: &TrainKit<T>) -> Result<()> {
    require_single_layer(net, "delta")?;
    let rate = kit.learn_rate;
    for cycle in 0..kit.max_cycles {
        for example in &kit.examples {
            let z = net.forward(&example.input)?;
            let err = example.target.sub(&z)?;
            let delta = err.scale(rate).matmul(&example.input.transpose())?;
            let next = net.weights(0).add(&delta)?;
            net.layer_mut(0).set_weights(next)?;
        }
        trace!("delta cycle {cycle} done");
    }
    Ok(())
}

fn backpropagation<T: Element>(net: &mut Network<T>, kit: &TrainKit<T>) -> Result<()> {
    let depth = net.depth();
    if kit.functions.len() != depth {
        return Err(Error::InvalidConfiguration(format!(
            "kit supplies {} activation functions for a depth-{depth} network",
            kit.functions.len()
        )));
    }
    let rate = kit.learn_rate;
    let momentum = kit.momentum;
    let decay = kit.decay;

    // Momentum accumulator, one per layer. Zeroed once here and then
    // carried across every example and every cycle of the run.
    let mut carried: Vec<Matrix<T>> = net
        .layers()
        .iter()
        .map(|l| Matrix::zeroed(l.output_width(), l.input_width()))
        .collect();

    for cycle in 0..kit.max_cycles {
        for example in &kit.examples {
            // forward pass, caching pre-activation sums and activations
            let mut sums: Vec<Matrix<T>> = Vec::with_capacity(depth);
            let mut acts: Vec<Matrix<T>> = Vec::with_capacity(depth);
            sums.push(net.weights(0).matmul(&example.input)?);
            for j in 0..depth {
                let a = kit.functions[j].apply(&sums[j]);
                if j + 1 < depth {
                    sums.push(net.weights(j + 1).matmul(&a)?);
                }
                acts.push(a);
            }

            // error signals, output layer back to the first
            let out_err = acts[depth - 1].sub(&example.target)?;
            let mut rev: Vec<Matrix<T>> = Vec::with_capacity(depth);
            rev.push(kit.functions[depth - 1].gradient(&sums[depth - 1]).matmul(&out_err)?);
            for j in (0..depth - 1).rev() {
                let grad = kit.functions[j].gradient(&sums[j]);
                let back = grad.matmul(&net.weights(j + 1).transpose())?;
                let d = back.matmul(&rev[rev.len() - 1])?;
                rev.push(d);
            }
            rev.reverse();
            let deltas = rev;

            // momentum blend into the carried accumulator
            for j in (0..depth).rev() {
                let input_t = if j == 0 {
                    example.input.transpose()
                } else {
                    acts[j - 1].transpose()
                };
                let scaled = deltas[j].matmul(&input_t)?.scale(rate);
                carried[j] = scaled
                    .scale(T::ONE - momentum)
                    .add(&carried[j].scale(momentum))?;
            }

            // decay, then apply
            for j in (0..depth).rev() {
                let next = net.weights(j).scale(T::ONE - decay).sub(&carried[j])?;
                net.layer_mut(j).set_weights(next)?;
            }
        }
        trace!("backpropagation cycle {cycle} done");
    }
    Ok(())
}

fn kohonen<T: Element>(net: &mut Network<T>, kit: &TrainKit<T>) -> Result<()> {
    require_single_layer(net, "Kohonen")?;
    let rate = kit.learn_rate;
    let decay = kit.decay;
    for cycle in 0..kit.max_cycles {
        for example in &kit.examples {
            let y = net.forward(&example.input)?;
            let winner = competitive_winner(&y).ok_or_else(|| {
                Error::InvalidConfiguration("network produced no output".into())
            })?;
            let w = net.layer_mut(0).weights_mut();
            for k in 0..w.cols() {
                for h in 0..w.rows() {
                    let v = w.get(h, k);
                    let updated = if h == winner {
                        (T::ONE - rate) * v + rate
                    } else {
                        decay * v
                    };
                    w.set(h, k, updated);
                }
            }
        }
        trace!("kohonen cycle {cycle} done");
    }
    Ok(())
}
