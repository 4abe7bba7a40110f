//! Dense-matrix substrate for small feed-forward and simple recurrent
//! neural networks: a matrix algebra kernel, layered networks with a
//! closed set of activation functions, and the classic weight-update
//! rules (Hebbian variants, delta, momentum backpropagation, Kohonen).

pub mod activation;
pub mod dtype;
pub mod error;
pub mod matrix;
pub mod net;
pub mod train;

pub use error::{Error, Result};
