use thiserror::Error;

pub type Result<V> = std::result::Result<V, Error>;

/// Unrecoverable failures raised by the matrix kernel and the training
/// rules. Every variant aborts the operation that detected it; none are
/// downgraded to diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operand shapes are incompatible for the requested operation.
    /// Raised before any element is touched.
    #[error("{op}: operand shapes {left:?} and {right:?} are incompatible")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A network/kit combination a rule or constructor does not support.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("network has no layers")]
    EmptyNetwork,

    #[error("training kit has no examples")]
    EmptyTrainingSet,
}
