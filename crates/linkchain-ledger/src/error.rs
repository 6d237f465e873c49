use linkchain_crypto::ChainError;

/// Errors produced by chain operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("chain has no blocks; append needs a tail to link to")]
    EmptyChain,

    #[error("integrity violation at index {index}: {reason}")]
    IntegrityViolation { index: usize, reason: String },

    #[error("chain is full: limit of {limit} blocks reached")]
    CapacityExceeded { limit: usize },

    #[error("chain lock poisoned")]
    LockPoisoned,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<ChainError> for LedgerError {
    fn from(err: ChainError) -> Self {
        Self::IntegrityViolation {
            index: err.index(),
            reason: err.to_string(),
        }
    }
}
