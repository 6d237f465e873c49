use linkchain_types::Commitment;

use crate::hasher::CommitmentHasher;

/// Trait for records that participate in a hash chain.
pub trait Linked {
    /// The record's own commitment.
    fn commitment(&self) -> Commitment;
    /// The predecessor's commitment (None for genesis).
    fn prev_commitment(&self) -> Option<Commitment>;
    /// Payload bytes covered by the commitment.
    fn payload_bytes(&self) -> &[u8];
}

/// Hash chain integrity verifier.
///
/// Verifies that a sequence of records forms a valid hash chain:
/// each record's prev commitment matches the previous record's commitment,
/// and each record's commitment is correctly computed from its payload.
pub struct HashChainVerifier;

impl HashChainVerifier {
    /// Verify a chain of records, stopping at the first problem.
    ///
    /// Checks:
    /// 1. First record has no previous commitment
    /// 2. Each subsequent record's prev commitment matches its predecessor
    /// 3. Each record's commitment is correct for its payload
    pub fn verify_chain<L: Linked>(records: &[L]) -> Result<(), ChainError> {
        for (index, record) in records.iter().enumerate() {
            let predecessor = index.checked_sub(1).and_then(|i| records.get(i));
            Self::verify_link(index, record, predecessor)?;
        }
        Ok(())
    }

    /// Verify one record against its predecessor (`None` at index 0).
    pub fn verify_link<L: Linked>(
        index: usize,
        record: &L,
        predecessor: Option<&L>,
    ) -> Result<(), ChainError> {
        let expected_prev = predecessor.map(Linked::commitment);
        match (expected_prev, record.prev_commitment()) {
            (None, Some(_)) => return Err(ChainError::GenesisHasPrevCommitment),
            (Some(_), None) => return Err(ChainError::MissingPrevCommitment { index }),
            (Some(expected), Some(actual)) if expected != actual => {
                return Err(ChainError::BrokenLink { index })
            }
            _ => {}
        }

        let computed =
            CommitmentHasher::commit(record.payload_bytes(), record.prev_commitment().as_ref());
        if computed != record.commitment() {
            return Err(ChainError::CommitmentMismatch { index });
        }
        Ok(())
    }
}

/// Errors from chain verification.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("genesis record has a previous commitment (should be None)")]
    GenesisHasPrevCommitment,

    #[error("missing previous commitment at index {index} (should reference predecessor)")]
    MissingPrevCommitment { index: usize },

    #[error("broken link at index {index}: previous commitment does not match")]
    BrokenLink { index: usize },

    #[error("commitment mismatch at index {index}: computed digest differs from stored")]
    CommitmentMismatch { index: usize },
}

impl ChainError {
    /// Position of the offending record.
    pub fn index(&self) -> usize {
        match self {
            Self::GenesisHasPrevCommitment => 0,
            Self::MissingPrevCommitment { index }
            | Self::BrokenLink { index }
            | Self::CommitmentMismatch { index } => *index,
        }
    }
}
