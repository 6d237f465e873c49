use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use linkchain_crypto::{CommitmentHasher, Linked};
use linkchain_types::Commitment;

/// A sealed chain record.
///
/// A block holds opaque payload bytes, the commitment of its predecessor
/// (`None` only for genesis) and its own commitment
/// `Digest(payload || prev_commitment)`. Fields are private: once
/// [`Block::create`] returns, nothing can change them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    payload: Vec<u8>,
    prev_commitment: Option<Commitment>,
    commitment: Commitment,
}

impl Block {
    /// Create and seal a block.
    ///
    /// Every byte sequence, including the empty one, is a valid payload.
    pub fn create(payload: impl Into<Vec<u8>>, prev_commitment: Option<Commitment>) -> Self {
        let mut block = Self {
            payload: payload.into(),
            prev_commitment,
            commitment: Commitment::from_hash([0; 32]),
        };
        block.derive_commitment();
        tracing::trace!(
            commitment = %block.commitment.short_hex(),
            payload_len = block.payload.len(),
            "sealed block"
        );
        block
    }

    /// Create a block with no predecessor.
    pub fn genesis(payload: impl Into<Vec<u8>>) -> Self {
        Self::create(payload, None)
    }

    // Only `create` calls this. Re-deriving a block that is already linked
    // would orphan every descendant.
    fn derive_commitment(&mut self) {
        self.commitment = CommitmentHasher::commit(&self.payload, self.prev_commitment.as_ref());
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Lossy UTF-8 view of the payload for display.
    pub fn payload_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }

    pub fn prev_commitment(&self) -> Option<&Commitment> {
        self.prev_commitment.as_ref()
    }

    /// The predecessor commitment as bytes: empty for genesis.
    pub fn prev_commitment_bytes(&self) -> &[u8] {
        match &self.prev_commitment {
            Some(c) => c.as_bytes(),
            None => &[],
        }
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn is_genesis(&self) -> bool {
        self.prev_commitment.is_none()
    }

    /// Recompute the digest and compare it with the stored commitment.
    pub fn verify_commitment(&self) -> bool {
        CommitmentHasher::verify(&self.payload, self.prev_commitment.as_ref(), &self.commitment)
    }
}

impl Linked for Block {
    fn commitment(&self) -> Commitment {
        self.commitment
    }

    fn prev_commitment(&self) -> Option<Commitment> {
        self.prev_commitment
    }

    fn payload_bytes(&self) -> &[u8] {
        &self.payload
    }
}
