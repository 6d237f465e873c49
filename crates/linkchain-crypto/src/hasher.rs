use linkchain_types::Commitment;

/// The digest function behind every block commitment.
///
/// A commitment is `BLAKE3(payload || prev)` with BLAKE3's default 256-bit
/// output. `||` is plain concatenation: no delimiter, no length prefix and no
/// domain tag. The genesis block has no predecessor, so `prev` contributes
/// zero bytes.
pub struct CommitmentHasher;

impl CommitmentHasher {
    /// Compute the commitment for a payload and optional predecessor.
    pub fn commit(payload: &[u8], prev: Option<&Commitment>) -> Commitment {
        let prev_bytes: &[u8] = match prev {
            Some(c) => c.as_bytes(),
            None => &[],
        };
        Self::commit_bytes(payload, prev_bytes)
    }

    /// Compute `BLAKE3(payload || prev_bytes)` over raw byte views.
    pub fn commit_bytes(payload: &[u8], prev_bytes: &[u8]) -> Commitment {
        let mut hasher = blake3::Hasher::new();
        hasher.update(payload);
        hasher.update(prev_bytes);
        Commitment::from_hash(*hasher.finalize().as_bytes())
    }

    /// Verify that a payload and predecessor produce the expected commitment.
    pub fn verify(payload: &[u8], prev: Option<&Commitment>, expected: &Commitment) -> bool {
        Self::commit(payload, prev) == *expected
    }

    /// Plain digest of a single byte string.
    pub fn raw_hash(data: &[u8]) -> Commitment {
        Commitment::from_hash(*blake3::hash(data).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_is_deterministic() {
        let prev = CommitmentHasher::raw_hash(b"prev");
        let a = CommitmentHasher::commit(b"payload", Some(&prev));
        let b = CommitmentHasher::commit(b"payload", Some(&prev));
        assert_eq!(a, b);
    }

    #[test]
    fn genesis_commit_is_plain_digest_of_payload() {
        let c = CommitmentHasher::commit(b"Genesis", None);
        assert_eq!(c, CommitmentHasher::raw_hash(b"Genesis"));
    }

    #[test]
    fn concatenation_has_no_delimiter() {
        let prev = CommitmentHasher::raw_hash(b"x");
        let mut joined = b"data".to_vec();
        joined.extend_from_slice(prev.as_bytes());
        assert_eq!(
            CommitmentHasher::commit(b"data", Some(&prev)),
            CommitmentHasher::raw_hash(&joined)
        );
    }

    #[test]
    fn empty_inputs_are_valid() {
        let c = CommitmentHasher::commit(b"", None);
        assert_eq!(c, CommitmentHasher::raw_hash(b""));
    }

    #[test]
    fn single_byte_change_alters_commitment() {
        let a = CommitmentHasher::commit(b"First Block after Genesis", None);
        let b = CommitmentHasher::commit(b"First Block after Genesit", None);
        assert_ne!(a, b);
    }

    #[test]
    fn predecessor_change_alters_commitment() {
        let p1 = CommitmentHasher::raw_hash(b"one");
        let p2 = CommitmentHasher::raw_hash(b"two");
        assert_ne!(
            CommitmentHasher::commit(b"same", Some(&p1)),
            CommitmentHasher::commit(b"same", Some(&p2))
        );
    }

    #[test]
    fn verify_detects_wrong_commitment() {
        let c = CommitmentHasher::commit(b"original", None);
        assert!(CommitmentHasher::verify(b"original", None, &c));
        assert!(!CommitmentHasher::verify(b"tampered", None, &c));
    }
}
