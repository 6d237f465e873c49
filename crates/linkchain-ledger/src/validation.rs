use crate::error::LedgerError;
use crate::traits::ChainReader;

/// Result of a full chain validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub block_count: usize,
    pub genesis_valid: bool,
    pub links_valid: bool,
    pub commitments_valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific integrity violation detected during validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub index: usize,
    pub kind: ViolationKind,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationKind {
    EmptyChain,
    GenesisHasPredecessor,
    MissingPredecessor,
    LinkBroken,
    CommitmentMismatch,
}

/// Chain integrity validator.
///
/// Unlike [`Chain::verify`](crate::Chain::verify), this walks the whole
/// chain and records every violation it finds.
pub struct ChainValidator;

impl ChainValidator {
    pub fn validate<R: ChainReader + ?Sized>(reader: &R) -> Result<ValidationReport, LedgerError> {
        let blocks = reader.snapshot()?;
        let mut violations = Vec::new();
        let mut genesis_valid = true;
        let mut links_valid = true;
        let mut commitments_valid = true;

        if blocks.is_empty() {
            genesis_valid = false;
            violations.push(Violation {
                index: 0,
                kind: ViolationKind::EmptyChain,
                description: "chain has no genesis block".into(),
            });
        }

        for (index, block) in blocks.iter().enumerate() {
            // Check predecessor link
            if index == 0 {
                if let Some(prev) = block.prev_commitment() {
                    genesis_valid = false;
                    violations.push(Violation {
                        index,
                        kind: ViolationKind::GenesisHasPredecessor,
                        description: format!("genesis references {}", prev.short_hex()),
                    });
                }
            } else {
                let expected = blocks[index - 1].commitment();
                match block.prev_commitment() {
                    None => {
                        links_valid = false;
                        violations.push(Violation {
                            index,
                            kind: ViolationKind::MissingPredecessor,
                            description: "non-genesis block has no previous commitment".into(),
                        });
                    }
                    Some(prev) if prev != expected => {
                        links_valid = false;
                        violations.push(Violation {
                            index,
                            kind: ViolationKind::LinkBroken,
                            description: format!(
                                "expected previous {}, got {}",
                                expected.short_hex(),
                                prev.short_hex()
                            ),
                        });
                    }
                    Some(_) => {}
                }
            }

            // Recompute and verify commitment
            if !block.verify_commitment() {
                commitments_valid = false;
                violations.push(Violation {
                    index,
                    kind: ViolationKind::CommitmentMismatch,
                    description: "stored commitment does not match computed".into(),
                });
            }
        }

        for v in &violations {
            tracing::warn!(index = v.index, kind = ?v.kind, "{}", v.description);
        }

        Ok(ValidationReport {
            block_count: blocks.len(),
            genesis_valid,
            links_valid,
            commitments_valid,
            violations,
        })
    }
}
