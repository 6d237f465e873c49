//! Human-readable renderings of a chain.
//!
//! These are diagnostic outputs only. Nothing parses them back.

use std::fmt;

use serde::Serialize;

use crate::block::Block;
use crate::error::LedgerError;

/// Plain-text dump, three lines per block:
///
/// ```text
/// Previous Hash: <hex, empty for genesis>
/// Data in Block: <payload>
/// Hash: <hex>
/// ```
pub struct TextDump<'a> {
    blocks: &'a [Block],
}

impl<'a> TextDump<'a> {
    pub fn new(blocks: &'a [Block]) -> Self {
        Self { blocks }
    }
}

impl fmt::Display for TextDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in self.blocks {
            writeln!(f, "Previous Hash: {}", hex::encode(block.prev_commitment_bytes()))?;
            writeln!(f, "Data in Block: {}", block.payload_text())?;
            writeln!(f, "Hash: {}", block.commitment())?;
        }
        Ok(())
    }
}

/// One block as it appears in the JSON dump.
#[derive(Debug, Serialize)]
pub struct BlockView {
    pub index: usize,
    pub prev_commitment: Option<String>,
    pub commitment: String,
    pub payload: String,
}

impl BlockView {
    pub fn new(index: usize, block: &Block) -> Self {
        Self {
            index,
            prev_commitment: block.prev_commitment().map(|c| c.to_hex()),
            commitment: block.commitment().to_hex(),
            payload: block.payload_text().into_owned(),
        }
    }
}

/// JSON dump: an array of [`BlockView`] objects in chain order.
pub struct JsonDump;

impl JsonDump {
    pub fn views(blocks: &[Block]) -> Vec<BlockView> {
        blocks
            .iter()
            .enumerate()
            .map(|(i, b)| BlockView::new(i, b))
            .collect()
    }

    pub fn render(blocks: &[Block]) -> Result<String, LedgerError> {
        serde_json::to_string_pretty(&Self::views(blocks))
            .map_err(|e| LedgerError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::chain::Chain;

    fn sample() -> Chain {
        let mut chain = Chain::initialize();
        chain.append("First Block after Genesis").unwrap();
        chain
    }

    #[test]
    fn text_dump_has_three_lines_per_block() {
        let chain = sample();
        let text = TextDump::new(chain.blocks()).to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 6);

        let genesis = chain.genesis().unwrap();
        assert_eq!(lines[0], "Previous Hash: ");
        assert_eq!(lines[1], "Data in Block: Genesis");
        assert_eq!(lines[2], format!("Hash: {}", genesis.commitment().to_hex()));
        assert_eq!(lines[3], format!("Previous Hash: {}", genesis.commitment().to_hex()));
        assert_eq!(lines[4], "Data in Block: First Block after Genesis");
    }

    #[test]
    fn text_dump_uses_lowercase_hex() {
        let chain = sample();
        let text = TextDump::new(chain.blocks()).to_string();
        for line in text.lines().filter(|l| l.starts_with("Hash: ")) {
            let hex = &line["Hash: ".len()..];
            assert_eq!(hex.len(), 64);
            assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn json_dump_lists_blocks_in_order() {
        let chain = sample();
        let json: Value = serde_json::from_str(&JsonDump::render(chain.blocks()).unwrap()).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["index"], 0);
        assert!(items[0]["prev_commitment"].is_null());
        assert_eq!(items[1]["prev_commitment"], items[0]["commitment"]);
        assert_eq!(items[1]["payload"], "First Block after Genesis");
    }
}
