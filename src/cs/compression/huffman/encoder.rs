use std::io::Read;

use super::code_table::CodeTable;
use crate::error::{Error, Result};

/// What the encoder does with a character that has no code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownSymbolPolicy {
    /// Fail with [`Error::UnknownSymbol`].
    #[default]
    Reject,
    /// Skip the character and log a warning; the output no longer round-trips.
    Drop,
}

/// Encode the input text using the provided code table.
///
/// Each character is replaced with its Huffman code and the codes are
/// concatenated without separators. Fails on the first character that has
/// no code.
pub fn encode(text: &str, table: &CodeTable) -> Result<String> {
    encode_with(text, table, UnknownSymbolPolicy::Reject)
}

/// Like [`encode`], with an explicit policy for characters missing from `table`.
pub fn encode_with(text: &str, table: &CodeTable, policy: UnknownSymbolPolicy) -> Result<String> {
    let mut encoded = String::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        match (table.get(ch), policy) {
            (Some(code), _) => encoded.push_str(code),
            (None, UnknownSymbolPolicy::Reject) => {
                return Err(Error::UnknownSymbol {
                    symbol: ch,
                    position,
                })
            }
            (None, UnknownSymbolPolicy::Drop) => {
                log::warn!("Dropping {:?} at position {}: no code", ch, position);
            }
        }
    }
    Ok(encoded)
}

/// Consumes `reader` to its end and encodes what was read.
pub fn encode_reader<R: Read>(
    mut reader: R,
    table: &CodeTable,
    policy: UnknownSymbolPolicy,
) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    encode_with(&text, table, policy)
}
