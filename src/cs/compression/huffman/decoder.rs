use super::tree::{HuffmanNode, HuffmanTree};
use crate::error::{Error, Result};

/// What the decoder does with a character other than `'0'` or `'1'`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeparatorPolicy {
    /// Fail with [`Error::InvalidBit`].
    #[default]
    Reject,
    /// Emit a line break, discard any partially walked code and restart at the root.
    ///
    /// Accepts bit-strings written in the older line-separated layout.
    LineBreak,
}

/// Decode an encoded bit string using the Huffman tree.
///
/// Walks from the root, `'0'` to the left child and `'1'` to the right,
/// emitting a leaf's character and returning to the root each time a leaf is
/// reached. Fails if a character other than `'0'`/`'1'` appears or if the
/// input stops part of the way down a code.
pub fn decode(bits: &str, tree: &HuffmanTree) -> Result<String> {
    decode_with(bits, tree, SeparatorPolicy::Reject)
}

/// Like [`decode`], with an explicit policy for separator characters.
pub fn decode_with(bits: &str, tree: &HuffmanTree, policy: SeparatorPolicy) -> Result<String> {
    let root = tree.root();
    let mut decoded = String::new();
    let mut cursor = root;
    // Position of the first bit of the code being walked, if one is in progress.
    let mut code_start: Option<usize> = None;

    for (position, bit) in bits.chars().enumerate() {
        let go_right = match (bit, policy) {
            ('0', _) => false,
            ('1', _) => true,
            (_, SeparatorPolicy::Reject) => {
                return Err(Error::InvalidBit {
                    found: bit,
                    position,
                })
            }
            (_, SeparatorPolicy::LineBreak) => {
                if let Some(start) = code_start.take() {
                    log::warn!(
                        "Separator at position {} discards partial code starting at {}",
                        position,
                        start
                    );
                }
                decoded.push('\n');
                cursor = root;
                continue;
            }
        };

        cursor = match cursor {
            HuffmanNode::Internal { right, .. } if go_right => &**right,
            HuffmanNode::Internal { left, .. } => &**left,
            // Only a single-leaf tree leaves the cursor on a leaf; its one code is "0".
            HuffmanNode::Leaf { .. } if !go_right => cursor,
            HuffmanNode::Leaf { .. } => {
                return Err(Error::InvalidBit {
                    found: bit,
                    position,
                })
            }
        };
        code_start.get_or_insert(position);

        if let HuffmanNode::Leaf { ch, .. } = cursor {
            decoded.push(*ch);
            cursor = root;
            code_start = None;
        }
    }

    match code_start {
        Some(position) => Err(Error::UnterminatedCode { position }),
        None => Ok(decoded),
    }
}
