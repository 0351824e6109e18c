use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::frequency::FrequencyTable;
use super::parse_report;
use super::tree::{HuffmanNode, HuffmanTree};
use crate::error::{Error, Result};

/// Mapping from each character of a tree to its `'0'`/`'1'` code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Recursively build the code table mapping characters to their Huffman codes.
    ///
    /// Left edges contribute `'0'` and right edges `'1'`. If the tree consists of
    /// a single leaf (i.e. one unique symbol), the code "0" is assigned.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        assign_codes(tree.root(), String::new(), &mut codes);
        log::debug!("Code table built for {} symbols", codes.len());
        CodeTable { codes }
    }

    /// The code for `ch`, or `None` if `ch` is not a leaf of the tree.
    pub fn get(&self, ch: char) -> Option<&str> {
        self.codes.get(&ch).map(String::as_str)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.codes.contains_key(&ch)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates `(character, code)` pairs in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&ch, code)| (ch, code.as_str()))
    }

    /// Checks that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // After sorting, a code that prefixes another sorts directly before some code it prefixes.
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Length of the bit-string that encoding a text with these counts produces.
    ///
    /// Characters without a code contribute nothing. Saturates at `usize::MAX`.
    pub fn encoded_len(&self, freqs: &FrequencyTable) -> usize {
        freqs
            .iter()
            .filter_map(|(ch, count)| self.get(ch).map(|code| code.len().saturating_mul(count)))
            .fold(0, usize::saturating_add)
    }

    /// Renders the table as `"<char> <code>\n"` lines in ascending character order.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

fn assign_codes(node: &HuffmanNode, prefix: String, codes: &mut BTreeMap<char, String>) {
    match node {
        HuffmanNode::Leaf { ch, .. } => {
            let code = if prefix.is_empty() {
                "0".to_string()
            } else {
                prefix
            };
            codes.insert(*ch, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            assign_codes(left, left_prefix, codes);
            let mut right_prefix = prefix;
            right_prefix.push('1');
            assign_codes(right, right_prefix, codes);
        }
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ch, code) in self.iter() {
            writeln!(f, "{} {}", ch, code)?;
        }
        Ok(())
    }
}

/// Parses the format written by [`CodeTable::report`].
impl FromStr for CodeTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut codes = BTreeMap::new();
        for (symbol, code) in parse_report(s)? {
            if code.is_empty() || !code.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(Error::invalid_input(format!(
                    "code for {:?} is not a bit-string: {:?}",
                    symbol, code
                )));
            }
            if codes.insert(symbol, code.to_string()).is_some() {
                return Err(Error::invalid_input(format!("duplicate entry for {:?}", symbol)));
            }
        }
        let table = CodeTable { codes };
        if !table.is_prefix_free() {
            return Err(Error::invalid_input("codes are not prefix-free"));
        }
        Ok(table)
    }
}
