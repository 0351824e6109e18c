//! Huffman coding over text.
//!
//! A [`FrequencyTable`] counts the characters of a source, [`HuffmanTree::build`]
//! greedily merges the two lightest trees until one remains, [`CodeTable`]
//! assigns each leaf its root-to-leaf path, and [`encode`] / [`decode`] map
//! text to a `'0'`/`'1'` bit-string and back.
//!
//! Tree shape is deterministic: the queue breaks weight ties by insertion
//! order, and leaves are inserted in ascending character order. A tree rebuilt
//! from a parsed frequency report is therefore identical to the one reported.
//!
//! # Example
//!
//! ```
//! use huffcode::compression::huffman::HuffmanCodec;
//!
//! let codec = HuffmanCodec::from_text("aaabbc").unwrap();
//! assert_eq!(codec.code_report(), "a 0\nb 11\nc 10\n");
//!
//! let bits = codec.encode("abc").unwrap();
//! assert_eq!(bits, "01110");
//! assert_eq!(codec.decode(&bits).unwrap(), "abc");
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::Compression;
use crate::error::{Error, Result};

pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod queue;
pub mod tree;

pub use code_table::CodeTable;
pub use decoder::{decode, decode_with, SeparatorPolicy};
pub use encoder::{encode, encode_reader, encode_with, UnknownSymbolPolicy};
pub use frequency::FrequencyTable;
pub use queue::TreeQueue;
pub use tree::{HuffmanNode, HuffmanTree};

/// Policies applied by a [`HuffmanCodec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Handling of characters that have no code when encoding
    pub unknown_symbols: UnknownSymbolPolicy,
    /// Handling of characters other than `'0'`/`'1'` when decoding
    pub separators: SeparatorPolicy,
}

/// A frequency table with the tree and code table derived from it.
///
/// Built once per source; the tree and codes are reused by every
/// encode and decode call.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    codes: CodeTable,
    config: CodecConfig,
}

impl HuffmanCodec {
    /// Builds the tree and code table for `frequencies`.
    ///
    /// Returns [`Error::NoData`] if the table is empty.
    pub fn new(frequencies: FrequencyTable) -> Result<Self> {
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        Ok(HuffmanCodec {
            frequencies,
            tree,
            codes,
            config: CodecConfig::default(),
        })
    }

    /// Counts the characters of `text` and builds its codec.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::new(FrequencyTable::from_text(text))
    }

    /// Consumes `reader` to its end and builds a codec for what was read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::new(FrequencyTable::from_reader(reader)?)
    }

    /// Opens the file at `path` and builds a codec for its contents.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(FrequencyTable::from_path(path)?)
    }

    /// Replaces the encode and decode policies.
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// The policies in effect.
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// The counts the tree was built from.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The Huffman tree used for decoding.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// Consumes the codec, keeping only its tree.
    pub fn into_tree(self) -> HuffmanTree {
        self.tree
    }

    /// The cached code table used for encoding.
    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }

    /// `"<char> <count>\n"` lines in ascending character order.
    pub fn frequency_report(&self) -> String {
        self.frequencies.report()
    }

    /// `"<char> <code>\n"` lines in ascending character order.
    pub fn code_report(&self) -> String {
        self.codes.report()
    }

    /// Encodes `text` under the configured [`UnknownSymbolPolicy`].
    pub fn encode(&self, text: &str) -> Result<String> {
        encode_with(text, &self.codes, self.config.unknown_symbols)
    }

    /// Consumes `reader` to its end and encodes what was read.
    pub fn encode_reader<R: Read>(&self, reader: R) -> Result<String> {
        encode_reader(reader, &self.codes, self.config.unknown_symbols)
    }

    /// Opens the file at `path` and encodes its contents.
    pub fn encode_path<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        self.encode_reader(open_stream(path.as_ref())?)
    }

    /// Decodes `bits` under the configured [`SeparatorPolicy`].
    pub fn decode(&self, bits: &str) -> Result<String> {
        decode_with(bits, &self.tree, self.config.separators)
    }
}

impl Compression for HuffmanCodec {
    fn compress(&self, text: &str) -> Result<String> {
        self.encode(text)
    }

    fn decompress(&self, bits: &str) -> Result<String> {
        self.decode(bits)
    }
}

/// Convenience function: builds the Huffman tree from input, encodes the input,
/// and returns (encoded bit string, Huffman tree).
///
/// Fails with [`Error::NoData`] on empty input.
pub fn huffman_encode(input: &str) -> Result<(String, HuffmanTree)> {
    let codec = HuffmanCodec::from_text(input)?;
    let encoded = codec.encode(input)?;
    Ok((encoded, codec.into_tree()))
}

/// Convenience function: decodes an encoded bit string using the provided Huffman tree.
pub fn huffman_decode(encoded: &str, tree: &HuffmanTree) -> Result<String> {
    decode(encoded, tree)
}

pub(crate) fn open_stream(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| Error::StreamOpen {
            path: path.to_path_buf(),
            source,
        })
}

/// Splits a report into `(symbol, value)` entries.
///
/// Each entry is one symbol, a single space, a value and a `'\n'`. The symbol
/// may itself be a space or a newline, so entries are read token by token
/// rather than split on lines.
pub(crate) fn parse_report(report: &str) -> Result<Vec<(char, &str)>> {
    let mut entries = Vec::new();
    let mut rest = report;
    while let Some(symbol) = rest.chars().next() {
        let after_symbol = &rest[symbol.len_utf8()..];
        let body = after_symbol.strip_prefix(' ').ok_or_else(|| {
            Error::invalid_input(format!(
                "report entry {}: expected a space after {:?}",
                entries.len() + 1,
                symbol
            ))
        })?;
        let (value, tail) = body.split_once('\n').ok_or_else(|| {
            Error::invalid_input(format!(
                "report entry {}: missing line terminator",
                entries.len() + 1
            ))
        })?;
        entries.push((symbol, value));
        rest = tail;
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let input = "huffman coding in rust is fun!";
        let (encoded, tree) = huffman_encode(input).unwrap();
        assert!(encoded.chars().all(|c| c == '0' || c == '1'));
        let decoded = huffman_decode(&encoded, &tree).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_single_character() {
        let input = "aaaaaaa";
        let (encoded, tree) = huffman_encode(input).unwrap();
        // With a single symbol, the assigned code is "0" for each occurrence.
        assert_eq!(encoded, "0".repeat(input.len()));
        let decoded = huffman_decode(&encoded, &tree).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(huffman_encode(""), Err(Error::NoData)));
    }

    #[test]
    fn test_codec_reports() {
        let codec = HuffmanCodec::from_text("aaabbc").unwrap();
        assert_eq!(codec.frequency_report(), "a 3\nb 2\nc 1\n");
        assert_eq!(codec.code_report(), "a 0\nb 11\nc 10\n");
        assert_eq!(codec.tree().leaf_count(), 3);
    }

    #[test]
    fn test_codec_config() {
        let codec = HuffmanCodec::from_text("ab").unwrap();
        assert!(codec.encode("abc").is_err());

        let lenient = codec.with_config(CodecConfig {
            unknown_symbols: UnknownSymbolPolicy::Drop,
            separators: SeparatorPolicy::LineBreak,
        });
        assert_eq!(lenient.encode("abc").unwrap(), "01");
        assert_eq!(lenient.decode("0 1").unwrap(), "a\nb");
    }

    #[test]
    fn test_compression_trait() {
        let codec = HuffmanCodec::from_text("mississippi").unwrap();
        let bits = codec.compress("mississippi").unwrap();
        assert_eq!(bits.len(), codec.code_table().encoded_len(codec.frequencies()));
        assert_eq!(codec.decompress(&bits).unwrap(), "mississippi");
    }

    #[test]
    fn test_parse_report_entries() {
        let entries = parse_report("a 1\n  22\n\n 3\n").unwrap();
        assert_eq!(entries, vec![('a', "1"), (' ', "22"), ('\n', "3")]);
        assert!(parse_report("").unwrap().is_empty());
        assert!(parse_report("a1\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = HuffmanCodec::from_path("/nonexistent/huffcode/input.txt").unwrap_err();
        assert!(matches!(err, Error::StreamOpen { .. }));
    }
}
