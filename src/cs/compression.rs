//! Compression algorithms implementation.
//!
//! This module provides a Huffman text codec:
//! - Frequency analysis of a character stream
//! - Greedy prefix-code tree construction over a min-priority queue
//! - Code table derivation by depth-first traversal
//! - Encoding to, and decoding from, a textual `'0'`/`'1'` bit-string
//!
//! # Examples
//!
//! ```rust
//! use huffcode::compression::{huffman_decode, huffman_encode};
//!
//! let (encoded, tree) = huffman_encode("aaabbc").unwrap();
//! assert_eq!(encoded, "000111110");
//! assert_eq!(huffman_decode(&encoded, &tree).unwrap(), "aaabbc");
//! ```

pub use crate::error::Error;

/// Result type for compression operations
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for codecs that turn text into a textual bit-string and back
pub trait Compression {
    /// Compress the input text into a string of `'0'` and `'1'`
    fn compress(&self, text: &str) -> Result<String>;

    /// Decompress a bit-string back into text
    fn decompress(&self, bits: &str) -> Result<String>;
}

pub mod huffman;
pub use huffman::{
    huffman_decode, huffman_encode, CodeTable, CodecConfig, FrequencyTable, HuffmanCodec,
    HuffmanNode, HuffmanTree, SeparatorPolicy, UnknownSymbolPolicy,
};
