pub mod cs;
pub mod error;

pub use cs::compression;
pub use cs::compression::huffman::{
    huffman_decode, huffman_encode, CodeTable, CodecConfig, FrequencyTable, HuffmanCodec,
    HuffmanNode, HuffmanTree, SeparatorPolicy, UnknownSymbolPolicy,
};
pub use error::{Error, Result};
