//! Error types for the Huffman codec.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error variants for frequency analysis, tree construction, encoding and decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// A named source could not be opened as a character stream.
    #[error("cannot open {}: {source}", .path.display())]
    StreamOpen {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Reading from an already opened stream failed, or the stream was not valid UTF-8.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// An argument was malformed, e.g. an unparsable report line.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// There were no symbols to build a tree from.
    #[error("no data: frequency table is empty")]
    NoData,

    /// The encoder met a character that has no code in the table.
    #[error("symbol {symbol:?} at position {position} has no code")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Character offset within the input text.
        position: usize,
    },

    /// The decoder met a character it cannot follow in the tree.
    #[error("invalid bit {found:?} at position {position}")]
    InvalidBit {
        /// The offending character.
        found: char,
        /// Character offset within the bit-string.
        position: usize,
    },

    /// The bit-string ended part of the way down a code path.
    #[error("bit-string ends inside a code starting at position {position}")]
    UnterminatedCode {
        /// Offset of the first bit of the incomplete code.
        position: usize,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
