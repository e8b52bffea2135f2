/// Errors that can occur while building a tree, encoding or decoding.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("Cannot build a Huffman tree from an empty input")]
    EmptyInput,

    #[error("Symbol {symbol} has no entry in the code table")]
    UnknownSymbol { symbol: String },

    #[error("Path step {position} requests a child that does not exist")]
    MalformedPath { position: usize },

    #[error("Path ended mid-symbol after consuming {consumed} bits")]
    IncompletePath { consumed: usize },

    #[error("Invalid path character {found:?} at position {position}")]
    InvalidPathSymbol { found: char, position: usize },

    #[error("Expected {expected} decoded symbols, got {actual}")]
    SymbolCountMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
