//! Huffman coding over arbitrary symbols.
//!
//! [`HuffmanCoder::encode`] counts symbol frequencies, builds a Huffman tree
//! by greedily merging the two rarest subtrees, derives a code for every
//! symbol (left = `0`, right = `1`) and concatenates the codes of the input.
//! [`HuffmanCoder::decode`] walks the tree carried in the message to recover
//! the input exactly.
//!
//! ```
//! use huffman_coding::HuffmanCoder;
//!
//! let coder = HuffmanCoder::new();
//! let message = coder.encode("this is a test")?;
//! assert_eq!(coder.decode(&message)?, "this is a test");
//! # Ok::<(), huffman_coding::HuffmanError>(())
//! ```

pub mod builder;
pub mod code_table;
pub mod coder;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod message;
pub mod node;
pub mod path;
pub mod symbol;
pub mod tree;

pub use coder::HuffmanCoder;
pub use error::{HuffmanError, Result};
pub use message::EncodedMessage;
pub use path::BitPath;
pub use symbol::Symbol;
pub use tree::HuffmanTree;
