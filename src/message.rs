use std::fmt;

use crate::path::BitPath;
use crate::symbol::Symbol;
use crate::tree::HuffmanTree;

/// The result of an encode: the tree that assigned the codes, the encoded
/// path and the number of symbols it stands for.
///
/// The message owns its tree, so decoding needs nothing beyond the message
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedMessage<S: Symbol> {
    tree: HuffmanTree<S>,
    path: BitPath,
    symbol_count: usize,
}

impl<S: Symbol> EncodedMessage<S> {
    /// Assemble a message from separately kept parts.
    ///
    /// `path` must have been produced by `tree`; a path from any other tree
    /// may decode to the wrong symbols without an error.
    pub fn from_parts(tree: HuffmanTree<S>, path: BitPath, symbol_count: usize) -> Self {
        Self {
            tree,
            path,
            symbol_count,
        }
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn path(&self) -> &BitPath {
        &self.path
    }

    /// Length of the input that was encoded.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    pub fn into_parts(self) -> (HuffmanTree<S>, BitPath, usize) {
        (self.tree, self.path, self.symbol_count)
    }
}

/// Renders the encoded path as a string of `0`s and `1`s.
impl<S: Symbol> fmt::Display for EncodedMessage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}
