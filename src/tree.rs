use crate::builder::build_tree;
use crate::code_table::CodeTable;
use crate::decoder::Decoder;
use crate::encoder;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::node::HuffmanNode;
use crate::path::BitPath;
use crate::symbol::Symbol;

/// A Huffman tree together with the frequency and code tables it was
/// derived from.
///
/// A tree may be empty (see [`HuffmanTree::new`] and [`HuffmanTree::clear`]);
/// an empty tree has `size() == 0` and `depth() == -1`.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanTree<S: Symbol> {
    root: Option<HuffmanNode<S>>,
    frequencies: FrequencyTable<S>,
    codes: CodeTable<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// An empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            frequencies: FrequencyTable::new(),
            codes: CodeTable::new(),
        }
    }

    /// Count `input` and build the tree and code table for it.
    pub fn from_symbols(input: &[S]) -> Result<Self> {
        Self::from_frequencies(FrequencyTable::count(input.iter().copied()))
    }

    pub fn from_frequencies(frequencies: FrequencyTable<S>) -> Result<Self> {
        let root = build_tree(&frequencies)?;
        let codes = CodeTable::build(&root, &frequencies);
        log::debug!(
            "tree for {} symbols: size {}, depth {}",
            frequencies.len(),
            root.size(),
            root.depth()
        );
        Ok(Self {
            root: Some(root),
            frequencies,
            codes,
        })
    }

    /// Concatenated codes of `input`, which must only hold symbols this tree
    /// was built for.
    pub fn encode(&self, input: &[S]) -> Result<BitPath> {
        encoder::encode(input.iter().copied(), &self.codes)
    }

    /// Decode a path produced by [`HuffmanTree::encode`] on this tree,
    /// where `symbol_count` is the length of the encoded input.
    ///
    /// A path encoded with a different tree decodes without error into the
    /// wrong symbols whenever it happens to stay on valid leaves. Callers
    /// must pair each path with the tree that produced it.
    pub fn decode(&self, path: &BitPath, symbol_count: usize) -> Result<Vec<S>> {
        Decoder::new(self.root.as_ref()).decode(path, symbol_count)
    }

    pub fn root(&self) -> Option<&HuffmanNode<S>> {
        self.root.as_ref()
    }

    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn code(&self, symbol: &S) -> Option<&BitPath> {
        self.codes.get(symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes, leaves and internal nodes alike.
    pub fn size(&self) -> usize {
        self.root.as_ref().map_or(0, HuffmanNode::size)
    }

    /// Edge count of the longest root-to-leaf path; `-1` for an empty tree.
    pub fn depth(&self) -> isize {
        self.root.as_ref().map_or(-1, |root| root.depth() as isize)
    }

    /// Sum over all symbols of frequency times code length, i.e. the length
    /// of the encoded input.
    pub fn weighted_path_length(&self) -> usize {
        self.frequencies
            .iter()
            .filter_map(|(symbol, count)| self.codes.get(symbol).map(|code| count * code.len()))
            .sum()
    }

    /// Drop the root and both tables, leaving an empty tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.frequencies.clear();
        self.codes.clear();
    }
}

impl<S: Symbol> Default for HuffmanTree<S> {
    fn default() -> Self {
        Self::new()
    }
}
