use std::collections::HashMap;

use crate::frequency::FrequencyTable;
use crate::node::HuffmanNode;
use crate::path::BitPath;
use crate::symbol::Symbol;

/// Root-to-leaf path of every symbol in a tree.
///
/// No code is a prefix of another, since every code ends at a distinct leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, BitPath>,
}

impl<S: Symbol> CodeTable<S> {
    pub fn new() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }

    /// Derive a code for each symbol of `frequencies` by searching `root`.
    ///
    /// Symbols that are not leaves of `root` get no entry.
    pub fn build(root: &HuffmanNode<S>, frequencies: &FrequencyTable<S>) -> Self {
        let mut codes = HashMap::with_capacity(frequencies.len());
        for symbol in frequencies.symbols() {
            match root.find(symbol) {
                Some(code) => {
                    log::trace!("code for {symbol:?}: {code}");
                    codes.insert(*symbol, code);
                }
                None => log::debug!("{symbol:?} is not a leaf of the tree"),
            }
        }
        Self { codes }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitPath> {
        self.codes.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitPath)> {
        self.codes.iter()
    }

    pub fn clear(&mut self) {
        self.codes.clear();
    }
}

impl<S: Symbol> Default for CodeTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
