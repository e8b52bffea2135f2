use std::iter::Enumerate;
use std::slice::Iter;

use biterator::Bit;

use crate::error::{HuffmanError, Result};
use crate::node::HuffmanNode;
use crate::path::BitPath;
use crate::symbol::Symbol;

/// Decodes paths by walking a Huffman tree.
///
/// Holds no state between calls: every `decode` starts from the root.
pub struct Decoder<'t, S: Symbol> {
    root: Option<&'t HuffmanNode<S>>,
}

enum State {
    /// Ready to start a new symbol at the root.
    AtRoot,
    /// The root is a leaf; codes are empty, so the symbol is repeated
    /// once per original input position.
    Repeating {
        remaining: usize,
    },
    Done,
}

/// Iterator over the symbols decoded from one path.
pub struct DecodedSymbols<'t, 'p, S: Symbol> {
    root: Option<&'t HuffmanNode<S>>,
    bits: Enumerate<Iter<'p, Bit>>,
    total: usize,
    state: State,
}

impl<'t, S: Symbol> Decoder<'t, S> {
    /// Create a decoder for the tree rooted at `root`. `None` is an empty
    /// tree, which can only decode an empty path.
    pub fn new(root: Option<&'t HuffmanNode<S>>) -> Self {
        Self { root }
    }

    /// Decode `path` lazily, one symbol at a time.
    ///
    /// `symbol_count` is the length of the encoded input. It is only needed
    /// when the root is a leaf, since every code is then empty.
    pub fn symbols<'p>(&self, path: &'p BitPath, symbol_count: usize) -> DecodedSymbols<'t, 'p, S> {
        let state = match self.root {
            Some(root) if root.is_leaf() && path.is_empty() => State::Repeating {
                remaining: symbol_count,
            },
            _ => State::AtRoot,
        };
        DecodedSymbols {
            root: self.root,
            bits: path.iter().enumerate(),
            total: path.len(),
            state,
        }
    }

    /// Decode the whole of `path`, checking that exactly `symbol_count`
    /// symbols come out.
    pub fn decode(&self, path: &BitPath, symbol_count: usize) -> Result<Vec<S>> {
        let symbols = self
            .symbols(path, symbol_count)
            .collect::<Result<Vec<_>>>()?;
        if symbols.len() != symbol_count {
            return Err(HuffmanError::SymbolCountMismatch {
                expected: symbol_count,
                actual: symbols.len(),
            });
        }
        log::debug!(
            "decoded {} path bits into {} symbols",
            path.len(),
            symbols.len()
        );
        Ok(symbols)
    }
}

impl<S: Symbol> DecodedSymbols<'_, '_, S> {
    fn fail(&mut self, error: HuffmanError) -> Option<Result<S>> {
        self.state = State::Done;
        Some(Err(error))
    }
}

impl<S: Symbol> Iterator for DecodedSymbols<'_, '_, S> {
    type Item = Result<S>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Done => return None,
            State::Repeating { remaining } => {
                let symbol = self.root.and_then(|root| root.symbol()).copied();
                return match (remaining, symbol) {
                    (0, _) | (_, None) => {
                        self.state = State::Done;
                        None
                    }
                    (_, Some(symbol)) => {
                        self.state = State::Repeating {
                            remaining: remaining - 1,
                        };
                        Some(Ok(symbol))
                    }
                };
            }
            State::AtRoot => {}
        }

        let Some(root) = self.root else {
            return match self.bits.next() {
                Some((position, _)) => self.fail(HuffmanError::MalformedPath { position }),
                None => {
                    self.state = State::Done;
                    None
                }
            };
        };

        let mut current = root;
        let mut steps = 0;
        loop {
            let Some((position, bit)) = self.bits.next() else {
                if steps == 0 {
                    self.state = State::Done;
                    return None;
                }
                return self.fail(HuffmanError::IncompletePath {
                    consumed: self.total,
                });
            };

            current = match current.child(bit) {
                Some(child) => child,
                None => return self.fail(HuffmanError::MalformedPath { position }),
            };
            steps += 1;

            if let Some(symbol) = current.symbol() {
                log::trace!("bit {position}: decoded {symbol:?}");
                return Some(Ok(*symbol));
            }
        }
    }
}
