use std::collections::HashMap;

use crate::symbol::Symbol;

/// Occurrence count of every distinct symbol in one input.
///
/// Symbols are kept in the order they were first seen, so iterating the
/// table (and therefore building a tree from it) is deterministic for a
/// given input.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<S: Symbol> {
    entries: Vec<(S, usize)>,
    index: HashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count every symbol of `input` in a single pass.
    pub fn count<I>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut table = Self::new();
        for symbol in input {
            table.record(symbol);
        }
        log::debug!(
            "counted {} symbols, {} distinct",
            table.total(),
            table.len()
        );
        table
    }

    /// Add one occurrence of `symbol`.
    pub fn record(&mut self, symbol: S) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, 1));
            }
        }
    }

    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the length of the counted input.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// An iterator over `(symbol, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }

    pub fn symbols(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|(symbol, _)| symbol)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::count(iter)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn counts_this_is_a_test() {
        let table = FrequencyTable::count("this is a test".chars());
        assert_eq!(table.len(), 7);
        assert_eq!(table.get(&'t'), Some(3));
        assert_eq!(table.get(&'h'), Some(1));
        assert_eq!(table.get(&'i'), Some(2));
        assert_eq!(table.get(&'s'), Some(3));
        assert_eq!(table.get(&' '), Some(3));
        assert_eq!(table.get(&'a'), Some(1));
        assert_eq!(table.get(&'e'), Some(1));
        assert_eq!(table.get(&'x'), None);
        assert_eq!(table.total(), "this is a test".chars().count());
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table: FrequencyTable<char> = FrequencyTable::count("".chars());
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn symbols_in_first_seen_order() {
        let table = FrequencyTable::count("banana".chars());
        assert_eq!(table.symbols().collect::<Vec<_>>(), vec![&'b', &'a', &'n']);
    }

    #[test]
    fn clear_empties_table() {
        let mut table: FrequencyTable<u8> = b"abc".iter().copied().collect();
        assert_eq!(table.len(), 3);
        table.clear();
        assert!(table.is_empty());
        assert!(!table.contains(&b'a'));
    }
}
