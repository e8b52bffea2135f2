use biterator::Bit;

use crate::path::BitPath;
use crate::symbol::Symbol;

/// A node of a Huffman tree.
///
/// The tree is strictly binary: a node is either a leaf carrying exactly one
/// symbol, or an internal node owning exactly two children.
#[derive(Debug, Clone, PartialEq)]
pub enum HuffmanNode<S: Symbol> {
    Leaf {
        symbol: S,
        frequency: usize,
    },
    Internal {
        frequency: usize,
        /// Position of this node in the merge sequence, starting at 1.
        merge: usize,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S: Symbol> HuffmanNode<S> {
    pub fn leaf(symbol: S, frequency: usize) -> Self {
        HuffmanNode::Leaf { symbol, frequency }
    }

    /// Join two subtrees under a new internal node. `left` is the node
    /// removed from the queue first.
    pub fn merge(left: Self, right: Self, merge: usize) -> Self {
        HuffmanNode::Internal {
            frequency: left.frequency() + right.frequency(),
            merge,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn frequency(&self) -> usize {
        match self {
            HuffmanNode::Leaf { frequency, .. } => *frequency,
            HuffmanNode::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// The child reached by following `bit`, `None` at a leaf.
    pub fn child(&self, bit: &Bit) -> Option<&HuffmanNode<S>> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { left, right, .. } => match bit {
                Bit::Zero => Some(left.as_ref()),
                Bit::One => Some(right.as_ref()),
            },
        }
    }

    /// Count of nodes in this subtree, including itself.
    pub fn size(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => 1 + left.size() + right.size(),
        }
    }

    /// Longest edge count from this node down to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Depth-first search for the leaf holding `target`, returning the path
    /// to it (empty if this node is that leaf).
    pub fn find(&self, target: &S) -> Option<BitPath> {
        let mut path = BitPath::new();
        if self.find_into(target, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn find_into(&self, target: &S, path: &mut BitPath) -> bool {
        match self {
            HuffmanNode::Leaf { symbol, .. } => symbol == target,
            HuffmanNode::Internal { left, right, .. } => {
                path.push(Bit::Zero);
                if left.find_into(target, path) {
                    return true;
                }
                path.pop();

                path.push(Bit::One);
                if right.find_into(target, path) {
                    return true;
                }
                path.pop();
                false
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> HuffmanNode<char> {
        // ((a b) c)
        let ab = HuffmanNode::merge(HuffmanNode::leaf('a', 1), HuffmanNode::leaf('b', 2), 1);
        HuffmanNode::merge(ab, HuffmanNode::leaf('c', 4), 2)
    }

    #[test]
    fn merge_sums_frequencies() {
        let root = sample();
        assert_eq!(root.frequency(), 7);
        assert!(!root.is_leaf());
        assert_eq!(root.symbol(), None);
    }

    #[test]
    fn size_and_depth() {
        let root = sample();
        assert_eq!(root.size(), 5);
        assert_eq!(root.depth(), 2);

        let leaf = HuffmanNode::leaf('z', 9);
        assert_eq!(leaf.size(), 1);
        assert_eq!(leaf.depth(), 0);
    }

    #[test]
    fn find_records_left_zero_right_one() {
        let root = sample();
        assert_eq!(root.find(&'a').map(|p| p.to_string()), Some("00".into()));
        assert_eq!(root.find(&'b').map(|p| p.to_string()), Some("01".into()));
        assert_eq!(root.find(&'c').map(|p| p.to_string()), Some("1".into()));
        assert_eq!(root.find(&'q'), None);
    }

    #[test]
    fn find_on_leaf_root_is_empty_path() {
        let leaf = HuffmanNode::leaf('a', 4);
        assert_eq!(leaf.find(&'a'), Some(BitPath::new()));
        assert_eq!(leaf.find(&'b'), None);
    }

    #[test]
    fn leaf_has_no_children() {
        let leaf = HuffmanNode::leaf('a', 1);
        assert!(leaf.child(&Bit::Zero).is_none());
        assert!(leaf.child(&Bit::One).is_none());
    }
}
