use std::fmt;
use std::str::FromStr;

use biterator::Bit;

use crate::error::HuffmanError;

/// An ordered sequence of left (`Zero`) / right (`One`) steps.
///
/// Used both for the code of a single symbol and for the concatenated
/// encoding of a whole message. Bits are kept unpacked, one `Bit` per step.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BitPath {
    bits: Vec<Bit>,
}

impl BitPath {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: Bit) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<Bit> {
        self.bits.pop()
    }

    /// Append every step of `other` to the end of this path.
    pub fn extend_from(&mut self, other: &BitPath) {
        self.bits.extend(other.bits.iter().copied());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bit> {
        self.bits.iter()
    }

    /// True if every step of `self` matches the start of `other`.
    pub fn is_prefix_of(&self, other: &BitPath) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl From<Vec<Bit>> for BitPath {
    fn from(bits: Vec<Bit>) -> Self {
        Self { bits }
    }
}

impl FromIterator<Bit> for BitPath {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            let c = match bit {
                Bit::Zero => '0',
                Bit::One => '1',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for BitPath {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, found)| match found {
                '0' => Ok(Bit::Zero),
                '1' => Ok(Bit::One),
                _ => Err(HuffmanError::InvalidPathSymbol { found, position }),
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use biterator::Bit::{One, Zero};

    #[test]
    fn display_renders_zeros_and_ones() {
        let path = BitPath::from(vec![Zero, One, One, Zero]);
        assert_eq!(path.to_string(), "0110");
        assert_eq!(path.iter().filter(|bit| **bit == One).count(), 2);
        assert_eq!(BitPath::new().to_string(), "");
    }

    #[test]
    fn parse_accepts_binary_digits() {
        assert_eq!("101".parse(), Ok(BitPath::from(vec![One, Zero, One])));
        assert_eq!("".parse(), Ok(BitPath::new()));
    }

    #[test]
    fn parse_rejects_other_characters() {
        assert_eq!(
            "01x1".parse::<BitPath>(),
            Err(HuffmanError::InvalidPathSymbol {
                found: 'x',
                position: 2
            })
        );
    }

    #[test]
    fn prefix_check() {
        let short = BitPath::from(vec![One, Zero]);
        let long = BitPath::from(vec![One, Zero, Zero]);
        assert!(short.is_prefix_of(&long));
        assert!(!long.is_prefix_of(&short));
        assert!(BitPath::new().is_prefix_of(&short));
    }

    #[test]
    fn extend_concatenates() {
        let mut path = BitPath::from(vec![One]);
        path.extend_from(&BitPath::from(vec![Zero, One]));
        assert_eq!(path.to_string(), "101");
        assert_eq!(path.len(), 3);
    }
}
