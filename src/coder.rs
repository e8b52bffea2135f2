use crate::error::Result;
use crate::message::EncodedMessage;
use crate::symbol::Symbol;
use crate::tree::HuffmanTree;

/// Encodes text into [`EncodedMessage`]s and decodes them back.
///
/// Every encode builds a fresh tree that is moved into the returned
/// message, so one coder can be shared freely and separate messages never
/// interfere with each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCoder;

impl HuffmanCoder {
    pub fn new() -> Self {
        HuffmanCoder
    }

    /// Encode `text`, one `char` per symbol.
    ///
    /// Empty text fails with [`HuffmanError::EmptyInput`](crate::HuffmanError::EmptyInput).
    pub fn encode(&self, text: &str) -> Result<EncodedMessage<char>> {
        let symbols: Vec<char> = text.chars().collect();
        self.encode_symbols(&symbols)
    }

    /// Decode a message produced by [`HuffmanCoder::encode`].
    pub fn decode(&self, message: &EncodedMessage<char>) -> Result<String> {
        Ok(self.decode_symbols(message)?.into_iter().collect())
    }

    /// Encode an arbitrary sequence of symbols.
    pub fn encode_symbols<S: Symbol>(&self, input: &[S]) -> Result<EncodedMessage<S>> {
        let tree = HuffmanTree::from_symbols(input)?;
        let path = tree.encode(input)?;
        log::debug!(
            "encoded {} symbols into {} path bits",
            input.len(),
            path.len()
        );
        Ok(EncodedMessage::from_parts(tree, path, input.len()))
    }

    pub fn decode_symbols<S: Symbol>(&self, message: &EncodedMessage<S>) -> Result<Vec<S>> {
        message
            .tree()
            .decode(message.path(), message.symbol_count())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::HuffmanError;
    use test_log::test;

    #[test]
    fn this_is_a_test_round_trip() {
        let coder = HuffmanCoder::new();
        let message = coder.encode("this is a test").unwrap();
        assert_eq!(message.tree().size(), 13);
        assert_eq!(message.symbol_count(), 14);
        assert_eq!(message.to_string().len(), message.path().len());
        assert!(message.to_string().chars().all(|c| c == '0' || c == '1'));
        assert_eq!(coder.decode(&message).unwrap(), "this is a test");
    }

    #[test]
    fn single_symbol_round_trip() {
        let coder = HuffmanCoder::new();
        let message = coder.encode("aaaa").unwrap();
        assert_eq!(message.tree().size(), 1);
        assert_eq!(message.tree().depth(), 0);
        assert!(message.path().is_empty());
        assert_eq!(coder.decode(&message).unwrap(), "aaaa");
    }

    #[test]
    fn empty_text_is_an_error() {
        assert_eq!(
            HuffmanCoder::new().encode(""),
            Err(HuffmanError::EmptyInput)
        );
    }

    #[test]
    fn multibyte_characters_round_trip() {
        let coder = HuffmanCoder::new();
        let text = "aaee öla æøå 🦀🦀";
        let message = coder.encode(text).unwrap();
        assert_eq!(coder.decode(&message).unwrap(), text);
    }

    #[test]
    fn bytes_round_trip() {
        let coder = HuffmanCoder::new();
        let input = b"\x00\x01\x01\xff\xff\xff".to_vec();
        let message = coder.encode_symbols(&input).unwrap();
        assert_eq!(coder.decode_symbols(&message).unwrap(), input);
    }

    #[test]
    fn utf16_code_units_round_trip() {
        let coder = HuffmanCoder::new();
        let units: Vec<u16> = "h€llo 🦀".encode_utf16().collect();
        let message = coder.encode_symbols(&units).unwrap();
        let decoded = coder.decode_symbols(&message).unwrap();
        assert_eq!(String::from_utf16(&decoded).unwrap(), "h€llo 🦀");
    }

    #[test]
    fn messages_are_independent() {
        let coder = HuffmanCoder::new();
        let first = coder.encode("abracadabra").unwrap();
        let second = coder.encode("zzz yyy").unwrap();
        assert_eq!(coder.decode(&first).unwrap(), "abracadabra");
        assert_eq!(coder.decode(&second).unwrap(), "zzz yyy");
    }

    #[test]
    fn mismatched_tree_is_not_detected() {
        // Both trees give a = 0 and b = 1, so the foreign path decodes
        // into the wrong text without any error.
        let coder = HuffmanCoder::new();
        let ab = coder.encode("abb").unwrap();
        let (_, path, count) = coder.encode("baa").unwrap().into_parts();
        let (tree, _, _) = ab.into_parts();
        let mismatched = EncodedMessage::from_parts(tree, path, count);
        assert_eq!(coder.decode(&mismatched).unwrap(), "abb");
    }
}
