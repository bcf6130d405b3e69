use std::io;

use thiserror::Error;

/// Errors returned while building codes or decoding a packed bitstream.
#[derive(Debug, Error)]
pub enum HuffError {
    /// There is nothing to build a code from.
    #[error("cannot build a huffman code from empty input")]
    EmptyInput,
    /// The valid bits ran out while the decoder was part way down the tree.
    #[error("bitstream ends mid-code after {bit_len} bits ({decoded} symbols decoded)")]
    TruncatedStream { bit_len: usize, decoded: usize },
    /// A bit selected a branch the tree does not have (the missing side of a single-symbol root).
    #[error("bit {offset} selects a branch that does not exist in the code tree")]
    MissingBranch { offset: usize },
    /// The caller claimed more valid bits than the buffer holds.
    #[error("valid bit count {bit_len} exceeds the {available} bits in the buffer")]
    BitCountOverflow { bit_len: usize, available: usize },
    /// A literal bit string contained something other than '0', '1' or whitespace.
    #[error("invalid character {found:?} at position {position} in bit string")]
    InvalidBitChar { found: char, position: usize },
    /// Decoding freshly encoded data did not give back the input.
    #[error("round trip mismatch at byte {position}: decoded {decoded} bytes, expected {expected}")]
    RoundTripMismatch {
        position: usize,
        expected: usize,
        decoded: usize,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HuffError {
    /// True for the errors that mean the packed data is truncated or corrupt.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            HuffError::TruncatedStream { .. }
                | HuffError::MissingBranch { .. }
                | HuffError::BitCountOverflow { .. }
        )
    }
}
