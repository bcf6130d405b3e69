use log::{debug, error};

use crate::bitstream::bitpacker::{BitPacker, PackedBits};
use crate::bitstream::bitreader::BitReader;
use crate::error::HuffError;
use crate::huffman_coding::tree::{CodeTree, Node};

/// Decode the first `bit_len` bits of `bits` by walking the tree.
///
/// Each bit moves the cursor left (0) or right (1); reaching a leaf emits its symbol and sends
/// the cursor back to the root. Running out of bits anywhere but the root means the data was
/// truncated or corrupt, and is reported rather than dropped.
pub fn decode(bits: &[u8], bit_len: usize, tree: &CodeTree) -> Result<Vec<u8>, HuffError> {
    let available = bits.len() * 8;
    if bit_len > available {
        error!("Asked to decode {} bits from {} available.", bit_len, available);
        return Err(HuffError::BitCountOverflow { bit_len, available });
    }

    let br = BitReader::with_bit_len(bits, bit_len);
    // No code is longer than the tree depth, so this never over-reserves.
    let mut out = Vec::with_capacity(bit_len / tree.depth().max(1));
    // None means the cursor is at the root.
    let mut cursor: Option<&Node> = None;

    for (offset, bit) in br.enumerate() {
        let next = match cursor {
            None => tree.root_branch(bit),
            Some(node) => node.branch(bit),
        };
        match next {
            Some(Node::Leaf { symbol, .. }) => {
                out.push(*symbol);
                cursor = None;
            }
            Some(internal) => cursor = Some(internal),
            None => {
                error!("Bit {} follows a missing branch.", offset);
                return Err(HuffError::MissingBranch { offset });
            }
        }
    }

    if cursor.is_some() {
        error!(
            "Bitstream ended mid-code after {} bits, {} symbols decoded.",
            bit_len,
            out.len()
        );
        return Err(HuffError::TruncatedStream {
            bit_len,
            decoded: out.len(),
        });
    }
    debug!("Decoded {} bits into {} bytes.", bit_len, out.len());
    Ok(out)
}

/// Decode a literal bit string such as "0110 10". ASCII whitespace is ignored; any character
/// other than '0' or '1' is rejected.
pub fn decode_bit_string(text: &str, tree: &CodeTree) -> Result<Vec<u8>, HuffError> {
    let mut bp = BitPacker::new(text.len() / 8 + 1);
    for (position, found) in text.chars().enumerate() {
        match found {
            '0' => bp.out_bit(false),
            '1' => bp.out_bit(true),
            c if c.is_ascii_whitespace() => {}
            _ => return Err(HuffError::InvalidBitChar { found, position }),
        }
    }
    let packed = bp.finish();
    decode(&packed.bytes, packed.bit_len, tree)
}

/// Decode `packed` and check it gives back `data` exactly.
/// A difference is reported as `RoundTripMismatch` at the first byte that differs.
pub fn verify_round_trip(
    data: &[u8],
    packed: &PackedBits,
    tree: &CodeTree,
) -> Result<(), HuffError> {
    let decoded = decode(&packed.bytes, packed.bit_len, tree)?;
    if decoded == data {
        return Ok(());
    }
    let position = data
        .iter()
        .zip(&decoded)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| data.len().min(decoded.len()));
    error!(
        "Round trip mismatch at byte {}: decoded {} bytes, expected {}.",
        position,
        decoded.len(),
        data.len()
    );
    Err(HuffError::RoundTripMismatch {
        position,
        expected: data.len(),
        decoded: decoded.len(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::{build_code, encode};
    use crate::tools::freq_count::FrequencyTable;

    fn round_trip(data: &[u8]) {
        let (tree, table) = build_code(data).unwrap();
        let packed = encode(data, &table);
        assert_eq!(decode(&packed.bytes, packed.bit_len, &tree).unwrap(), data);
    }

    #[test]
    fn round_trip_text_test() {
        round_trip(b"Huffman coding is a data compression algorithm.");
        round_trip(b"ab");
        round_trip(b"z");
    }

    #[test]
    fn round_trip_all_bytes_test() {
        // Every symbol value, including 0 and non-printables, with skewed counts
        let data: Vec<u8> = (0..4096_u32).map(|i| ((i * i + 7 * i) % 256) as u8).collect();
        round_trip(&data);
        let every: Vec<u8> = (0..=255).collect();
        round_trip(&every);
    }

    #[test]
    fn round_trip_pseudo_random_test() {
        // xorshift, so the test is repeatable
        let mut state = 0x2545_f491_u32;
        for len in [1_usize, 2, 3, 7, 8, 9, 63, 64, 65, 1000] {
            let data: Vec<u8> = (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    // Skew towards small values so code lengths differ
                    (state % 251) as u8 & (state >> 8) as u8
                })
                .collect();
            round_trip(&data);
        }
    }

    #[test]
    fn single_symbol_round_trip_test() {
        let (tree, table) = build_code(b"aaaa").unwrap();
        let packed = encode(b"aaaa", &table);
        assert_eq!(packed.bit_len, 4);
        assert_eq!(decode(&packed.bytes, 4, &tree).unwrap(), b"aaaa");
        let zeros = vec![0_u8; 1000];
        round_trip(&zeros);
    }

    #[test]
    fn single_symbol_missing_branch_test() {
        let (tree, _) = build_code(b"aaaa").unwrap();
        let err = decode_bit_string("001", &tree).unwrap_err();
        assert!(matches!(err, HuffError::MissingBranch { offset: 2 }));
        assert!(err.is_malformed());
    }

    #[test]
    fn tail_bits_ignored_test() {
        let (tree, table) = build_code(b"aab").unwrap();
        // a = 1, b = 0
        let packed = encode(b"aab", &table);
        assert_eq!(packed.bit_len, 3);
        assert_eq!(packed.bytes, vec![0b1100_0000]);
        // Garbage in the unused tail bits must not show up in the output
        let dirty = [packed.bytes[0] | 0b0001_1111];
        assert_eq!(decode(&dirty, 3, &tree).unwrap(), b"aab");
    }

    #[test]
    fn truncated_stream_test() {
        let mut counts = [0_u64; 256];
        for (sym, f) in [(b'a', 5), (b'b', 9), (b'c', 12), (b'd', 13), (b'e', 16), (b'f', 45)] {
            counts[sym as usize] = f;
        }
        let tree = CodeTree::from_frequencies(&FrequencyTable::from_counts(counts).unwrap()).unwrap();
        assert_eq!(decode_bit_string("0 100 1101", &tree).unwrap(), b"fcb");
        // "11" stops inside the tree
        let err = decode_bit_string("0 100 11", &tree).unwrap_err();
        assert!(matches!(
            err,
            HuffError::TruncatedStream {
                bit_len: 6,
                decoded: 2
            }
        ));
    }

    #[test]
    fn bit_count_overflow_test() {
        let (tree, _) = build_code(b"abc").unwrap();
        let err = decode(&[0], 9, &tree).unwrap_err();
        assert!(matches!(
            err,
            HuffError::BitCountOverflow {
                bit_len: 9,
                available: 8
            }
        ));
    }

    #[test]
    fn invalid_bit_char_test() {
        let (tree, _) = build_code(b"abc").unwrap();
        let err = decode_bit_string("01x", &tree).unwrap_err();
        assert!(matches!(
            err,
            HuffError::InvalidBitChar {
                found: 'x',
                position: 2
            }
        ));
    }

    #[test]
    fn empty_bits_decode_to_nothing_test() {
        let (tree, _) = build_code(b"abc").unwrap();
        assert_eq!(decode(&[], 0, &tree).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn verify_round_trip_test() {
        let (tree, table) = build_code(b"aab").unwrap();
        let packed = encode(b"aab", &table);
        assert!(verify_round_trip(b"aab", &packed, &tree).is_ok());
        // Same symbols, different order
        let err = verify_round_trip(b"aba", &packed, &tree).unwrap_err();
        assert!(matches!(
            err,
            HuffError::RoundTripMismatch {
                position: 1,
                expected: 3,
                decoded: 3
            }
        ));
        // Decoded output is a strict prefix of the data
        let err = verify_round_trip(b"aabb", &packed, &tree).unwrap_err();
        assert!(matches!(
            err,
            HuffError::RoundTripMismatch {
                position: 3,
                expected: 4,
                decoded: 3
            }
        ));
    }

    #[test]
    fn shared_tree_decode_test() {
        let data = b"concurrent readers share one tree";
        let (tree, table) = build_code(data).unwrap();
        let packed = encode(data, &table);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(decode(&packed.bytes, packed.bit_len, &tree).unwrap(), data);
                });
            }
        });
    }
}
