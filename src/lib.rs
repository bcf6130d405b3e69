//! Huffman coding for arbitrary byte streams.
//!
//! Builds a prefix-free code from the byte frequencies of an input, packs the input against
//! that code, and decodes packed bits back by walking the code tree.
//!
//! Tree construction is deterministic. Nodes are merged lightest first; on equal weight a leaf
//! goes before an internal node, leaves go in ascending byte order, and internal nodes in the
//! order they were created. The first node taken becomes the `0` branch.
//!
//! Basic usage:
//!
//! ```
//! use huffcode::{build_code, decode, encode};
//!
//! let data = b"abracadabra";
//! let (tree, table) = build_code(data)?;
//! let packed = encode(data, &table);
//! assert_eq!(decode(&packed.bytes, packed.bit_len, &tree)?, data);
//! # Ok::<(), huffcode::HuffError>(())
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::bitpacker::PackedBits;
pub use compression::compress::{build_code, encode, release};
pub use compression::decompress::{decode, decode_bit_string, verify_round_trip};
pub use error::HuffError;
pub use huffman_coding::code_table::{Code, CodeTable};
pub use huffman_coding::tree::{CodeTree, Node};
pub use tools::freq_count::FrequencyTable;
