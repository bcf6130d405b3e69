//! The compression module is the entry point for callers.
//!
//! Encoding happens in the following steps:
//! - Frequency count: one pass over the input.
//! - Tree build: merge the two lightest nodes until one root is left.
//! - Code generation: walk the tree, `0` for left and `1` for right.
//! - Packing: append each byte's code to the bitstream, most significant bit first.
//!
//! Decoding walks the same tree one bit at a time. The tree is not stored with the packed
//! bits; callers that need to decode later must keep the tree (or the frequency table it was
//! built from) themselves.
//!

pub mod compress;
pub mod decompress;
