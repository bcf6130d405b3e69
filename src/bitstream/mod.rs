//! The bitstream module forms the bit-level I/O for the huffman coder.
//!
//! Codes are variable length and do not line up with byte boundaries. BitPacker queues bits and
//! emits whole bytes, most significant bit first, and keeps the exact count of bits written so
//! the zero padding added to the last byte can be told apart from data. BitReader reads the same
//! layout back and stops at that count.
//!
pub mod bitpacker;
pub mod bitreader;
