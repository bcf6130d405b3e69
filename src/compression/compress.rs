use log::{debug, info};

use crate::bitstream::bitpacker::{BitPacker, PackedBits};
use crate::error::HuffError;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::tree::CodeTree;
use crate::tools::freq_count::FrequencyTable;

/// Build the code tree and code table for the input.
/// Empty input has no code and returns `HuffError::EmptyInput`.
pub fn build_code(data: &[u8]) -> Result<(CodeTree, CodeTable), HuffError> {
    let freqs = FrequencyTable::from_bytes(data);
    let tree = CodeTree::from_frequencies(&freqs).ok_or(HuffError::EmptyInput)?;
    let table = tree.code_table();
    info!(
        "Built code for {} bytes: {} distinct symbols, {} bits encoded.",
        data.len(),
        table.len(),
        table.encoded_len(&freqs)
    );
    Ok((tree, table))
}

/// Pack the input against the table, most significant bit first.
/// Every input byte must have a code; a table built from the same input always does.
pub fn encode(data: &[u8], table: &CodeTable) -> PackedBits {
    // Size guess assumes roughly half size output; the buffer grows if not.
    let mut bp = BitPacker::new(data.len() / 2 + 1);
    for &byte in data {
        bp.out_code(&table[byte]);
    }
    let packed = bp.finish();
    debug!(
        "Encoded {} bytes into {} bits ({} bytes, {} bits in the last).",
        data.len(),
        packed.bit_len,
        packed.bytes.len(),
        packed.last_bits()
    );
    packed
}

/// Release a tree. Ownership makes a second release impossible.
pub fn release(tree: CodeTree) {
    debug!("Releasing tree of {} nodes.", tree.node_count());
    drop(tree);
}
