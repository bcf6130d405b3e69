use crate::bitstream::bitpacker::PackedBits;
use crate::huffman_coding::code_table::CodeTable;
use crate::tools::cli::{HuffOpts, Verbosity};
use crate::tools::freq_count::FrequencyTable;

/// Printable ASCII is shown quoted, anything else as hex.
pub fn symbol_label(symbol: u8) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        format!("'{}'", symbol as char)
    } else {
        format!("{:#04x}", symbol)
    }
}

/// One line per present symbol, in symbol order.
pub fn frequencies(freqs: &FrequencyTable) -> String {
    let mut out = String::from("Symbol frequencies:\n");
    for (symbol, count) in freqs.present() {
        out.push_str(&format!("  {}: {}\n", symbol_label(symbol), count));
    }
    out
}

/// One line per code, in symbol order.
pub fn code_table(table: &CodeTable) -> String {
    let mut out = String::from("Huffman codes:\n");
    for (symbol, code) in table.iter() {
        out.push_str(&format!("  {}: {}\n", symbol_label(symbol), code));
    }
    out
}

/// Original and compressed size in bits, with the ratio between them.
pub fn sizes(original_len: usize, packed: &PackedBits) -> String {
    let original_bits = original_len * 8;
    let ratio = if original_bits == 0 {
        0.0
    } else {
        packed.bit_len as f64 / original_bits as f64 * 100.0
    };
    format!(
        "Original size: {} bits\nCompressed size: {} bits ({:.1}%)\n",
        original_bits, packed.bit_len, ratio
    )
}

/// Reports app output as per Verbosity setting.
/// Accepts both &str and String message.
pub fn report<S: AsRef<str> + std::fmt::Display>(o: &HuffOpts, this_v: Verbosity, msg: S) {
    if o.verbose >= this_v {
        println!("{}", msg)
    }
}
