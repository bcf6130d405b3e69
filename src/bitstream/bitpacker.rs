use log::error;

use crate::huffman_coding::code_table::Code;

/// Packed output: bytes plus the count of bits that carry data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackedBits {
    pub bytes: Vec<u8>,
    pub bit_len: usize,
}

impl PackedBits {
    /// Valid bits in the last byte (1-8), or 0 when there is no data.
    pub fn last_bits(&self) -> u8 {
        match self.bit_len % 8 {
            0 if self.bit_len > 0 => 8,
            n => n as u8,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// The valid bits as a string of '0' and '1' characters.
    pub fn to_bit_string(&self) -> String {
        (0..self.bit_len)
            .map(|i| {
                if self.bytes[i / 8] & (0x80 >> (i % 8)) != 0 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }
}

/// Creates a bitstream for output, most significant bit first.
pub struct BitPacker {
    output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    /// Total bits written, not counting flush padding.
    written: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Call finish() to flush the
    /// bit queue and take the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            written: 0,
        }
    }

    /// Internal bitstream write function common to all out functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the low `depth` (0-32) bits of data.
    fn out_bits(&mut self, data: u32, depth: u8) {
        debug_assert!(depth <= 32);
        if depth == 0 {
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= (data & (0xffffffff >> (32 - depth))) as u64; //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.written += depth as usize;
        self.write_stream();
    }

    /// Writes a single bit.
    pub fn out_bit(&mut self, bit: bool) {
        self.out_bits(bit as u32, 1);
    }

    /// Writes a huffman code of any length, 32 bits at a time.
    pub fn out_code(&mut self, code: &Code) {
        let mut left = code.len;
        while left > 0 {
            let take = left.min(32);
            left -= take;
            self.out_bits((code.bits >> left) as u32, take);
        }
    }

    /// Flushes the remaining bits (1-7) from the buffer, padding with 0s in the least
    /// signficant bits
    fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Flush and hand over the output with its exact bit count.
    pub fn finish(mut self) -> PackedBits {
        self.flush();
        PackedBits {
            bytes: self.output,
            bit_len: self.written,
        }
    }
}
