//! BitReader: reads a packed bitstream most significant bit first.
//!
//! The reader is bounded by a count of valid bits rather than by the buffer length, so the zero
//! padding in the last byte of a packed buffer is never handed out as data.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits from an in-memory packed buffer.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    /// Valid bits not yet read.
    remaining: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader over every bit of the buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_bit_len(buffer, buffer.len() * 8)
    }

    /// Creates a reader over the first `bit_len` bits of the buffer.
    /// `bit_len` is clamped to the bits the buffer actually holds.
    pub fn with_bit_len(buffer: &'a [u8], bit_len: usize) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            remaining: bit_len.min(buffer.len() * 8),
        }
    }

    /// Return bit as Option<u8> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let bit = (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        self.remaining -= 1;
        Some(bit)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Valid bits not yet read.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Bits read so far.
    pub fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bool_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bool_bit_test() {
        let x = [0b01010000];
        let mut br = BitReader::new(&x);
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.remaining(), 4);
    }

    #[test]
    fn stops_at_bit_len_test() {
        // Only the first 3 bits are data; the set tail bits must not be read
        let x = [0b1011_1111];
        let br = BitReader::with_bit_len(&x, 3);
        assert_eq!(br.collect::<Vec<_>>(), vec![true, false, true]);
    }

    #[test]
    fn crosses_byte_boundary_test() {
        let x = [0b0000_0001, 0b1000_0000];
        let mut br = BitReader::with_bit_len(&x, 9);
        assert_eq!(br.by_ref().take(7).filter(|&b| b).count(), 0);
        assert_eq!(br.position(), 7);
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.position(), 8);
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.position(), 9);
        assert_eq!(br.remaining(), 0);
        assert_eq!(br.bool_bit(), None);
    }

    #[test]
    fn bit_len_clamped_test() {
        let x = [0xff];
        let br = BitReader::with_bit_len(&x, 100);
        assert_eq!(br.remaining(), 8);
    }
}
