use std::fmt;
use std::ops::Index;

use log::debug;

use super::tree::{CodeTree, Node};
use crate::tools::freq_count::{FrequencyTable, SYMBOLS};

/// Codes never get longer than this: a tree of depth d needs a total weight of at least
/// Fib(d + 2), and total weight is a u64.
pub const MAX_CODE_LEN: u8 = 128;

/// A single code: the low `len` bits of `bits`, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u128,
    pub len: u8,
}

impl Code {
    /// True if `self` is a prefix of `other` (or equal to it).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }

    /// Bit at position `i`, counting from the first bit sent.
    pub fn bit(&self, i: u8) -> bool {
        (self.bits >> (self.len - 1 - i)) & 1 == 1
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len {
            f.write_str(if self.bit(i) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Symbol to code mapping generated from a code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; SYMBOLS],
}

impl CodeTable {
    /// Depth first walk: `0` appended going left, `1` going right, recorded at each leaf.
    pub fn from_tree(tree: &CodeTree) -> Self {
        let mut table = CodeTable {
            codes: [None; SYMBOLS],
        };
        match tree {
            CodeTree::Branching(root) => table.walk(root, 0, 0),
            // The synthetic root's only child sits on the 0 branch.
            CodeTree::Single(leaf) => table.walk(leaf, 0, 1),
        }
        debug!(
            "Generated {} codes, longest {} bits.",
            table.len(),
            table.iter().map(|(_, c)| c.len).max().unwrap_or(0)
        );
        table
    }

    fn walk(&mut self, node: &Node, bits: u128, depth: u8) {
        match node {
            Node::Leaf { symbol, .. } => {
                debug_assert!(depth >= 1 && depth <= MAX_CODE_LEN);
                self.codes[*symbol as usize] = Some(Code { bits, len: depth });
            }
            Node::Internal { left, right, .. } => {
                self.walk(left, bits << 1, depth + 1);
                self.walk(right, (bits << 1) | 1, depth + 1);
            }
        }
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate (symbol, code) in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(sym, code)| code.as_ref().map(|c| (sym as u8, c)))
    }

    /// Bits needed to encode input with these frequencies, without packing anything.
    /// The total fits a u64 and no code exceeds 128 bits, so the u128 sum cannot overflow.
    /// Panics if a counted symbol has no code.
    pub fn encoded_len(&self, freqs: &FrequencyTable) -> u128 {
        freqs
            .present()
            .map(|(sym, count)| count as u128 * self[sym].len as u128)
            .sum()
    }
}

impl Index<u8> for CodeTable {
    type Output = Code;

    /// Panics when the symbol has no code; a table built from the same data always has one.
    fn index(&self, symbol: u8) -> &Code {
        match self.get(symbol) {
            Some(code) => code,
            None => panic!("symbol {:#04x} has no code in this table", symbol),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn textbook() -> FrequencyTable {
        let mut counts = [0_u64; 256];
        for (sym, f) in [(b'a', 5), (b'b', 9), (b'c', 12), (b'd', 13), (b'e', 16), (b'f', 45)] {
            counts[sym as usize] = f;
        }
        FrequencyTable::from_counts(counts).unwrap()
    }

    #[test]
    fn textbook_codes_test() {
        let freqs = textbook();
        let table = CodeTree::from_frequencies(&freqs).unwrap().code_table();
        let codes: Vec<(char, String)> = table
            .iter()
            .map(|(s, c)| (s as char, c.to_string()))
            .collect();
        assert_eq!(
            codes,
            vec![
                ('a', "1100".to_string()),
                ('b', "1101".to_string()),
                ('c', "100".to_string()),
                ('d', "101".to_string()),
                ('e', "111".to_string()),
                ('f', "0".to_string()),
            ]
        );
        assert_eq!(table.encoded_len(&freqs), 224);
    }

    #[test]
    fn single_symbol_gets_one_bit_test() {
        let table = CodeTree::from_bytes(b"aaaa").unwrap().code_table();
        assert_eq!(table.len(), 1);
        assert_eq!(table[b'a'], Code { bits: 0, len: 1 });
        assert_eq!(table[b'a'].to_string(), "0");
    }

    #[test]
    fn prefix_free_test() {
        let data: Vec<u8> = (0..=255_u8)
            .flat_map(|b| std::iter::repeat(b).take(1 + (b as usize * 7) % 23))
            .collect();
        let table = CodeTree::from_bytes(&data).unwrap().code_table();
        assert_eq!(table.len(), 256);
        for (a, ca) in table.iter() {
            assert!(ca.len >= 1);
            for (b, cb) in table.iter() {
                if a != b {
                    assert!(!ca.is_prefix_of(cb), "{} is a prefix of {}", ca, cb);
                }
            }
        }
    }

    #[test]
    fn kraft_equality_test() {
        // A full binary tree gives sum(2^-len) == 1
        let table = CodeTree::from_bytes(b"abracadabra alakazam").unwrap().code_table();
        let max = table.iter().map(|(_, c)| c.len).max().unwrap();
        let sum: u64 = table.iter().map(|(_, c)| 1_u64 << (max - c.len)).sum();
        assert_eq!(sum, 1_u64 << max);
    }

    #[test]
    fn deterministic_codes_test() {
        let data = b"mississippi river";
        let t1 = CodeTree::from_bytes(data).unwrap().code_table();
        let t2 = CodeTree::from_bytes(data).unwrap().code_table();
        assert_eq!(t1, t2);
    }

    #[test]
    fn huge_counts_test() {
        // Totals near u64::MAX still build a valid tree and an exact encoded length
        let mut counts = [0_u64; 256];
        counts[0] = u64::MAX - 2;
        counts[1] = 1;
        counts[2] = 1;
        let freqs = FrequencyTable::from_counts(counts).unwrap();
        let tree = CodeTree::from_frequencies(&freqs).unwrap();
        assert_eq!(tree.weight(), u64::MAX);
        let table = tree.code_table();
        assert_eq!(table[0].len, 1);
        assert_eq!(table[1].len, 2);
        assert_eq!(table[2].len, 2);
        assert_eq!(table.encoded_len(&freqs), (u64::MAX - 2) as u128 + 4);
    }

    #[test]
    #[should_panic(expected = "has no code")]
    fn missing_symbol_panics_test() {
        let table = CodeTree::from_bytes(b"ab").unwrap().code_table();
        let _code = table[b'z'];
    }
}
