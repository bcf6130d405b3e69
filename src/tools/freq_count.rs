use rayon::prelude::*;

/// Number of distinct symbols (every u8 value).
pub const SYMBOLS: usize = 256;

/// Occurrence count for each of the 256 byte values, indexed by the byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; SYMBOLS],
}

impl FrequencyTable {
    /// Count every byte of the input. Uses parallelism when data set is over 64k.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            counts: freqs(data),
        }
    }

    /// Rebuild a table from counts the caller already has (eg. stored next to packed data).
    /// Returns None when the counts sum past u64::MAX, since no real input can have that length
    /// and tree weights are summed in a u64.
    pub fn from_counts(counts: [u64; SYMBOLS]) -> Option<Self> {
        counts
            .iter()
            .try_fold(0_u64, |total, &c| total.checked_add(c))?;
        Some(Self { counts })
    }

    /// Count for one symbol.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    pub fn counts(&self) -> &[u64; SYMBOLS] {
        &self.counts
    }

    /// Sum of all counts, ie. the length of the input that was scanned.
    /// Cannot overflow: `from_counts` rejects tables whose sum does not fit.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct() == 0
    }

    /// Iterate (symbol, count) for present symbols in ascending symbol order.
    pub fn present(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(sym, &c)| (sym as u8, c))
    }
}

impl From<&[u8]> for FrequencyTable {
    fn from(data: &[u8]) -> Self {
        FrequencyTable::from_bytes(data)
    }
}

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> [u64; SYMBOLS] {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || [0_u64; SYMBOLS],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || [0_u64; SYMBOLS],
                |mut s, f| {
                    s.iter_mut().zip(f.iter()).for_each(|(a, b)| *a += b);
                    s
                },
            )
    } else {
        let mut freqs = [0_u64; SYMBOLS];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}
