//! The binary-search kernel: `find_first`/`find_last` over a mapped byte
//! region, parameterized at compile time by key width (`T: FixedWidthKey`)
//! and byte order (`E: ByteOrder`).
//!
//! Each of `find_first_uint8_t`, `find_first_uint16_t`, ...,
//! `find_last_uint128_t` collapses into one generic function here; the
//! compiler monomorphizes a dedicated instance per `(T, E)` pair actually
//! used, so nothing is lost relative to having ~128 separate entry points.

use std::cmp::Ordering;

use crate::address::address;
use crate::endian::ByteOrder;
use crate::key::{apply_bits, BitSubrange, FixedWidthKey};

/// The `[first, last]` inclusive range a query searches, and the range the
/// kernel narrows it to on return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchRange {
    pub first: u64,
    pub last: u64,
}

impl SearchRange {
    pub fn new(first: u64, last: u64) -> Self {
        SearchRange { first, last }
    }
}

/// How record keys are laid out in the mapped byte region.
#[derive(Clone, Copy, Debug)]
pub enum Layout {
    /// Row-oriented: records are `blklen` bytes apart, and the key of
    /// interest sits at byte offset `blkpos` within each record.
    Block { blklen: u64, blkpos: u64 },
    /// Column-oriented: the key occupies the entire record, so
    /// `blklen = width` and `blkpos = 0`. Kept as a distinct variant (rather
    /// than requiring the caller to compute `blklen`/`blkpos` themselves) so
    /// the fast path documented in `layout::ColumnLayout` is expressed
    /// directly at the call site.
    Column { width: u64 },
}

impl Layout {
    fn block_params(self) -> (u64, u64) {
        match self {
            Layout::Block { blklen, blkpos } => (blklen, blkpos),
            Layout::Column { width } => (width, 0),
        }
    }
}

#[inline]
pub(crate) fn decode_at<T: FixedWidthKey, E: ByteOrder>(
    base: &[u8],
    layout: Layout,
    bits: Option<BitSubrange>,
    item: u64,
) -> T {
    let (blklen, blkpos) = layout.block_params();
    let i = address(blklen, blkpos, item) as usize;
    apply_bits(T::decode::<E>(base, i), bits)
}

/// Find the smallest index in `range` whose key equals `search`, extracting
/// `bits` from both the stored key and `search` before comparing if given.
///
/// Returns `(result, narrowed_range)`. `result` is the matching index, or
/// `range.last + 1` if no match exists. On return, `narrowed_range.last` is
/// `result - 1` when found; `narrowed_range.first` never moves past the
/// first index known to hold a key `< search`.
pub fn find_first<T: FixedWidthKey, E: ByteOrder>(
    base: &[u8],
    layout: Layout,
    range: SearchRange,
    search: T,
    bits: Option<BitSubrange>,
) -> (u64, SearchRange) {
    let target = apply_bits(search, bits);
    let mut first = range.first;
    let mut last = range.last;
    let mut found = range.last + 1;

    while first <= last {
        let mid = (first + last) >> 1;
        let x = decode_at::<T, E>(base, layout, bits, mid);
        match x.cmp(&target) {
            Ordering::Equal => {
                if mid == 0 {
                    return (mid, SearchRange::new(first, last));
                }
                found = mid;
                last = mid - 1;
            }
            Ordering::Less => first = mid + 1,
            Ordering::Greater => {
                if mid > 0 {
                    last = mid - 1;
                } else {
                    return (found, SearchRange::new(first, last));
                }
            }
        }
    }
    (found, SearchRange::new(first, last))
}

/// Find the largest index in `range` whose key equals `search`. Symmetric to
/// [`find_first`]: on equality the search continues rightward instead of
/// leftward.
pub fn find_last<T: FixedWidthKey, E: ByteOrder>(
    base: &[u8],
    layout: Layout,
    range: SearchRange,
    search: T,
    bits: Option<BitSubrange>,
) -> (u64, SearchRange) {
    let target = apply_bits(search, bits);
    let mut first = range.first;
    let mut last = range.last;
    let mut found = range.last + 1;

    while first <= last {
        let mid = (first + last) >> 1;
        let x = decode_at::<T, E>(base, layout, bits, mid);
        match x.cmp(&target) {
            Ordering::Equal => {
                found = mid;
                first = mid + 1;
            }
            Ordering::Less => first = mid + 1,
            Ordering::Greater => {
                if mid > 0 {
                    last = mid - 1;
                } else {
                    return (found, SearchRange::new(first, last));
                }
            }
        }
    }
    (found, SearchRange::new(first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::BigEndian;

    fn block_bytes(values: &[u32], blklen: usize, blkpos: usize) -> Vec<u8> {
        let mut buf = vec![0u8; values.len() * blklen];
        for (i, v) in values.iter().enumerate() {
            let off = i * blklen + blkpos;
            buf[off..off + 4].copy_from_slice(&v.to_be_bytes());
        }
        buf
    }

    #[test]
    fn find_first_locates_leftmost_of_a_run() {
        let values = [1u32, 3, 5, 5, 5, 7, 9];
        let bytes = block_bytes(&values, 4, 0);
        let layout = Layout::Column { width: 4 };
        let range = SearchRange::new(0, (values.len() - 1) as u64);

        let (idx, _) = find_first::<u32, BigEndian>(&bytes, layout, range, 5, None);
        assert_eq!(idx, 2);
    }

    #[test]
    fn find_last_locates_rightmost_of_a_run() {
        let values = [1u32, 3, 5, 5, 5, 7, 9];
        let bytes = block_bytes(&values, 4, 0);
        let layout = Layout::Column { width: 4 };
        let range = SearchRange::new(0, (values.len() - 1) as u64);

        let (idx, _) = find_last::<u32, BigEndian>(&bytes, layout, range, 5, None);
        assert_eq!(idx, 4);
    }

    #[test]
    fn missing_value_returns_last_plus_one() {
        let values = [1u32, 3, 5, 7, 9];
        let bytes = block_bytes(&values, 4, 0);
        let layout = Layout::Column { width: 4 };
        let range = SearchRange::new(0, (values.len() - 1) as u64);

        let (idx, _) = find_first::<u32, BigEndian>(&bytes, layout, range, 4, None);
        assert_eq!(idx, range.last + 1);
    }

    #[test]
    fn match_at_index_zero_returns_zero() {
        let values = [5u32, 7, 9];
        let bytes = block_bytes(&values, 4, 0);
        let layout = Layout::Column { width: 4 };
        let range = SearchRange::new(0, (values.len() - 1) as u64);

        let (idx, _) = find_first::<u32, BigEndian>(&bytes, layout, range, 5, None);
        assert_eq!(idx, 0);
    }

    #[test]
    fn block_layout_skips_over_other_fields() {
        // blklen=20, key at blkpos=4: a 20-byte record with a 4-byte prefix field.
        let values = [10u32, 20, 30, 40];
        let blklen = 20usize;
        let blkpos = 4usize;
        let mut bytes = vec![0u8; values.len() * blklen];
        for (i, v) in values.iter().enumerate() {
            let off = i * blklen + blkpos;
            bytes[off..off + 4].copy_from_slice(&v.to_be_bytes());
        }
        let layout = Layout::Block { blklen: blklen as u64, blkpos: blkpos as u64 };
        let range = SearchRange::new(0, (values.len() - 1) as u64);

        let (idx, _) = find_first::<u32, BigEndian>(&bytes, layout, range, 30, None);
        assert_eq!(idx, 2);
    }

    #[test]
    fn single_element_range_matches() {
        let values = [42u32];
        let bytes = block_bytes(&values, 4, 0);
        let layout = Layout::Column { width: 4 };
        let range = SearchRange::new(0, 0);

        let (idx, _) = find_first::<u32, BigEndian>(&bytes, layout, range, 42, None);
        assert_eq!(idx, 0);
        let (idx, _) = find_first::<u32, BigEndian>(&bytes, layout, range, 1, None);
        assert_eq!(idx, 1);
    }

    #[test]
    fn bit_subrange_restricts_comparison() {
        // Values share the low nibble (0xA) but differ in the high nibble;
        // search on bits [4,7] (the high nibble) of an 8-bit key.
        let values: Vec<u8> = vec![0x1A, 0x2A, 0x2A, 0x3A];
        let layout = Layout::Column { width: 1 };
        let range = SearchRange::new(0, (values.len() - 1) as u64);
        let bits = BitSubrange::new(0, 3, 8);

        let (idx, _) = find_first::<u8, BigEndian>(&values, layout, range, 0x2A, Some(bits));
        assert_eq!(idx, 1);
        let (idx, _) = find_last::<u8, BigEndian>(&values, layout, range, 0x2A, Some(bits));
        assert_eq!(idx, 2);
    }
}
