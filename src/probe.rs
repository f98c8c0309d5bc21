//! Linear neighbour probes for walking a run of equal keys once a single
//! match has been located by `search::find_first`/`find_last`.

use crate::endian::ByteOrder;
use crate::key::{BitSubrange, FixedWidthKey};
use crate::search::{decode_at, Layout};

/// If `pos < last`, inspect the key at `pos + 1`; on a match, advance `pos`
/// and report `true`. If `pos >= last` or the neighbour doesn't match,
/// leave `pos` unchanged and report `false`.
///
/// Intended to be called repeatedly against the `last` a prior
/// `find_first` call was given, to walk rightward through a run of equal
/// keys one record at a time.
pub fn has_next<T: FixedWidthKey, E: ByteOrder>(
    base: &[u8],
    layout: Layout,
    pos: &mut u64,
    last: u64,
    search: T,
    bits: Option<BitSubrange>,
) -> bool {
    if *pos >= last {
        return false;
    }
    let candidate = *pos + 1;
    let x = decode_at::<T, E>(base, layout, bits, candidate);
    let target = crate::key::apply_bits(search, bits);
    if x == target {
        *pos = candidate;
        true
    } else {
        false
    }
}

/// Symmetric to [`has_next`]: if `pos > first`, inspect the key at
/// `pos - 1`.
pub fn has_prev<T: FixedWidthKey, E: ByteOrder>(
    base: &[u8],
    layout: Layout,
    first: u64,
    pos: &mut u64,
    search: T,
    bits: Option<BitSubrange>,
) -> bool {
    if *pos <= first {
        return false;
    }
    let candidate = *pos - 1;
    let x = decode_at::<T, E>(base, layout, bits, candidate);
    let target = crate::key::apply_bits(search, bits);
    if x == target {
        *pos = candidate;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::BigEndian;
    use crate::search::SearchRange;

    fn column_bytes(values: &[u32]) -> Vec<u8> {
        let mut buf = vec![0u8; values.len() * 4];
        for (i, v) in values.iter().enumerate() {
            buf[i * 4..i * 4 + 4].copy_from_slice(&v.to_be_bytes());
        }
        buf
    }

    #[test]
    fn walks_a_run_forward_with_find_first_and_has_next() {
        let values = [1u32, 3, 5, 5, 5, 7, 9];
        let bytes = column_bytes(&values);
        let layout = Layout::Column { width: 4 };
        let range = SearchRange::new(0, (values.len() - 1) as u64);

        let (first_match, narrowed) = crate::search::find_first::<u32, BigEndian>(
            &bytes, layout, range, 5, None,
        );
        assert_eq!(first_match, 2);
        let mut pos = first_match;
        let mut count = 1;
        while has_next::<u32, BigEndian>(&bytes, layout, &mut pos, range.last, 5, None) {
            count += 1;
        }
        assert_eq!(count, 3);
        assert_eq!(pos, 4);
        let _ = narrowed;
    }

    #[test]
    fn walks_a_run_backward_with_find_last_and_has_prev() {
        let values = [1u32, 3, 5, 5, 5, 7, 9];
        let bytes = column_bytes(&values);
        let layout = Layout::Column { width: 4 };
        let range = SearchRange::new(0, (values.len() - 1) as u64);

        let (last_match, _) = crate::search::find_last::<u32, BigEndian>(
            &bytes, layout, range, 5, None,
        );
        assert_eq!(last_match, 4);
        let mut pos = last_match;
        let mut count = 1;
        while has_prev::<u32, BigEndian>(&bytes, layout, range.first, &mut pos, 5, None) {
            count += 1;
        }
        assert_eq!(count, 3);
        assert_eq!(pos, 2);
    }

    #[test]
    fn has_next_false_at_upper_bound() {
        let values = [1u32, 2, 3];
        let bytes = column_bytes(&values);
        let layout = Layout::Column { width: 4 };
        let mut pos = 2u64;
        assert!(!has_next::<u32, BigEndian>(&bytes, layout, &mut pos, 2, 3, None));
        assert_eq!(pos, 2);
    }

    #[test]
    fn has_prev_false_at_lower_bound() {
        let values = [1u32, 2, 3];
        let bytes = column_bytes(&values);
        let layout = Layout::Column { width: 4 };
        let mut pos = 0u64;
        assert!(!has_prev::<u32, BigEndian>(&bytes, layout, 0, &mut pos, 1, None));
        assert_eq!(pos, 0);
    }
}
