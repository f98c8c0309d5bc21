//! Record-index-to-byte-offset address calculator.

/// Byte offset of record `item` inside a region of fixed-length `blklen`-byte
/// records, where the key of interest sits at byte offset `blkpos` within
/// each record.
///
/// `address(blklen, blkpos, item) = blklen * item + blkpos`.
///
/// For the column-oriented layout, `blklen` equals the key's own width and
/// `blkpos` is `0`.
#[inline]
pub fn address(blklen: u64, blkpos: u64, item: u64) -> u64 {
    blklen
        .checked_mul(item)
        .and_then(|v| v.checked_add(blkpos))
        .expect("address calculation overflowed u64")
}
