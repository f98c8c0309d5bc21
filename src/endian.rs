//! Byte-order marker types and the raw fixed-width decode primitives.
//!
//! Endianness is a compile-time type parameter rather than a runtime flag:
//! each call site commits to [`BigEndian`] or [`LittleEndian`] and the
//! compiler monomorphizes a dedicated code path, matching the one-entry-
//! point-per-(width, endian, layout, family) shape of the system this crate
//! implements without actually emitting a combinatorial explosion of public
//! functions (see `search::find_first`/`find_last` for the generic kernels).

/// A compile-time choice of byte order for decoding fixed-width unsigned
/// integers out of a byte slice.
pub trait ByteOrder: Copy + Send + Sync + 'static {
    fn decode_u8(bytes: &[u8], i: usize) -> u8;
    fn decode_u16(bytes: &[u8], i: usize) -> u16;
    fn decode_u32(bytes: &[u8], i: usize) -> u32;
    fn decode_u64(bytes: &[u8], i: usize) -> u64;
    fn decode_u128(bytes: &[u8], i: usize) -> u128;
}

/// Big-endian byte order: the byte at the lowest address is the most
/// significant byte.
#[derive(Clone, Copy, Debug)]
pub struct BigEndian;

/// Little-endian byte order: the byte at the lowest address is the least
/// significant byte.
#[derive(Clone, Copy, Debug)]
pub struct LittleEndian;

// No alignment requirement is placed on `bytes` or `i`: `from_be_bytes` /
// `from_le_bytes` assemble the integer byte-by-byte, so there is nothing for
// the CPU to fault on even when `i` is not a multiple of the width. This is
// the Rust-native resolution of the "alignment" concern that a raw pointer
// cast would otherwise carry.

impl ByteOrder for BigEndian {
    #[inline]
    fn decode_u8(bytes: &[u8], i: usize) -> u8 {
        bytes[i]
    }
    #[inline]
    fn decode_u16(bytes: &[u8], i: usize) -> u16 {
        u16::from_be_bytes([bytes[i], bytes[i + 1]])
    }
    #[inline]
    fn decode_u32(bytes: &[u8], i: usize) -> u32 {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&bytes[i..i + 4]);
        u32::from_be_bytes(buf)
    }
    #[inline]
    fn decode_u64(bytes: &[u8], i: usize) -> u64 {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&bytes[i..i + 8]);
        u64::from_be_bytes(buf)
    }
    #[inline]
    fn decode_u128(bytes: &[u8], i: usize) -> u128 {
        let mut buf = [0u8; 16];
        buf.copy_from_slice(&bytes[i..i + 16]);
        u128::from_be_bytes(buf)
    }
}

impl ByteOrder for LittleEndian {
    #[inline]
    fn decode_u8(bytes: &[u8], i: usize) -> u8 {
        bytes[i]
    }
    #[inline]
    fn decode_u16(bytes: &[u8], i: usize) -> u16 {
        u16::from_le_bytes([bytes[i], bytes[i + 1]])
    }
    #[inline]
    fn decode_u32(bytes: &[u8], i: usize) -> u32 {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&bytes[i..i + 4]);
        u32::from_le_bytes(buf)
    }
    #[inline]
    fn decode_u64(bytes: &[u8], i: usize) -> u64 {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&bytes[i..i + 8]);
        u64::from_le_bytes(buf)
    }
    #[inline]
    fn decode_u128(bytes: &[u8], i: usize) -> u128 {
        let mut buf = [0u8; 16];
        buf.copy_from_slice(&bytes[i..i + 16]);
        u128::from_le_bytes(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_u32_msb_first() {
        let bytes = [0x2f, 0x81, 0xf5, 0x77];
        assert_eq!(BigEndian::decode_u32(&bytes, 0), 0x2f81_f577);
    }

    #[test]
    fn little_endian_u32_lsb_first() {
        let bytes = [0x77, 0xf5, 0x81, 0x2f];
        assert_eq!(LittleEndian::decode_u32(&bytes, 0), 0x2f81_f577);
    }

    #[test]
    fn big_endian_u64_roundtrip_with_offset() {
        let mut bytes = vec![0u8; 4];
        bytes.extend_from_slice(&0x000027225FB6E591u64.to_be_bytes());
        assert_eq!(BigEndian::decode_u64(&bytes, 4), 0x000027225FB6E591u64);
    }

    #[test]
    fn decode_u8_ignores_endianness() {
        let bytes = [0xAB];
        assert_eq!(BigEndian::decode_u8(&bytes, 0), 0xAB);
        assert_eq!(LittleEndian::decode_u8(&bytes, 0), 0xAB);
    }

    #[test]
    fn big_endian_u128_hi_lo_order() {
        let mut bytes = vec![];
        bytes.extend_from_slice(&1u64.to_be_bytes());
        bytes.extend_from_slice(&2u64.to_be_bytes());
        let v = BigEndian::decode_u128(&bytes, 0);
        assert_eq!(v, (1u128 << 64) | 2u128);
    }
}
