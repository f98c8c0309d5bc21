//! Binary search over memory-mapped, externally-sorted fixed-width integer
//! arrays.

pub mod address;
pub mod cli;
pub mod endian;
pub mod error;
pub mod key;
pub mod layout;
pub mod mmap;
pub mod probe;
pub mod search;
pub mod timefn;

pub use address::address;
pub use endian::{BigEndian, ByteOrder, LittleEndian};
pub use error::{MapError, UnmapError};
pub use key::{apply_bits, BitSubrange, FixedWidthKey};
pub use layout::{configure_columns, Column, ColumnLayout};
pub use mmap::{map_file, unmap_file, MappedFile};
pub use probe::{has_next, has_prev};
pub use search::{find_first, find_last, Layout, SearchRange};
