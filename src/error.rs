//! Error types for the file-mapping layer.
//!
//! Hand-written enums with manual `Display`/`Error` impls rather than a
//! derive-macro error crate, since there are only a handful of variants.
//! Column configuration (`layout::ColumnLayout::configure`) has no error
//! type of its own: out-of-order or oversized column lists are caller
//! preconditions it does not check, not failures it reports.

use std::fmt;
use std::io;

/// Failure while memory-mapping a file.
///
/// Covers the three failure modes a `mmap_binfile`-style operation can hit:
/// the file could not be opened, its metadata could not be read, or the
/// kernel refused to create the mapping.
#[derive(Debug)]
pub enum MapError {
    /// `open()`-equivalent failed.
    Open(io::Error),
    /// `fstat()`-equivalent failed, or reported a zero-byte file.
    Stat(io::Error),
    /// `mmap()`-equivalent failed.
    Mmap(io::Error),
    /// The file is too small to contain the fixed-position footer fields
    /// (`doffset`, `dlength`) and header field (`nrows`).
    FooterTooSmall { size: u64 },
    /// The footer/header fields were read successfully but are internally
    /// inconsistent (e.g. `doffset` underflows or the data region would run
    /// past end of file).
    BadFooter { doffset: u64, dlength: u64, size: u64 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Open(e) => write!(f, "could not open file for mapping: {e}"),
            MapError::Stat(e) => write!(f, "could not stat file for mapping: {e}"),
            MapError::Mmap(e) => write!(f, "mmap failed: {e}"),
            MapError::FooterTooSmall { size } => {
                write!(f, "file of {size} bytes is too small to hold a footer")
            }
            MapError::BadFooter { doffset, dlength, size } => write!(
                f,
                "footer declares doffset={doffset} dlength={dlength} but file size is {size}"
            ),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Open(e) | MapError::Stat(e) | MapError::Mmap(e) => Some(e),
            MapError::FooterTooSmall { .. } | MapError::BadFooter { .. } => None,
        }
    }
}

/// Failure while releasing a memory mapping.
///
/// `memmap2::Mmap`'s `Drop` impl does not surface `munmap`'s return code, so
/// in practice this crate's [`crate::mmap::unmap_file`] cannot fail; the type
/// exists so a future lower-level unmap (e.g. one built on raw
/// `libc::munmap`) can report through the same `unmap_file` signature
/// without an API break.
#[derive(Debug)]
pub struct UnmapError(pub io::Error);

impl fmt::Display for UnmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "munmap failed: {}", self.0)
    }
}

impl std::error::Error for UnmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
