//! Read-only memory mapping of sorted binary files, plus the fixed-position
//! footer/header parse that recovers `doffset`, `dlength`, and `nrows`.
//!
//! Mirrors the shape of a `mmap_binfile`/`munmap_binfile` pair: scoped
//! acquisition of a shared read-only mapping, oblivious to file contents
//! beyond the three footer/header numbers every caller needs to locate the
//! data region. Backed by `memmap2` rather than raw `libc::mmap` calls, so
//! release happens through `Drop` (RAII) instead of a pairable close call —
//! see [`unmap_file`] for the one place that distinction is visible.

use std::fs::File;
use std::io;

use memmap2::Mmap;

use crate::endian::BigEndian;
use crate::error::{MapError, UnmapError};

/// An immutable, read-only view of a file's bytes, plus the footer-declared
/// data-region bounds and row count.
///
/// Exclusive to the caller that created it; the library only ever borrows
/// its bytes. Once built, nothing about a `MappedFile` changes — any number
/// of threads may run queries against it concurrently (see module docs on
/// `search`/`probe`).
pub struct MappedFile {
    mmap: Mmap,
    /// Byte offset at which the data region starts, as declared by the
    /// footer.
    doffset: u64,
    /// Length in bytes of the data region, as declared by the footer.
    dlength: u64,
    /// Record count, as declared by the header field immediately preceding
    /// the data region.
    nrows: u32,
}

impl MappedFile {
    /// Memory-map `path` read-only and parse its footer/header fields.
    ///
    /// The footer is two big-endian 8-byte fields at `[size-16, size-9]`
    /// (`doffset`) and `[size-8, size-1]` (`dlength`); the header is a
    /// little-endian 4-byte field at `[doffset-8, doffset-5]` (`nrows`).
    /// This matches the Apache-Arrow-style footer the files this crate
    /// targets use; any file format that surfaces the same three numbers at
    /// those positions satisfies the contract.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, MapError> {
        let file = File::open(path).map_err(MapError::Open)?;
        let size = file.metadata().map_err(MapError::Stat)?.len();
        if size == 0 {
            return Err(MapError::Stat(io::Error::new(
                io::ErrorKind::InvalidData,
                "file is empty",
            )));
        }
        // SAFETY: the mapping is read-only and the file is not modified by
        // this process for the lifetime of the mapping; the usual mmap
        // caveat (another process truncating the file underneath us) is
        // accepted here exactly as it is in the mmap_binfile contract this
        // mirrors.
        let mmap = unsafe { Mmap::map(&file).map_err(MapError::Mmap)? };

        if size < 16 {
            return Err(MapError::FooterTooSmall { size });
        }
        let doffset = BigEndian::decode_u64(&mmap, (size - 16) as usize);
        let dlength = BigEndian::decode_u64(&mmap, (size - 8) as usize);

        if doffset < 8 || doffset.checked_add(dlength).map(|end| end > size).unwrap_or(true) {
            return Err(MapError::BadFooter { doffset, dlength, size });
        }
        let nrows = u32::from_le_bytes([
            mmap[(doffset - 8) as usize],
            mmap[(doffset - 7) as usize],
            mmap[(doffset - 6) as usize],
            mmap[(doffset - 5) as usize],
        ]);

        Ok(MappedFile { mmap, doffset, dlength, nrows })
    }

    /// Total size of the mapped file in bytes.
    pub fn size(&self) -> u64 {
        self.mmap.len() as u64
    }

    /// Footer-declared byte offset at which the data region starts.
    pub fn doffset(&self) -> u64 {
        self.doffset
    }

    /// Footer-declared length in bytes of the data region.
    pub fn dlength(&self) -> u64 {
        self.dlength
    }

    /// Header-declared record count.
    pub fn nrows(&self) -> u32 {
        self.nrows
    }

    /// Borrow the full mapped byte region.
    pub fn bytes(&self) -> &[u8] {
        &self.mmap
    }
}

/// Memory-map `path` read-only and parse its footer/header fields.
///
/// Free-function form of [`MappedFile::open`], kept alongside the
/// constructor for callers that prefer `map_file(path)` /
/// [`unmap_file`] as a matched pair.
pub fn map_file(path: impl AsRef<std::path::Path>) -> Result<MappedFile, MapError> {
    MappedFile::open(path)
}

/// Release a mapping.
///
/// Under `memmap2`, unmapping happens in `Mmap`'s `Drop` impl, which does
/// not report `munmap`'s return status; this function therefore always
/// succeeds. It exists so that code written against the
/// `map_file`/`unmap_file` pairing this module implements has an explicit
/// release point to call, matching callers that expect to check a status.
pub fn unmap_file(mf: MappedFile) -> Result<(), UnmapError> {
    drop(mf);
    Ok(())
}
