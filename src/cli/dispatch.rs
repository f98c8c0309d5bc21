//! Subcommand implementations: turns parsed [`crate::cli::args`] into calls
//! against the library's `mmap`/`layout`/`search`/`probe` modules and prints
//! the results.
//!
//! This boundary uses `anyhow` to unify the crate's own hand-written error
//! enums with I/O errors behind one `Result` the binary can bail out of
//! cleanly.

use anyhow::{bail, Result};

use crate::cli::args::{BenchArgs, Endian, Family, LookupArgs, Width};
use crate::displaylevel;
use crate::endian::{BigEndian, LittleEndian};
use crate::key::{BitSubrange, FixedWidthKey};
use crate::layout::ColumnLayout;
use crate::mmap::MappedFile;
use crate::search::{find_first, find_last, Layout, SearchRange};
use crate::timefn::{clock_span_ns, get_time};
use crate::{has_next, has_prev};

/// Dispatch on the runtime `Width`/`Endian` pair by selecting a concrete
/// `(T, E)` type pair and running `$body` once, monomorphized for that pair.
///
/// Stands in for the ~128 separately-named entry points the system this
/// binary drives would otherwise need one call site per combination for.
macro_rules! with_types {
    ($width:expr, $endian:expr, |$t:ident, $e:ident| $body:block) => {{
        match ($width, $endian) {
            (Width::W8, Endian::Be) => {
                type $t = u8;
                type $e = BigEndian;
                $body
            }
            (Width::W8, Endian::Le) => {
                type $t = u8;
                type $e = LittleEndian;
                $body
            }
            (Width::W16, Endian::Be) => {
                type $t = u16;
                type $e = BigEndian;
                $body
            }
            (Width::W16, Endian::Le) => {
                type $t = u16;
                type $e = LittleEndian;
                $body
            }
            (Width::W32, Endian::Be) => {
                type $t = u32;
                type $e = BigEndian;
                $body
            }
            (Width::W32, Endian::Le) => {
                type $t = u32;
                type $e = LittleEndian;
                $body
            }
            (Width::W64, Endian::Be) => {
                type $t = u64;
                type $e = BigEndian;
                $body
            }
            (Width::W64, Endian::Le) => {
                type $t = u64;
                type $e = LittleEndian;
                $body
            }
        }
    }};
}

pub fn run_info(file: &std::path::Path) -> Result<()> {
    let mf = MappedFile::open(file)?;
    println!("size:    {}", mf.size());
    println!("doffset: {}", mf.doffset());
    println!("dlength: {}", mf.dlength());
    println!("nrows:   {}", mf.nrows());
    Ok(())
}

fn resolve_layout(
    mf: &MappedFile,
    width_bytes: u64,
    column: Option<usize>,
    col_bytes: &[u8],
    blklen: Option<u64>,
    blkpos: Option<u64>,
) -> Result<(Layout, Option<ColumnLayout>)> {
    match (column, blklen, blkpos) {
        (Some(c), _, _) => {
            let layout = ColumnLayout::configure(mf, col_bytes);
            let col = layout.column(c);
            if col.width as u64 != width_bytes {
                bail!(
                    "column {c} has width {} bytes but --width selects {} bytes",
                    col.width,
                    width_bytes
                );
            }
            Ok((Layout::Column { width: col.width as u64 }, Some(layout)))
        }
        (None, Some(blklen), Some(blkpos)) => Ok((Layout::Block { blklen, blkpos }, None)),
        (None, None, None) => Ok((Layout::Column { width: width_bytes }, None)),
        _ => bail!("either --column, or both --blklen and --blkpos, must be given"),
    }
}

fn bits_from(bit_start: Option<u32>, bit_end: Option<u32>, width_bits: u32) -> Option<BitSubrange> {
    match (bit_start, bit_end) {
        (Some(s), Some(e)) => Some(BitSubrange::new(s, e, width_bits)),
        _ => None,
    }
}

pub fn run_lookup(args: LookupArgs) -> Result<()> {
    let mf = MappedFile::open(&args.file)?;
    let width_bytes = width_bytes(args.width);
    let (layout, column_layout) =
        resolve_layout(&mf, width_bytes, args.column, &args.col_bytes, args.blklen, args.blkpos)?;
    let base_offset = column_layout
        .as_ref()
        .map(|l| l.index(args.column.unwrap()))
        .unwrap_or_else(|| mf.doffset());
    let first = args.first.unwrap_or(0);
    let last = args.last.unwrap_or_else(|| mf.nrows().saturating_sub(1) as u64);
    let range = SearchRange::new(first, last);
    let bytes = &mf.bytes()[base_offset as usize..];

    with_types!(args.width, args.endian, |T, E| {
        let bits = bits_from(args.bit_start, args.bit_end, T::WIDTH_BITS);
        let value = T::from_u128(args.value);
        let (result, narrowed) = match args.family {
            Family::First => find_first::<T, E>(bytes, layout, range, value, bits),
            Family::Last => find_last::<T, E>(bytes, layout, range, value, bits),
        };
        let found = result <= range.last;
        if !found {
            println!("not found");
            return Ok(());
        }
        println!("{result}");
        if args.walk {
            let mut pos = result;
            match args.family {
                Family::First => {
                    while has_next::<T, E>(bytes, layout, &mut pos, range.last, value, bits) {
                        println!("{pos}");
                    }
                }
                Family::Last => {
                    while has_prev::<T, E>(bytes, layout, range.first, &mut pos, value, bits) {
                        println!("{pos}");
                    }
                }
            }
        }
        let _ = narrowed;
        Ok(())
    })
}

pub fn run_bench(args: BenchArgs) -> Result<()> {
    let mf = MappedFile::open(&args.file)?;
    let width_bytes = width_bytes(args.width);
    let (layout, column_layout) =
        resolve_layout(&mf, width_bytes, args.column, &args.col_bytes, args.blklen, args.blkpos)?;
    let base_offset = column_layout
        .as_ref()
        .map(|l| l.index(args.column.unwrap()))
        .unwrap_or_else(|| mf.doffset());
    let range = SearchRange::new(0, mf.nrows().saturating_sub(1) as u64);
    let bytes = &mf.bytes()[base_offset as usize..];

    with_types!(args.width, args.endian, |T, E| {
        let value = T::from_u128(args.value);
        let start = get_time();
        for _ in 0..args.iters {
            match args.family {
                Family::First => {
                    find_first::<T, E>(bytes, layout, range, value, None);
                }
                Family::Last => {
                    find_last::<T, E>(bytes, layout, range, value, None);
                }
            }
        }
        let elapsed = clock_span_ns(start);
        displaylevel!(2, "{} iterations in {} ns ({:.1} ns/op)\n", args.iters, elapsed, elapsed as f64 / args.iters as f64);
        println!("{elapsed}");
        Ok(())
    })
}

fn width_bytes(w: Width) -> u64 {
    match w {
        Width::W8 => 1,
        Width::W16 => 2,
        Width::W32 => 4,
        Width::W64 => 8,
    }
}
