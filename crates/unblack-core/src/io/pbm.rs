use std::io::{BufRead, Write};

use tracing::debug;

use crate::consts::{PLAIN_BITMAP_MAGIC, RAW_BITMAP_MAGIC};
use crate::error::{Result, UnblackError};
use crate::grid::BitGrid;
use crate::io::pnm::{PnmEncoding, PnmKind, PnmReader};

/// Load the whole raster of a bitmap into a `BitGrid` (1 = black).
pub fn read_bit_grid<R: BufRead>(reader: &mut PnmReader<R>) -> Result<BitGrid> {
    let header = reader.header().clone();
    if header.kind != PnmKind::Bitmap {
        return Err(UnblackError::UnexpectedKind {
            expected: PnmKind::Bitmap,
            found: header.kind,
        });
    }

    let mut grid = BitGrid::new(header.width, header.height);
    for row in 0..header.height {
        for col in 0..header.width {
            let bit = reader.next_sample()?;
            grid.set(col, row, bit == 1);
        }
    }

    debug!(
        width = header.width,
        height = header.height,
        black = grid.count_ones(),
        "Bitmap loaded"
    );
    Ok(grid)
}

/// Write `grid` as a plain `P1` bitmap: header lines, then one digit per
/// pixel with a newline closing each row.
pub fn write_plain_pbm<W: Write>(grid: &BitGrid, out: &mut W) -> Result<()> {
    writeln!(out, "{PLAIN_BITMAP_MAGIC}")?;
    writeln!(out, "{} {}", grid.width(), grid.height())?;

    let mut line = Vec::with_capacity(grid.width() + 1);
    for row in 0..grid.height() {
        line.clear();
        for col in 0..grid.width() {
            line.push(if grid.get(col, row) { b'1' } else { b'0' });
        }
        line.push(b'\n');
        out.write_all(&line)?;
    }
    Ok(())
}

/// Write `grid` as a raw `P4` bitmap, rows packed MSB-first and padded to a
/// whole byte.
pub fn write_raw_pbm<W: Write>(grid: &BitGrid, out: &mut W) -> Result<()> {
    writeln!(out, "{RAW_BITMAP_MAGIC}")?;
    writeln!(out, "{} {}", grid.width(), grid.height())?;

    let mut packed = vec![0u8; grid.width().div_ceil(8)];
    for row in 0..grid.height() {
        packed.fill(0);
        for col in 0..grid.width() {
            if grid.get(col, row) {
                packed[col / 8] |= 0x80 >> (col % 8);
            }
        }
        out.write_all(&packed)?;
    }
    Ok(())
}

pub fn write_pbm<W: Write>(grid: &BitGrid, encoding: PnmEncoding, out: &mut W) -> Result<()> {
    match encoding {
        PnmEncoding::Plain => write_plain_pbm(grid, out),
        PnmEncoding::Raw => write_raw_pbm(grid, out),
    }
}
