/// Number of grid cells packed into one storage word of a `BitGrid`.
pub const BITS_PER_WORD: usize = u64::BITS as usize;

/// Magic number of a plain (ASCII) bitmap.
pub const PLAIN_BITMAP_MAGIC: &str = "P1";

/// Magic number of a raw (binary) bitmap.
pub const RAW_BITMAP_MAGIC: &str = "P4";

/// Largest maximum-value a graymap header may carry.
pub const PNM_MAX_VALUE_LIMIT: u16 = u16::MAX;

/// Largest raster (in pixels) a PNM header may declare. Rasters are loaded
/// whole, so bigger headers are rejected before anything is allocated.
pub const PNM_MAX_PIXELS: usize = 1 << 30;

/// Graymaps with a maximum value below this store one byte per sample.
pub const PNM_ONE_BYTE_LIMIT: u16 = 256;

/// Default sudoku box edge length (3 gives the classic 9x9 board).
pub const DEFAULT_SUDOKU_BOX_SIZE: usize = 3;
