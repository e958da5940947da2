use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{PNM_MAX_PIXELS, PNM_MAX_VALUE_LIMIT, PNM_ONE_BYTE_LIMIT};
use crate::error::{Result, UnblackError};

/// Which kind of portable anymap a stream holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PnmKind {
    /// PBM: one bit per pixel, 1 = black.
    Bitmap,
    /// PGM: one gray sample per pixel in `0..=max_value`.
    Graymap,
}

impl fmt::Display for PnmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PnmKind::Bitmap => write!(f, "bitmap"),
            PnmKind::Graymap => write!(f, "graymap"),
        }
    }
}

/// How the raster is stored after the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PnmEncoding {
    /// ASCII samples (`P1`, `P2`).
    #[default]
    Plain,
    /// Binary samples (`P4`, `P5`).
    Raw,
}

impl fmt::Display for PnmEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PnmEncoding::Plain => write!(f, "plain"),
            PnmEncoding::Raw => write!(f, "raw"),
        }
    }
}

/// Parsed PNM header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PnmHeader {
    pub kind: PnmKind,
    pub encoding: PnmEncoding,
    pub width: usize,
    pub height: usize,
    /// Largest sample value; always 1 for bitmaps.
    pub max_value: u16,
}

impl PnmHeader {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Streaming PNM reader: parses the header up front, then hands out one
/// sample at a time in row-major order.
pub struct PnmReader<R> {
    inner: R,
    header: PnmHeader,
    read: usize,
    /// Current packed byte of a raw bitmap row.
    bits: u8,
}

impl PnmReader<BufReader<File>> {
    /// Open a PNM file and parse its header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> PnmReader<R> {
    pub fn new(mut inner: R) -> Result<Self> {
        let (kind, encoding) = read_magic(&mut inner)?;
        let width = read_header_number(&mut inner, "width")?;
        let height = read_header_number(&mut inner, "height")?;
        let max_value = match kind {
            PnmKind::Bitmap => 1,
            PnmKind::Graymap => {
                let value = read_header_number(&mut inner, "maximum value")?;
                if value == 0 || value > PNM_MAX_VALUE_LIMIT as u64 {
                    return Err(UnblackError::InvalidPnm(format!(
                        "maximum value {value} outside 1..={PNM_MAX_VALUE_LIMIT}"
                    )));
                }
                value as u16
            }
        };

        let width = usize::try_from(width)
            .map_err(|_| UnblackError::InvalidPnm("width too large".into()))?;
        let height = usize::try_from(height)
            .map_err(|_| UnblackError::InvalidPnm("height too large".into()))?;
        let too_large = width
            .checked_mul(height)
            .is_none_or(|pixels| pixels > PNM_MAX_PIXELS);
        if width == 0 || height == 0 || too_large {
            return Err(UnblackError::InvalidDimensions { width, height });
        }

        // Raw rasters start right after a single whitespace byte.
        if encoding == PnmEncoding::Raw {
            match next_byte(&mut inner)? {
                Some(b) if is_pnm_whitespace(b) => {}
                _ => {
                    return Err(UnblackError::InvalidPnm(
                        "missing whitespace before raster".into(),
                    ))
                }
            }
        }

        let header = PnmHeader {
            kind,
            encoding,
            width,
            height,
            max_value,
        };
        debug!(
            kind = %header.kind,
            encoding = %header.encoding,
            width,
            height,
            max_value,
            "PNM header parsed"
        );

        Ok(Self {
            inner,
            header,
            read: 0,
            bits: 0,
        })
    }

    pub fn header(&self) -> &PnmHeader {
        &self.header
    }

    /// Samples not yet handed out.
    pub fn remaining(&self) -> usize {
        self.header.pixel_count() - self.read
    }

    /// Read the next sample in row-major order.
    pub fn next_sample(&mut self) -> Result<u16> {
        let total = self.header.pixel_count();
        if self.read == total {
            return Err(UnblackError::RasterExhausted { total });
        }

        let value = match (self.header.kind, self.header.encoding) {
            (PnmKind::Bitmap, PnmEncoding::Plain) => self.plain_bit()?,
            (PnmKind::Bitmap, PnmEncoding::Raw) => self.raw_bit()?,
            (PnmKind::Graymap, PnmEncoding::Plain) => self.plain_gray()?,
            (PnmKind::Graymap, PnmEncoding::Raw) => self.raw_gray()?,
        };

        if value > self.header.max_value as u64 {
            return Err(UnblackError::SampleOutOfRange {
                value,
                max: self.header.max_value,
            });
        }
        self.read += 1;
        Ok(value as u16)
    }

    fn truncated(&self) -> UnblackError {
        UnblackError::Truncated {
            read: self.read,
            expected: self.header.pixel_count(),
        }
    }

    // Plain bitmap digits need no separator: "0110" is four samples.
    fn plain_bit(&mut self) -> Result<u64> {
        skip_separators(&mut self.inner)?;
        match next_byte(&mut self.inner)? {
            Some(b) if b.is_ascii_digit() => Ok((b - b'0') as u64),
            Some(b) => Err(UnblackError::InvalidPnm(format!(
                "unexpected byte {:?} in bitmap raster",
                b as char
            ))),
            None => Err(self.truncated()),
        }
    }

    fn raw_bit(&mut self) -> Result<u64> {
        let col = self.read % self.header.width;
        if col % 8 == 0 {
            self.bits = match next_byte(&mut self.inner)? {
                Some(b) => b,
                None => return Err(self.truncated()),
            };
        }
        Ok(((self.bits >> (7 - col % 8)) & 1) as u64)
    }

    fn plain_gray(&mut self) -> Result<u64> {
        match read_decimal(&mut self.inner)? {
            Some(v) => Ok(v),
            None => Err(self.truncated()),
        }
    }

    fn raw_gray(&mut self) -> Result<u64> {
        if self.header.max_value < PNM_ONE_BYTE_LIMIT {
            return match next_byte(&mut self.inner)? {
                Some(b) => Ok(b as u64),
                None => Err(self.truncated()),
            };
        }
        match self.inner.read_u16::<BigEndian>() {
            Ok(v) => Ok(v as u64),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(self.truncated()),
            Err(e) => Err(e.into()),
        }
    }
}

fn read_magic<R: BufRead>(r: &mut R) -> Result<(PnmKind, PnmEncoding)> {
    let mut magic = [0u8; 2];
    for slot in magic.iter_mut() {
        *slot = next_byte(r)?
            .ok_or_else(|| UnblackError::InvalidPnm("missing magic number".into()))?;
    }
    match &magic {
        b"P1" => Ok((PnmKind::Bitmap, PnmEncoding::Plain)),
        b"P2" => Ok((PnmKind::Graymap, PnmEncoding::Plain)),
        b"P4" => Ok((PnmKind::Bitmap, PnmEncoding::Raw)),
        b"P5" => Ok((PnmKind::Graymap, PnmEncoding::Raw)),
        b"P3" | b"P6" => Err(UnblackError::UnsupportedFormat(
            "color pixmaps are not supported".into(),
        )),
        other => Err(UnblackError::InvalidPnm(format!(
            "bad magic number {:?}",
            String::from_utf8_lossy(other)
        ))),
    }
}

fn read_header_number<R: BufRead>(r: &mut R, field: &str) -> Result<u64> {
    read_decimal(r)?.ok_or_else(|| UnblackError::InvalidPnm(format!("missing {field}")))
}

/// Skip separators, then parse an unsigned decimal. `None` at end of input.
fn read_decimal<R: BufRead>(r: &mut R) -> Result<Option<u64>> {
    skip_separators(r)?;
    let mut value: Option<u64> = None;
    while let Some(b) = peek_byte(r)? {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = (b - b'0') as u64;
        value = Some(
            value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(|| UnblackError::InvalidPnm("number too large".into()))?,
        );
        r.consume(1);
    }

    match (value, peek_byte(r)?) {
        (None, Some(b)) => Err(UnblackError::InvalidPnm(format!(
            "expected a number, found {:?}",
            b as char
        ))),
        (Some(_), Some(b)) if !is_pnm_whitespace(b) && b != b'#' => Err(
            UnblackError::InvalidPnm(format!("unexpected {:?} after number", b as char)),
        ),
        (value, _) => Ok(value),
    }
}

/// Skip whitespace and `#` comments.
fn skip_separators<R: BufRead>(r: &mut R) -> Result<()> {
    while let Some(b) = peek_byte(r)? {
        if is_pnm_whitespace(b) {
            r.consume(1);
        } else if b == b'#' {
            let mut comment = Vec::new();
            r.read_until(b'\n', &mut comment)?;
        } else {
            break;
        }
    }
    Ok(())
}

fn peek_byte<R: BufRead>(r: &mut R) -> Result<Option<u8>> {
    Ok(r.fill_buf()?.first().copied())
}

fn next_byte<R: BufRead>(r: &mut R) -> Result<Option<u8>> {
    let b = peek_byte(r)?;
    if b.is_some() {
        r.consume(1);
    }
    Ok(b)
}

fn is_pnm_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_decimal_skips_comments() {
        let mut input = &b"  # a comment\n\t42 7"[..];
        assert_eq!(read_decimal(&mut input).unwrap(), Some(42));
        assert_eq!(read_decimal(&mut input).unwrap(), Some(7));
        assert_eq!(read_decimal(&mut input).unwrap(), None);
    }

    #[test]
    fn test_read_decimal_rejects_garbage() {
        let mut input = &b"12x"[..];
        assert!(matches!(
            read_decimal(&mut input),
            Err(UnblackError::InvalidPnm(_))
        ));
    }

    #[test]
    fn test_read_decimal_overflow() {
        let mut input = &b"99999999999999999999999"[..];
        assert!(read_decimal(&mut input).is_err());
    }
}
