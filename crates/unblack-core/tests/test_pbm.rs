mod common;

use common::{grid_from_rows, grid_to_rows, pnm_bytes};
use unblack_core::error::UnblackError;
use unblack_core::fill::clear_edge_connected;
use unblack_core::grid::BitGrid;
use unblack_core::io::pbm::{read_bit_grid, write_pbm, write_plain_pbm, write_raw_pbm};
use unblack_core::io::pnm::{PnmEncoding, PnmReader};

#[test]
fn test_read_bit_grid_row_major() {
    let mut reader = PnmReader::new(pnm_bytes(b"P1\n3 2\n110\n001\n")).unwrap();
    let grid = read_bit_grid(&mut reader).unwrap();
    assert_eq!(grid_to_rows(&grid), vec!["110", "001"]);
}

#[test]
fn test_read_bit_grid_rejects_graymap() {
    let mut reader = PnmReader::new(pnm_bytes(b"P2 1 1 9 5")).unwrap();
    let err = read_bit_grid(&mut reader).unwrap_err();
    assert!(matches!(err, UnblackError::UnexpectedKind { .. }), "got: {err}");
}

#[test]
fn test_read_bit_grid_propagates_truncation() {
    let mut reader = PnmReader::new(pnm_bytes(b"P1\n2 2\n11\n1")).unwrap();
    let err = read_bit_grid(&mut reader).unwrap_err();
    assert!(matches!(err, UnblackError::Truncated { .. }), "got: {err}");
}

#[test]
fn test_huge_header_fails_without_loading() {
    let err = PnmReader::new(pnm_bytes(b"P4\n100000 100000\n")).err().unwrap();
    assert!(matches!(err, UnblackError::InvalidDimensions { .. }), "got: {err}");
}

#[test]
fn test_plain_output_format() {
    let grid = grid_from_rows(&["0100", "0010"]);
    let mut out = Vec::new();
    write_plain_pbm(&grid, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "P1\n4 2\n0100\n0010\n");
}

#[test]
fn test_raw_output_format() {
    let grid = grid_from_rows(&["100000001", "011111111"]);
    let mut out = Vec::new();
    write_raw_pbm(&grid, &mut out).unwrap();

    let mut expected = b"P4\n9 2\n".to_vec();
    expected.extend_from_slice(&[0b1000_0000, 0b1000_0000, 0b0111_1111, 0b1000_0000]);
    assert_eq!(out, expected);
}

#[test]
fn test_written_bitmaps_read_back() {
    let grid = grid_from_rows(&["10110", "01001", "11100"]);
    for encoding in [PnmEncoding::Plain, PnmEncoding::Raw] {
        let mut out = Vec::new();
        write_pbm(&grid, encoding, &mut out).unwrap();
        let mut reader = PnmReader::new(pnm_bytes(&out)).unwrap();
        assert_eq!(reader.header().encoding, encoding);
        assert_eq!(read_bit_grid(&mut reader).unwrap(), grid);
    }
}

#[test]
fn test_empty_row_grid_writes_header_only() {
    let grid = BitGrid::new(0, 0);
    let mut out = Vec::new();
    write_plain_pbm(&grid, &mut out).unwrap();
    assert_eq!(out, b"P1\n0 0\n");
}

#[test]
fn test_unblack_end_to_end() {
    let input = b"P1\n5 5\n11100\n10100\n11100\n00010\n00000\n";
    let mut reader = PnmReader::new(pnm_bytes(input)).unwrap();
    let mut grid = read_bit_grid(&mut reader).unwrap();
    clear_edge_connected(&mut grid);

    let mut out = Vec::new();
    write_plain_pbm(&grid, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "P1\n5 5\n00000\n00000\n00000\n00010\n00000\n"
    );
}
