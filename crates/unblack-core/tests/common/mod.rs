#![allow(dead_code)]

use unblack_core::grid::BitGrid;

/// Build a grid from rows of `0`/`1` digits, top row first.
pub fn grid_from_rows(rows: &[&str]) -> BitGrid {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let mut grid = BitGrid::new(width, height);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), width, "ragged row {row}");
        for (col, ch) in line.chars().enumerate() {
            grid.set(col, row, ch == '1');
        }
    }
    grid
}

/// Render a grid back into rows of `0`/`1` digits.
pub fn grid_to_rows(grid: &BitGrid) -> Vec<String> {
    grid.to_string().lines().map(str::to_owned).collect()
}

/// Reference answer: a foreground cell survives iff a depth-first search
/// through foreground neighbours never reaches the border.
pub fn reaches_border(grid: &BitGrid, col: usize, row: usize) -> bool {
    let (w, h) = (grid.width(), grid.height());
    let mut visited = vec![false; w * h];
    let mut stack = vec![(col, row)];
    while let Some((c, r)) = stack.pop() {
        if visited[r * w + c] || !grid.get(c, r) {
            continue;
        }
        visited[r * w + c] = true;
        if c == 0 || r == 0 || c == w - 1 || r == h - 1 {
            return true;
        }
        stack.extend([(c - 1, r), (c + 1, r), (c, r - 1), (c, r + 1)]);
    }
    false
}

/// Wrap PNM bytes in a reader.
pub fn pnm_bytes(data: &[u8]) -> std::io::Cursor<Vec<u8>> {
    std::io::Cursor::new(data.to_vec())
}
