use tracing::debug;

use crate::grid::BitGrid;
use crate::queue::FifoQueue;

/// Summary of one edge-fill pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeFillStats {
    /// Foreground border cells that seeded the search.
    pub seeded: usize,
    /// Foreground cells 4-connected to the border, seeds included.
    pub connected: usize,
}

/// A grid cell waiting to have its neighbours examined.
#[derive(Clone, Copy, Debug)]
struct Coord {
    col: usize,
    row: usize,
}

/// Clear every foreground cell that is 4-connected to the image border.
///
/// Foreground cells on the border, and cells reachable from them through
/// up/down/left/right foreground neighbours, are set to 0. Everything else is
/// left as it was.
pub fn clear_edge_connected(img: &mut BitGrid) -> EdgeFillStats {
    let (marked, stats) = edge_connected_mask(img);

    marked.for_each_row_major(|col, row, bit| {
        if bit {
            img.set(col, row, false);
        }
    });

    debug!(
        width = img.width(),
        height = img.height(),
        seeded = stats.seeded,
        connected = stats.connected,
        "Edge-connected foreground cleared"
    );
    stats
}

/// Compute the set of edge-connected foreground cells without touching `img`.
///
/// Returns a same-shape grid with 1 on exactly those cells.
pub fn edge_connected_mask(img: &BitGrid) -> (BitGrid, EdgeFillStats) {
    let (w, h) = (img.width(), img.height());
    let mut marked = BitGrid::new(w, h);
    let mut queue = FifoQueue::new();
    let mut stats = EdgeFillStats::default();

    if w == 0 || h == 0 {
        return (marked, stats);
    }

    for col in 0..w {
        stats.seeded += enqueue_if_foreground(img, &mut marked, &mut queue, col, 0);
        stats.seeded += enqueue_if_foreground(img, &mut marked, &mut queue, col, h - 1);
    }
    for row in 0..h {
        stats.seeded += enqueue_if_foreground(img, &mut marked, &mut queue, 0, row);
        stats.seeded += enqueue_if_foreground(img, &mut marked, &mut queue, w - 1, row);
    }
    stats.connected = stats.seeded;

    while !queue.is_empty() {
        let Coord { col, row } = queue.dequeue();

        if col > 0 {
            stats.connected += enqueue_if_foreground(img, &mut marked, &mut queue, col - 1, row);
        }
        if col + 1 < w {
            stats.connected += enqueue_if_foreground(img, &mut marked, &mut queue, col + 1, row);
        }
        if row > 0 {
            stats.connected += enqueue_if_foreground(img, &mut marked, &mut queue, col, row - 1);
        }
        if row + 1 < h {
            stats.connected += enqueue_if_foreground(img, &mut marked, &mut queue, col, row + 1);
        }
    }
    debug_assert!(queue.is_empty());

    (marked, stats)
}

/// Mark and enqueue `(col, row)` if it is foreground and not yet marked.
///
/// Marking happens together with the enqueue, so a cell reached twice (a
/// corner, or a border line collapsed by a 1-wide grid) is queued once.
/// Returns the number of cells enqueued (0 or 1).
fn enqueue_if_foreground(
    img: &BitGrid,
    marked: &mut BitGrid,
    queue: &mut FifoQueue<Coord>,
    col: usize,
    row: usize,
) -> usize {
    if !img.get(col, row) || marked.get(col, row) {
        return 0;
    }
    marked.set(col, row, true);
    queue.enqueue(Coord { col, row });
    1
}
