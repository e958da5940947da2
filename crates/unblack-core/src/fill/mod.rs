pub mod edge;

pub use edge::{clear_edge_connected, edge_connected_mask, EdgeFillStats};
