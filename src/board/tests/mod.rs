//! Board module tests, split by category:
//! - `perft.rs` - move generation oracle counts
//! - `draw.rs` - 50-move, repetition, insufficient material
//! - `make_unmake.rs` - make/unmake and hash round trips
//! - `edge_cases.rs` - pins, en passant, castling corner cases
//! - `proptest.rs` - property-based tests

mod edge_cases;
