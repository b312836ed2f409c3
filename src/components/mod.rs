mod sketch_board;
pub use sketch_board::*;
