mod board;
pub mod threat;

pub use board::{Board, Color, Point, MAXSIZE};
