//! Rule templates: the text form of an autotile rule.
//!
//! A template is a small block of text. The first line is the legend,
//! declaring one frame per symbol; every following line is a grid row in
//! which each character constrains one neighbor of an anchor:
//!
//! ```text
//! a
//! .#.
//! #a#
//! .#.
//! ```
//!
//! Here frame 0, written `a`, is the variant drawn when all four cardinal
//! neighbors are adjacent and all four diagonals are not.

mod grid;
mod lexer;
mod parse;

pub use grid::{Anchor, Cell, Frame, Template, TemplateGrid, MAX_FRAMES};
pub use parse::parse;
