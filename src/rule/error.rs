//! Rule compilation errors

use std::fmt;

use thiserror::Error;

use crate::template::Frame;

/// Where and how a bitmask was bound: the anchor's grid position and the
/// frame it selects. Row and column are 1-based; the first grid line is
/// row 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub row: usize,
    pub column: usize,
    pub frame: Frame,
    pub symbol: char,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grid {},{} as frame {} ('{}')",
            self.row, self.column, self.frame, self.symbol
        )
    }
}

/// Two anchors expanded to the same bitmask with different frames, so the
/// template is ambiguous: a map neighborhood matching that pattern has no
/// single frame to draw.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("bit pattern {mask} ({mask:#010b}) defined at {first}, redefined at {second}")]
pub struct ConflictError {
    /// The contested adjacency bitmask.
    pub mask: u8,
    /// The binding that claimed the mask first, in row-major anchor order.
    pub first: Binding,
    /// The binding that tried to claim it with a different frame.
    pub second: Binding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_display_shows_both_bindings() {
        let err = ConflictError {
            mask: 23,
            first: Binding { row: 2, column: 2, frame: Frame(0), symbol: 'a' },
            second: Binding { row: 2, column: 4, frame: Frame(1), symbol: 'b' },
        };
        assert_eq!(
            err.to_string(),
            "bit pattern 23 (0b00010111) defined at grid 2,2 as frame 0 ('a'), \
             redefined at grid 2,4 as frame 1 ('b')"
        );
    }
}
