//! The eight neighbor directions and their bit assignments.
//!
//! Bitmask bits are assigned clockwise from north for the cardinals, then
//! clockwise from northwest for the diagonals:
//!
//! ```text
//!     4 0 5
//!     3 . 1
//!     7 2 6
//! ```
//!
//! This layout makes the flanking relations pure bit arithmetic: diagonal
//! bit `d` sits between cardinal bits `d - 4` and `(d - 1) % 4`, and
//! cardinal bit `c` touches diagonal bits `c + 4` and `(c + 1) % 4 + 4`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the eight compass neighbors of a grid cell.
///
/// The discriminant is the direction's bit position in an adjacency bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
    NorthWest = 4,
    NorthEast = 5,
    SouthEast = 6,
    SouthWest = 7,
}

/// A direction name the CLI query syntax does not recognize.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown direction '{0}' (expected n, e, s, w, nw, ne, se, or sw)")]
pub struct UnknownDirection(pub String);

impl Direction {
    /// All eight directions in bit order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Bit position of this direction in an adjacency bitmask.
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask for this direction.
    pub const fn mask(self) -> u8 {
        1 << self.bit()
    }

    /// Grid offset `(dx, dy)` one step in this direction; y grows downward.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (-1, 1),
        }
    }

    pub const fn is_cardinal(self) -> bool {
        (self as u8) < 4
    }

    pub const fn is_diagonal(self) -> bool {
        (self as u8) >= 4
    }

    /// The two cardinals on either side of a diagonal, or `None` for a
    /// cardinal. `NorthWest` is flanked by `North` and `West`, and so on.
    pub const fn flanking_cardinals(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::NorthWest => Some((Direction::North, Direction::West)),
            Direction::NorthEast => Some((Direction::East, Direction::North)),
            Direction::SouthEast => Some((Direction::South, Direction::East)),
            Direction::SouthWest => Some((Direction::West, Direction::South)),
            _ => None,
        }
    }

    /// Combined mask of the two flanking cardinals, or `None` for a cardinal.
    pub const fn flanking_mask(self) -> Option<u8> {
        match self.flanking_cardinals() {
            Some((a, b)) => Some(a.mask() | b.mask()),
            None => None,
        }
    }

    /// The two diagonals a cardinal touches, or `None` for a diagonal.
    /// `North` touches `NorthWest` and `NorthEast`, and so on.
    pub const fn adjacent_diagonals(self) -> Option<(Direction, Direction)> {
        match self {
            Direction::North => Some((Direction::NorthWest, Direction::NorthEast)),
            Direction::East => Some((Direction::NorthEast, Direction::SouthEast)),
            Direction::South => Some((Direction::SouthEast, Direction::SouthWest)),
            Direction::West => Some((Direction::SouthWest, Direction::NorthWest)),
            _ => None,
        }
    }

    /// Direction for a bit position, if it is in `0..8`.
    pub const fn from_bit(bit: u8) -> Option<Direction> {
        match bit {
            0 => Some(Direction::North),
            1 => Some(Direction::East),
            2 => Some(Direction::South),
            3 => Some(Direction::West),
            4 => Some(Direction::NorthWest),
            5 => Some(Direction::NorthEast),
            6 => Some(Direction::SouthEast),
            7 => Some(Direction::SouthWest),
            _ => None,
        }
    }

    /// Parse a comma-separated direction list, `"n,e,sw"`, into an
    /// adjacency bitmask. Whitespace around names is ignored; an empty or
    /// blank list means no neighbors at all, bitmask 0.
    pub fn mask_from_list(list: &str) -> Result<u8, UnknownDirection> {
        if list.trim().is_empty() {
            return Ok(0);
        }
        let mut mask = 0u8;
        for name in list.split(',') {
            mask |= name.parse::<Direction>()?.mask();
        }
        Ok(mask)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
            Direction::NorthWest => "northwest",
            Direction::NorthEast => "northeast",
            Direction::SouthEast => "southeast",
            Direction::SouthWest => "southwest",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Accepts full names and compass abbreviations, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "e" | "east" => Ok(Direction::East),
            "s" | "south" => Ok(Direction::South),
            "w" | "west" => Ok(Direction::West),
            "nw" | "northwest" => Ok(Direction::NorthWest),
            "ne" | "northeast" => Ok(Direction::NorthEast),
            "se" | "southeast" => Ok(Direction::SouthEast),
            "sw" | "southwest" => Ok(Direction::SouthWest),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}
