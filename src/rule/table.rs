//! Compiled rule tables and frame resolution.

use crate::rule::direction::Direction;
use crate::template::Frame;

/// The map side of resolution: answers category questions about points.
///
/// `resolve_at` queries the source once for the category token of the
/// point being drawn, then once per direction to ask whether the neighbor
/// shares it. Implementations decide what a category is: a terrain kind, a
/// wall material, a layer id. Out-of-bounds neighbors should simply report
/// not-same.
pub trait CategorySource {
    /// Identity token deciding which neighbors count as adjacent.
    type Token;

    /// The category of the point itself.
    fn category(&self, x: i32, y: i32, z: i32) -> Self::Token;

    /// Whether the neighbor one step in `direction` from `(x, y, z)`
    /// belongs to `token`'s category.
    fn is_same_category(
        &self,
        x: i32,
        y: i32,
        z: i32,
        direction: Direction,
        token: &Self::Token,
    ) -> bool;
}

/// A compiled autotile rule: a 256-entry adjacency-bitmask lookup table.
///
/// Every possible combination of eight neighbor states is one index; each
/// entry is either a frame to draw or unassigned. Rules are immutable once
/// compiled and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    symbols: Vec<char>,
    frames: [Option<Frame>; 256],
}

impl Rule {
    pub(crate) fn new(symbols: Vec<char>, frames: [Option<Frame>; 256]) -> Self {
        Rule { symbols, frames }
    }

    /// The frame bound to an adjacency bitmask, or `None` if the pattern
    /// is unassigned.
    pub fn frame(&self, mask: u8) -> Option<Frame> {
        self.frames[mask as usize]
    }

    /// Resolve a frame by asking `is_adjacent` once per direction.
    ///
    /// The bitmask is assembled in bit order, then looked up.
    pub fn resolve<F>(&self, mut is_adjacent: F) -> Option<Frame>
    where
        F: FnMut(Direction) -> bool,
    {
        let mut mask = 0u8;
        for direction in Direction::ALL {
            if is_adjacent(direction) {
                mask |= direction.mask();
            }
        }
        self.frame(mask)
    }

    /// Resolve the frame for a map point, using the point's own category.
    pub fn resolve_at<S: CategorySource>(&self, source: &S, x: i32, y: i32, z: i32) -> Option<Frame> {
        let token = source.category(x, y, z);
        self.resolve_at_as(source, x, y, z, &token)
    }

    /// Resolve the frame for a map point against an explicit category
    /// token, for callers that already hold one (drawing previews, ghost
    /// tiles, or batched lookups).
    pub fn resolve_at_as<S: CategorySource>(
        &self,
        source: &S,
        x: i32,
        y: i32,
        z: i32,
        token: &S::Token,
    ) -> Option<Frame> {
        self.resolve(|direction| source.is_same_category(x, y, z, direction, token))
    }

    /// The legend symbols in frame order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of frames the legend declared.
    pub fn frame_count(&self) -> usize {
        self.symbols.len()
    }

    /// The legend symbol for a frame, if the frame is declared.
    pub fn symbol(&self, frame: Frame) -> Option<char> {
        self.symbols.get(frame.index()).copied()
    }

    /// Number of bitmasks bound to a frame, out of 256.
    pub fn coverage(&self) -> usize {
        self.frames.iter().filter(|slot| slot.is_some()).count()
    }

    /// All bound `(mask, frame)` entries in ascending mask order.
    pub fn entries(&self) -> impl Iterator<Item = (u8, Frame)> + '_ {
        self.frames
            .iter()
            .enumerate()
            .filter_map(|(mask, slot)| slot.map(|frame| (mask as u8, frame)))
    }
}
