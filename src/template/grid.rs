//! Parsed template types: frames, cells, grids, and anchors.

use std::fmt;

use crate::error::TemplateError;
use crate::rule::{ConflictError, Direction, Rule};

/// Maximum number of frame symbols a legend may declare. Frame indices are
/// 8-bit, so a legend can name at most 256 frames.
pub const MAX_FRAMES: usize = 256;

/// Index of one rendering variant of a tile, assigned by legend position:
/// the first legend symbol is frame 0, the second frame 1, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Frame(pub u8);

impl Frame {
    /// The frame index widened for direct table indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One position of a template grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// `#`: this neighbor is adjacent.
    Same,
    /// A space: this neighbor may be in either state.
    DontCare,
    /// `.`: this neighbor is not adjacent.
    Other,
    /// A legend symbol: the cell around which one rule is read. Anchors
    /// count as adjacent when a neighboring anchor reads them.
    Anchor(Frame),
}

/// An anchor cell found in a grid, with its 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub x: usize,
    pub y: usize,
    pub frame: Frame,
}

/// Grid of template cells. Rows may have different lengths; positions
/// outside the stored cells, including past the end of a short row, read
/// as [`Cell::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateGrid {
    rows: Vec<Vec<Cell>>,
}

impl TemplateGrid {
    pub(crate) fn new(rows: Vec<Vec<Cell>>) -> Self {
        TemplateGrid { rows }
    }

    /// Number of grid rows, counting empty ones.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// The cell at `(x, y)`, or [`Cell::Other`] outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(Cell::Other)
    }

    /// The cell one step from `(x, y)` in `direction`.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Cell {
        let (dx, dy) = direction.offset();
        match (
            x.checked_add_signed(dx as isize),
            y.checked_add_signed(dy as isize),
        ) {
            (Some(nx), Some(ny)) => self.cell(nx, ny),
            _ => Cell::Other,
        }
    }

    /// All anchors in row-major order: top to bottom, left to right.
    pub fn anchors(&self) -> impl Iterator<Item = Anchor> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().filter_map(move |(x, cell)| match cell {
                Cell::Anchor(frame) => Some(Anchor { x, y, frame: *frame }),
                _ => None,
            })
        })
    }
}

/// A parsed rule template: the frame legend plus the cell grid.
///
/// Templates are built by [`parse`](crate::template::parse) from template
/// text, or by [`Template::from_parts`] from a symbol string and row
/// strings. Compiling one produces a [`Rule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    symbols: Vec<char>,
    grid: TemplateGrid,
}

impl Template {
    pub(crate) fn new(symbols: Vec<char>, grid: TemplateGrid) -> Self {
        Template { symbols, grid }
    }

    /// Build a template from a legend string and separate row strings.
    ///
    /// Equivalent to joining the parts into template text with newlines and
    /// parsing that, so the same validation applies. Whitespace in
    /// `symbols` is stripped; a newline inside a row is rejected as an
    /// unknown cell since rows are already split.
    pub fn from_parts<S: AsRef<str>>(symbols: &str, rows: &[S]) -> Result<Self, TemplateError> {
        let mut text: String = symbols.chars().filter(|c| !c.is_whitespace()).collect();
        if rows.is_empty() {
            let end = text.len();
            return Err(TemplateError::MissingGrid { span: end..end });
        }
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            text.push('\n');
            if let Some(byte) = row.find('\n') {
                let column = row[..byte].chars().count() + 1;
                let offset = text.len() + byte;
                return Err(TemplateError::UnknownCell {
                    ch: '\n',
                    line: index + 2,
                    column,
                    span: offset..offset + 1,
                });
            }
            text.push_str(row);
        }
        super::parse(&text)
    }

    /// The legend symbols in frame order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of frames the legend declares.
    pub fn frame_count(&self) -> usize {
        self.symbols.len()
    }

    /// The legend symbol for a frame, if the frame is declared.
    pub fn symbol(&self, frame: Frame) -> Option<char> {
        self.symbols.get(frame.index()).copied()
    }

    /// The frame a legend symbol names, if any.
    pub fn frame_of(&self, symbol: char) -> Option<Frame> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .map(|index| Frame(index as u8))
    }

    /// The cell grid.
    pub fn grid(&self) -> &TemplateGrid {
        &self.grid
    }

    /// Legend symbols that never appear as an anchor in the grid. Such
    /// frames cannot be selected by the compiled rule.
    pub fn unused_symbols(&self) -> Vec<char> {
        let mut used = [false; MAX_FRAMES];
        for anchor in self.grid.anchors() {
            used[anchor.frame.index()] = true;
        }
        self.symbols
            .iter()
            .enumerate()
            .filter(|&(index, _)| !used[index])
            .map(|(_, &symbol)| symbol)
            .collect()
    }

    /// Compile this template into an immutable rule table.
    pub fn compile(&self) -> Result<Rule, ConflictError> {
        crate::rule::compile(self)
    }
}
