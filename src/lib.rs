//! Autotile - adjacency-driven tile rule compilation
//!
//! This library turns small text templates into constant-time lookup
//! tables that pick which frame of an autotiling sprite to draw, based on
//! which of a cell's eight neighbors belong to the same category.
//!
//! # Example
//!
//! ```rust
//! use autotile::{compile, Frame};
//!
//! let rule = compile("a\n.#.\n#a#\n.#.").unwrap();
//!
//! // All four cardinal neighbors adjacent, no diagonals: frame 0.
//! assert_eq!(rule.resolve(|d| d.is_cardinal()), Some(Frame(0)));
//! // No neighbors at all: this template never said what to draw.
//! assert_eq!(rule.resolve(|_| false), None);
//! ```

pub mod error;
pub mod manifest;
pub mod registry;
pub mod rule;
pub mod template;

pub use error::{Span, TemplateError};
pub use manifest::{Manifest, ManifestError};
pub use registry::{DuplicateFamily, RuleSet};
pub use rule::{Binding, CategorySource, ConflictError, Direction, Rule, UnknownDirection};
pub use template::{Anchor, Cell, Frame, Template, TemplateGrid, MAX_FRAMES};

use thiserror::Error;

/// Errors that can occur in the compile pipeline
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The template text failed to parse
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Two anchors bound the same bit pattern to different frames
    #[error("conflicting rule: {0}")]
    Conflict(#[from] ConflictError),
}

/// Compile template text into a [`Rule`].
///
/// This is the main entry point for the library. It parses the template
/// and compiles the resulting grid into a lookup table.
///
/// # Example
///
/// ```rust
/// use autotile::{compile, Direction, Frame};
///
/// // Two frames: 'i' for isolated walls, 'h' for walls in a horizontal
/// // run.
/// let rule = compile(concat!(
///     "ih\n",
///     ".i.\n",
///     "...\n",
///     "#h#",
/// )).unwrap();
///
/// assert_eq!(rule.resolve(|_| false), Some(Frame(0)));
/// let east_west = Direction::East.mask() | Direction::West.mask();
/// assert_eq!(rule.frame(east_west), Some(Frame(1)));
/// ```
pub fn compile(text: &str) -> Result<Rule, CompileError> {
    let template = template::parse(text)?;
    let rule = template.compile()?;
    Ok(rule)
}
