//! Rule compilation and resolution.
//!
//! A [`Rule`] is the compiled form of a template: a 256-entry table mapping
//! every adjacency bitmask to a frame, or to nothing. Compilation walks the
//! template's anchors, expands each neighborhood into the bitmask set it
//! covers, and binds those masks to the anchor's frame; overlapping
//! bindings to different frames are compile errors, not silent overwrites.

mod compile;
mod direction;
mod error;
mod table;

pub use compile::compile;
pub use direction::{Direction, UnknownDirection};
pub use error::{Binding, ConflictError};
pub use table::{CategorySource, Rule};
