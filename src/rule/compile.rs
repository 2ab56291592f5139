//! Template-to-table compilation: candidate-set expansion and binding.

use crate::rule::direction::Direction;
use crate::rule::error::{Binding, ConflictError};
use crate::rule::table::Rule;
use crate::template::{Cell, Template, TemplateGrid};

/// Compile a parsed template into an immutable [`Rule`].
///
/// Anchors are visited in row-major order. Each anchor's neighborhood is
/// expanded into the set of adjacency bitmasks it covers, and every mask is
/// bound to the anchor's frame. A mask bound twice to the same frame keeps
/// its first binding; a mask bound to two different frames is a
/// [`ConflictError`], and no table is produced.
pub fn compile(template: &Template) -> Result<Rule, ConflictError> {
    let grid = template.grid();
    let mut bound: [Option<Binding>; 256] = [None; 256];

    for anchor in grid.anchors() {
        // Anchor frames always come from the legend.
        let symbol = template.symbols()[anchor.frame.index()];
        let binding = Binding {
            row: anchor.y + 1,
            column: anchor.x + 1,
            frame: anchor.frame,
            symbol,
        };
        for mask in expand(grid, anchor.x, anchor.y) {
            match bound[mask as usize] {
                Some(first) if first.frame != binding.frame => {
                    return Err(ConflictError { mask, first, second: binding });
                }
                Some(_) => {}
                None => bound[mask as usize] = Some(binding),
            }
        }
    }

    let frames = bound.map(|slot| slot.map(|binding| binding.frame));
    Ok(Rule::new(template.symbols().to_vec(), frames))
}

/// Expand one anchor's neighborhood into every bitmask it covers.
///
/// The set starts as `{0}` and grows direction by direction in bit order:
/// an adjacent neighbor sets its bit in every candidate, a non-adjacent
/// neighbor leaves it clear, and an unconstrained neighbor doubles the set.
/// Eight unconstrained neighbors top out at all 256 masks.
fn expand(grid: &TemplateGrid, x: usize, y: usize) -> Vec<u8> {
    let mut masks: Vec<u8> = vec![0];
    for direction in Direction::ALL {
        let mut cell = grid.neighbor(x, y, direction);
        // A diagonal boundary is only visible when both of its flanking
        // cardinals are adjacent. If any candidate lacks a flank, the
        // diagonal may not constrain the pattern and reads as DontCare
        // regardless of what the template says.
        if let Some(flank) = direction.flanking_mask() {
            if !masks.iter().all(|mask| mask & flank == flank) {
                cell = Cell::DontCare;
            }
        }
        match cell {
            Cell::Same | Cell::Anchor(_) => {
                for mask in &mut masks {
                    *mask |= direction.mask();
                }
            }
            Cell::Other => {}
            Cell::DontCare => {
                masks = masks
                    .iter()
                    .flat_map(|&mask| [mask, mask | direction.mask()])
                    .collect();
            }
        }
    }
    masks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse;

    fn expand_anchor(text: &str) -> Vec<u8> {
        let template = parse(text).expect("Should parse");
        let anchor = template
            .grid()
            .anchors()
            .next()
            .expect("Template should have an anchor");
        let mut masks = expand(template.grid(), anchor.x, anchor.y);
        masks.sort_unstable();
        masks
    }

    #[test]
    fn test_fully_constrained_anchor_expands_to_one_mask() {
        let masks = expand_anchor("a\n.#.\n#a#\n.#.");
        assert_eq!(masks, vec![0b0000_1111]);
    }

    #[test]
    fn test_all_other_anchor_expands_to_zero() {
        let masks = expand_anchor("a\n...\n.a.\n...");
        assert_eq!(masks, vec![0]);
    }

    #[test]
    fn test_out_of_grid_neighbors_read_as_other() {
        // A bare anchor has no stored neighbors at all.
        let masks = expand_anchor("a\na");
        assert_eq!(masks, vec![0]);
    }

    #[test]
    fn test_unconstrained_cardinal_doubles() {
        // North is a space; the diagonals stay unconstrained spaces, so
        // only the cardinal choice varies beyond the diagonal spread.
        let fixed = expand_anchor("a\n # \n#a#\n # ");
        let spread = expand_anchor("a\n   \n#a#\n # ");
        assert_eq!(spread.len(), fixed.len() * 2);
    }

    #[test]
    fn test_diagonal_needs_both_flanks() {
        // North is absent, so neither northern diagonal can constrain and
        // each doubles the set; the southern diagonals keep their '.'.
        let masks = expand_anchor("a\n#..\n#a#\n.#.");
        let expected: Vec<u8> = [0u8, 1]
            .iter()
            .flat_map(|&nw| [0u8, 1].map(|ne| 0b0000_1110 | (nw << 4) | (ne << 5)))
            .collect();
        let mut expected = expected;
        expected.sort_unstable();
        assert_eq!(masks, expected);
    }

    #[test]
    fn test_diagonal_with_both_flanks_is_honored() {
        // All cardinals adjacent: the '.' diagonals now bind for real.
        let masks = expand_anchor("a\n###\n#a#\n.#.");
        assert_eq!(masks, vec![0b0011_1111]);
    }

    #[test]
    fn test_neighboring_anchor_counts_as_adjacent() {
        let template = parse("ab\n.#.\n#ab\n.#.").expect("Should parse");
        let anchor = template.grid().anchors().next().expect("Should find 'a'");
        assert_eq!((anchor.x, anchor.y), (1, 1));
        let masks = expand(template.grid(), anchor.x, anchor.y);
        // 'b' sits to the east and counts as an adjacent neighbor.
        assert!(masks.iter().all(|&m| m & Direction::East.mask() != 0));
    }

    #[test]
    fn test_fully_unconstrained_anchor_covers_everything() {
        let masks = expand_anchor("a\n   \n a \n   ");
        assert_eq!(masks.len(), 256);
        assert_eq!(masks[0], 0);
        assert_eq!(masks[255], 255);
    }
}
