//! Regression tests over the checked-in demo templates.
//!
//! Every `.tile` file under `demos/` must keep compiling, and the wall set
//! is pinned down entry by entry: it is the classic 16-frame cardinal
//! arrangement, so its table is fully covered and easy to predict.

use std::fs;
use std::path::Path;

use autotile::{compile, Frame};

#[test]
fn test_all_demo_templates_compile() {
    let demos_dir = Path::new("demos");
    let mut tested = 0;

    for entry in fs::read_dir(demos_dir).expect("Failed to read demos directory") {
        let path = entry.expect("Failed to read directory entry").path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("tile") {
            let source = fs::read_to_string(&path).expect(&format!("Failed to read {:?}", path));
            let rule = compile(&source)
                .expect(&format!("Failed to compile {:?}", path));
            assert!(rule.coverage() > 0, "{:?} binds nothing", path);
            tested += 1;
        }
    }

    assert!(tested > 0, "No .tile files found in demos directory");
}

#[test]
fn test_cardinal_wall_set_covers_every_pattern() {
    let source = fs::read_to_string("demos/walls.tile").expect("Failed to read walls.tile");
    let rule = compile(&source).expect("Should compile");

    assert_eq!(rule.frame_count(), 16);
    assert_eq!(rule.coverage(), 256);
    // Frames are laid out so that frame index == cardinal bits; diagonals
    // are left unconstrained throughout.
    for mask in 0u8..=255 {
        assert_eq!(rule.frame(mask), Some(Frame(mask & 0b0000_1111)), "mask {mask:#010b}");
    }
}

#[test]
fn test_pipe_demo_distinguishes_isolated_from_run() {
    let source = fs::read_to_string("demos/pipes.tile").expect("Failed to read pipes.tile");
    let rule = compile(&source).expect("Should compile");

    assert_eq!(rule.symbols(), &['i', 'h']);
    assert_eq!(rule.frame(0), Some(Frame(0)));
    let east_west = 0b0000_1010;
    assert_eq!(rule.frame(east_west), Some(Frame(1)));
    // Vertical runs are not described by this rule.
    assert_eq!(rule.frame(0b0000_0101), None);
}
