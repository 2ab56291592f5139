//! Autotile CLI
//!
//! Usage:
//!   autotile [OPTIONS] [FILE]
//!
//! Options:
//!   -m, --manifest       Treat input as a TOML manifest of rule families
//!   -d, --dump           List every bound bit pattern and its frame
//!   -q, --query <DIRS>   Resolve one neighbor set, e.g. 'n,e,s' (with
//!                        --manifest, runs against every family)
//!   -f, --format-ref     Show the template format reference
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use autotile::{Direction, Manifest, Rule, RuleSet};

#[derive(Parser)]
#[command(name = "autotile")]
#[command(about = "Compile autotile rule templates into bitmask lookup tables")]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Treat input as a TOML manifest declaring several rule families
    #[arg(short, long)]
    manifest: bool,

    /// List every bound bit pattern and the frame it selects
    #[arg(short, long)]
    dump: bool,

    /// Resolve one neighbor set and print the frame, e.g. 'n,e,s' or
    /// 'north,northeast'; pass an empty string for no neighbors. With
    /// --manifest the query runs against every family
    #[arg(short, long, value_name = "DIRS")]
    query: Option<String>,

    /// Show the template format reference
    #[arg(short, long)]
    format_ref: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.format_ref {
        print_format_ref();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let query = cli.query.as_deref().map(|dirs| match Direction::mask_from_list(dirs) {
        Ok(mask) => mask,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    });

    if cli.manifest {
        let set = match Manifest::from_str(&source) {
            Ok(manifest) => match manifest.compile() {
                Ok(set) => set,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        report_set(&set, cli.dump, query);
    } else {
        let filename = cli
            .input
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string());
        let template = match autotile::template::parse(&source) {
            Ok(template) => template,
            Err(e) => {
                eprintln!("{}", e.format(&source, &filename));
                std::process::exit(1);
            }
        };
        for symbol in template.unused_symbols() {
            eprintln!("warning: symbol '{}' is never anchored in the grid", symbol);
        }
        let rule = match template.compile() {
            Ok(rule) => rule,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        report_rule(&filename, &rule, cli.dump, query);
    }
}

fn report_set(set: &RuleSet, dump: bool, query: Option<u8>) {
    for (name, rule) in set.iter() {
        report_rule(name, rule, dump, query);
    }
}

fn report_rule(name: &str, rule: &Rule, dump: bool, query: Option<u8>) {
    let symbols: String = rule.symbols().iter().collect();
    println!(
        "{}: {} frames ({}), {}/256 patterns bound",
        name,
        rule.frame_count(),
        symbols,
        rule.coverage()
    );
    if dump {
        for (mask, frame) in rule.entries() {
            println!("  {:#010b} -> frame {} ('{}')", mask, frame, rule.symbols()[frame.index()]);
        }
    }
    if let Some(mask) = query {
        match rule.frame(mask) {
            Some(frame) => println!(
                "  query {:#010b} -> frame {} ('{}')",
                mask,
                frame,
                rule.symbols()[frame.index()]
            ),
            None => println!("  query {:#010b} -> unassigned", mask),
        }
    }
}

fn print_intro() {
    println!(
        r#"Autotile - compile adjacency templates into tile rule tables

USAGE:
    autotile [OPTIONS] [FILE]
    echo '<template>' | autotile

OPTIONS:
    -m, --manifest     Input is a TOML manifest of rule families
    -d, --dump         List every bound bit pattern and its frame
    -q, --query DIRS   Resolve one neighbor set, e.g. 'n,e,s'
                       (with -m, runs against every family)
    -f, --format-ref   Show the template format reference
    -h, --help         Print help

QUICK START:
    printf 'a\n.#.\n#a#\n.#.' | autotile --dump

This compiles a one-frame rule and lists the bit patterns it binds.
Run --format-ref for the template syntax."#
    );
}

fn print_format_ref() {
    println!(
        r#"AUTOTILE TEMPLATE FORMAT
========================

A template is plain text. Line 1 is the legend; every other line is a
grid row.

LEGEND
------
Each non-whitespace character declares one frame, in order: the first
symbol is frame 0, the second frame 1, and so on. '.', '#', and
whitespace cannot name frames, and no symbol may repeat.

GRID
----
Each character constrains one neighbor of a nearby anchor:

    .         the neighbor is NOT part of the same category
    #         the neighbor IS part of the same category
    (space)   the neighbor may be either
    symbol    an anchor: the 8 cells around it define that frame's rule

Anchors read neighboring anchors as adjacent. Cells outside the grid,
including past the end of a short row, read as '.'.

BIT ORDER
---------
Neighbor states pack into an 8-bit pattern, cardinals clockwise from
north, then diagonals clockwise from northwest:

    4 0 5
    3 . 1
    7 2 6

A diagonal only distinguishes frames when both of its flanking
cardinals are adjacent; otherwise it is ignored, whatever the template
says. Corner detail is invisible unless the edges leading to it are
drawn.

EXAMPLE
-------
    a
    .#.
    #a#
    .#.

One frame, selected exactly when all four cardinal neighbors are
adjacent and all four diagonals are not: bit pattern 0b00001111.

MANIFESTS (--manifest)
----------------------
    [rules.walls]
    template = """
    a
    .#.
    #a#
    .#.
    """

    [rules.floors]
    symbols = "fg"
    rows = [".f.", ".g."]"#
    );
}
