//! Template text parsing: legend validation and grid assembly.

use crate::error::TemplateError;
use crate::template::grid::{Cell, Frame, Template, TemplateGrid, MAX_FRAMES};
use crate::template::lexer::{lex, Token};

/// Parse template text into a [`Template`].
///
/// The first line is the legend: each non-whitespace character declares one
/// frame, in order. Every following line is a grid row read character by
/// character, where `.` means not adjacent, `#` means adjacent, a space
/// means either, and a legend symbol anchors that frame's rule.
pub fn parse(text: &str) -> Result<Template, TemplateError> {
    let mut tokens = lex(text);
    let mut symbols: Vec<char> = Vec::new();
    let mut column = 0usize;
    let mut legend_end = None;

    // Legend: everything up to the first newline.
    for (token, span) in tokens.by_ref() {
        column += 1;
        match token {
            Token::Newline => {
                legend_end = Some(span.start);
                break;
            }
            Token::Blank => {}
            Token::Other | Token::Same => {
                let symbol = if token == Token::Other { '.' } else { '#' };
                return Err(TemplateError::ReservedSymbol {
                    symbol,
                    line: 1,
                    column,
                    span,
                });
            }
            Token::Symbol(c) if c.is_whitespace() => {}
            Token::Symbol(c) => {
                if symbols.contains(&c) {
                    return Err(TemplateError::DuplicateSymbol {
                        symbol: c,
                        line: 1,
                        column,
                        span,
                    });
                }
                if symbols.len() == MAX_FRAMES {
                    return Err(TemplateError::TooManySymbols {
                        line: 1,
                        column,
                        span,
                    });
                }
                symbols.push(c);
            }
        }
    }

    let legend_end = match legend_end {
        Some(end) => end,
        None => {
            let end = text.len();
            return Err(TemplateError::MissingGrid { span: end..end });
        }
    };
    if symbols.is_empty() {
        return Err(TemplateError::EmptyLegend { span: 0..legend_end });
    }

    // Grid: the remaining lines. A trailing newline yields one final empty
    // row, which holds no anchors and is harmless.
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut current: Vec<Cell> = Vec::new();
    let mut line = 2usize;
    column = 0;
    for (token, span) in tokens {
        column += 1;
        match token {
            Token::Newline => {
                rows.push(std::mem::take(&mut current));
                line += 1;
                column = 0;
            }
            Token::Other => current.push(Cell::Other),
            Token::Same => current.push(Cell::Same),
            Token::Blank => current.push(Cell::DontCare),
            Token::Symbol(c) => match symbols.iter().position(|&s| s == c) {
                Some(index) => current.push(Cell::Anchor(Frame(index as u8))),
                None => {
                    return Err(TemplateError::UnknownCell {
                        ch: c,
                        line,
                        column,
                        span,
                    });
                }
            },
        }
    }
    rows.push(current);

    Ok(Template::new(symbols, TemplateGrid::new(rows)))
}
