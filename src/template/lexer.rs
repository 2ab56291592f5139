//! Lexer for template text using logos
//!
//! Every character of a template is significant, including spaces, so there
//! is nothing to skip: the token stream is exactly the character stream.

use logos::Logos;

use crate::error::Span;

/// One character of template text.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `.`: a neighbor that must not be adjacent.
    #[token(".")]
    Other,

    /// `#`: a neighbor that must be adjacent.
    #[token("#")]
    Same,

    /// A space: a neighbor with no constraint.
    #[token(" ")]
    Blank,

    /// End of a template line.
    #[token("\n")]
    Newline,

    /// Anything else: a legend symbol, an anchor, or a character the
    /// parser will reject.
    #[regex(r"[^.# \n]", |lex| lex.slice().chars().next())]
    Symbol(char),
}

/// Tokenize template text, producing tokens with their spans.
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    // The patterns above cover every possible character, so no token
    // can fail to lex.
    Token::lexer(input)
        .spanned()
        .filter_map(|(token, span)| token.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).map(|(token, _)| token).collect()
    }

    #[test]
    fn test_lex_cell_characters() {
        assert_eq!(
            tokens(". #\n"),
            vec![Token::Other, Token::Blank, Token::Same, Token::Newline]
        );
    }

    #[test]
    fn test_lex_symbols() {
        assert_eq!(
            tokens("ab!"),
            vec![
                Token::Symbol('a'),
                Token::Symbol('b'),
                Token::Symbol('!'),
            ]
        );
    }

    #[test]
    fn test_lex_unicode_symbols() {
        assert_eq!(tokens("é水"), vec![Token::Symbol('é'), Token::Symbol('水')]);
    }

    #[test]
    fn test_lex_reports_byte_spans() {
        let spans: Vec<_> = lex("a\n.").map(|(_, span)| span).collect();
        assert_eq!(spans, vec![0..1, 1..2, 2..3]);
    }

    #[test]
    fn test_lex_tabs_and_carriage_returns_are_symbols() {
        // Only a plain space is a blank cell; other whitespace surfaces as
        // a symbol token for the parser to judge in context.
        assert_eq!(tokens("\t"), vec![Token::Symbol('\t')]);
        assert_eq!(tokens("\r"), vec![Token::Symbol('\r')]);
    }
}
