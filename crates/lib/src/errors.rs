//! Error types and the caret-marked source excerpts they carry.

use itertools::Itertools;
use thiserror::Error;

use crate::lexeme::Lexeme;
use crate::syntax::SyntaxKind;
use crate::token::Token;

/// A production committed to a branch and the next token did not match.
/// The message is self-contained: a human-readable line followed by the
/// offending source line and a caret marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub lexeme: Lexeme,
}

/// A token could not be formed: unterminated string or quoted identifier,
/// unterminated block comment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    pub lexeme: Lexeme,
}

/// The source line containing `lexeme`, plus a second line carrying `^`
/// characters under the offending range.
pub(crate) fn error_marker(input: &str, lexeme: Lexeme) -> String {
    let start = lexeme.start().min(input.len());
    let line_start = input[..start].rfind('\n').map_or(0, |at| at + 1);
    let line_end = input[start..]
        .find('\n')
        .map_or(input.len(), |at| start + at);
    let line = &input[line_start..line_end];
    let width = lexeme.len().clamp(1, (line_end - start).max(1));
    format!(
        "{line}\n{pad}{carets}",
        pad = " ".repeat(start - line_start),
        carets = "^".repeat(width),
    )
}

pub(crate) fn expect_error(input: &str, found: Token, expected: SyntaxKind) -> SyntaxError {
    SyntaxError {
        message: format!(
            "Expected to find {} but found {}.\n{}",
            expected.describe(),
            found.describe(input),
            error_marker(input, found.lexeme),
        ),
        lexeme: found.lexeme,
    }
}

pub(crate) fn expect_any_error(input: &str, found: Token, expected: &[SyntaxKind]) -> SyntaxError {
    SyntaxError {
        message: format!(
            "Expected to find one of ({}) but found {}.\n{}",
            expected.iter().map(|kind| kind.describe()).join(", "),
            found.describe(input),
            error_marker(input, found.lexeme),
        ),
        lexeme: found.lexeme,
    }
}

/// A free-form variant for productions that expect a non-terminal, e.g.
/// `Expected <table reference> but found keyword WHERE.`
pub(crate) fn production_error(input: &str, found: Token, expected: &str) -> SyntaxError {
    SyntaxError {
        message: format!(
            "Expected {} but found {}.\n{}",
            expected,
            found.describe(input),
            error_marker(input, found.lexeme),
        ),
        lexeme: found.lexeme,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn marker_points_at_the_offending_lexeme() {
        let input = "DROP SCHEMA test.test1";
        let marker = error_marker(input, Lexeme::new(16, 17));
        assert_eq!(marker, "DROP SCHEMA test.test1\n                ^");
    }

    #[test]
    fn marker_extracts_the_faulting_line() {
        let input = "SELECT a\nFROM t1\nWHERE b";
        let marker = error_marker(input, Lexeme::new(14, 16));
        assert_eq!(marker, "FROM t1\n     ^^");
    }

    #[test]
    fn marker_handles_end_of_input() {
        let input = "SELECT";
        let marker = error_marker(input, Lexeme::new(6, 6));
        assert_eq!(marker, "SELECT\n      ^");
    }

    #[test]
    fn expect_error_names_both_sides() {
        let input = "SELECT 1";
        let found = Token::new(SyntaxKind::LiteralUnsignedInteger, Lexeme::new(7, 8));
        let err = expect_error(input, found, SyntaxKind::From);
        assert!(err.message.starts_with("Expected to find FROM but found literal '1'."));
        assert!(err.message.contains("SELECT 1"));
    }
}
