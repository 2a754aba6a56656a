//! A stateful cursor over the input buffer that produces one token at a
//! time on demand.
//!
//! Dispatch order at each [`Lexer::next`] call: skip whitespace and
//! comments, then try a literal, then a keyword, then an identifier, and
//! finally the punctuator set. String prefixes `N'`, `B'` and `X'` are
//! claimed by the literal recognizer before the single-letter word rule can
//! see them.

use crate::errors::{LexError, error_marker};
use crate::keywords;
use crate::lexeme::Lexeme;
use crate::syntax::SyntaxKind;
use crate::token::Token;

/// A snapshot of lexer progress. The parser holds these on its control
/// stack to back out of grammar alternatives that share a prefix.
#[derive(Debug, Clone, Copy)]
pub struct LexerState {
    cursor: usize,
    current: Token,
}

pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
    current: Token,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: 0,
            current: Token::eos(0),
            errors: Vec::new(),
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    /// The most recently produced token.
    pub fn current(&self) -> Token {
        self.current
    }

    pub fn state(&self) -> LexerState {
        LexerState {
            cursor: self.cursor,
            current: self.current,
        }
    }

    pub fn restore(&mut self, state: LexerState) {
        self.cursor = state.cursor;
        self.current = state.current;
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Advance past whitespace and comments and emit the next token. At end
    /// of input this emits `Eos` and keeps emitting it on every further
    /// call without moving the cursor.
    pub fn next(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            if self.cursor >= self.input.len() {
                return self.emit(Token::eos(self.input.len()));
            }
            match self.scan_comment() {
                CommentScan::Skipped => continue,
                CommentScan::Unterminated(token) => return self.emit(token),
                CommentScan::None => {}
            }
            if let Some(token) = self.scan_literal() {
                return self.emit(token);
            }
            if let Some(token) = self.scan_word() {
                return self.emit(token);
            }
            if let Some(token) = self.scan_quoted_identifier() {
                return self.emit(token);
            }
            if let Some(token) = self.scan_punctuator() {
                return self.emit(token);
            }
            // Nothing recognizes the character. Surface a failure token and
            // let the parser report the position.
            let start = self.cursor;
            self.cursor += self.char_len(start);
            return self.emit(Token::new(SyntaxKind::LexFailure, Lexeme::new(start, self.cursor)));
        }
    }

    fn emit(&mut self, token: Token) -> Token {
        self.current = token;
        token
    }

    fn byte(&self, at: usize) -> u8 {
        self.input.as_bytes().get(at).copied().unwrap_or(0)
    }

    fn char_len(&self, at: usize) -> usize {
        self.input[at..].chars().next().map_or(1, char::len_utf8)
    }

    fn skip_whitespace(&mut self) {
        while self.byte(self.cursor).is_ascii_whitespace() && self.cursor < self.input.len() {
            self.cursor += 1;
        }
    }

    fn scan_comment(&mut self) -> CommentScan {
        let (b0, b1) = (self.byte(self.cursor), self.byte(self.cursor + 1));
        if b0 == b'-' && b1 == b'-' {
            // Line comment runs to the next newline or end of input.
            let rest = &self.input[self.cursor..];
            self.cursor += rest.find('\n').map_or(rest.len(), |at| at + 1);
            return CommentScan::Skipped;
        }
        if b0 == b'/' && b1 == b'*' {
            // Block comments do not nest.
            let start = self.cursor;
            let body = &self.input[self.cursor + 2..];
            match body.find("*/") {
                Some(at) => {
                    self.cursor += 2 + at + 2;
                    CommentScan::Skipped
                }
                None => {
                    let lexeme = Lexeme::new(start, self.input.len());
                    self.record_error("Unterminated block comment.", lexeme);
                    self.cursor = self.input.len();
                    CommentScan::Unterminated(Token::new(SyntaxKind::LexFailure, lexeme))
                }
            }
        } else {
            CommentScan::None
        }
    }

    fn scan_literal(&mut self) -> Option<Token> {
        let b0 = self.byte(self.cursor);
        if b0 == b'\'' {
            return Some(self.scan_string(self.cursor, SyntaxKind::LiteralCharacterString));
        }
        // N'...', B'...' and X'...' come before the single-letter word rule.
        if self.byte(self.cursor + 1) == b'\'' {
            let kind = match b0 {
                b'N' | b'n' => Some(SyntaxKind::LiteralNationalCharacterString),
                b'B' | b'b' => Some(SyntaxKind::LiteralBitString),
                b'X' | b'x' => Some(SyntaxKind::LiteralHexString),
                _ => None,
            };
            if let Some(kind) = kind {
                return Some(self.scan_string(self.cursor + 1, kind));
            }
        }
        self.scan_numeric()
    }

    /// Character/bit/hex/national string bodies run to the closing quote; a
    /// doubled quote escapes the quote character. The emitted lexeme covers
    /// the interior only.
    fn scan_string(&mut self, quote_at: usize, kind: SyntaxKind) -> Token {
        let body_start = quote_at + 1;
        let mut pos = body_start;
        while pos < self.input.len() {
            if self.byte(pos) == b'\'' {
                if self.byte(pos + 1) == b'\'' {
                    pos += 2;
                    continue;
                }
                self.cursor = pos + 1;
                return Token::new(kind, Lexeme::new(body_start, pos));
            }
            pos += 1;
        }
        let lexeme = Lexeme::new(self.cursor, self.input.len());
        self.record_error("Unterminated string literal; expected closing '.", lexeme);
        self.cursor = self.input.len();
        Token::new(SyntaxKind::LexFailure, lexeme)
    }

    /// Numeric literals: `[sign] (digits ['.' digits] | '.' digits)
    /// ['E' [sign] digits]`, terminated by whitespace, `,`, `)`, `(`, `;`
    /// or end of input. Any violation rejects the whole candidate without
    /// moving the cursor.
    fn scan_numeric(&mut self) -> Option<Token> {
        let start = self.cursor;
        let mut pos = start;
        let signed = matches!(self.byte(pos), b'+' | b'-');
        if signed {
            pos += 1;
        }

        let mut saw_decimal = false;
        if self.byte(pos).is_ascii_digit() {
            while self.byte(pos).is_ascii_digit() {
                pos += 1;
            }
            if self.byte(pos) == b'.' {
                if !self.byte(pos + 1).is_ascii_digit() {
                    return None;
                }
                saw_decimal = true;
                pos += 1;
                while self.byte(pos).is_ascii_digit() {
                    pos += 1;
                }
            }
        } else if self.byte(pos) == b'.' && self.byte(pos + 1).is_ascii_digit() {
            saw_decimal = true;
            pos += 1;
            while self.byte(pos).is_ascii_digit() {
                pos += 1;
            }
        } else {
            return None;
        }

        let mut approximate = false;
        if matches!(self.byte(pos), b'E' | b'e') {
            let mut exp = pos + 1;
            if matches!(self.byte(exp), b'+' | b'-') {
                exp += 1;
            }
            // At least one digit must follow the exponent marker.
            if !self.byte(exp).is_ascii_digit() {
                return None;
            }
            while self.byte(exp).is_ascii_digit() {
                exp += 1;
            }
            approximate = true;
            pos = exp;
        }

        if pos < self.input.len() {
            let terminator = self.byte(pos);
            if !terminator.is_ascii_whitespace() && !matches!(terminator, b',' | b')' | b'(' | b';')
            {
                return None;
            }
        }

        let kind = match (approximate, saw_decimal, signed) {
            (true, _, _) => SyntaxKind::LiteralApproximateNumber,
            (false, true, true) => SyntaxKind::LiteralSignedDecimal,
            (false, true, false) => SyntaxKind::LiteralUnsignedDecimal,
            (false, false, true) => SyntaxKind::LiteralSignedInteger,
            (false, false, false) => SyntaxKind::LiteralUnsignedInteger,
        };
        self.cursor = pos;
        Some(Token::new(kind, Lexeme::new(start, pos)))
    }

    /// An unquoted run of identifier characters: a keyword when the whole
    /// run matches one case-insensitively, an identifier otherwise.
    fn scan_word(&mut self) -> Option<Token> {
        if !self.byte(self.cursor).is_ascii_alphabetic() {
            return None;
        }
        let start = self.cursor;
        let mut pos = start;
        while is_identifier_byte(self.byte(pos)) {
            pos += 1;
        }
        let word = self.input[start..pos].to_uppercase();
        let kind = keywords::lookup(&word).unwrap_or(SyntaxKind::Identifier);
        self.cursor = pos;
        Some(Token::new(kind, Lexeme::new(start, pos)))
    }

    /// `"..."` or `` `...` `` with a doubled delimiter as the escape. The
    /// emitted lexeme covers the interior only.
    fn scan_quoted_identifier(&mut self) -> Option<Token> {
        let closer = match self.byte(self.cursor) {
            b'"' => b'"',
            b'`' => b'`',
            _ => return None,
        };
        let body_start = self.cursor + 1;
        let mut pos = body_start;
        while pos < self.input.len() {
            if self.byte(pos) == closer {
                if self.byte(pos + 1) == closer {
                    pos += 2;
                    continue;
                }
                self.cursor = pos + 1;
                return Some(Token::new(SyntaxKind::Identifier, Lexeme::new(body_start, pos)));
            }
            pos += 1;
        }
        let lexeme = Lexeme::new(self.cursor, self.input.len());
        self.record_error(
            &format!(
                "Unterminated quoted identifier; expected closing {}.",
                char::from(closer)
            ),
            lexeme,
        );
        self.cursor = self.input.len();
        Some(Token::new(SyntaxKind::LexFailure, lexeme))
    }

    fn scan_punctuator(&mut self) -> Option<Token> {
        let start = self.cursor;
        let (b0, b1) = (self.byte(start), self.byte(start + 1));
        let (kind, len) = match (b0, b1) {
            (b'<', b'=') => (SyntaxKind::LessThanEqual, 2),
            (b'>', b'=') => (SyntaxKind::GreaterThanEqual, 2),
            (b'<', b'>') => (SyntaxKind::NotEqual, 2),
            (b'|', b'|') => (SyntaxKind::Concatenation, 2),
            (b'(', _) => (SyntaxKind::Lparen, 1),
            (b')', _) => (SyntaxKind::Rparen, 1),
            (b',', _) => (SyntaxKind::Comma, 1),
            (b';', _) => (SyntaxKind::Semicolon, 1),
            (b'.', _) => (SyntaxKind::Period, 1),
            (b'*', _) => (SyntaxKind::Asterisk, 1),
            (b'/', _) => (SyntaxKind::Solidus, 1),
            (b'+', _) => (SyntaxKind::Plus, 1),
            (b'-', _) => (SyntaxKind::Minus, 1),
            (b':', _) => (SyntaxKind::Colon, 1),
            (b'?', _) => (SyntaxKind::QuestionMark, 1),
            (b'=', _) => (SyntaxKind::Equal, 1),
            (b'<', _) => (SyntaxKind::LessThan, 1),
            (b'>', _) => (SyntaxKind::GreaterThan, 1),
            _ => return None,
        };
        self.cursor = start + len;
        Some(Token::new(kind, Lexeme::new(start, start + len)))
    }

    fn record_error(&mut self, message: &str, lexeme: Lexeme) {
        let message = format!("{message}\n{}", error_marker(self.input, lexeme));
        log::trace!("lex error at {}..{}: {message}", lexeme.start(), lexeme.end());
        self.errors.push(LexError { message, lexeme });
    }
}

enum CommentScan {
    None,
    Skipped,
    Unterminated(Token),
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let token = lexer.next();
            if token.kind == SyntaxKind::Eos {
                break;
            }
            out.push(token.kind);
        }
        out
    }

    fn texts(input: &str) -> Vec<String> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let token = lexer.next();
            if token.kind == SyntaxKind::Eos {
                break;
            }
            out.push(token.lexeme.text(input).to_string());
        }
        out
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            kinds("SELECT foo FROM bar"),
            vec![
                SyntaxKind::Select,
                SyntaxKind::Identifier,
                SyntaxKind::From,
                SyntaxKind::Identifier,
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            kinds("select Foo fRoM bar"),
            vec![
                SyntaxKind::Select,
                SyntaxKind::Identifier,
                SyntaxKind::From,
                SyntaxKind::Identifier,
            ]
        );
    }

    #[test]
    fn a_keyword_prefix_with_a_longer_run_is_an_identifier() {
        assert_eq!(kinds("selected"), vec![SyntaxKind::Identifier]);
        assert_eq!(kinds("from_table"), vec![SyntaxKind::Identifier]);
    }

    #[test]
    fn numeric_literal_classes() {
        assert_eq!(kinds("42"), vec![SyntaxKind::LiteralUnsignedInteger]);
        assert_eq!(kinds("-42"), vec![SyntaxKind::LiteralSignedInteger]);
        assert_eq!(kinds("+42"), vec![SyntaxKind::LiteralSignedInteger]);
        assert_eq!(kinds("4.2"), vec![SyntaxKind::LiteralUnsignedDecimal]);
        assert_eq!(kinds("-.5"), vec![SyntaxKind::LiteralSignedDecimal]);
        assert_eq!(kinds("3.667E-10"), vec![SyntaxKind::LiteralApproximateNumber]);
        assert_eq!(kinds("1E6"), vec![SyntaxKind::LiteralApproximateNumber]);
    }

    #[test]
    fn a_lone_period_is_not_a_literal() {
        assert_eq!(kinds("."), vec![SyntaxKind::Period]);
        assert_eq!(
            kinds("a.b"),
            vec![SyntaxKind::Identifier, SyntaxKind::Period, SyntaxKind::Identifier]
        );
    }

    #[test]
    fn an_exponent_needs_at_least_one_digit() {
        // The candidate is rejected; 1E then lexes as a literal-free run.
        let mut lexer = Lexer::new("1E");
        let token = lexer.next();
        assert_ne!(token.kind, SyntaxKind::LiteralApproximateNumber);
    }

    #[test]
    fn literals_terminate_at_separator_punctuation() {
        assert_eq!(
            kinds("(1, 2)"),
            vec![
                SyntaxKind::Lparen,
                SyntaxKind::LiteralUnsignedInteger,
                SyntaxKind::Comma,
                SyntaxKind::LiteralUnsignedInteger,
                SyntaxKind::Rparen,
            ]
        );
        assert_eq!(kinds("10;"), vec![SyntaxKind::LiteralUnsignedInteger, SyntaxKind::Semicolon]);
    }

    #[test]
    fn character_string_literals_keep_the_interior() {
        assert_eq!(texts("'hello'"), vec!["hello"]);
        assert_eq!(kinds("'hello'"), vec![SyntaxKind::LiteralCharacterString]);
        // A doubled quote stays in the lexeme as written.
        assert_eq!(texts("'it''s'"), vec!["it''s"]);
    }

    #[test]
    fn prefixed_string_literals() {
        assert_eq!(kinds("N'abc'"), vec![SyntaxKind::LiteralNationalCharacterString]);
        assert_eq!(kinds("b'0101'"), vec![SyntaxKind::LiteralBitString]);
        assert_eq!(kinds("X'1f'"), vec![SyntaxKind::LiteralHexString]);
        // Without a following quote, N/B/X lex as ordinary words.
        assert_eq!(kinds("N B X"), vec![SyntaxKind::Identifier; 3]);
    }

    #[test]
    fn quoted_identifiers_strip_the_delimiters() {
        assert_eq!(texts("\"test1\""), vec!["test1"]);
        assert_eq!(kinds("\"test1\""), vec![SyntaxKind::Identifier]);
        assert_eq!(texts("`test1`"), vec!["test1"]);
        // Quoting defeats keyword recognition.
        assert_eq!(kinds("\"select\""), vec![SyntaxKind::Identifier]);
    }

    #[test]
    fn unterminated_string_is_a_lex_error() {
        let mut lexer = Lexer::new("'oops");
        let token = lexer.next();
        assert_eq!(token.kind, SyntaxKind::LexFailure);
        assert!(lexer.has_errors());
        assert!(lexer.errors()[0].message.contains("Unterminated string literal"));
        assert!(lexer.errors()[0].message.contains("^"));
    }

    #[test]
    fn comments_are_recognized_and_discarded() {
        assert_eq!(
            kinds("SELECT -- trailing words\n1"),
            vec![SyntaxKind::Select, SyntaxKind::LiteralUnsignedInteger]
        );
        assert_eq!(
            kinds("SELECT /* block */ 1"),
            vec![SyntaxKind::Select, SyntaxKind::LiteralUnsignedInteger]
        );
    }

    #[test]
    fn block_comments_do_not_nest() {
        // The first */ closes the comment; the rest lexes normally.
        assert_eq!(
            kinds("/* a /* b */ c"),
            vec![SyntaxKind::Identifier]
        );
    }

    #[test]
    fn unterminated_block_comment_is_a_lex_error() {
        let mut lexer = Lexer::new("/* never closed");
        let token = lexer.next();
        assert_eq!(token.kind, SyntaxKind::LexFailure);
        assert!(lexer.has_errors());
    }

    #[test]
    fn multi_character_punctuators_win_over_singles() {
        assert_eq!(
            kinds("a <= b >= c <> d || e"),
            vec![
                SyntaxKind::Identifier,
                SyntaxKind::LessThanEqual,
                SyntaxKind::Identifier,
                SyntaxKind::GreaterThanEqual,
                SyntaxKind::Identifier,
                SyntaxKind::NotEqual,
                SyntaxKind::Identifier,
                SyntaxKind::Concatenation,
                SyntaxKind::Identifier,
            ]
        );
    }

    #[test]
    fn eos_is_idempotent() {
        let mut lexer = Lexer::new("a");
        assert_eq!(lexer.next().kind, SyntaxKind::Identifier);
        let first = lexer.next();
        assert_eq!(first.kind, SyntaxKind::Eos);
        for _ in 0..3 {
            let again = lexer.next();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn state_restore_rewinds_cursor_and_token() {
        let input = "SELECT foo";
        let mut lexer = Lexer::new(input);
        lexer.next();
        let saved = lexer.state();
        let ahead = lexer.next();
        assert_eq!(ahead.kind, SyntaxKind::Identifier);
        lexer.restore(saved);
        assert_eq!(lexer.current().kind, SyntaxKind::Select);
        assert_eq!(lexer.next().kind, SyntaxKind::Identifier);
    }

    #[test]
    fn tokens_are_monotonic() {
        let input = "SELECT a.x, 'lit' FROM t1 WHERE a.x >= 10";
        let mut lexer = Lexer::new(input);
        let mut previous_end = 0;
        loop {
            let token = lexer.next();
            if token.kind == SyntaxKind::Eos {
                break;
            }
            assert!(token.lexeme.start() >= previous_end);
            assert!(token.lexeme.end() <= input.len());
            previous_end = token.lexeme.end();
        }
    }
}
