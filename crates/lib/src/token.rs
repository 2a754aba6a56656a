use crate::lexeme::Lexeme;
use crate::syntax::SyntaxKind;

/// A lexeme tagged with its symbolic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub lexeme: Lexeme,
}

impl Token {
    pub fn new(kind: SyntaxKind, lexeme: Lexeme) -> Self {
        Self { kind, lexeme }
    }

    pub fn eos(at: usize) -> Self {
        Self::new(SyntaxKind::Eos, Lexeme::new(at, at))
    }

    pub fn is_literal(self) -> bool {
        self.kind.is_literal()
    }

    pub fn is_identifier(self) -> bool {
        self.kind.is_identifier()
    }

    pub fn is_keyword(self) -> bool {
        self.kind.is_keyword()
    }

    pub fn is_punctuator(self) -> bool {
        self.kind.is_punctuator()
    }

    /// How the token reads in an error message, e.g. `keyword SELECT` or
    /// `identifier 'foo'`.
    pub fn describe(self, input: &str) -> String {
        match self.kind {
            SyntaxKind::Eos => "end of input".to_string(),
            SyntaxKind::LexFailure => "an unrecognizable sequence".to_string(),
            kind if kind.is_keyword() => format!("keyword {}", kind.describe()),
            SyntaxKind::Identifier => format!("identifier '{}'", self.lexeme.text(input)),
            kind if kind.is_literal() => format!("literal '{}'", self.lexeme.text(input)),
            _ => format!("symbol '{}'", self.lexeme.text(input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_tokens_for_error_messages() {
        let input = "SELECT foo 42";
        let kw = Token::new(SyntaxKind::Select, Lexeme::new(0, 6));
        let ident = Token::new(SyntaxKind::Identifier, Lexeme::new(7, 10));
        let lit = Token::new(SyntaxKind::LiteralUnsignedInteger, Lexeme::new(11, 13));
        assert_eq!(kw.describe(input), "keyword SELECT");
        assert_eq!(ident.describe(input), "identifier 'foo'");
        assert_eq!(lit.describe(input), "literal '42'");
        assert_eq!(Token::eos(13).describe(input), "end of input");
    }
}
