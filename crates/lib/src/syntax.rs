//! The closed set of token kinds produced by the lexer.

/// Every symbol the lexer can emit: punctuators, literal classes, the
/// identifier class, the SQL-92 keyword set, the sticky end-of-stream
/// marker and the lexer-failure marker.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::IntoStaticStr,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum SyntaxKind {
    /// End of the input stream. Idempotent: once emitted, `next()` keeps
    /// returning it.
    Eos,
    /// A token could not be formed at the current position.
    LexFailure,

    // Punctuators
    Semicolon,
    Lparen,
    Rparen,
    Comma,
    Period,
    Asterisk,
    Solidus,
    Plus,
    Minus,
    Colon,
    QuestionMark,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    Concatenation,

    // Literal classes
    LiteralUnsignedInteger,
    LiteralSignedInteger,
    LiteralUnsignedDecimal,
    LiteralSignedDecimal,
    LiteralApproximateNumber,
    LiteralCharacterString,
    LiteralNationalCharacterString,
    LiteralBitString,
    LiteralHexString,

    Identifier,

    // Keywords
    Action,
    Add,
    All,
    Alter,
    And,
    As,
    At,
    Authorization,
    Avg,
    Between,
    Bit,
    BitLength,
    Both,
    By,
    Cascade,
    Cascaded,
    Case,
    Cast,
    Char,
    Character,
    CharLength,
    CharacterLength,
    Check,
    Coalesce,
    Collate,
    Column,
    Commit,
    Constraint,
    Convert,
    Count,
    Create,
    Cross,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    CurrentUser,
    Date,
    Day,
    Dec,
    Decimal,
    Default,
    Delete,
    Distinct,
    Double,
    Drop,
    Else,
    End,
    Escape,
    Except,
    Exists,
    Extract,
    Float,
    For,
    Foreign,
    From,
    Full,
    Global,
    Grant,
    Group,
    Having,
    Hour,
    In,
    Inner,
    Insert,
    Int,
    Integer,
    Intersect,
    Interval,
    Into,
    Is,
    Join,
    Key,
    Leading,
    Left,
    Like,
    Local,
    Lower,
    Match,
    Max,
    Min,
    Minute,
    Month,
    National,
    Natural,
    Nchar,
    No,
    Not,
    Null,
    Nullif,
    Numeric,
    OctetLength,
    On,
    Option,
    Or,
    Outer,
    Partial,
    Position,
    Precision,
    Primary,
    Privileges,
    Public,
    Real,
    References,
    Restrict,
    Right,
    Rollback,
    Schema,
    Second,
    Select,
    SessionUser,
    Set,
    Smallint,
    Substring,
    Sum,
    SystemUser,
    Table,
    Temporary,
    Then,
    Time,
    Timestamp,
    To,
    Trailing,
    Translate,
    Trim,
    Union,
    Unique,
    Update,
    Upper,
    Usage,
    User,
    Using,
    Value,
    Values,
    Varbit,
    Varchar,
    Varying,
    View,
    When,
    Where,
    With,
    Work,
    Year,
    Zone,
}

impl SyntaxKind {
    pub fn is_punctuator(self) -> bool {
        matches!(
            self,
            SyntaxKind::Semicolon
                | SyntaxKind::Lparen
                | SyntaxKind::Rparen
                | SyntaxKind::Comma
                | SyntaxKind::Period
                | SyntaxKind::Asterisk
                | SyntaxKind::Solidus
                | SyntaxKind::Plus
                | SyntaxKind::Minus
                | SyntaxKind::Colon
                | SyntaxKind::QuestionMark
                | SyntaxKind::Equal
                | SyntaxKind::NotEqual
                | SyntaxKind::LessThan
                | SyntaxKind::GreaterThan
                | SyntaxKind::LessThanEqual
                | SyntaxKind::GreaterThanEqual
                | SyntaxKind::Concatenation
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::LiteralUnsignedInteger
                | SyntaxKind::LiteralSignedInteger
                | SyntaxKind::LiteralUnsignedDecimal
                | SyntaxKind::LiteralSignedDecimal
                | SyntaxKind::LiteralApproximateNumber
                | SyntaxKind::LiteralCharacterString
                | SyntaxKind::LiteralNationalCharacterString
                | SyntaxKind::LiteralBitString
                | SyntaxKind::LiteralHexString
        )
    }

    pub fn is_identifier(self) -> bool {
        self == SyntaxKind::Identifier
    }

    pub fn is_keyword(self) -> bool {
        !self.is_punctuator()
            && !self.is_literal()
            && !matches!(
                self,
                SyntaxKind::Identifier | SyntaxKind::Eos | SyntaxKind::LexFailure
            )
    }

    /// The symbol name as it appears in error messages.
    pub fn describe(self) -> String {
        let name: &'static str = self.into();
        name.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_predicate_excludes_structural_kinds() {
        assert!(SyntaxKind::Select.is_keyword());
        assert!(SyntaxKind::CurrentTimestamp.is_keyword());
        assert!(!SyntaxKind::Eos.is_keyword());
        assert!(!SyntaxKind::Identifier.is_keyword());
        assert!(!SyntaxKind::Comma.is_keyword());
        assert!(!SyntaxKind::LiteralBitString.is_keyword());
        assert!(!SyntaxKind::LexFailure.is_keyword());
    }

    #[test]
    fn describe_uppercases_symbol_names() {
        assert_eq!(SyntaxKind::Select.describe(), "SELECT");
        assert_eq!(SyntaxKind::CurrentDate.describe(), "CURRENT_DATE");
        assert_eq!(SyntaxKind::Lparen.describe(), "LPAREN");
    }
}
