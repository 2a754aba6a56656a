//! Column and table constraints.

use crate::ast::predicate::SearchCondition;
use crate::lexeme::Lexeme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// Set when the definition was introduced with `CONSTRAINT <name>`.
    pub name: Option<Lexeme>,
    pub kind: ConstraintKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintKind {
    NotNull,
    /// Column lists are empty for column-level constraints.
    Unique {
        columns: Vec<Lexeme>,
    },
    PrimaryKey {
        columns: Vec<Lexeme>,
    },
    ForeignKey(ForeignKeyConstraint),
    Check(SearchCondition),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyConstraint {
    pub columns: Vec<Lexeme>,
    pub referenced_table: Lexeme,
    pub referenced_columns: Vec<Lexeme>,
    pub match_kind: Option<MatchKind>,
    pub on_update: Option<ReferentialAction>,
    pub on_delete: Option<ReferentialAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Full,
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferentialAction {
    NoAction,
    Cascade,
    SetNull,
    SetDefault,
}
