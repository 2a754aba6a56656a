//! Everything that can appear in a FROM clause.

use crate::ast::predicate::SearchCondition;
use crate::ast::query::QueryExpression;
use crate::lexeme::Lexeme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableReference {
    /// A named table with an optional correlation name.
    Table {
        table_name: Lexeme,
        alias: Option<Lexeme>,
    },
    /// A subquery in the FROM clause; the correlation name is mandatory.
    DerivedTable {
        table_name: Lexeme,
        query: Box<QueryExpression>,
    },
    JoinedTable(JoinedTable),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedTable {
    pub join_type: JoinType,
    pub left: Box<TableReference>,
    pub right: Box<TableReference>,
    pub spec: Option<JoinSpecification>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Cross,
    Inner,
    Left,
    Right,
    Full,
    Natural,
    /// Accepted for SQL-92 compatibility; removed in SQL:2003.
    Union,
}

/// `ON <search condition>` fills `condition`; `USING (…)` fills
/// `named_columns`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JoinSpecification {
    pub condition: Option<SearchCondition>,
    pub named_columns: Vec<Lexeme>,
}
