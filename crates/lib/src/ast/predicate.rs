//! Boolean factors, AND-chained terms and OR-joined search conditions.

use crate::ast::expression::{RowValueConstructor, ValueExpression};
use crate::ast::query::QueryExpression;
use crate::lexeme::Lexeme;

/// The top of a boolean formula: boolean terms OR'd together in source
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCondition {
    pub terms: Vec<BooleanTerm>,
}

/// A chain of AND-linked factors: the factor plus an optional next AND
/// operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanTerm {
    pub factor: BooleanFactor,
    pub and_operand: Option<Box<BooleanTerm>>,
}

impl BooleanTerm {
    pub fn new(factor: BooleanFactor) -> Self {
        Self {
            factor,
            and_operand: None,
        }
    }

    /// Append a factor at the end of this term's AND chain.
    pub fn and(&mut self, factor: BooleanFactor) {
        match &mut self.and_operand {
            Some(next) => next.and(factor),
            None => self.and_operand = Some(Box::new(BooleanTerm::new(factor))),
        }
    }
}

/// Anything that evaluates to a boolean, with `reverse_op` set when the
/// factor was negated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanFactor {
    pub reverse_op: bool,
    pub kind: BooleanFactorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BooleanFactorKind {
    Predicate(Predicate),
    /// A parens-enclosed search condition evaluated as a single factor.
    NestedCondition(SearchCondition),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Comparison {
        op: CompOp,
        left: RowValueConstructor,
        right: RowValueConstructor,
    },
    Between {
        left: RowValueConstructor,
        comp_left: RowValueConstructor,
        comp_right: RowValueConstructor,
    },
    Null {
        left: RowValueConstructor,
    },
    InValues {
        left: RowValueConstructor,
        values: Vec<ValueExpression>,
    },
    InSubquery {
        left: RowValueConstructor,
        subquery: Box<QueryExpression>,
    },
    Like {
        left: RowValueConstructor,
        pattern: RowValueConstructor,
        escape_char: Option<Lexeme>,
    },
    Exists {
        subquery: Box<QueryExpression>,
    },
    Unique {
        subquery: Box<QueryExpression>,
    },
}
