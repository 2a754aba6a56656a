//! Value expressions: the scalar-producing grammar layer.
//!
//! A value expression is anything that evaluates to a scalar: a numeric
//! chain like `2 * 5 + col_value`, a concatenation of character factors, a
//! datetime offset by an interval term, or an interval computation.

use crate::ast::data_type::IntervalQualifier;
use crate::ast::query::QueryExpression;
use crate::ast::value::{DatetimeFunction, NumericFunction, StringFunction, ValueExpressionPrimary};
use crate::lexeme::Lexeme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueExpression {
    Numeric(NumericExpression),
    Character(CharacterValueExpression),
    Datetime(DatetimeValueExpression),
    Interval(IntervalValueExpression),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// `<term> (('+'|'-') <term>)*`, left-associative in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericExpression {
    pub left: NumericTerm,
    pub rest: Vec<(NumericOp, NumericTerm)>,
}

/// `<factor> (('*'|'/') <factor>)*`, left-associative in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericTerm {
    pub left: NumericFactor,
    pub rest: Vec<(NumericOp, NumericFactor)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericFactor {
    pub sign: Option<Sign>,
    pub primary: NumericPrimary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericPrimary {
    Value(Box<ValueExpressionPrimary>),
    Function(Box<NumericFunction>),
}

/// One or more character factors joined by the concatenation operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterValueExpression {
    pub values: Vec<CharacterFactor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterFactor {
    pub primary: CharacterPrimary,
    pub collation: Option<Lexeme>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterPrimary {
    Value(Box<ValueExpressionPrimary>),
    Function(Box<StringFunction>),
}

/// A datetime term optionally offset by an interval term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatetimeValueExpression {
    pub left: DatetimeTerm,
    /// Add or Subtract only.
    pub op: Option<NumericOp>,
    pub right: Option<Box<IntervalTerm>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatetimeTerm {
    pub value: DatetimeFactor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatetimeFactor {
    pub primary: DatetimePrimary,
    pub time_zone: Option<TimeZoneSpecifier>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatetimePrimary {
    Value(Box<ValueExpressionPrimary>),
    Function(DatetimeFunction),
}

/// The `AT …` suffix of a datetime factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneSpecifier {
    Local,
    /// The zone-name literal after `AT TIME ZONE`.
    TimeZone(Lexeme),
}

/// Interval terms add and subtract with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalValueExpression {
    pub left: IntervalTerm,
    /// Add or Subtract only.
    pub op: Option<NumericOp>,
    pub right: Option<Box<IntervalTerm>>,
}

/// An interval factor optionally scaled by a numeric factor; multiplying or
/// dividing an interval by a number yields another interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTerm {
    pub left: IntervalFactor,
    /// Multiply or Divide only.
    pub op: Option<NumericOp>,
    pub right: Option<NumericFactor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalFactor {
    pub sign: Option<Sign>,
    pub primary: IntervalPrimary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalPrimary {
    pub value: Box<ValueExpressionPrimary>,
    pub qualifier: Option<IntervalQualifier>,
}

/// Anything that evaluates to a row: either side of a predicate, or an
/// element of a VALUES list. A value list holds constructor elements
/// (value expressions, NULL or DEFAULT), never nested lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowValueConstructor {
    ValueExpression(Box<ValueExpression>),
    Null,
    Default,
    ValueList(Vec<RowValueConstructor>),
    RowSubquery(Box<QueryExpression>),
}
