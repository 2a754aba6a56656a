//! Data type descriptors for column definitions and CAST targets.

use crate::lexeme::Lexeme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    CharString {
        kind: CharStringKind,
        size: Option<usize>,
        charset: Option<Lexeme>,
    },
    BitString {
        varying: bool,
        size: Option<usize>,
    },
    ExactNumeric {
        kind: ExactNumericKind,
        precision: Option<usize>,
        scale: Option<usize>,
    },
    ApproximateNumeric {
        kind: ApproximateNumericKind,
        precision: Option<usize>,
    },
    Datetime {
        kind: DatetimeKind,
        precision: Option<usize>,
        with_tz: bool,
    },
    Interval(IntervalQualifier),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharStringKind {
    Char,
    Varchar,
    NChar,
    NVarchar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExactNumericKind {
    Int,
    SmallInt,
    Numeric,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproximateNumericKind {
    Float,
    Real,
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatetimeKind {
    Date,
    Time,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// One field of an interval qualifier, e.g. the `SECOND(2, 4)` in
/// `INTERVAL '…' SECOND(2, 4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatetimeField {
    pub unit: IntervalUnit,
    pub precision: Option<usize>,
    pub fractional_precision: Option<usize>,
}

/// `<start field> [TO <end field>]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalQualifier {
    pub start: DatetimeField,
    pub end: Option<DatetimeField>,
}
