//! Column definitions and their default descriptors.

use crate::ast::constraint::Constraint;
use crate::ast::data_type::DataType;
use crate::ast::value::UnsignedValueSpecification;
use crate::lexeme::Lexeme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: Lexeme,
    pub data_type: DataType,
    pub default_descriptor: Option<DefaultDescriptor>,
    pub constraints: Vec<Constraint>,
    pub collate: Option<Lexeme>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultKind {
    Literal,
    User,
    CurrentUser,
    SessionUser,
    SystemUser,
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultDescriptor {
    pub kind: DefaultKind,
    /// The literal's value specification when `kind` is `Literal`.
    pub literal: Option<UnsignedValueSpecification>,
    /// CURRENT_TIME and CURRENT_TIMESTAMP accept a precision.
    pub precision: Option<usize>,
}
