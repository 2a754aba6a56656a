//! The typed tree emitted by the parser.
//!
//! Grammar productions with multiple right-hand sides are tagged enums;
//! productions with a fixed shape are structs. Composite nodes exclusively
//! own their subtrees; terminal lexemes borrow ranges of the caller's input
//! buffer and never copy it.

pub mod column;
pub mod constraint;
pub mod data_type;
pub mod expression;
pub mod predicate;
pub mod query;
pub mod statement;
pub mod table_reference;
pub mod value;

pub use column::{ColumnDefinition, DefaultDescriptor, DefaultKind};
pub use constraint::{
    Constraint, ConstraintKind, ForeignKeyConstraint, MatchKind, ReferentialAction,
};
pub use data_type::{
    ApproximateNumericKind, CharStringKind, DataType, DatetimeField, DatetimeKind,
    ExactNumericKind, IntervalQualifier, IntervalUnit,
};
pub use expression::{
    CharacterFactor, CharacterPrimary, CharacterValueExpression, DatetimeFactor, DatetimePrimary,
    DatetimeTerm, DatetimeValueExpression, IntervalFactor, IntervalPrimary, IntervalTerm,
    IntervalValueExpression, NumericExpression, NumericFactor, NumericOp, NumericPrimary,
    NumericTerm, RowValueConstructor, Sign, TimeZoneSpecifier, ValueExpression,
};
pub use predicate::{
    BooleanFactor, BooleanFactorKind, BooleanTerm, CompOp, Predicate, SearchCondition,
};
pub use query::{
    DerivedColumn, GroupingColumnReference, NonJoinQueryExpression, NonJoinQueryPrimary,
    NonJoinQueryTerm, QueryExpression, QuerySpecification, TableExpression,
    TableValueConstructor,
};
pub use statement::{
    AlterColumnAction, AlterTableAction, AlterTableStatement, CheckOption, CreateSchemaStatement,
    CreateTableStatement, CreateViewStatement, DeleteStatement, DropBehaviour,
    DropSchemaStatement, DropTableStatement, DropViewStatement, GrantAction, GrantActionKind,
    GrantStatement, InsertStatement, SelectStatement, SetColumn, SetColumnValue, Statement,
    TableType, UpdateStatement,
};
pub use table_reference::{JoinSpecification, JoinType, JoinedTable, TableReference};
pub use value::{
    CaseExpression, CastSpecification, DatetimeFunction, DatetimeFunctionKind, NumericFunction,
    SearchedCaseExpression, SearchedWhenClause, SetFunction, SetFunctionKind,
    SimpleCaseExpression, SimpleWhenClause, StringFunction, TrimSpecification,
    UnsignedValueSpecification, UvsKind, ValueExpressionPrimary,
};
