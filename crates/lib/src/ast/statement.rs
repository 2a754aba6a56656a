//! Statement roots, one variant per public statement kind.

use crate::ast::column::{ColumnDefinition, DefaultDescriptor};
use crate::ast::constraint::Constraint;
use crate::ast::expression::ValueExpression;
use crate::ast::predicate::SearchCondition;
use crate::ast::query::{QueryExpression, QuerySpecification};
use crate::lexeme::Lexeme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    CreateSchema(CreateSchemaStatement),
    DropSchema(DropSchemaStatement),
    CreateTable(CreateTableStatement),
    DropTable(DropTableStatement),
    AlterTable(AlterTableStatement),
    CreateView(CreateViewStatement),
    DropView(DropViewStatement),
    Select(SelectStatement),
    Insert(InsertStatement),
    Update(UpdateStatement),
    Delete(DeleteStatement),
    Grant(GrantStatement),
    Commit,
    Rollback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSchemaStatement {
    pub schema_name: Lexeme,
    pub authorization_identifier: Option<Lexeme>,
    pub default_charset: Option<Lexeme>,
    pub default_collation: Option<Lexeme>,
}

/// CASCADE is the fallback when no behaviour clause appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropBehaviour {
    Cascade,
    Restrict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropSchemaStatement {
    pub schema_name: Lexeme,
    pub drop_behaviour: DropBehaviour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableType {
    Normal,
    TemporaryGlobal,
    TemporaryLocal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableStatement {
    pub table_type: TableType,
    pub table_name: Lexeme,
    pub column_definitions: Vec<ColumnDefinition>,
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTableStatement {
    pub table_name: Lexeme,
    pub drop_behaviour: DropBehaviour,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTableStatement {
    pub table_name: Lexeme,
    pub action: AlterTableAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterTableAction {
    AddColumn(ColumnDefinition),
    AlterColumn {
        column_name: Lexeme,
        action: AlterColumnAction,
    },
    DropColumn {
        column_name: Lexeme,
        drop_behaviour: DropBehaviour,
    },
    AddConstraint(Constraint),
    DropConstraint {
        constraint_name: Lexeme,
        drop_behaviour: DropBehaviour,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterColumnAction {
    SetDefault(DefaultDescriptor),
    DropDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub query: QuerySpecification,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    pub table_name: Lexeme,
    pub insert_columns: Vec<Lexeme>,
    pub query: Box<QueryExpression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub table_name: Lexeme,
    pub set_columns: Vec<SetColumn>,
    pub where_condition: Option<SearchCondition>,
}

/// One `column = value` element of an UPDATE's SET clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetColumn {
    pub column_name: Lexeme,
    pub value: SetColumnValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetColumnValue {
    Null,
    Default,
    Value(ValueExpression),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStatement {
    pub table_name: Lexeme,
    pub where_condition: Option<SearchCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOption {
    None,
    Local,
    Cascaded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateViewStatement {
    pub table_name: Lexeme,
    pub columns: Vec<Lexeme>,
    pub check_option: CheckOption,
    pub query: Box<QueryExpression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropViewStatement {
    pub table_name: Lexeme,
    pub drop_behaviour: DropBehaviour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantActionKind {
    Select,
    Delete,
    Insert,
    Update,
    References,
    Usage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantAction {
    pub kind: GrantActionKind,
    /// INSERT, UPDATE and REFERENCES accept an optional column list.
    pub columns: Vec<Lexeme>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantStatement {
    pub on: Lexeme,
    /// `None` means TO PUBLIC.
    pub to: Option<Lexeme>,
    pub with_grant_option: bool,
    /// Empty means ALL PRIVILEGES.
    pub privileges: Vec<GrantAction>,
}

impl GrantStatement {
    pub fn to_public(&self) -> bool {
        self.to.is_none()
    }

    pub fn all_privileges(&self) -> bool {
        self.privileges.is_empty()
    }
}
