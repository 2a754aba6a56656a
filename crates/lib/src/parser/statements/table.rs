//! CREATE TABLE, DROP TABLE and ALTER TABLE.

use crate::ast::column::ColumnDefinition;
use crate::ast::constraint::Constraint;
use crate::ast::statement::{
    AlterColumnAction, AlterTableAction, AlterTableStatement, CreateTableStatement,
    DropTableStatement, TableType,
};
use crate::parser::column_definition::{
    parse_column_definition, parse_default_clause, parse_table_constraint,
};
use crate::parser::statements::schema::parse_drop_behaviour;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <table definition> ::=
//     CREATE [ { GLOBAL | LOCAL } TEMPORARY ] TABLE <table name>
//     <left paren> <table element> [ { <comma> <table element> }... ] <right paren>
//
// <table element> ::= <column definition> | <table constraint definition>
pub(crate) fn parse_create_table(ctx: &mut ParseContext) -> Production<CreateTableStatement> {
    let start = ctx.state();
    ctx.advance();

    let table_type = if ctx.accept(SyntaxKind::Global).is_some() {
        ctx.expect(SyntaxKind::Temporary)?;
        TableType::TemporaryGlobal
    } else if ctx.accept(SyntaxKind::Local).is_some() {
        ctx.expect(SyntaxKind::Temporary)?;
        TableType::TemporaryLocal
    } else {
        TableType::Normal
    };
    if table_type == TableType::Normal {
        if ctx.accept(SyntaxKind::Table).is_none() {
            ctx.restore(start);
            return Ok(Parsed::NoMatch);
        }
    } else {
        ctx.expect(SyntaxKind::Table)?;
    }

    let table_name = ctx.expect_identifier()?;
    ctx.expect(SyntaxKind::Lparen)?;

    let mut column_definitions: Vec<ColumnDefinition> = Vec::new();
    let mut constraints: Vec<Constraint> = Vec::new();
    loop {
        if is_table_constraint_lead(ctx) {
            if let Some(constraint) = parse_table_constraint(ctx)? {
                constraints.push(constraint);
            }
        } else {
            match parse_column_definition(ctx)? {
                Parsed::Matched(column) => {
                    if let Some(column) = column {
                        column_definitions.push(column);
                    }
                }
                Parsed::NoMatch => {
                    return Err(ctx.expected_production("<column definition> or <table constraint>"));
                }
            }
        }
        if ctx.accept(SyntaxKind::Comma).is_none() {
            break;
        }
    }
    ctx.expect(SyntaxKind::Rparen)?;

    Ok(Parsed::Matched(ctx.build(|| CreateTableStatement {
        table_type,
        table_name,
        column_definitions,
        constraints,
    })))
}

fn is_table_constraint_lead(ctx: &ParseContext) -> bool {
    matches!(
        ctx.cur().kind,
        SyntaxKind::Constraint
            | SyntaxKind::Unique
            | SyntaxKind::Primary
            | SyntaxKind::Foreign
            | SyntaxKind::Check
    )
}

// <drop table statement> ::=
//     DROP TABLE <table name> [ <drop behaviour> ]
pub(crate) fn parse_drop_table(ctx: &mut ParseContext) -> Production<DropTableStatement> {
    let start = ctx.state();
    ctx.advance();
    if ctx.accept(SyntaxKind::Table).is_none() {
        ctx.restore(start);
        return Ok(Parsed::NoMatch);
    }
    let table_name = ctx.expect_identifier()?;
    let drop_behaviour = parse_drop_behaviour(ctx);

    Ok(Parsed::Matched(ctx.build(|| DropTableStatement {
        table_name,
        drop_behaviour,
    })))
}

// <alter table statement> ::= ALTER TABLE <table name> <alter table action>
//
// <alter table action> ::=
//     ADD [ COLUMN ] <column definition>
//     | ALTER [ COLUMN ] <column name> { SET <default clause> | DROP DEFAULT }
//     | DROP [ COLUMN ] <column name> <drop behaviour>
//     | ADD <table constraint definition>
//     | DROP CONSTRAINT <constraint name> <drop behaviour>
pub(crate) fn parse_alter_table(ctx: &mut ParseContext) -> Production<AlterTableStatement> {
    ctx.advance();
    ctx.expect(SyntaxKind::Table)?;
    let table_name = ctx.expect_identifier()?;

    let action = match ctx.cur().kind {
        SyntaxKind::Add => {
            ctx.advance();
            if is_table_constraint_lead(ctx) {
                parse_table_constraint(ctx)?.map(AlterTableAction::AddConstraint)
            } else {
                ctx.accept(SyntaxKind::Column);
                match parse_column_definition(ctx)? {
                    Parsed::Matched(column) => column.map(AlterTableAction::AddColumn),
                    Parsed::NoMatch => {
                        return Err(ctx.expected_production("<column definition>"));
                    }
                }
            }
        }
        SyntaxKind::Alter => {
            ctx.advance();
            ctx.accept(SyntaxKind::Column);
            let column_name = ctx.expect_identifier()?;
            if ctx.accept(SyntaxKind::Set).is_some() {
                let descriptor = parse_default_clause(ctx)?;
                descriptor.map(|descriptor| AlterTableAction::AlterColumn {
                    column_name,
                    action: AlterColumnAction::SetDefault(descriptor),
                })
            } else {
                ctx.expect(SyntaxKind::Drop)?;
                ctx.expect(SyntaxKind::Default)?;
                ctx.build(|| AlterTableAction::AlterColumn {
                    column_name,
                    action: AlterColumnAction::DropDefault,
                })
            }
        }
        SyntaxKind::Drop => {
            ctx.advance();
            if ctx.accept(SyntaxKind::Constraint).is_some() {
                let constraint_name = ctx.expect_identifier()?;
                let drop_behaviour = parse_drop_behaviour(ctx);
                ctx.build(|| AlterTableAction::DropConstraint {
                    constraint_name,
                    drop_behaviour,
                })
            } else {
                ctx.accept(SyntaxKind::Column);
                let column_name = ctx.expect_identifier()?;
                let drop_behaviour = parse_drop_behaviour(ctx);
                ctx.build(|| AlterTableAction::DropColumn {
                    column_name,
                    drop_behaviour,
                })
            }
        }
        _ => {
            return Err(ctx.expected_any(&[SyntaxKind::Add, SyntaxKind::Alter, SyntaxKind::Drop]));
        }
    };

    Ok(Parsed::Matched(
        action.map(|action| AlterTableStatement { table_name, action }),
    ))
}
