//! UPDATE … SET … [WHERE …].

use crate::ast::statement::{SetColumn, SetColumnValue, UpdateStatement};
use crate::parser::expression::parse_value_expression;
use crate::parser::predicate::parse_search_condition;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <update statement: searched> ::=
//     UPDATE <table name>
//     SET <set clause> [ { <comma> <set clause> }... ]
//     [ WHERE <search condition> ]
//
// <set clause> ::= <object column> <equals operator> <update source>
//
// <update source> ::= <value expression> | NULL | DEFAULT
pub(crate) fn parse_update(ctx: &mut ParseContext) -> Production<UpdateStatement> {
    ctx.advance();
    let table_name = ctx.expect_identifier()?;
    ctx.expect(SyntaxKind::Set)?;

    let mut set_columns = Vec::new();
    loop {
        let column_name = ctx.expect_identifier()?;
        ctx.expect(SyntaxKind::Equal)?;
        let value = if ctx.accept(SyntaxKind::Null).is_some() {
            ctx.build(|| SetColumnValue::Null)
        } else if ctx.accept(SyntaxKind::Default).is_some() {
            ctx.build(|| SetColumnValue::Default)
        } else {
            match parse_value_expression(ctx)? {
                Parsed::Matched(value) => value.map(SetColumnValue::Value),
                Parsed::NoMatch => return Err(ctx.expected_production("<update source>")),
            }
        };
        if let Some(value) = value {
            set_columns.push(SetColumn { column_name, value });
        }
        if ctx.accept(SyntaxKind::Comma).is_none() {
            break;
        }
    }

    let mut where_condition = None;
    if ctx.accept(SyntaxKind::Where).is_some() {
        where_condition = match parse_search_condition(ctx)? {
            Parsed::Matched(condition) => condition,
            Parsed::NoMatch => return Err(ctx.expected_production("<search condition>")),
        };
    }

    Ok(Parsed::Matched(ctx.build(|| UpdateStatement {
        table_name,
        set_columns,
        where_condition,
    })))
}
