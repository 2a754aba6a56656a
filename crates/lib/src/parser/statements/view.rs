//! CREATE VIEW and DROP VIEW.

use crate::ast::statement::{CheckOption, CreateViewStatement, DropViewStatement};
use crate::parser::query::parse_query_expression;
use crate::parser::statements::schema::parse_drop_behaviour;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <view definition> ::=
//     CREATE VIEW <table name> [ <left paren> <view column list> <right paren> ]
//     AS <query expression> [ WITH [ <levels clause> ] CHECK OPTION ]
//
// <levels clause> ::= CASCADED | LOCAL
pub(crate) fn parse_create_view(ctx: &mut ParseContext) -> Production<CreateViewStatement> {
    let start = ctx.state();
    ctx.advance();
    if ctx.accept(SyntaxKind::View).is_none() {
        ctx.restore(start);
        return Ok(Parsed::NoMatch);
    }
    let table_name = ctx.expect_identifier()?;

    let mut columns = Vec::new();
    if ctx.accept(SyntaxKind::Lparen).is_some() {
        loop {
            columns.push(ctx.expect_identifier()?);
            if ctx.accept(SyntaxKind::Comma).is_none() {
                break;
            }
        }
        ctx.expect(SyntaxKind::Rparen)?;
    }

    ctx.expect(SyntaxKind::As)?;
    let query = match parse_query_expression(ctx)? {
        Parsed::Matched(query) => query,
        Parsed::NoMatch => return Err(ctx.expected_production("<query expression>")),
    };

    let mut check_option = CheckOption::None;
    if ctx.accept(SyntaxKind::With).is_some() {
        if ctx.accept(SyntaxKind::Cascaded).is_some() {
            check_option = CheckOption::Cascaded;
        } else if ctx.accept(SyntaxKind::Local).is_some() {
            check_option = CheckOption::Local;
        } else {
            return Err(ctx.expected_any(&[SyntaxKind::Cascaded, SyntaxKind::Local]));
        }
        ctx.expect(SyntaxKind::Check)?;
        ctx.expect(SyntaxKind::Option)?;
    }

    Ok(Parsed::Matched(query.map(|query| CreateViewStatement {
        table_name,
        columns,
        check_option,
        query: Box::new(query),
    })))
}

// <drop view statement> ::=
//     DROP VIEW <table name> [ <drop behaviour> ]
pub(crate) fn parse_drop_view(ctx: &mut ParseContext) -> Production<DropViewStatement> {
    let start = ctx.state();
    ctx.advance();
    if ctx.accept(SyntaxKind::View).is_none() {
        ctx.restore(start);
        return Ok(Parsed::NoMatch);
    }
    let table_name = ctx.expect_identifier()?;
    let drop_behaviour = parse_drop_behaviour(ctx);

    Ok(Parsed::Matched(ctx.build(|| DropViewStatement {
        table_name,
        drop_behaviour,
    })))
}
