//! INSERT.

use crate::ast::statement::InsertStatement;
use crate::parser::query::parse_query_expression;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <insert statement> ::=
//     INSERT INTO <table name>
//     [ <left paren> <insert column list> <right paren> ] <query expression>
//
// The VALUES form arrives through the query expression's table value
// constructor primary.
pub(crate) fn parse_insert(ctx: &mut ParseContext) -> Production<InsertStatement> {
    ctx.advance();
    ctx.expect(SyntaxKind::Into)?;
    let table_name = ctx.expect_identifier()?;

    // A parenthesis here is ambiguous: a column list, or a parenthesized
    // query expression. Only commit to the column list when an identifier
    // follows.
    let mut insert_columns = Vec::new();
    let before_columns = ctx.state();
    if ctx.accept(SyntaxKind::Lparen).is_some() {
        if ctx.at(SyntaxKind::Identifier) {
            loop {
                insert_columns.push(ctx.expect_identifier()?);
                if ctx.accept(SyntaxKind::Comma).is_none() {
                    break;
                }
            }
            ctx.expect(SyntaxKind::Rparen)?;
        } else {
            ctx.restore(before_columns);
        }
    }

    let query = match parse_query_expression(ctx)? {
        Parsed::Matched(query) => query,
        Parsed::NoMatch => return Err(ctx.expected_production("<query expression>")),
    };

    Ok(Parsed::Matched(query.map(|query| InsertStatement {
        table_name,
        insert_columns,
        query: Box::new(query),
    })))
}
