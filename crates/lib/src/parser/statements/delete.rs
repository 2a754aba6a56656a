//! DELETE FROM … [WHERE …].

use crate::ast::statement::DeleteStatement;
use crate::parser::predicate::parse_search_condition;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <delete statement: searched> ::=
//     DELETE FROM <table name> [ WHERE <search condition> ]
pub(crate) fn parse_delete(ctx: &mut ParseContext) -> Production<DeleteStatement> {
    ctx.advance();
    ctx.expect(SyntaxKind::From)?;
    let table_name = ctx.expect_identifier()?;

    let mut where_condition = None;
    if ctx.accept(SyntaxKind::Where).is_some() {
        where_condition = match parse_search_condition(ctx)? {
            Parsed::Matched(condition) => condition,
            Parsed::NoMatch => return Err(ctx.expected_production("<search condition>")),
        };
    }

    Ok(Parsed::Matched(ctx.build(|| DeleteStatement {
        table_name,
        where_condition,
    })))
}
