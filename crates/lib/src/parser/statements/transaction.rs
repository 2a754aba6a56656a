//! COMMIT and ROLLBACK.

use crate::ast::statement::Statement;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <commit statement> ::= COMMIT [ WORK ]
pub(crate) fn parse_commit(ctx: &mut ParseContext) -> Production<Statement> {
    ctx.advance();
    ctx.accept(SyntaxKind::Work);
    Ok(Parsed::Matched(ctx.build(|| Statement::Commit)))
}

// <rollback statement> ::= ROLLBACK [ WORK ]
pub(crate) fn parse_rollback(ctx: &mut ParseContext) -> Production<Statement> {
    ctx.advance();
    ctx.accept(SyntaxKind::Work);
    Ok(Parsed::Matched(ctx.build(|| Statement::Rollback)))
}
