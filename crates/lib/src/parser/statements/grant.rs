//! GRANT.

use crate::ast::statement::{GrantAction, GrantActionKind, GrantStatement};
use crate::lexeme::Lexeme;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <grant statement> ::=
//     GRANT <privileges> ON <object name>
//     TO <grantee> [ { <comma> <grantee> }... ]
//     [ WITH GRANT OPTION ]
//
// <privileges> ::= ALL PRIVILEGES | <action list>
//
// <action> ::=
//     SELECT | DELETE | INSERT [ <left paren> <privilege column list> <right paren> ]
//     | UPDATE [ <left paren> <privilege column list> <right paren> ]
//     | REFERENCES [ <left paren> <privilege column list> <right paren> ]
//     | USAGE
pub(crate) fn parse_grant(ctx: &mut ParseContext) -> Production<GrantStatement> {
    ctx.advance();

    // ALL PRIVILEGES leaves the action list empty.
    let mut privileges = Vec::new();
    if ctx.accept(SyntaxKind::All).is_some() {
        ctx.expect(SyntaxKind::Privileges)?;
    } else {
        loop {
            let kind = match ctx.cur().kind {
                SyntaxKind::Select => GrantActionKind::Select,
                SyntaxKind::Delete => GrantActionKind::Delete,
                SyntaxKind::Insert => GrantActionKind::Insert,
                SyntaxKind::Update => GrantActionKind::Update,
                SyntaxKind::References => GrantActionKind::References,
                SyntaxKind::Usage => GrantActionKind::Usage,
                _ => {
                    return Err(ctx.expected_any(&[
                        SyntaxKind::Select,
                        SyntaxKind::Delete,
                        SyntaxKind::Insert,
                        SyntaxKind::Update,
                        SyntaxKind::References,
                        SyntaxKind::Usage,
                    ]));
                }
            };
            ctx.advance();

            let mut columns = Vec::new();
            let takes_columns = matches!(
                kind,
                GrantActionKind::Insert | GrantActionKind::Update | GrantActionKind::References
            );
            if takes_columns && ctx.accept(SyntaxKind::Lparen).is_some() {
                loop {
                    columns.push(ctx.expect_identifier()?);
                    if ctx.accept(SyntaxKind::Comma).is_none() {
                        break;
                    }
                }
                ctx.expect(SyntaxKind::Rparen)?;
            }
            privileges.push(GrantAction { kind, columns });

            if ctx.accept(SyntaxKind::Comma).is_none() {
                break;
            }
        }
    }

    ctx.expect(SyntaxKind::On)?;
    let on = ctx.expect_identifier()?;

    ctx.expect(SyntaxKind::To)?;
    let to: Option<Lexeme> = if ctx.accept(SyntaxKind::Public).is_some() {
        None
    } else if ctx.at(SyntaxKind::Identifier) {
        Some(ctx.expect_identifier()?)
    } else {
        return Err(ctx.expected_any(&[SyntaxKind::Identifier, SyntaxKind::Public]));
    };

    let mut with_grant_option = false;
    if ctx.accept(SyntaxKind::With).is_some() {
        ctx.expect(SyntaxKind::Grant)?;
        ctx.expect(SyntaxKind::Option)?;
        with_grant_option = true;
    }

    Ok(Parsed::Matched(ctx.build(|| GrantStatement {
        on,
        to,
        with_grant_option,
        privileges,
    })))
}
