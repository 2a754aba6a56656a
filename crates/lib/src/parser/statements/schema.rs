//! CREATE SCHEMA and DROP SCHEMA.

use crate::ast::statement::{CreateSchemaStatement, DropBehaviour, DropSchemaStatement};
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <schema definition> ::=
//     CREATE SCHEMA <schema name>
//     [ AUTHORIZATION <authorization identifier> ]
//     [ [ DEFAULT ] CHARACTER SET <character set name> ]
//     [ COLLATE <collation name> ]
pub(crate) fn parse_create_schema(ctx: &mut ParseContext) -> Production<CreateSchemaStatement> {
    let start = ctx.state();
    ctx.advance();
    if ctx.accept(SyntaxKind::Schema).is_none() {
        ctx.restore(start);
        return Ok(Parsed::NoMatch);
    }
    let schema_name = ctx.expect_identifier()?;

    let mut authorization_identifier = None;
    if ctx.accept(SyntaxKind::Authorization).is_some() {
        authorization_identifier = Some(ctx.expect_identifier()?);
    }

    let mut default_charset = None;
    let has_charset = if ctx.accept(SyntaxKind::Default).is_some() {
        ctx.expect(SyntaxKind::Character)?;
        true
    } else {
        ctx.accept(SyntaxKind::Character).is_some()
    };
    if has_charset {
        ctx.expect(SyntaxKind::Set)?;
        default_charset = Some(ctx.expect_identifier()?);
    }

    let mut default_collation = None;
    if ctx.accept(SyntaxKind::Collate).is_some() {
        default_collation = Some(ctx.expect_identifier()?);
    }

    Ok(Parsed::Matched(ctx.build(|| CreateSchemaStatement {
        schema_name,
        authorization_identifier,
        default_charset,
        default_collation,
    })))
}

// <drop schema statement> ::=
//     DROP SCHEMA <schema name> [ <drop behaviour> ]
pub(crate) fn parse_drop_schema(ctx: &mut ParseContext) -> Production<DropSchemaStatement> {
    let start = ctx.state();
    ctx.advance();
    if ctx.accept(SyntaxKind::Schema).is_none() {
        ctx.restore(start);
        return Ok(Parsed::NoMatch);
    }
    let schema_name = ctx.expect_identifier()?;
    let drop_behaviour = parse_drop_behaviour(ctx);

    Ok(Parsed::Matched(ctx.build(|| DropSchemaStatement {
        schema_name,
        drop_behaviour,
    })))
}

/// CASCADE when no behaviour clause is present.
pub(crate) fn parse_drop_behaviour(ctx: &mut ParseContext) -> DropBehaviour {
    if ctx.accept(SyntaxKind::Restrict).is_some() {
        DropBehaviour::Restrict
    } else {
        ctx.accept(SyntaxKind::Cascade);
        DropBehaviour::Cascade
    }
}
