//! Table references: named tables, derived tables and joined tables.

use crate::ast::table_reference::{JoinSpecification, JoinType, JoinedTable, TableReference};
use crate::errors::SyntaxError;
use crate::parser::predicate::parse_search_condition;
use crate::parser::query::parse_query_expression;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <table reference> ::=
//     <table name> [ <correlation specification> ]
//     | <derived table> <correlation specification>
//     | <joined table>
//
// <correlation specification> ::= [ AS ] <correlation name>
pub(crate) fn parse_table_reference(ctx: &mut ParseContext) -> Production<TableReference> {
    let base = match parse_primary_table_reference(ctx)? {
        Parsed::Matched(base) => base,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let (joined, _) = parse_join_chain(ctx, base)?;
    Ok(Parsed::Matched(joined))
}

/// A table reference that must contain at least one join clause. Used where
/// a query expression is itself a joined table.
pub(crate) fn parse_joined_table(ctx: &mut ParseContext) -> Production<TableReference> {
    let start = ctx.state();
    let base = match parse_primary_table_reference(ctx)? {
        Parsed::Matched(base) => base,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let (joined, any) = parse_join_chain(ctx, base)?;
    if !any {
        ctx.restore(start);
        return Ok(Parsed::NoMatch);
    }
    Ok(Parsed::Matched(joined))
}

/// A named table with an optional correlation name, or a derived table.
fn parse_primary_table_reference(ctx: &mut ParseContext) -> Production<TableReference> {
    if ctx.at(SyntaxKind::Identifier) {
        let table_name = ctx.cur().lexeme;
        ctx.advance();
        let mut alias = None;
        if ctx.accept(SyntaxKind::As).is_some() {
            alias = Some(ctx.expect_identifier()?);
        } else if ctx.at(SyntaxKind::Identifier) {
            alias = Some(ctx.expect_identifier()?);
        }
        return Ok(Parsed::Matched(
            ctx.build(|| TableReference::Table { table_name, alias }),
        ));
    }
    parse_derived_table(ctx)
}

// <derived table> ::= <table subquery>
//
// A derived table must be given a correlation name, preceded by an
// optional AS.
fn parse_derived_table(ctx: &mut ParseContext) -> Production<TableReference> {
    if !ctx.at(SyntaxKind::Lparen) {
        return Ok(Parsed::NoMatch);
    }
    let start = ctx.state();
    ctx.advance();
    let query = match parse_query_expression(ctx)? {
        Parsed::Matched(query) => query,
        Parsed::NoMatch => {
            ctx.restore(start);
            return Ok(Parsed::NoMatch);
        }
    };
    ctx.expect(SyntaxKind::Rparen)?;
    ctx.accept(SyntaxKind::As);
    let table_name = ctx.expect_identifier()?;

    Ok(Parsed::Matched(query.map(|query| {
        TableReference::DerivedTable {
            table_name,
            query: Box::new(query),
        }
    })))
}

/// Fold any number of join clauses onto `base`, left-associating each one.
/// Returns the (possibly wrapped) reference and whether a join was seen.
fn parse_join_chain(
    ctx: &mut ParseContext,
    base: Option<TableReference>,
) -> Result<(Option<TableReference>, bool), SyntaxError> {
    let mut left = base;
    let mut any = false;
    loop {
        // A join type (or bare JOIN) commits to a join clause; a join
        // specification may follow depending on the type.
        let (join_type, takes_spec) = match ctx.cur().kind {
            SyntaxKind::Cross => {
                ctx.advance();
                ctx.expect(SyntaxKind::Join)?;
                (JoinType::Cross, false)
            }
            SyntaxKind::Natural => {
                ctx.advance();
                ctx.expect(SyntaxKind::Join)?;
                (JoinType::Natural, false)
            }
            SyntaxKind::Union => {
                // UNION JOIN was removed in SQL:2003 but is accepted here.
                ctx.advance();
                ctx.expect(SyntaxKind::Join)?;
                (JoinType::Union, false)
            }
            SyntaxKind::Inner => {
                ctx.advance();
                ctx.expect(SyntaxKind::Join)?;
                (JoinType::Inner, true)
            }
            SyntaxKind::Join => {
                ctx.advance();
                (JoinType::Inner, true)
            }
            SyntaxKind::Left => {
                ctx.advance();
                ctx.accept(SyntaxKind::Outer);
                ctx.expect(SyntaxKind::Join)?;
                (JoinType::Left, true)
            }
            SyntaxKind::Right => {
                ctx.advance();
                ctx.accept(SyntaxKind::Outer);
                ctx.expect(SyntaxKind::Join)?;
                (JoinType::Right, true)
            }
            SyntaxKind::Full => {
                ctx.advance();
                ctx.accept(SyntaxKind::Outer);
                ctx.expect(SyntaxKind::Join)?;
                (JoinType::Full, true)
            }
            _ => break,
        };
        any = true;

        let right = match parse_primary_table_reference(ctx)? {
            Parsed::Matched(right) => right,
            Parsed::NoMatch => return Err(ctx.expected_production("<table reference>")),
        };

        let mut spec = None;
        if takes_spec {
            if ctx.accept(SyntaxKind::On).is_some() {
                let condition = match parse_search_condition(ctx)? {
                    Parsed::Matched(condition) => condition,
                    Parsed::NoMatch => {
                        return Err(ctx.expected_production("<join condition>"));
                    }
                };
                spec = condition.map(|condition| JoinSpecification {
                    condition: Some(condition),
                    named_columns: Vec::new(),
                });
            } else if ctx.accept(SyntaxKind::Using).is_some() {
                ctx.expect(SyntaxKind::Lparen)?;
                let mut named_columns = Vec::new();
                loop {
                    named_columns.push(ctx.expect_identifier()?);
                    if ctx.accept(SyntaxKind::Comma).is_none() {
                        break;
                    }
                }
                ctx.expect(SyntaxKind::Rparen)?;
                spec = ctx.build(|| JoinSpecification {
                    condition: None,
                    named_columns,
                });
            }
        }

        left = left.zip(right).map(|(left, right)| {
            TableReference::JoinedTable(JoinedTable {
                join_type,
                left: Box::new(left),
                right: Box::new(right),
                spec,
            })
        });
    }
    Ok((left, any))
}
