//! Query expressions, query specifications and table expressions.

use crate::ast::query::{
    DerivedColumn, GroupingColumnReference, NonJoinQueryExpression, NonJoinQueryPrimary,
    NonJoinQueryTerm, QueryExpression, QuerySpecification, TableExpression,
    TableValueConstructor,
};
use crate::parser::expression::parse_value_expression;
use crate::parser::predicate::{parse_row_value_constructor, parse_search_condition};
use crate::parser::table_reference::{parse_joined_table, parse_table_reference};
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <query expression> ::=
//     <non-join query expression>
//     | <joined table>
pub(crate) fn parse_query_expression(ctx: &mut ParseContext) -> Production<QueryExpression> {
    let start = ctx.state();
    match parse_non_join_query_expression(ctx)? {
        Parsed::Matched(expression) => {
            return Ok(Parsed::Matched(expression.map(QueryExpression::NonJoin)));
        }
        Parsed::NoMatch => ctx.restore(start),
    }
    match parse_joined_table(ctx)? {
        Parsed::Matched(joined) => Ok(Parsed::Matched(
            joined.map(|joined| QueryExpression::JoinedTable(Box::new(joined))),
        )),
        Parsed::NoMatch => Ok(Parsed::NoMatch),
    }
}

// <non-join query expression> ::=
//     <non-join query term>
//     | <query expression> UNION [ ALL ] [ <corresponding spec> ] <query term>
//     | <query expression> EXCEPT [ ALL ] [ <corresponding spec> ] <query term>
//
// The UNION and EXCEPT branches are not implemented; an expression wraps a
// single term.
pub(crate) fn parse_non_join_query_expression(
    ctx: &mut ParseContext,
) -> Production<NonJoinQueryExpression> {
    match parse_non_join_query_term(ctx)? {
        Parsed::Matched(term) => Ok(Parsed::Matched(
            term.map(|term| NonJoinQueryExpression { term }),
        )),
        Parsed::NoMatch => Ok(Parsed::NoMatch),
    }
}

// <non-join query term> ::=
//     <non-join query primary>
//     | <query term> INTERSECT [ ALL ] [ <corresponding spec> ] <query primary>
//
// The INTERSECT branch is not implemented; a term wraps a single primary.
fn parse_non_join_query_term(ctx: &mut ParseContext) -> Production<NonJoinQueryTerm> {
    match parse_non_join_query_primary(ctx)? {
        Parsed::Matched(primary) => Ok(Parsed::Matched(
            primary.map(|primary| NonJoinQueryTerm { primary }),
        )),
        Parsed::NoMatch => Ok(Parsed::NoMatch),
    }
}

// <non-join query primary> ::=
//     <simple table>
//     | <left paren> <non-join query expression> <right paren>
//
// <simple table> ::=
//     <query specification>
//     | <table value constructor>
//     | <explicit table>
fn parse_non_join_query_primary(ctx: &mut ParseContext) -> Production<NonJoinQueryPrimary> {
    let start = ctx.state();
    match parse_query_specification(ctx)? {
        Parsed::Matched(specification) => {
            return Ok(Parsed::Matched(specification.map(|specification| {
                NonJoinQueryPrimary::QuerySpecification(Box::new(specification))
            })));
        }
        Parsed::NoMatch => ctx.restore(start),
    }
    match parse_table_value_constructor(ctx)? {
        Parsed::Matched(constructor) => {
            return Ok(Parsed::Matched(
                constructor.map(NonJoinQueryPrimary::TableValueConstructor),
            ));
        }
        Parsed::NoMatch => {}
    }
    // <explicit table> ::= TABLE <table name>
    if ctx.accept(SyntaxKind::Table).is_some() {
        let name = ctx.expect_identifier()?;
        return Ok(Parsed::Matched(
            ctx.build(|| NonJoinQueryPrimary::ExplicitTable(name)),
        ));
    }
    if ctx.at(SyntaxKind::Lparen) {
        let before = ctx.state();
        ctx.advance();
        match parse_non_join_query_expression(ctx)? {
            Parsed::Matched(inner) => {
                ctx.expect(SyntaxKind::Rparen)?;
                return Ok(Parsed::Matched(inner.map(|inner| {
                    NonJoinQueryPrimary::Subexpression(Box::new(inner))
                })));
            }
            Parsed::NoMatch => ctx.restore(before),
        }
    }
    Ok(Parsed::NoMatch)
}

// <table value constructor> ::=
//     VALUES <row value constructor> [ { <comma> <row value constructor> }... ]
fn parse_table_value_constructor(ctx: &mut ParseContext) -> Production<TableValueConstructor> {
    if ctx.accept(SyntaxKind::Values).is_none() {
        return Ok(Parsed::NoMatch);
    }
    let mut values = Vec::new();
    loop {
        match parse_row_value_constructor(ctx)? {
            Parsed::Matched(value) => {
                if let Some(value) = value {
                    values.push(value);
                }
            }
            Parsed::NoMatch => return Err(ctx.expected_production("a value item")),
        }
        if ctx.accept(SyntaxKind::Comma).is_none() {
            break;
        }
    }
    Ok(Parsed::Matched(
        ctx.build(|| TableValueConstructor { values }),
    ))
}

// <query specification> ::=
//     SELECT [ <set quantifier> ] <select list> <table expression>
//
// <select list> ::=
//     <asterisk>
//     | <select sublist> [ { <comma> <select sublist> }... ]
//
// <derived column> ::= <value expression> [ <as clause> ]
pub(crate) fn parse_query_specification(ctx: &mut ParseContext) -> Production<QuerySpecification> {
    if ctx.accept(SyntaxKind::Select).is_none() {
        return Ok(Parsed::NoMatch);
    }

    let mut distinct = false;
    if ctx.accept(SyntaxKind::Distinct).is_some() {
        distinct = true;
    } else {
        ctx.accept(SyntaxKind::All);
    }

    let mut selected_columns = Vec::new();
    loop {
        if ctx.accept(SyntaxKind::Asterisk).is_some() {
            if ctx.building() {
                selected_columns.push(DerivedColumn {
                    value: None,
                    alias: None,
                });
            }
        } else {
            let value = match parse_value_expression(ctx)? {
                Parsed::Matched(value) => value,
                Parsed::NoMatch => {
                    return Err(
                        ctx.expected_any(&[SyntaxKind::Asterisk, SyntaxKind::Identifier])
                    );
                }
            };
            // An alias is an identifier directly after the expression, or
            // after the AS keyword.
            let mut alias = None;
            if ctx.accept(SyntaxKind::As).is_some() {
                alias = Some(ctx.expect_identifier()?);
            } else if ctx.at(SyntaxKind::Identifier) {
                alias = Some(ctx.expect_identifier()?);
            }
            if ctx.building() {
                selected_columns.push(DerivedColumn { value, alias });
            }
        }
        if ctx.accept(SyntaxKind::Comma).is_some() {
            continue;
        }
        if !ctx.at(SyntaxKind::From) {
            return Err(ctx.expected_any(&[SyntaxKind::Comma, SyntaxKind::From]));
        }
        break;
    }

    let table_expression = match parse_table_expression(ctx)? {
        Parsed::Matched(expression) => expression,
        Parsed::NoMatch => return Err(ctx.expected(SyntaxKind::From)),
    };

    Ok(Parsed::Matched(table_expression.map(|table_expression| {
        QuerySpecification {
            distinct,
            selected_columns,
            table_expression,
        }
    })))
}

// <table expression> ::=
//     <from clause> [ <where clause> ] [ <group by clause> ] [ <having clause> ]
pub(crate) fn parse_table_expression(ctx: &mut ParseContext) -> Production<TableExpression> {
    if ctx.accept(SyntaxKind::From).is_none() {
        return Ok(Parsed::NoMatch);
    }

    let mut referenced_tables = Vec::new();
    loop {
        match parse_table_reference(ctx)? {
            Parsed::Matched(reference) => {
                if let Some(reference) = reference {
                    referenced_tables.push(reference);
                }
            }
            Parsed::NoMatch => return Err(ctx.expected_production("<table reference>")),
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

    let mut group_by_columns = Vec::new();
    if ctx.accept(SyntaxKind::Group).is_some() {
        ctx.expect(SyntaxKind::By)?;
        loop {
            let column = ctx.expect_identifier()?;
            let mut collation = None;
            if ctx.accept(SyntaxKind::Collate).is_some() {
                collation = Some(ctx.expect_identifier()?);
            }
            if ctx.building() {
                group_by_columns.push(GroupingColumnReference { column, collation });
            }
            if ctx.accept(SyntaxKind::Comma).is_none() {
                break;
            }
        }
    }

    let mut having_condition = None;
    if ctx.accept(SyntaxKind::Having).is_some() {
        having_condition = match parse_search_condition(ctx)? {
            Parsed::Matched(condition) => condition,
            Parsed::NoMatch => return Err(ctx.expected_production("<search condition>")),
        };
    }

    Ok(Parsed::Matched(ctx.build(|| TableExpression {
        referenced_tables,
        where_condition,
        group_by_columns,
        having_condition,
    })))
}
