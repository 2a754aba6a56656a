//! Search conditions, boolean terms and factors, predicates, and row value
//! constructors. Precedence is NOT over AND over OR, as in SQL-92.

use crate::ast::expression::RowValueConstructor;
use crate::ast::predicate::{
    BooleanFactor, BooleanFactorKind, BooleanTerm, CompOp, Predicate, SearchCondition,
};
use crate::ast::query::QueryExpression;
use crate::errors::SyntaxError;
use crate::lexeme::Lexeme;
use crate::parser::expression::parse_value_expression;
use crate::parser::query::parse_query_expression;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <search condition> ::=
//     <boolean term>
//     | <search condition> OR <boolean term>
pub(crate) fn parse_search_condition(ctx: &mut ParseContext) -> Production<SearchCondition> {
    let mut terms: Vec<BooleanTerm> = match parse_boolean_term(ctx)? {
        Parsed::Matched(term) => term.into_iter().collect(),
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    while ctx.accept(SyntaxKind::Or).is_some() {
        match parse_boolean_term(ctx)? {
            Parsed::Matched(term) => {
                if let Some(term) = term {
                    terms.push(term);
                }
            }
            Parsed::NoMatch => return Err(ctx.expected_production("<boolean term>")),
        }
    }
    Ok(Parsed::Matched(ctx.build(|| SearchCondition { terms })))
}

// <boolean term> ::=
//     <boolean factor>
//     | <boolean term> AND <boolean factor>
fn parse_boolean_term(ctx: &mut ParseContext) -> Production<BooleanTerm> {
    let factor = match parse_boolean_factor(ctx)? {
        Parsed::Matched(factor) => factor,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let mut term = factor.map(BooleanTerm::new);
    while ctx.accept(SyntaxKind::And).is_some() {
        match parse_boolean_factor(ctx)? {
            Parsed::Matched(operand) => {
                if let (Some(term), Some(operand)) = (term.as_mut(), operand) {
                    term.and(operand);
                }
            }
            Parsed::NoMatch => return Err(ctx.expected_production("<boolean factor>")),
        }
    }
    Ok(Parsed::Matched(term))
}

// <boolean factor> ::= [ NOT ] <boolean test>
//
// A factor is either a predicate or a parens-enclosed nested search
// condition evaluated as a single boolean value.
fn parse_boolean_factor(ctx: &mut ParseContext) -> Production<BooleanFactor> {
    let start = ctx.state();
    let mut reverse_op = ctx.accept(SyntaxKind::Not).is_some();

    if ctx.at(SyntaxKind::Lparen) {
        let before_paren = ctx.state();
        ctx.advance();
        match parse_search_condition(ctx)? {
            Parsed::Matched(condition) => {
                if ctx.accept(SyntaxKind::Rparen).is_some() {
                    if !ctx.building() {
                        return Ok(Parsed::Matched(None));
                    }
                    return Ok(Parsed::Matched(condition.map(|condition| BooleanFactor {
                        reverse_op,
                        kind: BooleanFactorKind::NestedCondition(condition),
                    })));
                }
                // No closing paren: this was a row value constructor list
                // after all, e.g. `(a, b) = (c, d)`.
                ctx.restore(before_paren);
            }
            Parsed::NoMatch => ctx.restore(before_paren),
        }
    }

    match parse_predicate(ctx, &mut reverse_op)? {
        Parsed::Matched(predicate) => Ok(Parsed::Matched(predicate.map(|predicate| BooleanFactor {
            reverse_op,
            kind: BooleanFactorKind::Predicate(predicate),
        }))),
        Parsed::NoMatch => {
            ctx.restore(start);
            Ok(Parsed::NoMatch)
        }
    }
}

// <predicate> ::=
//     <comparison predicate> | <between predicate> | <in predicate>
//     | <like predicate> | <null predicate> | <exists predicate>
//     | <unique predicate>
//
// An inner NOT (`x NOT BETWEEN …`, `x IS NOT NULL`) flips the enclosing
// factor's reverse flag.
fn parse_predicate(ctx: &mut ParseContext, reverse_op: &mut bool) -> Production<Predicate> {
    match ctx.cur().kind {
        SyntaxKind::Exists => {
            ctx.advance();
            let subquery = parse_enclosed_subquery(ctx)?;
            return Ok(Parsed::Matched(
                subquery.map(|subquery| Predicate::Exists { subquery: Box::new(subquery) }),
            ));
        }
        SyntaxKind::Unique => {
            ctx.advance();
            let subquery = parse_enclosed_subquery(ctx)?;
            return Ok(Parsed::Matched(
                subquery.map(|subquery| Predicate::Unique { subquery: Box::new(subquery) }),
            ));
        }
        _ => {}
    }

    let left = match parse_row_value_constructor(ctx)? {
        Parsed::Matched(left) => left,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };

    let comp_op = match ctx.cur().kind {
        SyntaxKind::Equal => Some(CompOp::Equal),
        SyntaxKind::NotEqual => Some(CompOp::NotEqual),
        SyntaxKind::LessThan => Some(CompOp::LessThan),
        SyntaxKind::GreaterThan => Some(CompOp::GreaterThan),
        SyntaxKind::LessThanEqual => Some(CompOp::LessThanEqual),
        SyntaxKind::GreaterThanEqual => Some(CompOp::GreaterThanEqual),
        _ => None,
    };
    if let Some(op) = comp_op {
        ctx.advance();
        let right = match parse_row_value_constructor(ctx)? {
            Parsed::Matched(right) => right,
            Parsed::NoMatch => return Err(ctx.expected_production("<row value constructor>")),
        };
        return Ok(Parsed::Matched(
            left.zip(right)
                .map(|(left, right)| Predicate::Comparison { op, left, right }),
        ));
    }

    if ctx.accept(SyntaxKind::Not).is_some() {
        *reverse_op = !*reverse_op;
    }

    match ctx.cur().kind {
        SyntaxKind::Between => {
            ctx.advance();
            let comp_left = match parse_row_value_constructor(ctx)? {
                Parsed::Matched(value) => value,
                Parsed::NoMatch => {
                    return Err(ctx.expected_production("<row value constructor>"));
                }
            };
            ctx.expect(SyntaxKind::And)?;
            let comp_right = match parse_row_value_constructor(ctx)? {
                Parsed::Matched(value) => value,
                Parsed::NoMatch => {
                    return Err(ctx.expected_production("<row value constructor>"));
                }
            };
            Ok(Parsed::Matched(left.zip(comp_left).zip(comp_right).map(
                |((left, comp_left), comp_right)| Predicate::Between {
                    left,
                    comp_left,
                    comp_right,
                },
            )))
        }
        SyntaxKind::In => {
            ctx.advance();
            ctx.expect(SyntaxKind::Lparen)?;
            if ctx.at(SyntaxKind::Select) {
                let subquery = match parse_query_expression(ctx)? {
                    Parsed::Matched(query) => query,
                    Parsed::NoMatch => {
                        return Err(ctx.expected_production("<query expression>"));
                    }
                };
                ctx.expect(SyntaxKind::Rparen)?;
                return Ok(Parsed::Matched(left.zip(subquery).map(
                    |(left, subquery)| Predicate::InSubquery {
                        left,
                        subquery: Box::new(subquery),
                    },
                )));
            }
            let mut values = Vec::new();
            loop {
                match parse_value_expression(ctx)? {
                    Parsed::Matched(value) => {
                        if let Some(value) = value {
                            values.push(value);
                        }
                    }
                    Parsed::NoMatch => {
                        return Err(ctx.expected_production("<value expression>"));
                    }
                }
                if ctx.accept(SyntaxKind::Comma).is_none() {
                    break;
                }
            }
            ctx.expect(SyntaxKind::Rparen)?;
            Ok(Parsed::Matched(
                left.map(|left| Predicate::InValues { left, values }),
            ))
        }
        SyntaxKind::Like => {
            ctx.advance();
            let pattern = match parse_row_value_constructor(ctx)? {
                Parsed::Matched(pattern) => pattern,
                Parsed::NoMatch => {
                    return Err(ctx.expected_production("<character pattern>"));
                }
            };
            let mut escape_char: Option<Lexeme> = None;
            if ctx.accept(SyntaxKind::Escape).is_some() {
                escape_char = Some(ctx.expect(SyntaxKind::LiteralCharacterString)?.lexeme);
            }
            Ok(Parsed::Matched(left.zip(pattern).map(|(left, pattern)| {
                Predicate::Like {
                    left,
                    pattern,
                    escape_char,
                }
            })))
        }
        SyntaxKind::Is => {
            ctx.advance();
            if ctx.accept(SyntaxKind::Not).is_some() {
                *reverse_op = !*reverse_op;
            }
            ctx.expect(SyntaxKind::Null)?;
            Ok(Parsed::Matched(left.map(|left| Predicate::Null { left })))
        }
        _ => Ok(Parsed::NoMatch),
    }
}

fn parse_enclosed_subquery(
    ctx: &mut ParseContext,
) -> Result<Option<QueryExpression>, SyntaxError> {
    ctx.expect(SyntaxKind::Lparen)?;
    let query = match parse_query_expression(ctx)? {
        Parsed::Matched(query) => query,
        Parsed::NoMatch => return Err(ctx.expected_production("<query expression>")),
    };
    ctx.expect(SyntaxKind::Rparen)?;
    Ok(query)
}

// <row value constructor> ::=
//     <row value constructor element>
//     | <left paren> <row value constructor list> <right paren>
//     | <row subquery>
//
// <row value constructor element> ::=
//     <value expression> | <null specification> | <default specification>
pub(crate) fn parse_row_value_constructor(
    ctx: &mut ParseContext,
) -> Production<RowValueConstructor> {
    match parse_row_value_constructor_element(ctx)? {
        Parsed::Matched(element) => return Ok(Parsed::Matched(element)),
        Parsed::NoMatch => {}
    }

    // A parenthesized list of constructor elements, or a row subquery.
    if !ctx.at(SyntaxKind::Lparen) {
        return Ok(Parsed::NoMatch);
    }
    ctx.advance();
    if ctx.at(SyntaxKind::Select) {
        let query = match parse_query_expression(ctx)? {
            Parsed::Matched(query) => query,
            Parsed::NoMatch => return Err(ctx.expected_production("<query expression>")),
        };
        ctx.expect(SyntaxKind::Rparen)?;
        return Ok(Parsed::Matched(
            query.map(|query| RowValueConstructor::RowSubquery(Box::new(query))),
        ));
    }
    let mut values = Vec::new();
    loop {
        match parse_row_value_constructor_element(ctx)? {
            Parsed::Matched(element) => {
                if let Some(element) = element {
                    values.push(element);
                }
            }
            Parsed::NoMatch => {
                return Err(ctx.expected_production("<row value constructor element>"));
            }
        }
        if ctx.accept(SyntaxKind::Comma).is_none() {
            break;
        }
    }
    ctx.expect(SyntaxKind::Rparen)?;
    Ok(Parsed::Matched(
        ctx.build(|| RowValueConstructor::ValueList(values)),
    ))
}

// <row value constructor element> ::=
//     <value expression> | <null specification> | <default specification>
fn parse_row_value_constructor_element(
    ctx: &mut ParseContext,
) -> Production<RowValueConstructor> {
    match ctx.cur().kind {
        SyntaxKind::Null => {
            ctx.advance();
            return Ok(Parsed::Matched(ctx.build(|| RowValueConstructor::Null)));
        }
        SyntaxKind::Default => {
            ctx.advance();
            return Ok(Parsed::Matched(ctx.build(|| RowValueConstructor::Default)));
        }
        _ => {}
    }
    let start = ctx.state();
    match parse_value_expression(ctx)? {
        Parsed::Matched(value) => Ok(Parsed::Matched(
            value.map(|value| RowValueConstructor::ValueExpression(Box::new(value))),
        )),
        Parsed::NoMatch => {
            ctx.restore(start);
            Ok(Parsed::NoMatch)
        }
    }
}
