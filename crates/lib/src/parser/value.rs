//! Value expression primaries: literals and general value specifications,
//! column references, set functions, CASE forms, CAST, and the scalar
//! value functions.

use crate::ast::value::{
    CaseExpression, CastSpecification, DatetimeFunction, DatetimeFunctionKind, NumericFunction,
    SearchedCaseExpression, SearchedWhenClause, SetFunction, SetFunctionKind,
    SimpleCaseExpression, SimpleWhenClause, StringFunction, TrimSpecification,
    UnsignedValueSpecification, UvsKind, ValueExpressionPrimary,
};
use crate::ast::data_type::IntervalUnit;
use crate::ast::expression::ValueExpression;
use crate::errors::SyntaxError;
use crate::lexeme::Lexeme;
use crate::parser::data_type::parse_data_type;
use crate::parser::expression::{
    parse_character_value_expression, parse_datetime_value_expression,
    parse_interval_value_expression, parse_numeric_expression, parse_value_expression,
};
use crate::parser::predicate::parse_search_condition;
use crate::parser::query::parse_query_expression;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <value expression primary> ::=
//     <unsigned value specification>
//     | <column reference>
//     | <set function specification>
//     | <scalar subquery>
//     | <case expression>
//     | <left paren> <value expression> <right paren>
//     | <cast specification>
pub(crate) fn parse_value_expression_primary(
    ctx: &mut ParseContext,
) -> Production<ValueExpressionPrimary> {
    match parse_unsigned_value_specification(ctx)? {
        Parsed::Matched(specification) => {
            return Ok(Parsed::Matched(
                specification.map(ValueExpressionPrimary::UnsignedValueSpecification),
            ));
        }
        Parsed::NoMatch => {}
    }

    if ctx.at(SyntaxKind::Identifier) {
        let lexeme = parse_column_reference(ctx)?;
        return Ok(Parsed::Matched(
            ctx.build(|| ValueExpressionPrimary::ColumnReference(lexeme)),
        ));
    }

    match ctx.cur().kind {
        SyntaxKind::Lparen => parse_subquery_or_parenthesized(ctx),
        SyntaxKind::Count
        | SyntaxKind::Avg
        | SyntaxKind::Max
        | SyntaxKind::Min
        | SyntaxKind::Sum => parse_set_function(ctx),
        SyntaxKind::Coalesce | SyntaxKind::Nullif | SyntaxKind::Case => {
            parse_case_expression(ctx)
        }
        SyntaxKind::Cast => parse_cast_specification(ctx),
        _ => Ok(Parsed::NoMatch),
    }
}

/// A column reference: an identifier, optionally qualified with periods.
/// The emitted lexeme spans the whole dotted chain.
fn parse_column_reference(ctx: &mut ParseContext) -> Result<Lexeme, SyntaxError> {
    let first = ctx.expect_identifier()?;
    let mut last = first;
    while ctx.at(SyntaxKind::Period) {
        ctx.advance();
        last = ctx.expect_identifier()?;
    }
    Ok(Lexeme::new(first.start(), last.end()))
}

// <unsigned value specification> ::=
//     <unsigned literal>
//     | <general value specification>
fn parse_unsigned_value_specification(
    ctx: &mut ParseContext,
) -> Production<UnsignedValueSpecification> {
    let token = ctx.cur();
    let kind = match token.kind {
        SyntaxKind::LiteralUnsignedInteger
        | SyntaxKind::LiteralSignedInteger
        | SyntaxKind::LiteralUnsignedDecimal
        | SyntaxKind::LiteralSignedDecimal
        | SyntaxKind::LiteralApproximateNumber => UvsKind::UnsignedNumeric,
        SyntaxKind::LiteralCharacterString => UvsKind::CharacterString,
        SyntaxKind::LiteralNationalCharacterString => UvsKind::NationalCharacterString,
        SyntaxKind::LiteralBitString => UvsKind::BitString,
        SyntaxKind::LiteralHexString => UvsKind::HexString,
        SyntaxKind::Date => return parse_datetime_literal(ctx, UvsKind::DateLiteral),
        SyntaxKind::Time => return parse_datetime_literal(ctx, UvsKind::TimeLiteral),
        SyntaxKind::Timestamp => return parse_datetime_literal(ctx, UvsKind::TimestampLiteral),
        SyntaxKind::Interval => return parse_datetime_literal(ctx, UvsKind::IntervalLiteral),
        SyntaxKind::User => UvsKind::User,
        SyntaxKind::CurrentUser => UvsKind::CurrentUser,
        SyntaxKind::SessionUser => UvsKind::SessionUser,
        SyntaxKind::SystemUser => UvsKind::SystemUser,
        SyntaxKind::Value => UvsKind::Value,
        SyntaxKind::QuestionMark => UvsKind::Parameter,
        SyntaxKind::Colon => {
            // A named parameter: COLON then an identifier.
            ctx.advance();
            let lexeme = ctx.expect_identifier()?;
            return Ok(Parsed::Matched(ctx.build(|| UnsignedValueSpecification {
                kind: UvsKind::Parameter,
                lexeme,
            })));
        }
        _ => return Ok(Parsed::NoMatch),
    };
    ctx.advance();
    Ok(Parsed::Matched(ctx.build(|| UnsignedValueSpecification {
        kind,
        lexeme: token.lexeme,
    })))
}

/// `DATE '…'`, `TIME '…'`, `TIMESTAMP '…'` and `INTERVAL '…'` literals: the
/// keyword followed by a character string holding the value.
fn parse_datetime_literal(
    ctx: &mut ParseContext,
    kind: UvsKind,
) -> Production<UnsignedValueSpecification> {
    ctx.advance();
    let lexeme = ctx.expect(SyntaxKind::LiteralCharacterString)?.lexeme;
    Ok(Parsed::Matched(
        ctx.build(|| UnsignedValueSpecification { kind, lexeme }),
    ))
}

/// After a LPAREN there are two possibilities: a scalar subquery and a
/// parenthesized value expression.
fn parse_subquery_or_parenthesized(
    ctx: &mut ParseContext,
) -> Production<ValueExpressionPrimary> {
    let start = ctx.state();
    ctx.advance();

    if ctx.at(SyntaxKind::Select) {
        let subquery_start = ctx.cur().lexeme.start();
        let query = match parse_query_expression(ctx)? {
            Parsed::Matched(query) => query,
            Parsed::NoMatch => return Err(ctx.expected_production("<query expression>")),
        };
        let subquery_end = ctx.cur().lexeme.start();
        ctx.expect(SyntaxKind::Rparen)?;
        let lexeme = Lexeme::new(subquery_start, subquery_end);
        return Ok(Parsed::Matched(query.map(|query| {
            ValueExpressionPrimary::ScalarSubquery {
                lexeme,
                query: Box::new(query),
            }
        })));
    }

    let inner_start = ctx.cur().lexeme.start();
    let value = match parse_value_expression(ctx)? {
        Parsed::Matched(value) => value,
        Parsed::NoMatch => {
            ctx.restore(start);
            return Ok(Parsed::NoMatch);
        }
    };
    let inner_end = ctx.cur().lexeme.start();
    if ctx.accept(SyntaxKind::Rparen).is_none() {
        // Could be a row value constructor list; let the caller try it.
        ctx.restore(start);
        return Ok(Parsed::NoMatch);
    }
    let lexeme = Lexeme::new(inner_start, inner_end);
    Ok(Parsed::Matched(value.map(|value| {
        ValueExpressionPrimary::Parenthesized {
            lexeme,
            value: Box::new(value),
        }
    })))
}

// <set function specification> ::=
//     COUNT <left paren> <asterisk> <right paren>
//     | <general set function>
//
// <general set function> ::=
//     <set function type> <left paren> [ <set quantifier> ]
//     <value expression> <right paren>
fn parse_set_function(ctx: &mut ParseContext) -> Production<ValueExpressionPrimary> {
    let fn_token = ctx.cur();
    let kind = match fn_token.kind {
        SyntaxKind::Count => SetFunctionKind::Count,
        SyntaxKind::Avg => SetFunctionKind::Avg,
        SyntaxKind::Max => SetFunctionKind::Max,
        SyntaxKind::Min => SetFunctionKind::Min,
        SyntaxKind::Sum => SetFunctionKind::Sum,
        _ => return Ok(Parsed::NoMatch),
    };
    ctx.advance();
    ctx.expect(SyntaxKind::Lparen)?;

    let mut star = false;
    let mut distinct = false;
    let mut operand = None;
    if kind == SetFunctionKind::Count && ctx.at(SyntaxKind::Asterisk) {
        // COUNT is the only set function taking the bare asterisk form.
        ctx.advance();
        star = true;
    } else {
        if ctx.accept(SyntaxKind::Distinct).is_some() {
            distinct = true;
        } else {
            ctx.accept(SyntaxKind::All);
        }
        operand = match parse_value_expression(ctx)? {
            Parsed::Matched(value) => value.map(Box::new),
            Parsed::NoMatch => return Err(ctx.expected_production("<value expression>")),
        };
    }
    let rparen = ctx.expect(SyntaxKind::Rparen)?;
    let lexeme = Lexeme::new(fn_token.lexeme.start(), rparen.lexeme.end());

    Ok(Parsed::Matched(ctx.build(|| {
        ValueExpressionPrimary::SetFunction(SetFunction {
            kind,
            lexeme,
            star,
            distinct,
            operand,
        })
    })))
}

// <case expression> ::= <case abbreviation> | <case specification>
//
// <case abbreviation> ::=
//     NULLIF <left paren> <value expression> <comma> <value expression> <right paren>
//     | COALESCE <left paren> <value expression>
//       { <comma> <value expression> }... <right paren>
fn parse_case_expression(ctx: &mut ParseContext) -> Production<ValueExpressionPrimary> {
    let case_token = ctx.cur();
    match case_token.kind {
        SyntaxKind::Coalesce => {
            ctx.advance();
            ctx.expect(SyntaxKind::Lparen)?;
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
            let rparen = ctx.expect(SyntaxKind::Rparen)?;
            let lexeme = Lexeme::new(case_token.lexeme.start(), rparen.lexeme.end());
            Ok(Parsed::Matched(ctx.build(|| {
                ValueExpressionPrimary::CaseExpression(CaseExpression::Coalesce { lexeme, values })
            })))
        }
        SyntaxKind::Nullif => {
            ctx.advance();
            ctx.expect(SyntaxKind::Lparen)?;
            let left = require_value_expression(ctx)?;
            ctx.expect(SyntaxKind::Comma)?;
            let right = require_value_expression(ctx)?;
            let rparen = ctx.expect(SyntaxKind::Rparen)?;
            let lexeme = Lexeme::new(case_token.lexeme.start(), rparen.lexeme.end());
            Ok(Parsed::Matched(left.zip(right).map(|(left, right)| {
                ValueExpressionPrimary::CaseExpression(CaseExpression::Nullif {
                    lexeme,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            })))
        }
        SyntaxKind::Case => {
            ctx.advance();
            if ctx.accept(SyntaxKind::When).is_some() {
                parse_searched_case(ctx, case_token.lexeme)
            } else {
                parse_simple_case(ctx, case_token.lexeme)
            }
        }
        _ => Ok(Parsed::NoMatch),
    }
}

// <simple case> ::=
//     CASE <case operand> <simple when clause>... [ <else clause> ] END
//
// <simple when clause> ::= WHEN <when operand> THEN <result>
fn parse_simple_case(
    ctx: &mut ParseContext,
    case_start: Lexeme,
) -> Production<ValueExpressionPrimary> {
    let operand = require_value_expression(ctx)?;
    ctx.expect(SyntaxKind::When)?;

    let mut when_clauses = Vec::new();
    loop {
        let when_operand = require_value_expression(ctx)?;
        ctx.expect(SyntaxKind::Then)?;
        let result = require_value_expression(ctx)?;
        if let Some((operand, result)) = when_operand.zip(result) {
            when_clauses.push(SimpleWhenClause { operand, result });
        }
        if ctx.accept(SyntaxKind::When).is_none() {
            break;
        }
    }

    let mut else_value = None;
    if ctx.accept(SyntaxKind::Else).is_some() {
        else_value = require_value_expression(ctx)?.map(Box::new);
    }
    let end = ctx.expect(SyntaxKind::End)?;
    let lexeme = Lexeme::new(case_start.start(), end.lexeme.end());

    Ok(Parsed::Matched(operand.map(|operand| {
        ValueExpressionPrimary::CaseExpression(CaseExpression::SimpleCase(SimpleCaseExpression {
            lexeme,
            operand: Box::new(operand),
            when_clauses,
            else_value,
        }))
    })))
}

// <searched case> ::=
//     CASE <searched when clause>... [ <else clause> ] END
//
// <searched when clause> ::= WHEN <search condition> THEN <result>
//
// The first WHEN has already been consumed on entry.
fn parse_searched_case(
    ctx: &mut ParseContext,
    case_start: Lexeme,
) -> Production<ValueExpressionPrimary> {
    let mut when_clauses = Vec::new();
    loop {
        let condition = match parse_search_condition(ctx)? {
            Parsed::Matched(condition) => condition,
            Parsed::NoMatch => return Err(ctx.expected_production("<search condition>")),
        };
        ctx.expect(SyntaxKind::Then)?;
        let result = require_value_expression(ctx)?;
        if let Some((condition, result)) = condition.zip(result) {
            when_clauses.push(SearchedWhenClause { condition, result });
        }
        if ctx.accept(SyntaxKind::When).is_none() {
            break;
        }
    }

    let mut else_value = None;
    if ctx.accept(SyntaxKind::Else).is_some() {
        else_value = require_value_expression(ctx)?.map(Box::new);
    }
    let end = ctx.expect(SyntaxKind::End)?;
    let lexeme = Lexeme::new(case_start.start(), end.lexeme.end());

    Ok(Parsed::Matched(ctx.build(|| {
        ValueExpressionPrimary::CaseExpression(CaseExpression::SearchedCase(
            SearchedCaseExpression {
                lexeme,
                when_clauses,
                else_value,
            },
        ))
    })))
}

// <cast specification> ::=
//     CAST <left paren> <cast operand> AS <cast target> <right paren>
//
// <cast operand> ::= <value expression> | NULL
fn parse_cast_specification(ctx: &mut ParseContext) -> Production<ValueExpressionPrimary> {
    let cast_token = ctx.cur();
    ctx.advance();
    ctx.expect(SyntaxKind::Lparen)?;

    let mut operand = None;
    if ctx.accept(SyntaxKind::Null).is_none() {
        operand = require_value_expression(ctx)?.map(Box::new);
    }
    ctx.expect(SyntaxKind::As)?;
    let target = match parse_data_type(ctx)? {
        Parsed::Matched(target) => target,
        Parsed::NoMatch => return Err(ctx.expected_production("<data type>")),
    };
    let rparen = ctx.expect(SyntaxKind::Rparen)?;
    let lexeme = Lexeme::new(cast_token.lexeme.start(), rparen.lexeme.end());

    Ok(Parsed::Matched(target.map(|target| {
        ValueExpressionPrimary::CastSpecification(CastSpecification {
            lexeme,
            operand,
            target,
        })
    })))
}

// <numeric value function> ::=
//     <position expression> | <extract expression> | <length expression>
pub(crate) fn parse_numeric_function(ctx: &mut ParseContext) -> Production<NumericFunction> {
    match ctx.cur().kind {
        SyntaxKind::Position => {
            // POSITION <left paren> <to find> IN <subject> <right paren>
            ctx.advance();
            ctx.expect(SyntaxKind::Lparen)?;
            let to_find = require_character_value_expression(ctx)?;
            ctx.expect(SyntaxKind::In)?;
            let subject = require_character_value_expression(ctx)?;
            ctx.expect(SyntaxKind::Rparen)?;
            Ok(Parsed::Matched(to_find.zip(subject).map(
                |(to_find, subject)| NumericFunction::Position {
                    to_find: Box::new(to_find),
                    subject: Box::new(subject),
                },
            )))
        }
        SyntaxKind::Extract => {
            // EXTRACT <left paren> <extract field> FROM <extract source>
            // <right paren>
            ctx.advance();
            ctx.expect(SyntaxKind::Lparen)?;
            let field = match ctx.cur().kind {
                SyntaxKind::Year => IntervalUnit::Year,
                SyntaxKind::Month => IntervalUnit::Month,
                SyntaxKind::Day => IntervalUnit::Day,
                SyntaxKind::Hour => IntervalUnit::Hour,
                SyntaxKind::Minute => IntervalUnit::Minute,
                SyntaxKind::Second => IntervalUnit::Second,
                _ => return Err(ctx.expected_production("<extract field>")),
            };
            ctx.advance();
            ctx.expect(SyntaxKind::From)?;
            // The source is a datetime or an interval value expression.
            let source = match parse_datetime_value_expression(ctx)? {
                Parsed::Matched(datetime) => {
                    datetime.map(|datetime| Box::new(ValueExpression::Datetime(datetime)))
                }
                Parsed::NoMatch => match parse_interval_value_expression(ctx)? {
                    Parsed::Matched(interval) => {
                        interval.map(|interval| Box::new(ValueExpression::Interval(interval)))
                    }
                    Parsed::NoMatch => {
                        return Err(ctx.expected_production("<extract source>"));
                    }
                },
            };
            ctx.expect(SyntaxKind::Rparen)?;
            Ok(Parsed::Matched(
                source.map(|source| NumericFunction::Extract { field, source }),
            ))
        }
        SyntaxKind::CharLength | SyntaxKind::CharacterLength => {
            let operand = parse_length_operand(ctx)?;
            Ok(Parsed::Matched(
                operand.map(|operand| NumericFunction::CharLength { operand }),
            ))
        }
        SyntaxKind::OctetLength => {
            let operand = parse_length_operand(ctx)?;
            Ok(Parsed::Matched(
                operand.map(|operand| NumericFunction::OctetLength { operand }),
            ))
        }
        SyntaxKind::BitLength => {
            let operand = parse_length_operand(ctx)?;
            Ok(Parsed::Matched(
                operand.map(|operand| NumericFunction::BitLength { operand }),
            ))
        }
        _ => Ok(Parsed::NoMatch),
    }
}

fn parse_length_operand(
    ctx: &mut ParseContext,
) -> Result<Option<Box<ValueExpression>>, SyntaxError> {
    ctx.advance();
    ctx.expect(SyntaxKind::Lparen)?;
    let operand = require_character_value_expression(ctx)?;
    ctx.expect(SyntaxKind::Rparen)?;
    Ok(operand.map(Box::new))
}

// <string value function> ::=
//     <character substring function> | <fold> | <form-of-use conversion>
//     | <character translation> | <trim function>
pub(crate) fn parse_string_function(ctx: &mut ParseContext) -> Production<StringFunction> {
    match ctx.cur().kind {
        SyntaxKind::Upper => {
            let operand = parse_fold_operand(ctx)?;
            Ok(Parsed::Matched(
                operand.map(|operand| StringFunction::Upper { operand }),
            ))
        }
        SyntaxKind::Lower => {
            let operand = parse_fold_operand(ctx)?;
            Ok(Parsed::Matched(
                operand.map(|operand| StringFunction::Lower { operand }),
            ))
        }
        SyntaxKind::Substring => {
            // SUBSTRING <left paren> <operand> FROM <start position>
            // [ FOR <string length> ] <right paren>
            ctx.advance();
            ctx.expect(SyntaxKind::Lparen)?;
            let operand = require_character_value_expression(ctx)?;
            ctx.expect(SyntaxKind::From)?;
            let start_position = require_numeric_value_expression(ctx)?;
            let mut for_length = None;
            if ctx.accept(SyntaxKind::For).is_some() {
                for_length = require_numeric_value_expression(ctx)?.map(Box::new);
            }
            ctx.expect(SyntaxKind::Rparen)?;
            Ok(Parsed::Matched(operand.zip(start_position).map(
                |(operand, start_position)| StringFunction::Substring {
                    operand: Box::new(operand),
                    start_position: Box::new(start_position),
                    for_length,
                },
            )))
        }
        SyntaxKind::Convert => {
            // CONVERT <left paren> <operand> USING <conversion name>
            // <right paren>
            ctx.advance();
            ctx.expect(SyntaxKind::Lparen)?;
            let operand = require_character_value_expression(ctx)?;
            ctx.expect(SyntaxKind::Using)?;
            let conversion_name = ctx.expect_identifier()?;
            ctx.expect(SyntaxKind::Rparen)?;
            Ok(Parsed::Matched(operand.map(|operand| {
                StringFunction::Convert {
                    operand: Box::new(operand),
                    conversion_name,
                }
            })))
        }
        SyntaxKind::Translate => {
            ctx.advance();
            ctx.expect(SyntaxKind::Lparen)?;
            let operand = require_character_value_expression(ctx)?;
            ctx.expect(SyntaxKind::Using)?;
            let translation_name = ctx.expect_identifier()?;
            ctx.expect(SyntaxKind::Rparen)?;
            Ok(Parsed::Matched(operand.map(|operand| {
                StringFunction::Translate {
                    operand: Box::new(operand),
                    translation_name,
                }
            })))
        }
        SyntaxKind::Trim => {
            // TRIM <left paren> [ [ <trim specification> ] [ <trim character> ]
            // FROM ] <trim source> <right paren>
            ctx.advance();
            ctx.expect(SyntaxKind::Lparen)?;
            let mut specification = TrimSpecification::Both;
            let mut explicit_spec = false;
            match ctx.cur().kind {
                SyntaxKind::Leading => {
                    specification = TrimSpecification::Leading;
                    explicit_spec = true;
                    ctx.advance();
                }
                SyntaxKind::Trailing => {
                    specification = TrimSpecification::Trailing;
                    explicit_spec = true;
                    ctx.advance();
                }
                SyntaxKind::Both => {
                    explicit_spec = true;
                    ctx.advance();
                }
                _ => {}
            }
            let mut trim_character = None;
            if explicit_spec {
                trim_character = require_character_value_expression(ctx)?.map(Box::new);
                ctx.expect(SyntaxKind::From)?;
            }
            let operand = require_character_value_expression(ctx)?;
            ctx.expect(SyntaxKind::Rparen)?;
            Ok(Parsed::Matched(operand.map(|operand| {
                StringFunction::Trim {
                    specification,
                    trim_character,
                    operand: Box::new(operand),
                }
            })))
        }
        _ => Ok(Parsed::NoMatch),
    }
}

fn parse_fold_operand(
    ctx: &mut ParseContext,
) -> Result<Option<Box<ValueExpression>>, SyntaxError> {
    ctx.advance();
    ctx.expect(SyntaxKind::Lparen)?;
    let operand = require_character_value_expression(ctx)?;
    ctx.expect(SyntaxKind::Rparen)?;
    Ok(operand.map(Box::new))
}

// <datetime value function> ::=
//     CURRENT_DATE
//     | CURRENT_TIME [ <left paren> <time precision> <right paren> ]
//     | CURRENT_TIMESTAMP [ <left paren> <timestamp precision> <right paren> ]
pub(crate) fn parse_datetime_function(ctx: &mut ParseContext) -> Production<DatetimeFunction> {
    let kind = match ctx.cur().kind {
        SyntaxKind::CurrentDate => {
            ctx.advance();
            return Ok(Parsed::Matched(ctx.build(|| DatetimeFunction {
                kind: DatetimeFunctionKind::CurrentDate,
                precision: None,
            })));
        }
        SyntaxKind::CurrentTime => DatetimeFunctionKind::CurrentTime,
        SyntaxKind::CurrentTimestamp => DatetimeFunctionKind::CurrentTimestamp,
        _ => return Ok(Parsed::NoMatch),
    };
    ctx.advance();
    let mut precision = None;
    if ctx.accept(SyntaxKind::Lparen).is_some() {
        precision = Some(ctx.expect_unsigned_integer()?);
        ctx.expect(SyntaxKind::Rparen)?;
    }
    Ok(Parsed::Matched(
        ctx.build(|| DatetimeFunction { kind, precision }),
    ))
}

fn require_value_expression(
    ctx: &mut ParseContext,
) -> Result<Option<ValueExpression>, SyntaxError> {
    match parse_value_expression(ctx)? {
        Parsed::Matched(value) => Ok(value),
        Parsed::NoMatch => Err(ctx.expected_production("<value expression>")),
    }
}

fn require_character_value_expression(
    ctx: &mut ParseContext,
) -> Result<Option<ValueExpression>, SyntaxError> {
    match parse_character_value_expression(ctx)? {
        Parsed::Matched(value) => Ok(value.map(ValueExpression::Character)),
        Parsed::NoMatch => Err(ctx.expected_production("<character value expression>")),
    }
}

fn require_numeric_value_expression(
    ctx: &mut ParseContext,
) -> Result<Option<ValueExpression>, SyntaxError> {
    match parse_numeric_expression(ctx)? {
        Parsed::Matched(value) => Ok(value.map(ValueExpression::Numeric)),
        Parsed::NoMatch => Err(ctx.expected_production("<numeric value expression>")),
    }
}
