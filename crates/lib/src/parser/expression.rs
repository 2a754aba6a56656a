//! Value expressions: the numeric / character / datetime / interval
//! dispatch and the term/factor layering beneath each.

use crate::ast::expression::{
    CharacterFactor, CharacterPrimary, CharacterValueExpression, DatetimeFactor, DatetimePrimary,
    DatetimeTerm, DatetimeValueExpression, IntervalFactor, IntervalPrimary, IntervalTerm,
    IntervalValueExpression, NumericExpression, NumericFactor, NumericOp, NumericPrimary,
    NumericTerm, Sign, TimeZoneSpecifier, ValueExpression,
};
use crate::parser::value::{
    parse_datetime_function, parse_numeric_function, parse_string_function,
    parse_value_expression_primary,
};
use crate::parser::{Parsed, ParseContext, Production, parse_interval_qualifier};
use crate::syntax::SyntaxKind;

// <value expression> ::=
//     <numeric value expression>
//     | <string value expression>
//     | <datetime value expression>
//     | <interval value expression>
//
// The grammar is not decidable on the first token alone. Distinctive
// datetime and interval leads are routed directly; everything else parses
// as a numeric expression first and is re-parsed when the following symbol
// proves the candidate belonged to another family (`||` or COLLATE for
// character expressions, an interval unit or AT for temporal ones).
pub(crate) fn parse_value_expression(ctx: &mut ParseContext) -> Production<ValueExpression> {
    match ctx.cur().kind {
        SyntaxKind::Interval => {
            return Ok(match parse_interval_value_expression(ctx)? {
                Parsed::Matched(interval) => {
                    Parsed::Matched(interval.map(ValueExpression::Interval))
                }
                Parsed::NoMatch => Parsed::NoMatch,
            });
        }
        SyntaxKind::Date
        | SyntaxKind::Time
        | SyntaxKind::Timestamp
        | SyntaxKind::CurrentDate
        | SyntaxKind::CurrentTime
        | SyntaxKind::CurrentTimestamp => {
            return Ok(match parse_datetime_value_expression(ctx)? {
                Parsed::Matched(datetime) => {
                    Parsed::Matched(datetime.map(ValueExpression::Datetime))
                }
                Parsed::NoMatch => Parsed::NoMatch,
            });
        }
        _ => {}
    }

    let start = ctx.state();
    match parse_numeric_expression(ctx)? {
        Parsed::Matched(numeric) => {
            match ctx.cur().kind {
                SyntaxKind::Concatenation | SyntaxKind::Collate => {
                    ctx.restore(start);
                    match parse_character_value_expression(ctx)? {
                        Parsed::Matched(character) => {
                            return Ok(Parsed::Matched(
                                character.map(ValueExpression::Character),
                            ));
                        }
                        Parsed::NoMatch => ctx.restore(start),
                    }
                }
                SyntaxKind::Year
                | SyntaxKind::Month
                | SyntaxKind::Day
                | SyntaxKind::Hour
                | SyntaxKind::Minute
                | SyntaxKind::Second
                | SyntaxKind::At => {
                    ctx.restore(start);
                    match parse_datetime_value_expression(ctx)? {
                        Parsed::Matched(datetime) => {
                            return Ok(Parsed::Matched(datetime.map(ValueExpression::Datetime)));
                        }
                        Parsed::NoMatch => ctx.restore(start),
                    }
                    match parse_interval_value_expression(ctx)? {
                        Parsed::Matched(interval) => {
                            return Ok(Parsed::Matched(interval.map(ValueExpression::Interval)));
                        }
                        Parsed::NoMatch => ctx.restore(start),
                    }
                }
                _ => return Ok(Parsed::Matched(numeric.map(ValueExpression::Numeric))),
            }
            // A reroute attempt failed to improve on the numeric parse;
            // replay it.
            match parse_numeric_expression(ctx)? {
                Parsed::Matched(numeric) => Ok(Parsed::Matched(numeric.map(ValueExpression::Numeric))),
                Parsed::NoMatch => Ok(Parsed::NoMatch),
            }
        }
        Parsed::NoMatch => {
            match parse_character_value_expression(ctx)? {
                Parsed::Matched(character) => {
                    return Ok(Parsed::Matched(character.map(ValueExpression::Character)));
                }
                Parsed::NoMatch => ctx.restore(start),
            }
            match parse_datetime_value_expression(ctx)? {
                Parsed::Matched(datetime) => {
                    return Ok(Parsed::Matched(datetime.map(ValueExpression::Datetime)));
                }
                Parsed::NoMatch => ctx.restore(start),
            }
            Ok(Parsed::NoMatch)
        }
    }
}

// <numeric value expression> ::=
//     <term>
//     | <numeric value expression> <plus sign> <term>
//     | <numeric value expression> <minus sign> <term>
pub(crate) fn parse_numeric_expression(ctx: &mut ParseContext) -> Production<NumericExpression> {
    let left = match parse_numeric_term(ctx)? {
        Parsed::Matched(term) => term,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let mut rest = Vec::new();
    loop {
        let op = match ctx.cur().kind {
            SyntaxKind::Plus => NumericOp::Add,
            SyntaxKind::Minus => NumericOp::Subtract,
            _ => break,
        };
        ctx.advance();
        match parse_numeric_term(ctx)? {
            Parsed::Matched(term) => {
                if let Some(term) = term {
                    rest.push((op, term));
                }
            }
            Parsed::NoMatch => return Err(ctx.expected_production("<numeric term>")),
        }
    }
    Ok(Parsed::Matched(
        left.map(|left| NumericExpression { left, rest }),
    ))
}

// <term> ::=
//     <factor>
//     | <term> <asterisk> <factor>
//     | <term> <solidus> <factor>
fn parse_numeric_term(ctx: &mut ParseContext) -> Production<NumericTerm> {
    let left = match parse_numeric_factor(ctx)? {
        Parsed::Matched(factor) => factor,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let mut rest = Vec::new();
    loop {
        let op = match ctx.cur().kind {
            SyntaxKind::Asterisk => NumericOp::Multiply,
            SyntaxKind::Solidus => NumericOp::Divide,
            _ => break,
        };
        ctx.advance();
        match parse_numeric_factor(ctx)? {
            Parsed::Matched(factor) => {
                if let Some(factor) = factor {
                    rest.push((op, factor));
                }
            }
            Parsed::NoMatch => return Err(ctx.expected_production("<numeric factor>")),
        }
    }
    Ok(Parsed::Matched(left.map(|left| NumericTerm { left, rest })))
}

// <factor> ::= [ <sign> ] <numeric primary>
//
// <numeric primary> ::=
//     <value expression primary>
//     | <numeric value function>
pub(crate) fn parse_numeric_factor(ctx: &mut ParseContext) -> Production<NumericFactor> {
    let start = ctx.state();
    let sign = parse_sign(ctx);

    match parse_value_expression_primary(ctx)? {
        Parsed::Matched(primary) => {
            return Ok(Parsed::Matched(primary.map(|primary| NumericFactor {
                sign,
                primary: NumericPrimary::Value(Box::new(primary)),
            })));
        }
        Parsed::NoMatch => {}
    }
    match parse_numeric_function(ctx)? {
        Parsed::Matched(function) => Ok(Parsed::Matched(function.map(|function| NumericFactor {
            sign,
            primary: NumericPrimary::Function(Box::new(function)),
        }))),
        Parsed::NoMatch => {
            ctx.restore(start);
            Ok(Parsed::NoMatch)
        }
    }
}

fn parse_sign(ctx: &mut ParseContext) -> Option<Sign> {
    if ctx.accept(SyntaxKind::Plus).is_some() {
        Some(Sign::Plus)
    } else if ctx.accept(SyntaxKind::Minus).is_some() {
        Some(Sign::Minus)
    } else {
        None
    }
}

// <character value expression> ::=
//     <concatenation> | <character factor>
//
// <concatenation> ::=
//     <character value expression> <concatenation operator> <character factor>
pub(crate) fn parse_character_value_expression(
    ctx: &mut ParseContext,
) -> Production<CharacterValueExpression> {
    let first = match parse_character_factor(ctx)? {
        Parsed::Matched(factor) => factor,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let mut values: Vec<CharacterFactor> = first.into_iter().collect();
    while ctx.accept(SyntaxKind::Concatenation).is_some() {
        match parse_character_factor(ctx)? {
            Parsed::Matched(factor) => {
                if let Some(factor) = factor {
                    values.push(factor);
                }
            }
            Parsed::NoMatch => return Err(ctx.expected_production("<character factor>")),
        }
    }
    Ok(Parsed::Matched(
        ctx.build(|| CharacterValueExpression { values }),
    ))
}

// <character factor> ::= <character primary> [ <collate clause> ]
fn parse_character_factor(ctx: &mut ParseContext) -> Production<CharacterFactor> {
    let primary = match parse_character_primary(ctx)? {
        Parsed::Matched(primary) => primary,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let mut collation = None;
    if ctx.accept(SyntaxKind::Collate).is_some() {
        collation = Some(ctx.expect_identifier()?);
    }
    Ok(Parsed::Matched(primary.map(|primary| CharacterFactor {
        primary,
        collation,
    })))
}

// <character primary> ::=
//     <value expression primary>
//     | <string value function>
fn parse_character_primary(ctx: &mut ParseContext) -> Production<CharacterPrimary> {
    match parse_value_expression_primary(ctx)? {
        Parsed::Matched(primary) => {
            return Ok(Parsed::Matched(
                primary.map(|primary| CharacterPrimary::Value(Box::new(primary))),
            ));
        }
        Parsed::NoMatch => {}
    }
    match parse_string_function(ctx)? {
        Parsed::Matched(function) => Ok(Parsed::Matched(
            function.map(|function| CharacterPrimary::Function(Box::new(function))),
        )),
        Parsed::NoMatch => Ok(Parsed::NoMatch),
    }
}

// <datetime value expression> ::=
//     <datetime term>
//     | <interval value expression> <plus sign> <datetime term>
//     | <datetime value expression> <plus sign> <interval term>
//     | <datetime value expression> <minus sign> <interval term>
pub(crate) fn parse_datetime_value_expression(
    ctx: &mut ParseContext,
) -> Production<DatetimeValueExpression> {
    let left = match parse_datetime_term(ctx)? {
        Parsed::Matched(term) => term,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let mut op = None;
    let mut right = None;
    match ctx.cur().kind {
        SyntaxKind::Plus => op = Some(NumericOp::Add),
        SyntaxKind::Minus => op = Some(NumericOp::Subtract),
        _ => {}
    }
    if op.is_some() {
        ctx.advance();
        right = match parse_interval_term(ctx)? {
            Parsed::Matched(term) => term.map(Box::new),
            Parsed::NoMatch => return Err(ctx.expected_production("<interval term>")),
        };
    }
    Ok(Parsed::Matched(left.map(|left| DatetimeValueExpression {
        left,
        op,
        right,
    })))
}

// <datetime term> ::= <datetime factor>
fn parse_datetime_term(ctx: &mut ParseContext) -> Production<DatetimeTerm> {
    match parse_datetime_factor(ctx)? {
        Parsed::Matched(factor) => Ok(Parsed::Matched(
            factor.map(|value| DatetimeTerm { value }),
        )),
        Parsed::NoMatch => Ok(Parsed::NoMatch),
    }
}

// <datetime factor> ::= <datetime primary> [ <time zone> ]
//
// <time zone> ::= AT <time zone specifier>
//
// <time zone specifier> ::= LOCAL | TIME ZONE <time zone name>
fn parse_datetime_factor(ctx: &mut ParseContext) -> Production<DatetimeFactor> {
    let primary = match parse_datetime_primary(ctx)? {
        Parsed::Matched(primary) => primary,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let mut time_zone = None;
    if ctx.accept(SyntaxKind::At).is_some() {
        if ctx.accept(SyntaxKind::Local).is_some() {
            time_zone = Some(TimeZoneSpecifier::Local);
        } else if ctx.accept(SyntaxKind::Time).is_some() {
            ctx.expect(SyntaxKind::Zone)?;
            let token = ctx.cur();
            if !token.is_literal() {
                return Err(ctx.expected_production("<time zone name>"));
            }
            ctx.advance();
            time_zone = Some(TimeZoneSpecifier::TimeZone(token.lexeme));
        } else {
            return Err(ctx.expected_any(&[SyntaxKind::Local, SyntaxKind::Time]));
        }
    }
    Ok(Parsed::Matched(primary.map(|primary| DatetimeFactor {
        primary,
        time_zone,
    })))
}

// <datetime primary> ::=
//     <value expression primary>
//     | <datetime value function>
fn parse_datetime_primary(ctx: &mut ParseContext) -> Production<DatetimePrimary> {
    match parse_value_expression_primary(ctx)? {
        Parsed::Matched(primary) => {
            return Ok(Parsed::Matched(
                primary.map(|primary| DatetimePrimary::Value(Box::new(primary))),
            ));
        }
        Parsed::NoMatch => {}
    }
    match parse_datetime_function(ctx)? {
        Parsed::Matched(function) => Ok(Parsed::Matched(
            function.map(DatetimePrimary::Function),
        )),
        Parsed::NoMatch => Ok(Parsed::NoMatch),
    }
}

// <interval value expression> ::=
//     <interval term>
//     | <interval value expression 1> <plus sign> <interval term 1>
//     | <interval value expression 1> <minus sign> <interval term 1>
pub(crate) fn parse_interval_value_expression(
    ctx: &mut ParseContext,
) -> Production<IntervalValueExpression> {
    let left = match parse_interval_term(ctx)? {
        Parsed::Matched(term) => term,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let mut op = None;
    let mut right = None;
    match ctx.cur().kind {
        SyntaxKind::Plus => op = Some(NumericOp::Add),
        SyntaxKind::Minus => op = Some(NumericOp::Subtract),
        _ => {}
    }
    if op.is_some() {
        ctx.advance();
        right = match parse_interval_term(ctx)? {
            Parsed::Matched(term) => term.map(Box::new),
            Parsed::NoMatch => return Err(ctx.expected_production("<interval term>")),
        };
    }
    Ok(Parsed::Matched(left.map(|left| IntervalValueExpression {
        left,
        op,
        right,
    })))
}

// <interval term> ::=
//     <interval factor>
//     | <interval term 2> <asterisk> <factor>
//     | <interval term 2> <solidus> <factor>
fn parse_interval_term(ctx: &mut ParseContext) -> Production<IntervalTerm> {
    let left = match parse_interval_factor(ctx)? {
        Parsed::Matched(factor) => factor,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let mut op = None;
    let mut right = None;
    match ctx.cur().kind {
        SyntaxKind::Asterisk => op = Some(NumericOp::Multiply),
        SyntaxKind::Solidus => op = Some(NumericOp::Divide),
        _ => {}
    }
    if op.is_some() {
        ctx.advance();
        right = match parse_numeric_factor(ctx)? {
            Parsed::Matched(factor) => factor,
            Parsed::NoMatch => return Err(ctx.expected_production("<numeric factor>")),
        };
    }
    Ok(Parsed::Matched(left.map(|left| IntervalTerm {
        left,
        op,
        right,
    })))
}

// <interval factor> ::= [ <sign> ] <interval primary>
fn parse_interval_factor(ctx: &mut ParseContext) -> Production<IntervalFactor> {
    let start = ctx.state();
    let sign = parse_sign(ctx);
    match parse_interval_primary(ctx)? {
        Parsed::Matched(primary) => Ok(Parsed::Matched(primary.map(|primary| IntervalFactor {
            sign,
            primary,
        }))),
        Parsed::NoMatch => {
            ctx.restore(start);
            Ok(Parsed::NoMatch)
        }
    }
}

// <interval primary> ::=
//     <value expression primary> [ <interval qualifier> ]
fn parse_interval_primary(ctx: &mut ParseContext) -> Production<IntervalPrimary> {
    let value = match parse_value_expression_primary(ctx)? {
        Parsed::Matched(value) => value,
        Parsed::NoMatch => return Ok(Parsed::NoMatch),
    };
    let qualifier = match parse_interval_qualifier(ctx)? {
        Parsed::Matched(qualifier) => qualifier,
        Parsed::NoMatch => None,
    };
    Ok(Parsed::Matched(value.map(|value| IntervalPrimary {
        value: Box::new(value),
        qualifier,
    })))
}
