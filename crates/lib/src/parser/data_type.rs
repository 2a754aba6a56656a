//! Data type descriptors.

use crate::ast::data_type::{
    ApproximateNumericKind, CharStringKind, DataType, DatetimeKind, ExactNumericKind,
};
use crate::errors::SyntaxError;
use crate::lexeme::Lexeme;
use crate::parser::{Parsed, ParseContext, Production, parse_interval_qualifier};
use crate::syntax::SyntaxKind;

// <data type> ::=
//     <character string type> [ CHARACTER SET <character set specification> ]
//     | <national character string type>
//     | <bit string type>
//     | <numeric type>
//     | <datetime type>
//     | <interval type>
pub(crate) fn parse_data_type(ctx: &mut ParseContext) -> Production<DataType> {
    let data_type = match ctx.cur().kind {
        SyntaxKind::Char | SyntaxKind::Character => {
            ctx.advance();
            let kind = if ctx.accept(SyntaxKind::Varying).is_some() {
                CharStringKind::Varchar
            } else {
                CharStringKind::Char
            };
            let size = parse_optional_length(ctx)?;
            let charset = parse_optional_charset(ctx)?;
            DataType::CharString {
                kind,
                size,
                charset,
            }
        }
        SyntaxKind::Varchar => {
            ctx.advance();
            let size = parse_optional_length(ctx)?;
            let charset = parse_optional_charset(ctx)?;
            DataType::CharString {
                kind: CharStringKind::Varchar,
                size,
                charset,
            }
        }
        SyntaxKind::National => {
            ctx.advance();
            if ctx.accept(SyntaxKind::Char).is_none() {
                ctx.expect(SyntaxKind::Character)?;
            }
            let kind = if ctx.accept(SyntaxKind::Varying).is_some() {
                CharStringKind::NVarchar
            } else {
                CharStringKind::NChar
            };
            let size = parse_optional_length(ctx)?;
            DataType::CharString {
                kind,
                size,
                charset: None,
            }
        }
        SyntaxKind::Nchar => {
            ctx.advance();
            let kind = if ctx.accept(SyntaxKind::Varying).is_some() {
                CharStringKind::NVarchar
            } else {
                CharStringKind::NChar
            };
            let size = parse_optional_length(ctx)?;
            DataType::CharString {
                kind,
                size,
                charset: None,
            }
        }
        SyntaxKind::Bit => {
            ctx.advance();
            let varying = ctx.accept(SyntaxKind::Varying).is_some();
            let size = parse_optional_length(ctx)?;
            DataType::BitString { varying, size }
        }
        SyntaxKind::Varbit => {
            ctx.advance();
            let size = parse_optional_length(ctx)?;
            DataType::BitString {
                varying: true,
                size,
            }
        }
        SyntaxKind::Numeric | SyntaxKind::Decimal | SyntaxKind::Dec => {
            let kind = if ctx.at(SyntaxKind::Numeric) {
                ExactNumericKind::Numeric
            } else {
                ExactNumericKind::Decimal
            };
            ctx.advance();
            let (precision, scale) = parse_optional_precision_scale(ctx)?;
            DataType::ExactNumeric {
                kind,
                precision,
                scale,
            }
        }
        SyntaxKind::Int | SyntaxKind::Integer => {
            ctx.advance();
            DataType::ExactNumeric {
                kind: ExactNumericKind::Int,
                precision: None,
                scale: None,
            }
        }
        SyntaxKind::Smallint => {
            ctx.advance();
            DataType::ExactNumeric {
                kind: ExactNumericKind::SmallInt,
                precision: None,
                scale: None,
            }
        }
        SyntaxKind::Float => {
            ctx.advance();
            let precision = parse_optional_length(ctx)?;
            DataType::ApproximateNumeric {
                kind: ApproximateNumericKind::Float,
                precision,
            }
        }
        SyntaxKind::Real => {
            ctx.advance();
            DataType::ApproximateNumeric {
                kind: ApproximateNumericKind::Real,
                precision: None,
            }
        }
        SyntaxKind::Double => {
            ctx.advance();
            ctx.accept(SyntaxKind::Precision);
            DataType::ApproximateNumeric {
                kind: ApproximateNumericKind::Double,
                precision: None,
            }
        }
        SyntaxKind::Date => {
            ctx.advance();
            DataType::Datetime {
                kind: DatetimeKind::Date,
                precision: None,
                with_tz: false,
            }
        }
        SyntaxKind::Time => {
            ctx.advance();
            let precision = parse_optional_length(ctx)?;
            let with_tz = parse_optional_with_time_zone(ctx)?;
            DataType::Datetime {
                kind: DatetimeKind::Time,
                precision,
                with_tz,
            }
        }
        SyntaxKind::Timestamp => {
            ctx.advance();
            let precision = parse_optional_length(ctx)?;
            let with_tz = parse_optional_with_time_zone(ctx)?;
            DataType::Datetime {
                kind: DatetimeKind::Timestamp,
                precision,
                with_tz,
            }
        }
        SyntaxKind::Interval => {
            ctx.advance();
            match parse_interval_qualifier(ctx)? {
                Parsed::Matched(qualifier) => match qualifier {
                    Some(qualifier) => DataType::Interval(qualifier),
                    // Construction disabled; the qualifier tokens were
                    // consumed.
                    None => return Ok(Parsed::Matched(None)),
                },
                Parsed::NoMatch => {
                    return Err(ctx.expected_production("<interval qualifier>"));
                }
            }
        }
        _ => return Ok(Parsed::NoMatch),
    };
    Ok(Parsed::Matched(ctx.build(|| data_type)))
}

fn parse_optional_length(ctx: &mut ParseContext) -> Result<Option<usize>, SyntaxError> {
    if ctx.accept(SyntaxKind::Lparen).is_none() {
        return Ok(None);
    }
    let length = ctx.expect_unsigned_integer()?;
    ctx.expect(SyntaxKind::Rparen)?;
    Ok(Some(length))
}

fn parse_optional_precision_scale(
    ctx: &mut ParseContext,
) -> Result<(Option<usize>, Option<usize>), SyntaxError> {
    if ctx.accept(SyntaxKind::Lparen).is_none() {
        return Ok((None, None));
    }
    let precision = ctx.expect_unsigned_integer()?;
    let mut scale = None;
    if ctx.accept(SyntaxKind::Comma).is_some() {
        scale = Some(ctx.expect_unsigned_integer()?);
    }
    ctx.expect(SyntaxKind::Rparen)?;
    Ok((Some(precision), scale))
}

fn parse_optional_charset(ctx: &mut ParseContext) -> Result<Option<Lexeme>, SyntaxError> {
    if ctx.accept(SyntaxKind::Character).is_none() {
        return Ok(None);
    }
    ctx.expect(SyntaxKind::Set)?;
    Ok(Some(ctx.expect_identifier()?))
}

fn parse_optional_with_time_zone(ctx: &mut ParseContext) -> Result<bool, SyntaxError> {
    if ctx.accept(SyntaxKind::With).is_none() {
        return Ok(false);
    }
    ctx.expect(SyntaxKind::Time)?;
    ctx.expect(SyntaxKind::Zone)?;
    Ok(true)
}
