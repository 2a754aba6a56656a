//! Column definitions, default clauses, constraints and interval
//! qualifiers.

use crate::ast::column::{ColumnDefinition, DefaultDescriptor, DefaultKind};
use crate::ast::constraint::{
    Constraint, ConstraintKind, ForeignKeyConstraint, MatchKind, ReferentialAction,
};
use crate::ast::data_type::{DatetimeField, IntervalQualifier, IntervalUnit};
use crate::ast::predicate::SearchCondition;
use crate::ast::value::{UnsignedValueSpecification, UvsKind};
use crate::errors::SyntaxError;
use crate::lexeme::Lexeme;
use crate::parser::data_type::parse_data_type;
use crate::parser::predicate::parse_search_condition;
use crate::parser::{Parsed, ParseContext, Production};
use crate::syntax::SyntaxKind;

// <column definition> ::=
//     <column name> <data type>
//     [ <default clause> ]
//     [ <column constraint definition>... ]
//     [ <collate clause> ]
pub(crate) fn parse_column_definition(ctx: &mut ParseContext) -> Production<ColumnDefinition> {
    if !ctx.at(SyntaxKind::Identifier) {
        return Ok(Parsed::NoMatch);
    }
    let name = ctx.expect_identifier()?;
    let data_type = match parse_data_type(ctx)? {
        Parsed::Matched(data_type) => data_type,
        Parsed::NoMatch => return Err(ctx.expected_production("<data type>")),
    };

    let mut default_descriptor = None;
    if ctx.at(SyntaxKind::Default) {
        default_descriptor = parse_default_clause(ctx)?;
    }

    let mut constraints = Vec::new();
    loop {
        match parse_column_constraint(ctx)? {
            Some(constraint) => {
                if let Some(constraint) = constraint {
                    constraints.push(constraint);
                }
            }
            None => break,
        }
    }

    let mut collate = None;
    if ctx.accept(SyntaxKind::Collate).is_some() {
        collate = Some(ctx.expect_identifier()?);
    }

    Ok(Parsed::Matched(data_type.map(|data_type| ColumnDefinition {
        name,
        data_type,
        default_descriptor,
        constraints,
        collate,
    })))
}

// <default clause> ::= DEFAULT <default option>
//
// <default option> ::=
//     <literal> | <datetime value function>
//     | USER | CURRENT_USER | SESSION_USER | SYSTEM_USER | NULL
pub(crate) fn parse_default_clause(
    ctx: &mut ParseContext,
) -> Result<Option<DefaultDescriptor>, SyntaxError> {
    ctx.expect(SyntaxKind::Default)?;
    let token = ctx.cur();
    let kind = match token.kind {
        SyntaxKind::User => DefaultKind::User,
        SyntaxKind::CurrentUser => DefaultKind::CurrentUser,
        SyntaxKind::SessionUser => DefaultKind::SessionUser,
        SyntaxKind::SystemUser => DefaultKind::SystemUser,
        SyntaxKind::Null => DefaultKind::Null,
        SyntaxKind::CurrentDate => DefaultKind::CurrentDate,
        SyntaxKind::CurrentTime | SyntaxKind::CurrentTimestamp => {
            let kind = if token.kind == SyntaxKind::CurrentTime {
                DefaultKind::CurrentTime
            } else {
                DefaultKind::CurrentTimestamp
            };
            ctx.advance();
            let mut precision = None;
            if ctx.accept(SyntaxKind::Lparen).is_some() {
                precision = Some(ctx.expect_unsigned_integer()?);
                ctx.expect(SyntaxKind::Rparen)?;
            }
            return Ok(ctx.build(|| DefaultDescriptor {
                kind,
                literal: None,
                precision,
            }));
        }
        kind if kind.is_literal() => {
            let literal_kind = match kind {
                SyntaxKind::LiteralCharacterString => UvsKind::CharacterString,
                SyntaxKind::LiteralNationalCharacterString => UvsKind::NationalCharacterString,
                SyntaxKind::LiteralBitString => UvsKind::BitString,
                SyntaxKind::LiteralHexString => UvsKind::HexString,
                _ => UvsKind::UnsignedNumeric,
            };
            ctx.advance();
            return Ok(ctx.build(|| DefaultDescriptor {
                kind: DefaultKind::Literal,
                literal: Some(UnsignedValueSpecification {
                    kind: literal_kind,
                    lexeme: token.lexeme,
                }),
                precision: None,
            }));
        }
        _ => return Err(ctx.expected_production("<default option>")),
    };
    ctx.advance();
    Ok(ctx.build(|| DefaultDescriptor {
        kind,
        literal: None,
        precision: None,
    }))
}

// <column constraint definition> ::=
//     [ <constraint name definition> ] <column constraint>
//
// <column constraint> ::=
//     NOT NULL | UNIQUE | PRIMARY KEY
//     | <references specification> | <check constraint definition>
//
// Returns `Ok(None)` when the current token does not begin a constraint.
fn parse_column_constraint(
    ctx: &mut ParseContext,
) -> Result<Option<Option<Constraint>>, SyntaxError> {
    let mut name = None;
    if ctx.at(SyntaxKind::Constraint) {
        ctx.advance();
        name = Some(ctx.expect_identifier()?);
    }
    let kind = match ctx.cur().kind {
        SyntaxKind::Not => {
            ctx.advance();
            ctx.expect(SyntaxKind::Null)?;
            ConstraintKind::NotNull
        }
        SyntaxKind::Unique => {
            ctx.advance();
            ConstraintKind::Unique {
                columns: Vec::new(),
            }
        }
        SyntaxKind::Primary => {
            ctx.advance();
            ctx.expect(SyntaxKind::Key)?;
            ConstraintKind::PrimaryKey {
                columns: Vec::new(),
            }
        }
        SyntaxKind::References => {
            ctx.advance();
            let foreign_key = parse_references_specification(ctx, Vec::new())?;
            ConstraintKind::ForeignKey(foreign_key)
        }
        SyntaxKind::Check => {
            ctx.advance();
            let condition = parse_check_condition(ctx)?;
            match condition {
                Some(condition) => ConstraintKind::Check(condition),
                None => {
                    // Construction disabled; tokens were consumed.
                    return Ok(Some(None));
                }
            }
        }
        _ => {
            // A bare CONSTRAINT name must introduce a constraint.
            if name.is_some() {
                return Err(ctx.expected_production("<column constraint>"));
            }
            return Ok(None);
        }
    };
    Ok(Some(ctx.build(|| Constraint { name, kind })))
}

// <table constraint definition> ::=
//     [ <constraint name definition> ] <table constraint>
//
// <table constraint> ::=
//     <unique constraint definition>
//     | <referential constraint definition>
//     | <check constraint definition>
pub(crate) fn parse_table_constraint(
    ctx: &mut ParseContext,
) -> Result<Option<Constraint>, SyntaxError> {
    let mut name = None;
    if ctx.at(SyntaxKind::Constraint) {
        ctx.advance();
        name = Some(ctx.expect_identifier()?);
    }
    let kind = match ctx.cur().kind {
        SyntaxKind::Unique => {
            ctx.advance();
            let columns = parse_column_name_list(ctx)?;
            ConstraintKind::Unique { columns }
        }
        SyntaxKind::Primary => {
            ctx.advance();
            ctx.expect(SyntaxKind::Key)?;
            let columns = parse_column_name_list(ctx)?;
            ConstraintKind::PrimaryKey { columns }
        }
        SyntaxKind::Foreign => {
            ctx.advance();
            ctx.expect(SyntaxKind::Key)?;
            let columns = parse_column_name_list(ctx)?;
            ctx.expect(SyntaxKind::References)?;
            let foreign_key = parse_references_specification(ctx, columns)?;
            ConstraintKind::ForeignKey(foreign_key)
        }
        SyntaxKind::Check => {
            ctx.advance();
            let condition = parse_check_condition(ctx)?;
            match condition {
                Some(condition) => ConstraintKind::Check(condition),
                None => return Ok(None),
            }
        }
        _ => {
            return Err(ctx.expected_any(&[
                SyntaxKind::Unique,
                SyntaxKind::Primary,
                SyntaxKind::Foreign,
                SyntaxKind::Check,
            ]));
        }
    };
    Ok(ctx.build(|| Constraint { name, kind }))
}

// <references specification> ::=
//     <referenced table and columns>
//     [ MATCH <match type> ] [ <referential triggered action> ]
//
// The REFERENCES keyword has already been consumed.
fn parse_references_specification(
    ctx: &mut ParseContext,
    columns: Vec<Lexeme>,
) -> Result<ForeignKeyConstraint, SyntaxError> {
    let referenced_table = ctx.expect_identifier()?;
    let mut referenced_columns = Vec::new();
    if ctx.at(SyntaxKind::Lparen) {
        referenced_columns = parse_column_name_list(ctx)?;
    }

    let mut match_kind = None;
    if ctx.accept(SyntaxKind::Match).is_some() {
        match_kind = Some(if ctx.accept(SyntaxKind::Full).is_some() {
            MatchKind::Full
        } else if ctx.accept(SyntaxKind::Partial).is_some() {
            MatchKind::Partial
        } else {
            return Err(ctx.expected_any(&[SyntaxKind::Full, SyntaxKind::Partial]));
        });
    }

    let mut on_update = None;
    let mut on_delete = None;
    while ctx.accept(SyntaxKind::On).is_some() {
        if ctx.accept(SyntaxKind::Update).is_some() {
            on_update = Some(parse_referential_action(ctx)?);
        } else if ctx.accept(SyntaxKind::Delete).is_some() {
            on_delete = Some(parse_referential_action(ctx)?);
        } else {
            return Err(ctx.expected_any(&[SyntaxKind::Update, SyntaxKind::Delete]));
        }
    }

    Ok(ForeignKeyConstraint {
        columns,
        referenced_table,
        referenced_columns,
        match_kind,
        on_update,
        on_delete,
    })
}

// <referential action> ::=
//     CASCADE | SET NULL | SET DEFAULT | NO ACTION
fn parse_referential_action(ctx: &mut ParseContext) -> Result<ReferentialAction, SyntaxError> {
    if ctx.accept(SyntaxKind::Cascade).is_some() {
        Ok(ReferentialAction::Cascade)
    } else if ctx.accept(SyntaxKind::Set).is_some() {
        if ctx.accept(SyntaxKind::Null).is_some() {
            Ok(ReferentialAction::SetNull)
        } else {
            ctx.expect(SyntaxKind::Default)?;
            Ok(ReferentialAction::SetDefault)
        }
    } else if ctx.accept(SyntaxKind::No).is_some() {
        ctx.expect(SyntaxKind::Action)?;
        Ok(ReferentialAction::NoAction)
    } else {
        Err(ctx.expected_any(&[SyntaxKind::Cascade, SyntaxKind::Set, SyntaxKind::No]))
    }
}

fn parse_check_condition(
    ctx: &mut ParseContext,
) -> Result<Option<SearchCondition>, SyntaxError> {
    ctx.expect(SyntaxKind::Lparen)?;
    let condition = match parse_search_condition(ctx)? {
        Parsed::Matched(condition) => condition,
        Parsed::NoMatch => return Err(ctx.expected_production("<search condition>")),
    };
    ctx.expect(SyntaxKind::Rparen)?;
    Ok(condition)
}

fn parse_column_name_list(ctx: &mut ParseContext) -> Result<Vec<Lexeme>, SyntaxError> {
    ctx.expect(SyntaxKind::Lparen)?;
    let mut columns = Vec::new();
    loop {
        columns.push(ctx.expect_identifier()?);
        if ctx.accept(SyntaxKind::Comma).is_none() {
            break;
        }
    }
    ctx.expect(SyntaxKind::Rparen)?;
    Ok(columns)
}

// <interval qualifier> ::=
//     <start field> TO <end field>
//     | <single datetime field>
//
// <start field> ::=
//     <non-second datetime field>
//     [ <left paren> <interval leading field precision> <right paren> ]
//
// <end field> ::=
//     <non-second datetime field>
//     | SECOND [ <left paren> <interval fractional seconds precision>
//       <right paren> ]
pub(crate) fn parse_interval_qualifier(
    ctx: &mut ParseContext,
) -> Production<IntervalQualifier> {
    let Some(start_unit) = interval_unit(ctx.cur().kind) else {
        return Ok(Parsed::NoMatch);
    };
    ctx.advance();

    let mut start_precision = None;
    let mut start_fractional = None;
    if ctx.accept(SyntaxKind::Lparen).is_some() {
        start_precision = Some(ctx.expect_unsigned_integer()?);
        // SECOND may carry a second, fractional precision.
        if start_unit == IntervalUnit::Second && ctx.accept(SyntaxKind::Comma).is_some() {
            start_fractional = Some(ctx.expect_unsigned_integer()?);
        }
        ctx.expect(SyntaxKind::Rparen)?;
    }

    let mut end = None;
    if ctx.accept(SyntaxKind::To).is_some() {
        let Some(end_unit) = interval_unit(ctx.cur().kind) else {
            return Err(ctx.expected_production("<end field>"));
        };
        ctx.advance();
        let mut end_fractional = None;
        if end_unit == IntervalUnit::Second && ctx.accept(SyntaxKind::Lparen).is_some() {
            end_fractional = Some(ctx.expect_unsigned_integer()?);
            ctx.expect(SyntaxKind::Rparen)?;
        }
        end = Some(DatetimeField {
            unit: end_unit,
            precision: None,
            fractional_precision: end_fractional,
        });
    }

    Ok(Parsed::Matched(ctx.build(|| IntervalQualifier {
        start: DatetimeField {
            unit: start_unit,
            precision: start_precision,
            fractional_precision: start_fractional,
        },
        end,
    })))
}

fn interval_unit(kind: SyntaxKind) -> Option<IntervalUnit> {
    match kind {
        SyntaxKind::Year => Some(IntervalUnit::Year),
        SyntaxKind::Month => Some(IntervalUnit::Month),
        SyntaxKind::Day => Some(IntervalUnit::Day),
        SyntaxKind::Hour => Some(IntervalUnit::Hour),
        SyntaxKind::Minute => Some(IntervalUnit::Minute),
        SyntaxKind::Second => Some(IntervalUnit::Second),
        _ => None,
    }
}
