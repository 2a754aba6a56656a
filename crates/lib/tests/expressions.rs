//! Value expression and predicate coverage, including the SQL-92
//! precedence rules NOT > AND > OR.

use pretty_assertions::assert_eq;
use squall_lib::ast::*;
use squall_lib::{ParseCode, parse};

fn parse_select(input: &str) -> SelectStatement {
    let result = parse(input);
    assert_eq!(
        result.code,
        ParseCode::Success,
        "expected {input:?} to parse: {:?}",
        result.errors
    );
    match result.statement {
        Some(Statement::Select(select)) => select,
        other => panic!("expected SELECT, got {other:?}"),
    }
}

fn where_condition(select: &SelectStatement) -> &SearchCondition {
    select
        .query
        .table_expression
        .where_condition
        .as_ref()
        .expect("WHERE clause")
}

fn first_column_value(select: &SelectStatement) -> &ValueExpression {
    select.query.selected_columns[0]
        .value
        .as_ref()
        .expect("selected value")
}

#[test]
fn or_binds_weaker_than_and() {
    let select = parse_select("SELECT a FROM t1 WHERE x = 1 OR y = 2 AND z = 3");
    let condition = where_condition(&select);
    // OR(A, AND(B, C)): two terms, the second an AND chain of two factors.
    assert_eq!(condition.terms.len(), 2);
    assert!(condition.terms[0].and_operand.is_none());
    let second = &condition.terms[1];
    assert!(second.and_operand.is_some());
    assert!(
        second
            .and_operand
            .as_ref()
            .is_some_and(|next| next.and_operand.is_none())
    );
}

#[test]
fn not_binds_to_the_factor() {
    let select = parse_select("SELECT a FROM t1 WHERE NOT x = 1 AND y = 2");
    let condition = where_condition(&select);
    // AND(NOT(A), B): one term, two factors, only the first reversed.
    assert_eq!(condition.terms.len(), 1);
    let term = &condition.terms[0];
    assert!(term.factor.reverse_op);
    let next = term.and_operand.as_ref().expect("AND operand");
    assert!(!next.factor.reverse_op);
}

#[test]
fn and_chains_stay_in_source_order() {
    let select = parse_select("SELECT a FROM t1 WHERE a = 1 AND b = 2 AND c = 3");
    let condition = where_condition(&select);
    assert_eq!(condition.terms.len(), 1);
    let mut count = 1;
    let mut next = &condition.terms[0].and_operand;
    while let Some(term) = next {
        count += 1;
        next = &term.and_operand;
    }
    assert_eq!(count, 3);
}

#[test]
fn parenthesized_condition_is_a_nested_factor() {
    let select = parse_select("SELECT a FROM t1 WHERE (a = 1 OR b = 2) AND c = 3");
    let condition = where_condition(&select);
    assert_eq!(condition.terms.len(), 1);
    let BooleanFactorKind::NestedCondition(nested) = &condition.terms[0].factor.kind else {
        panic!("expected a nested search condition");
    };
    assert_eq!(nested.terms.len(), 2);
}

#[test]
fn comparison_operators() {
    for (sql, op) in [
        ("SELECT a FROM t WHERE a = 1", CompOp::Equal),
        ("SELECT a FROM t WHERE a <> 1", CompOp::NotEqual),
        ("SELECT a FROM t WHERE a < 1", CompOp::LessThan),
        ("SELECT a FROM t WHERE a > 1", CompOp::GreaterThan),
        ("SELECT a FROM t WHERE a <= 1", CompOp::LessThanEqual),
        ("SELECT a FROM t WHERE a >= 1", CompOp::GreaterThanEqual),
    ] {
        let select = parse_select(sql);
        let condition = where_condition(&select);
        let BooleanFactorKind::Predicate(Predicate::Comparison { op: found, .. }) =
            &condition.terms[0].factor.kind
        else {
            panic!("expected a comparison for {sql:?}");
        };
        assert_eq!(*found, op, "{sql}");
    }
}

#[test]
fn between_predicate() {
    let select = parse_select("SELECT a FROM t1 WHERE a BETWEEN 1 AND 10");
    let condition = where_condition(&select);
    assert!(matches!(
        condition.terms[0].factor.kind,
        BooleanFactorKind::Predicate(Predicate::Between { .. })
    ));
}

#[test]
fn not_between_sets_the_reverse_flag() {
    let select = parse_select("SELECT a FROM t1 WHERE a NOT BETWEEN 1 AND 10");
    let condition = where_condition(&select);
    assert!(condition.terms[0].factor.reverse_op);
}

#[test]
fn in_values_keeps_the_list() {
    let select = parse_select("SELECT a FROM t1 WHERE a IN (1, 2, 3)");
    let condition = where_condition(&select);
    let BooleanFactorKind::Predicate(Predicate::InValues { values, .. }) =
        &condition.terms[0].factor.kind
    else {
        panic!("expected IN values");
    };
    assert_eq!(values.len(), 3);
}

#[test]
fn in_subquery() {
    let select = parse_select("SELECT a FROM t1 WHERE a IN (SELECT b FROM t2)");
    let condition = where_condition(&select);
    assert!(matches!(
        condition.terms[0].factor.kind,
        BooleanFactorKind::Predicate(Predicate::InSubquery { .. })
    ));
}

#[test]
fn like_with_escape() {
    let input = "SELECT a FROM t1 WHERE a LIKE '%x_%' ESCAPE '_'";
    let select = parse_select(input);
    let condition = where_condition(&select);
    let BooleanFactorKind::Predicate(Predicate::Like { escape_char, .. }) =
        &condition.terms[0].factor.kind
    else {
        panic!("expected LIKE");
    };
    assert_eq!(escape_char.map(|e| e.text(input)), Some("_"));
}

#[test]
fn null_predicate_and_negation() {
    let select = parse_select("SELECT a FROM t1 WHERE a IS NULL");
    let condition = where_condition(&select);
    assert!(matches!(
        condition.terms[0].factor.kind,
        BooleanFactorKind::Predicate(Predicate::Null { .. })
    ));
    assert!(!condition.terms[0].factor.reverse_op);

    let select = parse_select("SELECT a FROM t1 WHERE a IS NOT NULL");
    let condition = where_condition(&select);
    assert!(condition.terms[0].factor.reverse_op);
}

#[test]
fn exists_and_unique_predicates() {
    let select = parse_select("SELECT a FROM t1 WHERE EXISTS (SELECT b FROM t2)");
    let condition = where_condition(&select);
    assert!(matches!(
        condition.terms[0].factor.kind,
        BooleanFactorKind::Predicate(Predicate::Exists { .. })
    ));

    let select = parse_select("SELECT a FROM t1 WHERE UNIQUE (SELECT b FROM t2)");
    let condition = where_condition(&select);
    assert!(matches!(
        condition.terms[0].factor.kind,
        BooleanFactorKind::Predicate(Predicate::Unique { .. })
    ));
}

#[test]
fn row_value_lists_compare() {
    let select = parse_select("SELECT a FROM t1 WHERE (a, b) = (1, 2)");
    let condition = where_condition(&select);
    let BooleanFactorKind::Predicate(Predicate::Comparison { left, right, .. }) =
        &condition.terms[0].factor.kind
    else {
        panic!("expected a comparison");
    };
    assert!(matches!(left, RowValueConstructor::ValueList(items) if items.len() == 2));
    assert!(matches!(right, RowValueConstructor::ValueList(items) if items.len() == 2));
}

#[test]
fn multiplication_nests_inside_addition() {
    let select = parse_select("SELECT a + b * c FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric expression");
    };
    // One + with a right term of b * c.
    assert_eq!(numeric.rest.len(), 1);
    assert_eq!(numeric.rest[0].0, NumericOp::Add);
    assert!(numeric.left.rest.is_empty());
    assert_eq!(numeric.rest[0].1.rest.len(), 1);
    assert_eq!(numeric.rest[0].1.rest[0].0, NumericOp::Multiply);
}

#[test]
fn signed_factor() {
    let select = parse_select("SELECT - a FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric expression");
    };
    assert_eq!(numeric.left.left.sign, Some(Sign::Minus));
}

#[test]
fn concatenation_is_a_character_expression() {
    let select = parse_select("SELECT a || b || 'suffix' FROM t1");
    let ValueExpression::Character(character) = first_column_value(&select) else {
        panic!("expected a character expression");
    };
    assert_eq!(character.values.len(), 3);
}

#[test]
fn collated_factor_is_a_character_expression() {
    let input = "SELECT a COLLATE latin1 FROM t1";
    let select = parse_select(input);
    let ValueExpression::Character(character) = first_column_value(&select) else {
        panic!("expected a character expression");
    };
    assert_eq!(
        character.values[0].collation.map(|c| c.text(input)),
        Some("latin1")
    );
}

#[test]
fn set_functions() {
    let select = parse_select("SELECT COUNT(*) FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric expression");
    };
    let NumericPrimary::Value(primary) = &numeric.left.left.primary else {
        panic!("expected a primary");
    };
    let ValueExpressionPrimary::SetFunction(function) = primary.as_ref() else {
        panic!("expected a set function");
    };
    assert_eq!(function.kind, SetFunctionKind::Count);
    assert!(function.star);
    assert!(function.operand.is_none());

    let select = parse_select("SELECT AVG(DISTINCT x) FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric expression");
    };
    let NumericPrimary::Value(primary) = &numeric.left.left.primary else {
        panic!("expected a primary");
    };
    let ValueExpressionPrimary::SetFunction(function) = primary.as_ref() else {
        panic!("expected a set function");
    };
    assert_eq!(function.kind, SetFunctionKind::Avg);
    assert!(function.distinct);
    assert!(function.operand.is_some());
}

#[test]
fn searched_case_expression() {
    let select = parse_select("SELECT CASE WHEN a = 1 THEN 'one' ELSE 'other' END FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric wrapper");
    };
    let NumericPrimary::Value(primary) = &numeric.left.left.primary else {
        panic!("expected a primary");
    };
    let ValueExpressionPrimary::CaseExpression(CaseExpression::SearchedCase(searched)) =
        primary.as_ref()
    else {
        panic!("expected a searched CASE");
    };
    assert_eq!(searched.when_clauses.len(), 1);
    assert!(searched.else_value.is_some());
}

#[test]
fn simple_case_expression() {
    let select = parse_select("SELECT CASE x WHEN 1 THEN 'one' WHEN 2 THEN 'two' END FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric wrapper");
    };
    let NumericPrimary::Value(primary) = &numeric.left.left.primary else {
        panic!("expected a primary");
    };
    let ValueExpressionPrimary::CaseExpression(CaseExpression::SimpleCase(simple)) =
        primary.as_ref()
    else {
        panic!("expected a simple CASE");
    };
    assert_eq!(simple.when_clauses.len(), 2);
    assert!(simple.else_value.is_none());
}

#[test]
fn coalesce_and_nullif() {
    let select = parse_select("SELECT COALESCE(a, b, 0) FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric wrapper");
    };
    let NumericPrimary::Value(primary) = &numeric.left.left.primary else {
        panic!("expected a primary");
    };
    let ValueExpressionPrimary::CaseExpression(CaseExpression::Coalesce { values, .. }) =
        primary.as_ref()
    else {
        panic!("expected COALESCE");
    };
    assert_eq!(values.len(), 3);

    assert!(parse("SELECT NULLIF(a, b) FROM t1").is_success());
}

#[test]
fn cast_specification() {
    let select = parse_select("SELECT CAST(NULL AS INT) FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric wrapper");
    };
    let NumericPrimary::Value(primary) = &numeric.left.left.primary else {
        panic!("expected a primary");
    };
    let ValueExpressionPrimary::CastSpecification(cast) = primary.as_ref() else {
        panic!("expected CAST");
    };
    assert!(cast.operand.is_none());
    assert_eq!(
        cast.target,
        DataType::ExactNumeric {
            kind: ExactNumericKind::Int,
            precision: None,
            scale: None,
        }
    );
}

#[test]
fn extract_hour_yields_the_hour_field() {
    let select = parse_select("SELECT EXTRACT(HOUR FROM dt) FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric expression");
    };
    let NumericPrimary::Function(function) = &numeric.left.left.primary else {
        panic!("expected a numeric function");
    };
    let NumericFunction::Extract { field, .. } = function.as_ref() else {
        panic!("expected EXTRACT");
    };
    assert_eq!(*field, IntervalUnit::Hour);
}

#[test]
fn position_and_length_functions() {
    assert!(parse("SELECT POSITION('x' IN a) FROM t1").is_success());
    assert!(parse("SELECT CHAR_LENGTH(a) FROM t1").is_success());
    assert!(parse("SELECT CHARACTER_LENGTH(a) FROM t1").is_success());
    assert!(parse("SELECT OCTET_LENGTH(a) FROM t1").is_success());
    assert!(parse("SELECT BIT_LENGTH(a) FROM t1").is_success());
}

#[test]
fn string_functions() {
    assert!(parse("SELECT UPPER(a) FROM t1").is_success());
    assert!(parse("SELECT LOWER(a) FROM t1").is_success());
    assert!(parse("SELECT SUBSTRING(a FROM 2 FOR 3) FROM t1").is_success());
    assert!(parse("SELECT CONVERT(a USING utf8) FROM t1").is_success());
    assert!(parse("SELECT TRANSLATE(a USING latin1) FROM t1").is_success());
    assert!(parse("SELECT TRIM(a) FROM t1").is_success());
    assert!(parse("SELECT TRIM(LEADING 'x' FROM a) FROM t1").is_success());
    assert!(parse("SELECT TRIM(BOTH ' ' FROM a) FROM t1").is_success());
}

#[test]
fn upper_is_a_string_function_primary() {
    let select = parse_select("SELECT UPPER(a) FROM t1");
    let ValueExpression::Character(character) = first_column_value(&select) else {
        panic!("expected a character expression");
    };
    assert!(matches!(
        character.values[0].primary,
        CharacterPrimary::Function(_)
    ));
}

#[test]
fn datetime_functions_carry_precision() {
    let select = parse_select("SELECT CURRENT_TIMESTAMP(3) FROM t1");
    let ValueExpression::Datetime(datetime) = first_column_value(&select) else {
        panic!("expected a datetime expression");
    };
    let DatetimePrimary::Function(function) = &datetime.left.value.primary else {
        panic!("expected a datetime function");
    };
    assert_eq!(function.kind, DatetimeFunctionKind::CurrentTimestamp);
    assert_eq!(function.precision, Some(3));
}

#[test]
fn datetime_literal() {
    let input = "SELECT DATE '2011-01-01' FROM t1";
    let select = parse_select(input);
    let ValueExpression::Datetime(datetime) = first_column_value(&select) else {
        panic!("expected a datetime expression");
    };
    let DatetimePrimary::Value(primary) = &datetime.left.value.primary else {
        panic!("expected a primary");
    };
    let ValueExpressionPrimary::UnsignedValueSpecification(uvs) = primary.as_ref() else {
        panic!("expected a value specification");
    };
    assert_eq!(uvs.kind, UvsKind::DateLiteral);
    assert_eq!(uvs.lexeme.text(input), "2011-01-01");
}

#[test]
fn datetime_minus_interval() {
    let select = parse_select("SELECT dt - INTERVAL '1' DAY FROM t1");
    let ValueExpression::Datetime(datetime) = first_column_value(&select) else {
        panic!("expected a datetime expression");
    };
    assert_eq!(datetime.op, Some(NumericOp::Subtract));
    let right = datetime.right.as_ref().expect("interval operand");
    let qualifier = right.left.primary.qualifier.expect("interval qualifier");
    assert_eq!(qualifier.start.unit, IntervalUnit::Day);
}

#[test]
fn datetime_at_time_zone() {
    let input = "SELECT dt AT TIME ZONE 'UTC' FROM t1";
    let select = parse_select(input);
    let ValueExpression::Datetime(datetime) = first_column_value(&select) else {
        panic!("expected a datetime expression");
    };
    assert!(matches!(
        datetime.left.value.time_zone,
        Some(TimeZoneSpecifier::TimeZone(_))
    ));
}

#[test]
fn interval_literal_with_qualifier_range() {
    let select = parse_select("SELECT INTERVAL '2-6' YEAR TO MONTH FROM t1");
    let ValueExpression::Interval(interval) = first_column_value(&select) else {
        panic!("expected an interval expression");
    };
    let qualifier = interval.left.left.primary.qualifier.expect("qualifier");
    assert_eq!(qualifier.start.unit, IntervalUnit::Year);
    assert_eq!(qualifier.end.map(|end| end.unit), Some(IntervalUnit::Month));
}

#[test]
fn parameters() {
    assert!(parse("SELECT a FROM t1 WHERE a = ?").is_success());
    assert!(parse("SELECT a FROM t1 WHERE a = :name").is_success());
}

#[test]
fn general_value_keywords() {
    assert!(parse("SELECT USER FROM t1").is_success());
    assert!(parse("SELECT CURRENT_USER FROM t1").is_success());
    assert!(parse("SELECT SESSION_USER FROM t1").is_success());
    assert!(parse("SELECT SYSTEM_USER FROM t1").is_success());
}

#[test]
fn scalar_subquery_in_the_select_list() {
    let select = parse_select("SELECT (SELECT MAX(b) FROM t2) FROM t1");
    let ValueExpression::Numeric(numeric) = first_column_value(&select) else {
        panic!("expected a numeric wrapper");
    };
    let NumericPrimary::Value(primary) = &numeric.left.left.primary else {
        panic!("expected a primary");
    };
    assert!(matches!(
        primary.as_ref(),
        ValueExpressionPrimary::ScalarSubquery { .. }
    ));
}
