//! Statement-level coverage: one section per statement kind.

use pretty_assertions::assert_eq;
use squall_lib::ast::*;
use squall_lib::{ParseCode, parse};

fn parse_ok(input: &str) -> Statement {
    let result = parse(input);
    assert_eq!(
        result.code,
        ParseCode::Success,
        "expected {input:?} to parse: {:?}",
        result.errors
    );
    result.statement.expect("statement constructed")
}

#[test]
fn create_schema() {
    let input = "CREATE SCHEMA test1";
    let Statement::CreateSchema(create) = parse_ok(input) else {
        panic!("expected CREATE SCHEMA");
    };
    assert_eq!(create.schema_name.text(input), "test1");
    assert_eq!(create.authorization_identifier, None);
    assert_eq!(create.default_charset, None);
    assert_eq!(create.default_collation, None);
}

#[test]
fn create_schema_with_charset_and_collation() {
    let input = "CREATE SCHEMA test1 CHARACTER SET utf8 COLLATE utf8_bin";
    let Statement::CreateSchema(create) = parse_ok(input) else {
        panic!("expected CREATE SCHEMA");
    };
    assert_eq!(create.default_charset.map(|cs| cs.text(input)), Some("utf8"));
    assert_eq!(
        create.default_collation.map(|c| c.text(input)),
        Some("utf8_bin")
    );
}

#[test]
fn create_schema_with_default_charset_and_authorization() {
    let input = "CREATE SCHEMA app AUTHORIZATION admin DEFAULT CHARACTER SET utf8";
    let Statement::CreateSchema(create) = parse_ok(input) else {
        panic!("expected CREATE SCHEMA");
    };
    assert_eq!(
        create.authorization_identifier.map(|a| a.text(input)),
        Some("admin")
    );
    assert_eq!(create.default_charset.map(|cs| cs.text(input)), Some("utf8"));
}

#[test]
fn create_schema_quoted_identifier() {
    let input = "CREATE SCHEMA \"test1\"";
    let Statement::CreateSchema(create) = parse_ok(input) else {
        panic!("expected CREATE SCHEMA");
    };
    assert_eq!(create.schema_name.text(input), "test1");
}

#[test]
fn drop_schema_defaults_to_cascade() {
    let input = "DROP SCHEMA test1";
    let Statement::DropSchema(drop) = parse_ok(input) else {
        panic!("expected DROP SCHEMA");
    };
    assert_eq!(drop.schema_name.text(input), "test1");
    assert_eq!(drop.drop_behaviour, DropBehaviour::Cascade);
}

#[test]
fn drop_schema_restrict() {
    let input = "DROP SCHEMA test1 RESTRICT";
    let Statement::DropSchema(drop) = parse_ok(input) else {
        panic!("expected DROP SCHEMA");
    };
    assert_eq!(drop.drop_behaviour, DropBehaviour::Restrict);
}

#[test]
fn qualified_name_after_drop_schema_is_an_error() {
    let input = "DROP SCHEMA test.test1";
    let result = parse(input);
    assert_eq!(result.code, ParseCode::SyntaxError);
    assert!(result.statement.is_none());
    let message = &result.errors[0];
    // The excerpt repeats the faulting line and carets the period.
    assert!(message.contains("DROP SCHEMA test.test1"), "{message}");
    assert!(message.contains("\n                ^"), "{message}");
}

#[test]
fn create_table_collects_column_definitions_in_order() {
    let input = "CREATE TABLE test1 (field1 INT NOT NULL, field2 DOUBLE)";
    let Statement::CreateTable(create) = parse_ok(input) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(create.table_type, TableType::Normal);
    assert_eq!(create.table_name.text(input), "test1");
    assert_eq!(create.column_definitions.len(), 2);
    assert!(create.constraints.is_empty());

    let first = &create.column_definitions[0];
    assert_eq!(first.name.text(input), "field1");
    assert_eq!(
        first.data_type,
        DataType::ExactNumeric {
            kind: ExactNumericKind::Int,
            precision: None,
            scale: None,
        }
    );
    assert_eq!(first.constraints.len(), 1);
    assert_eq!(first.constraints[0].kind, ConstraintKind::NotNull);

    let second = &create.column_definitions[1];
    assert_eq!(second.name.text(input), "field2");
    assert_eq!(
        second.data_type,
        DataType::ApproximateNumeric {
            kind: ApproximateNumericKind::Double,
            precision: None,
        }
    );
}

#[test]
fn create_table_column_count_matches_source_order() {
    let input = "CREATE TABLE t (a INT, b CHAR(2), c NUMERIC(10, 2), d TIMESTAMP, e BIT(8))";
    let Statement::CreateTable(create) = parse_ok(input) else {
        panic!("expected CREATE TABLE");
    };
    let names: Vec<&str> = create
        .column_definitions
        .iter()
        .map(|column| column.name.text(input))
        .collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn create_global_temporary_table() {
    let input = "CREATE GLOBAL TEMPORARY TABLE t1 (c1 INT)";
    let Statement::CreateTable(create) = parse_ok(input) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(create.table_type, TableType::TemporaryGlobal);
}

#[test]
fn column_default_and_collation() {
    let input = "CREATE TABLE t1 (c1 VARCHAR(32) DEFAULT 'none' COLLATE latin1)";
    let Statement::CreateTable(create) = parse_ok(input) else {
        panic!("expected CREATE TABLE");
    };
    let column = &create.column_definitions[0];
    let descriptor = column.default_descriptor.expect("default clause");
    assert_eq!(descriptor.kind, DefaultKind::Literal);
    let literal = descriptor.literal.expect("literal payload");
    assert_eq!(literal.kind, UvsKind::CharacterString);
    assert_eq!(literal.lexeme.text(input), "none");
    assert_eq!(column.collate.map(|c| c.text(input)), Some("latin1"));
}

#[test]
fn column_default_current_timestamp_precision() {
    let input = "CREATE TABLE t1 (c1 TIMESTAMP DEFAULT CURRENT_TIMESTAMP(3))";
    let Statement::CreateTable(create) = parse_ok(input) else {
        panic!("expected CREATE TABLE");
    };
    let descriptor = create.column_definitions[0]
        .default_descriptor
        .expect("default clause");
    assert_eq!(descriptor.kind, DefaultKind::CurrentTimestamp);
    assert_eq!(descriptor.precision, Some(3));
}

#[test]
fn table_constraints_are_kept_separate_from_columns() {
    let input = "CREATE TABLE t1 (c1 INT, c2 INT, PRIMARY KEY (c1), \
                 CONSTRAINT fk1 FOREIGN KEY (c2) REFERENCES t2 (id) \
                 MATCH FULL ON DELETE CASCADE ON UPDATE NO ACTION)";
    let Statement::CreateTable(create) = parse_ok(input) else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(create.column_definitions.len(), 2);
    assert_eq!(create.constraints.len(), 2);

    let ConstraintKind::PrimaryKey { columns } = &create.constraints[0].kind else {
        panic!("expected PRIMARY KEY");
    };
    assert_eq!(columns.len(), 1);

    let named = &create.constraints[1];
    assert_eq!(named.name.map(|n| n.text(input)), Some("fk1"));
    let ConstraintKind::ForeignKey(foreign_key) = &named.kind else {
        panic!("expected FOREIGN KEY");
    };
    assert_eq!(foreign_key.referenced_table.text(input), "t2");
    assert_eq!(foreign_key.referenced_columns.len(), 1);
    assert_eq!(foreign_key.match_kind, Some(MatchKind::Full));
    assert_eq!(foreign_key.on_delete, Some(ReferentialAction::Cascade));
    assert_eq!(foreign_key.on_update, Some(ReferentialAction::NoAction));
}

#[test]
fn check_constraint_holds_a_search_condition() {
    let input = "CREATE TABLE t1 (c1 INT CHECK (c1 > 0))";
    let Statement::CreateTable(create) = parse_ok(input) else {
        panic!("expected CREATE TABLE");
    };
    let column = &create.column_definitions[0];
    assert_eq!(column.constraints.len(), 1);
    let ConstraintKind::Check(condition) = &column.constraints[0].kind else {
        panic!("expected CHECK");
    };
    assert_eq!(condition.terms.len(), 1);
}

#[test]
fn drop_table_and_view() {
    let input = "DROP TABLE t1 RESTRICT";
    let Statement::DropTable(drop) = parse_ok(input) else {
        panic!("expected DROP TABLE");
    };
    assert_eq!(drop.drop_behaviour, DropBehaviour::Restrict);

    let input = "DROP VIEW v1";
    let Statement::DropView(drop) = parse_ok(input) else {
        panic!("expected DROP VIEW");
    };
    assert_eq!(drop.table_name.text(input), "v1");
}

#[test]
fn alter_table_add_column() {
    let input = "ALTER TABLE t1 ADD COLUMN c2 SMALLINT";
    let Statement::AlterTable(alter) = parse_ok(input) else {
        panic!("expected ALTER TABLE");
    };
    let AlterTableAction::AddColumn(column) = &alter.action else {
        panic!("expected ADD COLUMN");
    };
    assert_eq!(column.name.text(input), "c2");
}

#[test]
fn alter_table_add_column_without_the_column_keyword() {
    let input = "ALTER TABLE t1 ADD c2 SMALLINT";
    let Statement::AlterTable(alter) = parse_ok(input) else {
        panic!("expected ALTER TABLE");
    };
    assert!(matches!(alter.action, AlterTableAction::AddColumn(_)));
}

#[test]
fn alter_table_column_default_actions() {
    let input = "ALTER TABLE t1 ALTER COLUMN c1 SET DEFAULT 0";
    let Statement::AlterTable(alter) = parse_ok(input) else {
        panic!("expected ALTER TABLE");
    };
    let AlterTableAction::AlterColumn { action, .. } = &alter.action else {
        panic!("expected ALTER COLUMN");
    };
    assert!(matches!(action, AlterColumnAction::SetDefault(_)));

    let input = "ALTER TABLE t1 ALTER c1 DROP DEFAULT";
    let Statement::AlterTable(alter) = parse_ok(input) else {
        panic!("expected ALTER TABLE");
    };
    let AlterTableAction::AlterColumn { action, .. } = &alter.action else {
        panic!("expected ALTER COLUMN");
    };
    assert_eq!(*action, AlterColumnAction::DropDefault);
}

#[test]
fn alter_table_drop_column_and_constraint() {
    let input = "ALTER TABLE t1 DROP COLUMN c1 RESTRICT";
    let Statement::AlterTable(alter) = parse_ok(input) else {
        panic!("expected ALTER TABLE");
    };
    let AlterTableAction::DropColumn { drop_behaviour, .. } = &alter.action else {
        panic!("expected DROP COLUMN");
    };
    assert_eq!(*drop_behaviour, DropBehaviour::Restrict);

    let input = "ALTER TABLE t1 DROP CONSTRAINT fk1 CASCADE";
    let Statement::AlterTable(alter) = parse_ok(input) else {
        panic!("expected ALTER TABLE");
    };
    assert!(matches!(
        alter.action,
        AlterTableAction::DropConstraint { .. }
    ));
}

#[test]
fn alter_table_add_table_constraint() {
    let input = "ALTER TABLE t1 ADD CONSTRAINT u1 UNIQUE (c1, c2)";
    let Statement::AlterTable(alter) = parse_ok(input) else {
        panic!("expected ALTER TABLE");
    };
    let AlterTableAction::AddConstraint(constraint) = &alter.action else {
        panic!("expected ADD CONSTRAINT");
    };
    let ConstraintKind::Unique { columns } = &constraint.kind else {
        panic!("expected UNIQUE");
    };
    assert_eq!(columns.len(), 2);
}

#[test]
fn select_with_join_and_where() {
    let input = "SELECT a.x, b.y FROM t1 AS a INNER JOIN t2 AS b ON a.id = b.id WHERE a.x > 10";
    let Statement::Select(select) = parse_ok(input) else {
        panic!("expected SELECT");
    };
    let query = &select.query;
    assert_eq!(query.selected_columns.len(), 2);

    let tables = &query.table_expression.referenced_tables;
    assert_eq!(tables.len(), 1);
    let TableReference::JoinedTable(joined) = &tables[0] else {
        panic!("expected a joined table");
    };
    assert_eq!(joined.join_type, JoinType::Inner);
    let TableReference::Table { table_name, alias } = joined.left.as_ref() else {
        panic!("expected a plain left table");
    };
    assert_eq!(table_name.text(input), "t1");
    assert_eq!(alias.map(|a| a.text(input)), Some("a"));
    let TableReference::Table { table_name, .. } = joined.right.as_ref() else {
        panic!("expected a plain right table");
    };
    assert_eq!(table_name.text(input), "t2");

    let spec = joined.spec.as_ref().expect("join specification");
    let condition = spec.condition.as_ref().expect("ON condition");
    assert_eq!(condition.terms.len(), 1);
    assert!(spec.named_columns.is_empty());
    assert!(
        matches!(
            condition.terms[0].factor.kind,
            BooleanFactorKind::Predicate(Predicate::Comparison { .. })
        ),
        "single comparison predicate expected"
    );

    let where_condition = query
        .table_expression
        .where_condition
        .as_ref()
        .expect("WHERE clause");
    assert_eq!(where_condition.terms.len(), 1);
}

#[test]
fn join_using_fills_named_columns_and_leaves_condition_empty() {
    let input = "SELECT a FROM t1 JOIN t2 USING (id, region)";
    let Statement::Select(select) = parse_ok(input) else {
        panic!("expected SELECT");
    };
    let TableReference::JoinedTable(joined) =
        &select.query.table_expression.referenced_tables[0]
    else {
        panic!("expected a joined table");
    };
    let spec = joined.spec.as_ref().expect("join specification");
    assert!(spec.condition.is_none());
    assert_eq!(
        spec.named_columns
            .iter()
            .map(|c| c.text(input))
            .collect::<Vec<_>>(),
        vec!["id", "region"]
    );
}

#[test]
fn join_variants() {
    for (sql, join_type) in [
        ("SELECT a FROM t1 CROSS JOIN t2", JoinType::Cross),
        ("SELECT a FROM t1 LEFT JOIN t2 ON t1.a = t2.a", JoinType::Left),
        ("SELECT a FROM t1 LEFT OUTER JOIN t2 ON t1.a = t2.a", JoinType::Left),
        ("SELECT a FROM t1 RIGHT JOIN t2 ON t1.a = t2.a", JoinType::Right),
        ("SELECT a FROM t1 FULL OUTER JOIN t2 ON t1.a = t2.a", JoinType::Full),
        ("SELECT a FROM t1 NATURAL JOIN t2", JoinType::Natural),
        ("SELECT a FROM t1 UNION JOIN t2", JoinType::Union),
    ] {
        let Statement::Select(select) = parse_ok(sql) else {
            panic!("expected SELECT for {sql:?}");
        };
        let TableReference::JoinedTable(joined) =
            &select.query.table_expression.referenced_tables[0]
        else {
            panic!("expected a joined table for {sql:?}");
        };
        assert_eq!(joined.join_type, join_type, "{sql}");
    }
}

#[test]
fn joins_left_associate() {
    let input = "SELECT a FROM t1 JOIN t2 ON t1.a = t2.a JOIN t3 ON t2.b = t3.b";
    let Statement::Select(select) = parse_ok(input) else {
        panic!("expected SELECT");
    };
    let TableReference::JoinedTable(outer) =
        &select.query.table_expression.referenced_tables[0]
    else {
        panic!("expected a joined table");
    };
    // ((t1 JOIN t2) JOIN t3): the outer right side is t3.
    assert!(matches!(
        outer.right.as_ref(),
        TableReference::Table { .. }
    ));
    assert!(matches!(
        outer.left.as_ref(),
        TableReference::JoinedTable(_)
    ));
}

#[test]
fn bare_star_produces_one_derived_column() {
    let input = "SELECT * FROM t1";
    let Statement::Select(select) = parse_ok(input) else {
        panic!("expected SELECT");
    };
    assert_eq!(select.query.selected_columns.len(), 1);
    assert!(select.query.selected_columns[0].value.is_none());
    assert!(select.query.selected_columns[0].alias.is_none());
}

#[test]
fn select_list_length_matches_source_order() {
    let input = "SELECT a, b AS two, c three, COUNT(*) FROM t1";
    let Statement::Select(select) = parse_ok(input) else {
        panic!("expected SELECT");
    };
    let columns = &select.query.selected_columns;
    assert_eq!(columns.len(), 4);
    assert_eq!(columns[1].alias.map(|a| a.text(input)), Some("two"));
    assert_eq!(columns[2].alias.map(|a| a.text(input)), Some("three"));
}

#[test]
fn select_distinct_group_by_having() {
    let input = "SELECT DISTINCT a FROM t1 GROUP BY a COLLATE latin1, b HAVING COUNT(*) > 5";
    let Statement::Select(select) = parse_ok(input) else {
        panic!("expected SELECT");
    };
    assert!(select.query.distinct);
    let expression = &select.query.table_expression;
    assert_eq!(expression.group_by_columns.len(), 2);
    assert_eq!(
        expression.group_by_columns[0].collation.map(|c| c.text(input)),
        Some("latin1")
    );
    assert!(expression.having_condition.is_some());
}

#[test]
fn select_from_derived_table() {
    let input = "SELECT x FROM (SELECT a AS x FROM t1) AS sub";
    let Statement::Select(select) = parse_ok(input) else {
        panic!("expected SELECT");
    };
    let TableReference::DerivedTable { table_name, .. } =
        &select.query.table_expression.referenced_tables[0]
    else {
        panic!("expected a derived table");
    };
    assert_eq!(table_name.text(input), "sub");
}

#[test]
fn insert_with_column_list_and_values() {
    let input = "INSERT INTO t1 (a, b) VALUES (1, 'x')";
    let Statement::Insert(insert) = parse_ok(input) else {
        panic!("expected INSERT");
    };
    assert_eq!(insert.table_name.text(input), "t1");
    assert_eq!(insert.insert_columns.len(), 2);
    let QueryExpression::NonJoin(non_join) = insert.query.as_ref() else {
        panic!("expected a non-join query expression");
    };
    let NonJoinQueryPrimary::TableValueConstructor(constructor) = &non_join.term.primary else {
        panic!("expected VALUES");
    };
    assert_eq!(constructor.values.len(), 1);
    assert!(matches!(
        constructor.values[0],
        RowValueConstructor::ValueList(ref values) if values.len() == 2
    ));
}

#[test]
fn insert_from_select() {
    let input = "INSERT INTO t1 SELECT a, b FROM t2";
    let Statement::Insert(insert) = parse_ok(input) else {
        panic!("expected INSERT");
    };
    assert!(insert.insert_columns.is_empty());
    let QueryExpression::NonJoin(non_join) = insert.query.as_ref() else {
        panic!("expected a non-join query expression");
    };
    assert!(matches!(
        non_join.term.primary,
        NonJoinQueryPrimary::QuerySpecification(_)
    ));
}

#[test]
fn insert_values_with_null_and_default() {
    let input = "INSERT INTO t1 VALUES (NULL, DEFAULT, 3)";
    let Statement::Insert(insert) = parse_ok(input) else {
        panic!("expected INSERT");
    };
    let QueryExpression::NonJoin(non_join) = insert.query.as_ref() else {
        panic!("expected a non-join query expression");
    };
    let NonJoinQueryPrimary::TableValueConstructor(constructor) = &non_join.term.primary else {
        panic!("expected VALUES");
    };
    assert_eq!(constructor.values.len(), 1);
}

#[test]
fn update_set_clauses() {
    let input = "UPDATE t1 SET a = 1, b = NULL, c = DEFAULT WHERE a = 2";
    let Statement::Update(update) = parse_ok(input) else {
        panic!("expected UPDATE");
    };
    assert_eq!(update.table_name.text(input), "t1");
    assert_eq!(update.set_columns.len(), 3);
    assert!(matches!(update.set_columns[0].value, SetColumnValue::Value(_)));
    assert_eq!(update.set_columns[1].value, SetColumnValue::Null);
    assert_eq!(update.set_columns[2].value, SetColumnValue::Default);
    assert!(update.where_condition.is_some());
}

#[test]
fn delete_with_and_without_where() {
    let input = "DELETE FROM t1";
    let Statement::Delete(delete) = parse_ok(input) else {
        panic!("expected DELETE");
    };
    assert!(delete.where_condition.is_none());

    let input = "DELETE FROM t1 WHERE a = 1";
    let Statement::Delete(delete) = parse_ok(input) else {
        panic!("expected DELETE");
    };
    assert!(delete.where_condition.is_some());
}

#[test]
fn grant_all_privileges_to_public() {
    let input = "GRANT ALL PRIVILEGES ON t1 TO PUBLIC WITH GRANT OPTION";
    let Statement::Grant(grant) = parse_ok(input) else {
        panic!("expected GRANT");
    };
    assert!(grant.all_privileges());
    assert!(grant.to_public());
    assert_eq!(grant.on.text(input), "t1");
    assert!(grant.with_grant_option);
}

#[test]
fn grant_action_list_with_columns() {
    let input = "GRANT SELECT, UPDATE (c1, c2), USAGE ON t1 TO alice";
    let Statement::Grant(grant) = parse_ok(input) else {
        panic!("expected GRANT");
    };
    assert_eq!(grant.privileges.len(), 3);
    assert_eq!(grant.privileges[0].kind, GrantActionKind::Select);
    assert_eq!(grant.privileges[1].kind, GrantActionKind::Update);
    assert_eq!(grant.privileges[1].columns.len(), 2);
    assert_eq!(grant.privileges[2].kind, GrantActionKind::Usage);
    assert_eq!(grant.to.map(|t| t.text(input)), Some("alice"));
    assert!(!grant.with_grant_option);
}

#[test]
fn create_view_with_columns_and_check_option() {
    let input = "CREATE VIEW v1 (a, b) AS SELECT x, y FROM t1 WITH CASCADED CHECK OPTION";
    let Statement::CreateView(create) = parse_ok(input) else {
        panic!("expected CREATE VIEW");
    };
    assert_eq!(create.table_name.text(input), "v1");
    assert_eq!(create.columns.len(), 2);
    assert_eq!(create.check_option, CheckOption::Cascaded);
}

#[test]
fn create_view_minimal() {
    let input = "CREATE VIEW v1 AS SELECT a FROM t1";
    let Statement::CreateView(create) = parse_ok(input) else {
        panic!("expected CREATE VIEW");
    };
    assert!(create.columns.is_empty());
    assert_eq!(create.check_option, CheckOption::None);
}

#[test]
fn transaction_statements() {
    assert!(matches!(parse_ok("COMMIT"), Statement::Commit));
    assert!(matches!(parse_ok("COMMIT WORK"), Statement::Commit));
    assert!(matches!(parse_ok("ROLLBACK"), Statement::Rollback));
    assert!(matches!(parse_ok("ROLLBACK WORK"), Statement::Rollback));
}

#[test]
fn trailing_semicolon_is_accepted() {
    assert!(parse("CREATE SCHEMA test1;").is_success());
    assert!(parse("SELECT a FROM t1;").is_success());
}

#[test]
fn content_after_a_complete_statement_is_an_error() {
    let result = parse("CREATE SCHEMA test1 test2 test3");
    assert_eq!(result.code, ParseCode::SyntaxError);
    let result = parse("COMMIT COMMIT");
    assert_eq!(result.code, ParseCode::SyntaxError);
}

#[test]
fn unknown_leading_keyword_is_an_error() {
    let result = parse("EXPLAIN SELECT a FROM t1");
    assert_eq!(result.code, ParseCode::SyntaxError);
    assert!(!result.errors.is_empty());
}

#[test]
fn unterminated_string_is_a_lex_error() {
    let result = parse("SELECT 'abc FROM t1");
    assert_eq!(result.code, ParseCode::LexError);
    assert!(result.errors[0].contains("Unterminated string literal"));
}

#[test]
fn unterminated_quoted_identifier_is_a_lex_error() {
    let result = parse("CREATE SCHEMA \"test1");
    assert_eq!(result.code, ParseCode::LexError);
}

#[test]
fn comments_are_skipped() {
    let input = "SELECT a -- pick a\nFROM t1 /* the table */ WHERE a = 1";
    assert!(parse(input).is_success());
}
