//! Round-trip and equivalence properties.
//!
//! Rendering a parsed statement and re-parsing the rendered text must give
//! a structurally equivalent tree. Lexeme offsets differ between the two
//! parses, so equivalence is checked by rendering both trees: a stable
//! second rendering implies the same tagged-variant skeleton.

use pretty_assertions::assert_eq;
use squall_lib::{ParseCode, ParseOptions, parse, parse_with_options, to_sql};

const STATEMENTS: &[&str] = &[
    "CREATE SCHEMA test1",
    "CREATE SCHEMA test1 AUTHORIZATION admin DEFAULT CHARACTER SET utf8 COLLATE utf8_bin",
    "DROP SCHEMA test1 RESTRICT",
    "CREATE TABLE test1 (field1 INT NOT NULL, field2 DOUBLE PRECISION)",
    "CREATE TABLE t1 (c1 VARCHAR(32) DEFAULT 'none', c2 NUMERIC(10, 2), \
     PRIMARY KEY (c1), CONSTRAINT fk1 FOREIGN KEY (c2) REFERENCES t2 (id) \
     MATCH FULL ON DELETE CASCADE)",
    "CREATE GLOBAL TEMPORARY TABLE scratch (c1 TIMESTAMP(3) WITH TIME ZONE)",
    "CREATE TABLE t1 (c1 INT CHECK (c1 > 0), c2 CHAR(4) CHARACTER SET utf8)",
    "DROP TABLE t1 CASCADE",
    "ALTER TABLE t1 ADD COLUMN c2 SMALLINT",
    "ALTER TABLE t1 ALTER COLUMN c1 SET DEFAULT 0",
    "ALTER TABLE t1 DROP COLUMN c1 RESTRICT",
    "ALTER TABLE t1 DROP CONSTRAINT fk1 CASCADE",
    "CREATE VIEW v1 (a, b) AS SELECT x, y FROM t1 WITH CASCADED CHECK OPTION",
    "DROP VIEW v1 CASCADE",
    "SELECT a, b AS total FROM t1",
    "SELECT DISTINCT a FROM t1 GROUP BY a HAVING COUNT(*) > 5",
    "SELECT a.x, b.y FROM t1 AS a INNER JOIN t2 AS b ON a.id = b.id WHERE a.x > 10",
    "SELECT a FROM t1 CROSS JOIN t2",
    "SELECT a FROM t1 LEFT JOIN t2 USING (id, region)",
    "SELECT x FROM (SELECT a AS x FROM t1) AS sub",
    "SELECT * FROM t1",
    "SELECT a + b * c FROM t1",
    "SELECT a || b || 'suffix' FROM t1",
    "SELECT COUNT(*), AVG(DISTINCT x) FROM t1",
    "SELECT CASE WHEN a = 1 THEN 'one' ELSE 'other' END FROM t1",
    "SELECT CASE x WHEN 1 THEN 'one' WHEN 2 THEN 'two' END FROM t1",
    "SELECT COALESCE(a, b, 0), NULLIF(a, b) FROM t1",
    "SELECT CAST(NULL AS INT), CAST(a AS CHAR(4)) FROM t1",
    "SELECT EXTRACT(HOUR FROM dt), POSITION('x' IN a) FROM t1",
    "SELECT SUBSTRING(a FROM 2 FOR 3), TRIM(BOTH ' ' FROM a) FROM t1",
    "SELECT UPPER(a), CHAR_LENGTH(b) FROM t1",
    "SELECT CURRENT_TIMESTAMP(3), DATE '2011-01-01' FROM t1",
    "SELECT dt - INTERVAL '1' DAY FROM t1",
    "SELECT dt AT TIME ZONE 'UTC' FROM t1",
    "SELECT (SELECT MAX(b) FROM t2) FROM t1",
    "SELECT a FROM t1 WHERE x = 1 OR y = 2 AND z = 3",
    "SELECT a FROM t1 WHERE NOT (a = 1 OR b = 2)",
    "SELECT a FROM t1 WHERE a BETWEEN 1 AND 10",
    "SELECT a FROM t1 WHERE a IN (1, 2, 3)",
    "SELECT a FROM t1 WHERE a IN (SELECT b FROM t2)",
    "SELECT a FROM t1 WHERE a LIKE '%x%' ESCAPE '_'",
    "SELECT a FROM t1 WHERE NOT a IS NULL",
    "SELECT a FROM t1 WHERE EXISTS (SELECT b FROM t2)",
    "SELECT a FROM t1 WHERE (a, b) = (1, 2)",
    "SELECT a FROM t1 WHERE a = ?",
    "INSERT INTO t1 (a, b) VALUES (1, 'x')",
    "INSERT INTO t1 VALUES (NULL, DEFAULT, 3)",
    "INSERT INTO t1 SELECT a, b FROM t2",
    "UPDATE t1 SET a = 1, b = NULL WHERE c = 2",
    "DELETE FROM t1 WHERE a = 1",
    "GRANT ALL PRIVILEGES ON t1 TO PUBLIC WITH GRANT OPTION",
    "GRANT SELECT, UPDATE (c1, c2) ON t1 TO alice",
    "COMMIT",
    "ROLLBACK",
];

#[test]
fn rendered_statements_reparse_to_the_same_shape() {
    for input in STATEMENTS {
        let first = parse(input);
        assert_eq!(
            first.code,
            ParseCode::Success,
            "{input:?} failed: {:?}",
            first.errors
        );
        let statement = first.statement.expect("statement constructed");
        let rendered = to_sql(&statement, input);

        let second = parse(&rendered);
        assert_eq!(
            second.code,
            ParseCode::Success,
            "rendered form {rendered:?} of {input:?} failed: {:?}",
            second.errors
        );
        let reparsed = second.statement.expect("statement constructed");
        let rendered_again = to_sql(&reparsed, &rendered);
        assert_eq!(rendered_again, rendered, "unstable rendering for {input:?}");
    }
}

#[test]
fn disabled_construction_matches_codes_and_errors() {
    let disabled = ParseOptions {
        disable_statement_construction: true,
    };
    let mut cases: Vec<&str> = STATEMENTS.to_vec();
    cases.extend([
        "DROP SCHEMA test.test1",
        "SELECT FROM t1",
        "CREATE TABLE t1 (c1 INT",
        "GRANT NOTHING ON t1 TO PUBLIC",
        "SELECT 'abc FROM t1",
        "not sql at all",
    ]);

    for input in cases {
        let constructed = parse(input);
        let validated = parse_with_options(input, disabled);
        assert_eq!(constructed.code, validated.code, "{input}");
        assert_eq!(constructed.errors, validated.errors, "{input}");
        assert!(validated.statement.is_none(), "{input}");
    }
}

#[test]
fn successful_validation_produces_no_statement_but_success() {
    let result = parse_with_options(
        "SELECT a FROM t1 WHERE a > 10",
        ParseOptions {
            disable_statement_construction: true,
        },
    );
    assert_eq!(result.code, ParseCode::Success);
    assert!(result.statement.is_none());
    assert!(result.errors.is_empty());
}

#[test]
fn lexemes_stay_inside_the_input_buffer() {
    let input = "SELECT a.x, 'lit' FROM t1 AS a WHERE a.x >= 10";
    let result = parse(input);
    assert!(result.is_success());
    // Rendering resolves every lexeme in the tree against the buffer; an
    // out-of-range span would panic here.
    let statement = result.statement.expect("statement constructed");
    let rendered = to_sql(&statement, input);
    assert!(rendered.starts_with("SELECT"));
}
