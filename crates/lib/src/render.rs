//! Rendering an AST back to SQL text.
//!
//! The output is a canonical form: keywords upper-cased, single spacing,
//! comments gone. Re-parsing the rendered text yields a structurally
//! equivalent tree; the original byte-for-byte layout is not recoverable.

use crate::ast::*;
use crate::lexeme::Lexeme;

/// Render `statement` against the input buffer it was parsed from.
pub fn to_sql(statement: &Statement, input: &str) -> String {
    let mut renderer = Renderer {
        input,
        out: String::new(),
    };
    renderer.statement(statement);
    renderer.out
}

struct Renderer<'a> {
    input: &'a str,
    out: String,
}

impl Renderer<'_> {
    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn lexeme(&mut self, lexeme: Lexeme) {
        self.out.push_str(lexeme.text(self.input));
    }

    fn identifier_list(&mut self, columns: &[Lexeme]) {
        for (index, column) in columns.iter().enumerate() {
            if index > 0 {
                self.push(", ");
            }
            self.lexeme(*column);
        }
    }

    fn statement(&mut self, statement: &Statement) {
        match statement {
            Statement::CreateSchema(create) => self.create_schema(create),
            Statement::DropSchema(drop) => {
                self.push("DROP SCHEMA ");
                self.lexeme(drop.schema_name);
                self.drop_behaviour(drop.drop_behaviour);
            }
            Statement::CreateTable(create) => self.create_table(create),
            Statement::DropTable(drop) => {
                self.push("DROP TABLE ");
                self.lexeme(drop.table_name);
                self.drop_behaviour(drop.drop_behaviour);
            }
            Statement::AlterTable(alter) => self.alter_table(alter),
            Statement::CreateView(create) => self.create_view(create),
            Statement::DropView(drop) => {
                self.push("DROP VIEW ");
                self.lexeme(drop.table_name);
                self.drop_behaviour(drop.drop_behaviour);
            }
            Statement::Select(select) => self.query_specification(&select.query),
            Statement::Insert(insert) => self.insert(insert),
            Statement::Update(update) => self.update(update),
            Statement::Delete(delete) => {
                self.push("DELETE FROM ");
                self.lexeme(delete.table_name);
                if let Some(condition) = &delete.where_condition {
                    self.push(" WHERE ");
                    self.search_condition(condition);
                }
            }
            Statement::Grant(grant) => self.grant(grant),
            Statement::Commit => self.push("COMMIT"),
            Statement::Rollback => self.push("ROLLBACK"),
        }
    }

    fn create_schema(&mut self, create: &CreateSchemaStatement) {
        self.push("CREATE SCHEMA ");
        self.lexeme(create.schema_name);
        if let Some(authorization) = create.authorization_identifier {
            self.push(" AUTHORIZATION ");
            self.lexeme(authorization);
        }
        if let Some(charset) = create.default_charset {
            self.push(" DEFAULT CHARACTER SET ");
            self.lexeme(charset);
        }
        if let Some(collation) = create.default_collation {
            self.push(" COLLATE ");
            self.lexeme(collation);
        }
    }

    fn drop_behaviour(&mut self, behaviour: DropBehaviour) {
        match behaviour {
            DropBehaviour::Cascade => self.push(" CASCADE"),
            DropBehaviour::Restrict => self.push(" RESTRICT"),
        }
    }

    fn create_table(&mut self, create: &CreateTableStatement) {
        self.push("CREATE ");
        match create.table_type {
            TableType::Normal => {}
            TableType::TemporaryGlobal => self.push("GLOBAL TEMPORARY "),
            TableType::TemporaryLocal => self.push("LOCAL TEMPORARY "),
        }
        self.push("TABLE ");
        self.lexeme(create.table_name);
        self.push(" (");
        let mut first = true;
        for column in &create.column_definitions {
            if !first {
                self.push(", ");
            }
            first = false;
            self.column_definition(column);
        }
        for constraint in &create.constraints {
            if !first {
                self.push(", ");
            }
            first = false;
            self.constraint(constraint);
        }
        self.push(")");
    }

    fn alter_table(&mut self, alter: &AlterTableStatement) {
        self.push("ALTER TABLE ");
        self.lexeme(alter.table_name);
        self.push(" ");
        match &alter.action {
            AlterTableAction::AddColumn(column) => {
                self.push("ADD COLUMN ");
                self.column_definition(column);
            }
            AlterTableAction::AddConstraint(constraint) => {
                self.push("ADD ");
                self.constraint(constraint);
            }
            AlterTableAction::AlterColumn {
                column_name,
                action,
            } => {
                self.push("ALTER COLUMN ");
                self.lexeme(*column_name);
                match action {
                    AlterColumnAction::SetDefault(descriptor) => {
                        self.push(" SET ");
                        self.default_descriptor(descriptor);
                    }
                    AlterColumnAction::DropDefault => self.push(" DROP DEFAULT"),
                }
            }
            AlterTableAction::DropColumn {
                column_name,
                drop_behaviour,
            } => {
                self.push("DROP COLUMN ");
                self.lexeme(*column_name);
                self.drop_behaviour(*drop_behaviour);
            }
            AlterTableAction::DropConstraint {
                constraint_name,
                drop_behaviour,
            } => {
                self.push("DROP CONSTRAINT ");
                self.lexeme(*constraint_name);
                self.drop_behaviour(*drop_behaviour);
            }
        }
    }

    fn create_view(&mut self, create: &CreateViewStatement) {
        self.push("CREATE VIEW ");
        self.lexeme(create.table_name);
        if !create.columns.is_empty() {
            self.push(" (");
            self.identifier_list(&create.columns);
            self.push(")");
        }
        self.push(" AS ");
        self.query_expression(&create.query);
        match create.check_option {
            CheckOption::None => {}
            CheckOption::Local => self.push(" WITH LOCAL CHECK OPTION"),
            CheckOption::Cascaded => self.push(" WITH CASCADED CHECK OPTION"),
        }
    }

    fn insert(&mut self, insert: &InsertStatement) {
        self.push("INSERT INTO ");
        self.lexeme(insert.table_name);
        if !insert.insert_columns.is_empty() {
            self.push(" (");
            self.identifier_list(&insert.insert_columns);
            self.push(")");
        }
        self.push(" ");
        self.query_expression(&insert.query);
    }

    fn update(&mut self, update: &UpdateStatement) {
        self.push("UPDATE ");
        self.lexeme(update.table_name);
        self.push(" SET ");
        for (index, set_column) in update.set_columns.iter().enumerate() {
            if index > 0 {
                self.push(", ");
            }
            self.lexeme(set_column.column_name);
            self.push(" = ");
            match &set_column.value {
                SetColumnValue::Null => self.push("NULL"),
                SetColumnValue::Default => self.push("DEFAULT"),
                SetColumnValue::Value(value) => self.value_expression(value),
            }
        }
        if let Some(condition) = &update.where_condition {
            self.push(" WHERE ");
            self.search_condition(condition);
        }
    }

    fn grant(&mut self, grant: &GrantStatement) {
        self.push("GRANT ");
        if grant.all_privileges() {
            self.push("ALL PRIVILEGES");
        } else {
            for (index, action) in grant.privileges.iter().enumerate() {
                if index > 0 {
                    self.push(", ");
                }
                self.push(match action.kind {
                    GrantActionKind::Select => "SELECT",
                    GrantActionKind::Delete => "DELETE",
                    GrantActionKind::Insert => "INSERT",
                    GrantActionKind::Update => "UPDATE",
                    GrantActionKind::References => "REFERENCES",
                    GrantActionKind::Usage => "USAGE",
                });
                if !action.columns.is_empty() {
                    self.push(" (");
                    self.identifier_list(&action.columns);
                    self.push(")");
                }
            }
        }
        self.push(" ON ");
        self.lexeme(grant.on);
        self.push(" TO ");
        match grant.to {
            Some(grantee) => self.lexeme(grantee),
            None => self.push("PUBLIC"),
        }
        if grant.with_grant_option {
            self.push(" WITH GRANT OPTION");
        }
    }

    fn column_definition(&mut self, column: &ColumnDefinition) {
        self.lexeme(column.name);
        self.push(" ");
        self.data_type(&column.data_type);
        if let Some(descriptor) = &column.default_descriptor {
            self.push(" ");
            self.default_descriptor(descriptor);
        }
        for constraint in &column.constraints {
            self.push(" ");
            self.constraint(constraint);
        }
        if let Some(collate) = column.collate {
            self.push(" COLLATE ");
            self.lexeme(collate);
        }
    }

    fn default_descriptor(&mut self, descriptor: &DefaultDescriptor) {
        self.push("DEFAULT ");
        match descriptor.kind {
            DefaultKind::Literal => {
                if let Some(literal) = descriptor.literal {
                    self.unsigned_value_specification(&literal);
                }
            }
            DefaultKind::User => self.push("USER"),
            DefaultKind::CurrentUser => self.push("CURRENT_USER"),
            DefaultKind::SessionUser => self.push("SESSION_USER"),
            DefaultKind::SystemUser => self.push("SYSTEM_USER"),
            DefaultKind::CurrentDate => self.push("CURRENT_DATE"),
            DefaultKind::CurrentTime => {
                self.push("CURRENT_TIME");
                self.precision(descriptor.precision);
            }
            DefaultKind::CurrentTimestamp => {
                self.push("CURRENT_TIMESTAMP");
                self.precision(descriptor.precision);
            }
            DefaultKind::Null => self.push("NULL"),
        }
    }

    fn precision(&mut self, precision: Option<usize>) {
        if let Some(precision) = precision {
            self.push("(");
            self.push(&precision.to_string());
            self.push(")");
        }
    }

    fn constraint(&mut self, constraint: &Constraint) {
        if let Some(name) = constraint.name {
            self.push("CONSTRAINT ");
            self.lexeme(name);
            self.push(" ");
        }
        match &constraint.kind {
            ConstraintKind::NotNull => self.push("NOT NULL"),
            ConstraintKind::Unique { columns } => {
                self.push("UNIQUE");
                if !columns.is_empty() {
                    self.push(" (");
                    self.identifier_list(columns);
                    self.push(")");
                }
            }
            ConstraintKind::PrimaryKey { columns } => {
                self.push("PRIMARY KEY");
                if !columns.is_empty() {
                    self.push(" (");
                    self.identifier_list(columns);
                    self.push(")");
                }
            }
            ConstraintKind::ForeignKey(foreign_key) => self.foreign_key(foreign_key),
            ConstraintKind::Check(condition) => {
                self.push("CHECK (");
                self.search_condition(condition);
                self.push(")");
            }
        }
    }

    fn foreign_key(&mut self, foreign_key: &ForeignKeyConstraint) {
        if !foreign_key.columns.is_empty() {
            self.push("FOREIGN KEY (");
            self.identifier_list(&foreign_key.columns);
            self.push(") ");
        }
        self.push("REFERENCES ");
        self.lexeme(foreign_key.referenced_table);
        if !foreign_key.referenced_columns.is_empty() {
            self.push(" (");
            self.identifier_list(&foreign_key.referenced_columns);
            self.push(")");
        }
        match foreign_key.match_kind {
            Some(MatchKind::Full) => self.push(" MATCH FULL"),
            Some(MatchKind::Partial) => self.push(" MATCH PARTIAL"),
            None => {}
        }
        if let Some(action) = foreign_key.on_update {
            self.push(" ON UPDATE ");
            self.referential_action(action);
        }
        if let Some(action) = foreign_key.on_delete {
            self.push(" ON DELETE ");
            self.referential_action(action);
        }
    }

    fn referential_action(&mut self, action: ReferentialAction) {
        self.push(match action {
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::SetDefault => "SET DEFAULT",
        });
    }

    fn data_type(&mut self, data_type: &DataType) {
        match data_type {
            DataType::CharString {
                kind,
                size,
                charset,
            } => {
                self.push(match kind {
                    CharStringKind::Char => "CHAR",
                    CharStringKind::Varchar => "CHAR VARYING",
                    CharStringKind::NChar => "NCHAR",
                    CharStringKind::NVarchar => "NCHAR VARYING",
                });
                self.precision(*size);
                if let Some(charset) = charset {
                    self.push(" CHARACTER SET ");
                    self.lexeme(*charset);
                }
            }
            DataType::BitString { varying, size } => {
                self.push("BIT");
                if *varying {
                    self.push(" VARYING");
                }
                self.precision(*size);
            }
            DataType::ExactNumeric {
                kind,
                precision,
                scale,
            } => {
                self.push(match kind {
                    ExactNumericKind::Int => "INT",
                    ExactNumericKind::SmallInt => "SMALLINT",
                    ExactNumericKind::Numeric => "NUMERIC",
                    ExactNumericKind::Decimal => "DECIMAL",
                });
                if let Some(precision) = precision {
                    self.push("(");
                    self.push(&precision.to_string());
                    if let Some(scale) = scale {
                        self.push(", ");
                        self.push(&scale.to_string());
                    }
                    self.push(")");
                }
            }
            DataType::ApproximateNumeric { kind, precision } => {
                self.push(match kind {
                    ApproximateNumericKind::Float => "FLOAT",
                    ApproximateNumericKind::Real => "REAL",
                    ApproximateNumericKind::Double => "DOUBLE PRECISION",
                });
                self.precision(*precision);
            }
            DataType::Datetime {
                kind,
                precision,
                with_tz,
            } => {
                self.push(match kind {
                    DatetimeKind::Date => "DATE",
                    DatetimeKind::Time => "TIME",
                    DatetimeKind::Timestamp => "TIMESTAMP",
                });
                self.precision(*precision);
                if *with_tz {
                    self.push(" WITH TIME ZONE");
                }
            }
            DataType::Interval(qualifier) => {
                self.push("INTERVAL ");
                self.interval_qualifier(qualifier);
            }
        }
    }

    fn interval_qualifier(&mut self, qualifier: &IntervalQualifier) {
        self.datetime_field(&qualifier.start);
        if let Some(end) = &qualifier.end {
            self.push(" TO ");
            self.datetime_field(end);
        }
    }

    fn datetime_field(&mut self, field: &DatetimeField) {
        self.push(match field.unit {
            IntervalUnit::Year => "YEAR",
            IntervalUnit::Month => "MONTH",
            IntervalUnit::Day => "DAY",
            IntervalUnit::Hour => "HOUR",
            IntervalUnit::Minute => "MINUTE",
            IntervalUnit::Second => "SECOND",
        });
        match (field.precision, field.fractional_precision) {
            (Some(precision), Some(fractional)) => {
                self.push("(");
                self.push(&precision.to_string());
                self.push(", ");
                self.push(&fractional.to_string());
                self.push(")");
            }
            (Some(precision), None) => self.precision(Some(precision)),
            (None, Some(fractional)) => self.precision(Some(fractional)),
            (None, None) => {}
        }
    }

    fn query_expression(&mut self, query: &QueryExpression) {
        match query {
            QueryExpression::NonJoin(non_join) => self.non_join_query_expression(non_join),
            QueryExpression::JoinedTable(joined) => self.table_reference(joined),
        }
    }

    fn non_join_query_expression(&mut self, expression: &NonJoinQueryExpression) {
        match &expression.term.primary {
            NonJoinQueryPrimary::QuerySpecification(specification) => {
                self.query_specification(specification);
            }
            NonJoinQueryPrimary::TableValueConstructor(constructor) => {
                self.push("VALUES ");
                for (index, value) in constructor.values.iter().enumerate() {
                    if index > 0 {
                        self.push(", ");
                    }
                    self.row_value_constructor(value);
                }
            }
            NonJoinQueryPrimary::ExplicitTable(name) => {
                self.push("TABLE ");
                self.lexeme(*name);
            }
            NonJoinQueryPrimary::Subexpression(inner) => {
                self.push("(");
                self.non_join_query_expression(inner);
                self.push(")");
            }
        }
    }

    fn query_specification(&mut self, specification: &QuerySpecification) {
        self.push("SELECT ");
        if specification.distinct {
            self.push("DISTINCT ");
        }
        for (index, column) in specification.selected_columns.iter().enumerate() {
            if index > 0 {
                self.push(", ");
            }
            match &column.value {
                Some(value) => self.value_expression(value),
                None => self.push("*"),
            }
            if let Some(alias) = column.alias {
                self.push(" AS ");
                self.lexeme(alias);
            }
        }
        self.table_expression(&specification.table_expression);
    }

    fn table_expression(&mut self, expression: &TableExpression) {
        self.push(" FROM ");
        for (index, reference) in expression.referenced_tables.iter().enumerate() {
            if index > 0 {
                self.push(", ");
            }
            self.table_reference(reference);
        }
        if let Some(condition) = &expression.where_condition {
            self.push(" WHERE ");
            self.search_condition(condition);
        }
        if !expression.group_by_columns.is_empty() {
            self.push(" GROUP BY ");
            for (index, group) in expression.group_by_columns.iter().enumerate() {
                if index > 0 {
                    self.push(", ");
                }
                self.lexeme(group.column);
                if let Some(collation) = group.collation {
                    self.push(" COLLATE ");
                    self.lexeme(collation);
                }
            }
        }
        if let Some(condition) = &expression.having_condition {
            self.push(" HAVING ");
            self.search_condition(condition);
        }
    }

    fn table_reference(&mut self, reference: &TableReference) {
        match reference {
            TableReference::Table { table_name, alias } => {
                self.lexeme(*table_name);
                if let Some(alias) = alias {
                    self.push(" AS ");
                    self.lexeme(*alias);
                }
            }
            TableReference::DerivedTable { table_name, query } => {
                self.push("(");
                self.query_expression(query);
                self.push(") AS ");
                self.lexeme(*table_name);
            }
            TableReference::JoinedTable(joined) => {
                self.table_reference(&joined.left);
                self.push(match joined.join_type {
                    JoinType::Cross => " CROSS JOIN ",
                    JoinType::Inner => " INNER JOIN ",
                    JoinType::Left => " LEFT JOIN ",
                    JoinType::Right => " RIGHT JOIN ",
                    JoinType::Full => " FULL JOIN ",
                    JoinType::Natural => " NATURAL JOIN ",
                    JoinType::Union => " UNION JOIN ",
                });
                self.table_reference(&joined.right);
                if let Some(spec) = &joined.spec {
                    if let Some(condition) = &spec.condition {
                        self.push(" ON ");
                        self.search_condition(condition);
                    } else if !spec.named_columns.is_empty() {
                        self.push(" USING (");
                        self.identifier_list(&spec.named_columns);
                        self.push(")");
                    }
                }
            }
        }
    }

    fn search_condition(&mut self, condition: &SearchCondition) {
        for (index, term) in condition.terms.iter().enumerate() {
            if index > 0 {
                self.push(" OR ");
            }
            self.boolean_term(term);
        }
    }

    fn boolean_term(&mut self, term: &BooleanTerm) {
        self.boolean_factor(&term.factor);
        let mut next = &term.and_operand;
        while let Some(operand) = next {
            self.push(" AND ");
            self.boolean_factor(&operand.factor);
            next = &operand.and_operand;
        }
    }

    fn boolean_factor(&mut self, factor: &BooleanFactor) {
        if factor.reverse_op {
            self.push("NOT ");
        }
        match &factor.kind {
            BooleanFactorKind::Predicate(predicate) => self.predicate(predicate),
            BooleanFactorKind::NestedCondition(condition) => {
                self.push("(");
                self.search_condition(condition);
                self.push(")");
            }
        }
    }

    fn predicate(&mut self, predicate: &Predicate) {
        match predicate {
            Predicate::Comparison { op, left, right } => {
                self.row_value_constructor(left);
                self.push(match op {
                    CompOp::Equal => " = ",
                    CompOp::NotEqual => " <> ",
                    CompOp::LessThan => " < ",
                    CompOp::GreaterThan => " > ",
                    CompOp::LessThanEqual => " <= ",
                    CompOp::GreaterThanEqual => " >= ",
                });
                self.row_value_constructor(right);
            }
            Predicate::Between {
                left,
                comp_left,
                comp_right,
            } => {
                self.row_value_constructor(left);
                self.push(" BETWEEN ");
                self.row_value_constructor(comp_left);
                self.push(" AND ");
                self.row_value_constructor(comp_right);
            }
            Predicate::Null { left } => {
                self.row_value_constructor(left);
                self.push(" IS NULL");
            }
            Predicate::InValues { left, values } => {
                self.row_value_constructor(left);
                self.push(" IN (");
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        self.push(", ");
                    }
                    self.value_expression(value);
                }
                self.push(")");
            }
            Predicate::InSubquery { left, subquery } => {
                self.row_value_constructor(left);
                self.push(" IN (");
                self.query_expression(subquery);
                self.push(")");
            }
            Predicate::Like {
                left,
                pattern,
                escape_char,
            } => {
                self.row_value_constructor(left);
                self.push(" LIKE ");
                self.row_value_constructor(pattern);
                if let Some(escape_char) = escape_char {
                    self.push(" ESCAPE '");
                    self.lexeme(*escape_char);
                    self.push("'");
                }
            }
            Predicate::Exists { subquery } => {
                self.push("EXISTS (");
                self.query_expression(subquery);
                self.push(")");
            }
            Predicate::Unique { subquery } => {
                self.push("UNIQUE (");
                self.query_expression(subquery);
                self.push(")");
            }
        }
    }

    fn row_value_constructor(&mut self, constructor: &RowValueConstructor) {
        match constructor {
            RowValueConstructor::ValueExpression(value) => self.value_expression(value),
            RowValueConstructor::Null => self.push("NULL"),
            RowValueConstructor::Default => self.push("DEFAULT"),
            RowValueConstructor::ValueList(values) => {
                self.push("(");
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        self.push(", ");
                    }
                    self.row_value_constructor(value);
                }
                self.push(")");
            }
            RowValueConstructor::RowSubquery(query) => {
                self.push("(");
                self.query_expression(query);
                self.push(")");
            }
        }
    }

    fn value_expression(&mut self, value: &ValueExpression) {
        match value {
            ValueExpression::Numeric(numeric) => self.numeric_expression(numeric),
            ValueExpression::Character(character) => self.character_value_expression(character),
            ValueExpression::Datetime(datetime) => self.datetime_value_expression(datetime),
            ValueExpression::Interval(interval) => self.interval_value_expression(interval),
        }
    }

    fn numeric_expression(&mut self, expression: &NumericExpression) {
        self.numeric_term(&expression.left);
        for (op, term) in &expression.rest {
            self.numeric_op(*op);
            self.numeric_term(term);
        }
    }

    fn numeric_op(&mut self, op: NumericOp) {
        self.push(match op {
            NumericOp::Add => " + ",
            NumericOp::Subtract => " - ",
            NumericOp::Multiply => " * ",
            NumericOp::Divide => " / ",
        });
    }

    fn numeric_term(&mut self, term: &NumericTerm) {
        self.numeric_factor(&term.left);
        for (op, factor) in &term.rest {
            self.numeric_op(*op);
            self.numeric_factor(factor);
        }
    }

    fn numeric_factor(&mut self, factor: &NumericFactor) {
        self.sign(factor.sign);
        match &factor.primary {
            NumericPrimary::Value(primary) => self.value_expression_primary(primary),
            NumericPrimary::Function(function) => self.numeric_function(function),
        }
    }

    fn sign(&mut self, sign: Option<Sign>) {
        match sign {
            Some(Sign::Plus) => self.push("+ "),
            Some(Sign::Minus) => self.push("- "),
            None => {}
        }
    }

    fn character_value_expression(&mut self, expression: &CharacterValueExpression) {
        for (index, factor) in expression.values.iter().enumerate() {
            if index > 0 {
                self.push(" || ");
            }
            self.character_factor(factor);
        }
    }

    fn character_factor(&mut self, factor: &CharacterFactor) {
        match &factor.primary {
            CharacterPrimary::Value(primary) => self.value_expression_primary(primary),
            CharacterPrimary::Function(function) => self.string_function(function),
        }
        if let Some(collation) = factor.collation {
            self.push(" COLLATE ");
            self.lexeme(collation);
        }
    }

    fn datetime_value_expression(&mut self, expression: &DatetimeValueExpression) {
        self.datetime_factor(&expression.left.value);
        if let (Some(op), Some(right)) = (expression.op, &expression.right) {
            self.numeric_op(op);
            self.interval_term(right);
        }
    }

    fn datetime_factor(&mut self, factor: &DatetimeFactor) {
        match &factor.primary {
            DatetimePrimary::Value(primary) => self.value_expression_primary(primary),
            DatetimePrimary::Function(function) => self.datetime_function(function),
        }
        match factor.time_zone {
            Some(TimeZoneSpecifier::Local) => self.push(" AT LOCAL"),
            Some(TimeZoneSpecifier::TimeZone(zone)) => {
                self.push(" AT TIME ZONE '");
                self.lexeme(zone);
                self.push("'");
            }
            None => {}
        }
    }

    fn datetime_function(&mut self, function: &DatetimeFunction) {
        self.push(match function.kind {
            DatetimeFunctionKind::CurrentDate => "CURRENT_DATE",
            DatetimeFunctionKind::CurrentTime => "CURRENT_TIME",
            DatetimeFunctionKind::CurrentTimestamp => "CURRENT_TIMESTAMP",
        });
        self.precision(function.precision);
    }

    fn interval_value_expression(&mut self, expression: &IntervalValueExpression) {
        self.interval_term(&expression.left);
        if let (Some(op), Some(right)) = (expression.op, &expression.right) {
            self.numeric_op(op);
            self.interval_term(right);
        }
    }

    fn interval_term(&mut self, term: &IntervalTerm) {
        self.interval_factor(&term.left);
        if let (Some(op), Some(right)) = (term.op, &term.right) {
            self.numeric_op(op);
            self.numeric_factor(right);
        }
    }

    fn interval_factor(&mut self, factor: &IntervalFactor) {
        self.sign(factor.sign);
        self.value_expression_primary(&factor.primary.value);
        if let Some(qualifier) = &factor.primary.qualifier {
            self.push(" ");
            self.interval_qualifier(qualifier);
        }
    }

    fn value_expression_primary(&mut self, primary: &ValueExpressionPrimary) {
        match primary {
            ValueExpressionPrimary::UnsignedValueSpecification(specification) => {
                self.unsigned_value_specification(specification);
            }
            ValueExpressionPrimary::ColumnReference(lexeme) => self.lexeme(*lexeme),
            ValueExpressionPrimary::SetFunction(function) => self.set_function(function),
            ValueExpressionPrimary::ScalarSubquery { query, .. } => {
                self.push("(");
                self.query_expression(query);
                self.push(")");
            }
            ValueExpressionPrimary::CaseExpression(case) => self.case_expression(case),
            ValueExpressionPrimary::Parenthesized { value, .. } => {
                self.push("(");
                self.value_expression(value);
                self.push(")");
            }
            ValueExpressionPrimary::CastSpecification(cast) => self.cast_specification(cast),
        }
    }

    fn unsigned_value_specification(&mut self, specification: &UnsignedValueSpecification) {
        match specification.kind {
            UvsKind::UnsignedNumeric => self.lexeme(specification.lexeme),
            UvsKind::CharacterString => self.quoted(specification.lexeme, "'"),
            UvsKind::NationalCharacterString => self.quoted(specification.lexeme, "N'"),
            UvsKind::BitString => self.quoted(specification.lexeme, "B'"),
            UvsKind::HexString => self.quoted(specification.lexeme, "X'"),
            UvsKind::DateLiteral => {
                self.push("DATE ");
                self.quoted(specification.lexeme, "'");
            }
            UvsKind::TimeLiteral => {
                self.push("TIME ");
                self.quoted(specification.lexeme, "'");
            }
            UvsKind::TimestampLiteral => {
                self.push("TIMESTAMP ");
                self.quoted(specification.lexeme, "'");
            }
            UvsKind::IntervalLiteral => {
                self.push("INTERVAL ");
                self.quoted(specification.lexeme, "'");
            }
            UvsKind::Parameter => {
                if specification.lexeme.text(self.input) == "?" {
                    self.push("?");
                } else {
                    self.push(":");
                    self.lexeme(specification.lexeme);
                }
            }
            UvsKind::User => self.push("USER"),
            UvsKind::CurrentUser => self.push("CURRENT_USER"),
            UvsKind::SessionUser => self.push("SESSION_USER"),
            UvsKind::SystemUser => self.push("SYSTEM_USER"),
            UvsKind::Value => self.push("VALUE"),
        }
    }

    fn quoted(&mut self, lexeme: Lexeme, opener: &str) {
        self.push(opener);
        self.lexeme(lexeme);
        self.push("'");
    }

    fn set_function(&mut self, function: &SetFunction) {
        self.push(match function.kind {
            SetFunctionKind::Count => "COUNT(",
            SetFunctionKind::Avg => "AVG(",
            SetFunctionKind::Min => "MIN(",
            SetFunctionKind::Max => "MAX(",
            SetFunctionKind::Sum => "SUM(",
        });
        if function.star {
            self.push("*");
        } else {
            if function.distinct {
                self.push("DISTINCT ");
            }
            if let Some(operand) = &function.operand {
                self.value_expression(operand);
            }
        }
        self.push(")");
    }

    fn case_expression(&mut self, case: &CaseExpression) {
        match case {
            CaseExpression::Coalesce { values, .. } => {
                self.push("COALESCE(");
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        self.push(", ");
                    }
                    self.value_expression(value);
                }
                self.push(")");
            }
            CaseExpression::Nullif { left, right, .. } => {
                self.push("NULLIF(");
                self.value_expression(left);
                self.push(", ");
                self.value_expression(right);
                self.push(")");
            }
            CaseExpression::SimpleCase(simple) => {
                self.push("CASE ");
                self.value_expression(&simple.operand);
                for clause in &simple.when_clauses {
                    self.push(" WHEN ");
                    self.value_expression(&clause.operand);
                    self.push(" THEN ");
                    self.value_expression(&clause.result);
                }
                if let Some(else_value) = &simple.else_value {
                    self.push(" ELSE ");
                    self.value_expression(else_value);
                }
                self.push(" END");
            }
            CaseExpression::SearchedCase(searched) => {
                self.push("CASE");
                for clause in &searched.when_clauses {
                    self.push(" WHEN ");
                    self.search_condition(&clause.condition);
                    self.push(" THEN ");
                    self.value_expression(&clause.result);
                }
                if let Some(else_value) = &searched.else_value {
                    self.push(" ELSE ");
                    self.value_expression(else_value);
                }
                self.push(" END");
            }
        }
    }

    fn cast_specification(&mut self, cast: &CastSpecification) {
        self.push("CAST(");
        match &cast.operand {
            Some(operand) => self.value_expression(operand),
            None => self.push("NULL"),
        }
        self.push(" AS ");
        self.data_type(&cast.target);
        self.push(")");
    }

    fn numeric_function(&mut self, function: &NumericFunction) {
        match function {
            NumericFunction::Position { to_find, subject } => {
                self.push("POSITION(");
                self.value_expression(to_find);
                self.push(" IN ");
                self.value_expression(subject);
                self.push(")");
            }
            NumericFunction::Extract { field, source } => {
                self.push("EXTRACT(");
                self.push(match field {
                    IntervalUnit::Year => "YEAR",
                    IntervalUnit::Month => "MONTH",
                    IntervalUnit::Day => "DAY",
                    IntervalUnit::Hour => "HOUR",
                    IntervalUnit::Minute => "MINUTE",
                    IntervalUnit::Second => "SECOND",
                });
                self.push(" FROM ");
                self.value_expression(source);
                self.push(")");
            }
            NumericFunction::CharLength { operand } => {
                self.push("CHAR_LENGTH(");
                self.value_expression(operand);
                self.push(")");
            }
            NumericFunction::OctetLength { operand } => {
                self.push("OCTET_LENGTH(");
                self.value_expression(operand);
                self.push(")");
            }
            NumericFunction::BitLength { operand } => {
                self.push("BIT_LENGTH(");
                self.value_expression(operand);
                self.push(")");
            }
        }
    }

    fn string_function(&mut self, function: &StringFunction) {
        match function {
            StringFunction::Upper { operand } => {
                self.push("UPPER(");
                self.value_expression(operand);
                self.push(")");
            }
            StringFunction::Lower { operand } => {
                self.push("LOWER(");
                self.value_expression(operand);
                self.push(")");
            }
            StringFunction::Substring {
                operand,
                start_position,
                for_length,
            } => {
                self.push("SUBSTRING(");
                self.value_expression(operand);
                self.push(" FROM ");
                self.value_expression(start_position);
                if let Some(for_length) = for_length {
                    self.push(" FOR ");
                    self.value_expression(for_length);
                }
                self.push(")");
            }
            StringFunction::Convert {
                operand,
                conversion_name,
            } => {
                self.push("CONVERT(");
                self.value_expression(operand);
                self.push(" USING ");
                self.lexeme(*conversion_name);
                self.push(")");
            }
            StringFunction::Translate {
                operand,
                translation_name,
            } => {
                self.push("TRANSLATE(");
                self.value_expression(operand);
                self.push(" USING ");
                self.lexeme(*translation_name);
                self.push(")");
            }
            StringFunction::Trim {
                specification,
                trim_character,
                operand,
            } => {
                self.push("TRIM(");
                if let Some(trim_character) = trim_character {
                    self.push(match specification {
                        TrimSpecification::Leading => "LEADING ",
                        TrimSpecification::Trailing => "TRAILING ",
                        TrimSpecification::Both => "BOTH ",
                    });
                    self.value_expression(trim_character);
                    self.push(" FROM ");
                }
                self.value_expression(operand);
                self.push(")");
            }
        }
    }
}
