//! Recursive descent over the SQL-92 grammar, one function per production.
//!
//! Every production takes the parse context and returns
//! `Result<Parsed<T>, SyntaxError>`:
//!
//! * `Ok(Parsed::Matched(node))` — the production matched and consumed
//!   tokens. `node` is `None` only when statement construction is disabled.
//! * `Ok(Parsed::NoMatch)` — the production did not match and consumed
//!   nothing the caller cannot roll back; used for soft backtracking
//!   between grammar alternatives that share a prefix.
//! * `Err(_)` — the production committed to a branch and then failed.
//!   Alternatives are not tried; the error propagates to the caller.

mod column_definition;
mod data_type;
mod expression;
mod predicate;
mod query;
mod statements;
mod table_reference;
mod value;

pub(crate) use column_definition::parse_interval_qualifier;

use crate::ast::Statement;
use crate::errors::{SyntaxError, expect_any_error, expect_error, production_error};
use crate::lexeme::Lexeme;
use crate::lexer::{Lexer, LexerState};
use crate::syntax::SyntaxKind;
use crate::token::Token;

/// The outcome of one production attempt.
pub(crate) enum Parsed<T> {
    Matched(Option<T>),
    NoMatch,
}

impl<T> Parsed<T> {
    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        match self {
            Parsed::Matched(node) => Parsed::Matched(node.map(f)),
            Parsed::NoMatch => Parsed::NoMatch,
        }
    }
}

pub(crate) type Production<T> = Result<Parsed<T>, SyntaxError>;

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Drive the grammar without building any AST nodes. Token consumption
    /// and error behavior are identical either way.
    pub disable_statement_construction: bool,
}

pub(crate) struct ParseContext<'a> {
    pub(crate) lexer: Lexer<'a>,
    opts: ParseOptions,
}

impl<'a> ParseContext<'a> {
    pub(crate) fn new(input: &'a str, opts: ParseOptions) -> Self {
        let mut lexer = Lexer::new(input);
        lexer.next();
        Self { lexer, opts }
    }

    pub(crate) fn input(&self) -> &'a str {
        self.lexer.input()
    }

    pub(crate) fn cur(&self) -> Token {
        self.lexer.current()
    }

    pub(crate) fn advance(&mut self) -> Token {
        self.lexer.next()
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.cur().kind == kind
    }

    /// Consume the current token when it has the requested kind.
    pub(crate) fn accept(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.at(kind) {
            let token = self.cur();
            self.advance();
            Some(token)
        } else {
            None
        }
    }

    pub(crate) fn expect(&mut self, kind: SyntaxKind) -> Result<Token, SyntaxError> {
        self.accept(kind)
            .ok_or_else(|| expect_error(self.input(), self.cur(), kind))
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<Lexeme, SyntaxError> {
        Ok(self.expect(SyntaxKind::Identifier)?.lexeme)
    }

    /// Consume an unsigned integer literal and decode its value; used for
    /// length and precision specifiers.
    pub(crate) fn expect_unsigned_integer(&mut self) -> Result<usize, SyntaxError> {
        let token = self.expect(SyntaxKind::LiteralUnsignedInteger)?;
        token
            .lexeme
            .text(self.input())
            .parse()
            .map_err(|_| production_error(self.input(), token, "<unsigned integer>"))
    }

    pub(crate) fn state(&self) -> LexerState {
        self.lexer.state()
    }

    pub(crate) fn restore(&mut self, state: LexerState) {
        log::trace!(
            "backtracking from {:?} at cursor {}",
            self.cur().kind,
            self.cur().lexeme.start()
        );
        self.lexer.restore(state);
    }

    pub(crate) fn building(&self) -> bool {
        !self.opts.disable_statement_construction
    }

    /// Build an AST node unless statement construction is disabled.
    pub(crate) fn build<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        self.building().then(f)
    }

    pub(crate) fn expected(&self, kind: SyntaxKind) -> SyntaxError {
        expect_error(self.input(), self.cur(), kind)
    }

    pub(crate) fn expected_any(&self, kinds: &[SyntaxKind]) -> SyntaxError {
        expect_any_error(self.input(), self.cur(), kinds)
    }

    /// An error naming a non-terminal, e.g. `<table reference>`.
    pub(crate) fn expected_production(&self, what: &str) -> SyntaxError {
        production_error(self.input(), self.cur(), what)
    }
}

/// Select the statement parser from the leading keyword.
pub(crate) fn parse_statement(ctx: &mut ParseContext) -> Result<Option<Statement>, SyntaxError> {
    match ctx.cur().kind {
        SyntaxKind::Create => {
            if let Parsed::Matched(node) = statements::parse_create_schema(ctx)? {
                return Ok(node.map(Statement::CreateSchema));
            }
            if let Parsed::Matched(node) = statements::parse_create_table(ctx)? {
                return Ok(node.map(Statement::CreateTable));
            }
            if let Parsed::Matched(node) = statements::parse_create_view(ctx)? {
                return Ok(node.map(Statement::CreateView));
            }
            ctx.advance();
            Err(ctx.expected_any(&[
                SyntaxKind::Schema,
                SyntaxKind::Table,
                SyntaxKind::View,
                SyntaxKind::Global,
                SyntaxKind::Local,
                SyntaxKind::Temporary,
            ]))
        }
        SyntaxKind::Drop => {
            if let Parsed::Matched(node) = statements::parse_drop_schema(ctx)? {
                return Ok(node.map(Statement::DropSchema));
            }
            if let Parsed::Matched(node) = statements::parse_drop_table(ctx)? {
                return Ok(node.map(Statement::DropTable));
            }
            if let Parsed::Matched(node) = statements::parse_drop_view(ctx)? {
                return Ok(node.map(Statement::DropView));
            }
            ctx.advance();
            Err(ctx.expected_any(&[SyntaxKind::Schema, SyntaxKind::Table, SyntaxKind::View]))
        }
        SyntaxKind::Alter => {
            let parsed = statements::parse_alter_table(ctx)?.map(Statement::AlterTable);
            committed(ctx, parsed)
        }
        SyntaxKind::Select => {
            let parsed = statements::parse_select(ctx)?.map(Statement::Select);
            committed(ctx, parsed)
        }
        SyntaxKind::Insert => {
            let parsed = statements::parse_insert(ctx)?.map(Statement::Insert);
            committed(ctx, parsed)
        }
        SyntaxKind::Update => {
            let parsed = statements::parse_update(ctx)?.map(Statement::Update);
            committed(ctx, parsed)
        }
        SyntaxKind::Delete => {
            let parsed = statements::parse_delete(ctx)?.map(Statement::Delete);
            committed(ctx, parsed)
        }
        SyntaxKind::Grant => {
            let parsed = statements::parse_grant(ctx)?.map(Statement::Grant);
            committed(ctx, parsed)
        }
        SyntaxKind::Commit => {
            let parsed = statements::parse_commit(ctx)?;
            committed(ctx, parsed)
        }
        SyntaxKind::Rollback => {
            let parsed = statements::parse_rollback(ctx)?;
            committed(ctx, parsed)
        }
        _ => Err(ctx.expected_production("a statement")),
    }
}

/// Unwrap a production whose leading keyword the dispatcher already saw;
/// a miss at this point is a syntax error, not a backtrack.
fn committed(
    ctx: &ParseContext,
    parsed: Parsed<Statement>,
) -> Result<Option<Statement>, SyntaxError> {
    match parsed {
        Parsed::Matched(node) => Ok(node),
        Parsed::NoMatch => Err(ctx.expected_production("a statement")),
    }
}

/// A complete parse: one statement, an optional trailing semicolon, then
/// end of input.
pub(crate) fn parse_root(ctx: &mut ParseContext) -> Result<Option<Statement>, SyntaxError> {
    let statement = parse_statement(ctx)?;
    ctx.accept(SyntaxKind::Semicolon);
    if !ctx.at(SyntaxKind::Eos) {
        return Err(ctx.expected_any(&[SyntaxKind::Eos, SyntaxKind::Semicolon]));
    }
    Ok(statement)
}
