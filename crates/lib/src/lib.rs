//! squall-lib parses SQL-92 text (with a handful of SQL:2003 additions)
//! into a strongly typed abstract syntax tree.
//!
//! The crate is a library embedded by tools that need to inspect or
//! transform SQL. Feed [`parse`] a string; get back a [`ParseResult`]
//! holding either the root [`Statement`](ast::Statement) or caret-marked
//! error messages:
//!
//! ```rust
//! let result = squall_lib::parse("SELECT a FROM t1 WHERE a > 10");
//! assert!(result.is_success());
//! ```
//!
//! All terminal text in the tree is stored as byte ranges ([`Lexeme`])
//! into the input buffer, which therefore must outlive the tree. Parsing
//! holds no global state; independent parses may run on separate threads.

pub mod ast;
mod errors;
mod keywords;
mod lexeme;
mod lexer;
mod parser;
mod render;
mod syntax;
mod token;

pub use errors::{LexError, SyntaxError};
pub use lexeme::Lexeme;
pub use lexer::{Lexer, LexerState};
pub use parser::ParseOptions;
pub use render::to_sql;
pub use syntax::SyntaxKind;
pub use token::Token;

use crate::ast::Statement;

/// The overall outcome class of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseCode {
    Success,
    /// A production committed to a branch and the next token did not
    /// match.
    SyntaxError,
    /// A token could not be formed from the input.
    LexError,
}

/// What [`parse`] hands back: a code, the statement (absent on failure or
/// when construction is disabled), and the accumulated error messages in
/// the order they were produced.
#[derive(Debug)]
pub struct ParseResult {
    pub code: ParseCode,
    pub statement: Option<Statement>,
    pub errors: Vec<String>,
}

impl ParseResult {
    pub fn is_success(&self) -> bool {
        self.code == ParseCode::Success
    }
}

/// Parse one SQL statement, optionally terminated by a semicolon.
pub fn parse(input: &str) -> ParseResult {
    parse_with_options(input, ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: ParseOptions) -> ParseResult {
    let mut ctx = parser::ParseContext::new(input, options);
    match parser::parse_root(&mut ctx) {
        Ok(statement) => {
            // A failure token that every production backtracked over still
            // poisons the parse.
            if ctx.lexer.has_errors() {
                return ParseResult {
                    code: ParseCode::LexError,
                    statement: None,
                    errors: lexer_messages(&ctx),
                };
            }
            ParseResult {
                code: ParseCode::Success,
                statement,
                errors: Vec::new(),
            }
        }
        Err(error) => {
            let mut errors = lexer_messages(&ctx);
            let code = if errors.is_empty() {
                ParseCode::SyntaxError
            } else {
                ParseCode::LexError
            };
            errors.push(error.message);
            ParseResult {
                code,
                statement: None,
                errors,
            }
        }
    }
}

fn lexer_messages(ctx: &parser::ParseContext) -> Vec<String> {
    ctx.lexer
        .errors()
        .iter()
        .map(|error| error.message.clone())
        .collect()
}
