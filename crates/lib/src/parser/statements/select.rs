//! The SELECT statement: a bare query specification at the top level.

use crate::ast::statement::SelectStatement;
use crate::parser::query::parse_query_specification;
use crate::parser::{Parsed, ParseContext, Production};

pub(crate) fn parse_select(ctx: &mut ParseContext) -> Production<SelectStatement> {
    match parse_query_specification(ctx)? {
        Parsed::Matched(query) => Ok(Parsed::Matched(
            query.map(|query| SelectStatement { query }),
        )),
        Parsed::NoMatch => Ok(Parsed::NoMatch),
    }
}
