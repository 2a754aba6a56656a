mod delete;
mod grant;
mod insert;
mod schema;
mod select;
mod table;
mod transaction;
mod update;
mod view;

pub(crate) use delete::parse_delete;
pub(crate) use grant::parse_grant;
pub(crate) use insert::parse_insert;
pub(crate) use schema::{parse_create_schema, parse_drop_schema};
pub(crate) use select::parse_select;
pub(crate) use table::{parse_alter_table, parse_create_table, parse_drop_table};
pub(crate) use transaction::{parse_commit, parse_rollback};
pub(crate) use update::parse_update;
pub(crate) use view::{parse_create_view, parse_drop_view};
