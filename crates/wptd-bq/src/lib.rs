//! WPTD-BQ: Summary Records to Warehouse Rows
//!
//! This crate projects summary records into ordered row tuples matching an
//! externally supplied column schema. The warehouse loader itself lives
//! outside this workspace; rows leave as JSON values in schema order.

pub mod row;
pub mod schema;

pub use row::summary_to_row;
pub use schema::{parse_schema, Column};
