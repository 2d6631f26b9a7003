#[macro_use]
pub mod macros;

pub use arrow::datatypes::DataType;
pub use plural_sql::{ArgumentExpr, Dialect, FunctionError, SqlType};
