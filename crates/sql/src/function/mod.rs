//! Function descriptor framework: argument model, validation, type
//! inference and the rendering contract shared by all functions.

pub mod appender;
pub mod argument;
pub mod context;
pub mod ddl;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod null_safe;
pub mod parameters;
pub mod resolver;
pub mod sanitize;
pub mod types;
pub mod validator;

pub use appender::SqlAppender;
pub use argument::{ArgumentExpr, ColumnRef, KeyColumn, TableGroup};
pub use context::{InferenceContext, RenderContext};
pub use descriptor::{FunctionDescriptor, RenderedCall, Renderer};
pub use diagnostics::{CallSite, Diagnostics};
pub use error::FunctionError;
pub use parameters::ParameterSlot;
pub use types::{ArrayStorage, CollectionKind, PluralType, SqlType};
