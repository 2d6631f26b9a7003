//! Dialect-aware rendering of portable array functions.
//!
//! Queries use one set of array functions (`array_contains`, `array_slice`,
//! `unnest`, ...). This crate validates their arguments, infers their types
//! and renders each call as SQL the target database understands:
//! - **Native**: the database's own array functions (PostgreSQL family).
//! - **Emulated**: subqueries over element rows (H2, HSQLDB).
//! - **Generated**: per-collection-type functions (Oracle).
//!
//! `unnest` is rendered as a table source for JSON and XML stored arrays as
//! well, which also covers databases without array types.
pub mod array;
pub mod dialect_router;
pub mod dialects;
pub mod function;
pub mod unnest;

pub use dialect_router::{registry_for, route_dialect};
pub use dialects::{DdlTypeRegistry, Dialect, FunctionRegistry, TypeMapper};
pub use function::{
    ArgumentExpr, CallSite, Diagnostics, FunctionDescriptor, FunctionError, ParameterSlot,
    RenderContext, RenderedCall, SqlType,
};
pub use unnest::{TableSource, UnnestFunction, UnnestOptions};
