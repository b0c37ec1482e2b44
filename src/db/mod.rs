/// Database Module
///
/// This module provides the data-access layer of crudql, organized into
/// focused submodules:
/// - **Connection Bootstrap** (`connection.rs`): Opens connections with pragmas applied
/// - **Value Bridging** (`value.rs`): The bound-value sum type and its conversions
/// - **Query Shaping** (`query.rs`): Operators, conditions, and projections
/// - **Statement Assembly** (`statement.rs`): Parameterized SQL text builders
/// - **CRUD Operations** (`crud.rs`): The four operations over a borrowed connection
///
/// All operations use the standardized `CrudqlError` type for consistent
/// error propagation.
pub mod connection;
pub mod crud;
pub mod query;
pub mod statement;
pub mod value;

pub use crud::*;
pub use query::*;
pub use value::*;
