//! Typed CRUD helpers over a shared rusqlite connection.
//!
//! Each operation builds a parameterized SQL statement, binds the caller's
//! values, executes it on an explicitly passed connection, and returns a
//! typed result. Values are only ever bound as parameters; table and column
//! names are validated against a strict allow-list before they reach SQL
//! text.
//!
//! ```
//! use crudql::db::{connection, Condition, DataAccess, Operator, Projection, Value};
//!
//! let conn = connection::open_in_memory().unwrap();
//! conn.execute_batch("CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, age INTEGER);")
//!     .unwrap();
//!
//! let data = DataAccess::new(&conn);
//! data.create("users", &[("name", Value::from("Alice")), ("age", Value::from(30))])
//!     .unwrap();
//!
//! let adults = data
//!     .read("users", &[Condition::new("age", Operator::Gt, 18)], Projection::All)
//!     .unwrap();
//! assert_eq!(adults.len(), 1);
//! ```

// Core infrastructure modules
pub mod core;

// Data-access modules
pub mod config;
pub mod db;

// Re-export commonly used types for convenience
pub use crate::core::{CrudqlError, Result};
pub use crate::db::crud::{rows_to_json, DataAccess, Row};
pub use crate::db::query::{Condition, Operator, Projection};
pub use crate::db::value::Value;
