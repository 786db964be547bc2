//! # sqlforge — fluent SQL statement trees, compiled per dialect
//!
//! Build a statement once as a typed tree, then compile it for any supported
//! engine. The tree never contains engine syntax; quoting, placeholders,
//! pagination and DDL idiosyncrasies are resolved at compile time.
//!
//! ## Quick Example
//!
//! ```rust
//! use sqlforge::prelude::*;
//!
//! let query = Select::from("users")
//!     .columns(["id", "email"])
//!     .filter(col("active").eq(lit(true)))
//!     .top(TopSpec::count(10));
//!
//! let out = query.to_sql(Dialect::MySql).unwrap();
//! assert_eq!(
//!     out.sql,
//!     "SELECT `id`, `email` FROM `users` WHERE `active` = 1 LIMIT 10"
//! );
//! ```
//!
//! One tree, another engine:
//!
//! ```rust
//! use sqlforge::prelude::*;
//!
//! let query = Select::from("users").columns(["id"]);
//! let out = query.to_sql(Dialect::SqlServer).unwrap();
//! assert_eq!(out.sql, "SELECT [id] FROM [users]");
//! ```

pub mod ast;
pub mod compiler;
pub mod dialect;
pub mod error;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::compiler::{Compiled, ToSql};
    pub use crate::dialect::{Dialect, SchemaOperation, SchemaType};
    pub use crate::error::{SqlForgeError, SqlForgeResult};
}
