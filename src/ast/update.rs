use serde::{Deserialize, Serialize};

use crate::ast::conditions::Cond;
use crate::ast::expr::{Expr, ObjectName};
use crate::ast::statement::Assign;

/// An UPDATE statement tree.
///
/// # Example
/// ```
/// use sqlforge::prelude::*;
///
/// let upd = Update::table("users")
///     .set("status", lit("active"))
///     .filter(col("id").eq(lit(42)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub table: ObjectName,
    pub assignments: Vec<Assign>,
    #[serde(default)]
    pub filter: Option<Cond>,
}

impl Update {
    pub fn table(table: impl Into<ObjectName>) -> Self {
        Self {
            table: table.into(),
            assignments: vec![],
            filter: None,
        }
    }

    /// Add a SET assignment. Order is preserved.
    pub fn set(mut self, column: impl Into<String>, value: Expr) -> Self {
        self.assignments.push(Assign {
            target: column.into(),
            value,
        });
        self
    }

    /// AND a condition into the WHERE clause.
    pub fn filter(mut self, cond: Cond) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(cond),
            None => cond,
        });
        self
    }
}
