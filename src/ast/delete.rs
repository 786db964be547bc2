use serde::{Deserialize, Serialize};

use crate::ast::conditions::Cond;
use crate::ast::expr::ObjectName;

/// A DELETE statement tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub table: ObjectName,
    #[serde(default)]
    pub filter: Option<Cond>,
}

impl Delete {
    pub fn from(table: impl Into<ObjectName>) -> Self {
        Self {
            table: table.into(),
            filter: None,
        }
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
