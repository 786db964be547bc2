use serde::{Deserialize, Serialize};

use crate::ast::expr::{Expr, ObjectName};
use crate::ast::select::Select;

/// Where an INSERT's rows come from: exactly one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsertSource {
    /// One or more literal value rows.
    Values(Vec<Vec<Expr>>),
    /// A source query (INSERT … SELECT).
    Query(Box<Select>),
}

/// An INSERT statement tree.
///
/// # Example
/// ```
/// use sqlforge::prelude::*;
///
/// let ins = Insert::into("users")
///     .columns(["email", "name"])
///     .values([lit("alice@example.com"), lit("Alice")]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub table: ObjectName,
    /// Empty means natural column order.
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub source: Option<InsertSource>,
}

impl Insert {
    pub fn into(table: impl Into<ObjectName>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            source: None,
        }
    }

    /// Set the explicit column list.
    pub fn columns<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = cols.into_iter().map(Into::into).collect();
        self
    }

    /// Add one VALUES row.
    pub fn values<I>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = Expr>,
    {
        let row: Vec<Expr> = row.into_iter().collect();
        match &mut self.source {
            Some(InsertSource::Values(rows)) => rows.push(row),
            _ => self.source = Some(InsertSource::Values(vec![row])),
        }
        self
    }

    /// Use a source query instead of a VALUES list.
    pub fn query(mut self, select: Select) -> Self {
        self.source = Some(InsertSource::Query(Box::new(select)));
        self
    }
}
