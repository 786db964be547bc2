use serde::{Deserialize, Serialize};

use crate::ast::conditions::Cond;
use crate::ast::expr::ObjectName;
use crate::ast::operators::JoinKind;
use crate::ast::select::Select;

/// A FROM or JOIN source: a named table or a derived table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableSource {
    Table {
        name: ObjectName,
        #[serde(default)]
        alias: Option<String>,
    },
    /// A parenthesized subquery. Derived tables always carry an alias.
    Subquery { query: Box<Select>, alias: String },
}

impl TableSource {
    pub fn table(name: impl Into<ObjectName>) -> Self {
        TableSource::Table {
            name: name.into(),
            alias: None,
        }
    }

    pub fn table_as(name: impl Into<ObjectName>, alias: impl Into<String>) -> Self {
        TableSource::Table {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    pub fn subquery(query: Select, alias: impl Into<String>) -> Self {
        TableSource::Subquery {
            query: Box::new(query),
            alias: alias.into(),
        }
    }
}

/// A join definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub kind: JoinKind,
    pub source: TableSource,
    /// Absent for CROSS joins.
    #[serde(default)]
    pub on: Option<Cond>,
}
