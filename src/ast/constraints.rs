use serde::{Deserialize, Serialize};

use crate::ast::expr::ObjectName;

/// Referential action for foreign keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FkAction {
    #[default]
    NoAction,
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
}

impl FkAction {
    pub fn keyword(&self) -> &'static str {
        match self {
            FkAction::NoAction => "NO ACTION",
            FkAction::Cascade => "CASCADE",
            FkAction::SetNull => "SET NULL",
            FkAction::SetDefault => "SET DEFAULT",
            FkAction::Restrict => "RESTRICT",
        }
    }
}

/// A table-level constraint block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableConstraint {
    PrimaryKey {
        #[serde(default)]
        name: Option<String>,
        columns: Vec<String>,
    },
    Unique {
        #[serde(default)]
        name: Option<String>,
        columns: Vec<String>,
    },
    ForeignKey {
        #[serde(default)]
        name: Option<String>,
        columns: Vec<String>,
        references: ObjectName,
        referenced_columns: Vec<String>,
        #[serde(default)]
        on_delete: FkAction,
        #[serde(default)]
        on_update: FkAction,
    },
}

impl TableConstraint {
    pub fn primary_key<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableConstraint::PrimaryKey {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn unique<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableConstraint::Unique {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn foreign_key<I, S, J, T>(columns: I, references: impl Into<ObjectName>, referenced: J) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        J: IntoIterator<Item = T>,
        T: Into<String>,
    {
        TableConstraint::ForeignKey {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
            references: references.into(),
            referenced_columns: referenced.into_iter().map(Into::into).collect(),
            on_delete: FkAction::NoAction,
            on_update: FkAction::NoAction,
        }
    }

    /// Set the constraint name.
    pub fn named(mut self, constraint_name: impl Into<String>) -> Self {
        let n = Some(constraint_name.into());
        match &mut self {
            TableConstraint::PrimaryKey { name, .. }
            | TableConstraint::Unique { name, .. }
            | TableConstraint::ForeignKey { name, .. } => *name = n,
        }
        self
    }

    /// Set the ON DELETE action (foreign keys only; no-op otherwise).
    pub fn on_delete(mut self, action: FkAction) -> Self {
        if let TableConstraint::ForeignKey { on_delete, .. } = &mut self {
            *on_delete = action;
        }
        self
    }

    /// Set the ON UPDATE action (foreign keys only; no-op otherwise).
    pub fn on_update(mut self, action: FkAction) -> Self {
        if let TableConstraint::ForeignKey { on_update, .. } = &mut self {
            *on_update = action;
        }
        self
    }
}
