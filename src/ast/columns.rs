use serde::{Deserialize, Serialize};

use crate::ast::expr::Expr;
use crate::ast::values::DbType;

/// A column definition for CREATE TABLE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    pub db_type: DbType,
    /// Length for character/binary types, precision for decimals.
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub scale: Option<u32>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub default: Option<Expr>,
    /// Engine identity/auto-increment column.
    #[serde(default)]
    pub identity: bool,
    /// Single-column primary key declared on the column itself.
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, db_type: DbType) -> Self {
        Self {
            name: name.into(),
            db_type,
            size: None,
            scale: None,
            nullable: false,
            default: None,
            identity: false,
            primary_key: false,
            unique: false,
        }
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn default_value(mut self, expr: Expr) -> Self {
        self.default = Some(expr);
        self
    }

    pub fn identity(mut self) -> Self {
        self.identity = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}
