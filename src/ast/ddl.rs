use serde::{Deserialize, Serialize};

use crate::ast::columns::ColumnDef;
use crate::ast::constraints::TableConstraint;
use crate::ast::expr::ObjectName;
use crate::ast::operators::{ParamMode, SortOrder};
use crate::ast::params::Parameter;
use crate::ast::select::Select;
use crate::ast::statement::Statement;
use crate::ast::values::DbType;
use crate::dialect::SchemaType;

/// A CREATE TABLE statement tree.
///
/// # Example
/// ```
/// use sqlforge::prelude::*;
///
/// let ct = CreateTable::new("Customers")
///     .column(ColumnDef::new("Id", DbType::Int32).identity())
///     .column(ColumnDef::new("Name", DbType::String).size(100))
///     .constraint(TableConstraint::primary_key(["Id"]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    pub name: ObjectName,
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub constraints: Vec<TableConstraint>,
    #[serde(default)]
    pub if_not_exists: bool,
}

impl CreateTable {
    pub fn new(name: impl Into<ObjectName>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            constraints: vec![],
            if_not_exists: false,
        }
    }

    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn constraint(mut self, constraint: TableConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Guard creation with IF NOT EXISTS. Dialect-checked at compile time.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

/// A CREATE INDEX statement tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIndex {
    pub name: ObjectName,
    pub table: ObjectName,
    pub columns: Vec<(String, SortOrder)>,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub if_not_exists: bool,
}

impl CreateIndex {
    pub fn new(name: impl Into<ObjectName>, table: impl Into<ObjectName>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            columns: vec![],
            unique: false,
            if_not_exists: false,
        }
    }

    pub fn column(mut self, name: impl Into<String>, order: SortOrder) -> Self {
        self.columns.push((name.into(), order));
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Guard creation with IF NOT EXISTS. Dialect-checked at compile time.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

/// A CREATE VIEW statement tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateView {
    pub name: ObjectName,
    #[serde(default)]
    pub columns: Vec<String>,
    pub body: Select,
    #[serde(default)]
    pub if_not_exists: bool,
}

impl CreateView {
    pub fn new(name: impl Into<ObjectName>, body: Select) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            body,
            if_not_exists: false,
        }
    }

    pub fn columns<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = cols.into_iter().map(Into::into).collect();
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }
}

/// Function vs procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutineKind {
    Procedure,
    /// A function carries a return type.
    Function,
}

/// One routine parameter with its passing mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineParam {
    pub parameter: Parameter,
    #[serde(default)]
    pub mode: ParamMode,
}

/// A CREATE PROCEDURE / CREATE FUNCTION statement tree.
///
/// Routine parameters and leading Declare statements become local names: the
/// compiler renders references to them in the engine's local-variable form
/// instead of the bound-placeholder form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRoutine {
    pub kind: RoutineKind,
    pub name: ObjectName,
    #[serde(default)]
    pub params: Vec<RoutineParam>,
    #[serde(default)]
    pub returns: Option<(DbType, Option<u32>)>,
    pub body: Vec<Statement>,
}

impl CreateRoutine {
    pub fn procedure(name: impl Into<ObjectName>) -> Self {
        Self {
            kind: RoutineKind::Procedure,
            name: name.into(),
            params: vec![],
            returns: None,
            body: vec![],
        }
    }

    pub fn function(name: impl Into<ObjectName>, returns: DbType) -> Self {
        Self {
            kind: RoutineKind::Function,
            name: name.into(),
            params: vec![],
            returns: Some((returns, None)),
            body: vec![],
        }
    }

    pub fn param(mut self, parameter: Parameter, mode: ParamMode) -> Self {
        self.params.push(RoutineParam { parameter, mode });
        self
    }

    pub fn statement(mut self, stmt: impl Into<Statement>) -> Self {
        self.body.push(stmt.into());
        self
    }
}

/// A CREATE SEQUENCE statement tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSequence {
    pub name: ObjectName,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub increment: Option<i64>,
    #[serde(default)]
    pub min_value: Option<i64>,
    #[serde(default)]
    pub max_value: Option<i64>,
    #[serde(default)]
    pub cycle: bool,
}

impl CreateSequence {
    pub fn new(name: impl Into<ObjectName>) -> Self {
        Self {
            name: name.into(),
            start: None,
            increment: None,
            min_value: None,
            max_value: None,
            cycle: false,
        }
    }

    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    pub fn increment(mut self, increment: i64) -> Self {
        self.increment = Some(increment);
        self
    }

    pub fn min_value(mut self, min: i64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn max_value(mut self, max: i64) -> Self {
        self.max_value = Some(max);
        self
    }

    pub fn cycle(mut self) -> Self {
        self.cycle = true;
        self
    }
}

/// A DROP statement for any schema object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drop {
    pub schema_type: SchemaType,
    pub name: ObjectName,
    #[serde(default)]
    pub if_exists: bool,
    /// Owning table, for engines whose DROP INDEX is table-qualified.
    #[serde(default)]
    pub on_table: Option<ObjectName>,
}

impl Drop {
    pub fn table(name: impl Into<ObjectName>) -> Self {
        Self::new(SchemaType::Table, name)
    }

    pub fn index(name: impl Into<ObjectName>) -> Self {
        Self::new(SchemaType::Index, name)
    }

    pub fn view(name: impl Into<ObjectName>) -> Self {
        Self::new(SchemaType::View, name)
    }

    pub fn routine(name: impl Into<ObjectName>) -> Self {
        Self::new(SchemaType::Routine, name)
    }

    pub fn sequence(name: impl Into<ObjectName>) -> Self {
        Self::new(SchemaType::Sequence, name)
    }

    fn new(schema_type: SchemaType, name: impl Into<ObjectName>) -> Self {
        Self {
            schema_type,
            name: name.into(),
            if_exists: false,
            on_table: None,
        }
    }

    /// Guard with IF EXISTS. Dialect-checked at compile time.
    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    /// Name the owning table (DROP INDEX on SQL Server / MySQL).
    pub fn on(mut self, table: impl Into<ObjectName>) -> Self {
        self.on_table = Some(table.into());
        self
    }
}

/// DECLARE: materialize a parameter as a routine-local variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declare {
    pub parameter: Parameter,
}

impl Declare {
    pub fn new(parameter: Parameter) -> Self {
        Self { parameter }
    }
}
