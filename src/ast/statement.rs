use serde::{Deserialize, Serialize};

use crate::ast::ddl::{
    CreateIndex, CreateRoutine, CreateSequence, CreateTable, CreateView, Declare, Drop,
};
use crate::ast::delete::Delete;
use crate::ast::expr::Expr;
use crate::ast::insert::Insert;
use crate::ast::select::Select;
use crate::ast::update::Update;

/// A SET-style assignment: target column or variable, value expression.
/// Used in UPDATE set lists and routine bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub target: String,
    pub value: Expr,
}

impl Assign {
    pub fn new(target: impl Into<String>, value: Expr) -> Self {
        Self {
            target: target.into(),
            value,
        }
    }
}

/// Any compilable top-level statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    CreateTable(CreateTable),
    CreateIndex(CreateIndex),
    CreateView(CreateView),
    CreateRoutine(CreateRoutine),
    CreateSequence(CreateSequence),
    Drop(Drop),
    Declare(Declare),
    /// Variable assignment inside a routine body.
    Assign(Assign),
    /// RETURN from a function body.
    Return(Expr),
    Script(Script),
}

macro_rules! from_stmt {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Statement {
            fn from(s: $ty) -> Self {
                Statement::$variant(s)
            }
        }
    };
}

from_stmt!(Select, Select);
from_stmt!(Insert, Insert);
from_stmt!(Update, Update);
from_stmt!(Delete, Delete);
from_stmt!(CreateTable, CreateTable);
from_stmt!(CreateIndex, CreateIndex);
from_stmt!(CreateView, CreateView);
from_stmt!(CreateRoutine, CreateRoutine);
from_stmt!(CreateSequence, CreateSequence);
from_stmt!(Drop, Drop);
from_stmt!(Declare, Declare);
from_stmt!(Assign, Assign);
from_stmt!(Script, Script);

/// An ordered sequence of statements compiled as one unit.
///
/// The script itself owns no transaction; the caller supplies the boundary.
/// Each member compiles as a top-level statement, so pagination on a member
/// Select still applies.
///
/// # Example
/// ```
/// use sqlforge::prelude::*;
///
/// let script = Script::new()
///     .statement(
///         Insert::into("logs")
///             .columns(["message"])
///             .values([lit("hello")]),
///     )
///     .statement(Select::scalar(func(FunctionKind::LastInsertId, [])));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Script {
    pub statements: Vec<Statement>,
}

impl Script {
    pub fn new() -> Self {
        Self { statements: vec![] }
    }

    /// Append a statement.
    pub fn statement(mut self, stmt: impl Into<Statement>) -> Self {
        self.statements.push(stmt.into());
        self
    }
}
