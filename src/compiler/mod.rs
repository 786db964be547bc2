//! Statement compiler: walks a statement tree and emits dialect SQL.
//!
//! One `Compiler` is allocated per top-level compile and discarded after; it
//! is not re-entrant and never shared across threads.

pub mod engines;
pub mod traits;

mod ddl;
mod dml;
mod exprs;
mod writer;

#[cfg(test)]
mod tests;

use crate::ast::params::ParamDescriptor;
use crate::ast::statement::{Script, Statement};
use crate::ast::{CreateIndex, CreateRoutine, CreateSequence, CreateTable, CreateView};
use crate::ast::{Declare, Delete, Drop, Insert, Select, Update};
use crate::dialect::{Dialect, DialectProperties};
use crate::error::SqlForgeResult;

pub use traits::DialectRenderer;
use writer::SqlWriter;

/// A compiled statement: final SQL text plus the ordered parameter list to
/// attach to a native command.
#[derive(Debug)]
pub struct Compiled {
    pub sql: String,
    pub params: Vec<ParamDescriptor>,
}

/// Compile a statement tree for a target dialect.
pub trait ToSql {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled>;
}

pub(crate) struct Compiler {
    pub dialect: Dialect,
    pub props: &'static DialectProperties,
    pub renderer: Box<dyn DialectRenderer>,
    pub out: SqlWriter,
}

impl Compiler {
    fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            props: dialect.properties(),
            renderer: engines::renderer(dialect),
            out: SqlWriter::new(),
        }
    }

    pub fn push(&mut self, text: &str) {
        self.out.push(text);
    }

    /// Quote and emit a bare identifier.
    pub fn write_identifier(&mut self, name: &str) {
        let quoted = self.renderer.quote_identifier(name);
        self.out.push(&quoted);
    }

    /// Emit a schema-qualified object name.
    pub fn write_object_name(&mut self, name: &crate::ast::ObjectName) {
        if let Some(schema) = &name.schema {
            self.write_identifier(schema);
            self.out.push(".");
        }
        self.write_identifier(&name.name);
    }

    fn finish(self) -> Compiled {
        let (sql, params) = self.out.finish();
        Compiled { sql, params }
    }
}

fn compile_with<F>(dialect: Dialect, build: F) -> SqlForgeResult<Compiled>
where
    F: FnOnce(&mut Compiler) -> SqlForgeResult<()>,
{
    let mut c = Compiler::new(dialect);
    build(&mut c)?;
    Ok(c.finish())
}

/// Dispatch a statement to its builder. Returns true when the statement
/// emitted its own terminator (delimiter-wrapped routines).
pub(crate) fn build_statement(c: &mut Compiler, stmt: &Statement) -> SqlForgeResult<bool> {
    match stmt {
        Statement::Select(s) => dml::select::build_select(c, s)?,
        Statement::Insert(s) => dml::insert::build_insert(c, s)?,
        Statement::Update(s) => dml::update::build_update(c, s)?,
        Statement::Delete(s) => dml::delete::build_delete(c, s)?,
        Statement::CreateTable(s) => ddl::build_create_table(c, s)?,
        Statement::CreateIndex(s) => ddl::build_create_index(c, s)?,
        Statement::CreateView(s) => ddl::build_create_view(c, s)?,
        Statement::CreateRoutine(s) => return ddl::build_create_routine(c, s),
        Statement::CreateSequence(s) => ddl::build_create_sequence(c, s)?,
        Statement::Drop(s) => ddl::build_drop(c, s)?,
        Statement::Declare(s) => ddl::build_declare(c, s)?,
        Statement::Assign(s) => ddl::build_assign(c, s)?,
        Statement::Return(e) => ddl::build_return(c, e)?,
        Statement::Script(s) => return build_script(c, s).map(|_| true),
    }
    Ok(false)
}

/// Compile a script: members in order, joined by the statement terminator.
/// The script does not deepen nesting; each member is a top-level statement.
pub(crate) fn build_script(c: &mut Compiler, script: &Script) -> SqlForgeResult<()> {
    for (i, stmt) in script.statements.iter().enumerate() {
        if i > 0 {
            c.push("\n");
        }
        let self_terminated = build_statement(c, stmt)?;
        if !self_terminated {
            c.push(c.props.terminator);
        }
    }
    Ok(())
}

impl ToSql for Statement {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| build_statement(c, self).map(|_| ()))
    }
}

impl ToSql for Select {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| dml::select::build_select(c, self))
    }
}

impl ToSql for Insert {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| dml::insert::build_insert(c, self))
    }
}

impl ToSql for Update {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| dml::update::build_update(c, self))
    }
}

impl ToSql for Delete {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| dml::delete::build_delete(c, self))
    }
}

impl ToSql for CreateTable {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| ddl::build_create_table(c, self))
    }
}

impl ToSql for CreateIndex {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| ddl::build_create_index(c, self))
    }
}

impl ToSql for CreateView {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| ddl::build_create_view(c, self))
    }
}

impl ToSql for CreateRoutine {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| ddl::build_create_routine(c, self).map(|_| ()))
    }
}

impl ToSql for CreateSequence {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| ddl::build_create_sequence(c, self))
    }
}

impl ToSql for Drop {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| ddl::build_drop(c, self))
    }
}

impl ToSql for Declare {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| ddl::build_declare(c, self))
    }
}

impl ToSql for Script {
    fn to_sql(&self, dialect: Dialect) -> SqlForgeResult<Compiled> {
        compile_with(dialect, |c| build_script(c, self))
    }
}
