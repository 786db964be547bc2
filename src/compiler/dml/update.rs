//! UPDATE compilation.

use crate::ast::update::Update;
use crate::error::{SqlForgeError, SqlForgeResult};

use super::super::Compiler;

pub(crate) fn build_update(c: &mut Compiler, update: &Update) -> SqlForgeResult<()> {
    if update.assignments.is_empty() {
        return Err(SqlForgeError::invalid("UPDATE requires at least one SET assignment"));
    }

    c.out.enter();
    let result = build_update_inner(c, update);
    c.out.exit();
    result
}

fn build_update_inner(c: &mut Compiler, update: &Update) -> SqlForgeResult<()> {
    c.push("UPDATE ");
    c.write_object_name(&update.table);
    c.push(" SET ");

    for (i, assign) in update.assignments.iter().enumerate() {
        if i > 0 {
            c.push(", ");
        }
        c.write_identifier(&assign.target);
        c.push(" = ");
        c.write_expr(&assign.value)?;
    }

    if let Some(filter) = &update.filter {
        c.push(" WHERE ");
        c.write_cond(filter)?;
    }
    Ok(())
}
