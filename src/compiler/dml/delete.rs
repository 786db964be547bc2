//! DELETE compilation.

use crate::ast::delete::Delete;
use crate::error::SqlForgeResult;

use super::super::Compiler;

pub(crate) fn build_delete(c: &mut Compiler, delete: &Delete) -> SqlForgeResult<()> {
    c.out.enter();
    let result = build_delete_inner(c, delete);
    c.out.exit();
    result
}

fn build_delete_inner(c: &mut Compiler, delete: &Delete) -> SqlForgeResult<()> {
    c.push("DELETE FROM ");
    c.write_object_name(&delete.table);
    if let Some(filter) = &delete.filter {
        c.push(" WHERE ");
        c.write_cond(filter)?;
    }
    Ok(())
}
