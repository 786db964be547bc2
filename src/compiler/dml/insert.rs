//! INSERT compilation.

use crate::ast::insert::{Insert, InsertSource};
use crate::dialect::Dialect;
use crate::error::{SqlForgeError, SqlForgeResult};

use super::super::Compiler;
use super::select::build_select;

pub(crate) fn build_insert(c: &mut Compiler, insert: &Insert) -> SqlForgeResult<()> {
    // Structural validation happens before any text is emitted.
    let source = insert
        .source
        .as_ref()
        .ok_or_else(|| SqlForgeError::invalid("INSERT requires a VALUES list or a source query"))?;

    if let InsertSource::Values(rows) = source {
        if rows.is_empty() {
            return Err(SqlForgeError::invalid("INSERT VALUES list is empty"));
        }
        if !insert.columns.is_empty() {
            for row in rows {
                if row.len() != insert.columns.len() {
                    return Err(SqlForgeError::invalid(format!(
                        "INSERT column count {} does not match value count {}",
                        insert.columns.len(),
                        row.len()
                    )));
                }
            }
        }
        if rows.len() > 1 && c.dialect == Dialect::Oracle {
            return Err(SqlForgeError::invalid(
                "Oracle INSERT supports a single VALUES row per statement",
            ));
        }
    }

    c.out.enter();
    let result = build_insert_inner(c, insert, source);
    c.out.exit();
    result
}

fn build_insert_inner(
    c: &mut Compiler,
    insert: &Insert,
    source: &InsertSource,
) -> SqlForgeResult<()> {
    c.push("INSERT INTO ");
    c.write_object_name(&insert.table);

    if !insert.columns.is_empty() {
        c.push(" (");
        for (i, column) in insert.columns.iter().enumerate() {
            if i > 0 {
                c.push(", ");
            }
            c.write_identifier(column);
        }
        c.push(")");
    }

    match source {
        InsertSource::Values(rows) => {
            c.push(" VALUES ");
            for (i, row) in rows.iter().enumerate() {
                if i > 0 {
                    c.push(", ");
                }
                c.push("(");
                for (j, value) in row.iter().enumerate() {
                    if j > 0 {
                        c.push(", ");
                    }
                    c.write_expr(value)?;
                }
                c.push(")");
            }
        }
        InsertSource::Query(query) => {
            c.push(" ");
            build_select(c, query)?;
        }
    }
    Ok(())
}
