//! DDL compilation: CREATE/DROP for tables, indexes, views, routines and
//! sequences, plus DECLARE/SET/RETURN for routine bodies.
//!
//! Every existence guard and engine-gated operation is checked against the
//! dialect properties before a single character is emitted for it.

use crate::ast::columns::ColumnDef;
use crate::ast::constraints::{FkAction, TableConstraint};
use crate::ast::ddl::{
    CreateIndex, CreateRoutine, CreateSequence, CreateTable, CreateView, Declare, Drop,
    RoutineKind,
};
use crate::ast::expr::Expr;
use crate::ast::statement::{Assign, Statement};
use crate::dialect::{SchemaOperation, SchemaType};
use crate::error::{SqlForgeError, SqlForgeResult};

use super::dml::select::build_select;
use super::{build_statement, Compiler};

pub(crate) fn build_create_table(c: &mut Compiler, create: &CreateTable) -> SqlForgeResult<()> {
    if create.columns.is_empty() {
        return Err(SqlForgeError::invalid("CREATE TABLE requires at least one column"));
    }
    if create.if_not_exists {
        c.props
            .ensure_schema_op(SchemaType::Table, SchemaOperation::CheckNotExists)?;
    }
    for column in &create.columns {
        c.props.ensure_type(column.db_type)?;
    }

    c.out.creating = Some(SchemaType::Table);
    c.push("CREATE TABLE ");
    if create.if_not_exists {
        c.push("IF NOT EXISTS ");
    }
    c.write_object_name(&create.name);
    c.push(" (\n");

    // A SQLite identity column carries its PRIMARY KEY inline; a separate
    // single-column PK block on the same column would be rejected.
    let inline_pk_column = create
        .columns
        .iter()
        .find(|col| col.identity && c.renderer.identity_is_inline_pk())
        .map(|col| col.name.clone());

    let mut lines = Vec::new();
    for column in &create.columns {
        lines.push(column_line(c, column)?);
    }
    for constraint in &create.constraints {
        if let TableConstraint::PrimaryKey { columns, .. } = constraint {
            if let Some(inline) = &inline_pk_column {
                if columns.len() == 1 && columns[0] == *inline {
                    continue;
                }
            }
        }
        lines.push(constraint_line(c, constraint));
    }

    c.push(&lines.join(",\n"));
    c.push("\n)");
    c.push(c.renderer.table_suffix());
    c.out.creating = None;
    Ok(())
}

fn column_line(c: &mut Compiler, column: &ColumnDef) -> SqlForgeResult<String> {
    let quoted = c.renderer.quote_identifier(&column.name);
    let type_name = c
        .renderer
        .type_name(column.db_type, column.size, column.scale);
    let mut line = format!("    {} {}", quoted, type_name);

    let inline_pk = column.identity && c.renderer.identity_is_inline_pk();
    if inline_pk {
        line.push_str(" PRIMARY KEY ");
        line.push_str(c.renderer.identity_suffix());
        return Ok(line);
    }
    if column.identity {
        line.push(' ');
        line.push_str(c.renderer.identity_suffix());
    }
    if !column.nullable {
        line.push_str(" NOT NULL");
    }
    if let Some(default) = &column.default {
        let rendered = c.capture_expr(default)?;
        line.push_str(" DEFAULT ");
        line.push_str(&rendered);
    }
    if column.primary_key {
        line.push_str(" PRIMARY KEY");
    }
    if column.unique {
        line.push_str(" UNIQUE");
    }
    Ok(line)
}

fn constraint_line(c: &Compiler, constraint: &TableConstraint) -> String {
    let quote = |name: &str| c.renderer.quote_identifier(name);
    let quote_list = |cols: &[String]| {
        cols.iter()
            .map(|col| quote(col))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let prefix = |name: &Option<String>| match name {
        Some(n) => format!("    CONSTRAINT {} ", quote(n)),
        None => "    ".to_string(),
    };

    match constraint {
        TableConstraint::PrimaryKey { name, columns } => {
            format!("{}PRIMARY KEY ({})", prefix(name), quote_list(columns))
        }
        TableConstraint::Unique { name, columns } => {
            format!("{}UNIQUE ({})", prefix(name), quote_list(columns))
        }
        TableConstraint::ForeignKey {
            name,
            columns,
            references,
            referenced_columns,
            on_delete,
            on_update,
        } => {
            let mut line = format!(
                "{}FOREIGN KEY ({}) REFERENCES ",
                prefix(name),
                quote_list(columns)
            );
            if let Some(schema) = &references.schema {
                line.push_str(&quote(schema));
                line.push('.');
            }
            line.push_str(&quote(&references.name));
            line.push_str(&format!(" ({})", quote_list(referenced_columns)));
            if *on_delete != FkAction::NoAction {
                line.push_str(" ON DELETE ");
                line.push_str(on_delete.keyword());
            }
            if *on_update != FkAction::NoAction {
                line.push_str(" ON UPDATE ");
                line.push_str(on_update.keyword());
            }
            line
        }
    }
}

pub(crate) fn build_create_index(c: &mut Compiler, create: &CreateIndex) -> SqlForgeResult<()> {
    if create.columns.is_empty() {
        return Err(SqlForgeError::invalid("CREATE INDEX requires at least one column"));
    }
    if create.if_not_exists {
        c.props
            .ensure_schema_op(SchemaType::Index, SchemaOperation::CheckNotExists)?;
    }

    c.out.creating = Some(SchemaType::Index);
    c.push("CREATE ");
    if create.unique {
        c.push("UNIQUE ");
    }
    c.push("INDEX ");
    if create.if_not_exists {
        c.push("IF NOT EXISTS ");
    }
    c.write_object_name(&create.name);
    c.push(" ON ");
    c.write_object_name(&create.table);
    c.push(" (");
    for (i, (column, order)) in create.columns.iter().enumerate() {
        if i > 0 {
            c.push(", ");
        }
        c.write_identifier(column);
        c.push(" ");
        c.push(order.keyword());
    }
    c.push(")");
    c.out.creating = None;
    Ok(())
}

pub(crate) fn build_create_view(c: &mut Compiler, create: &CreateView) -> SqlForgeResult<()> {
    if create.if_not_exists {
        c.props
            .ensure_schema_op(SchemaType::View, SchemaOperation::CheckNotExists)?;
    }

    c.out.creating = Some(SchemaType::View);
    c.push("CREATE VIEW ");
    if create.if_not_exists {
        c.push("IF NOT EXISTS ");
    }
    c.write_object_name(&create.name);
    if !create.columns.is_empty() {
        c.push(" (");
        for (i, column) in create.columns.iter().enumerate() {
            if i > 0 {
                c.push(", ");
            }
            c.write_identifier(column);
        }
        c.push(")");
    }
    c.push(" AS ");
    build_select(c, &create.body)?;
    c.out.creating = None;
    Ok(())
}

pub(crate) fn build_create_sequence(
    c: &mut Compiler,
    create: &CreateSequence,
) -> SqlForgeResult<()> {
    c.props
        .ensure_schema_op(SchemaType::Sequence, SchemaOperation::Create)?;

    c.out.creating = Some(SchemaType::Sequence);
    c.push("CREATE SEQUENCE ");
    c.write_object_name(&create.name);
    if let Some(start) = create.start {
        c.push(&format!(" START WITH {}", start));
    }
    if let Some(increment) = create.increment {
        c.push(&format!(" INCREMENT BY {}", increment));
    }
    if let Some(min) = create.min_value {
        c.push(&format!(" MINVALUE {}", min));
    }
    if let Some(max) = create.max_value {
        c.push(&format!(" MAXVALUE {}", max));
    }
    if create.cycle {
        c.push(" CYCLE");
    }
    c.out.creating = None;
    Ok(())
}

/// Compile a CREATE PROCEDURE / CREATE FUNCTION.
///
/// Routine parameters and declared variables join the local-name exclusion
/// set for the duration of the compile, so references inside the body render
/// as locals rather than bound placeholders. Returns true when the routine
/// was wrapped in delimiter guards and terminated itself.
pub(crate) fn build_create_routine(
    c: &mut Compiler,
    create: &CreateRoutine,
) -> SqlForgeResult<bool> {
    c.props
        .ensure_schema_op(SchemaType::Routine, SchemaOperation::Create)?;
    if create.body.is_empty() {
        return Err(SqlForgeError::invalid("routine body is empty"));
    }
    for param in &create.params {
        c.props.ensure_type(param.parameter.db_type)?;
        c.out.locals.insert(param.parameter.name.clone());
    }
    for stmt in &create.body {
        if let Statement::Declare(declare) = stmt {
            c.props.ensure_type(declare.parameter.db_type)?;
            c.out.locals.insert(declare.parameter.name.clone());
        }
    }

    let is_function = create.kind == RoutineKind::Function;
    c.out.creating = Some(SchemaType::Routine);

    let wrapper = c.renderer.routine_wrapper();
    if let Some((open, _)) = wrapper {
        c.push(open);
        c.push("\n");
    }

    let keyword = c.renderer.routine_create_keyword(create.kind);
    c.push(&keyword);
    c.push(" ");
    c.write_object_name(&create.name);

    let rendered_params: Vec<String> = create
        .params
        .iter()
        .map(|p| {
            let type_name =
                c.renderer
                    .type_name(p.parameter.db_type, p.parameter.size, None);
            c.renderer
                .routine_param(p.mode, &p.parameter.name, &type_name, is_function)
        })
        .collect();
    if c.renderer.routine_param_parens() {
        c.push(&format!(" ({})", rendered_params.join(", ")));
    } else if !rendered_params.is_empty() {
        c.push(" ");
        c.push(&rendered_params.join(", "));
    }

    if let Some((db_type, size)) = create.returns {
        let type_name = c.renderer.type_name(db_type, size, None);
        let returns = c.renderer.routine_returns(&type_name);
        c.push(" ");
        c.push(&returns);
    }

    let characteristics = c.renderer.routine_characteristics(create.kind);
    if !characteristics.is_empty() {
        c.push("\n");
        c.push(characteristics);
    }

    c.push("\n");
    c.push(c.renderer.routine_body_open());

    // Declarations either sit between the open keyword and BEGIN (Oracle) or
    // lead the body.
    let decls: Vec<&Declare> = create
        .body
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::Declare(d) => Some(d),
            _ => None,
        })
        .collect();

    if c.renderer.routine_decls_before_begin() {
        for declare in &decls {
            c.push("\n    ");
            let type_name = c.renderer.type_name(
                declare.parameter.db_type,
                declare.parameter.size,
                None,
            );
            let line = c.renderer.declare_line(&declare.parameter.name, &type_name);
            c.push(&line);
            c.push(c.props.terminator);
        }
        c.push("\nBEGIN");
    }

    for stmt in &create.body {
        if matches!(stmt, Statement::Declare(_)) && c.renderer.routine_decls_before_begin() {
            continue;
        }
        c.push("\n    ");
        build_statement(c, stmt)?;
        c.push(c.props.terminator);
    }

    c.push("\n");
    c.push(c.renderer.routine_body_close());

    let self_terminated = if let Some((_, close)) = wrapper {
        c.push(close);
        true
    } else {
        false
    };
    c.out.creating = None;
    Ok(self_terminated)
}

pub(crate) fn build_drop(c: &mut Compiler, drop: &Drop) -> SqlForgeResult<()> {
    // An engine without the object kind cannot drop it either.
    if matches!(drop.schema_type, SchemaType::Routine | SchemaType::Sequence) {
        c.props
            .ensure_schema_op(drop.schema_type, SchemaOperation::Create)?;
    }
    if drop.if_exists {
        c.props
            .ensure_schema_op(drop.schema_type, SchemaOperation::CheckExists)?;
    }

    let keyword = match drop.schema_type {
        SchemaType::Table => "DROP TABLE ",
        SchemaType::Index => "DROP INDEX ",
        SchemaType::View => "DROP VIEW ",
        SchemaType::Routine => "DROP PROCEDURE ",
        SchemaType::Sequence => "DROP SEQUENCE ",
    };
    c.push(keyword);
    if drop.if_exists {
        c.push("IF EXISTS ");
    }
    c.write_object_name(&drop.name);

    if drop.schema_type == SchemaType::Index
        && c
            .props
            .supports_schema_op(SchemaType::Index, SchemaOperation::CreateOn)
    {
        let table = drop.on_table.as_ref().ok_or_else(|| {
            SqlForgeError::invalid(format!(
                "DROP INDEX on {} requires the owning table",
                c.dialect
            ))
        })?;
        c.push(" ON ");
        c.write_object_name(table);
    }
    Ok(())
}

/// Compile a DECLARE: the variable joins the local-name exclusion set so
/// later references render unprefixed (or with the engine's local prefix).
pub(crate) fn build_declare(c: &mut Compiler, declare: &Declare) -> SqlForgeResult<()> {
    c.props.ensure_type(declare.parameter.db_type)?;
    c.out.locals.insert(declare.parameter.name.clone());
    let type_name = c.renderer.type_name(
        declare.parameter.db_type,
        declare.parameter.size,
        None,
    );
    let line = c.renderer.declare_line(&declare.parameter.name, &type_name);
    c.push(&line);
    Ok(())
}

pub(crate) fn build_assign(c: &mut Compiler, assign: &Assign) -> SqlForgeResult<()> {
    let target = if c.out.locals.contains(&assign.target) {
        c.renderer.local_variable(&assign.target)
    } else {
        c.renderer.quote_identifier(&assign.target)
    };
    let value = c.capture_expr(&assign.value)?;
    let line = c.renderer.assign_statement(&target, &value);
    c.push(&line);
    Ok(())
}

pub(crate) fn build_return(c: &mut Compiler, expr: &Expr) -> SqlForgeResult<()> {
    if c.out.creating != Some(SchemaType::Routine) {
        return Err(SqlForgeError::invalid(
            "RETURN is only valid inside a routine body",
        ));
    }
    let value = c.capture_expr(expr)?;
    c.push("RETURN ");
    c.push(&value);
    Ok(())
}
