//! Clause rendering: expressions, conditions, literals, parameters.
//!
//! Every clause funnels through the writer so quoting and placeholder
//! bookkeeping stay centralized.

use crate::ast::conditions::Cond;
use crate::ast::expr::{Expr, FieldRef};
use crate::ast::functions::FunctionKind;
use crate::ast::operators::ArithOp;
use crate::ast::params::{ParamDescriptor, Parameter};
use crate::ast::values::SqlValue;
use crate::dialect::ParamLayout;
use crate::error::{SqlForgeError, SqlForgeResult};

use super::dml::select::build_select;
use super::Compiler;

impl Compiler {
    /// Render an expression into a string instead of the main buffer.
    /// Parameters encountered during capture still register in order.
    pub(crate) fn capture_expr(&mut self, expr: &Expr) -> SqlForgeResult<String> {
        self.out.begin_capture();
        let result = self.write_expr(expr);
        let text = self.out.end_capture();
        result.map(|_| text)
    }

    pub(crate) fn write_expr(&mut self, expr: &Expr) -> SqlForgeResult<()> {
        match expr {
            Expr::Star => {
                self.push("*");
                Ok(())
            }
            Expr::Field(field) => {
                self.write_field(field);
                Ok(())
            }
            Expr::Literal(value) => self.write_value(value),
            Expr::Param(parameter) => self.write_param(parameter),
            Expr::Function { kind, args, .. } => self.write_function(*kind, args),
            Expr::Binary { left, op, right } => {
                if *op == ArithOp::Concat {
                    let parts = vec![self.capture_expr(left)?, self.capture_expr(right)?];
                    let text = self.renderer.concat(&parts);
                    self.push(&text);
                } else {
                    self.push("(");
                    self.write_expr(left)?;
                    self.push(" ");
                    self.push(op.sql_symbol());
                    self.push(" ");
                    self.write_expr(right)?;
                    self.push(")");
                }
                Ok(())
            }
            Expr::Aliased { expr, .. } => self.write_expr(expr),
            Expr::Subquery(select) => {
                self.push("(");
                build_select(self, select)?;
                self.push(")");
                Ok(())
            }
        }
    }

    /// Render a projection entry: the expression plus its alias, if any.
    pub(crate) fn write_select_item(&mut self, expr: &Expr) -> SqlForgeResult<()> {
        self.write_expr(expr)?;
        let alias = match expr {
            Expr::Field(f) => f.alias.as_deref(),
            Expr::Function { alias, .. } => alias.as_deref(),
            Expr::Aliased { alias, .. } => Some(alias.as_str()),
            _ => None,
        };
        if let Some(alias) = alias {
            self.push(" AS ");
            self.write_identifier(alias);
        }
        Ok(())
    }

    fn write_field(&mut self, field: &FieldRef) {
        if let Some(schema) = &field.schema {
            self.write_identifier(schema);
            self.push(".");
        }
        if let Some(table) = &field.table {
            self.write_identifier(table);
            self.push(".");
        }
        self.write_identifier(&field.name);
    }

    fn write_function(&mut self, kind: FunctionKind, args: &[Expr]) -> SqlForgeResult<()> {
        let expected = match kind {
            FunctionKind::IsNull => Some(2),
            FunctionKind::LastInsertId | FunctionKind::GetDate => Some(0),
            _ => None,
        };
        if let Some(n) = expected {
            if args.len() != n {
                return Err(SqlForgeError::invalid(format!(
                    "{} takes exactly {} argument(s), got {}",
                    kind,
                    n,
                    args.len()
                )));
            }
        }
        let mut rendered = Vec::with_capacity(args.len());
        for arg in args {
            rendered.push(self.capture_expr(arg)?);
        }
        let text = self.renderer.function_call(kind, &rendered)?;
        self.push(&text);
        Ok(())
    }

    /// Render a typed literal through the engine's literal syntax.
    pub(crate) fn write_value(&mut self, value: &SqlValue) -> SqlForgeResult<()> {
        if !matches!(value, SqlValue::Null) {
            self.props.ensure_type(value.db_type())?;
        }
        let text = match value {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(b) => self.renderer.bool_literal(*b),
            SqlValue::Int32(n) => n.to_string(),
            SqlValue::Int64(n) => n.to_string(),
            SqlValue::Double(n) => n.to_string(),
            SqlValue::Decimal(d) | SqlValue::Currency(d) => d.to_string(),
            SqlValue::String(s) => self.renderer.string_literal(s, true),
            SqlValue::AnsiString(s) => self.renderer.string_literal(s, false),
            SqlValue::Date(d) => self.renderer.date_literal(*d),
            SqlValue::DateTime(dt) => self.renderer.datetime_literal(*dt),
            SqlValue::Guid(u) => self.renderer.guid_literal(*u),
            SqlValue::Binary(b) => self.renderer.binary_literal(b),
        };
        self.push(&text);
        Ok(())
    }

    /// Emit a parameter placeholder and record its descriptor.
    ///
    /// Names in the local-exclusion set render in the engine's local-variable
    /// form and produce no descriptor. Named layouts keep one descriptor per
    /// name; positional layouts keep one per occurrence.
    pub(crate) fn write_param(&mut self, parameter: &Parameter) -> SqlForgeResult<()> {
        self.props.ensure_type(parameter.db_type)?;

        if self.out.locals.contains(&parameter.name) {
            let text = self.renderer.local_variable(&parameter.name);
            self.push(&text);
            return Ok(());
        }

        match self.props.param_layout {
            ParamLayout::Named(prefix) => {
                let native = format!("{}{}", prefix, parameter.name);
                let existing = self
                    .out
                    .params
                    .iter()
                    .find(|d| d.name == parameter.name)
                    .map(|d| d.db_type);
                match existing {
                    Some(db_type) if db_type != parameter.db_type => {
                        return Err(SqlForgeError::DuplicateParameter {
                            name: parameter.name.clone(),
                            dialect: self.dialect,
                        });
                    }
                    Some(_) => {}
                    None => self.out.params.push(descriptor(parameter, native.clone())),
                }
                self.push(&native);
            }
            ParamLayout::Positional => {
                self.out.params.push(descriptor(parameter, "?".to_string()));
                self.push("?");
            }
        }
        Ok(())
    }

    pub(crate) fn write_cond(&mut self, cond: &Cond) -> SqlForgeResult<()> {
        match cond {
            Cond::Compare { left, op, right } => {
                self.write_expr(left)?;
                self.push(" ");
                self.push(op.sql_symbol());
                self.push(" ");
                self.write_expr(right)
            }
            Cond::Like {
                expr,
                pattern,
                negated,
            } => {
                self.write_expr(expr)?;
                self.push(if *negated { " NOT LIKE " } else { " LIKE " });
                self.write_expr(pattern)
            }
            Cond::Between {
                expr,
                low,
                high,
                negated,
            } => {
                self.write_expr(expr)?;
                self.push(if *negated { " NOT BETWEEN " } else { " BETWEEN " });
                self.write_expr(low)?;
                self.push(" AND ");
                self.write_expr(high)
            }
            Cond::In {
                expr,
                list,
                negated,
            } => {
                if list.is_empty() {
                    return Err(SqlForgeError::invalid("IN requires a non-empty list"));
                }
                self.write_expr(expr)?;
                self.push(if *negated { " NOT IN (" } else { " IN (" });
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.write_expr(item)?;
                }
                self.push(")");
                Ok(())
            }
            Cond::InSelect {
                expr,
                query,
                negated,
            } => {
                self.write_expr(expr)?;
                self.push(if *negated { " NOT IN (" } else { " IN (" });
                build_select(self, query)?;
                self.push(")");
                Ok(())
            }
            Cond::IsNull { expr, negated } => {
                self.write_expr(expr)?;
                self.push(if *negated { " IS NOT NULL" } else { " IS NULL" });
                Ok(())
            }
            Cond::Exists { query, negated } => {
                self.push(if *negated { "NOT EXISTS (" } else { "EXISTS (" });
                build_select(self, query)?;
                self.push(")");
                Ok(())
            }
            Cond::Not(inner) => {
                self.push("NOT (");
                self.write_cond(inner)?;
                self.push(")");
                Ok(())
            }
            Cond::And(parts) => self.write_cond_group(parts, " AND "),
            Cond::Or(parts) => self.write_cond_group(parts, " OR "),
        }
    }

    /// Composite children are parenthesized so AND/OR precedence survives.
    fn write_cond_group(&mut self, parts: &[Cond], joiner: &str) -> SqlForgeResult<()> {
        if parts.is_empty() {
            return Err(SqlForgeError::invalid("empty condition group"));
        }
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                self.push(joiner);
            }
            let composite = matches!(part, Cond::And(_) | Cond::Or(_));
            if composite {
                self.push("(");
            }
            self.write_cond(part)?;
            if composite {
                self.push(")");
            }
        }
        Ok(())
    }
}

fn descriptor(parameter: &Parameter, native_name: String) -> ParamDescriptor {
    ParamDescriptor {
        name: parameter.name.clone(),
        native_name,
        db_type: parameter.db_type,
        size: parameter.size,
        direction: parameter.direction,
        binding: parameter.binding.clone(),
    }
}
