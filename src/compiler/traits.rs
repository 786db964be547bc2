//! The dialect renderer trait: every engine-sensitive spelling in one place.
//!
//! The statement-assembly algorithm lives in the compiler core and is never
//! duplicated per engine; a renderer overrides only the points where its
//! syntax diverges from the ANSI defaults here.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::ast::ddl::RoutineKind;
use crate::ast::functions::FunctionKind;
use crate::ast::operators::ParamMode;
use crate::ast::values::DbType;
use crate::dialect::Dialect;
use crate::error::{SqlForgeError, SqlForgeResult};

pub trait DialectRenderer {
    fn dialect(&self) -> Dialect;

    /// Quote an identifier with the engine's quote pair, doubling the closing
    /// character wherever it appears in the name.
    fn quote_identifier(&self, name: &str) -> String {
        let (open, close) = self.dialect().properties().quotes;
        let mut escaped = String::with_capacity(name.len() + 2);
        escaped.push(open);
        for ch in name.chars() {
            escaped.push(ch);
            if ch == close {
                escaped.push(close);
            }
        }
        escaped.push(close);
        escaped
    }

    /// The textual form of a routine-local variable reference.
    fn local_variable(&self, name: &str) -> String {
        name.to_string()
    }

    fn bool_literal(&self, value: bool) -> String {
        if value { "1".to_string() } else { "0".to_string() }
    }

    fn string_literal(&self, value: &str, _unicode: bool) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    fn date_literal(&self, value: NaiveDate) -> String {
        format!("'{}'", value.format("%Y-%m-%d"))
    }

    fn datetime_literal(&self, value: NaiveDateTime) -> String {
        format!("'{}'", value.format("%Y-%m-%d %H:%M:%S"))
    }

    fn guid_literal(&self, value: Uuid) -> String {
        format!("'{}'", value)
    }

    fn binary_literal(&self, bytes: &[u8]) -> String {
        let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        format!("X'{}'", hex)
    }

    /// String concatenation of pre-rendered operands.
    fn concat(&self, parts: &[String]) -> String {
        parts.join(" || ")
    }

    /// Render an enumerated function call from pre-rendered arguments.
    /// Aggregates and GetDate share the ANSI spelling; the divergent kinds
    /// are overridden per engine.
    fn function_call(&self, kind: FunctionKind, args: &[String]) -> SqlForgeResult<String> {
        Ok(match kind {
            FunctionKind::Count => format!("COUNT({})", args.join(", ")),
            FunctionKind::Sum => format!("SUM({})", args.join(", ")),
            FunctionKind::Avg => format!("AVG({})", args.join(", ")),
            FunctionKind::Min => format!("MIN({})", args.join(", ")),
            FunctionKind::Max => format!("MAX({})", args.join(", ")),
            FunctionKind::GetDate => "CURRENT_TIMESTAMP".to_string(),
            FunctionKind::Concat => self.concat(args),
            FunctionKind::IsNull => format!("COALESCE({})", args.join(", ")),
            FunctionKind::LastInsertId => {
                return Err(SqlForgeError::UnsupportedFunction {
                    kind,
                    dialect: self.dialect(),
                })
            }
        })
    }

    /// Engine type name for a declared DbType. Callers have already checked
    /// the type against the dialect properties.
    fn type_name(&self, db_type: DbType, size: Option<u32>, scale: Option<u32>) -> String {
        match db_type {
            DbType::Boolean => "BOOLEAN".to_string(),
            DbType::Int32 => "INTEGER".to_string(),
            DbType::Int64 => "BIGINT".to_string(),
            DbType::Double => "DOUBLE PRECISION".to_string(),
            DbType::Decimal => decimal_name("DECIMAL", size, scale),
            DbType::Currency => "DECIMAL(19, 4)".to_string(),
            DbType::String | DbType::AnsiString => {
                format!("VARCHAR({})", size.unwrap_or(255))
            }
            DbType::Date => "DATE".to_string(),
            DbType::DateTime => "TIMESTAMP".to_string(),
            DbType::Guid => "CHAR(36)".to_string(),
            DbType::Binary => "BLOB".to_string(),
        }
    }

    /// Column suffix marking an identity/auto-increment column.
    fn identity_suffix(&self) -> &'static str {
        "GENERATED ALWAYS AS IDENTITY"
    }

    /// True when the engine requires the identity column to carry its
    /// PRIMARY KEY inline (SQLite), suppressing the separate constraint.
    fn identity_is_inline_pk(&self) -> bool {
        false
    }

    /// Trailing options after the closing parenthesis of CREATE TABLE.
    fn table_suffix(&self) -> &'static str {
        ""
    }

    /// Pseudo-table for selects without a FROM source (Oracle's DUAL).
    fn pseudo_table(&self) -> Option<&'static str> {
        None
    }

    /// One routine parameter declaration.
    fn routine_param(
        &self,
        mode: ParamMode,
        name: &str,
        type_name: &str,
        is_function: bool,
    ) -> String {
        if is_function {
            format!("{} {}", name, type_name)
        } else {
            format!("{} {} {}", mode.keyword(), name, type_name)
        }
    }

    /// One local variable declaration line (no terminator).
    fn declare_line(&self, name: &str, type_name: &str) -> String {
        format!("DECLARE {} {}", name, type_name)
    }

    /// A variable assignment statement (no terminator).
    fn assign_statement(&self, target: &str, value: &str) -> String {
        format!("SET {} = {}", target, value)
    }

    /// Whether the parameter list is parenthesized (T-SQL lists parameters
    /// bare after the routine name).
    fn routine_param_parens(&self) -> bool {
        true
    }

    fn routine_create_keyword(&self, kind: RoutineKind) -> String {
        match kind {
            RoutineKind::Procedure => "CREATE PROCEDURE".to_string(),
            RoutineKind::Function => "CREATE FUNCTION".to_string(),
        }
    }

    fn routine_returns(&self, type_name: &str) -> String {
        format!("RETURNS {}", type_name)
    }

    /// Routine characteristics between the signature and the body.
    fn routine_characteristics(&self, _kind: RoutineKind) -> &'static str {
        ""
    }

    /// Keyword opening the routine body (before declarations and BEGIN).
    fn routine_body_open(&self) -> &'static str {
        "BEGIN"
    }

    /// True when declarations belong between the open keyword and BEGIN
    /// (Oracle's IS section) rather than inside the body.
    fn routine_decls_before_begin(&self) -> bool {
        false
    }

    fn routine_body_close(&self) -> &'static str {
        "END"
    }

    /// Delimiter guard around the whole CREATE, for engines whose statement
    /// terminator would otherwise end the CREATE inside the body.
    fn routine_wrapper(&self) -> Option<(&'static str, &'static str)> {
        None
    }
}

pub(crate) fn decimal_name(base: &str, size: Option<u32>, scale: Option<u32>) -> String {
    match (size, scale) {
        (Some(p), Some(s)) => format!("{}({}, {})", base, p, s),
        (Some(p), None) => format!("{}({})", base, p),
        _ => base.to_string(),
    }
}
