use crate::ast::operators::ParamMode;
use crate::ast::values::DbType;
use crate::ast::FunctionKind;
use crate::compiler::traits::{decimal_name, DialectRenderer};
use crate::dialect::Dialect;
use crate::error::SqlForgeResult;

use super::aggregate_call;

/// Transact-SQL renderer.
pub struct SqlServerRenderer;

impl DialectRenderer for SqlServerRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::SqlServer
    }

    /// Local variables share the bound-parameter prefix in T-SQL.
    fn local_variable(&self, name: &str) -> String {
        format!("@{}", name)
    }

    fn string_literal(&self, value: &str, unicode: bool) -> String {
        let escaped = value.replace('\'', "''");
        if unicode {
            format!("N'{}'", escaped)
        } else {
            format!("'{}'", escaped)
        }
    }

    fn binary_literal(&self, bytes: &[u8]) -> String {
        let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        format!("0x{}", hex)
    }

    fn concat(&self, parts: &[String]) -> String {
        parts.join(" + ")
    }

    fn function_call(&self, kind: FunctionKind, args: &[String]) -> SqlForgeResult<String> {
        if let Some(agg) = aggregate_call(kind, args) {
            return Ok(agg);
        }
        Ok(match kind {
            FunctionKind::Concat => self.concat(args),
            FunctionKind::IsNull => format!("ISNULL({}, {})", args[0], args[1]),
            FunctionKind::LastInsertId => "SCOPE_IDENTITY()".to_string(),
            FunctionKind::GetDate => "GETDATE()".to_string(),
            _ => unreachable!("aggregates handled above"),
        })
    }

    fn type_name(&self, db_type: DbType, size: Option<u32>, scale: Option<u32>) -> String {
        match db_type {
            DbType::Boolean => "BIT".to_string(),
            DbType::Int32 => "INT".to_string(),
            DbType::Int64 => "BIGINT".to_string(),
            DbType::Double => "FLOAT".to_string(),
            DbType::Decimal => decimal_name("DECIMAL", size, scale),
            DbType::Currency => "MONEY".to_string(),
            DbType::String => format!("NVARCHAR({})", size.unwrap_or(255)),
            DbType::AnsiString => format!("VARCHAR({})", size.unwrap_or(255)),
            DbType::Date => "DATE".to_string(),
            DbType::DateTime => "DATETIME2".to_string(),
            DbType::Guid => "UNIQUEIDENTIFIER".to_string(),
            DbType::Binary => match size {
                Some(n) => format!("VARBINARY({})", n),
                None => "VARBINARY(MAX)".to_string(),
            },
        }
    }

    fn identity_suffix(&self) -> &'static str {
        "IDENTITY(1,1)"
    }

    fn routine_param(
        &self,
        mode: ParamMode,
        name: &str,
        type_name: &str,
        _is_function: bool,
    ) -> String {
        let mut rendered = format!("@{} {}", name, type_name);
        if matches!(mode, ParamMode::Out | ParamMode::InOut) {
            rendered.push_str(" OUTPUT");
        }
        rendered
    }

    fn declare_line(&self, name: &str, type_name: &str) -> String {
        format!("DECLARE @{} {}", name, type_name)
    }

    fn routine_param_parens(&self) -> bool {
        false
    }

    fn routine_body_open(&self) -> &'static str {
        "AS\nBEGIN"
    }
}
