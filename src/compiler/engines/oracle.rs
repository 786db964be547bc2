use chrono::{NaiveDate, NaiveDateTime};

use crate::ast::ddl::RoutineKind;
use crate::ast::operators::ParamMode;
use crate::ast::values::DbType;
use crate::ast::FunctionKind;
use crate::compiler::traits::{decimal_name, DialectRenderer};
use crate::dialect::Dialect;
use crate::error::{SqlForgeError, SqlForgeResult};

use super::aggregate_call;

/// Oracle renderer (12c+).
pub struct OracleRenderer;

impl DialectRenderer for OracleRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
    }

    fn date_literal(&self, value: NaiveDate) -> String {
        format!("DATE '{}'", value.format("%Y-%m-%d"))
    }

    fn datetime_literal(&self, value: NaiveDateTime) -> String {
        format!("TIMESTAMP '{}'", value.format("%Y-%m-%d %H:%M:%S"))
    }

    fn binary_literal(&self, bytes: &[u8]) -> String {
        let hex: String = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        format!("HEXTORAW('{}')", hex)
    }

    fn function_call(&self, kind: FunctionKind, args: &[String]) -> SqlForgeResult<String> {
        if let Some(agg) = aggregate_call(kind, args) {
            return Ok(agg);
        }
        Ok(match kind {
            FunctionKind::Concat => self.concat(args),
            FunctionKind::IsNull => format!("NVL({}, {})", args[0], args[1]),
            // There is no table-agnostic last-identity in Oracle; callers
            // read the sequence's CURRVAL instead.
            FunctionKind::LastInsertId => {
                return Err(SqlForgeError::UnsupportedFunction {
                    kind,
                    dialect: self.dialect(),
                })
            }
            FunctionKind::GetDate => "CURRENT_TIMESTAMP".to_string(),
            _ => unreachable!("aggregates handled above"),
        })
    }

    fn type_name(&self, db_type: DbType, size: Option<u32>, scale: Option<u32>) -> String {
        match db_type {
            DbType::Boolean => "NUMBER(1)".to_string(),
            DbType::Int32 => "NUMBER(10)".to_string(),
            DbType::Int64 => "NUMBER(19)".to_string(),
            DbType::Double => "BINARY_DOUBLE".to_string(),
            DbType::Decimal => decimal_name("NUMBER", size, scale),
            DbType::Currency => "NUMBER(19, 4)".to_string(),
            DbType::String => format!("NVARCHAR2({})", size.unwrap_or(255)),
            DbType::AnsiString => format!("VARCHAR2({})", size.unwrap_or(255)),
            DbType::Date => "DATE".to_string(),
            DbType::DateTime => "TIMESTAMP".to_string(),
            DbType::Guid => "RAW(16)".to_string(),
            DbType::Binary => "BLOB".to_string(),
        }
    }

    fn routine_param(
        &self,
        mode: ParamMode,
        name: &str,
        type_name: &str,
        _is_function: bool,
    ) -> String {
        let mode_kw = match mode {
            ParamMode::In => "IN",
            ParamMode::Out => "OUT",
            ParamMode::InOut => "IN OUT",
        };
        format!("{} {} {}", name, mode_kw, type_name)
    }

    fn declare_line(&self, name: &str, type_name: &str) -> String {
        format!("{} {}", name, type_name)
    }

    fn assign_statement(&self, target: &str, value: &str) -> String {
        format!("{} := {}", target, value)
    }

    fn routine_create_keyword(&self, kind: RoutineKind) -> String {
        match kind {
            RoutineKind::Procedure => "CREATE OR REPLACE PROCEDURE".to_string(),
            RoutineKind::Function => "CREATE OR REPLACE FUNCTION".to_string(),
        }
    }

    fn routine_returns(&self, type_name: &str) -> String {
        format!("RETURN {}", type_name)
    }

    fn routine_body_open(&self) -> &'static str {
        "IS"
    }

    fn routine_decls_before_begin(&self) -> bool {
        true
    }

    fn pseudo_table(&self) -> Option<&'static str> {
        Some("DUAL")
    }
}
