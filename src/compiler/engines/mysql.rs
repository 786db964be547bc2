use crate::ast::ddl::RoutineKind;
use crate::ast::values::DbType;
use crate::ast::FunctionKind;
use crate::compiler::traits::{decimal_name, DialectRenderer};
use crate::dialect::Dialect;
use crate::error::SqlForgeResult;

use super::aggregate_call;

/// MySQL renderer.
pub struct MySqlRenderer;

impl DialectRenderer for MySqlRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn concat(&self, parts: &[String]) -> String {
        format!("CONCAT({})", parts.join(", "))
    }

    fn function_call(&self, kind: FunctionKind, args: &[String]) -> SqlForgeResult<String> {
        if let Some(agg) = aggregate_call(kind, args) {
            return Ok(agg);
        }
        Ok(match kind {
            FunctionKind::Concat => self.concat(args),
            FunctionKind::IsNull => format!("IFNULL({}, {})", args[0], args[1]),
            FunctionKind::LastInsertId => "LAST_INSERT_ID()".to_string(),
            FunctionKind::GetDate => "NOW()".to_string(),
            _ => unreachable!("aggregates handled above"),
        })
    }

    fn type_name(&self, db_type: DbType, size: Option<u32>, scale: Option<u32>) -> String {
        match db_type {
            DbType::Boolean => "TINYINT(1)".to_string(),
            DbType::Int32 => "INT".to_string(),
            DbType::Int64 => "BIGINT".to_string(),
            DbType::Double => "DOUBLE".to_string(),
            DbType::Decimal => decimal_name("DECIMAL", size, scale),
            DbType::Currency => "DECIMAL(19, 4)".to_string(),
            DbType::String | DbType::AnsiString => format!("VARCHAR({})", size.unwrap_or(255)),
            DbType::Date => "DATE".to_string(),
            DbType::DateTime => "DATETIME".to_string(),
            DbType::Guid => "CHAR(36)".to_string(),
            DbType::Binary => match size {
                Some(n) => format!("VARBINARY({})", n),
                None => "BLOB".to_string(),
            },
        }
    }

    fn identity_suffix(&self) -> &'static str {
        "AUTO_INCREMENT"
    }

    fn table_suffix(&self) -> &'static str {
        " ENGINE=InnoDB"
    }

    /// The session terminator would end the CREATE inside the body; switch
    /// the delimiter for the duration of the routine, then restore it.
    fn routine_wrapper(&self) -> Option<(&'static str, &'static str)> {
        Some(("DELIMITER $$", "$$\nDELIMITER ;"))
    }

    fn routine_characteristics(&self, kind: RoutineKind) -> &'static str {
        match kind {
            RoutineKind::Function => "DETERMINISTIC",
            RoutineKind::Procedure => "",
        }
    }
}
