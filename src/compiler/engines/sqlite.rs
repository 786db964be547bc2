use crate::ast::values::DbType;
use crate::ast::FunctionKind;
use crate::compiler::traits::DialectRenderer;
use crate::dialect::Dialect;
use crate::error::SqlForgeResult;

use super::aggregate_call;

/// SQLite renderer.
pub struct SqliteRenderer;

impl DialectRenderer for SqliteRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn function_call(&self, kind: FunctionKind, args: &[String]) -> SqlForgeResult<String> {
        if let Some(agg) = aggregate_call(kind, args) {
            return Ok(agg);
        }
        Ok(match kind {
            FunctionKind::Concat => self.concat(args),
            FunctionKind::IsNull => format!("IFNULL({}, {})", args[0], args[1]),
            FunctionKind::LastInsertId => "last_insert_rowid()".to_string(),
            FunctionKind::GetDate => "CURRENT_TIMESTAMP".to_string(),
            _ => unreachable!("aggregates handled above"),
        })
    }

    /// Everything maps onto SQLite's storage classes.
    fn type_name(&self, db_type: DbType, _size: Option<u32>, _scale: Option<u32>) -> String {
        match db_type {
            DbType::Boolean | DbType::Int32 | DbType::Int64 => "INTEGER".to_string(),
            DbType::Double => "REAL".to_string(),
            DbType::Decimal | DbType::Currency => "NUMERIC".to_string(),
            DbType::String | DbType::AnsiString | DbType::Date | DbType::DateTime => {
                "TEXT".to_string()
            }
            DbType::Guid => "TEXT".to_string(),
            DbType::Binary => "BLOB".to_string(),
        }
    }

    fn identity_suffix(&self) -> &'static str {
        "AUTOINCREMENT"
    }

    /// AUTOINCREMENT is only legal on an `INTEGER PRIMARY KEY` column, so the
    /// key is declared inline rather than as a constraint block.
    fn identity_is_inline_pk(&self) -> bool {
        true
    }
}
