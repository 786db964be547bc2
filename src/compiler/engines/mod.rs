pub mod ansi;
pub mod mssql;
pub mod mysql;
pub mod oracle;
pub mod sqlite;

use crate::dialect::Dialect;

use super::traits::DialectRenderer;

pub use ansi::AnsiRenderer;
pub use mssql::SqlServerRenderer;
pub use mysql::MySqlRenderer;
pub use oracle::OracleRenderer;
pub use sqlite::SqliteRenderer;

/// The renderer for a dialect. Allocated fresh per compile alongside the
/// writer; renderers are stateless.
pub(crate) fn renderer(dialect: Dialect) -> Box<dyn DialectRenderer> {
    match dialect {
        Dialect::SqlServer => Box::new(SqlServerRenderer),
        Dialect::MySql => Box::new(MySqlRenderer),
        Dialect::Sqlite => Box::new(SqliteRenderer),
        Dialect::Oracle => Box::new(OracleRenderer),
        Dialect::Ansi => Box::new(AnsiRenderer),
    }
}

/// Shared rendering for the aggregate kinds, whose spelling never varies.
pub(crate) fn aggregate_call(
    kind: crate::ast::FunctionKind,
    args: &[String],
) -> Option<String> {
    use crate::ast::FunctionKind::*;
    let name = match kind {
        Count => "COUNT",
        Sum => "SUM",
        Avg => "AVG",
        Min => "MIN",
        Max => "MAX",
        _ => return None,
    };
    Some(format!("{}({})", name, args.join(", ")))
}
