use chrono::{NaiveDate, NaiveDateTime};

use crate::compiler::traits::DialectRenderer;
use crate::dialect::Dialect;

/// Generic ANSI renderer. Every trait default is the ANSI spelling; only the
/// standard's typed literals and boolean keywords are overridden here.
pub struct AnsiRenderer;

impl DialectRenderer for AnsiRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::Ansi
    }

    fn bool_literal(&self, value: bool) -> String {
        if value {
            "TRUE".to_string()
        } else {
            "FALSE".to_string()
        }
    }

    fn date_literal(&self, value: NaiveDate) -> String {
        format!("DATE '{}'", value.format("%Y-%m-%d"))
    }

    fn datetime_literal(&self, value: NaiveDateTime) -> String {
        format!("TIMESTAMP '{}'", value.format("%Y-%m-%d %H:%M:%S"))
    }
}
