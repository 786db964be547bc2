use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declared database type of a literal, parameter or column.
///
/// The tag is explicit rather than inferred from the runtime value so that
/// distinctions the value alone cannot carry (Currency vs Double, AnsiString
/// vs String) survive into compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DbType {
    Boolean,
    Int32,
    Int64,
    Double,
    Decimal,
    /// Fixed-point money type. Distinct from Decimal and Double on engines
    /// that have a native money representation.
    Currency,
    /// Unicode character data.
    String,
    /// Non-unicode character data.
    AnsiString,
    Date,
    DateTime,
    Guid,
    Binary,
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DbType::Boolean => "Boolean",
            DbType::Int32 => "Int32",
            DbType::Int64 => "Int64",
            DbType::Double => "Double",
            DbType::Decimal => "Decimal",
            DbType::Currency => "Currency",
            DbType::String => "String",
            DbType::AnsiString => "AnsiString",
            DbType::Date => "Date",
            DbType::DateTime => "DateTime",
            DbType::Guid => "Guid",
            DbType::Binary => "Binary",
        };
        write!(f, "{}", name)
    }
}

/// A typed literal value. The variant is the type tag: the compiler never
/// inspects anything but the variant to decide how a value renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum SqlValue {
    #[default]
    Null,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Decimal(Decimal),
    Currency(Decimal),
    String(String),
    AnsiString(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Guid(Uuid),
    Binary(Vec<u8>),
}

impl SqlValue {
    /// The declared type of this value. `Null` has no intrinsic type and
    /// reports as String for descriptor purposes.
    pub fn db_type(&self) -> DbType {
        match self {
            SqlValue::Null => DbType::String,
            SqlValue::Bool(_) => DbType::Boolean,
            SqlValue::Int32(_) => DbType::Int32,
            SqlValue::Int64(_) => DbType::Int64,
            SqlValue::Double(_) => DbType::Double,
            SqlValue::Decimal(_) => DbType::Decimal,
            SqlValue::Currency(_) => DbType::Currency,
            SqlValue::String(_) => DbType::String,
            SqlValue::AnsiString(_) => DbType::AnsiString,
            SqlValue::Date(_) => DbType::Date,
            SqlValue::DateTime(_) => DbType::DateTime,
            SqlValue::Guid(_) => DbType::Guid,
            SqlValue::Binary(_) => DbType::Binary,
        }
    }

    /// Construct a Currency value from a Decimal.
    pub fn currency(d: Decimal) -> Self {
        SqlValue::Currency(d)
    }

    /// Construct a non-unicode string value.
    pub fn ansi(s: impl Into<String>) -> Self {
        SqlValue::AnsiString(s.into())
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl From<i32> for SqlValue {
    fn from(n: i32) -> Self {
        SqlValue::Int32(n)
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Int64(n)
    }
}

impl From<f64> for SqlValue {
    fn from(n: f64) -> Self {
        SqlValue::Double(n)
    }
}

impl From<Decimal> for SqlValue {
    fn from(d: Decimal) -> Self {
        SqlValue::Decimal(d)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::String(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::String(s)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(d: NaiveDate) -> Self {
        SqlValue::Date(d)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(dt: NaiveDateTime) -> Self {
        SqlValue::DateTime(dt)
    }
}

impl From<Uuid> for SqlValue {
    fn from(u: Uuid) -> Self {
        SqlValue::Guid(u)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(b: Vec<u8>) -> Self {
        SqlValue::Binary(b)
    }
}
