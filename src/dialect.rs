//! Per-engine capability descriptors.
//!
//! A `DialectProperties` is a read-only fact sheet the compiler consults
//! before emitting anything engine-sensitive. Adding an engine is a matter of
//! filling in one static table here plus a renderer in
//! `compiler::engines`.

use serde::{Deserialize, Serialize};

use crate::ast::select::TopKind;
use crate::ast::values::DbType;
use crate::error::{SqlForgeError, SqlForgeResult};

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Dialect {
    SqlServer,
    MySql,
    Sqlite,
    Oracle,
    /// Generic ANSI SQL, the fallback profile.
    #[default]
    Ansi,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.properties().product)
    }
}

/// Kinds of schema object the DDL surface manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaType {
    Table,
    Index,
    View,
    Routine,
    Sequence,
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SchemaType::Table => "Table",
            SchemaType::Index => "Index",
            SchemaType::View => "View",
            SchemaType::Routine => "Routine",
            SchemaType::Sequence => "Sequence",
        };
        write!(f, "{}", name)
    }
}

/// Named DDL capabilities that engines may lack per schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaOperation {
    /// Creating the object at all.
    Create,
    /// `IF EXISTS` guard on DROP.
    CheckExists,
    /// `IF NOT EXISTS` guard on CREATE.
    CheckNotExists,
    /// Table-qualified form (`DROP INDEX name ON table`).
    CreateOn,
}

impl std::fmt::Display for SchemaOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SchemaOperation::Create => "Create",
            SchemaOperation::CheckExists => "CheckExists",
            SchemaOperation::CheckNotExists => "CheckNotExists",
            SchemaOperation::CreateOn => "CreateOn",
        };
        write!(f, "{}", name)
    }
}

/// How the engine's limit-to-count strategy is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountStrategy {
    /// `LIMIT n` appended after the statement.
    TrailingLimit,
    /// `TOP n [PERCENT]` immediately after SELECT.
    LeadingTop,
    /// `FETCH FIRST n [PERCENT] ROWS ONLY` appended after ORDER BY.
    FetchFirst,
}

/// How the engine's offset-range strategy is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStrategy {
    /// `LIMIT n OFFSET m` appended after the statement.
    TrailingLimit,
    /// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`.
    OffsetFetch,
    /// ROW_NUMBER() windowing rewrite around the whole statement.
    RowNumberWindow,
}

/// Placeholder convention for bound parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLayout {
    /// Named placeholders with the given prefix (`@name`, `:name`).
    Named(char),
    /// Positional `?` placeholders.
    Positional,
}

/// Immutable per-engine capability descriptor.
#[derive(Debug)]
pub struct DialectProperties {
    pub dialect: Dialect,
    pub product: &'static str,
    pub version: &'static str,
    /// Data types the engine can store. Compiling a literal or parameter of
    /// any other type is a hard failure.
    pub supported_types: &'static [DbType],
    pub supported_tops: &'static [TopKind],
    pub count_strategy: CountStrategy,
    pub range_strategy: RangeStrategy,
    pub param_layout: ParamLayout,
    /// Identifier quote pair.
    pub quotes: (char, char),
    pub terminator: &'static str,
    /// (schema type, operation) pairs the engine does NOT support.
    pub unsupported: &'static [(SchemaType, SchemaOperation)],
}

impl DialectProperties {
    pub fn supports_type(&self, db_type: DbType) -> bool {
        self.supported_types.contains(&db_type)
    }

    pub fn supports_top(&self, kind: TopKind) -> bool {
        self.supported_tops.contains(&kind)
    }

    pub fn supports_schema_op(&self, schema_type: SchemaType, op: SchemaOperation) -> bool {
        !self.unsupported.contains(&(schema_type, op))
    }

    /// Fail fast if the type is unsupported on this engine.
    pub fn ensure_type(&self, db_type: DbType) -> SqlForgeResult<()> {
        if self.supports_type(db_type) {
            Ok(())
        } else {
            Err(SqlForgeError::UnsupportedType {
                db_type,
                dialect: self.dialect,
            })
        }
    }

    /// Fail fast if the top strategy is unsupported on this engine.
    pub fn ensure_top(&self, kind: TopKind) -> SqlForgeResult<()> {
        if self.supports_top(kind) {
            Ok(())
        } else {
            Err(SqlForgeError::UnsupportedTop {
                kind,
                dialect: self.dialect,
            })
        }
    }

    /// Fail fast if the (schema type, operation) pair is excluded.
    pub fn ensure_schema_op(
        &self,
        schema_type: SchemaType,
        op: SchemaOperation,
    ) -> SqlForgeResult<()> {
        if self.supports_schema_op(schema_type, op) {
            Ok(())
        } else {
            Err(SqlForgeError::unsupported_op(schema_type, op, self.dialect))
        }
    }
}

const ALL_TYPES: &[DbType] = &[
    DbType::Boolean,
    DbType::Int32,
    DbType::Int64,
    DbType::Double,
    DbType::Decimal,
    DbType::Currency,
    DbType::String,
    DbType::AnsiString,
    DbType::Date,
    DbType::DateTime,
    DbType::Guid,
    DbType::Binary,
];

// SQLite stores everything in its five storage classes; Guid and Currency
// have no faithful representation and are rejected rather than silently
// degraded.
const SQLITE_TYPES: &[DbType] = &[
    DbType::Boolean,
    DbType::Int32,
    DbType::Int64,
    DbType::Double,
    DbType::Decimal,
    DbType::String,
    DbType::AnsiString,
    DbType::Date,
    DbType::DateTime,
    DbType::Binary,
];

// Oracle has no SQL-level BOOLEAN column type.
const ORACLE_TYPES: &[DbType] = &[
    DbType::Int32,
    DbType::Int64,
    DbType::Double,
    DbType::Decimal,
    DbType::Currency,
    DbType::String,
    DbType::AnsiString,
    DbType::Date,
    DbType::DateTime,
    DbType::Guid,
    DbType::Binary,
];

static SQL_SERVER: DialectProperties = DialectProperties {
    dialect: Dialect::SqlServer,
    product: "SQL Server",
    version: "2016+",
    supported_types: ALL_TYPES,
    supported_tops: &[TopKind::Count, TopKind::Percent, TopKind::Range],
    count_strategy: CountStrategy::LeadingTop,
    range_strategy: RangeStrategy::RowNumberWindow,
    param_layout: ParamLayout::Named('@'),
    quotes: ('[', ']'),
    terminator: ";",
    unsupported: &[
        (SchemaType::Table, SchemaOperation::CheckNotExists),
        (SchemaType::Index, SchemaOperation::CheckNotExists),
        (SchemaType::View, SchemaOperation::CheckNotExists),
    ],
};

static MYSQL: DialectProperties = DialectProperties {
    dialect: Dialect::MySql,
    product: "MySQL",
    version: "8.0",
    supported_types: ALL_TYPES,
    supported_tops: &[TopKind::Count, TopKind::Range],
    count_strategy: CountStrategy::TrailingLimit,
    range_strategy: RangeStrategy::TrailingLimit,
    param_layout: ParamLayout::Positional,
    quotes: ('`', '`'),
    terminator: ";",
    unsupported: &[
        (SchemaType::Index, SchemaOperation::CheckNotExists),
        (SchemaType::View, SchemaOperation::CheckNotExists),
        (SchemaType::Sequence, SchemaOperation::Create),
    ],
};

static SQLITE: DialectProperties = DialectProperties {
    dialect: Dialect::Sqlite,
    product: "SQLite",
    version: "3",
    supported_types: SQLITE_TYPES,
    supported_tops: &[TopKind::Count, TopKind::Range],
    count_strategy: CountStrategy::TrailingLimit,
    range_strategy: RangeStrategy::TrailingLimit,
    param_layout: ParamLayout::Positional,
    quotes: ('"', '"'),
    terminator: ";",
    unsupported: &[
        (SchemaType::Routine, SchemaOperation::Create),
        (SchemaType::Sequence, SchemaOperation::Create),
        (SchemaType::Index, SchemaOperation::CreateOn),
    ],
};

static ORACLE: DialectProperties = DialectProperties {
    dialect: Dialect::Oracle,
    product: "Oracle",
    version: "12c+",
    supported_types: ORACLE_TYPES,
    supported_tops: &[TopKind::Count, TopKind::Percent, TopKind::Range],
    count_strategy: CountStrategy::FetchFirst,
    range_strategy: RangeStrategy::OffsetFetch,
    param_layout: ParamLayout::Named(':'),
    quotes: ('"', '"'),
    terminator: ";",
    unsupported: &[
        (SchemaType::Table, SchemaOperation::CheckExists),
        (SchemaType::Table, SchemaOperation::CheckNotExists),
        (SchemaType::Index, SchemaOperation::CheckExists),
        (SchemaType::Index, SchemaOperation::CheckNotExists),
        (SchemaType::View, SchemaOperation::CheckExists),
        (SchemaType::View, SchemaOperation::CheckNotExists),
        (SchemaType::Routine, SchemaOperation::CheckExists),
        (SchemaType::Routine, SchemaOperation::CheckNotExists),
        (SchemaType::Sequence, SchemaOperation::CheckExists),
        (SchemaType::Sequence, SchemaOperation::CheckNotExists),
        (SchemaType::Index, SchemaOperation::CreateOn),
    ],
};

static ANSI: DialectProperties = DialectProperties {
    dialect: Dialect::Ansi,
    product: "ANSI SQL",
    version: "SQL-92",
    supported_types: ALL_TYPES,
    supported_tops: &[TopKind::Count, TopKind::Range],
    count_strategy: CountStrategy::FetchFirst,
    range_strategy: RangeStrategy::RowNumberWindow,
    param_layout: ParamLayout::Positional,
    quotes: ('"', '"'),
    terminator: ";",
    unsupported: &[
        (SchemaType::Table, SchemaOperation::CheckExists),
        (SchemaType::Table, SchemaOperation::CheckNotExists),
        (SchemaType::Index, SchemaOperation::CheckExists),
        (SchemaType::Index, SchemaOperation::CheckNotExists),
        (SchemaType::View, SchemaOperation::CheckExists),
        (SchemaType::View, SchemaOperation::CheckNotExists),
        (SchemaType::Routine, SchemaOperation::CheckExists),
        (SchemaType::Routine, SchemaOperation::CheckNotExists),
        (SchemaType::Sequence, SchemaOperation::CheckExists),
        (SchemaType::Sequence, SchemaOperation::CheckNotExists),
        (SchemaType::Index, SchemaOperation::CreateOn),
    ],
};

impl Dialect {
    /// The static capability descriptor for this engine.
    pub fn properties(&self) -> &'static DialectProperties {
        match self {
            Dialect::SqlServer => &SQL_SERVER,
            Dialect::MySql => &MYSQL,
            Dialect::Sqlite => &SQLITE,
            Dialect::Oracle => &ORACLE,
            Dialect::Ansi => &ANSI,
        }
    }
}
