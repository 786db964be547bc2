//! Per-engine divergence: quoting, literals, placeholders, function names.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::ast::*;
use crate::compiler::ToSql;
use crate::dialect::Dialect;
use crate::error::SqlForgeError;

#[test]
fn test_identifier_quoting_per_engine() {
    let q = Select::from("users").columns(["id"]);
    assert_eq!(q.to_sql(Dialect::MySql).unwrap().sql, "SELECT `id` FROM `users`");
    assert_eq!(q.to_sql(Dialect::SqlServer).unwrap().sql, "SELECT [id] FROM [users]");
    assert_eq!(q.to_sql(Dialect::Sqlite).unwrap().sql, "SELECT \"id\" FROM \"users\"");
    assert_eq!(q.to_sql(Dialect::Oracle).unwrap().sql, "SELECT \"id\" FROM \"users\"");
}

#[test]
fn test_quote_character_escaping() {
    // A name containing the engine's own quote character must round-trip.
    let q = Select::from("t").columns(["a`b"]);
    assert_eq!(q.to_sql(Dialect::MySql).unwrap().sql, "SELECT `a``b` FROM `t`");

    let q = Select::from("t").columns(["a]b"]);
    assert_eq!(q.to_sql(Dialect::SqlServer).unwrap().sql, "SELECT [a]]b] FROM [t]");

    let q = Select::from("t").columns(["a\"b"]);
    assert_eq!(q.to_sql(Dialect::Sqlite).unwrap().sql, "SELECT \"a\"\"b\" FROM \"t\"");
}

#[test]
fn test_bool_literals() {
    let q = Select::from("users").filter(col("active").eq(lit(true)));
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT * FROM `users` WHERE `active` = 1"
    );
    assert_eq!(
        q.to_sql(Dialect::Sqlite).unwrap().sql,
        "SELECT * FROM \"users\" WHERE \"active\" = 1"
    );
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT * FROM [users] WHERE [active] = 1"
    );
    assert_eq!(
        q.to_sql(Dialect::Ansi).unwrap().sql,
        "SELECT * FROM \"users\" WHERE \"active\" = TRUE"
    );
}

#[test]
fn test_string_literals_and_escaping() {
    let q = Select::from("t").filter(col("name").eq(lit("O'Brien")));
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT * FROM `t` WHERE `name` = 'O''Brien'"
    );
    // SQL Server marks unicode strings; AnsiString stays plain.
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT * FROM [t] WHERE [name] = N'O''Brien'"
    );
    let q = Select::from("t").filter(col("code").eq(Expr::Literal(SqlValue::ansi("A1"))));
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT * FROM [t] WHERE [code] = 'A1'"
    );
}

#[test]
fn test_date_literals() {
    let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let q = Select::from("t").filter(col("d").gte(lit(date)));
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT * FROM `t` WHERE `d` >= '2024-05-01'"
    );
    assert_eq!(
        q.to_sql(Dialect::Ansi).unwrap().sql,
        "SELECT * FROM \"t\" WHERE \"d\" >= DATE '2024-05-01'"
    );
    assert_eq!(
        q.to_sql(Dialect::Oracle).unwrap().sql,
        "SELECT * FROM \"t\" WHERE \"d\" >= DATE '2024-05-01'"
    );
}

#[test]
fn test_binary_literals() {
    let q = Select::from("t").filter(col("h").eq(lit(vec![0xABu8, 0xCD])));
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT * FROM `t` WHERE `h` = X'ABCD'"
    );
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT * FROM [t] WHERE [h] = 0xABCD"
    );
    assert_eq!(
        q.to_sql(Dialect::Oracle).unwrap().sql,
        "SELECT * FROM \"t\" WHERE \"h\" = HEXTORAW('ABCD')"
    );
}

#[test]
fn test_concat_rendering() {
    let expr = col("first").concat(col("last"));
    let q = Select::from("users").column(expr.alias("full_name"));
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT CONCAT(`first`, `last`) AS `full_name` FROM `users`"
    );
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT [first] + [last] AS [full_name] FROM [users]"
    );
    assert_eq!(
        q.to_sql(Dialect::Sqlite).unwrap().sql,
        "SELECT \"first\" || \"last\" AS \"full_name\" FROM \"users\""
    );
}

#[test]
fn test_isnull_function_mapping() {
    let q = Select::from("users")
        .column(func(FunctionKind::IsNull, [col("nick"), lit("n/a")]).alias("n"));
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT ISNULL([nick], N'n/a') AS [n] FROM [users]"
    );
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT IFNULL(`nick`, 'n/a') AS `n` FROM `users`"
    );
    assert_eq!(
        q.to_sql(Dialect::Oracle).unwrap().sql,
        "SELECT NVL(\"nick\", 'n/a') AS \"n\" FROM \"users\""
    );
    assert_eq!(
        q.to_sql(Dialect::Ansi).unwrap().sql,
        "SELECT COALESCE(\"nick\", 'n/a') AS \"n\" FROM \"users\""
    );
}

#[test]
fn test_last_insert_id_mapping() {
    let q = Select::scalar(func(FunctionKind::LastInsertId, []));
    assert_eq!(q.to_sql(Dialect::MySql).unwrap().sql, "SELECT LAST_INSERT_ID()");
    assert_eq!(q.to_sql(Dialect::Sqlite).unwrap().sql, "SELECT last_insert_rowid()");
    assert_eq!(q.to_sql(Dialect::SqlServer).unwrap().sql, "SELECT SCOPE_IDENTITY()");

    let err = q.to_sql(Dialect::Oracle).unwrap_err();
    assert!(matches!(err, SqlForgeError::UnsupportedFunction { .. }));
    assert!(err.to_string().contains("Oracle"));
}

#[test]
fn test_get_date_mapping() {
    let q = Select::scalar(func(FunctionKind::GetDate, []).alias("now"));
    assert_eq!(q.to_sql(Dialect::SqlServer).unwrap().sql, "SELECT GETDATE() AS [now]");
    assert_eq!(q.to_sql(Dialect::MySql).unwrap().sql, "SELECT NOW() AS `now`");
    assert_eq!(
        q.to_sql(Dialect::Oracle).unwrap().sql,
        "SELECT CURRENT_TIMESTAMP AS \"now\" FROM DUAL"
    );
}

#[test]
fn test_unsupported_type_is_rejected() {
    let id = Uuid::nil();
    let q = Select::from("t").filter(col("g").eq(lit(id)));
    let err = q.to_sql(Dialect::Sqlite).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Guid"));
    assert!(msg.contains("SQLite"));

    let q = Select::from("t").filter(col("b").eq(lit(true)));
    assert!(q.to_sql(Dialect::Oracle).is_err());
}

#[test]
fn test_guid_literal() {
    let id = Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
    let q = Select::from("t").filter(col("g").eq(lit(id)));
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT * FROM [t] WHERE [g] = '6ba7b810-9dad-11d1-80b4-00c04fd430c8'"
    );
}
