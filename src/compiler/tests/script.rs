//! Script compilation: ordered statements, terminators, local declarations.

use pretty_assertions::assert_eq;

use crate::ast::*;
use crate::compiler::ToSql;
use crate::dialect::Dialect;

// The classic unit: insert a row, read back the generated key.
#[test]
fn test_insert_then_last_id() {
    let script = Script::new()
        .statement(
            Insert::into("logs")
                .columns(["message"])
                .values([lit("hello")]),
        )
        .statement(Select::scalar(func(FunctionKind::LastInsertId, [])));

    assert_eq!(
        script.to_sql(Dialect::MySql).unwrap().sql,
        "INSERT INTO `logs` (`message`) VALUES ('hello');\nSELECT LAST_INSERT_ID();"
    );
    assert_eq!(
        script.to_sql(Dialect::Sqlite).unwrap().sql,
        "INSERT INTO \"logs\" (\"message\") VALUES ('hello');\nSELECT last_insert_rowid();"
    );
    assert_eq!(
        script.to_sql(Dialect::SqlServer).unwrap().sql,
        "INSERT INTO [logs] ([message]) VALUES (N'hello');\nSELECT SCOPE_IDENTITY();"
    );
}

// A declared variable keeps its local form for the rest of the script.
#[test]
fn test_declare_excludes_name_from_prefixing() {
    let script = Script::new()
        .statement(Declare::new(Parameter::new("total", DbType::Int32)))
        .statement(Assign::new("total", lit(5)))
        .statement(
            Select::from("t").filter(col("x").eq(param(Parameter::new("total", DbType::Int32)))),
        );

    let out = script.to_sql(Dialect::SqlServer).unwrap();
    assert_eq!(
        out.sql,
        "DECLARE @total INT;\nSET @total = 5;\nSELECT * FROM [t] WHERE [x] = @total;"
    );
    // The local is not a bound parameter.
    assert!(out.params.is_empty());
}

#[test]
fn test_script_mixes_parameters_and_locals() {
    let script = Script::new()
        .statement(Declare::new(Parameter::new("cutoff", DbType::Int32)))
        .statement(Assign::new("cutoff", lit(100)))
        .statement(
            Delete::from("events").filter(
                col("severity")
                    .lt(param(Parameter::new("cutoff", DbType::Int32)))
                    .and(col("source").eq(param(Parameter::new("source", DbType::String)))),
            ),
        );

    let out = script.to_sql(Dialect::SqlServer).unwrap();
    assert_eq!(
        out.sql,
        "DECLARE @cutoff INT;\nSET @cutoff = 100;\n\
         DELETE FROM [events] WHERE [severity] < @cutoff AND [source] = @source;"
    );
    assert_eq!(out.params.len(), 1);
    assert_eq!(out.params[0].name, "source");
}

#[test]
fn test_script_ddl_then_dml() {
    let script = Script::new()
        .statement(
            CreateTable::new("staging")
                .column(ColumnDef::new("id", DbType::Int32))
                .column(ColumnDef::new("payload", DbType::String).size(200).nullable()),
        )
        .statement(
            Insert::into("staging")
                .columns(["id"])
                .values([lit(1)]),
        );

    assert_eq!(
        script.to_sql(Dialect::Sqlite).unwrap().sql,
        "CREATE TABLE \"staging\" (\n\
         \x20   \"id\" INTEGER NOT NULL,\n\
         \x20   \"payload\" TEXT\n\
         );\n\
         INSERT INTO \"staging\" (\"id\") VALUES (1);"
    );
}

// Delimiter-wrapped routines terminate themselves; the script must not add
// a second terminator after the restored delimiter.
#[test]
fn test_script_with_mysql_routine() {
    let script = Script::new()
        .statement(Drop::routine("Touch").if_exists())
        .statement(
            CreateRoutine::procedure("Touch")
                .statement(Update::table("stats").set("touched", lit(1))),
        );

    assert_eq!(
        script.to_sql(Dialect::MySql).unwrap().sql,
        "DROP PROCEDURE IF EXISTS `Touch`;\n\
         DELIMITER $$\n\
         CREATE PROCEDURE `Touch` ()\n\
         BEGIN\n\
         \x20   UPDATE `stats` SET `touched` = 1;\n\
         END$$\n\
         DELIMITER ;"
    );
}

#[test]
fn test_each_member_keeps_its_pagination() {
    let script = Script::new()
        .statement(Select::from("a").columns(["x"]).top(TopSpec::count(1)))
        .statement(Select::from("b").columns(["y"]).top(TopSpec::count(2)));

    assert_eq!(
        script.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT `x` FROM `a` LIMIT 1;\nSELECT `y` FROM `b` LIMIT 2;"
    );
}
