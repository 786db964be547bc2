//! DDL emission per engine, and the exclusion-table fail-fast behavior.

use pretty_assertions::assert_eq;

use crate::ast::*;
use crate::compiler::ToSql;
use crate::dialect::{Dialect, SchemaOperation, SchemaType};
use crate::error::SqlForgeError;

fn customers() -> CreateTable {
    CreateTable::new("Customers")
        .column(ColumnDef::new("Id", DbType::Int32).identity())
        .column(ColumnDef::new("Name", DbType::String).size(100))
        .column(ColumnDef::new("Balance", DbType::Currency).nullable())
        .constraint(TableConstraint::primary_key(["Id"]))
}

#[test]
fn test_create_table_sql_server() {
    assert_eq!(
        customers().to_sql(Dialect::SqlServer).unwrap().sql,
        "CREATE TABLE [Customers] (\n\
         \x20   [Id] INT IDENTITY(1,1) NOT NULL,\n\
         \x20   [Name] NVARCHAR(100) NOT NULL,\n\
         \x20   [Balance] MONEY,\n\
         \x20   PRIMARY KEY ([Id])\n\
         )"
    );
}

#[test]
fn test_create_table_mysql() {
    assert_eq!(
        customers().to_sql(Dialect::MySql).unwrap().sql,
        "CREATE TABLE `Customers` (\n\
         \x20   `Id` INT AUTO_INCREMENT NOT NULL,\n\
         \x20   `Name` VARCHAR(100) NOT NULL,\n\
         \x20   `Balance` DECIMAL(19, 4),\n\
         \x20   PRIMARY KEY (`Id`)\n\
         ) ENGINE=InnoDB"
    );
}

// SQLite identity columns take their PRIMARY KEY inline; the separate
// single-column constraint is suppressed.
#[test]
fn test_create_table_sqlite_inline_identity() {
    let ct = CreateTable::new("Customers")
        .column(ColumnDef::new("Id", DbType::Int32).identity())
        .column(ColumnDef::new("Name", DbType::String).size(100))
        .constraint(TableConstraint::primary_key(["Id"]));
    assert_eq!(
        ct.to_sql(Dialect::Sqlite).unwrap().sql,
        "CREATE TABLE \"Customers\" (\n\
         \x20   \"Id\" INTEGER PRIMARY KEY AUTOINCREMENT,\n\
         \x20   \"Name\" TEXT NOT NULL\n\
         )"
    );
}

#[test]
fn test_create_table_oracle_identity() {
    let ct = CreateTable::new("Customers")
        .column(ColumnDef::new("Id", DbType::Int32).identity())
        .constraint(TableConstraint::primary_key(["Id"]));
    assert_eq!(
        ct.to_sql(Dialect::Oracle).unwrap().sql,
        "CREATE TABLE \"Customers\" (\n\
         \x20   \"Id\" NUMBER(10) GENERATED ALWAYS AS IDENTITY NOT NULL,\n\
         \x20   PRIMARY KEY (\"Id\")\n\
         )"
    );
}

#[test]
fn test_foreign_key_with_actions() {
    let ct = CreateTable::new("Orders")
        .column(ColumnDef::new("Id", DbType::Int32).identity())
        .column(ColumnDef::new("CustomerId", DbType::Int32))
        .constraint(TableConstraint::primary_key(["Id"]))
        .constraint(
            TableConstraint::foreign_key(["CustomerId"], "Customers", ["Id"])
                .named("FK_Orders_Customers")
                .on_delete(FkAction::Cascade),
        );
    assert_eq!(
        ct.to_sql(Dialect::SqlServer).unwrap().sql,
        "CREATE TABLE [Orders] (\n\
         \x20   [Id] INT IDENTITY(1,1) NOT NULL,\n\
         \x20   [CustomerId] INT NOT NULL,\n\
         \x20   PRIMARY KEY ([Id]),\n\
         \x20   CONSTRAINT [FK_Orders_Customers] FOREIGN KEY ([CustomerId]) \
         REFERENCES [Customers] ([Id]) ON DELETE CASCADE\n\
         )"
    );
}

#[test]
fn test_create_table_default_and_unique() {
    let ct = CreateTable::new("Tags")
        .column(ColumnDef::new("Name", DbType::String).size(50).unique())
        .column(ColumnDef::new("Uses", DbType::Int32).default_value(lit(0)));
    assert_eq!(
        ct.to_sql(Dialect::MySql).unwrap().sql,
        "CREATE TABLE `Tags` (\n\
         \x20   `Name` VARCHAR(50) NOT NULL UNIQUE,\n\
         \x20   `Uses` INT NOT NULL DEFAULT 0\n\
         ) ENGINE=InnoDB"
    );
}

#[test]
fn test_create_table_without_columns_is_rejected() {
    let err = CreateTable::new("Empty").to_sql(Dialect::Ansi).unwrap_err();
    assert!(matches!(err, SqlForgeError::InvalidStatement(_)));
}

#[test]
fn test_create_table_if_not_exists() {
    let ct = CreateTable::new("T")
        .column(ColumnDef::new("Id", DbType::Int32))
        .if_not_exists();
    assert_eq!(
        ct.to_sql(Dialect::Sqlite).unwrap().sql,
        "CREATE TABLE IF NOT EXISTS \"T\" (\n    \"Id\" INTEGER NOT NULL\n)"
    );
    // SQL Server has no CREATE TABLE IF NOT EXISTS.
    assert!(ct.to_sql(Dialect::SqlServer).is_err());
}

#[test]
fn test_create_index() {
    let ci = CreateIndex::new("IX_Users_Email", "Users")
        .column("Email", SortOrder::Asc)
        .unique();
    assert_eq!(
        ci.to_sql(Dialect::SqlServer).unwrap().sql,
        "CREATE UNIQUE INDEX [IX_Users_Email] ON [Users] ([Email] ASC)"
    );
    assert_eq!(
        ci.to_sql(Dialect::Sqlite).unwrap().sql,
        "CREATE UNIQUE INDEX \"IX_Users_Email\" ON \"Users\" (\"Email\" ASC)"
    );
}

#[test]
fn test_create_index_if_not_exists_gating() {
    let ci = CreateIndex::new("IX", "T")
        .column("C", SortOrder::Asc)
        .if_not_exists();

    assert_eq!(
        ci.to_sql(Dialect::Sqlite).unwrap().sql,
        "CREATE INDEX IF NOT EXISTS \"IX\" ON \"T\" (\"C\" ASC)"
    );

    // Excluded pair: the failure names the schema type, the operation and
    // the engine, and no text is produced.
    let err = ci.to_sql(Dialect::SqlServer).unwrap_err();
    match err {
        SqlForgeError::UnsupportedSchemaOperation {
            schema_type,
            operation,
            dialect,
        } => {
            assert_eq!(schema_type, SchemaType::Index);
            assert_eq!(operation, SchemaOperation::CheckNotExists);
            assert_eq!(dialect, Dialect::SqlServer);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_drop_table() {
    let d = Drop::table("Users").if_exists();
    assert_eq!(
        d.to_sql(Dialect::SqlServer).unwrap().sql,
        "DROP TABLE IF EXISTS [Users]"
    );
    assert_eq!(
        d.to_sql(Dialect::MySql).unwrap().sql,
        "DROP TABLE IF EXISTS `Users`"
    );

    // Oracle has no IF EXISTS guard.
    assert!(d.to_sql(Dialect::Oracle).is_err());
    assert_eq!(
        Drop::table("Users").to_sql(Dialect::Oracle).unwrap().sql,
        "DROP TABLE \"Users\""
    );
}

#[test]
fn test_drop_index_table_qualification() {
    // SQL Server and MySQL qualify DROP INDEX with the owning table.
    let d = Drop::index("IX_Users_Email").on("Users");
    assert_eq!(
        d.to_sql(Dialect::SqlServer).unwrap().sql,
        "DROP INDEX [IX_Users_Email] ON [Users]"
    );
    assert_eq!(
        d.to_sql(Dialect::MySql).unwrap().sql,
        "DROP INDEX `IX_Users_Email` ON `Users`"
    );

    // SQLite resolves the index from metadata alone.
    assert_eq!(
        d.to_sql(Dialect::Sqlite).unwrap().sql,
        "DROP INDEX \"IX_Users_Email\""
    );

    // The qualifying engines treat a missing table as a structural error.
    let bare = Drop::index("IX_Users_Email");
    assert!(bare.to_sql(Dialect::SqlServer).is_err());
}

#[test]
fn test_create_view() {
    let cv = CreateView::new(
        "ActiveUsers",
        Select::from("Users").columns(["Id", "Email"]).filter(col("Active").eq(lit(true))),
    );
    assert_eq!(
        cv.to_sql(Dialect::SqlServer).unwrap().sql,
        "CREATE VIEW [ActiveUsers] AS SELECT [Id], [Email] FROM [Users] WHERE [Active] = 1"
    );
}

#[test]
fn test_create_sequence() {
    let cs = CreateSequence::new("OrderSeq").start(100).increment(1).max_value(100000);
    assert_eq!(
        cs.to_sql(Dialect::Oracle).unwrap().sql,
        "CREATE SEQUENCE \"OrderSeq\" START WITH 100 INCREMENT BY 1 MAXVALUE 100000"
    );
    assert_eq!(
        cs.to_sql(Dialect::SqlServer).unwrap().sql,
        "CREATE SEQUENCE [OrderSeq] START WITH 100 INCREMENT BY 1 MAXVALUE 100000"
    );

    let err = cs.to_sql(Dialect::MySql).unwrap_err();
    assert_eq!(
        err.to_string(),
        "MySQL does not support Create for Sequence"
    );
}

#[test]
fn test_create_procedure_sql_server() {
    let proc = CreateRoutine::procedure("GetUserCount")
        .param(Parameter::new("minAge", DbType::Int32), ParamMode::In)
        .statement(
            Select::from("Users")
                .column(func(FunctionKind::Count, [star()]).alias("Cnt"))
                .filter(col("Age").gte(param(Parameter::new("minAge", DbType::Int32)))),
        );
    assert_eq!(
        proc.to_sql(Dialect::SqlServer).unwrap().sql,
        "CREATE PROCEDURE [GetUserCount] @minAge INT\n\
         AS\n\
         BEGIN\n\
         \x20   SELECT COUNT(*) AS [Cnt] FROM [Users] WHERE [Age] >= @minAge;\n\
         END"
    );
}

// The routine body switches the statement delimiter and restores it after.
#[test]
fn test_create_procedure_mysql_delimiter_switch() {
    let proc = CreateRoutine::procedure("AddUser")
        .param(Parameter::new("email", DbType::String).size(100), ParamMode::In)
        .statement(
            Insert::into("Users")
                .columns(["Email"])
                .values([param(Parameter::new("email", DbType::String))]),
        );
    assert_eq!(
        proc.to_sql(Dialect::MySql).unwrap().sql,
        "DELIMITER $$\n\
         CREATE PROCEDURE `AddUser` (IN email VARCHAR(100))\n\
         BEGIN\n\
         \x20   INSERT INTO `Users` (`Email`) VALUES (email);\n\
         END$$\n\
         DELIMITER ;"
    );
}

#[test]
fn test_create_function_oracle_decl_section() {
    let f = CreateRoutine::function("GetTotal", DbType::Int32)
        .param(Parameter::new("factor", DbType::Int32), ParamMode::In)
        .statement(Declare::new(Parameter::new("total", DbType::Int32)))
        .statement(Statement::Assign(Assign::new("total", lit(0))))
        .statement(Statement::Return(
            param(Parameter::new("total", DbType::Int32))
                .binary(ArithOp::Mul, param(Parameter::new("factor", DbType::Int32))),
        ));
    assert_eq!(
        f.to_sql(Dialect::Oracle).unwrap().sql,
        "CREATE OR REPLACE FUNCTION \"GetTotal\" (factor IN NUMBER(10)) RETURN NUMBER(10)\n\
         IS\n\
         \x20   total NUMBER(10);\n\
         BEGIN\n\
         \x20   total := 0;\n\
         \x20   RETURN (total * factor);\n\
         END"
    );
}

#[test]
fn test_routine_out_param_sql_server() {
    let proc = CreateRoutine::procedure("CountInto")
        .param(Parameter::new("total", DbType::Int32), ParamMode::Out)
        .statement(Statement::Assign(Assign::new("total", lit(0))));
    assert_eq!(
        proc.to_sql(Dialect::SqlServer).unwrap().sql,
        "CREATE PROCEDURE [CountInto] @total INT OUTPUT\n\
         AS\n\
         BEGIN\n\
         \x20   SET @total = 0;\n\
         END"
    );
}

#[test]
fn test_routines_unsupported_on_sqlite() {
    let proc = CreateRoutine::procedure("P").statement(Delete::from("t"));
    let err = proc.to_sql(Dialect::Sqlite).unwrap_err();
    assert_eq!(err.to_string(), "SQLite does not support Create for Routine");
}

#[test]
fn test_mysql_function_is_deterministic() {
    let f = CreateRoutine::function("One", DbType::Int32)
        .statement(Statement::Return(lit(1)));
    assert_eq!(
        f.to_sql(Dialect::MySql).unwrap().sql,
        "DELIMITER $$\n\
         CREATE FUNCTION `One` () RETURNS INT\n\
         DETERMINISTIC\n\
         BEGIN\n\
         \x20   RETURN 1;\n\
         END$$\n\
         DELIMITER ;"
    );
}
