//! Top/limit strategies, including the ROW_NUMBER windowing rewrite.

use pretty_assertions::assert_eq;

use crate::ast::*;
use crate::compiler::ToSql;
use crate::dialect::Dialect;
use crate::error::SqlForgeError;

#[test]
fn test_trailing_limit_count() {
    let q = Select::from("users").columns(["id"]).top(TopSpec::count(10));
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT `id` FROM `users` LIMIT 10"
    );
    assert_eq!(
        q.to_sql(Dialect::Sqlite).unwrap().sql,
        "SELECT \"id\" FROM \"users\" LIMIT 10"
    );
}

#[test]
fn test_trailing_limit_range() {
    let q = Select::from("users")
        .columns(["id"])
        .order_by("id", SortOrder::Asc)
        .top(TopSpec::range(5, 10));
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT `id` FROM `users` ORDER BY `id` ASC LIMIT 10 OFFSET 5"
    );
}

#[test]
fn test_leading_top_count_and_percent() {
    let q = Select::from("users").columns(["id"]).top(TopSpec::count(10));
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT TOP 10 [id] FROM [users]"
    );

    let q = Select::from("users").columns(["id"]).top(TopSpec::percent(25));
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT TOP 25 PERCENT [id] FROM [users]"
    );
}

#[test]
fn test_oracle_fetch_first() {
    let q = Select::from("users").columns(["id"]).top(TopSpec::count(10));
    assert_eq!(
        q.to_sql(Dialect::Oracle).unwrap().sql,
        "SELECT \"id\" FROM \"users\" FETCH FIRST 10 ROWS ONLY"
    );

    let q = Select::from("users").columns(["id"]).top(TopSpec::percent(25));
    assert_eq!(
        q.to_sql(Dialect::Oracle).unwrap().sql,
        "SELECT \"id\" FROM \"users\" FETCH FIRST 25 PERCENT ROWS ONLY"
    );

    let q = Select::from("users")
        .columns(["id"])
        .order_by("id", SortOrder::Asc)
        .top(TopSpec::range(5, 10));
    assert_eq!(
        q.to_sql(Dialect::Oracle).unwrap().sql,
        "SELECT \"id\" FROM \"users\" ORDER BY \"id\" ASC OFFSET 5 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}

#[test]
fn test_percent_rejected_without_support() {
    let q = Select::from("users").top(TopSpec::percent(10));
    let err = q.to_sql(Dialect::MySql).unwrap_err();
    assert!(matches!(err, SqlForgeError::UnsupportedTop { .. }));
    assert!(err.to_string().contains("Percent"));
    assert!(err.to_string().contains("MySQL"));
}

// The window predicate is offset+1 ..= offset+count: Range(5, 10) selects
// row numbers 6 through 15.
#[test]
fn test_window_rewrite_bounds() {
    let q = Select::from("Products")
        .columns(["CategoryName"])
        .order_by("ProductCount", SortOrder::Desc)
        .top(TopSpec::range(5, 10));
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT [CategoryName] FROM (\
         SELECT ROW_NUMBER() OVER (ORDER BY [ProductCount] DESC) AS _rowNum, [CategoryName] \
         FROM [Products]) AS _rowtable \
         WHERE _rowNum BETWEEN 6 AND 15 ORDER BY [ProductCount] DESC"
    );
}

#[test]
fn test_window_rewrite_with_group_by() {
    let q = Select::from("Products")
        .columns(["CategoryName"])
        .group_by([col("CategoryName")])
        .order_by("ProductCount", SortOrder::Desc)
        .top(TopSpec::range(0, 10));
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT [CategoryName] FROM (\
         SELECT ROW_NUMBER() OVER (ORDER BY [ProductCount] DESC) AS _rowNum, [CategoryName] \
         FROM [Products] GROUP BY [CategoryName]) AS _rowtable \
         WHERE _rowNum BETWEEN 1 AND 10 ORDER BY [ProductCount] DESC"
    );
}

#[test]
fn test_window_rewrite_on_ansi() {
    let q = Select::from("t")
        .columns(["a"])
        .order_by("a", SortOrder::Asc)
        .top(TopSpec::range(2, 3));
    assert_eq!(
        q.to_sql(Dialect::Ansi).unwrap().sql,
        "SELECT \"a\" FROM (\
         SELECT ROW_NUMBER() OVER (ORDER BY \"a\" ASC) AS _rowNum, \"a\" \
         FROM \"t\") AS _rowtable \
         WHERE _rowNum BETWEEN 3 AND 5 ORDER BY \"a\" ASC"
    );
}

#[test]
fn test_window_rewrite_requires_order_by() {
    let q = Select::from("t").columns(["a"]).top(TopSpec::range(0, 10));
    let err = q.to_sql(Dialect::SqlServer).unwrap_err();
    assert!(err.to_string().contains("ORDER BY"));
}

#[test]
fn test_window_rewrite_requires_aliases() {
    let q = Select::from("t")
        .column(func(FunctionKind::Count, [star()]))
        .order_by("a", SortOrder::Asc)
        .top(TopSpec::range(0, 10));
    assert!(q.to_sql(Dialect::SqlServer).is_err());

    // The same projection with an alias is re-selectable from the wrapper.
    let q = Select::from("t")
        .column(func(FunctionKind::Count, [star()]).alias("Cnt"))
        .group_by([col("a")])
        .order_by("Cnt", SortOrder::Desc)
        .top(TopSpec::range(0, 10));
    assert_eq!(
        q.to_sql(Dialect::SqlServer).unwrap().sql,
        "SELECT [Cnt] FROM (\
         SELECT ROW_NUMBER() OVER (ORDER BY [Cnt] DESC) AS _rowNum, COUNT(*) AS [Cnt] \
         FROM [t] GROUP BY [a]) AS _rowtable \
         WHERE _rowNum BETWEEN 1 AND 10 ORDER BY [Cnt] DESC"
    );
}

// Pagination belongs to the outermost statement; a nested sub-select keeps
// its tree but emits no window of its own.
#[test]
fn test_nested_select_ignores_top() {
    let inner = Select::from("users").columns(["id"]).top(TopSpec::count(5));
    let q = Select::from_subquery(inner, "t");
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT * FROM (SELECT `id` FROM `users`) `t`"
    );
}

#[test]
fn test_outer_top_with_nested_select() {
    let inner = Select::from("users").columns(["id"]);
    let q = Select::from_subquery(inner, "t").top(TopSpec::count(5));
    assert_eq!(
        q.to_sql(Dialect::MySql).unwrap().sql,
        "SELECT * FROM (SELECT `id` FROM `users`) `t` LIMIT 5"
    );
}
