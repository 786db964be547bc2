use serde::{Deserialize, Serialize};

use crate::ast::conditions::Cond;
use crate::ast::expr::{col, Expr};
use crate::ast::joins::{Join, TableSource};
use crate::ast::operators::{JoinKind, SortOrder};

/// Top/limit strategy requested on a Select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopKind {
    /// First `count` rows.
    Count,
    /// First `count` percent of rows.
    Percent,
    /// `count` rows after skipping `offset` rows.
    Range,
}

impl std::fmt::Display for TopKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TopKind::Count => "Count",
            TopKind::Percent => "Percent",
            TopKind::Range => "Range",
        };
        write!(f, "{}", name)
    }
}

/// A row-window specification.
///
/// Range always carries both count and offset; the constructors make an
/// inconsistent spec unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSpec {
    pub kind: TopKind,
    pub count: u64,
    /// Zero-based rows to skip. Present only for Range.
    #[serde(default)]
    pub offset: Option<u64>,
}

impl TopSpec {
    /// First `count` rows.
    pub fn count(count: u64) -> Self {
        Self {
            kind: TopKind::Count,
            count,
            offset: None,
        }
    }

    /// First `count` percent of rows.
    pub fn percent(count: u64) -> Self {
        Self {
            kind: TopKind::Percent,
            count,
            offset: None,
        }
    }

    /// `count` rows after skipping `offset` rows (zero-based).
    pub fn range(offset: u64, count: u64) -> Self {
        Self {
            kind: TopKind::Range,
            count,
            offset: Some(offset),
        }
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub expr: Expr,
    pub order: SortOrder,
}

/// A SELECT statement tree.
///
/// # Example
/// ```
/// use sqlforge::prelude::*;
///
/// let q = Select::from("orders")
///     .column(col("status"))
///     .column(func(FunctionKind::Count, [star()]).alias("Total"))
///     .group_by([col("status")])
///     .order_by("Total", SortOrder::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Select {
    /// Empty means `SELECT *`.
    pub columns: Vec<Expr>,
    #[serde(default)]
    pub distinct: bool,
    #[serde(default)]
    pub top: Option<TopSpec>,
    /// Absent for scalar selects (`SELECT LAST_INSERT_ID()`), which some
    /// engines render against a pseudo-table.
    #[serde(default)]
    pub source: Option<TableSource>,
    #[serde(default)]
    pub joins: Vec<Join>,
    #[serde(default)]
    pub filter: Option<Cond>,
    #[serde(default)]
    pub group_by: Vec<Expr>,
    #[serde(default)]
    pub having: Option<Cond>,
    #[serde(default)]
    pub order_by: Vec<OrderItem>,
}

impl Select {
    /// Start a SELECT from the given table.
    pub fn from(table: &str) -> Self {
        Self::from_source(Some(TableSource::table(table)))
    }

    /// Start a SELECT from an aliased table.
    pub fn from_as(table: &str, alias: &str) -> Self {
        Self::from_source(Some(TableSource::table_as(table, alias)))
    }

    /// Start a SELECT from a derived table.
    pub fn from_subquery(query: Select, alias: &str) -> Self {
        Self::from_source(Some(TableSource::subquery(query, alias)))
    }

    /// A table-less scalar SELECT (`SELECT SCOPE_IDENTITY()`).
    pub fn scalar(expr: Expr) -> Self {
        let mut select = Self::from_source(None);
        select.columns.push(expr);
        select
    }

    fn from_source(source: Option<TableSource>) -> Self {
        Self {
            columns: vec![],
            distinct: false,
            top: None,
            source,
            joins: vec![],
            filter: None,
            group_by: vec![],
            having: None,
            order_by: vec![],
        }
    }

    /// Select named columns.
    ///
    /// # Example
    /// ```
    /// use sqlforge::prelude::*;
    /// let q = Select::from("users").columns(["id", "email"]);
    /// ```
    pub fn columns<I, S>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.columns.extend(cols.into_iter().map(|c| col(c.as_ref())));
        self
    }

    /// Add a single projected expression.
    pub fn column(mut self, expr: Expr) -> Self {
        self.columns.push(expr);
        self
    }

    /// Enable DISTINCT.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Restrict the result window. Honored only when this Select compiles as
    /// the outermost statement.
    pub fn top(mut self, spec: TopSpec) -> Self {
        self.top = Some(spec);
        self
    }

    /// AND a condition into the WHERE clause.
    ///
    /// # Example
    /// ```
    /// use sqlforge::prelude::*;
    /// let q = Select::from("users")
    ///     .filter(col("age").gte(lit(18)))
    ///     .filter(col("active").eq(lit(true)));
    /// ```
    pub fn filter(mut self, cond: Cond) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(cond),
            None => cond,
        });
        self
    }

    /// Add a join.
    pub fn join(mut self, kind: JoinKind, source: TableSource, on: Cond) -> Self {
        self.joins.push(Join {
            kind,
            source,
            on: Some(on),
        });
        self
    }

    /// Inner join shorthand on a column equality.
    pub fn inner_join(self, table: &str, left_col: &str, right_col: &str) -> Self {
        self.join(
            JoinKind::Inner,
            TableSource::table(table),
            col(left_col).eq(col(right_col)),
        )
    }

    /// Left join shorthand on a column equality.
    pub fn left_join(self, table: &str, left_col: &str, right_col: &str) -> Self {
        self.join(
            JoinKind::Left,
            TableSource::table(table),
            col(left_col).eq(col(right_col)),
        )
    }

    /// Cross join (no ON condition).
    pub fn cross_join(mut self, table: &str) -> Self {
        self.joins.push(Join {
            kind: JoinKind::Cross,
            source: TableSource::table(table),
            on: None,
        });
        self
    }

    /// Add GROUP BY expressions.
    pub fn group_by<I>(mut self, exprs: I) -> Self
    where
        I: IntoIterator<Item = Expr>,
    {
        self.group_by.extend(exprs);
        self
    }

    /// Set the HAVING condition.
    pub fn having(mut self, cond: Cond) -> Self {
        self.having = Some(match self.having.take() {
            Some(existing) => existing.and(cond),
            None => cond,
        });
        self
    }

    /// Add an ORDER BY column.
    pub fn order_by(mut self, column: &str, order: SortOrder) -> Self {
        self.order_by.push(OrderItem {
            expr: col(column),
            order,
        });
        self
    }

    /// Add an ORDER BY expression.
    pub fn order_by_expr(mut self, expr: Expr, order: SortOrder) -> Self {
        self.order_by.push(OrderItem { expr, order });
        self
    }
}
