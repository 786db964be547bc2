use serde::{Deserialize, Serialize};

use crate::ast::conditions::Cond;
use crate::ast::functions::FunctionKind;
use crate::ast::operators::{ArithOp, CompareOp};
use crate::ast::params::Parameter;
use crate::ast::select::Select;
use crate::ast::values::SqlValue;

/// A schema-qualified object name (table, view, index, routine, sequence).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectName {
    #[serde(default)]
    pub schema: Option<String>,
    pub name: String,
}

impl ObjectName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    pub fn qualified(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }
}

impl From<&str> for ObjectName {
    /// Splits on the first `.` into schema and name.
    fn from(s: &str) -> Self {
        match s.split_once('.') {
            Some((schema, name)) => ObjectName::qualified(schema, name),
            None => ObjectName::new(s),
        }
    }
}

impl From<String> for ObjectName {
    fn from(s: String) -> Self {
        ObjectName::from(s.as_str())
    }
}

/// A column reference with optional qualifiers and alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl FieldRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            table: None,
            name: name.into(),
            alias: None,
        }
    }
}

impl From<&str> for FieldRef {
    /// `"t.col"` becomes a table-qualified reference, `"col"` a bare one.
    fn from(s: &str) -> Self {
        match s.split_once('.') {
            Some((table, name)) => Self {
                schema: None,
                table: Some(table.to_string()),
                name: name.to_string(),
                alias: None,
            },
            None => FieldRef::new(s),
        }
    }
}

/// A compilable SQL fragment.
///
/// Every expression is semantically complete at construction: it carries the
/// type information compilation needs, and only a Parameter's runtime value
/// is supplied late.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// `*`
    Star,
    /// A column reference.
    Field(FieldRef),
    /// A typed literal.
    Literal(SqlValue),
    /// A bound parameter placeholder.
    Param(Parameter),
    /// An enumerated function call.
    Function {
        kind: FunctionKind,
        args: Vec<Expr>,
        #[serde(default)]
        alias: Option<String>,
    },
    /// Binary arithmetic or concatenation.
    Binary {
        left: Box<Expr>,
        op: ArithOp,
        right: Box<Expr>,
    },
    /// An aliased expression (`expr AS alias`).
    Aliased { expr: Box<Expr>, alias: String },
    /// A scalar subquery.
    Subquery(Box<Select>),
}

impl Expr {
    /// Wrap this expression with an alias.
    pub fn alias(self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        match self {
            Expr::Field(mut f) => {
                f.alias = Some(alias);
                Expr::Field(f)
            }
            Expr::Function { kind, args, .. } => Expr::Function {
                kind,
                args,
                alias: Some(alias),
            },
            other => Expr::Aliased {
                expr: Box::new(other),
                alias,
            },
        }
    }

    /// The name this expression projects as, if it has one: the alias when
    /// set, otherwise the column name for plain field references.
    pub fn output_name(&self) -> Option<&str> {
        match self {
            Expr::Field(f) => Some(f.alias.as_deref().unwrap_or(&f.name)),
            Expr::Function { alias, .. } => alias.as_deref(),
            Expr::Aliased { alias, .. } => Some(alias),
            _ => None,
        }
    }

    fn compare(self, op: CompareOp, right: Expr) -> Cond {
        Cond::Compare {
            left: self,
            op,
            right,
        }
    }

    /// `self = right`
    pub fn eq(self, right: Expr) -> Cond {
        self.compare(CompareOp::Eq, right)
    }

    /// `self <> right`
    pub fn ne(self, right: Expr) -> Cond {
        self.compare(CompareOp::Ne, right)
    }

    /// `self > right`
    pub fn gt(self, right: Expr) -> Cond {
        self.compare(CompareOp::Gt, right)
    }

    /// `self >= right`
    pub fn gte(self, right: Expr) -> Cond {
        self.compare(CompareOp::Gte, right)
    }

    /// `self < right`
    pub fn lt(self, right: Expr) -> Cond {
        self.compare(CompareOp::Lt, right)
    }

    /// `self <= right`
    pub fn lte(self, right: Expr) -> Cond {
        self.compare(CompareOp::Lte, right)
    }

    /// `self LIKE pattern`
    pub fn like(self, pattern: Expr) -> Cond {
        Cond::Like {
            expr: self,
            pattern,
            negated: false,
        }
    }

    /// `self BETWEEN low AND high`
    pub fn between(self, low: Expr, high: Expr) -> Cond {
        Cond::Between {
            expr: self,
            low,
            high,
            negated: false,
        }
    }

    /// `self IN (list…)`
    pub fn in_list<I>(self, list: I) -> Cond
    where
        I: IntoIterator<Item = Expr>,
    {
        Cond::In {
            expr: self,
            list: list.into_iter().collect(),
            negated: false,
        }
    }

    /// `self IN (subquery)`
    pub fn in_select(self, query: Select) -> Cond {
        Cond::InSelect {
            expr: self,
            query: Box::new(query),
            negated: false,
        }
    }

    /// `self IS NULL`
    pub fn is_null(self) -> Cond {
        Cond::IsNull {
            expr: self,
            negated: false,
        }
    }

    /// `self IS NOT NULL`
    pub fn is_not_null(self) -> Cond {
        Cond::IsNull {
            expr: self,
            negated: true,
        }
    }

    /// `self + right` and friends.
    pub fn binary(self, op: ArithOp, right: Expr) -> Expr {
        Expr::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// String concatenation, rendered per engine.
    pub fn concat(self, right: Expr) -> Expr {
        self.binary(ArithOp::Concat, right)
    }
}

/// A column reference expression.
///
/// # Example
/// ```
/// use sqlforge::prelude::*;
///
/// let c = col("users.id");
/// let cond = col("age").gte(lit(18));
/// ```
pub fn col(name: &str) -> Expr {
    Expr::Field(FieldRef::from(name))
}

/// A typed literal expression.
pub fn lit(value: impl Into<SqlValue>) -> Expr {
    Expr::Literal(value.into())
}

/// The NULL literal.
pub fn null() -> Expr {
    Expr::Literal(SqlValue::Null)
}

/// The `*` projection.
pub fn star() -> Expr {
    Expr::Star
}

/// A parameter placeholder expression.
pub fn param(p: Parameter) -> Expr {
    Expr::Param(p)
}

/// A function call expression.
///
/// # Example
/// ```
/// use sqlforge::prelude::*;
///
/// let total = func(FunctionKind::Count, [star()]).alias("Total");
/// ```
pub fn func<I>(kind: FunctionKind, args: I) -> Expr
where
    I: IntoIterator<Item = Expr>,
{
    Expr::Function {
        kind,
        args: args.into_iter().collect(),
        alias: None,
    }
}
