use serde::{Deserialize, Serialize};

use crate::ast::expr::Expr;
use crate::ast::operators::CompareOp;
use crate::ast::select::Select;

/// A boolean condition tree (WHERE, HAVING, JOIN ON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cond {
    /// `left OP right`
    Compare {
        left: Expr,
        op: CompareOp,
        right: Expr,
    },
    /// `expr [NOT] LIKE pattern`
    Like {
        expr: Expr,
        pattern: Expr,
        #[serde(default)]
        negated: bool,
    },
    /// `expr [NOT] BETWEEN low AND high`
    Between {
        expr: Expr,
        low: Expr,
        high: Expr,
        #[serde(default)]
        negated: bool,
    },
    /// `expr [NOT] IN (item, …)`
    In {
        expr: Expr,
        list: Vec<Expr>,
        #[serde(default)]
        negated: bool,
    },
    /// `expr [NOT] IN (SELECT …)`
    InSelect {
        expr: Expr,
        query: Box<Select>,
        #[serde(default)]
        negated: bool,
    },
    /// `expr IS [NOT] NULL`
    IsNull {
        expr: Expr,
        #[serde(default)]
        negated: bool,
    },
    /// `[NOT] EXISTS (SELECT …)`
    Exists {
        query: Box<Select>,
        #[serde(default)]
        negated: bool,
    },
    Not(Box<Cond>),
    And(Vec<Cond>),
    Or(Vec<Cond>),
}

impl Cond {
    /// `NOT EXISTS (query)`
    pub fn not_exists(query: Select) -> Self {
        Cond::Exists {
            query: Box::new(query),
            negated: true,
        }
    }

    /// `EXISTS (query)`
    pub fn exists(query: Select) -> Self {
        Cond::Exists {
            query: Box::new(query),
            negated: false,
        }
    }

    /// Conjoin with another condition. Flattens nested ANDs.
    pub fn and(self, other: Cond) -> Self {
        match self {
            Cond::And(mut parts) => {
                parts.push(other);
                Cond::And(parts)
            }
            first => Cond::And(vec![first, other]),
        }
    }

    /// Disjoin with another condition. Flattens nested ORs.
    pub fn or(self, other: Cond) -> Self {
        match self {
            Cond::Or(mut parts) => {
                parts.push(other);
                Cond::Or(parts)
            }
            first => Cond::Or(vec![first, other]),
        }
    }

    /// Negate this condition.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        match self {
            Cond::Not(inner) => *inner,
            other => Cond::Not(Box::new(other)),
        }
    }
}
