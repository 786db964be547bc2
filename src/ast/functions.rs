use serde::{Deserialize, Serialize};

/// Enumerated SQL function kinds.
///
/// The kind, not a name string, selects the rendering: function names differ
/// per engine even when the semantics match (LastInsertId alone has three
/// spellings across the supported engines).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionKind {
    /// String concatenation of all arguments.
    Concat,
    /// First non-null of two arguments (ISNULL / IFNULL / NVL / COALESCE).
    IsNull,
    /// Identity value of the last inserted row in this session.
    LastInsertId,
    /// Current date and time.
    GetDate,
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl FunctionKind {
    /// True for the aggregate members whose rendering is uniform across
    /// engines (NAME(args)).
    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            FunctionKind::Count
                | FunctionKind::Sum
                | FunctionKind::Avg
                | FunctionKind::Min
                | FunctionKind::Max
        )
    }
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FunctionKind::Concat => "Concat",
            FunctionKind::IsNull => "IsNull",
            FunctionKind::LastInsertId => "LastInsertId",
            FunctionKind::GetDate => "GetDate",
            FunctionKind::Count => "Count",
            FunctionKind::Sum => "Sum",
            FunctionKind::Avg => "Avg",
            FunctionKind::Min => "Min",
            FunctionKind::Max => "Max",
        };
        write!(f, "{}", name)
    }
}
