pub mod columns;
pub mod conditions;
pub mod constraints;
pub mod ddl;
pub mod delete;
pub mod expr;
pub mod functions;
pub mod insert;
pub mod joins;
pub mod operators;
pub mod params;
pub mod select;
pub mod statement;
pub mod update;
pub mod values;

pub use self::columns::ColumnDef;
pub use self::conditions::Cond;
pub use self::constraints::{FkAction, TableConstraint};
pub use self::ddl::{
    CreateIndex, CreateRoutine, CreateSequence, CreateTable, CreateView, Declare, Drop,
    RoutineKind, RoutineParam,
};
pub use self::delete::Delete;
pub use self::expr::{col, func, lit, null, param, star, Expr, FieldRef, ObjectName};
pub use self::functions::FunctionKind;
pub use self::insert::{Insert, InsertSource};
pub use self::joins::{Join, TableSource};
pub use self::operators::{ArithOp, CompareOp, JoinKind, ParamMode, SortOrder};
pub use self::params::{ParamBinding, ParamDescriptor, ParamDirection, Parameter, ValueSlot};
pub use self::select::{OrderItem, Select, TopKind, TopSpec};
pub use self::statement::{Assign, Script, Statement};
pub use self::update::Update;
pub use self::values::{DbType, SqlValue};
