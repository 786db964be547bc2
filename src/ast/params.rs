use std::fmt;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::ast::values::{DbType, SqlValue};

/// Direction of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ParamDirection {
    #[default]
    Input,
    Output,
    InputOutput,
}

/// A shared, mutable value cell.
///
/// This is the batching idiom: compile a statement once, then mutate the slot
/// between executions. The compiled text never changes, only the value the
/// descriptor reports.
#[derive(Debug, Clone, Default)]
pub struct ValueSlot {
    inner: Arc<RwLock<SqlValue>>,
}

impl ValueSlot {
    pub fn new(value: SqlValue) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Replace the held value. Callers must not race this against an
    /// in-flight execution that reads the slot.
    pub fn set(&self, value: impl Into<SqlValue>) {
        *self.inner.write().expect("value slot poisoned") = value.into();
    }

    pub fn get(&self) -> SqlValue {
        self.inner.read().expect("value slot poisoned").clone()
    }
}

impl PartialEq for ValueSlot {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

/// Zero-argument value producer, evaluated when the descriptor is read.
pub type ValueAccessor = Arc<dyn Fn() -> SqlValue + Send + Sync>;

/// How a parameter obtains its runtime value.
#[derive(Clone, Default)]
pub enum ParamBinding {
    /// No value yet; one is assigned before execution.
    #[default]
    Unbound,
    /// A fixed value.
    Value(SqlValue),
    /// A shared mutable slot.
    Slot(ValueSlot),
    /// A late-bound accessor evaluated at execution time.
    Accessor(ValueAccessor),
}

impl ParamBinding {
    /// Resolve the current value, if any.
    pub fn resolve(&self) -> Option<SqlValue> {
        match self {
            ParamBinding::Unbound => None,
            ParamBinding::Value(v) => Some(v.clone()),
            ParamBinding::Slot(slot) => Some(slot.get()),
            ParamBinding::Accessor(f) => Some(f()),
        }
    }
}

impl fmt::Debug for ParamBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamBinding::Unbound => write!(f, "Unbound"),
            ParamBinding::Value(v) => f.debug_tuple("Value").field(v).finish(),
            ParamBinding::Slot(s) => f.debug_tuple("Slot").field(&s.get()).finish(),
            ParamBinding::Accessor(_) => write!(f, "Accessor(..)"),
        }
    }
}

impl PartialEq for ParamBinding {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParamBinding::Unbound, ParamBinding::Unbound) => true,
            (ParamBinding::Value(a), ParamBinding::Value(b)) => a == b,
            (ParamBinding::Slot(a), ParamBinding::Slot(b)) => a == b,
            (ParamBinding::Accessor(a), ParamBinding::Accessor(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// Accessors cannot round-trip through serialization; they serialize as
// Unbound. Slots serialize their current value and deserialize into a fresh
// slot. Compiled SQL text is identical either way.
impl Serialize for ParamBinding {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        enum Repr<'a> {
            Unbound,
            Value(&'a SqlValue),
            Slot(SqlValue),
        }
        let repr = match self {
            ParamBinding::Unbound | ParamBinding::Accessor(_) => Repr::Unbound,
            ParamBinding::Value(v) => Repr::Value(v),
            ParamBinding::Slot(s) => Repr::Slot(s.get()),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ParamBinding {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        enum Repr {
            Unbound,
            Value(SqlValue),
            Slot(SqlValue),
        }
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Unbound => ParamBinding::Unbound,
            Repr::Value(v) => ParamBinding::Value(v),
            Repr::Slot(v) => ParamBinding::Slot(ValueSlot::new(v)),
        })
    }
}

/// A named parameter clause.
///
/// Name uniqueness within one statement is required by engines with named
/// placeholders; positional engines ignore name collisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub db_type: DbType,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub direction: ParamDirection,
    #[serde(default)]
    pub binding: ParamBinding,
}

impl Parameter {
    /// Create an unbound parameter.
    ///
    /// # Example
    /// ```
    /// use sqlforge::prelude::*;
    ///
    /// let p = Parameter::new("id", DbType::Int32);
    /// assert!(p.value().is_none());
    /// ```
    pub fn new(name: impl Into<String>, db_type: DbType) -> Self {
        Self {
            name: name.into(),
            db_type,
            size: None,
            direction: ParamDirection::Input,
            binding: ParamBinding::Unbound,
        }
    }

    /// Create a parameter with a fixed value; the type tag comes from the
    /// value itself.
    pub fn with_value(name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            db_type: value.db_type(),
            size: None,
            direction: ParamDirection::Input,
            binding: ParamBinding::Value(value),
        }
    }

    /// Bind to a shared slot the caller mutates between executions.
    pub fn with_slot(name: impl Into<String>, db_type: DbType, slot: ValueSlot) -> Self {
        Self {
            name: name.into(),
            db_type,
            size: None,
            direction: ParamDirection::Input,
            binding: ParamBinding::Slot(slot),
        }
    }

    /// Bind to an accessor evaluated each time the value is read.
    pub fn with_accessor<F>(name: impl Into<String>, db_type: DbType, accessor: F) -> Self
    where
        F: Fn() -> SqlValue + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            db_type,
            size: None,
            direction: ParamDirection::Input,
            binding: ParamBinding::Accessor(Arc::new(accessor)),
        }
    }

    /// Set the declared size (string length, binary length, precision).
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the parameter direction.
    pub fn direction(mut self, direction: ParamDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Resolve the current value, if bound.
    pub fn value(&self) -> Option<SqlValue> {
        self.binding.resolve()
    }
}

/// One entry in the compiled statement's ordered parameter list.
///
/// `native_name` is the placeholder text as it appears in the SQL; the
/// binding handle resolves the value at execution time.
#[derive(Debug, Clone)]
pub struct ParamDescriptor {
    pub name: String,
    pub native_name: String,
    pub db_type: DbType,
    pub size: Option<u32>,
    pub direction: ParamDirection,
    pub binding: ParamBinding,
}

impl ParamDescriptor {
    /// Resolve the current value of the underlying binding.
    pub fn value(&self) -> Option<SqlValue> {
        self.binding.resolve()
    }
}
