//! Runtime values.
//!
//! A [`Value`] is a small `Copy` datum: either a primitive carried inline
//! or a handle to an object owned by an [`ObjectHeap`](crate::ObjectHeap).
//! Handles can only be minted by the heap, so every `Value::Object` in
//! circulation was produced by an allocation.

use std::fmt;

/// Handle to an object in an [`ObjectHeap`](crate::ObjectHeap).
///
/// Handles stay valid until the heap's sweep; afterwards lookups through
/// them report absence rather than failing.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Only the heap hands out ids.
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        ObjectId(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Runtime value in the Ember interpreter.
///
/// Derived equality compares object handles by identity. Use
/// [`ObjectHeap::values_equal`](crate::ObjectHeap::values_equal) to compare
/// object contents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Heap-allocated string or array.
    Object(ObjectId),
}

impl Value {
    pub fn as_object(&self) -> Option<ObjectId> {
        match self {
            Value::Object(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Value;
    ember_ir::static_assert_size!(Value, 16);
}
