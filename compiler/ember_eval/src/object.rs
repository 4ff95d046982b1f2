//! Heap objects.

use std::fmt;

use crate::Value;

/// Variant tag of an [`Object`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ObjectTag {
    String,
    Array,
}

impl ObjectTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectTag::String => "string",
            ObjectTag::Array => "array",
        }
    }
}

impl fmt::Display for ObjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An object owned by an [`ObjectHeap`](crate::ObjectHeap).
#[derive(Clone, Debug)]
pub enum Object {
    String(StringObject),
    Array(ArrayObject),
}

impl Object {
    pub fn tag(&self) -> ObjectTag {
        match self {
            Object::String(_) => ObjectTag::String,
            Object::Array(_) => ObjectTag::Array,
        }
    }

    pub fn as_string(&self) -> Option<&StringObject> {
        match self {
            Object::String(s) => Some(s),
            Object::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayObject> {
        match self {
            Object::Array(a) => Some(a),
            Object::String(_) => None,
        }
    }
}

/// Strings render as their contents; every other object as empty text.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::String(s) => f.write_str(s.as_str()),
            Object::Array(_) => Ok(()),
        }
    }
}

impl From<StringObject> for Object {
    fn from(s: StringObject) -> Self {
        Object::String(s)
    }
}

impl From<ArrayObject> for Object {
    fn from(a: ArrayObject) -> Self {
        Object::Array(a)
    }
}

/// Immutable string contents.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StringObject {
    data: String,
}

impl StringObject {
    pub fn new(data: impl Into<String>) -> Self {
        StringObject { data: data.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Fixed sequence of values.
///
/// Elements may refer to objects allocated before the array itself, never
/// to the array or anything allocated after it.
#[derive(Clone, Debug, Default)]
pub struct ArrayObject {
    values: Vec<Value>,
}

impl ArrayObject {
    pub fn new(values: Vec<Value>) -> Self {
        ArrayObject { values }
    }

    /// Element at `index`, or `None` when out of range (negative included).
    pub fn at(&self, index: i64) -> Option<Value> {
        let index = usize::try_from(index).ok()?;
        self.values.get(index).copied()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
