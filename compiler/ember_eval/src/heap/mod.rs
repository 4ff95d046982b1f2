//! The object heap.
//!
//! Every object the interpreter creates is registered here and lives until
//! the heap is swept. There is no per-object reclamation: the heap grows
//! monotonically while a program runs and is released in one pass by
//! [`ObjectHeap::free_all`] (or on drop) when the interpreter shuts down.
//!
//! The heap is an ordinary value owned by the interpreter instance, so any
//! number of heaps can coexist, each with its own lifetime.
//!
//! ```text
//! let mut heap = ObjectHeap::new();
//! let name = heap.string("ember");
//! let list = heap.array(vec![name, Value::Int(1)]);
//! assert_eq!(heap.type_of(&list).name(), "Array<Int>");
//! heap.free_all();
//! ```

use ember_ir::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{ArrayObject, Object, ObjectId, StringObject, Type, Value};

/// Owner and registry of every live object.
#[derive(Debug, Default)]
pub struct ObjectHeap {
    /// Slot per allocation, in allocation order. Swept slots are `None`.
    slots: Vec<Option<Object>>,
    live: usize,
}

impl ObjectHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object and hand out its id.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` objects are allocated over the
    /// heap's lifetime.
    pub fn alloc(&mut self, object: impl Into<Object>) -> ObjectId {
        let object = object.into();
        let index = u32::try_from(self.slots.len())
            .unwrap_or_else(|_| panic!("object heap exhausted: more than {} allocations", u32::MAX));
        let id = ObjectId::new(index);
        trace!(?id, tag = %object.tag(), "alloc");
        self.slots.push(Some(object));
        self.live += 1;
        id
    }

    /// Allocate a string and return a value referring to it.
    pub fn string(&mut self, data: impl Into<String>) -> Value {
        Value::Object(self.alloc(StringObject::new(data)))
    }

    /// Allocate an array and return a value referring to it.
    pub fn array(&mut self, values: Vec<Value>) -> Value {
        Value::Object(self.alloc(ArrayObject::new(values)))
    }

    /// The object behind `id`, or `None` once the heap has been swept.
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// The object a value refers to, if it refers to one.
    pub fn resolve(&self, value: &Value) -> Option<&Object> {
        value.as_object().and_then(|id| self.get(id))
    }

    /// Number of objects not yet swept.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Live objects in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let object = slot.as_ref()?;
            let index = u32::try_from(index).ok()?;
            Some((ObjectId::new(index), object))
        })
    }

    /// Runtime type of a value.
    ///
    /// A handle whose object has been swept reads as `Dynamic`.
    pub fn type_of(&self, value: &Value) -> Type {
        match value {
            Value::Nil => Type::Nil,
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::Object(id) => self.object_type(*id).unwrap_or(Type::Dynamic),
        }
    }

    /// Runtime type of an object, or `None` once swept.
    ///
    /// An array's element type is the type of its *last* element; earlier
    /// elements are not consulted. An empty array is `Array<Dynamic>`.
    pub fn object_type(&self, id: ObjectId) -> Option<Type> {
        let object = self.get(id)?;
        Some(ensure_sufficient_stack(|| match object {
            Object::String(_) => Type::String,
            Object::Array(array) => {
                let element = array
                    .values()
                    .last()
                    .map_or(Type::Dynamic, |last| self.type_of(last));
                Type::array(element)
            }
        }))
    }

    /// Compare two values, looking through object handles.
    pub fn values_equal(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Object(a), Value::Object(b)) => self.objects_equal(*a, *b),
            _ => a == b,
        }
    }

    /// Compare two objects by contents.
    ///
    /// Objects of different tags are never equal. Strings compare by
    /// contents, arrays element-wise. A swept object equals nothing.
    pub fn objects_equal(&self, a: ObjectId, b: ObjectId) -> bool {
        let (Some(left), Some(right)) = (self.get(a), self.get(b)) else {
            return false;
        };
        if a == b {
            return true;
        }
        ensure_sufficient_stack(|| match (left, right) {
            (Object::String(left), Object::String(right)) => left == right,
            (Object::Array(left), Object::Array(right)) => {
                left.len() == right.len()
                    && left
                        .values()
                        .iter()
                        .zip(right.values())
                        .all(|(l, r)| self.values_equal(l, r))
            }
            _ => false,
        })
    }

    /// User-facing text for a value.
    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Nil => "nil".to_owned(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Object(id) => self.get(*id).map(ToString::to_string).unwrap_or_default(),
        }
    }

    /// Sweep every object. Returns how many were freed; a second call
    /// frees nothing. Ids handed out earlier read as absent afterwards.
    pub fn free_all(&mut self) -> usize {
        let freed = self.live;
        for slot in &mut self.slots {
            *slot = None;
        }
        self.live = 0;
        if freed > 0 {
            debug!(freed, "object heap swept");
        }
        freed
    }
}

impl Drop for ObjectHeap {
    fn drop(&mut self) {
        self.free_all();
    }
}
