//! Property-based tests for the object heap.
//!
//! 1. Array typing: the element type is the last element's type
//! 2. Homogeneous arrays report their common element type
//! 3. `at` agrees with slice indexing and never panics
//! 4. Sweeping frees exactly what was allocated, once

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use ember_eval::{ArrayObject, ObjectHeap, Type, Value};
use proptest::prelude::*;

/// A value recipe; strings need a heap to become values.
#[derive(Clone, Debug)]
enum Seed {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

fn seed_strategy() -> impl Strategy<Value = Seed> {
    prop_oneof![
        Just(Seed::Nil),
        any::<bool>().prop_map(Seed::Bool),
        any::<i64>().prop_map(Seed::Int),
        (-1.0e9f64..1.0e9).prop_map(Seed::Float),
        "[a-z]{0,6}".prop_map(Seed::Str),
    ]
}

fn plant(heap: &mut ObjectHeap, seed: &Seed) -> Value {
    match seed {
        Seed::Nil => Value::Nil,
        Seed::Bool(b) => Value::Bool(*b),
        Seed::Int(n) => Value::Int(*n),
        Seed::Float(f) => Value::Float(*f),
        Seed::Str(s) => heap.string(s.as_str()),
    }
}

fn seed_type(seed: &Seed) -> Type {
    match seed {
        Seed::Nil => Type::Nil,
        Seed::Bool(_) => Type::Bool,
        Seed::Int(_) => Type::Int,
        Seed::Float(_) => Type::Float,
        Seed::Str(_) => Type::String,
    }
}

proptest! {
    #[test]
    fn array_type_is_last_element_type(seeds in prop::collection::vec(seed_strategy(), 0..12)) {
        let mut heap = ObjectHeap::new();
        let values: Vec<Value> = seeds.iter().map(|seed| plant(&mut heap, seed)).collect();
        let array = heap.array(values);

        let expected = seeds.last().map_or(Type::Dynamic, seed_type);
        prop_assert_eq!(heap.type_of(&array), Type::array(expected));
    }

    #[test]
    fn homogeneous_arrays_report_element_type(values in prop::collection::vec(any::<i64>(), 1..12)) {
        let mut heap = ObjectHeap::new();
        let array = heap.array(values.into_iter().map(Value::Int).collect());
        prop_assert_eq!(heap.type_of(&array).name(), "Array<Int>");
    }

    #[test]
    fn at_matches_indexing(values in prop::collection::vec(any::<i64>(), 0..8), index in -16i64..16) {
        let array = ArrayObject::new(values.iter().copied().map(Value::Int).collect());
        let expected = usize::try_from(index).ok().and_then(|i| values.get(i)).copied().map(Value::Int);
        prop_assert_eq!(array.at(index), expected);
    }

    #[test]
    fn sweep_frees_everything_once(seeds in prop::collection::vec(seed_strategy(), 0..12)) {
        let mut heap = ObjectHeap::new();
        let values: Vec<Value> = seeds.iter().map(|seed| plant(&mut heap, seed)).collect();
        let strings = seeds.iter().filter(|seed| matches!(seed, Seed::Str(_))).count();
        let _ = heap.array(values);

        prop_assert_eq!(heap.live_count(), strings + 1);
        prop_assert_eq!(heap.free_all(), strings + 1);
        prop_assert_eq!(heap.free_all(), 0);
        prop_assert_eq!(heap.iter().count(), 0);
    }
}
