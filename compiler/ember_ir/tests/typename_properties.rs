//! Property-based tests for typename construction.
//!
//! Random typename trees are built from a small shape description and
//! checked for:
//! 1. Determinism: building the same shape twice yields the same name
//! 2. Clone fidelity: a clone has the same name, kind and location
//! 3. Substitution purity: `substitute` never changes its receiver

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use ember_ir::{Spanned, Token, Typename, TypenameKind};
use proptest::prelude::*;

/// Shape of a typename, independent of tokens.
#[derive(Clone, Debug)]
enum Shape {
    Basic(String),
    Parametric(String, Vec<Shape>),
    Tuple(Vec<Shape>),
    Function(Box<Shape>, Vec<Shape>),
    Reference(bool, Option<String>, Box<Shape>),
    Optional(Box<Shape>),
}

fn build(shape: &Shape) -> Typename {
    match shape {
        Shape::Basic(name) => Typename::basic(Token::synthetic(name.as_str())),
        Shape::Parametric(constructor, params) => Typename::parametric(
            Typename::basic(Token::synthetic(constructor.as_str())),
            params.iter().map(build).collect(),
        ),
        Shape::Tuple(elements) => {
            Typename::tuple(elements.iter().map(build).collect(), Token::synthetic("("))
        }
        Shape::Function(ret, args) => {
            Typename::function(build(ret), args.iter().map(build).collect())
        }
        Shape::Reference(mutable, region, referent) => Typename::reference(
            Token::synthetic(if *mutable { "mut" } else { "" }),
            Token::synthetic(region.as_deref().unwrap_or("")),
            build(referent),
        ),
        Shape::Optional(wrapped) => Typename::optional(build(wrapped)),
    }
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][a-z0-9]{0,6}").expect("valid regex")
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = name_strategy().prop_map(Shape::Basic);
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (name_strategy(), prop::collection::vec(inner.clone(), 1..4))
                .prop_map(|(name, params)| Shape::Parametric(name, params)),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Shape::Tuple),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(ret, args)| Shape::Function(Box::new(ret), args)),
            (
                any::<bool>(),
                prop::option::of(prop::string::string_regex("'[a-z]").expect("valid regex")),
                inner.clone(),
            )
                .prop_map(|(mutable, region, referent)| {
                    Shape::Reference(mutable, region, Box::new(referent))
                }),
            inner.prop_map(|wrapped| Shape::Optional(Box::new(wrapped))),
        ]
    })
}

proptest! {
    #[test]
    fn building_twice_gives_equal_names(shape in shape_strategy()) {
        let first = build(&shape);
        let second = build(&shape);
        prop_assert_eq!(first.name(), second.name());
        prop_assert_eq!(&first, &second);
    }

    #[test]
    fn clone_preserves_identity(shape in shape_strategy()) {
        let original = build(&shape);
        let copy = original.clone();
        prop_assert_eq!(copy.name(), original.name());
        prop_assert_eq!(copy.kind(), original.kind());
        prop_assert_eq!(copy.span(), original.span());
        prop_assert_eq!(copy.children().len(), original.children().len());
    }

    #[test]
    fn substitute_leaves_receiver_untouched(shape in shape_strategy(), param in name_strategy()) {
        let original = build(&shape);
        let before = original.name().to_owned();
        let replacement = Typename::optional(Typename::basic(Token::synthetic("Replaced")));
        let substituted = original.substitute(&param, &replacement);
        prop_assert_eq!(original.name(), before.as_str());
        if original.kind() == TypenameKind::Basic && original.name() == param {
            prop_assert_eq!(substituted.name(), "Replaced?");
        }
    }

    #[test]
    fn substituting_absent_param_is_identity(shape in shape_strategy()) {
        // Generated names are at most seven characters.
        let original = build(&shape);
        let replacement = Typename::basic(Token::synthetic("Replaced"));
        let substituted = original.substitute("Absent00", &replacement);
        prop_assert_eq!(&substituted, &original);
        prop_assert_eq!(substituted.kind(), original.kind());
    }

    #[test]
    fn names_are_never_empty(shape in shape_strategy()) {
        prop_assert!(!build(&shape).name().is_empty());
    }
}
