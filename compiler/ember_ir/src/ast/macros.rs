//! Schema macro for AST node families.
//!
//! Each family (statements, expressions, patterns) is declared once as a
//! list of `Kind(NodeStruct) => visit_method`. From that list the macro
//! emits:
//!
//! - the family enum with one tuple variant per kind
//! - `From<NodeStruct>` for the family enum
//! - a shared-reference visitor trait and a mutable one, each with one
//!   required method per kind, generic over the result type `R`
//! - `accept` / `accept_mut`, which dispatch to exactly one visit method
//! - `kind_name`, the bare kind label (`"Binary"`, `"Variable"`)
//! - a deep `Clone` that grows the stack as it descends
//!
//! Adding a kind to a schema forces every visitor implementation to handle
//! it; adding a new pass needs no change here.

macro_rules! ast_family {
    (
        $(#[$family_meta:meta])*
        family $family:ident;
        $(#[$visitor_meta:meta])*
        visitor $visitor:ident;
        $(#[$visitor_mut_meta:meta])*
        visitor_mut $visitor_mut:ident;
        {
            $(
                $(#[$variant_meta:meta])*
                $kind:ident($node:ident) => $visit:ident;
            )+
        }
    ) => {
        $(#[$family_meta])*
        #[derive(Debug)]
        pub enum $family {
            $(
                $(#[$variant_meta])*
                $kind($node),
            )+
        }

        impl Clone for $family {
            fn clone(&self) -> Self {
                $crate::ensure_sufficient_stack(|| match self {
                    $( $family::$kind(node) => $family::$kind(node.clone()), )+
                })
            }
        }

        $(
            impl From<$node> for $family {
                fn from(node: $node) -> Self {
                    $family::$kind(node)
                }
            }
        )+

        $(#[$visitor_meta])*
        pub trait $visitor<R> {
            $(
                fn $visit(&mut self, node: &$node) -> R;
            )+
        }

        $(#[$visitor_mut_meta])*
        pub trait $visitor_mut<R> {
            $(
                fn $visit(&mut self, node: &mut $node) -> R;
            )+
        }

        impl $family {
            /// Dispatch to the visitor method for this node's kind.
            pub fn accept<R, V: $visitor<R> + ?Sized>(&self, visitor: &mut V) -> R {
                match self {
                    $( $family::$kind(node) => visitor.$visit(node), )+
                }
            }

            /// Dispatch to the rewriting visitor method for this node's kind.
            pub fn accept_mut<R, V: $visitor_mut<R> + ?Sized>(&mut self, visitor: &mut V) -> R {
                match self {
                    $( $family::$kind(node) => visitor.$visit(node), )+
                }
            }

            /// Bare name of this node's kind.
            pub fn kind_name(&self) -> &'static str {
                match self {
                    $( $family::$kind(_) => stringify!($kind), )+
                }
            }
        }
    };
}

pub(crate) use ast_family;
