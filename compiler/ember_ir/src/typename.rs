//! Source-level type expressions.
//!
//! A `Typename` is what the parser builds from a type annotation such as
//! `Map<String, [int]>?` or `fn(int) &mut Buffer`. It is a plain owned tree:
//! composite typenames own their children, cloning is a deep copy, and
//! nothing is mutated after construction. Operations that "change" a
//! typename ([`Typename::substitute`]) return a fresh tree.
//!
//! # Canonical names
//!
//! Every typename computes its display name once, at construction, from the
//! names of its children. Two typenames denote the same type exactly when
//! their canonical names are equal, so `PartialEq`, `Eq` and `Hash` all go
//! through the name. Function and reference components are parenthesized
//! wherever a suffix would otherwise attach to their trailing typename.
//!
//! | Kind | Name |
//! |------|------|
//! | Basic | `int` |
//! | Parametric | `Map<String, int>` |
//! | Tuple | `(int, bool)`, `()` |
//! | Function | `fn(int, int) bool` |
//! | Reference | `&T`, `&mut T`, `&'a mut T` |
//! | Optional | `T?`, `(fn() int)?` |
//! | Parametric over a function | `(fn() int)<A>` |

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::stack::ensure_sufficient_stack;
use crate::{Span, Spanned, Token};

/// Tag of a typename variant, for branching without matching on payloads.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypenameKind {
    Basic,
    Parametric,
    Tuple,
    Function,
    Reference,
    Optional,
}

impl TypenameKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Parametric => "parametric",
            Self::Tuple => "tuple",
            Self::Function => "function",
            Self::Reference => "reference",
            Self::Optional => "optional",
        }
    }
}

impl fmt::Display for TypenameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
enum Shape {
    Basic,
    Parametric {
        constructor: Box<Typename>,
        params: Vec<Typename>,
    },
    Tuple {
        elements: Vec<Typename>,
    },
    Function {
        ret: Box<Typename>,
        args: Vec<Typename>,
    },
    Reference {
        permission: Token,
        region: Token,
        referent: Box<Typename>,
    },
    Optional {
        wrapped: Box<Typename>,
    },
}

/// A parsed type expression with a cached canonical name.
///
/// `Clone` and `Drop` are safe at any nesting depth.
pub struct Typename {
    shape: Shape,
    name: String,
    location: Token,
}

// Construction

impl Typename {
    /// A named type taken straight from an identifier token: `int`, `Point`.
    ///
    /// # Panics
    /// Panics if the token is empty; the parser never produces one.
    pub fn basic(name: Token) -> Self {
        assert!(!name.is_empty(), "basic typename requires a non-empty name");
        Typename {
            name: name.lexeme.clone(),
            location: name,
            shape: Shape::Basic,
        }
    }

    /// A named type whose name differs from the token it is reported at,
    /// e.g. a builtin synthesized while desugaring.
    ///
    /// # Panics
    /// Panics if `name` is empty.
    pub fn basic_named(name: impl Into<String>, location: Token) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "basic typename requires a non-empty name");
        Typename {
            name,
            location,
            shape: Shape::Basic,
        }
    }

    /// A type constructor applied to parameters: `Map<String, int>`.
    pub fn parametric(constructor: Typename, params: Vec<Typename>) -> Self {
        let name = format!(
            "{}<{}>",
            constructor.suffix_operand(),
            join_names(&params)
        );
        Typename {
            name,
            location: constructor.location.clone(),
            shape: Shape::Parametric {
                constructor: Box::new(constructor),
                params,
            },
        }
    }

    /// A tuple type, located at its opening parenthesis.
    pub fn tuple(elements: Vec<Typename>, paren: Token) -> Self {
        Typename {
            name: format!("({})", join_names(&elements)),
            location: paren,
            shape: Shape::Tuple { elements },
        }
    }

    /// The unit type `()`.
    pub fn unit(paren: Token) -> Self {
        Typename::tuple(Vec::new(), paren)
    }

    /// A function type: `fn(args...) ret`.
    pub fn function(ret: Typename, args: Vec<Typename>) -> Self {
        let name = format!("fn({}) {}", join_names(&args), ret.name);
        Typename {
            name,
            location: ret.location.clone(),
            shape: Shape::Function {
                ret: Box::new(ret),
                args,
            },
        }
    }

    /// A reference type. `permission` and `region` may be empty tokens when
    /// omitted in source.
    pub fn reference(permission: Token, region: Token, referent: Typename) -> Self {
        let mut name = String::from("&");
        for qualifier in [&region, &permission] {
            if !qualifier.is_empty() {
                name.push_str(&qualifier.lexeme);
                name.push(' ');
            }
        }
        name.push_str(&referent.name);

        let location = if !permission.is_empty() {
            permission.clone()
        } else if !region.is_empty() {
            region.clone()
        } else {
            referent.location.clone()
        };

        Typename {
            name,
            location,
            shape: Shape::Reference {
                permission,
                region,
                referent: Box::new(referent),
            },
        }
    }

    /// An optional type: `T?`.
    ///
    /// Function and reference types are parenthesized so that
    /// `(fn() int)?` and `fn() int?` keep distinct names.
    pub fn optional(wrapped: Typename) -> Self {
        let name = format!("{}?", wrapped.suffix_operand());
        Typename {
            name,
            location: wrapped.location.clone(),
            shape: Shape::Optional {
                wrapped: Box::new(wrapped),
            },
        }
    }
}

impl Typename {
    /// The name as it appears before a `?` or `<...>` suffix. Function and
    /// reference names end in another typename, so they get parentheses.
    fn suffix_operand(&self) -> Cow<'_, str> {
        match self.kind() {
            TypenameKind::Function | TypenameKind::Reference => {
                Cow::Owned(format!("({})", self.name))
            }
            _ => Cow::Borrowed(&self.name),
        }
    }
}

fn join_names(typenames: &[Typename]) -> String {
    let names: Vec<&str> = typenames.iter().map(Typename::name).collect();
    names.join(", ")
}

// Queries

impl Typename {
    pub fn kind(&self) -> TypenameKind {
        match self.shape {
            Shape::Basic => TypenameKind::Basic,
            Shape::Parametric { .. } => TypenameKind::Parametric,
            Shape::Tuple { .. } => TypenameKind::Tuple,
            Shape::Function { .. } => TypenameKind::Function,
            Shape::Reference { .. } => TypenameKind::Reference,
            Shape::Optional { .. } => TypenameKind::Optional,
        }
    }

    /// The canonical name, computed at construction.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token to report diagnostics at. Composite typenames borrow the
    /// location of their leading constituent.
    #[inline]
    pub fn location(&self) -> &Token {
        &self.location
    }

    pub fn is_unit(&self) -> bool {
        matches!(&self.shape, Shape::Tuple { elements } if elements.is_empty())
    }

    pub fn constructor(&self) -> Option<&Typename> {
        match &self.shape {
            Shape::Parametric { constructor, .. } => Some(&**constructor),
            _ => None,
        }
    }

    pub fn params(&self) -> Option<&[Typename]> {
        match &self.shape {
            Shape::Parametric { params, .. } => Some(params),
            _ => None,
        }
    }

    pub fn elements(&self) -> Option<&[Typename]> {
        match &self.shape {
            Shape::Tuple { elements } => Some(elements),
            _ => None,
        }
    }

    pub fn return_typename(&self) -> Option<&Typename> {
        match &self.shape {
            Shape::Function { ret, .. } => Some(&**ret),
            _ => None,
        }
    }

    pub fn args(&self) -> Option<&[Typename]> {
        match &self.shape {
            Shape::Function { args, .. } => Some(args),
            _ => None,
        }
    }

    pub fn permission(&self) -> Option<&Token> {
        match &self.shape {
            Shape::Reference { permission, .. } => Some(permission),
            _ => None,
        }
    }

    pub fn region(&self) -> Option<&Token> {
        match &self.shape {
            Shape::Reference { region, .. } => Some(region),
            _ => None,
        }
    }

    pub fn referent(&self) -> Option<&Typename> {
        match &self.shape {
            Shape::Reference { referent, .. } => Some(&**referent),
            _ => None,
        }
    }

    pub fn wrapped(&self) -> Option<&Typename> {
        match &self.shape {
            Shape::Optional { wrapped } => Some(&**wrapped),
            _ => None,
        }
    }

    /// Direct children in source order. A function's return typename comes
    /// after its arguments.
    pub fn children(&self) -> Vec<&Typename> {
        match &self.shape {
            Shape::Basic => Vec::new(),
            Shape::Parametric {
                constructor,
                params,
            } => std::iter::once(&**constructor).chain(params).collect(),
            Shape::Tuple { elements } => elements.iter().collect(),
            Shape::Function { ret, args } => args.iter().chain(std::iter::once(&**ret)).collect(),
            Shape::Reference { referent, .. } => vec![&**referent],
            Shape::Optional { wrapped } => vec![&**wrapped],
        }
    }
}

// Rewriting

impl Typename {
    /// Replace every basic typename called `param` with a copy of
    /// `replacement`, producing a new tree. Used when instantiating generic
    /// declarations; `self` is left untouched.
    #[must_use]
    pub fn substitute(&self, param: &str, replacement: &Typename) -> Typename {
        ensure_sufficient_stack(|| match &self.shape {
            Shape::Basic if self.name == param => replacement.clone(),
            Shape::Basic => self.clone(),
            Shape::Parametric {
                constructor,
                params,
            } => Typename::parametric(
                constructor.substitute(param, replacement),
                substitute_all(params, param, replacement),
            ),
            Shape::Tuple { elements } => Typename::tuple(
                substitute_all(elements, param, replacement),
                self.location.clone(),
            ),
            Shape::Function { ret, args } => Typename::function(
                ret.substitute(param, replacement),
                substitute_all(args, param, replacement),
            ),
            Shape::Reference {
                permission,
                region,
                referent,
            } => Typename::reference(
                permission.clone(),
                region.clone(),
                referent.substitute(param, replacement),
            ),
            Shape::Optional { wrapped } => {
                Typename::optional(wrapped.substitute(param, replacement))
            }
        })
    }
}

fn substitute_all(typenames: &[Typename], param: &str, replacement: &Typename) -> Vec<Typename> {
    typenames
        .iter()
        .map(|typename| typename.substitute(param, replacement))
        .collect()
}

// Trait impls

impl Clone for Typename {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| Typename {
            shape: self.shape.clone(),
            name: self.name.clone(),
            location: self.location.clone(),
        })
    }
}

impl Drop for Typename {
    fn drop(&mut self) {
        // Children are freed from a work list so the drop glue never recurses.
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut typename) = pending.pop() {
            typename.detach_children(&mut pending);
        }
    }
}

impl Typename {
    fn detach_children(&mut self, pending: &mut Vec<Typename>) {
        match std::mem::replace(&mut self.shape, Shape::Basic) {
            Shape::Basic => {}
            Shape::Parametric {
                constructor,
                params,
            } => {
                pending.push(*constructor);
                pending.extend(params);
            }
            Shape::Tuple { elements } => pending.extend(elements),
            Shape::Function { ret, args } => {
                pending.push(*ret);
                pending.extend(args);
            }
            Shape::Reference { referent, .. } => pending.push(*referent),
            Shape::Optional { wrapped } => pending.push(*wrapped),
        }
    }
}

impl PartialEq for Typename {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Typename {}

impl Hash for Typename {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Typename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}) @ {}", self.kind(), self.name, self.location.span)
    }
}

impl fmt::Display for Typename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Spanned for Typename {
    fn span(&self) -> Span {
        self.location.span
    }
}
