//! Runtime type descriptors.
//!
//! A [`Type`] is computed from actual values, as opposed to a
//! [`Typename`], which is written in source. Names follow the static
//! naming scheme (`Array<String>`) so the two can be compared.

use std::borrow::Cow;
use std::fmt;

use ember_ir::Typename;

/// Runtime type of a value.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Type {
    /// Unknown element type, e.g. of an empty array. Conforms to anything.
    Dynamic,
    Nil,
    Bool,
    Int,
    Float,
    String,
    Array(Box<Type>),
}

impl Type {
    pub fn array(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Type::Dynamic => Cow::Borrowed("Dynamic"),
            Type::Nil => Cow::Borrowed("Nil"),
            Type::Bool => Cow::Borrowed("Bool"),
            Type::Int => Cow::Borrowed("Int"),
            Type::Float => Cow::Borrowed("Float"),
            Type::String => Cow::Borrowed("String"),
            Type::Array(element) => Cow::Owned(format!("Array<{}>", element.name())),
        }
    }

    /// Element type of an array type.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Type::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Whether a value of this type may be stored where `typename` is
    /// expected.
    ///
    /// `Dynamic` conforms to every typename, at any depth: `Array<Dynamic>`
    /// conforms to `Array<int>`. Everything else compares canonical names.
    pub fn conforms_to(&self, typename: &Typename) -> bool {
        match self {
            Type::Dynamic => true,
            Type::Array(element) => match (typename.constructor(), typename.params()) {
                (Some(constructor), Some([param])) if constructor.name() == "Array" => {
                    element.conforms_to(param)
                }
                _ => false,
            },
            _ => self.name() == typename.name(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use ember_ir::Token;

    use super::*;

    fn basic(name: &str) -> Typename {
        Typename::basic(Token::synthetic(name))
    }

    fn array_of(element: Typename) -> Typename {
        Typename::parametric(basic("Array"), vec![element])
    }

    #[test]
    fn test_names() {
        assert_eq!(Type::Dynamic.name(), "Dynamic");
        assert_eq!(Type::String.to_string(), "String");
        assert_eq!(Type::array(Type::array(Type::Int)).name(), "Array<Array<Int>>");
    }

    #[test]
    fn test_runtime_name_matches_static_name() {
        let typename = array_of(basic("String"));
        assert_eq!(Type::array(Type::String).name(), typename.name());
    }

    #[test]
    fn test_conforms_to() {
        assert!(Type::Dynamic.conforms_to(&basic("anything")));
        assert!(Type::String.conforms_to(&basic("String")));
        assert!(!Type::String.conforms_to(&basic("Int")));
        assert!(Type::array(Type::Dynamic).conforms_to(&array_of(basic("Int"))));
        assert!(Type::array(Type::Int).conforms_to(&array_of(basic("Int"))));
        assert!(!Type::array(Type::Int).conforms_to(&array_of(basic("String"))));
        assert!(!Type::array(Type::Int).conforms_to(&basic("Int")));
    }
}
