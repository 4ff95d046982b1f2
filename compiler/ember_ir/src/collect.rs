//! Typename inventory of a tree.

use rustc_hash::FxHashSet;

use crate::ast::{Expr, Stmt};
use crate::visitor::{walk_program, walk_typename, Visitor};
use crate::Typename;

/// Gathers every distinct typename mentioned in a tree, components
/// included, in first-seen order.
///
/// Typenames are told apart by canonical name, so `List<int>` written in
/// two places is recorded once (with the first occurrence's location).
/// Recorded typenames are deep copies; the collector outlives the tree.
#[derive(Default)]
pub struct TypenameCollector {
    seen: FxHashSet<String>,
    typenames: Vec<Typename>,
}

impl TypenameCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect from a whole program in one call.
    pub fn collect_program(stmts: &[Stmt]) -> Vec<Typename> {
        let mut collector = Self::new();
        walk_program(&mut collector, stmts);
        collector.into_typenames()
    }

    /// Collect from a single expression.
    pub fn collect_expr(expr: &Expr) -> Vec<Typename> {
        let mut collector = Self::new();
        collector.visit_expr(expr);
        collector.into_typenames()
    }

    pub fn typenames(&self) -> &[Typename] {
        &self.typenames
    }

    pub fn into_typenames(self) -> Vec<Typename> {
        self.typenames
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.typenames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.typenames.is_empty()
    }
}

impl<'ast> Visitor<'ast> for TypenameCollector {
    fn visit_typename(&mut self, typename: &'ast Typename) {
        if self.seen.insert(typename.name().to_owned()) {
            self.typenames.push(typename.clone());
        }
        walk_typename(self, typename);
    }
}
