//! RAII indentation for the printer.
//!
//! Every composite node prints its children one level deeper. The level is
//! held by an [`IndentGuard`]: creating it pushes a level, dropping it pops
//! one, so the depth is restored even if rendering a child panics.
//!
//! ```text
//! let mut inner = printer.indented();
//! let child = inner.print_expr(body);
//! // depth popped here, even on panic
//! ```

use std::ops::{Deref, DerefMut};

use super::AstPrinter;

/// Guard that holds the printer one level deeper until dropped.
///
/// Access the printer through the guard; it implements `Deref` and
/// `DerefMut`.
pub struct IndentGuard<'p> {
    printer: &'p mut AstPrinter,
}

impl Drop for IndentGuard<'_> {
    fn drop(&mut self) {
        self.printer.depth -= 1;
    }
}

impl Deref for IndentGuard<'_> {
    type Target = AstPrinter;

    fn deref(&self) -> &Self::Target {
        self.printer
    }
}

impl DerefMut for IndentGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.printer
    }
}

impl AstPrinter {
    /// Push one indentation level for the lifetime of the returned guard.
    pub fn indented(&mut self) -> IndentGuard<'_> {
        self.depth += 1;
        IndentGuard { printer: self }
    }
}
