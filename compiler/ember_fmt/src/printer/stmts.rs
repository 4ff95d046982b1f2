//! Statement printing.

use ember_ir::{
    BreakStmt, ContinueStmt, EnumStmt, ExpressionStmt, FunctionStmt, ImplStmt, ReturnStmt,
    StmtVisitor, StructStmt, Token, TraitStmt, Typename, VariableStmt,
};

use super::AstPrinter;

/// `(name type)`, as used for fields, variants and parameters.
fn typed_name(name: &Token, typename: &Typename) -> String {
    format!("({name} {typename})")
}

impl StmtVisitor<String> for AstPrinter {
    fn visit_break_stmt(&mut self, _stmt: &BreakStmt) -> String {
        "(Stmt::Break)".to_owned()
    }

    fn visit_continue_stmt(&mut self, _stmt: &ContinueStmt) -> String {
        "(Stmt::Continue)".to_owned()
    }

    fn visit_enum_stmt(&mut self, stmt: &EnumStmt) -> String {
        let header = format!("(Stmt::Enum {}", stmt.name);
        self.nested(&header, |_| {
            stmt.variants
                .iter()
                .map(|variant| typed_name(&variant.name, &variant.typename))
                .collect()
        })
    }

    fn visit_expression_stmt(&mut self, stmt: &ExpressionStmt) -> String {
        format!("(Stmt::Expression {})", self.print_expr(&stmt.expr))
    }

    fn visit_function_stmt(&mut self, stmt: &FunctionStmt) -> String {
        let params: Vec<String> = stmt
            .params
            .iter()
            .map(|param| typed_name(&param.name, &param.typename))
            .collect();
        let header = format!(
            "(Stmt::Function {} ({}) {}",
            stmt.name,
            params.join(" "),
            stmt.return_typename
        );
        self.nested(&header, |printer| printer.block_children(&stmt.body))
    }

    fn visit_impl_stmt(&mut self, stmt: &ImplStmt) -> String {
        let header = match &stmt.trait_typename {
            Some(trait_typename) => format!("(Stmt::Impl {} {trait_typename}", stmt.typename),
            None => format!("(Stmt::Impl {}", stmt.typename),
        };
        self.nested(&header, |printer| {
            stmt.methods
                .iter()
                .map(|method| printer.visit_function_stmt(method))
                .collect()
        })
    }

    fn visit_return_stmt(&mut self, stmt: &ReturnStmt) -> String {
        format!("(Stmt::Return {})", self.print_expr(&stmt.value))
    }

    fn visit_struct_stmt(&mut self, stmt: &StructStmt) -> String {
        let header = format!("(Stmt::Struct {}", stmt.name);
        self.nested(&header, |_| {
            stmt.fields
                .iter()
                .map(|field| typed_name(&field.name, &field.typename))
                .collect()
        })
    }

    fn visit_trait_stmt(&mut self, stmt: &TraitStmt) -> String {
        let header = format!("(Stmt::Trait {}", stmt.name);
        self.nested(&header, |printer| {
            stmt.methods
                .iter()
                .map(|method| printer.visit_function_stmt(method))
                .collect()
        })
    }

    fn visit_variable_stmt(&mut self, stmt: &VariableStmt) -> String {
        let initializer = self.print_expr(&stmt.initializer);
        match &stmt.typename {
            Some(typename) => format!(
                "(Stmt::Variable {} {} {typename} {initializer})",
                stmt.keyword, stmt.name
            ),
            None => format!("(Stmt::Variable {} {} {initializer})", stmt.keyword, stmt.name),
        }
    }
}
