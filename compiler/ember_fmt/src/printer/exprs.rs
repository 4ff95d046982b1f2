//! Expression printing.

use ember_ir::{
    AssignExpr, BinaryExpr, BlockExpr, BooleanExpr, CallExpr, ExprVisitor, FieldExpr, FloatExpr,
    ForExpr, IfExpr, IntegerExpr, LogicalExpr, StringExpr, SwitchExpr, SymbolExpr, UnaryExpr,
    UnitExpr, WhileExpr,
};

use super::AstPrinter;

impl AstPrinter {
    /// A block's statements followed by its trailing expression, one child
    /// per line. Loop and function bodies print their contents directly
    /// under the owning node.
    pub(super) fn block_children(&mut self, block: &BlockExpr) -> Vec<String> {
        let mut children: Vec<String> = block.stmts.iter().map(|s| self.print_stmt(s)).collect();
        children.push(self.print_expr(&block.expr));
        children
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_assign_expr(&mut self, expr: &AssignExpr) -> String {
        let target = self.print_expr(&expr.target);
        let value = self.print_expr(&expr.value);
        format!("({} {target} {value})", expr.oper)
    }

    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> String {
        let left = self.print_expr(&expr.left);
        let right = self.print_expr(&expr.right);
        format!("({} {left} {right})", expr.oper)
    }

    fn visit_block_expr(&mut self, expr: &BlockExpr) -> String {
        self.nested("(Expr::Block", |printer| printer.block_children(expr))
    }

    fn visit_boolean_expr(&mut self, expr: &BooleanExpr) -> String {
        expr.value.to_string()
    }

    fn visit_call_expr(&mut self, expr: &CallExpr) -> String {
        let mut out = format!("(() {}", self.print_expr(&expr.callee));
        for argument in &expr.arguments {
            out.push(' ');
            out.push_str(&self.print_expr(argument));
        }
        out.push(')');
        out
    }

    fn visit_field_expr(&mut self, expr: &FieldExpr) -> String {
        format!("(. {} {})", self.print_expr(&expr.object), expr.name)
    }

    fn visit_float_expr(&mut self, expr: &FloatExpr) -> String {
        // Debug keeps the `.0`, so `1.0` never prints like the integer `1`.
        format!("{:?}", expr.value)
    }

    fn visit_for_expr(&mut self, expr: &ForExpr) -> String {
        let header = format!("(Expr::For ({} {})", expr.name, self.print_expr(&expr.object));
        self.nested(&header, |printer| printer.block_children(&expr.body))
    }

    fn visit_if_expr(&mut self, expr: &IfExpr) -> String {
        let header = format!("(Expr::If {}", self.print_expr(&expr.condition));
        self.nested(&header, |printer| {
            vec![
                printer.print_expr(&expr.then_body),
                printer.print_expr(&expr.else_body),
            ]
        })
    }

    fn visit_integer_expr(&mut self, expr: &IntegerExpr) -> String {
        expr.value.to_string()
    }

    fn visit_logical_expr(&mut self, expr: &LogicalExpr) -> String {
        let left = self.print_expr(&expr.left);
        let right = self.print_expr(&expr.right);
        format!("({} {left} {right})", expr.oper)
    }

    fn visit_string_expr(&mut self, expr: &StringExpr) -> String {
        // Contents go out verbatim; embedded quotes are not escaped.
        format!("\"{}\"", expr.value)
    }

    fn visit_switch_expr(&mut self, expr: &SwitchExpr) -> String {
        let header = format!("(Expr::Switch {}", self.print_expr(&expr.value));
        self.nested(&header, |printer| {
            expr.cases
                .iter()
                .map(|case| {
                    let case_header = format!(
                        "({} {}",
                        printer.print_pattern(&case.pattern),
                        printer.print_expr(&case.predicate)
                    );
                    printer.nested(&case_header, |printer| vec![printer.print_expr(&case.body)])
                })
                .collect()
        })
    }

    fn visit_symbol_expr(&mut self, expr: &SymbolExpr) -> String {
        expr.name.lexeme.clone()
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> String {
        format!("({} {})", expr.oper, self.print_expr(&expr.operand))
    }

    fn visit_unit_expr(&mut self, _expr: &UnitExpr) -> String {
        "()".to_owned()
    }

    fn visit_while_expr(&mut self, expr: &WhileExpr) -> String {
        let header = format!("(Expr::While {}", self.print_expr(&expr.condition));
        self.nested(&header, |printer| printer.block_children(&expr.body))
    }
}
