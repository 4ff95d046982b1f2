use super::*;
use crate::{Span, Spanned, Token, Typename};

fn tok(lexeme: &str) -> Token {
    Token::synthetic(lexeme)
}

fn int(value: i64) -> Expr {
    Expr::integer(tok(&value.to_string()), value)
}

fn unit_block() -> BlockExpr {
    BlockExpr::new(tok("{"), Vec::new(), Expr::unit(tok("(")))
}

fn one_of_each_expr() -> Vec<Expr> {
    vec![
        Expr::assign(Expr::symbol(tok("x")), tok("="), int(1)),
        Expr::binary(int(1), tok("+"), int(2)),
        Expr::block(unit_block()),
        Expr::boolean(tok("true"), true),
        Expr::call(Expr::symbol(tok("f")), tok("("), vec![int(1)]),
        Expr::field(Expr::symbol(tok("p")), tok("x")),
        Expr::float(tok("1.5"), 1.5),
        Expr::For(ForExpr {
            keyword: tok("for"),
            name: tok("i"),
            object: Box::new(Expr::symbol(tok("items"))),
            body: unit_block(),
        }),
        Expr::if_else(tok("if"), Expr::boolean(tok("true"), true), int(1), int(2)),
        int(7),
        Expr::logical(Expr::boolean(tok("true"), true), tok("and"), Expr::boolean(tok("false"), false)),
        Expr::string(tok("\"hi\""), "hi"),
        Expr::Switch(SwitchExpr {
            keyword: tok("switch"),
            value: Box::new(int(1)),
            cases: vec![SwitchCase {
                pattern: Pattern::wildcard(tok("_")),
                predicate: Box::new(Expr::boolean(tok("true"), true)),
                body: Box::new(int(0)),
            }],
        }),
        Expr::symbol(tok("y")),
        Expr::unary(tok("-"), int(3)),
        Expr::unit(tok("(")),
        Expr::While(WhileExpr {
            keyword: tok("while"),
            condition: Box::new(Expr::boolean(tok("false"), false)),
            body: unit_block(),
        }),
    ]
}

/// Records which visit method ran; returns the kind label it was called as.
#[derive(Default)]
struct Labeler {
    calls: Vec<&'static str>,
}

impl Labeler {
    fn hit(&mut self, label: &'static str) -> &'static str {
        self.calls.push(label);
        label
    }
}

impl ExprVisitor<&'static str> for Labeler {
    fn visit_assign_expr(&mut self, _: &AssignExpr) -> &'static str {
        self.hit("Assign")
    }
    fn visit_binary_expr(&mut self, _: &BinaryExpr) -> &'static str {
        self.hit("Binary")
    }
    fn visit_block_expr(&mut self, _: &BlockExpr) -> &'static str {
        self.hit("Block")
    }
    fn visit_boolean_expr(&mut self, _: &BooleanExpr) -> &'static str {
        self.hit("Boolean")
    }
    fn visit_call_expr(&mut self, _: &CallExpr) -> &'static str {
        self.hit("Call")
    }
    fn visit_field_expr(&mut self, _: &FieldExpr) -> &'static str {
        self.hit("Field")
    }
    fn visit_float_expr(&mut self, _: &FloatExpr) -> &'static str {
        self.hit("Float")
    }
    fn visit_for_expr(&mut self, _: &ForExpr) -> &'static str {
        self.hit("For")
    }
    fn visit_if_expr(&mut self, _: &IfExpr) -> &'static str {
        self.hit("If")
    }
    fn visit_integer_expr(&mut self, _: &IntegerExpr) -> &'static str {
        self.hit("Integer")
    }
    fn visit_logical_expr(&mut self, _: &LogicalExpr) -> &'static str {
        self.hit("Logical")
    }
    fn visit_string_expr(&mut self, _: &StringExpr) -> &'static str {
        self.hit("String")
    }
    fn visit_switch_expr(&mut self, _: &SwitchExpr) -> &'static str {
        self.hit("Switch")
    }
    fn visit_symbol_expr(&mut self, _: &SymbolExpr) -> &'static str {
        self.hit("Symbol")
    }
    fn visit_unary_expr(&mut self, _: &UnaryExpr) -> &'static str {
        self.hit("Unary")
    }
    fn visit_unit_expr(&mut self, _: &UnitExpr) -> &'static str {
        self.hit("Unit")
    }
    fn visit_while_expr(&mut self, _: &WhileExpr) -> &'static str {
        self.hit("While")
    }
}

#[test]
fn test_accept_dispatches_once_per_node() {
    for expr in one_of_each_expr() {
        let mut labeler = Labeler::default();
        let label = expr.accept(&mut labeler);
        assert_eq!(label, expr.kind_name());
        // No node walks its own children.
        assert_eq!(labeler.calls, vec![expr.kind_name()]);
    }
}

#[test]
fn test_accept_through_dyn_visitor() {
    let mut labeler = Labeler::default();
    let visitor: &mut dyn ExprVisitor<&'static str> = &mut labeler;
    assert_eq!(int(1).accept(visitor), "Integer");
}

/// A side-effect-only pass (`R = ()`): sums integer literals reachable
/// through binary operators, descending on its own.
#[derive(Default)]
struct IntegerSum {
    total: i64,
}

impl ExprVisitor<()> for IntegerSum {
    fn visit_assign_expr(&mut self, expr: &AssignExpr) {
        expr.value.accept(self);
    }
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) {
        expr.left.accept(self);
        expr.right.accept(self);
    }
    fn visit_block_expr(&mut self, expr: &BlockExpr) {
        expr.expr.accept(self);
    }
    fn visit_boolean_expr(&mut self, _: &BooleanExpr) {}
    fn visit_call_expr(&mut self, expr: &CallExpr) {
        for argument in &expr.arguments {
            argument.accept(self);
        }
    }
    fn visit_field_expr(&mut self, _: &FieldExpr) {}
    fn visit_float_expr(&mut self, _: &FloatExpr) {}
    fn visit_for_expr(&mut self, _: &ForExpr) {}
    fn visit_if_expr(&mut self, _: &IfExpr) {}
    fn visit_integer_expr(&mut self, expr: &IntegerExpr) {
        self.total += expr.value;
    }
    fn visit_logical_expr(&mut self, _: &LogicalExpr) {}
    fn visit_string_expr(&mut self, _: &StringExpr) {}
    fn visit_switch_expr(&mut self, _: &SwitchExpr) {}
    fn visit_symbol_expr(&mut self, _: &SymbolExpr) {}
    fn visit_unary_expr(&mut self, expr: &UnaryExpr) {
        expr.operand.accept(self);
    }
    fn visit_unit_expr(&mut self, _: &UnitExpr) {}
    fn visit_while_expr(&mut self, _: &WhileExpr) {}
}

#[test]
fn test_unit_visitor_collects_side_effects() {
    let expr = Expr::binary(
        int(1),
        tok("+"),
        Expr::call(Expr::symbol(tok("f")), tok("("), vec![int(2), Expr::unary(tok("-"), int(3))]),
    );
    let mut sum = IntegerSum::default();
    expr.accept(&mut sum);
    assert_eq!(sum.total, 6);
}

/// Rewriting pass: flips every boolean literal reachable through logical
/// operators.
struct FlipBooleans;

impl ExprVisitorMut<()> for FlipBooleans {
    fn visit_assign_expr(&mut self, _: &mut AssignExpr) {}
    fn visit_binary_expr(&mut self, _: &mut BinaryExpr) {}
    fn visit_block_expr(&mut self, _: &mut BlockExpr) {}
    fn visit_boolean_expr(&mut self, expr: &mut BooleanExpr) {
        expr.value = !expr.value;
    }
    fn visit_call_expr(&mut self, _: &mut CallExpr) {}
    fn visit_field_expr(&mut self, _: &mut FieldExpr) {}
    fn visit_float_expr(&mut self, _: &mut FloatExpr) {}
    fn visit_for_expr(&mut self, _: &mut ForExpr) {}
    fn visit_if_expr(&mut self, _: &mut IfExpr) {}
    fn visit_integer_expr(&mut self, _: &mut IntegerExpr) {}
    fn visit_logical_expr(&mut self, expr: &mut LogicalExpr) {
        expr.left.accept_mut(self);
        expr.right.accept_mut(self);
    }
    fn visit_string_expr(&mut self, _: &mut StringExpr) {}
    fn visit_switch_expr(&mut self, _: &mut SwitchExpr) {}
    fn visit_symbol_expr(&mut self, _: &mut SymbolExpr) {}
    fn visit_unary_expr(&mut self, _: &mut UnaryExpr) {}
    fn visit_unit_expr(&mut self, _: &mut UnitExpr) {}
    fn visit_while_expr(&mut self, _: &mut WhileExpr) {}
}

#[test]
fn test_mut_visitor_rewrites_in_place() {
    let mut expr = Expr::logical(
        Expr::boolean(tok("true"), true),
        tok("or"),
        Expr::boolean(tok("false"), false),
    );
    let pristine = expr.clone();
    expr.accept_mut(&mut FlipBooleans);

    let Expr::Logical(logical) = &expr else {
        panic!("expected Logical");
    };
    assert!(matches!(*logical.left, Expr::Boolean(BooleanExpr { value: false, .. })));
    assert!(matches!(*logical.right, Expr::Boolean(BooleanExpr { value: true, .. })));

    // The clone taken before the rewrite owns separate nodes.
    let Expr::Logical(untouched) = &pristine else {
        panic!("expected Logical");
    };
    assert!(matches!(*untouched.left, Expr::Boolean(BooleanExpr { value: true, .. })));
}

#[test]
fn test_stmt_kind_names_and_from() {
    let stmt: Stmt = BreakStmt {
        keyword: tok("break"),
    }
    .into();
    assert_eq!(stmt.kind_name(), "Break");

    let stmt = Stmt::expression(int(1));
    assert_eq!(stmt.kind_name(), "Expression");

    let pattern = Pattern::value(int(1));
    assert_eq!(pattern.kind_name(), "Value");
    assert_eq!(Pattern::wildcard(tok("_")).kind_name(), "Wildcard");
}

#[test]
fn test_variable_constness_follows_keyword() {
    let Stmt::Variable(binding) = Stmt::variable(tok("const"), tok("x"), None, int(1)) else {
        panic!("expected Variable");
    };
    assert!(binding.is_const());

    let annotated = Stmt::variable(
        tok("let"),
        tok("y"),
        Some(Typename::basic(tok("int"))),
        int(2),
    );
    let Stmt::Variable(binding) = annotated else {
        panic!("expected Variable");
    };
    assert!(!binding.is_const());
    assert_eq!(binding.typename.as_ref().map(Typename::name), Some("int"));
}

#[test]
fn test_spans_cover_operands() {
    let left = Expr::integer(Token::new("1", Span::new(0, 1), 1), 1);
    let right = Expr::integer(Token::new("2", Span::new(4, 5), 1), 2);
    let sum = Expr::binary(left, Token::new("+", Span::new(2, 3), 1), right);
    assert_eq!(sum.span(), Span::new(0, 5));

    let stmt = Stmt::return_value(Token::new("return", Span::new(0, 6), 1), int(0));
    assert_eq!(stmt.span().start, 0);
}

/// Run `f` on a thread whose stack is far smaller than the trees it builds.
fn on_small_stack(f: impl FnOnce() + Send + 'static) {
    let spawned = std::thread::Builder::new().stack_size(256 * 1024).spawn(f);
    let Ok(handle) = spawned else {
        panic!("failed to spawn test thread");
    };
    assert!(handle.join().is_ok());
}

#[test]
fn test_deep_operator_chains_clone_and_drop() {
    on_small_stack(|| {
        let mut expr = int(0);
        for i in 1..20_000 {
            expr = match i % 4 {
                0 => Expr::binary(expr, tok("+"), int(i)),
                1 => Expr::logical(expr, tok("or"), Expr::boolean(tok("true"), true)),
                2 => Expr::assign(Expr::symbol(tok("x")), tok("="), expr),
                _ => Expr::unary(tok("-"), expr),
            };
        }

        let copy = expr.clone();
        assert_eq!(copy.kind_name(), expr.kind_name());
        drop(expr);
        drop(copy);
    });
}

#[test]
fn test_deep_block_nesting_clone_and_drop() {
    on_small_stack(|| {
        // { let v = { return { ... } }; () } with statements at every level
        let mut expr = int(0);
        for depth in 0..20_000 {
            let stmt = match depth % 3 {
                0 => Stmt::variable(tok("let"), tok("v"), None, expr),
                1 => Stmt::return_value(tok("return"), expr),
                _ => Stmt::expression(expr),
            };
            expr = Expr::block(BlockExpr::new(tok("{"), vec![stmt], Expr::unit(tok("("))));
        }

        let copy = expr.clone();
        assert_eq!(copy.kind_name(), "Block");
        drop(expr);
        drop(copy);
    });
}
