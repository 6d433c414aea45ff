//! Tree-walking interpreter. Evaluates the statement tree depth-first
//! against a single shared variable table; printed lines accumulate in the
//! environment's output sink.

use std::collections::HashMap;

use crate::error::RuntimeError;
use crate::runtime::value::Value;
use crate::syntax::ast::{Assign, BinOp, Decl, Expr, Program, Stmt, UnOp};

// ─── Environment ──────────────────────────────────────────────────────────────

/// The evaluation environment: one flat variable table plus the output sink.
/// The language has a single global scope; a future scope stack would live
/// here without changing the evaluator's contract.
struct Env {
    vars: HashMap<String, Value>,
    output: Vec<String>,
}

impl Env {
    fn new() -> Self {
        Self { vars: HashMap::new(), output: Vec::new() }
    }

    /// Binds `name` unconditionally, creating or silently overwriting.
    fn set(&mut self, name: &str, val: Value) {
        self.vars.insert(name.to_string(), val);
    }

    fn is_declared(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.vars.get(name).cloned()
    }

    fn emit(&mut self, line: String) {
        self.output.push(line);
    }
}

// ─── Interpreter ──────────────────────────────────────────────────────────────

pub struct Interpreter<'a> {
    program: &'a Program,
    env: Env,
}

impl<'a> Interpreter<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self { program, env: Env::new() }
    }

    /// Runs the root statement sequence front to back. The first fault
    /// aborts everything still pending; lines printed before it remain in
    /// the output sink.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        let program = self.program;
        for stmt in &program.stmts {
            self.exec_stmt(stmt)?;
        }
        Ok(())
    }

    /// Drains the lines printed so far, in print order.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.env.output)
    }

    /// Read-only view of a variable, for drivers and tests.
    pub fn var(&self, name: &str) -> Option<Value> {
        self.env.get(name)
    }

    // ─── Statement executor ───────────────────────────────────────────────────

    /// Statements evaluate to a value for uniformity with expressions, but
    /// only declarations and assignments return anything meaningful: the
    /// value they stored. Everything else returns the default value.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> Result<Value, RuntimeError> {
        match stmt {
            Stmt::Decl(d)   => self.exec_decl(d),
            Stmt::Assign(a) => self.exec_assign(a),

            Stmt::Print(p) => {
                let val = self.eval_expr(&p.value)?;
                self.env.emit(val.as_text());
                Ok(Value::default())
            }

            Stmt::Block(b) => {
                for s in &b.body {
                    self.exec_stmt(s)?;
                }
                Ok(Value::default())
            }

            Stmt::If(i) => {
                if self.eval_expr(&i.condition)?.as_bool() {
                    self.exec_stmt(&i.then_branch)?;
                } else if let Some(else_branch) = &i.else_branch {
                    self.exec_stmt(else_branch)?;
                }
                Ok(Value::default())
            }

            Stmt::While(w) => {
                // unbounded on purpose — an always-true condition spins forever
                while self.eval_expr(&w.condition)?.as_bool() {
                    self.exec_stmt(&w.body)?;
                }
                Ok(Value::default())
            }

            Stmt::For(f) => {
                self.exec_decl(&f.init)?;
                while self.eval_expr(&f.condition)?.as_bool() {
                    self.exec_stmt(&f.body)?;
                    self.exec_assign(&f.step)?;
                }
                Ok(Value::default())
            }
        }
    }

    fn exec_decl(&mut self, d: &Decl) -> Result<Value, RuntimeError> {
        let val = self.eval_expr(&d.init)?;
        self.env.set(&d.name, val.clone());
        Ok(val)
    }

    /// The name must already be bound — checked before the right-hand side
    /// is evaluated, so assigning to an unknown name faults without running
    /// the expression.
    fn exec_assign(&mut self, a: &Assign) -> Result<Value, RuntimeError> {
        if !self.env.is_declared(&a.name) {
            return Err(RuntimeError::UndeclaredVariable {
                name: a.name.clone(),
                line: a.span.line,
            });
        }
        let val = self.eval_expr(&a.value)?;
        self.env.set(&a.name, val.clone());
        Ok(val)
    }

    // ─── Expression evaluator ─────────────────────────────────────────────────

    pub fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Int(v, _)       => Ok(Value::Int(*v)),
            Expr::Bool(v, _)      => Ok(Value::Bool(*v)),
            Expr::StringLit(s, _) => Ok(Value::Str(s.clone())),

            Expr::Ident(name, span) => {
                self.env.get(name).ok_or_else(|| RuntimeError::UndeclaredVariable {
                    name: name.clone(),
                    line: span.line,
                })
            }

            Expr::BinOp { left, op, right, span } => {
                // both operands always evaluate, left first — `&&` and `||`
                // do not short-circuit in this language
                let l = self.eval_expr(left)?;
                let r = self.eval_expr(right)?;
                eval_binop(*op, l, r, span.line)
            }

            Expr::UnOp { op, operand, .. } => {
                let v = self.eval_expr(operand)?;
                Ok(eval_unop(*op, v))
            }
        }
    }
}

// ─── Binary / unary operators ─────────────────────────────────────────────────

fn eval_binop(op: BinOp, l: Value, r: Value, line: usize) -> Result<Value, RuntimeError> {
    let val = match op {
        // `+` concatenates as soon as either side is text
        BinOp::Add => match (&l, &r) {
            (Value::Str(_), _) | (_, Value::Str(_)) => Value::Str(l.as_text() + &r.as_text()),
            _ => Value::Int(l.as_int().wrapping_add(r.as_int())),
        },
        BinOp::Sub => Value::Int(l.as_int().wrapping_sub(r.as_int())),
        BinOp::Mul => Value::Int(l.as_int().wrapping_mul(r.as_int())),
        BinOp::Div => {
            let divisor = r.as_int();
            if divisor == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Value::Int(l.as_int().wrapping_div(divisor))
        }

        // equality compares textual forms, whatever the tags
        BinOp::Eq    => Value::Bool(l.as_text() == r.as_text()),
        BinOp::NotEq => Value::Bool(l.as_text() != r.as_text()),

        // ordering compares integer views
        BinOp::Lt   => Value::Bool(l.as_int() <  r.as_int()),
        BinOp::Gt   => Value::Bool(l.as_int() >  r.as_int()),
        BinOp::LtEq => Value::Bool(l.as_int() <= r.as_int()),
        BinOp::GtEq => Value::Bool(l.as_int() >= r.as_int()),

        BinOp::And => Value::Bool(l.as_bool() && r.as_bool()),
        BinOp::Or  => Value::Bool(l.as_bool() || r.as_bool()),
    };
    Ok(val)
}

fn eval_unop(op: UnOp, v: Value) -> Value {
    match op {
        UnOp::Neg => Value::Int(v.as_int().wrapping_neg()),
        UnOp::Not => Value::Bool(!v.as_bool()),
    }
}
