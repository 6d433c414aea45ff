//! Runtime behavior tests.
//!
//! Tests the full stack: compile → Interpreter::run, then inspect the
//! printed lines and the final variable bindings.

use brio_lang::{Interpreter, RuntimeError, Value, compile};

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn run(src: &str) -> Vec<String> {
    let prog = compile(src).unwrap_or_else(|errs| {
        panic!("compile failed: {errs:#?}");
    });
    let mut interp = Interpreter::new(&prog);
    interp.run().unwrap_or_else(|e| panic!("run failed: {e}"));
    interp.take_output()
}

/// Runs a script expected to fault; returns the fault and whatever was
/// printed before it.
fn run_err(src: &str) -> (RuntimeError, Vec<String>) {
    let prog = compile(src).unwrap_or_else(|errs| {
        panic!("compile failed (expected runtime error, not compile error): {errs:#?}");
    });
    let mut interp = Interpreter::new(&prog);
    let err = interp.run().expect_err("expected run to fault but it succeeded");
    (err, interp.take_output())
}

fn final_var(src: &str, name: &str) -> Value {
    let prog = compile(src).unwrap_or_else(|errs| {
        panic!("compile failed: {errs:#?}");
    });
    let mut interp = Interpreter::new(&prog);
    interp.run().unwrap_or_else(|e| panic!("run failed: {e}"));
    interp.var(name).unwrap_or_else(|| panic!("variable `{name}` not bound"))
}

// ─── Declarations and assignments ────────────────────────────────────────────

#[test]
fn declare_assign_read() {
    assert_eq!(final_var("int x = 1; x = x + 1;", "x"), Value::Int(2));
}

#[test]
fn redeclaration_overwrites_silently() {
    assert_eq!(final_var("int x = 1; int x = 2;", "x"), Value::Int(2));
}

#[test]
fn declaration_type_keyword_is_not_enforced() {
    // dynamically typed: an `int` slot happily holds text afterwards
    assert_eq!(final_var(r#"int x = 1; x = "now text";"#, "x"), Value::Str("now text".into()));
}

#[test]
fn assign_to_undeclared_faults() {
    let (err, out) = run_err("y = 5;");
    assert_eq!(err, RuntimeError::UndeclaredVariable { name: "y".into(), line: 1 });
    assert!(out.is_empty());
}

#[test]
fn assign_checks_name_before_evaluating_value() {
    // the undeclared name faults first; the divide never runs
    let (err, _) = run_err("y = 1 / 0;");
    assert!(matches!(err, RuntimeError::UndeclaredVariable { ref name, .. } if name == "y"));
}

#[test]
fn read_of_undeclared_faults() {
    let (err, _) = run_err("print(z);");
    assert!(matches!(err, RuntimeError::UndeclaredVariable { ref name, .. } if name == "z"));
}

#[test]
fn declaration_and_assignment_evaluate_to_stored_value() {
    let prog = compile("int x = 41; x = x + 1;").unwrap();
    let mut interp = Interpreter::new(&prog);
    assert_eq!(interp.exec_stmt(&prog.stmts[0]).unwrap(), Value::Int(41));
    assert_eq!(interp.exec_stmt(&prog.stmts[1]).unwrap(), Value::Int(42));
}

// ─── Arithmetic ──────────────────────────────────────────────────────────────

#[test]
fn int_add() {
    assert_eq!(run("print(2 + 3);"), vec!["5"]);
}

#[test]
fn int_sub_mul() {
    assert_eq!(run("print(10 - 4); print(3 * 4);"), vec!["6", "12"]);
}

#[test]
fn div_truncates() {
    assert_eq!(run("print(10 / 3);"), vec!["3"]);
    // truncation is toward zero
    assert_eq!(run("print(-7 / 2);"), vec!["-3"]);
}

#[test]
fn div_by_zero_faults() {
    let (err, _) = run_err("print(10 / 0);");
    assert_eq!(err, RuntimeError::DivisionByZero { line: 1 });
}

#[test]
fn div_by_text_coercing_to_zero_faults() {
    let (err, _) = run_err(r#"print(10 / "abc");"#);
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
}

#[test]
fn arithmetic_coerces_operands() {
    // booleans count as 1/0, text as its leading integer
    assert_eq!(run("print(true + true);"), vec!["2"]);
    assert_eq!(run(r#"print("4" * "5");"#), vec!["20"]);
}

#[test]
fn unary_negate() {
    assert_eq!(run("print(-5);"), vec!["-5"]);
    assert_eq!(run(r#"print(-"12");"#), vec!["-12"]);
    assert_eq!(run("print(-true);"), vec!["-1"]);
}

#[test]
fn unary_not() {
    assert_eq!(run("print(!0);"), vec!["true"]);
    assert_eq!(run("print(!1);"), vec!["false"]);
    assert_eq!(run(r#"print(!"");"#), vec!["true"]);
    assert_eq!(run(r#"print(!"x");"#), vec!["false"]);
}

// ─── Text concatenation ──────────────────────────────────────────────────────

#[test]
fn add_concatenates_when_either_side_is_text() {
    assert_eq!(run(r#"print("a" + 1);"#), vec!["a1"]);
    assert_eq!(run(r#"print(1 + "a");"#), vec!["1a"]);
    assert_eq!(run(r#"print("x" + true);"#), vec!["xtrue"]);
    assert_eq!(run(r#"print("a" + "b");"#), vec!["ab"]);
}

// ─── Equality and ordering ───────────────────────────────────────────────────

#[test]
fn equality_is_textual_across_tags() {
    assert_eq!(run(r#"print(1 == "1");"#), vec!["true"]);
    // `true` stringifies to "true", not "1"
    assert_eq!(run("print(true == 1);"), vec!["false"]);
    assert_eq!(run(r#"print("ab" == "ab");"#), vec!["true"]);
}

#[test]
fn not_equal() {
    assert_eq!(run("print(1 != 2);"), vec!["true"]);
    assert_eq!(run(r#"print("1" != 1);"#), vec!["false"]);
}

#[test]
fn ordering_is_numeric() {
    assert_eq!(run("print(2 < 10);"), vec!["true"]);
    // text compares by integer view, not lexicographically
    assert_eq!(run(r#"print("9" < "10");"#), vec!["true"]);
    assert_eq!(run("print(3 >= 3); print(3 > 3);"), vec!["true", "false"]);
    assert_eq!(run("print(2 <= 1);"), vec!["false"]);
}

// ─── Logic ───────────────────────────────────────────────────────────────────

#[test]
fn and_or_results() {
    assert_eq!(run("print(true && false);"), vec!["false"]);
    assert_eq!(run("print(true || false);"), vec!["true"]);
    assert_eq!(run(r#"print(1 && "x");"#), vec!["true"]);
    assert_eq!(run(r#"print(0 || "");"#), vec!["false"]);
}

#[test]
fn or_does_not_short_circuit() {
    // the undeclared right-hand side is still evaluated
    let (err, _) = run_err("print(true || y);");
    assert!(matches!(err, RuntimeError::UndeclaredVariable { ref name, .. } if name == "y"));
}

#[test]
fn and_does_not_short_circuit() {
    let (err, _) = run_err("print(false && 1 / 0);");
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
}

// ─── Print ───────────────────────────────────────────────────────────────────

#[test]
fn print_forms() {
    assert_eq!(run(r#"print(42); print("raw text"); print(true);"#), vec!["42", "raw text", "true"]);
}

#[test]
fn output_before_fault_is_kept() {
    let (err, out) = run_err("print(1); print(1 / 0); print(2);");
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
    assert_eq!(out, vec!["1"]);
}

// ─── Control flow ────────────────────────────────────────────────────────────

#[test]
fn if_takes_then_branch() {
    assert_eq!(run("if (1 < 2) print(1); else print(2);"), vec!["1"]);
}

#[test]
fn if_takes_else_branch() {
    assert_eq!(run("if (1 > 2) print(1); else print(2);"), vec!["2"]);
}

#[test]
fn if_without_else_is_noop_on_false() {
    assert_eq!(run("if (false) print(1);"), Vec::<String>::new());
}

#[test]
fn if_condition_coerces() {
    assert_eq!(run("if (3) print(1);"), vec!["1"]);
    assert_eq!(run(r#"if ("") print(1); else print(2);"#), vec!["2"]);
}

#[test]
fn while_counts_down() {
    let src = "
        int n = 3;
        while (n > 0) {
            print(n);
            n = n - 1;
        }
    ";
    assert_eq!(run(src), vec!["3", "2", "1"]);
}

#[test]
fn while_with_false_condition_never_runs() {
    assert_eq!(run("while (false) print(1);"), Vec::<String>::new());
}

#[test]
fn for_prints_zero_one_two() {
    assert_eq!(
        run("for (int i = 0; i < 3; i = i + 1) { print(i); }"),
        vec!["0", "1", "2"]
    );
}

#[test]
fn for_with_false_condition_runs_init_only() {
    assert_eq!(run("for (int i = 9; i < 0; i = i + 1) print(i);"), Vec::<String>::new());
    assert_eq!(final_var("for (int i = 9; i < 0; i = i + 1) print(i);", "i"), Value::Int(9));
}

#[test]
fn for_variable_survives_the_loop() {
    // one global scope — the loop counter is an ordinary variable
    assert_eq!(
        run("for (int i = 0; i < 3; i = i + 1) {} print(i);"),
        vec!["3"]
    );
}

#[test]
fn blocks_do_not_scope() {
    assert_eq!(run("{ int x = 1; } print(x);"), vec!["1"]);
}

#[test]
fn fault_inside_loop_aborts_the_loop() {
    let src = "
        for (int i = 0; i < 5; i = i + 1) {
            print(i);
            print(1 / (2 - i));
        }
    ";
    // i = 2 divides by zero; nothing after it runs
    let (err, out) = run_err(src);
    assert!(matches!(err, RuntimeError::DivisionByZero { .. }));
    assert_eq!(out, vec!["0", "0", "1", "1", "2"]);
}

#[test]
fn nested_loops() {
    let src = "
        for (int i = 1; i <= 2; i = i + 1) {
            for (int j = 1; j <= 2; j = j + 1) {
                print(i * 10 + j);
            }
        }
    ";
    assert_eq!(run(src), vec!["11", "12", "21", "22"]);
}

// ─── Programs ────────────────────────────────────────────────────────────────

#[test]
fn sum_of_first_ten() {
    let src = "
        int total = 0;
        for (int i = 1; i <= 10; i = i + 1) {
            total = total + i;
        }
        print(total);
    ";
    assert_eq!(run(src), vec!["55"]);
}

#[test]
fn gcd_by_subtraction() {
    let src = "
        int a = 48;
        int b = 18;
        while (a != b) {
            if (a > b) a = a - b;
            else b = b - a;
        }
        print(a);
    ";
    assert_eq!(run(src), vec!["6"]);
}

#[test]
fn string_building_in_a_loop() {
    let src = r#"
        string s = "";
        for (int i = 0; i < 3; i = i + 1) {
            s = s + i;
        }
        print(s);
    "#;
    assert_eq!(run(src), vec!["012"]);
}

#[test]
fn runtime_error_carries_line_number() {
    let (err, _) = run_err("int a = 1;\nint b = 0;\nprint(a / b);");
    assert_eq!(err, RuntimeError::DivisionByZero { line: 3 });
}
