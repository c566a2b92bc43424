use std::fs;

use monkey::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
};
use walkdir::WalkDir;

fn run(input: &str) -> Result<Value, RuntimeError> {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "parse errors in {input:?}: {:?}",
            parser.errors());

    eval_program(&program, &Environment::new())
}

fn assert_value(input: &str, expected: &str) {
    match run(input) {
        Ok(value) => assert_eq!(value.to_string(), expected, "input: {input:?}"),
        Err(e) => panic!("evaluation of {input:?} failed: {e}"),
    }
}

fn assert_error(input: &str, expected: &str) {
    match run(input) {
        Ok(value) => panic!("evaluation of {input:?} succeeded with {value}, expected {expected:?}"),
        Err(e) => assert_eq!(e.to_string(), expected, "input: {input:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_value("5", "5");
    assert_value("-5", "-5");
    assert_value("5 + 5 * 2", "15");
    assert_value("(5 + 5) * 2", "20");
    assert_value("50 / 2 * 2 + 10", "60");
    assert_value("3 * 3 * 3 + 10", "37");
    assert_value("-50 + 100 + -50", "0");
    assert_value("10 % 3", "1");
    assert_value("20 + 2 * -10", "0");
}

#[test]
fn boolean_expressions() {
    assert_value("true", "true");
    assert_value("false", "false");
    assert_value("1 < 2", "true");
    assert_value("1 > 2", "false");
    assert_value("1 <= 1", "true");
    assert_value("2 >= 3", "false");
    assert_value("1 == 1", "true");
    assert_value("1 != 2", "true");
    assert_value("true == true", "true");
    assert_value("false != true", "true");
    assert_value("(1 < 2) == true", "true");
}

#[test]
fn bang_operator() {
    assert_value("!true", "false");
    assert_value("!false", "true");
    assert_value("!5", "false");
    assert_value("!!true", "true");
    assert_value("!!5", "true");
}

#[test]
fn if_expressions() {
    assert_value("if (true) { 10 }", "10");
    assert_value("if (false) { 10 }", "null");
    assert_value("if (1) { 10 }", "10");
    assert_value("if (1 < 2) { 10 } else { 20 }", "10");
    assert_value("if (1 > 2) { 10 } else { 20 }", "20");
    // Zero and the empty string are truthy; only false and null are falsey.
    assert_value("if (0) { 10 } else { 20 }", "10");
    assert_value("if (\"\") { 10 } else { 20 }", "10");
    assert_value("if (if (false) { 1 }) { 10 } else { 20 }", "20");
}

#[test]
fn return_statements() {
    assert_value("return 10;", "10");
    assert_value("return 10; 9;", "10");
    assert_value("9; return 2 * 5; 9;", "10");
    assert_value("return;", "null");
    assert_value("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
}

#[test]
fn let_statements() {
    assert_value("let a = 5; a;", "5");
    assert_value("let a = 5 * 5; a;", "25");
    assert_value("let a = 5; let b = a; b;", "5");
    assert_value("let a = 5; let b = a; let c = a + b + 5; c;", "15");
    // A declaration evaluates to its bound value.
    assert_value("let a = 5;", "5");
}

#[test]
fn functions_and_calls() {
    assert_value("let identity = fn(x) { x; }; identity(5);", "5");
    assert_value("let identity = fn(x) { return x; }; identity(5);", "5");
    assert_value("let double = fn(x) { x * 2; }; double(5);", "10");
    assert_value("let add = fn(x, y) { x + y; }; add(5, add(5, 5));", "15");
    assert_value("fn(x) { x; }(5)", "5");
}

#[test]
fn function_rendering() {
    assert_value("fn(x) { x + 2; }", "fn(x) {\n(x + 2)\n}");
    assert_value("len", "builtin function");
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_value("let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(5);",
                 "7");
    assert_value("let newAdder = fn(x) { fn(y) { x + y } }; newAdder(2)(3)", "5");
    // Scope is lexical: rebinding x around the calls changes nothing.
    assert_value("let x = 100; \
                  let newAdder = fn(x) { fn(y) { x + y } }; \
                  let addTwo = newAdder(2); \
                  let x = 999; \
                  addTwo(3);",
                 "5");
}

#[test]
fn recursive_functions() {
    assert_value("let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(10);",
                 "55");
    assert_value("let fact = fn(n) { if (n == 0) { 1 } else { n * fact(n - 1) } }; fact(5);",
                 "120");
}

#[test]
fn higher_order_functions() {
    assert_value("let twice = fn(f, x) { f(f(x)) }; twice(fn(x) { x + 1 }, 5)", "7");
    assert_value("let apply = fn(f, a, b) { f(a, b) }; apply(fn(a, b) { a * b }, 6, 7)", "42");
}

#[test]
fn call_arity_is_checked() {
    assert_error("let add = fn(x, y) { x + y }; add(1);",
                 "Error: wrong number of arguments. got=1, want=2");
    assert_error("let id = fn(x) { x }; id(1, 2);",
                 "Error: wrong number of arguments. got=2, want=1");
}

#[test]
fn string_concatenation() {
    assert_value("\"Hello\" + \" \" + \"World!\"", "Hello World!");
    assert_value("\"\" + \"tail\"", "tail");
    assert_value("let greet = fn(name) { \"hello \" + name }; greet(\"monkey\")",
                 "hello monkey");
}

#[test]
fn string_operators_other_than_plus_are_errors() {
    assert_error("\"Hello\" - \"World\"", "Error: unknown operator: STRING - STRING");
    assert_error("\"a\" == \"a\"", "Error: unknown operator: STRING == STRING");
}

#[test]
fn array_literals_and_indexing() {
    assert_value("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_value("[]", "[]");
    assert_value("let a = [1, 2, 3]; a[0] + a[1] + a[2]", "6");
    assert_value("[1, 2, 3][1 + 1]", "3");
    assert_value("let a = [1, 2]; a[2]", "null");
    assert_value("[1][-1]", "null");
    assert_value("let a = [[1, 2], [3, 4]]; a[1][0]", "3");
}

#[test]
fn hash_literals_and_indexing() {
    assert_value("let h = {\"one\": 1, \"two\": 2}; h[\"one\"] + h[\"two\"]", "3");
    assert_value("{1: \"a\"}[1]", "a");
    assert_value("{true: 5}[true]", "5");
    assert_value("{}[0]", "null");
    assert_value("{\"name\": \"monkey\"}[\"missing\"]", "null");
    // Structural keys: equal values reach the same slot however they are
    // written.
    assert_value("let h = {4: 4}; h[2 + 2]", "4");
    assert_value("{\"on\" + \"e\": 1}[\"one\"]", "1");
}

#[test]
fn hash_keys_must_be_hashable() {
    assert_error("{}[fn(x) { x }]", "Error: unusable as hash key: FUNCTION");
    assert_error("{[1, 2]: 1}", "Error: unusable as hash key: ARRAY");
    assert_error("{{}: 1}", "Error: unusable as hash key: HASH");
}

#[test]
fn string_hash_keys_are_stable() {
    let a = Value::String("name".to_string());
    let b = Value::String("name".to_string());
    let c = Value::String("other".to_string());

    assert_eq!(a.hash_key().unwrap(), b.hash_key().unwrap());
    assert_ne!(a.hash_key().unwrap(), c.hash_key().unwrap());
    assert_ne!(Value::Integer(1).hash_key().unwrap(),
               Value::Boolean(true).hash_key().unwrap());
}

#[test]
fn builtin_len() {
    assert_value("len(\"\")", "0");
    assert_value("len(\"four\")", "4");
    assert_value("len(\"hello world\")", "11");
    assert_value("len([1, 2, 3])", "3");
    assert_value("len([])", "0");
    assert_value("len(if (false) { 1 })", "0");
    assert_error("len(1)", "Error: argument to `len` not supported, got INTEGER");
    assert_error("len(\"one\", \"two\")", "Error: wrong number of arguments. got=2, want=1");
}

#[test]
fn builtin_first_and_last() {
    assert_value("first([1, 2, 3])", "1");
    assert_value("first([])", "null");
    assert_value("last([1, 2, 3])", "3");
    assert_value("last([])", "null");
    assert_error("first(1)", "Error: argument to `first` not supported, got INTEGER");
    assert_error("last(\"abc\")", "Error: argument to `last` not supported, got STRING");
}

#[test]
fn builtin_rest_and_push() {
    assert_value("rest([1, 2, 3])", "[2, 3]");
    assert_value("rest(rest([1, 2, 3]))", "[3]");
    assert_value("rest([1])", "[]");
    assert_value("rest([])", "null");
    assert_value("push([1, 2], 3)", "[1, 2, 3]");
    assert_value("push([], 1)", "[1]");
    // push is functional: the original array is untouched.
    assert_value("let a = [1]; let b = push(a, 2); a", "[1]");
    assert_error("push(1, 1)", "Error: argument to `push` not supported, got INTEGER");
}

#[test]
fn builtins_can_be_shadowed() {
    assert_value("let len = fn(x) { 99 }; len([1, 2, 3])", "99");
}

#[test]
fn all_registered_builtins_resolve() {
    use monkey::interpreter::evaluator::builtin;

    assert_eq!(builtin::BUILTIN_NAMES.to_vec(),
               vec!["len", "first", "last", "rest", "push"]);
    for name in builtin::BUILTIN_NAMES {
        assert!(builtin::lookup(name).is_some(), "builtin {name} missing");
    }
}

#[test]
fn runtime_errors() {
    assert_error("5 + true;", "Error: type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "Error: type mismatch: INTEGER + BOOLEAN");
    assert_error("5 == true", "Error: type mismatch: INTEGER == BOOLEAN");
    assert_error("-true", "Error: unknown operator: -BOOLEAN");
    assert_error("true + false;", "Error: unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "Error: unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "Error: unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "Error: unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "Error: identifier not found: foobar");
    assert_error("5 / 0", "Error: division by zero");
    assert_error("5 % 0", "Error: division by zero");
    assert_error("5[0]", "Error: index operator not supported: INTEGER");
    assert_error("\"abc\"[0]", "Error: index operator not supported: STRING");
    assert_error("let x = 5; x(1)", "Error: not a function: INTEGER");
    assert_error("true(1)", "Error: not a function: BOOLEAN");
}

#[test]
fn errors_short_circuit_compound_expressions() {
    // The first failing sub-evaluation becomes the whole result.
    assert_error("[1, 2 / 0, nope]", "Error: division by zero");
    assert_error("len(foobar)", "Error: identifier not found: foobar");
    assert_error("{\"k\": 1 / 0}", "Error: division by zero");
    assert_error("(1 / 0) + nope", "Error: division by zero");
}

#[test]
fn environment_persists_across_programs() {
    let env = Environment::new();

    let mut parser = Parser::new(Lexer::new("let answer = 42;"));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    eval_program(&program, &env).unwrap();

    let mut parser = Parser::new(Lexer::new("answer"));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());
    let result = eval_program(&program, &env).unwrap();

    assert_eq!(result, Value::Integer(42));
}

#[test]
fn script_files_run_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "monkey")
                                     })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&source) {
            panic!("Script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
