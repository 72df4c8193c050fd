use std::{fs, thread};

use infix::{
    ast::{BinaryOperator, Expr},
    calculate,
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{lexer::tokenize, parser::parse},
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path().extension().is_some_and(|ext| ext == "txt")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let (source, expected) =
                line.rsplit_once(" => ")
                    .unwrap_or_else(|| panic!("Malformed case on line {} of {path:?}", i + 1));
            let result = calculate(source);
            count += 1;

            let ok = match expected.trim() {
                "lex error" => matches!(result, Err(Error::Lex(_))),
                "parse error" => matches!(result, Err(Error::Parse(_))),
                "eval error" => matches!(result, Err(Error::Eval(_))),
                value => {
                    let value: i64 = value.parse()
                                          .unwrap_or_else(|e| panic!("Bad expected value {value:?}: {e}"));
                    result.as_ref().is_ok_and(|v| *v == value)
                },
            };

            assert!(ok,
                    "Case on line {} of {:?} failed:\n{}\nExpected: {}\nGot: {:?}",
                    i + 1,
                    path,
                    source,
                    expected,
                    result);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_value(src: &str, expected: i64) {
    match calculate(src) {
        Ok(value) => assert_eq!(value, expected, "Wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    calculate(src).expect_err("Expression succeeded but was expected to fail")
}

#[test]
fn precedence() {
    assert_value("2+3*4", 14);
    assert_value("2*3+4", 10);
}

#[test]
fn left_associativity() {
    assert_value("10-2-3", 5);
    assert_value("20/4/5", 1);
    assert_value("1-2*3+4", -1);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20);
    assert_value("((1+2)*(3+4))", 21);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(calculate("1 + 2"), calculate("1+2"));
    assert_value(" \t(1 +\n2)\r\n* 3 ", 9);
}

#[test]
fn unicode_whitespace_is_insignificant() {
    assert_value("1\x0B+2", 3);
    assert_value("1\u{a0}+2", 3);
    assert_value("1\u{2003}+\u{3000}2", 3);
    assert!(matches!(assert_failure("2\u{a0}3"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("(0-7)/2", -3);
    assert_value("7/(0-2)", -3);
    assert_value("(0-7)/(0-2)", 3);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(assert_failure("5/0"),
               Error::Eval(EvalError::DivisionByZero { position: 1 }));
    assert_eq!(assert_failure("1 + 4 / (3 - 3)"),
               Error::Eval(EvalError::DivisionByZero { position: 6 }));
}

#[test]
fn overflow_is_error() {
    assert_eq!(assert_failure("9223372036854775807 + 1"),
               Error::Eval(EvalError::Overflow { op:       BinaryOperator::Add,
                                                 position: 20, }));
    assert_eq!(assert_failure("99999999999999999999"),
               Error::Lex(LexError::IntegerOverflow { literal:  "99999999999999999999".to_string(),
                                                      position: 0, }));
}

#[test]
fn invalid_character_is_error() {
    let err = assert_failure("2#3");
    assert_eq!(err,
               Error::Lex(LexError::InvalidCharacter { character: '#',
                                                       position:  1, }));
    assert_eq!(err.to_string(), "Error at position 1: Invalid character '#'.");
}

#[test]
fn adjacent_operators_are_error() {
    assert_eq!(assert_failure("2++3"),
               Error::Parse(ParseError::UnexpectedToken { token:    "'+'".to_string(),
                                                          expected: "a number or '('",
                                                          position: 2, }));
}

#[test]
fn adjacent_numbers_are_error() {
    assert_eq!(assert_failure("2 3"),
               Error::Parse(ParseError::UnexpectedToken { token:    "3".to_string(),
                                                          expected: "an operator or ')'",
                                                          position: 2, }));
}

#[test]
fn unbalanced_parentheses_are_error() {
    assert_eq!(assert_failure("(2+3"),
               Error::Parse(ParseError::UnclosedParen { position: 0 }));
    assert_eq!(assert_failure("((2+3)"),
               Error::Parse(ParseError::UnclosedParen { position: 0 }));
    assert_eq!(assert_failure("1+(2*(3)"),
               Error::Parse(ParseError::UnclosedParen { position: 2 }));
    assert_eq!(assert_failure("2+3)"),
               Error::Parse(ParseError::UnmatchedCloseParen { position: 3 }));
    assert_eq!(assert_failure("(1))"),
               Error::Parse(ParseError::UnmatchedCloseParen { position: 3 }));
    assert_eq!(assert_failure(")"),
               Error::Parse(ParseError::UnexpectedToken { token:    "')'".to_string(),
                                                          expected: "a number or '('",
                                                          position: 0, }));
}

#[test]
fn leading_and_trailing_operators_are_error() {
    assert!(matches!(assert_failure("-1"),
                     Error::Parse(ParseError::UnexpectedToken { position: 0, .. })));
    assert_eq!(assert_failure("1 +"),
               Error::Parse(ParseError::UnexpectedEndOfInput { position: 2 }));
    assert_eq!(assert_failure("(1 + 2) * ("),
               Error::Parse(ParseError::UnexpectedEndOfInput { position: 10 }));
}

#[test]
fn empty_input_is_error() {
    assert_eq!(assert_failure(""), Error::Parse(ParseError::EmptyInput));
    assert_eq!(assert_failure("   "), Error::Parse(ParseError::EmptyInput));
}

#[test]
fn empty_group_is_error() {
    assert_eq!(assert_failure("()"),
               Error::Parse(ParseError::UnexpectedToken { token:    "')'".to_string(),
                                                          expected: "a number or '('",
                                                          position: 1, }));
    assert!(matches!(assert_failure("1 + ()"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn error_source_is_stage_error() {
    use std::error::Error as _;

    let err = assert_failure("5/0");
    let source = err.source().expect("stage error");
    assert_eq!(source.to_string(), "Error at position 1: Division by zero.");
}

#[test]
fn tree_shape() {
    let tree = parse(&tokenize("1+2").unwrap()).unwrap();
    assert_eq!(tree,
               Expr::binary(Expr::Literal { value: 1, position: 0 },
                            BinaryOperator::Add,
                            Expr::Literal { value: 2, position: 2 },
                            1));

    let render = |src: &str| parse(&tokenize(src).unwrap()).unwrap().to_string();
    assert_eq!(render("10-2-3"), "((10 - 2) - 3)");
    assert_eq!(render("1-2*3+4"), "((1 - (2 * 3)) + 4)");
    assert_eq!(render("2*(3+4)"), "(2 * (3 + 4))");
    assert_eq!(render("((5))"), "5");
}

#[test]
fn calculation_is_deterministic() {
    for src in ["2+3*4", "((1+2)*(3+4))", "5/0", "2++3", "2#3"] {
        assert_eq!(calculate(src), calculate(src));
    }
}

#[test]
fn concurrent_calculations_are_independent() {
    let sources = ["2+3*4", "(2+3)*4", "10-2-3", "20/4/5", "((1+2)*(3+4))"];
    let expected = [14, 20, 5, 1, 21];

    thread::scope(|scope| {
        let handles: Vec<_> = sources.iter()
                                     .map(|src| scope.spawn(move || calculate(src)))
                                     .collect();

        for (handle, want) in handles.into_iter().zip(expected) {
            assert_eq!(handle.join().unwrap(), Ok(want));
        }
    });
}

#[test]
fn long_chain_evaluates() {
    let src = vec!["1"; 100_000].join(" + ");
    assert_value(&src, 100_000);

    let src = vec!["1"; 100_000].join("-");
    assert_value(&src, -99_998);

    let nested = format!("{}1{}", "(1+".repeat(50_000), ")".repeat(50_000));
    assert_value(&nested, 50_001);
}

#[test]
fn long_chain_renders_and_drops() {
    let terms = 100_000;
    let src = vec!["1"; terms].join("+");
    let tree = parse(&tokenize(&src).unwrap()).unwrap();

    let rendered = tree.to_string();
    assert_eq!(rendered.len(), (terms - 1) * 6 + 1);
    assert!(rendered.starts_with(&format!("{}1 + 1)", "(".repeat(terms - 1))));
    assert!(rendered.ends_with(" + 1)"));

    drop(tree);
}
