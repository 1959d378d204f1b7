use std::fs;

use exprcalc::{
    error::{ErrorKind, EvaluationError, LexError},
    evaluate_text,
    interpreter::lexer::Token,
    parse_text, tokenize_text,
};
use walkdir::WalkDir;

#[derive(Debug)]
enum Expected {
    Value(f64),
    Failure(ErrorKind),
}

fn parse_expected(text: &str) -> Expected {
    match text {
        "lex error" => Expected::Failure(ErrorKind::Lex),
        "syntax error" => Expected::Failure(ErrorKind::Syntax),
        "arithmetic error" => Expected::Failure(ErrorKind::Arithmetic),
        value => Expected::Value(value.parse()
                                      .unwrap_or_else(|e| panic!("bad expected value {value:?}: {e}"))),
    }
}

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in WalkDir::new("tests/cases").into_iter()
                                            .filter_map(Result::ok)
                                            .filter(|e| {
                                                e.path().extension().is_some_and(|ext| ext == "calc")
                                            })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            let (expression, expected) =
                line.rsplit_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));
            count += 1;

            match (parse_expected(expected.trim()), evaluate_text(expression)) {
                (Expected::Value(want), Ok(got)) => {
                    assert_eq!(got, want, "{path:?}:{}: {expression}", i + 1);
                },
                (Expected::Failure(want), Err(e)) => {
                    assert_eq!(e.kind(), want, "{path:?}:{}: {expression}: {e}", i + 1);
                },
                (expected, got) => {
                    panic!("{path:?}:{}: {expression}: expected {expected:?}, got {got:?}",
                           i + 1)
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_value(src: &str, expected: f64) {
    match evaluate_text(src) {
        Ok(value) => assert_eq!(value, expected, "{src}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate_text(src) {
        Ok(value) => panic!("Expression {src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src}: {e}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 - 5 - 2", 3.0);
}

#[test]
fn unary_chaining() {
    assert_value("--3", 3.0);
    assert_value("-3 + 4", 1.0);
}

#[test]
fn division() {
    assert_value("(10 - 5) / 2.5", 2.0);
    assert_failure("5 / 0", ErrorKind::Arithmetic);
}

#[test]
fn lexical_failure_names_the_character() {
    match evaluate_text("2 + @") {
        Err(EvaluationError::Lex(LexError::UnexpectedCharacter { character, .. })) => {
            assert_eq!(character, '@');
        },
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(evaluate_text("2 + @").unwrap_err().to_string().contains('@'));
}

#[test]
fn syntax_failures() {
    assert_failure("2 +", ErrorKind::Syntax);
    assert_failure("(2 + 3", ErrorKind::Syntax);
}

#[test]
fn repeated_calls_agree() {
    for src in ["2 + 3 * 4", "5 / 0", "2 + @", "(2 + 3", "-.5 * 8"] {
        let first = evaluate_text(src);
        for _ in 0..3 {
            assert_eq!(evaluate_text(src), first, "{src}");
        }
    }
}

#[test]
fn tokenization_for_display() {
    assert_eq!(tokenize_text("-5 + 8 / (2.5)").unwrap(),
               [Token::Minus,
                Token::Number(5.0),
                Token::Plus,
                Token::Number(8.0),
                Token::Slash,
                Token::LParen,
                Token::Number(2.5),
                Token::RParen,
                Token::EndOfInput]);
}

#[test]
fn multi_line_input_is_one_expression() {
    assert_value("1 +\n2 *\t3", 7.0);
}

#[test]
fn long_flat_chains() {
    assert_value(&vec!["1"; 100_000].join("+"), 100_000.0);
    assert_value(&vec!["1"; 100_000].join("*"), 1.0);
    assert_value(&format!("{}-1", vec!["1"; 50_000].join(" - ")), -49_999.0);

    let tree = parse_text(&vec!["1"; 100_000].join("*")).unwrap();
    assert!(tree.to_string().ends_with("* 1)"));
    drop(tree);

    let failing = format!("{} / 0", vec!["1"; 100_000].join("+"));
    assert_failure(&failing, ErrorKind::Arithmetic);
}
