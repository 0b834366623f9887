use monkey_ast::{Node, Program};
use monkey_parser::parse;
use proptest::prelude::*;

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");
    program
}

const KEYWORDS: &[&str] = &["fn", "let", "if", "else", "return", "true", "false", "macro"];

fn monkey_expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z][a-z0-9]{0,4}"
            .prop_filter("identifiers must not collide with a keyword", |s| {
                !KEYWORDS.contains(&s.as_str())
            }),
        "[0-9]{1,5}".prop_map(|s| s),
        Just("true".to_string()),
        Just("false".to_string()),
    ];

    leaf.prop_recursive(4, 64, 4, |inner| {
        prop_oneof![
            (Just("!".to_string()), inner.clone()).prop_map(|(op, r)| format!("{op}{r}")),
            (Just("-".to_string()), inner.clone()).prop_map(|(op, r)| format!("{op}{r}")),
            (
                inner.clone(),
                prop_oneof![
                    Just("+"),
                    Just("-"),
                    Just("*"),
                    Just("/"),
                    Just("=="),
                    Just("!="),
                    Just("<"),
                    Just(">"),
                ],
                inner.clone(),
            )
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.prop_map(|e| format!("({e})")),
        ]
    })
}

proptest! {
    /// Re-parsing the canonical `to_string()` of a parsed expression yields
    /// an AST structurally equal to the one that produced it.
    #[test]
    fn expression_statement_round_trips_through_to_string(expr in monkey_expression()) {
        let source = format!("{expr};");
        let first = parse_ok(&source);
        let rendered = first.to_string();
        let second = parse_ok(&rendered);
        prop_assert_eq!(first, second);
    }

    /// Same property for a `let` statement binding the expression to a name.
    #[test]
    fn let_statement_round_trips_through_to_string(expr in monkey_expression()) {
        let source = format!("let roundtrip_value = {expr};");
        let first = parse_ok(&source);
        let rendered = first.to_string();
        let second = parse_ok(&rendered);
        prop_assert_eq!(first, second);
    }
}
