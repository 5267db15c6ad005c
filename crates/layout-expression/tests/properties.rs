//! Property tests for the expression interpreter.

use layout_expression::Interpreter;
use proptest::prelude::*;

fn eval(expr: &str) -> f64 {
    Interpreter::new()
        .evaluate(expr)
        .unwrap_or_else(|e| panic!("evaluate({expr:?}) failed: {e}"))
}

const SAMPLE: &str = "Sqrt(Pi * Tau) + 2(E - 1) ^ 2 / 4 - Abs-3";

/// `SAMPLE` with whitespace inserted before the characters picked by `mask`.
fn spaced(mask: &[bool]) -> String {
    SAMPLE
        .chars()
        .zip(mask.iter().cycle())
        .flat_map(|(c, &space)| if space { vec![' ', c] } else { vec![c] })
        .collect()
}

/// `SAMPLE` with the case of the letters picked by `mask` flipped.
fn recased(mask: &[bool]) -> String {
    SAMPLE
        .chars()
        .zip(mask.iter().cycle())
        .map(|(c, &flip)| match (flip, c.is_uppercase()) {
            (false, _) => c,
            (true, true) => c.to_ascii_lowercase(),
            (true, false) => c.to_ascii_uppercase(),
        })
        .collect()
}

proptest! {
    /// Arbitrary text yields a value or an error, never a panic.
    #[test]
    fn evaluate_never_panics(s in ".*") {
        let _ = Interpreter::new().evaluate(&s);
    }

    #[test]
    fn integer_arithmetic(a in -1000i64..1000, b in -1000i64..1000) {
        prop_assert_eq!(eval(&format!("{a} + {b}")), (a + b) as f64);
        prop_assert_eq!(eval(&format!("{a} - {b}")), (a - b) as f64);
        prop_assert_eq!(eval(&format!("{a} * {b}")), (a * b) as f64);
    }

    #[test]
    fn multiplication_binds_tighter(a in 0i64..100, b in 0i64..100, c in 0i64..100) {
        prop_assert_eq!(eval(&format!("{a} + {b} * {c}")), (a + b * c) as f64);
        prop_assert_eq!(eval(&format!("{a} * {b} - {c}")), (a * b - c) as f64);
    }

    #[test]
    fn whitespace_is_insignificant(mask in prop::collection::vec(any::<bool>(), 1..16)) {
        prop_assert_eq!(eval(&spaced(&mask)), eval(SAMPLE));
    }

    #[test]
    fn names_are_case_insensitive(mask in prop::collection::vec(any::<bool>(), 1..16)) {
        prop_assert_eq!(eval(&recased(&mask)), eval(SAMPLE));
    }

    #[test]
    fn missing_close_parens_are_appended(n in 0usize..12) {
        let expr = format!("{}2 + 3", "(".repeat(n));
        prop_assert_eq!(eval(&expr), 5.0);
    }

    #[test]
    fn surplus_close_parens_are_balanced(n in 0usize..12) {
        let expr = format!("2 + 3{} * 2", ")".repeat(n));
        let expected = if n == 0 { 8.0 } else { 10.0 };
        prop_assert_eq!(eval(&expr), expected);
    }

    /// A declared variable reads back the value it was declared with.
    #[test]
    fn declared_variables_read_back(value in -1.0e6f64..1.0e6) {
        let mut interp = Interpreter::new();
        let literal = format!("{value:.3}");
        let declared = interp.evaluate(&format!("var x = {literal}")).unwrap();
        prop_assert_eq!(interp.evaluate("x").unwrap(), declared);
        prop_assert_eq!(interp.variable("x"), Some(declared));
    }
}
