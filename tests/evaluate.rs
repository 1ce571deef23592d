use std::f64::consts::PI;

use shuntcalc::{
    Calculator, evaluate,
    error::{CalcError, DomainError, EvalError, FactorialError, LexError, ParseError},
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert!((value - expected).abs() <= 1e-9 * expected.abs().max(1.0),
                    "{src:?} evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_error(src: &str) -> CalcError {
    match evaluate(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_basic_arithmetic() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("10/4", 2.5);
    assert_value("7-2-1", 4.0);
    assert_value("8/2/2", 2.0);
    assert_value("3+4*2/(1-5)^2^3", 3.000_122_070_312_5);
}

#[test]
fn power_is_right_associative() {
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
}

#[test]
fn root_is_left_associative() {
    assert_value("8r2r2", 8f64.sqrt().sqrt());
    assert_value("27r3", 3.0);
    assert_value("16r4", 2.0);
}

#[test]
fn odd_root_of_negative_is_real() {
    assert_value("(-8)r3", -2.0);
    assert_value("-27r3", -3.0);
}

#[test]
fn unary_and_binary_minus() {
    assert_value("-5+3", -2.0);
    assert_value("5-3", 2.0);
    assert_value("5--3", 8.0);
    assert_value("2*-3", -6.0);
    assert_value("(-2)*3", -6.0);
    assert_value("-p", -PI);
    assert_value("2^-1", 0.5);
    assert_value("S-0", 0.0);
}

#[test]
fn unary_minus_binds_to_the_number() {
    // The sign is part of the literal, so it is raised too.
    assert_value("-3^2", 9.0);
    assert_value("0-3^2", -9.0);
}

#[test]
fn functions_and_factorial() {
    assert_value("S0", 0.0);
    assert_value("C0", 1.0);
    assert_value("s0", 0.0);
    assert_value("c0", 1.0);
    assert_value("t0", 0.0);
    assert_value("L100", 2.0);
    assert_value("l1", 0.0);
    assert_value("S(p/2)", 1.0);
    assert_value("C(p)", -1.0);
    assert_value("T(p/4)", 1.0);
    assert_value("6!", 720.0);
    assert_value("0!", 1.0);
    assert_value("3!!", 720.0);
    assert_value("(1+2)!", 6.0);
    assert_value("2+3!", 8.0);
}

#[test]
fn prefix_function_binds_tighter_than_binary_operators() {
    assert_value("S30+1", 30f64.sin() + 1.0);
    assert_value("L1000*2", 6.0);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("  2 +\t3 * 4 ", 14.0);
    assert_value("1 0 + 1", 11.0);
    assert_value("1 . 5 * 2", 3.0);
}

#[test]
fn constant_is_exactly_pi_every_time() {
    let calculator = Calculator::new();
    for _ in 0..3 {
        assert_eq!(calculator.evaluate("p"), Ok(PI));
    }
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(assert_error(""), CalcError::EmptyExpression);
    assert_eq!(assert_error("   \t "), CalcError::EmptyExpression);
}

#[test]
fn mismatched_parentheses_are_parse_errors() {
    assert!(matches!(assert_error("(1+2"), CalcError::Parse(ParseError::MissingCloseParen)));
    assert!(matches!(assert_error("1+2)"),
                     CalcError::Parse(ParseError::MissingOpenParen { index: 3 })));
}

#[test]
fn domain_errors() {
    for src in ["1/0", "0^-1", "(-4)r2", "l0", "l(-1)", "L0", "171!", "0/0"] {
        let e = assert_error(src);
        assert!(matches!(e, CalcError::Domain(DomainError::NotFinite { .. })),
                "{src:?} gave {e:?}");
    }
}

#[test]
fn factorial_errors_are_domain_errors() {
    let e = assert_error("(-1)!");
    assert_eq!(e,
               CalcError::Domain(DomainError::Factorial(FactorialError::Negative { value: -1.0 })));
    assert!(e.is_domain());
    assert!(e.is_factorial());

    let e = assert_error("2.5!");
    assert!(matches!(e,
                     CalcError::Domain(DomainError::Factorial(FactorialError::NonIntegral { .. }))));

    assert!(!assert_error("1/0").is_factorial());
}

/// Exact `n!` in decimal, built from base-10^9 limbs, least significant
/// first.
fn exact_factorial(n: u64) -> String {
    const BASE: u64 = 1_000_000_000;
    let mut limbs: Vec<u64> = vec![1];
    for k in 2..=n {
        let mut carry = 0;
        for limb in &mut limbs {
            let product = *limb * k + carry;
            *limb = product % BASE;
            carry = product / BASE;
        }
        while carry > 0 {
            limbs.push(carry % BASE);
            carry /= BASE;
        }
    }

    let mut digits = limbs.last().map(ToString::to_string).unwrap_or_default();
    for limb in limbs.iter().rev().skip(1) {
        digits.push_str(&format!("{limb:09}"));
    }
    digits
}

#[test]
fn factorial_is_correctly_rounded() {
    assert_eq!(exact_factorial(28), "304888344611713860501504000000");

    let expected: f64 = "304888344611713860501504000000".parse().unwrap();
    assert_eq!(evaluate("28!"), Ok(expected));
    assert_eq!(evaluate("170!").unwrap().to_bits(),
               exact_factorial(170).parse::<f64>().unwrap().to_bits());

    for n in 0..=170 {
        let expected: f64 = exact_factorial(n).parse().unwrap();
        assert_eq!(evaluate(&format!("{n}!")), Ok(expected), "{n}!");
    }

    assert!(matches!(assert_error("171!"), CalcError::Domain(DomainError::NotFinite { .. })));
}

#[test]
fn lexical_errors() {
    assert!(matches!(assert_error("exit"), CalcError::Lex(LexError::UnexpectedCharacter { .. })));
    assert!(matches!(assert_error("QUIT"), CalcError::Lex(LexError::UnexpectedCharacter { .. })));
    assert!(matches!(assert_error("pi"), CalcError::Lex(LexError::UnexpectedCharacter { .. })));
    assert!(matches!(assert_error("2 x3"),
                     CalcError::Lex(LexError::UnexpectedCharacter { position: 2, .. })));
    assert!(matches!(assert_error("-"), CalcError::Lex(LexError::DanglingMinus { position: 0 })));
    assert!(matches!(assert_error("2*-"), CalcError::Lex(LexError::DanglingMinus { position: 2 })));
    assert!(matches!(assert_error("--3"), CalcError::Lex(LexError::MisplacedMinus { .. })));
    assert!(matches!(assert_error("-(2)"), CalcError::Lex(LexError::MisplacedMinus { .. })));
    assert!(matches!(assert_error("."), CalcError::Lex(LexError::InvalidNumber { .. })));
}

#[test]
fn malformed_rpn_is_an_eval_error() {
    assert!(matches!(assert_error("2+"),
                     CalcError::Eval(EvalError::MissingOperand { symbol: '+', expected: 2, found: 1 })));
    assert!(matches!(assert_error("5-"), CalcError::Eval(EvalError::MissingOperand { .. })));
    assert!(matches!(assert_error("S"), CalcError::Eval(EvalError::MissingOperand { .. })));
    assert!(matches!(assert_error("(2)(3)"),
                     CalcError::Eval(EvalError::OperandCount { remaining: 2 })));
    assert!(matches!(assert_error("2p"), CalcError::Eval(EvalError::OperandCount { remaining: 2 })));
    assert!(matches!(assert_error("()"), CalcError::Eval(EvalError::OperandCount { remaining: 0 })));
}

#[test]
fn errors_have_readable_messages() {
    assert_eq!(assert_error("").to_string(), "Expression cannot be empty.");
    assert_eq!(assert_error("(1+2").to_string(),
               "Mismatched parentheses in expression: missing ')'.");
    assert_eq!(assert_error("(-1)!").to_string(),
               "Factorial only defined for non-negative integers, but found -1.");
    assert!(assert_error("1/0").to_string().contains("division by zero"));
}

#[test]
fn calculator_is_shareable_across_threads() {
    let calculator = Calculator::new();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=4).map(|n| {
                                          let calculator = &calculator;
                                          scope.spawn(move || calculator.evaluate(&format!("{n}!")))
                                      })
                                      .collect();
        let results: Vec<_> = handles.into_iter()
                                     .map(|h| h.join().expect("worker panicked"))
                                     .collect();
        assert_eq!(results, vec![Ok(1.0), Ok(2.0), Ok(6.0), Ok(24.0)]);
    });
}
