use super::code;
use super::*;
use crate::error::Error;

#[test]
fn test_known_answers() {
    for variant in code::available_variants() {
        let f = variant.function;
        assert_eq!(f(6, 8), 24, "{}", variant.name);
        assert_eq!(f(4, 6), 12, "{}", variant.name);
        assert_eq!(f(1, 1), 1, "{}", variant.name);
        assert_eq!(f(7, 13), 91, "{}", variant.name);
        assert_eq!(f(15, 5), 15, "{}", variant.name);
    }
}

#[test]
fn test_zero_operand() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(0, 5), 0, "{}", variant.name);
        assert_eq!((variant.function)(5, 0), 0, "{}", variant.name);
    }
}

#[test]
fn test_largest_operands_fit() {
    assert_eq!(lcm_fast(2_000_000_000, 1_999_999_999), 3_999_999_998_000_000_000);
}

#[test]
fn test_solve() {
    let mut input = Tokens::parse("761457 614573");
    let answer = LcmExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "467970912861");
}

#[test]
fn test_solve_rejects_missing_operand() {
    let mut input = Tokens::parse("6");
    assert!(matches!(
        LcmExercise.solve(&mut input, &SolveOptions::default()),
        Err(Error::UnexpectedEof { expected: "b" })
    ));
}

#[test]
fn test_variants_match_naive() {
    LcmExercise
        .verify(&StressConfig::seeded(1000, 11))
        .expect("all variants should agree with the multiple walk");
}
