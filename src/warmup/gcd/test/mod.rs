use super::code;
use super::*;
use crate::error::Error;

#[test]
fn test_known_answers() {
    for variant in code::available_variants() {
        let f = variant.function;
        assert_eq!(f(18, 35), 1, "{}", variant.name);
        assert_eq!(f(12, 18), 6, "{}", variant.name);
        assert_eq!(f(7, 7), 7, "{}", variant.name);
        assert_eq!(f(1, 999), 1, "{}", variant.name);
        assert_eq!(f(1024, 96), 32, "{}", variant.name);
    }
}

#[test]
fn test_zero_operand() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(0, 9), 9, "{}", variant.name);
        assert_eq!((variant.function)(9, 0), 9, "{}", variant.name);
    }
}

#[test]
fn test_large_operands() {
    assert_eq!(gcd_euclid(28_851_538, 1_183_019), 17_657);
    assert_eq!(gcd_binary(28_851_538, 1_183_019), 17_657);
    assert_eq!(gcd_euclid(2_000_000_000, 1_999_999_999), 1);
    assert_eq!(gcd_binary(1 << 40, 3 << 20), 1 << 20);
}

#[test]
fn test_solve() {
    let mut input = Tokens::parse("28851538 1183019\n");
    let answer = GcdExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "17657");
}

#[test]
fn test_solve_rejects_zero() {
    let mut input = Tokens::parse("0 5\n");
    assert!(matches!(
        GcdExercise.solve(&mut input, &SolveOptions::default()),
        Err(Error::OutOfRange { field: "a", .. })
    ));
}

#[test]
fn test_variants_match_naive() {
    GcdExercise
        .verify(&StressConfig::seeded(1000, 7))
        .expect("all variants should agree with trial division");
}
