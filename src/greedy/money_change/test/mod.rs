use super::code;
use super::*;
use crate::error::Error;

#[test]
fn test_known_answers() {
    for variant in code::available_variants() {
        let f = variant.function;
        assert_eq!(f(2), 2, "{}", variant.name);
        assert_eq!(f(28), 6, "{}", variant.name);
        assert_eq!(f(10), 1, "{}", variant.name);
        assert_eq!(f(15), 2, "{}", variant.name);
        assert_eq!(f(99), 9 + 1 + 4, "{}", variant.name);
        assert_eq!(f(1000), 100, "{}", variant.name);
    }
}

#[test]
fn test_zero() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(0), 0, "{}", variant.name);
    }
}

#[test]
fn test_solve() {
    let mut input = Tokens::parse("28\n");
    let answer = MoneyChangeExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "6");
}

#[test]
fn test_solve_rejects_out_of_range() {
    for text in ["0", "1001"] {
        let mut input = Tokens::parse(text);
        assert!(matches!(
            MoneyChangeExercise.solve(&mut input, &SolveOptions::default()),
            Err(Error::OutOfRange { field: "m", .. })
        ));
    }
}

#[test]
fn test_variants_match_naive() {
    MoneyChangeExercise
        .verify(&StressConfig::seeded(500, 3))
        .expect("the greedy formula should match dynamic programming");
}
