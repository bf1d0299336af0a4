use super::code;
use super::*;
use crate::error::Error;

#[test]
fn test_known_answers() {
    for variant in code::available_variants() {
        let f = variant.function;
        assert_eq!(f(&[1, 2, 3]), 6, "{}", variant.name);
        assert_eq!(f(&[7, 5, 14, 2, 8, 8, 10, 1, 2, 3]), 140, "{}", variant.name);
        assert_eq!(f(&[100_000, 90_000]), 9_000_000_000, "{}", variant.name);
        assert_eq!(f(&[0, 0]), 0, "{}", variant.name);
    }
}

#[test]
fn test_repeated_maximum() {
    // The classic mistake is skipping the second copy of the maximum
    for variant in code::available_variants() {
        assert_eq!((variant.function)(&[5, 5]), 25, "{}", variant.name);
        assert_eq!((variant.function)(&[2, 9, 3, 9]), 81, "{}", variant.name);
    }
}

#[test]
fn test_too_short() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(&[]), 0, "{}", variant.name);
        assert_eq!((variant.function)(&[7]), 0, "{}", variant.name);
    }
}

#[test]
fn test_solve() {
    let mut input = Tokens::parse("10\n7 5 14 2 8 8 10 1 2 3\n");
    let answer = MaxPairwiseProductExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "140");
}

#[test]
fn test_solve_rejects_single_number() {
    let mut input = Tokens::parse("1\n5\n");
    assert!(matches!(
        MaxPairwiseProductExercise.solve(&mut input, &SolveOptions::default()),
        Err(Error::OutOfRange { field: "n", .. })
    ));
}

#[test]
fn test_variants_match_naive() {
    MaxPairwiseProductExercise
        .verify(&StressConfig::seeded(1000, 42))
        .expect("all variants should agree with the pairwise scan");
}
