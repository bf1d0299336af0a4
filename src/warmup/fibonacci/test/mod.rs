use super::code;
use super::*;

#[test]
fn test_first_values() {
    let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
    for variant in code::available_variants() {
        for (n, &value) in expected.iter().enumerate() {
            assert_eq!((variant.function)(n as u32), value, "{} F({})", variant.name, n);
        }
    }
}

#[test]
fn test_largest_accepted() {
    assert_eq!(fibonacci_fast(MAX_N), 2_880_067_194_370_816_120);
    assert_eq!(fibonacci_fast(92), 7_540_113_804_746_346_429);
}

#[test]
fn test_solve() {
    let mut input = Tokens::parse("10\n");
    let answer = FibonacciExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "55");

    let mut input = Tokens::parse("91\n");
    assert!(FibonacciExercise
        .solve(&mut input, &SolveOptions::default())
        .is_err());
}

#[test]
fn test_variants_match_naive() {
    FibonacciExercise
        .verify(&StressConfig::seeded(200, 3))
        .expect("fast should agree with the recursion");
}
