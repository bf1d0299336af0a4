use super::code;
use super::*;

#[test]
fn test_course_samples() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(3), 2, "{}", variant.name);
        assert_eq!((variant.function)(139), 1, "{}", variant.name);
        assert_eq!((variant.function)(0), 0, "{}", variant.name);
        assert_eq!((variant.function)(1), 1, "{}", variant.name);
    }
    assert_eq!(fibonacci_last_digit_fast(327_305), 5);
}

#[test]
fn test_pisano_period_repeats() {
    for n in 0..PISANO_PERIOD {
        assert_eq!(
            fibonacci_last_digit_fast(n),
            fibonacci_last_digit_fast(n + PISANO_PERIOD),
            "period broken at {}",
            n
        );
    }
}

#[test]
fn test_naive_exact_up_to_its_limit() {
    for n in NAIVE_MAX_N - 5..=NAIVE_MAX_N {
        assert_eq!(fibonacci_last_digit_naive(n), fibonacci_last_digit_pisano(n), "n = {}", n);
    }
}

#[test]
#[should_panic(expected = "does not fit in u128")]
fn test_naive_refuses_overflow() {
    fibonacci_last_digit_naive(NAIVE_MAX_N + 1);
}

#[test]
fn test_solve_huge_n() {
    let mut input = Tokens::parse("100000000000000");
    let answer = FibonacciLastDigitExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    // 10^14 mod 60 = 40, and F(40) = 102334155
    assert_eq!(answer, "5");
}

#[test]
fn test_variants_match_naive() {
    FibonacciLastDigitExercise
        .verify(&StressConfig::seeded(500, 11))
        .expect("digit-only variants should agree with exact F(n)");
}
