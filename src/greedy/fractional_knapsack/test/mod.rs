use super::code;
use super::*;
use crate::error::Error;

fn assert_close(actual: f64, expected: f64, name: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{name}: expected {expected}, got {actual}"
    );
}

#[test]
fn test_known_answers() {
    let items = [Item::new(60, 20), Item::new(100, 50), Item::new(120, 30)];
    for variant in code::available_variants() {
        assert_close((variant.function)(50, &items), 180.0, variant.name);
        assert_close((variant.function)(10, &[Item::new(500, 30)]), 500.0 / 3.0, variant.name);
    }
}

#[test]
fn test_everything_fits() {
    let items = [Item::new(10, 1), Item::new(20, 2), Item::new(30, 3)];
    for variant in code::available_variants() {
        assert_close((variant.function)(100, &items), 60.0, variant.name);
    }
}

#[test]
fn test_zero_capacity_and_zero_values() {
    let items = [Item::new(0, 5), Item::new(7, 1)];
    for variant in code::available_variants() {
        assert_close((variant.function)(0, &items), 0.0, variant.name);
        assert_close((variant.function)(6, &items), 7.0, variant.name);
    }
}

#[test]
fn test_density_ordering_is_exact() {
    // 2_000_000 / 1_999_999 vs 1_999_999 / 1_999_998 differ below f32 precision
    let a = Item::new(2_000_000, 1_999_999);
    let b = Item::new(1_999_999, 1_999_998);
    assert_eq!(a.cmp_density(&b), std::cmp::Ordering::Less);
    assert_eq!(a.cmp_density(&a), std::cmp::Ordering::Equal);
}

#[test]
fn test_solve() {
    let mut input = Tokens::parse("3 50\n60 20\n100 50\n120 30\n");
    let answer = FractionalKnapsackExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "180.0000");

    let mut input = Tokens::parse("1 10\n500 30\n");
    let answer = FractionalKnapsackExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "166.6667");
}

#[test]
fn test_solve_rejects_zero_weight() {
    let mut input = Tokens::parse("1 10\n5 0\n");
    assert!(matches!(
        FractionalKnapsackExercise.solve(&mut input, &SolveOptions::default()),
        Err(Error::OutOfRange { field: "weight", .. })
    ));
}

#[test]
fn test_variants_match_naive() {
    FractionalKnapsackExercise
        .verify(&StressConfig::seeded(1000, 5))
        .expect("sorting by density should match repeated selection");
}
