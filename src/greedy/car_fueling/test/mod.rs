use super::code;
use super::*;
use crate::error::Error;

#[test]
fn test_known_answers() {
    for variant in code::available_variants() {
        let f = variant.function;
        assert_eq!(f(950, 400, &[200, 375, 550, 750]), Some(2), "{}", variant.name);
        assert_eq!(f(10, 3, &[1, 2, 5, 9]), None, "{}", variant.name);
        assert_eq!(f(200, 250, &[100, 150]), Some(0), "{}", variant.name);
    }
}

#[test]
fn test_no_stops() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(5, 5, &[]), Some(0), "{}", variant.name);
        assert_eq!((variant.function)(6, 5, &[]), None, "{}", variant.name);
    }
}

#[test]
fn test_exact_reach() {
    // Every gap equals the tank range
    for variant in code::available_variants() {
        assert_eq!((variant.function)(12, 3, &[3, 6, 9]), Some(3), "{}", variant.name);
        assert_eq!((variant.function)(12, 3, &[3, 7, 9]), None, "{}", variant.name);
    }
}

#[test]
fn test_naive_tolerates_unordered_stops() {
    // Stops out of order or past the destination are skipped, not subtracted
    assert_eq!(refills_naive(10, 5, &[7, 3]), None);
    assert_eq!(refills_naive(10, 6, &[5, 12]), Some(1));
    assert_eq!(refills_naive(4, 5, &[9]), Some(0));
}

#[test]
fn test_format_refills() {
    assert_eq!(format_refills(Some(2)), "2");
    assert_eq!(format_refills(None), "-1");
}

#[test]
fn test_solve() {
    let mut input = Tokens::parse("950\n400\n4\n200 375 550 750\n");
    let answer = CarFuelingExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "2");

    let mut input = Tokens::parse("10\n3\n4\n1 2 5 9\n");
    let answer = CarFuelingExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "-1");

    let mut input = Tokens::parse("200\n250\n2\n100 150\n");
    let answer = CarFuelingExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "0");
}

#[test]
fn test_solve_rejects_bad_stops() {
    let mut input = Tokens::parse("10\n3\n2\n5 4\n");
    assert!(matches!(
        CarFuelingExercise.solve(&mut input, &SolveOptions::default()),
        Err(Error::NotIncreasing { field: "stops", index: 1, .. })
    ));

    let mut input = Tokens::parse("10\n3\n1\n10\n");
    assert!(matches!(
        CarFuelingExercise.solve(&mut input, &SolveOptions::default()),
        Err(Error::OutOfRange { field: "stops", .. })
    ));
}

#[test]
fn test_random_stops_are_valid() {
    let mut rng = StdRng::seed_from_u64(9);
    for distance in 1..=30u64 {
        let stops = random_stops(&mut rng, distance, 8);
        assert!(stops.windows(2).all(|w| w[0] < w[1]));
        assert!(stops.iter().all(|&s| s > 0 && s < distance));
    }
}

#[test]
fn test_variants_match_naive() {
    CarFuelingExercise
        .verify(&StressConfig::seeded(2000, 13))
        .expect("greedy refills should match dynamic programming");
}
