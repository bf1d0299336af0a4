use super::code;
use super::*;
use crate::error::Error;

const SAMPLE: [i64; 5] = [2, 4, 6, 8, 10];

#[test]
fn test_sample_sequence() {
    assert_eq!(search(&SAMPLE, 6), Some(2));
    assert_eq!(search(&SAMPLE, 1), None);
    assert_eq!(search(&SAMPLE, 10), Some(4));
    assert_eq!(search(&SAMPLE, 11), None);
    assert_eq!(search(&SAMPLE, 2), Some(0));
    assert_eq!(search(&SAMPLE, 7), None);
}

#[test]
fn test_every_present_key_found_at_its_index() {
    let keys: Vec<i64> = (0..257).map(|i| i * 3 - 100).collect();
    for variant in code::available_variants() {
        for (i, &key) in keys.iter().enumerate() {
            assert_eq!((variant.function)(&keys, key), Some(i), "{} key {}", variant.name, key);
            assert_eq!((variant.function)(&keys, key + 1), None, "{} gap {}", variant.name, key + 1);
        }
    }
}

#[test]
fn test_empty_sequence() {
    for variant in code::available_variants() {
        for query in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!((variant.function)(&[], query), None, "{}", variant.name);
        }
    }
}

#[test]
fn test_single_element() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(&[42], 42), Some(0), "{}", variant.name);
        assert_eq!((variant.function)(&[42], 41), None, "{}", variant.name);
        assert_eq!((variant.function)(&[42], 43), None, "{}", variant.name);
    }
}

#[test]
fn test_first_occurrence_with_duplicates() {
    for variant in code::available_variants() {
        assert_eq!((variant.function)(&[1, 3, 3, 3, 5], 3), Some(1), "{}", variant.name);
    }
}

#[test]
fn test_duplicate_run_at_start() {
    // The backward scan must stop at index 0
    for variant in code::available_variants() {
        assert_eq!((variant.function)(&[7, 7, 7, 7], 7), Some(0), "{}", variant.name);
        assert_eq!((variant.function)(&[7, 7, 7, 9], 7), Some(0), "{}", variant.name);
    }
}

#[test]
fn test_extreme_values() {
    let keys = [i64::MIN, -1, 0, i64::MAX];
    for variant in code::available_variants() {
        assert_eq!((variant.function)(&keys, i64::MIN), Some(0), "{}", variant.name);
        assert_eq!((variant.function)(&keys, i64::MAX), Some(3), "{}", variant.name);
        assert_eq!((variant.function)(&keys, 1), None, "{}", variant.name);
    }
}

#[test]
fn test_repeated_search_is_stable() {
    let keys = SortedKeys::new(SAMPLE.to_vec()).unwrap();
    let first = keys.search_all(&[8, 3, 10]);
    let second = keys.search_all(&[8, 3, 10]);
    assert_eq!(first, vec![3, -1, 4]);
    assert_eq!(first, second);
    assert_eq!(keys.as_slice(), &SAMPLE);
}

#[test]
fn test_sentinel() {
    assert_eq!(to_sentinel(None), NOT_FOUND);
    assert_eq!(to_sentinel(Some(3)), 3);
}

#[test]
fn test_sorted_keys_validation() {
    assert!(SortedKeys::new(vec![]).unwrap().is_empty());
    assert!(matches!(
        SortedKeys::new(vec![1, 3, 3, 5]),
        Err(Error::NotIncreasing { index: 2, .. })
    ));
    assert!(matches!(
        SortedKeys::new(vec![5, 1]),
        Err(Error::NotIncreasing { index: 1, previous: 5, value: 1, .. })
    ));
    let relaxed = SortedKeys::with_duplicates(vec![1, 3, 3, 5]).unwrap();
    assert_eq!(relaxed.search(3), Some(1));
    assert!(SortedKeys::with_duplicates(vec![3, 1]).is_err());
}

#[test]
fn test_solve_course_sample() {
    let mut input = Tokens::parse("5\n1 5 8 12 13\n5\n8 1 23 1 11\n");
    let answer = BinarySearchExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "2 0 -1 0 -1");
}

#[test]
fn test_solve_empty_batches() {
    let mut input = Tokens::parse("0\n\n3\n1 2 3\n");
    let answer = BinarySearchExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "-1 -1 -1");

    let mut input = Tokens::parse("2\n1 2\n0\n");
    let answer = BinarySearchExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap();
    assert_eq!(answer, "");
}

#[test]
fn test_solve_rejects_unsorted_keys() {
    let mut input = Tokens::parse("3\n1 3 3\n1\n3\n");
    let err = BinarySearchExercise
        .solve(&mut input, &SolveOptions::default())
        .unwrap_err();
    assert!(matches!(err, Error::NotIncreasing { .. }));

    let mut input = Tokens::parse("3\n1 3 3\n1\n3\n");
    let options = SolveOptions {
        allow_duplicates: true,
    };
    assert_eq!(BinarySearchExercise.solve(&mut input, &options).unwrap(), "1");
}

#[test]
fn test_solve_rejects_short_and_long_input() {
    let mut input = Tokens::parse("3\n1 2\n");
    assert!(matches!(
        BinarySearchExercise.solve(&mut input, &SolveOptions::default()),
        Err(Error::UnexpectedEof { .. })
    ));

    let mut input = Tokens::parse("1\n1\n1\n1 2\n");
    assert!(matches!(
        BinarySearchExercise.solve(&mut input, &SolveOptions::default()),
        Err(Error::TrailingInput { .. })
    ));
}

#[test]
fn test_variants_match_naive() {
    BinarySearchExercise
        .verify(&StressConfig::seeded(2000, 0xB15EC7))
        .expect("all variants should agree with the linear scan");
}

#[test]
fn test_bench_closures_agree() {
    let closures = BinarySearchExercise.variant_closures(512, 9);
    let samples: Vec<Option<f64>> = closures.into_iter().map(|mut v| (v.run)().1).collect();
    assert!(samples.windows(2).all(|w| w[0] == w[1]));
}
