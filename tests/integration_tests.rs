use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortbench::prelude::*;

fn sorted_copy(input: &[i32]) -> Vec<i32> {
    let mut expected = input.to_vec();
    expected.sort();
    expected
}

#[test]
fn test_concrete_scenario() {
    let input = vec![5, 3, 8, 1, 9, 2];
    for algorithm in Algorithm::ALL {
        assert_eq!(
            algorithm.sort(&input),
            vec![1, 2, 3, 5, 8, 9],
            "{algorithm} failed"
        );
    }
}

#[test]
fn test_empty_and_singleton() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.sort(&[]), Vec::<i32>::new());
        assert_eq!(algorithm.sort(&[42]), vec![42]);
        assert_eq!(algorithm.sort(&[i32::MIN]), vec![i32::MIN]);
    }
}

#[test]
fn test_input_not_mutated() {
    let input = vec![4, -2, 7, 7, 0, -9];
    let snapshot = input.clone();
    for algorithm in Algorithm::ALL {
        let _ = algorithm.sort(&input);
        assert_eq!(input, snapshot);
    }
}

#[test]
fn test_edge_cases() {
    let cases: Vec<Vec<i32>> = vec![
        // Sorted
        (0..200).collect(),
        // Reversed
        (0..200).rev().collect(),
        // All same
        vec![7; 200],
        // Few unique
        (0..200).map(|i| i % 3).collect(),
        // Extremes
        vec![i32::MAX, i32::MIN, 0, -1, 1, i32::MAX, i32::MIN],
        // Organ pipe
        (0..100).chain((0..100).rev()).collect(),
    ];

    for input in &cases {
        let expected = sorted_copy(input);
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.sort(input), expected, "{algorithm} on {input:?}");
        }
    }
}

#[test]
fn test_fuzz_random() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let len = rng.random_range(0..100);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();
        let expected = sorted_copy(&input);

        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.sort(&input), expected, "{algorithm} on {input:?}");
        }
    }
}

#[test]
fn test_fuzz_random_large() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..10 {
        let len = rng.random_range(1_000..5_000);
        let input: Vec<i32> = (0..len).map(|_| rng.random()).collect();
        let expected = sorted_copy(&input);

        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.sort(&input), expected, "{algorithm} failed");
        }
    }
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);
    let input: Vec<i32> = (0..2_000).map(|_| rng.random_range(0..500)).collect();

    for algorithm in Algorithm::ALL {
        let once = algorithm.sort(&input);
        let twice = algorithm.sort(&once);
        assert_eq!(once, twice, "{algorithm} not idempotent");
    }
}

#[test]
fn test_resolve_closure() {
    let input = vec![9, -3, 4, 4, 0];
    for name in ["bubble", "SHELL", "Merge", " quick "] {
        let algorithm = resolve(name).unwrap();
        assert_eq!(algorithm.sort(&input), vec![-3, 0, 4, 4, 9]);
    }

    for name in ["heap", "radix", "quicksort", ""] {
        assert_eq!(
            resolve(name),
            Err(SortError::UnsupportedAlgorithm(name.to_string()))
        );
    }
}

#[test]
fn test_unsupported_error_message() {
    let err = resolve("heap").unwrap_err();
    assert_eq!(err.to_string(), "unsupported algorithm: \"heap\"");
}
