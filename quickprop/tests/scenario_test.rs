//! End-to-end scenarios: passing laws, false claims with minimized
//! counterexamples, and explicitly composed container bundles.

use quickprop::{
    Arbitrary, Bundle, CheckConfig, GenConfig, Outcome, PropertyError, Runner, Verdict, check,
    check_with, create_seeded_rng,
};

fn runner(trials: usize, seed: u64) -> Runner {
    Runner::new(CheckConfig::default().with_trials(trials).with_seed(seed))
}

fn qsort(values: &[i32], less: fn(&i32, &i32) -> bool) -> Vec<i32> {
    match values.split_first() {
        None => Vec::new(),
        Some((pivot, rest)) => {
            let smaller: Vec<i32> = rest.iter().copied().filter(|x| less(x, pivot)).collect();
            let larger: Vec<i32> = rest.iter().copied().filter(|x| !less(x, pivot)).collect();
            let mut sorted = qsort(&smaller, less);
            sorted.push(*pivot);
            sorted.extend(qsort(&larger, less));
            sorted
        }
    }
}

fn sorted(values: &[i32]) -> Vec<i32> {
    let mut values = values.to_vec();
    values.sort();
    values
}

#[test]
fn test_multiplication_identity_passes_twenty_trials() {
    let report = check("x * 1 == 1 * x", |x: &i64| {
        x.wrapping_mul(1) == 1_i64.wrapping_mul(*x)
    });

    assert_eq!(report.verdict, Verdict::Passed);
    assert_eq!(report.trials, 20);
    assert_eq!(report.to_string(), "\"x * 1 == 1 * x\" passed 20 tests.");
}

#[test]
fn test_less_than_100_minimizes_below_200() {
    for seed in 0..10 {
        let outcome = runner(200, seed)
            .run(&i64::bundle(), &|x: &i64| *x < 100)
            .unwrap();

        let Outcome::Failed {
            original,
            minimized,
            shrink_steps,
            ..
        } = outcome
        else {
            panic!("seed {}: x < 100 should not hold", seed);
        };
        assert!(original >= 100);
        assert!(
            (100..200).contains(&minimized),
            "seed {}: minimized {} to {}",
            seed,
            original,
            minimized
        );
        // Each accepted step halves the value
        assert!(shrink_steps <= 64);
    }
}

#[test]
fn test_qsort_agrees_with_sort() {
    let report = check("qsort(xs) == sort(xs)", |xs: &Vec<i32>| {
        qsort(xs, |a, b| a < b) == sorted(xs)
    });
    assert!(report.passed(), "{}", report);
}

#[test]
fn test_broken_qsort_minimizes_to_two_elements() {
    let outcome = runner(20, 31)
        .run(&Vec::<i32>::bundle(), &|xs: &Vec<i32>| {
            qsort(xs, |a, b| a > b) == sorted(xs)
        })
        .unwrap();

    let minimized = outcome.minimized().expect("a reversed comparator must fail");
    assert!(minimized.len() <= 2, "minimized to {:?}", minimized);
    // A single element is always sorted, so the shortest failing prefix has two
    assert_eq!(minimized.len(), 2);
    assert_ne!(minimized[0], minimized[1]);
}

#[test]
fn test_vec_of_strings_draws_elements_independently() {
    let bundle = Bundle::vec_of(String::bundle());
    let config = GenConfig::default();
    let mut rng = create_seeded_rng(8);

    let mut saw_distinct_elements = false;
    for _ in 0..50 {
        let words = bundle.generate(&mut rng, &config);
        assert!(words.len() < config.max_len);
        for word in &words {
            assert!(word.chars().count() < config.max_string_len);
        }
        if words.windows(2).any(|pair| pair[0] != pair[1]) {
            saw_distinct_elements = true;
        }
    }
    assert!(saw_distinct_elements);
}

#[test]
fn test_vec_of_strings_reduces_by_dropping_whole_elements() {
    let bundle = Bundle::vec_of(String::bundle());
    let words = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];

    let mut chain = vec![words.clone()];
    while let Some(next) = bundle.reduce(chain.last().unwrap()) {
        chain.push(next);
    }

    assert_eq!(chain.len(), 4);
    assert_eq!(chain[1], vec!["alpha".to_string(), "beta".to_string()]);
    assert_eq!(chain[2], vec!["alpha".to_string()]);
    assert!(chain[3].is_empty());
}

#[test]
fn test_failing_vec_of_strings_keeps_element_contents() {
    // Only the sequence shrinks; the surviving string is left as drawn
    let outcome = runner(50, 4)
        .run(&Vec::<String>::bundle(), &|words: &Vec<String>| words.is_empty())
        .unwrap();

    let Outcome::Failed {
        original,
        minimized,
        ..
    } = outcome
    else {
        panic!("most draws are non-empty");
    };
    assert_eq!(minimized.len(), 1);
    assert_eq!(minimized[0], original[0]);
}

#[test]
fn test_string_concat_length() {
    let report = check_with(
        "len(a + b) == len(a) + len(b)",
        Bundle::pair(String::bundle(), String::bundle()),
        |(a, b): &(String, String)| {
            format!("{}{}", a, b).chars().count() == a.chars().count() + b.chars().count()
        },
    );
    assert!(report.passed());
}

#[test]
fn test_pair_reduces_first_field_before_second() {
    let outcome = runner(100, 12)
        .run(&<(u32, u32)>::bundle(), &|(_, b): &(u32, u32)| *b < 10)
        .unwrap();

    let (a, b) = *outcome.minimized().expect("b < 10 rarely holds");
    // The first field does not matter to the property, so it reaches zero
    assert_eq!(a, 0);
    assert!((10..20).contains(&b));
}

#[test]
fn test_option_reduces_to_none_last() {
    let bundle = Option::<u8>::bundle();
    assert_eq!(bundle.reduce(&Some(4)), Some(Some(2)));
    assert_eq!(bundle.reduce(&Some(1)), Some(Some(0)));
    assert_eq!(bundle.reduce(&Some(0)), Some(None));
    assert_eq!(bundle.reduce(&None), None);
}

#[test]
fn test_custom_range_bundle_minimizes_toward_lower_bound() {
    let bundle = Bundle::in_range(1_000_i32..5_000).unwrap();
    let outcome = runner(100, 2)
        .run(&bundle, &|x: &i32| *x < 1_500)
        .unwrap();

    let minimized = *outcome.minimized().expect("most of the range is >= 1500");
    assert!((1_500..2_000).contains(&minimized), "minimized to {}", minimized);
}

#[test]
fn test_runaway_reduction_is_an_error() {
    let bundle = Bundle::new(|_, _| 1_u64, |n: &u64| Some(n + 1));
    let result = Runner::new(
        CheckConfig::default()
            .with_seed(0)
            .with_max_shrink_steps(500),
    )
    .run(&bundle, &|_: &u64| false);

    match result {
        Err(PropertyError::NonTerminatingReduction { steps, last }) => {
            assert_eq!(steps, 500);
            assert_eq!(last, "501");
        }
        other => panic!("expected a non-terminating reduction, got {:?}", other),
    }
}
