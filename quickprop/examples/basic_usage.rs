//! Basic usage examples demonstrating the core quickprop API
//!
//! Run with `cargo run --example basic_usage`.

use quickprop::{Arbitrary, Bundle, CheckConfig, Property, check, check_with, check_with_config};

// Example 1: a law that holds, with the default bundle for i64
fn example_1_passing_law() {
    println!("=== Example 1: Passing Law ===");
    check("x * 1 == 1 * x", |x: &i64| {
        x.wrapping_mul(1) == 1_i64.wrapping_mul(*x)
    });
    println!();
}

// Example 2: a false claim, reported with a minimized counterexample
fn example_2_counterexample() {
    println!("=== Example 2: Minimized Counterexample ===");
    let report = check("x < 100", |x: &i64| *x < 100);
    if !report.passed() {
        println!("Replay with CheckConfig::default().with_seed({})", report.seed);
    }
    println!();
}

// Example 3: properties as named types
struct SortedAfterSort;

impl Property<Vec<i32>> for SortedAfterSort {
    fn holds(&self, input: &Vec<i32>) -> bool {
        let mut sorted = input.clone();
        sorted.sort();
        sorted.windows(2).all(|w| w[0] <= w[1])
    }
}

fn example_3_property_struct() {
    println!("=== Example 3: Property Struct ===");
    check("sort produces ordered output", SortedAfterSort);
    println!();
}

// Example 4: explicit container bundles and a pinned seed
fn example_4_explicit_bundles() {
    println!("=== Example 4: Explicit Bundles ===");
    let words = Bundle::vec_of(String::bundle());
    check_with_config(
        "reverse(reverse(xs)) == xs",
        words,
        |xs: &Vec<String>| {
            let mut twice = xs.clone();
            twice.reverse();
            twice.reverse();
            twice == *xs
        },
        CheckConfig::default().with_trials(100).with_seed(42),
    );

    let small = Bundle::in_range(-50_i32..50).expect("non-empty range");
    check_with("|x| <= 50 for x in [-50, 50)", small, |x: &i32| x.abs() <= 50);
    println!();
}

fn main() {
    example_1_passing_law();
    example_2_counterexample();
    example_3_property_struct();
    example_4_explicit_bundles();
}
