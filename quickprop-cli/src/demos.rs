//! Catalog of demonstration properties the harness can run.
//!
//! Two entries fail on purpose (`less-than-100` and `broken-qsort`) to show
//! minimized counterexamples.

use quickprop::{Arbitrary, Bundle, Report, Runner};

/// A named property the harness knows how to run
pub struct Demo {
    /// Identifier used on the command line
    pub name: &'static str,
    /// One-line summary shown by `quickprop list`
    pub description: &'static str,
    /// Whether the property is expected to hold
    pub holds: bool,
    run: fn(&Runner) -> Report,
}

impl Demo {
    /// Run the property with the given runner
    pub fn run(&self, runner: &Runner) -> Report {
        (self.run)(runner)
    }
}

/// Every demonstration property, in display order
pub fn catalog() -> &'static [Demo] {
    &CATALOG
}

/// Look up a demonstration property by name
pub fn find(name: &str) -> Option<&'static Demo> {
    CATALOG.iter().find(|demo| demo.name == name)
}

static CATALOG: [Demo; 7] = [
    Demo {
        name: "mul-identity",
        description: "x * 1 == 1 * x over i64",
        holds: true,
        run: mul_identity,
    },
    Demo {
        name: "add-commutative",
        description: "a + b == b + a over pairs of i32",
        holds: true,
        run: add_commutative,
    },
    Demo {
        name: "less-than-100",
        description: "x < 100 over i64 (false; minimizes into [100, 200))",
        holds: false,
        run: less_than_100,
    },
    Demo {
        name: "concat-length",
        description: "len(a + b) == len(a) + len(b) over pairs of strings",
        holds: true,
        run: concat_length,
    },
    Demo {
        name: "qsort",
        description: "qsort agrees with the standard sort over Vec<i32>",
        holds: true,
        run: qsort_matches_sort,
    },
    Demo {
        name: "broken-qsort",
        description: "qsort with a reversed comparator (false; minimizes to two elements)",
        holds: false,
        run: broken_qsort_matches_sort,
    },
    Demo {
        name: "reverse-strings",
        description: "reversing a Vec<String> twice is the identity",
        holds: true,
        run: reverse_twice,
    },
];

fn mul_identity(runner: &Runner) -> Report {
    runner.report("x * 1 == 1 * x", &i64::bundle(), &|x: &i64| {
        x.wrapping_mul(1) == 1_i64.wrapping_mul(*x)
    })
}

fn add_commutative(runner: &Runner) -> Report {
    runner.report("a + b == b + a", &<(i32, i32)>::bundle(), &|(a, b): &(i32, i32)| {
        a.wrapping_add(*b) == b.wrapping_add(*a)
    })
}

fn less_than_100(runner: &Runner) -> Report {
    runner.report("x < 100", &i64::bundle(), &|x: &i64| *x < 100)
}

fn concat_length(runner: &Runner) -> Report {
    runner.report(
        "len(a + b) == len(a) + len(b)",
        &<(String, String)>::bundle(),
        &|(a, b): &(String, String)| {
            let joined = format!("{}{}", a, b);
            joined.chars().count() == a.chars().count() + b.chars().count()
        },
    )
}

fn qsort_matches_sort(runner: &Runner) -> Report {
    runner.report("qsort(xs) == sort(xs)", &Vec::<i32>::bundle(), &|xs: &Vec<i32>| {
        qsort(xs, &|a: &i32, b: &i32| a < b) == sorted(xs)
    })
}

fn broken_qsort_matches_sort(runner: &Runner) -> Report {
    runner.report(
        "broken_qsort(xs) == sort(xs)",
        &Vec::<i32>::bundle(),
        &|xs: &Vec<i32>| qsort(xs, &|a: &i32, b: &i32| a > b) == sorted(xs),
    )
}

fn reverse_twice(runner: &Runner) -> Report {
    let words = Bundle::vec_of(String::bundle());
    runner.report("reverse(reverse(xs)) == xs", &words, &|xs: &Vec<String>| {
        let mut twice = xs.clone();
        twice.reverse();
        twice.reverse();
        twice == *xs
    })
}

/// Pivot on the first element, partition the rest with `less`
fn qsort<T, F>(values: &[T], less: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let Some((pivot, rest)) = values.split_first() else {
        return Vec::new();
    };

    let (smaller, larger): (Vec<T>, Vec<T>) = rest.iter().cloned().partition(|x| less(x, pivot));

    let mut result = qsort(&smaller, less);
    result.push(pivot.clone());
    result.extend(qsort(&larger, less));
    result
}

fn sorted(values: &[i32]) -> Vec<i32> {
    let mut values = values.to_vec();
    values.sort();
    values
}
