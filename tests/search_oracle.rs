//! End-to-end checks of the exponent search against a literal four-loop search.

use dejager::domain::{Report, SearchInput, SearchResult};
use dejager::report::format_text;
use dejager::search::{CANDIDATE_EXPONENTS, search};
use rand::prelude::*;
use rand::rngs::StdRng;

fn oracle(target: f64, [w, x, y, z]: [f64; 4]) -> SearchResult {
    let mut best = SearchResult::SENTINEL;
    for a in CANDIDATE_EXPONENTS {
        for b in CANDIDATE_EXPONENTS {
            for c in CANDIDATE_EXPONENTS {
                for d in CANDIDATE_EXPONENTS {
                    let guess = w.powf(a) * x.powf(b) * y.powf(c) * z.powf(d);
                    if (target - guess).abs() < (target - best.estimate).abs() {
                        best = SearchResult {
                            estimate: guess,
                            exponents: [a, b, c, d],
                        };
                    }
                }
            }
        }
    }
    best
}

fn random_base(rng: &mut StdRng) -> f64 {
    loop {
        let base: f64 = rng.gen_range(0.05..60.0);
        if base != 1.0 {
            return base;
        }
    }
}

#[test]
fn seeded_random_inputs_match_oracle() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..8 {
        let target = rng.gen_range(0.01..1000.0);
        let bases = [
            random_base(&mut rng),
            random_base(&mut rng),
            random_base(&mut rng),
            random_base(&mut rng),
        ];
        let input = SearchInput::new(target, bases).unwrap();
        assert_eq!(search(&input), oracle(target, bases), "target={target} bases={bases:?}");
    }
}

#[test]
fn physical_constant_report() {
    // Speed of light in m/s against a typical set of personal numbers.
    let target = 299_792_458.0;
    let bases = [14.0, 102.0, 3.0, 40.0];
    let input = SearchInput::new(target, bases).unwrap();
    let result = search(&input);
    assert_eq!(result, oracle(target, bases));

    let report = Report::new(target, &result);
    assert!(report.relative_error_percent < 5.0);

    let text = format_text(&report);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Closest guess: "));
    assert!(lines[1].starts_with("Exponents used: "));
    assert_eq!(lines[1].split_whitespace().count(), 6);
    assert!(lines[2].starts_with("Error: ") && lines[2].ends_with('%'));
}
