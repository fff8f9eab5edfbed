//! Brute-force exponent search.
//!
//! Given a target constant and `N` personal numbers, we evaluate
//!
//! ```text
//! estimate = b_1^e_1 * b_2^e_2 * ... * b_N^e_N
//! ```
//!
//! for every exponent tuple in `candidates^N` and keep the estimate closest to
//! the target. The search space is tiny (17^4 = 83,521 tuples for the default
//! table), so there is no pruning and no caching.
//!
//! Selection rules:
//! - the accumulator starts at estimate `0` with all exponents `0`
//! - a tuple replaces the accumulator only if its absolute error is strictly
//!   smaller, so the first tuple in enumeration order wins ties
//! - overflowed (`inf`) and `NaN` estimates never compare smaller and drop out

use tracing::{debug, trace};

use crate::domain::{SearchInput, SearchResult};
use crate::search::candidates::CANDIDATE_EXPONENTS;
use crate::search::grid::{ExponentGrid, grid_len};

/// Run the search for `input` over the default candidate table.
pub fn search(input: &SearchInput) -> SearchResult {
    search_with(input, &CANDIDATE_EXPONENTS)
}

/// Run the search for `input` over an explicit candidate table.
///
/// Preconditions (positive target, positive non-unit bases) are assumed to have
/// been checked by the caller.
pub fn search_with(input: &SearchInput, candidates: &[f64]) -> SearchResult {
    let (estimate, exponents) = search_exponents(input.target, &input.bases.0, candidates);
    SearchResult {
        estimate,
        exponents,
    }
}

/// Search over any number of bases.
///
/// Returns the best estimate and the exponent applied to each base.
pub fn search_exponents<const N: usize>(
    target: f64,
    bases: &[f64; N],
    candidates: &[f64],
) -> (f64, [f64; N]) {
    let best = ExponentGrid::new(candidates, N).fold((0.0, [0.0; N]), |best, exponents| {
        let estimate = estimate_for(bases, &exponents);
        if (target - estimate).abs() < (target - best.0).abs() {
            trace!(estimate, ?exponents, "improved");
            let mut chosen = [0.0; N];
            chosen.copy_from_slice(&exponents);
            (estimate, chosen)
        } else {
            best
        }
    });

    debug!(
        target,
        combinations = ?grid_len(candidates, N),
        estimate = best.0,
        exponents = ?best.1,
        "exponent search finished"
    );
    best
}

/// Product of `bases[i]^exponents[i]`, multiplied left to right.
pub fn estimate_for(bases: &[f64], exponents: &[f64]) -> f64 {
    bases
        .iter()
        .zip(exponents)
        .map(|(base, exp)| base.powf(*exp))
        .product()
}
