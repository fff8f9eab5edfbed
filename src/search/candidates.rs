//! The candidate exponent table.

/// Every exponent a personal number may be raised to, in enumeration order.
pub const CANDIDATE_EXPONENTS: [f64; 17] = [
    -5.0,
    -4.0,
    -3.0,
    -2.0,
    -1.0,
    -1.0 / 2.0,
    -1.0 / 3.0,
    -1.0 / 4.0,
    0.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.0,
    1.0,
    2.0,
    3.0,
    4.0,
    5.0,
];
