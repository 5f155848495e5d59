/// Approximates `log2(len)` by dividing a working copy of `len` down towards `1..=2`.
///
/// The result is only used as recursion budget, being off by one changes when the quicksort
/// stops subdividing but never the final order. `len <= 1` yields 0 and the output is
/// non-decreasing in `len`.
pub fn depth_budget(len: usize) -> usize {
    if len <= 1 {
        return 0;
    }

    // Divisor and the exponent it contributes.
    const LADDER: [(f64, usize); 5] = [(256.0, 8), (64.0, 6), (16.0, 4), (4.0, 2), (2.0, 1)];

    let mut c = len as f64;
    let mut budget = 0;

    for (divisor, exponent) in LADDER {
        while c > divisor {
            c /= divisor;
            budget += exponent;
        }
    }

    // c is now in (1, 2].
    if c >= 1.5 {
        budget += 1;
    }

    budget
}
