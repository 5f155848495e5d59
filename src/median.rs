use crate::predicate::Predicate;

/// Picks the median of `a`, `b` and `c` under `lt`.
///
/// Ties resolve exactly like this ladder:
///
/// `lt(a,b) ? (lt(b,c) ? b : (lt(a,c) ? c : a)) : (lt(a,c) ? a : (lt(b,c) ? c : b))`
///
/// Generic over the key so the sorts can pick between positions while comparing the elements
/// stored there.
#[inline]
pub(crate) fn median3_by<K: Copy>(a: K, b: K, c: K, mut lt: impl FnMut(K, K) -> bool) -> K {
    if lt(a, b) {
        if lt(b, c) {
            b
        } else if lt(a, c) {
            c
        } else {
            a
        }
    } else if lt(a, c) {
        a
    } else if lt(b, c) {
        c
    } else {
        b
    }
}

/// Returns a reference to the median of three values.
pub fn median_of_three<'a, T, P>(a: &'a T, b: &'a T, c: &'a T, is_less: &mut P) -> &'a T
where
    P: Predicate<T>,
{
    median3_by(a, b, c, |x, y| is_less.lt(x, y))
}
