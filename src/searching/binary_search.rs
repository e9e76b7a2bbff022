use log::trace;

use super::SearchError;

/// Membership test over a haystack sorted ascending.
///
/// The interval `[lo, hi)` halves each round, so the midpoint access is
/// unconditional; an empty haystack is rejected up front instead of
/// indexing out of range.
pub fn binary_search<T: Ord>(haystack: &[T], needle: &T) -> Result<bool, SearchError> {
    if haystack.is_empty() {
        return Err(SearchError::EmptyHaystack);
    }
    let (mut lo, mut hi) = (0, haystack.len());
    loop {
        let m = lo + (hi - lo) / 2;
        if &haystack[m] == needle {
            return Ok(true);
        }
        if &haystack[m] > needle {
            trace!("needle below midpoint, interval [{lo}, {m})");
            hi = m;
        } else {
            trace!("needle above midpoint, interval [{}, {hi})", m + 1);
            lo = m + 1;
        }
        if lo >= hi {
            return Ok(false);
        }
    }
}
