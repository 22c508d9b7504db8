//! Searching over sorted (and unsorted) slices.

use std::cmp::Ordering;

/// Binary search driven by `f`, which reports how a probed element compares
/// to the target.
///
/// Returns `Ok(index)` of the first match the search path lands on, or
/// `Err(index)` with the insertion point that keeps the slice sorted. With
/// duplicates the returned match is not guaranteed to be the leftmost one.
pub fn binary_search_by<T, F>(s: &[T], mut f: F) -> Result<usize, usize>
where
    F: FnMut(&T) -> Ordering,
{
    // `hi` is exclusive so an empty slice never underflows
    let mut lo = 0;
    let mut hi = s.len();
    while lo < hi {
        let mid = (lo + (hi - 1)) / 2;
        match f(&s[mid]) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    Err(lo)
}

pub fn binary_search<T: Ord>(s: &[T], target: &T) -> Option<usize> {
    binary_search_by(s, |probe| probe.cmp(target)).ok()
}

/// Like [`binary_search`], also returning how many elements were probed.
pub fn binary_search_counted<T: Ord>(s: &[T], target: &T) -> (Option<usize>, usize) {
    let mut probes = 0;
    let found = binary_search_by(s, |probe| {
        probes += 1;
        probe.cmp(target)
    })
    .ok();
    (found, probes)
}

pub fn linear_search<T: PartialEq>(s: &[T], target: &T) -> Option<usize> {
    s.iter().position(|e| e == target)
}
