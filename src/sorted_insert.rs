use crate::errors::{Error, Result};
use std::cmp::Ordering;

/// Inserts `candidate` into `items`, kept in `comparator` order and capped
/// at `max_size` entries.
///
/// Returns the evicted item: the candidate itself when it ranks at or after
/// the current worst kept item of a full buffer, the previous last item when
/// the candidate displaces it, or `None` when the buffer had room. The
/// insertion point is the first index whose item sorts after the candidate,
/// found by binary search with the same comparator the caller ranks by.
pub fn sorted_insert<T, F>(
    items: &mut Vec<T>,
    candidate: T,
    max_size: usize,
    comparator: F,
) -> Result<Option<T>>
where
    F: Fn(&T, &T) -> Ordering,
{
    if max_size == 0 {
        return Err(Error::InvalidMaxSize);
    }
    if items.len() > max_size {
        return Err(Error::InvariantViolated);
    }
    if items.is_empty() {
        items.push(candidate);
        return Ok(None);
    }
    let is_full = items.len() == max_size;
    if is_full {
        if let Some(last) = items.last() {
            if comparator(last, &candidate) != Ordering::Greater {
                return Ok(Some(candidate));
            }
        }
    }
    let mut lo = 0;
    let mut hi = items.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        if comparator(&items[mid], &candidate) == Ordering::Greater {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    items.insert(lo, candidate);
    Ok(if is_full { items.pop() } else { None })
}
