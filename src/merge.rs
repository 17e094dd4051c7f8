//! Generic merge-with-dedup helper used to combine candidate cell/row sets.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

/// Merges `other` into `base` in place: appends every element, stably sorts
/// the whole of `base` by `cmp`, then removes duplicates keeping the first
/// occurrence of each `key(x)`.
///
/// `key` extracts the dedup key from an element and `cmp` orders two
/// elements; keeping them as separate closures, rather than bundling an
/// optional comparator behind `Option<impl Fn>`, avoids forcing every caller
/// who only needs the default key/order (see [`merge_in_place_distinct`]) to
/// also satisfy a blanket `Ord` bound for the closure-less path.
pub fn merge_in_place<T, K, FKey, FCmp>(base: &mut Vec<T>, other: Vec<T>, key: FKey, cmp: FCmp)
where
    K: Eq + Hash,
    FKey: Fn(&T) -> K,
    FCmp: Fn(&T, &T) -> Ordering,
{
    base.extend(other);
    base.sort_by(&cmp);

    let mut seen: HashSet<K> = HashSet::with_capacity(base.len());
    base.retain(|item| seen.insert(key(item)));
}

/// Convenience wrapper over [`merge_in_place`] using `T` itself as the key
/// and its natural order, for the common case of merging plain value sets.
pub fn merge_in_place_distinct<T>(base: &mut Vec<T>, other: Vec<T>)
where
    T: Clone + Eq + Hash + Ord,
{
    merge_in_place(base, other, |t: &T| t.clone(), |a, b| a.cmp(b));
}
