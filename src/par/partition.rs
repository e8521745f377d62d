//! Partitioning with comparator bounds suitable for sharing between forked tasks.

use ndarray::ArrayViewMut1;

/// Partitions `v` around its first element, returning the pivot's final index.
///
/// Same contract as [`crate::partition::partition`], but the comparator is `Fn + Sync` so
/// sibling tasks running on different workers can share it.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &F) -> usize
where
	F: Fn(&T, &T) -> bool,
{
	debug_assert!(!v.is_empty());

	// Elements less than the pivot are swapped into the range `1..store`.
	let mut store = 1;
	for i in 1..v.len() {
		if is_less(&v[i], &v[0]) {
			v.swap(i, store);
			store += 1;
		}
	}

	// Place the pivot between the two classes.
	v.swap(0, store - 1);
	store - 1
}
