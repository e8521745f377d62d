//! Partitioning and selection primitives shared by the sort implementations.

use core::cmp::Ordering::{self, Equal, Greater, Less};
use core::mem;
use ndarray::{ArrayView1, ArrayViewMut1, Axis, IndexLonger};

/// Partitions `v` around its first element, returning the pivot's final index.
///
/// On return, the pivot occupies its final sorted position `p`, every element in `..p` is
/// less than the pivot, and every element in `p + 1..` is not. The scan is confined to `v`
/// itself, so partitioning a subview never touches elements outside of it.
///
/// The pivot is always the leftmost element; there is no randomization and no
/// median-of-three, so already sorted input degrades to maximally imbalanced partitions.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
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

/// Reorders `v` such that the element at `index` is at its final sorted position, returning
/// the subview before it, the element itself, and the subview after it.
///
/// Iterative Hoare selection: partition, then narrow the view to whichever side still
/// contains `index` until the pivot lands on it. Each round shrinks the view by at least
/// the settled pivot, so the loop terminates even when all elements compare equal.
pub fn partition_at_index<'a, T, F>(
	mut v: ArrayViewMut1<'a, T>,
	index: usize,
	is_less: &mut F,
) -> (ArrayViewMut1<'a, T>, &'a mut T, ArrayViewMut1<'a, T>)
where
	F: FnMut(&T, &T) -> bool,
{
	if index >= v.len() {
		panic!(
			"partition_at_index index {} greater than length of array {}",
			index,
			v.len()
		);
	}

	// Selection has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() != 0 {
		let mut w = v.view_mut();
		let mut k = index;
		while w.len() > 1 {
			let p = partition(w.view_mut(), is_less);
			match p.cmp(&k) {
				Less => {
					let (_, right) = w.split_at(Axis(0), p + 1);
					w = right;
					k -= p + 1;
				}
				Greater => {
					let (left, _) = w.split_at(Axis(0), p);
					w = left;
				}
				Equal => break,
			}
		}
	}

	let (left, right) = v.split_at(Axis(0), index);
	let (pivot, right) = right.split_at(Axis(0), 1);
	(left, pivot.index(0), right)
}

/// Checks whether the elements of `v` are sorted according to `compare`.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	let mut iter = v.iter();
	let Some(mut last) = iter.next() else {
		return true;
	};
	for item in iter {
		if !matches!(compare(last, item), Some(Less | Equal)) {
			return false;
		}
		last = item;
	}
	true
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{partition, partition_at_index};
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn partitioned(xs: Vec<i32>) {
		if xs.is_empty() {
			return;
		}
		let mut array = Array1::from_vec(xs);
		let p = partition(array.view_mut(), &mut i32::lt);
		let pivot = array[p];
		assert!(array.iter().take(p).all(|x| *x < pivot));
		assert!(array.iter().skip(p + 1).all(|x| *x >= pivot));
	}

	#[quickcheck]
	fn selected(xs: Vec<i32>) {
		if xs.is_empty() {
			return;
		}
		let index = xs.len() / 2;
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		let (left, nth, right) = partition_at_index(array.view_mut(), index, &mut i32::lt);
		assert_eq!(*nth, sorted[index]);
		assert!(left.iter().all(|x| *x <= *nth));
		assert!(right.iter().all(|x| *x >= *nth));
	}

	#[test]
	fn nth_smallest() {
		fn check(xs: &[i32], index: usize, expected: i32) {
			let mut array = Array1::from_vec(xs.to_vec());
			let (_, nth, _) = partition_at_index(array.view_mut(), index, &mut i32::lt);
			assert_eq!(*nth, expected);
		}

		check(&[10], 0, 10);
		check(&[20, 10], 1, 20);
		check(&[30, 10, 20], 1, 20);
		check(&[10, 90, 80, 30, 70, 50], 5, 90);
		check(&[60, 40, 30, 10, 50, 20, 70], 3, 40);
		check(&[90, 80, 70, 60, 50, 40, 30, 20, 10], 8, 90);
		check(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100], 0, 10);
	}

	#[test]
	#[should_panic(expected = "greater than length")]
	fn index_out_of_bounds() {
		let mut array = Array1::from_vec(vec![3, 1, 2]);
		partition_at_index(array.view_mut(), 3, &mut i32::lt);
	}
}
