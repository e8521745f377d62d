//! Sequential partition sort over 1-dimensional views.

use crate::partition::partition;
use core::mem;
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` using partition sort with leftmost-element pivot selection, which is
/// *O*(*n* \* log(*n*)) on average and *O*(*n*²) worst-case on sorted or adversarial input.
pub fn quick_sort<T, F>(v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	recurse(v, &mut is_less);
}

/// Sorts `v` recursively.
fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		// Ranges of up to one element are trivially sorted.
		if v.len() <= 1 {
			return;
		}

		// Partition the range and split it into `left`, `pivot`, and `right`, with the
		// pivot already at its final sorted position.
		let mid = partition(v.view_mut(), is_less);
		let (left, right) = v.split_at(Axis(0), mid);
		let (_pivot, right) = right.split_at(Axis(0), 1);

		// Recurse into the shorter side only in order to minimize the total number of
		// recursive calls and consume less stack space. Then just continue with the longer
		// side (this is akin to tail recursion).
		if left.len() < right.len() {
			recurse(left, is_less);
			v = right;
		} else {
			recurse(right, is_less);
			v = left;
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::quick_sort;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn idempotent(xs: Vec<u32>) {
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut u32::lt);
		let once = array.clone();
		quick_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array, once);
	}

	#[test]
	fn sample() {
		let mut array = arr1(&[0, 2, 10, 5, -6, 7, 20, 2]);
		quick_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[-6, 0, 2, 2, 5, 7, 10, 20]));
	}

	// Every partition settles the minimum of its range as pivot.
	#[test]
	fn descending() {
		let mut array = arr1(&[5, 4, 3, 2, 1]);
		quick_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 4, 5]));
	}

	#[test]
	fn all_equal() {
		let mut array = Array1::from_elem(64, 7);
		quick_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, Array1::from_elem(64, 7));
	}

	#[test]
	fn empty_and_single() {
		let mut array = Array1::<i32>::from_vec(Vec::new());
		quick_sort(array.view_mut(), &mut i32::lt);
		assert!(array.is_empty());

		let mut array = arr1(&[42]);
		quick_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, arr1(&[42]));
	}
}
