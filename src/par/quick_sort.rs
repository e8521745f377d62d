//! Fork/join partition sort over 1-dimensional views.
//!
//! Each pending range is a plain unit of work, a mutable subview standing for the shared
//! array plus its half-open index bounds. Partitioning splits that view into two disjoint
//! sibling views which are completed as concurrent tasks via [`rayon::join`]; the parent
//! task finishes only after both children have. Disjointness of the siblings is what makes
//! the concurrent in-place mutation safe without locks or atomics.

use crate::{par::partition::partition, quick_sort::quick_sort};
use core::{cmp, mem};
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` using fork/join partition sort with leftmost-element pivot selection, which is
/// *O*(*n* \* log(*n*)) on average and *O*(*n*²) worst-case on sorted or adversarial input.
///
/// Work is forked onto the rayon pool the caller runs in, the global pool by default. On a
/// pool with a single worker the sort completes sequentially on the calling thread instead
/// of forking.
pub fn par_quick_sort<T, F>(v: ArrayViewMut1<'_, T>, is_less: F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	// Sorting has no meaningful behavior on zero-sized types.
	if mem::size_of::<T>() == 0 {
		return;
	}

	// A pool with a single worker has no parallelism to exploit.
	if rayon::current_num_threads() == 1 {
		return quick_sort(v, |a, b| is_less(a, b));
	}

	recurse(v, &is_less);
}

/// Sorts `v` recursively, forking both partitions once either is large enough.
fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &F)
where
	T: Send,
	F: Fn(&T, &T) -> bool + Sync,
{
	// If both partitions are up to this length, we continue sequentially. This number is as
	// small as possible but so that the overhead of Rayon's task scheduling is still
	// negligible.
	const MAX_SEQUENTIAL: usize = 2000;

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

		if cmp::max(left.len(), right.len()) <= MAX_SEQUENTIAL {
			// Recurse into the shorter side only in order to minimize the total number of
			// recursive calls and consume less stack space. Then just continue with the
			// longer side (this is akin to tail recursion).
			if left.len() < right.len() {
				recurse(left, is_less);
				v = right;
			} else {
				recurse(right, is_less);
				v = left;
			}
		} else {
			// Fork both halves and wait for their completion. One runs on the invoking
			// worker while the other is eligible to be stolen by an idle worker; their
			// views are disjoint, so both may mutate the shared array concurrently.
			rayon::join(|| recurse(left, is_less), || recurse(right, is_less));
			break;
		}
	}
}

#[cfg(test)]
mod test {
	use super::par_quick_sort;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;
	use rand::{Rng, SeedableRng, rngs::StdRng};

	fn samples(len: usize) -> Vec<i32> {
		let mut rng = StdRng::seed_from_u64(37);
		(0..len).map(|_| rng.random_range(-1_000..1_000)).collect()
	}

	#[cfg_attr(miri, ignore)]
	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		par_quick_sort(array.view_mut(), u32::lt);
		assert_eq!(array, sorted);
	}

	#[cfg_attr(miri, ignore)]
	#[quickcheck]
	fn idempotent(xs: Vec<u32>) {
		let mut array = Array1::from_vec(xs);
		par_quick_sort(array.view_mut(), u32::lt);
		let once = array.clone();
		par_quick_sort(array.view_mut(), u32::lt);
		assert_eq!(array, once);
	}

	#[test]
	fn sample() {
		let mut array = arr1(&[0, 2, 10, 5, -6, 7, 20, 2]);
		par_quick_sort(array.view_mut(), i32::lt);
		assert_eq!(array, arr1(&[-6, 0, 2, 2, 5, 7, 10, 20]));
	}

	#[test]
	fn descending() {
		let mut array = arr1(&[5, 4, 3, 2, 1]);
		par_quick_sort(array.view_mut(), i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 4, 5]));
	}

	// Large enough that the first split must exceed `MAX_SEQUENTIAL` and fork.
	#[cfg_attr(miri, ignore)]
	#[test]
	fn forks_past_sequential_limit() {
		let xs = samples(50_000);
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		par_quick_sort(array.view_mut(), i32::lt);
		assert_eq!(array, sorted);
	}

	// The result must not depend on how many workers are available or how tasks
	// interleave.
	#[cfg_attr(miri, ignore)]
	#[test]
	fn independent_of_worker_count() {
		let xs = samples(10_000);
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		for threads in [1, 2, 4, 8] {
			let pool = rayon::ThreadPoolBuilder::new()
				.num_threads(threads)
				.build()
				.unwrap();
			let mut array = Array1::from_vec(xs.clone());
			let v = array.view_mut();
			pool.install(move || par_quick_sort(v, i32::lt));
			assert_eq!(array, sorted);
		}
	}

	#[cfg_attr(miri, ignore)]
	#[test]
	fn single_worker_completes_directly() {
		let xs = samples(5_000);
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let pool = rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.build()
			.unwrap();
		let mut array = Array1::from_vec(xs);
		let v = array.view_mut();
		pool.install(move || par_quick_sort(v, i32::lt));
		assert_eq!(array, sorted);
	}
}
