//! Fork/join [partition sorting] and [selection] for 1-dimensional (sub)views into
//! [`ndarray`] arrays with arbitrary memory layout (e.g., non-contiguous).
//!
//! A range is sorted in place by partitioning it around a pivot and completing the two
//! resulting sub-ranges as independent tasks. Sibling tasks always operate on disjoint
//! index ranges by construction, so they may run on different worker threads and mutate
//! the shared array concurrently without locking. Ranges too small to benefit from
//! forking, and pools with a single worker, complete sequentially on the calling thread.
//!
//! # Example
//!
//! ```
//! use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
//!
//! let mut v = arr1(&[0, 2, 10, 5, -6, 7, 20, 2]);
//!
//! v.sort_unstable();
//! assert!(v == arr1(&[-6, 0, 2, 2, 5, 7, 10, 20]));
//! ```
//!
//! # Pivot Selection
//!
//! The pivot is always the first element of the range, without randomization or
//! median-of-three. This keeps partitioning branch-predictable and allocation-free but
//! degrades to *O*(*n*²) on already sorted or adversarial input; the partition scan is
//! confined to the range being partitioned.
//!
//! # Scheduling
//!
//! The parallel sorts fork onto the `rayon` pool of the calling thread, the global pool
//! by default. The `*_in` variants take a `rayon::ThreadPool` explicitly, so the
//! scheduler is an injectable dependency rather than ambient state; a single-worker pool
//! acts as a synchronous-executor substitute in tests.
//!
//! [partition sorting]: https://en.wikipedia.org/wiki/Quicksort
//! [selection]: https://en.wikipedia.org/wiki/Selection_algorithm
//!
//! # Features
//!
//!   * `std` for tests and the dependencies below. Enabled by `default` or `rayon`.
//!   * `rayon` for parallel `par_sort_unstable*`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod partition;
mod quick_sort;

#[cfg(feature = "rayon")]
mod par;
#[cfg(feature = "rayon")]
use par::quick_sort::par_quick_sort;
#[cfg(feature = "rayon")]
use rayon::ThreadPool;

use crate::{
	partition::{is_sorted, partition_at_index},
	quick_sort::quick_sort,
};
use core::cmp::Ordering::{self, Less};
use ndarray::{ArrayBase, ArrayViewMut1, Data, DataMut, Ix1};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view
/// with arbitrary memory layout (e.g., non-contiguous) providing fork/join [sorting] and
/// [selection].
///
/// [sorting]: https://en.wikipedia.org/wiki/Sorting_algorithm
/// [selection]: https://en.wikipedia.org/wiki/Selection_algorithm
pub trait Sort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array in parallel, but is not stable (i.e., may reorder equal elements).
	///
	/// # Current Implementation
	///
	/// The current algorithm is a fork/join partition sort with leftmost-element pivot
	/// selection. Partitioning a range yields two disjoint sub-ranges which are sorted as
	/// concurrent tasks; one runs on the invoking worker while the other may be stolen by
	/// an idle worker, and the parent completes only after both have. Sub-ranges small
	/// enough that forking overhead would dominate are completed sequentially, as is the
	/// whole sort on a pool with a single worker.
	///
	/// Pivots are not randomized, so already sorted input hits the *O*(*n*²) worst case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.par_sort_unstable();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_sort_unstable(&mut self)
	where
		A: Ord + Send,
		S: DataMut;
	/// Sorts the array in parallel with a comparator function, but is not stable (i.e., may
	/// reorder equal elements).
	///
	/// The comparator function must define a total ordering for the elements in the array,
	/// otherwise the order of the elements is unspecified.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.par_sort_unstable_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.par_sort_unstable_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_sort_unstable_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut;
	/// Sorts the array in parallel with a key extraction function, but is not stable (i.e.,
	/// may reorder equal elements).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5i32, 4, 32, -3, 2]);
	///
	/// v.par_sort_unstable_by_key(|k| k.to_string());
	/// assert!(v == arr1(&[-3, -5, 2, 32, 4]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_sort_unstable_by_key<K, F>(&mut self, f: F)
	where
		A: Send,
		K: Ord,
		F: Fn(&A) -> K + Sync,
		S: DataMut;
	/// Sorts the array in parallel on the given pool, but is not stable (i.e., may reorder
	/// equal elements).
	///
	/// Identical to [`par_sort_unstable`](Sort1Ext::par_sort_unstable) except that work is
	/// forked onto `pool` instead of the pool of the calling thread. Passing a pool built
	/// with a single worker completes the sort sequentially on that worker.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
	///
	/// let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	/// v.par_sort_unstable_in(&pool);
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_sort_unstable_in(&mut self, pool: &ThreadPool)
	where
		A: Ord + Send,
		S: DataMut;
	/// Sorts the array in parallel on the given pool with a comparator function, but is not
	/// stable (i.e., may reorder equal elements).
	#[cfg(feature = "rayon")]
	fn par_sort_unstable_by_in<F>(&mut self, pool: &ThreadPool, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Send + Sync,
		S: DataMut;
	/// Sorts the array in parallel on the given pool with a key extraction function, but is
	/// not stable (i.e., may reorder equal elements).
	#[cfg(feature = "rayon")]
	fn par_sort_unstable_by_key_in<K, F>(&mut self, pool: &ThreadPool, f: F)
	where
		A: Send,
		K: Ord,
		F: Fn(&A) -> K + Send + Sync,
		S: DataMut;

	/// Sorts the array, but is not stable (i.e., may reorder equal elements).
	///
	/// # Current Implementation
	///
	/// The current algorithm is an in-place partition sort with leftmost-element pivot
	/// selection, recursing into the shorter partition and iterating on the longer one to
	/// bound stack depth. It does not allocate, making it usable without `std`.
	///
	/// Pivots are not randomized, so already sorted input hits the *O*(*n*²) worst case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.sort_unstable();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn sort_unstable(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with a comparator function, but is not stable (i.e., may reorder
	/// equal elements).
	///
	/// The comparator function must define a total ordering for the elements in the array,
	/// otherwise the order of the elements is unspecified.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.sort_unstable_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.sort_unstable_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn sort_unstable_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array with a key extraction function, but is not stable (i.e., may reorder
	/// equal elements).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5i32, 4, 32, -3, 2]);
	///
	/// v.sort_unstable_by_key(|k| k.abs());
	/// assert!(v == arr1(&[2, -3, 4, -5, 32]));
	/// ```
	fn sort_unstable_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;

	/// Reorders the array such that the element at `index` is at its final sorted position.
	///
	/// Returns a triplet of the following from the reordered array: the subview before
	/// `index`, the element at `index`, and the subview after `index`. All elements before
	/// `index` are less than or equal to the returned element, and all elements after it
	/// are greater than or equal to it.
	///
	/// # Panics
	///
	/// Panics when `index >= len()`, meaning it always panics on empty arrays.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// // Find the median.
	/// let (_, median, _) = v.select_nth_unstable(2);
	/// assert_eq!(*median, 1);
	/// ```
	fn select_nth_unstable(
		&mut self,
		index: usize,
	) -> (ArrayViewMut1<'_, A>, &mut A, ArrayViewMut1<'_, A>)
	where
		A: Ord,
		S: DataMut;
	/// Reorders the array with a comparator function such that the element at `index` is at
	/// its final sorted position.
	///
	/// # Panics
	///
	/// Panics when `index >= len()`, meaning it always panics on empty arrays.
	fn select_nth_unstable_by<F>(
		&mut self,
		index: usize,
		compare: F,
	) -> (ArrayViewMut1<'_, A>, &mut A, ArrayViewMut1<'_, A>)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Reorders the array with a key extraction function such that the element at `index`
	/// is at its final sorted position.
	///
	/// # Panics
	///
	/// Panics when `index >= len()`, meaning it always panics on empty arrays.
	fn select_nth_unstable_by_key<K, F>(
		&mut self,
		index: usize,
		f: F,
	) -> (ArrayViewMut1<'_, A>, &mut A, ArrayViewMut1<'_, A>)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_fork_sort::{Sort1Ext, ndarray::arr1};
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1::<i32>(&[]).is_sorted());
	/// ```
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given comparator function.
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
	/// Checks if the elements of this array are sorted using the given key extraction
	/// function.
	fn is_sorted_by_key<F, K>(&self, f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd;
}

impl<A, S> Sort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_sort_unstable(&mut self)
	where
		A: Ord + Send,
		S: DataMut,
	{
		par_quick_sort(self.view_mut(), A::lt);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_sort_unstable_by<F>(&mut self, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
	{
		par_quick_sort(self.view_mut(), |a: &A, b: &A| compare(a, b) == Less)
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_sort_unstable_by_key<K, F>(&mut self, f: F)
	where
		A: Send,
		K: Ord,
		F: Fn(&A) -> K + Sync,
		S: DataMut,
	{
		par_quick_sort(self.view_mut(), |a: &A, b: &A| f(a).lt(&f(b)))
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_sort_unstable_in(&mut self, pool: &ThreadPool)
	where
		A: Ord + Send,
		S: DataMut,
	{
		let v = self.view_mut();
		pool.install(move || par_quick_sort(v, A::lt));
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_sort_unstable_by_in<F>(&mut self, pool: &ThreadPool, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Send + Sync,
		S: DataMut,
	{
		let v = self.view_mut();
		pool.install(move || par_quick_sort(v, |a: &A, b: &A| compare(a, b) == Less));
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_sort_unstable_by_key_in<K, F>(&mut self, pool: &ThreadPool, f: F)
	where
		A: Send,
		K: Ord,
		F: Fn(&A) -> K + Send + Sync,
		S: DataMut,
	{
		let v = self.view_mut();
		pool.install(move || par_quick_sort(v, |a: &A, b: &A| f(a).lt(&f(b))));
	}

	#[inline]
	fn sort_unstable(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		quick_sort(self.view_mut(), A::lt);
	}
	#[inline]
	fn sort_unstable_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		quick_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less)
	}
	#[inline]
	fn sort_unstable_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		quick_sort(self.view_mut(), &mut |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[inline]
	fn select_nth_unstable(
		&mut self,
		index: usize,
	) -> (ArrayViewMut1<'_, A>, &mut A, ArrayViewMut1<'_, A>)
	where
		A: Ord,
		S: DataMut,
	{
		partition_at_index(self.view_mut(), index, &mut A::lt)
	}
	#[inline]
	fn select_nth_unstable_by<F>(
		&mut self,
		index: usize,
		mut compare: F,
	) -> (ArrayViewMut1<'_, A>, &mut A, ArrayViewMut1<'_, A>)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		partition_at_index(self.view_mut(), index, &mut |a: &A, b: &A| {
			compare(a, b) == Less
		})
	}
	#[inline]
	fn select_nth_unstable_by_key<K, F>(
		&mut self,
		index: usize,
		mut f: F,
	) -> (ArrayViewMut1<'_, A>, &mut A, ArrayViewMut1<'_, A>)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		partition_at_index(self.view_mut(), index, &mut |a: &A, b: &A| f(a).lt(&f(b)))
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
	#[inline]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		is_sorted(self.view(), compare)
	}
	#[inline]
	fn is_sorted_by_key<F, K>(&self, mut f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd,
	{
		is_sorted(self.view(), |a, b| f(a).partial_cmp(&f(b)))
	}
}
