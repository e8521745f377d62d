//! Parallel variants of the partition sort, built on [`rayon`]'s fork/join scheduler.

pub mod partition;
pub mod quick_sort;
