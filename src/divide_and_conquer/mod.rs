//! Divide-and-conquer exercises.

pub mod binary_search;
