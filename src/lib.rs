//! Binary Min-Heap with a Property-Based and Stateful Test Harness
//!
//! This crate provides an array-backed binary min-heap together with the
//! machinery used to verify it: proptest generators for elements, heaps and
//! operation sequences, and a model checker that replays random runs against a
//! reference multiset and shrinks failures to a minimal trace.
//!
//! # Features
//!
//! - **[`MinHeap`]**: O(n) construction, O(log n) insert and delete-minimum, O(1) peek
//! - **[`model`]**: stateful checking with preconditions, invariants and replayable traces
//! - **[`strategies`]** (feature `harness`): composable, shrinking generators
//! - **[`config`]** (feature `harness`): `local` / `ci` profiles selected by `CI_ROLE`
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::{Heap, HeapError, MinHeap};
//!
//! let mut heap = MinHeap::from_vec(vec![5, 3, 8]);
//! heap.insert(1);
//!
//! assert_eq!(heap.peek_minimum(), Some(&1));
//! assert_eq!(heap.pop_minimum(), Ok(1));
//!
//! let mut empty: MinHeap<i32> = MinHeap::new();
//! assert_eq!(empty.delete_minimum().err(), Some(HeapError::EmptyHeap));
//! ```

pub mod binary;
#[cfg(feature = "harness")]
pub mod config;
pub mod model;
pub mod ordered;
pub mod people;
#[cfg(feature = "harness")]
pub mod strategies;
pub mod traits;

// Re-export the main types for convenience
pub use binary::MinHeap;
pub use traits::{Heap, HeapError, IncomparableElementError};
