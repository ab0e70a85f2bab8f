//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] contract shared by every min-heap in this
//! crate and by the model checker in [`crate::model`]:
//!
//! - `insert` adds an element and returns the heap for chaining
//! - `peek_minimum` returns the minimum without removing it
//! - `delete_minimum` / `pop_minimum` remove the minimum, failing on an empty heap
//!
//! Unlike `std::collections::BinaryHeap`, these heaps are min-heaps and removal
//! from an empty heap is an error rather than `None`.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `delete_minimum` or `pop_minimum` was called on a heap with no elements
    #[error("cannot delete the minimum of an empty heap")]
    EmptyHeap,
}

/// A value offered as a heap element that does not take part in a total order
///
/// Heaps themselves never see such values: element types are fixed statically
/// to `T: Ord`, so this error is produced at the boundary where raw values are
/// turned into ordered ones (see [`FiniteF64::new`](crate::ordered::FiniteF64::new)).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{value} is not a finite number and cannot be ordered")]
pub struct IncomparableElementError {
    /// The rejected value
    pub value: f64,
}

/// Base trait for min-heap data structures
///
/// All operations mutate the receiver in place. `insert` and `delete_minimum`
/// return `&mut Self` so calls can be chained; the returned reference is the
/// same heap, not a copy. Callers that need to keep an earlier state must
/// `clone()` it before mutating.
///
/// Implementations carry no interior mutability: sharing one heap between
/// threads requires external synchronization (e.g. a `Mutex`).
///
/// # Example
///
/// ```rust
/// use rust_min_heap::{Heap, MinHeap};
///
/// let mut heap = MinHeap::from_vec(vec![3, 1, 2]);
/// heap.insert(0).insert(5);
///
/// assert_eq!(heap.peek_minimum(), Some(&0));
/// assert_eq!(heap.pop_minimum(), Ok(0));
/// assert_eq!(heap.delete_minimum().map(|h| h.len()), Ok(3));
/// ```
pub trait Heap<T: Ord>: Sized {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Builds a heap from an arbitrary sequence
    ///
    /// # Time Complexity
    /// O(n)
    fn from_vec(elements: Vec<T>) -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element and returns the heap
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, element: T) -> &mut Self;

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_minimum(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no elements.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_minimum(&mut self) -> Result<T, HeapError>;

    /// Removes the minimum element and returns the heap
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no elements. The heap
    /// is left untouched in that case.
    fn delete_minimum(&mut self) -> Result<&mut Self, HeapError> {
        self.pop_minimum()?;
        Ok(self)
    }

    /// Read-only view of the backing sequence, in heap (not sorted) order
    fn elements(&self) -> &[T];
}
