//! Binary min-heap implementation
//!
//! An array-backed binary min-heap over any totally ordered element type.
//! The tree is implicit: the children of index `i` live at `2i + 1` and
//! `2i + 2`, and its parent at `(i - 1) / 2`.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `from_vec`       | O(n)       |
//! | `insert`         | O(log n)   |
//! | `pop_minimum`    | O(log n)   |
//! | `delete_minimum` | O(log n)   |
//! | `peek_minimum`   | O(1)       |
//!
//! # Aliasing
//!
//! Operations mutate the heap in place and hand back `&mut Self`. There is no
//! copy-on-write: any code holding the heap observes the new state. Clone the
//! heap first to keep an older version around.
//!
//! # Example
//!
//! ```rust
//! use rust_min_heap::{Heap, MinHeap};
//!
//! let mut heap = MinHeap::from_vec(vec![3, 1, 4, 1, 5]);
//!
//! assert_eq!(heap.peek_minimum(), Some(&1));
//! assert_eq!(heap.pop_minimum(), Ok(1));
//! assert_eq!(heap.pop_minimum(), Ok(1));
//! assert_eq!(heap.pop_minimum(), Ok(3));
//! ```

use crate::traits::{Heap, HeapError};

/// A binary min-heap
///
/// The element type is fixed per heap instance and must be [`Ord`], so
/// elements that cannot be compared with one another never share a heap.
/// Floating-point values go through [`FiniteF64`](crate::ordered::FiniteF64).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinHeap<T: Ord> {
    /// The heap data, kept in heap order between public calls
    data: Vec<T>,
}

impl<T: Ord> Heap<T> for MinHeap<T> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn from_vec(elements: Vec<T>) -> Self {
        let mut heap = Self { data: elements };
        heap.heapify();
        heap
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, element: T) -> &mut Self {
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
        self
    }

    fn peek_minimum(&self) -> Option<&T> {
        self.data.first()
    }

    fn pop_minimum(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        // Moves the last element into the root slot
        let min = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(min)
    }

    fn elements(&self) -> &[T] {
        &self.data
    }
}

impl<T: Ord> MinHeap<T> {
    /// Consumes the heap, returning its elements in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(min) = self.pop_minimum() {
            sorted.push(min);
        }
        sorted
    }

    /// Consumes the heap, returning the backing vector in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Restore the heap property over the whole vector
    ///
    /// Parents are visited from the last one back to the root so every
    /// subtree is already ordered when its parent is sifted.
    fn heapify(&mut self) {
        let len = self.data.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}
