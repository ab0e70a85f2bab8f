//! Stateful model checking for heaps
//!
//! A [`HeapModel`] drives one live heap through a sequence of [`HeapOp`]s.
//! Before each operation it evaluates the operation's precondition; after each
//! applied operation it re-checks the heap against:
//!
//! 1. the heap-order invariant over the backing sequence ([`check_heap_order`]),
//! 2. a reference multiset of the elements that should be present, which
//!    determines the expected minimum, the expected popped value and the size.
//!
//! Operations whose precondition is false (`DeleteMin` on an empty heap) are
//! skipped and left out of the history, so any subsequence of a generated
//! operation list is again a valid run. That is what lets a shrinker drop
//! operations freely while searching for a minimal failing trace.
//!
//! ```rust
//! use rust_min_heap::model::{HeapModel, HeapOp};
//!
//! let ops = vec![HeapOp::Insert(3), HeapOp::DeleteMin, HeapOp::DeleteMin, HeapOp::PeekMin];
//! let model = HeapModel::<i32>::run(ops).unwrap();
//!
//! // The second DeleteMin found the heap empty and was skipped
//! assert_eq!(model.history().len(), 3);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::binary::MinHeap;
use crate::traits::{Heap, HeapError};

/// One step of a stateful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapOp<T> {
    /// Insert the value
    Insert(T),
    /// Delete the minimum; only enabled on a non-empty heap
    DeleteMin,
    /// Peek at the minimum; enabled in every state
    PeekMin,
}

impl<T: fmt::Debug> fmt::Display for HeapOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOp::Insert(value) => write!(f, "insert({value:?})"),
            HeapOp::DeleteMin => f.write_str("delete_minimum()"),
            HeapOp::PeekMin => f.write_str("peek_minimum()"),
        }
    }
}

/// A way in which a heap disagreed with its model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation<T: fmt::Debug> {
    /// A parent compares greater than one of its children
    #[error("heap order broken: elements[{parent}] = {parent_value:?} > elements[{child}] = {child_value:?}")]
    HeapOrder {
        parent: usize,
        child: usize,
        parent_value: T,
        child_value: T,
    },
    /// `peek_minimum` disagreed with the reference minimum
    #[error("peek_minimum returned {actual:?}, expected {expected:?}")]
    WrongMinimum {
        expected: Option<T>,
        actual: Option<T>,
    },
    /// `pop_minimum` removed something other than the reference minimum
    #[error("pop_minimum removed {actual:?}, expected {expected:?}")]
    WrongPopped { expected: T, actual: T },
    /// `len` disagreed with the number of live elements
    #[error("len() is {actual}, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    /// The heap refused a delete although the model holds elements
    #[error("delete rejected on a heap the model considers non-empty: {0}")]
    DeleteRejected(HeapError),
}

/// A failed stateful run: the step that broke and the trace that led to it
///
/// `trace` lists every applied operation up to and including the failing one,
/// and can be fed back to [`HeapModel::replay`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step {step} ({op}) violated the heap model: {violation}; trace: {trace:?}")]
pub struct ModelFailure<T: fmt::Debug> {
    /// Index of the failing operation within `trace`
    pub step: usize,
    /// The failing operation
    pub op: HeapOp<T>,
    /// What went wrong
    pub violation: Violation<T>,
    /// Applied operations, in order
    pub trace: Vec<HeapOp<T>>,
}

/// Check the heap-order invariant over a backing sequence
///
/// Returns the first parent/child pair, in index order, where the parent
/// compares greater than the child.
pub fn check_heap_order<T: Ord + Clone + fmt::Debug>(
    elements: &[T],
) -> Result<(), Violation<T>> {
    for child in 1..elements.len() {
        let parent = (child - 1) / 2;
        if elements[parent] > elements[child] {
            return Err(Violation::HeapOrder {
                parent,
                child,
                parent_value: elements[parent].clone(),
                child_value: elements[child].clone(),
            });
        }
    }
    Ok(())
}

/// A live heap paired with a reference multiset and the history of a run
#[derive(Debug)]
pub struct HeapModel<T: Ord, H = MinHeap<T>> {
    heap: H,
    /// Element -> multiplicity
    reference: BTreeMap<T, usize>,
    len: usize,
    history: Vec<HeapOp<T>>,
}

impl<T, H> HeapModel<T, H>
where
    T: Ord + Clone + fmt::Debug,
    H: Heap<T>,
{
    /// Starts a run from an empty heap
    pub fn new() -> Self {
        Self {
            heap: H::new(),
            reference: BTreeMap::new(),
            len: 0,
            history: Vec::new(),
        }
    }

    /// Applies every operation in order, stopping at the first failure
    pub fn run<I>(ops: I) -> Result<Self, ModelFailure<T>>
    where
        I: IntoIterator<Item = HeapOp<T>>,
    {
        let mut model = Self::new();
        for op in ops {
            model.step(op)?;
        }
        Ok(model)
    }

    /// Re-executes a recorded trace, e.g. the one carried by a [`ModelFailure`]
    pub fn replay(trace: &[HeapOp<T>]) -> Result<Self, ModelFailure<T>> {
        Self::run(trace.iter().cloned())
    }

    /// Whether the operation's precondition holds in the current state
    pub fn is_enabled(&self, op: &HeapOp<T>) -> bool {
        match op {
            HeapOp::DeleteMin => self.len > 0,
            HeapOp::Insert(_) | HeapOp::PeekMin => true,
        }
    }

    /// The operations enabled in the current state, given a candidate insert value
    pub fn enabled_ops(&self, candidate: T) -> Vec<HeapOp<T>> {
        [HeapOp::Insert(candidate), HeapOp::DeleteMin, HeapOp::PeekMin]
            .into_iter()
            .filter(|op| self.is_enabled(op))
            .collect()
    }

    /// Applies one operation and re-checks the invariants
    ///
    /// Returns `Ok(false)` when the precondition was false and the operation
    /// was skipped, `Ok(true)` when it was applied and every check passed.
    pub fn step(&mut self, op: HeapOp<T>) -> Result<bool, ModelFailure<T>> {
        if !self.is_enabled(&op) {
            debug!(%op, "precondition false, skipping");
            return Ok(false);
        }

        trace!(step = self.history.len(), %op, len = self.len, "applying");
        self.history.push(op.clone());

        let outcome = self.apply(&op).and_then(|()| self.check_invariants());
        match outcome {
            Ok(()) => Ok(true),
            Err(violation) => {
                let failure = ModelFailure {
                    step: self.history.len() - 1,
                    op,
                    violation,
                    trace: self.history.clone(),
                };
                debug!(%failure, "model check failed");
                Err(failure)
            }
        }
    }

    fn apply(&mut self, op: &HeapOp<T>) -> Result<(), Violation<T>> {
        match op {
            HeapOp::Insert(value) => {
                self.heap.insert(value.clone());
                *self.reference.entry(value.clone()).or_insert(0) += 1;
                self.len += 1;
            }
            HeapOp::DeleteMin => {
                let expected = self.remove_reference_minimum();
                let actual = self.heap.pop_minimum().map_err(Violation::DeleteRejected)?;
                if let Some(expected) = expected {
                    if actual != expected {
                        return Err(Violation::WrongPopped { expected, actual });
                    }
                }
            }
            HeapOp::PeekMin => {
                let before = self.heap.len();
                let first = self.heap.peek_minimum().cloned();
                let second = self.heap.peek_minimum().cloned();
                if first != second {
                    return Err(Violation::WrongMinimum {
                        expected: first,
                        actual: second,
                    });
                }
                if self.heap.len() != before {
                    return Err(Violation::SizeMismatch {
                        expected: before,
                        actual: self.heap.len(),
                    });
                }
            }
        }
        Ok(())
    }

    fn remove_reference_minimum(&mut self) -> Option<T> {
        let mut entry = self.reference.first_entry()?;
        *entry.get_mut() -= 1;
        let value = if *entry.get() == 0 {
            entry.remove_entry().0
        } else {
            entry.key().clone()
        };
        self.len -= 1;
        Some(value)
    }

    /// Compares the live heap against the invariants and the reference model
    pub fn check_invariants(&self) -> Result<(), Violation<T>> {
        if self.heap.len() != self.len {
            return Err(Violation::SizeMismatch {
                expected: self.len,
                actual: self.heap.len(),
            });
        }

        // An empty heap has no minimum to compare
        if self.heap.is_empty() {
            return Ok(());
        }

        check_heap_order(self.heap.elements())?;

        let expected = self.reference.keys().next();
        let actual = self.heap.peek_minimum();
        if expected != actual {
            return Err(Violation::WrongMinimum {
                expected: expected.cloned(),
                actual: actual.cloned(),
            });
        }
        Ok(())
    }

    /// Operations applied so far, skipped ones excluded
    pub fn history(&self) -> &[HeapOp<T>] {
        &self.history
    }

    /// The live heap
    pub fn heap(&self) -> &H {
        &self.heap
    }

    /// Number of elements the model expects the heap to hold
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the model expects the heap to be empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T, H> Default for HeapModel<T, H>
where
    T: Ord + Clone + fmt::Debug,
    H: Heap<T>,
{
    fn default() -> Self {
        Self::new()
    }
}
