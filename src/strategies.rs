//! Proptest strategies for heaps and heap operations
//!
//! Generators are plain [`Strategy`] values, so they compose with `prop_map`,
//! `prop_filter` and friends, and every generated value shrinks:
//!
//! - element domains: [`integer`], [`finite_float`], [`moderate_float`], [`text`]
//! - heaps: [`heap`] (possibly empty), [`nonempty_heap`]
//! - stateful runs: [`heap_ops`], checked with [`check_model`]
//! - records: [`person`], [`adult`], [`kid`], [`family`], [`people`]
//!
//! Floating-point elements are drawn through [`FiniteF64`], so NaN and the
//! infinities never reach a heap.

use std::fmt;

use proptest::collection::{SizeRange, vec};
use proptest::prelude::*;
use proptest::test_runner::{TestError, TestRunner};
use tracing::debug;

use crate::binary::MinHeap;
use crate::config::HarnessProfile;
use crate::model::{HeapModel, HeapOp, ModelFailure};
use crate::ordered::FiniteF64;
use crate::people::{AGE_OF_MAJORITY, MAX_KID_AGE, People, Person};
use crate::traits::Heap;

/// Largest sequence drawn for a generated heap
pub const MAX_HEAP_LEN: usize = 64;

/// Any `i64`
pub fn integer() -> impl Strategy<Value = i64> {
    any::<i64>()
}

/// Any finite `f64`, including subnormals and both zeros
pub fn finite_float() -> impl Strategy<Value = FiniteF64> {
    (prop::num::f64::NORMAL
        | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO
        | prop::num::f64::POSITIVE
        | prop::num::f64::NEGATIVE)
        .prop_filter_map("finite", |x| FiniteF64::new(x).ok())
}

/// Finite `f64` values small enough that `x - 1.0 < x`
pub fn moderate_float() -> impl Strategy<Value = FiniteF64> {
    (-1.0e12..1.0e12f64).prop_filter_map("finite", |x| FiniteF64::new(x).ok())
}

/// Short strings of arbitrary unicode
pub fn text() -> impl Strategy<Value = String> {
    ".{0,16}"
}

/// A heap built from a sequence of 0 to [`MAX_HEAP_LEN`] elements
pub fn heap<S>(element: S) -> impl Strategy<Value = MinHeap<S::Value>>
where
    S: Strategy,
    S::Value: Ord,
{
    heap_sized(element, 0..=MAX_HEAP_LEN)
}

/// A heap holding at least one element
pub fn nonempty_heap<S>(element: S) -> impl Strategy<Value = MinHeap<S::Value>>
where
    S: Strategy,
    S::Value: Ord,
{
    heap_sized(element, 1..=MAX_HEAP_LEN)
}

/// A heap built from a sequence whose length is drawn from `size`
pub fn heap_sized<S>(
    element: S,
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = MinHeap<S::Value>>
where
    S: Strategy,
    S::Value: Ord,
{
    vec(element, size).prop_map(MinHeap::from_vec)
}

/// A single heap operation
///
/// Inserts are weighted above deletes so runs tend to grow deep enough for
/// sift-down to cross several levels.
pub fn heap_op<S>(element: S) -> impl Strategy<Value = HeapOp<S::Value>>
where
    S: Strategy,
    S::Value: Clone + fmt::Debug,
{
    prop_oneof![
        3 => element.prop_map(HeapOp::Insert),
        2 => Just(HeapOp::DeleteMin),
        1 => Just(HeapOp::PeekMin),
    ]
}

/// A stateful run of up to `max_steps` operations
///
/// `DeleteMin` is generated in any state; [`HeapModel`] skips it while the
/// heap is empty.
pub fn heap_ops<S>(element: S, max_steps: usize) -> impl Strategy<Value = Vec<HeapOp<S::Value>>>
where
    S: Strategy,
    S::Value: Clone + fmt::Debug,
{
    vec(heap_op(element), 0..=max_steps)
}

/// Runs the heap model over generated operation sequences
///
/// On failure the runner shrinks the sequence, and the returned error carries
/// the minimal failing trace as reported by [`HeapModel`].
pub fn check_model_with<T, H, S>(
    runner: &mut TestRunner,
    ops: S,
) -> Result<(), TestError<Vec<HeapOp<T>>>>
where
    T: Ord + Clone + fmt::Debug,
    H: Heap<T>,
    S: Strategy<Value = Vec<HeapOp<T>>>,
{
    let result = runner.run(&ops, |ops| {
        HeapModel::<T, H>::run(ops)
            .map(drop)
            .map_err(|failure| TestCaseError::fail(failure.to_string()))
    });

    if let Err(TestError::Fail(reason, minimal)) = &result {
        let shrunk = minimal_failure::<T, H>(minimal);
        debug!(%reason, steps = minimal.len(), ?shrunk, "model check shrunk to minimal trace");
    }
    result
}

/// Runs the heap model with a runner configured by `profile`
pub fn check_model<T, H, S>(
    profile: HarnessProfile,
    element: S,
) -> Result<(), TestError<Vec<HeapOp<T>>>>
where
    T: Ord + Clone + fmt::Debug,
    H: Heap<T>,
    S: Strategy<Value = T>,
{
    let mut runner = TestRunner::new(profile.proptest_config());
    check_model_with::<T, H, _>(&mut runner, heap_ops(element, profile.max_steps()))
}

/// Replays a shrunk input, returning the failure with its applied trace
pub fn minimal_failure<T, H>(ops: &[HeapOp<T>]) -> Option<ModelFailure<T>>
where
    T: Ord + Clone + fmt::Debug,
    H: Heap<T>,
{
    HeapModel::<T, H>::replay(ops).err()
}

/// Oldest age drawn for a generated person
pub const MAX_AGE: u32 = 120;

/// A capitalized name
pub fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,11}"
}

/// Anyone aged 0 to [`MAX_AGE`]
pub fn person() -> impl Strategy<Value = Person> {
    (name(), name(), 0..=MAX_AGE).prop_map(|(first, last, age)| Person::new(first, last, age))
}

/// Someone aged [`AGE_OF_MAJORITY`] to [`MAX_AGE`]
pub fn adult() -> impl Strategy<Value = Person> {
    (name(), name(), AGE_OF_MAJORITY..=MAX_AGE)
        .prop_map(|(first, last, age)| Person::new(first, last, age))
}

/// Someone aged [`MAX_KID_AGE`] or younger
pub fn kid() -> impl Strategy<Value = Person> {
    (name(), name(), 0..=MAX_KID_AGE).prop_map(|(first, last, age)| Person::new(first, last, age))
}

/// Two adults and up to five kids, all sharing `last_name`
pub fn family(last_name: String) -> impl Strategy<Value = People> {
    (adult(), adult(), vec(kid(), 0..=5)).prop_map(move |(parent1, parent2, kids)| {
        [parent1, parent2]
            .into_iter()
            .chain(kids)
            .map(|p| p.with_last_name(last_name.as_str()))
            .collect()
    })
}

/// A family under a generated last name
pub fn any_family() -> impl Strategy<Value = People> {
    name().prop_flat_map(family)
}

/// Any number of unrelated people
pub fn people() -> impl Strategy<Value = People> {
    vec(person(), 0..=32).prop_map(People::from)
}
