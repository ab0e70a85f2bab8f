//! Stateful model tests
//!
//! Random operation sequences are run against a live heap through
//! [`HeapModel`], which checks the heap-order invariant and a reference
//! multiset after every applied step. A deliberately faulty heap shows that
//! the harness catches sift-down bugs and shrinks them to a short trace.

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, RngAlgorithm, TestError, TestRng, TestRunner};
use rust_min_heap::config::HarnessProfile;
use rust_min_heap::model::{HeapModel, HeapOp, Violation};
use rust_min_heap::ordered::FiniteF64;
use rust_min_heap::strategies::{
    check_model, check_model_with, finite_float, heap_ops, integer, minimal_failure, text,
};
use rust_min_heap::{Heap, HeapError, MinHeap};

fn profile() -> HarnessProfile {
    HarnessProfile::from_env_or_local()
}

/// Run a sequence and require every step to pass
fn test_model_run<T>(ops: Vec<HeapOp<T>>) -> Result<(), TestCaseError>
where
    T: Ord + Clone + std::fmt::Debug,
{
    let requested = ops.len();
    let model =
        HeapModel::<T>::run(ops).map_err(|failure| TestCaseError::fail(failure.to_string()))?;

    prop_assert!(model.history().len() <= requested);
    prop_assert_eq!(model.heap().len(), model.len());
    Ok(())
}

proptest! {
    #![proptest_config(profile().proptest_config())]

    #[test]
    fn test_integer_state_machine(ops in heap_ops(integer(), profile().max_steps())) {
        test_model_run(ops)?;
    }

    #[test]
    fn test_float_state_machine(ops in heap_ops(finite_float(), profile().max_steps())) {
        test_model_run(ops)?;
    }

    #[test]
    fn test_text_state_machine(ops in heap_ops(text(), profile().max_steps())) {
        test_model_run(ops)?;
    }

    /// Narrow domain so duplicates are common
    #[test]
    fn test_duplicate_heavy_state_machine(ops in heap_ops(0i8..4, profile().max_steps())) {
        test_model_run(ops)?;
    }

    /// Pick each operation from the enabled set, so no step is ever skipped
    #[test]
    fn test_step_by_step_driver(
        choices in prop::collection::vec(
            (any::<prop::sample::Index>(), integer()),
            0..=profile().max_steps(),
        )
    ) {
        let mut model: HeapModel<i64> = HeapModel::new();
        for (choice, candidate) in &choices {
            let enabled = model.enabled_ops(*candidate);
            prop_assert!(!enabled.is_empty());
            let op = choice.get(&enabled).clone();
            prop_assert!(model.is_enabled(&op));
            let applied = model
                .step(op)
                .map_err(|failure| TestCaseError::fail(failure.to_string()))?;
            prop_assert!(applied);
        }
        prop_assert_eq!(model.history().len(), choices.len());
        prop_assert_eq!(model.heap().len(), model.len());
    }

    /// 50 inserts then 50 deletes come out in non-decreasing order
    #[test]
    fn test_fifty_inserts_then_fifty_deletes(values in prop::collection::vec(integer(), 50)) {
        let mut heap = MinHeap::new();
        for value in &values {
            heap.insert(*value);
        }

        let mut popped = Vec::with_capacity(50);
        for _ in 0..50 {
            popped.push(heap.pop_minimum().map_err(|e| TestCaseError::fail(e.to_string()))?);
        }

        prop_assert!(popped.windows(2).all(|w| w[0] <= w[1]), "not sorted: {:?}", popped);
        prop_assert!(heap.is_empty());
        prop_assert_eq!(heap.pop_minimum(), Err(HeapError::EmptyHeap));
    }
}

#[test]
fn test_check_model_accepts_min_heap() {
    let result = check_model::<i64, MinHeap<i64>, _>(profile(), integer());
    assert!(result.is_ok(), "{result:?}");

    let result = check_model::<FiniteF64, MinHeap<FiniteF64>, _>(profile(), finite_float());
    assert!(result.is_ok(), "{result:?}");
}

/// Sift-down that compares against the left child only
#[derive(Debug)]
struct LeftChildHeap {
    data: Vec<i64>,
}

impl Heap<i64> for LeftChildHeap {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn from_vec(elements: Vec<i64>) -> Self {
        let mut heap = Self::new();
        for element in elements {
            heap.insert(element);
        }
        heap
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn insert(&mut self, element: i64) -> &mut Self {
        self.data.push(element);
        let mut index = self.data.len() - 1;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] >= self.data[parent] {
                break;
            }
            self.data.swap(index, parent);
            index = parent;
        }
        self
    }

    fn peek_minimum(&self) -> Option<&i64> {
        self.data.first()
    }

    fn pop_minimum(&mut self) -> Result<i64, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let min = self.data.swap_remove(0);
        let mut index = 0;
        loop {
            let left = 2 * index + 1;
            if left >= self.data.len() || self.data[left] >= self.data[index] {
                break;
            }
            self.data.swap(index, left);
            index = left;
        }
        Ok(min)
    }

    fn elements(&self) -> &[i64] {
        &self.data
    }
}

#[test]
fn test_faulty_heap_is_caught_and_shrunk() {
    let config = ProptestConfig {
        cases: 512,
        failure_persistence: None,
        ..ProptestConfig::default()
    };
    let mut runner =
        TestRunner::new_with_rng(config, TestRng::deterministic_rng(RngAlgorithm::ChaCha));

    let result =
        check_model_with::<i64, LeftChildHeap, _>(&mut runner, heap_ops(-1000i64..1000, 100));

    let minimal = match result {
        Err(TestError::Fail(_, minimal)) => minimal,
        other => panic!("expected the faulty heap to fail, got {other:?}"),
    };

    // Breaking the left-child rule needs a parent with two children after a delete
    let inserts = minimal.iter().filter(|op| matches!(op, HeapOp::Insert(_))).count();
    let deletes = minimal.iter().filter(|op| matches!(op, HeapOp::DeleteMin)).count();
    assert!(inserts >= 4, "minimal trace too short to fail: {minimal:?}");
    assert!(deletes >= 1, "minimal trace has no delete: {minimal:?}");
    assert!(minimal.len() <= 100);

    let failure =
        minimal_failure::<i64, LeftChildHeap>(&minimal).expect("shrunk trace must still fail");
    assert!(matches!(
        failure.violation,
        Violation::HeapOrder { .. } | Violation::WrongMinimum { .. } | Violation::WrongPopped { .. }
    ));
    assert_eq!(
        HeapModel::<i64, LeftChildHeap>::replay(&failure.trace).err(),
        Some(failure.clone())
    );

    // The same trace is fine on the real heap
    assert!(HeapModel::<i64>::replay(&failure.trace).is_ok());
}

#[test]
fn test_empty_scenario() {
    let mut model: HeapModel<i64> = HeapModel::new();

    assert_eq!(model.step(HeapOp::PeekMin), Ok(true));
    assert_eq!(model.step(HeapOp::DeleteMin), Ok(false));
    assert!(model.history() == [HeapOp::PeekMin]);
    assert_eq!(model.heap().peek_minimum(), None);
}
