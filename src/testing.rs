// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-only element types that observe their own lifetimes and can be told
//! to panic on construction or clone.

// Std imports
use std::{cell::Cell, rc::Rc};

#[derive(Default)]
struct Counts {
    created: Cell<usize>,
    dropped: Cell<usize>,
    // Number of clones allowed before `clone` panics; `None` = unlimited.
    clone_budget: Cell<Option<usize>>,
}

/// Hands out [`DropCounter`]s and tallies how many were created and dropped.
#[derive(Clone, Default)]
pub(crate) struct Tracker {
    counts: Rc<Counts>,
}

impl Tracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn make(&self, value: i32) -> DropCounter {
        self.counts.created.set(self.counts.created.get() + 1);
        DropCounter {
            value,
            counts: Rc::clone(&self.counts),
        }
    }

    /// Like [`make`](Tracker::make), but panics once `budget` values have been made.
    pub(crate) fn make_or_panic(&self, value: i32, budget: usize) -> DropCounter {
        if self.created() >= budget {
            panic!("constructor budget exhausted");
        }
        self.make(value)
    }

    /// Lets the next `n` clones succeed; the one after that panics.
    pub(crate) fn fail_clone_after(&self, n: usize) {
        self.counts.clone_budget.set(Some(n));
    }

    pub(crate) fn created(&self) -> usize {
        self.counts.created.get()
    }

    pub(crate) fn dropped(&self) -> usize {
        self.counts.dropped.get()
    }

    pub(crate) fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

/// An `i32` that reports its construction, clones and drop to a [`Tracker`].
#[derive(Debug)]
pub(crate) struct DropCounter {
    value: i32,
    counts: Rc<Counts>,
}

impl DropCounter {
    pub(crate) fn value(&self) -> i32 {
        self.value
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Clone for DropCounter {
    fn clone(&self) -> Self {
        if let Some(budget) = self.counts.clone_budget.get() {
            if budget == 0 {
                panic!("clone budget exhausted");
            }
            self.counts.clone_budget.set(Some(budget - 1));
        }
        self.counts.created.set(self.counts.created.get() + 1);
        Self {
            value: self.value,
            counts: Rc::clone(&self.counts),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.counts.dropped.set(self.counts.dropped.get() + 1);
    }
}

impl std::fmt::Debug for Counts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Counts")
            .field("created", &self.created.get())
            .field("dropped", &self.dropped.get())
            .finish()
    }
}

/// Values of a [`crate::HeapVec<DropCounter>`] as plain integers.
pub(crate) fn values(v: &[DropCounter]) -> std::vec::Vec<i32> {
    v.iter().map(DropCounter::value).collect()
}

/// Runs `f`, expecting it to panic.
pub(crate) fn expect_panic<F: FnOnce()>(f: F) {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    assert!(result.is_err(), "expected a panic");
}
