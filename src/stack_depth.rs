//! Tracks how deeply the quicksorts nest, per thread.

use std::cell::Cell;

thread_local! {
    static CURRENT: Cell<usize> = const { Cell::new(0) };
    static DEEPEST: Cell<usize> = const { Cell::new(0) };
}

pub(crate) struct Frame;

impl Drop for Frame {
    fn drop(&mut self) {
        CURRENT.with(|current| current.set(current.get() - 1));
    }
}

/// Marks entry into one more quicksort frame until the returned guard drops.
pub(crate) fn enter() -> Frame {
    let depth = CURRENT.with(|current| {
        current.set(current.get() + 1);
        current.get()
    });
    DEEPEST.with(|deepest| deepest.set(deepest.get().max(depth)));

    Frame
}

/// The deepest nesting seen since the last call.
pub(crate) fn take_deepest() -> usize {
    DEEPEST.with(|deepest| deepest.replace(0))
}
