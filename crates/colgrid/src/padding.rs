//! Process-wide default column padding.
//!
//! The padding actually used by a formatting call lives in
//! [`GridSpec`](crate::GridSpec); this module only holds the default that
//! new specs start from. The default is atomic, so reads and writes are
//! race-free, but changing it mid-render is still a coordination problem
//! for the caller: set it once at startup, before formatting begins.

use std::sync::atomic::{AtomicUsize, Ordering};

const DEFAULT_COLUMN_PADDING: usize = 2;

static COLUMN_PADDING: AtomicUsize = AtomicUsize::new(DEFAULT_COLUMN_PADDING);

/// Set the default number of blank characters between adjacent columns.
pub fn set_column_padding(value: usize) {
    COLUMN_PADDING.store(value, Ordering::Relaxed);
}

/// Current default column padding. Starts at 2.
pub fn column_padding() -> usize {
    COLUMN_PADDING.load(Ordering::Relaxed)
}
