// SPDX-License-Identifier: MPL-2.0
//! Circular index arithmetic for the gallery.
//!
//! Both functions wrap at the boundaries instead of clamping, so browsing
//! never dead-ends. `len` must be non-zero; the controller guarantees it.

/// Index after `current`, wrapping from the last item to the first.
#[must_use]
pub fn next_index(current: usize, len: usize) -> usize {
    debug_assert!(len > 0, "navigation over an empty gallery");
    if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Index before `current`, wrapping from the first item to the last.
#[must_use]
pub fn previous_index(current: usize, len: usize) -> usize {
    debug_assert!(len > 0, "navigation over an empty gallery");
    if current == 0 {
        len - 1
    } else {
        current - 1
    }
}
