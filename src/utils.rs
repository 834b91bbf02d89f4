use alloc::boxed::Box;
use core::{alloc::Layout, mem::MaybeUninit};

/// Marks the current branch as unlikely to be taken.
#[inline(always)]
#[cold]
pub(crate) const fn cold_path() {}

/// Returns `true` if a block of `capacity` slots of `T` can be allocated.
#[inline(always)]
pub(crate) fn layout_fits<T>(capacity: usize) -> bool {
    Layout::array::<T>(capacity).is_ok()
}

/// Allocates a block of `capacity` uninitialized slots.
///
/// The caller must have checked [`layout_fits`] first, otherwise this panics.
#[inline]
pub(crate) fn alloc_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    Box::new_uninit_slice(capacity)
}

/// Capacity to grow to when `len` slots are full.
///
/// `floor(len * 1.5)`, but never less than `len + 1`.
///
/// # Panics
/// Panics if the result overflows `usize`.
#[inline]
pub(crate) const fn grown_capacity(len: usize) -> usize {
    let Some(grown) = len.checked_add(len >> 1) else {
        panic!("capacity overflow");
    };
    if grown > len { grown } else { len + 1 }
}
