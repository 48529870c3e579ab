// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Storage range primitives: zero a span of memory so the optimizer cannot
//! drop the stores, and verify afterwards that the span reads back as zero.
//!
//! Everything in this crate works on raw extents. Deciding *which* extents a
//! value owns is the job of `secutil-wipe`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

#[cfg(test)]
mod tests;

/// Fills the storage range `[ptr, ptr + len)` with zeroes.
///
/// Uses `write_bytes` (memset) followed by a volatile read of the first byte
/// and a compiler fence, so the stores survive dead-store elimination even
/// when the memory is released right after.
///
/// # Safety
///
/// - `ptr` must be valid for writes of `len` bytes.
/// - The range must not be read-only memory (string literals, `.rodata`).
/// - Whatever lives in the range must accept an all-zero bit pattern, or
///   must not be read again as its original type.
///
/// # Example
///
/// ```
/// use secutil_util::zero_range;
///
/// let mut buf = [0xdbu8; 16];
/// unsafe { zero_range(buf.as_mut_ptr(), buf.len()) };
/// assert!(buf.iter().all(|&b| b == 0));
/// ```
#[inline(always)]
pub unsafe fn zero_range(ptr: *mut u8, len: usize) {
    if len == 0 {
        return;
    }

    // SAFETY: the caller guarantees `ptr` is writable for `len` bytes.
    unsafe {
        core::ptr::write_bytes(ptr, 0, len);
        core::ptr::read_volatile(ptr);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Zeroes every byte occupied by `value`, padding included.
///
/// Works for unsized values as well (`str`, `[T]`, trait objects) since the
/// extent is taken from `size_of_val`.
///
/// # Safety
///
/// All-zero must be a valid bit pattern for `T`, and `T` must not own any
/// resource (heap pointer, handle) whose loss would break its `Drop`.
#[inline(always)]
pub unsafe fn zero_value_bytes<T: ?Sized>(value: &mut T) {
    let len = core::mem::size_of_val(value);
    let ptr = value as *mut T as *mut u8;

    // SAFETY: `ptr` comes from a unique borrow spanning exactly `len` bytes.
    unsafe { zero_range(ptr, len) }
}

/// Zeroes a single primitive value with a volatile write.
///
/// Works for every primitive where all-zeros is a valid representation:
/// integers become `0`, `bool` becomes `false`, floats become `0.0`, `char`
/// becomes `'\0'`.
///
/// # Example
///
/// ```
/// use secutil_util::wipe_primitive;
///
/// let mut pin = 4242u32;
/// wipe_primitive(&mut pin);
/// assert_eq!(pin, 0);
///
/// let mut flag = true;
/// wipe_primitive(&mut flag);
/// assert!(!flag);
/// ```
#[inline(always)]
pub fn wipe_primitive<T: Copy + Default>(val: &mut T) {
    // SAFETY: `val` is a unique borrow, `T::default()` is a valid value.
    unsafe {
        core::ptr::write_volatile(val, T::default());
    }
    compiler_fence(Ordering::SeqCst);
}

/// Bulk-zeroes the elements of a slice as raw bytes.
///
/// Only the `[0, len)` elements are touched; a slice has no spare capacity.
///
/// # Safety
///
/// Same contract as [`zero_value_bytes`]: all-zero must be a valid `T` and
/// `T` must not own resources.
///
/// # Example
///
/// ```
/// use secutil_util::wipe_slice;
///
/// let mut words = [0xDEADBEEFu32; 4];
/// unsafe { wipe_slice(&mut words) };
/// assert!(words.iter().all(|&w| w == 0));
/// ```
#[inline(always)]
pub unsafe fn wipe_slice<T>(slice: &mut [T]) {
    // SAFETY: forwarded contract.
    unsafe { zero_value_bytes(slice) }
}

/// Bulk-zeroes the **whole allocation** of a `Vec`, from index 0 to
/// `capacity`, leaving `len` and `capacity` untouched.
///
/// Memory between `len` and `capacity` may still hold bytes from before a
/// `truncate()` or `clear()`; those are scrubbed too.
///
/// # Safety
///
/// Same contract as [`zero_value_bytes`] for the element type.
///
/// # Example
///
/// ```
/// use secutil_util::{is_vec_fully_zeroed, wipe_vec_capacity};
///
/// let mut vec = vec![0xdbu8, 0xdb];
/// vec.truncate(1);
///
/// unsafe { wipe_vec_capacity(&mut vec) };
///
/// assert_eq!(vec.len(), 1);
/// assert_eq!(vec.capacity(), 2);
/// assert!(is_vec_fully_zeroed(&vec));
/// ```
#[inline(always)]
pub unsafe fn wipe_vec_capacity<T>(vec: &mut Vec<T>) {
    let byte_len = vec.capacity() * core::mem::size_of::<T>();

    // SAFETY: the allocation is valid for `capacity` elements.
    unsafe { zero_range(vec.as_mut_ptr() as *mut u8, byte_len) }
}

/// Zeroes only the spare capacity of a `Vec` (`[len, capacity)`), leaving the
/// live elements untouched.
///
/// Used once elements holding their own pointers have been wiped one by one
/// and must stay structurally valid until they are dropped.
///
/// # Example
///
/// ```
/// use secutil_util::{is_spare_capacity_zeroed, wipe_spare_capacity};
///
/// let mut vec = vec![0xFFu8; 64];
/// vec.truncate(8);
///
/// wipe_spare_capacity(&mut vec);
///
/// assert!(vec.iter().all(|&b| b == 0xFF));
/// assert!(is_spare_capacity_zeroed(&vec));
/// ```
#[inline(always)]
pub fn wipe_spare_capacity<T>(vec: &mut Vec<T>) {
    let spare = vec.capacity() - vec.len();
    if spare == 0 {
        return;
    }

    let byte_len = spare * core::mem::size_of::<T>();
    // SAFETY: `[len, capacity)` is owned, uninitialized storage of the Vec,
    // so any bit pattern is fine there.
    unsafe {
        let spare_ptr = vec.as_mut_ptr().add(vec.len()) as *mut u8;
        zero_range(spare_ptr, byte_len);
    }
}

/// Returns `true` if every byte of the slice is zero.
///
/// ```
/// use secutil_util::is_slice_zeroed;
///
/// assert!(is_slice_zeroed(&[0u8; 8]));
/// assert!(!is_slice_zeroed(&[0u8, 1, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroed(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if the whole allocation of a `Vec<u8>`, spare capacity
/// included, is zero.
#[inline(never)]
pub fn is_vec_fully_zeroed(vec: &Vec<u8>) -> bool {
    let cap = vec.capacity();
    let base = vec.as_ptr();

    // SAFETY: `u8` storage is valid for reads up to `capacity`; bytes past
    // `len` were either written earlier or zeroed by this crate.
    (0..cap).all(|i| unsafe { *base.add(i) == 0 })
}

/// Returns `true` if the spare capacity of a `Vec<T>` is zero at the byte
/// level. No `T` is constructed from the spare bytes.
#[inline(never)]
pub fn is_spare_capacity_zeroed<T>(vec: &Vec<T>) -> bool {
    let len = vec.len();
    let cap = vec.capacity();

    if cap == len {
        return true;
    }

    let len_bytes = len * core::mem::size_of::<T>();
    let cap_bytes = cap * core::mem::size_of::<T>();

    // SAFETY: the range lies inside the Vec's allocation.
    unsafe {
        let spare_ptr = vec.as_ptr().cast::<u8>().add(len_bytes);
        core::slice::from_raw_parts(spare_ptr, cap_bytes - len_bytes)
            .iter()
            .all(|&b| b == 0)
    }
}
