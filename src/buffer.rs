//! Owned slot storage.

use alloc::vec::Vec;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

use crate::error::AllocationError;

/// A heap buffer of `capacity` slots which may or may not hold a value.
///
/// The buffer never drops slot contents: which slots are live is known only
/// to the owner, who must drop them before the buffer goes away. Dropping a
/// `RawBuffer` only releases the allocation.
pub struct RawBuffer<T> {
    slots: Vec<MaybeUninit<T>>,
}

impl<T> RawBuffer<T> {
    /// A buffer with no slots and no allocation.
    #[inline]
    pub const fn empty() -> RawBuffer<T> {
        RawBuffer { slots: Vec::new() }
    }

    /// Allocates exactly `capacity` slots, reporting failure instead of
    /// aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<RawBuffer<T>, AllocationError> {
        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            tracing::debug!(requested = capacity, "slot allocation refused");
            return Err(AllocationError::new(capacity));
        }
        // SAFETY: the capacity was just reserved and `MaybeUninit` needs no
        // initialization.
        unsafe { slots.set_len(capacity) };
        Ok(RawBuffer { slots })
    }

    /// Allocates exactly `capacity` slots, aborting on allocation failure
    /// like `Vec::with_capacity`.
    pub fn with_capacity(capacity: usize) -> RawBuffer<T> {
        let mut slots = Vec::with_capacity(capacity);
        // SAFETY: as above.
        unsafe { slots.set_len(capacity) };
        RawBuffer { slots }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn ptr(&self) -> *const T {
        self.slots.as_ptr() as *const T
    }

    #[inline]
    pub fn ptr_mut(&mut self) -> *mut T {
        self.slots.as_mut_ptr() as *mut T
    }

    /// Moves the value out of slot `offset`, leaving it logically empty.
    ///
    /// Caller guarantees the slot is live.
    #[inline]
    pub unsafe fn read(&self, offset: usize) -> T {
        debug_assert!(offset < self.capacity());
        ptr::read(self.ptr().add(offset))
    }

    /// Caller guarantees the slot is free; a live value there would leak.
    #[inline]
    pub unsafe fn write(&mut self, offset: usize, element: T) {
        debug_assert!(offset < self.capacity());
        ptr::write(self.ptr_mut().add(offset), element);
    }

    #[inline]
    pub unsafe fn get(&self, offset: usize) -> &T {
        debug_assert!(offset < self.capacity());
        &*self.ptr().add(offset)
    }

    #[inline]
    pub unsafe fn get_mut(&mut self, offset: usize) -> &mut T {
        debug_assert!(offset < self.capacity());
        &mut *self.ptr_mut().add(offset)
    }

    /// Views `len` slots starting at `start` as initialized.
    #[inline]
    pub unsafe fn slice(&self, start: usize, len: usize) -> &[T] {
        debug_assert!(start + len <= self.capacity(),
                      "slice start={} len={} cap={}",
                      start,
                      len,
                      self.capacity());
        slice::from_raw_parts(self.ptr().add(start), len)
    }

    /// Bitwise-moves `len` slots from `src[src_start..]` to `self[dst..]`.
    ///
    /// The moved slots of `src` must be treated as free afterwards.
    #[inline]
    pub unsafe fn move_from(&mut self, dst: usize, src: &RawBuffer<T>, src_start: usize, len: usize) {
        debug_assert!(dst + len <= self.capacity(),
                      "mov dst={} src={} len={} cap={}",
                      dst,
                      src_start,
                      len,
                      self.capacity());
        debug_assert!(src_start + len <= src.capacity(),
                      "mov dst={} src={} len={} cap={}",
                      dst,
                      src_start,
                      len,
                      src.capacity());
        ptr::copy_nonoverlapping(src.ptr().add(src_start), self.ptr_mut().add(dst), len);
    }
}

#[cfg(test)]
mod tests {
    use super::RawBuffer;
    use std::cell::Cell;

    #[test]
    fn empty_has_no_slots() {
        let buf: RawBuffer<u32> = RawBuffer::empty();
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn exact_capacity() {
        let buf: RawBuffer<u64> = RawBuffer::try_with_capacity(5).unwrap();
        assert_eq!(buf.capacity(), 5);
        let buf: RawBuffer<u64> = RawBuffer::with_capacity(3);
        assert_eq!(buf.capacity(), 3);
    }

    #[test]
    fn oversized_request_is_refused() {
        let err = RawBuffer::<u64>::try_with_capacity(usize::MAX).err().unwrap();
        assert_eq!(err.requested, usize::MAX);
    }

    #[test]
    fn read_write_move() {
        let mut a: RawBuffer<String> = RawBuffer::with_capacity(2);
        let mut b: RawBuffer<String> = RawBuffer::with_capacity(4);
        unsafe {
            a.write(0, "x".to_string());
            a.write(1, "y".to_string());
            b.move_from(2, &a, 0, 2);
            assert_eq!(b.slice(2, 2), &["x".to_string(), "y".to_string()][..]);
            b.get_mut(3).push('z');
            assert_eq!(b.get(3), "yz");
            drop(b.read(2));
            drop(b.read(3));
        }
    }

    #[test]
    fn dropping_buffer_does_not_drop_slots() {
        struct Bump<'a>(&'a Cell<i32>);

        impl<'a> Drop for Bump<'a> {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let flag = Cell::new(0);
        {
            let mut buf = RawBuffer::with_capacity(2);
            unsafe {
                buf.write(0, Bump(&flag));
            }
        }
        assert_eq!(flag.get(), 0);
    }
}
