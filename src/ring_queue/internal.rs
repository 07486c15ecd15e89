use core::ptr;

use super::RingQueue;
use crate::buffer::RawBuffer;
use crate::error::AllocationError;
use crate::utils::*;

impl<T> RingQueue<T> {
    #[inline]
    pub(super) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.buf.capacity())
    }

    #[inline]
    pub(super) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.buf.capacity())
    }

    #[inline]
    pub(super) fn is_full(&self) -> bool {
        self.len == self.buf.capacity()
    }

    /// Whether the live elements occupy one run of slots without wrapping.
    #[inline]
    pub(crate) fn is_contiguous(&self) -> bool {
        self.len <= self.buf.capacity() - self.tail
    }

    #[inline]
    pub(super) fn back_index(&self) -> usize {
        debug_assert!(self.len > 0);
        self.wrap_sub(self.head, 1)
    }

    /// Lengths of the two runs of live slots: `[tail, ..)` and `[0, ..)`.
    #[inline]
    fn run_lens(&self) -> (usize, usize) {
        if self.is_contiguous() {
            (self.len, 0)
        } else {
            let first = self.buf.capacity() - self.tail;
            (first, self.len - first)
        }
    }

    /// The live elements in FIFO order, split where the ring wraps.
    pub(crate) fn as_slices(&self) -> (&[T], &[T]) {
        let (first, second) = self.run_lens();
        unsafe { (self.buf.slice(self.tail, first), self.buf.slice(0, second)) }
    }

    pub(crate) fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (first, second) = self.run_lens();
        let tail = self.tail;
        let buf = self.buf.ptr_mut();
        unsafe {
            // the two runs never overlap
            let front = core::slice::from_raw_parts_mut(buf.add(tail), first);
            let back = core::slice::from_raw_parts_mut(buf, second);
            (front, back)
        }
    }

    /// Writes at `head` without checking for room.
    #[inline]
    pub(super) unsafe fn push_unchecked(&mut self, element: T) {
        debug_assert!(!self.is_full());
        let head = self.head;
        self.buf.write(head, element);
        self.head = self.wrap_add(head, 1);
        self.len += 1;
    }

    /// Moves the front element out without checking for emptiness.
    #[inline]
    pub(super) unsafe fn pop_unchecked(&mut self) -> T {
        debug_assert!(self.len > 0);
        let tail = self.tail;
        self.len -= 1;
        if self.len == 0 {
            self.tail = 0;
            self.head = 0;
        } else {
            self.tail = self.wrap_add(tail, 1);
        }
        self.buf.read(tail)
    }

    /// The capacity the next growth step produces.
    #[inline]
    fn grown_capacity(&self) -> Option<usize> {
        match self.buf.capacity() {
            0 => Some(1),
            cap => cap.checked_mul(2),
        }
    }

    /// Replaces the buffer with one of the next capacity, linearizing the
    /// live elements from slot 0.
    ///
    /// The old buffer is only given up once the new one holds every element;
    /// on failure nothing has changed.
    pub(super) fn grow(&mut self) -> Result<(), AllocationError> {
        let old_cap = self.buf.capacity();
        let new_cap = match self.grown_capacity() {
            Some(cap) => cap,
            None => {
                tracing::debug!(capacity = old_cap, "capacity overflow while growing");
                return Err(AllocationError::new(usize::MAX));
            }
        };
        let fresh = RawBuffer::try_with_capacity(new_cap)?;
        unsafe { self.relocate(fresh) };
        tracing::trace!(from = old_cap, to = new_cap, len = self.len, "grew ring buffer");
        Ok(())
    }

    /// Moves every live element into `fresh` starting at slot 0 and adopts
    /// it as the buffer. `fresh` must have room for `len` elements.
    unsafe fn relocate(&mut self, mut fresh: RawBuffer<T>) {
        debug_assert!(fresh.capacity() >= self.len);
        let (first, second) = self.run_lens();

        //  before:
        //
        //             H     T
        //      [o o o . . . o o]
        //
        //  after:
        //
        //       T         H
        //      [o o o o o . . . . . . . . . . .]
        //
        fresh.move_from(0, &self.buf, self.tail, first);
        fresh.move_from(first, &self.buf, 0, second);

        // old slots were moved out, the old allocation is released here
        self.buf = fresh;
        self.tail = 0;
        self.head = self.len;
    }

    /// Builds a queue over `buf` holding clones of `source`'s elements in
    /// FIFO order from slot 0.
    ///
    /// A panicking `Clone` leaves the partly filled queue to drop what it
    /// already holds.
    pub(super) fn cloned_into(source: &RingQueue<T>, buf: RawBuffer<T>) -> RingQueue<T>
        where T: Clone
    {
        debug_assert!(buf.capacity() >= source.len);
        let mut out = RingQueue {
            buf,
            head: 0,
            tail: 0,
            len: 0,
        };
        let (a, b) = source.as_slices();
        for element in a.iter().chain(b) {
            unsafe { out.push_unchecked(element.clone()) };
        }
        out
    }

    /// Replaces the elements with clones of `source`'s inside the current
    /// buffer, which must be at least as large as `source`'s.
    pub(super) fn refill_from(&mut self, source: &RingQueue<T>)
        where T: Clone
    {
        debug_assert!(self.buf.capacity() >= source.capacity());
        self.drop_elements();
        let (a, b) = source.as_slices();
        for element in a.iter().chain(b) {
            unsafe { self.push_unchecked(element.clone()) };
        }
    }

    /// Drops every live element and resets the cursors.
    pub(super) fn drop_elements(&mut self) {
        let (front, back) = self.as_mut_slices();
        let front: *mut [T] = front;
        let back: *mut [T] = back;
        // forget first so a panicking destructor cannot lead to a double drop
        self.len = 0;
        self.tail = 0;
        self.head = 0;
        unsafe {
            ptr::drop_in_place(front);
            ptr::drop_in_place(back);
        }
    }
}
