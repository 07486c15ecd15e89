use core::fmt;
use core::hash::{Hash, Hasher};

use super::RingQueue;
use crate::buffer::RawBuffer;

/// Clones keep the source's capacity and store the elements from slot 0.
///
/// Allocation failure aborts, as it does for `Vec`; use
/// [`try_clone`](RingQueue::try_clone) and
/// [`try_assign`](RingQueue::try_assign) to handle it.
impl<T: Clone> Clone for RingQueue<T> {
    fn clone(&self) -> RingQueue<T> {
        if self.capacity() == 0 {
            return RingQueue::new();
        }
        RingQueue::cloned_into(self, RawBuffer::with_capacity(self.capacity()))
    }

    fn clone_from(&mut self, source: &RingQueue<T>) {
        if source.capacity() > self.capacity() {
            *self = RingQueue::cloned_into(source, RawBuffer::with_capacity(source.capacity()));
        } else {
            self.refill_from(source);
        }
    }
}

impl<T> Drop for RingQueue<T> {
    fn drop(&mut self) {
        self.drop_elements();

        // RawBuffer releases the allocation without touching the slots
    }
}

impl<T> Default for RingQueue<T> {
    #[inline]
    fn default() -> RingQueue<T> {
        RingQueue::new()
    }
}

/// Queues are equal when they hold equal elements in the same order,
/// regardless of capacity or where the ring wraps.
impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &RingQueue<T>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        if sa.len() == oa.len() {
            sa == oa && sb == ob
        } else if sa.len() < oa.len() {
            // Always divisible in three sections, for example:
            // self:  [a b c|d e f]
            // other: [0 1 2 3|4 5]
            // front = 3, mid = 1,
            // [a b c] == [0 1 2] && [d] == [3] && [e f] == [4 5]
            let front = sa.len();
            let mid = oa.len() - front;

            let (oa_front, oa_mid) = oa.split_at(front);
            let (sb_mid, sb_back) = sb.split_at(mid);
            debug_assert_eq!(sa.len(), oa_front.len());
            debug_assert_eq!(sb_mid.len(), oa_mid.len());
            debug_assert_eq!(sb_back.len(), ob.len());
            sa == oa_front && sb_mid == oa_mid && sb_back == ob
        } else {
            let front = oa.len();
            let mid = sa.len() - front;

            let (sa_front, sa_mid) = sa.split_at(front);
            let (ob_mid, ob_back) = ob.split_at(mid);
            debug_assert_eq!(sa_front.len(), oa.len());
            debug_assert_eq!(sa_mid.len(), ob_mid.len());
            debug_assert_eq!(sb.len(), ob_back.len());
            sa_front == oa && sa_mid == ob_mid && sb == ob_back
        }
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T: Hash> Hash for RingQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        let (a, b) = self.as_slices();
        for element in a.iter().chain(b) {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (a, b) = self.as_slices();
        f.debug_list().entries(a).entries(b).finish()
    }
}
