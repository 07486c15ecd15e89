use crate::buffer::RawBuffer;
use crate::error::{Access, AllocationError, EmptyQueueError};

mod internal;
mod trait_impls;

/// `RingQueue` is a first-in-first-out queue on a growable ring buffer.
///
/// Elements are pushed at the back and popped from the front. When the
/// buffer is full, `push` moves the elements into a buffer of twice the
/// capacity (one slot when the queue has none) in FIFO order, so growth costs
/// `O(1)` amortized per push. Capacity never shrinks.
///
/// Every fallible operation either applies fully or leaves the queue as it
/// was.
///
/// # Examples
///
/// ```
/// use ringqueue::RingQueue;
///
/// let mut queue = RingQueue::new();
/// queue.push(1).unwrap();
/// queue.push(2).unwrap();
/// queue.push(3).unwrap();
/// queue.pop().unwrap();
///
/// assert_eq!(queue.front(), Ok(&2));
/// assert_eq!(queue.back(), Ok(&3));
/// assert_eq!(queue.len(), 2);
/// ```
pub struct RingQueue<T> {
    buf: RawBuffer<T>,
    // next free slot
    head: usize,
    // oldest element
    tail: usize,
    len: usize,
}

impl<T> RingQueue<T> {
    /// Creates an empty `RingQueue` without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let queue: RingQueue<usize> = RingQueue::new();
    /// assert_eq!(queue.capacity(), 0);
    /// ```
    #[inline]
    pub const fn new() -> RingQueue<T> {
        RingQueue {
            buf: RawBuffer::empty(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Creates an empty `RingQueue` with room for exactly `capacity`
    /// elements.
    ///
    /// A capacity of zero allocates nothing and is the same as
    /// [`new`](RingQueue::new).
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] when the buffer cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let queue: RingQueue<u8> = RingQueue::with_capacity(16).unwrap();
    /// assert_eq!(queue.capacity(), 16);
    /// assert!(queue.is_empty());
    ///
    /// assert!(RingQueue::<u8>::with_capacity(usize::MAX).is_err());
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<RingQueue<T>, AllocationError> {
        if capacity == 0 {
            return Ok(RingQueue::new());
        }
        Ok(RingQueue {
            buf: RawBuffer::try_with_capacity(capacity)?,
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](RingQueue::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of elements the queue holds before it has to grow.
    ///
    /// This is always the size of the allocated buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push('a').unwrap();
    /// assert_eq!(queue.capacity(), 1);
    /// queue.push('b').unwrap();
    /// assert_eq!(queue.capacity(), 2);
    /// queue.push('c').unwrap();
    /// assert_eq!(queue.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alias of [`is_empty`](RingQueue::is_empty).
    #[inline]
    pub fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Appends an element to the back of the queue, growing the buffer when
    /// it is full.
    ///
    /// # Errors
    ///
    /// When the larger buffer cannot be allocated the queue is left
    /// untouched and `element` is handed back in
    /// [`AllocationError::element`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::with_capacity(2).unwrap();
    /// queue.push(1).unwrap();
    /// queue.push(2).unwrap();
    /// queue.push(3).unwrap();
    /// assert_eq!(queue.capacity(), 4);
    /// assert_eq!(queue.len(), 3);
    /// ```
    pub fn push(&mut self, element: T) -> Result<(), AllocationError<T>> {
        if self.is_full() {
            if let Err(err) = self.grow() {
                return Err(err.with_element(element));
            }
        }
        unsafe { self.push_unchecked(element) };
        Ok(())
    }

    /// Removes the front element and drops it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// assert!(queue.pop().is_err());
    ///
    /// queue.push("a").unwrap();
    /// queue.pop().unwrap();
    /// assert!(queue.is_empty());
    /// ```
    pub fn pop(&mut self) -> Result<(), EmptyQueueError> {
        match self.pop_front() {
            Some(_) => Ok(()),
            None => Err(EmptyQueueError { access: Access::Pop }),
        }
    }

    /// Removes the front element and returns it, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(1).unwrap();
    /// queue.push(2).unwrap();
    ///
    /// assert_eq!(queue.pop_front(), Some(1));
    /// assert_eq!(queue.pop_front(), Some(2));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        unsafe { Some(self.pop_unchecked()) }
    }

    /// Returns a reference to the front element, the next one to be popped.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue is empty.
    #[inline]
    pub fn front(&self) -> Result<&T, EmptyQueueError> {
        if self.is_empty() {
            return Err(EmptyQueueError { access: Access::Front });
        }
        unsafe { Ok(self.buf.get(self.tail)) }
    }

    /// Returns a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, EmptyQueueError> {
        if self.is_empty() {
            return Err(EmptyQueueError { access: Access::Front });
        }
        let tail = self.tail;
        unsafe { Ok(self.buf.get_mut(tail)) }
    }

    /// Returns a reference to the back element, the one pushed last.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::with_capacity(2).unwrap();
    /// queue.push(1).unwrap();
    /// queue.push(2).unwrap();
    /// queue.pop().unwrap();
    /// queue.push(3).unwrap();
    ///
    /// assert_eq!(queue.front(), Ok(&2));
    /// assert_eq!(queue.back(), Ok(&3));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, EmptyQueueError> {
        if self.is_empty() {
            return Err(EmptyQueueError { access: Access::Back });
        }
        unsafe { Ok(self.buf.get(self.back_index())) }
    }

    /// Returns a mutable reference to the back element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyQueueError`] if the queue is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, EmptyQueueError> {
        if self.is_empty() {
            return Err(EmptyQueueError { access: Access::Back });
        }
        let back = self.back_index();
        unsafe { Ok(self.buf.get_mut(back)) }
    }

    /// Drops every element. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(1).unwrap();
    /// queue.push(2).unwrap();
    /// queue.clear();
    ///
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.len(), 0);
    /// assert_eq!(queue.capacity(), 2);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.drop_elements();
    }

    /// Returns a copy of the queue with the same capacity, its elements
    /// moved to the start of the buffer.
    ///
    /// This is [`Clone::clone`] with allocation failure reported instead of
    /// aborting.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] when the buffer cannot be allocated.
    pub fn try_clone(&self) -> Result<RingQueue<T>, AllocationError>
        where T: Clone
    {
        if self.capacity() == 0 {
            return Ok(RingQueue::new());
        }
        let buf = RawBuffer::try_with_capacity(self.capacity())?;
        Ok(RingQueue::cloned_into(self, buf))
    }

    /// Replaces the contents of the queue with clones of `source`'s
    /// elements, in FIFO order from the start of the buffer.
    ///
    /// The buffer is reused when it is at least as large as `source`'s;
    /// otherwise it grows to `source.capacity()`. Capacity never shrinks.
    ///
    /// This is [`Clone::clone_from`] with allocation failure reported instead
    /// of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] when a larger buffer cannot be allocated;
    /// the queue is then unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut source = RingQueue::new();
    /// source.push(7).unwrap();
    /// source.push(8).unwrap();
    ///
    /// let mut queue = RingQueue::with_capacity(8).unwrap();
    /// queue.push(1).unwrap();
    /// queue.try_assign(&source).unwrap();
    ///
    /// assert_eq!(queue, source);
    /// assert_eq!(queue.capacity(), 8);
    /// ```
    pub fn try_assign(&mut self, source: &RingQueue<T>) -> Result<(), AllocationError>
        where T: Clone
    {
        if source.capacity() > self.capacity() {
            let buf = RawBuffer::try_with_capacity(source.capacity())?;
            *self = RingQueue::cloned_into(source, buf);
        } else {
            self.refill_from(source);
        }
        Ok(())
    }
}
