use core::fmt;

/// Error value indicating the queue could not obtain storage.
///
/// Returned when a buffer of `requested` slots cannot be allocated, either
/// because the allocator refused or because the byte size overflows.
/// The queue involved is left exactly as it was before the call.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, thiserror::Error)]
#[error("unable to allocate buffer of {requested} slots")]
pub struct AllocationError<T = ()> {
    /// The element that caused the error.
    ///
    /// For [`push`](crate::RingQueue::push) this is the rejected item, handed
    /// back to the caller. Every other operation uses `()`.
    pub element: T,
    /// The slot count that could not be allocated.
    pub requested: usize,
}

impl AllocationError {
    pub(crate) fn new(requested: usize) -> Self {
        AllocationError {
            element: (),
            requested,
        }
    }

    pub(crate) fn with_element<T>(self, element: T) -> AllocationError<T> {
        AllocationError {
            element,
            requested: self.requested,
        }
    }
}

impl<T> fmt::Debug for AllocationError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AllocationError: unable to allocate buffer of {} slots", self.requested)
    }
}

/// The access that was attempted on an empty queue.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Access {
    /// Removing the front element.
    Pop,
    /// Reading the front element.
    Front,
    /// Reading the back element.
    Back,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Access::Pop => f.write_str("pop from"),
            Access::Front => f.write_str("reference the front element of"),
            Access::Back => f.write_str("reference the back element of"),
        }
    }
}

/// Error value indicating an access to an empty queue.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[error("unable to {access} an empty queue")]
pub struct EmptyQueueError {
    /// The access that failed.
    pub access: Access,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(AllocationError::new(8).to_string(),
                   "unable to allocate buffer of 8 slots");
        assert_eq!(EmptyQueueError { access: Access::Pop }.to_string(),
                   "unable to pop from an empty queue");
        assert_eq!(EmptyQueueError { access: Access::Back }.to_string(),
                   "unable to reference the back element of an empty queue");
    }

    #[test]
    fn element_is_handed_back() {
        let err = AllocationError::new(4).with_element(vec![1, 2]);
        assert_eq!(err.requested, 4);
        assert_eq!(err.element, vec![1, 2]);
        assert_eq!(format!("{:?}", err),
                   "AllocationError: unable to allocate buffer of 4 slots");
    }
}
