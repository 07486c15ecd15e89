//! A first-in-first-out queue on a growable ring buffer.
//!
//! `RingQueue` keeps its elements in one contiguous buffer whose positions
//! wrap around, so popping from the front never moves data. When the buffer
//! is full, pushing doubles it and moves the elements over in FIFO order,
//! which keeps `push` at `O(1)` amortized.
//!
//! Allocation failure is reported, not fatal: constructors, `push`,
//! `try_clone` and `try_assign` return [`AllocationError`] and leave every
//! queue involved as it was.
//!
//! # Feature Flags
//! The **ringqueue** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate only needs `alloc`
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringqueue = "0.1"
//! ```
//!
//! For a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! ringqueue = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! The capacity starts at zero (or what was asked of
//! [`RingQueue::with_capacity`]), becomes one on the first push into an empty
//! buffer, and doubles every time a push finds the buffer full. It never
//! shrinks, not even on [`clear`](RingQueue::clear).
//!
//! # Examples
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue = RingQueue::new();
//! assert_eq!(queue.capacity(), 0);
//!
//! queue.push(1).unwrap();
//! queue.push(2).unwrap();
//! assert_eq!(queue.len(), 2);
//!
//! assert_eq!(queue.pop_front(), Some(1));
//! assert_eq!(queue.pop_front(), Some(2));
//! assert_eq!(queue.pop_front(), None);
//! ```
//!
//! # Errors
//! ```
//! use ringqueue::{Access, RingQueue};
//!
//! let mut queue: RingQueue<String> = RingQueue::new();
//!
//! let err = queue.front().unwrap_err();
//! assert_eq!(err.access, Access::Front);
//! assert_eq!(err.to_string(), "unable to reference the front element of an empty queue");
//!
//! assert!(queue.pop().is_err());
//! ```
//!
//! # Copy & Assign
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue = RingQueue::with_capacity(4).unwrap();
//! queue.push("a").unwrap();
//! queue.push("b").unwrap();
//!
//! let mut copy = queue.clone();
//! copy.push("c").unwrap();
//! assert_eq!(format!("{:?}", queue), r#"["a", "b"]"#);
//! assert_eq!(format!("{:?}", copy), r#"["a", "b", "c"]"#);
//!
//! copy.clone_from(&queue);
//! assert_eq!(copy, queue);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod buffer;
mod error;
mod ring_queue;
mod utils;

pub use error::{Access, AllocationError, EmptyQueueError};
pub use ring_queue::RingQueue;
