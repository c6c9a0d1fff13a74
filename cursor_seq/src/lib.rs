#![no_std]
#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(debug_assertions), warn(clippy::panic_in_result_fn))]
#![doc = include_str!("../README.md")]

extern crate alloc;

use seqnode::{chain, NodePtr};

mod cmp;
mod edit;
mod errors;
mod fmt;
pub mod iter;
mod splice;

pub use errors::NoCurrentError;
pub use iter::{IntoIter, Iter};
pub use seqnode::AllocateError;

/// The first and last cell of a non-empty chain.
pub(crate) struct Ends<E> {
    pub head: NodePtr<E>,
    pub tail: NodePtr<E>,
}

// Manually implemented to avoid `Copy` and `Clone` bounds on `E`
impl<E> Clone for Ends<E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<E> Copy for Ends<E> {}

/// A singly-linked sequence with a movable cursor.
///
/// The sequence owns a chain of cells from head to tail and tracks an
/// optional current element. Four references are kept mutually consistent
/// across every mutation:
///
/// - `ends.head` / `ends.tail`: the first and last cell, both absent exactly
///   when the sequence is empty;
/// - `cursor`: the cell holding the current element, or [`None`];
/// - `precursor`: the cell directly before the cursor, or [`None`] when the
///   cursor is at the front or absent.
///
/// The precursor is what makes [`remove_current`](Self::remove_current) and
/// [`add_before`](Self::add_before) O(1): the cell before the edit point is
/// already at hand, so no walk from the head is ever needed.
pub struct Sequence<E> {
    len: usize,
    ends: Option<Ends<E>>,
    cursor: Option<NodePtr<E>>,
    precursor: Option<NodePtr<E>>,
}

impl<E> Sequence<E> {
    #[must_use]
    /// Creates an empty sequence with no current element.
    pub const fn new() -> Self {
        Self {
            len: 0,
            ends: None,
            cursor: None,
            precursor: None,
        }
    }

    #[must_use]
    /// Creates a sequence holding `element` as its only, current element.
    pub fn with_first(element: E) -> Self {
        let node = NodePtr::allocate(element, None);
        Self {
            len: 1,
            ends: Some(Ends {
                head: node,
                tail: node,
            }),
            cursor: Some(node),
            precursor: None,
        }
    }

    #[must_use]
    /// Returns the number of elements in the sequence.
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    /// Returns [`true`] if the sequence holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    /// Returns [`true`] if the sequence has a current element.
    pub const fn is_current(&self) -> bool {
        self.cursor.is_some()
    }

    /// Gets a reference to the current element.
    ///
    /// # Errors
    /// Returns a [`NoCurrentError`] if there is no current element.
    pub fn current(&self) -> Result<&E, NoCurrentError> {
        let node = self.cursor.ok_or(NoCurrentError)?;
        // SAFETY:
        // The cursor cell is on this sequence's chain, so it is live, and it
        // cannot be mutated while `&self` is held.
        Ok(unsafe { node.data_ptr().as_ref() })
    }

    /// Gets a mutable reference to the current element.
    ///
    /// # Errors
    /// Returns a [`NoCurrentError`] if there is no current element.
    pub fn current_mut(&mut self) -> Result<&mut E, NoCurrentError> {
        let node = self.cursor.ok_or(NoCurrentError)?;
        // SAFETY:
        // The cursor cell is on this sequence's chain, so it is live.
        let mut ptr = unsafe { node.data_ptr() };
        // SAFETY:
        // Holding `&mut self` means nothing else can reach the cell.
        Ok(unsafe { ptr.as_mut() })
    }

    #[must_use]
    /// Gets a reference to the element directly before the current one.
    ///
    /// Returns [`None`] when there is no current element or the current
    /// element is at the front of the sequence.
    pub fn previous(&self) -> Option<&E> {
        let node = self.precursor?;
        // SAFETY:
        // The precursor cell is on this sequence's chain, so it is live, and
        // it cannot be mutated while `&self` is held.
        Some(unsafe { node.data_ptr().as_ref() })
    }

    /// Sets the current element to the front of the sequence.
    ///
    /// If the sequence is empty, there is no current element afterwards.
    pub fn start(&mut self) {
        self.cursor = self.head();
        self.precursor = None;
    }

    /// Moves the current element forward by one.
    ///
    /// If the current element was the last one, there is no current element
    /// afterwards; the precursor is cleared as well rather than left pointing
    /// at the former last cell.
    ///
    /// # Errors
    /// Returns a [`NoCurrentError`] if there is no current element.
    pub fn advance(&mut self) -> Result<(), NoCurrentError> {
        let current = self.cursor.ok_or(NoCurrentError)?;
        // SAFETY:
        // The cursor cell is on this sequence's chain, so it is live, and
        // holding `&mut self` means it is not aliased.
        self.cursor = unsafe { current.next() };
        self.precursor = if self.cursor.is_some() {
            Some(current)
        } else {
            None
        };
        Ok(())
    }

    #[must_use]
    #[inline]
    /// Gets an iterator over references to the elements, front to back.
    ///
    /// Iterating does not move the cursor.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self)
    }

    /// Removes every element, leaving the sequence empty with no current
    /// element.
    pub fn clear(&mut self) {
        let head = self.ends.take().map(|Ends { head, .. }| head);
        self.cursor = None;
        self.precursor = None;
        self.len = 0;
        // SAFETY:
        // The chain was exclusively owned by this sequence and every handle
        // into it has been cleared above.
        unsafe { chain::release(head) };
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<NodePtr<E>> {
        self.ends.map(|Ends { head, .. }| head)
    }

    /// Detaches the front cell and returns its element, keeping the cursor
    /// and precursor consistent.
    pub(crate) fn pop_head(&mut self) -> Option<E> {
        let Ends { head, tail } = self.ends?;
        // SAFETY:
        // The head cell is on this sequence's chain, so it is live, and
        // holding `&mut self` means it is not aliased.
        let next = unsafe { head.next() };
        self.ends = next.map(|node| Ends { head: node, tail });

        if self.cursor == Some(head) {
            self.cursor = None;
            self.precursor = None;
        } else if self.precursor == Some(head) {
            // the cursor moves to the front, so there is no precursor
            self.precursor = None;
        }

        self.len -= 1;
        // SAFETY:
        // The cell has been detached from the chain and every handle to it
        // has been cleared above.
        Some(unsafe { head.deallocate() })
    }
}

impl<E> Default for Sequence<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for Sequence<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY:
// The sequence exclusively owns its cells, so sending it just moves that
// ownership along with the elements, which implement `Send` (trait bound).
unsafe impl<E> Send for Sequence<E> where E: Send {}

// SAFETY:
// Shared access to the sequence only hands out `&E`, and the elements
// implement `Sync` (trait bound).
unsafe impl<E> Sync for Sequence<E> where E: Sync {}

#[cfg(test)]
mod test {
    use super::Sequence;
    use crate::NoCurrentError;

    #[test]
    fn new_sequence_is_empty() {
        let seq = Sequence::<f64>::new();

        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert!(!seq.is_current());
        assert_eq!(seq.current(), Err(NoCurrentError));
    }

    #[test]
    fn with_first_seeds_one_current_element() {
        let seq = Sequence::with_first(4.5);

        assert_eq!(seq.len(), 1);
        assert_eq!(seq.current(), Ok(&4.5));
        assert_eq!(seq.previous(), None);
    }

    #[test]
    fn start_on_empty_leaves_no_current() {
        let mut seq = Sequence::<u32>::new();

        seq.start();
        assert!(!seq.is_current());
        assert_eq!(seq.advance(), Err(NoCurrentError));
    }

    #[test]
    fn advance_walks_off_the_end() {
        let mut seq = Sequence::new();
        seq.add_after(1.0);
        seq.add_after(2.0);
        seq.add_after(3.0);

        seq.start();
        assert_eq!(seq.current(), Ok(&1.0));
        assert_eq!(seq.previous(), None);

        assert!(seq.advance().is_ok());
        assert_eq!(seq.current(), Ok(&2.0));
        assert_eq!(seq.previous(), Some(&1.0));

        assert!(seq.advance().is_ok());
        assert_eq!(seq.current(), Ok(&3.0));

        assert!(seq.advance().is_ok());
        assert!(!seq.is_current());
        // walking off the end clears the precursor too
        assert_eq!(seq.previous(), None);
        assert_eq!(seq.advance(), Err(NoCurrentError));
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn current_mut_edits_in_place() {
        let mut seq = Sequence::new();
        seq.add_after(10_u32);

        *seq.current_mut().unwrap() += 5;
        assert_eq!(seq.current(), Ok(&15));
    }

    #[test]
    fn clear_resets_everything() {
        let mut seq = Sequence::new();
        seq.add_after('a');
        seq.add_after('b');

        seq.clear();
        assert!(seq.is_empty());
        assert!(!seq.is_current());
        assert_eq!(seq.iter().count(), 0);

        // the sequence is reusable after clearing
        seq.add_after('c');
        assert_eq!(seq.current(), Ok(&'c'));
    }

    #[test]
    fn drop_releases_elements_exactly_once() {
        use core::sync::atomic::{AtomicUsize, Ordering};

        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Counted;
        impl Drop for Counted {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::Relaxed);
            }
        }

        let mut seq = Sequence::new();
        for _ in 0..5 {
            seq.add_after(Counted);
        }
        drop(seq);

        assert_eq!(DROPS.load(Ordering::Relaxed), 5);
    }
}
