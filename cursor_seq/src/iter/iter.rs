use core::{iter::FusedIterator, marker::PhantomData};

use seqnode::NodePtr;

use crate::Sequence;

/// A borrowing iterator over a [`Sequence`], front to back.
pub struct Iter<'a, E> {
    next: Option<NodePtr<E>>,
    remaining: usize,
    _sequence: PhantomData<&'a Sequence<E>>,
}

impl<'a, E> Iter<'a, E> {
    #[must_use]
    pub(crate) fn new(sequence: &'a Sequence<E>) -> Self {
        Self {
            next: sequence.head(),
            remaining: sequence.len(),
            _sequence: PhantomData,
        }
    }
}

// Manually implemented to avoid a `Clone` bound on `E`
impl<E> Clone for Iter<'_, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _sequence: PhantomData,
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY:
        // The cell is on the borrowed sequence's chain, so it is live and
        // cannot be mutated while the borrow is held.
        self.next = unsafe { node.next() };
        self.remaining -= 1;
        // SAFETY:
        // As above; the reference stays valid for the borrow's lifetime.
        Some(unsafe { node.data_ptr().as_ref() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}
impl<E> FusedIterator for Iter<'_, E> {}

// SAFETY:
// The iterator only hands out `&E`, and the elements implement `Sync`
// (trait bound).
unsafe impl<E> Send for Iter<'_, E> where E: Sync {}

// SAFETY:
// As above.
unsafe impl<E> Sync for Iter<'_, E> where E: Sync {}
