use core::iter::FusedIterator;

use crate::Sequence;

/// An owning iterator over a [`Sequence`], front to back.
///
/// Dropping the iterator frees the cells that have not been yielded yet.
pub struct IntoIter<E> {
    sequence: Sequence<E>,
}

impl<E> IntoIter<E> {
    #[must_use]
    #[inline]
    pub(crate) const fn new(sequence: Sequence<E>) -> Self {
        Self { sequence }
    }

    #[must_use]
    #[inline]
    /// Returns a reference to the not-yet-yielded rest of the sequence.
    pub const fn as_sequence(&self) -> &Sequence<E> {
        &self.sequence
    }
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.pop_head()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequence.len(), Some(self.sequence.len()))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}
impl<E> FusedIterator for IntoIter<E> {}
