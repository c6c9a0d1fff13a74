//! Iteration over a [`Sequence`].
//!
//! Traversal is read-only front-to-back and never moves the cursor; building
//! a sequence from an iterator appends at the back without creating a current
//! element.

mod into_iter;
#[allow(clippy::module_inception)]
mod iter;

pub use into_iter::IntoIter;
pub use iter::Iter;

use crate::Sequence;

impl<'a, E> IntoIterator for &'a Sequence<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> IntoIterator for Sequence<E> {
    type Item = E;
    type IntoIter = IntoIter<E>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<E> Extend<E> for Sequence<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<'a, E> Extend<&'a E> for Sequence<E>
where
    E: Copy,
{
    fn extend<T: IntoIterator<Item = &'a E>>(&mut self, iter: T) {
        for element in iter.into_iter().copied() {
            self.push_back(element);
        }
    }
}

impl<E> FromIterator<E> for Sequence<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut sequence = Self::new();
        sequence.extend(iter);
        sequence
    }
}
