//! Cursor-anchored insertion and removal.
//!
//! Every operation here is O(1): the tracked precursor means the cell before
//! the edit point is already at hand. Each operation keeps the head, tail,
//! cursor and precursor mutually consistent.

use seqnode::{AllocateError, NodePtr};

use crate::{Ends, NoCurrentError, Sequence};

impl<E> Sequence<E> {
    /// Attempts to add `element` directly after the current element.
    ///
    /// If there is no current element, `element` goes to the back of the
    /// sequence. Either way, `element` becomes the new current element.
    ///
    /// # Errors
    /// If allocation fails, this returns an [`AllocateError`] carrying
    /// `element` and leaves the sequence untouched.
    pub fn try_add_after(&mut self, element: E) -> Result<(), AllocateError<E>> {
        if let Some(current) = self.cursor {
            // SAFETY:
            // The cursor cell is on this sequence's chain, so it is live, and
            // holding `&mut self` means it is not aliased.
            unsafe { current.try_insert_after(element) }?;
            // SAFETY:
            // As above; `insert_after` linked the new cell behind `current`.
            let next = unsafe { current.next() };
            debug_assert!(next.is_some());
            // SAFETY:
            // `insert_after` always links a successor behind its cell.
            let node = unsafe { next.unwrap_unchecked() };

            if let Some(ends) = self.ends.as_mut() {
                // inserting after the last cell moves the tail
                if ends.tail == current {
                    ends.tail = node;
                }
            }
            self.precursor = Some(current);
            self.cursor = Some(node);
        } else if let Some(ends) = self.ends.as_mut() {
            let tail = ends.tail;
            // SAFETY:
            // The tail cell is on this sequence's chain, so it is live, and
            // holding `&mut self` means it is not aliased.
            unsafe { tail.try_insert_after(element) }?;
            // SAFETY:
            // As above.
            let next = unsafe { tail.next() };
            debug_assert!(next.is_some());
            // SAFETY:
            // `insert_after` always links a successor behind its cell.
            let node = unsafe { next.unwrap_unchecked() };

            ends.tail = node;
            self.precursor = Some(tail);
            self.cursor = Some(node);
        } else {
            let node = NodePtr::try_allocate(element, None)?;
            self.ends = Some(Ends {
                head: node,
                tail: node,
            });
            self.precursor = None;
            self.cursor = Some(node);
        }

        self.len += 1;
        Ok(())
    }

    /// Adds `element` directly after the current element.
    ///
    /// If there is no current element, `element` goes to the back of the
    /// sequence. Either way, `element` becomes the new current element.
    pub fn add_after(&mut self, element: E) {
        AllocateError::unwrap_result(self.try_add_after(element));
    }

    /// Attempts to add `element` directly before the current element.
    ///
    /// If there is no current element, `element` goes to the front of the
    /// sequence. Either way, `element` becomes the new current element.
    ///
    /// # Errors
    /// If allocation fails, this returns an [`AllocateError`] carrying
    /// `element` and leaves the sequence untouched.
    pub fn try_add_before(&mut self, element: E) -> Result<(), AllocateError<E>> {
        let Some(current) = self.cursor else {
            return self.try_add_first(element);
        };

        // The new cell slots in between the precursor and the cursor, so the
        // precursor keeps its role unchanged.
        let node = NodePtr::try_allocate(element, Some(current))?;
        match self.precursor {
            Some(precursor) => {
                // SAFETY:
                // The precursor cell is on this sequence's chain, so it is
                // live, and holding `&mut self` means it is not aliased.
                unsafe { precursor.set_next(Some(node)) };
            }
            None => {
                // the cursor was the first cell, so the new cell becomes the
                // head
                debug_assert!(self.ends.is_some());
                if let Some(ends) = self.ends.as_mut() {
                    debug_assert!(ends.head == current);
                    ends.head = node;
                }
            }
        }
        self.cursor = Some(node);

        self.len += 1;
        Ok(())
    }

    /// Adds `element` directly before the current element.
    ///
    /// If there is no current element, `element` goes to the front of the
    /// sequence. Either way, `element` becomes the new current element.
    pub fn add_before(&mut self, element: E) {
        AllocateError::unwrap_result(self.try_add_before(element));
    }

    /// Attempts to add `element` at the front of the sequence.
    ///
    /// `element` becomes the new head and the new current element, with no
    /// precursor.
    ///
    /// # Errors
    /// If allocation fails, this returns an [`AllocateError`] carrying
    /// `element` and leaves the sequence untouched.
    pub fn try_add_first(&mut self, element: E) -> Result<(), AllocateError<E>> {
        let node = NodePtr::try_allocate(element, self.head())?;
        match self.ends.as_mut() {
            Some(ends) => ends.head = node,
            None => {
                self.ends = Some(Ends {
                    head: node,
                    tail: node,
                });
            }
        }
        self.precursor = None;
        self.cursor = Some(node);

        self.len += 1;
        Ok(())
    }

    /// Adds `element` at the front of the sequence.
    ///
    /// `element` becomes the new head and the new current element. Together
    /// with [`remove_current`](Self::remove_current), this gives the sequence
    /// stack-style push/pop behaviour.
    pub fn add_first(&mut self, element: E) {
        AllocateError::unwrap_result(self.try_add_first(element));
    }

    /// Removes the current element and returns it.
    ///
    /// The following element, if there is one, becomes the new current
    /// element; otherwise there is no current element afterwards.
    ///
    /// # Errors
    /// Returns a [`NoCurrentError`] if there is no current element.
    pub fn remove_current(&mut self) -> Result<E, NoCurrentError> {
        let current = self.cursor.ok_or(NoCurrentError)?;
        // SAFETY:
        // The cursor cell is on this sequence's chain, so it is live, and
        // holding `&mut self` means it is not aliased.
        let next = unsafe { current.next() };

        debug_assert!(self.ends.is_some());
        match (self.precursor, next) {
            // the cursor was the head; its successor takes over both roles
            (None, Some(node)) => {
                if let Some(ends) = self.ends.as_mut() {
                    debug_assert!(ends.head == current);
                    ends.head = node;
                }
                self.cursor = Some(node);
            }
            // interior cell: bypass it and follow to its successor
            (Some(precursor), Some(node)) => {
                // SAFETY:
                // The precursor cell is on this sequence's chain, so it is
                // live, and holding `&mut self` means it is not aliased.
                unsafe { precursor.set_next(Some(node)) };
                self.cursor = Some(node);
            }
            // the cursor was the last cell; its predecessor becomes the tail
            (Some(precursor), None) => {
                // SAFETY:
                // As above.
                unsafe { precursor.set_next(None) };
                if let Some(ends) = self.ends.as_mut() {
                    debug_assert!(ends.tail == current);
                    ends.tail = precursor;
                }
                self.cursor = None;
                self.precursor = None;
            }
            // sole cell
            (None, None) => {
                self.ends = None;
                self.cursor = None;
            }
        }

        self.len -= 1;
        // SAFETY:
        // The cell has been unlinked from the chain and every handle to it
        // has been redirected above, so this is its last use.
        Ok(unsafe { current.deallocate() })
    }

    /// Adds `element` at the back of the sequence without touching the
    /// cursor.
    pub(crate) fn push_back(&mut self, element: E) {
        let node = NodePtr::allocate(element, None);
        match self.ends.as_mut() {
            Some(ends) => {
                // SAFETY:
                // The tail cell is on this sequence's chain, so it is live,
                // and holding `&mut self` means it is not aliased.
                unsafe { ends.tail.set_next(Some(node)) };
                ends.tail = node;
            }
            None => {
                self.ends = Some(Ends {
                    head: node,
                    tail: node,
                });
            }
        }
        self.len += 1;
    }
}

#[cfg(test)]
mod test {
    use alloc::vec::Vec;

    use crate::{NoCurrentError, Sequence};

    fn contents(seq: &Sequence<f64>) -> Vec<f64> {
        seq.iter().copied().collect()
    }

    #[test]
    fn add_after_appends_and_tracks_current() {
        let mut seq = Sequence::new();
        seq.add_after(1.0);
        seq.add_after(2.0);
        seq.add_after(3.0);

        assert_eq!(seq.len(), 3);
        assert_eq!(contents(&seq), [1.0, 2.0, 3.0]);
        assert_eq!(seq.current(), Ok(&3.0));
    }

    #[test]
    fn add_after_in_the_middle() {
        let mut seq = Sequence::new();
        seq.add_after(1.0);
        seq.add_after(3.0);

        seq.start();
        seq.add_after(2.0);

        assert_eq!(contents(&seq), [1.0, 2.0, 3.0]);
        assert_eq!(seq.current(), Ok(&2.0));
        assert_eq!(seq.previous(), Some(&1.0));
    }

    #[test]
    fn add_after_at_the_tail_moves_the_tail() {
        let mut seq = Sequence::new();
        seq.add_after(1.0);
        seq.add_after(2.0);

        // cursor is on the last element; insert after it, then check that a
        // no-current append really lands behind the new element
        seq.add_after(3.0);
        assert!(seq.advance().is_ok());
        assert!(!seq.is_current());
        seq.add_after(4.0);

        assert_eq!(contents(&seq), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn add_after_without_current_appends_at_the_back() {
        let mut seq = Sequence::new();
        seq.add_after(1.0);
        seq.add_after(2.0);
        // walk off the end to drop the current element
        assert!(seq.advance().is_ok());

        seq.add_after(3.0);
        assert_eq!(contents(&seq), [1.0, 2.0, 3.0]);
        assert_eq!(seq.current(), Ok(&3.0));
        assert_eq!(seq.previous(), Some(&2.0));
    }

    #[test]
    fn add_before_at_the_front_moves_the_head() {
        let mut seq = Sequence::new();
        seq.add_after(2.0);

        seq.start();
        seq.add_before(1.0);

        assert_eq!(contents(&seq), [1.0, 2.0]);
        assert_eq!(seq.current(), Ok(&1.0));
        assert_eq!(seq.previous(), None);
    }

    #[test]
    fn add_before_in_the_middle_keeps_the_precursor() {
        let mut seq = Sequence::new();
        seq.add_after(1.0);
        seq.add_after(3.0);

        // cursor on 3.0, precursor on 1.0
        seq.add_before(2.0);

        assert_eq!(contents(&seq), [1.0, 2.0, 3.0]);
        assert_eq!(seq.current(), Ok(&2.0));
        assert_eq!(seq.previous(), Some(&1.0));
    }

    #[test]
    fn add_before_without_current_prepends() {
        let mut seq = Sequence::new();
        seq.add_after(2.0);
        assert!(seq.advance().is_ok());

        seq.add_before(1.0);
        assert_eq!(contents(&seq), [1.0, 2.0]);
        assert_eq!(seq.current(), Ok(&1.0));
    }

    #[test]
    fn add_after_and_add_before_agree_on_empty() {
        let mut with_after = Sequence::new();
        with_after.add_after(7.0);

        let mut with_before = Sequence::new();
        with_before.add_before(7.0);

        assert_eq!(contents(&with_after), contents(&with_before));
        assert_eq!(with_after.current(), with_before.current());
        assert_eq!(with_after.len(), with_before.len());
    }

    #[test]
    fn add_first_pushes_like_a_stack() {
        let mut seq = Sequence::new();
        seq.add_first(3.0);
        seq.add_first(2.0);
        seq.add_first(1.0);

        assert_eq!(contents(&seq), [1.0, 2.0, 3.0]);
        assert_eq!(seq.current(), Ok(&1.0));

        // pop
        assert_eq!(seq.remove_current(), Ok(1.0));
        assert_eq!(seq.current(), Ok(&2.0));
    }

    #[test]
    fn remove_current_in_the_middle() {
        let mut seq = Sequence::new();
        seq.add_after(1.0);
        seq.add_after(2.0);
        seq.add_after(3.0);

        seq.start();
        assert!(seq.advance().is_ok());
        assert_eq!(seq.current(), Ok(&2.0));

        assert_eq!(seq.remove_current(), Ok(2.0));
        assert_eq!(contents(&seq), [1.0, 3.0]);
        assert_eq!(seq.current(), Ok(&3.0));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn remove_current_at_the_head() {
        let mut seq = Sequence::new();
        seq.add_after(1.0);
        seq.add_after(2.0);

        seq.start();
        assert_eq!(seq.remove_current(), Ok(1.0));
        assert_eq!(contents(&seq), [2.0]);
        assert_eq!(seq.current(), Ok(&2.0));
        assert_eq!(seq.previous(), None);
    }

    #[test]
    fn remove_current_at_the_tail_retargets_the_tail() {
        let mut seq = Sequence::new();
        seq.add_after(1.0);
        seq.add_after(2.0);
        seq.add_after(3.0);

        // cursor on the last element
        assert_eq!(seq.remove_current(), Ok(3.0));
        assert!(!seq.is_current());
        assert_eq!(seq.previous(), None);

        // a no-current append must land behind the new tail
        seq.add_after(4.0);
        assert_eq!(contents(&seq), [1.0, 2.0, 4.0]);
    }

    #[test]
    fn remove_sole_element_then_advance_is_an_error() {
        let mut seq = Sequence::with_first(1.0);

        assert_eq!(seq.remove_current(), Ok(1.0));
        assert!(seq.is_empty());
        assert!(!seq.is_current());
        assert_eq!(seq.advance(), Err(NoCurrentError));
        assert_eq!(seq.remove_current(), Err(NoCurrentError));
    }

    #[test]
    fn size_tracks_every_mutation() {
        let mut seq = Sequence::new();
        let mut expected = 0_usize;

        for i in 0..4 {
            seq.add_after(f64::from(i));
            expected += 1;
            assert_eq!(seq.len(), expected);
        }
        seq.start();
        seq.add_before(-1.0);
        expected += 1;
        assert_eq!(seq.len(), expected);

        while seq.is_current() {
            assert!(seq.remove_current().is_ok());
            expected -= 1;
            assert_eq!(seq.len(), expected);
        }
        assert!(seq.is_empty());
    }

    #[test]
    fn cursor_locality_matches_insertion_order() {
        let mut seq = Sequence::new();
        for i in 0..6 {
            seq.add_after(f64::from(i));
        }

        for k in 0..6 {
            seq.start();
            for _ in 0..k {
                assert!(seq.advance().is_ok());
            }
            assert_eq!(seq.current(), Ok(&f64::from(k)));
        }
    }
}
