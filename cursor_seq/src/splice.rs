//! Whole-sequence operations: O(1) append by splice, copying append,
//! concatenation and deep copy.

use seqnode::{chain, AllocateError, NodePtr};

use crate::{Ends, Sequence};

impl<E> Sequence<E> {
    /// Moves every element of `other` to the back of this sequence in O(1).
    ///
    /// The chains are spliced, not copied: this sequence's tail is linked to
    /// `other`'s head and `other`'s tail becomes the new tail. Taking `other`
    /// by value is what makes the splice sound — the cells change owner
    /// instead of being shared, so there is no sequence left behind that
    /// could observe them.
    ///
    /// The current element of this sequence stays where it was; `other`'s
    /// cursor position is discarded.
    pub fn append(&mut self, mut other: Self) {
        let Some(appended) = other.ends.take() else {
            return;
        };
        let appended_len = other.len;
        // `other` is dropped at the end of this call; emptied out, its drop
        // has nothing left to free.
        other.len = 0;
        other.cursor = None;
        other.precursor = None;

        match self.ends.as_mut() {
            Some(ends) => {
                // SAFETY:
                // The tail cell is on this sequence's chain, so it is live,
                // and holding `&mut self` means it is not aliased.
                unsafe { ends.tail.set_next(Some(appended.head)) };
                ends.tail = appended.tail;
            }
            None => self.ends = Some(appended),
        }
        self.len += appended_len;
    }

    /// Attempts to add a deep copy of every element of `other` to the back of
    /// this sequence.
    ///
    /// This is the copying alternative to [`append`](Self::append) for
    /// callers that still need `other` afterwards. O(n) in `other`'s length.
    /// The current element of this sequence stays where it was and `other` is
    /// not modified.
    ///
    /// # Errors
    /// If allocation fails, this returns an [`AllocateError`] and leaves both
    /// sequences untouched.
    pub fn try_append_cloned(&mut self, other: &Self) -> Result<(), AllocateError>
    where
        E: Clone,
    {
        // SAFETY:
        // `other`'s chain is live and borrowed immutably for this call.
        let copy = unsafe { chain::try_copy_with_tail(other.head()) }?;
        let Some((head, tail)) = copy else {
            return Ok(());
        };

        match self.ends.as_mut() {
            Some(ends) => {
                // SAFETY:
                // The tail cell is on this sequence's chain, so it is live,
                // and holding `&mut self` means it is not aliased.
                unsafe { ends.tail.set_next(Some(head)) };
                ends.tail = tail;
            }
            None => self.ends = Some(Ends { head, tail }),
        }
        self.len += other.len;
        Ok(())
    }

    /// Adds a deep copy of every element of `other` to the back of this
    /// sequence.
    ///
    /// See [`try_append_cloned`](Self::try_append_cloned).
    pub fn append_cloned(&mut self, other: &Self)
    where
        E: Clone,
    {
        AllocateError::unwrap_result(self.try_append_cloned(other));
    }

    /// Attempts to create a new sequence holding deep copies of `s1`'s
    /// elements followed by `s2`'s.
    ///
    /// The result has no current element; `s1` and `s2` are not modified.
    ///
    /// # Errors
    /// If allocation fails, everything copied so far is freed and an
    /// [`AllocateError`] is returned.
    pub fn try_concatenation(s1: &Self, s2: &Self) -> Result<Self, AllocateError>
    where
        E: Clone,
    {
        let mut answer = Self::new();
        // SAFETY:
        // `s1`'s chain is live and borrowed immutably for this call.
        answer.ends =
            unsafe { chain::try_copy_with_tail(s1.head()) }?.map(|(head, tail)| Ends { head, tail });
        answer.len = s1.len;
        // On failure, dropping `answer` frees the copy of `s1`.
        answer.try_append_cloned(s2)?;
        Ok(answer)
    }

    #[must_use]
    /// Creates a new sequence holding deep copies of `s1`'s elements followed
    /// by `s2`'s.
    ///
    /// The result has no current element; `s1` and `s2` are not modified.
    pub fn concatenation(s1: &Self, s2: &Self) -> Self
    where
        E: Clone,
    {
        AllocateError::unwrap_result(Self::try_concatenation(s1, s2))
    }
}

impl<E> Clone for Sequence<E>
where
    E: Clone,
{
    /// Deep-copies the sequence.
    ///
    /// Every cell is freshly allocated, so the copy and the original share
    /// nothing; mutating one never affects the other. The cursor and
    /// precursor of the copy point at the copied counterparts of the
    /// original's cells, found by position during the single copying pass.
    fn clone(&self) -> Self {
        let mut answer = Self::new();
        let mut copied_tail: Option<NodePtr<E>> = None;

        let mut walk = self.head();
        while let Some(node) = walk {
            // SAFETY:
            // `node` is on this sequence's chain, so it is live, and it
            // cannot be mutated while `&self` is held.
            let data = unsafe { node.data_ptr().as_ref() }.clone();
            let copy = NodePtr::allocate(data, None);

            match copied_tail {
                Some(tail) => {
                    // SAFETY:
                    // The copied chain so far is exclusively ours.
                    unsafe { tail.set_next(Some(copy)) };
                    if let Some(ends) = answer.ends.as_mut() {
                        ends.tail = copy;
                    }
                }
                None => {
                    answer.ends = Some(Ends {
                        head: copy,
                        tail: copy,
                    });
                }
            }
            copied_tail = Some(copy);

            // relocate the cursor and precursor into the copied chain
            if self.cursor == Some(node) {
                answer.cursor = Some(copy);
            }
            if self.precursor == Some(node) {
                answer.precursor = Some(copy);
            }

            // SAFETY:
            // `node` is live and not mutably aliased.
            walk = unsafe { node.next() };
        }

        answer.len = self.len;
        answer
    }
}

#[cfg(test)]
mod test {
    use alloc::vec::Vec;

    use crate::Sequence;

    fn filled(values: &[u32]) -> Sequence<u32> {
        values.iter().copied().collect()
    }

    fn contents(seq: &Sequence<u32>) -> Vec<u32> {
        seq.iter().copied().collect()
    }

    #[test]
    fn append_splices_in_order() {
        let mut seq = filled(&[1, 2]);
        seq.append(filled(&[3, 4]));

        assert_eq!(contents(&seq), [1, 2, 3, 4]);
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn append_keeps_the_current_element() {
        let mut seq = filled(&[1, 2]);
        seq.start();

        seq.append(filled(&[3]));
        assert_eq!(seq.current(), Ok(&1));

        // the spliced cells are fully reachable through the cursor
        assert!(seq.advance().is_ok());
        assert!(seq.advance().is_ok());
        assert_eq!(seq.current(), Ok(&3));
    }

    #[test]
    fn append_an_empty_sequence_is_a_no_op() {
        let mut seq = filled(&[1]);
        seq.append(Sequence::new());

        assert_eq!(contents(&seq), [1]);
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn append_onto_an_empty_sequence() {
        let mut seq = Sequence::new();
        seq.append(filled(&[1, 2]));

        assert_eq!(contents(&seq), [1, 2]);
        // splicing does not create a current element
        assert!(!seq.is_current());

        // the adopted tail is usable
        seq.add_after(3);
        assert_eq!(contents(&seq), [1, 2, 3]);
    }

    #[test]
    fn append_cloned_leaves_the_other_usable() {
        let mut seq = filled(&[1, 2]);
        let other = filled(&[3, 4]);

        seq.append_cloned(&other);
        assert_eq!(contents(&seq), [1, 2, 3, 4]);
        assert_eq!(contents(&other), [3, 4]);

        // the copies are independent cells
        drop(other);
        assert_eq!(contents(&seq), [1, 2, 3, 4]);
    }

    #[test]
    fn concatenation_copies_both_in_order() {
        let s1 = filled(&[1, 2]);
        let s2 = filled(&[3]);

        let joined = Sequence::concatenation(&s1, &s2);
        assert_eq!(contents(&joined), [1, 2, 3]);
        assert_eq!(joined.len(), s1.len() + s2.len());
        assert!(!joined.is_current());
    }

    #[test]
    fn concatenation_does_not_mutate_its_arguments() {
        let mut s1 = filled(&[1, 2]);
        s1.start();
        let s2 = filled(&[3, 4]);

        let joined = Sequence::concatenation(&s1, &s2);

        assert_eq!(contents(&s1), [1, 2]);
        assert_eq!(contents(&s2), [3, 4]);
        assert_eq!(s1.current(), Ok(&1));

        // mutating the result must not leak into the sources
        drop(joined);
        assert_eq!(contents(&s1), [1, 2]);
        assert_eq!(contents(&s2), [3, 4]);
    }

    #[test]
    fn concatenation_with_empty_sides() {
        let empty = Sequence::new();
        let seq = filled(&[1]);

        assert_eq!(contents(&Sequence::concatenation(&empty, &seq)), [1]);
        assert_eq!(contents(&Sequence::concatenation(&seq, &empty)), [1]);
        assert!(Sequence::concatenation(&empty, &empty).is_empty());
    }

    #[test]
    fn clone_is_element_wise_equal_and_independent() {
        let seq = filled(&[1, 2, 3]);
        let mut copy = seq.clone();

        assert_eq!(copy.len(), seq.len());
        assert_eq!(contents(&copy), contents(&seq));

        copy.add_after(4);
        assert_eq!(seq.len(), 3);
        assert_eq!(contents(&seq), [1, 2, 3]);
        assert_eq!(contents(&copy), [1, 2, 3, 4]);
    }

    #[test]
    fn clone_relocates_the_cursor_into_the_copy() {
        let mut seq = filled(&[1, 2, 3]);
        seq.start();
        assert!(seq.advance().is_ok());
        // cursor on 2, precursor on 1

        let mut copy = seq.clone();
        assert_eq!(copy.current(), Ok(&2));
        assert_eq!(copy.previous(), Some(&1));

        // the copy's cursor must edit the copy's cells, not the original's
        assert_eq!(copy.remove_current(), Ok(2));
        assert_eq!(contents(&copy), [1, 3]);
        assert_eq!(contents(&seq), [1, 2, 3]);
        assert_eq!(seq.current(), Ok(&2));
    }

    #[test]
    fn clone_with_cursor_at_the_head_has_no_precursor() {
        let mut seq = filled(&[1, 2]);
        seq.start();

        let copy = seq.clone();
        assert_eq!(copy.current(), Ok(&1));
        assert_eq!(copy.previous(), None);
    }

    #[test]
    fn clone_of_empty_and_cursorless_sequences() {
        let empty = Sequence::<u32>::new();
        let copy = empty.clone();
        assert!(copy.is_empty());
        assert!(!copy.is_current());

        let seq = filled(&[1, 2]);
        let copy = seq.clone();
        assert!(!copy.is_current());
        assert_eq!(contents(&copy), [1, 2]);
    }
}
