//! Whole-chain operations: deep copies and release.
//!
//! A deep copy allocates a fresh cell for every source cell, so the copy and
//! the source never share storage. All functions here walk the source exactly
//! once.

use crate::{AllocateError, NodePtr};

/// Attempts to deep-copy the chain beginning at `start`.
///
/// Returns handles to the copy's first and last cell, or [`None`] if `start`
/// is [`None`]. The source chain is not modified.
///
/// # Safety
/// Every cell reachable from `start` must be live and not mutably aliased.
///
/// # Errors
/// If an allocation fails, every cell copied so far is freed and an
/// [`AllocateError`] is returned; the source chain is left untouched.
pub unsafe fn try_copy_with_tail<E>(
    start: Option<NodePtr<E>>,
) -> Result<Option<(NodePtr<E>, NodePtr<E>)>, AllocateError>
where
    E: Clone,
{
    let Some(source) = start else {
        return Ok(None);
    };

    // SAFETY:
    // `source` is live and not mutably aliased. (safety condition)
    let data = unsafe { source.data_ptr().as_ref() }.clone();
    let head = match NodePtr::try_allocate(data, None) {
        Ok(node) => node,
        Err(error) => return Err(error.into_parts().1),
    };
    let mut tail = head;

    // SAFETY:
    // `source` is live and not mutably aliased. (safety condition)
    let mut walk = unsafe { source.next() };
    while let Some(node) = walk {
        // SAFETY:
        // `node` is reachable from `start`, so it is live and not mutably
        // aliased. (safety condition)
        let data = unsafe { node.data_ptr().as_ref() }.clone();
        match NodePtr::try_allocate(data, None) {
            Ok(copy) => {
                // SAFETY:
                // `tail` was allocated above and is exclusively ours.
                unsafe { tail.set_next(Some(copy)) };
                tail = copy;
            }
            Err(error) => {
                // SAFETY:
                // The partial copy is exclusively ours and ends at `tail`.
                unsafe { release(Some(head)) };
                return Err(error.into_parts().1);
            }
        }
        // SAFETY:
        // `node` is live and not mutably aliased. (safety condition)
        walk = unsafe { node.next() };
    }

    Ok(Some((head, tail)))
}

#[must_use]
/// Deep-copies the chain beginning at `start`.
///
/// Returns handles to the copy's first and last cell, or [`None`] if `start`
/// is [`None`]. The source chain is not modified.
///
/// # Safety
/// Every cell reachable from `start` must be live and not mutably aliased.
pub unsafe fn copy_with_tail<E>(start: Option<NodePtr<E>>) -> Option<(NodePtr<E>, NodePtr<E>)>
where
    E: Clone,
{
    // SAFETY:
    // Same contract as this function. (safety condition)
    AllocateError::unwrap_result(unsafe { try_copy_with_tail(start) })
}

/// Attempts to deep-copy the inclusive segment `[from, until]` of a chain.
///
/// Returns handles to the copy's first and last cell, or [`None`] if `from`
/// is [`None`]. The copy's last cell has no successor, whatever `until`'s
/// successor was. The source chain is not modified.
///
/// # Safety
/// `until` must be reachable from `from` by following `next` links, and every
/// cell on the way must be live and not mutably aliased.
///
/// # Errors
/// If an allocation fails, every cell copied so far is freed and an
/// [`AllocateError`] is returned; the source chain is left untouched.
pub unsafe fn try_copy_segment<E>(
    from: Option<NodePtr<E>>,
    until: NodePtr<E>,
) -> Result<Option<(NodePtr<E>, NodePtr<E>)>, AllocateError>
where
    E: Clone,
{
    let Some(first) = from else {
        return Ok(None);
    };

    // SAFETY:
    // `first` is live and not mutably aliased. (safety condition)
    let data = unsafe { first.data_ptr().as_ref() }.clone();
    let head = match NodePtr::try_allocate(data, None) {
        Ok(node) => node,
        Err(error) => return Err(error.into_parts().1),
    };
    let mut tail = head;

    let mut walk = first;
    while walk != until {
        // SAFETY:
        // `walk` is on the segment, so it is live and not mutably aliased.
        // (safety condition)
        let next = unsafe { walk.next() };
        debug_assert!(next.is_some(), "`until` must be reachable from `from`");
        let Some(node) = next else { break };

        // SAFETY:
        // `node` is on the segment. (safety condition)
        let data = unsafe { node.data_ptr().as_ref() }.clone();
        match NodePtr::try_allocate(data, None) {
            Ok(copy) => {
                // SAFETY:
                // `tail` was allocated above and is exclusively ours.
                unsafe { tail.set_next(Some(copy)) };
                tail = copy;
            }
            Err(error) => {
                // SAFETY:
                // The partial copy is exclusively ours and ends at `tail`.
                unsafe { release(Some(head)) };
                return Err(error.into_parts().1);
            }
        }
        walk = node;
    }

    Ok(Some((head, tail)))
}

#[must_use]
/// Deep-copies the inclusive segment `[from, until]` of a chain.
///
/// Returns handles to the copy's first and last cell, or [`None`] if `from`
/// is [`None`]. The source chain is not modified.
///
/// # Safety
/// `until` must be reachable from `from` by following `next` links, and every
/// cell on the way must be live and not mutably aliased.
pub unsafe fn copy_segment<E>(
    from: Option<NodePtr<E>>,
    until: NodePtr<E>,
) -> Option<(NodePtr<E>, NodePtr<E>)>
where
    E: Clone,
{
    // SAFETY:
    // Same contract as this function. (safety condition)
    AllocateError::unwrap_result(unsafe { try_copy_segment(from, until) })
}

/// Frees every cell of the chain beginning at `start`, dropping the elements.
///
/// # Safety
/// Every cell reachable from `start` must be live and exclusively owned by
/// the caller; no handle to any of them may be used afterwards.
pub unsafe fn release<E>(start: Option<NodePtr<E>>) {
    let mut walk = start;
    while let Some(node) = walk {
        // SAFETY:
        // `node` is live and exclusively ours. (safety condition)
        walk = unsafe { node.next() };
        // SAFETY:
        // `node` has not been freed yet and no handle to it survives this
        // loop iteration. (safety condition)
        drop(unsafe { node.deallocate() });
    }
}
