#![no_std]
#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(debug_assertions), warn(clippy::panic_in_result_fn))]
#![doc = include_str!("../README.md")]

extern crate alloc;

use core::{alloc::Layout, ptr::NonNull};

pub mod chain;
mod cmp;
mod errors;
mod fmt;

pub use errors::AllocateError;

/// A single cell of a chain: one element and an exclusive link to the next
/// cell.
struct Node<E> {
    data: E,
    next: Option<NodePtr<E>>,
}

#[repr(transparent)]
/// A handle to a heap-allocated [`Node`].
///
/// The handle itself is plain and copyable; it does not drop, free or borrow
/// the cell it points to. The structure that allocated the cell owns it and
/// must eventually pass the handle to [`deallocate`](Self::deallocate)
/// exactly once.
pub struct NodePtr<E> {
    ptr: NonNull<Node<E>>,
}

// Manually implemented to avoid `Copy` and `Clone` bounds on `E`
impl<E> Clone for NodePtr<E> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<E> Copy for NodePtr<E> {}

impl<E> NodePtr<E> {
    /// Attempts to allocate a new cell holding `data`, linked to `next`.
    ///
    /// # Errors
    /// If allocation fails, this returns an [`AllocateError`] carrying `data`
    /// back to the caller.
    pub fn try_allocate(data: E, next: Option<Self>) -> Result<Self, AllocateError<E>> {
        let layout = Layout::new::<Node<E>>();
        // `Node` always contains the `next` link, so the layout is never
        // zero-sized, even for zero-sized elements.
        debug_assert_ne!(layout.size(), 0);

        // SAFETY:
        // `layout` has non-zero size.
        let raw = unsafe { alloc::alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<Node<E>>()) else {
            return Err(AllocateError::new(layout).with_value(data));
        };

        // SAFETY:
        // `ptr` points to a fresh allocation valid for writes of `Node<E>`.
        unsafe { ptr.as_ptr().write(Node { data, next }) };
        Ok(Self { ptr })
    }

    #[must_use]
    /// Allocates a new cell holding `data`, linked to `next`.
    pub fn allocate(data: E, next: Option<Self>) -> Self {
        match Self::try_allocate(data, next) {
            Ok(node) => node,
            Err(error) => error.handle(),
        }
    }

    #[must_use]
    /// Gets the handle to the next cell, if there is one.
    ///
    /// # Safety
    /// The cell must not have been deallocated and must not be mutably
    /// aliased.
    pub unsafe fn next(self) -> Option<Self> {
        // SAFETY:
        // The cell is live and not mutably aliased. (safety condition)
        unsafe { self.ptr.as_ref() }.next
    }

    /// Rewires the cell's link to `next`.
    ///
    /// The previous successor, if any, is not freed; the caller must keep a
    /// handle to it or the cells behind it leak.
    ///
    /// # Safety
    /// The cell must not have been deallocated and must not be aliased.
    pub unsafe fn set_next(self, next: Option<Self>) {
        // SAFETY:
        // The cell is live and the caller has exclusive access to it.
        // (safety condition)
        unsafe { (*self.ptr.as_ptr()).next = next };
    }

    #[must_use]
    /// Gets a pointer to the cell's element.
    ///
    /// # Safety
    /// The cell must not have been deallocated.
    pub unsafe fn data_ptr(self) -> NonNull<E> {
        // SAFETY:
        // The cell is live (safety condition), so the field projection stays
        // in bounds of the allocation and is non-null.
        unsafe { NonNull::new_unchecked(&raw mut (*self.ptr.as_ptr()).data) }
    }

    /// Splices a new cell holding `data` directly behind this one.
    ///
    /// The new cell adopts this cell's successor, then this cell's link is
    /// rewired to the new cell. No other link is touched; the caller is
    /// responsible for any structure-level bookkeeping (tail, cursor, count).
    ///
    /// # Safety
    /// The cell must not have been deallocated and must not be aliased.
    pub unsafe fn insert_after(self, data: E) {
        // SAFETY:
        // The cell is live and not aliased. (safety condition)
        let next = unsafe { self.next() };
        let node = Self::allocate(data, next);
        // SAFETY:
        // The cell is live and the caller has exclusive access to it.
        // (safety condition)
        unsafe { self.set_next(Some(node)) };
    }

    /// Attempts to splice a new cell holding `data` directly behind this one.
    ///
    /// See [`insert_after`](Self::insert_after).
    ///
    /// # Safety
    /// The cell must not have been deallocated and must not be aliased.
    ///
    /// # Errors
    /// If allocation fails, this returns an [`AllocateError`] carrying `data`
    /// and leaves the chain untouched.
    pub unsafe fn try_insert_after(self, data: E) -> Result<(), AllocateError<E>> {
        // SAFETY:
        // The cell is live and not aliased. (safety condition)
        let next = unsafe { self.next() };
        let node = Self::try_allocate(data, next)?;
        // SAFETY:
        // The cell is live and the caller has exclusive access to it.
        // (safety condition)
        unsafe { self.set_next(Some(node)) };
        Ok(())
    }

    #[must_use]
    /// Frees the cell and returns its element.
    ///
    /// The cell's link is discarded, not followed; the caller must have taken
    /// the successor out beforehand if the rest of the chain is still needed.
    ///
    /// # Safety
    /// The cell must not have been deallocated before and no other handle to
    /// it may be used afterwards.
    pub unsafe fn deallocate(self) -> E {
        // SAFETY:
        // The cell is live and this is the last use of it. (safety condition)
        let node = unsafe { self.ptr.as_ptr().read() };
        let layout = Layout::new::<Node<E>>();
        // SAFETY:
        // The cell was allocated in `try_allocate` with this exact layout.
        unsafe { alloc::alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
        node.data
    }
}
