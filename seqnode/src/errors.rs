use core::{alloc::Layout, error::Error, fmt};

use alloc::alloc::handle_alloc_error;

#[derive(Clone, Copy, PartialEq, Eq)]
/// The error type returned when a cell allocation fails.
///
/// When the allocation was carrying an element into a structure, the error
/// holds the element so the caller gets it back untouched.
pub struct AllocateError<Value = ()> {
    layout: Layout,
    value: Value,
}

impl<Value> AllocateError<Value> {
    #[inline]
    /// Handles the error by calling
    /// [`handle_alloc_error`](alloc::alloc::handle_alloc_error).
    pub fn handle(self) -> ! {
        handle_alloc_error(self.layout)
    }

    #[inline]
    /// Gets the value held in the error.
    ///
    /// This is usually from attempting to insert the value into a sequence.
    pub fn into_value(self) -> Value {
        self.value
    }

    #[inline]
    /// Seperates the value from the error.
    pub fn into_parts(self) -> (Value, AllocateError) {
        (
            self.value,
            AllocateError {
                layout: self.layout,
                value: (),
            },
        )
    }

    #[inline]
    /// Unwraps the result using [`Self::handle`] when it is an error.
    pub fn unwrap_result<T>(result: Result<T, Self>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => err.handle(),
        }
    }

    #[inline]
    /// Gets the layout that could not be allocated.
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    /// Applies a function `f` to the value.
    ///
    /// This maps from an [`AllocateError<Value>`] to an [`AllocateError<U>`].
    pub fn map<U, F>(self, f: F) -> AllocateError<U>
    where
        F: FnOnce(Value) -> U,
    {
        let (value, empty) = self.into_parts();
        empty.with_value(f(value))
    }
}

impl AllocateError {
    #[must_use]
    #[inline]
    /// Creates a new error from the [`Layout`] that could not be allocated.
    pub const fn new(layout: Layout) -> Self {
        Self { layout, value: () }
    }

    #[inline]
    /// Places a value into the error.
    pub const fn with_value<Value>(self, value: Value) -> AllocateError<Value> {
        AllocateError {
            layout: self.layout,
            value,
        }
    }
}

impl fmt::Debug for AllocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AllocateError").field(&self.layout).finish()
    }
}

impl fmt::Display for AllocateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to allocate a cell (size: {}, align: {})",
            self.layout.size(),
            self.layout.align()
        )
    }
}

impl Error for AllocateError {}
