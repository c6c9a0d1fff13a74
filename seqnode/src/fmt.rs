use core::fmt::{Debug, Formatter, Pointer, Result};

use crate::NodePtr;

impl<E> Debug for NodePtr<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_tuple("NodePtr").field(&self.ptr).finish()
    }
}

impl<E> Pointer for NodePtr<E> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Pointer::fmt(&self.ptr, f)
    }
}
