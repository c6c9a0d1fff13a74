use core::fmt::{Debug, Formatter, Result};

use crate::{IntoIter, Iter, Sequence};

impl<E> Debug for Sequence<E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<E> Debug for Iter<'_, E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<E> Debug for IntoIter<E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_list().entries(self.as_sequence().iter()).finish()
    }
}
