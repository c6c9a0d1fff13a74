use core::cmp::Ordering;

use crate::Sequence;

impl<E> PartialEq for Sequence<E>
where
    E: PartialEq,
{
    /// Compares element-wise, front to back. The cursor position does not
    /// take part in equality.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<E> Eq for Sequence<E> where E: Eq {}

impl<E> PartialOrd for Sequence<E>
where
    E: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<E> Ord for Sequence<E>
where
    E: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}
