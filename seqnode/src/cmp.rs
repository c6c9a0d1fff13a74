use crate::NodePtr;

impl<E> PartialEq for NodePtr<E> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr.eq(&other.ptr)
    }
}

impl<E> PartialEq<Option<Self>> for NodePtr<E> {
    #[inline]
    fn eq(&self, other: &Option<Self>) -> bool {
        other.map_or(false, |other| self.eq(&other))
    }
}

impl<E> PartialOrd for NodePtr<E> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<E> Eq for NodePtr<E> {}
impl<E> Ord for NodePtr<E> {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.ptr.cmp(&other.ptr)
    }
}
