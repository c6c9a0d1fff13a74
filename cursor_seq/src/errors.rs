use core::{error::Error, fmt};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The error type returned when a cursor-dependent operation is invoked while
/// the sequence has no current element.
///
/// This is always a caller bug: [`is_current`](crate::Sequence::is_current)
/// tells in advance whether [`current`](crate::Sequence::current),
/// [`advance`](crate::Sequence::advance) and
/// [`remove_current`](crate::Sequence::remove_current) may be called.
pub struct NoCurrentError;

impl fmt::Display for NoCurrentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("there is no current element")
    }
}

impl Error for NoCurrentError {}
