/// An aligned read that supports a set of variant calls.
///
/// Only the row identifier is needed here: it is written into the `rows`
/// annotation so a call can be traced back to its alignments.
pub trait AlignmentRecord {
    fn row_number(&self) -> usize;
}

impl AlignmentRecord for usize {
    fn row_number(&self) -> usize {
        *self
    }
}

impl<A: AlignmentRecord + ?Sized> AlignmentRecord for &A {
    fn row_number(&self) -> usize {
        (**self).row_number()
    }
}
