use std::iter::FusedIterator;

use derive_more::Constructor;

/// Forward adapter drawing pairs from two iterators in lockstep. Exhausted
/// as soon as either side is.
#[derive(Clone, Debug, Constructor)]
pub struct Zip<A, B> {
    left: A,
    right: B,
}

/// Iterate two sequences in parallel, stopping at the shorter one.
pub fn zip<A, B>(left: A, right: B) -> Zip<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator,
{
    Zip::new(left.into_iter(), right.into_iter())
}

impl<A: Iterator, B: Iterator> Iterator for Zip<A, B> {
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.left.next()?, self.right.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left_lo, left_hi) = self.left.size_hint();
        let (right_lo, right_hi) = self.right.size_hint();

        let upper = match (left_hi, right_hi) {
            (Some(left), Some(right)) => Some(left.min(right)),
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (None, None) => None,
        };
        (left_lo.min(right_lo), upper)
    }
}

impl<A: ExactSizeIterator, B: ExactSizeIterator> ExactSizeIterator for Zip<A, B> {}

impl<A: FusedIterator, B: FusedIterator> FusedIterator for Zip<A, B> {}
