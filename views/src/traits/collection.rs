/// A read-only collection with a known number of elements.
pub trait Collection<T> {
    /// Iterator over borrowed elements. Every call to [`iter`](Self::iter)
    /// starts a fresh pass.
    type Iter<'a>: ExactSizeIterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements.
    fn count(&self) -> usize;

    /// Iterates over the elements in position order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
