/// Scoped resource release.
///
/// Views hold no external resources, so their `release` does nothing and may
/// be called any number of times. The trait exists so that views can be
/// passed where a releasable resource is expected.
pub trait Release {
    fn release(&self);

    /// Runs `f` with the receiver, then releases it.
    fn scoped<R>(&self, f: impl FnOnce(&Self) -> R) -> R
    where
        Self: Sized,
    {
        let result = f(self);
        self.release();
        result
    }
}
