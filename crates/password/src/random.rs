use rand::Rng;

/// Source of randomness for password generation.
///
/// Implemented for every [rand::Rng]; tests may implement it
/// directly to script the outcome of each decision.
pub trait RandomSource {
    /// Uniform random index in `0..len`.
    ///
    /// `len` must be greater than zero.
    fn uniform(&mut self, len: usize) -> usize;

    /// Bernoulli trial that succeeds with `probability`.
    ///
    /// A probability of zero (or less) never succeeds.
    fn chance(&mut self, probability: f64) -> bool;

    /// Choose a uniformly random element of a slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.uniform(items.len())])
        }
    }
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        self.gen_bool(probability.min(1.0))
    }
}
