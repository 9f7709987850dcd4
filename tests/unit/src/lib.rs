//! Shared helpers for the dictpw unit tests.
pub mod mock {
    use dictpw_password::RandomSource;
    use std::collections::VecDeque;

    /// Random source that replays scripted decisions.
    ///
    /// Uniform choices fall back to the first index and trials
    /// fail once the script is exhausted. Trials with a zero
    /// probability always fail without consuming the script.
    #[derive(Debug, Default)]
    pub struct Scripted {
        uniform: VecDeque<usize>,
        chance: VecDeque<bool>,
        /// Probabilities of every trial that was asked for.
        pub trials: Vec<f64>,
    }

    impl Scripted {
        /// Create a scripted source.
        pub fn new(
            uniform: impl IntoIterator<Item = usize>,
            chance: impl IntoIterator<Item = bool>,
        ) -> Self {
            Self {
                uniform: uniform.into_iter().collect(),
                chance: chance.into_iter().collect(),
                trials: Vec::new(),
            }
        }
    }

    impl RandomSource for Scripted {
        fn uniform(&mut self, len: usize) -> usize {
            self.uniform.pop_front().unwrap_or(0) % len
        }

        fn chance(&mut self, probability: f64) -> bool {
            self.trials.push(probability);
            if probability <= 0.0 {
                return false;
            }
            self.chance.pop_front().unwrap_or(false)
        }
    }
}
