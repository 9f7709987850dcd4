//! Estimate how long a password would take to crack.
use indexmap::IndexMap;
use std::fmt;

/// Estimates crack times for a password.
pub trait StrengthEstimator {
    /// Crack time for each attack scenario.
    fn crack_times(&self, password: &str) -> CrackTimes;
}

/// Crack times keyed by attack scenario.
///
/// Scenario labels are snake case and kept in the order the
/// estimator reports them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrackTimes(IndexMap<String, String>);

impl CrackTimes {
    /// Add the display time for a scenario.
    pub fn insert(&mut self, scenario: impl Into<String>, time: impl Into<String>) {
        self.0.insert(scenario.into(), time.into());
    }

    /// Display time for a scenario.
    pub fn get(&self, scenario: &str) -> Option<&str> {
        self.0.get(scenario).map(|s| s.as_str())
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine if there are no scenarios.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate scenarios and display times.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for CrackTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crack times:")?;
        let width = self.0.keys().map(|k| k.len()).max().unwrap_or(0) + 1;
        for (scenario, time) in self.iter() {
            let label = title_case(&scenario.replace('_', " "));
            write!(f, "\n{:<width$}: {}", label, title_case(time), width = width)?;
        }
        Ok(())
    }
}

/// Uppercase every letter that does not follow another letter
/// and lowercase the rest.
pub fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut previous_alphabetic = false;
    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_alphabetic {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
        } else {
            output.push(c);
        }
        previous_alphabetic = c.is_alphabetic();
    }
    output
}

/// Estimator backed by [zxcvbn](https://docs.rs/zxcvbn).
#[derive(Debug, Default, Clone)]
pub struct Zxcvbn {
    user_inputs: Vec<String>,
}

impl Zxcvbn {
    /// Create an estimator that also penalizes the given inputs,
    /// for example a user name.
    pub fn with_user_inputs(user_inputs: Vec<String>) -> Self {
        Self { user_inputs }
    }
}

impl StrengthEstimator for Zxcvbn {
    fn crack_times(&self, password: &str) -> CrackTimes {
        let inputs: Vec<&str> =
            self.user_inputs.iter().map(|s| s.as_str()).collect();
        let entropy = zxcvbn::zxcvbn(password, &inputs);
        let times = entropy.crack_times();

        let mut report = CrackTimes::default();
        report.insert(
            "online_throttling_100_per_hour",
            times.online_throttling_100_per_hour().to_string(),
        );
        report.insert(
            "online_no_throttling_10_per_second",
            times.online_no_throttling_10_per_second().to_string(),
        );
        report.insert(
            "offline_slow_hashing_1e4_per_second",
            times.offline_slow_hashing_1e4_per_second().to_string(),
        );
        report.insert(
            "offline_fast_hashing_1e10_per_second",
            times.offline_fast_hashing_1e10_per_second().to_string(),
        );
        report
    }
}
