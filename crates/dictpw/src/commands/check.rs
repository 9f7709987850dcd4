use dictpw_password::{StrengthEstimator, Zxcvbn};

use crate::{Error, Result};

/// Print the crack time report for a password.
pub fn run(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }
    println!("{}", Zxcvbn::default().crack_times(password));
    Ok(())
}
