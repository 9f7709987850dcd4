//! Colored terminal messages.
use colored::Colorize;

const TICK: &str = "✓";
const WARN: &str = "Warning:";

/// Print a success message.
pub fn success(msg: impl AsRef<str>) {
    let out = format!("{} {}", msg.as_ref().green(), TICK.green());
    println!("{}", out);
}

/// Print an informational message.
pub fn info(msg: impl AsRef<str>) {
    println!("{}", msg.as_ref().cyan());
}

/// Print a warning message.
pub fn warn(msg: impl AsRef<str>) {
    let out = format!("{} {}", WARN.yellow(), msg.as_ref());
    eprintln!("{}", out);
}
