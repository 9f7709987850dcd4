//! Helper functions for the dictpw command line executable.

pub mod messages;
