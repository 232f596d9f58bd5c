//! Command implementations for focusflow.
//!
//! Each command returns the text to print; `main` prints it.

mod completions;
mod config;
mod simulate;

pub use completions::completions;
pub use config::config;
pub use simulate::simulate;
