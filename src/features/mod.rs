//! Feature implementations for focusflow.
//!
//! - Focus timer engine and its collaborators
//! - Headless simulation

pub mod focus;
pub mod simulate;
