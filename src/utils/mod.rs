//! Utility functions
//!
//! Provides logging, time formatting and input validation helpers.

pub mod logging;
pub mod time;
pub mod validation;
