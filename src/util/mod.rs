//! Small display helpers.

pub mod format;
