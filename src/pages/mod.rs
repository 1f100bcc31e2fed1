//! One module per route.

pub mod analysis_detail;
pub mod dashboard;
pub mod home;
