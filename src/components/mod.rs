//! Reusable view components.

pub mod history_card;
pub mod nav_bar;
pub mod toaster;
pub mod upload_modal;
