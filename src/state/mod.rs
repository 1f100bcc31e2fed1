//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`upload`, `history`, `detail`, `toast`) so each
//! page depends on one small, focused model. Everything here is plain data
//! with no browser types, so the transition logic tests natively; pages wrap
//! these models in `RwSignal`s and drive them from event handlers.

pub mod detail;
pub mod history;
pub mod toast;
pub mod upload;
