//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `modals`, `articles`) so individual
//! components can depend on small focused models.

pub mod articles;
pub mod modals;
pub mod session;
