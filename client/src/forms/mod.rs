//! Form models behind the header's modals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form owns its field values, its client-side validation and the
//! multipart payload it submits. Validation never touches the network.

pub mod article;
pub mod login;
pub mod register;
