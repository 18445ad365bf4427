//! Async actions behind the header's forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components gather form state and hand it to these functions together with
//! a `RecordClient`. Every outcome comes back as a `Result`, so each modal can
//! end in a visible state instead of a silent no-op.

pub mod article;
pub mod auth;
