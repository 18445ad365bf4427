//! Networking modules for the hosted record backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` defines the `RecordClient` seam, `pocketbase` implements it over
//! HTTP, `api` layers typed collection helpers on top, and `types`/`error`
//! define the wire schema.

pub mod api;
pub mod client;
pub mod error;
pub mod pocketbase;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
