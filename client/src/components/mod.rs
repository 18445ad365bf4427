//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the backend client, session and config from Leptos context
//! providers set up by the application shell.

pub mod add_article_modal;
pub mod blog_card;
pub mod blog_section;
pub mod fields;
pub mod header;
pub mod login_modal;
pub mod modal_frame;
pub mod notification;
pub mod register_modal;
