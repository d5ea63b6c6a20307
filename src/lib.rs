//! Masonry Site - marketing website for a masonry and concrete restoration
//! business.
//!
//! Service pages are composed from a content table and rendered on the
//! server. The progressive hero and the before/after comparison slider are
//! event-driven state machines whose initial state is rendered into the
//! markup.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod interactive;
pub mod models;
pub mod page;
pub mod server;
