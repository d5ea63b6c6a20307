//! HTTP request handlers for the web server.

mod pages;
mod seo;
mod static_files;

// Re-export handlers for use by the router
pub use pages::{home, not_found, service_page};
pub use seo::{robots, sitemap};
pub use static_files::{serve_css, serve_js, serve_media};
