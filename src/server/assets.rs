//! Static asset constants (CSS and JavaScript).

/// Stylesheet for the site.
pub const CSS: &str = include_str!("styles.css");

/// Client behavior for the hero and comparison slider.
pub const JS: &str = include_str!("site.js");
