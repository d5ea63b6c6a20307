//! Interactive page components.
//!
//! Each component is an event-driven state machine owned by a single mount.
//! The server renders their mount-time view; `site.js` drives the same
//! transitions in the browser.

pub mod geometry;
pub mod hero;
pub mod platform;
pub mod slider;

pub use geometry::{BoundingBox, SplitPercent};
pub use hero::{HeroMedia, HeroPresenter, HeroView, VideoGate, VideoPolicy};
pub use slider::{ComparisonSlider, SliderProps, SliderView};
