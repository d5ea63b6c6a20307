//! Content models.

mod service;

pub use service::{GalleryImage, PageMeta, ServiceHero, ServiceRecord, WhyChooseUs};
