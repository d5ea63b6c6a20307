//! Service record model.
//!
//! A service record is the static content bundle behind one `/services/<key>`
//! page: search metadata, hero media, description, the "why choose us" block
//! and the gallery.

use serde::{Deserialize, Serialize};

/// Search-engine metadata for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// Metadata used when a service key cannot be resolved.
    pub fn not_found() -> Self {
        Self {
            title: "Service Not Found".to_string(),
            description: None,
        }
    }
}

/// Hero media and heading for a service page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHero {
    /// High-fidelity background image.
    pub bg_image: String,
    /// Low-fidelity placeholder shown until `bg_image` has loaded.
    pub bg_low_image: String,
    pub eyebrow: String,
    pub heading_line1: String,
    pub heading_line2: String,
}

/// The "why choose us" block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhyChooseUs {
    pub image: String,
    pub low_image: String,
    pub lead: String,
    /// Ordered selling points.
    pub points: Vec<String>,
}

/// A single gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Complete content for one service offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Identifier used in the page URL.
    pub key: String,
    pub meta: PageMeta,
    pub hero: ServiceHero,
    pub description: String,
    pub why: WhyChooseUs,
    pub gallery: Vec<GalleryImage>,
}

impl ServiceRecord {
    /// URL path of the service page.
    pub fn path(&self) -> String {
        format!("/services/{}", self.key)
    }
}
