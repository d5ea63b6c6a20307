//! Page composition.
//!
//! Resolves a service key against the catalog and lays the page out as an
//! ordered list of sections. Composition is a pure mapping: no I/O and no
//! state, so the server and the static export share it.

use crate::content::{ServiceCatalog, HISTORIC_KEY};
use crate::error::PageError;
use crate::interactive::slider::{AspectRatio, SliderProps};
use crate::models::{GalleryImage, PageMeta, ServiceHero, ServiceRecord, WhyChooseUs};

/// Before/after pair shown on the historic restoration page.
///
/// The "after" layer is the one clipped to the left of the divider, under
/// the "Before" label, so the photos are passed in swapped order.
const HISTORIC_BEFORE_SRC: &str = "/services/historic_face_after.jpg";
const HISTORIC_AFTER_SRC: &str = "/services/historic_face_before.jpg";

/// One presentational section of a service page.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a> {
    Hero {
        hero: &'a ServiceHero,
        priority: bool,
    },
    Description(&'a str),
    WhyChooseUs {
        why: &'a WhyChooseUs,
        priority: bool,
    },
    Comparison(SliderProps),
    Gallery(&'a [GalleryImage]),
}

impl Section<'_> {
    /// Short name used in logs and the CLI listing.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Hero { .. } => "hero",
            Section::Description(_) => "description",
            Section::WhyChooseUs { .. } => "why-choose-us",
            Section::Comparison(_) => "comparison",
            Section::Gallery(_) => "gallery",
        }
    }
}

/// A fully composed service page.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicePage<'a> {
    pub record: &'a ServiceRecord,
    pub sections: Vec<Section<'a>>,
}

impl<'a> ServicePage<'a> {
    pub fn key(&self) -> &'a str {
        &self.record.key
    }

    pub fn meta(&self) -> &'a PageMeta {
        &self.record.meta
    }
}

/// Compose the page for `key`, or report that it does not exist.
pub fn compose<'a>(catalog: &'a ServiceCatalog, key: &str) -> Result<ServicePage<'a>, PageError> {
    let record = catalog
        .get(key)
        .ok_or_else(|| PageError::NotFound(key.to_string()))?;

    let mut sections = vec![
        Section::Hero {
            hero: &record.hero,
            priority: true,
        },
        Section::Description(&record.description),
        Section::WhyChooseUs {
            why: &record.why,
            priority: false,
        },
    ];

    if record.key == HISTORIC_KEY {
        sections.push(Section::Comparison(historic_comparison()));
    }

    sections.push(Section::Gallery(&record.gallery));

    Ok(ServicePage { record, sections })
}

/// Search metadata for `key`, falling back to the not-found title.
pub fn metadata(catalog: &ServiceCatalog, key: &str) -> PageMeta {
    catalog
        .get(key)
        .map(|r| r.meta.clone())
        .unwrap_or_else(PageMeta::not_found)
}

/// Every key that has a page, in catalog order.
pub fn static_params(catalog: &ServiceCatalog) -> Vec<String> {
    catalog.keys().map(str::to_string).collect()
}

fn historic_comparison() -> SliderProps {
    SliderProps::new(HISTORIC_BEFORE_SRC, HISTORIC_AFTER_SRC)
        .with_labels("Before", "After")
        .with_initial(50.0)
        .with_priority(false)
        .with_aspect_ratio(AspectRatio::new(4, 3))
}
