//! Built-in service content.

use crate::models::{GalleryImage, PageMeta, ServiceHero, ServiceRecord, WhyChooseUs};

/// Key of the service whose page carries the extra before/after comparison.
pub const HISTORIC_KEY: &str = "historic";

struct Entry {
    key: &'static str,
    title: &'static str,
    description: &'static str,
    eyebrow: &'static str,
    heading: (&'static str, &'static str),
    body: &'static str,
    lead: &'static str,
    points: &'static [&'static str],
    gallery: &'static [&'static str],
}

const ENTRIES: &[Entry] = &[
    Entry {
        key: "tuckpointing",
        title: "Tuckpointing & Repointing | Legacy Masonry",
        description: "Mortar joint repair and repointing that restores strength and keeps water out of your brick walls.",
        eyebrow: "Mortar Joint Repair",
        heading: ("Tuckpointing", "Done Right the First Time"),
        body: "Deteriorated mortar joints let water into a wall long before the brick itself shows damage. We grind out failing mortar to a consistent depth, match the color and strength of the original, and tool every joint by hand so the repair disappears into the wall.",
        lead: "Three generations of masons have tuckpointed the same neighborhoods we work in today.",
        points: &[
            "Mortar matched to the original color and hardness",
            "Hand-tooled joints, never smeared",
            "Full clean-up and masonry wash on completion",
        ],
        gallery: &["tuckpointing_1", "tuckpointing_2", "tuckpointing_3", "tuckpointing_4"],
    },
    Entry {
        key: HISTORIC_KEY,
        title: "Historic Masonry Restoration | Legacy Masonry",
        description: "Preservation-grade restoration of historic brick, stone and terra cotta facades.",
        eyebrow: "Preservation Work",
        heading: ("Historic Restoration", "Respecting the Original Craft"),
        body: "Historic facades need lime-based mortars, compatible replacement units and cleaning methods that never damage the fired face of the brick. We document existing conditions, test cleaning methods on inconspicuous areas and restore each elevation in stages.",
        lead: "We have restored churches, courthouses and homes listed on the historic register.",
        points: &[
            "Lime mortars and breathable repair materials",
            "Salvaged and custom-matched replacement brick",
            "Gentle cleaning that protects the fired surface",
            "Work coordinated with preservation boards",
        ],
        gallery: &["historic_1", "historic_2", "historic_3", "historic_4", "historic_5"],
    },
    Entry {
        key: "concrete",
        title: "Concrete Restoration | Legacy Masonry",
        description: "Structural concrete repair, spall restoration and protective coatings for steps, walls and slabs.",
        eyebrow: "Concrete Services",
        heading: ("Concrete Restoration", "Built to Outlast the Weather"),
        body: "Freeze-thaw cycles and corroding reinforcement break concrete apart from the inside. We remove unsound material, treat exposed steel, and rebuild profiles with repair mortars rated for the exposure, finishing to match the surrounding surface.",
        lead: "Our repairs are engineered for the freeze-thaw climate we live in.",
        points: &[
            "Spall and delamination repair",
            "Rebar treatment before patching",
            "Sealers and coatings for long-term protection",
        ],
        gallery: &["concrete_1", "concrete_2", "concrete_3"],
    },
    Entry {
        key: "chimney",
        title: "Chimney Repair & Rebuilds | Legacy Masonry",
        description: "Chimney crown, flashing and brickwork repair through full rebuilds above the roofline.",
        eyebrow: "Chimney Services",
        heading: ("Chimney Repair", "From Crown to Foundation"),
        body: "A chimney takes more weather than any other part of a masonry building. We repair cracked crowns, replace failed flashing and rebuild leaning or spalled stacks brick by brick.",
        lead: "Every chimney is inspected from the crown down before we quote.",
        points: &[
            "Crown replacement with proper drip edges",
            "Counter-flashing cut into the mortar joints",
            "Partial and full rebuilds above the roofline",
        ],
        gallery: &["chimney_1", "chimney_2", "chimney_3", "chimney_4"],
    },
    Entry {
        key: "waterproofing",
        title: "Masonry Waterproofing | Legacy Masonry",
        description: "Breathable water repellents and caulking that keep moisture out of brick and stone walls.",
        eyebrow: "Moisture Protection",
        heading: ("Waterproofing", "Keep Water Where It Belongs"),
        body: "Water is behind nearly every masonry failure. We diagnose where it enters, correct the source, and apply breathable repellents that shed rain without trapping vapor inside the wall.",
        lead: "We fix the cause of water damage, not only its symptoms.",
        points: &[
            "Moisture surveys before any treatment",
            "Vapor-permeable siloxane repellents",
            "Perimeter caulking with color-matched sealants",
        ],
        gallery: &["waterproofing_1", "waterproofing_2", "waterproofing_3"],
    },
];

impl Entry {
    fn to_record(&self) -> ServiceRecord {
        let key = self.key;
        ServiceRecord {
            key: key.to_string(),
            meta: PageMeta::new(self.title, self.description),
            hero: ServiceHero {
                bg_image: format!("/services/{key}_hero.jpg"),
                bg_low_image: format!("/services/{key}_hero_low.jpg"),
                eyebrow: self.eyebrow.to_string(),
                heading_line1: self.heading.0.to_string(),
                heading_line2: self.heading.1.to_string(),
            },
            description: self.body.to_string(),
            why: WhyChooseUs {
                image: format!("/services/{key}_why.jpg"),
                low_image: format!("/services/{key}_why_low.jpg"),
                lead: self.lead.to_string(),
                points: self.points.iter().map(|p| p.to_string()).collect(),
            },
            gallery: self
                .gallery
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    GalleryImage::new(
                        format!("/services/gallery/{name}.jpg"),
                        format!("{} project photo {}", self.heading.0, i + 1),
                    )
                })
                .collect(),
        }
    }
}

/// Build the built-in service records in display order.
pub fn records() -> Vec<ServiceRecord> {
    ENTRIES.iter().map(Entry::to_record).collect()
}
