//! Askama template structs for the site.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Sections are templates of their own; pages render them in order and
//! embed the resulting markup.

use std::rc::Rc;

use askama::Template;

use crate::config::{HeroSettings, Settings};
use crate::content::ServiceCatalog;
use crate::interactive::platform::{DetachedPlatform, StaticEnvironment};
use crate::interactive::{
    hero, ComparisonSlider, HeroMedia, HeroPresenter, SliderProps, SliderView, VideoGate,
    VideoPolicy,
};
use crate::models::{GalleryImage, PageMeta, ServiceHero, ServiceRecord, WhyChooseUs};
use crate::page::{Section, ServicePage};

use super::MEDIA_PREFIX;

/// Link to a service page.
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    fn from_record(record: &ServiceRecord) -> Self {
        Self {
            href: record.path(),
            label: record.hero.heading_line1.clone(),
        }
    }
}

/// Data every page layout needs.
pub struct Layout {
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub has_description: bool,
    pub nav: Vec<NavLink>,
    pub year: i32,
}

impl Layout {
    pub fn new(settings: &Settings, catalog: &ServiceCatalog, meta: &PageMeta) -> Self {
        Self {
            site_name: settings.site_name.clone(),
            title: meta.title.clone(),
            description: meta.description.clone().unwrap_or_default(),
            has_description: meta.description.is_some(),
            nav: catalog.iter().map(NavLink::from_record).collect(),
            year: chrono::Datelike::year(&chrono::Utc::now()),
        }
    }
}

/// URL of a media path as served under `/media`.
/// Absolute URLs are left alone.
pub fn media_url(src: &str) -> String {
    if src.starts_with('/') && !src.starts_with("//") {
        format!("{}{}", MEDIA_PREFIX, src)
    } else {
        src.to_string()
    }
}

/// `loading` attribute for an image.
fn loading_attr(priority: bool) -> &'static str {
    if priority {
        "eager"
    } else {
        "lazy"
    }
}

fn opacity_class(visible: bool) -> &'static str {
    if visible {
        "is-visible"
    } else {
        "is-hidden"
    }
}

/// Progressive image layers shared by both hero kinds.
pub struct ProgressiveImage {
    pub low_src: String,
    pub high_src: String,
    pub low_class: &'static str,
    pub high_class: &'static str,
    pub loading: &'static str,
}

impl ProgressiveImage {
    fn from_presenter(presenter: &HeroPresenter, priority: bool) -> Self {
        let media = presenter.media();
        let view = presenter.view();
        Self {
            low_src: media_url(&media.low_src),
            high_src: media_url(&media.high_src),
            low_class: opacity_class(view.low_visible),
            high_class: opacity_class(view.high_visible),
            loading: loading_attr(priority),
        }
    }
}

/// Mount a hero with no platform behind it. Client preferences are unknown
/// on the server, so the gate is evaluated permissively and `site.js`
/// re-evaluates it in the browser.
fn mount_hero(media: HeroMedia, policy: &VideoPolicy) -> HeroPresenter {
    HeroPresenter::mount(
        media,
        policy,
        &StaticEnvironment::default(),
        Rc::new(DetachedPlatform::default()),
    )
}

/// Hero media without a video layer.
fn still_image(low_src: &str, high_src: &str) -> HeroPresenter {
    let media = HeroMedia {
        low_src: low_src.to_string(),
        high_src: high_src.to_string(),
        video_src: None,
    };
    mount_hero(media, &VideoPolicy::default())
}

/// Home page hero with deferred background video.
#[derive(Template)]
#[template(path = "sections/home_hero.html")]
pub struct HomeHeroTemplate {
    pub image: ProgressiveImage,
    pub has_video: bool,
    pub video_src: String,
    pub root_margin: &'static str,
    pub threshold: f64,
    pub skip_on_slow_connection: bool,
    pub headline: &'static str,
    pub cta_href: &'static str,
    pub cta_text: &'static str,
}

impl HomeHeroTemplate {
    pub fn new(settings: &HeroSettings) -> Self {
        let media = HeroMedia {
            low_src: settings.poster_low_src.clone(),
            high_src: settings.poster_src.clone(),
            video_src: settings.video_src.clone(),
        };
        let presenter = mount_hero(media, &settings.policy);
        let has_video = !matches!(presenter.gate(), VideoGate::Suppressed(_));
        Self {
            image: ProgressiveImage::from_presenter(&presenter, true),
            has_video,
            video_src: presenter
                .media()
                .video_src
                .as_deref()
                .map(media_url)
                .unwrap_or_default(),
            root_margin: hero::ROOT_MARGIN,
            threshold: hero::THRESHOLD,
            skip_on_slow_connection: settings.policy.skip_on_slow_connection,
            headline: "Built on a Proven Legacy of Masonry & Concrete Restoration for Over 50 Years",
            cta_href: "/#services",
            cta_text: "Family Owned and Operated Since 1970",
        }
    }
}

/// Service page hero.
#[derive(Template)]
#[template(path = "sections/service_hero.html")]
pub struct ServiceHeroTemplate<'a> {
    pub image: ProgressiveImage,
    pub hero: &'a ServiceHero,
}

#[derive(Template)]
#[template(path = "sections/description.html")]
pub struct DescriptionTemplate<'a> {
    pub text: &'a str,
}

#[derive(Template)]
#[template(path = "sections/why_choose.html")]
pub struct WhyChooseTemplate<'a> {
    pub site_name: &'a str,
    pub image: ProgressiveImage,
    pub why: &'a WhyChooseUs,
}

/// Before/after comparison slider, rendered at its mount state.
#[derive(Template)]
#[template(path = "sections/comparison.html")]
pub struct ComparisonTemplate {
    pub id: String,
    pub props: SliderProps,
    pub before_url: String,
    pub after_url: String,
    pub view: SliderView,
    pub split: f64,
    pub loading: &'static str,
    pub aspect_ratio: String,
}

impl ComparisonTemplate {
    pub fn new(id: String, props: &SliderProps) -> Self {
        let slider = ComparisonSlider::mount(props.clone(), Rc::new(DetachedPlatform::default()));
        let props = slider.props();
        Self {
            id,
            before_url: media_url(&props.before_src),
            after_url: media_url(&props.after_src),
            view: slider.view(),
            split: slider.split().value(),
            loading: loading_attr(props.priority),
            aspect_ratio: props.aspect_ratio.to_string(),
            props: props.clone(),
        }
    }
}

/// Gallery image with its served URL.
pub struct GalleryItem<'a> {
    pub url: String,
    pub alt: &'a str,
}

#[derive(Template)]
#[template(path = "sections/gallery.html")]
pub struct GalleryTemplate<'a> {
    pub images: Vec<GalleryItem<'a>>,
}

impl<'a> GalleryTemplate<'a> {
    pub fn new(images: &'a [GalleryImage]) -> Self {
        Self {
            images: images
                .iter()
                .map(|i| GalleryItem {
                    url: media_url(&i.src),
                    alt: &i.alt,
                })
                .collect(),
        }
    }
}

/// Render one composed section to markup.
pub fn render_section(
    settings: &Settings,
    key: &str,
    section: &Section<'_>,
) -> askama::Result<String> {
    match section {
        Section::Hero {
            hero: service_hero,
            priority,
        } => ServiceHeroTemplate {
            image: ProgressiveImage::from_presenter(
                &still_image(&service_hero.bg_low_image, &service_hero.bg_image),
                *priority,
            ),
            hero: *service_hero,
        }
        .render(),
        Section::Description(text) => DescriptionTemplate { text: *text }.render(),
        Section::WhyChooseUs { why, priority } => WhyChooseTemplate {
            site_name: &settings.site_name,
            image: ProgressiveImage::from_presenter(
                &still_image(&why.low_image, &why.image),
                *priority,
            ),
            why: *why,
        }
        .render(),
        Section::Comparison(props) => {
            ComparisonTemplate::new(format!("{}-comparison", key), props).render()
        }
        Section::Gallery(images) => GalleryTemplate::new(images).render(),
    }
}

/// Card on the home page linking to a service.
pub struct ServiceCard {
    pub href: String,
    pub title: String,
    pub summary: String,
    pub image: String,
}

/// Home page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub hero_html: String,
    pub services: Vec<ServiceCard>,
}

impl HomeTemplate {
    pub fn new(settings: &Settings, catalog: &ServiceCatalog) -> askama::Result<Self> {
        let meta = PageMeta::new(
            settings.site_name.clone(),
            "Masonry and concrete restoration, family owned and operated since 1970.",
        );
        Ok(Self {
            layout: Layout::new(settings, catalog, &meta),
            hero_html: HomeHeroTemplate::new(&settings.hero).render()?,
            services: catalog
                .iter()
                .map(|r| ServiceCard {
                    href: r.path(),
                    title: r.hero.heading_line1.clone(),
                    summary: r.meta.description.clone().unwrap_or_default(),
                    image: media_url(&r.why.image),
                })
                .collect(),
        })
    }
}

/// Service page.
#[derive(Template)]
#[template(path = "service.html")]
pub struct ServiceTemplate {
    pub layout: Layout,
    pub sections: Vec<String>,
}

impl ServiceTemplate {
    pub fn new(
        settings: &Settings,
        catalog: &ServiceCatalog,
        page: &ServicePage<'_>,
    ) -> askama::Result<Self> {
        let sections = page
            .sections
            .iter()
            .map(|s| render_section(settings, page.key(), s))
            .collect::<askama::Result<Vec<_>>>()?;
        Ok(Self {
            layout: Layout::new(settings, catalog, page.meta()),
            sections,
        })
    }
}

/// Not-found page.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: Layout,
}

impl NotFoundTemplate {
    pub fn new(settings: &Settings, catalog: &ServiceCatalog) -> Self {
        Self {
            layout: Layout::new(settings, catalog, &PageMeta::not_found()),
        }
    }
}

/// Sitemap entry.
pub struct SitemapUrl {
    pub loc: String,
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
pub struct SitemapTemplate {
    pub urls: Vec<SitemapUrl>,
}

impl SitemapTemplate {
    pub fn new(settings: &Settings, catalog: &ServiceCatalog) -> Self {
        let base = settings.base_url();
        let urls = std::iter::once(format!("{}/", base))
            .chain(
                crate::page::static_params(catalog)
                    .into_iter()
                    .map(|key| format!("{}/services/{}", base, key)),
            )
            .map(|loc| SitemapUrl { loc })
            .collect();
        Self { urls }
    }
}

/// Contents of `robots.txt`.
pub fn robots_txt(settings: &Settings) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        settings.base_url()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_hero_with_video() {
        let hero = HomeHeroTemplate::new(&HeroSettings::default());
        assert!(hero.has_video);
        assert_eq!(hero.video_src, "/media/background.mp4");
        assert_eq!(hero.image.low_src, "/media/hero-poster-low.jpg");
        assert_eq!(hero.image.low_class, "is-visible");
        assert_eq!(hero.image.high_class, "is-hidden");
        assert_eq!(hero.image.loading, "eager");
    }

    #[test]
    fn test_home_hero_without_video() {
        let settings = HeroSettings {
            video_src: None,
            ..Default::default()
        };
        let hero = HomeHeroTemplate::new(&settings);
        assert!(!hero.has_video);
        assert!(hero.video_src.is_empty());
    }

    #[test]
    fn test_comparison_renders_mount_state() {
        let props =
            SliderProps::new("/b.jpg", "https://cdn.example.com/a.jpg").with_initial(150.0);
        let comparison = ComparisonTemplate::new("x".to_string(), &props);

        assert_eq!(comparison.split, 100.0);
        assert_eq!(comparison.view.clip_path, "inset(0 0% 0 0)");
        assert_eq!(comparison.view.range_value, 100);
        assert_eq!(comparison.before_url, "/media/b.jpg");
        assert_eq!(comparison.after_url, "https://cdn.example.com/a.jpg");
        assert_eq!(comparison.loading, "lazy");
        assert_eq!(comparison.aspect_ratio, "1 / 1");
    }

    #[test]
    fn test_still_image_has_no_video() {
        let presenter = still_image("/low.jpg", "/high.jpg");
        assert!(matches!(presenter.gate(), VideoGate::Suppressed(_)));
        assert!(!presenter.is_observing());

        let image = ProgressiveImage::from_presenter(&presenter, false);
        assert_eq!(image.high_src, "/media/high.jpg");
        assert_eq!(image.loading, "lazy");
    }
}
