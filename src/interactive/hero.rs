//! Progressive hero presenter.
//!
//! Two independent axes:
//! - image fidelity: the low-resolution placeholder is replaced by the full
//!   image once, when it reports load completion;
//! - video gating: background video is evaluated at mount, then deferred
//!   until the hero scrolls into view, and shown only after its first frame
//!   is decoded.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::platform::{MediaEnvironment, ObservationGuard, ObserverOptions, ViewportObserver};

/// Start loading slightly before the hero is on screen.
pub const ROOT_MARGIN: &str = "50px";
pub const THRESHOLD: f64 = 0.1;

pub fn observer_options() -> ObserverOptions {
    ObserverOptions {
        root_margin: ROOT_MARGIN.to_string(),
        threshold: THRESHOLD,
    }
}

/// Which image layer is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFidelity {
    #[default]
    LowRes,
    HighRes,
}

/// Why video was ruled out for this mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    NoVideo,
    ReducedMotion,
    SaveData,
    SlowConnection,
}

/// Video source state. Once `Assigned` or `Suppressed` it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VideoGate {
    #[default]
    Unevaluated,
    /// Allowed, waiting for the hero to intersect the viewport.
    Unassigned,
    Assigned(String),
    Suppressed(SuppressReason),
}

/// Video loading policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPolicy {
    /// Also skip video on `2g`/`slow-2g` connections.
    #[serde(default)]
    pub skip_on_slow_connection: bool,
}

impl VideoPolicy {
    fn evaluate(&self, env: &dyn MediaEnvironment) -> Option<SuppressReason> {
        if env.prefers_reduced_motion() {
            return Some(SuppressReason::ReducedMotion);
        }
        // No network information means no restriction.
        let connection = env.connection()?;
        if connection.saves_data() {
            Some(SuppressReason::SaveData)
        } else if self.skip_on_slow_connection && connection.is_slow() {
            Some(SuppressReason::SlowConnection)
        } else {
            None
        }
    }
}

/// Media of one hero instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroMedia {
    pub low_src: String,
    pub high_src: String,
    pub video_src: Option<String>,
}

/// One entry of an intersection callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
}

/// Visibility of each layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroView {
    pub low_visible: bool,
    pub high_visible: bool,
    /// Source on the `<video>` element, if it should exist at all.
    pub video_src: Option<String>,
    pub video_visible: bool,
}

/// A mounted hero.
pub struct HeroPresenter {
    media: HeroMedia,
    fidelity: ImageFidelity,
    gate: VideoGate,
    video_ready: bool,
    observation: Option<ObservationGuard>,
}

impl HeroPresenter {
    /// Mount the hero: evaluate the video gate and, when video is allowed,
    /// start observing the viewport.
    pub fn mount(
        media: HeroMedia,
        policy: &VideoPolicy,
        env: &dyn MediaEnvironment,
        observer: Rc<dyn ViewportObserver>,
    ) -> Self {
        let gate = if media.video_src.is_none() {
            VideoGate::Suppressed(SuppressReason::NoVideo)
        } else {
            match policy.evaluate(env) {
                Some(reason) => {
                    tracing::debug!(?reason, "hero video suppressed");
                    VideoGate::Suppressed(reason)
                }
                None => VideoGate::Unassigned,
            }
        };

        let observation = match gate {
            VideoGate::Unassigned => Some(ObservationGuard::acquire(observer, &observer_options())),
            _ => None,
        };

        Self {
            media,
            fidelity: ImageFidelity::LowRes,
            gate,
            video_ready: false,
            observation,
        }
    }

    pub fn media(&self) -> &HeroMedia {
        &self.media
    }

    pub fn fidelity(&self) -> ImageFidelity {
        self.fidelity
    }

    pub fn gate(&self) -> &VideoGate {
        &self.gate
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    /// High-resolution image finished loading.
    pub fn high_res_loaded(&mut self) {
        self.fidelity = ImageFidelity::HighRes;
    }

    /// Intersection observer callback. Returns the source when this call
    /// assigned it.
    pub fn intersection(&mut self, entries: &[IntersectionEntry]) -> Option<&str> {
        let intersecting = entries.first().is_some_and(|e| e.is_intersecting);
        if !intersecting || self.gate != VideoGate::Unassigned {
            return None;
        }

        let src = self.media.video_src.clone()?;
        tracing::debug!(src = %src, "hero video source assigned");
        self.gate = VideoGate::Assigned(src);
        // Later intersections are no-ops, so stop observing now.
        self.observation = None;

        match &self.gate {
            VideoGate::Assigned(src) => Some(src.as_str()),
            _ => None,
        }
    }

    /// Video element decoded its first frame.
    pub fn video_loaded_data(&mut self) {
        if matches!(self.gate, VideoGate::Assigned(_)) {
            self.video_ready = true;
        }
    }

    pub fn view(&self) -> HeroView {
        let high = self.fidelity == ImageFidelity::HighRes;
        let video_src = match &self.gate {
            VideoGate::Assigned(src) => Some(src.clone()),
            _ => None,
        };
        HeroView {
            low_visible: !high,
            high_visible: high,
            video_visible: video_src.is_some() && self.video_ready,
            video_src,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::platform::testing::RecordingObserver;
    use crate::interactive::platform::{ConnectionInfo, StaticEnvironment};

    fn media(video: bool) -> HeroMedia {
        HeroMedia {
            low_src: "/hero-poster-low.jpg".to_string(),
            high_src: "/hero-poster.jpg".to_string(),
            video_src: video.then(|| "/background.mp4".to_string()),
        }
    }

    fn save_data() -> StaticEnvironment {
        StaticEnvironment {
            reduced_motion: false,
            connection: Some(ConnectionInfo {
                save_data: Some(true),
                effective_type: None,
            }),
        }
    }

    fn mount_with(
        env: &StaticEnvironment,
        policy: &VideoPolicy,
    ) -> (HeroPresenter, Rc<RecordingObserver>) {
        let observer = Rc::new(RecordingObserver::default());
        let hero = HeroPresenter::mount(media(true), policy, env, observer.clone());
        (hero, observer)
    }

    const IN_VIEW: [IntersectionEntry; 1] = [IntersectionEntry {
        is_intersecting: true,
    }];
    const OUT_OF_VIEW: [IntersectionEntry; 1] = [IntersectionEntry {
        is_intersecting: false,
    }];

    #[test]
    fn starts_low_res_and_unassigned() {
        let (hero, observer) = mount_with(&StaticEnvironment::default(), &VideoPolicy::default());
        assert_eq!(hero.fidelity(), ImageFidelity::LowRes);
        assert_eq!(hero.gate(), &VideoGate::Unassigned);
        assert_eq!(
            hero.view(),
            HeroView {
                low_visible: true,
                high_visible: false,
                video_src: None,
                video_visible: false,
            }
        );
        assert_eq!(observer.active_count(), 1);
        assert_eq!(observer.observed.borrow()[0], observer_options());
    }

    #[test]
    fn high_res_flips_once() {
        let (mut hero, _) = mount_with(&StaticEnvironment::default(), &VideoPolicy::default());
        assert!(!hero.view().high_visible);

        hero.high_res_loaded();
        let view = hero.view();
        assert!(view.high_visible);
        assert!(!view.low_visible);

        // Further events never revert the swap.
        hero.high_res_loaded();
        hero.intersection(&IN_VIEW);
        hero.video_loaded_data();
        assert!(hero.view().high_visible);
        assert_eq!(hero.fidelity(), ImageFidelity::HighRes);
    }

    #[test]
    fn assigns_video_once_on_intersection() {
        let (mut hero, observer) =
            mount_with(&StaticEnvironment::default(), &VideoPolicy::default());

        assert_eq!(hero.intersection(&OUT_OF_VIEW), None);
        assert_eq!(hero.gate(), &VideoGate::Unassigned);

        assert_eq!(hero.intersection(&IN_VIEW), Some("/background.mp4"));
        assert_eq!(
            hero.gate(),
            &VideoGate::Assigned("/background.mp4".to_string())
        );
        assert!(!hero.is_observing());
        assert_eq!(observer.active_count(), 0);

        for _ in 0..3 {
            assert_eq!(hero.intersection(&IN_VIEW), None);
        }
    }

    #[test]
    fn empty_entries_are_ignored() {
        let (mut hero, _) = mount_with(&StaticEnvironment::default(), &VideoPolicy::default());
        assert_eq!(hero.intersection(&[]), None);
        assert_eq!(hero.gate(), &VideoGate::Unassigned);
    }

    #[test]
    fn video_shown_only_after_loaded_data() {
        let (mut hero, _) = mount_with(&StaticEnvironment::default(), &VideoPolicy::default());
        hero.video_loaded_data();
        assert!(!hero.view().video_visible);

        hero.intersection(&IN_VIEW);
        let view = hero.view();
        assert_eq!(view.video_src.as_deref(), Some("/background.mp4"));
        assert!(!view.video_visible);

        hero.video_loaded_data();
        assert!(hero.view().video_visible);
    }

    #[test]
    fn save_data_suppresses_video_forever() {
        let (mut hero, observer) = mount_with(&save_data(), &VideoPolicy::default());
        assert_eq!(
            hero.gate(),
            &VideoGate::Suppressed(SuppressReason::SaveData)
        );
        assert_eq!(observer.observed.borrow().len(), 0);

        for _ in 0..5 {
            assert_eq!(hero.intersection(&IN_VIEW), None);
        }
        hero.video_loaded_data();
        let view = hero.view();
        assert_eq!(view.video_src, None);
        assert!(!view.video_visible);
    }

    #[test]
    fn reduced_motion_suppresses_video() {
        let env = StaticEnvironment {
            reduced_motion: true,
            connection: None,
        };
        let (mut hero, _) = mount_with(&env, &VideoPolicy::default());
        assert_eq!(
            hero.gate(),
            &VideoGate::Suppressed(SuppressReason::ReducedMotion)
        );
        assert_eq!(hero.intersection(&IN_VIEW), None);
    }

    #[test]
    fn missing_connection_info_is_permissive() {
        let env = StaticEnvironment {
            reduced_motion: false,
            connection: None,
        };
        let (hero, _) = mount_with(&env, &VideoPolicy::default());
        assert_eq!(hero.gate(), &VideoGate::Unassigned);
    }

    #[test]
    fn slow_connection_only_when_enabled() {
        let env = StaticEnvironment {
            reduced_motion: false,
            connection: Some(ConnectionInfo {
                save_data: Some(false),
                effective_type: Some("2g".to_string()),
            }),
        };
        let (hero, _) = mount_with(&env, &VideoPolicy::default());
        assert_eq!(hero.gate(), &VideoGate::Unassigned);

        let strict = VideoPolicy {
            skip_on_slow_connection: true,
        };
        let (hero, _) = mount_with(&env, &strict);
        assert_eq!(
            hero.gate(),
            &VideoGate::Suppressed(SuppressReason::SlowConnection)
        );
    }

    #[test]
    fn hero_without_video_never_observes() {
        let observer = Rc::new(RecordingObserver::default());
        let mut hero = HeroPresenter::mount(
            media(false),
            &VideoPolicy::default(),
            &StaticEnvironment::default(),
            observer.clone(),
        );
        assert_eq!(hero.gate(), &VideoGate::Suppressed(SuppressReason::NoVideo));
        assert_eq!(observer.observed.borrow().len(), 0);
        assert_eq!(hero.intersection(&IN_VIEW), None);
    }

    #[test]
    fn teardown_disconnects_observer() {
        let (hero, observer) = mount_with(&StaticEnvironment::default(), &VideoPolicy::default());
        assert_eq!(observer.active_count(), 1);
        drop(hero);
        assert_eq!(observer.active_count(), 0);
    }
}
