//! Platform seams for the interactive components.
//!
//! Components never talk to the browser directly. Window listeners and
//! viewport observers are acquired through these traits and released by
//! guards when dropped, so every registration is paired with its removal no
//! matter how the component goes away.

use std::cell::Cell;
use std::rc::Rc;

/// Window-level pointer events a component can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    PointerMove,
    PointerUp,
    PointerCancel,
}

impl WindowEvent {
    /// DOM event name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowEvent::PointerMove => "pointermove",
            WindowEvent::PointerUp => "pointerup",
            WindowEvent::PointerCancel => "pointercancel",
        }
    }
}

/// Identifier handed out by a platform registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(pub u64);

/// Window that accepts global event listeners.
pub trait EventTarget {
    fn add_listener(&self, event: WindowEvent) -> RegistrationId;
    fn remove_listener(&self, id: RegistrationId);
    /// Route every later event of `pointer_id` to the pressed element until
    /// the pointer is released.
    fn capture_pointer(&self, pointer_id: i32);
}

/// Listener registrations released on drop.
pub struct ListenerGuard {
    target: Rc<dyn EventTarget>,
    ids: Vec<RegistrationId>,
}

impl ListenerGuard {
    /// Register `events` on `target` for as long as the guard lives.
    pub fn acquire(target: Rc<dyn EventTarget>, events: &[WindowEvent]) -> Self {
        let ids = events.iter().map(|e| target.add_listener(*e)).collect();
        Self { target, ids }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            self.target.remove_listener(id);
        }
    }
}

/// Observer options mirroring `IntersectionObserverInit`.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserverOptions {
    pub root_margin: String,
    pub threshold: f64,
}

/// Viewport intersection observation.
pub trait ViewportObserver {
    fn observe(&self, options: &ObserverOptions) -> RegistrationId;
    fn disconnect(&self, id: RegistrationId);
}

/// Active observation, disconnected on drop.
pub struct ObservationGuard {
    observer: Rc<dyn ViewportObserver>,
    id: RegistrationId,
}

impl ObservationGuard {
    pub fn acquire(observer: Rc<dyn ViewportObserver>, options: &ObserverOptions) -> Self {
        let id = observer.observe(options);
        Self { observer, id }
    }
}

impl Drop for ObservationGuard {
    fn drop(&mut self) {
        self.observer.disconnect(self.id);
    }
}

/// Network information exposed by the platform, when it has any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionInfo {
    pub save_data: Option<bool>,
    pub effective_type: Option<String>,
}

impl ConnectionInfo {
    pub fn saves_data(&self) -> bool {
        self.save_data.unwrap_or(false)
    }

    pub fn is_slow(&self) -> bool {
        matches!(self.effective_type.as_deref(), Some("2g" | "slow-2g"))
    }
}

/// User and device preferences consulted when a component mounts.
pub trait MediaEnvironment {
    fn prefers_reduced_motion(&self) -> bool;
    /// `None` when the platform has no network information API.
    fn connection(&self) -> Option<ConnectionInfo>;
}

/// Fixed preferences, for rendering and for hosts that read them up front.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    pub reduced_motion: bool,
    pub connection: Option<ConnectionInfo>,
}

impl MediaEnvironment for StaticEnvironment {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn connection(&self) -> Option<ConnectionInfo> {
        self.connection.clone()
    }
}

/// Platform with no window and no viewport, used when rendering markup on
/// the server. Registrations succeed and never deliver events.
#[derive(Debug, Default)]
pub struct DetachedPlatform {
    next_id: Cell<u64>,
}

impl DetachedPlatform {
    fn next_id(&self) -> RegistrationId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        RegistrationId(id)
    }
}

impl EventTarget for DetachedPlatform {
    fn add_listener(&self, _event: WindowEvent) -> RegistrationId {
        self.next_id()
    }

    fn remove_listener(&self, _id: RegistrationId) {}

    fn capture_pointer(&self, _pointer_id: i32) {}
}

impl ViewportObserver for DetachedPlatform {
    fn observe(&self, _options: &ObserverOptions) -> RegistrationId {
        self.next_id()
    }

    fn disconnect(&self, _id: RegistrationId) {}
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording platform doubles.

    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    pub struct RecordingWindow {
        next_id: RefCell<u64>,
        active: RefCell<HashMap<RegistrationId, WindowEvent>>,
        pub removed: RefCell<Vec<RegistrationId>>,
        pub captured: RefCell<Vec<i32>>,
    }

    impl RecordingWindow {
        pub fn active_count(&self) -> usize {
            self.active.borrow().len()
        }

        pub fn is_listening(&self, event: WindowEvent) -> bool {
            self.active.borrow().values().any(|e| *e == event)
        }
    }

    impl EventTarget for RecordingWindow {
        fn add_listener(&self, event: WindowEvent) -> RegistrationId {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            let id = RegistrationId(*next);
            self.active.borrow_mut().insert(id, event);
            id
        }

        fn remove_listener(&self, id: RegistrationId) {
            self.active.borrow_mut().remove(&id);
            self.removed.borrow_mut().push(id);
        }

        fn capture_pointer(&self, pointer_id: i32) {
            self.captured.borrow_mut().push(pointer_id);
        }
    }

    #[derive(Default)]
    pub struct RecordingObserver {
        next_id: RefCell<u64>,
        pub observed: RefCell<Vec<ObserverOptions>>,
        pub active: RefCell<Vec<RegistrationId>>,
    }

    impl RecordingObserver {
        pub fn active_count(&self) -> usize {
            self.active.borrow().len()
        }
    }

    impl ViewportObserver for RecordingObserver {
        fn observe(&self, options: &ObserverOptions) -> RegistrationId {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            let id = RegistrationId(*next);
            self.observed.borrow_mut().push(options.clone());
            self.active.borrow_mut().push(id);
            id
        }

        fn disconnect(&self, id: RegistrationId) {
            self.active.borrow_mut().retain(|a| *a != id);
        }
    }
}
