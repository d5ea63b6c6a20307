//! Before/after comparison slider.
//!
//! The "before" image is the base layer; the "after" image sits on top,
//! clipped to the region left of the split. The split moves while a drag
//! session is active or when the accessible range input changes.
//!
//! Window listeners are held for the whole mount, because a fast drag can
//! leave the container between two move events.

use std::fmt;
use std::rc::Rc;

use super::geometry::{BoundingBox, SplitPercent};
use super::platform::{EventTarget, ListenerGuard, WindowEvent};

/// Width of the divider line in pixels.
const DIVIDER_WIDTH_PX: u32 = 2;
/// Diameter of the drag handle in pixels.
const HANDLE_SIZE_PX: u32 = 44;

const WINDOW_EVENTS: [WindowEvent; 3] = [
    WindowEvent::PointerMove,
    WindowEvent::PointerUp,
    WindowEvent::PointerCancel,
];

/// Container aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const SQUARE: AspectRatio = AspectRatio {
        width: 1,
        height: 1,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.width, self.height)
    }
}

/// Inputs of a slider instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderProps {
    pub before_src: String,
    pub after_src: String,
    pub before_alt: String,
    pub after_alt: String,
    pub before_label: String,
    pub after_label: String,
    /// Requested starting split, before clamping.
    pub initial: Option<f64>,
    /// Load images eagerly.
    pub priority: bool,
    pub aspect_ratio: AspectRatio,
}

impl SliderProps {
    pub fn new(before_src: impl Into<String>, after_src: impl Into<String>) -> Self {
        Self {
            before_src: before_src.into(),
            after_src: after_src.into(),
            before_alt: "Before".to_string(),
            after_alt: "After".to_string(),
            before_label: "Before".to_string(),
            after_label: "After".to_string(),
            initial: None,
            priority: false,
            aspect_ratio: AspectRatio::default(),
        }
    }

    pub fn with_alts(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_alt = before.into();
        self.after_alt = after.into();
        self
    }

    pub fn with_labels(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_label = before.into();
        self.after_label = after.into();
        self
    }

    pub fn with_initial(mut self, initial: f64) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Split a fresh mount starts at.
    pub fn initial_split(&self) -> SplitPercent {
        self.initial.map(SplitPercent::new).unwrap_or_default()
    }
}

/// Where a pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Container,
    Handle,
}

/// Whether an event keeps bubbling to ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: i32,
    pub client_x: f64,
}

impl PointerEvent {
    pub fn new(pointer_id: i32, client_x: f64) -> Self {
        Self {
            pointer_id,
            client_x,
        }
    }
}

/// Drag session between a pointer-down and its pointer-up or cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        pointer_id: i32,
        captured_by: PointerTarget,
    },
}

impl DragSession {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }
}

/// Style values derived from the current split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderView {
    /// `clip-path` of the "after" layer.
    pub clip_path: String,
    /// `left` of the divider line.
    pub divider_left: String,
    /// `left` of the drag handle.
    pub handle_left: String,
    /// Value of the range input.
    pub range_value: u8,
}

impl SliderView {
    pub fn from_split(split: SplitPercent) -> Self {
        let pct = split.value();
        Self {
            clip_path: format!("inset(0 {}% 0 0)", 100.0 - pct),
            divider_left: format!("calc({}% - {}px)", pct, DIVIDER_WIDTH_PX / 2),
            handle_left: format!("calc({}% - {}px)", pct, HANDLE_SIZE_PX / 2),
            range_value: split.rounded(),
        }
    }
}

/// A mounted comparison slider.
pub struct ComparisonSlider {
    props: SliderProps,
    split: SplitPercent,
    drag: DragSession,
    window: Rc<dyn EventTarget>,
    _listeners: ListenerGuard,
}

impl ComparisonSlider {
    /// Mount the slider and start listening on `window`.
    pub fn mount(props: SliderProps, window: Rc<dyn EventTarget>) -> Self {
        let split = props.initial_split();
        Self {
            props,
            split,
            drag: DragSession::Idle,
            _listeners: ListenerGuard::acquire(window.clone(), &WINDOW_EVENTS),
            window,
        }
    }

    pub fn props(&self) -> &SliderProps {
        &self.props
    }

    pub fn split(&self) -> SplitPercent {
        self.split
    }

    pub fn drag(&self) -> DragSession {
        self.drag
    }

    pub fn view(&self) -> SliderView {
        SliderView::from_split(self.split)
    }

    /// Pointer-down handler of `target`.
    ///
    /// Starts a drag session that captures the pointer and jumps the split to
    /// the pointer. The handle stops propagation so the container does not
    /// handle the same press again.
    pub fn pointer_down(
        &mut self,
        target: PointerTarget,
        event: PointerEvent,
        container: BoundingBox,
    ) -> Propagation {
        self.drag = DragSession::Dragging {
            pointer_id: event.pointer_id,
            captured_by: target,
        };
        self.window.capture_pointer(event.pointer_id);
        self.set_from_client_x(event.client_x, container);

        match target {
            PointerTarget::Handle => Propagation::Stop,
            PointerTarget::Container => Propagation::Continue,
        }
    }

    /// Deliver a pointer-down that originated on `origin`, bubbling from the
    /// handle to the container. Returns the targets whose handler ran.
    pub fn dispatch_pointer_down(
        &mut self,
        origin: PointerTarget,
        event: PointerEvent,
        container: BoundingBox,
    ) -> Vec<PointerTarget> {
        let path: &[PointerTarget] = match origin {
            PointerTarget::Handle => &[PointerTarget::Handle, PointerTarget::Container],
            PointerTarget::Container => &[PointerTarget::Container],
        };

        let mut handled = Vec::with_capacity(path.len());
        for target in path {
            handled.push(*target);
            if self.pointer_down(*target, event, container) == Propagation::Stop {
                break;
            }
        }
        handled
    }

    /// Window `pointermove`. Ignored unless a drag session is active.
    pub fn window_pointer_move(&mut self, event: PointerEvent, container: BoundingBox) {
        if !self.drag.is_dragging() {
            return;
        }
        self.set_from_client_x(event.client_x, container);
    }

    /// Window `pointerup`.
    pub fn window_pointer_up(&mut self) {
        self.end_drag();
    }

    /// Window `pointercancel`.
    pub fn window_pointer_cancel(&mut self) {
        self.end_drag();
    }

    /// Range input change. Independent of any drag session.
    pub fn set_range(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.split = SplitPercent::new(value);
    }

    fn end_drag(&mut self) {
        if let DragSession::Dragging { pointer_id, .. } = self.drag {
            tracing::trace!(pointer_id, split = self.split.value(), "drag ended");
        }
        self.drag = DragSession::Idle;
    }

    fn set_from_client_x(&mut self, client_x: f64, container: BoundingBox) {
        if let Some(split) = SplitPercent::from_client_x(client_x, container) {
            self.split = split;
        }
    }
}
