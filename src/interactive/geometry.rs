//! Split percentage and container geometry.

/// Split percentage bounds.
pub mod split_bounds {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;
    pub const DEFAULT: f64 = 50.0;
}

/// Horizontal reveal boundary of the comparison slider, always within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SplitPercent(f64);

impl SplitPercent {
    /// Create a split, clamping into range. NaN gives the default.
    #[must_use]
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(split_bounds::MIN, split_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Value for the accessible range input.
    #[must_use]
    pub fn rounded(self) -> u8 {
        // Range is 0..=100, so the cast cannot truncate.
        self.0.round() as u8
    }

    /// Split under a pointer at `client_x` over `container`.
    ///
    /// Returns `None` when the container has no usable width yet, or when
    /// the coordinate is not a number.
    #[must_use]
    pub fn from_client_x(client_x: f64, container: BoundingBox) -> Option<Self> {
        if !client_x.is_finite() || !container.has_width() {
            return None;
        }
        let x = client_x - container.left;
        Some(Self::new(x / container.width * 100.0))
    }
}

impl Default for SplitPercent {
    fn default() -> Self {
        Self(split_bounds::DEFAULT)
    }
}

/// Client-space bounding box of the slider container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub width: f64,
}

impl BoundingBox {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    fn has_width(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}
