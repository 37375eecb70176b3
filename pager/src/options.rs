use alloc::sync::Arc;

use crate::gesture::DEFAULT_SWIPE_THRESHOLD_PX;

/// A callback fired whenever the transform position changes.
///
/// The argument is the pixel-space offset (`transform_position * viewport_width`), suitable for
/// saving and later passing back as an initial offset.
pub type OnPositionChange = Arc<dyn Fn(f64) + Send + Sync>;

/// Initial scroll offset configuration, in pixels.
#[derive(Clone)]
pub enum InitialOffset {
    /// A fixed initial offset.
    Value(f64),
    /// A lazily evaluated offset provider (called on every restore from the initial offset).
    Provider(Arc<dyn Fn() -> f64 + Send + Sync>),
}

impl InitialOffset {
    pub(crate) fn resolve(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialOffset {
    fn default() -> Self {
        Self::Value(0.0)
    }
}

impl core::fmt::Debug for InitialOffset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Pager`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
#[derive(Clone)]
pub struct PagerOptions {
    /// Pixel offset to restore on mount (e.g. a position saved from `on_position_change`).
    pub initial_offset: InitialOffset,
    /// Minimum horizontal release distance that turns a drag into a page change.
    pub swipe_threshold_px: f64,
    pub on_position_change: Option<OnPositionChange>,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl PagerOptions {
    pub fn new() -> Self {
        Self {
            initial_offset: InitialOffset::default(),
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            on_position_change: None,
        }
    }

    /// Resolves the configured initial offset, in pixels.
    pub fn initial_offset_px(&self) -> f64 {
        self.initial_offset.resolve()
    }

    pub fn with_initial_offset(mut self, initial_offset: InitialOffset) -> Self {
        self.initial_offset = initial_offset;
        self
    }

    pub fn with_initial_offset_value(mut self, offset_px: f64) -> Self {
        self.initial_offset = InitialOffset::Value(offset_px);
        self
    }

    pub fn with_initial_offset_provider(
        mut self,
        initial_offset: impl Fn() -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_offset = InitialOffset::Provider(Arc::new(initial_offset));
        self
    }

    pub fn with_swipe_threshold_px(mut self, threshold_px: f64) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    pub fn with_on_position_change(
        mut self,
        on_position_change: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) -> Self {
        self.on_position_change = on_position_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PagerOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PagerOptions")
            .field("initial_offset", &self.initial_offset)
            .field("swipe_threshold_px", &self.swipe_threshold_px)
            .finish_non_exhaustive()
    }
}
