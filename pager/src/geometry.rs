/// A read-only snapshot of the pager's layout, in pixels.
///
/// The pager never measures layout itself. A UI layer supplies this on demand through
/// [`GeometryProvider`]; all position math is expressed as ratios of these three values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    /// Total scrollable width of the row.
    pub content_width: f64,
    /// Visible width of the viewport.
    pub viewport_width: f64,
    /// Number of logical items in the row.
    pub item_count: usize,
}

impl Geometry {
    pub fn new(content_width: f64, viewport_width: f64, item_count: usize) -> Self {
        Self {
            content_width,
            viewport_width,
            item_count,
        }
    }

    /// Returns `false` until the widget has been laid out with at least one item.
    ///
    /// Every pager operation is a no-op against unmeasured geometry.
    pub fn is_measured(&self) -> bool {
        self.item_count > 0
            && self.viewport_width.is_finite()
            && self.content_width.is_finite()
            && self.viewport_width > 0.0
            && self.content_width > 0.0
    }

    /// Whether the content is wider than the viewport.
    pub fn overflows(&self) -> bool {
        self.content_width > self.viewport_width
    }

    /// The largest valid transform position (the start of the last page), in viewport widths.
    pub fn max_position(&self) -> f64 {
        if !self.is_measured() {
            return 0.0;
        }
        ((self.content_width - self.viewport_width) / self.viewport_width).max(0.0)
    }

    /// Width of one logical item, assuming items share the row evenly.
    pub fn item_width(&self) -> f64 {
        if self.item_count == 0 {
            return 0.0;
        }
        self.content_width / self.item_count as f64
    }

    /// Maps a pixel offset to the nearest item index, clamped into `0..item_count`.
    pub(crate) fn index_at_offset(&self, offset_px: f64) -> usize {
        let last = self.item_count.saturating_sub(1);
        let raw = (offset_px / self.content_width * self.item_count as f64).round();
        if raw.is_nan() || raw <= 0.0 {
            return 0;
        }
        (raw as usize).min(last)
    }
}

/// Supplies geometry snapshots on demand.
///
/// Implementations must be callable at any time; before layout they should return a snapshot
/// for which [`Geometry::is_measured`] is `false` (e.g. `Geometry::default()`).
pub trait GeometryProvider {
    fn measure(&self) -> Geometry;
}

impl GeometryProvider for Geometry {
    fn measure(&self) -> Geometry {
        *self
    }
}

impl<F: Fn() -> Geometry> GeometryProvider for F {
    fn measure(&self) -> Geometry {
        self()
    }
}
