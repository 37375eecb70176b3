/// The pager's mutable state.
///
/// Owned by [`crate::Pager`] and only ever replaced by position model outputs. With
/// `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingState {
    /// Horizontal offset in viewport widths (`0` = start, `1` = one full page in).
    pub transform_position: f64,
    /// Nearest logical item implied by `transform_position`.
    ///
    /// Only refreshed on whole-page moves, so it lags behind during a drag.
    pub current_index: usize,
    /// The next position change must render without animation.
    pub no_transition: bool,
    /// Content extends beyond the current right edge.
    pub show_right_arrow: bool,
    /// Hover/focus affordance. Only meaningful when there is somewhere to navigate.
    pub arrows_visible: bool,
}

impl Default for PagingState {
    fn default() -> Self {
        Self {
            transform_position: 0.0,
            current_index: 0,
            no_transition: false,
            // Until the first measurement we assume there is more to the right; nothing
            // renders because `arrows_visible` starts out false.
            show_right_arrow: true,
            arrows_visible: false,
        }
    }
}

impl PagingState {
    /// Folds a position model step into the state.
    pub fn apply(&mut self, step: Step) {
        self.transform_position = step.transform_position;
        self.show_right_arrow = step.show_right_arrow;
        self.no_transition = step.no_transition;
        if let Some(index) = step.current_index {
            self.current_index = index;
        }
    }

    /// Pixel-space scroll offset for a given viewport width.
    pub fn offset_px(&self, viewport_width: f64) -> f64 {
        self.transform_position * viewport_width
    }

    /// The rendered horizontal translation, as a percentage of the container width.
    pub fn translate_percent(&self) -> f64 {
        if self.transform_position == 0.0 {
            return 0.0;
        }
        -self.transform_position * 100.0
    }
}

/// The output of [`crate::position::advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub transform_position: f64,
    pub show_right_arrow: bool,
    /// `None` when the move was a sub-page adjustment and the index should stay put.
    pub current_index: Option<usize>,
    pub no_transition: bool,
}
