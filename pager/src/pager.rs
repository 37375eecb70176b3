use crate::gesture::{GesturePhase, GestureRecognizer, MoveResponse, Release};
use crate::{Arrows, Direction, Geometry, PagerOptions, PagingState, Step, arrows, position};

/// A headless, page-at-a-time horizontal pager.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects or measure layout.
/// - Every operation takes a [`Geometry`] snapshot from your adapter.
/// - Operations against unmeasured geometry are no-ops and return `false`.
///
/// All state changes go through the position model and are applied atomically before the
/// method returns. For resize coalescing, subscriptions and tweens, see the `pager-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct Pager {
    options: PagerOptions,
    state: PagingState,
    gesture: GestureRecognizer,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PagerOptions::default())
    }
}

impl Pager {
    pub fn new(options: PagerOptions) -> Self {
        pdebug!(
            swipe_threshold_px = options.swipe_threshold_px,
            "Pager::new"
        );
        Self {
            gesture: GestureRecognizer::new(options.swipe_threshold_px),
            state: PagingState::default(),
            options,
        }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    /// Replaces the options. An interaction in flight is dropped when the swipe threshold
    /// changes.
    pub fn set_options(&mut self, options: PagerOptions) {
        if options.swipe_threshold_px != self.options.swipe_threshold_px {
            self.gesture = GestureRecognizer::new(options.swipe_threshold_px);
        }
        self.options = options;
    }

    pub fn set_on_position_change(
        &mut self,
        on_position_change: Option<impl Fn(f64) + Send + Sync + 'static>,
    ) {
        self.options.on_position_change = on_position_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    pub fn state(&self) -> &PagingState {
        &self.state
    }

    pub fn transform_position(&self) -> f64 {
        self.state.transform_position
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Pixel-space scroll offset for the given geometry.
    pub fn offset_px(&self, geometry: Geometry) -> f64 {
        self.state.offset_px(geometry.viewport_width)
    }

    /// Horizontal translation of the row, as a percentage of the container width.
    pub fn translate_percent(&self) -> f64 {
        self.state.translate_percent()
    }

    pub fn arrows(&self) -> Arrows {
        arrows::arrows(&self.state)
    }

    pub fn can_navigate(&self) -> bool {
        arrows::can_navigate(&self.state)
    }

    /// Hover/focus enter (`true`) or leave (`false`).
    pub fn set_hovered(&mut self, hovered: bool) {
        arrows::set_hovered(&mut self.state, hovered);
    }

    fn notify(&self, geometry: Geometry) {
        if let Some(cb) = &self.options.on_position_change {
            cb(self.offset_px(geometry));
        }
    }

    fn commit(&mut self, next: PagingState, geometry: Geometry) {
        let moved = next.transform_position != self.state.transform_position;
        self.state = next;
        if moved {
            self.notify(geometry);
        }
    }

    fn apply_step(&mut self, step: Step, geometry: Geometry) {
        let mut next = self.state;
        next.apply(step);
        self.commit(next, geometry);
    }

    /// Restores a saved pixel offset. Never animates.
    pub fn restore(&mut self, geometry: Geometry, scroll_offset_px: f64) -> bool {
        let Some(mut next) = position::restore(scroll_offset_px, geometry) else {
            return false;
        };
        next.arrows_visible = self.state.arrows_visible;
        self.commit(next, geometry);
        self.gesture.rebase(self.state.transform_position);
        true
    }

    /// Restores the configured [`crate::InitialOffset`].
    pub fn restore_initial(&mut self, geometry: Geometry) -> bool {
        let offset = self.options.initial_offset.resolve();
        self.restore(geometry, offset)
    }

    /// Moves by `delta` viewport widths from the current position.
    pub fn advance(&mut self, delta: f64, geometry: Geometry, no_transition: bool) -> bool {
        self.advance_from(self.state.transform_position, delta, geometry, no_transition)
    }

    fn advance_from(
        &mut self,
        from: f64,
        delta: f64,
        geometry: Geometry,
        no_transition: bool,
    ) -> bool {
        let Some(step) = position::advance(from, delta, geometry, no_transition) else {
            return false;
        };
        self.apply_step(step, geometry);
        true
    }

    /// Moves one page in `direction` (an arrow click). Animated.
    pub fn step(&mut self, direction: Direction, geometry: Geometry) -> bool {
        ptrace!(?direction, "Pager::step");
        self.advance(direction.page_delta(), geometry, false)
    }

    /// Re-aligns the current item after a geometry change, without animation.
    pub fn reconcile(&mut self, geometry: Geometry) -> bool {
        let Some(step) = position::reconcile(self.state.current_index, geometry) else {
            return false;
        };
        ptrace!(
            index = self.state.current_index,
            position = step.transform_position,
            "Pager::reconcile"
        );
        self.apply_step(step, geometry);
        // A drag in flight settles from the reconciled page, not the old-geometry one.
        self.gesture.rebase(self.state.transform_position);
        true
    }

    /// Pointer/touch down.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.gesture.start(x, y, self.state.transform_position);
    }

    /// Pointer/touch move. The host must prevent default scrolling when the response says so.
    pub fn drag_to(&mut self, x: f64, y: f64, geometry: Geometry) -> MoveResponse {
        let response = self.gesture.move_to(x, y, geometry.viewport_width);
        if let MoveResponse::Drag { delta } = response {
            // Drag tracking follows the finger 1:1, so it never animates.
            self.advance(delta, geometry, true);
        }
        response
    }

    /// Pointer/touch up at `x`. Returns `true` when a settle move was applied.
    pub fn end_drag(&mut self, x: f64, geometry: Geometry) -> bool {
        let release = self.gesture.end(x);
        self.settle(release, geometry)
    }

    /// Pointer/touch cancel. A horizontal drag snaps back to where it started.
    pub fn cancel_drag(&mut self, geometry: Geometry) -> bool {
        let release = self.gesture.cancel();
        self.settle(release, geometry)
    }

    /// Drops any interaction in flight without moving.
    pub fn abort_drag(&mut self) {
        self.gesture.abort();
    }

    fn settle(&mut self, release: Option<Release>, geometry: Geometry) -> bool {
        let Some(release) = release else {
            return false;
        };
        self.advance_from(release.base_position, release.page_delta, geometry, false)
    }
}
