//! Swipe recognition for a single pointer/touch interaction.
//!
//! The recognizer only classifies input. It emits deltas and release decisions; applying them
//! to the pager state is the caller's job (see [`crate::Pager`]).

/// Default release distance, in pixels, that turns a drag into a page change.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

/// The axis an interaction committed to on its first movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Undetermined,
    Horizontal,
    Vertical,
}

/// Observable recognizer state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    Idle,
    AxisUndetermined,
    HorizontalDrag,
    VerticalDrag,
}

/// Per-interaction drag bookkeeping. Lives from `start` until `end`/`cancel`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_x: f64,
    pub start_y: f64,
    pub last_x: f64,
    pub axis: Axis,
    /// Transform position when the drag began.
    pub base_position: f64,
}

impl DragSession {
    fn new(x: f64, y: f64, base_position: f64) -> Self {
        Self {
            start_x: x,
            start_y: y,
            last_x: x,
            axis: Axis::Undetermined,
            base_position,
        }
    }
}

/// What the host should do with a move event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveResponse {
    /// Not ours: let native (vertical) scrolling happen.
    Passthrough,
    /// A horizontal drag step. The host must prevent default scrolling, and the delta (in
    /// viewport widths) is applied without a transition.
    Drag { delta: f64 },
}

impl MoveResponse {
    pub fn prevents_default(&self) -> bool {
        matches!(self, Self::Drag { .. })
    }
}

/// The settle decision for a released horizontal drag.
///
/// `page_delta` is `0` (snap back to `base_position`) or `±1` (one page from
/// `base_position`). Either way the move is animated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub base_position: f64,
    pub page_delta: f64,
}

/// Classifies drags as horizontal or vertical and decides page changes on release.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    session: Option<DragSession>,
    threshold_px: f64,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl GestureRecognizer {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            session: None,
            threshold_px: threshold_px.max(0.0),
        }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn phase(&self) -> GesturePhase {
        match self.session.map(|s| s.axis) {
            None => GesturePhase::Idle,
            Some(Axis::Undetermined) => GesturePhase::AxisUndetermined,
            Some(Axis::Horizontal) => GesturePhase::HorizontalDrag,
            Some(Axis::Vertical) => GesturePhase::VerticalDrag,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == GesturePhase::HorizontalDrag
    }

    /// Opens a new interaction at `(x, y)`, remembering the current transform position.
    pub fn start(&mut self, x: f64, y: f64, current_position: f64) {
        if self.session.is_some() {
            pwarn!("GestureRecognizer::start: previous interaction never ended, replacing it");
        }
        ptrace!(x, y, current_position, "GestureRecognizer::start");
        self.session = Some(DragSession::new(x, y, current_position));
    }

    /// Feeds a move event. The first move of an interaction locks its axis.
    pub fn move_to(&mut self, x: f64, y: f64, viewport_width: f64) -> MoveResponse {
        let Some(session) = self.session.as_mut() else {
            return MoveResponse::Passthrough;
        };

        if session.axis == Axis::Undetermined {
            let dx = (x - session.start_x).abs();
            let dy = (y - session.start_y).abs();
            session.axis = if dx > dy {
                Axis::Horizontal
            } else {
                Axis::Vertical
            };
            ptrace!(dx, dy, axis = ?session.axis, "GestureRecognizer: axis locked");
        }

        if session.axis != Axis::Horizontal {
            return MoveResponse::Passthrough;
        }

        let delta = if viewport_width > 0.0 {
            (session.last_x - x) / viewport_width
        } else {
            0.0
        };
        session.last_x = x;
        MoveResponse::Drag { delta }
    }

    /// Ends the interaction at `x`.
    ///
    /// Returns `None` unless the interaction was a horizontal drag.
    pub fn end(&mut self, x: f64) -> Option<Release> {
        let session = self.session.take()?;
        if session.axis != Axis::Horizontal {
            return None;
        }

        let displacement = x - session.start_x;
        let page_delta = if displacement.abs() < self.threshold_px {
            0.0
        } else if displacement < 0.0 {
            // Dragging left reveals the next page.
            1.0
        } else {
            -1.0
        };
        ptrace!(displacement, page_delta, "GestureRecognizer::end");

        Some(Release {
            base_position: session.base_position,
            page_delta,
        })
    }

    /// Aborts the interaction; a horizontal drag always snaps back to where it started.
    pub fn cancel(&mut self) -> Option<Release> {
        let start_x = self.session.as_ref()?.start_x;
        self.end(start_x)
    }

    /// Drops the interaction without a release.
    pub fn abort(&mut self) {
        if self.session.take().is_some() {
            ptrace!("GestureRecognizer::abort");
        }
    }

    /// Re-anchors an in-flight interaction at `position`, measured from the pointer's last
    /// location. Used when the state is re-targeted under an active drag.
    pub fn rebase(&mut self, position: f64) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        ptrace!(
            from = session.base_position,
            to = position,
            "GestureRecognizer::rebase"
        );
        session.base_position = position;
        session.start_x = session.last_x;
    }
}
