use pager::{Arrows, Direction, Geometry, GeometryProvider, Pager, PagerOptions, PagingState};

use crate::{Easing, Subscription, Tween};

/// What the host should render this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Horizontal translation of the row, as a percentage of the container width.
    pub translate_percent: f64,
    /// Whether the host should animate towards `translate_percent` (e.g. a CSS transition).
    ///
    /// Always `false` when the controller runs its own tween.
    pub animate: bool,
    pub arrows: Arrows,
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    duration_ms: u64,
    easing: Easing,
}

/// A framework-neutral widget controller around [`pager::Pager`].
///
/// The controller owns the pager state, the geometry provider and the resize subscription. It
/// holds no UI objects; adapters drive it by forwarding events:
/// - `mount` / `unmount` around the widget's lifetime
/// - pointer/touch, arrow-click and hover events as they arrive
/// - `on_resize` for every resize signal, and `on_animation_frame` once per frame
///
/// Resize signals are coalesced: `on_resize` only marks a recomputation pending, and the next
/// animation frame runs it once. Any gesture or arrow click flushes a pending recomputation
/// first, so it always starts from the reconciled position.
#[derive(Debug)]
pub struct Controller<P> {
    pager: Pager,
    provider: P,
    geometry: Geometry,
    mounted: bool,
    restored: bool,
    resize_pending: bool,
    subscription: Option<Subscription>,
    transition: Option<Transition>,
    tween: Option<Tween>,
    rendered: f64,
}

impl<P: GeometryProvider> Controller<P> {
    pub fn new(options: PagerOptions, provider: P) -> Self {
        Self::from_pager(Pager::new(options), provider)
    }

    pub fn from_pager(pager: Pager, provider: P) -> Self {
        adebug!("Controller::new");
        Self {
            rendered: pager.transform_position(),
            pager,
            provider,
            geometry: Geometry::default(),
            mounted: false,
            restored: false,
            resize_pending: false,
            subscription: None,
            transition: None,
            tween: None,
        }
    }

    /// Animates page changes with a controller-driven tween instead of leaving it to the host.
    pub fn with_transition(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.transition = Some(Transition {
            duration_ms,
            easing,
        });
        self
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn state(&self) -> &PagingState {
        self.pager.state()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_resize_pending(&self) -> bool {
        self.resize_pending
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The transform position currently on screen (differs from the state while tweening).
    pub fn rendered_position(&self) -> f64 {
        self.rendered
    }

    pub fn frame(&self) -> Frame {
        Frame {
            translate_percent: if self.rendered == 0.0 {
                0.0
            } else {
                -self.rendered * 100.0
            },
            animate: self.transition.is_none() && !self.pager.state().no_transition,
            arrows: self.pager.arrows(),
        }
    }

    fn measure(&mut self) -> Geometry {
        self.geometry = self.provider.measure();
        self.geometry
    }

    /// Starts the widget's lifetime: keeps `subscription` alive until `unmount` and restores
    /// the configured initial offset.
    pub fn mount(&mut self, subscription: Subscription) {
        if self.mounted {
            awarn!("Controller::mount: already mounted, replacing the resize subscription");
        }
        adebug!("Controller::mount");
        self.mounted = true;
        self.subscription = Some(subscription);
        self.pager.abort_drag();
        let geometry = self.measure();
        self.restored = self.pager.restore_initial(geometry);
        self.sync_rendered(0);
    }

    /// Ends the widget's lifetime. The resize subscription is released and any pending
    /// recomputation or animation is discarded; later events are ignored until `mount`.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        adebug!(
            discarded_resize = self.resize_pending,
            "Controller::unmount"
        );
        self.mounted = false;
        self.resize_pending = false;
        self.tween = None;
        self.subscription = None;
        self.pager.abort_drag();
    }

    /// Records a resize signal. The recomputation runs on the next animation frame.
    pub fn on_resize(&mut self) {
        if !self.mounted {
            return;
        }
        atrace!(already_pending = self.resize_pending, "Controller::on_resize");
        self.resize_pending = true;
    }

    /// The item count changed: restore from the last reported pixel offset.
    pub fn on_items_changed(&mut self) {
        if !self.mounted {
            return;
        }
        let saved_px = if self.restored {
            self.pager.offset_px(self.geometry)
        } else {
            self.pager.options().initial_offset_px()
        };
        let geometry = self.measure();
        if self.pager.restore(geometry, saved_px) {
            self.restored = true;
            self.resize_pending = false;
        }
        self.sync_rendered(0);
    }

    /// Runs once per animation frame.
    ///
    /// Applies a pending resize recomputation, then advances the tween. Returns the rendered
    /// transform position when it changed this frame.
    pub fn on_animation_frame(&mut self, now_ms: u64) -> Option<f64> {
        if !self.mounted {
            return None;
        }
        let before = self.rendered;
        self.flush_resize(now_ms);

        if let Some(tween) = self.tween {
            self.rendered = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                self.tween = None;
            }
        }

        (self.rendered != before || self.tween.is_some()).then_some(self.rendered)
    }

    fn flush_resize(&mut self, now_ms: u64) {
        if !self.resize_pending {
            return;
        }
        self.resize_pending = false;
        let geometry = self.measure();
        if self.restored {
            self.pager.reconcile(geometry);
        } else {
            // Layout arrived after mount: the initial offset has not been applied yet.
            self.restored = self.pager.restore_initial(geometry);
        }
        self.sync_rendered(now_ms);
    }

    /// Arrow click.
    pub fn click_arrow(&mut self, direction: Direction, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        self.flush_resize(now_ms);
        let geometry = self.measure();
        let moved = self.pager.step(direction, geometry);
        self.sync_rendered(now_ms);
        moved
    }

    /// Pointer/touch down.
    pub fn pointer_down(&mut self, x: f64, y: f64, now_ms: u64) {
        if !self.mounted {
            return;
        }
        self.flush_resize(now_ms);
        self.pager.begin_drag(x, y);
    }

    /// Pointer/touch move. Returns `true` when the host must prevent default scrolling.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.mounted {
            return false;
        }
        let geometry = self.measure();
        let response = self.pager.drag_to(x, y, geometry);
        self.sync_rendered(0);
        response.prevents_default()
    }

    /// Pointer/touch up.
    pub fn pointer_up(&mut self, x: f64, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        let geometry = self.measure();
        let settled = self.pager.end_drag(x, geometry);
        self.sync_rendered(now_ms);
        settled
    }

    /// Pointer/touch cancel.
    pub fn pointer_cancel(&mut self, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        let geometry = self.measure();
        let settled = self.pager.cancel_drag(geometry);
        self.sync_rendered(now_ms);
        settled
    }

    /// Hover or focus entered the widget.
    pub fn hover_enter(&mut self) {
        if self.mounted {
            self.pager.set_hovered(true);
        }
    }

    /// Hover or focus left the widget.
    pub fn hover_leave(&mut self) {
        if self.mounted {
            self.pager.set_hovered(false);
        }
    }

    /// Brings the rendered position in line with the pager state.
    ///
    /// `no_transition` changes (drags, resizes, restores) snap; animated ones start or retarget
    /// the tween when a transition is configured.
    fn sync_rendered(&mut self, now_ms: u64) {
        let target = self.pager.transform_position();
        let transition = match self.transition {
            Some(t) if !self.pager.state().no_transition => t,
            _ => {
                self.tween = None;
                self.rendered = target;
                return;
            }
        };

        match self.tween.as_mut() {
            Some(tween) if tween.to == target => {}
            Some(tween) => tween.retarget(now_ms, target),
            None if self.rendered == target => {}
            None => {
                self.tween = Some(Tween::new(
                    self.rendered,
                    target,
                    now_ms,
                    transition.duration_ms,
                    transition.easing,
                ));
            }
        }
    }
}
