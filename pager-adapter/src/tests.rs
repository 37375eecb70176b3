use crate::*;

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use pager::{Direction, Geometry, PagerOptions};

const EPS: f64 = 1e-9;

type SharedGeometry = Arc<Mutex<Geometry>>;

fn shared(g: Geometry) -> SharedGeometry {
    Arc::new(Mutex::new(g))
}

fn provider(g: &SharedGeometry) -> impl Fn() -> Geometry + use<> {
    let g = Arc::clone(g);
    move || *g.lock().unwrap()
}

fn three_pages() -> Geometry {
    Geometry::new(3000.0, 1000.0, 10)
}

fn counting_subscription() -> (Subscription, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let hook = Arc::clone(&calls);
    let sub = Subscription::new(move || {
        hook.fetch_add(1, Ordering::SeqCst);
    });
    (sub, calls)
}

#[test]
fn mount_restores_and_unmount_unsubscribes_once() {
    let mut c = Controller::new(
        PagerOptions::new().with_initial_offset_value(1000.0),
        three_pages(),
    );
    assert!(!c.is_mounted());

    let (sub, calls) = counting_subscription();
    c.mount(sub);
    assert!(c.is_mounted());
    assert_eq!(c.state().transform_position, 1.0);
    assert!(c.state().no_transition);
    assert_eq!(c.frame().translate_percent, -100.0);
    assert!(!c.frame().animate);

    c.unmount();
    c.unmount();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn dropping_the_controller_unsubscribes() {
    let (sub, calls) = counting_subscription();
    {
        let mut c = Controller::new(PagerOptions::new(), three_pages());
        c.mount(sub);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let (sub, calls) = counting_subscription();
    sub.unsubscribe();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(!Subscription::none().is_active());
}

#[test]
fn resize_bursts_are_coalesced_into_one_frame() {
    let g = shared(three_pages());
    let reports = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&reports);
    let opts = PagerOptions::new().with_on_position_change(Some(move |_px: f64| {
        sink.fetch_add(1, Ordering::SeqCst);
    }));
    let mut c = Controller::new(opts, provider(&g));
    c.mount(Subscription::none());
    assert!(c.click_arrow(Direction::Right, 0));
    assert_eq!(c.state().current_index, 3);
    let reported = reports.load(Ordering::SeqCst);

    *g.lock().unwrap() = Geometry::new(3000.0, 500.0, 10);
    c.on_resize();
    c.on_resize();
    c.on_resize();
    assert!(c.is_resize_pending());
    assert_eq!(c.state().transform_position, 1.0);

    let rendered = c.on_animation_frame(16).unwrap();
    assert!((rendered - 1.8).abs() < EPS);
    assert_eq!(c.state().current_index, 3);
    assert!(c.state().no_transition);
    assert_eq!(reports.load(Ordering::SeqCst), reported + 1);

    assert_eq!(c.on_animation_frame(32), None);
}

#[test]
fn unmount_discards_a_pending_resize() {
    let g = shared(three_pages());
    let mut c = Controller::new(PagerOptions::new(), provider(&g));
    c.mount(Subscription::none());
    c.click_arrow(Direction::Right, 0);

    *g.lock().unwrap() = Geometry::new(3000.0, 500.0, 10);
    c.on_resize();
    c.unmount();
    assert!(!c.is_resize_pending());
    assert_eq!(c.on_animation_frame(16), None);
    assert_eq!(c.state().transform_position, 1.0);

    // Events after teardown are ignored.
    assert!(!c.click_arrow(Direction::Right, 32));
    assert!(!c.pointer_move(0.0, 0.0));
    assert_eq!(c.state().transform_position, 1.0);
}

#[test]
fn gestures_start_from_the_reconciled_position() {
    let g = shared(three_pages());
    let mut c = Controller::new(PagerOptions::new(), provider(&g));
    c.mount(Subscription::none());
    c.click_arrow(Direction::Right, 0);

    *g.lock().unwrap() = Geometry::new(3000.0, 500.0, 10);
    c.on_resize();

    // No frame has run yet; the pointer down must flush the pending recomputation.
    c.pointer_down(300.0, 0.0, 5);
    assert!(!c.is_resize_pending());
    assert!(c.pointer_move(250.0, 2.0));
    assert!(c.pointer_cancel(10));
    assert!((c.state().transform_position - 1.8).abs() < EPS);
}

#[test]
fn vertical_moves_do_not_prevent_default() {
    let mut c = Controller::new(PagerOptions::new(), three_pages());
    c.mount(Subscription::none());
    c.pointer_down(100.0, 100.0, 0);
    assert!(!c.pointer_move(101.0, 160.0));
    assert!(!c.pointer_up(40.0, 0));
    assert_eq!(c.state().transform_position, 0.0);
}

#[test]
fn swipe_pages_and_reports_animation_to_the_host() {
    let mut c = Controller::new(PagerOptions::new(), three_pages());
    c.mount(Subscription::none());

    c.pointer_down(600.0, 0.0, 0);
    assert!(c.pointer_move(500.0, 0.0));
    assert!(!c.frame().animate);
    assert!((c.frame().translate_percent + 10.0).abs() < EPS);

    assert!(c.pointer_up(500.0, 0));
    assert_eq!(c.state().transform_position, 1.0);
    assert!(c.frame().animate);
    assert_eq!(c.frame().translate_percent, -100.0);
}

#[test]
fn tween_drives_animated_steps() {
    let mut c = Controller::new(PagerOptions::new(), three_pages())
        .with_transition(100, Easing::Linear);
    c.mount(Subscription::none());

    assert!(c.click_arrow(Direction::Right, 0));
    assert_eq!(c.state().transform_position, 1.0);
    assert!(c.is_animating());
    assert_eq!(c.rendered_position(), 0.0);
    assert!(!c.frame().animate);

    let mid = c.on_animation_frame(50).unwrap();
    assert!((mid - 0.5).abs() < EPS);

    assert_eq!(c.on_animation_frame(100), Some(1.0));
    assert!(!c.is_animating());
    assert_eq!(c.on_animation_frame(116), None);
}

#[test]
fn drags_snap_the_tween() {
    let mut c = Controller::new(PagerOptions::new(), three_pages())
        .with_transition(100, Easing::EaseOut);
    c.mount(Subscription::none());
    c.click_arrow(Direction::Right, 0);
    assert!(c.is_animating());

    c.pointer_down(500.0, 0.0, 10);
    c.pointer_move(400.0, 0.0);
    assert!(!c.is_animating());
    assert!((c.rendered_position() - 1.1).abs() < EPS);
}

#[test]
fn initial_offset_waits_for_layout() {
    let g = shared(Geometry::default());
    let mut c = Controller::new(
        PagerOptions::new().with_initial_offset_value(2000.0),
        provider(&g),
    );
    c.mount(Subscription::none());
    assert_eq!(c.state().transform_position, 0.0);
    assert!(!c.click_arrow(Direction::Right, 0));

    *g.lock().unwrap() = three_pages();
    c.on_resize();
    assert_eq!(c.on_animation_frame(16), Some(2.0));
    assert_eq!(c.state().current_index, 7);
}

#[test]
fn item_count_change_restores_the_saved_offset() {
    let g = shared(three_pages());
    let mut c = Controller::new(PagerOptions::new(), provider(&g));
    c.mount(Subscription::none());
    c.click_arrow(Direction::Right, 0);

    // Half the items: the saved 1000px is past the new last page.
    *g.lock().unwrap() = Geometry::new(1500.0, 1000.0, 5);
    c.on_items_changed();
    assert_eq!(c.state().transform_position, 0.5);
    assert!(!c.state().show_right_arrow);
    assert_eq!(c.state().current_index, 3);
}

#[test]
fn hover_toggles_arrows() {
    let mut c = Controller::new(PagerOptions::new(), three_pages());
    c.mount(Subscription::none());
    assert!(!c.frame().arrows.any());

    c.hover_enter();
    assert!(c.frame().arrows.right);
    assert!(!c.frame().arrows.left);

    c.hover_leave();
    assert!(!c.frame().arrows.any());
}

#[test]
fn easing_endpoints() {
    for e in [Easing::Linear, Easing::EaseOut, Easing::SmoothStep] {
        assert_eq!(e.sample(0.0), 0.0);
        assert_eq!(e.sample(1.0), 1.0);
    }
    let mut t = Tween::new(0.0, 2.0, 0, 0, Easing::Linear);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(5), 2.0);
    t.retarget(5, 1.0);
    assert_eq!(t.from, 2.0);
}

#[test]
fn remount_does_not_resume_a_torn_down_drag() {
    let mut c = Controller::new(PagerOptions::new(), three_pages());
    c.mount(Subscription::none());
    c.click_arrow(Direction::Right, 0);

    c.pointer_down(500.0, 0.0, 0);
    assert!(c.pointer_move(400.0, 0.0));
    c.unmount();
    assert_eq!(c.pager().gesture_phase(), pager::GesturePhase::Idle);

    c.mount(Subscription::none());
    assert_eq!(c.state().transform_position, 0.0);
    // A release from the old lifetime settles nothing.
    assert!(!c.pointer_up(400.0, 0));
    assert_eq!(c.state().transform_position, 0.0);
}

#[test]
fn resize_during_a_drag_rebases_the_release() {
    let g = shared(three_pages());
    let mut c = Controller::new(PagerOptions::new(), provider(&g));
    c.mount(Subscription::none());
    c.click_arrow(Direction::Right, 0);
    assert_eq!(c.state().current_index, 3);

    c.pointer_down(500.0, 0.0, 0);
    c.pointer_move(480.0, 0.0);
    *g.lock().unwrap() = Geometry::new(3000.0, 500.0, 10);
    c.on_resize();
    c.on_animation_frame(16);
    assert!(c.pointer_up(480.0, 32));
    assert!((c.state().transform_position - 1.8).abs() < EPS);
    assert_eq!(c.state().current_index, 3);

    // A long swipe across a resize pages from the reconciled position.
    c.pointer_down(500.0, 0.0, 48);
    c.pointer_move(480.0, 0.0);
    *g.lock().unwrap() = three_pages();
    c.on_resize();
    c.on_animation_frame(64);
    assert!((c.state().transform_position - 0.9).abs() < EPS);
    c.pointer_move(400.0, 0.0);
    assert!(c.pointer_up(400.0, 80));
    assert!((c.state().transform_position - 1.9).abs() < EPS);
    assert_eq!(c.state().current_index, 6);
}
