use std::sync::{Arc, Mutex};

use pager::{Direction, Geometry, PagerOptions};
use pager_adapter::{Controller, Easing, Subscription};

fn main() {
    // Simulate a host that owns layout and a resize listener.
    let layout = Arc::new(Mutex::new(Geometry::new(3000.0, 1000.0, 10)));
    let measure = {
        let layout = Arc::clone(&layout);
        move || *layout.lock().unwrap()
    };

    let mut c = Controller::new(PagerOptions::new().with_initial_offset_value(1000.0), measure)
        .with_transition(240, Easing::EaseOut);
    c.mount(Subscription::new(|| println!("resize listener removed")));
    println!("mounted: {:?}", c.frame());

    c.click_arrow(Direction::Right, 0);
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(pos) = c.on_animation_frame(now_ms) {
            println!("t={now_ms} rendered={pos:.3}");
        }
    }

    // A burst of resize signals collapses into one recomputation.
    *layout.lock().unwrap() = Geometry::new(3000.0, 750.0, 10);
    for _ in 0..5 {
        c.on_resize();
    }
    now_ms += 16;
    println!("after resize: {:?}", c.on_animation_frame(now_ms));

    // Swipe back one page.
    c.pointer_down(400.0, 300.0, now_ms);
    for x in [420.0, 460.0, 480.0] {
        c.pointer_move(x, 302.0);
    }
    c.pointer_up(480.0, now_ms);
    println!("after swipe: {:?}", c.state());

    c.unmount();
}
