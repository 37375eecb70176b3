use pager::{Direction, Geometry, Pager, PagerOptions};

fn main() {
    // Ten 300px items in a 1000px viewport: three pages.
    let geometry = Geometry::new(3000.0, 1000.0, 10);

    let mut pager = Pager::new(
        PagerOptions::new()
            .with_on_position_change(Some(|px: f64| println!("  saved offset={px}px"))),
    );
    pager.restore_initial(geometry);
    println!("start: {:?}", pager.state());

    pager.set_hovered(true);
    for _ in 0..3 {
        pager.step(Direction::Right, geometry);
        println!(
            "right: position={} index={} arrows={:?}",
            pager.transform_position(),
            pager.current_index(),
            pager.arrows()
        );
    }

    // A short swipe snaps back, a long one pages.
    pager.begin_drag(500.0, 200.0);
    pager.drag_to(470.0, 202.0, geometry);
    pager.end_drag(470.0, geometry);
    println!("short swipe: position={}", pager.transform_position());

    pager.begin_drag(500.0, 200.0);
    pager.drag_to(600.0, 202.0, geometry);
    pager.end_drag(600.0, geometry);
    println!("long swipe: position={}", pager.transform_position());

    // Narrower viewport: keep the same item in view.
    let narrow = Geometry::new(3000.0, 600.0, 10);
    pager.reconcile(narrow);
    println!(
        "resized: position={} translate={}%",
        pager.transform_position(),
        pager.translate_percent()
    );
}
