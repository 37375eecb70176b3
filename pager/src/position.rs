//! The position model: pure functions from geometry plus a requested move to the next state.
//!
//! Positions are measured in viewport widths. `0` is the start of the row and
//! [`Geometry::max_position`] is the start of the last page.

use crate::{Geometry, PagingState, Step};

/// Converts a previously saved pixel offset into a pager state.
///
/// A saved offset past the last page is stale (the content shrank) and is clamped to the last
/// page. Restoration never animates.
///
/// Returns `None` for unmeasured geometry.
pub fn restore(scroll_offset_px: f64, geometry: Geometry) -> Option<PagingState> {
    if !geometry.is_measured() {
        return None;
    }

    let max_offset_px = geometry.content_width - geometry.viewport_width;
    let (offset_px, show_right_arrow) = if scroll_offset_px > max_offset_px {
        (max_offset_px, false)
    } else {
        (scroll_offset_px, geometry.overflows())
    };
    let transform_position = (offset_px / geometry.viewport_width).max(0.0);

    ptrace!(
        scroll_offset_px,
        transform_position,
        show_right_arrow,
        "position::restore"
    );

    Some(PagingState {
        transform_position,
        // The index follows the requested offset, not the clamped one.
        current_index: geometry.index_at_offset(scroll_offset_px),
        no_transition: true,
        show_right_arrow,
        arrows_visible: false,
    })
}

/// Moves `current_position` by `delta` viewport widths and clamps the result to the row.
///
/// Serves both whole-page steps (`delta = ±1`) and fractional drag deltas. The item index is
/// only recomputed when the requested delta has a non-zero integer part, so a drag moves the
/// visual offset every frame without churning the index. `delta = 0` is legal and simply
/// re-clamps and re-derives `show_right_arrow`.
///
/// Returns `None` for unmeasured geometry.
pub fn advance(
    current_position: f64,
    delta: f64,
    geometry: Geometry,
    no_transition: bool,
) -> Option<Step> {
    if !geometry.is_measured() {
        return None;
    }

    let mut next = current_position + delta;
    let mut show_right_arrow = geometry.overflows();

    // Written as `!(next > 0)` so a NaN delta lands on the start.
    if !(next > 0.0) {
        next = 0.0;
    } else {
        // `next >= max` is `(next + 1) * viewport_width >= content_width`, compared in
        // viewport units so the last page is reached without rounding drift.
        let max = geometry.max_position();
        if next >= max {
            if next > max {
                next = max;
            }
            show_right_arrow = false;
        }
    }

    let current_index = if delta.trunc() != 0.0 {
        Some(geometry.index_at_offset(next * geometry.viewport_width))
    } else {
        None
    };

    ptrace!(
        current_position,
        delta,
        next,
        show_right_arrow,
        "position::advance"
    );

    Some(Step {
        transform_position: next,
        show_right_arrow,
        current_index,
        no_transition,
    })
}

/// Re-targets the page that shows `current_index` after a geometry change.
///
/// The jump never animates, and `current_index` is preserved even when the page has to be
/// clamped to the new last page.
///
/// Returns `None` for unmeasured geometry.
pub fn reconcile(current_index: usize, geometry: Geometry) -> Option<Step> {
    if !geometry.is_measured() {
        return None;
    }
    let target_px = current_index as f64 * geometry.item_width();
    advance(target_px / geometry.viewport_width, 0.0, geometry, true)
}

/// Recomputes the item index that a transform position implies.
///
/// This is the same rounding rule the model uses internally; it is exposed so adapters can
/// check the index/position invariant.
pub fn index_for_position(transform_position: f64, geometry: Geometry) -> Option<usize> {
    if !geometry.is_measured() {
        return None;
    }
    Some(geometry.index_at_offset(transform_position * geometry.viewport_width))
}
