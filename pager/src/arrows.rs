//! Arrow visibility: boundary state combined with a hover/focus signal.

use crate::{Arrows, PagingState};

/// Whether there is anything to navigate to in either direction.
pub fn can_navigate(state: &PagingState) -> bool {
    state.show_right_arrow || state.transform_position > 0.0
}

/// Applies a hover/focus enter (`true`) or leave (`false`) to `arrows_visible`.
///
/// Hovering a widget with nothing to scroll has no visible effect; leaving it is a no-op.
pub fn set_hovered(state: &mut PagingState, hovered: bool) {
    let navigable = can_navigate(state);
    if hovered {
        state.arrows_visible = navigable;
    } else if navigable {
        state.arrows_visible = false;
    }
}

pub fn arrows(state: &PagingState) -> Arrows {
    Arrows {
        left: state.arrows_visible && state.transform_position > 0.0,
        right: state.arrows_visible && state.show_right_arrow,
    }
}
