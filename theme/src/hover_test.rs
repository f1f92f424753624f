use super::*;

#[test]
fn hovered_scales_up_with_shadow() {
    let style = HoverStyle::for_hovered(true);
    assert_eq!(style.transform, "scale(1.05)");
    assert_ne!(style.box_shadow, "none");
}

#[test]
fn resting_is_identity_with_no_shadow() {
    let style = HoverStyle::for_hovered(false);
    assert_eq!(style.transform, "scale(1)");
    assert_eq!(style.box_shadow, "none");
}

#[test]
fn enter_leave_enter_lands_on_hover_style() {
    // Pointer events may interleave arbitrarily; the style depends only on
    // the latest one.
    let last = [true, false, true]
        .into_iter()
        .map(HoverStyle::for_hovered)
        .next_back();
    assert_eq!(last, Some(HoverStyle::for_hovered(true)));
}
