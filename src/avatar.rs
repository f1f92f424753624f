//! Hover affordance for the home-page avatar.
//!
//! Purely cosmetic: the pointer scales the avatar up slightly and adds a drop
//! shadow, and leaving reverts both. The style pairs live in
//! [`theme::hover::HoverStyle`]; no state carries over between events.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

#[cfg(feature = "browser")]
use theme::consts::AVATAR_SELECTOR;
#[cfg(feature = "browser")]
use theme::hover::HoverStyle;

/// Attach pointer hover listeners to the `.home-link-avatar` element.
///
/// Pages without the avatar (anything but the home page) are a silent no-op:
/// nothing is registered and no error is raised. Both listener closures are
/// leaked — they live as long as the page does.
pub fn attach() {
    #[cfg(feature = "browser")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(element)) = document.query_selector(AVATAR_SELECTOR) else {
            return;
        };
        let Ok(avatar) = element.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };

        for (event, hovered) in [("pointerenter", true), ("pointerleave", false)] {
            let target = avatar.clone();
            let handler = Closure::wrap(Box::new(move || {
                apply_style(&target, HoverStyle::for_hovered(hovered));
            }) as Box<dyn FnMut()>);

            if avatar
                .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
                .is_ok()
            {
                handler.forget();
            }
        }
    }
}

/// Write a hover style pair to the element's inline style attributes.
#[cfg(feature = "browser")]
fn apply_style(element: &web_sys::HtmlElement, style: HoverStyle) {
    let css = element.style();
    let _ = css.set_property("transform", style.transform);
    let _ = css.set_property("box-shadow", style.box_shadow);
}
