#![cfg(not(feature = "browser"))]

use super::*;

#[test]
fn get_is_none_off_browser() {
    let store = BrowserStore::new();
    assert_eq!(store.get("theme"), None);
}

#[test]
fn set_and_remove_are_noop_but_callable() {
    let mut store = BrowserStore::new();
    store.set("unrelated", "x");
    store.remove("unrelated");
    assert_eq!(store.get("unrelated"), None);
}
