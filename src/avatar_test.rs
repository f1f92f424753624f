#![cfg(not(feature = "browser"))]

use super::*;

#[test]
fn attach_without_a_page_is_noop_but_callable() {
    attach();
    attach();
}
