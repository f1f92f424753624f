//! Root-element class list binding.

#[cfg(test)]
#[path = "root_classes_test.rs"]
mod root_classes_test;

use theme::state::ClassList;

/// The `<html>` element's `classList`, or a no-op off-browser.
///
/// The list is looked up per call rather than cached: the document root is
/// stable, but holding no element reference keeps the handle `'static` and
/// free to move into event closures.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl DocumentRoot {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "browser")]
    fn class_list() -> Option<web_sys::DomTokenList> {
        let document = web_sys::window()?.document()?;
        Some(document.document_element()?.class_list())
    }
}

impl ClassList for DocumentRoot {
    fn add(&mut self, class: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(list) = Self::class_list() {
                let _ = list.add_1(class);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = class;
        }
    }

    fn remove(&mut self, class: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(list) = Self::class_list() {
                let _ = list.remove_1(class);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = class;
        }
    }

    fn contains(&self, class: &str) -> bool {
        #[cfg(feature = "browser")]
        {
            Self::class_list().is_some_and(|list| list.contains(class))
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = class;
            false
        }
    }
}
