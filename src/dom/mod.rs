//! Browser bindings for the theme core.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules keep web-sys glue behind the core's `ClassList` and
//! `KeyStore` traits so everything above them stays testable off-browser.
//! Every operation is best-effort: a missing window, document, or storage
//! area degrades to a no-op rather than an error.

pub mod local_storage;
pub mod root_classes;
