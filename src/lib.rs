//! Click-to-toggle visibility control for password inputs.
//!
//! This crate is compiled to WebAssembly and runs in the browser. On load it
//! finds every password input present in the admin page, wraps each in a
//! positioned container, and injects a clickable eye icon that flips the
//! field between masked and plaintext rendering. The host page is only
//! responsible for loading the module and serving the icon font; all DOM
//! wiring happens here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`toggle`] | Per-field visibility state machine and icon/color mapping |
//! | [`inject`] | DOM injector: wrap fields, build controls, wire clicks |
//! | [`consts`] | Shared selectors, marker attribute, glyphs, and styling |

pub mod consts;
pub mod inject;
pub mod toggle;
