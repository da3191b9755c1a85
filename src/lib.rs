//! Image inspector overlay for web pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser as a page
//! content script. Hovering an `<img>` element shows a floating popup with
//! the image's metadata, either tracking the pointer ("follow" mode) or as a
//! stationary draggable/resizable panel ("fixed" mode). The popup is kept
//! inside the viewport at all times: follow-mode placement flips sides to
//! avoid overflowing the right/bottom edges and every position is clamped to
//! a margin.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`consts`] | Shared numeric constants (margins, gaps, minimum sizes) |
//! | [`geometry`] | Point/size/rect primitives in CSS pixels |
//! | [`position`] | Viewport clamping and follow-mode flip placement |
//! | [`settings`] | Typed settings model with serde defaults |
//! | [`storage`] | localStorage persistence for settings |
//! | [`info`] | Image metadata snapshot and popup content builders |
//! | [`input`] | Pointer gesture state machine (drag / resize) |
//! | [`engine`] | Testable [`engine::OverlayCore`] driving popup state |
//! | [`render`] | Popup DOM element creation and styling |
//! | [`dom`] | Reading image metadata and event targets from the page |
//! | [`bootstrap`] | WASM entry point and document event wiring |
//!
//! The `geometry`, `position`, `settings`, `info`, `input`, and `engine`
//! modules are pure and compile natively for unit testing; only `storage`,
//! `render`, `dom`, and `bootstrap` touch `web_sys`.

pub mod bootstrap;
pub mod consts;
pub mod dom;
pub mod engine;
pub mod geometry;
pub mod info;
pub mod input;
pub mod position;
pub mod render;
pub mod settings;
pub mod storage;
