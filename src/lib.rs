//! Presentation behaviors for the "modern" blog theme.
//!
//! This crate is compiled to WebAssembly and runs in the browser on every page
//! of the generated site. It owns the small amount of interactive chrome the
//! static markup cannot express on its own: the mobile menu, the light/dark
//! switch, the back-to-top button, smooth anchor scrolling, reveal-on-scroll,
//! card hover lift, table-of-contents repair and active-link highlighting.
//!
//! All behavior lives in [`page::PageBehaviors`], which talks to the document
//! only through the [`dom::Dom`] trait and to local storage only through
//! [`storage::PreferenceStore`]. The `hydrate` feature adds the `browser` module, the
//! web-sys implementation of both plus the event-listener wiring.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Orchestrator: install, ready phase, event dispatch |
//! | [`dom`] | Document interface, selectors, glyphs |
//! | [`memory`] | In-memory document tree |
//! | [`storage`] | Preference storage capability |
//! | [`config`] | Tunables with serde defaults |
//! | [`consts`] | Element ids, class names, pixel constants |
//! | [`nav`] | Mobile navigation toggle |
//! | [`toc`] | Table-of-contents list repair |
//! | [`anchor`] | Smooth in-page anchor scrolling |
//! | [`back_to_top`] | Floating back-to-top button |
//! | [`theme`] | Light/dark mode, palettes, persistence |
//! | [`hover`] | Card hover lift |
//! | [`reveal`] | Reveal-on-scroll |
//! | [`highlight`] | Active nav link from scroll position |

pub mod anchor;
pub mod back_to_top;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod config;
pub mod consts;
pub mod dom;
pub mod highlight;
pub mod hover;
pub mod memory;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod toc;
