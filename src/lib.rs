//! Handle-driven resize engine for rectangular UI elements.
//!
//! A host element exposes eight resize handles (four edges, four corners).
//! Dragging a handle moves the matching side(s) while the opposite side stays
//! fixed, subject to configurable minimum and maximum sizes. The crate never
//! renders anything: the host feeds pointer events in and applies the returned
//! [`controller::Action`]s to its own element.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`handle`] | The eight handles, their anchors and axes |
//! | [`geometry`] | Point, size, rectangle and edge types |
//! | [`bounds`] | Min/max size bounds and the disabled switch |
//! | [`session`] | Start-of-drag snapshot |
//! | [`resize`] | Pure resize calculator |
//! | [`controller`] | Per-handle `Idle`/`Dragging` state machine |
//! | [`card`] | Reference host with free-drag body |
//! | [`script`] | JSON pointer-trace replay |

pub mod bounds;
pub mod card;
pub mod controller;
pub mod geometry;
pub mod handle;
pub mod resize;
pub mod script;
pub mod session;
