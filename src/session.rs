//! Snapshot taken when a handle drag begins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::geometry::{Edges, Geometry, Point};
use crate::handle::HandleDescriptor;

/// Start state for one continuous drag gesture on one handle.
///
/// Every move is computed from this snapshot and the current pointer, never
/// from the previous move's output, so dropped or reordered moves cannot drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub handle: &'static HandleDescriptor,
    /// Pointer position at pointer-down.
    pub pointer_origin: Point,
    /// Element rectangle at pointer-down.
    pub start_geometry: Geometry,
    /// Absolute sides of `start_geometry`.
    pub start_edges: Edges,
}

impl DragSession {
    #[must_use]
    pub fn begin(handle: &'static HandleDescriptor, pointer_origin: Point, start_geometry: Geometry) -> Self {
        Self { handle, pointer_origin, start_geometry, start_edges: start_geometry.edges() }
    }
}
