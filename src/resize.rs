//! Resize calculator: drag session + pointer + bounds -> new size and position.
//!
//! Pure and stateless. The output depends only on the session snapshot and the
//! pointer passed in, so a zero delta always reproduces the start geometry.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use crate::bounds::BoundsConfig;
use crate::geometry::{Geometry, Point, Size};
use crate::handle::Anchor;
use crate::session::DragSession;

/// One computed frame. Both fields are always present so the host never
/// applies a size without its matching position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resized {
    pub size: Size,
    pub position: Point,
}

impl Resized {
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry { position: self.position, size: self.size }
    }
}

/// Compute the element rectangle for `pointer` during `session`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn resize(session: &DragSession, pointer: Point, bounds: &BoundsConfig) -> Resized {
    let handle = session.handle;
    let start = session.start_geometry;
    let delta = pointer.delta_from(session.pointer_origin);

    let mut size = start.size;
    let mut position = start.position;

    if handle.axis.horizontal() {
        let raw = if handle.has_anchor(Anchor::Left) {
            Some(start.size.width - delta.x)
        } else if handle.has_anchor(Anchor::Right) {
            Some(start.size.width + delta.x)
        } else {
            None
        };
        if let Some(raw) = raw {
            size.width = clamp_dimension(raw, bounds.min_width, bounds.max_width);
        }
    }

    if handle.axis.vertical() {
        let raw = if handle.has_anchor(Anchor::Top) {
            Some(start.size.height - delta.y)
        } else if handle.has_anchor(Anchor::Bottom) {
            Some(start.size.height + delta.y)
        } else {
            None
        };
        if let Some(raw) = raw {
            size.height = clamp_dimension(raw, bounds.min_height, bounds.max_height);
        }
    }

    // Dragging left/top moves that side; the opposite side stays where it was.
    // An unchanged size keeps the start offset exactly, since `right - width`
    // does not always round-trip to `left` in floating point.
    if handle.has_anchor(Anchor::Left) && size.width != start.size.width {
        position.x = session.start_edges.right - size.width;
    }
    if handle.has_anchor(Anchor::Top) && size.height != start.size.height {
        position.y = session.start_edges.bottom - size.height;
    }

    Resized { size, position }
}

/// Snap `raw` onto `min` or `max` when it reaches either bound.
///
/// The minimum is checked first, so a misconfigured `min > max` pins to `min`.
#[must_use]
pub fn clamp_dimension(raw: f64, min: f64, max: Option<f64>) -> f64 {
    if raw <= min {
        return min;
    }
    match max {
        Some(max) if raw >= max => max,
        _ => raw,
    }
}
