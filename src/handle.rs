//! The eight resize handles and their anchoring.
//!
//! An anchor names the edge a handle drags. The edge opposite each anchor is
//! the one that stays put: the `Right` handle moves the right edge and keeps
//! the left edge fixed, `TopLeft` moves top and left and keeps bottom and right.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use serde::{Deserialize, Serialize};

/// An element side a handle can drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Left,
    Bottom,
    Right,
}

/// Which dimensions a handle changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Width only.
    Horizontal,
    /// Height only.
    Vertical,
    /// Width and height.
    Both,
}

impl Axis {
    #[must_use]
    pub fn horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    #[must_use]
    pub fn vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// Identity of a handle element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HandleId {
    Right,
    Left,
    Bottom,
    Top,
    BottomRight,
    TopLeft,
    BottomLeft,
    TopRight,
}

impl HandleId {
    /// Registry entry for this handle.
    #[must_use]
    pub fn descriptor(self) -> &'static HandleDescriptor {
        let idx = match self {
            Self::Right => 0,
            Self::Left => 1,
            Self::Bottom => 2,
            Self::Top => 3,
            Self::BottomRight => 4,
            Self::TopLeft => 5,
            Self::BottomLeft => 6,
            Self::TopRight => 7,
        };
        &HANDLES[idx]
    }

    /// Kebab-case name, e.g. `"bottom-right"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::BottomRight => "bottom-right",
            Self::TopLeft => "top-left",
            Self::BottomLeft => "bottom-left",
            Self::TopRight => "top-right",
        }
    }

    /// Styling class the host puts on the handle element.
    ///
    /// Edge handles render as lines, corner handles as squares.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Right => "resize-line__right",
            Self::Left => "resize-line__left",
            Self::Bottom => "resize-line__bottom",
            Self::Top => "resize-line__top",
            Self::BottomRight => "resize-square__bottom-right",
            Self::TopLeft => "resize-square__top-left",
            Self::BottomLeft => "resize-square__bottom-left",
            Self::TopRight => "resize-square__top-right",
        }
    }

    /// Look up a handle by kebab-case name or by class name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        HANDLES
            .iter()
            .map(|h| h.id)
            .find(|id| id.name() == name || id.class_name() == name)
    }
}

/// Static description of one handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleDescriptor {
    pub id: HandleId,
    /// One anchor for edge handles, two for corners.
    pub anchors: &'static [Anchor],
    pub axis: Axis,
}

impl HandleDescriptor {
    #[must_use]
    pub fn has_anchor(&self, anchor: Anchor) -> bool {
        self.anchors.contains(&anchor)
    }
}

/// Every handle, in the order the host instantiates them.
pub static HANDLES: [HandleDescriptor; 8] = [
    HandleDescriptor { id: HandleId::Right, anchors: &[Anchor::Right], axis: Axis::Horizontal },
    HandleDescriptor { id: HandleId::Left, anchors: &[Anchor::Left], axis: Axis::Horizontal },
    HandleDescriptor { id: HandleId::Bottom, anchors: &[Anchor::Bottom], axis: Axis::Vertical },
    HandleDescriptor { id: HandleId::Top, anchors: &[Anchor::Top], axis: Axis::Vertical },
    HandleDescriptor { id: HandleId::BottomRight, anchors: &[Anchor::Bottom, Anchor::Right], axis: Axis::Both },
    HandleDescriptor { id: HandleId::TopLeft, anchors: &[Anchor::Top, Anchor::Left], axis: Axis::Both },
    HandleDescriptor { id: HandleId::BottomLeft, anchors: &[Anchor::Bottom, Anchor::Left], axis: Axis::Both },
    HandleDescriptor { id: HandleId::TopRight, anchors: &[Anchor::Top, Anchor::Right], axis: Axis::Both },
];
