//! Reference host: a draggable, resizable card.
//!
//! The card owns the element geometry and is the placement sink for the
//! controller's actions. Its body doubles as a free-drag handle that moves the
//! card without resizing it. Resize handles and the body are disjoint targets,
//! so the two gestures never overlap in practice; if they ever do, whichever
//! action arrives last wins.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bounds::BoundsConfig;
use crate::controller::{Action, ResizeController};
use crate::geometry::{Geometry, Point};
use crate::handle::HandleId;

pub const DEFAULT_WIDTH: f64 = 300.0;
pub const DEFAULT_HEIGHT: f64 = 200.0;

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// One of the eight resize handles.
    Handle(HandleId),
    /// The card body (free-drag handle).
    Body,
    /// Anywhere else on the surface.
    Surface,
}

#[derive(Debug, Clone, Copy)]
struct FreeDrag {
    pointer_origin: Point,
    start_position: Point,
}

/// A card element with resize handles and a free-drag body.
#[derive(Debug)]
pub struct Card {
    geometry: Geometry,
    controller: ResizeController,
    drag: Option<FreeDrag>,
    destroyed: bool,
}

impl Default for Card {
    fn default() -> Self {
        Self::new(Geometry::new(0.0, 0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT), BoundsConfig::default())
    }
}

impl Card {
    #[must_use]
    pub fn new(geometry: Geometry, bounds: BoundsConfig) -> Self {
        Self { geometry, controller: ResizeController::new(bounds), drag: None, destroyed: false }
    }

    // --- Queries ---

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn controller(&self) -> &ResizeController {
        &self.controller
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Inline style placing the card and showing or hiding its handles.
    #[must_use]
    pub fn style(&self) -> String {
        let Geometry { position, size } = self.geometry;
        format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px;",
            position.x, position.y, size.width, size.height
        )
    }

    /// Inline style for every handle element.
    #[must_use]
    pub fn handle_style(&self) -> &'static str {
        if self.controller.handles_visible() { "display: block;" } else { "display: none;" }
    }

    // --- Configuration ---

    pub fn set_bounds(&mut self, bounds: BoundsConfig) {
        self.controller.set_bounds(bounds);
    }

    /// Flip `disabledResize`.
    pub fn toggle_resize(&mut self) {
        let disabled = !self.controller.bounds().disabled;
        self.controller.set_disabled(disabled);
        debug!(disabled, "card resize toggled");
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, target: Target, pointer: Point) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        match target {
            Target::Handle(handle) => {
                let actions = self.controller.on_pointer_down(handle, pointer, &self.geometry);
                self.apply(&actions);
                actions
            }
            Target::Body => {
                self.drag = Some(FreeDrag { pointer_origin: pointer, start_position: self.geometry.position });
                debug!(x = pointer.x, y = pointer.y, "card drag started");
                vec![Action::PreventDefault]
            }
            Target::Surface => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        if self.destroyed {
            return Vec::new();
        }
        let mut actions = self.controller.on_pointer_move(pointer);
        if let Some(drag) = self.drag {
            let delta = pointer.delta_from(drag.pointer_origin);
            let position = Point::new(drag.start_position.x + delta.x, drag.start_position.y + delta.y);
            actions.push(Action::PositionChanged(position));
        }
        self.apply(&actions);
        actions
    }

    pub fn on_pointer_up(&mut self, pointer: Point) {
        if self.destroyed {
            return;
        }
        self.controller.on_pointer_up(pointer);
        if self.drag.take().is_some() {
            debug!(x = self.geometry.position.x, y = self.geometry.position.y, "card drag ended");
        }
    }

    /// Tear down the resize controller. The card ignores input afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.controller.teardown();
        self.drag = None;
        self.destroyed = true;
    }

    fn apply(&mut self, actions: &[Action]) {
        for action in actions {
            match *action {
                Action::PositionChanged(position) => self.geometry.position = position,
                Action::SizeChanged(size) => self.geometry.size = size,
                Action::PreventDefault => {}
            }
        }
    }
}
