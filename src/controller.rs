//! Interaction controller: pointer events in, placement actions out.
//!
//! Each handle runs its own `Idle -> Dragging -> Idle` state machine. A
//! handle's pointer-down listener stays armed for the controller's whole life;
//! the surface-wide move/up listeners exist only while that handle is dragging.
//! The controller never touches the element. It returns [`Action`]s and the
//! host applies them.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use tracing::{debug, info, trace};

use crate::bounds::BoundsConfig;
use crate::geometry::{Geometry, Point, Size};
use crate::handle::{HANDLES, HandleDescriptor, HandleId};
use crate::resize::{Resized, resize};
use crate::session::DragSession;

/// Work for the host to carry out after an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Suppress the pointer event's default behaviour (text selection, native drag).
    PreventDefault,
    /// New top-left offset for the element.
    PositionChanged(Point),
    /// New box dimensions for the element.
    SizeChanged(Size),
}

/// Supplies the element's live rectangle at the moment a drag starts.
pub trait GeometrySource {
    fn current_geometry(&self) -> Geometry;
}

impl<F> GeometrySource for F
where
    F: Fn() -> Geometry,
{
    fn current_geometry(&self) -> Geometry {
        self()
    }
}

impl GeometrySource for Geometry {
    fn current_geometry(&self) -> Geometry {
        *self
    }
}

/// Per-handle gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HandleState {
    /// Waiting for pointer-down on the handle.
    #[default]
    Idle,
    /// Tracking the surface until pointer-up.
    Dragging(DragSession),
}

/// A subscription the controller currently holds on the host's event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    /// Pointer-down on the handle element.
    Down(HandleId),
    /// Pointer-move on the surface, owned by the handle's session.
    Move(HandleId),
    /// Pointer-up on the surface, owned by the handle's session.
    Up(HandleId),
}

#[derive(Debug)]
struct HandleSlot {
    descriptor: &'static HandleDescriptor,
    armed: bool,
    state: HandleState,
}

/// Drives resize sessions for one host element.
#[derive(Debug)]
pub struct ResizeController {
    slots: Vec<HandleSlot>,
    bounds: BoundsConfig,
    torn_down: bool,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(BoundsConfig::default())
    }
}

impl ResizeController {
    /// Arm a pointer-down listener on every registered handle.
    #[must_use]
    pub fn new(bounds: BoundsConfig) -> Self {
        let slots = HANDLES
            .iter()
            .map(|descriptor| HandleSlot { descriptor, armed: true, state: HandleState::Idle })
            .collect();
        Self { slots, bounds, torn_down: false }
    }

    // --- Configuration ---

    #[must_use]
    pub fn bounds(&self) -> &BoundsConfig {
        &self.bounds
    }

    /// Replace the bounds. Takes effect from the next pointer-move.
    pub fn set_bounds(&mut self, bounds: BoundsConfig) {
        self.bounds = bounds;
    }

    /// Show or hide the handles. An in-flight drag keeps running.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.bounds.disabled = disabled;
    }

    /// Whether the host should render the handle elements. All eight share
    /// one visibility switch.
    #[must_use]
    pub fn handles_visible(&self) -> bool {
        self.bounds.enabled() && !self.torn_down
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self, handle: HandleId) -> HandleState {
        self.slot(handle).map_or(HandleState::Idle, |s| s.state)
    }

    #[must_use]
    pub fn session(&self, handle: HandleId) -> Option<&DragSession> {
        match self.slot(handle).map(|s| &s.state) {
            Some(HandleState::Dragging(session)) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.slots.iter().any(|s| matches!(s.state, HandleState::Dragging(_)))
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Every listener currently subscribed, in registry order.
    #[must_use]
    pub fn active_listeners(&self) -> Vec<Listener> {
        let mut out = Vec::new();
        for slot in &self.slots {
            let id = slot.descriptor.id;
            if slot.armed {
                out.push(Listener::Down(id));
            }
            if matches!(slot.state, HandleState::Dragging(_)) {
                out.push(Listener::Move(id));
                out.push(Listener::Up(id));
            }
        }
        out
    }

    // --- Input events ---

    /// Pointer pressed on `handle`. Opens a session from the source's geometry.
    pub fn on_pointer_down(&mut self, handle: HandleId, pointer: Point, source: &dyn GeometrySource) -> Vec<Action> {
        if self.torn_down {
            debug!(handle = handle.name(), "pointer-down after teardown ignored");
            return Vec::new();
        }
        if !self.bounds.enabled() {
            debug!(handle = handle.name(), "pointer-down on hidden handle ignored");
            return Vec::new();
        }
        let Some(slot) = self.slot_mut(handle) else {
            return Vec::new();
        };
        if !slot.armed {
            return Vec::new();
        }
        if matches!(slot.state, HandleState::Dragging(_)) {
            debug!(handle = handle.name(), "pointer-down while already dragging ignored");
            return vec![Action::PreventDefault];
        }

        let start = source.current_geometry();
        let session = DragSession::begin(slot.descriptor, pointer, start);
        slot.state = HandleState::Dragging(session);
        debug!(
            handle = handle.name(),
            x = start.position.x,
            y = start.position.y,
            width = start.size.width,
            height = start.size.height,
            "resize session opened"
        );
        vec![Action::PreventDefault]
    }

    /// Pointer moved anywhere on the surface.
    ///
    /// Each dragging handle emits a position and a size, always as a pair.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        if self.torn_down {
            return Vec::new();
        }
        let mut actions = Vec::new();
        for slot in &self.slots {
            let HandleState::Dragging(session) = &slot.state else {
                continue;
            };
            let Resized { size, position } = resize(session, pointer, &self.bounds);
            trace!(
                handle = slot.descriptor.id.name(),
                x = position.x,
                y = position.y,
                width = size.width,
                height = size.height,
                "resize move"
            );
            if actions.is_empty() {
                actions.push(Action::PreventDefault);
            }
            actions.push(Action::PositionChanged(position));
            actions.push(Action::SizeChanged(size));
        }
        if actions.is_empty() {
            trace!(x = pointer.x, y = pointer.y, "pointer-move with no open session ignored");
        }
        actions
    }

    /// Pointer released anywhere on the surface. Returns the handles whose
    /// sessions closed.
    pub fn on_pointer_up(&mut self, pointer: Point) -> Vec<HandleId> {
        if self.torn_down {
            return Vec::new();
        }
        let mut closed = Vec::new();
        for slot in &mut self.slots {
            if matches!(slot.state, HandleState::Dragging(_)) {
                slot.state = HandleState::Idle;
                closed.push(slot.descriptor.id);
                debug!(handle = slot.descriptor.id.name(), x = pointer.x, y = pointer.y, "resize session closed");
            }
        }
        closed
    }

    /// Release every listener. Later calls are no-ops and return 0.
    pub fn teardown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        let released = self.active_listeners().len();
        for slot in &mut self.slots {
            slot.armed = false;
            slot.state = HandleState::Idle;
        }
        self.torn_down = true;
        info!(released, "resize controller torn down");
        released
    }

    fn slot(&self, handle: HandleId) -> Option<&HandleSlot> {
        self.slots.iter().find(|s| s.descriptor.id == handle)
    }

    fn slot_mut(&mut self, handle: HandleId) -> Option<&mut HandleSlot> {
        self.slots.iter_mut().find(|s| s.descriptor.id == handle)
    }
}
