//! Scripted pointer traces replayed against a [`Card`].
//!
//! A script is JSON:
//!
//! ```json
//! {
//!   "bounds": { "minWidthResize": 100, "maxWidthResize": 400 },
//!   "start": { "position": { "x": 0, "y": 0 }, "size": { "width": 300, "height": 200 } },
//!   "events": [
//!     { "type": "down", "target": "right", "x": 300, "y": 100 },
//!     { "type": "move", "x": 450, "y": 100 },
//!     { "type": "up", "x": 450, "y": 100 }
//!   ]
//! }
//! ```
//!
//! `target` accepts a handle name (`bottom-right`), a handle class name
//! (`resize-square__bottom-right`), `body`, or `surface` (the default).

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::bounds::{BoundsConfig, ConfigError};
use crate::card::{Card, DEFAULT_HEIGHT, DEFAULT_WIDTH, Target};
use crate::geometry::{Geometry, Point};
use crate::handle::HandleId;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid script JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event {index}: unknown target `{target}`")]
    UnknownTarget { index: usize, target: String },
    #[error("invalid bounds: {0}")]
    Config(#[from] ConfigError),
}

/// One pointer event in a script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    Down {
        #[serde(default)]
        target: Option<String>,
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
    },
}

impl ScriptEvent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Down { .. } => "down",
            Self::Move { .. } => "move",
            Self::Up { .. } => "up",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub bounds: Option<BoundsConfig>,
    #[serde(default)]
    pub start: Option<Geometry>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// Card state after one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub index: usize,
    pub event: String,
    pub geometry: Geometry,
    pub resizing: bool,
    pub dragging: bool,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, ScriptError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_str(raw)?;
        if let Some(bounds) = &script.bounds {
            bounds.validate()?;
        }
        Ok(script)
    }

    /// Replay every event, returning the card state after each one.
    ///
    /// `bounds_override` replaces the script's own bounds when given.
    pub fn replay(&self, bounds_override: Option<BoundsConfig>) -> Result<Vec<Frame>, ScriptError> {
        let bounds = bounds_override.or(self.bounds).unwrap_or_default();
        let start = self.start.unwrap_or(Geometry::new(0.0, 0.0, DEFAULT_WIDTH, DEFAULT_HEIGHT));
        let mut card = Card::new(start, bounds);

        let mut frames = Vec::with_capacity(self.events.len());
        for (index, event) in self.events.iter().enumerate() {
            match event {
                ScriptEvent::Down { target, x, y } => {
                    let target = resolve_target(index, target.as_deref())?;
                    card.on_pointer_down(target, Point::new(*x, *y));
                }
                ScriptEvent::Move { x, y } => {
                    card.on_pointer_move(Point::new(*x, *y));
                }
                ScriptEvent::Up { x, y } => card.on_pointer_up(Point::new(*x, *y)),
            }
            frames.push(Frame {
                index,
                event: event.kind().to_string(),
                geometry: card.geometry(),
                resizing: card.controller().is_dragging(),
                dragging: card.is_dragging(),
            });
        }
        card.destroy();
        info!(events = frames.len(), "script replayed");
        Ok(frames)
    }
}

fn resolve_target(index: usize, raw: Option<&str>) -> Result<Target, ScriptError> {
    match raw {
        None | Some("surface") => Ok(Target::Surface),
        Some("body") => Ok(Target::Body),
        Some(name) => HandleId::from_name(name)
            .map(Target::Handle)
            .ok_or_else(|| ScriptError::UnknownTarget { index, target: name.to_string() }),
    }
}
