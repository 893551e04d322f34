//! Size bounds and the resize on/off switch.
//!
//! `BoundsConfig` is owned by the host and read on every pointer move, so a
//! change made mid-drag applies from the next move onward. Field names on the
//! wire follow the host-facing inputs (`minWidthResize`, `disabledResize`, ...).

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use std::env::VarError;

use serde::{Deserialize, Serialize};

pub const ENV_MIN_WIDTH: &str = "RESIZE_MIN_WIDTH";
pub const ENV_MAX_WIDTH: &str = "RESIZE_MAX_WIDTH";
pub const ENV_MIN_HEIGHT: &str = "RESIZE_MIN_HEIGHT";
pub const ENV_MAX_HEIGHT: &str = "RESIZE_MAX_HEIGHT";
pub const ENV_DISABLED: &str = "RESIZE_DISABLED";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a finite number: {value:?}")]
    InvalidNumber { var: String, value: String },
    #[error("{var} is not a boolean: {value:?}")]
    InvalidBool { var: String, value: String },
    #[error("{var} contains non-unicode data")]
    NotUnicode { var: String },
    #[error("{field} must be >= 0, got {value}")]
    NegativeMinimum { field: &'static str, value: f64 },
    #[error("{field} must be >= 0, got {value}")]
    NegativeMaximum { field: &'static str, value: f64 },
    #[error("invalid bounds JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimum/maximum size constraints plus the disabled flag.
///
/// A `None` maximum means unbounded. `min > max` is not rejected; the
/// calculator checks the minimum first so the result pins to it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    #[serde(rename = "minWidthResize")]
    pub min_width: f64,
    #[serde(rename = "maxWidthResize")]
    pub max_width: Option<f64>,
    #[serde(rename = "minHeightResize")]
    pub min_height: f64,
    #[serde(rename = "maxHeightResize")]
    pub max_height: Option<f64>,
    /// Hides the handles. Does not cancel a drag already in progress.
    #[serde(rename = "disabledResize")]
    pub disabled: bool,
}

impl BoundsConfig {
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Build bounds from environment variables.
    ///
    /// Optional (all default to unconstrained):
    /// - `RESIZE_MIN_WIDTH`, `RESIZE_MIN_HEIGHT`: default 0
    /// - `RESIZE_MAX_WIDTH`, `RESIZE_MAX_HEIGHT`: unset or empty means unbounded
    /// - `RESIZE_DISABLED`: `true`/`false`/`1`/`0`, default false
    pub fn from_env() -> Result<Self, ConfigError> {
        let bounds = Self {
            min_width: env_f64(ENV_MIN_WIDTH)?.unwrap_or(0.0),
            max_width: env_f64(ENV_MAX_WIDTH)?,
            min_height: env_f64(ENV_MIN_HEIGHT)?.unwrap_or(0.0),
            max_height: env_f64(ENV_MAX_HEIGHT)?,
            disabled: env_bool(ENV_DISABLED)?.unwrap_or(false),
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Parse bounds from the host's JSON input object.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let bounds: Self = serde_json::from_str(raw)?;
        bounds.validate()?;
        Ok(bounds)
    }

    /// Reject negative minimums and maximums. Ordering between min and max is
    /// left alone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width < 0.0 {
            return Err(ConfigError::NegativeMinimum { field: "minWidthResize", value: self.min_width });
        }
        if self.min_height < 0.0 {
            return Err(ConfigError::NegativeMinimum { field: "minHeightResize", value: self.min_height });
        }
        if let Some(max) = self.max_width.filter(|m| *m < 0.0) {
            return Err(ConfigError::NegativeMaximum { field: "maxWidthResize", value: max });
        }
        if let Some(max) = self.max_height.filter(|m| *m < 0.0) {
            return Err(ConfigError::NegativeMaximum { field: "maxHeightResize", value: max });
        }
        Ok(())
    }
}

fn env_raw(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if v.trim().is_empty() => Ok(None),
        Ok(v) => Ok(Some(v.trim().to_string())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var: key.into() }),
    }
}

fn env_f64(key: &str) -> Result<Option<f64>, ConfigError> {
    let Some(raw) = env_raw(key)? else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(ConfigError::InvalidNumber { var: key.into(), value: raw }),
    }
}

fn env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = env_raw(key)? else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(Some(true)),
        "false" | "0" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidBool { var: key.into(), value: raw }),
    }
}
