//! Decides which thermostats need their cooling setpoint corrected.
//!
//! Only devices in `COOL` mode with a known `coolCelsius` are candidates.
//! At most one correction is produced per device. When the bounds overlap
//! (`min > max`) and the setpoint violates both, the min bound wins.

use std::collections::HashSet;
use std::fmt;

use nestguard_shared::{
    device::{Device, ThermostatMode},
    units::{to_celsius, to_fahrenheit},
};

use crate::error::{GuardError, Result};

/// Sentinel shown when the API does not report a value.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolicyBounds {
    min_f: Option<f64>,
    max_f: Option<f64>,
}

impl PolicyBounds {
    pub fn new(min_f: Option<f64>, max_f: Option<f64>) -> Result<Self> {
        for (flag, value) in [("--enforce-min", min_f), ("--enforce-max", max_f)] {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(GuardError::Config(format!("{flag} must be a finite number")));
            }
        }
        Ok(Self { min_f, max_f })
    }

    pub fn min_f(&self) -> Option<f64> {
        self.min_f
    }

    pub fn max_f(&self) -> Option<f64> {
        self.max_f
    }

    pub fn is_empty(&self) -> bool {
        self.min_f.is_none() && self.max_f.is_none()
    }
}

/// Exact-match set of thermostat names. Both sides are trimmed.
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    names: Option<HashSet<String>>,
}

impl NameFilter {
    /// No filter: every device matches.
    pub fn all() -> Self {
        Self { names: None }
    }

    /// Parses a comma separated list. Blank entries are dropped.
    pub fn parse(list: &str) -> Self {
        let names = list
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        Self { names: Some(names) }
    }

    pub fn matches(&self, custom_name: &str) -> bool {
        match &self.names {
            None => true,
            Some(names) => names.contains(custom_name.trim()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => f.write_str("min"),
            Bound::Max => f.write_str("max"),
        }
    }
}

/// Set the device to `target_celsius` because it violated `bound`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub bound: Bound,
    pub target_celsius: f64,
}

impl Correction {
    pub fn target_fahrenheit(&self) -> f64 {
        to_fahrenheit(self.target_celsius)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub status_line: String,
    pub corrections: Vec<Correction>,
}

pub fn status_line(device: &Device) -> String {
    let mode = device
        .mode()
        .map(|m| m.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());
    let setpoint = match device.cool_celsius() {
        Some(c) => format!("{:.1}°C ({:.1}°F)", c, to_fahrenheit(c)),
        None => UNKNOWN.to_string(),
    };
    format!("[{}] Mode: {}, Setpoint: {}", device.custom_name(), mode, setpoint)
}

pub fn evaluate(device: &Device, bounds: &PolicyBounds) -> Evaluation {
    let status_line = status_line(device);

    let setpoint_c = match (device.mode(), device.cool_celsius()) {
        (Some(ThermostatMode::Cool), Some(c)) => c,
        _ => {
            return Evaluation {
                status_line,
                corrections: Vec::new(),
            };
        }
    };
    let setpoint_f = to_fahrenheit(setpoint_c);

    let mut corrections = Vec::new();
    if let Some(min_f) = bounds.min_f.filter(|min_f| setpoint_f < *min_f) {
        corrections.push(Correction {
            bound: Bound::Min,
            target_celsius: to_celsius(min_f),
        });
    } else if let Some(max_f) = bounds.max_f.filter(|max_f| setpoint_f > *max_f) {
        corrections.push(Correction {
            bound: Bound::Max,
            target_celsius: to_celsius(max_f),
        });
    }

    Evaluation {
        status_line,
        corrections,
    }
}
