use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Response of `GET .../devices`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ListDevicesResponse {
    #[serde(default)]
    pub devices: Vec<Device>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Device {
    /// Resource name, e.g. `enterprises/<project>/devices/<id>`.
    pub name: String,
    #[serde(default)]
    pub traits: DeviceTraits,
}

/// Trait groups we read. Groups not listed here are ignored.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeviceTraits {
    #[serde(default, rename = "sdm.devices.traits.Info")]
    pub info: Option<InfoTrait>,
    #[serde(default, rename = "sdm.devices.traits.ThermostatMode")]
    pub thermostat_mode: Option<ThermostatModeTrait>,
    #[serde(default, rename = "sdm.devices.traits.ThermostatTemperatureSetpoint")]
    pub temperature_setpoint: Option<TemperatureSetpointTrait>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct InfoTrait {
    #[serde(default)]
    pub custom_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThermostatModeTrait {
    #[serde(default)]
    pub mode: Option<ThermostatMode>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureSetpointTrait {
    #[serde(default)]
    pub cool_celsius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThermostatMode {
    Heat,
    Cool,
    HeatCool,
    Off,
    /// Anything the API reports that we do not know about.
    Other(String),
}

impl ThermostatMode {
    pub fn as_str(&self) -> &str {
        match self {
            ThermostatMode::Heat => "HEAT",
            ThermostatMode::Cool => "COOL",
            ThermostatMode::HeatCool => "HEATCOOL",
            ThermostatMode::Off => "OFF",
            ThermostatMode::Other(s) => s,
        }
    }
}

impl From<&str> for ThermostatMode {
    fn from(s: &str) -> Self {
        match s {
            "HEAT" => ThermostatMode::Heat,
            "COOL" => ThermostatMode::Cool,
            "HEATCOOL" => ThermostatMode::HeatCool,
            "OFF" => ThermostatMode::Off,
            other => ThermostatMode::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ThermostatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThermostatMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ThermostatMode::from(s.as_str()))
    }
}

impl Serialize for ThermostatMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl Device {
    /// Display name with surrounding whitespace removed; empty when unset.
    pub fn custom_name(&self) -> &str {
        self.traits
            .info
            .as_ref()
            .and_then(|i| i.custom_name.as_deref())
            .map(str::trim)
            .unwrap_or("")
    }

    pub fn mode(&self) -> Option<&ThermostatMode> {
        self.traits
            .thermostat_mode
            .as_ref()
            .and_then(|m| m.mode.as_ref())
    }

    pub fn cool_celsius(&self) -> Option<f64> {
        self.traits
            .temperature_setpoint
            .as_ref()
            .and_then(|s| s.cool_celsius)
    }
}
