use serde::{Deserialize, Serialize};

pub const SET_COOL_COMMAND: &str = "sdm.devices.commands.ThermostatTemperatureSetpoint.SetCool";

/// Body of `POST {device}:executeCommand`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExecuteCommandBody<P> {
    pub command: String,
    pub params: P,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetCoolParams {
    pub cool_celsius: f64,
}

impl ExecuteCommandBody<SetCoolParams> {
    pub fn set_cool(cool_celsius: f64) -> Self {
        Self {
            command: SET_COOL_COMMAND.to_string(),
            params: SetCoolParams { cool_celsius },
        }
    }
}
