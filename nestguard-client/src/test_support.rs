use nestguard_shared::config::GuardConfig;

/// Config pointing every endpoint at a mock server.
pub fn test_config(base: &str) -> GuardConfig {
    serde_json::from_value(serde_json::json!({
        "project_id": "enterprises/test-project",
        "client_id": "client-id",
        "client_secret": "client-secret",
        "refresh_token": "refresh-token",
        "api_url": format!("{base}/v1"),
        "token_url": format!("{base}/token"),
        "datadog_url": format!("{base}/v1/input"),
    }))
    .unwrap()
}

/// Same as [`test_config`] with telemetry enabled.
pub fn test_config_with_datadog(base: &str) -> GuardConfig {
    let mut config = test_config(base);
    config.datadog_api_key = Some("dd-key".to_string());
    config
}

pub fn thermostat(id: &str, name: &str, mode: &str, cool_celsius: Option<f64>) -> serde_json::Value {
    let mut traits = serde_json::json!({
        "sdm.devices.traits.Info": {"customName": name},
        "sdm.devices.traits.ThermostatMode": {"mode": mode},
    });
    if let Some(c) = cool_celsius {
        traits["sdm.devices.traits.ThermostatTemperatureSetpoint"] =
            serde_json::json!({"coolCelsius": c});
    }
    serde_json::json!({
        "name": format!("enterprises/test-project/devices/{id}"),
        "type": "sdm.devices.types.THERMOSTAT",
        "traits": traits,
    })
}
