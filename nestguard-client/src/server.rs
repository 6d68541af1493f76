use nestguard_shared::{
    command::ExecuteCommandBody,
    config::GuardConfig,
    device::{Device, ListDevicesResponse},
};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::{
    error::{GuardError, Result},
    util::http::status_and_body,
};

pub async fn list_devices(
    client: &Client,
    config: &GuardConfig,
    token: &str,
) -> Result<Vec<Device>> {
    let url = format!(
        "{}/{}/devices",
        config.api_url.trim_end_matches('/'),
        config.enterprise_path()
    );

    debug!("GET {}", url);
    let res = client.get(&url).bearer_auth(token).send().await?;
    if res.status() != StatusCode::OK {
        let (status, body) = status_and_body(res).await;
        return Err(GuardError::Api { status, body });
    }

    let response: ListDevicesResponse = res.json().await?;
    Ok(response.devices)
}

/// Sends `SetCool` for one device. `device_name` is the full resource name.
pub async fn set_cool_setpoint(
    client: &Client,
    config: &GuardConfig,
    token: &str,
    device_name: &str,
    cool_celsius: f64,
) -> Result<()> {
    let url = format!(
        "{}/{}:executeCommand",
        config.api_url.trim_end_matches('/'),
        device_name
    );

    debug!("POST {} coolCelsius={}", url, cool_celsius);
    let res = client
        .post(&url)
        .bearer_auth(token)
        .json(&ExecuteCommandBody::set_cool(cool_celsius))
        .send()
        .await?;
    if res.status() != StatusCode::OK {
        let (status, body) = status_and_body(res).await;
        return Err(GuardError::Command {
            device: device_name.to_string(),
            status,
            body,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_config, thermostat};
    use crate::util::http::get_client;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_devices_uses_bearer_token() {
        let mut server = Server::new_async().await;
        let body = json!({"devices": [
            thermostat("a", "Office", "COOL", Some(18.0)),
            thermostat("b", "Kitchen", "HEAT", None),
        ]});
        let mock = server
            .mock("GET", "/v1/enterprises/test-project/devices")
            .match_header("authorization", "Bearer tok")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = get_client().unwrap();
        let devices = list_devices(&client, &test_config(&server.url()), "tok")
            .await
            .unwrap();

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].custom_name(), "Office");
        assert_eq!(devices[1].cool_celsius(), None);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_devices_empty_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/enterprises/test-project/devices")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = get_client().unwrap();
        let devices = list_devices(&client, &test_config(&server.url()), "tok")
            .await
            .unwrap();
        assert!(devices.is_empty());
    }

    #[tokio::test]
    async fn test_list_devices_non_200_is_api_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/enterprises/test-project/devices")
            .with_status(403)
            .with_body("permission denied")
            .create_async()
            .await;

        let client = get_client().unwrap();
        let err = list_devices(&client, &test_config(&server.url()), "tok")
            .await
            .unwrap_err();
        match err {
            GuardError::Api { status, body } => {
                assert_eq!(status, StatusCode::FORBIDDEN);
                assert_eq!(body, "permission denied");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_set_cool_posts_command() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/v1/enterprises/test-project/devices/a:executeCommand",
            )
            .match_header("authorization", "Bearer tok")
            .match_body(Matcher::Json(json!({
                "command": "sdm.devices.commands.ThermostatTemperatureSetpoint.SetCool",
                "params": {"coolCelsius": 20.0}
            })))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = get_client().unwrap();
        set_cool_setpoint(
            &client,
            &test_config(&server.url()),
            "tok",
            "enterprises/test-project/devices/a",
            20.0,
        )
        .await
        .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_cool_non_200_is_command_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/v1/enterprises/test-project/devices/a:executeCommand",
            )
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = get_client().unwrap();
        let err = set_cool_setpoint(
            &client,
            &test_config(&server.url()),
            "tok",
            "enterprises/test-project/devices/a",
            20.0,
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            GuardError::Command { status: StatusCode::INTERNAL_SERVER_ERROR, .. }
        ));
    }
}
