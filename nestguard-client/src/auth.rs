use nestguard_shared::{
    config::GuardConfig,
    oauth::{RefreshTokenRequest, TokenResponse},
};
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::{
    error::{GuardError, Result},
    util::http::status_and_body,
};

/// Trades the long-lived refresh token for a fresh access token.
pub async fn refresh_access_token(client: &Client, config: &GuardConfig) -> Result<String> {
    let form = RefreshTokenRequest {
        client_id: &config.client_id,
        client_secret: &config.client_secret,
        refresh_token: &config.refresh_token,
        grant_type: "refresh_token",
    };

    debug!("POST {}", config.token_url);
    let res = client.post(&config.token_url).form(&form).send().await?;
    if res.status() != StatusCode::OK {
        let (status, body) = status_and_body(res).await;
        return Err(GuardError::Authentication { status, body });
    }

    let token: TokenResponse = res.json().await?;
    info!("Refreshed access token");
    Ok(token.access_token)
}
