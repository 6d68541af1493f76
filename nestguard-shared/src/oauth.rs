use serde::{Deserialize, Serialize};

/// Form body for the `refresh_token` grant.
#[derive(Serialize)]
pub struct RefreshTokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub refresh_token: &'a str,
    pub grant_type: &'static str,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenResponse {
    pub access_token: String,
}
