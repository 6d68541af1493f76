use reqwest::{Client, Response, StatusCode};

use crate::error::Result;

pub fn get_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("nestguard/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Splits a response into its status and body text for error reporting.
pub async fn status_and_body(res: Response) -> (StatusCode, String) {
    let status = res.status();
    let body = res.text().await.unwrap_or_default();
    (status, body)
}
