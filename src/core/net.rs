// src/core/net.rs
//
// One-shot HTTPS GET for the published sheet export.
// No retry and no cache: every load asks the origin again.

use std::time::Duration;

use reqwest::{
    blocking::Client,
    header::{CACHE_CONTROL, PRAGMA},
    StatusCode,
};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{CatalogError, Result};

pub fn http_get(url: &str) -> Result<String> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    logd!("Net: GET {}", url);
    let resp = client
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()?;

    let status = resp.status();
    if let Err(e) = check_status(status) {
        loge!("Net: {} for {}", status, url);
        return Err(e);
    }

    let body = resp.text()?;
    logf!("Net: {} ({} bytes)", status, body.len());
    Ok(body)
}

/// Any non-2xx answer is a failed load; the body is never looked at.
pub fn check_status(status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(CatalogError::FailedToLoad)
    }
}
